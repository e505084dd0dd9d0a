use serde::{Deserialize, Serialize};

// ============================================================================
// Statuses
// ============================================================================

/// Order fulfilment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }
}

/// Payment state of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
    Failed,
}

impl PaymentStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Refunded => "Refunded",
            PaymentStatus::Failed => "Failed",
        }
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    /// Human-facing number, e.g. "ORD-2025-0042"
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total_amount: f64,
    #[serde(default)]
    pub item_count: u32,
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
    /// ISO-8601 timestamp as sent by the backend
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "id": 7,
            "orderNumber": "ORD-2025-0007",
            "customerName": "John Doe",
            "customerEmail": "john@example.com",
            "totalAmount": 149.9,
            "orderStatus": "Processing",
            "paymentStatus": "Paid",
            "createdAt": "2025-03-15T14:02:26Z"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 7);
        assert_eq!(order.item_count, 0);
        assert_eq!(order.order_status, OrderStatus::Processing);
        assert_eq!(order.payment_status.display_name(), "Paid");
    }
}
