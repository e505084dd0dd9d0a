use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnStatus {
    Requested,
    Approved,
    Rejected,
    Refunded,
}

impl ReturnStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ReturnStatus::Requested => "Requested",
            ReturnStatus::Approved => "Approved",
            ReturnStatus::Rejected => "Rejected",
            ReturnStatus::Refunded => "Refunded",
        }
    }

    pub fn all() -> Vec<ReturnStatus> {
        vec![
            ReturnStatus::Requested,
            ReturnStatus::Approved,
            ReturnStatus::Rejected,
            ReturnStatus::Refunded,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    pub id: i64,
    pub order_number: String,
    #[serde(default)]
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub refund_amount: f64,
    pub status: ReturnStatus,
    pub requested_at: String,
}
