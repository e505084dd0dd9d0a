use contracts::domain::a001_order::aggregate::{Order, OrderStatus, PaymentStatus};
use std::borrow::Cow;

use crate::shared::collection_page::TableColumn;
use crate::shared::collection_view::{Categorized, Identified, Searchable, SortValue, Sortable};
use crate::shared::components::table::{format_int, format_money};
use crate::shared::components::ui::Tone;
use crate::shared::date_utils::format_datetime;

pub const ENTITY: &str = "orders";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    OrderNumber,
    Customer,
    Items,
    Total,
    Status,
    Payment,
    CreatedAt,
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.order_number.as_str()),
            Cow::Borrowed(self.customer_name.as_str()),
            Cow::Borrowed(self.customer_email.as_str()),
        ]
    }
}

impl Sortable for Order {
    type Field = OrderField;

    fn sort_value(&self, field: OrderField) -> SortValue<'_> {
        match field {
            OrderField::OrderNumber => SortValue::text(&self.order_number),
            OrderField::Customer => SortValue::text(&self.customer_name),
            OrderField::Items => SortValue::number(self.item_count),
            OrderField::Total => SortValue::number(self.total_amount),
            OrderField::Status => SortValue::text(self.order_status.display_name()),
            OrderField::Payment => SortValue::text(self.payment_status.display_name()),
            OrderField::CreatedAt => SortValue::date(&self.created_at),
        }
    }
}

impl Categorized for Order {
    type Category = OrderStatus;

    fn category(&self) -> Option<OrderStatus> {
        Some(self.order_status)
    }

    fn transition_to(&mut self, status: OrderStatus) -> bool {
        self.order_status = status;
        true
    }
}

impl Identified for Order {
    type Id = i64;

    fn record_id(&self) -> i64 {
        self.id
    }
}

pub fn status_tone(status: OrderStatus) -> Tone {
    match status {
        OrderStatus::Pending => Tone::Warning,
        OrderStatus::Processing => Tone::Info,
        OrderStatus::Shipped => Tone::Info,
        OrderStatus::Delivered => Tone::Success,
        OrderStatus::Cancelled => Tone::Danger,
    }
}

pub fn payment_tone(status: PaymentStatus) -> Tone {
    match status {
        PaymentStatus::Paid => Tone::Success,
        PaymentStatus::Pending => Tone::Warning,
        PaymentStatus::Refunded => Tone::Neutral,
        PaymentStatus::Failed => Tone::Danger,
    }
}

pub fn status_options() -> Vec<(OrderStatus, &'static str)> {
    OrderStatus::all()
        .into_iter()
        .map(|s| (s, s.display_name()))
        .collect()
}

pub fn table_columns() -> Vec<TableColumn<Order>> {
    vec![
        TableColumn::new("Order #", |o: &Order| o.order_number.clone())
            .sortable(OrderField::OrderNumber)
            .searchable(),
        TableColumn::new("Customer", |o: &Order| o.customer_name.clone())
            .sortable(OrderField::Customer)
            .searchable(),
        TableColumn::new("Email", |o: &Order| o.customer_email.clone()).searchable(),
        TableColumn::new("Items", |o: &Order| format_int(o.item_count))
            .sortable(OrderField::Items)
            .numeric(),
        TableColumn::new("Total", |o: &Order| format_money(o.total_amount))
            .sortable(OrderField::Total)
            .numeric(),
        TableColumn::new("Status", |o: &Order| o.order_status.display_name().to_string())
            .sortable(OrderField::Status)
            .badge(|o| status_tone(o.order_status)),
        TableColumn::new("Payment", |o: &Order| o.payment_status.display_name().to_string())
            .sortable(OrderField::Payment)
            .badge(|o| payment_tone(o.payment_status)),
        TableColumn::new("Created", |o: &Order| format_datetime(&o.created_at))
            .sortable(OrderField::CreatedAt),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::ApiError;
    use crate::shared::collection_view::{
        ListController, ListError, ListEvent, ListSettings, ListState, DiscreteFilter,
    };
    use contracts::shared::SortDirection;

    fn order(id: i64, customer: &str, total: f64, status: OrderStatus) -> Order {
        Order {
            id,
            order_number: format!("ORD-2025-{:04}", id),
            customer_name: customer.to_string(),
            customer_email: format!("{}@example.com", customer.to_lowercase().replace(' ', ".")),
            total_amount: total,
            item_count: 1,
            order_status: status,
            payment_status: PaymentStatus::Paid,
            created_at: format!("2025-03-{:02}T10:00:00Z", id),
        }
    }

    fn orders() -> Vec<Order> {
        (1..=9)
            .map(|id| {
                let status = if id % 3 == 0 {
                    OrderStatus::Shipped
                } else {
                    OrderStatus::Processing
                };
                order(id, &format!("Customer {}", id), id as f64 * 25.0, status)
            })
            .collect()
    }

    fn controller() -> ListController<Order> {
        let mut state = ListState::new(
            OrderField::CreatedAt,
            SortDirection::Descending,
            &ListSettings::default(),
        );
        state.replace_source(orders());
        ListController::new(ENTITY, state)
    }

    #[test]
    fn test_failed_cancellation_rolls_back() {
        let mut c = controller();
        let before = c.state().source().to_vec();

        let ticket = c
            .update_record(&7, |o| {
                o.transition_to(OrderStatus::Cancelled);
            })
            .unwrap();
        let optimistic = c.state().source().iter().find(|o| o.id == 7).unwrap();
        assert_eq!(optimistic.order_status, OrderStatus::Cancelled);

        let result = c.settle_mutation(ticket, Err(ApiError::Network("connection reset".into())));
        assert!(matches!(result, Err(ListError::MutationFailed { .. })));
        assert_eq!(c.state().source(), before.as_slice());
        let restored = c.state().source().iter().find(|o| o.id == 7).unwrap();
        assert_eq!(restored.order_status, OrderStatus::Processing);
        assert_eq!(c.notices().len(), 1);
    }

    #[test]
    fn test_status_filter_and_newest_first() {
        let mut c = controller();
        c.apply(ListEvent::FilterChanged(DiscreteFilter::Only(OrderStatus::Shipped)));
        let ids: Vec<i64> = c.view().visible().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![9, 6, 3]);
    }

    #[test]
    fn test_search_by_order_number() {
        let mut c = controller();
        c.apply(ListEvent::QueryChanged("ord-2025-0004".into()));
        let ids: Vec<i64> = c.view().visible().iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![4]);
    }

    #[test]
    fn test_export_columns() {
        let o = order(7, "John Doe", 1234.5, OrderStatus::Pending);
        let cells: Vec<String> = table_columns().iter().map(|c| c.spec.value(&o)).collect();
        assert_eq!(
            cells,
            vec![
                "ORD-2025-0007",
                "John Doe",
                "john.doe@example.com",
                "1",
                "$1,234.50",
                "Pending",
                "Paid",
                "2025-03-07 10:00",
            ]
        );
    }
}
