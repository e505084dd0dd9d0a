use contracts::domain::a005_return_request::aggregate::{ReturnRequest, ReturnStatus};
use std::borrow::Cow;

use crate::shared::collection_page::TableColumn;
use crate::shared::collection_view::{Categorized, Identified, Searchable, SortValue, Sortable};
use crate::shared::components::table::format_money;
use crate::shared::components::ui::Tone;
use crate::shared::date_utils::format_datetime;

pub const ENTITY: &str = "returns";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnField {
    OrderNumber,
    Customer,
    RefundAmount,
    Status,
    RequestedAt,
}

impl Searchable for ReturnRequest {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.order_number.as_str()),
            Cow::Borrowed(self.customer_name.as_str()),
            Cow::Borrowed(self.customer_email.as_str()),
            Cow::Borrowed(self.reason.as_str()),
        ]
    }
}

impl Sortable for ReturnRequest {
    type Field = ReturnField;

    fn sort_value(&self, field: ReturnField) -> SortValue<'_> {
        match field {
            ReturnField::OrderNumber => SortValue::text(&self.order_number),
            ReturnField::Customer => SortValue::text(&self.customer_name),
            ReturnField::RefundAmount => SortValue::number(self.refund_amount),
            ReturnField::Status => SortValue::text(self.status.display_name()),
            ReturnField::RequestedAt => SortValue::date(&self.requested_at),
        }
    }
}

impl Categorized for ReturnRequest {
    type Category = ReturnStatus;

    fn category(&self) -> Option<ReturnStatus> {
        Some(self.status)
    }

    /// The backend decides whether the move is allowed; a rejected move is
    /// rolled back by the controller.
    fn transition_to(&mut self, status: ReturnStatus) -> bool {
        self.status = status;
        true
    }
}

impl Identified for ReturnRequest {
    type Id = i64;

    fn record_id(&self) -> i64 {
        self.id
    }
}

pub fn status_options() -> Vec<(ReturnStatus, &'static str)> {
    ReturnStatus::all()
        .into_iter()
        .map(|s| (s, s.display_name()))
        .collect()
}

fn status_tone(r: &ReturnRequest) -> Tone {
    match r.status {
        ReturnStatus::Requested => Tone::Warning,
        ReturnStatus::Approved => Tone::Info,
        ReturnStatus::Rejected => Tone::Danger,
        ReturnStatus::Refunded => Tone::Success,
    }
}

pub fn table_columns() -> Vec<TableColumn<ReturnRequest>> {
    vec![
        TableColumn::new("Order #", |r: &ReturnRequest| r.order_number.clone())
            .sortable(ReturnField::OrderNumber)
            .searchable(),
        TableColumn::new("Customer", |r: &ReturnRequest| r.customer_name.clone())
            .sortable(ReturnField::Customer)
            .searchable(),
        TableColumn::new("Email", |r: &ReturnRequest| r.customer_email.clone()).searchable(),
        TableColumn::new("Reason", |r: &ReturnRequest| r.reason.clone()).searchable(),
        TableColumn::new("Refund", |r: &ReturnRequest| format_money(r.refund_amount))
            .sortable(ReturnField::RefundAmount)
            .numeric(),
        TableColumn::new("Status", |r: &ReturnRequest| r.status.display_name().to_string())
            .sortable(ReturnField::Status)
            .badge(status_tone),
        TableColumn::new("Requested", |r: &ReturnRequest| format_datetime(&r.requested_at))
            .sortable(ReturnField::RequestedAt),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_client::ApiError;
    use crate::shared::collection_view::{ListController, ListError, ListSettings, ListState};
    use contracts::shared::SortDirection;

    fn request(id: i64, status: ReturnStatus) -> ReturnRequest {
        ReturnRequest {
            id,
            order_number: format!("ORD-2025-{:04}", id + 100),
            customer_name: "Li Wei".to_string(),
            customer_email: "li.wei@example.com".to_string(),
            reason: "Wrong size".to_string(),
            refund_amount: 45.0,
            status,
            requested_at: "2025-05-01T09:15:00Z".to_string(),
        }
    }

    #[test]
    fn test_rejected_refund_shows_server_message() {
        let mut state = ListState::new(
            ReturnField::RequestedAt,
            SortDirection::Descending,
            &ListSettings::default(),
        );
        state.replace_source(vec![
            request(1, ReturnStatus::Requested),
            request(2, ReturnStatus::Approved),
        ]);
        let mut c = ListController::new(ENTITY, state);

        let ticket = c
            .update_record(&2, |r| {
                r.transition_to(ReturnStatus::Refunded);
            })
            .unwrap();
        let err = c
            .settle_mutation(
                ticket,
                Err(ApiError::Status {
                    status: 409,
                    message: Some("Refund exceeds order total".into()),
                }),
            )
            .unwrap_err();

        assert_eq!(
            err,
            ListError::MutationFailed {
                message: "Refund exceeds order total".into()
            }
        );
        assert_eq!(c.notices()[0].message, "Refund exceeds order total");
        let r = c.state().source().iter().find(|r| r.id == 2).unwrap();
        assert_eq!(r.status, ReturnStatus::Approved);
    }

    #[test]
    fn test_reason_is_searchable() {
        let r = request(1, ReturnStatus::Requested);
        assert!(r.search_fields().iter().any(|f| f == "Wrong size"));
    }
}
