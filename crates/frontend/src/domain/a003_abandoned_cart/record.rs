use contracts::domain::a003_abandoned_cart::aggregate::{AbandonedCart, CartStatus};
use std::borrow::Cow;

use crate::shared::collection_page::TableColumn;
use crate::shared::collection_view::{Categorized, Identified, Searchable, SortValue, Sortable};
use crate::shared::components::table::{format_int, format_money};
use crate::shared::components::ui::Tone;
use crate::shared::date_utils::format_datetime;

pub const ENTITY: &str = "abandoned-carts";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartField {
    Customer,
    Items,
    Value,
    Status,
    LastActivity,
}

impl Searchable for AbandonedCart {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.customer_name.as_str()),
            Cow::Borrowed(self.customer_email.as_str()),
        ]
    }
}

impl Sortable for AbandonedCart {
    type Field = CartField;

    fn sort_value(&self, field: CartField) -> SortValue<'_> {
        match field {
            CartField::Customer => SortValue::text(&self.customer_name),
            CartField::Items => SortValue::number(self.item_count),
            CartField::Value => SortValue::number(self.cart_value),
            CartField::Status => SortValue::text(self.status.display_name()),
            CartField::LastActivity => SortValue::date(&self.last_activity_at),
        }
    }
}

impl Categorized for AbandonedCart {
    type Category = CartStatus;

    fn category(&self) -> Option<CartStatus> {
        Some(self.status)
    }

    fn transition_to(&mut self, status: CartStatus) -> bool {
        self.status = status;
        true
    }
}

impl Identified for AbandonedCart {
    type Id = i64;

    fn record_id(&self) -> i64 {
        self.id
    }
}

pub fn status_options() -> Vec<(CartStatus, &'static str)> {
    CartStatus::all()
        .into_iter()
        .map(|s| (s, s.display_name()))
        .collect()
}

fn status_tone(cart: &AbandonedCart) -> Tone {
    match cart.status {
        CartStatus::Abandoned => Tone::Warning,
        CartStatus::ReminderSent => Tone::Info,
        CartStatus::Recovered => Tone::Success,
        CartStatus::Expired => Tone::Neutral,
    }
}

pub fn table_columns() -> Vec<TableColumn<AbandonedCart>> {
    vec![
        TableColumn::new("Customer", |c: &AbandonedCart| c.customer_name.clone())
            .sortable(CartField::Customer)
            .searchable(),
        TableColumn::new("Email", |c: &AbandonedCart| c.customer_email.clone()).searchable(),
        TableColumn::new("Items", |c: &AbandonedCart| format_int(c.item_count))
            .sortable(CartField::Items)
            .numeric(),
        TableColumn::new("Cart value", |c: &AbandonedCart| format_money(c.cart_value))
            .sortable(CartField::Value)
            .numeric(),
        TableColumn::new("Status", |c: &AbandonedCart| c.status.display_name().to_string())
            .sortable(CartField::Status)
            .badge(status_tone),
        TableColumn::new("Last activity", |c: &AbandonedCart| format_datetime(&c.last_activity_at))
            .sortable(CartField::LastActivity),
    ]
}
