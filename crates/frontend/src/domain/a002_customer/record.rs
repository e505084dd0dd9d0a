use contracts::domain::a002_customer::aggregate::Customer;
use std::borrow::Cow;

use crate::shared::collection_page::TableColumn;
use crate::shared::collection_view::{Categorized, Identified, Searchable, SortValue, Sortable};
use crate::shared::components::table::{format_int, format_money};
use crate::shared::components::ui::Tone;
use crate::shared::date_utils::{format_date, format_optional_date};

pub const ENTITY: &str = "customers";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Name,
    Email,
    TotalSpent,
    OrderCount,
    CreatedAt,
    LastOrderAt,
}

/// Purchase history bucket used by the customer filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerSegment {
    NoOrders,
    OneTime,
    Repeat,
}

impl CustomerSegment {
    pub fn of(order_count: u32) -> Self {
        match order_count {
            0 => CustomerSegment::NoOrders,
            1 => CustomerSegment::OneTime,
            _ => CustomerSegment::Repeat,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CustomerSegment::NoOrders => "No orders",
            CustomerSegment::OneTime => "One-time",
            CustomerSegment::Repeat => "Repeat",
        }
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.first_name.as_str()),
            Cow::Borrowed(self.last_name.as_str()),
            Cow::Owned(self.full_name()),
            Cow::Borrowed(self.email.as_str()),
            Cow::Borrowed(self.phone.as_deref().unwrap_or("")),
        ]
    }
}

impl Sortable for Customer {
    type Field = CustomerField;

    fn sort_value(&self, field: CustomerField) -> SortValue<'_> {
        match field {
            CustomerField::Name => SortValue::Text(Cow::Owned(self.full_name())),
            CustomerField::Email => SortValue::text(&self.email),
            CustomerField::TotalSpent => SortValue::number(self.total_spent),
            CustomerField::OrderCount => SortValue::number(self.order_count),
            CustomerField::CreatedAt => SortValue::date(&self.created_at),
            CustomerField::LastOrderAt => {
                SortValue::date(self.last_order_at.as_deref().unwrap_or(""))
            }
        }
    }
}

impl Categorized for Customer {
    type Category = CustomerSegment;

    fn category(&self) -> Option<CustomerSegment> {
        Some(CustomerSegment::of(self.order_count))
    }
}

impl Identified for Customer {
    type Id = i64;

    fn record_id(&self) -> i64 {
        self.id
    }
}

pub fn segment_options() -> Vec<(CustomerSegment, &'static str)> {
    [CustomerSegment::NoOrders, CustomerSegment::OneTime, CustomerSegment::Repeat]
        .into_iter()
        .map(|s| (s, s.display_name()))
        .collect()
}

fn segment_tone(c: &Customer) -> Tone {
    match CustomerSegment::of(c.order_count) {
        CustomerSegment::NoOrders => Tone::Neutral,
        CustomerSegment::OneTime => Tone::Info,
        CustomerSegment::Repeat => Tone::Success,
    }
}

pub fn table_columns() -> Vec<TableColumn<Customer>> {
    vec![
        TableColumn::new("Name", |c: &Customer| c.full_name())
            .sortable(CustomerField::Name)
            .searchable(),
        TableColumn::new("Email", |c: &Customer| c.email.clone())
            .sortable(CustomerField::Email)
            .searchable(),
        TableColumn::new("Phone", |c: &Customer| c.phone.clone().unwrap_or_default()).searchable(),
        TableColumn::new("Orders", |c: &Customer| format_int(c.order_count))
            .sortable(CustomerField::OrderCount)
            .numeric(),
        TableColumn::new("Total spent", |c: &Customer| format_money(c.total_spent))
            .sortable(CustomerField::TotalSpent)
            .numeric(),
        TableColumn::new("Segment", |c: &Customer| {
            CustomerSegment::of(c.order_count).display_name().to_string()
        })
        .badge(segment_tone),
        TableColumn::new("Customer since", |c: &Customer| format_date(&c.created_at))
            .sortable(CustomerField::CreatedAt),
        TableColumn::new("Last order", |c: &Customer| {
            format_optional_date(c.last_order_at.as_deref())
        })
            .sortable(CustomerField::LastOrderAt),
    ]
}
