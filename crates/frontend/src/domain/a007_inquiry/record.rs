use contracts::domain::a007_inquiry::aggregate::{Inquiry, InquiryStatus};
use std::borrow::Cow;

use crate::shared::collection_page::TableColumn;
use crate::shared::collection_view::{Categorized, Identified, Searchable, SortValue, Sortable};
use crate::shared::components::ui::Tone;
use crate::shared::date_utils::format_datetime;

pub const ENTITY: &str = "inquiries";

/// Longest message excerpt shown in the table
const EXCERPT_CHARS: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryField {
    Name,
    Subject,
    Category,
    Status,
    ReceivedAt,
}

pub fn excerpt(message: &str) -> String {
    let mut chars = message.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}

impl Searchable for Inquiry {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.email.as_str()),
            Cow::Borrowed(self.subject.as_str()),
            Cow::Borrowed(self.message.as_str()),
            Cow::Borrowed(self.category.display_name()),
        ]
    }
}

impl Sortable for Inquiry {
    type Field = InquiryField;

    fn sort_value(&self, field: InquiryField) -> SortValue<'_> {
        match field {
            InquiryField::Name => SortValue::text(&self.name),
            InquiryField::Subject => SortValue::text(&self.subject),
            InquiryField::Category => SortValue::text(self.category.display_name()),
            InquiryField::Status => SortValue::text(self.status.display_name()),
            InquiryField::ReceivedAt => SortValue::date(&self.received_at),
        }
    }
}

// Triage filters on status; the inquiry category is searchable text.
impl Categorized for Inquiry {
    type Category = InquiryStatus;

    fn category(&self) -> Option<InquiryStatus> {
        Some(self.status)
    }

    fn transition_to(&mut self, status: InquiryStatus) -> bool {
        self.status = status;
        true
    }
}

impl Identified for Inquiry {
    type Id = i64;

    fn record_id(&self) -> i64 {
        self.id
    }
}

pub fn status_options() -> Vec<(InquiryStatus, &'static str)> {
    InquiryStatus::all()
        .into_iter()
        .map(|s| (s, s.display_name()))
        .collect()
}

fn status_tone(i: &Inquiry) -> Tone {
    match i.status {
        InquiryStatus::New => Tone::Warning,
        InquiryStatus::InProgress => Tone::Info,
        InquiryStatus::Resolved => Tone::Success,
    }
}

pub fn table_columns() -> Vec<TableColumn<Inquiry>> {
    vec![
        TableColumn::new("From", |i: &Inquiry| i.name.clone())
            .sortable(InquiryField::Name)
            .searchable(),
        TableColumn::new("Email", |i: &Inquiry| i.email.clone()).searchable(),
        TableColumn::new("Subject", |i: &Inquiry| i.subject.clone())
            .sortable(InquiryField::Subject)
            .searchable(),
        TableColumn::new("Message", |i: &Inquiry| excerpt(&i.message)).searchable(),
        TableColumn::new("Category", |i: &Inquiry| i.category.display_name().to_string())
            .sortable(InquiryField::Category),
        TableColumn::new("Status", |i: &Inquiry| i.status.display_name().to_string())
            .sortable(InquiryField::Status)
            .badge(status_tone),
        TableColumn::new("Received", |i: &Inquiry| format_datetime(&i.received_at))
            .sortable(InquiryField::ReceivedAt),
    ]
}
