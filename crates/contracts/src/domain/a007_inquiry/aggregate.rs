use serde::{Deserialize, Serialize};

/// Triage state of a contact-form inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InquiryStatus {
    New,
    InProgress,
    Resolved,
}

impl InquiryStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            InquiryStatus::New => "New",
            InquiryStatus::InProgress => "In progress",
            InquiryStatus::Resolved => "Resolved",
        }
    }

    pub fn all() -> Vec<InquiryStatus> {
        vec![
            InquiryStatus::New,
            InquiryStatus::InProgress,
            InquiryStatus::Resolved,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InquiryCategory {
    General,
    Order,
    Product,
    Partnership,
}

impl InquiryCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            InquiryCategory::General => "General",
            InquiryCategory::Order => "Order",
            InquiryCategory::Product => "Product",
            InquiryCategory::Partnership => "Partnership",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    pub category: InquiryCategory,
    pub status: InquiryStatus,
    pub received_at: String,
}
