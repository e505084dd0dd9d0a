use serde::{Deserialize, Serialize};

/// Recovery state of an abandoned cart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CartStatus {
    Abandoned,
    ReminderSent,
    Recovered,
    Expired,
}

impl CartStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            CartStatus::Abandoned => "Abandoned",
            CartStatus::ReminderSent => "Reminder sent",
            CartStatus::Recovered => "Recovered",
            CartStatus::Expired => "Expired",
        }
    }

    pub fn all() -> Vec<CartStatus> {
        vec![
            CartStatus::Abandoned,
            CartStatus::ReminderSent,
            CartStatus::Recovered,
            CartStatus::Expired,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbandonedCart {
    pub id: i64,
    #[serde(default)]
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub item_count: u32,
    #[serde(default)]
    pub cart_value: f64,
    pub status: CartStatus,
    pub last_activity_at: String,
}
