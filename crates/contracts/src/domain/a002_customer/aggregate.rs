use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub total_spent: f64,
    #[serde(default)]
    pub order_count: u32,
    pub created_at: String,
    #[serde(default)]
    pub last_order_at: Option<String>,
}

impl Customer {
    /// "First Last", without a dangling space when one part is missing
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let customer: Customer = serde_json::from_str(
            r#"{"id":1,"firstName":"Jane","email":"jane@example.com","createdAt":"2025-01-02"}"#,
        )
        .unwrap();
        assert_eq!(customer.full_name(), "Jane");
        assert_eq!(customer.phone, None);
    }
}
