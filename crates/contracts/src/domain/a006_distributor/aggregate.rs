use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistributorStatus {
    Active,
    Inactive,
}

impl DistributorStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            DistributorStatus::Active => "Active",
            DistributorStatus::Inactive => "Inactive",
        }
    }

    pub fn all() -> Vec<DistributorStatus> {
        vec![DistributorStatus::Active, DistributorStatus::Inactive]
    }
}

/// Entry of the distributor directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distributor {
    pub id: i64,
    pub company_name: String,
    #[serde(default)]
    pub contact_person: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub region: String,
    pub status: DistributorStatus,
    pub joined_at: String,
}
