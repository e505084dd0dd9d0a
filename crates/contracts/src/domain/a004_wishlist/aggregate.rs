use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Apparel,
    Footwear,
    Accessories,
    Home,
    Electronics,
    Other,
}

impl ProductCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Apparel => "Apparel",
            ProductCategory::Footwear => "Footwear",
            ProductCategory::Accessories => "Accessories",
            ProductCategory::Home => "Home",
            ProductCategory::Electronics => "Electronics",
            ProductCategory::Other => "Other",
        }
    }

    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::Apparel,
            ProductCategory::Footwear,
            ProductCategory::Accessories,
            ProductCategory::Home,
            ProductCategory::Electronics,
            ProductCategory::Other,
        ]
    }
}

/// A single product saved to a customer's wishlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: i64,
    #[serde(default)]
    pub customer_name: String,
    pub customer_email: String,
    pub product_name: String,
    /// Unknown categories from older catalog imports come through as `null`
    #[serde(default)]
    pub category: Option<ProductCategory>,
    #[serde(default)]
    pub price: f64,
    pub added_at: String,
}
