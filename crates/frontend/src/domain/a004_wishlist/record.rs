use contracts::domain::a004_wishlist::aggregate::{ProductCategory, WishlistItem};
use std::borrow::Cow;

use crate::shared::collection_page::TableColumn;
use crate::shared::collection_view::{Categorized, Identified, Searchable, SortValue, Sortable};
use crate::shared::components::table::format_money;
use crate::shared::date_utils::format_date;

pub const ENTITY: &str = "wishlists";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistField {
    Customer,
    Product,
    Category,
    Price,
    AddedAt,
}

fn category_label(item: &WishlistItem) -> &'static str {
    item.category.map(|c| c.display_name()).unwrap_or("")
}

impl Searchable for WishlistItem {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.customer_name.as_str()),
            Cow::Borrowed(self.customer_email.as_str()),
            Cow::Borrowed(self.product_name.as_str()),
            Cow::Borrowed(category_label(self)),
        ]
    }
}

impl Sortable for WishlistItem {
    type Field = WishlistField;

    fn sort_value(&self, field: WishlistField) -> SortValue<'_> {
        match field {
            WishlistField::Customer => SortValue::text(&self.customer_name),
            WishlistField::Product => SortValue::text(&self.product_name),
            WishlistField::Category => SortValue::text(category_label(self)),
            WishlistField::Price => SortValue::number(self.price),
            WishlistField::AddedAt => SortValue::date(&self.added_at),
        }
    }
}

// Wishlist entries have no lifecycle; the category only filters.
impl Categorized for WishlistItem {
    type Category = ProductCategory;

    fn category(&self) -> Option<ProductCategory> {
        self.category
    }
}

impl Identified for WishlistItem {
    type Id = i64;

    fn record_id(&self) -> i64 {
        self.id
    }
}

pub fn category_options() -> Vec<(ProductCategory, &'static str)> {
    ProductCategory::all()
        .into_iter()
        .map(|c| (c, c.display_name()))
        .collect()
}

pub fn table_columns() -> Vec<TableColumn<WishlistItem>> {
    vec![
        TableColumn::new("Customer", |w: &WishlistItem| w.customer_name.clone())
            .sortable(WishlistField::Customer)
            .searchable(),
        TableColumn::new("Email", |w: &WishlistItem| w.customer_email.clone()).searchable(),
        TableColumn::new("Product", |w: &WishlistItem| w.product_name.clone())
            .sortable(WishlistField::Product)
            .searchable(),
        TableColumn::new("Category", |w: &WishlistItem| category_label(w).to_string())
            .sortable(WishlistField::Category),
        TableColumn::new("Price", |w: &WishlistItem| format_money(w.price))
            .sortable(WishlistField::Price)
            .numeric(),
        TableColumn::new("Added", |w: &WishlistItem| format_date(&w.added_at))
            .sortable(WishlistField::AddedAt),
    ]
}
