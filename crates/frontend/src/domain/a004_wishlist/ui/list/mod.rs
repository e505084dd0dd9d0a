use contracts::domain::a004_wishlist::aggregate::WishlistItem;
use contracts::shared::SortDirection;
use leptos::prelude::*;

use crate::domain::a004_wishlist::record::{category_options, table_columns, WishlistField, ENTITY};
use crate::shared::api_client::RestCollection;
use crate::shared::collection_page::CollectionPage;

#[component]
#[allow(non_snake_case)]
pub fn WishlistList() -> impl IntoView {
    let source: RestCollection<WishlistItem> = RestCollection::new(ENTITY);

    view! {
        <CollectionPage
            title="Wishlists"
            source=source
            columns=table_columns()
            sort_field=WishlistField::AddedAt
            sort_direction=SortDirection::Descending
            categories=category_options()
            deletable=true
        />
    }
}
