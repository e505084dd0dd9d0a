use contracts::domain::a003_abandoned_cart::aggregate::AbandonedCart;
use contracts::shared::SortDirection;
use leptos::prelude::*;

use crate::domain::a003_abandoned_cart::record::{status_options, table_columns, CartField, ENTITY};
use crate::shared::api_client::RestCollection;
use crate::shared::collection_page::CollectionPage;

#[component]
#[allow(non_snake_case)]
pub fn AbandonedCartList() -> impl IntoView {
    let source: RestCollection<AbandonedCart> = RestCollection::new(ENTITY);

    view! {
        <CollectionPage
            title="Abandoned carts"
            source=source
            columns=table_columns()
            sort_field=CartField::LastActivity
            sort_direction=SortDirection::Descending
            categories=status_options()
            transitions=status_options()
            deletable=true
        />
    }
}
