use contracts::domain::a001_order::aggregate::Order;
use contracts::shared::SortDirection;
use leptos::prelude::*;

use crate::domain::a001_order::record::{status_options, table_columns, OrderField, ENTITY};
use crate::shared::api_client::RestCollection;
use crate::shared::collection_page::CollectionPage;

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let source: RestCollection<Order> = RestCollection::new(ENTITY);

    view! {
        <CollectionPage
            title="Orders"
            source=source
            columns=table_columns()
            sort_field=OrderField::CreatedAt
            sort_direction=SortDirection::Descending
            categories=status_options()
            transitions=status_options()
        />
    }
}
