use contracts::domain::a002_customer::aggregate::Customer;
use contracts::shared::SortDirection;
use leptos::prelude::*;

use crate::domain::a002_customer::record::{segment_options, table_columns, CustomerField, ENTITY};
use crate::shared::api_client::RestCollection;
use crate::shared::collection_page::CollectionPage;

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let source: RestCollection<Customer> = RestCollection::new(ENTITY);

    view! {
        <CollectionPage
            title="Customers"
            source=source
            columns=table_columns()
            sort_field=CustomerField::TotalSpent
            sort_direction=SortDirection::Descending
            categories=segment_options()
            deletable=true
        />
    }
}
