use contracts::domain::a005_return_request::aggregate::ReturnRequest;
use contracts::shared::SortDirection;
use leptos::prelude::*;

use crate::domain::a005_return_request::record::{
    status_options, table_columns, ReturnField, ENTITY,
};
use crate::shared::api_client::RestCollection;
use crate::shared::collection_page::CollectionPage;

#[component]
#[allow(non_snake_case)]
pub fn ReturnRequestList() -> impl IntoView {
    let source: RestCollection<ReturnRequest> = RestCollection::new(ENTITY);

    view! {
        <CollectionPage
            title="Returns"
            source=source
            columns=table_columns()
            sort_field=ReturnField::RequestedAt
            sort_direction=SortDirection::Descending
            categories=status_options()
            transitions=status_options()
        />
    }
}
