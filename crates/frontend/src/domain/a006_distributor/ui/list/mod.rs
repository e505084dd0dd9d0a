use contracts::domain::a006_distributor::aggregate::Distributor;
use leptos::prelude::*;

use crate::domain::a006_distributor::record::{
    status_options, table_columns, DistributorField, ENTITY,
};
use crate::shared::api_client::RestCollection;
use crate::shared::collection_page::CollectionPage;

#[component]
#[allow(non_snake_case)]
pub fn DistributorList() -> impl IntoView {
    let source: RestCollection<Distributor> = RestCollection::new(ENTITY);

    view! {
        <CollectionPage
            title="Distributors"
            source=source
            columns=table_columns()
            sort_field=DistributorField::Company
            categories=status_options()
            transitions=status_options()
            deletable=true
        />
    }
}
