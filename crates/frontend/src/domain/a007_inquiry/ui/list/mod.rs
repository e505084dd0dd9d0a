use contracts::domain::a007_inquiry::aggregate::Inquiry;
use contracts::shared::SortDirection;
use leptos::prelude::*;

use crate::domain::a007_inquiry::record::{status_options, table_columns, InquiryField, ENTITY};
use crate::shared::api_client::RestCollection;
use crate::shared::collection_page::CollectionPage;

#[component]
#[allow(non_snake_case)]
pub fn InquiryList() -> impl IntoView {
    let source: RestCollection<Inquiry> = RestCollection::new(ENTITY);

    view! {
        <CollectionPage
            title="Inquiries"
            source=source
            columns=table_columns()
            sort_field=InquiryField::ReceivedAt
            sort_direction=SortDirection::Descending
            categories=status_options()
            transitions=status_options()
            deletable=true
        />
    }
}
