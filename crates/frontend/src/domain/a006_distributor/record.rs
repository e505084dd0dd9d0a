use contracts::domain::a006_distributor::aggregate::{Distributor, DistributorStatus};
use std::borrow::Cow;

use crate::shared::collection_page::TableColumn;
use crate::shared::collection_view::{Categorized, Identified, Searchable, SortValue, Sortable};
use crate::shared::components::ui::Tone;
use crate::shared::date_utils::format_date;

pub const ENTITY: &str = "distributors";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributorField {
    Company,
    Contact,
    Region,
    Status,
    JoinedAt,
}

impl Searchable for Distributor {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.company_name.as_str()),
            Cow::Borrowed(self.contact_person.as_str()),
            Cow::Borrowed(self.email.as_str()),
            Cow::Borrowed(self.phone.as_deref().unwrap_or("")),
            Cow::Borrowed(self.region.as_str()),
        ]
    }
}

impl Sortable for Distributor {
    type Field = DistributorField;

    fn sort_value(&self, field: DistributorField) -> SortValue<'_> {
        match field {
            DistributorField::Company => SortValue::text(&self.company_name),
            DistributorField::Contact => SortValue::text(&self.contact_person),
            DistributorField::Region => SortValue::text(&self.region),
            DistributorField::Status => SortValue::text(self.status.display_name()),
            DistributorField::JoinedAt => SortValue::date(&self.joined_at),
        }
    }
}

impl Categorized for Distributor {
    type Category = DistributorStatus;

    fn category(&self) -> Option<DistributorStatus> {
        Some(self.status)
    }

    fn transition_to(&mut self, status: DistributorStatus) -> bool {
        self.status = status;
        true
    }
}

impl Identified for Distributor {
    type Id = i64;

    fn record_id(&self) -> i64 {
        self.id
    }
}

pub fn status_options() -> Vec<(DistributorStatus, &'static str)> {
    DistributorStatus::all()
        .into_iter()
        .map(|s| (s, s.display_name()))
        .collect()
}

pub fn table_columns() -> Vec<TableColumn<Distributor>> {
    vec![
        TableColumn::new("Company", |d: &Distributor| d.company_name.clone())
            .sortable(DistributorField::Company)
            .searchable(),
        TableColumn::new("Contact", |d: &Distributor| d.contact_person.clone())
            .sortable(DistributorField::Contact)
            .searchable(),
        TableColumn::new("Email", |d: &Distributor| d.email.clone()).searchable(),
        TableColumn::new("Phone", |d: &Distributor| d.phone.clone().unwrap_or_default()),
        TableColumn::new("Region", |d: &Distributor| d.region.clone())
            .sortable(DistributorField::Region)
            .searchable(),
        TableColumn::new("Status", |d: &Distributor| d.status.display_name().to_string())
            .sortable(DistributorField::Status)
            .badge(|d| match d.status {
                DistributorStatus::Active => Tone::Success,
                DistributorStatus::Inactive => Tone::Neutral,
            }),
        TableColumn::new("Joined", |d: &Distributor| format_date(&d.joined_at))
            .sortable(DistributorField::JoinedAt),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::collection_view::{ListEvent, ListSettings, ListState};
    use contracts::shared::SortDirection;

    fn distributor(id: i64, company: &str, region: &str) -> Distributor {
        Distributor {
            id,
            company_name: company.to_string(),
            contact_person: "Sam Lee".to_string(),
            email: format!("sales{}@example.com", id),
            phone: None,
            region: region.to_string(),
            status: DistributorStatus::Active,
            joined_at: "2024-11-20".to_string(),
        }
    }

    #[test]
    fn test_company_sort_ignores_case_and_toggles() {
        let mut state = ListState::new(
            DistributorField::Region,
            SortDirection::Ascending,
            &ListSettings::default(),
        );
        state.replace_source(vec![
            distributor(1, "northwind", "EU"),
            distributor(2, "Acme Supply", "US"),
            distributor(3, "Blue Harbor", "APAC"),
        ]);

        state.apply(ListEvent::SortRequested(DistributorField::Company));
        let ids: Vec<i64> = state.view().visible().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        state.apply(ListEvent::SortRequested(DistributorField::Company));
        let ids: Vec<i64> = state.view().visible().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }
}
