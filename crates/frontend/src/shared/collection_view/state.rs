//! `ListState` holds what the user chose; `ListView` is everything derived from it.

use contracts::shared::SortDirection;
use std::num::NonZeroUsize;

use super::filter::{filter_records, DiscreteFilter};
use super::paginate::{clamp_page, page_count, paginate};
use super::record::ListRecord;
use super::sort::sort_records;

/// Page size choices offered by every list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSettings {
    pub page_size_options: Vec<NonZeroUsize>,
    pub default_page_size: NonZeroUsize,
}

impl Default for ListSettings {
    fn default() -> Self {
        let sizes: Vec<NonZeroUsize> = [10, 20, 50, 100]
            .into_iter()
            .filter_map(NonZeroUsize::new)
            .collect();
        let default_page_size = sizes[1];
        Self {
            page_size_options: sizes,
            default_page_size,
        }
    }
}

/// User input the list reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent<T: ListRecord> {
    QueryChanged(String),
    FilterChanged(DiscreteFilter<T::Category>),
    SortRequested(T::Field),
    PageRequested(usize),
    PageSizeChanged(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T: ListRecord> {
    source: Vec<T>,
    query: String,
    filter: DiscreteFilter<T::Category>,
    sort_field: T::Field,
    sort_direction: SortDirection,
    page_index: usize,
    page_size: NonZeroUsize,
    page_size_options: Vec<NonZeroUsize>,
}

impl<T: ListRecord> ListState<T> {
    pub fn new(
        sort_field: T::Field,
        sort_direction: SortDirection,
        settings: &ListSettings,
    ) -> Self {
        Self {
            source: Vec::new(),
            query: String::new(),
            filter: DiscreteFilter::All,
            sort_field,
            sort_direction,
            page_index: 1,
            page_size: settings.default_page_size,
            page_size_options: settings.page_size_options.clone(),
        }
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter(&self) -> DiscreteFilter<T::Category> {
        self.filter
    }

    pub fn sort_field(&self) -> T::Field {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn page_size_options(&self) -> &[NonZeroUsize] {
        &self.page_size_options
    }

    /// The single reducer for user input
    pub fn apply(&mut self, event: ListEvent<T>) {
        match event {
            ListEvent::QueryChanged(query) => {
                self.query = query;
                self.page_index = 1;
            }
            ListEvent::FilterChanged(filter) => {
                self.filter = filter;
                self.page_index = 1;
            }
            ListEvent::SortRequested(field) => {
                if field == self.sort_field {
                    self.sort_direction = self.sort_direction.toggled();
                } else {
                    self.sort_field = field;
                    self.sort_direction = SortDirection::Ascending;
                }
            }
            ListEvent::PageRequested(page) => {
                self.page_index = clamp_page(page, self.page_count());
            }
            ListEvent::PageSizeChanged(size) => {
                match NonZeroUsize::new(size).filter(|s| self.page_size_options.contains(s)) {
                    Some(size) => {
                        self.page_size = size;
                        self.page_index = 1;
                    }
                    None => log::warn!(
                        "ignoring page size {} not in {:?}",
                        size,
                        self.page_size_options
                    ),
                }
            }
        }
    }

    /// Replaces the source wholesale after a fetch
    pub fn replace_source(&mut self, records: Vec<T>) {
        self.source = records;
        self.page_index = 1;
    }

    /// Gives a patch access to the source; the page index is clamped afterwards
    /// since the filtered set may have shrunk.
    pub(crate) fn edit_source<R>(&mut self, edit: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let result = edit(&mut self.source);
        self.clamp_page_index();
        result
    }

    fn clamp_page_index(&mut self) {
        self.page_index = clamp_page(self.page_index, self.page_count());
    }

    fn page_count(&self) -> usize {
        let filtered = filter_records(&self.source, &self.query, &self.filter).len();
        page_count(filtered, self.page_size)
    }

    /// Filtered and sorted rows, not yet paged
    pub fn rows(&self) -> Vec<&T> {
        let mut rows = filter_records(&self.source, &self.query, &self.filter);
        sort_records(&mut rows, self.sort_field, self.sort_direction);
        rows
    }

    pub fn view(&self) -> ListView<'_, T> {
        let rows = self.rows();
        let page_count = page_count(rows.len(), self.page_size);
        ListView {
            page_index: clamp_page(self.page_index, page_count),
            page_size: self.page_size,
            page_count,
            rows,
        }
    }
}

/// Derived projection of a [`ListState`]
#[derive(Debug)]
pub struct ListView<'a, T> {
    rows: Vec<&'a T>,
    page_index: usize,
    page_size: NonZeroUsize,
    page_count: usize,
}

impl<'a, T> ListView<'a, T> {
    /// Every filtered and sorted row; this is what gets exported
    pub fn rows(&self) -> &[&'a T] {
        &self.rows
    }

    pub fn visible(&self) -> &[&'a T] {
        paginate(&self.rows, self.page_index, self.page_size).visible
    }

    pub fn total_count(&self) -> usize {
        self.rows.len()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::shared::collection_view::record::{Categorized, Identified, Searchable, Sortable};
    use crate::shared::collection_view::sort::SortValue;
    use std::borrow::Cow;

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Status {
        Open,
        Closed,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum Field {
        Name,
        Spent,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct Client {
        pub id: i64,
        pub name: String,
        pub spent: f64,
        pub status: Status,
    }

    impl Searchable for Client {
        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            vec![Cow::Borrowed(self.name.as_str())]
        }
    }

    impl Sortable for Client {
        type Field = Field;

        fn sort_value(&self, field: Field) -> SortValue<'_> {
            match field {
                Field::Name => SortValue::text(&self.name),
                Field::Spent => SortValue::number(self.spent),
            }
        }
    }

    impl Categorized for Client {
        type Category = Status;

        fn category(&self) -> Option<Status> {
            Some(self.status)
        }

        fn transition_to(&mut self, category: Status) -> bool {
            self.status = category;
            true
        }
    }

    impl Identified for Client {
        type Id = i64;

        fn record_id(&self) -> i64 {
            self.id
        }
    }

    pub fn clients(n: i64) -> Vec<Client> {
        (1..=n)
            .map(|id| Client {
                id,
                name: format!("client {:02}", id),
                spent: (id * 10) as f64,
                status: if id % 2 == 0 { Status::Closed } else { Status::Open },
            })
            .collect()
    }

    pub fn state_with(n: i64, page_size: usize) -> ListState<Client> {
        let mut state =
            ListState::new(Field::Name, SortDirection::Ascending, &ListSettings::default());
        state.replace_source(clients(n));
        state.apply(ListEvent::PageSizeChanged(page_size));
        state
    }

    fn ids(rows: &[&Client]) -> Vec<i64> {
        rows.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_twenty_five_records_three_pages() {
        let mut state = state_with(25, 10);
        assert_eq!(state.view().page_count(), 3);
        state.apply(ListEvent::PageRequested(3));
        let view = state.view();
        assert_eq!(view.page_index(), 3);
        assert_eq!(ids(view.visible()), vec![21, 22, 23, 24, 25]);
        assert_eq!(view.rows().len(), 25);
    }

    #[test]
    fn test_query_and_filter_reset_page() {
        let mut state = state_with(25, 10);
        state.apply(ListEvent::PageRequested(2));
        state.apply(ListEvent::QueryChanged("client".into()));
        assert_eq!(state.page_index(), 1);

        state.apply(ListEvent::PageRequested(2));
        state.apply(ListEvent::FilterChanged(DiscreteFilter::Only(Status::Open)));
        assert_eq!(state.page_index(), 1);
        assert_eq!(state.view().total_count(), 13);
    }

    #[test]
    fn test_page_request_is_clamped() {
        let mut state = state_with(25, 10);
        state.apply(ListEvent::PageRequested(99));
        assert_eq!(state.page_index(), 3);
        state.apply(ListEvent::PageRequested(0));
        assert_eq!(state.page_index(), 1);
    }

    #[test]
    fn test_sort_toggle() {
        let mut state = state_with(3, 10);
        state.apply(ListEvent::SortRequested(Field::Name));
        assert_eq!(state.sort_direction(), SortDirection::Descending);
        assert_eq!(ids(state.view().visible()), vec![3, 2, 1]);

        state.apply(ListEvent::SortRequested(Field::Spent));
        assert_eq!(state.sort_field(), Field::Spent);
        assert_eq!(state.sort_direction(), SortDirection::Ascending);
        assert_eq!(ids(state.view().visible()), vec![1, 2, 3]);
    }

    #[test]
    fn test_page_size_change() {
        let mut state = state_with(25, 10);
        state.apply(ListEvent::PageRequested(3));
        state.apply(ListEvent::PageSizeChanged(20));
        assert_eq!(state.page_size().get(), 20);
        assert_eq!(state.page_index(), 1);

        state.apply(ListEvent::PageSizeChanged(7));
        assert_eq!(state.page_size().get(), 20);
        state.apply(ListEvent::PageSizeChanged(0));
        assert_eq!(state.page_size().get(), 20);
    }

    #[test]
    fn test_view_is_deterministic() {
        let mut state = state_with(40, 10);
        state.apply(ListEvent::QueryChanged("1".into()));
        state.apply(ListEvent::SortRequested(Field::Spent));
        state.apply(ListEvent::SortRequested(Field::Spent));
        let first: Vec<Client> = state.view().visible().iter().map(|c| (*c).clone()).collect();
        for _ in 0..5 {
            let again: Vec<Client> = state.view().visible().iter().map(|c| (*c).clone()).collect();
            assert_eq!(again, first);
        }
    }

    #[test]
    fn test_shrinking_edit_clamps_page() {
        let mut state = state_with(25, 10);
        state.apply(ListEvent::PageRequested(3));
        state.edit_source(|source| source.truncate(12));
        assert_eq!(state.page_index(), 2);
    }

    #[test]
    fn test_replace_source_resets_page() {
        let mut state = state_with(25, 10);
        state.apply(ListEvent::PageRequested(3));
        state.replace_source(clients(30));
        assert_eq!(state.page_index(), 1);
    }
}
