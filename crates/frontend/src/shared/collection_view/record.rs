//! Traits a domain record implements to be shown in a collection view.

use std::borrow::Cow;
use std::fmt::Debug;

use super::sort::SortValue;

/// Free-text search over a record's projected fields
pub trait Searchable {
    /// Fields the search box looks at. Missing optional values are returned as
    /// empty strings.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;
}

/// Column-wise comparison of records
pub trait Sortable {
    /// Sortable columns of the record
    type Field: Copy + PartialEq + Debug + Send + Sync + 'static;

    fn sort_value(&self, field: Self::Field) -> SortValue<'_>;
}

/// Single-valued categorical attribute used by the discrete filter
/// (order status, product category, ...).
pub trait Categorized {
    type Category: Copy + PartialEq + Debug + Send + Sync + 'static;

    fn category(&self) -> Option<Self::Category>;

    /// Moves the record to another category. Returns `false` when the record
    /// type does not support status transitions from the list.
    fn transition_to(&mut self, _category: Self::Category) -> bool {
        false
    }
}

/// Stable identity used to locate a record inside the source collection
pub trait Identified {
    type Id: Clone + PartialEq + Debug + Send + Sync + 'static;

    fn record_id(&self) -> Self::Id;
}

/// Everything the collection view needs from a record type
pub trait ListRecord:
    Searchable + Sortable + Categorized + Identified + Clone + PartialEq + Debug + 'static
{
}

impl<T> ListRecord for T where
    T: Searchable + Sortable + Categorized + Identified + Clone + PartialEq + Debug + 'static
{
}
