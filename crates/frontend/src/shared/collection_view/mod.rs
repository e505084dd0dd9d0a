//! Client-side list engine shared by every admin screen: text search, a
//! discrete filter, sorting, pagination and optimistic edits with rollback.

pub mod controller;
pub mod driver;
pub mod error;
pub mod filter;
pub mod paginate;
pub mod patch;
pub mod record;
pub mod sort;
pub mod state;

pub use controller::{ListController, LoadState, MutationAck, Notice, Settled};
pub use driver::{mutate, refresh, transition, CollectionSource, ControllerHandle};
pub use error::{ListError, GENERIC_MUTATION_MESSAGE};
pub use filter::DiscreteFilter;
pub use patch::Patch;
pub use record::{Categorized, Identified, ListRecord, Searchable, Sortable};
pub use sort::SortValue;
pub use state::{ListEvent, ListSettings, ListState, ListView};
