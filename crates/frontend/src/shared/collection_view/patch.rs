//! Local edits of the source collection and their inverses.
//!
//! An inverse addresses its record by id, so it can be undone after other
//! edits have moved rows around.

use super::error::ListError;
use super::record::Identified;

/// Change applied to the source collection ahead of backend confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T: Identified> {
    /// Appends a new record
    Insert(T),
    /// Replaces the record with the same id
    Replace(T),
    Remove(T::Id),
}

/// Undo of an applied [`Patch`]: the record `id` goes back to `previous`,
/// where `None` means it did not exist.
#[derive(Debug, Clone, PartialEq)]
pub struct InversePatch<T: Identified> {
    pub id: T::Id,
    pub previous: Option<T>,
    /// Where a removed record is put back
    pub index: usize,
}

fn position<T: Identified>(source: &[T], id: &T::Id) -> Option<usize> {
    source.iter().position(|record| &record.record_id() == id)
}

fn not_found<T: Identified>(id: &T::Id) -> ListError {
    ListError::RecordNotFound {
        id: format!("{:?}", id),
    }
}

impl<T: Identified> Patch<T> {
    pub fn target_id(&self) -> T::Id {
        match self {
            Patch::Insert(record) | Patch::Replace(record) => record.record_id(),
            Patch::Remove(id) => id.clone(),
        }
    }

    /// Applies the patch and returns its inverse. On error `source` is untouched.
    pub fn apply(self, source: &mut Vec<T>) -> Result<InversePatch<T>, ListError> {
        match self {
            Patch::Insert(record) => {
                let id = record.record_id();
                source.push(record);
                Ok(InversePatch {
                    id,
                    previous: None,
                    index: source.len() - 1,
                })
            }
            Patch::Replace(record) => {
                let id = record.record_id();
                let index = position(source, &id).ok_or_else(|| not_found::<T>(&id))?;
                let previous = std::mem::replace(&mut source[index], record);
                Ok(InversePatch {
                    id,
                    previous: Some(previous),
                    index,
                })
            }
            Patch::Remove(id) => {
                let index = position(source, &id).ok_or_else(|| not_found::<T>(&id))?;
                let record = source.remove(index);
                Ok(InversePatch {
                    id,
                    previous: Some(record),
                    index,
                })
            }
        }
    }
}

impl<T: Identified> InversePatch<T> {
    pub fn revert(self, source: &mut Vec<T>) {
        match (position(source, &self.id), self.previous) {
            (Some(at), Some(record)) => source[at] = record,
            (Some(at), None) => {
                source.remove(at);
            }
            (None, Some(record)) => source.insert(self.index.min(source.len()), record),
            (None, None) => {}
        }
    }
}

/// Puts the confirmed version of record `id` into `source`. When the backend
/// assigned an id that is already present, the draft row is dropped instead.
pub fn confirm<T: Identified>(source: &mut Vec<T>, id: &T::Id, record: T) {
    let Some(at) = position(source, id) else {
        return;
    };
    let saved_id = record.record_id();
    match position(source, &saved_id) {
        Some(existing) if existing != at => {
            source[existing] = record;
            source.remove(at);
        }
        _ => source[at] = record,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        status: &'static str,
    }

    impl Identified for Item {
        type Id = i64;

        fn record_id(&self) -> i64 {
            self.id
        }
    }

    fn source() -> Vec<Item> {
        vec![
            Item { id: 1, status: "new" },
            Item { id: 2, status: "new" },
            Item { id: 3, status: "done" },
        ]
    }

    #[test]
    fn test_each_patch_reverts_to_the_original() {
        let patches = vec![
            Patch::Insert(Item { id: 9, status: "new" }),
            Patch::Replace(Item { id: 2, status: "done" }),
            Patch::Remove(1),
            Patch::Remove(3),
        ];
        for patch in patches {
            let mut data = source();
            let inverse = patch.clone().apply(&mut data).unwrap();
            assert_ne!(data, source(), "{:?} changed nothing", patch);
            inverse.revert(&mut data);
            assert_eq!(data, source(), "{:?} did not revert", patch);
        }
    }

    #[test]
    fn test_revert_after_rows_moved() {
        let mut data = source();
        let replace = Patch::Replace(Item { id: 3, status: "new" })
            .apply(&mut data)
            .unwrap();
        let remove = Patch::Remove(1).apply(&mut data).unwrap();

        // the replaced record now sits one slot earlier
        replace.revert(&mut data);
        assert_eq!(data[1], Item { id: 3, status: "done" });
        remove.revert(&mut data);
        assert_eq!(data, source());
    }

    #[test]
    fn test_unknown_id_is_an_error_and_leaves_source_alone() {
        let mut data = source();
        let err = Patch::Remove(42).apply(&mut data).unwrap_err();
        assert!(matches!(err, ListError::RecordNotFound { .. }));
        assert_eq!(data, source());

        let err = Patch::Replace(Item { id: 42, status: "x" })
            .apply(&mut data)
            .unwrap_err();
        assert!(matches!(err, ListError::RecordNotFound { .. }));
        assert_eq!(data, source());
        assert_eq!(Patch::<Item>::Remove(5).target_id(), 5);
    }

    #[test]
    fn test_confirm_replaces_draft() {
        let mut data = source();
        Patch::Insert(Item { id: 0, status: "draft" })
            .apply(&mut data)
            .unwrap();
        confirm(&mut data, &0, Item { id: 44, status: "new" });
        assert_eq!(data.last(), Some(&Item { id: 44, status: "new" }));
        assert_eq!(data.len(), 4);

        // the saved record was already loaded by a refresh
        Patch::Insert(Item { id: 0, status: "draft" })
            .apply(&mut data)
            .unwrap();
        confirm(&mut data, &0, Item { id: 2, status: "saved" });
        assert_eq!(data.len(), 4);
        assert_eq!(data[1], Item { id: 2, status: "saved" });
        assert!(data.iter().all(|i| i.id != 0));
    }
}
