//! Async refresh/mutate flows on top of the ticketed controller.
//!
//! No borrow of the controller is held across an `.await`: each flow takes its
//! ticket, releases the controller, awaits the backend and then hands the
//! result back through the same handle.

use std::cell::RefCell;
use std::rc::Rc;

use super::controller::{ListController, MutationAck, Settled};
use super::error::ListError;
use super::patch::Patch;
use super::record::ListRecord;
use crate::shared::api_client::ApiError;

/// Backend side of a collection
#[allow(async_fn_in_trait)]
pub trait CollectionSource<T: ListRecord> {
    async fn fetch_all(&self) -> Result<Vec<T>, ApiError>;

    async fn submit(&self, patch: &Patch<T>) -> Result<MutationAck<T>, ApiError>;
}

/// Somewhere a controller lives. `None` means the owner is gone.
pub trait ControllerHandle<T: ListRecord> {
    fn with_controller<R>(&self, f: impl FnOnce(&mut ListController<T>) -> R) -> Option<R>;
}

impl<T: ListRecord> ControllerHandle<T> for RefCell<ListController<T>> {
    fn with_controller<R>(&self, f: impl FnOnce(&mut ListController<T>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: ListRecord> ControllerHandle<T> for Rc<RefCell<ListController<T>>> {
    fn with_controller<R>(&self, f: impl FnOnce(&mut ListController<T>) -> R) -> Option<R> {
        (**self).with_controller(f)
    }
}

pub async fn refresh<T, H, S>(handle: &H, source: &S) -> Result<Settled, ListError>
where
    T: ListRecord,
    H: ControllerHandle<T>,
    S: CollectionSource<T>,
{
    let Some(ticket) = handle.with_controller(|c| c.begin_refresh()) else {
        return Ok(Settled::Disposed);
    };
    let result = source.fetch_all().await;
    handle
        .with_controller(|c| c.finish_refresh(ticket, result))
        .unwrap_or(Ok(Settled::Disposed))
}

pub async fn mutate<T, H, S>(handle: &H, source: &S, patch: Patch<T>) -> Result<Settled, ListError>
where
    T: ListRecord,
    H: ControllerHandle<T>,
    S: CollectionSource<T>,
{
    let request = patch.clone();
    let ticket = match handle.with_controller(|c| c.begin_mutation(patch)) {
        Some(ticket) => ticket?,
        None => return Ok(Settled::Disposed),
    };
    let result = source.submit(&request).await;
    handle
        .with_controller(|c| c.settle_mutation(ticket, result))
        .unwrap_or(Ok(Settled::Disposed))
}

/// Status change of a single record, sent to the backend as a `Replace`.
pub async fn transition<T, H, S>(
    handle: &H,
    source: &S,
    id: &T::Id,
    category: T::Category,
) -> Result<Settled, ListError>
where
    T: ListRecord,
    H: ControllerHandle<T>,
    S: CollectionSource<T>,
{
    let updated = handle.with_controller(|c| {
        c.state()
            .source()
            .iter()
            .find(|r| &r.record_id() == id)
            .cloned()
    });
    let mut record = match updated {
        None => return Ok(Settled::Disposed),
        Some(None) => {
            return Err(ListError::RecordNotFound {
                id: format!("{:?}", id),
            })
        }
        Some(Some(record)) => record,
    };
    if !record.transition_to(category) {
        return Err(ListError::MutationFailed {
            message: "Status changes are not supported for this list".to_string(),
        });
    }
    mutate(handle, source, Patch::Replace(record)).await
}
