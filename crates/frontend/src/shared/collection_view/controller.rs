//! View controller: load state, request sequencing, optimistic mutations.
//!
//! Every refresh or mutation takes a ticket from one monotonically increasing
//! sequence. A refresh may only replace the source while it holds the latest
//! ticket. Mutations are tracked one by one: each response confirms or undoes
//! its own edit, whatever was started after it.

use std::fmt::Display;

use uuid::Uuid;

use super::error::ListError;
use super::patch::{confirm, InversePatch, Patch};
use super::record::ListRecord;
use super::state::{ListEvent, ListState, ListView};
use crate::shared::api_client::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    /// Last refresh failed; the source still holds the previous data
    Failed(ListError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationTicket(u64);

/// What happened to a response handed back to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    Applied,
    /// A newer request was started after this refresh, or the mutation was
    /// already settled
    Stale,
    /// The view was torn down before the response arrived
    Disposed,
}

/// Backend answer to a successful mutation
#[derive(Debug, Clone, PartialEq)]
pub enum MutationAck<T> {
    Acknowledged,
    /// Authoritative version of the written record
    Record(T),
}

/// Dismissable message for the user
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
struct PendingMutation<T: ListRecord> {
    seq: u64,
    patch: Patch<T>,
    /// `None` when the edit no longer applies to a refreshed source
    inverse: Option<InversePatch<T>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListController<T: ListRecord> {
    entity: &'static str,
    state: ListState<T>,
    load: LoadState,
    issued: u64,
    /// In ticket order
    pending: Vec<PendingMutation<T>>,
    notices: Vec<Notice>,
    disposed: bool,
}

impl<T: ListRecord> ListController<T> {
    pub fn new(entity: &'static str, state: ListState<T>) -> Self {
        Self {
            entity,
            state,
            load: LoadState::Idle,
            issued: 0,
            pending: Vec::new(),
            notices: Vec::new(),
            disposed: false,
        }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    pub fn view(&self) -> ListView<'_, T> {
        self.state.view()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    pub fn has_pending_mutation(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Raises a notice for a failure that happened outside the controller,
    /// e.g. a download the browser refused.
    pub fn notify(&mut self, message: impl Display) {
        self.notices.push(Notice {
            id: Uuid::new_v4(),
            message: message.to_string(),
        });
    }

    pub fn dismiss_notice(&mut self, id: Uuid) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn apply(&mut self, event: ListEvent<T>) {
        self.state.apply(event);
    }

    /// Marks the owning view as gone; later responses are discarded.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.pending.clear();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn next_seq(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    // ------------------------------------------------------------------
    // Refresh
    // ------------------------------------------------------------------

    pub fn begin_refresh(&mut self) -> RequestTicket {
        let seq = self.next_seq();
        self.load = LoadState::Loading;
        log::debug!("{}: refresh #{} started", self.entity, seq);
        RequestTicket(seq)
    }

    pub fn finish_refresh(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<T>, ApiError>,
    ) -> Result<Settled, ListError> {
        if self.disposed {
            return Ok(Settled::Disposed);
        }
        if ticket.0 != self.issued {
            log::debug!(
                "{}: dropping stale refresh #{} (latest #{})",
                self.entity,
                ticket.0,
                self.issued
            );
            return Ok(Settled::Stale);
        }
        match result {
            Ok(records) => {
                log::debug!("{}: loaded {} records", self.entity, records.len());
                self.state.replace_source(records);
                self.replay_pending();
                self.load = LoadState::Idle;
                Ok(Settled::Applied)
            }
            Err(api_error) => {
                let error = ListError::from_fetch(api_error);
                log::warn!("{}: refresh failed: {}", self.entity, error);
                self.notify(&error);
                self.load = LoadState::Failed(error.clone());
                Err(error)
            }
        }
    }

    /// Edits still awaiting the backend stay visible on top of fresh data.
    fn replay_pending(&mut self) {
        let entity = self.entity;
        let pending = &mut self.pending;
        self.state.edit_source(|source| {
            for mutation in pending.iter_mut() {
                mutation.inverse = match mutation.patch.clone().apply(source) {
                    Ok(inverse) => Some(inverse),
                    Err(e) => {
                        log::debug!("{}: mutation #{} not replayed: {}", entity, mutation.seq, e);
                        None
                    }
                };
            }
        });
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Applies `patch` optimistically and remembers how to undo it.
    pub fn begin_mutation(&mut self, patch: Patch<T>) -> Result<MutationTicket, ListError> {
        if self.disposed {
            return Err(ListError::Disposed);
        }
        let inverse = self.state.edit_source(|source| patch.clone().apply(source))?;
        let seq = self.next_seq();
        if self.load == LoadState::Loading {
            // the in-flight refresh lost its ticket and will never settle
            self.load = LoadState::Idle;
        }
        self.pending.push(PendingMutation {
            seq,
            patch,
            inverse: Some(inverse),
        });
        log::debug!("{}: mutation #{} applied optimistically", self.entity, seq);
        Ok(MutationTicket(seq))
    }

    /// Convenience for status changes and edits: clones the record with `id`,
    /// lets `edit` change it and starts a `Patch::Replace`.
    pub fn update_record(
        &mut self,
        id: &T::Id,
        edit: impl FnOnce(&mut T),
    ) -> Result<MutationTicket, ListError> {
        let mut record = self
            .state
            .source()
            .iter()
            .find(|r| &r.record_id() == id)
            .cloned()
            .ok_or_else(|| ListError::RecordNotFound {
                id: format!("{:?}", id),
            })?;
        edit(&mut record);
        self.begin_mutation(Patch::Replace(record))
    }

    pub fn settle_mutation(
        &mut self,
        ticket: MutationTicket,
        result: Result<MutationAck<T>, ApiError>,
    ) -> Result<Settled, ListError> {
        if self.disposed {
            return Ok(Settled::Disposed);
        }
        let Some(at) = self.pending.iter().position(|p| p.seq == ticket.0) else {
            log::debug!("{}: mutation #{} is not pending", self.entity, ticket.0);
            return Ok(Settled::Stale);
        };
        let settled = self.pending.remove(at);
        let Some(inverse) = settled.inverse else {
            return match result {
                Ok(_) => Ok(Settled::Applied),
                Err(api_error) => Err(self.report_mutation_failure(ticket, api_error)),
            };
        };

        // a later edit of the same record was built on top of this one and
        // now inherits its undo
        let successor = self.pending[at..]
            .iter_mut()
            .filter_map(|p| p.inverse.as_mut())
            .find(|next| next.id == inverse.id);

        match result {
            Ok(ack) => {
                if let MutationAck::Record(record) = ack {
                    match successor {
                        Some(next) => next.previous = Some(record),
                        None => self
                            .state
                            .edit_source(|source| confirm(source, &inverse.id, record)),
                    }
                }
                log::debug!("{}: mutation #{} confirmed", self.entity, ticket.0);
                Ok(Settled::Applied)
            }
            Err(api_error) => {
                match successor {
                    Some(next) => {
                        next.previous = inverse.previous;
                        next.index = inverse.index;
                    }
                    None => self.state.edit_source(|source| inverse.revert(source)),
                }
                Err(self.report_mutation_failure(ticket, api_error))
            }
        }
    }

    fn report_mutation_failure(
        &mut self,
        ticket: MutationTicket,
        api_error: ApiError,
    ) -> ListError {
        let error = ListError::from_mutation(api_error);
        log::warn!("{}: mutation #{} rolled back: {}", self.entity, ticket.0, error);
        self.notify(&error);
        error
    }
}
