//! Multi-select workflow for bulk actions over a list (e.g. deleting
//! conversations).
//!
//! LIFECYCLE
//! =========
//! `Idle` -> `enter_selection_mode` -> `Selecting` -> `exit_selection_mode`
//! or a successful bulk action -> `Idle`. The cycle is re-entrant.
//!
//! Bulk actions run in two phases so the action itself may be asynchronous:
//!
//! 1. **Begin** - validate, snapshot the selected ids, and mark one action in flight.
//! 2. **Finish** - apply the outcome. Success returns to `Idle`; failure keeps
//!    the selection so the user can retry without reselecting.
//!
//! Only one action may be in flight. Each begin hands out a ticket scoped
//! to its controller; a resolution carrying any other ticket, including one
//! issued by a different controller, is ignored. An async commit that is
//! dropped before resolving releases its ticket as if cancelled.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::net::api::ActionFailure;

static NEXT_CONTROLLER_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("selection mode is not active")]
    InvalidState,
    #[error("selection mode is already active")]
    AlreadyActive,
    #[error("nothing is selected")]
    NothingSelected,
    #[error("a bulk action is already in progress")]
    ActionInProgress,
}

/// Error from a bulk action: rejected locally, or run and failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BulkActionError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Action(#[from] ActionFailure),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionPhase {
    #[default]
    Idle,
    Selecting,
}

/// Aggregate selection state. `selected_ids` is empty whenever `active` is false.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub active: bool,
    pub selected_ids: BTreeSet<String>,
}

/// One list entry as seen by the selection UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectableItem {
    pub id: String,
    pub selected: bool,
}

/// Ticket for an in-flight bulk action, returned by
/// [`SelectionController::begin_bulk_action`].
#[derive(Debug, PartialEq, Eq)]
pub struct PendingBulkAction {
    controller: u64,
    ticket: u64,
    ids: BTreeSet<String>,
}

impl PendingBulkAction {
    /// Ids captured when the action began.
    pub fn ids(&self) -> &BTreeSet<String> {
        &self.ids
    }
}

#[derive(Debug)]
pub struct SelectionController {
    id: u64,
    state: SelectionState,
    catalog: Vec<String>,
    in_flight: Option<u64>,
    next_ticket: u64,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self {
            id: NEXT_CONTROLLER_ID.fetch_add(1, Ordering::Relaxed),
            state: SelectionState::default(),
            catalog: Vec::new(),
            in_flight: None,
            next_ticket: 0,
        }
    }
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn phase(&self) -> SelectionPhase {
        if self.state.active { SelectionPhase::Selecting } else { SelectionPhase::Idle }
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn is_action_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Replace the list of items shown to the user. Any selection is dropped.
    pub fn load_items<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalog = ids.into_iter().map(Into::into).collect();
        self.state.selected_ids.clear();
        log::debug!("selection: loaded {} items", self.catalog.len());
    }

    /// Catalog entries with their current selected flag.
    pub fn items(&self) -> impl Iterator<Item = SelectableItem> + '_ {
        self.catalog.iter().map(|id| SelectableItem {
            id: id.clone(),
            selected: self.state.selected_ids.contains(id),
        })
    }

    /// Enter selection mode with nothing selected.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::AlreadyActive`] without changing state when
    /// already selecting; lenient callers can ignore it.
    pub fn enter_selection_mode(&mut self) -> Result<(), SelectionError> {
        if self.state.active {
            return Err(SelectionError::AlreadyActive);
        }
        self.state.active = true;
        self.state.selected_ids.clear();
        log::debug!("selection: entered");
        Ok(())
    }

    /// Flip membership of `id`. Ids need not be in the loaded catalog.
    ///
    /// Returns whether `id` is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::InvalidState`] outside selection mode.
    pub fn toggle_item(&mut self, id: &str) -> Result<bool, SelectionError> {
        if !self.state.active {
            return Err(SelectionError::InvalidState);
        }
        let selected = if self.state.selected_ids.remove(id) {
            false
        } else {
            self.state.selected_ids.insert(id.to_owned());
            true
        };
        Ok(selected)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.state.selected_ids.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.state.selected_ids.len()
    }

    /// Whether a bulk action could start now (drives the trash button).
    pub fn can_commit(&self) -> bool {
        self.state.active && !self.state.selected_ids.is_empty() && self.in_flight.is_none()
    }

    /// Leave selection mode and clear the selection. Idempotent.
    pub fn exit_selection_mode(&mut self) {
        if self.state.active {
            log::debug!("selection: exited");
        }
        self.state.active = false;
        self.state.selected_ids.clear();
    }

    /// Start a bulk action over the current selection.
    ///
    /// # Errors
    ///
    /// [`SelectionError::ActionInProgress`] while another action is pending,
    /// [`SelectionError::NothingSelected`] outside selection mode or with an
    /// empty selection.
    pub fn begin_bulk_action(&mut self) -> Result<PendingBulkAction, SelectionError> {
        if self.in_flight.is_some() {
            return Err(SelectionError::ActionInProgress);
        }
        if !self.state.active || self.state.selected_ids.is_empty() {
            return Err(SelectionError::NothingSelected);
        }
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.in_flight = Some(ticket);
        log::debug!("selection: bulk action {ticket} started on {} ids", self.state.selected_ids.len());
        Ok(PendingBulkAction { controller: self.id, ticket, ids: self.state.selected_ids.clone() })
    }

    fn owns(&self, pending: &PendingBulkAction) -> bool {
        pending.controller == self.id && self.in_flight == Some(pending.ticket)
    }

    /// Release an action that will never resolve. The selection is kept.
    pub fn abandon_bulk_action(&mut self, pending: PendingBulkAction) {
        if self.owns(&pending) {
            log::warn!("selection: bulk action {} abandoned before resolving", pending.ticket);
            self.in_flight = None;
        }
    }

    /// Apply the outcome of an action started with [`Self::begin_bulk_action`].
    ///
    /// # Errors
    ///
    /// Returns the action's failure unchanged; the selection is kept. On
    /// success the processed ids are also dropped from the loaded items.
    pub fn finish_bulk_action<T>(
        &mut self,
        pending: PendingBulkAction,
        outcome: Result<T, ActionFailure>,
    ) -> Result<T, BulkActionError> {
        if !self.owns(&pending) {
            log::warn!("selection: ignoring resolution of stale bulk action {}", pending.ticket);
            return outcome.map_err(BulkActionError::from);
        }
        self.in_flight = None;
        match outcome {
            Ok(value) => {
                log::debug!("selection: bulk action {} succeeded", pending.ticket);
                self.catalog.retain(|id| !pending.ids.contains(id));
                self.exit_selection_mode();
                Ok(value)
            }
            Err(ActionFailure::Cancelled) => {
                log::warn!("selection: bulk action {} cancelled", pending.ticket);
                Err(ActionFailure::Cancelled.into())
            }
            Err(failure) => {
                log::warn!("selection: bulk action {} failed: {failure}", pending.ticket);
                Err(failure.into())
            }
        }
    }

    /// Run a synchronous bulk action over the current selection.
    ///
    /// `action` is invoked exactly once, and only if the action could start.
    ///
    /// # Errors
    ///
    /// See [`Self::begin_bulk_action`] and [`Self::finish_bulk_action`].
    pub fn commit_with<T, F>(&mut self, action: F) -> Result<T, BulkActionError>
    where
        F: FnOnce(&BTreeSet<String>) -> Result<T, ActionFailure>,
    {
        let pending = self.begin_bulk_action()?;
        let outcome = action(pending.ids());
        self.finish_bulk_action(pending, outcome)
    }
}

/// Releases the in-flight ticket if the commit future is dropped mid-action.
struct InFlightGuard<'a> {
    controller: &'a RefCell<SelectionController>,
    pending: Option<PendingBulkAction>,
}

impl InFlightGuard<'_> {
    fn finish<T>(mut self, outcome: Result<T, ActionFailure>) -> Result<T, BulkActionError> {
        match self.pending.take() {
            Some(pending) => self.controller.borrow_mut().finish_bulk_action(pending, outcome),
            None => outcome.map_err(BulkActionError::from),
        }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => controller.abandon_bulk_action(pending),
            Err(_) => log::warn!("selection: controller busy, bulk action {} left in flight", pending.ticket),
        }
    }
}

/// Run an asynchronous bulk action against a shared controller.
///
/// The controller is only borrowed around the begin and finish steps, so
/// other event handlers may use it while the action is pending; a second
/// commit in that window fails with [`SelectionError::ActionInProgress`].
/// Dropping the returned future before it resolves keeps the selection and
/// frees the controller for the next commit.
///
/// # Errors
///
/// See [`SelectionController::begin_bulk_action`] and
/// [`SelectionController::finish_bulk_action`].
pub async fn commit_bulk_action<T, F, Fut>(
    controller: &RefCell<SelectionController>,
    action: F,
) -> Result<T, BulkActionError>
where
    F: FnOnce(BTreeSet<String>) -> Fut,
    Fut: Future<Output = Result<T, ActionFailure>>,
{
    let pending = controller.borrow_mut().begin_bulk_action()?;
    let ids = pending.ids().clone();
    let guard = InFlightGuard { controller, pending: Some(pending) };
    let outcome = action(ids).await;
    guard.finish(outcome)
}
