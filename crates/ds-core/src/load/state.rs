//! Load lifecycle state machine
//!
//! ```text
//! Initial ──pending──▶ Loading ──fulfilled(payload)──▶ Success
//!                        │  ▲
//!                        │  └────────pending──────────  Success / Error
//!                        └──rejected(reason)──▶ Error
//! ```
//!
//! There is no terminal state: a new request always restarts from `Loading`.
//! Every `pending` issues a [`LoadTicket`]; completions carrying an older
//! ticket belong to a superseded request and are dropped, so only the latest
//! request can commit.

use serde::{Deserialize, Serialize};

use crate::notification::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    Initial,
    Loading,
    Success,
    Error,
}

/// Signals emitted by the query-execution side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSignal<T> {
    Pending,
    Fulfilled(T),
    Rejected(String),
}

/// Identifies one request; issued when entering `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

/// What happened to a completion handed to [`LoadState::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Committed(LoadStatus),
    /// A newer request was started; the outcome was discarded.
    Superseded,
}

/// Lifecycle of one resource: status, value and error descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadState<T> {
    status: LoadStatus,
    resource: Option<T>,
    error: Notification,
    generation: u64,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self {
            status: LoadStatus::Initial,
            resource: None,
            error: Notification::none(),
            generation: 0,
        }
    }
}

impl<T> LoadState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn resource(&self) -> Option<&T> {
        self.resource.as_ref()
    }

    pub fn error(&self) -> &Notification {
        &self.error
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Enters `Loading`, dropping the previous value and error.
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.status = LoadStatus::Loading;
        self.resource = None;
        self.error = Notification::none();
        LoadTicket(self.generation)
    }

    /// Commits the outcome of the request identified by `ticket`.
    pub fn complete(&mut self, ticket: LoadTicket, outcome: Result<T, String>) -> Completion {
        if ticket.0 != self.generation || !self.is_loading() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "dropping completion of a superseded request"
            );
            return Completion::Superseded;
        }
        match outcome {
            Ok(payload) => self.succeed(payload),
            Err(reason) => self.fail(reason),
        }
        Completion::Committed(self.status)
    }

    /// Applies a bare lifecycle signal to the latest request.
    ///
    /// `Fulfilled`/`Rejected` outside `Loading` are ignored; returns whether
    /// the state changed.
    pub fn handle(&mut self, signal: LoadSignal<T>) -> bool {
        match signal {
            LoadSignal::Pending => {
                self.begin();
                true
            }
            LoadSignal::Fulfilled(payload) => {
                let ticket = LoadTicket(self.generation);
                matches!(self.complete(ticket, Ok(payload)), Completion::Committed(_))
            }
            LoadSignal::Rejected(reason) => {
                let ticket = LoadTicket(self.generation);
                matches!(self.complete(ticket, Err(reason)), Completion::Committed(_))
            }
        }
    }

    /// Back to `Initial`; outstanding tickets become stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.status = LoadStatus::Initial;
        self.resource = None;
        self.error = Notification::none();
    }

    fn succeed(&mut self, payload: T) {
        self.status = LoadStatus::Success;
        self.resource = Some(payload);
        self.error = Notification::none();
    }

    fn fail(&mut self, reason: String) {
        self.status = LoadStatus::Error;
        self.resource = None;
        self.error = Notification::error(reason);
    }
}
