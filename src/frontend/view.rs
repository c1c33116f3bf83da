//! View state for the message panel.
//!
//! Each fetch is issued a [`Ticket`]. A result is applied only when its ticket
//! is still the newest one, so overlapping refreshes settle on the last
//! request made rather than the last response received.

use super::client::{FetchError, MessageSource};
use crate::types::message::MessageResponse;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ViewState {
    Loading,
    Error { message: String },
    Success { data: MessageResponse },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Requested,
    Failed(String),
    Loaded(MessageResponse),
}

impl ViewState {
    pub fn apply(self, event: ViewEvent) -> ViewState {
        match event {
            ViewEvent::Requested => ViewState::Loading,
            ViewEvent::Failed(message) => ViewState::Error { message },
            ViewEvent::Loaded(data) => ViewState::Success { data },
        }
    }
}

impl From<Result<MessageResponse, FetchError>> for ViewEvent {
    fn from(result: Result<MessageResponse, FetchError>) -> Self {
        match result {
            Ok(data) => ViewEvent::Loaded(data),
            Err(e) => ViewEvent::Failed(e.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

pub struct MessageView {
    state: Mutex<ViewState>,
    latest: AtomicU64,
    mounted: AtomicBool,
}

impl Default for MessageView {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageView {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ViewState::Loading),
            latest: AtomicU64::new(0),
            mounted: AtomicBool::new(false),
        }
    }

    // The state is replaced wholesale on every transition, so a panic while
    // holding the lock cannot leave it half-written.
    fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn transition(state: &mut ViewState, event: ViewEvent) {
        let current = std::mem::replace(state, ViewState::Loading);
        *state = current.apply(event);
    }

    pub fn snapshot(&self) -> ViewState {
        self.lock().clone()
    }

    pub fn begin(&self) -> Ticket {
        let mut state = self.lock();
        let ticket = Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1);
        Self::transition(&mut state, ViewEvent::Requested);
        ticket
    }

    /// Returns `false` when a newer request has started since `ticket`.
    pub fn complete(&self, ticket: Ticket, result: Result<MessageResponse, FetchError>) -> bool {
        let mut state = self.lock();
        let latest = self.latest.load(Ordering::SeqCst);
        if ticket.0 != latest {
            tracing::debug!(ticket = ticket.0, latest, "discarding stale fetch result");
            return false;
        }
        Self::transition(&mut state, result.into());
        true
    }

    pub async fn load(&self, source: &dyn MessageSource) -> bool {
        let ticket = self.begin();
        let result = source.fetch_message().await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, ticket = ticket.0, "message fetch failed");
        }
        self.complete(ticket, result)
    }

    /// Loads on first call only.
    pub async fn mount(&self, source: &dyn MessageSource) -> bool {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.load(source).await
    }

    pub async fn refresh(&self, source: &dyn MessageSource) -> bool {
        self.mounted.store(true, Ordering::SeqCst);
        self.load(source).await
    }
}
