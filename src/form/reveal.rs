//! Timed reveal of the last submission.
//!
//! A successful submit flips the card to show the record, and a scheduled task
//! flips it back once [`REVEAL_DURATION`](super::controller::REVEAL_DURATION)
//! has passed. Each activation carries a fresh [`RevealTicket`]; an expiry
//! only takes effect if it carries the newest ticket, so a timer that fired
//! just before being replaced cannot hide a newer reveal.

use crate::form::state::FieldSet;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::AbortHandle;
use tracing::debug;

/// Snapshot of the fields taken when validation passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionRecord {
    fields: FieldSet,
}

impl SubmissionRecord {
    pub fn new(fields: FieldSet) -> Self {
        Self { fields }
    }

    pub fn username(&self) -> &str {
        &self.fields.username
    }

    pub fn email(&self) -> &str {
        &self.fields.email
    }

    pub fn password(&self) -> &str {
        &self.fields.password
    }
}

/// Identifies one activation of the reveal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RevealTicket(pub u64);

impl RevealTicket {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealState {
    active: bool,
    record: Option<SubmissionRecord>,
}

impl RevealState {
    /// Idle state showing a record restored from storage.
    pub fn restored(record: Option<SubmissionRecord>) -> Self {
        Self { active: false, record }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn record(&self) -> Option<&SubmissionRecord> {
        self.record.as_ref()
    }

    pub(crate) fn activate(&mut self, record: SubmissionRecord) {
        self.record = Some(record);
        self.active = true;
    }

    /// Flag goes down, the record stays on the card.
    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Runs the deferred deactivation for the controller.
///
/// Implementations keep at most one pending task: `schedule` replaces
/// whatever was pending.
pub trait RevealScheduler {
    fn schedule(&mut self, ticket: RevealTicket, after: Duration);
    fn cancel(&mut self);
}

impl<R: RevealScheduler + ?Sized> RevealScheduler for Box<R> {
    fn schedule(&mut self, ticket: RevealTicket, after: Duration) {
        (**self).schedule(ticket, after)
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }
}

type Notify = Arc<dyn Fn(RevealTicket) + Send + Sync>;

/// Sleeps on the tokio timer, then hands the ticket to `notify`.
///
/// Must be used from within a tokio runtime.
pub struct TokioRevealScheduler {
    notify: Notify,
    pending: Option<AbortHandle>,
}

impl TokioRevealScheduler {
    pub fn new(notify: impl Fn(RevealTicket) + Send + Sync + 'static) -> Self {
        Self {
            notify: Arc::new(notify),
            pending: None,
        }
    }
}

impl RevealScheduler for TokioRevealScheduler {
    fn schedule(&mut self, ticket: RevealTicket, after: Duration) {
        self.cancel();
        let notify = Arc::clone(&self.notify);
        let task = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            notify(ticket);
        });
        self.pending = Some(task.abort_handle());
        debug!(ticket = ticket.0, after_ms = after.as_millis() as u64, "reveal timer started");
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            debug!("reveal timer cancelled");
        }
    }
}

impl Drop for TokioRevealScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
