//! Submission state machine: validate, persist, reset, reveal.

use crate::form::reveal::{RevealScheduler, RevealState, RevealTicket, SubmissionRecord};
use crate::form::state::{ErrorSet, FieldName, FieldSet, FormState};
use crate::form::validation;
use crate::storage::Storage;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Storage key of the last successful submission.
pub const STORAGE_KEY: &str = "userData";

/// How long the card stays flipped after a submission.
pub const REVEAL_DURATION: Duration = Duration::from_secs(10);

/// The submitted fields broke at least one rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationError(pub ErrorSet);

impl ValidationError {
    pub fn errors(&self) -> &ErrorSet {
        &self.0
    }
}

/// Owns the form, the reveal state and the single pending reveal timer.
pub struct SubmissionController<S, R> {
    form: FormState,
    reveal: RevealState,
    storage: S,
    scheduler: R,
    ticket: RevealTicket,
}

impl<S, R> SubmissionController<S, R>
where
    S: Storage,
    R: RevealScheduler,
{
    /// Cold start: show whatever record survives in storage, without
    /// flipping the card. Unreadable data counts as no record.
    pub fn restore(storage: S, scheduler: R) -> Self {
        let record = load_record(&storage);
        match &record {
            Some(r) => info!(username = %r.username(), "restored last submission"),
            None => debug!("no previous submission"),
        }
        Self {
            form: FormState::new(),
            reveal: RevealState::restored(record),
            storage,
            scheduler,
            ticket: RevealTicket::default(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    /// Edit intent from the presentation layer.
    pub fn set_field(&mut self, name: FieldName, value: String) {
        debug!(field = %name, len = value.len(), "field updated");
        self.form.set_field(name, value);
    }

    /// Submit intent: validates whatever the form currently holds.
    pub fn submit(&mut self) -> Result<SubmissionRecord, ValidationError> {
        let fields = self.form.snapshot();
        self.attempt_submit(fields)
    }

    /// Validate `fields` and, if every rule passes, persist them, clear the
    /// form and flip the card. On failure nothing but the form's errors
    /// changes.
    pub fn attempt_submit(&mut self, fields: FieldSet) -> Result<SubmissionRecord, ValidationError> {
        let errors = validation::validate(&fields);
        self.form.replace_errors(errors.clone());

        if !errors.is_empty() {
            info!(
                failed = ?errors.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(),
                "submission rejected"
            );
            return Err(ValidationError(errors));
        }

        let record = SubmissionRecord::new(fields);
        self.persist(&record);
        self.form.reset_all();

        self.ticket = self.ticket.next();
        self.reveal.activate(record.clone());
        self.scheduler.cancel();
        self.scheduler.schedule(self.ticket, REVEAL_DURATION);

        info!(username = %record.username(), ticket = self.ticket.0, "submission accepted");
        Ok(record)
    }

    /// Timer callback. Returns `true` if the reveal was turned off; tickets
    /// from superseded activations are ignored.
    pub fn expire(&mut self, ticket: RevealTicket) -> bool {
        if ticket != self.ticket || !self.reveal.is_active() {
            debug!(ticket = ticket.0, current = self.ticket.0, "ignoring stale reveal expiry");
            return false;
        }
        self.reveal.deactivate();
        debug!(ticket = ticket.0, "reveal ended");
        true
    }

    fn persist(&mut self, record: &SubmissionRecord) {
        let value = match serde_json::to_string(record) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "could not serialize submission");
                return;
            }
        };
        if let Err(e) = self.storage.save(STORAGE_KEY, &value) {
            warn!(error = %e, "could not persist submission");
        }
    }
}

fn load_record<S: Storage>(storage: &S) -> Option<SubmissionRecord> {
    let raw = match storage.load(STORAGE_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!(error = %e, "could not read stored submission");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!(error = %e, "ignoring malformed stored submission");
            None
        }
    }
}
