//! Sign-up form core: field state, validation rules and the submission
//! state machine. Nothing here knows about the terminal.

pub mod controller;
pub mod reveal;
pub mod state;
pub mod validation;

pub use controller::SubmissionController;
pub use reveal::{RevealScheduler, RevealTicket, SubmissionRecord, TokioRevealScheduler};
pub use state::FieldName;
