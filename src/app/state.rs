use crate::form::{FieldName, RevealScheduler, SubmissionController};
use crate::storage::Storage;

pub type Controller = SubmissionController<Box<dyn Storage>, Box<dyn RevealScheduler>>;

#[derive(Debug, Clone, PartialEq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

pub struct AppState {
    pub controller: Controller,
    pub focus: FieldName,
    pub status_message: Option<StatusMessage>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            focus: FieldName::Username,
            status_message: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.dirty = true;
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.dirty = true;
    }

    pub fn info_message(&mut self, text: String) {
        self.status_message = Some(StatusMessage {
            text,
            kind: StatusKind::Info,
        });
        self.dirty = true;
    }

    pub fn error_message(&mut self, text: String) {
        self.status_message = Some(StatusMessage {
            text,
            kind: StatusKind::Error,
        });
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.text.clone();
        }
        match self.controller.reveal().record() {
            Some(record) => format!("Last registration: {}", record.username()),
            None => "No registration yet".to_string(),
        }
    }
}
