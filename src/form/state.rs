//! Field values and per-field error messages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The four inputs of the sign-up form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::Username,
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Name used in the persisted record.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::Username => "username",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldName::Username => "Username",
            FieldName::Email => "Email",
            FieldName::Password => "Password",
            FieldName::ConfirmPassword => "Confirm Password",
        }
    }

    /// Password inputs are masked when rendered.
    pub fn is_secret(self) -> bool {
        matches!(self, FieldName::Password | FieldName::ConfirmPassword)
    }

    pub fn next(self) -> FieldName {
        match self {
            FieldName::Username => FieldName::Email,
            FieldName::Email => FieldName::Password,
            FieldName::Password => FieldName::ConfirmPassword,
            FieldName::ConfirmPassword => FieldName::Username,
        }
    }

    pub fn prev(self) -> FieldName {
        match self {
            FieldName::Username => FieldName::ConfirmPassword,
            FieldName::Email => FieldName::Username,
            FieldName::Password => FieldName::Email,
            FieldName::ConfirmPassword => FieldName::Password,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current value of every field. Serializes to the `userData` JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldSet {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FieldSet {
    pub fn get(&self, name: FieldName) -> &str {
        match name {
            FieldName::Username => &self.username,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, name: FieldName, value: String) {
        let slot = match name {
            FieldName::Username => &mut self.username,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }
}

/// Error message per field; a field without an entry has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    messages: BTreeMap<FieldName, String>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` for `name`. Empty messages are not stored.
    pub fn insert(&mut self, name: FieldName, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.messages.remove(&name);
        } else {
            self.messages.insert(name, message);
        }
    }

    pub fn remove(&mut self, name: FieldName) -> Option<String> {
        self.messages.remove(&name)
    }

    pub fn get(&self, name: FieldName) -> Option<&str> {
        self.messages.get(&name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Entries in field display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.messages.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// First failing field in display order.
    pub fn first(&self) -> Option<FieldName> {
        self.messages.keys().next().copied()
    }
}

/// Values being edited plus the errors from the last submit attempt.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: FieldSet,
    errors: ErrorSet,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` and drop any stale error on that field. Never validates.
    pub fn set_field(&mut self, name: FieldName, value: String) {
        self.fields.set(name, value);
        self.errors.remove(name);
    }

    /// Empties every field; errors are left alone.
    pub fn reset_all(&mut self) {
        self.fields = FieldSet::default();
    }

    pub fn snapshot(&self) -> FieldSet {
        self.fields.clone()
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.fields.get(name)
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// Wholesale replacement, never a merge.
    pub(crate) fn replace_errors(&mut self, errors: ErrorSet) {
        self.errors = errors;
    }
}
