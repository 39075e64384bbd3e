//! Field rules for the sign-up form.
//!
//! Every rule runs on every submit; the result collects one message per
//! failing field rather than stopping at the first failure.

use crate::form::state::{ErrorSet, FieldName, FieldSet};
use regex::Regex;
use std::sync::LazyLock;

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Minimum 6 characters";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";

/// Measured in UTF-16 code units, so an emoji counts as two.
pub const MIN_PASSWORD_UNITS: usize = 6;

/// Unanchored: any `x@y.z` run of non-blank characters inside the value
/// passes. U+FEFF counts as blank alongside Unicode whitespace.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\s\x{FEFF}]+@[^\s\x{FEFF}]+\.[^\s\x{FEFF}]+").expect("Invalid email regex")
});

fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn is_blank(value: &str) -> bool {
    value.trim_matches(is_blank_char).is_empty()
}

/// Run all rules against `fields`.
pub fn validate(fields: &FieldSet) -> ErrorSet {
    let mut errors = ErrorSet::new();

    if is_blank(&fields.username) {
        errors.insert(FieldName::Username, USERNAME_REQUIRED);
    }

    if is_blank(&fields.email) {
        errors.insert(FieldName::Email, EMAIL_REQUIRED);
    } else if !EMAIL_REGEX.is_match(&fields.email) {
        errors.insert(FieldName::Email, EMAIL_INVALID);
    }

    // Password is not trimmed: "      " is a valid six-character password
    if fields.password.is_empty() {
        errors.insert(FieldName::Password, PASSWORD_REQUIRED);
    } else if fields.password.encode_utf16().count() < MIN_PASSWORD_UNITS {
        errors.insert(FieldName::Password, PASSWORD_TOO_SHORT);
    }

    if fields.password != fields.confirm_password {
        errors.insert(FieldName::ConfirmPassword, PASSWORDS_DIFFER);
    }

    errors
}
