//! Error types for calculator input handling

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Field-level validation failures for one calculator submission.
///
/// Maps each failing field name to the message shown next to that field.
/// Missing and out-of-range values produce the same message, so there is
/// only one kind of error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("invalid input: {}", summarize(.errors))]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field. The first message recorded for a field wins.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Fold another set of failures into this one, keeping existing messages
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.errors {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn summarize(errors: &BTreeMap<&'static str, String>) -> String {
    errors
        .iter()
        .map(|(field, msg)| format!("{} ({})", msg, field))
        .collect::<Vec<_>>()
        .join("; ")
}

/// A selector value outside its allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Compounding frequency must be one of 1, 2, 4 or 12")]
    Compounding(String),

    #[error("Contribution frequency must be one of 1, 2, 4 or 12")]
    ContributionFrequency(String),
}
