//! Diagnostics collected while normalizing a record.
//!
//! Rule failures never propagate to the caller. The dispatcher logs them
//! through `tracing` and appends a [`Diagnostic`] to the caller's
//! [`Diagnostics`], so batch jobs can report on malformed fields without
//! scraping logs.

use crate::record::Record;
use serde::Serialize;
use std::fmt;

/// One recovered failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Field key whose rule failed
    pub field: String,
    /// Human-readable failure message
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered list of diagnostics for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Diagnostics {
            entries: Vec::new(),
        }
    }

    /// Record a failure for `field`.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.entries.push(Diagnostic {
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Iterate over the diagnostics in the order they were raised.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Diagnostics raised for a single field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.entries.iter().filter(move |d| d.field == field)
    }

    /// Number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing went wrong.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the list.
    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

/// A normalized record together with the diagnostics raised on the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    /// The normalized record
    pub record: Record,
    /// Failures recovered while normalizing it
    pub diagnostics: Diagnostics,
}

impl NormalizeReport {
    /// True if every field normalized without a recovered failure.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
