//! Per-field normalization rules.
//!
//! Each rule is a plain function with the [`RuleFn`] signature. It reads the
//! fragments stored under its field, rewrites that field and may add or
//! delete other keys (`year` replaces `date`, `editor` replaces `author`).
//! Rules report unexpected conditions by returning an error; the
//! [`Normalizer`] turns those into diagnostics and discards the rule's
//! partial changes.
//!
//! - [`default`] - fallback for fields without a dedicated rule
//! - [`contributors`] - `author`, `editor`, `translator`
//! - [`titles`] - `title`, `booktitle`, `container`
//! - [`numbering`] - `date`, `volume`, `pages`

pub mod contributors;
pub mod default;
pub mod numbering;
pub mod titles;

use crate::config::NormalizerConfig;
use crate::diagnostics::Diagnostics;
use crate::error::{NormalizeError, Result};
use crate::normalizer::Normalizer;
use crate::patterns::{OUTER_NON_WORD, TRAILING_PUNCT};
use crate::record::Record;
use regex::Captures;
use tracing::warn;

/// Field keys read or written by the built-in rules.
pub mod keys {
    /// Person names credited as authors
    pub const AUTHOR: &str = "author";
    /// Person names credited as editors
    pub const EDITOR: &str = "editor";
    /// Person names credited as translators
    pub const TRANSLATOR: &str = "translator";
    /// Work title
    pub const TITLE: &str = "title";
    /// Title of the book an item appears in
    pub const BOOKTITLE: &str = "booktitle";
    /// Journal or series the item appears in
    pub const CONTAINER: &str = "container";
    /// Raw date text
    pub const DATE: &str = "date";
    /// Extracted four-digit year
    pub const YEAR: &str = "year";
    /// Volume number
    pub const VOLUME: &str = "volume";
    /// Issue number or range
    pub const NUMBER: &str = "number";
    /// Page or page range
    pub const PAGES: &str = "pages";
    /// Edition number
    pub const EDITION: &str = "edition";
    /// Set when an author list was truncated with "et al."
    pub const ETAL: &str = "etal";
    /// Entry type hint, e.g. `phdthesis`
    pub const TYPE: &str = "type";
    /// Subject category from dissertation abstracts
    pub const CATEGORY: &str = "category";
}

/// Signature of a field rule.
pub type RuleFn = fn(&mut Record, &mut RuleContext<'_>) -> Result<()>;

/// What a rule can see besides the record: the field it was dispatched for,
/// the configuration, and the dispatcher for nested fields.
#[derive(Debug)]
pub struct RuleContext<'a> {
    normalizer: &'a Normalizer,
    key: &'a str,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> RuleContext<'a> {
    pub(crate) fn new(
        normalizer: &'a Normalizer,
        key: &'a str,
        diagnostics: &'a mut Diagnostics,
    ) -> Self {
        RuleContext {
            normalizer,
            key,
            diagnostics,
        }
    }

    /// The field key this rule was dispatched for.
    #[must_use]
    pub fn key(&self) -> &str {
        self.key
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &NormalizerConfig {
        self.normalizer.config()
    }

    /// Record a recoverable problem with this field without failing the rule.
    pub fn report(&mut self, err: &NormalizeError) {
        warn!(field = self.key, error = %err, "part of field skipped");
        self.diagnostics.push(self.key, err.to_string());
    }

    /// Dispatch another field of the same record.
    ///
    /// Failures of the nested rule are recorded and do not fail the caller.
    /// Returns true if the nested rule succeeded.
    pub fn apply(&mut self, key: &str, record: &mut Record) -> bool {
        self.normalizer
            .apply_with_diagnostics(key, record, self.diagnostics)
    }
}

/// Split a field into its primary fragment and the fragments after it.
///
/// # Errors
///
/// Returns an error if the field is missing, holds a flag, or has no
/// fragments.
pub(crate) fn take_fragments(record: &Record, key: &str) -> Result<(String, Vec<String>)> {
    let mut fragments = record.fragments(key)?.into_iter();
    let primary = fragments
        .next()
        .ok_or_else(|| NormalizeError::MissingFragment(key.to_string()))?;
    Ok((primary, fragments.collect()))
}

/// Strip leading and trailing non-word characters.
pub(crate) fn strip_outer(text: &str) -> String {
    OUTER_NON_WORD.replace_all(text, "").into_owned()
}

/// Strip trailing `. , : ;` and whitespace.
pub(crate) fn strip_trailing_punct(text: &str) -> String {
    TRAILING_PUNCT.replace(text, "").into_owned()
}

/// Prefer `cleaned`, unless cleaning erased a non-empty input.
pub(crate) fn non_empty_or(cleaned: String, original: String) -> String {
    if cleaned.trim().is_empty() && !original.trim().is_empty() {
        original
    } else {
        cleaned
    }
}

/// Text of a capture group, empty if it did not participate.
pub(crate) fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}
