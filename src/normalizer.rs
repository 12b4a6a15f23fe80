//! Rule registry and dispatcher.
//!
//! [`Normalizer`] maps field keys to [`RuleFn`]s and routes each field of a
//! record to its rule, falling back to
//! [`normalize_default`](crate::rules::default::normalize_default) for keys
//! without one.
//!
//! Dispatch is fail-soft: a rule runs on a working copy of the record, and
//! the copy replaces the caller's record only when the rule succeeds. Errors
//! and panics are logged, recorded as diagnostics, and leave the record as
//! it was before the rule ran.
//!
//! # Examples
//!
//! ```
//! use refnorm::{Normalizer, Record};
//!
//! let normalizer = Normalizer::default();
//! let record = Record::builder()
//!     .text("author", "Doe, Jane et al.")
//!     .text("date", "March 2012")
//!     .text("pages", "45(2012):100-110")
//!     .build();
//!
//! let record = normalizer.normalize(record);
//! assert_eq!(record.text("author"), Some("Doe, Jane"));
//! assert_eq!(record.flag("etal"), Some(true));
//! assert_eq!(record.integer("year"), Some(2012));
//! assert_eq!(record.integer("volume"), Some(45));
//! assert_eq!(record.text("pages"), Some("100--110"));
//! ```

use crate::config::NormalizerConfig;
use crate::diagnostics::{Diagnostics, NormalizeReport};
use crate::error::{NormalizeError, Result};
use crate::record::{Record, Value};
use crate::rules::contributors::{normalize_author, normalize_editor, normalize_translator};
use crate::rules::default::normalize_default;
use crate::rules::keys::{
    AUTHOR, BOOKTITLE, CONTAINER, DATE, EDITOR, PAGES, TITLE, TRANSLATOR, VOLUME,
};
use crate::rules::numbering::{normalize_date, normalize_pages, normalize_volume};
use crate::rules::titles::{normalize_booktitle, normalize_container, normalize_title};
use crate::rules::{RuleContext, RuleFn};
use indexmap::IndexMap;
use std::any::Any;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{trace, warn};

/// Stateless field dispatcher.
///
/// Holds only the configuration and the rule table, both fixed after
/// construction, so one instance can be shared across threads.
#[derive(Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    rules: IndexMap<String, RuleFn>,
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("config", &self.config)
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer::new(NormalizerConfig::default())
    }
}

impl Normalizer {
    /// Create a normalizer with the built-in rules.
    #[must_use]
    pub fn new(config: NormalizerConfig) -> Self {
        let builtin: [(&str, RuleFn); 9] = [
            (AUTHOR, normalize_author),
            (EDITOR, normalize_editor),
            (TRANSLATOR, normalize_translator),
            (TITLE, normalize_title),
            (BOOKTITLE, normalize_booktitle),
            (CONTAINER, normalize_container),
            (DATE, normalize_date),
            (VOLUME, normalize_volume),
            (PAGES, normalize_pages),
        ];
        Normalizer {
            config,
            rules: builtin
                .into_iter()
                .map(|(key, rule)| (key.to_string(), rule))
                .collect(),
        }
    }

    /// Register a rule for `key`, replacing any existing one.
    #[must_use]
    pub fn with_rule(mut self, key: impl Into<String>, rule: RuleFn) -> Self {
        self.rules.insert(key.into(), rule);
        self
    }

    /// True if `key` has a dedicated rule.
    #[must_use]
    pub fn has_rule(&self, key: &str) -> bool {
        self.rules.contains_key(key)
    }

    /// Keys with a dedicated rule, in registration order.
    pub fn rule_keys(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize one field and return the record.
    ///
    /// Never fails: see [`Normalizer::apply_with_diagnostics`].
    #[must_use]
    pub fn apply(&self, key: &str, mut record: Record) -> Record {
        self.apply_in_place(key, &mut record);
        record
    }

    /// Normalize one field in place. Returns true if the rule succeeded.
    pub fn apply_in_place(&self, key: &str, record: &mut Record) -> bool {
        let mut diagnostics = Diagnostics::new();
        self.apply_with_diagnostics(key, record, &mut diagnostics)
    }

    /// Normalize one field in place, recording failures in `diagnostics`.
    ///
    /// On failure the record is exactly as it was before the call. Returns
    /// true if the rule succeeded.
    pub fn apply_with_diagnostics(
        &self,
        key: &str,
        record: &mut Record,
        diagnostics: &mut Diagnostics,
    ) -> bool {
        let rule = self
            .rules
            .get(key)
            .copied()
            .unwrap_or(normalize_default as RuleFn);
        trace!(field = key, custom = self.has_rule(key), "dispatching field");

        let mut working = record.clone();
        match self.run_rule(rule, key, &mut working, diagnostics) {
            Ok(()) => {
                *record = working;
                true
            },
            Err(err) => {
                warn!(field = key, error = %err, "field left unnormalized");
                diagnostics.push(key, err.to_string());
                false
            },
        }
    }

    fn run_rule(
        &self,
        rule: RuleFn,
        key: &str,
        working: &mut Record,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        let mut ctx = RuleContext::new(self, key, diagnostics);
        catch_unwind(AssertUnwindSafe(|| rule(working, &mut ctx))).unwrap_or_else(|payload| {
            Err(NormalizeError::RulePanicked {
                field: key.to_string(),
                message: panic_message(payload.as_ref()),
            })
        })
    }

    /// Normalize every raw field of a record.
    ///
    /// The keys present on entry are dispatched in order. Keys removed by an
    /// earlier rule, and keys whose value is no longer raw text, are
    /// skipped; keys added during the pass are not dispatched.
    #[must_use]
    pub fn normalize(&self, record: Record) -> Record {
        self.normalize_report(record).record
    }

    /// Like [`Normalizer::normalize`], also returning the diagnostics.
    #[must_use]
    pub fn normalize_report(&self, mut record: Record) -> NormalizeReport {
        let mut diagnostics = Diagnostics::new();
        let keys: Vec<String> = record.keys().map(str::to_string).collect();

        for key in &keys {
            if record.get(key).is_some_and(Value::is_raw) {
                self.apply_with_diagnostics(key, &mut record, &mut diagnostics);
            }
        }

        NormalizeReport {
            record,
            diagnostics,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
