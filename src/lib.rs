#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # refnorm: reference field normalization
//!
//! An upstream tagger splits a raw bibliographic string into a [`Record`]:
//! field names (`author`, `title`, `date`, `pages`, ...) mapped to raw text
//! fragments. This crate rewrites each field into a canonical form ready for
//! BibTeX-style export: person lists split into names, editions, years,
//! volumes and page ranges extracted, and mislabelled credits reclassified.
//!
//! ## Quick Start
//!
//! ```
//! use refnorm::{Normalizer, Record};
//!
//! let record = Record::builder()
//!     .text("author", "Smith, John, Doe, J")
//!     .fragments("title", ["Handbook of Things, 3rd ed.", "Lecture Notes"])
//!     .text("volume", "Vol. 4, 12-14")
//!     .build();
//!
//! let record = Normalizer::default().normalize(record);
//!
//! let authors = record.names("author").unwrap();
//! assert_eq!(authors.names(), ["Smith, John", "Doe, J."]);
//! assert_eq!(record.text("title"), Some("Handbook of Things"));
//! assert_eq!(record.integer("edition"), Some(3));
//! assert_eq!(record.text("container"), Some("Lecture Notes"));
//! assert_eq!(record.integer("volume"), Some(4));
//! assert_eq!(record.text("number"), Some("12-14"));
//! ```
//!
//! ## Fail-soft dispatch
//!
//! Normalization never returns an error. A rule that fails (a missing
//! fragment, an unreadable value, a number that overflows) leaves its field
//! exactly as it was; the failure is logged through `tracing` and, if asked
//! for, returned as a [`Diagnostic`] via [`Normalizer::normalize_report`].
//!
//! ## Modules
//!
//! - [`record`] - `Record`, `Value` and `NameList`
//! - [`normalizer`] - Rule registry and dispatcher
//! - [`rules`] - Per-field rules
//! - [`names`] - Person-list tokenizer
//! - [`edition`] - Edition marker extraction
//! - [`batch`] - Sequential and parallel batch processing
//! - [`json`] - JSON import/export of records
//! - [`config`] - Normalizer configuration
//! - [`diagnostics`] - Recovered failures
//! - [`error`] - Error types and result type

pub mod batch;
pub mod config;
pub mod diagnostics;
pub mod edition;
pub mod error;
pub mod json;
pub mod names;
pub mod normalizer;
mod patterns;
pub mod record;
pub mod rules;

pub use batch::{normalize_batch, normalize_batch_parallel, normalize_batch_reports_parallel};
pub use config::NormalizerConfig;
pub use diagnostics::{Diagnostic, Diagnostics, NormalizeReport};
pub use edition::extract_edition;
pub use error::{NormalizeError, Result};
pub use names::{dot_initials, normalize_names, tokenize_names};
pub use normalizer::Normalizer;
pub use record::{Fragments, NameList, Record, RecordBuilder, Value, UNMATCHED_PREFIX};
pub use rules::{keys, RuleContext, RuleFn};
