//! JSON import and export of records.
//!
//! The JSON form is a flat object: each key is a field, each value is a
//! string, an array of fragments, a number, a boolean, or a name list
//! object (`{"names": [...], "joined": "..."}`).
//!
//! # Examples
//!
//! ```
//! use refnorm::json;
//!
//! let input = r#"{"title": ["Handbook, 3rd ed.", "Journal"], "date": "2012"}"#;
//! let record = json::record_from_json(input)?;
//! assert_eq!(record.len(), 2);
//!
//! let value = json::record_to_json(&record)?;
//! assert_eq!(value["date"], "2012");
//! # Ok::<(), refnorm::NormalizeError>(())
//! ```

use crate::error::Result;
use crate::record::Record;
use serde_json::Value;

/// Parse a record from a JSON object.
///
/// # Errors
///
/// Returns an error if the input is not a JSON object of supported values.
pub fn record_from_json(input: &str) -> Result<Record> {
    Ok(serde_json::from_str(input)?)
}

/// Convert a record to a JSON value.
///
/// # Errors
///
/// Returns an error if the record cannot be represented as JSON.
pub fn record_to_json(record: &Record) -> Result<Value> {
    Ok(serde_json::to_value(record)?)
}

/// Convert a record to a compact JSON string.
///
/// # Errors
///
/// Returns an error if the record cannot be represented as JSON.
pub fn record_to_json_string(record: &Record) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

/// Parse newline-delimited JSON records.
///
/// Blank lines are skipped. A malformed line only fails its own entry.
#[must_use]
pub fn records_from_json_lines(input: &str) -> Vec<Result<Record>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(record_from_json)
        .collect()
}
