//! Splitting free-text person lists into individual names.
//!
//! A contributor string such as `"Smith, John, Doe, Jane"` or
//! `"J Smith & K. Lee, Jr."` holds several names joined by `and`, `&` or
//! commas. [`tokenize_names`] splits it in one left-to-right scan;
//! [`normalize_names`] then trims each name, dots bare initials and builds a
//! [`NameList`].
//!
//! # Comma handling
//!
//! The first comma inside a name is the `Last, First` separator and is
//! kept. A second comma in the same name closes it, so
//! `"Smith, John, Doe, Jane"` yields two names. Generational suffixes and
//! degrees (`Jr`, `Sr`, `PhD`, `MD`, `Esq`) bring their own comma and never
//! count towards that limit.

use crate::patterns::INITIAL;
use crate::record::NameList;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"^\s+").expect("valid regex");
    static ref CONJUNCTION: Regex = Regex::new(r"^(?:and\b|&)").expect("valid regex");
    static ref SUFFIX: Regex =
        Regex::new(r"(?i)^,?\s*(?:jr|sr|ph\.?d|m\.?d|esq)\b\.?").expect("valid regex");
    static ref WORD: Regex = Regex::new(r"^\w+").expect("valid regex");
}

/// Split a string into raw name strings.
///
/// Names are returned untrimmed, and the trailing buffer is always flushed,
/// so the result may end with an empty or whitespace-only entry
/// (`"Smith and"` gives `["Smith ", ""]`).
///
/// # Examples
///
/// ```
/// use refnorm::tokenize_names;
///
/// let names = tokenize_names("Smith, John, Doe, Jane");
/// assert_eq!(names, vec!["Smith, John", " Doe, Jane"]);
/// ```
#[must_use]
pub fn tokenize_names(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut current = String::new();
    let mut commas = 0usize;
    let mut rest = text;

    while !rest.is_empty() {
        let consumed = if let Some(m) = WHITESPACE.find(rest) {
            current.push(' ');
            m.end()
        } else if let Some(m) = CONJUNCTION.find(rest) {
            names.push(std::mem::take(&mut current));
            commas = 0;
            m.end()
        } else if let Some(m) = SUFFIX.find(rest) {
            current.push_str(m.as_str());
            m.end()
        } else if rest.starts_with(',') {
            if commas > 0 {
                names.push(std::mem::take(&mut current));
                commas = 0;
            } else {
                current.push(',');
                commas += 1;
            }
            1
        } else if let Some(m) = WORD.find(rest) {
            current.push_str(m.as_str());
            m.end()
        } else {
            let len = rest.chars().next().map_or(rest.len(), char::len_utf8);
            current.push_str(&rest[..len]);
            len
        };
        rest = &rest[consumed..];
    }

    names.push(current);
    names
}

/// Add a period after every bare capital initial.
///
/// `"J Smith"` becomes `"J. Smith"`; an initial that already has its period
/// is left alone.
#[must_use]
pub fn dot_initials(name: &str) -> String {
    INITIAL
        .replace_all(name, |caps: &Captures<'_>| {
            let letter = &caps[1];
            match caps.get(2).map_or("", |m| m.as_str()) {
                "." => format!("{letter}."),
                next => format!("{letter}.{next}"),
            }
        })
        .into_owned()
}

/// Tokenize, clean and join a contributor string.
///
/// Empty names (from a dangling `and` or a trailing comma) are dropped.
///
/// # Examples
///
/// ```
/// use refnorm::normalize_names;
///
/// let names = normalize_names("Smith, J and Doe, Jane", " and ");
/// assert_eq!(names.names(), ["Smith, J.", "Doe, Jane"]);
/// assert_eq!(names.joined(), "Smith, J. and Doe, Jane");
/// ```
#[must_use]
pub fn normalize_names(text: &str, separator: &str) -> NameList {
    let names = tokenize_names(text)
        .iter()
        .map(|name| dot_initials(name.trim()))
        .filter(|name| !name.is_empty())
        .collect();
    NameList::new(names, separator)
}
