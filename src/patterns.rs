//! Compiled regular expressions shared by the field rules.
//!
//! All patterns are compiled once on first use and are read-only afterwards,
//! so rules can run concurrently from any number of threads.
//!
//! Digit classes are spelled `[0-9]` rather than `\d` because captured runs
//! are parsed as integers; word classes stay Unicode-aware.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading or trailing non-word characters.
    pub(crate) static ref OUTER_NON_WORD: Regex = Regex::new(r"^\W+|\W+$").expect("valid regex");

    /// Trailing `. , : ;` and whitespace.
    pub(crate) static ref TRAILING_PUNCT: Regex = Regex::new(r"[.,:;\s]+$").expect("valid regex");

    /// Editor credit at the very end of an author string ("Doe, ed.").
    pub(crate) static ref EDITOR_SUFFIX: Regex =
        Regex::new(r"(?i)(?:^|\W)\s*\beds?(?:itors?)?\b\W*$").expect("valid regex");

    /// Editor markers anywhere in an editor string, with the punctuation around them.
    pub(crate) static ref EDITOR_MARKER: Regex =
        Regex::new(r"(?i)\W*\beds?(?:itors?)?\b\.?\)?").expect("valid regex");

    /// "et al." and everything after it, across line breaks.
    pub(crate) static ref ET_AL: Regex =
        Regex::new(r"(?is)\s*\bet\.?\s*al\b.*$").expect("valid regex");

    /// Leading "in " of an editor string.
    pub(crate) static ref LEADING_IN: Regex = Regex::new(r"(?i)^in\s+").expect("valid regex");

    /// Leading "in" of a booktitle, optionally followed by a colon.
    pub(crate) static ref LEADING_IN_BOOKTITLE: Regex =
        Regex::new(r"(?i)^in\b[\s:]*").expect("valid regex");

    /// Translator markers ("trans.", "translated", "translation") with surrounding punctuation.
    pub(crate) static ref TRANSLATOR_MARKER: Regex =
        Regex::new(r"(?i)\W*\btrans\w*\b\W*").expect("valid regex");

    /// The word "by" between translator markers and names.
    pub(crate) static ref TRANSLATOR_BY: Regex =
        Regex::new(r"(?i)(?:^|\s+)by\s+").expect("valid regex");

    /// "3rd ed.", "2 edition", "(4th ed)".
    pub(crate) static ref EDITION: Regex = Regex::new(
        r"(?i)\W*([0-9]+)(?:st|nd|rd|th)?\s*ed(?:ition\b|\.|\b)\W*"
    )
    .expect("valid regex");

    /// Dissertation abstracts container.
    pub(crate) static ref DISSERTATION_ABSTRACTS: Regex =
        Regex::new(r"(?i)dissertation abstracts").expect("valid regex");

    /// "Section B: The Sciences and Engineering" and the rest of the string,
    /// across line breaks.
    pub(crate) static ref DISSERTATION_SECTION: Regex =
        Regex::new(r"(?is)\s*\bsection\s+\w\s*:\s*([\w\s]+).*$").expect("valid regex");

    /// A four-digit year anywhere.
    pub(crate) static ref YEAR: Regex = Regex::new(r"([0-9]{4})").expect("valid regex");

    /// "Vol. 4, 12-14": volume plus a ranged issue.
    pub(crate) static ref VOLUME_RANGE: Regex =
        Regex::new(r"[^0-9]*([0-9]+)[^0-9]+([0-9]+[\s&-]+[0-9]+)").expect("valid regex");

    /// "4(2)": volume plus issue.
    pub(crate) static ref VOLUME_NUMBER: Regex =
        Regex::new(r"[^0-9]*([0-9]+)[^0-9]+([0-9]+)").expect("valid regex");

    /// Any digit run.
    pub(crate) static ref DIGITS: Regex = Regex::new(r"([0-9]+)").expect("valid regex");

    /// "45.2(2012):100-110": volume, issue, year, then the pages.
    pub(crate) static ref CITATION: Regex = Regex::new(
        r"([0-9]+)(?:\.([0-9]+))?\s*(?:\(([0-9]{4})\))?\s*:\s*([0-9].*)"
    )
    .expect("valid regex");

    /// Two digit runs separated by non-digits.
    pub(crate) static ref PAGE_RANGE: Regex =
        Regex::new(r"([0-9]+)[^0-9]+([0-9]+)").expect("valid regex");

    /// A bare capital initial and the character after it. Apostrophes do not
    /// end an initial ("O'Brien").
    pub(crate) static ref INITIAL: Regex =
        Regex::new(r"\b(\p{Lu})([^\w'’]|$)").expect("valid regex");
}
