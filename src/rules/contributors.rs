//! Rules for person-name fields: authors, editors and translators.
//!
//! All three end in [`normalize_names`], which stores a [`NameList`] under
//! the field. They differ in the credit markers they strip first.
//!
//! [`NameList`]: crate::NameList

use super::keys::{AUTHOR, EDITION, EDITOR, ETAL, TRANSLATOR};
use super::{strip_outer, take_fragments, RuleContext};
use crate::edition::parse_number;
use crate::error::{NormalizeError, Result};
use crate::names::normalize_names;
use crate::patterns::{
    DIGITS, EDITOR_MARKER, EDITOR_SUFFIX, ET_AL, LEADING_IN, TRANSLATOR_BY, TRANSLATOR_MARKER,
};
use crate::record::{Record, Value};
use tracing::debug;

/// Normalize the `author` field.
///
/// An author credit ending in an editor marker ("Doe, Jane, ed.") is moved
/// to `editor` together with its other fragments and handed to
/// [`normalize_editor`], provided the record has no editor yet. Otherwise
/// the marker is dropped and the text stays an author list. A trailing
/// "et al." is cut off and sets `etal`, whatever follows it.
///
/// # Errors
///
/// Returns an error if the field is missing or unreadable.
pub fn normalize_author(record: &mut Record, ctx: &mut RuleContext<'_>) -> Result<()> {
    let (original, dangling) = take_fragments(record, AUTHOR)?;
    let mut authors = original.clone();

    if EDITOR_SUFFIX.is_match(&authors) {
        if ctx.config().reclassify_editors && !record.contains_key(EDITOR) {
            debug!(text = %authors, "reclassifying author credit as editor");
            // The editor rule reads an edition from the second fragment.
            let fragments = std::iter::once(authors).chain(dangling);
            record.remove(AUTHOR);
            record.insert(EDITOR, Value::fragments(fragments));
            return normalize_editor(record, ctx);
        }
        debug!(text = %authors, "editor marker on author credit kept as author");
        authors = EDITOR_SUFFIX.replace(&authors, "").into_owned();
    }
    record.set_unmatched(AUTHOR, &dangling);

    if ET_AL.is_match(&authors) {
        authors = ET_AL.replace(&authors, "").into_owned();
        record.insert(ETAL, true);
    }

    let authors = strip_outer(&authors);
    record.insert(AUTHOR, names_or_original(&authors, original, ctx));
    Ok(())
}

/// Normalize the `editor` field.
///
/// Expects `[names, edition?]`. A digit run in the second fragment becomes
/// `edition`; further fragments go to `unmatched-editor`. The names lose a
/// leading "in" and every "ed."/"eds."/"editor(s)" marker.
///
/// # Errors
///
/// Returns an error if the field is missing or unreadable, or the edition
/// number overflows.
pub fn normalize_editor(record: &mut Record, ctx: &mut RuleContext<'_>) -> Result<()> {
    let mut fragments = record.fragments(EDITOR)?.into_iter();
    let original = fragments
        .next()
        .ok_or_else(|| NormalizeError::MissingFragment(EDITOR.to_string()))?;
    let edition = fragments.next();
    let dangling: Vec<String> = fragments.collect();
    record.set_unmatched(EDITOR, &dangling);

    if let Some(caps) = edition.as_deref().and_then(|text| DIGITS.captures(text)) {
        if let Some(digits) = caps.get(1) {
            record.insert(EDITION, parse_number(digits.as_str(), EDITION)?);
        }
    }

    let editors = strip_outer(&original);
    let editors = LEADING_IN.replace(&editors, "");
    let editors = EDITOR_MARKER.replace_all(&editors, "");
    record.insert(EDITOR, names_or_original(&editors, original, ctx));
    Ok(())
}

/// Normalize the `translator` field.
///
/// Drops "trans."/"translated"/"translation" markers and a "by" before the
/// names.
///
/// # Errors
///
/// Returns an error if the field is missing or unreadable.
pub fn normalize_translator(record: &mut Record, ctx: &mut RuleContext<'_>) -> Result<()> {
    let (original, dangling) = take_fragments(record, TRANSLATOR)?;
    record.set_unmatched(TRANSLATOR, &dangling);

    let translators = strip_outer(&original);
    let translators = TRANSLATOR_MARKER.replace_all(&translators, " ");
    let translators = TRANSLATOR_BY.replace_all(&translators, " ");
    record.insert(TRANSLATOR, names_or_original(&translators, original, ctx));
    Ok(())
}

/// Split `text` into a name list, or fall back to the untouched fragment
/// when no name survives cleaning.
fn names_or_original(text: &str, original: String, ctx: &RuleContext<'_>) -> Value {
    let names = normalize_names(text, &ctx.config().name_separator);
    if names.is_empty() {
        Value::Text(original)
    } else {
        Value::Names(names)
    }
}
