//! Rules for title-like fields: `title`, `booktitle` and `container`.

use super::keys::{BOOKTITLE, CATEGORY, CONTAINER, EDITION, TITLE, TYPE};
use super::{group, non_empty_or, strip_trailing_punct, take_fragments, RuleContext};
use crate::edition::extract_edition;
use crate::error::{NormalizeError, Result};
use crate::patterns::{DISSERTATION_ABSTRACTS, DISSERTATION_SECTION, LEADING_IN_BOOKTITLE};
use crate::record::Record;

/// Entry type assigned to items found in dissertation abstracts.
pub const PHDTHESIS: &str = "phdthesis";

/// Normalize the `title` field.
///
/// Expects `[title, container?]`. A container fragment is stored under
/// `container` and normalized with that field's rule. An edition marker in
/// the title becomes `edition`; trailing punctuation is removed.
///
/// # Errors
///
/// Returns an error if the field is missing or unreadable, or the edition
/// number overflows.
pub fn normalize_title(record: &mut Record, ctx: &mut RuleContext<'_>) -> Result<()> {
    let mut fragments = record.fragments(TITLE)?.into_iter();
    let original = fragments
        .next()
        .ok_or_else(|| NormalizeError::MissingFragment(TITLE.to_string()))?;
    let container = fragments.next();
    let dangling: Vec<String> = fragments.collect();
    record.set_unmatched(TITLE, &dangling);

    if let Some(container) = container {
        record.insert(CONTAINER, container);
        ctx.apply(CONTAINER, record);
    }

    let mut title = original.clone();
    if let Some(edition) = extract_edition(&mut title, TITLE)? {
        record.insert(EDITION, edition);
    }

    record.insert(TITLE, non_empty_or(strip_trailing_punct(&title), original));
    Ok(())
}

/// Normalize the `booktitle` field.
///
/// Drops a leading "In", extracts an edition marker and removes trailing
/// punctuation.
///
/// # Errors
///
/// Returns an error if the field is missing or unreadable, or the edition
/// number overflows.
pub fn normalize_booktitle(record: &mut Record, _ctx: &mut RuleContext<'_>) -> Result<()> {
    let (original, dangling) = take_fragments(record, BOOKTITLE)?;
    record.set_unmatched(BOOKTITLE, &dangling);

    let mut booktitle = LEADING_IN_BOOKTITLE.replace(&original, "").into_owned();
    if let Some(edition) = extract_edition(&mut booktitle, BOOKTITLE)? {
        record.insert(EDITION, edition);
    }

    record.insert(
        BOOKTITLE,
        non_empty_or(strip_trailing_punct(&booktitle), original),
    );
    Ok(())
}

/// Normalize the `container` field.
///
/// Dissertation abstracts containers mark the record as a `phdthesis`; a
/// "Section B: The Sciences and Engineering" tail is moved to `category`.
///
/// # Errors
///
/// Returns an error if the field is missing or unreadable.
pub fn normalize_container(record: &mut Record, _ctx: &mut RuleContext<'_>) -> Result<()> {
    let (original, dangling) = take_fragments(record, CONTAINER)?;
    record.set_unmatched(CONTAINER, &dangling);

    let mut container = original.clone();

    if DISSERTATION_ABSTRACTS.is_match(&container) {
        if let Some(caps) = DISSERTATION_SECTION.captures(&original) {
            let category = group(&caps, 1).trim();
            if !category.is_empty() {
                record.insert(CATEGORY, category);
            }
            let start = caps.get(0).map_or(original.len(), |m| m.start());
            container = strip_trailing_punct(&original[..start]);
        }
        record.insert(TYPE, PHDTHESIS);
    }

    record.insert(CONTAINER, non_empty_or(container, original));
    Ok(())
}
