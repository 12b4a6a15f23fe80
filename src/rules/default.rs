//! Fallback rule for fields without a dedicated rule.

use super::{non_empty_or, strip_outer, take_fragments, RuleContext};
use crate::error::{NormalizeError, Result};
use crate::record::Record;

/// Strip leading and trailing punctuation from a single-fragment field.
///
/// Fragments after the first are kept under `unmatched-<key>`. Values that
/// are already normalized (numbers, flags, name lists) are left alone.
///
/// # Errors
///
/// Returns an error if the field is missing or has no fragments.
pub fn normalize_default(record: &mut Record, ctx: &mut RuleContext<'_>) -> Result<()> {
    let key = ctx.key().to_string();
    match record.get(&key) {
        None => return Err(NormalizeError::MissingField(key)),
        Some(value) if !value.is_raw() => return Ok(()),
        Some(_) => {},
    }

    let (token, dangling) = take_fragments(record, &key)?;
    record.set_unmatched(&key, &dangling);

    let cleaned = strip_outer(&token);
    record.insert(key, non_empty_or(cleaned, token));
    Ok(())
}
