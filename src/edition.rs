//! Edition markers embedded in titles ("Handbook, 3rd ed.").

use crate::error::{NormalizeError, Result};
use crate::patterns::EDITION;

/// Remove the first edition marker from `text` and return its number.
///
/// The matched span is removed together with the punctuation around it.
/// When the marker sat between two words, a single space is kept so the
/// words do not run together. Returns `Ok(None)` and leaves `text` alone
/// when there is no marker.
///
/// # Examples
///
/// ```
/// use refnorm::extract_edition;
///
/// let mut title = String::from("Handbook, 3rd ed.");
/// assert_eq!(extract_edition(&mut title, "title").unwrap(), Some(3));
/// assert_eq!(title, "Handbook");
/// ```
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidNumber`] if the edition number does not
/// fit in a `u32`.
pub fn extract_edition(text: &mut String, field: &str) -> Result<Option<u32>> {
    let Some(caps) = EDITION.captures(text) else {
        return Ok(None);
    };
    let (Some(span), Some(digits)) = (caps.get(0), caps.get(1)) else {
        return Ok(None);
    };

    let edition = parse_number(digits.as_str(), field)?;

    let head = text[..span.start()].to_string();
    let tail = text[span.end()..].to_string();
    *text = if head.is_empty() || tail.is_empty() {
        head + &tail
    } else {
        format!("{head} {tail}")
    };

    Ok(Some(edition))
}

/// Parse a digit run captured by one of the numeric patterns.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidNumber`] on overflow.
pub(crate) fn parse_number(digits: &str, field: &str) -> Result<u32> {
    digits
        .parse::<u32>()
        .map_err(|_| NormalizeError::InvalidNumber {
            field: field.to_string(),
            value: digits.to_string(),
        })
}
