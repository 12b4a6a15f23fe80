//! Rules for numeric fields: `date`, `volume` and `pages`.
//!
//! Each rule tries its patterns from most to least specific and stops at
//! the first match. A miss is not an error; the field is left as it was.

use super::keys::{DATE, NUMBER, PAGES, VOLUME, YEAR};
use super::{group, take_fragments, RuleContext};
use crate::edition::parse_number;
use crate::error::Result;
use crate::patterns::{
    CITATION, DIGITS, PAGE_RANGE, VOLUME_NUMBER, VOLUME_RANGE, YEAR as YEAR_PATTERN,
};
use crate::record::Record;

/// Normalize the `date` field.
///
/// The first four-digit run becomes `year` and `date` is removed. Without
/// one, `date` is kept unchanged.
///
/// # Errors
///
/// Returns an error if the field is missing or unreadable.
pub fn normalize_date(record: &mut Record, _ctx: &mut RuleContext<'_>) -> Result<()> {
    let (date, dangling) = take_fragments(record, DATE)?;
    record.set_unmatched(DATE, &dangling);

    if let Some(caps) = YEAR_PATTERN.captures(&date) {
        record.insert(YEAR, parse_number(group(&caps, 1), YEAR)?);
        record.remove(DATE);
    }
    Ok(())
}

/// Normalize the `volume` field.
///
/// - `"Vol. 4, 12-14"` → `volume = 4`, `number = "12-14"` (kept as text)
/// - `"4(2)"` → `volume = 4`, `number = 2`
/// - `"vol. 4"` → `volume = 4`
///
/// # Errors
///
/// Returns an error if the field is missing or unreadable, or a number
/// overflows.
pub fn normalize_volume(record: &mut Record, _ctx: &mut RuleContext<'_>) -> Result<()> {
    let (volume, dangling) = take_fragments(record, VOLUME)?;
    record.set_unmatched(VOLUME, &dangling);

    if let Some(caps) = VOLUME_RANGE.captures(&volume) {
        record.insert(VOLUME, parse_number(group(&caps, 1), VOLUME)?);
        record.insert(NUMBER, group(&caps, 2));
    } else if let Some(caps) = VOLUME_NUMBER.captures(&volume) {
        record.insert(VOLUME, parse_number(group(&caps, 1), VOLUME)?);
        record.insert(NUMBER, parse_number(group(&caps, 2), NUMBER)?);
    } else if let Some(caps) = DIGITS.captures(&volume) {
        record.insert(VOLUME, parse_number(group(&caps, 1), VOLUME)?);
    }
    Ok(())
}

/// Normalize the `pages` field.
///
/// A combined citation such as `"45.2(2012):100-110"` first yields `volume`,
/// `number` and `year`, leaving `"100-110"` as the pages. Two digit runs
/// then become a range joined with the configured separator (`"100--110"`),
/// a single run becomes the page itself. A citation number too large to
/// store is reported and left out.
///
/// # Errors
///
/// Returns an error if the field is missing or unreadable.
pub fn normalize_pages(record: &mut Record, ctx: &mut RuleContext<'_>) -> Result<()> {
    let (original, dangling) = take_fragments(record, PAGES)?;
    record.set_unmatched(PAGES, &dangling);

    let mut pages = original.as_str();
    if let Some(caps) = CITATION.captures(&original) {
        insert_number(record, ctx, VOLUME, group(&caps, 1));
        if let Some(number) = caps.get(2) {
            insert_number(record, ctx, NUMBER, number.as_str());
        }
        if let Some(year) = caps.get(3) {
            insert_number(record, ctx, YEAR, year.as_str());
        }
        pages = group(&caps, 4);
    }

    if let Some(caps) = PAGE_RANGE.captures(pages) {
        let separator = &ctx.config().page_range_separator;
        record.insert(
            PAGES,
            format!("{}{separator}{}", group(&caps, 1), group(&caps, 2)),
        );
    } else if let Some(caps) = DIGITS.captures(pages) {
        record.insert(PAGES, group(&caps, 1));
    }
    Ok(())
}

/// Store a citation number under `key`. A number too large to store is
/// reported and skipped; the page range does not depend on it.
fn insert_number(record: &mut Record, ctx: &mut RuleContext<'_>, key: &str, digits: &str) {
    match parse_number(digits, key) {
        Ok(number) => {
            record.insert(key, number);
        },
        Err(err) => ctx.report(&err),
    }
}

#[cfg(test)]
mod tests {
    use crate::record::{Record, Value};
    use crate::{Normalizer, NormalizerConfig};

    fn normalize(key: &str, record: Record) -> Record {
        Normalizer::default().apply(key, record)
    }

    #[test]
    fn test_date_to_year() {
        let record = normalize("date", Record::builder().text("date", "March 2012").build());
        assert_eq!(record.integer("year"), Some(2012));
        assert!(!record.contains_key("date"));
    }

    #[test]
    fn test_date_without_year() {
        let record = normalize("date", Record::builder().text("date", "n.d.").build());
        assert_eq!(record.text("date"), Some("n.d."));
        assert!(!record.contains_key("year"));
    }

    #[test]
    fn test_date_overflow() {
        let record = normalize(
            "date",
            Record::builder().fragments("date", ["(1999)", "forthcoming"]).build(),
        );
        assert_eq!(record.integer("year"), Some(1999));
        assert_eq!(record.unmatched("date"), Some("forthcoming"));
    }

    #[test]
    fn test_volume_with_issue_range() {
        let record = normalize("volume", Record::builder().text("volume", "Vol. 4, 12-14").build());
        assert_eq!(record.integer("volume"), Some(4));
        assert_eq!(record.text("number"), Some("12-14"));
    }

    #[test]
    fn test_volume_with_issue_ampersand() {
        let record = normalize(
            "volume",
            Record::builder().text("volume", "vol 7, nos. 3 & 4").build(),
        );
        assert_eq!(record.integer("volume"), Some(7));
        assert_eq!(record.text("number"), Some("3 & 4"));
    }

    #[test]
    fn test_volume_with_issue() {
        let record = normalize("volume", Record::builder().text("volume", "4(2)").build());
        assert_eq!(record.integer("volume"), Some(4));
        assert_eq!(record.integer("number"), Some(2));
    }

    #[test]
    fn test_volume_only() {
        let record = normalize("volume", Record::builder().text("volume", "Band 12").build());
        assert_eq!(record.integer("volume"), Some(12));
        assert!(!record.contains_key("number"));
    }

    #[test]
    fn test_volume_without_digits() {
        let record = normalize("volume", Record::builder().text("volume", "Vol. IV").build());
        assert_eq!(record.text("volume"), Some("Vol. IV"));
    }

    #[test]
    fn test_volume_idempotent() {
        let normalizer = Normalizer::default();
        let once = normalizer.apply(
            "volume",
            Record::builder().text("volume", "Vol. 4, 12-14").build(),
        );
        let twice = normalizer.apply("volume", once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pages_range() {
        let record = normalize("pages", Record::builder().text("pages", "12-34").build());
        assert_eq!(record.text("pages"), Some("12--34"));
    }

    #[test]
    fn test_pages_single() {
        let record = normalize("pages", Record::builder().text("pages", "p. 7.").build());
        assert_eq!(record.text("pages"), Some("7"));
    }

    #[test]
    fn test_pages_combined_citation() {
        let record = normalize(
            "pages",
            Record::builder().text("pages", "45(2012):100-110").build(),
        );
        assert_eq!(record.integer("volume"), Some(45));
        assert_eq!(record.integer("year"), Some(2012));
        assert_eq!(record.integer("number"), None);
        assert_eq!(record.text("pages"), Some("100--110"));
    }

    #[test]
    fn test_pages_combined_with_issue() {
        let record = normalize(
            "pages",
            Record::builder().text("pages", "45.3 (2012): 100-110").build(),
        );
        assert_eq!(record.integer("volume"), Some(45));
        assert_eq!(record.integer("number"), Some(3));
        assert_eq!(record.integer("year"), Some(2012));
        assert_eq!(record.text("pages"), Some("100--110"));
    }

    #[test]
    fn test_pages_without_digits() {
        let record = normalize("pages", Record::builder().text("pages", "passim").build());
        assert_eq!(record.get("pages"), Some(&Value::Text("passim".to_string())));
    }

    #[test]
    fn test_pages_custom_separator() {
        let normalizer =
            Normalizer::new(NormalizerConfig::default().with_page_range_separator("\u{2013}"));
        let record = normalizer.apply(
            "pages",
            Record::builder().text("pages", "pp. 1 - 9").build(),
        );
        assert_eq!(record.text("pages"), Some("1\u{2013}9"));
    }

    #[test]
    fn test_pages_idempotent() {
        let normalizer = Normalizer::default();
        let once = normalizer.apply(
            "pages",
            Record::builder().text("pages", "45(2012):100-110").build(),
        );
        let twice = normalizer.apply("pages", once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pages_citation_number_too_large() {
        let report = Normalizer::default().normalize_report(
            Record::builder().text("pages", "99999999999(2012):100-110").build(),
        );
        let record = &report.record;
        assert_eq!(record.text("pages"), Some("100--110"));
        assert_eq!(record.integer("year"), Some(2012));
        assert!(!record.contains_key("volume"));
        assert_eq!(report.diagnostics.for_field("pages").count(), 1);
    }
}
