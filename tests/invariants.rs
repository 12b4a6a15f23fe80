//! Property tests for the guarantees every rule must keep.

use proptest::prelude::*;
use refnorm::{normalize_names, Diagnostics, Normalizer, Record};

const RULE_KEYS: [&str; 10] = [
    "author",
    "editor",
    "translator",
    "title",
    "booktitle",
    "container",
    "date",
    "volume",
    "pages",
    "publisher",
];

/// Keys whose rule takes exactly one fragment.
const SINGLE_FRAGMENT_KEYS: [&str; 8] = [
    "author",
    "translator",
    "booktitle",
    "container",
    "date",
    "volume",
    "pages",
    "publisher",
];

/// Apply one rule, failing the property if the dispatcher had to recover
/// from a panic.
fn apply_strict(key: &str, mut record: Record) -> Record {
    let mut diagnostics = Diagnostics::new();
    Normalizer::default().apply_with_diagnostics(key, &mut record, &mut diagnostics);
    assert!(
        diagnostics.iter().all(|d| !d.message.contains("panicked")),
        "rule for {key} panicked: {diagnostics:?}"
    );
    record
}

proptest! {
    #[test]
    fn test_rules_never_panic(
        text in "\\PC{0,60}",
        second in "\\PC{0,20}",
        key_index in 0usize..10,
    ) {
        let key = RULE_KEYS[key_index];

        let _ = apply_strict(key, Record::builder().text(key, &text).build());
        let record = Record::builder().fragments(key, [text.clone(), second]).build();
        let _ = apply_strict(key, record);
    }

    #[test]
    fn test_overflow_is_kept(
        // No "d", so an author credit is never read as "ed." and moved.
        primary in "[A-CE-Za-ce-z ,.]{1,30}",
        extra in "[a-z]{1,8}",
        key_index in 0usize..8,
    ) {
        let key = SINGLE_FRAGMENT_KEYS[key_index];
        let record = Record::builder().fragments(key, [primary, extra.clone()]).build();
        let record = apply_strict(key, record);

        prop_assert_eq!(record.unmatched(key), Some(extra.as_str()));
    }

    #[test]
    fn test_pages_idempotent(pages in "[0-9a-z().: &-]{0,20}") {
        let once = apply_strict("pages", Record::builder().text("pages", &pages).build());
        let twice = apply_strict("pages", once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_volume_idempotent(volume in "[0-9a-zA-Z().,: &-]{0,20}") {
        let once = apply_strict("volume", Record::builder().text("volume", &volume).build());
        let twice = apply_strict("volume", once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_date_with_year_is_replaced(prefix in "[A-Za-z ,]{0,10}", year in 1000u32..10000) {
        let text = format!("{prefix}{year}");
        let record = Record::builder().text("date", &text).build();
        let record = apply_strict("date", record);

        prop_assert!(!record.contains_key("date"));
        prop_assert_eq!(record.integer("year"), Some(year));
    }

    #[test]
    fn test_joined_name_lists_split_back(
        names in prop::collection::vec("[A-Z][a-z]{2,8}, [A-Z][a-z]{2,8}", 1..5)
    ) {
        let list = normalize_names(&names.join(" and "), " and ");
        prop_assert_eq!(list.names(), names.as_slice());
        prop_assert_eq!(list.joined(), names.join(" and "));
    }

    #[test]
    fn test_normalized_names_are_never_empty(text in "\\PC{0,40}") {
        let list = normalize_names(&text, " and ");
        prop_assert!(list.iter().all(|name| !name.is_empty()));
    }
}
