//! Integration tests for whole-record normalization.

mod common;

use common::{create_article_record, create_chapter_record, normalizer};
use refnorm::{json, Normalizer, NormalizerConfig, Record, Value};

#[test]
fn test_article_record() {
    let record = normalizer().normalize(create_article_record());

    let authors = record.names("author").expect("author names");
    assert_eq!(authors.names(), ["Watson, J. D.", "Crick, F. H. C."]);
    assert_eq!(authors.joined(), "Watson, J. D. and Crick, F. H. C.");

    assert_eq!(
        record.text("title"),
        Some("Molecular structure of nucleic acids: a structure for deoxyribose nucleic acid")
    );
    assert_eq!(record.text("container"), Some("Nature"));
    assert_eq!(record.integer("volume"), Some(171));
    assert_eq!(record.text("pages"), Some("737--738"));
    assert_eq!(record.integer("year"), Some(1953));
    assert!(!record.contains_key("date"));
}

#[test]
fn test_chapter_record() {
    let report = normalizer().normalize_report(create_chapter_record());
    assert!(report.is_clean(), "unexpected diagnostics: {:?}", report.diagnostics);
    let record = report.record;

    assert_eq!(record.text("author"), Some("Lee, K."));
    assert_eq!(record.flag("etal"), Some(true));
    assert_eq!(record.text("title"), Some("Parsing references"));
    assert_eq!(
        record.names("editor").map(|n| n.names().to_vec()),
        Some(vec!["J. Smith".to_string(), "R. Roe".to_string()])
    );
    assert_eq!(record.text("booktitle"), Some("Handbook of Digital Libraries"));
    assert_eq!(record.integer("edition"), Some(2));
    assert_eq!(record.integer("volume"), Some(45));
    assert_eq!(record.integer("year"), Some(2012));
    assert_eq!(record.text("pages"), Some("100--110"));
    assert_eq!(record.text("publisher"), Some("Springer"));
}

#[test]
fn test_author_becomes_editor_once() {
    let record = Record::builder()
        .text("author", "Jane Doe, ed.")
        .text("title", "Collected Papers")
        .build();
    let record = normalizer().normalize(record);

    assert!(!record.contains_key("author"));
    assert_eq!(record.text("editor"), Some("Jane Doe"));

    // A second pass finds an editor already present, so nothing moves again.
    let again = normalizer().normalize(record.clone());
    assert_eq!(again.text("editor"), Some("Jane Doe"));
    assert!(!again.contains_key("author"));
}

#[test]
fn test_overflow_is_never_dropped() {
    let record = Record::builder()
        .fragments("date", ["2001", "reprinted"])
        .fragments("volume", ["12", "suppl."])
        .fragments("pages", ["1-9", "plus plates"])
        .fragments("booktitle", ["Proceedings", "of something"])
        .fragments("publisher", ["ACM", "New York"])
        .build();
    let record = normalizer().normalize(record);

    assert_eq!(record.unmatched("date"), Some("reprinted"));
    assert_eq!(record.unmatched("volume"), Some("suppl."));
    assert_eq!(record.unmatched("pages"), Some("plus plates"));
    assert_eq!(record.unmatched("booktitle"), Some("of something"));
    assert_eq!(record.unmatched("publisher"), Some("New York"));
}

#[test]
fn test_malformed_field_does_not_stop_the_rest() {
    let record = Record::builder()
        .text("title", "Good title.")
        .fragments("author", Vec::<String>::new())
        .text("pages", "99999999999-3")
        .text("volume", "99999999999")
        .text("date", "1999")
        .build();
    let report = normalizer().normalize_report(record);

    assert_eq!(report.record.text("title"), Some("Good title"));
    assert_eq!(report.record.integer("year"), Some(1999));

    // The volume overflows u32 and is kept verbatim.
    assert_eq!(report.record.text("volume"), Some("99999999999"));
    assert_eq!(report.diagnostics.for_field("volume").count(), 1);
    assert_eq!(report.diagnostics.for_field("author").count(), 1);

    // Page ranges stay textual, so large page numbers are fine.
    assert_eq!(report.record.text("pages"), Some("99999999999--3"));
}

#[test]
fn test_custom_name_separator() {
    let normalizer = Normalizer::new(NormalizerConfig::default().with_name_separator("; "));
    let record = normalizer.apply(
        "author",
        Record::builder().text("author", "Smith, J and Doe, K").build(),
    );
    assert_eq!(record.text("author"), Some("Smith, J.; Doe, K."));
}

#[test]
fn test_json_in_json_out() {
    let record = json::record_from_json(
        r#"{"author": "Doe, Jane et al.", "date": "n.d.", "pages": ["12-34", "fig. 2"]}"#,
    )
    .unwrap();
    let record = normalizer().normalize(record);
    let value = json::record_to_json(&record).unwrap();

    assert_eq!(value["author"]["joined"], "Doe, Jane");
    assert_eq!(value["author"]["names"][0], "Doe, Jane");
    assert_eq!(value["etal"], true);
    assert_eq!(value["date"], "n.d.");
    assert_eq!(value["pages"], "12--34");
    assert_eq!(value["unmatched-pages"], "fig. 2");
}

#[test]
fn test_renormalizing_is_stable() {
    let normalizer = normalizer();
    let once = normalizer.normalize(create_chapter_record());
    let twice = normalizer.normalize(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_untouched_values_keep_their_kind() {
    let record = Record::builder()
        .value("year", 2001u32)
        .value("etal", true)
        .build();
    let out = normalizer().normalize(record.clone());
    assert_eq!(out, record);
    assert_eq!(out.get("etal"), Some(&Value::Flag(true)));
}
