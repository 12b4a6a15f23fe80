//! Common test helpers and utilities shared across test suite.

use refnorm::{Normalizer, Record};

/// Route `tracing` output to the test harness.
///
/// Set `RUST_LOG=refnorm=debug` to see rule decisions while a test runs.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A record as the tagger would hand it over for a typical journal article.
#[allow(dead_code)]
pub fn create_article_record() -> Record {
    Record::builder()
        .text("author", "Watson, J D, Crick, F H C.")
        .fragments(
            "title",
            [
                "Molecular structure of nucleic acids: a structure for deoxyribose nucleic acid.",
                "Nature",
            ],
        )
        .text("volume", "Vol. 171")
        .text("pages", "pp. 737-738")
        .text("date", "April 25, 1953")
        .build()
}

/// A record for a chapter in an edited volume.
#[allow(dead_code)]
pub fn create_chapter_record() -> Record {
    Record::builder()
        .text("author", "Lee, K. et al.")
        .text("title", "Parsing references.")
        .fragments("editor", ["In J. Smith & R. Roe (Eds.),", "2nd ed."])
        .text("booktitle", "In: Handbook of Digital Libraries, 2nd edition,")
        .text("pages", "45(2012):100-110")
        .text("publisher", "Springer.")
        .build()
}

/// Normalizer with the default configuration.
#[allow(dead_code)]
pub fn normalizer() -> Normalizer {
    init_tracing();
    Normalizer::default()
}
