//! Batch normalization, sequential or in parallel using Rayon.
//!
//! Records are independent and [`Normalizer`] holds no mutable state, so a
//! batch can be spread over Rayon's work-stealing pool without locking.
//! Output order always matches input order, and a malformed field never
//! fails the batch: at worst it leaves a diagnostic on its own record.
//!
//! # Examples
//!
//! ```
//! use refnorm::batch::normalize_batch_parallel;
//! use refnorm::{Normalizer, Record};
//!
//! let records = vec![
//!     Record::builder().text("date", "1999").build(),
//!     Record::builder().text("pages", "1-10").build(),
//! ];
//!
//! let normalized = normalize_batch_parallel(&Normalizer::default(), records);
//! assert_eq!(normalized[0].integer("year"), Some(1999));
//! assert_eq!(normalized[1].text("pages"), Some("1--10"));
//! ```

use crate::diagnostics::NormalizeReport;
use crate::normalizer::Normalizer;
use crate::record::Record;
use rayon::prelude::*;
use tracing::debug;

/// Normalize a batch of records one after another.
#[must_use]
pub fn normalize_batch(normalizer: &Normalizer, records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .map(|record| normalizer.normalize(record))
        .collect()
}

/// Normalize a batch of records in parallel.
///
/// Uses the global Rayon thread pool, which respects `RAYON_NUM_THREADS`.
#[must_use]
pub fn normalize_batch_parallel(normalizer: &Normalizer, records: Vec<Record>) -> Vec<Record> {
    debug!(records = records.len(), "normalizing batch in parallel");
    records
        .into_par_iter()
        .map(|record| normalizer.normalize(record))
        .collect()
}

/// Normalize a batch in parallel, keeping each record's diagnostics.
#[must_use]
pub fn normalize_batch_reports_parallel(
    normalizer: &Normalizer,
    records: Vec<Record>,
) -> Vec<NormalizeReport> {
    let reports: Vec<NormalizeReport> = records
        .into_par_iter()
        .map(|record| normalizer.normalize_report(record))
        .collect();

    let failed = reports.iter().filter(|r| !r.is_clean()).count();
    if failed > 0 {
        debug!(
            records = reports.len(),
            failed, "batch finished with recovered failures"
        );
    }
    reports
}
