//! Configuration options for field normalization.
//!
//! This module provides the [`NormalizerConfig`] struct which controls how
//! normalized values are joined and which reclassifications are allowed.

use serde::{Deserialize, Serialize};

/// Configuration for a [`Normalizer`](crate::Normalizer).
///
/// # Examples
///
/// ```
/// use refnorm::NormalizerConfig;
///
/// // Default configuration (" and " between names, "--" in page ranges)
/// let config = NormalizerConfig::default();
/// assert_eq!(config.name_separator, " and ");
///
/// // Keep author credits as authors even when they end in "ed."
/// let config = NormalizerConfig::default().with_reclassify_editors(false);
/// assert!(!config.reclassify_editors);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Separator used to join person names into their display form.
    pub name_separator: String,

    /// Separator placed between the first and last page of a range.
    pub page_range_separator: String,

    /// Move author credits that end in an editor marker ("Doe, ed.") to the
    /// `editor` field when the record has no editor yet.
    pub reclassify_editors: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        NormalizerConfig {
            name_separator: " and ".to_string(),
            page_range_separator: "--".to_string(),
            reclassify_editors: true,
        }
    }
}

impl NormalizerConfig {
    /// Set the separator between person names.
    #[must_use]
    pub fn with_name_separator(mut self, separator: impl Into<String>) -> Self {
        self.name_separator = separator.into();
        self
    }

    /// Set the separator inside page ranges.
    #[must_use]
    pub fn with_page_range_separator(mut self, separator: impl Into<String>) -> Self {
        self.page_range_separator = separator.into();
        self
    }

    /// Enable or disable author-to-editor reclassification.
    #[must_use]
    pub fn with_reclassify_editors(mut self, enabled: bool) -> Self {
        self.reclassify_editors = enabled;
        self
    }
}
