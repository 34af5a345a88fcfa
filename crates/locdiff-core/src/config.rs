//! Comparison run configuration.

use crate::errors::{LocDiffError, Result};
use serde::{Deserialize, Serialize};

/// Default segment delimiter
pub const DEFAULT_DELIMITER: &str = "|||";

/// Default maximum chunk length in characters
pub const DEFAULT_SPLIT_LIMIT: i64 = 25_000;

/// Validated settings for one comparison run.
///
/// Built through [`CompareConfig::new`], which rejects an empty delimiter so
/// that the engine never sees one. A deserialized value fills missing fields
/// from [`Default`] and must be checked with [`CompareConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    delimiter: String,
    split_limit: i64,
}

impl CompareConfig {
    /// Create a validated configuration.
    ///
    /// `split_limit <= 0` is accepted and disables chunking.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig`: `delimiter` is empty
    pub fn new(delimiter: impl Into<String>, split_limit: i64) -> Result<Self> {
        let config = Self {
            delimiter: delimiter.into(),
            split_limit,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants enforced by [`CompareConfig::new`].
    ///
    /// # Errors
    ///
    /// - `InvalidConfig`: `delimiter` is empty
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(LocDiffError::EmptyDelimiter.into());
        }
        Ok(())
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn split_limit(&self) -> i64 {
        self.split_limit
    }

    /// True when `split_limit` is positive.
    pub fn chunking_enabled(&self) -> bool {
        self.split_limit > 0
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            split_limit: DEFAULT_SPLIT_LIMIT,
        }
    }
}
