// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy surfaced to the host page.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A chart required a non-degenerate domain and got an empty or zero-width one.
    #[error("invalid domain: {reason}")]
    InvalidDomain { reason: String },
    /// A band scale was asked for a category it was not built with.
    #[error("unknown category '{category}'")]
    Lookup { category: String },
    /// A data point or record is missing a field or carries a non-finite number.
    #[error("malformed series at index {index}: {reason}")]
    MalformedSeries { index: usize, reason: String },
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChartError {
    pub(crate) fn invalid_domain(reason: impl Into<String>) -> Self {
        Self::InvalidDomain { reason: reason.into() }
    }

    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedSeries { index, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
