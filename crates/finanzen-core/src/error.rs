//! Error types for finanzen operations.
//!
//! This module defines [`FinanzenError`] which covers all error cases that can occur
//! when validating input, fetching pages, or extracting data from them.

use thiserror::Error;

/// Errors that can occur while retrieving or parsing finanzen.net data.
#[derive(Error, Debug)]
pub enum FinanzenError {
    /// Network-related errors (connection failures, timeouts, unexpected statuses).
    #[error("Network error: {0}")]
    Network(String),

    /// The fetched page does not describe a valid stock.
    #[error("Could not find stock: {0}")]
    StockNotFound(String),

    /// The page is valid but the requested element carries no data.
    #[error("No data: {0}")]
    NoData(String),

    /// Error parsing a page or a value extracted from it.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The caller asked for an output shape other than `dict` or `dataframe`.
    #[error("Invalid output format '{0}': choose either 'dict' or 'dataframe'")]
    InvalidOutputFormat(String),

    /// The exchange code is not part of the allow-list.
    #[error("Invalid exchange '{code}': must be one of {allowed}")]
    InvalidExchange {
        /// The code that was rejected.
        code: String,
        /// Comma separated list of accepted codes.
        allowed: String,
    },

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Any other error.
    #[error("{0}")]
    Other(String),
}

impl From<polars::prelude::PolarsError> for FinanzenError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Other(err.to_string())
    }
}

/// Result type alias using [`FinanzenError`].
pub type Result<T> = std::result::Result<T, FinanzenError>;
