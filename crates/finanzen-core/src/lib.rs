#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/finanzen-rs/finanzen/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for finanzen.net data.
//!
//! This crate provides the foundational abstractions shared by the provider and
//! the client:
//!
//! - [`FundamentalsProvider`](provider::FundamentalsProvider) - Yearly fundamentals
//! - [`EstimatesProvider`](provider::EstimatesProvider) - Analyst estimates
//! - [`QuoteProvider`](provider::QuoteProvider) - Current quotes
//! - [`SearchProvider`](provider::SearchProvider) - Instrument search
//! - [`normalize`] - German number and date parsing
//! - [`Output`](output::Output) - Dict or dataframe output shapes

/// Error types for data operations.
pub mod error;
/// Normalizers for German formatted values.
pub mod normalize;
/// Output shapes (dict or dataframe).
pub mod output;
/// Provider traits for fetching stock data.
pub mod provider;
/// Core data types (StockId, Exchange, records).
pub mod types;

// Re-export commonly used items at crate root
pub use error::{FinanzenError, Result};
pub use output::{Output, OutputFormat, ToDataFrame};
pub use provider::{
    DataProvider, EstimatesProvider, FundamentalsProvider, QuoteProvider, SearchProvider,
};
pub use types::{
    Category, EstimatesRecord, Exchange, FundamentalsRecord, MetricTable, PriceRecord,
    SearchCategory, SearchResult, StockId,
};
