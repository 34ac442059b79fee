//! Provider traits for fetching stock data.
//!
//! This module defines the core provider traits:
//!
//! - [`DataProvider`] - Base trait for all data providers
//! - [`FundamentalsProvider`] - Yearly fundamentals tables
//! - [`EstimatesProvider`] - Analyst estimates
//! - [`QuoteProvider`] - Current price on an exchange
//! - [`SearchProvider`] - Instrument search

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Result,
    types::{
        EstimatesRecord, Exchange, FundamentalsRecord, PriceRecord, SearchCategory, SearchResult,
        StockId,
    },
};

/// Base trait for all data providers.
pub trait DataProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "finanzen.net").
    fn name(&self) -> &str;

    /// Returns a description of this provider.
    fn description(&self) -> &str;

    /// Returns the exchanges quotes can be requested from.
    fn supported_exchanges(&self) -> &[Exchange];
}

/// Provider for fundamentals tables.
#[async_trait]
pub trait FundamentalsProvider: DataProvider {
    /// Fetches the fundamentals of a stock.
    ///
    /// Fails with [`StockNotFound`](crate::FinanzenError::StockNotFound) when
    /// the page does not describe a stock. Sections that cannot be extracted
    /// are returned as "no data" instead of failing the call.
    async fn fetch_fundamentals(&self, stock: &StockId) -> Result<FundamentalsRecord>;
}

/// Provider for analyst estimates.
#[async_trait]
pub trait EstimatesProvider: DataProvider {
    /// Fetches the analyst estimates of a stock.
    ///
    /// Unlike fundamentals, a malformed estimates table fails the whole call.
    async fn fetch_estimates(&self, stock: &StockId) -> Result<EstimatesRecord>;
}

/// Provider for current quotes.
#[async_trait]
pub trait QuoteProvider: DataProvider {
    /// Fetches the current price of a stock on an exchange.
    async fn fetch_price(&self, stock: &StockId, exchange: Exchange) -> Result<PriceRecord>;
}

/// Provider for instrument search.
#[async_trait]
pub trait SearchProvider: DataProvider {
    /// Searches instruments of one category.
    ///
    /// `limit` of `None` returns every hit, `Some(0)` returns none.
    async fn search(
        &self,
        term: &str,
        category: SearchCategory,
        limit: Option<usize>,
    ) -> Result<Vec<SearchResult>>;

    /// Searches stocks.
    ///
    /// Default implementation delegates to [`search`](Self::search) with
    /// [`SearchCategory::Stock`].
    async fn search_stock(&self, term: &str, limit: Option<usize>) -> Result<Vec<SearchResult>> {
        self.search(term, SearchCategory::Stock, limit).await
    }
}
