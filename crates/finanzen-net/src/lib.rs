#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/finanzen-rs/finanzen/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! finanzen.net data provider.
//!
//! This crate provides a finanzen.net provider that implements the
//! [`FundamentalsProvider`], [`EstimatesProvider`], [`QuoteProvider`] and
//! [`SearchProvider`] traits from `finanzen-core`.
//!
//! # Features
//!
//! - Five fundamentals tables per stock, each degrading to "no data" on its own
//! - Analyst estimates per period label
//! - Current quote on any allow-listed exchange
//! - Search filtered by instrument category
//! - Raw page access for every path template of the site
//!
//! # Example
//!
//! ```no_run
//! use finanzen_net::FinanzenNetProvider;
//! use finanzen_core::{Category, FundamentalsProvider, StockId};
//!
//! # async fn example() -> finanzen_core::Result<()> {
//! let provider = FinanzenNetProvider::new();
//! let record = provider.fetch_fundamentals(&StockId::new("sap-aktie")).await?;
//! if let Some(income) = record.section(Category::IncomeStatement) {
//!     println!("{} income statement rows", income.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use finanzen_core::{
    DataProvider, EstimatesProvider, EstimatesRecord, Exchange, FinanzenError,
    FundamentalsProvider, FundamentalsRecord, PriceRecord, QuoteProvider, Result, SearchCategory,
    SearchProvider, SearchResult, StockId, types::STOCK_SUFFIX,
};
use reqwest::Url;
use tracing::debug;

mod estimates;
#[cfg(test)]
mod fixtures;
mod fundamentals;
mod html;
mod quote;
mod search;

/// finanzen.net base URL.
pub const DEFAULT_BASE_URL: &str = "https://www.finanzen.net";

/// User agent for HTTP requests.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Query parameter carrying the search term.
const SEARCH_PARAM: &str = "_search";

/// Path templates of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// Search results, `/suchergebnis.asp?_search={term}`.
    Search,
    /// Stock overview and quote, `/aktien/{name}`.
    Stock,
    /// Analyst estimates, `/schaetzungen/{name}`.
    Estimates,
    /// Balance sheet and income statement, `/bilanz_guv/{name}`.
    Fundamentals,
    /// Index overview, `/index/{name}`.
    Index,
}

impl PageKind {
    /// Returns the path the page name is appended to.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Search => "/suchergebnis.asp",
            Self::Stock => "/aktien/",
            Self::Estimates => "/schaetzungen/",
            Self::Fundamentals => "/bilanz_guv/",
            Self::Index => "/index/",
        }
    }
}

/// finanzen.net data provider.
///
/// Implements [`FundamentalsProvider`], [`EstimatesProvider`], [`QuoteProvider`]
/// and [`SearchProvider`].
#[derive(Debug, Clone)]
pub struct FinanzenNetProvider {
    client: reqwest::Client,
    base_url: String,
}

impl FinanzenNetProvider {
    /// Create a new provider with default settings.
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self::with_client(client)
    }

    /// Create a new provider with a custom HTTP client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the provider at another host, e.g. a mirror or a local test server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL of a page.
    ///
    /// For [`PageKind::Search`] `name` is the search term and is sent as query
    /// parameter; for the other kinds it is appended to the path.
    pub fn page_url(&self, kind: PageKind, name: &str) -> Result<Url> {
        let url = match kind {
            PageKind::Search => Url::parse_with_params(
                &format!("{}{}", self.base_url, kind.path()),
                [(SEARCH_PARAM, name)],
            ),
            _ => Url::parse(&format!("{}{}{}", self.base_url, kind.path(), name)),
        };
        url.map_err(|e| FinanzenError::InvalidParameter(format!("invalid URL for '{name}': {e}")))
    }

    /// Build the quote URL of a stock on an exchange.
    pub fn quote_url(&self, stock: &StockId, exchange: Exchange) -> Result<Url> {
        let name = format!("{stock}{STOCK_SUFFIX}@stBoerse_{}", exchange.code());
        self.page_url(PageKind::Stock, &name)
    }

    /// Fetch the raw HTML of a page.
    pub async fn fetch_page(&self, kind: PageKind, name: &str) -> Result<String> {
        let url = self.page_url(kind, name)?;
        self.get_text(url, name).await
    }

    /// Check that the site answers at all.
    pub async fn check_availability(&self) -> Result<()> {
        debug!(url = %self.base_url, "Checking site availability");

        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| FinanzenError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FinanzenError::Network(format!(
                "HTTP {} for {}",
                response.status(),
                self.base_url
            )));
        }
        Ok(())
    }

    /// GET a page and return its body. `subject` names the stock or term in errors.
    async fn get_text(&self, url: Url, subject: &str) -> Result<String> {
        debug!(url = %url, "Fetching page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FinanzenError::Network(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FinanzenError::StockNotFound(subject.to_string()));
        }

        if !response.status().is_success() {
            return Err(FinanzenError::Network(format!(
                "HTTP {} for {}",
                response.status(),
                url
            )));
        }

        response
            .text()
            .await
            .map_err(|e| FinanzenError::Network(e.to_string()))
    }
}

impl Default for FinanzenNetProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProvider for FinanzenNetProvider {
    fn name(&self) -> &str {
        "finanzen.net"
    }

    fn description(&self) -> &str {
        "finanzen.net scraper for fundamentals, estimates, quotes and search"
    }

    fn supported_exchanges(&self) -> &[Exchange] {
        &Exchange::ALL
    }
}

#[async_trait]
impl FundamentalsProvider for FinanzenNetProvider {
    async fn fetch_fundamentals(&self, stock: &StockId) -> Result<FundamentalsRecord> {
        let html = self.fetch_page(PageKind::Fundamentals, stock.as_str()).await?;
        fundamentals::parse_fundamentals(&html, stock)
    }
}

#[async_trait]
impl EstimatesProvider for FinanzenNetProvider {
    async fn fetch_estimates(&self, stock: &StockId) -> Result<EstimatesRecord> {
        let html = self.fetch_page(PageKind::Estimates, stock.as_str()).await?;
        estimates::parse_estimates(&html, stock)
    }
}

#[async_trait]
impl QuoteProvider for FinanzenNetProvider {
    async fn fetch_price(&self, stock: &StockId, exchange: Exchange) -> Result<PriceRecord> {
        let url = self.quote_url(stock, exchange)?;
        let html = self.get_text(url, stock.as_str()).await?;
        quote::parse_quote(&html, stock, exchange)
    }
}

#[async_trait]
impl SearchProvider for FinanzenNetProvider {
    async fn search(
        &self,
        term: &str,
        category: SearchCategory,
        limit: Option<usize>,
    ) -> Result<Vec<SearchResult>> {
        let html = self.fetch_page(PageKind::Search, term).await?;
        search::parse_search(&html, category, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{
        ESTIMATES_PAGE, FUNDAMENTALS_PAGE, NOT_FOUND_PAGE, PRICE_PAGE, SEARCH_PAGE,
    };
    use finanzen_core::Category;
    use mockito::{Matcher, Server};

    fn test_provider(server: &Server) -> FinanzenNetProvider {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        FinanzenNetProvider::with_client(client).with_base_url(server.url())
    }

    #[test]
    fn test_page_urls() {
        let provider = FinanzenNetProvider::default();
        let stock = StockId::new("SAP-Aktie");

        let url = provider
            .page_url(PageKind::Fundamentals, stock.as_str())
            .unwrap();
        assert_eq!(url.as_str(), "https://www.finanzen.net/bilanz_guv/sap");

        let url = provider.page_url(PageKind::Index, "dax").unwrap();
        assert_eq!(url.as_str(), "https://www.finanzen.net/index/dax");

        let url = provider.page_url(PageKind::Search, "sap se").unwrap();
        assert_eq!(url.path(), "/suchergebnis.asp");
        assert_eq!(url.query(), Some("_search=sap+se"));
    }

    #[test]
    fn test_quote_url() {
        let provider = FinanzenNetProvider::new().with_base_url("https://example.org/");
        let url = provider
            .quote_url(&StockId::new("sap-aktie"), Exchange::Tgt)
            .unwrap();
        assert_eq!(url.as_str(), "https://example.org/aktien/sap-aktie@stBoerse_TGT");
    }

    #[test]
    fn test_provider_info() {
        let provider = FinanzenNetProvider::new();

        assert_eq!(provider.name(), "finanzen.net");
        assert!(!provider.description().is_empty());
        assert!(provider.supported_exchanges().contains(&Exchange::Fse));
    }

    #[tokio::test]
    async fn test_fetch_fundamentals_strips_suffix() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/bilanz_guv/sap")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(FUNDAMENTALS_PAGE)
            .create_async()
            .await;

        let provider = test_provider(&server);
        let record = provider
            .fetch_fundamentals(&StockId::new("SAP-Aktie"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            record.value(Category::IncomeStatement, "Umsatzerlöse", 2021),
            Some(1200.0)
        );
    }

    #[tokio::test]
    async fn test_http_not_found_is_stock_not_found() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/schaetzungen/unknown")
            .with_status(404)
            .create_async()
            .await;

        let provider = test_provider(&server);
        let result = provider.fetch_estimates(&StockId::new("unknown")).await;
        assert!(matches!(result, Err(FinanzenError::StockNotFound(_))));
    }

    #[tokio::test]
    async fn test_page_without_marker_is_stock_not_found() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/bilanz_guv/unknown")
            .with_status(200)
            .with_body(NOT_FOUND_PAGE)
            .create_async()
            .await;

        let provider = test_provider(&server);
        let result = provider.fetch_fundamentals(&StockId::new("unknown")).await;
        assert!(matches!(result, Err(FinanzenError::StockNotFound(_))));
    }

    #[tokio::test]
    async fn test_server_error_is_network_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/schaetzungen/sap")
            .with_status(503)
            .create_async()
            .await;

        let provider = test_provider(&server);
        let result = provider.fetch_estimates(&StockId::new("sap")).await;
        assert!(matches!(result, Err(FinanzenError::Network(_))));
    }

    #[tokio::test]
    async fn test_fetch_estimates() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/schaetzungen/sap")
            .with_status(200)
            .with_body(ESTIMATES_PAGE)
            .create_async()
            .await;

        let provider = test_provider(&server);
        let record = provider.fetch_estimates(&StockId::new("sap")).await.unwrap();
        assert_eq!(record.value("Ergebnis je Aktie", "2025e"), Some(5.5));
    }

    #[tokio::test]
    async fn test_fetch_price() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                Matcher::Regex(r"^/aktien/sap-aktie(@|%40)stBoerse_XETRA$".to_string()),
            )
            .with_status(200)
            .with_body(PRICE_PAGE)
            .create_async()
            .await;

        let provider = test_provider(&server);
        let record = provider
            .fetch_price(&StockId::new("SAP"), Exchange::Xetra)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(record.price, 1182.64);
        assert_eq!(record.currency, "EUR");
        assert_eq!(record.exchange, Exchange::Xetra);
    }

    #[tokio::test]
    async fn test_search_stock() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/suchergebnis.asp")
            .match_query(Matcher::UrlEncoded("_search".to_string(), "sap".to_string()))
            .with_status(200)
            .with_body(SEARCH_PAGE)
            .create_async()
            .await;

        let provider = test_provider(&server);
        let results = provider.search_stock("sap", Some(1)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].isin, "DE0007164600");
        assert_eq!(results[0].wkn, "716460");
    }

    #[tokio::test]
    async fn test_check_availability() {
        let mut server = Server::new_async().await;
        let _mock = server.mock("GET", "/").with_status(200).create_async().await;
        assert!(test_provider(&server).check_availability().await.is_ok());

        let mut down = Server::new_async().await;
        let _mock = down.mock("GET", "/").with_status(500).create_async().await;
        assert!(matches!(
            test_provider(&down).check_availability().await,
            Err(FinanzenError::Network(_))
        ));
    }
}
