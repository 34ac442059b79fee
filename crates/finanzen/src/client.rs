//! Client taking caller supplied strings and returning the requested output shape.

use std::sync::Arc;

use tracing::debug;

use finanzen_core::{
    EstimatesProvider, EstimatesRecord, Exchange, FinanzenError, FundamentalsProvider,
    FundamentalsRecord, Output, OutputFormat, PriceRecord, QuoteProvider, Result, SearchCategory,
    SearchProvider, SearchResult, StockId,
};

/// Entry point for retrieving stock data.
///
/// Every method validates its string arguments (stock name, exchange code,
/// output format) before the provider is called, so invalid input never
/// reaches the network.
///
/// # Example
///
/// ```rust,ignore
/// use finanzen::Finanzen;
///
/// let client = Finanzen::new();
/// let estimates = client.get_estimates("sap", "dataframe").await?;
/// ```
#[derive(Clone)]
pub struct Finanzen {
    fundamentals: Arc<dyn FundamentalsProvider>,
    estimates: Arc<dyn EstimatesProvider>,
    quotes: Arc<dyn QuoteProvider>,
    search: Arc<dyn SearchProvider>,
}

impl std::fmt::Debug for Finanzen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Finanzen")
            .field("fundamentals", &self.fundamentals.name())
            .field("estimates", &self.estimates.name())
            .field("quotes", &self.quotes.name())
            .field("search", &self.search.name())
            .finish()
    }
}

impl Finanzen {
    /// Create a client backed by the finanzen.net provider.
    #[cfg(feature = "net")]
    #[must_use]
    pub fn new() -> Self {
        Self::with_provider(Arc::new(finanzen_net::FinanzenNetProvider::new()))
    }

    /// Create a client backed by `provider` for every kind of data.
    pub fn with_provider<P>(provider: Arc<P>) -> Self
    where
        P: FundamentalsProvider + EstimatesProvider + QuoteProvider + SearchProvider + 'static,
    {
        debug!(provider = provider.name(), "Creating client");
        Self {
            fundamentals: provider.clone(),
            estimates: provider.clone(),
            quotes: provider.clone(),
            search: provider,
        }
    }

    /// Fetch the fundamentals of a stock.
    ///
    /// `output` is `"dict"` for the [`FundamentalsRecord`] or `"dataframe"` for a
    /// table with columns `Category`, `Metric`, `Year`, `Value`.
    pub async fn get_fundamentals(
        &self,
        stock: &str,
        output: &str,
    ) -> Result<Output<FundamentalsRecord>> {
        let format: OutputFormat = output.parse()?;
        let stock = parse_stock(stock)?;

        debug!(
            provider = self.fundamentals.name(),
            stock = %stock,
            "Fetching fundamentals"
        );
        let record = self.fundamentals.fetch_fundamentals(&stock).await?;
        Output::shape(record, format)
    }

    /// Fetch the analyst estimates of a stock.
    ///
    /// The dataframe shape has columns `Metric`, `Year`, `Value`.
    pub async fn get_estimates(&self, stock: &str, output: &str) -> Result<Output<EstimatesRecord>> {
        let format: OutputFormat = output.parse()?;
        let stock = parse_stock(stock)?;

        debug!(
            provider = self.estimates.name(),
            stock = %stock,
            "Fetching estimates"
        );
        let record = self.estimates.fetch_estimates(&stock).await?;
        Output::shape(record, format)
    }

    /// Fetch the current price of a stock on an exchange (e.g. `"FSE"`).
    ///
    /// Fails with [`FinanzenError::InvalidExchange`] for codes outside the
    /// allow-list without sending a request.
    pub async fn get_price(
        &self,
        stock: &str,
        exchange: &str,
        output: &str,
    ) -> Result<Output<PriceRecord>> {
        let exchange: Exchange = exchange.parse()?;
        let format: OutputFormat = output.parse()?;
        let stock = parse_stock(stock)?;

        debug!(
            provider = self.quotes.name(),
            stock = %stock,
            exchange = %exchange,
            "Fetching price"
        );
        let record = self.quotes.fetch_price(&stock, exchange).await?;
        Output::shape(record, format)
    }

    /// Search stocks by name, ISIN or WKN.
    ///
    /// `limit` of `None` returns every hit, `Some(0)` returns none.
    pub async fn search_stock(
        &self,
        term: &str,
        limit: Option<usize>,
        output: &str,
    ) -> Result<Output<Vec<SearchResult>>> {
        self.search(term, SearchCategory::Stock, limit, output).await
    }

    /// Search instruments of one category.
    pub async fn search(
        &self,
        term: &str,
        category: SearchCategory,
        limit: Option<usize>,
        output: &str,
    ) -> Result<Output<Vec<SearchResult>>> {
        let format: OutputFormat = output.parse()?;
        let term = term.trim();
        if term.is_empty() {
            return Err(FinanzenError::InvalidParameter(
                "search term must not be empty".to_string(),
            ));
        }

        debug!(
            provider = self.search.name(),
            term,
            category = ?category,
            limit = ?limit,
            "Searching"
        );
        let results = self.search.search(term, category, limit).await?;
        Output::shape(results, format)
    }
}

#[cfg(feature = "net")]
impl Default for Finanzen {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_stock(stock: &str) -> Result<StockId> {
    let stock = StockId::new(stock);
    if stock.is_empty() {
        return Err(FinanzenError::InvalidParameter(
            "stock name must not be empty".to_string(),
        ));
    }
    Ok(stock)
}
