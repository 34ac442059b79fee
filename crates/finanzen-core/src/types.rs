//! Core data types for finanzen.net data.
//!
//! This module defines the identifiers and records handed out by providers:
//!
//! - [`StockId`] - Site identifier of a stock (e.g. `sap`)
//! - [`Exchange`] - Allow-listed exchange code
//! - [`Category`] - The five fundamentals sections
//! - [`FundamentalsRecord`] - Yearly fundamentals per category
//! - [`EstimatesRecord`] - Analyst estimates per period label
//! - [`PriceRecord`] - Current quote on an exchange
//! - [`SearchResult`] - One hit of the site search

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::FinanzenError;

/// Suffix the site appends to stock page names.
pub const STOCK_SUFFIX: &str = "-aktie";

/// A stock identifier as used in finanzen.net URLs.
///
/// Identifiers are lowercased and a trailing `-aktie` is stripped on creation,
/// so `"SAP-Aktie"` and `"sap"` name the same stock.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StockId(String);

impl StockId {
    /// Creates a new identifier, lowercasing and stripping the `-aktie` suffix.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        let lower = s.into().trim().to_lowercase();
        match lower.strip_suffix(STOCK_SUFFIX) {
            Some(stripped) => Self(stripped.to_string()),
            None => Self(lower),
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for StockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StockId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for StockId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StockId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Exchanges for which the site publishes quotes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    /// Börse Berlin.
    Ber,
    /// gettex (Börse München).
    Bmn,
    /// Börse Düsseldorf.
    Dus,
    /// Börse Frankfurt.
    #[default]
    Fse,
    /// Börse Hamburg.
    Ham,
    /// Börse Hannover.
    Han,
    /// Börse München.
    Mun,
    /// Börse Stuttgart.
    Stu,
    /// Tradegate.
    Tgt,
    /// Xetra.
    Xetra,
    /// Baader Bank.
    Bae,
    /// NASDAQ.
    Nas,
    /// New York Stock Exchange.
    Nyse,
    /// SIX Swiss Exchange.
    Swx,
}

impl Exchange {
    /// All exchanges in the allow-list.
    pub const ALL: [Self; 14] = [
        Self::Ber,
        Self::Bmn,
        Self::Dus,
        Self::Fse,
        Self::Ham,
        Self::Han,
        Self::Mun,
        Self::Stu,
        Self::Tgt,
        Self::Xetra,
        Self::Bae,
        Self::Nas,
        Self::Nyse,
        Self::Swx,
    ];

    /// Returns the code used in quote URLs (e.g. `FSE`).
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Ber => "BER",
            Self::Bmn => "BMN",
            Self::Dus => "DUS",
            Self::Fse => "FSE",
            Self::Ham => "HAM",
            Self::Han => "HAN",
            Self::Mun => "MUN",
            Self::Stu => "STU",
            Self::Tgt => "TGT",
            Self::Xetra => "XETRA",
            Self::Bae => "BAE",
            Self::Nas => "NAS",
            Self::Nyse => "NYSE",
            Self::Swx => "SWX",
        }
    }

    /// Comma separated list of every accepted code.
    #[must_use]
    pub fn allowed_codes() -> String {
        Self::ALL
            .iter()
            .map(Self::code)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Exchange {
    type Err = FinanzenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|exchange| exchange.code() == code)
            .ok_or_else(|| FinanzenError::InvalidExchange {
                code,
                allowed: Self::allowed_codes(),
            })
    }
}

/// Sections of the fundamentals page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Per-share figures ("Die Aktie").
    Quotes,
    /// Key ratios ("Unternehmenskennzahlen").
    #[serde(rename = "Key Ratios")]
    KeyRatios,
    /// Income statement ("GuV").
    #[serde(rename = "Income Statement")]
    IncomeStatement,
    /// Balance sheet ("Bilanz").
    #[serde(rename = "Balance Sheet")]
    BalanceSheet,
    /// Other figures such as employees ("sonstige Angaben").
    Other,
}

impl Category {
    /// All categories in page order.
    pub const ALL: [Self; 5] = [
        Self::Quotes,
        Self::KeyRatios,
        Self::IncomeStatement,
        Self::BalanceSheet,
        Self::Other,
    ];

    /// Returns the display name used as record key and table column value.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Quotes => "Quotes",
            Self::KeyRatios => "Key Ratios",
            Self::IncomeStatement => "Income Statement",
            Self::BalanceSheet => "Balance Sheet",
            Self::Other => "Other",
        }
    }

    /// Returns the text contained in the heading that introduces this section.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Quotes => "Die Aktie",
            Self::KeyRatios => "Unternehmenskennzahlen",
            Self::IncomeStatement => "GuV",
            Self::BalanceSheet => "Bilanz",
            Self::Other => "sonstige Angaben",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Metric name to period to value. `None` values are absent, not zero.
pub type MetricTable<K> = BTreeMap<String, BTreeMap<K, Option<f64>>>;

/// Fundamentals of one stock, keyed by [`Category`].
///
/// Every category is always present as a key. A category whose table could not
/// be extracted holds `None`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsRecord {
    /// Stock the figures belong to.
    pub stock: StockId,
    sections: BTreeMap<Category, Option<MetricTable<i32>>>,
}

impl FundamentalsRecord {
    /// Creates a record with all five categories marked as "no data".
    #[must_use]
    pub fn new(stock: StockId) -> Self {
        Self {
            stock,
            sections: Category::ALL.into_iter().map(|c| (c, None)).collect(),
        }
    }

    /// Sets the table of a category.
    pub fn set_section(&mut self, category: Category, table: Option<MetricTable<i32>>) {
        self.sections.insert(category, table);
    }

    /// Returns the table of a category, or `None` if it carries no data.
    #[must_use]
    pub fn section(&self, category: Category) -> Option<&MetricTable<i32>> {
        self.sections.get(&category).and_then(Option::as_ref)
    }

    /// Iterates over all categories in page order.
    pub fn sections(&self) -> impl Iterator<Item = (Category, Option<&MetricTable<i32>>)> {
        self.sections.iter().map(|(c, t)| (*c, t.as_ref()))
    }

    /// Returns the value of one metric in one year.
    #[must_use]
    pub fn value(&self, category: Category, metric: &str, year: i32) -> Option<f64> {
        self.section(category)?.get(metric)?.get(&year).copied().flatten()
    }

    /// Returns a nested map keyed by category display names.
    #[must_use]
    pub fn to_dict(&self) -> BTreeMap<&'static str, Option<MetricTable<i32>>> {
        self.sections
            .iter()
            .map(|(c, t)| (c.name(), t.clone()))
            .collect()
    }
}

/// Analyst estimates of one stock.
///
/// Period labels are kept as printed on the page (e.g. `"2024e"`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatesRecord {
    /// Stock the estimates belong to.
    pub stock: StockId,
    /// Metric name to period label to value.
    pub metrics: MetricTable<String>,
}

impl EstimatesRecord {
    /// Creates an empty estimates record.
    #[must_use]
    pub fn new(stock: StockId) -> Self {
        Self {
            stock,
            metrics: MetricTable::new(),
        }
    }

    /// Returns the estimate of one metric for one period label.
    #[must_use]
    pub fn value(&self, metric: &str, period: &str) -> Option<f64> {
        self.metrics.get(metric)?.get(period).copied().flatten()
    }
}

/// Current quote of a stock on one exchange.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Last price.
    pub price: f64,
    /// Currency code printed next to the price (e.g. `EUR`).
    pub currency: String,
    /// Time of the quote.
    pub timestamp: DateTime<FixedOffset>,
    /// Quoted stock.
    pub stock: StockId,
    /// Exchange the quote comes from.
    pub exchange: Exchange,
}

/// Kinds of instruments the site search distinguishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchCategory {
    /// Stocks.
    #[default]
    Stock,
    /// Mutual funds.
    Fund,
    /// Exchange traded funds.
    Etf,
    /// Indices.
    Index,
    /// Bonds.
    Bond,
}

impl SearchCategory {
    /// Path prefix of result links in this category.
    #[must_use]
    pub const fn path_prefix(&self) -> &'static str {
        match self {
            Self::Stock => "/aktien/",
            Self::Fund => "/fonds/",
            Self::Etf => "/etf/",
            Self::Index => "/index/",
            Self::Bond => "/anleihen/",
        }
    }

    /// Suffix removed from the link's last segment to obtain the site identifier.
    #[must_use]
    pub const fn id_suffix(&self) -> Option<&'static str> {
        match self {
            Self::Stock => Some(STOCK_SUFFIX),
            _ => None,
        }
    }
}

/// One hit of the site search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Display name of the instrument.
    pub name: String,
    /// Site identifier usable with the other operations.
    pub id: String,
    /// International Securities Identification Number.
    pub isin: String,
    /// German securities identification number.
    pub wkn: String,
}

impl SearchResult {
    /// Creates a new search result.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        isin: impl Into<String>,
        wkn: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            isin: isin.into(),
            wkn: wkn.into(),
        }
    }
}
