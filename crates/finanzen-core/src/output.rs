//! Output shapes selectable by callers.
//!
//! Records can be handed out as they are ([`Output::Dict`]) or flattened into a
//! polars [`DataFrame`] ([`Output::DataFrame`]) with these columns:
//!
//! | record                  | columns                                          |
//! |-------------------------|--------------------------------------------------|
//! | [`FundamentalsRecord`]  | `Category`, `Metric`, `Year`, `Value`             |
//! | [`EstimatesRecord`]     | `Metric`, `Year`, `Value`                         |
//! | [`PriceRecord`]         | `Price`, `Currency`, `Timestamp`, `Stock`, `Exchange` |
//! | [`SearchResult`] list   | `Name`, `Stock`, `ISIN`, `WKN`                    |

use polars::prelude::*;
use std::fmt;
use std::str::FromStr;

use crate::{
    error::{FinanzenError, Result},
    types::{EstimatesRecord, FundamentalsRecord, PriceRecord, SearchResult},
};

/// Requested output shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// The typed record itself.
    Dict,
    /// A flat polars table.
    #[default]
    DataFrame,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dict => f.write_str("dict"),
            Self::DataFrame => f.write_str("dataframe"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FinanzenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dict" => Ok(Self::Dict),
            "dataframe" => Ok(Self::DataFrame),
            _ => Err(FinanzenError::InvalidOutputFormat(s.to_string())),
        }
    }
}

/// A record in the shape chosen by the caller.
#[derive(Clone, Debug)]
pub enum Output<T> {
    /// The record as returned by the provider.
    Dict(T),
    /// The record flattened into a table.
    DataFrame(DataFrame),
}

impl<T: ToDataFrame> Output<T> {
    /// Wraps `value` according to `format`.
    pub fn shape(value: T, format: OutputFormat) -> Result<Self> {
        match format {
            OutputFormat::Dict => Ok(Self::Dict(value)),
            OutputFormat::DataFrame => Ok(Self::DataFrame(value.to_dataframe()?)),
        }
    }
}

impl<T> Output<T> {
    /// Returns the record if this is the dict shape.
    #[must_use]
    pub fn into_dict(self) -> Option<T> {
        match self {
            Self::Dict(value) => Some(value),
            Self::DataFrame(_) => None,
        }
    }

    /// Returns the table if this is the dataframe shape.
    #[must_use]
    pub fn into_dataframe(self) -> Option<DataFrame> {
        match self {
            Self::Dict(_) => None,
            Self::DataFrame(df) => Some(df),
        }
    }
}

/// Conversion of a record into its flat table.
pub trait ToDataFrame {
    /// Flattens the record into a [`DataFrame`].
    fn to_dataframe(&self) -> Result<DataFrame>;
}

impl ToDataFrame for FundamentalsRecord {
    fn to_dataframe(&self) -> Result<DataFrame> {
        let mut categories: Vec<&str> = Vec::new();
        let mut metrics: Vec<&str> = Vec::new();
        let mut years: Vec<i32> = Vec::new();
        let mut values: Vec<Option<f64>> = Vec::new();

        // sections without data contribute no rows
        for (category, table) in self.sections() {
            let Some(table) = table else { continue };
            for (metric, by_year) in table {
                for (year, value) in by_year {
                    categories.push(category.name());
                    metrics.push(metric);
                    years.push(*year);
                    values.push(*value);
                }
            }
        }

        let df = DataFrame::new(vec![
            Column::new("Category".into(), categories),
            Column::new("Metric".into(), metrics),
            Column::new("Year".into(), years),
            Column::new("Value".into(), values),
        ])?;
        Ok(df)
    }
}

impl ToDataFrame for EstimatesRecord {
    fn to_dataframe(&self) -> Result<DataFrame> {
        let mut metrics: Vec<&str> = Vec::new();
        let mut periods: Vec<&str> = Vec::new();
        let mut values: Vec<Option<f64>> = Vec::new();

        for (metric, by_period) in &self.metrics {
            for (period, value) in by_period {
                metrics.push(metric);
                periods.push(period);
                values.push(*value);
            }
        }

        let df = DataFrame::new(vec![
            Column::new("Metric".into(), metrics),
            Column::new("Year".into(), periods),
            Column::new("Value".into(), values),
        ])?;
        Ok(df)
    }
}

impl ToDataFrame for PriceRecord {
    fn to_dataframe(&self) -> Result<DataFrame> {
        let timestamp = Column::new("Timestamp".into(), vec![self.timestamp.timestamp_millis()])
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?;

        let df = DataFrame::new(vec![
            Column::new("Price".into(), vec![self.price]),
            Column::new("Currency".into(), vec![self.currency.as_str()]),
            timestamp,
            Column::new("Stock".into(), vec![self.stock.as_str()]),
            Column::new("Exchange".into(), vec![self.exchange.code()]),
        ])?;
        Ok(df)
    }
}

impl ToDataFrame for Vec<SearchResult> {
    fn to_dataframe(&self) -> Result<DataFrame> {
        let names: Vec<&str> = self.iter().map(|r| r.name.as_str()).collect();
        let ids: Vec<&str> = self.iter().map(|r| r.id.as_str()).collect();
        let isins: Vec<&str> = self.iter().map(|r| r.isin.as_str()).collect();
        let wkns: Vec<&str> = self.iter().map(|r| r.wkn.as_str()).collect();

        let df = DataFrame::new(vec![
            Column::new("Name".into(), names),
            Column::new("Stock".into(), ids),
            Column::new("ISIN".into(), isins),
            Column::new("WKN".into(), wkns),
        ])?;
        Ok(df)
    }
}
