//! Normalizers for values printed in German locale.
//!
//! finanzen.net prints numbers with `.` as thousands separator and `,` as
//! decimal separator (`1.234,56`) and marks missing values with `-` or `< 0 *`.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use chrono_tz::Europe::Berlin;

use crate::error::{FinanzenError, Result};

/// Cell contents that stand for a missing value.
pub const ABSENT_TOKENS: [&str; 2] = ["-", "< 0 *"];

/// Naive timestamp layouts tried after RFC 3339, interpreted as Berlin time.
const NAIVE_TIMESTAMP_FORMATS: [&str; 3] =
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%d.%m.%Y %H:%M:%S"];

/// Parses a German formatted number.
///
/// Returns `Ok(None)` for the absent tokens in [`ABSENT_TOKENS`].
///
/// ```
/// use finanzen_core::normalize::parse_number;
///
/// assert_eq!(parse_number("1.234,56").unwrap(), Some(1234.56));
/// assert_eq!(parse_number("-").unwrap(), None);
/// ```
pub fn parse_number(text: &str) -> Result<Option<f64>> {
    let text = text.trim();
    if ABSENT_TOKENS.contains(&text) {
        return Ok(None);
    }

    let cleaned = text.replace('.', "").replace(',', ".");
    cleaned
        .parse::<f64>()
        .map(Some)
        .map_err(|e| FinanzenError::Parse(format!("invalid number '{text}': {e}")))
}

/// Parses an estimate cell.
///
/// Everything except ASCII digits and the decimal comma is dropped before
/// conversion, so units and thousands separators are ignored. A lone `-`
/// yields `Ok(None)`; a cell left empty after cleaning is an error.
pub fn parse_estimate(text: &str) -> Result<Option<f64>> {
    let text = text.trim();
    if text == "-" {
        return Ok(None);
    }

    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    cleaned
        .parse::<f64>()
        .map(Some)
        .map_err(|e| FinanzenError::Parse(format!("invalid estimate '{text}': {e}")))
}

/// Splits a quote such as `182,64 EUR` into its value and currency code.
pub fn parse_price(text: &str) -> Result<(f64, String)> {
    let text = text.trim();
    let split = text
        .find(|c: char| c.is_alphabetic())
        .ok_or_else(|| FinanzenError::Parse(format!("no currency in price '{text}'")))?;
    let (number, currency) = text.split_at(split);

    let currency: String = currency.chars().filter(|c| !c.is_whitespace()).collect();
    let price = parse_number(number)?
        .ok_or_else(|| FinanzenError::NoData("No price available".to_string()))?;

    Ok((price, currency))
}

/// Parses the `datetime` attribute of a quote.
///
/// RFC 3339 values keep their offset. Values without offset are taken as
/// local time of the site (Europe/Berlin).
pub fn parse_timestamp(text: &str) -> Result<DateTime<FixedOffset>> {
    let text = text.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Ok(ts);
    }

    for format in NAIVE_TIMESTAMP_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Berlin
                .from_local_datetime(&naive)
                .earliest()
                .map(|ts| ts.fixed_offset())
                .ok_or_else(|| {
                    FinanzenError::Parse(format!("timestamp '{text}' does not exist in Berlin"))
                });
        }
    }

    Err(FinanzenError::Parse(format!("invalid timestamp '{text}'")))
}
