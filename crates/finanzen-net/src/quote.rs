//! Extraction of the quote box on stock pages (`/aktien/{stock}-aktie@stBoerse_{EXCHANGE}`).

use finanzen_core::{
    Exchange, FinanzenError, PriceRecord, Result, StockId,
    normalize::{parse_price, parse_timestamp},
};
use scraper::Html;

use crate::html::{ensure_valid_page, selector, text_of};

pub(crate) fn parse_quote(html: &str, stock: &StockId, exchange: Exchange) -> Result<PriceRecord> {
    let document = Html::parse_document(html);
    ensure_valid_page(&document, stock)?;

    let quotebox = document
        .select(&selector("div.snapshot__values")?)
        .next()
        .ok_or_else(|| FinanzenError::NoData("No price available".to_string()))?;

    let price_text = quotebox
        .select(&selector("span.snapshot__value-current")?)
        .next()
        .map(|span| text_of(&span))
        .ok_or_else(|| FinanzenError::Parse("quote box without current value".to_string()))?;
    let (price, currency) = parse_price(&price_text)?;

    let datetime = document
        .select(&selector("div.snapshot__time time")?)
        .next()
        .and_then(|time| time.value().attr("datetime"))
        .ok_or_else(|| FinanzenError::Parse("quote without timestamp".to_string()))?;
    let timestamp = parse_timestamp(datetime)?;

    Ok(PriceRecord {
        price,
        currency,
        timestamp,
        stock: stock.clone(),
        exchange,
    })
}
