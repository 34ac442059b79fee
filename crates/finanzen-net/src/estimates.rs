//! Extraction of the estimates page (`/schaetzungen/{stock}`).

use finanzen_core::{EstimatesRecord, FinanzenError, Result, StockId, normalize::parse_estimate};
use scraper::Html;
use tracing::trace;

use crate::html::{ensure_valid_page, section_after_heading, selector, text_of};

/// Start of the heading above the estimates table.
const ESTIMATES_HEADING: &str = "Schätzungen";

/// Parses an estimates page. Any malformed cell fails the whole page.
pub(crate) fn parse_estimates(html: &str, stock: &StockId) -> Result<EstimatesRecord> {
    let document = Html::parse_document(html);
    ensure_valid_page(&document, stock)?;

    let heading = selector("h1")?;
    let header_cell = selector("th")?;
    let row_selector = selector("tr")?;
    let cell = selector("td")?;

    let section = section_after_heading(&document, &heading, |t| t.starts_with(ESTIMATES_HEADING))
        .ok_or_else(|| FinanzenError::Parse(format!("no '{ESTIMATES_HEADING}' heading")))?;

    let periods: Vec<String> = section
        .select(&header_cell)
        .skip(1)
        .map(|th| text_of(&th))
        .collect();

    let mut record = EstimatesRecord::new(stock.clone());
    for row in section.select(&row_selector).skip(1) {
        let mut fields = row.select(&cell).map(|td| text_of(&td));
        let name = fields
            .next()
            .ok_or_else(|| FinanzenError::Parse("estimates row without cells".to_string()))?;
        let values = fields
            .map(|field| parse_estimate(&field))
            .collect::<Result<Vec<_>>>()?;

        trace!(metric = %name, values = values.len(), "Parsed estimates row");
        record
            .metrics
            .insert(name, periods.iter().cloned().zip(values).collect());
    }

    Ok(record)
}
