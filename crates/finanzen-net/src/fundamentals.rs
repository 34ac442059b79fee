//! Extraction of the fundamentals page (`/bilanz_guv/{stock}`).

use finanzen_core::{
    Category, FinanzenError, FundamentalsRecord, MetricTable, Result, StockId,
    normalize::parse_number,
};
use scraper::{Html, Selector};
use tracing::{trace, warn};

use crate::html::{ensure_valid_page, section_after_heading, selector, text_of};

/// Leading header cells that carry no year.
const LABEL_COLUMNS: usize = 2;

struct TableSelectors {
    heading: Selector,
    header_cell: Selector,
    row: Selector,
    cell: Selector,
    label: Selector,
}

impl TableSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            heading: selector("h2")?,
            header_cell: selector("th")?,
            row: selector("tr")?,
            cell: selector("td")?,
            label: selector("td.font-bold")?,
        })
    }
}

/// Parses a fundamentals page.
///
/// Each category is extracted on its own; a category that fails is logged and
/// left as "no data".
pub(crate) fn parse_fundamentals(html: &str, stock: &StockId) -> Result<FundamentalsRecord> {
    let document = Html::parse_document(html);
    ensure_valid_page(&document, stock)?;

    let selectors = TableSelectors::new()?;
    let mut record = FundamentalsRecord::new(stock.clone());

    for category in Category::ALL {
        match parse_section(&document, &selectors, category) {
            Ok(table) => record.set_section(category, Some(table)),
            Err(e) => {
                warn!(
                    stock = %stock,
                    category = %category,
                    error = %e,
                    "Section unavailable, marking as no data"
                );
            }
        }
    }

    Ok(record)
}

fn parse_section(
    document: &Html,
    selectors: &TableSelectors,
    category: Category,
) -> Result<MetricTable<i32>> {
    let signal = category.heading();
    let section = section_after_heading(document, &selectors.heading, |t| t.contains(signal))
        .ok_or_else(|| FinanzenError::Parse(format!("no heading containing '{signal}'")))?;

    let years = section
        .select(&selectors.header_cell)
        .skip(LABEL_COLUMNS)
        .map(|th| {
            let text = text_of(&th);
            text.parse::<i32>()
                .map_err(|e| FinanzenError::Parse(format!("invalid year '{text}': {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut table = MetricTable::new();
    for row in section.select(&selectors.row).skip(1) {
        let name = row
            .select(&selectors.label)
            .next()
            .map(|td| text_of(&td))
            .ok_or_else(|| FinanzenError::Parse(format!("row without label in '{signal}'")))?;

        let values = row
            .select(&selectors.cell)
            .skip(LABEL_COLUMNS)
            .map(|td| parse_number(&text_of(&td)))
            .collect::<Result<Vec<_>>>()?;

        trace!(category = %category, metric = %name, values = values.len(), "Parsed row");
        table.insert(name, years.iter().copied().zip(values).collect());
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FUNDAMENTALS_PAGE;

    #[test]
    fn test_income_statement_values() {
        let record = parse_fundamentals(FUNDAMENTALS_PAGE, &StockId::new("sap")).unwrap();

        let income = record.section(Category::IncomeStatement).unwrap();
        let revenue = &income["Umsatzerlöse"];
        assert_eq!(revenue.len(), 2);
        assert_eq!(revenue[&2020], Some(1000.0));
        assert_eq!(revenue[&2021], Some(1200.0));
    }

    #[test]
    fn test_absent_tokens_become_none() {
        let record = parse_fundamentals(FUNDAMENTALS_PAGE, &StockId::new("sap")).unwrap();

        assert_eq!(
            record.value(Category::BalanceSheet, "Summe Aktiva", 2020),
            Some(58_400.5)
        );
        let goodwill = &record.section(Category::BalanceSheet).unwrap()["Goodwill"];
        assert_eq!(goodwill[&2020], None);
        assert_eq!(goodwill[&2021], None);
    }

    #[test]
    fn test_broken_sections_degrade_to_no_data() {
        let record = parse_fundamentals(FUNDAMENTALS_PAGE, &StockId::new("sap")).unwrap();

        // malformed year header
        assert!(record.section(Category::KeyRatios).is_none());
        // heading missing from the page
        assert!(record.section(Category::Other).is_none());
        // the remaining sections are unaffected
        assert!(record.section(Category::Quotes).is_some());
        assert_eq!(record.to_dict().len(), 5);
    }

    #[test]
    fn test_invalid_page_is_stock_not_found() {
        let result = parse_fundamentals("<html><body><h1>Oops</h1></body></html>", &StockId::new("nope"));
        assert!(matches!(result, Err(FinanzenError::StockNotFound(_))));
    }
}
