//! DOM helpers shared by the extractors.

use finanzen_core::{FinanzenError, Result, StockId};
use scraper::{ElementRef, Html, Selector};

/// Elements only present on pages that describe an instrument.
const VALID_PAGE_MARKER: &str = "div.box.table-quotes, div.snapshot";

/// Compiles a CSS selector.
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| FinanzenError::Parse(format!("invalid selector '{css}': {e:?}")))
}

/// Returns the text of an element with whitespace runs collapsed.
pub(crate) fn text_of(element: &ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Fails with [`FinanzenError::StockNotFound`] unless the page carries the marker.
pub(crate) fn ensure_valid_page(document: &Html, stock: &StockId) -> Result<()> {
    let marker = selector(VALID_PAGE_MARKER)?;
    if document.select(&marker).next().is_none() {
        return Err(FinanzenError::StockNotFound(stock.to_string()));
    }
    Ok(())
}

/// Returns the parent of the first heading whose text satisfies `matches`.
pub(crate) fn section_after_heading<'a>(
    document: &'a Html,
    headings: &Selector,
    matches: impl Fn(&str) -> bool,
) -> Option<ElementRef<'a>> {
    document
        .select(headings)
        .find(|heading| matches(&text_of(heading)))
        .and_then(|heading| heading.parent())
        .and_then(ElementRef::wrap)
}
