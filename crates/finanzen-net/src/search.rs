//! Extraction of search results (`/suchergebnis.asp?_search={term}`).

use finanzen_core::{Result, SearchCategory, SearchResult};
use scraper::{ElementRef, Html};
use tracing::trace;

use crate::html::{selector, text_of};

/// Parses a search result page, keeping hits of `category` up to `limit`.
pub(crate) fn parse_search(
    html: &str,
    category: SearchCategory,
    limit: Option<usize>,
) -> Result<Vec<SearchResult>> {
    let mut results = Vec::new();
    if limit == Some(0) {
        return Ok(results);
    }

    let document = Html::parse_document(html);
    let rows = selector("div.table tr")?;
    let cell = selector("td")?;
    let link = selector("a")?;

    for row in document.select(&rows) {
        let cells: Vec<ElementRef<'_>> = row.select(&cell).collect();
        // header rows have no data cells
        if cells.len() < 3 {
            continue;
        }
        let Some(anchor) = row.select(&link).next() else {
            continue;
        };
        let href = anchor.value().attr("href").unwrap_or_default();
        let Some(id) = instrument_id(href, category) else {
            continue;
        };

        let result = SearchResult::new(text_of(&anchor), id, text_of(&cells[1]), text_of(&cells[2]));
        trace!(name = %result.name, id = %result.id, "Search hit");
        results.push(result);

        if limit.is_some_and(|n| results.len() >= n) {
            break;
        }
    }

    Ok(results)
}

/// Derives the site identifier from a result link, if it belongs to `category`.
fn instrument_id(href: &str, category: SearchCategory) -> Option<String> {
    let path = match href.find("://") {
        Some(scheme_end) => {
            let rest = &href[scheme_end + 3..];
            &rest[rest.find('/')?..]
        }
        None => href,
    };
    let path = path.split(['?', '#']).next().unwrap_or_default();

    let segment = path.strip_prefix(category.path_prefix())?.trim_end_matches('/');
    let id = category
        .id_suffix()
        .and_then(|suffix| segment.strip_suffix(suffix))
        .unwrap_or(segment);

    (!id.is_empty()).then(|| id.to_string())
}
