use chrono::Utc;

use crate::archiver;
use crate::error::ScrapeError;
use crate::fetcher::Fetcher;
use crate::models::ProductRecord;
use crate::synthesizer;

/// Fetches the results page for `query` and turns its cards into records.
///
/// A page without product cards is `ScrapeError::NoProducts`.
pub fn scrape(
    fetcher: &Fetcher,
    query: &str,
    html_dump_path: Option<&str>,
) -> Result<Vec<ProductRecord>, ScrapeError> {
    let html = fetcher.fetch_search_page(query)?;

    if let Some(path) = html_dump_path {
        if let Err(e) = archiver::dump_html(&html, path) {
            tracing::warn!(%path, error = %e, "could not dump page html");
        }
    }

    let records = synthesizer::catalog_from_html(&html, &mut rand::thread_rng(), Utc::now());
    if records.is_empty() {
        return Err(ScrapeError::NoProducts { query: query.to_string() });
    }

    tracing::info!(%query, count = records.len(), "scraped catalog");
    Ok(records)
}

/// Like [`scrape`], but an empty page becomes an empty catalog after a warning.
pub fn scrape_or_empty(
    fetcher: &Fetcher,
    query: &str,
    html_dump_path: Option<&str>,
) -> Result<Vec<ProductRecord>, ScrapeError> {
    match scrape(fetcher, query, html_dump_path) {
        Err(ScrapeError::NoProducts { query }) => {
            tracing::warn!(%query, "page had no product cards; markup may have changed");
            Ok(Vec::new())
        }
        other => other,
    }
}
