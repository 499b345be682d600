use anyhow::{Context, Result};

use daraz_catalog_scraper::fetcher::Fetcher;
use daraz_catalog_scraper::settings::Settings;
use daraz_catalog_scraper::{archiver, catalog, telemetry};

fn main() -> Result<()> {
    telemetry::init();

    let settings = Settings::load().context("Failed to load settings")?;
    let query = std::env::args().nth(1).unwrap_or_else(|| settings.query.clone());
    let fetcher = Fetcher::new(&settings).context("Failed to build HTTP client")?;

    let records = catalog::scrape_or_empty(&fetcher, &query, settings.html_dump_path.as_deref())
        .context("Scrape failed")?;

    archiver::write_records(&records, std::io::stdout().lock())?;

    if let Some(path) = &settings.output_path {
        archiver::save_to_file(&records, path)
            .with_context(|| format!("Failed to write catalog to {path}"))?;
        tracing::info!(%path, count = records.len(), "catalog saved");
    }
    Ok(())
}
