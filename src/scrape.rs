use tracing::info;

use crate::error::ScrapeError;
use crate::model::PriceReport;
use crate::{fetch, parser};

/// End-to-end scrape for one state/commodity pair: sanitize the identifiers,
/// fetch the report page and fold its tables into the response payload.
/// Returns the success payload; both error classes bubble up for the caller
/// to turn into a failure payload.
pub async fn scrape(state: &str, commodity: &str) -> Result<PriceReport, ScrapeError> {
    let state = state.trim().to_lowercase();
    let commodity = commodity.trim().to_lowercase();

    let html = fetch::fetch_report(&state, &commodity).await?;

    // Parsing a full report page is CPU-bound; keep it off the IO driver.
    // A panic inside the pipeline surfaces here as a join error rather than
    // taking the worker down.
    let tables = tokio::task::spawn_blocking(move || parser::parse_document(&html))
        .await
        .map_err(ScrapeError::parse)?;

    info!(
        "Parsed {} summary entries, {} market records for {}/{}",
        tables.summary.len(),
        tables.market_prices.len(),
        state,
        commodity
    );

    Ok(PriceReport::success(
        state,
        commodity,
        tables.summary,
        tables.market_prices,
    ))
}
