use tracing::info;

use crate::error::ScrapeError;

const BASE_URL: &str = "https://www.napanta.com/agri-commodity-prices";

// The report page serves an empty shell to default client UAs; a desktop
// browser UA gets the full tables.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

pub fn report_url(state: &str, commodity: &str) -> String {
    format!("{}/{}/{}/", BASE_URL, state, commodity)
}

/// Fetch the commodity report page for a normalized state/commodity pair.
/// Transport failures and non-success statuses both surface as fetch errors.
pub async fn fetch_report(state: &str, commodity: &str) -> Result<String, ScrapeError> {
    let url = report_url(state, commodity);
    info!("Fetching report page: {}", url);

    let client = reqwest::Client::new();
    let response = client
        .get(&url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(ScrapeError::fetch)?
        .error_for_status()
        .map_err(ScrapeError::fetch)?;

    let html = response.text().await.map_err(ScrapeError::fetch)?;
    info!("Fetched {} bytes", html.len());
    Ok(html)
}
