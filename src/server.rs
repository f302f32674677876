use std::net::SocketAddr;

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::ScrapeError;
use crate::model::PriceReport;
use crate::scrape;

/// Bind and serve the price API until the process is stopped.
pub async fn run(host: &str, port: u16) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // The page is consumed by browser frontends on other origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/prices/:state/:commodity", get(get_prices))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    info!("Serving price API on http://{}", addr);
    info!("  GET http://{}/prices/{{state}}/{{commodity}}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// GET /prices/{state}/{commodity}
///
/// Fetch errors map to 404 (the page 404s for unknown state/commodity pairs),
/// anything else to 500. Failure bodies carry only `success` and `error`.
async fn get_prices(Path((state, commodity)): Path<(String, String)>) -> impl IntoResponse {
    match scrape::scrape(&state, &commodity).await {
        Ok(report) => (StatusCode::OK, Json(report)),
        Err(e) => {
            warn!("Request for {}/{} failed: {}", state, commodity, e);
            let status = match &e {
                ScrapeError::Fetch(_) => StatusCode::NOT_FOUND,
                ScrapeError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(PriceReport::failure(&e)))
        }
    }
}
