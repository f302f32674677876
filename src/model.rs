use indexmap::IndexMap;
use serde::Serialize;

use crate::error::ScrapeError;

/// Summary section of the report page: normalized label → raw value text.
/// IndexMap keeps first-seen key order for serialization while inserts
/// overwrite in place (last write wins).
pub type SummaryMap = IndexMap<String, String>;

/// One market's price quote from a detail row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketPrice {
    pub district: String,
    pub market: String,
    pub variety: String,
    pub max_price: Option<f64>,
    pub min_price: Option<f64>,
    pub avg_price: f64,
    pub date: String,
}

/// Response payload. Success carries the normalized request identifiers plus
/// the two accumulators; failure carries only the error message.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PriceReport {
    Success {
        success: bool,
        state: String,
        commodity: String,
        summary: SummaryMap,
        market_prices: Vec<MarketPrice>,
    },
    Failure {
        success: bool,
        error: String,
    },
}

impl PriceReport {
    pub fn success(
        state: String,
        commodity: String,
        summary: SummaryMap,
        market_prices: Vec<MarketPrice>,
    ) -> Self {
        Self::Success {
            success: true,
            state,
            commodity,
            summary,
            market_prices,
        }
    }

    pub fn failure(err: &ScrapeError) -> Self {
        Self::Failure {
            success: false,
            error: err.to_string(),
        }
    }
}
