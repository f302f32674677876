use super::price::extract_price;
use super::rows::Row;
use crate::model::MarketPrice;

// Positional layout of a detail row (see classify.rs). Index 2 is a serial
// number column the output does not carry.
const DISTRICT: usize = 0;
const MARKET: usize = 1;
const VARIETY: usize = 3;
const MAX_PRICE: usize = 4;
const MIN_PRICE: usize = 5;
const AVG_PRICE: usize = 6;
const DATE: usize = 7;

/// Build a record from a detail row. A row whose average-price cell has no
/// numeric content produces nothing — the page pads its tables with dashed-out
/// rows, and dropping them beats surfacing half a quote. Max and min are
/// allowed to be missing independently.
pub fn build_record(row: &Row) -> Option<MarketPrice> {
    let avg_price = extract_price(&row[AVG_PRICE])?;

    Some(MarketPrice {
        district: row[DISTRICT].trim().to_string(),
        market: row[MARKET].trim().to_string(),
        variety: row[VARIETY].trim().to_string(),
        max_price: extract_price(&row[MAX_PRICE]),
        min_price: extract_price(&row[MIN_PRICE]),
        avg_price,
        date: row[DATE].trim().to_string(),
    })
}
