pub mod classify;
pub mod market;
pub mod price;
pub mod rows;
pub mod summary;

use crate::model::{MarketPrice, SummaryMap};
use classify::RowKind;

/// Everything the pipeline pulls out of one report page.
#[derive(Debug, Default)]
pub struct ParsedTables {
    pub summary: SummaryMap,
    pub market_prices: Vec<MarketPrice>,
}

/// Two-pass pipeline: html → rows → classified fold into the accumulators.
pub fn parse_document(html: &str) -> ParsedTables {
    fold_rows(&rows::table_rows(html))
}

/// Single pass in document order. Order matters downstream: summary repeats
/// overwrite (last write wins) and market records append, so rows must not be
/// reordered before this fold.
pub fn fold_rows(rows: &[rows::Row]) -> ParsedTables {
    let mut tables = ParsedTables::default();

    for row in rows {
        match classify::classify(row) {
            RowKind::Summary { key, value } => {
                summary::apply(&mut tables.summary, key, value);
            }
            RowKind::Detail(cells) => {
                if let Some(record) = market::build_record(cells) {
                    tables.market_prices.push(record);
                }
            }
            RowKind::Skip => {}
        }
    }

    tables
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::rows::Row;
    use super::*;

    fn detail(market: &str, avg: &str) -> Row {
        vec![
            "Medak".into(),
            market.into(),
            "1".into(),
            "Sona".into(),
            "₹ 2,700/Quintal".into(),
            "₹ 2,500/Quintal".into(),
            avg.into(),
            "25 Aug 2026".into(),
        ]
    }

    fn mixed_rows() -> Vec<Row> {
        vec![
            vec![], // header
            vec!["Avg Market Price:".into(), "₹ 2,500/Quintal".into()],
            detail("Siddipet", "₹ 2,620/Quintal"),
            vec!["junk".into(), "junk".into(), "junk".into()],
            detail("Gajwel", "N/A"), // dropped: no average
            detail("Zaheerabad", "₹ 2,580/Quintal"),
            vec!["Avg Market Price:".into(), "₹ 2,600/Quintal".into()],
        ]
    }

    #[test]
    fn detail_order_preserved_and_invalid_dropped() {
        let tables = fold_rows(&mixed_rows());
        let markets: Vec<&str> = tables
            .market_prices
            .iter()
            .map(|r| r.market.as_str())
            .collect();
        assert_eq!(markets, vec!["Siddipet", "Zaheerabad"]);
    }

    #[test]
    fn summary_last_write_wins() {
        let tables = fold_rows(&mixed_rows());
        assert_eq!(tables.summary.len(), 1);
        assert_eq!(
            tables.summary.get("Avg Market Price").map(String::as_str),
            Some("₹ 2,600/Quintal")
        );
    }

    #[test]
    fn five_cell_row_touches_nothing() {
        let row: Row = (0..5).map(|i| format!("c{}", i)).collect();
        let tables = fold_rows(&[row]);
        assert!(tables.summary.is_empty());
        assert!(tables.market_prices.is_empty());
    }

    #[test]
    fn rerun_is_byte_identical() {
        let rows = mixed_rows();
        let a = fold_rows(&rows);
        let b = fold_rows(&rows);
        assert_eq!(
            serde_json::to_string(&a.summary).unwrap(),
            serde_json::to_string(&b.summary).unwrap()
        );
        assert_eq!(
            serde_json::to_string(&a.market_prices).unwrap(),
            serde_json::to_string(&b.market_prices).unwrap()
        );
    }

    #[test]
    fn fixture_page() {
        let html = std::fs::read_to_string("tests/fixtures/rice_report.html").unwrap();
        let tables = parse_document(&html);

        assert_eq!(
            tables.summary.get("Avg Market Price").map(String::as_str),
            Some("₹ 2,600/Quintal")
        );
        assert_eq!(
            tables.summary.get("Costliest Market Price").map(String::as_str),
            Some("₹ 2,700/Quintal")
        );

        // Third detail row has a dashed-out average and must be dropped.
        assert_eq!(tables.market_prices.len(), 2);
        assert_eq!(tables.market_prices[0].market, "Siddipet");
        assert_eq!(tables.market_prices[0].avg_price, 2620.0);
        assert_eq!(tables.market_prices[1].market, "Zaheerabad");
        assert_eq!(tables.market_prices[1].min_price, None);
    }
}
