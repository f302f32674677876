use super::rows::Row;

/// What a table row represents, decided purely by cell count.
#[derive(Debug, PartialEq)]
pub enum RowKind<'a> {
    /// Label/value pair from the summary section, e.g.
    /// `["Avg Market Price:", "₹ 2,600/Quintal"]`.
    Summary { key: &'a str, value: &'a str },
    /// One market's quote. The page lays these out positionally:
    ///
    ///   0 district | 1 market | 2 (unused) | 3 variety
    ///   4 max price | 5 min price | 6 avg price | 7 date
    ///
    /// Cells past index 7 are ignored.
    Detail(&'a Row),
    /// Header rows (no data cells) and rows of any other width.
    Skip,
}

/// Detail rows need at least indices 0..=7 populated.
const DETAIL_MIN_CELLS: usize = 8;

pub fn classify(row: &Row) -> RowKind<'_> {
    match row.len() {
        2 => RowKind::Summary {
            key: &row[0],
            value: &row[1],
        },
        n if n >= DETAIL_MIN_CELLS => RowKind::Detail(row),
        _ => RowKind::Skip,
    }
}
