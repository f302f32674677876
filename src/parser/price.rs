use std::sync::LazyLock;

use regex::Regex;

// Maximal run of digits and commas, e.g. "2,620" inside "₹ 2,620/Quintal".
static NUMERIC_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\d,]+").unwrap());

/// Pull the first numeric run out of free-form price text, commas stripped.
/// Surrounding currency symbols, units and whitespace are ignored; text with
/// no digits yields None. Later runs in the same string are not combined.
pub fn extract_price(text: &str) -> Option<f64> {
    NUMERIC_RUN_RE
        .find_iter(text)
        .map(|m| m.as_str().replace(',', ""))
        .find(|run| !run.is_empty())
        .and_then(|run| run.parse::<f64>().ok())
}
