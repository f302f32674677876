use crate::model::SummaryMap;

/// Fold one summary row into the map. Keys are trimmed with a single trailing
/// colon removed ("Avg Market Price:" → "Avg Market Price"); values stay raw —
/// the summary section mixes prices, dates and counts, so no parsing applies.
/// A repeated key overwrites its earlier value but keeps its original slot.
pub fn apply(summary: &mut SummaryMap, key_raw: &str, value_raw: &str) {
    let key = normalize_key(key_raw);
    summary.insert(key, value_raw.to_string());
}

fn normalize_key(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed.strip_suffix(':').unwrap_or(trimmed).trim().to_string()
}
