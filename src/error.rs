use thiserror::Error;

/// The two failure classes the API distinguishes: the upstream page could not
/// be fetched, or something went wrong while turning it into records.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Failed to fetch data: {0}")]
    Fetch(String),

    #[error("An error occurred: {0}")]
    Parse(String),
}

impl ScrapeError {
    pub fn fetch(detail: impl std::fmt::Display) -> Self {
        Self::Fetch(detail.to_string())
    }

    pub fn parse(detail: impl std::fmt::Display) -> Self {
        Self::Parse(detail.to_string())
    }
}
