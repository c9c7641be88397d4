//! Error types for civil date construction and parsing.

/// Errors from building or parsing a [`SolarDate`](crate::SolarDate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Day/month combination does not exist in that year.
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Year as given.
        year: i32,
        /// Month as given.
        month: u32,
        /// Day as given.
        day: u32,
    },
    /// Text is not of the form `YYYY-MM-DD`.
    #[error("cannot parse date: {0}")]
    Parse(String),
}
