//! Error types for lunar calendar conversion.

use amlich_time::TimeError;

/// Errors from calendar configuration or out-of-domain lunar input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Lunar month outside 1..=12.
    #[error("lunar month must be in 1..=12, got {0}")]
    InvalidLunarMonth(u32),
    /// Lunar day outside 1..=30.
    #[error("lunar day must be in 1..=30, got {0}")]
    InvalidLunarDay(u32),
    /// Zone offset is not finite or lies outside [-14, +14] hours.
    #[error("time zone offset must be within [-14, +14] hours, got {0}")]
    InvalidTimeZone(f64),
    /// Error from the civil date layer.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_month() {
        assert_eq!(
            CalendarError::InvalidLunarMonth(13).to_string(),
            "lunar month must be in 1..=12, got 13"
        );
    }

    #[test]
    fn display_day() {
        assert_eq!(
            CalendarError::InvalidLunarDay(0).to_string(),
            "lunar day must be in 1..=30, got 0"
        );
    }

    #[test]
    fn display_zone() {
        assert_eq!(
            CalendarError::InvalidTimeZone(15.5).to_string(),
            "time zone offset must be within [-14, +14] hours, got 15.5"
        );
    }

    #[test]
    fn from_time_error() {
        let e: CalendarError = TimeError::Parse("x".into()).into();
        assert_eq!(e.to_string(), "time error: cannot parse date: x");
    }

    #[test]
    fn error_is_send_sync_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
