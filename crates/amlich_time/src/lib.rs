//! Julian Day Number arithmetic and the civil (solar) date type.
//!
//! This crate provides:
//! - Civil date ↔ Julian Day Number conversion (Gregorian with a Julian
//!   calendar fallback before 1582-10-15)
//! - `SolarDate`, the validated day/month/year value exchanged with callers
//! - ISO `YYYY-MM-DD` parsing and formatting
//!
//! Julian Day Numbers are plain `i64` day counts with no time-of-day or
//! timezone component.

pub mod error;
pub mod julian;
pub mod solar_date;

pub use error::TimeError;
pub use julian::{
    GREGORIAN_CUTOVER_JD, date_to_julian_day, days_in_month, is_leap_year, julian_day_to_date,
};
pub use solar_date::{SolarDate, Weekday};
