//! Vietnamese lunisolar calendar: solar ⇄ lunar date conversion.
//!
//! This crate provides:
//! - Month-11 anchor resolution (the new moon of the month holding the
//!   December solstice) and leap month detection by solar-term sectors
//! - Solar → lunar conversion over Julian Day Numbers
//! - Lunar → solar conversion, tagged exact or approximate
//! - Whole lunar year tables (month starts, lengths, leap month, Tết)
//!
//! All functions are pure and take the zone offset through
//! [`CalendarConfig`]; the Vietnamese default is UTC+7.

pub mod anchor;
pub mod calendar_types;
pub mod convert;
pub mod error;
pub mod year;

pub use anchor::{
    LEAP_SCAN_LIMIT, LunarCycle, YearAnchor, leap_month_offset, lunar_month11, year_anchor,
};
pub use calendar_types::{
    Approximation, CalendarConfig, LunarDate, LunarMonth, LunarYear, SolarMatch,
    VIETNAM_TIME_ZONE_HOURS,
};
pub use convert::{MAX_BRACKET_STEPS, lunar_date_for_jd, lunar_to_solar, solar_to_lunar};
pub use error::CalendarError;
pub use year::{leap_month, lunar_year, tet};
