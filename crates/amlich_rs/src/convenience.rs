use amlich_calendar::{CalendarConfig, CalendarError, LunarDate, LunarYear, SolarMatch};
use amlich_time::SolarDate;

/// Lunar date of a solar date in Vietnamese civil time.
pub fn solar_to_lunar(date: SolarDate) -> LunarDate {
    solar_to_lunar_with(date, &CalendarConfig::vietnam())
}

/// Lunar date of a solar date under an explicit config.
pub fn solar_to_lunar_with(date: SolarDate, config: &CalendarConfig) -> LunarDate {
    amlich_calendar::solar_to_lunar(date, config)
}

/// Solar date of a lunar date in Vietnamese civil time.
///
/// See [`amlich_calendar::lunar_to_solar`] for the matching rules.
pub fn lunar_to_solar(
    day: u32,
    month: u32,
    year: i32,
    leap: bool,
) -> Result<SolarMatch, CalendarError> {
    lunar_to_solar_with(day, month, year, leap, &CalendarConfig::vietnam())
}

/// Solar date of a lunar date under an explicit config.
pub fn lunar_to_solar_with(
    day: u32,
    month: u32,
    year: i32,
    leap: bool,
    config: &CalendarConfig,
) -> Result<SolarMatch, CalendarError> {
    amlich_calendar::lunar_to_solar(day, month, year, leap, config)
}

/// Month table of a lunar year in Vietnamese civil time.
pub fn lunar_year(year: i32) -> LunarYear {
    lunar_year_with(year, &CalendarConfig::vietnam())
}

/// Month table of a lunar year under an explicit config.
pub fn lunar_year_with(year: i32, config: &CalendarConfig) -> LunarYear {
    amlich_calendar::lunar_year(year, config)
}

/// Leap month of a lunar year in Vietnamese civil time.
pub fn leap_month(year: i32) -> Option<u32> {
    leap_month_with(year, &CalendarConfig::vietnam())
}

/// Leap month of a lunar year under an explicit config.
pub fn leap_month_with(year: i32, config: &CalendarConfig) -> Option<u32> {
    amlich_calendar::leap_month(year, config)
}

/// Solar date of Tết in Vietnamese civil time.
pub fn tet(year: i32) -> SolarDate {
    tet_with(year, &CalendarConfig::vietnam())
}

/// Solar date of Tết under an explicit config.
pub fn tet_with(year: i32, config: &CalendarConfig) -> SolarDate {
    amlich_calendar::tet(year, config)
}
