//! Combined per-day lookup and festival listing.

use amlich_calendar::{CalendarConfig, LunarDate, lunar_year};
use amlich_time::{SolarDate, Weekday};
use amlich_vn::{
    ALL_FESTIVALS, CanChi, SpecialDay, day_can_chi, lunar_month_name, lunar_year_name,
    month_can_chi, special_lunar_day,
};
use tracing::debug;

/// Everything a day view shows about one solar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayInfo {
    /// The solar date.
    pub solar: SolarDate,
    /// Day of the week.
    pub weekday: Weekday,
    /// Matching lunar date.
    pub lunar: LunarDate,
    /// Stem-branch name of the lunar year, e.g. "Giáp Thìn".
    pub year_name: String,
    /// Traditional month name, e.g. "Giêng" or "Nhuận Hai".
    pub month_name: String,
    /// Stem-branch of the lunar month.
    pub month_can_chi: CanChi,
    /// Stem-branch of the day.
    pub day_can_chi: CanChi,
    /// Festival or monthly observance, if any.
    pub special: Option<SpecialDay>,
}

/// Day view for a solar date in Vietnamese civil time.
pub fn day_info(date: SolarDate) -> DayInfo {
    day_info_with(date, &CalendarConfig::vietnam())
}

/// Day view for a solar date under an explicit config.
pub fn day_info_with(date: SolarDate, config: &CalendarConfig) -> DayInfo {
    let lunar = amlich_calendar::solar_to_lunar(date, config);
    DayInfo {
        solar: date,
        weekday: date.weekday(),
        year_name: lunar_year_name(lunar.year),
        month_name: lunar_month_name(lunar.month, lunar.leap),
        month_can_chi: month_can_chi(lunar.month, lunar.year),
        day_can_chi: day_can_chi(lunar.jd),
        special: special_lunar_day(lunar.day, lunar.month),
        lunar,
    }
}

/// A named festival placed on the solar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FestivalDate {
    /// The festival.
    pub festival: SpecialDay,
    /// Lunar day of the festival.
    pub lunar_day: u32,
    /// Lunar month of the festival.
    pub lunar_month: u32,
    /// Solar date it falls on.
    pub date: SolarDate,
}

/// Solar dates of the named festivals of lunar `year`, in Vietnamese
/// civil time.
pub fn festival_dates(year: i32) -> Vec<FestivalDate> {
    festival_dates_with(year, &CalendarConfig::vietnam())
}

/// Solar dates of the named festivals of lunar `year` under an explicit
/// config. Festivals fall in the common month when that month number is
/// repeated by a leap month.
pub fn festival_dates_with(year: i32, config: &CalendarConfig) -> Vec<FestivalDate> {
    let table = lunar_year(year, config);
    let dates: Vec<FestivalDate> = ALL_FESTIVALS
        .into_iter()
        .filter_map(|festival| {
            let (lunar_day, lunar_month) = festival.lunar_day_month()?;
            let month = table
                .months
                .iter()
                .find(|m| m.month == lunar_month && !m.leap)?;
            Some(FestivalDate {
                festival,
                lunar_day,
                lunar_month,
                date: SolarDate::from_jd(month.start_jd + i64::from(lunar_day) - 1),
            })
        })
        .collect();
    debug!(year, count = dates.len(), "festival dates");
    dates
}
