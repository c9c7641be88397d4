//! Solar ⇄ lunar date conversion.

use amlich_ephem::{new_moon_day, new_moon_index_near};
use amlich_time::SolarDate;
use tracing::{debug, warn};

use crate::anchor::LunarCycle;
use crate::calendar_types::{Approximation, CalendarConfig, LunarDate, SolarMatch};
use crate::error::CalendarError;

/// Maximum lunations the bracket search walks from its initial estimate.
pub const MAX_BRACKET_STEPS: u32 = 8;

/// Convert a solar date to its lunar date.
pub fn solar_to_lunar(date: SolarDate, config: &CalendarConfig) -> LunarDate {
    lunar_date_for_jd(date.to_jd(), config)
}

/// Convert a Julian Day Number to its lunar date.
pub fn lunar_date_for_jd(jd: i64, config: &CalendarConfig) -> LunarDate {
    let tz = config.time_zone_hours;
    let index = month_start_index(jd, tz);
    let start = new_moon_day(index, tz);
    let label = LunarCycle::containing(start, tz).label(index);
    let lunar = LunarDate {
        day: (jd - start + 1) as u32,
        month: label.month,
        year: label.year,
        leap: label.leap,
        jd,
    };
    debug!(jd, %lunar, "solar to lunar");
    lunar
}

/// Index of the lunation whose local new moon day is the latest one on or
/// before `jd`.
fn month_start_index(jd: i64, tz: f64) -> i64 {
    let mut index = new_moon_index_near(jd as f64);
    for _ in 0..MAX_BRACKET_STEPS {
        if new_moon_day(index, tz) > jd {
            index -= 1;
        } else if new_moon_day(index + 1, tz) <= jd {
            index += 1;
        } else {
            return index;
        }
    }
    warn!(jd, index, "new moon bracket search hit its step limit");
    index
}

/// Convert a lunar date to a solar date.
///
/// Lunar `month`s 11 and 12 of `year` fall in the cycle opened by month 11
/// of solar `year`; months 1-10 fall in the cycle opened a year earlier.
/// A leap request for a month that is not intercalary that year resolves
/// to the common month, and day 30 of a 29-day month rolls over to the
/// next day; both come back as [`SolarMatch::Approximate`].
///
/// # Errors
/// [`CalendarError::InvalidLunarMonth`] for `month` outside 1..=12 and
/// [`CalendarError::InvalidLunarDay`] for `day` outside 1..=30.
pub fn lunar_to_solar(
    day: u32,
    month: u32,
    year: i32,
    leap: bool,
    config: &CalendarConfig,
) -> Result<SolarMatch, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidLunarMonth(month));
    }
    if !(1..=30).contains(&day) {
        return Err(CalendarError::InvalidLunarDay(day));
    }
    let tz = config.time_zone_hours;
    let cycle_year = if month >= 11 { year } else { year - 1 };
    let cycle = LunarCycle::for_solar_year(cycle_year, tz);
    let (index, mut approx) = cycle.index_of(month, leap);

    let start = new_moon_day(index, tz);
    let length = new_moon_day(index + 1, tz) - start;
    if i64::from(day) > length {
        approx = approx.or(Some(Approximation::DayOutOfMonth));
    }
    let date = SolarDate::from_jd(start + i64::from(day) - 1);

    Ok(match approx {
        None => {
            debug!(day, month, year, leap, %date, "lunar to solar");
            SolarMatch::Exact(date)
        }
        Some(reason) => {
            warn!(day, month, year, leap, %date, %reason, "approximate lunar to solar match");
            SolarMatch::Approximate { date, reason }
        }
    })
}
