//! Types for lunar calendar conversion results and configuration.

use std::fmt::{self, Display};

use amlich_time::SolarDate;

use crate::error::CalendarError;

/// Zone offset of Vietnamese civil time (UTC+7), in hours.
pub const VIETNAM_TIME_ZONE_HOURS: f64 = 7.0;

/// Largest accepted zone offset magnitude, in hours.
const MAX_TIME_ZONE_HOURS: f64 = 14.0;

/// Configuration shared by all calendar computations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarConfig {
    /// Offset of local civil time from UTC, in hours (default 7.0).
    /// New moon days and solar-term sectors are evaluated at local midnight.
    pub time_zone_hours: f64,
}

impl CalendarConfig {
    /// Build a config for an arbitrary zone offset.
    pub fn new(time_zone_hours: f64) -> Result<Self, CalendarError> {
        let config = Self { time_zone_hours };
        config.validate()?;
        Ok(config)
    }

    /// The Vietnamese civil calendar (UTC+7).
    pub fn vietnam() -> Self {
        Self {
            time_zone_hours: VIETNAM_TIME_ZONE_HOURS,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), CalendarError> {
        let tz = self.time_zone_hours;
        if !tz.is_finite() || tz.abs() > MAX_TIME_ZONE_HOURS {
            return Err(CalendarError::InvalidTimeZone(tz));
        }
        Ok(())
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::vietnam()
    }
}

/// A date in the Vietnamese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    /// Day of the lunar month (1-30).
    pub day: u32,
    /// Lunar month number (1-12). A leap month repeats the number of the
    /// month before it.
    pub month: u32,
    /// Lunar year. Months 11 and 12 straddle into the next solar year.
    pub year: i32,
    /// Whether `month` is the intercalary (nhuận) month.
    pub leap: bool,
    /// Julian Day Number of the matching solar day.
    pub jd: i64,
}

impl LunarDate {
    /// The solar date this lunar date falls on.
    pub fn solar(&self) -> SolarDate {
        SolarDate::from_jd(self.jd)
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.leap {
            write!(f, "{}/{} (N)/{}", self.day, self.month, self.year)
        } else {
            write!(f, "{}/{}/{}", self.day, self.month, self.year)
        }
    }
}

/// Why a lunar → solar lookup could not be matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Approximation {
    /// A leap month was requested but that month is not intercalary in
    /// the given year; the common month of the same number was used.
    LeapMonthAbsent,
    /// The requested day exceeds the month's length (day 30 of a 29-day
    /// month); the date rolls into the first day of the next month.
    DayOutOfMonth,
}

impl Display for Approximation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeapMonthAbsent => f.write_str("no such leap month in that year"),
            Self::DayOutOfMonth => f.write_str("day exceeds the length of the month"),
        }
    }
}

/// Result of a lunar → solar lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolarMatch {
    /// The lunar date exists and maps to exactly this solar date.
    Exact(SolarDate),
    /// No exact match; `date` is the nearest reasonable interpretation.
    Approximate {
        /// Best-effort solar date.
        date: SolarDate,
        /// What did not line up.
        reason: Approximation,
    },
}

impl SolarMatch {
    /// The solar date, exact or not.
    pub fn date(&self) -> SolarDate {
        match *self {
            Self::Exact(date) | Self::Approximate { date, .. } => date,
        }
    }

    /// Whether the lunar date matched exactly.
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }

    /// The exact date, if there is one.
    pub fn exact(&self) -> Option<SolarDate> {
        match *self {
            Self::Exact(date) => Some(date),
            Self::Approximate { .. } => None,
        }
    }
}

/// One month of a lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonth {
    /// Month number (1-12).
    pub month: u32,
    /// Whether this is the leap month.
    pub leap: bool,
    /// Lunar year the month belongs to.
    pub year: i32,
    /// Julian Day Number of day 1 (the local new moon day).
    pub start_jd: i64,
    /// Month length in days (29 or 30).
    pub days: u32,
}

impl LunarMonth {
    /// Solar date of day 1.
    pub fn start(&self) -> SolarDate {
        SolarDate::from_jd(self.start_jd)
    }

    /// Julian Day Number of the last day.
    pub fn end_jd(&self) -> i64 {
        self.start_jd + i64::from(self.days) - 1
    }

    /// Whether a Julian Day Number falls inside this month.
    pub fn contains(&self, jd: i64) -> bool {
        (self.start_jd..=self.end_jd()).contains(&jd)
    }
}

/// All months of one lunar year, Tết to the day before the next Tết.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarYear {
    /// The lunar year.
    pub year: i32,
    /// Months in calendar order (12, or 13 with a leap month).
    pub months: Vec<LunarMonth>,
}

impl LunarYear {
    /// Number of the leap month, if the year has one.
    pub fn leap_month(&self) -> Option<u32> {
        self.months.iter().find(|m| m.leap).map(|m| m.month)
    }

    /// Solar date of Tết (day 1 of month 1).
    pub fn tet(&self) -> Option<SolarDate> {
        self.months.first().map(LunarMonth::start)
    }

    /// Total number of days in the year.
    pub fn total_days(&self) -> u32 {
        self.months.iter().map(|m| m.days).sum()
    }

    /// The month holding a Julian Day Number.
    pub fn month_containing(&self, jd: i64) -> Option<&LunarMonth> {
        self.months.iter().find(|m| m.contains(jd))
    }
}
