//! Validated civil date.
//!
//! Provides `SolarDate`, the day/month/year triple handed to and returned
//! from the lunar conversions. Arithmetic goes through the Julian Day Number.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{date_to_julian_day, julian_day_to_date};

/// A civil calendar date (Gregorian from 1582-10-15, Julian before).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// 0-based index (Sunday=0 .. Saturday=6).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Vietnamese short label as printed on wall calendars (CN, T2 .. T7).
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Sunday => "CN",
            Self::Monday => "T2",
            Self::Tuesday => "T3",
            Self::Wednesday => "T4",
            Self::Thursday => "T5",
            Self::Friday => "T6",
            Self::Saturday => "T7",
        }
    }

    fn from_index(i: u8) -> Self {
        match i % 7 {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }
}

impl SolarDate {
    /// Build a date, rejecting day/month combinations that do not exist in
    /// that year (including 1582-10-05 ..= 1582-10-14).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let invalid = TimeError::InvalidDate { year, month, day };
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(invalid);
        }
        let date = Self { year, month, day };
        if Self::from_jd(date.to_jd()) != date {
            return Err(invalid);
        }
        Ok(date)
    }

    /// Date of a Julian Day Number.
    pub fn from_jd(jd: i64) -> Self {
        let (day, month, year) = julian_day_to_date(jd);
        Self { year, month, day }
    }

    /// Julian Day Number of this date.
    pub fn to_jd(self) -> i64 {
        date_to_julian_day(self.day, self.month, self.year)
    }

    /// Day of the week.
    pub fn weekday(self) -> Weekday {
        // JD 0 was a Monday
        Weekday::from_index(((self.to_jd() + 1).rem_euclid(7)) as u8)
    }
}

impl Add<i64> for SolarDate {
    type Output = SolarDate;

    fn add(self, days: i64) -> SolarDate {
        SolarDate::from_jd(self.to_jd() + days)
    }
}

impl Sub<i64> for SolarDate {
    type Output = SolarDate;

    fn sub(self, days: i64) -> SolarDate {
        SolarDate::from_jd(self.to_jd() - days)
    }
}

impl Sub<SolarDate> for SolarDate {
    type Output = i64;

    fn sub(self, rhs: SolarDate) -> i64 {
        self.to_jd() - rhs.to_jd()
    }
}

impl Display for SolarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for SolarDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD` (a leading `-` marks astronomical negative years).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeError::Parse(format!("expected YYYY-MM-DD, got {s:?}"));
        let (sign, body) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s),
        };
        let mut parts = body.splitn(3, '-');
        let year: i32 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(malformed)?;
        let month: u32 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(malformed)?;
        let day: u32 = parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(malformed)?;
        Self::new(sign * year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_leap_day() {
        let d = SolarDate::new(2024, 2, 29).unwrap();
        assert_eq!(d.to_jd(), 2_460_370);
    }

    #[test]
    fn new_rejects_missing_days() {
        assert!(SolarDate::new(2023, 2, 29).is_err());
        assert!(SolarDate::new(2023, 4, 31).is_err());
        assert!(SolarDate::new(2023, 13, 1).is_err());
        assert!(SolarDate::new(2023, 1, 0).is_err());
        assert!(SolarDate::new(1582, 10, 10).is_err());
    }

    #[test]
    fn weekday_known() {
        // 2024-02-10 was a Saturday, 2000-01-01 too
        assert_eq!(SolarDate::new(2024, 2, 10).unwrap().weekday(), Weekday::Saturday);
        assert_eq!(SolarDate::new(2000, 1, 1).unwrap().weekday(), Weekday::Saturday);
        assert_eq!(SolarDate::new(2024, 2, 11).unwrap().weekday(), Weekday::Sunday);
    }

    #[test]
    fn arithmetic() {
        let d = SolarDate::new(2023, 12, 31).unwrap();
        assert_eq!(d + 1, SolarDate::new(2024, 1, 1).unwrap());
        assert_eq!(d - 365, SolarDate::new(2022, 12, 31).unwrap());
        assert_eq!(SolarDate::new(2024, 3, 1).unwrap() - d, 61);
    }

    #[test]
    fn display_and_parse() {
        let d: SolarDate = "2024-02-10".parse().unwrap();
        assert_eq!(d, SolarDate::new(2024, 2, 10).unwrap());
        assert_eq!(d.to_string(), "2024-02-10");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!("2024/02/10".parse::<SolarDate>(), Err(TimeError::Parse(_))));
        assert!(matches!("2024-02".parse::<SolarDate>(), Err(TimeError::Parse(_))));
        assert!(matches!(
            "2024-02-30".parse::<SolarDate>(),
            Err(TimeError::InvalidDate { .. })
        ));
    }

    #[test]
    fn weekday_labels() {
        assert_eq!(Weekday::Sunday.short_label(), "CN");
        assert_eq!(Weekday::Saturday.short_label(), "T7");
        assert_eq!(Weekday::Wednesday.index(), 3);
    }
}
