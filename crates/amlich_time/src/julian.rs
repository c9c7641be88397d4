//! Civil date ↔ Julian Day Number.
//!
//! Fliegel–Van Flandern integer formulas. Dates whose Gregorian day number
//! would fall before [`GREGORIAN_CUTOVER_JD`] are read in the Julian
//! calendar instead, so 1582-10-04 (Julian) is followed by 1582-10-15
//! (Gregorian).
//!
//! All divisions are floor divisions, which keeps the formulas valid for
//! day numbers down to 0 (4713 BC January 1, Julian).

/// First Julian Day Number of the Gregorian calendar (1582-10-15).
pub const GREGORIAN_CUTOVER_JD: i64 = 2_299_161;

/// Julian Day Number of a civil date.
///
/// No validation: out-of-range day or month values still produce a
/// deterministic day number (e.g. day 32 of January lands on February 1).
pub fn date_to_julian_day(day: u32, month: u32, year: i32) -> i64 {
    let (dd, mm, yy) = (i64::from(day), i64::from(month), i64::from(year));
    let a = (14 - mm).div_euclid(12);
    let y = yy + 4800 - a;
    let m = mm + 12 * a - 3;
    let base = dd + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4);
    let jd = base - y.div_euclid(100) + y.div_euclid(400) - 32045;
    if jd < GREGORIAN_CUTOVER_JD {
        base - 32083
    } else {
        jd
    }
}

/// Civil date `(day, month, year)` of a Julian Day Number.
///
/// Exact inverse of [`date_to_julian_day`] for every valid date.
pub fn julian_day_to_date(jd: i64) -> (u32, u32, i32) {
    let (b, c) = if jd >= GREGORIAN_CUTOVER_JD {
        let a = jd + 32044;
        let b = (4 * a + 3).div_euclid(146_097);
        (b, a - (b * 146_097).div_euclid(4))
    } else {
        (0, jd + 32082)
    };
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = b * 100 + d - 4800 + m.div_euclid(10);
    (day as u32, month as u32, year as i32)
}

/// Whether `year` has a February 29th.
///
/// Gregorian rule from 1583 on, Julian rule before (1582 is common in both).
pub fn is_leap_year(year: i32) -> bool {
    if year > 1582 {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year.rem_euclid(4) == 0
    }
}

/// Number of days in `month` of `year`, or 0 if `month` is not in 1..=12.
///
/// October 1582 reports 31 even though ten of its days never existed;
/// use [`SolarDate::new`](crate::SolarDate::new) to reject those.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon_day() {
        assert_eq!(date_to_julian_day(1, 1, 2000), 2_451_545);
    }

    #[test]
    fn unix_epoch() {
        assert_eq!(date_to_julian_day(1, 1, 1970), 2_440_588);
        assert_eq!(julian_day_to_date(2_440_588), (1, 1, 1970));
    }

    #[test]
    fn cutover_is_contiguous() {
        assert_eq!(date_to_julian_day(15, 10, 1582), GREGORIAN_CUTOVER_JD);
        assert_eq!(date_to_julian_day(4, 10, 1582), GREGORIAN_CUTOVER_JD - 1);
        assert_eq!(julian_day_to_date(GREGORIAN_CUTOVER_JD), (15, 10, 1582));
        assert_eq!(julian_day_to_date(GREGORIAN_CUTOVER_JD - 1), (4, 10, 1582));
    }

    #[test]
    fn day_zero_is_4713_bc() {
        assert_eq!(julian_day_to_date(0), (1, 1, -4712));
        assert_eq!(date_to_julian_day(1, 1, -4712), 0);
    }

    #[test]
    fn julian_calendar_before_cutover() {
        // Julian 0001-01-01 is two days before proleptic Gregorian 0001-01-01
        assert_eq!(date_to_julian_day(1, 1, 1), 1_721_424);
    }

    #[test]
    fn invalid_day_overflows() {
        assert_eq!(date_to_julian_day(32, 1, 2024), date_to_julian_day(1, 2, 2024));
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1500));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 13), 0);
    }
}
