//! Whole-year lunar tables: months, leap month and Tết.

use amlich_ephem::new_moon_day;
use amlich_time::SolarDate;
use tracing::debug;

use crate::anchor::LunarCycle;
use crate::calendar_types::{CalendarConfig, LunarMonth, LunarYear};

/// All months of lunar `year`, from Tết up to the next Tết.
///
/// The table spans two cycles: months 1-10 come from the cycle opened by
/// month 11 of solar `year - 1`, months 11-12 from the cycle opened in
/// solar `year`.
pub fn lunar_year(year: i32, config: &CalendarConfig) -> LunarYear {
    let tz = config.time_zone_hours;
    let first = LunarCycle::for_solar_year(year - 1, tz);
    let second = LunarCycle::for_solar_year(year, tz);
    let begin = first.index_of(1, false).0;
    let end = second.index_of(1, false).0;

    let months: Vec<LunarMonth> = (begin..end)
        .map(|index| {
            let cycle = if second.contains_index(index) {
                &second
            } else {
                &first
            };
            let label = cycle.label(index);
            let start_jd = new_moon_day(index, tz);
            LunarMonth {
                month: label.month,
                leap: label.leap,
                year: label.year,
                start_jd,
                days: (new_moon_day(index + 1, tz) - start_jd) as u32,
            }
        })
        .collect();
    debug!(year, months = months.len(), "lunar year table");
    LunarYear { year, months }
}

/// Number of the leap month in lunar `year`, if any.
pub fn leap_month(year: i32, config: &CalendarConfig) -> Option<u32> {
    lunar_year(year, config).leap_month()
}

/// Solar date of Tết Nguyên Đán (1/1) of lunar `year`.
pub fn tet(year: i32, config: &CalendarConfig) -> SolarDate {
    let tz = config.time_zone_hours;
    let (index, _) = LunarCycle::for_solar_year(year - 1, tz).index_of(1, false);
    SolarDate::from_jd(new_moon_day(index, tz))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vn() -> CalendarConfig {
        CalendarConfig::vietnam()
    }

    #[test]
    fn year_2023_has_13_months() {
        let y = lunar_year(2023, &vn());
        assert_eq!(y.months.len(), 13);
        assert_eq!(y.leap_month(), Some(2));
        assert!(y.months.iter().all(|m| m.year == 2023));
    }

    #[test]
    fn year_2024_has_12_months() {
        let y = lunar_year(2024, &vn());
        assert_eq!(y.months.len(), 12);
        assert_eq!(y.leap_month(), None);
        let numbers: Vec<u32> = y.months.iter().map(|m| m.month).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn months_are_contiguous() {
        let y = lunar_year(2025, &vn());
        for pair in y.months.windows(2) {
            assert_eq!(pair[0].end_jd() + 1, pair[1].start_jd);
        }
        assert!(y.months.iter().all(|m| m.days == 29 || m.days == 30));
    }

    #[test]
    fn tet_dates() {
        assert_eq!(tet(2024, &vn()), SolarDate::new(2024, 2, 10).unwrap());
        assert_eq!(tet(2023, &vn()), SolarDate::new(2023, 1, 22).unwrap());
        assert_eq!(tet(2025, &vn()), SolarDate::new(2025, 1, 29).unwrap());
    }

    #[test]
    fn tet_matches_table() {
        for year in 2000..2040 {
            assert_eq!(lunar_year(year, &vn()).tet(), Some(tet(year, &vn())), "year {year}");
        }
    }

    #[test]
    fn leap_month_known_years() {
        assert_eq!(leap_month(2020, &vn()), Some(4));
        assert_eq!(leap_month(2023, &vn()), Some(2));
        assert_eq!(leap_month(2025, &vn()), Some(6));
        assert_eq!(leap_month(2024, &vn()), None);
    }
}
