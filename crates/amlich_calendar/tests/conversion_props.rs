//! Property sweeps over solar → lunar and lunar → solar conversion.

use amlich_calendar::{CalendarConfig, SolarMatch, lunar_date_for_jd, lunar_to_solar, lunar_year};
use amlich_time::{SolarDate, date_to_julian_day};

fn vn() -> CalendarConfig {
    CalendarConfig::vietnam()
}

fn sweep() -> std::ops::RangeInclusive<i64> {
    date_to_julian_day(1, 1, 2020)..=date_to_julian_day(31, 12, 2030)
}

#[test]
fn fields_stay_in_range() {
    for jd in sweep() {
        let l = lunar_date_for_jd(jd, &vn());
        assert!((1..=30).contains(&l.day), "jd {jd}: {l}");
        assert!((1..=12).contains(&l.month), "jd {jd}: {l}");
        assert_eq!(l.jd, jd);
    }
}

#[test]
fn consecutive_days_advance_by_one() {
    let mut prev = lunar_date_for_jd(*sweep().start(), &vn());
    for jd in sweep().skip(1) {
        let l = lunar_date_for_jd(jd, &vn());
        if l.day == 1 {
            assert!(prev.day == 29 || prev.day == 30, "jd {jd}: {prev} -> {l}");
            let same_number_leap = l.leap && l.month == prev.month && l.year == prev.year;
            let next_month = !l.leap
                && (l.month == prev.month % 12 + 1)
                && (l.year == prev.year || (l.month == 1 && l.year == prev.year + 1));
            assert!(same_number_leap || next_month, "jd {jd}: {prev} -> {l}");
        } else {
            assert_eq!(l.day, prev.day + 1, "jd {jd}");
            assert_eq!((l.month, l.year, l.leap), (prev.month, prev.year, prev.leap));
        }
        prev = l;
    }
}

#[test]
fn solar_lunar_solar_is_exact() {
    for jd in sweep() {
        let l = lunar_date_for_jd(jd, &vn());
        let back = lunar_to_solar(l.day, l.month, l.year, l.leap, &vn()).unwrap();
        assert_eq!(back, SolarMatch::Exact(SolarDate::from_jd(jd)), "{l}");
    }
}

#[test]
fn year_tables_agree_with_daily_conversion() {
    for year in 2020..=2030 {
        let table = lunar_year(year, &vn());
        for m in &table.months {
            for jd in m.start_jd..=m.end_jd() {
                let l = lunar_date_for_jd(jd, &vn());
                assert_eq!((l.month, l.leap, l.year), (m.month, m.leap, m.year));
                assert_eq!(i64::from(l.day), jd - m.start_jd + 1);
            }
        }
    }
}

#[test]
fn at_most_one_leap_month_per_year() {
    for year in 1900..2100 {
        let table = lunar_year(year, &vn());
        let leaps = table.months.iter().filter(|m| m.leap).count();
        assert!(leaps <= 1, "year {year}");
        assert_eq!(table.months.len(), 12 + leaps, "year {year}");
    }
}

#[test]
fn other_zones_round_trip() {
    for tz in [0.0, 8.0, -5.0] {
        let config = CalendarConfig::new(tz).unwrap();
        for jd in (date_to_julian_day(1, 1, 2024)..date_to_julian_day(1, 1, 2025)).step_by(3) {
            let l = lunar_date_for_jd(jd, &config);
            let back = lunar_to_solar(l.day, l.month, l.year, l.leap, &config).unwrap();
            assert_eq!(back.exact(), Some(SolarDate::from_jd(jd)), "tz {tz}: {l}");
        }
    }
}
