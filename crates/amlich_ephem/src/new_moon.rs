//! New moon instants from the mean lunation plus periodic corrections.
//!
//! Lunation `k` counts new moons from the one of 1900-01-01 (k = 0).
//! The mean phase is corrected for the solar anomaly `M`, the lunar
//! anomaly `M'` and the Moon's argument of latitude `F`, then shifted from
//! dynamical time to UT with a polynomial ΔT.

use std::f64::consts::PI;

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588853;

/// Julian Date (UT) of the mean new moon k = 0, 1900-01-01 ~13:51.
pub const NEW_MOON_EPOCH_JD: f64 = 2_415_021.076_998_695;

/// Lunations per Julian century, used to scale `k` into centuries.
const LUNATIONS_PER_CENTURY: f64 = 1236.85;

const DEG_TO_RAD: f64 = PI / 180.0;

/// Julian Date (UT, unrounded) of new moon number `k`.
pub fn new_moon_jd(k: i64) -> f64 {
    let k = k as f64;
    let t = k / LUNATIONS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;

    let mean = 2_415_020.759_33 + 29.530_588_68 * k + 0.000_117_8 * t2 - 0.000_000_155 * t3
        + 0.000_33 * ((166.56 + 132.87 * t - 0.009_173 * t2) * DEG_TO_RAD).sin();

    // Sun's mean anomaly, Moon's mean anomaly, Moon's argument of latitude
    let m = (359.2242 + 29.105_356_08 * k - 0.000_033_3 * t2 - 0.000_003_47 * t3) * DEG_TO_RAD;
    let mpr =
        (306.0253 + 385.816_918_06 * k + 0.010_730_6 * t2 + 0.000_012_36 * t3) * DEG_TO_RAD;
    let f = (21.2964 + 390.670_506_46 * k - 0.001_652_8 * t2 - 0.000_002_39 * t3) * DEG_TO_RAD;

    let c1 = (0.1734 - 0.000_393 * t) * m.sin() + 0.0021 * (2.0 * m).sin()
        - 0.4068 * mpr.sin()
        + 0.0161 * (2.0 * mpr).sin()
        - 0.0004 * (3.0 * mpr).sin()
        + 0.0104 * (2.0 * f).sin()
        - 0.0051 * (m + mpr).sin()
        - 0.0074 * (m - mpr).sin()
        + 0.0004 * (2.0 * f + m).sin()
        - 0.0006 * (2.0 * f - m).sin()
        - 0.0006 * (2.0 * f + mpr).sin()
        + 0.0010 * (2.0 * f - mpr).sin()
        + 0.0005 * (2.0 * mpr + m).sin();

    mean + c1 - delta_t_days(t)
}

/// Local civil day number on which new moon `k` falls, for a zone
/// `time_zone_hours` east of Greenwich.
pub fn new_moon_day(k: i64, time_zone_hours: f64) -> i64 {
    (new_moon_jd(k) + 0.5 + time_zone_hours / 24.0).floor() as i64
}

/// Lunation number of the last mean new moon at or before `jd`.
///
/// This is only an estimate: the true new moon of the returned index may
/// lie a day or so either side of the mean one, so callers bracket from
/// here.
pub fn new_moon_index_near(jd: f64) -> i64 {
    ((jd - NEW_MOON_EPOCH_JD) / SYNODIC_MONTH_DAYS).floor() as i64
}

/// ΔT = TT − UT in days, `t` in Julian centuries from 1900.
fn delta_t_days(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    if t < -11.0 {
        0.001 + 0.000_839 * t + 0.000_226_1 * t2 - 0.000_008_45 * t3 - 0.000_000_081 * t * t3
    } else {
        -0.000_278 + 0.000_265 * t + 0.000_262 * t2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn epoch_lunation_is_first_of_1900() {
        assert_eq!(new_moon_day(0, 0.0), 2_415_021);
        assert_abs_diff_eq!(new_moon_jd(0), NEW_MOON_EPOCH_JD, epsilon = 0.05);
    }

    #[test]
    fn february_2024_local_day_depends_on_zone() {
        // 2024-02-09 22:59 UT: still the 9th in Greenwich, the 10th in Hanoi
        assert_abs_diff_eq!(new_moon_jd(1535), 2_460_350.458, epsilon = 0.05);
        assert_eq!(new_moon_day(1535, 0.0), 2_460_350);
        assert_eq!(new_moon_day(1535, 7.0), 2_460_351);
    }

    #[test]
    fn january_2023() {
        // 2023-01-21 20:53 UT, 2023-01-22 in UTC+7
        assert_eq!(new_moon_day(1522, 7.0), 2_459_967);
    }

    #[test]
    fn lunations_are_29_or_30_days_apart() {
        for k in 1400..1600 {
            let len = new_moon_day(k + 1, 7.0) - new_moon_day(k, 7.0);
            assert!(len == 29 || len == 30, "lunation {k} lasted {len} days");
        }
    }

    #[test]
    fn index_estimate_is_close() {
        for k in [-500_i64, 0, 1000, 1535, 2400] {
            let est = new_moon_index_near(new_moon_day(k, 7.0) as f64);
            assert!((est - k).abs() <= 1, "k={k} est={est}");
        }
    }

    #[test]
    fn delta_t_branches_meet_sensibly() {
        // ΔT is tens of seconds around 1900-2000, well under a day
        assert!(delta_t_days(0.0).abs() < 0.001);
        assert!(delta_t_days(1.0).abs() < 0.001);
        assert!(delta_t_days(-12.0) > 0.0);
    }
}
