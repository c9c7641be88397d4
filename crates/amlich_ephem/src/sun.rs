//! Sun's ecliptic longitude at local midnight.
//!
//! Mean longitude plus the equation of centre, no nutation or aberration.
//! The 30° sector number identifies the last major solar term passed:
//! sector 0 begins at the March equinox, sector 9 at the December solstice.

use std::f64::consts::PI;

/// Number of 30° longitude sectors.
pub const SECTOR_COUNT: u8 = 12;

const DEG_TO_RAD: f64 = PI / 180.0;

/// Sun's longitude in degrees [0, 360) at the start of local day `jdn`,
/// for a zone `time_zone_hours` east of Greenwich.
pub fn sun_longitude_deg(jdn: i64, time_zone_hours: f64) -> f64 {
    // Julian centuries from J2000.0, evaluated at local 00:00
    let t = (jdn as f64 - 2_451_545.5 - time_zone_hours / 24.0) / 36_525.0;
    let t2 = t * t;
    let m = (357.529_10 + 35_999.050_30 * t - 0.000_155_9 * t2 - 0.000_000_48 * t * t2)
        * DEG_TO_RAD;
    let l0 = 280.466_45 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let dl = (1.914_6 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_29 * (3.0 * m).sin();
    let l = (l0 + dl) * DEG_TO_RAD;
    let l = l - 2.0 * PI * (l / (2.0 * PI)).floor();
    l / DEG_TO_RAD
}

/// Which 30° sector (0..=11) the Sun occupies at the start of local day
/// `jdn`.
pub fn sun_longitude_sector(jdn: i64, time_zone_hours: f64) -> u8 {
    let l = sun_longitude_deg(jdn, time_zone_hours) * DEG_TO_RAD;
    // guards against l landing on exactly 2π after the float round trip
    ((l / PI * 6.0).floor() as u8).min(SECTOR_COUNT - 1)
}
