//! Truncated-series solar and lunar ephemeris for calendar work.
//!
//! This crate provides:
//! - Julian Date of the k-th mean-lunation new moon, corrected by the
//!   principal periodic terms (accurate to within about an hour)
//! - The Sun's ecliptic longitude and its 30° sector (the most recent
//!   major solar term) at local midnight of a given day
//!
//! Both routines work in Universal Time with a fixed zone offset in hours,
//! and are deterministic pure functions. Coefficients follow Meeus,
//! *Astronomical Algorithms*, in the low-precision form used by Vietnamese
//! and Chinese calendar tables.

pub mod new_moon;
pub mod sun;

pub use new_moon::{
    NEW_MOON_EPOCH_JD, SYNODIC_MONTH_DAYS, new_moon_day, new_moon_index_near, new_moon_jd,
};
pub use sun::{SECTOR_COUNT, sun_longitude_deg, sun_longitude_sector};
