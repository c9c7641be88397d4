//! Vietnamese naming and classification over lunar dates.
//!
//! This crate provides:
//! - Can (10 heavenly stems) and Chi (12 earthly branches), and the
//!   stem-branch names of lunar years, months and days
//! - Traditional lunar month names ("Giêng" .. "Chạp", "Nhuận" for leap)
//! - Festival and observance classification of a lunar (day, month)
//!
//! Everything here is a pure table lookup; nothing depends on how the
//! lunar date was computed.

pub mod can_chi;
pub mod month_name;
pub mod special_day;

pub use can_chi::{
    ALL_CAN, ALL_CHI, Can, CanChi, Chi, day_can_chi, lunar_year_name, month_can_chi,
    year_can_chi,
};
pub use month_name::{LEAP_PREFIX, lunar_month_name};
pub use special_day::{ALL_FESTIVALS, SpecialDay, special_lunar_day};
