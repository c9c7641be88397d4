//! Convenience wrapper for the amlich Vietnamese lunar calendar.
//!
//! Provides functions fixed to Vietnamese civil time (UTC+7), with `_with`
//! variants taking an explicit [`CalendarConfig`], plus combined lookups
//! for day views, month grids and festival listings.
//!
//! # Quick start
//!
//! ```rust
//! use amlich_rs::*;
//!
//! let date: SolarDate = "2024-02-10".parse().unwrap();
//! let lunar = solar_to_lunar(date);
//! assert_eq!(lunar.to_string(), "1/1/2024");
//!
//! let info = day_info(date);
//! assert_eq!(info.year_name, "Giáp Thìn");
//! ```

pub mod convenience;
pub mod day_info;
pub mod month_grid;

// Primary re-exports: users should only need `use amlich_rs::*`
pub use convenience::{
    leap_month, leap_month_with, lunar_to_solar, lunar_to_solar_with, lunar_year, lunar_year_with,
    solar_to_lunar, solar_to_lunar_with, tet, tet_with,
};
pub use day_info::{DayInfo, FestivalDate, day_info, day_info_with, festival_dates, festival_dates_with};
pub use month_grid::{GRID_CELLS, GridDay, month_grid, month_grid_with};

pub use amlich_calendar::{
    Approximation, CalendarConfig, CalendarError, LunarDate, LunarMonth, LunarYear, SolarMatch,
    VIETNAM_TIME_ZONE_HOURS,
};
pub use amlich_time::{SolarDate, TimeError, Weekday};
pub use amlich_vn::{
    Can, CanChi, Chi, SpecialDay, lunar_month_name, lunar_year_name, special_lunar_day,
    year_can_chi,
};
