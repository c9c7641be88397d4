//! Six-week month view.

use amlich_calendar::{CalendarConfig, CalendarError, LunarDate, solar_to_lunar};
use amlich_time::SolarDate;
use amlich_vn::{SpecialDay, special_lunar_day};

/// Cells in a month grid: six weeks of seven days.
pub const GRID_CELLS: usize = 42;

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    /// Solar date of the cell.
    pub date: SolarDate,
    /// Lunar date of the cell.
    pub lunar: LunarDate,
    /// Whether the cell lies in the requested solar month.
    pub in_month: bool,
    /// Festival or monthly observance, if any.
    pub special: Option<SpecialDay>,
}

/// Month grid for solar `year`/`month` in Vietnamese civil time.
///
/// # Errors
/// [`CalendarError::Time`] when `month` is not 1..=12.
pub fn month_grid(year: i32, month: u32) -> Result<Vec<GridDay>, CalendarError> {
    month_grid_with(year, month, &CalendarConfig::vietnam())
}

/// Month grid under an explicit config.
///
/// The grid starts on the Sunday on or before the 1st and always holds
/// [`GRID_CELLS`] days.
pub fn month_grid_with(
    year: i32,
    month: u32,
    config: &CalendarConfig,
) -> Result<Vec<GridDay>, CalendarError> {
    let first = SolarDate::new(year, month, 1)?;
    let start = first - i64::from(first.weekday().index());
    Ok((0..GRID_CELLS as i64)
        .map(|offset| {
            let date = start + offset;
            let lunar = solar_to_lunar(date, config);
            GridDay {
                date,
                lunar,
                in_month: date.year == year && date.month == month,
                special: special_lunar_day(lunar.day, lunar.month),
            }
        })
        .collect())
}
