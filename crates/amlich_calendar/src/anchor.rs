//! Month-11 anchors and leap month detection.
//!
//! Every lunar cycle runs from the new moon that opens month 11 (the month
//! holding the December solstice) of one solar year to the same new moon
//! of the next. A cycle holding 13 lunations carries one leap month: the
//! first month in which the Sun's 30° sector does not change.

use amlich_ephem::{NEW_MOON_EPOCH_JD, SYNODIC_MONTH_DAYS, new_moon_day, sun_longitude_sector};
use amlich_time::{SolarDate, date_to_julian_day};
use tracing::trace;

use crate::calendar_types::Approximation;

/// Sector holding the December solstice (270°-300°).
const SOLSTICE_SECTOR: u8 = 9;

/// Upper bound on the leap month scan, in lunations after month 11.
pub const LEAP_SCAN_LIMIT: u32 = 14;

/// The month-11 new moon of a solar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearAnchor {
    /// Solar year whose December solstice the month holds.
    pub solar_year: i32,
    /// New moon index (lunations since 1900-01-01).
    pub index: i64,
    /// Julian Day Number of the local new moon day.
    pub jd: i64,
}

/// Resolve the month-11 anchor of a solar year.
///
/// Starts from the last new moon on or before December 31 and steps back
/// one lunation when that new moon already lies past the solstice.
pub fn year_anchor(solar_year: i32, time_zone_hours: f64) -> YearAnchor {
    let off = date_to_julian_day(31, 12, solar_year) as f64 - NEW_MOON_EPOCH_JD.floor();
    let mut index = (off / SYNODIC_MONTH_DAYS).floor() as i64;
    let mut jd = new_moon_day(index, time_zone_hours);
    if sun_longitude_sector(jd, time_zone_hours) >= SOLSTICE_SECTOR {
        index -= 1;
        jd = new_moon_day(index, time_zone_hours);
    }
    trace!(solar_year, index, jd, "month-11 anchor");
    YearAnchor {
        solar_year,
        index,
        jd,
    }
}

/// Julian Day Number of the month-11 new moon of a solar year.
pub fn lunar_month11(solar_year: i32, time_zone_hours: f64) -> i64 {
    year_anchor(solar_year, time_zone_hours).jd
}

/// Offset (in lunations after month 11) of the first month whose
/// solar-term sector equals the next month's.
///
/// `month11_jd` is the Julian Day Number returned by [`lunar_month11`].
/// Returns [`LEAP_SCAN_LIMIT`]` - 1` when no repeat is found. The offset is
/// only meaningful for cycles of 13 lunations; see [`LunarCycle`].
pub fn leap_month_offset(month11_jd: i64, time_zone_hours: f64) -> u32 {
    let index = ((month11_jd as f64 - NEW_MOON_EPOCH_JD) / SYNODIC_MONTH_DAYS + 0.5).floor() as i64;
    leap_offset_after(index, time_zone_hours)
}

fn leap_offset_after(index: i64, time_zone_hours: f64) -> u32 {
    let sector = |i: u32| {
        let jd = new_moon_day(index + i64::from(i), time_zone_hours);
        sun_longitude_sector(jd, time_zone_hours)
    };
    let mut last = sector(1);
    for i in 2..=LEAP_SCAN_LIMIT {
        let arc = sector(i);
        if arc == last {
            return i - 1;
        }
        last = arc;
    }
    LEAP_SCAN_LIMIT - 1
}

// ---------------------------------------------------------------------------
// Cycles
// ---------------------------------------------------------------------------

/// Label of one lunation within a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MonthLabel {
    pub month: u32,
    pub leap: bool,
    pub year: i32,
}

/// The lunations between two consecutive month-11 anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarCycle {
    /// Month 11 opening the cycle.
    pub start: YearAnchor,
    /// Month 11 of the following solar year (exclusive end).
    pub end: YearAnchor,
    leap_offset: Option<u32>,
}

impl LunarCycle {
    /// Cycle opened by month 11 of `solar_year`.
    pub fn for_solar_year(solar_year: i32, time_zone_hours: f64) -> Self {
        let start = year_anchor(solar_year, time_zone_hours);
        let end = year_anchor(solar_year + 1, time_zone_hours);
        Self::from_anchors(start, end, time_zone_hours)
    }

    /// Cycle holding the lunation whose local new moon day is `jd`.
    pub fn containing(jd: i64, time_zone_hours: f64) -> Self {
        let year = SolarDate::from_jd(jd).year;
        let anchor = year_anchor(year, time_zone_hours);
        if anchor.jd > jd {
            let prev = year_anchor(year - 1, time_zone_hours);
            Self::from_anchors(prev, anchor, time_zone_hours)
        } else {
            let next = year_anchor(year + 1, time_zone_hours);
            Self::from_anchors(anchor, next, time_zone_hours)
        }
    }

    fn from_anchors(start: YearAnchor, end: YearAnchor, time_zone_hours: f64) -> Self {
        let leap_offset = (end.index - start.index == 13)
            .then(|| leap_offset_after(start.index, time_zone_hours));
        trace!(
            solar_year = start.solar_year,
            lunations = end.index - start.index,
            ?leap_offset,
            "lunar cycle"
        );
        Self {
            start,
            end,
            leap_offset,
        }
    }

    /// Number of lunations in the cycle (12 or 13).
    pub fn month_count(&self) -> i64 {
        self.end.index - self.start.index
    }

    /// Offset of the leap month after month 11, for 13-lunation cycles.
    pub fn leap_offset(&self) -> Option<u32> {
        self.leap_offset
    }

    /// Number of the leap month, for 13-lunation cycles.
    pub fn leap_month(&self) -> Option<u32> {
        self.leap_offset.map(|r| month_number(r - 1))
    }

    /// Whether a new moon index lies in this cycle.
    pub fn contains_index(&self, index: i64) -> bool {
        (self.start.index..self.end.index).contains(&index)
    }

    /// Label a new moon index inside this cycle.
    pub(crate) fn label(&self, index: i64) -> MonthLabel {
        let diff = (index - self.start.index) as u32;
        let (slot, leap) = match self.leap_offset {
            Some(r) if diff >= r => (diff - 1, diff == r),
            _ => (diff, false),
        };
        let year = if slot < 2 {
            self.start.solar_year
        } else {
            self.start.solar_year + 1
        };
        MonthLabel {
            month: month_number(slot),
            leap,
            year,
        }
    }

    /// New moon index of a month in this cycle.
    ///
    /// `month` must be 1..=12. A `leap` request the cycle cannot honor
    /// falls back to the common month and reports
    /// [`Approximation::LeapMonthAbsent`].
    pub(crate) fn index_of(&self, month: u32, leap: bool) -> (i64, Option<Approximation>) {
        let slot = if month >= 11 { month - 11 } else { month + 1 };
        let (diff, approx) = match self.leap_offset {
            Some(r) if leap && month == month_number(r - 1) => (r, None),
            Some(r) => (
                if slot >= r { slot + 1 } else { slot },
                leap.then_some(Approximation::LeapMonthAbsent),
            ),
            None => (slot, leap.then_some(Approximation::LeapMonthAbsent)),
        };
        (self.start.index + i64::from(diff), approx)
    }
}

/// Month number of the `slot`-th common month after month 11.
fn month_number(slot: u32) -> u32 {
    match slot {
        0 => 11,
        1 => 12,
        n => n - 1,
    }
}
