//! Can Chi (stem-branch) sexagenary naming.
//!
//! A stem-branch pair cycles every 60 steps. Years, months and days each
//! advance one step at a time from their own reference points.

use std::fmt::{self, Display, Formatter};

/// The 10 heavenly stems (Thiên Can).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Can {
    Giap,
    At,
    Binh,
    Dinh,
    Mau,
    Ky,
    Canh,
    Tan,
    Nham,
    Quy,
}

/// The 12 earthly branches (Địa Chi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Chi {
    Ty,
    Suu,
    Dan,
    Mao,
    Thin,
    Ti,
    Ngo,
    Mui,
    Than,
    Dau,
    Tuat,
    Hoi,
}

/// All 10 stems in order (index 0 = Giáp).
pub const ALL_CAN: [Can; 10] = [
    Can::Giap,
    Can::At,
    Can::Binh,
    Can::Dinh,
    Can::Mau,
    Can::Ky,
    Can::Canh,
    Can::Tan,
    Can::Nham,
    Can::Quy,
];

/// All 12 branches in order (index 0 = Tý).
pub const ALL_CHI: [Chi; 12] = [
    Chi::Ty,
    Chi::Suu,
    Chi::Dan,
    Chi::Mao,
    Chi::Thin,
    Chi::Ti,
    Chi::Ngo,
    Chi::Mui,
    Chi::Than,
    Chi::Dau,
    Chi::Tuat,
    Chi::Hoi,
];

const CAN_NAMES: [&str; 10] = [
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];

const CHI_NAMES: [&str; 12] = [
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];

impl Can {
    /// Vietnamese name.
    pub fn name(self) -> &'static str {
        CAN_NAMES[self.index() as usize]
    }

    /// 0-based index (Giáp=0 .. Quý=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at position `n` of the cycle, wrapping in both directions.
    pub fn from_cycle(n: i64) -> Self {
        ALL_CAN[n.rem_euclid(10) as usize]
    }
}

impl Chi {
    /// Vietnamese name.
    pub fn name(self) -> &'static str {
        CHI_NAMES[self.index() as usize]
    }

    /// 0-based index (Tý=0 .. Hợi=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at position `n` of the cycle, wrapping in both directions.
    pub fn from_cycle(n: i64) -> Self {
        ALL_CHI[n.rem_euclid(12) as usize]
    }
}

/// A stem-branch pair such as Giáp Thìn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanChi {
    pub can: Can,
    pub chi: Chi,
}

impl CanChi {
    /// 1-based position in the 60-term cycle (Giáp Tý = 1 .. Quý Hợi = 60).
    pub fn order(self) -> u8 {
        let (c, b) = (i32::from(self.can.index()), i32::from(self.chi.index()));
        // n ≡ c (mod 10), n ≡ b (mod 12); only pairs of equal parity exist
        let n = (6 * c - 5 * b).rem_euclid(60);
        n as u8 + 1
    }
}

impl Display for CanChi {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.can.name(), self.chi.name())
    }
}

/// Stem-branch of a lunar year.
pub fn year_can_chi(year: i32) -> CanChi {
    let y = i64::from(year);
    CanChi {
        can: Can::from_cycle(y + 6),
        chi: Chi::from_cycle(y + 8),
    }
}

/// Name of a lunar year, e.g. `"Giáp Thìn"` for 2024.
pub fn lunar_year_name(year: i32) -> String {
    year_can_chi(year).to_string()
}

/// Stem-branch of lunar month `month` (1..=12) in lunar year `year`.
///
/// Month 1 is always a Dần month; a leap month shares the stem-branch of
/// the month it repeats.
pub fn month_can_chi(month: u32, year: i32) -> CanChi {
    let (m, y) = (i64::from(month), i64::from(year));
    CanChi {
        can: Can::from_cycle(y * 12 + m + 3),
        chi: Chi::from_cycle(m + 1),
    }
}

/// Stem-branch of the civil day with Julian Day Number `jd`.
pub fn day_can_chi(jd: i64) -> CanChi {
    CanChi {
        can: Can::from_cycle(jd + 9),
        chi: Chi::from_cycle(jd + 1),
    }
}
