//! Festivals and monthly observances of the lunar calendar.
//!
//! Named festivals are matched first in table order; any remaining first
//! or fifteenth day of a month is the generic Mồng Một or Rằm observance.
//! Classification looks at (day, month) only, so a leap month's first and
//! fifteenth days count too.

/// A culturally significant lunar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialDay {
    /// Lunar New Year, 1/1.
    TetNguyenDan,
    /// First full moon of the year, 15/1.
    RamThangGieng,
    /// Hùng Kings' commemoration, 10/3.
    GioToHungVuong,
    /// Buddha's birthday, 15/4.
    PhatDan,
    /// Double Fifth festival, 5/5.
    TetDoanNgo,
    /// Ghost festival, 15/7.
    VuLan,
    /// Mid-Autumn festival, 15/8.
    TetTrungThu,
    /// Kitchen Gods' send-off, 23/12.
    TienOngTao,
    /// Any other first day of a month.
    MongMot,
    /// Any other full-moon (15th) day.
    Ram,
}

/// The named festivals in matching order.
pub const ALL_FESTIVALS: [SpecialDay; 8] = [
    SpecialDay::TetNguyenDan,
    SpecialDay::RamThangGieng,
    SpecialDay::GioToHungVuong,
    SpecialDay::PhatDan,
    SpecialDay::TetDoanNgo,
    SpecialDay::VuLan,
    SpecialDay::TetTrungThu,
    SpecialDay::TienOngTao,
];

impl SpecialDay {
    /// Vietnamese display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::TetNguyenDan => "Tết Nguyên Đán",
            Self::RamThangGieng => "Rằm Tháng Giêng",
            Self::GioToHungVuong => "Giỗ Tổ Hùng Vương",
            Self::PhatDan => "Lễ Phật Đản",
            Self::TetDoanNgo => "Tết Đoan Ngọ",
            Self::VuLan => "Lễ Vu Lan",
            Self::TetTrungThu => "Tết Trung Thu",
            Self::TienOngTao => "Tiễn Ông Táo",
            Self::MongMot => "Mồng Một",
            Self::Ram => "Rằm",
        }
    }

    /// Fixed lunar `(day, month)` of a named festival; `None` for the
    /// generic monthly observances.
    pub const fn lunar_day_month(self) -> Option<(u32, u32)> {
        match self {
            Self::TetNguyenDan => Some((1, 1)),
            Self::RamThangGieng => Some((15, 1)),
            Self::GioToHungVuong => Some((10, 3)),
            Self::PhatDan => Some((15, 4)),
            Self::TetDoanNgo => Some((5, 5)),
            Self::VuLan => Some((15, 7)),
            Self::TetTrungThu => Some((15, 8)),
            Self::TienOngTao => Some((23, 12)),
            Self::MongMot | Self::Ram => None,
        }
    }

    /// Whether this is one of the eight named festivals.
    pub const fn is_festival(self) -> bool {
        self.lunar_day_month().is_some()
    }
}

/// Classify lunar `(day, month)`. `None` means an ordinary day.
pub fn special_lunar_day(day: u32, month: u32) -> Option<SpecialDay> {
    ALL_FESTIVALS
        .into_iter()
        .find(|f| f.lunar_day_month() == Some((day, month)))
        .or(match day {
            1 => Some(SpecialDay::MongMot),
            15 => Some(SpecialDay::Ram),
            _ => None,
        })
}
