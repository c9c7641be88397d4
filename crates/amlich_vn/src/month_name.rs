//! Traditional names of the lunar months.

/// Prefix marking a leap (intercalary) month.
pub const LEAP_PREFIX: &str = "Nhuận ";

const MONTH_NAMES: [&str; 12] = [
    "Giêng", "Hai", "Ba", "Tư", "Năm", "Sáu", "Bảy", "Tám", "Chín", "Mười", "Một", "Chạp",
];

/// Name of lunar month `month`, e.g. `"Giêng"` for 1 or `"Nhuận Hai"` for a
/// leap second month.
///
/// Month numbers wrap modulo 12, so 0 names the twelfth month.
pub fn lunar_month_name(month: u32, leap: bool) -> String {
    let base = MONTH_NAMES[(month as usize + 11) % 12];
    if leap {
        format!("{LEAP_PREFIX}{base}")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        assert_eq!(lunar_month_name(1, false), "Giêng");
        assert_eq!(lunar_month_name(11, false), "Một");
        assert_eq!(lunar_month_name(12, false), "Chạp");
    }

    #[test]
    fn leap_prefix() {
        assert_eq!(lunar_month_name(2, true), "Nhuận Hai");
        assert_eq!(lunar_month_name(6, true), "Nhuận Sáu");
    }

    #[test]
    fn wraps() {
        assert_eq!(lunar_month_name(0, false), "Chạp");
        assert_eq!(lunar_month_name(13, false), "Giêng");
    }
}
