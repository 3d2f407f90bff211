
#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

/// Number of days in `month` of `year`. `month` must lie in `1..=12`.
pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30, 
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30, 
        31, 30, 31, 31, 30,
        31, 30, 31
    ];
    
    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Whether `(month, day)` exists in at least one Gregorian year.
pub const fn is_valid_month_day (month: u32, day: u32) -> bool {
    month >= 1 && month <= 12 && day >= 1 && day <= days_of_month(2000, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap(2000));
        assert!(is_leap(2024));
        assert!(!is_leap(1900));
        assert!(!is_leap(2023));
    }

    #[test]
    fn february_length_follows_leap_rule() {
        assert_eq!(days_of_month(2024, 2), 29);
        assert_eq!(days_of_month(2023, 2), 28);
        assert_eq!(days_of_month(2023, 12), 31);
    }

    #[test]
    fn month_day_validity() {
        assert!(is_valid_month_day(2, 29));
        assert!(!is_valid_month_day(2, 30));
        assert!(!is_valid_month_day(13, 1));
        assert!(!is_valid_month_day(4, 0));
    }
}
