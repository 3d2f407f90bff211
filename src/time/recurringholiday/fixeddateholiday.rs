use chrono::NaiveDate;

use crate::time::utility::is_valid_month_day;

use super::holidayerror::HolidayError;
use super::recurringholiday::{
    RecurringHoliday,
    ResolvedDate
};

#[derive(Clone, Copy, Debug)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32
}

impl FixedDateHoliday {
    /// Years in which `(month, day)` does not exist resolve to `DateUnavailable`.
    pub fn new(month: u32, day: u32) -> FixedDateHoliday {
        FixedDateHoliday { month, day }
    }

    /// Rejects a `(month, day)` pair that no year contains.
    pub fn try_new(month: u32, day: u32) -> Option<FixedDateHoliday> {
        if is_valid_month_day(month, day) {
            Some(FixedDateHoliday::new(month, day))
        } else {
            None
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> Result<ResolvedDate, HolidayError> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .map(ResolvedDate::exact)
            .ok_or_else(|| HolidayError::date_unavailable(format!("{:02}-{:02}", self.month, self.day), year))
    }
}
