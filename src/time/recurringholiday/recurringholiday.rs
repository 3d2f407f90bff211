use chrono::{Datelike, NaiveDate};

use super::holidayerror::HolidayError;

/// Gregorian date produced by a holiday rule for one year.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ResolvedDate {
    date: NaiveDate,
    is_estimated: bool
}

impl ResolvedDate {
    pub fn exact(date: NaiveDate) -> ResolvedDate {
        ResolvedDate { date, is_estimated: false }
    }

    pub fn estimated(date: NaiveDate) -> ResolvedDate {
        ResolvedDate { date, is_estimated: true }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// `true` when the date comes from arithmetic rather than an observed record.
    pub fn is_estimated(&self) -> bool {
        self.is_estimated
    }
}

pub trait RecurringHoliday: Send + Sync {

    fn get_holiday(&self, year: i32) -> Result<ResolvedDate, HolidayError>;

    fn is_holiday(&self, d: &NaiveDate) -> bool {
        self.get_holiday(d.year())
            .map_or(false, |resolved| resolved.date() == *d)
    }
}
