use std::ops::RangeInclusive;

use chrono::{
    Datelike,
    NaiveDate
};

/// Inclusive span of calendar days. The endpoints may be given in either order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(d1: NaiveDate, d2: NaiveDate) -> RangeOfDates {
        if d1 > d2 {
            RangeOfDates {start_date: d2, end_date: d1}
        } else {
            RangeOfDates {start_date: d1, end_date: d2}
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    /// Calendar years touched by the range, in ascending order.
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start_date.year()..=self.end_date.year()
    }
}
