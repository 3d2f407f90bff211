use std::collections::HashSet;

use chrono::{
    Duration,
    NaiveDate,
    Weekday
};

use crate::time::weekdaymask::WeekdayMask;

/// Decides whether a holiday gets a substitute day, and which one.
///
/// Implementations are pure: the caller decides whether to record the
/// substitute.
pub trait ObservedDateShifter: Send + Sync {
    fn shift(&self, d: NaiveDate, shift_days: i64) -> Option<NaiveDate>;
}

/// Moves a holiday that lands on one of the non-working weekdays forward by
/// the rule's shift.
///
/// The substitute date is not checked again. A single shift is applied even
/// if it lands on another non-working day; some rules (Christmas Day +2) are
/// sized so that they step over the following holiday instead.
#[derive(Clone, Copy, Debug)]
pub struct NonWorkingDayShift {
    non_working_days: WeekdayMask
}

impl NonWorkingDayShift {
    pub fn new(non_working_days: &HashSet<Weekday>) -> NonWorkingDayShift {
        NonWorkingDayShift { non_working_days: WeekdayMask::new(non_working_days) }
    }

    /// Only Sunday triggers a substitute; Saturday holidays stay where they are.
    pub fn sunday() -> NonWorkingDayShift {
        NonWorkingDayShift { non_working_days: WeekdayMask::sunday() }
    }

    #[inline]
    pub fn is_non_working_day(&self, d: NaiveDate) -> bool {
        self.non_working_days.contains_date(d)
    }

    pub fn non_working_days(&self) -> HashSet<Weekday> {
        self.non_working_days.to_hashset()
    }
}

impl Default for NonWorkingDayShift {
    fn default() -> Self {
        NonWorkingDayShift::sunday()
    }
}

impl ObservedDateShifter for NonWorkingDayShift {
    #[inline]
    fn shift(&self, d: NaiveDate, shift_days: i64) -> Option<NaiveDate> {
        if self.is_non_working_day(d) {
            d.checked_add_signed(Duration::days(shift_days))
        } else {
            None
        }
    }
}
