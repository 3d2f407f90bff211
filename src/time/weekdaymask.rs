use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

/// Set of weekdays stored as a bitmask.
/// Each bit represents a day: Mon(0), Tue(1), ..., Sun(6)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct WeekdayMask(u8);

impl WeekdayMask {
    pub fn new(weekdays: &HashSet<Weekday>) -> Self {
        weekdays.iter().copied().collect()
    }

    pub fn sunday() -> Self {
        WeekdayMask::single(Weekday::Sun)
    }

    pub fn saturday_and_sunday() -> Self {
        [Weekday::Sat, Weekday::Sun].into_iter().collect()
    }

    pub fn single(weekday: Weekday) -> Self {
        WeekdayMask(1u8 << weekday.num_days_from_monday())
    }

    #[inline]
    pub fn contains(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }

    #[inline]
    pub fn contains_date(&self, d: NaiveDate) -> bool {
        self.contains(d.weekday())
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn to_hashset(&self) -> HashSet<Weekday> {
        (0..7u8)
            .filter(|day| (self.0 & (1u8 << day)) != 0)
            .filter_map(|day| Weekday::try_from(day).ok())
            .collect()
    }
}

impl FromIterator<Weekday> for WeekdayMask {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut mask = 0u8;
        for weekday in iter {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekdayMask(mask)
    }
}
