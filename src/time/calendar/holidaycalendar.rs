use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use crate::time::calendar::holidayset::HolidayEntry;
use crate::time::rangeofdates::RangeOfDates;

const ONE_DAY: Days = Days::new(1);

/// Query surface over a set of named holidays. Implementations fill the
/// years they are asked about on first access.
pub trait HolidayCalendar {
    fn names_of(&self, d: NaiveDate) -> Vec<String>;

    /// Entries of `year`, ordered by date.
    fn holidays_in(&self, year: i32) -> Vec<HolidayEntry>;

    fn is_weekend(&self, d: NaiveDate) -> bool;

    fn is_holiday(&self, d: NaiveDate) -> bool {
        !self.names_of(d).is_empty()
    }

    /// All names on `d`, joined with `"; "`.
    fn name_of(&self, d: NaiveDate) -> Option<String> {
        let names = self.names_of(d);
        if names.is_empty() {
            None
        } else {
            Some(names.join("; "))
        }
    }

    fn get_holiday_set(&self, year: i32) -> BTreeSet<NaiveDate> {
        self.holidays_in(year)
            .iter()
            .map(|entry| entry.date())
            .collect()
    }

    /// Entries dated inside `[d1, d2]`; the bounds may come in either order.
    fn holidays_between(&self, d1: NaiveDate, d2: NaiveDate) -> Vec<HolidayEntry> {
        let range = RangeOfDates::new(d1, d2);
        let mut entries = Vec::new();
        for year in range.years() {
            entries.extend(
                self.holidays_in(year)
                    .into_iter()
                    .filter(|entry| range.contain(entry.date()))
            );
        }
        entries
    }

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !self.is_weekend(d) && !self.is_holiday(d)
    }

    /// The `n`-th business day after `horizon`, or before it when `n` is
    /// negative. `None` when no business day exists, either because every
    /// weekday is a weekend or because the walk leaves the representable dates.
    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> Option<NaiveDate> {
        if n != 0 && horizon.iter_days().take(7).all(|d| self.is_weekend(d)) {
            return None;
        }

        let shift_one_day = if n >= 0 {
            |d: NaiveDate| d.checked_add_days(ONE_DAY)
        } else {
            |d: NaiveDate| d.checked_sub_days(ONE_DAY)
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(d)?;
            m -= self.is_business_day(d) as u32;
        }
        Some(d)
    }

    fn next_business_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        self.shift_n_business_day(d, 1)
    }

    fn previous_business_day(&self, d: NaiveDate) -> Option<NaiveDate> {
        self.shift_n_business_day(d, -1)
    }
}
