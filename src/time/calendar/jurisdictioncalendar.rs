use std::cell::{Ref, RefCell};
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::jurisdiction::jurisdictionprofile::JurisdictionProfile;
use crate::time::calendar::calendaroptions::CalendarOptions;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidayset::{HolidayEntry, HolidaySet};
use crate::time::rangeofdates::RangeOfDates;

/// Holiday calendar of one jurisdiction under fixed options.
///
/// Years are evaluated lazily and cached in the calendar's own `HolidaySet`.
/// Answering for a year also evaluates its two neighbours, whose observed days
/// may land inside it.
/// The set sits in a `RefCell`, so an instance cannot be shared between
/// threads; build one calendar per thread from the shared profile.
pub struct JurisdictionCalendar {
    profile: Arc<JurisdictionProfile>,
    options: CalendarOptions,
    holiday_set: RefCell<HolidaySet>
}

impl JurisdictionCalendar {
    pub fn new(profile: Arc<JurisdictionProfile>, options: CalendarOptions) -> JurisdictionCalendar {
        JurisdictionCalendar {
            profile,
            options,
            holiday_set: RefCell::new(HolidaySet::new())
        }
    }

    pub fn profile(&self) -> &Arc<JurisdictionProfile> {
        &self.profile
    }

    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }

    /// Evaluates `year` unless it is already cached.
    pub fn populate(&self, year: i32) {
        if self.holiday_set.borrow().is_populated(year) {
            return;
        }
        let entries = self.profile.populate(year, &self.options);
        let evaluated = entries.len();
        let mut holiday_set = self.holiday_set.borrow_mut();
        holiday_set.insert_year(year, entries);
        debug!(
            "{}: populated {} with {} entries, {} cached",
            self.profile.name(),
            year,
            evaluated,
            holiday_set.len()
        );
    }

    fn populate_around(&self, year: i32) {
        for y in year.saturating_sub(1)..=year.saturating_add(1) {
            self.populate(y);
        }
    }

    pub fn holiday_set(&self) -> Ref<'_, HolidaySet> {
        self.holiday_set.borrow()
    }
}

impl HolidayCalendar for JurisdictionCalendar {
    fn names_of(&self, d: NaiveDate) -> Vec<String> {
        self.populate_around(d.year());
        self.holiday_set.borrow().names_of(d)
    }

    fn holidays_in(&self, year: i32) -> Vec<HolidayEntry> {
        self.populate_around(year);
        self.holiday_set.borrow().entries_of_year(year)
    }

    #[inline]
    fn is_weekend(&self, d: NaiveDate) -> bool {
        self.profile.is_weekend(d)
    }

    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.populate_around(d.year());
        self.holiday_set.borrow().contains(d)
    }

    fn holidays_between(&self, d1: NaiveDate, d2: NaiveDate) -> Vec<HolidayEntry> {
        let range = RangeOfDates::new(d1, d2);
        for year in range.years() {
            self.populate_around(year);
        }
        self.holiday_set.borrow().entries_between(range.start_date(), range.end_date())
    }
}
