use std::collections::BTreeSet;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidayset::HolidayEntry;

/// Combines two calendars using logical operations (union or intersection).
///
/// # Union
/// A date is a holiday if it's a holiday in EITHER calendar, carrying the
/// names from both.
///
/// # Intersection
/// A date is a holiday if it's a holiday in BOTH calendars.
pub struct JointCalendar {
    c1: Rc<dyn HolidayCalendar>,
    c2: Rc<dyn HolidayCalendar>,
    logical_operator: fn(bool, bool) -> bool
}

impl JointCalendar {
    pub fn union(c1: Rc<dyn HolidayCalendar>, c2: Rc<dyn HolidayCalendar>) -> JointCalendar {
        JointCalendar {
            c1,
            c2,
            logical_operator: |b1, b2| b1 || b2
        }
    }

    pub fn intersection(c1: Rc<dyn HolidayCalendar>, c2: Rc<dyn HolidayCalendar>) -> JointCalendar {
        JointCalendar {
            c1,
            c2,
            logical_operator: |b1, b2| b1 && b2
        }
    }

    pub fn is_union(&self) -> bool {
        (self.logical_operator)(true, false)
    }

    pub fn is_intersection(&self) -> bool {
        !self.is_union()
    }

    pub fn c1(&self) -> &Rc<dyn HolidayCalendar> {
        &self.c1
    }

    pub fn c2(&self) -> &Rc<dyn HolidayCalendar> {
        &self.c2
    }
}

impl HolidayCalendar for JointCalendar {
    fn names_of(&self, d: NaiveDate) -> Vec<String> {
        let n1 = self.c1.names_of(d);
        let n2 = self.c2.names_of(d);
        if !(self.logical_operator)(!n1.is_empty(), !n2.is_empty()) {
            return Vec::new();
        }

        let mut names = n1;
        for name in n2 {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    fn holidays_in(&self, year: i32) -> Vec<HolidayEntry> {
        let e1 = self.c1.holidays_in(year);
        let e2 = self.c2.holidays_in(year);

        let mut entries: Vec<HolidayEntry> = if self.is_union() {
            e1.into_iter().chain(e2).collect()
        } else {
            let d1: BTreeSet<NaiveDate> = e1.iter().map(|e| e.date()).collect();
            let d2: BTreeSet<NaiveDate> = e2.iter().map(|e| e.date()).collect();
            e1.into_iter()
                .filter(|e| d2.contains(&e.date()))
                .chain(e2.into_iter().filter(|e| d1.contains(&e.date())))
                .collect()
        };
        entries.sort_by_key(|e| e.date());
        let mut unique: Vec<HolidayEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !unique.contains(&entry) {
                unique.push(entry);
            }
        }
        unique
    }

    #[inline]
    fn is_weekend(&self, d: NaiveDate) -> bool {
        (self.logical_operator)(self.c1.is_weekend(d), self.c2.is_weekend(d))
    }
}
