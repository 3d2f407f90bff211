use chrono::NaiveDate;

use crate::time::calendar::calendaroptions::CalendarOptions;
use crate::time::calendar::holidayset::HolidayEntry;
use crate::time::weekdaymask::WeekdayMask;

use super::holidayruleengine::HolidayRuleEngine;

/// Immutable description of one jurisdiction: its codes, weekend and rule
/// engine. Shared between every calendar built for it.
pub struct JurisdictionProfile {
    name: String,
    codes: Vec<String>,
    weekends: WeekdayMask,
    engine: HolidayRuleEngine
}

impl JurisdictionProfile {
    pub fn new(name: impl Into<String>, codes: Vec<String>, weekends: WeekdayMask, engine: HolidayRuleEngine) -> JurisdictionProfile {
        JurisdictionProfile {
            name: name.into(),
            codes,
            weekends,
            engine
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn weekends(&self) -> WeekdayMask {
        self.weekends
    }

    #[inline]
    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.contains_date(d)
    }

    pub fn engine(&self) -> &HolidayRuleEngine {
        &self.engine
    }

    pub fn populate(&self, year: i32, options: &CalendarOptions) -> Vec<HolidayEntry> {
        self.engine.populate(year, options)
    }
}
