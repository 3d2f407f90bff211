use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;

use holidaycal::jurisdiction::uganda::{UGANDA_EPOCH_YEAR, uganda};
use holidaycal::time::calendar::calendaroptions::CalendarOptions;
use holidaycal::time::calendar::holidaycalendar::HolidayCalendar;
use holidaycal::time::calendar::jurisdictioncalendar::JurisdictionCalendar;
use holidaycal::time::lunar::lunardateestimator::LunarDateEstimator;
use holidaycal::time::lunar::lunarholidayid::LunarHolidayId;
use holidaycal::time::lunar::lunaroverridetable::LunarOverrideTable;
use holidaycal::time::recurringholiday::observedadjustment::{NonWorkingDayShift, ObservedDateShifter};

fn day_from(days: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(days)
}

proptest! {
    /// Years up to the epoch are empty, the rest never are.
    #[test]
    fn epoch_gate(year in 1583i32..2200) {
        let entries = uganda().populate(year, &CalendarOptions::banking());
        prop_assert_eq!(entries.is_empty(), year <= UGANDA_EPOCH_YEAR);
    }

    #[test]
    fn population_is_idempotent(year in 1950i32..2100) {
        let calendar = JurisdictionCalendar::new(uganda(), CalendarOptions::default());
        let first = calendar.holidays_in(year);
        calendar.populate(year);
        prop_assert_eq!(calendar.holidays_in(year), first);
    }

    /// Every fixed rule yields one base entry on its own day.
    #[test]
    fn fixed_rules_always_present(year in 1986i32..2300) {
        let calendar = JurisdictionCalendar::new(uganda(), CalendarOptions::default());
        for (month, day, name) in [(1, 1, "New Year's Day"), (10, 9, "Independence Day"), (12, 26, "Boxing Day")] {
            let d = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let base_count = calendar.holidays_in(year).iter().filter(|e| e.name() == name).count();
            prop_assert_eq!(base_count, 1);
            prop_assert!(calendar.names_of(d).iter().any(|n| n == name));
        }
    }

    #[test]
    fn shifter_is_pure(days in 0i64..100_000, shift_days in 1i64..4) {
        let d = day_from(days);
        let shifter = NonWorkingDayShift::sunday();
        let shifted = shifter.shift(d, shift_days);
        prop_assert_eq!(shifted, shifter.shift(d, shift_days));
        if d.weekday() == Weekday::Sun {
            prop_assert_eq!(shifted, Some(d + Duration::days(shift_days)));
        } else {
            prop_assert_eq!(shifted, None);
        }
    }

    #[test]
    fn observed_entries_follow_the_switch(year in 1963i32..2100) {
        let observed = uganda().populate(year, &CalendarOptions::default());
        let unobserved = uganda().populate(year, &CalendarOptions::default().with_observed(false));
        prop_assert!(unobserved.iter().all(|e| !e.name().ends_with("(Observed)")));
        for entry in observed.iter().filter(|e| e.name().ends_with("(Observed)")) {
            prop_assert!(!unobserved.contains(entry));
        }
        let base: Vec<_> = observed.iter().filter(|e| !e.name().ends_with("(Observed)")).cloned().collect();
        prop_assert_eq!(base, unobserved);
    }

    #[test]
    fn override_takes_precedence(year in 1924i32..2078, month in 1u32..13, day in 1u32..29) {
        let estimator = LunarDateEstimator::with_tabular_fallback(
            LunarOverrideTable::new().with_dates(LunarHolidayId::EidAlFitr, &[(year, month, day)])
        );
        let resolved = estimator.resolve(LunarHolidayId::EidAlFitr, year).unwrap();
        prop_assert_eq!(resolved.date(), NaiveDate::from_ymd_opt(year, month, day).unwrap());
        prop_assert!(!resolved.is_estimated());

        let fallback = estimator.resolve(LunarHolidayId::EidAlAdha, year).unwrap();
        prop_assert!(fallback.is_estimated());
        prop_assert_eq!(fallback.date().year(), year);
    }
}
