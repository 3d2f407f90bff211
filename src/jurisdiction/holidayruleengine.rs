use std::sync::Arc;

use log::debug;

use crate::time::calendar::calendaroptions::CalendarOptions;
use crate::time::calendar::holidayset::HolidayEntry;
use crate::time::recurringholiday::holidayerror::HolidayError;
use crate::time::recurringholiday::holidayrule::HolidayRule;
use crate::time::recurringholiday::observedadjustment::ObservedDateShifter;

const ESTIMATED_SUFFIX: &str = " (estimated)";
const OBSERVED_SUFFIX: &str = " (Observed)";

/// Evaluates a jurisdiction's holiday rules for one year.
///
/// Rules are independent and evaluated in declaration order. Any rule that
/// cannot produce a date (gated out, category not requested, date
/// unavailable) is skipped; evaluation of a year never fails.
pub struct HolidayRuleEngine {
    epoch_year: i32,
    rules: Vec<HolidayRule>,
    shifter: Arc<dyn ObservedDateShifter>
}

impl HolidayRuleEngine {
    /// Years up to and including `epoch_year` have no holidays.
    pub fn new(epoch_year: i32, rules: Vec<HolidayRule>, shifter: Arc<dyn ObservedDateShifter>) -> HolidayRuleEngine {
        HolidayRuleEngine { epoch_year, rules, shifter }
    }

    pub fn epoch_year(&self) -> i32 {
        self.epoch_year
    }

    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    pub fn shifter(&self) -> &Arc<dyn ObservedDateShifter> {
        &self.shifter
    }

    pub fn populate(&self, year: i32, options: &CalendarOptions) -> Vec<HolidayEntry> {
        if year <= self.epoch_year {
            debug!("{}", HolidayError::EpochTooEarly { year, epoch_year: self.epoch_year });
            return Vec::new();
        }

        let mut entries = Vec::with_capacity(self.rules.len() + 2);
        for rule in self.rules.iter() {
            match self.evaluate_rule(rule, year, options) {
                Ok(rule_entries) => entries.extend(rule_entries),
                Err(error) => debug!("skipping '{}': {}", rule.name(), error)
            }
        }
        entries
    }

    /// At most two entries: the holiday itself and its substitute day.
    fn evaluate_rule(&self, rule: &HolidayRule, year: i32, options: &CalendarOptions) -> Result<Vec<HolidayEntry>, HolidayError> {
        rule.check_year(year)?;
        if !options.includes(rule.category()) {
            return Err(HolidayError::CategoryNotRequested { name: rule.name().to_owned() });
        }

        let resolved = rule.recurring_holiday().get_holiday(year)?;
        let name = if resolved.is_estimated() {
            format!("{}{}", rule.name(), ESTIMATED_SUFFIX)
        } else {
            rule.name().to_owned()
        };

        let substitute = match rule.observed_shift_days() {
            Some(shift_days) if options.observed() => self.shifter.shift(resolved.date(), shift_days),
            _ => None
        };

        let mut rule_entries = Vec::with_capacity(2);
        if let Some(substitute) = substitute {
            rule_entries.push(HolidayEntry::new(resolved.date(), name.clone()));
            rule_entries.push(HolidayEntry::new(substitute, format!("{}{}", name, OBSERVED_SUFFIX)));
        } else {
            rule_entries.push(HolidayEntry::new(resolved.date(), name));
        }
        Ok(rule_entries)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::NaiveDate;
    use log::{Level, LevelFilter, Log, Metadata, Record};

    use crate::time::lunar::lunardateestimator::LunarDateEstimator;
    use crate::time::lunar::lunarholidayid::LunarHolidayId;
    use crate::time::lunar::lunaroverridetable::LunarOverrideTable;
    use crate::time::recurringholiday::easterrelatedholiday::EasterType;
    use crate::time::recurringholiday::holidayrule::HolidayCategory;
    use crate::time::recurringholiday::observedadjustment::NonWorkingDayShift;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine() -> HolidayRuleEngine {
        let estimator = Arc::new(LunarDateEstimator::with_tabular_fallback(
            LunarOverrideTable::new().with_dates(LunarHolidayId::EidAlAdha, &[(2018, 8, 21)])
        ));
        HolidayRuleEngine::new(
            1962,
            vec![
                HolidayRule::fixed("New Year's Day", 1, 1).observed(1),
                HolidayRule::easter_related("Good Friday", EasterType::Western, -2),
                HolidayRule::fixed("Liberation Day", 1, 26).introduced_in(1986).observed(1),
                HolidayRule::fixed("Leap Day", 2, 29),
                HolidayRule::fixed("Bank Closing Day", 12, 31).in_category(HolidayCategory::Bank),
                HolidayRule::lunar("Eid al-Adha", LunarHolidayId::EidAlAdha, estimator),
                HolidayRule::fixed("Christmas Day", 12, 25).observed(2),
            ],
            Arc::new(NonWorkingDayShift::sunday())
        )
    }

    struct RecordingLogger {
        records: Mutex<Vec<(Level, String)>>
    }

    impl Log for RecordingLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: RecordingLogger = RecordingLogger { records: Mutex::new(Vec::new()) };

    fn names(entries: &[HolidayEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    #[test]
    fn epoch_gate_is_exclusive() {
        let engine = engine();
        assert!(engine.populate(1962, &CalendarOptions::default()).is_empty());
        assert!(engine.populate(1900, &CalendarOptions::default()).is_empty());
        assert!(!engine.populate(1963, &CalendarOptions::default()).is_empty());
    }

    #[test]
    fn sunday_holiday_gets_a_substitute() {
        // 2017-01-01 is a Sunday
        let entries = engine().populate(2017, &CalendarOptions::default());
        assert!(entries.contains(&HolidayEntry::new(date(2017, 1, 1), "New Year's Day")));
        assert!(entries.contains(&HolidayEntry::new(date(2017, 1, 2), "New Year's Day (Observed)")));
    }

    #[test]
    fn observed_switch_disables_substitutes() {
        let entries = engine().populate(2017, &CalendarOptions::default().with_observed(false));
        assert!(entries.iter().all(|e| !e.name().ends_with("(Observed)")));
        assert!(entries.contains(&HolidayEntry::new(date(2017, 1, 1), "New Year's Day")));
    }

    #[test]
    fn larger_shift_is_honoured() {
        // 2022-12-25 is a Sunday
        let entries = engine().populate(2022, &CalendarOptions::default());
        assert!(entries.contains(&HolidayEntry::new(date(2022, 12, 27), "Christmas Day (Observed)")));
        assert!(!entries.iter().any(|e| e.date() == date(2022, 12, 26)));
    }

    #[test]
    fn year_gate() {
        let engine = engine();
        let options = CalendarOptions::default();
        assert!(!names(&engine.populate(1985, &options)).contains(&"Liberation Day"));
        assert!(names(&engine.populate(1986, &options)).contains(&"Liberation Day"));
        assert!(names(&engine.populate(1990, &options)).contains(&"Liberation Day"));
    }

    #[test]
    fn unavailable_dates_skip_only_their_rule() {
        let entries = engine().populate(2023, &CalendarOptions::default());
        assert!(!names(&entries).contains(&"Leap Day"));
        assert!(names(&entries).contains(&"Good Friday"));

        // outside the lunar conversion range
        let entries = engine().populate(2100, &CalendarOptions::default());
        assert!(!names(&entries).iter().any(|n| n.starts_with("Eid al-Adha")));
        assert!(names(&entries).contains(&"Christmas Day"));
    }

    #[test]
    fn unavailable_dates_are_logged_at_debug() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);

        let engine = HolidayRuleEngine::new(
            1962,
            vec![HolidayRule::fixed("Quadrennial Leap Day", 2, 29)],
            Arc::new(NonWorkingDayShift::sunday())
        );
        for year in 2021..2024 {
            assert!(engine.populate(year, &CalendarOptions::default()).is_empty());
        }

        let records = LOGGER.records.lock().unwrap();
        let skips: Vec<Level> = records
            .iter()
            .filter(|(_, message)| message.contains("Quadrennial Leap Day"))
            .map(|(level, _)| *level)
            .collect();
        assert_eq!(skips, vec![Level::Debug; 3]);
    }

    #[test]
    fn lunar_names_carry_the_estimate_marker() {
        let engine = engine();
        let options = CalendarOptions::default();
        assert!(engine.populate(2018, &options).contains(&HolidayEntry::new(date(2018, 8, 21), "Eid al-Adha")));
        assert!(engine.populate(2021, &options).contains(&HolidayEntry::new(date(2021, 7, 20), "Eid al-Adha (estimated)")));
    }

    #[test]
    fn categories_filter_rules() {
        let engine = engine();
        assert!(!names(&engine.populate(2024, &CalendarOptions::default())).contains(&"Bank Closing Day"));
        assert!(names(&engine.populate(2024, &CalendarOptions::banking())).contains(&"Bank Closing Day"));
    }

    #[test]
    fn at_most_two_entries_per_rule() {
        let engine = engine();
        for year in 1963..2080 {
            let entries = engine.populate(year, &CalendarOptions::banking());
            assert!(entries.len() <= 2 * engine.rules().len());
            let new_year = entries.iter().filter(|e| e.name().starts_with("New Year's Day")).count();
            assert!(new_year == 1 || new_year == 2);
        }
    }
}
