use std::collections::HashMap;

use chrono::NaiveDate;

use super::lunarholidayid::LunarHolidayId;

/// Observed or announced Gregorian dates of lunar holidays, keyed by
/// `(holiday, year)`.
///
/// Lookups are exact; a year missing from the table is never filled from a
/// neighbouring year.
#[derive(Clone, Debug, Default)]
pub struct LunarOverrideTable {
    month_days: HashMap<(LunarHolidayId, i32), (u32, u32)>
}

impl LunarOverrideTable {
    pub fn new() -> LunarOverrideTable {
        LunarOverrideTable::default()
    }

    /// Builds a table from `(year, month, day)` rows for a single holiday.
    pub fn with_dates(mut self, holiday: LunarHolidayId, dates: &[(i32, u32, u32)]) -> LunarOverrideTable {
        for &(year, month, day) in dates {
            self.insert(holiday, year, month, day);
        }
        self
    }

    pub fn insert(&mut self, holiday: LunarHolidayId, year: i32, month: u32, day: u32) {
        self.month_days.insert((holiday, year), (month, day));
    }

    pub fn month_day(&self, holiday: LunarHolidayId, year: i32) -> Option<(u32, u32)> {
        self.month_days.get(&(holiday, year)).copied()
    }

    pub fn get(&self, holiday: LunarHolidayId, year: i32) -> Option<NaiveDate> {
        self.month_day(holiday, year)
            .and_then(|(month, day)| NaiveDate::from_ymd_opt(year, month, day))
    }

    /// Years recorded for `holiday`, ascending.
    pub fn years(&self, holiday: LunarHolidayId) -> Vec<i32> {
        let mut years: Vec<i32> = self.month_days
            .keys()
            .filter(|(h, _)| *h == holiday)
            .map(|(_, year)| *year)
            .collect();
        years.sort_unstable();
        years
    }

    pub fn len(&self) -> usize {
        self.month_days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.month_days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LunarOverrideTable {
        LunarOverrideTable::new()
            .with_dates(LunarHolidayId::EidAlAdha, &[(2018, 8, 21), (2020, 7, 31)])
            .with_dates(LunarHolidayId::EidAlFitr, &[(2018, 6, 14)])
    }

    #[test]
    fn exact_lookup() {
        let table = table();
        assert_eq!(table.get(LunarHolidayId::EidAlAdha, 2018), NaiveDate::from_ymd_opt(2018, 8, 21));
        assert_eq!(table.month_day(LunarHolidayId::EidAlFitr, 2018), Some((6, 14)));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn no_nearest_year_fallback() {
        let table = table();
        assert_eq!(table.get(LunarHolidayId::EidAlAdha, 2019), None);
        assert_eq!(table.get(LunarHolidayId::EidAlFitr, 2020), None);
        assert_eq!(table.get(LunarHolidayId::Ashura, 2018), None);
    }

    #[test]
    fn years_are_sorted_per_holiday() {
        assert_eq!(table().years(LunarHolidayId::EidAlAdha), vec![2018, 2020]);
        assert!(LunarOverrideTable::new().is_empty());
    }
}
