use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct HolidayEntry {
    date: NaiveDate,
    name: String
}

impl HolidayEntry {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> HolidayEntry {
        HolidayEntry { date, name: name.into() }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Append-only store of holiday entries, filled one evaluated year at a time.
///
/// Entries are indexed by the date they fall on, which is not always inside
/// the evaluated year: an observed day may spill into the next one. Each name
/// remembers the year whose evaluation produced it so that same-day names
/// come out in the same order whichever year was filled first. A year can be
/// filled once; later attempts are ignored.
#[derive(Clone, Debug, Default)]
pub struct HolidaySet {
    names_by_date: BTreeMap<NaiveDate, Vec<(i32, String)>>,
    populated_years: BTreeSet<i32>
}

impl HolidaySet {
    pub fn new() -> HolidaySet {
        HolidaySet::default()
    }

    #[inline]
    pub fn is_populated(&self, year: i32) -> bool {
        self.populated_years.contains(&year)
    }

    pub fn populated_years(&self) -> &BTreeSet<i32> {
        &self.populated_years
    }

    /// Records the result of evaluating `year`. Returns `false` and leaves the
    /// set untouched if the year was already recorded.
    pub fn insert_year(&mut self, year: i32, entries: Vec<HolidayEntry>) -> bool {
        if !self.populated_years.insert(year) {
            return false;
        }

        for entry in entries {
            let names = self.names_by_date.entry(entry.date).or_default();
            if names.iter().any(|(_, name)| *name == entry.name) {
                continue;
            }
            // after every name of the same or an earlier source year
            let at = names.partition_point(|(source_year, _)| *source_year <= year);
            names.insert(at, (year, entry.name));
        }
        true
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.names_by_date.contains_key(&d)
    }

    pub fn names_of(&self, d: NaiveDate) -> Vec<String> {
        self.names_by_date
            .get(&d)
            .map_or_else(Vec::new, |names| names.iter().map(|(_, name)| name.clone()).collect())
    }

    /// Entries dated inside `[start, end]`, ordered by date.
    pub fn entries_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<HolidayEntry> {
        if start > end {
            return Vec::new();
        }
        self.names_by_date
            .range(start..=end)
            .flat_map(|(d, names)| names.iter().map(|(_, name)| HolidayEntry::new(*d, name.as_str())))
            .collect()
    }

    /// Entries dated inside `year`, whichever evaluated year produced them.
    pub fn entries_of_year(&self, year: i32) -> Vec<HolidayEntry> {
        match (NaiveDate::from_ymd_opt(year, 1, 1), NaiveDate::from_ymd_opt(year, 12, 31)) {
            (Some(start), Some(end)) => self.entries_between(start, end),
            _ => Vec::new()
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.names_by_date.values().map(|names| names.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.names_by_date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn second_insert_of_a_year_is_ignored() {
        let mut set = HolidaySet::new();
        assert!(set.insert_year(2024, vec![HolidayEntry::new(date(2024, 1, 1), "New Year's Day")]));
        assert!(!set.insert_year(2024, vec![HolidayEntry::new(date(2024, 5, 1), "Labour Day")]));
        assert_eq!(set.len(), 1);
        assert!(!set.contains(date(2024, 5, 1)));
        assert_eq!(set.populated_years(), &BTreeSet::from([2024]));
    }

    #[test]
    fn shared_dates_keep_every_name() {
        let mut set = HolidaySet::new();
        set.insert_year(2019, vec![
            HolidayEntry::new(date(2019, 6, 3), "Uganda Martyrs' Day"),
            HolidayEntry::new(date(2019, 6, 3), "Eid al-Fitr"),
            HolidayEntry::new(date(2019, 6, 3), "Eid al-Fitr"),
        ]);
        assert_eq!(set.names_of(date(2019, 6, 3)), ["Uganda Martyrs' Day", "Eid al-Fitr"]);
        assert_eq!(set.entries_of_year(2019).len(), 2);
    }

    #[test]
    fn entries_are_ordered_by_date() {
        let mut set = HolidaySet::new();
        set.insert_year(2024, vec![
            HolidayEntry::new(date(2024, 12, 25), "Christmas Day"),
            HolidayEntry::new(date(2024, 1, 1), "New Year's Day"),
        ]);
        let dates: Vec<NaiveDate> = set.entries_of_year(2024).iter().map(|e| e.date()).collect();
        assert_eq!(dates, vec![date(2024, 1, 1), date(2024, 12, 25)]);
        assert!(set.entries_of_year(2023).is_empty());
        assert!(set.names_of(date(2024, 7, 4)).is_empty());
    }

    #[test]
    fn spilled_entries_belong_to_the_year_they_fall_in() {
        let mut set = HolidaySet::new();
        set.insert_year(2023, vec![
            HolidayEntry::new(date(2023, 12, 31), "Year End"),
            HolidayEntry::new(date(2024, 1, 1), "Year End (Observed)"),
        ]);
        assert_eq!(set.entries_of_year(2023), vec![HolidayEntry::new(date(2023, 12, 31), "Year End")]);
        assert_eq!(
            set.entries_of_year(2024),
            vec![HolidayEntry::new(date(2024, 1, 1), "Year End (Observed)")]
        );
        assert!(!set.is_populated(2024));
    }

    #[test]
    fn same_day_names_follow_the_source_year() {
        let spill = HolidayEntry::new(date(2024, 1, 1), "Year End (Observed)");
        let new_year = HolidayEntry::new(date(2024, 1, 1), "New Year's Day");

        let mut forward = HolidaySet::new();
        forward.insert_year(2023, vec![spill.clone()]);
        forward.insert_year(2024, vec![new_year.clone()]);

        let mut backward = HolidaySet::new();
        backward.insert_year(2024, vec![new_year]);
        backward.insert_year(2023, vec![spill]);

        assert_eq!(forward.names_of(date(2024, 1, 1)), ["Year End (Observed)", "New Year's Day"]);
        assert_eq!(backward.names_of(date(2024, 1, 1)), forward.names_of(date(2024, 1, 1)));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let mut set = HolidaySet::new();
        set.insert_year(2024, vec![
            HolidayEntry::new(date(2024, 1, 1), "New Year's Day"),
            HolidayEntry::new(date(2024, 1, 5), "Founders' Day"),
        ]);
        assert_eq!(set.entries_between(date(2024, 1, 1), date(2024, 1, 5)).len(), 2);
        assert_eq!(set.entries_between(date(2024, 1, 2), date(2024, 1, 5)).len(), 1);
        assert!(set.entries_between(date(2024, 1, 5), date(2024, 1, 1)).is_empty());
    }

    #[test]
    fn empty_year_still_counts_as_populated() {
        let mut set = HolidaySet::new();
        set.insert_year(1950, Vec::new());
        assert!(set.is_populated(1950));
        assert!(set.is_empty());
    }
}
