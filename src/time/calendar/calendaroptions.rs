use std::collections::BTreeSet;

use serde::{
    Serialize,
    Deserialize
};

use crate::time::recurringholiday::holidayrule::HolidayCategory;

fn default_observed() -> bool {
    true
}

fn default_categories() -> BTreeSet<HolidayCategory> {
    BTreeSet::from([HolidayCategory::Public])
}

/// Per-calendar switches: substitute days on or off, and which holiday
/// categories are evaluated.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct CalendarOptions {
    #[serde(default = "default_observed")]
    observed: bool,
    #[serde(default = "default_categories")]
    categories: BTreeSet<HolidayCategory>
}

impl CalendarOptions {
    pub fn new() -> CalendarOptions {
        CalendarOptions {
            observed: default_observed(),
            categories: default_categories()
        }
    }

    /// Public holidays plus the bank-only ones.
    pub fn banking() -> CalendarOptions {
        CalendarOptions::new().with_categories([HolidayCategory::Public, HolidayCategory::Bank])
    }

    pub fn with_observed(mut self, observed: bool) -> CalendarOptions {
        self.observed = observed;
        self
    }

    pub fn with_categories<I: IntoIterator<Item = HolidayCategory>>(mut self, categories: I) -> CalendarOptions {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn observed(&self) -> bool {
        self.observed
    }

    pub fn categories(&self) -> &BTreeSet<HolidayCategory> {
        &self.categories
    }

    #[inline]
    pub fn includes(&self, category: HolidayCategory) -> bool {
        self.categories.contains(&category)
    }
}

impl Default for CalendarOptions {
    fn default() -> Self {
        CalendarOptions::new()
    }
}
