use std::sync::Arc;

use serde::{
    Serialize,
    Deserialize
};

use crate::time::lunar::lunardateestimator::LunarDateEstimator;
use crate::time::lunar::lunarholidayid::LunarHolidayId;

use super::easterrelatedholiday::{
    EasterRelatedHoliday,
    EasterType
};
use super::fixeddateholiday::FixedDateHoliday;
use super::holidayerror::HolidayError;
use super::lunarholiday::LunarHoliday;
use super::recurringholiday::RecurringHoliday;

#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum HolidayCategory {
    #[default]
    Public,
    Bank
}

/// A named holiday together with the years it applies to and its observance.
#[derive(Clone)]
pub struct HolidayRule {
    name: String,
    recurring_holiday: Arc<dyn RecurringHoliday>,
    introduced_year: Option<i32>,
    discontinued_year: Option<i32>,
    observed_shift_days: Option<i64>,
    category: HolidayCategory
}

impl HolidayRule {
    pub fn new(name: impl Into<String>, recurring_holiday: Arc<dyn RecurringHoliday>) -> HolidayRule {
        HolidayRule {
            name: name.into(),
            recurring_holiday,
            introduced_year: None,
            discontinued_year: None,
            observed_shift_days: None,
            category: HolidayCategory::Public
        }
    }

    pub fn fixed(name: impl Into<String>, month: u32, day: u32) -> HolidayRule {
        HolidayRule::new(name, Arc::new(FixedDateHoliday::new(month, day)))
    }

    pub fn easter_related(name: impl Into<String>, easter_type: EasterType, shift_days: i64) -> HolidayRule {
        HolidayRule::new(name, Arc::new(EasterRelatedHoliday::new(easter_type, shift_days)))
    }

    pub fn lunar(name: impl Into<String>, holiday: LunarHolidayId, estimator: Arc<LunarDateEstimator>) -> HolidayRule {
        HolidayRule::new(name, Arc::new(LunarHoliday::new(holiday, estimator)))
    }

    /// First year the holiday exists.
    pub fn introduced_in(mut self, year: i32) -> HolidayRule {
        self.introduced_year = Some(year);
        self
    }

    /// First year the holiday no longer exists.
    pub fn discontinued_in(mut self, year: i32) -> HolidayRule {
        self.discontinued_year = Some(year);
        self
    }

    pub fn observed(mut self, shift_days: i64) -> HolidayRule {
        self.observed_shift_days = Some(shift_days);
        self
    }

    pub fn in_category(mut self, category: HolidayCategory) -> HolidayRule {
        self.category = category;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn recurring_holiday(&self) -> &Arc<dyn RecurringHoliday> {
        &self.recurring_holiday
    }

    pub fn introduced_year(&self) -> Option<i32> {
        self.introduced_year
    }

    pub fn discontinued_year(&self) -> Option<i32> {
        self.discontinued_year
    }

    pub fn observed_shift_days(&self) -> Option<i64> {
        self.observed_shift_days
    }

    pub fn category(&self) -> HolidayCategory {
        self.category
    }

    pub fn check_year(&self, year: i32) -> Result<(), HolidayError> {
        if let Some(introduced_year) = self.introduced_year {
            if year < introduced_year {
                return Err(HolidayError::RuleNotYetIntroduced {
                    name: self.name.clone(),
                    year,
                    introduced_year
                });
            }
        }
        if let Some(discontinued_year) = self.discontinued_year {
            if year >= discontinued_year {
                return Err(HolidayError::RuleDiscontinued {
                    name: self.name.clone(),
                    year,
                    discontinued_year
                });
            }
        }
        Ok(())
    }
}
