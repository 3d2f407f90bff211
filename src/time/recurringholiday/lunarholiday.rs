use std::sync::Arc;

use crate::time::lunar::lunardateestimator::LunarDateEstimator;
use crate::time::lunar::lunarholidayid::LunarHolidayId;

use super::holidayerror::HolidayError;
use super::recurringholiday::{
    RecurringHoliday,
    ResolvedDate
};

#[derive(Clone)]
pub struct LunarHoliday {
    holiday: LunarHolidayId,
    estimator: Arc<LunarDateEstimator>
}

impl LunarHoliday {
    pub fn new(holiday: LunarHolidayId, estimator: Arc<LunarDateEstimator>) -> LunarHoliday {
        LunarHoliday { holiday, estimator }
    }

    pub fn holiday(&self) -> LunarHolidayId {
        self.holiday
    }

    pub fn estimator(&self) -> &Arc<LunarDateEstimator> {
        &self.estimator
    }
}

impl RecurringHoliday for LunarHoliday {
    fn get_holiday(&self, year: i32) -> Result<ResolvedDate, HolidayError> {
        self.estimator.resolve(self.holiday, year)
    }
}
