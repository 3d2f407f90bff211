use std::sync::Arc;

use log::debug;

use crate::time::recurringholiday::holidayerror::HolidayError;
use crate::time::recurringholiday::recurringholiday::ResolvedDate;

use super::lunarconversion::{
    LunarCalendarConversion,
    TabularIslamicCalendar
};
use super::lunarholidayid::LunarHolidayId;
use super::lunaroverridetable::LunarOverrideTable;

/// Resolves lunar holidays from the override table first and falls back to
/// arithmetic conversion, flagging fallback dates as estimated.
pub struct LunarDateEstimator {
    override_table: LunarOverrideTable,
    conversion: Arc<dyn LunarCalendarConversion>
}

impl LunarDateEstimator {
    pub fn new(override_table: LunarOverrideTable, conversion: Arc<dyn LunarCalendarConversion>) -> LunarDateEstimator {
        LunarDateEstimator { override_table, conversion }
    }

    pub fn with_tabular_fallback(override_table: LunarOverrideTable) -> LunarDateEstimator {
        LunarDateEstimator::new(override_table, Arc::new(TabularIslamicCalendar::new()))
    }

    pub fn override_table(&self) -> &LunarOverrideTable {
        &self.override_table
    }

    pub fn resolve(&self, holiday: LunarHolidayId, year: i32) -> Result<ResolvedDate, HolidayError> {
        if let Some(observed) = self.override_table.get(holiday, year) {
            return Ok(ResolvedDate::exact(observed));
        }

        debug!("no observed date for {} in {}, estimating", holiday, year);
        self.conversion
            .lunar_to_gregorian(holiday, year)
            .map(ResolvedDate::estimated)
    }
}
