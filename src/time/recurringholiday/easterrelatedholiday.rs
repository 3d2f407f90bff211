use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::holidayerror::HolidayError;
use super::recurringholiday::{
    RecurringHoliday,
    ResolvedDate
};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum EasterType {
    Western,
    Orthodox
}

/// Gregorian date of Easter Sunday, or `None` outside 1583..=4099.
///
/// Orthodox Easter is computed on the Julian calendar and converted to its
/// Gregorian date.
pub fn easter_sunday(year: i32, easter_type: EasterType) -> Option<NaiveDate> {
    if !(1583..=4099).contains(&year) {
        return None;
    }

    let g = year % 19;

    let p = match easter_type {
        EasterType::Orthodox => {
            let i = (19 * g + 15) % 30;
            let j = (year + year / 4 + i) % 7;
            let e = if year <= 1600 {
                10
            } else {
                10 + year / 100 - 16 - (year / 100 - 16) / 4
            };
            i - j + e
        },
        EasterType::Western => {
            let c = year / 100;
            let c_div_4 = c / 4;
            let h = (c - c_div_4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
            let h_div_28 = h / 28;
            let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - g) / 11));
            let j = (year + year / 4 + i + 2 - c + c_div_4) % 7;
            // may be negative (down to -6), keep signed until the end
            i - j
        }
    };

    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

#[derive(Clone, Debug)]
pub struct EasterRelatedHoliday {
    easter_type: EasterType,
    shift_days: i64
}

impl EasterRelatedHoliday {
    pub fn new(easter_type: EasterType, shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday {
            easter_type,
            shift_days
        }
    }

    pub fn easter_type(&self) -> EasterType {
        self.easter_type
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> Result<ResolvedDate, HolidayError> {
        easter_sunday(year, self.easter_type)
            .and_then(|easter_day| easter_day.checked_add_signed(Duration::days(self.shift_days)))
            .map(ResolvedDate::exact)
            .ok_or_else(|| HolidayError::date_unavailable(format!("{:?} Easter {:+}", self.easter_type, self.shift_days), year))
    }
}
