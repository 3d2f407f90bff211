use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use icu_calendar::{Date, islamic::IslamicCivil};

use crate::time::recurringholiday::holidayerror::HolidayError;

use super::lunarholidayid::LunarHolidayId;

/// Mapping from a lunar holiday to a Gregorian date.
pub trait LunarCalendarConversion: Send + Sync {
    fn lunar_to_gregorian(&self, holiday: LunarHolidayId, year: i32) -> Result<NaiveDate, HolidayError>;
}

/// Gregorian years covered by the published Umm al-Qura tables (1343–1500 AH).
pub const DEFAULT_MIN_YEAR: i32 = 1924;
pub const DEFAULT_MAX_YEAR: i32 = 2077;

/// Tabular (civil, Friday epoch) Islamic calendar backed by ICU's
/// `IslamicCivil`.
///
/// Real observance follows moon sighting and routinely differs from this
/// arithmetic by a day or two, so every date it produces is an estimate.
#[derive(Clone, Debug)]
pub struct TabularIslamicCalendar {
    supported_years: RangeInclusive<i32>
}

impl TabularIslamicCalendar {
    pub fn new() -> TabularIslamicCalendar {
        TabularIslamicCalendar::with_supported_years(DEFAULT_MIN_YEAR..=DEFAULT_MAX_YEAR)
    }

    pub fn with_supported_years(supported_years: RangeInclusive<i32>) -> TabularIslamicCalendar {
        TabularIslamicCalendar { supported_years }
    }

    pub fn supported_years(&self) -> &RangeInclusive<i32> {
        &self.supported_years
    }

    pub fn hijri_to_gregorian(hijri_year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        if hijri_year < 1 {
            return None;
        }
        let hijri_date = Date::try_new_islamic_civil_date_with_calendar(
            hijri_year,
            u8::try_from(month).ok()?,
            u8::try_from(day).ok()?,
            IslamicCivil::new()
        ).ok()?;

        let iso_date = hijri_date.to_iso();
        NaiveDate::from_ymd_opt(
            iso_date.year().number,
            iso_date.month().ordinal as u32,
            iso_date.day_of_month().0 as u32
        )
    }
}

impl Default for TabularIslamicCalendar {
    fn default() -> Self {
        TabularIslamicCalendar::new()
    }
}

impl LunarCalendarConversion for TabularIslamicCalendar {
    /// A Hijri date can fall twice in one Gregorian year; the earlier one is returned.
    fn lunar_to_gregorian(&self, holiday: LunarHolidayId, year: i32) -> Result<NaiveDate, HolidayError> {
        let unavailable = || HolidayError::date_unavailable(holiday.to_string(), year);
        if !self.supported_years.contains(&year) {
            return Err(unavailable());
        }

        let (month, day) = holiday.hijri_month_day();
        // 32 Gregorian years span roughly 33 Hijri years
        let approx_hijri_year = (year - 622) * 33 / 32;
        (approx_hijri_year - 2..=approx_hijri_year + 2)
            .filter_map(|hijri_year| TabularIslamicCalendar::hijri_to_gregorian(hijri_year, month, day))
            .filter(|d| d.year() == year)
            .min()
            .ok_or_else(unavailable)
    }
}
