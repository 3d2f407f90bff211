use std::sync::Arc;

use crate::time::lunar::lunardateestimator::LunarDateEstimator;
use crate::time::lunar::lunarholidayid::LunarHolidayId;
use crate::time::lunar::lunaroverridetable::LunarOverrideTable;
use crate::time::recurringholiday::easterrelatedholiday::EasterType;
use crate::time::recurringholiday::holidayrule::HolidayRule;
use crate::time::recurringholiday::observedadjustment::NonWorkingDayShift;
use crate::time::weekdaymask::WeekdayMask;

use super::holidayruleengine::HolidayRuleEngine;
use super::jurisdictionprofile::JurisdictionProfile;

/// Independence year. No holidays are produced up to and including it.
pub const UGANDA_EPOCH_YEAR: i32 = 1962;

pub const UGANDA_CODES: [&str; 3] = ["UG", "UGA", "UGN"];

/// Announced dates of the two Eids; other years fall back to the tabular estimate.
pub fn uganda_lunar_overrides() -> LunarOverrideTable {
    LunarOverrideTable::new()
        .with_dates(LunarHolidayId::EidAlAdha, &[
            (2017, 9, 1),
            (2018, 8, 21),
            (2019, 8, 11),
            (2020, 7, 31)
        ])
        .with_dates(LunarHolidayId::EidAlFitr, &[
            (2017, 6, 25),
            (2018, 6, 14),
            (2019, 6, 3),
            (2020, 5, 24)
        ])
}

pub fn uganda_rules(estimator: &Arc<LunarDateEstimator>) -> Vec<HolidayRule> {
    vec![
        HolidayRule::fixed("New Year's Day", 1, 1).observed(1),
        HolidayRule::easter_related("Good Friday", EasterType::Western, -2),
        HolidayRule::easter_related("Easter Monday", EasterType::Western, 1),
        HolidayRule::fixed("Labour Day", 5, 1).observed(1),
        HolidayRule::fixed("Liberation Day", 1, 26).introduced_in(1986).observed(1),
        HolidayRule::fixed("Archbishop Janani Luwum Day", 2, 16).introduced_in(2015).observed(1),
        HolidayRule::fixed("Uganda Martyrs' Day", 6, 3).observed(1),
        HolidayRule::fixed("National Heroes' Day", 6, 9).observed(1),
        HolidayRule::fixed("Independence Day", 10, 9).observed(1),
        HolidayRule::lunar("Eid al-Fitr", LunarHolidayId::EidAlFitr, estimator.clone()),
        HolidayRule::lunar("Eid al-Adha", LunarHolidayId::EidAlAdha, estimator.clone()),
        // +2 steps over Boxing Day
        HolidayRule::fixed("Christmas Day", 12, 25).observed(2),
        HolidayRule::fixed("Boxing Day", 12, 26).observed(1),
    ]
}

pub fn uganda() -> Arc<JurisdictionProfile> {
    let estimator = Arc::new(LunarDateEstimator::with_tabular_fallback(uganda_lunar_overrides()));
    let engine = HolidayRuleEngine::new(
        UGANDA_EPOCH_YEAR,
        uganda_rules(&estimator),
        Arc::new(NonWorkingDayShift::sunday())
    );
    Arc::new(JurisdictionProfile::new(
        "Uganda",
        UGANDA_CODES.iter().map(|code| code.to_string()).collect(),
        WeekdayMask::saturday_and_sunday(),
        engine
    ))
}
