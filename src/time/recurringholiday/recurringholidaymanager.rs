use std::sync::Arc;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json;

use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::lunar::lunardateestimator::LunarDateEstimator;
use crate::time::lunar::lunarholidayid::LunarHolidayId;
use crate::time::lunar::lunaroverridetable::LunarOverrideTable;

use super::easterrelatedholiday::{
    EasterType,
    EasterRelatedHoliday
};
use super::fixeddateholiday::FixedDateHoliday;
use super::holidayrule::{HolidayCategory, HolidayRule};
use super::lunarholiday::LunarHoliday;
use super::recurringholiday::RecurringHoliday;

#[derive(Deserialize)]
struct EasterRelatedHolidayJsonProp {
    easter_type: EasterType,
    shift_days: i64
}

fn easter_related_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: EasterRelatedHolidayJsonProp = parse_json_value(json)?;
    let holiday: Arc<dyn RecurringHoliday> = Arc::new(EasterRelatedHoliday::new(json_prop.easter_type, json_prop.shift_days));
    Ok(holiday)
}

#[derive(Deserialize)]
struct FixedDateHolidayJsonProp {
    month: u32,
    day: u32
}

fn fixed_date_holiday_from_json(json: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: FixedDateHolidayJsonProp = parse_json_value(json)?;
    let holiday = FixedDateHoliday::try_new(json_prop.month, json_prop.day)
        .ok_or_else(|| ManagerError::invalid_holiday_rule(
            format!("month {} day {} is not a calendar date", json_prop.month, json_prop.day)
        ))?;
    Ok(Arc::new(holiday))
}

#[derive(Deserialize)]
struct LunarHolidayJsonProp {
    lunar_holiday: LunarHolidayId
}

fn lunar_holiday_from_json(json: serde_json::Value, estimator: &Arc<LunarDateEstimator>) -> Result<Arc<dyn RecurringHoliday>, ManagerError> {
    let json_prop: LunarHolidayJsonProp = parse_json_value(json)?;
    let holiday: Arc<dyn RecurringHoliday> = Arc::new(LunarHoliday::new(json_prop.lunar_holiday, estimator.clone()));
    Ok(holiday)
}

#[derive(Deserialize)]
enum HolidayType {
    EasterRelated,
    FixedDate,
    Lunar
}

#[derive(Deserialize)]
struct HolidayRuleJsonProp {
    holiday_name: String,
    holiday_type: HolidayType,
    #[serde(default)]
    introduced_year: Option<i32>,
    #[serde(default)]
    discontinued_year: Option<i32>,
    #[serde(default)]
    observed_shift_days: Option<i64>,
    #[serde(default)]
    category: HolidayCategory
}

/// Builds one rule from its JSON object. Lunar rules resolve through `estimator`.
pub fn holiday_rule_from_json(json: serde_json::Value, estimator: &Arc<LunarDateEstimator>) -> Result<HolidayRule, ManagerError> {
    let json_prop: HolidayRuleJsonProp = parse_json_value(json.clone())?;
    let recurring_holiday = match json_prop.holiday_type {
        HolidayType::EasterRelated => easter_related_holiday_from_json(json)?,
        HolidayType::FixedDate     => fixed_date_holiday_from_json(json)?,
        HolidayType::Lunar         => lunar_holiday_from_json(json, estimator)?
    };

    if let (Some(introduced_year), Some(discontinued_year)) = (json_prop.introduced_year, json_prop.discontinued_year) {
        if discontinued_year <= introduced_year {
            return Err(ManagerError::invalid_holiday_rule(format!(
                "'{}' is discontinued in {} before its introduction in {}",
                json_prop.holiday_name, discontinued_year, introduced_year
            )));
        }
    }

    let mut rule = HolidayRule::new(json_prop.holiday_name, recurring_holiday).in_category(json_prop.category);
    if let Some(year) = json_prop.introduced_year {
        rule = rule.introduced_in(year);
    }
    if let Some(year) = json_prop.discontinued_year {
        rule = rule.discontinued_in(year);
    }
    if let Some(shift_days) = json_prop.observed_shift_days {
        rule = rule.observed(shift_days);
    }
    Ok(rule)
}

#[derive(Deserialize)]
struct LunarOverrideJsonProp {
    lunar_holiday: LunarHolidayId,
    year: i32,
    month: u32,
    day: u32
}

/// Collects the announced dates of lunar holidays into a table.
pub fn lunar_override_table_from_json(json_vec: &[serde_json::Value]) -> Result<LunarOverrideTable, ManagerError> {
    let mut table = LunarOverrideTable::new();
    for j in json_vec.iter() {
        let json_prop: LunarOverrideJsonProp = parse_json_value(j.clone())?;
        if NaiveDate::from_ymd_opt(json_prop.year, json_prop.month, json_prop.day).is_none() {
            return Err(ManagerError::invalid_holiday_rule(format!(
                "override for {} in {} has no date {}-{}",
                json_prop.lunar_holiday, json_prop.year, json_prop.month, json_prop.day
            )));
        }
        table.insert(json_prop.lunar_holiday, json_prop.year, json_prop.month, json_prop.day);
    }
    Ok(table)
}
