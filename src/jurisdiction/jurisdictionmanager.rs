use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use chrono::Weekday;
use log::debug;
use serde::Deserialize;
use serde_json;

use crate::manager::manager::{IManager, Manager, ManagerBuilder};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::manager::namedobject::NamedJsonObject;
use crate::time::calendar::calendaroptions::CalendarOptions;
use crate::time::calendar::jurisdictioncalendar::JurisdictionCalendar;
use crate::time::lunar::lunardateestimator::LunarDateEstimator;
use crate::time::recurringholiday::observedadjustment::NonWorkingDayShift;
use crate::time::recurringholiday::recurringholidaymanager::{
    holiday_rule_from_json,
    lunar_override_table_from_json
};
use crate::time::weekdaymask::WeekdayMask;

use super::holidayruleengine::HolidayRuleEngine;
use super::jurisdictionprofile::JurisdictionProfile;
use super::uganda::uganda;

fn default_non_working_days() -> HashSet<Weekday> {
    HashSet::from([Weekday::Sun])
}

fn default_weekends() -> HashSet<Weekday> {
    HashSet::from([Weekday::Sat, Weekday::Sun])
}

#[derive(Deserialize)]
struct JurisdictionJsonProp {
    epoch_year: i32,
    #[serde(default = "default_non_working_days")]
    non_working_days: HashSet<Weekday>,
    #[serde(default = "default_weekends")]
    weekends: HashSet<Weekday>,
    rules: Vec<serde_json::Value>,
    #[serde(default)]
    lunar_overrides: Vec<serde_json::Value>
}

/// Registers `profile` under each of its codes, uppercased.
pub fn register(builder: &mut ManagerBuilder<JurisdictionProfile>, profile: Arc<JurisdictionProfile>) {
    for code in profile.codes() {
        builder.insert(code.to_uppercase(), profile.clone());
    }
}

/// Builder already holding the jurisdictions shipped with the crate.
pub fn builtin_builder() -> ManagerBuilder<JurisdictionProfile> {
    let mut builder = ManagerBuilder::new();
    register(&mut builder, uganda());
    builder
}

/// Reads jurisdiction definitions from JSON.
pub struct JurisdictionLoader;

impl IManager<JurisdictionProfile, ()> for JurisdictionLoader {
    fn insert_obj_from_json(&self,
                            builder: &mut ManagerBuilder<JurisdictionProfile>,
                            json_value: serde_json::Value,
                            _supports: &()) -> Result<(), ManagerError> {
        let named_obj: NamedJsonObject = parse_json_value(json_value.clone())?;
        let json_prop: JurisdictionJsonProp = parse_json_value(json_value)?;
        if json_prop.weekends.len() == 7 {
            return Err(ManagerError::invalid_holiday_rule(format!(
                "'{}' declares every weekday a weekend",
                named_obj.name()
            )));
        }

        let override_table = lunar_override_table_from_json(&json_prop.lunar_overrides)?;
        let estimator = Arc::new(LunarDateEstimator::with_tabular_fallback(override_table));
        let rules = json_prop.rules
            .into_iter()
            .map(|rule_json| holiday_rule_from_json(rule_json, &estimator))
            .collect::<Result<Vec<_>, ManagerError>>()?;
        debug!("loaded jurisdiction '{}' with {} rules", named_obj.name(), rules.len());

        let engine = HolidayRuleEngine::new(
            json_prop.epoch_year,
            rules,
            Arc::new(NonWorkingDayShift::new(&json_prop.non_working_days))
        );
        let profile = JurisdictionProfile::new(
            named_obj.name().to_owned(),
            named_obj.keys().iter().map(|code| code.to_uppercase()).collect(),
            WeekdayMask::new(&json_prop.weekends),
            engine
        );
        register(builder, Arc::new(profile));
        Ok(())
    }
}

/// Read-only registry from jurisdiction code to profile.
pub struct JurisdictionManager {
    profiles: Manager<JurisdictionProfile>
}

impl JurisdictionManager {
    /// Registry of the built-in jurisdictions only.
    pub fn new() -> JurisdictionManager {
        JurisdictionManager::from_builder(builtin_builder())
    }

    /// Built-in jurisdictions plus those defined in the file at `file_path`,
    /// which holds either one jurisdiction object or an array of them.
    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<JurisdictionManager, ManagerError> {
        let mut builder = builtin_builder();
        JurisdictionLoader.from_reader(&mut builder, file_path, &())?;
        Ok(JurisdictionManager::from_builder(builder))
    }

    pub fn from_builder(builder: ManagerBuilder<JurisdictionProfile>) -> JurisdictionManager {
        JurisdictionManager { profiles: builder.build() }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, code: &str) -> Result<Arc<JurisdictionProfile>, ManagerError> {
        self.profiles.get(&code.to_uppercase())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.profiles.contains(&code.to_uppercase())
    }

    pub fn codes(&self) -> Vec<&str> {
        self.profiles.names()
    }

    /// A fresh calendar with an empty cache.
    pub fn calendar(&self, code: &str, options: CalendarOptions) -> Result<JurisdictionCalendar, ManagerError> {
        Ok(JurisdictionCalendar::new(self.get(code)?, options))
    }
}

impl Default for JurisdictionManager {
    fn default() -> Self {
        JurisdictionManager::new()
    }
}
