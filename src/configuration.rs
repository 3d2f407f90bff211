use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::jurisdiction::jurisdictionmanager::{
    JurisdictionLoader,
    JurisdictionManager,
    builtin_builder
};
use crate::manager::managererror::ManagerError;
use crate::manager::manager::IManager;
use crate::time::calendar::calendaroptions::CalendarOptions;
use crate::time::calendar::jurisdictioncalendar::JurisdictionCalendar;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    jurisdictions: Vec<serde_json::Value>,
    #[serde(default)]
    calendar_options: CalendarOptions
}

/// Frozen jurisdiction registry plus the options calendars are built with
/// unless told otherwise.
pub struct Configuration {
    jurisdiction_manager: JurisdictionManager,
    calendar_options: CalendarOptions
}

impl Configuration {
    /// Built-in jurisdictions, default options.
    pub fn new() -> Configuration {
        Configuration {
            jurisdiction_manager: JurisdictionManager::new(),
            calendar_options: CalendarOptions::default()
        }
    }

    /// Built-in jurisdictions plus those defined in the file at `file_path`.
    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Configuration::from_json_prop(json_prop)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Configuration::from_json_prop(json_prop)
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration, ManagerError> {
        let mut builder = builtin_builder();
        JurisdictionLoader.insert_obj_from_json_vec(&mut builder, &json_prop.jurisdictions, &())?;
        let jurisdiction_manager = JurisdictionManager::from_builder(builder);
        info!(
            "configuration loaded: {} jurisdiction definitions, codes {:?}",
            json_prop.jurisdictions.len(),
            jurisdiction_manager.codes()
        );
        Ok(Configuration {
            jurisdiction_manager,
            calendar_options: json_prop.calendar_options
        })
    }

    pub fn jurisdiction_manager(&self) -> &JurisdictionManager {
        &self.jurisdiction_manager
    }

    pub fn calendar_options(&self) -> &CalendarOptions {
        &self.calendar_options
    }

    pub fn calendar(&self, code: &str, options: CalendarOptions) -> Result<JurisdictionCalendar, ManagerError> {
        self.jurisdiction_manager.calendar(code, options)
    }

    /// Calendar for `code` with the configured options.
    pub fn default_calendar(&self, code: &str) -> Result<JurisdictionCalendar, ManagerError> {
        self.calendar(code, self.calendar_options.clone())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
