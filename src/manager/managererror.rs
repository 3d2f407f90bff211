use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error("invalid holiday rule: {0}")]
    InvalidHolidayRule(String)
}

impl ManagerError {
    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }

    pub fn invalid_holiday_rule(message: impl Into<String>) -> ManagerError {
        ManagerError::InvalidHolidayRule(message.into())
    }
}

pub fn parse_json_value<T: DeserializeOwned>(json_value: serde_json::Value) -> Result<T, ManagerError> {
    serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
}
