use thiserror::Error;

/// Reasons a holiday rule yields no entry for a year.
///
/// None of these escape `HolidayRuleEngine::populate`; they are logged and
/// the rule is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HolidayError {
    #[error("year {year} is not after the epoch year {epoch_year}")]
    EpochTooEarly { year: i32, epoch_year: i32 },

    #[error("'{name}' is only observed from {introduced_year}, requested {year}")]
    RuleNotYetIntroduced { name: String, year: i32, introduced_year: i32 },

    #[error("'{name}' was discontinued in {discontinued_year}, requested {year}")]
    RuleDiscontinued { name: String, year: i32, discontinued_year: i32 },

    #[error("no date available for '{name}' in {year}")]
    DateUnavailable { name: String, year: i32 },

    #[error("'{name}' belongs to a category that was not requested")]
    CategoryNotRequested { name: String },
}

impl HolidayError {
    pub fn date_unavailable(name: impl Into<String>, year: i32) -> HolidayError {
        HolidayError::DateUnavailable { name: name.into(), year }
    }
}
