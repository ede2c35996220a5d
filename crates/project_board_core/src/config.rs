//! Runtime configuration for form rules and logging.
//!
//! # Responsibility
//! - Hold the input form's validation limits.
//! - Resolve logging settings from environment overrides.
//!
//! # Invariants
//! - Defaults reproduce the board's standard form: title required,
//!   description at least 5 characters, 1 to 5 people.

use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "PROJECT_BOARD_LOG_LEVEL";
/// Environment variable enabling file logging into a directory.
pub const LOG_DIR_ENV: &str = "PROJECT_BOARD_LOG_DIR";

const DEFAULT_DESCRIPTION_MIN_LENGTH: usize = 5;
const DEFAULT_PEOPLE_MIN: u32 = 1;
const DEFAULT_PEOPLE_MAX: u32 = 5;

/// Validation limits applied by the input view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRules {
    pub title_required: bool,
    pub description_min_length: usize,
    pub people_min: u32,
    pub people_max: u32,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title_required: true,
            description_min_length: DEFAULT_DESCRIPTION_MIN_LENGTH,
            people_min: DEFAULT_PEOPLE_MIN,
            people_max: DEFAULT_PEOPLE_MAX,
        }
    }
}

impl FormRules {
    /// Rejects rule sets no input could ever satisfy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.people_min > self.people_max {
            return Err(ConfigError::InvalidPeopleRange {
                min: self.people_min,
                max: self.people_max,
            });
        }
        Ok(())
    }
}

/// Logging settings resolved before `init_logging`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    /// `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl LogSettings {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through an arbitrary key lookup.
    ///
    /// Blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(raw) = non_blank(lookup(LOG_LEVEL_ENV)) {
            settings.level = raw;
        }
        if let Some(raw) = non_blank(lookup(LOG_DIR_ENV)) {
            let path = PathBuf::from(&raw);
            if !path.is_absolute() {
                return Err(ConfigError::RelativeLogDir(raw));
            }
            settings.log_dir = Some(path);
        }

        Ok(settings)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPeopleRange { min: u32, max: u32 },
    RelativeLogDir(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPeopleRange { min, max } => {
                write!(f, "people_min ({min}) must be <= people_max ({max})")
            }
            Self::RelativeLogDir(value) => {
                write!(f, "{LOG_DIR_ENV} must be an absolute path, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, FormRules, LogSettings, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use crate::logging::default_log_level;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_rules_match_standard_form() {
        let rules = FormRules::default();
        assert!(rules.title_required);
        assert_eq!(rules.description_min_length, 5);
        assert_eq!((rules.people_min, rules.people_max), (1, 5));
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn inverted_people_range_is_rejected() {
        let rules = FormRules {
            people_min: 6,
            people_max: 2,
            ..FormRules::default()
        };
        assert_eq!(
            rules.validate().unwrap_err(),
            ConfigError::InvalidPeopleRange { min: 6, max: 2 }
        );
    }

    #[test]
    fn log_settings_default_when_env_is_blank() {
        let settings = LogSettings::from_lookup(lookup_from(&[(LOG_LEVEL_ENV, "  ")])).unwrap();
        assert_eq!(settings.level, default_log_level());
        assert_eq!(settings.log_dir, None);
    }

    #[test]
    fn log_settings_reject_relative_dir() {
        let err = LogSettings::from_lookup(lookup_from(&[(LOG_DIR_ENV, "logs")])).unwrap_err();
        assert_eq!(err, ConfigError::RelativeLogDir("logs".to_string()));
    }

    #[test]
    fn log_settings_read_level_override() {
        let settings = LogSettings::from_lookup(lookup_from(&[(LOG_LEVEL_ENV, "trace")])).unwrap();
        assert_eq!(settings.level, "trace");
    }
}
