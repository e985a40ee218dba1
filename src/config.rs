use crate::error::{config_error, ScheduleResult};
use crate::schedule::models::Shift;
use crate::schedule::time::{is_valid_time, time_to_minutes};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

/// Default start of the shift a new schedule group is seeded with
pub const DEFAULT_SHIFT_START: &str = "09:00";

/// Default end of the seeded shift
pub const DEFAULT_SHIFT_END: &str = "17:00";

/// Default label of the seeded shift
pub const DEFAULT_SHIFT_DESCRIPTION: &str = "Regular Shift";

/// Main configuration structure for the scheduling core
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Start time (HH:MM) of the shift template for new schedule groups
    pub default_shift_start: String,
    /// End time (HH:MM) of the shift template
    pub default_shift_end: String,
    /// Label of the shift template
    pub default_shift_description: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_shift_start: DEFAULT_SHIFT_START.to_string(),
            default_shift_end: DEFAULT_SHIFT_END.to_string(),
            default_shift_description: DEFAULT_SHIFT_DESCRIPTION.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> ScheduleResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let mut config = Config::default();

        // Load defaults from file if it exists
        if let Ok(content) = fs::read_to_string("config/defaults.toml") {
            config = toml::from_str::<Config>(&content)?;
        }

        // Environment variables take precedence over the file
        if let Ok(start) = env::var("DEFAULT_SHIFT_START") {
            config.default_shift_start = start;
        }
        if let Ok(end) = env::var("DEFAULT_SHIFT_END") {
            config.default_shift_end = end;
        }
        if let Ok(description) = env::var("DEFAULT_SHIFT_DESCRIPTION") {
            config.default_shift_description = description;
        }

        config.check_times()?;
        Ok(config)
    }

    /// The shift every new schedule group starts out with
    pub fn default_shift(&self) -> Shift {
        Shift::new(
            self.default_shift_start.clone(),
            self.default_shift_end.clone(),
            Some(self.default_shift_description.clone()),
        )
    }

    /// Reject a configured shift template that could never validate
    fn check_times(&self) -> ScheduleResult<()> {
        if !is_valid_time(&self.default_shift_start) {
            return Err(config_error(&format!(
                "Invalid default shift start time: {}",
                self.default_shift_start
            )));
        }
        if !is_valid_time(&self.default_shift_end) {
            return Err(config_error(&format!(
                "Invalid default shift end time: {}",
                self.default_shift_end
            )));
        }
        if time_to_minutes(&self.default_shift_end) <= time_to_minutes(&self.default_shift_start) {
            return Err(config_error(
                "Default shift end time must be after its start time",
            ));
        }
        Ok(())
    }
}
