use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::ui::clock::ClockStyle;
use crate::ui::session::SessionTiming;

const SETTINGS_DIR_NAME: &str = "matching-game";
const SETTINGS_FILE_NAME: &str = "settings.json";
const SETTINGS_ENV_VAR: &str = "MATCHING_GAME_SETTINGS";

pub const DEFAULT_CONCEALMENT_DELAY_MS: u64 = 750;
pub const DEFAULT_CLOCK_INTERVAL_MS: u64 = 1000;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub concealment_delay_ms: u64,
    pub clock_interval_ms: u64,
    pub clock_style: ClockStyle,
    pub match_sound: Option<PathBuf>,
    pub mismatch_sound: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            concealment_delay_ms: DEFAULT_CONCEALMENT_DELAY_MS,
            clock_interval_ms: DEFAULT_CLOCK_INTERVAL_MS,
            clock_style: ClockStyle::default(),
            match_sound: None,
            mismatch_sound: None,
        }
    }
}

impl Settings {
    pub fn timing(&self) -> SessionTiming {
        SessionTiming {
            concealment_delay: Duration::from_millis(self.concealment_delay_ms),
            clock_interval: Duration::from_millis(self.clock_interval_ms),
            clock_style: self.clock_style,
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.concealment_delay_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "concealment_delay_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.clock_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                key: "clock_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(self)
    }
}

pub fn settings_path() -> PathBuf {
    if let Some(path) = std::env::var_os(SETTINGS_ENV_VAR) {
        return PathBuf::from(path);
    }
    glib::user_config_dir()
        .join(SETTINGS_DIR_NAME)
        .join(SETTINGS_FILE_NAME)
}

pub fn parse_settings(raw: &str) -> Result<Settings, ConfigError> {
    let settings: Settings = serde_json::from_str(raw)?;
    settings.validate()
}

pub fn read_settings(path: &Path) -> Result<Option<Settings>, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    parse_settings(&raw).map(Some)
}

/// Loads user settings, falling back to defaults when the file is missing or broken.
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

pub fn load_settings_from(path: &Path) -> Settings {
    match read_settings(path) {
        Ok(Some(settings)) => {
            info!(path = %path.display(), "loaded settings");
            settings
        }
        Ok(None) => Settings::default(),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring settings file");
            Settings::default()
        }
    }
}
