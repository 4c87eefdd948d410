//! Viewer configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{TimetableError, TimetableResult};

static DEFAULT_CALENDAR_FILE: &str = "ADECal (1).ics";

fn default_calendar_file() -> PathBuf {
    PathBuf::from(DEFAULT_CALENDAR_FILE)
}

/// Language used for weekday/month names and the connecting words of the
/// schedule line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl std::str::FromStr for Language {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fr" => Ok(Language::Fr),
            "en" => Ok(Language::En),
            other => Err(TimetableError::Config(format!(
                "Unknown language '{other}'. Expected 'fr' or 'en'"
            ))),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = TimetableError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Configuration at ~/.config/timetable/config.toml
///
/// Every key can also be set through a `TIMETABLE_`-prefixed environment
/// variable, e.g. `TIMETABLE_CALENDAR_FILE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableConfig {
    #[serde(default = "default_calendar_file")]
    pub calendar_file: PathBuf,

    #[serde(default)]
    pub language: Language,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        TimetableConfig {
            calendar_file: default_calendar_file(),
            language: Language::default(),
        }
    }
}

impl TimetableConfig {
    pub fn config_path() -> TimetableResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TimetableError::Config("Could not determine config directory".into()))?
            .join("timetable");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> TimetableResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Layer the config file (if present) and the environment over the defaults.
    pub fn load_from(path: &Path) -> TimetableResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("TIMETABLE"))
            .build()
            .map_err(|e| TimetableError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| TimetableError::Config(e.to_string()))
    }

    /// Calendar file path with `~` expanded.
    pub fn calendar_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.calendar_file.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    pub fn to_toml(&self) -> TimetableResult<String> {
        toml::to_string_pretty(self).map_err(|e| TimetableError::Config(e.to_string()))
    }

    /// Default config.toml text, with every option commented out.
    pub fn default_contents() -> String {
        format!(
            "\
# timetable configuration

# Calendar file to read (~ is expanded):
# calendar_file = \"{DEFAULT_CALENDAR_FILE}\"

# Language for day and month names (\"fr\" or \"en\"):
# language = \"fr\"
"
        )
    }

    /// Write [`Self::default_contents`] to `path`.
    /// Returns false if a file already exists at `path`.
    pub fn create_default_config(path: &Path) -> TimetableResult<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                TimetableError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, Self::default_contents())
            .map_err(|e| TimetableError::Config(format!("Could not write config file: {e}")))?;

        Ok(true)
    }
}
