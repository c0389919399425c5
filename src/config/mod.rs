//! Configuration management for the liahona application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `LIAHONA_DIR`: Directory holding persisted stories (defaults to ~/.local/share/liahona)
//! - `LIAHONA_YEAR`: Calendar year to generate lessons for (defaults to the current year)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DATA_SUBDIR, ENV_VAR_HOME, ENV_VAR_LIAHONA_DIR, ENV_VAR_LIAHONA_YEAR,
    STORIES_FILE_NAME,
};
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Local};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the liahona application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use liahona::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
///     calendar_year: Some(2025),
/// };
/// assert_eq!(config.year(), 2025);
/// assert!(config.stories_path().ends_with("stories.json"));
/// ```
pub struct Config {
    /// Directory where the story file lives.
    ///
    /// Loaded from `LIAHONA_DIR` with a fallback to `~/.local/share/liahona`.
    pub data_dir: PathBuf,

    /// Year the lesson calendar is generated for. `None` means the current year.
    pub calendar_year: Option<i32>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .field("calendar_year", &self.calendar_year)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory is expanded with `shellexpand`, so `~` and
    /// `$VARIABLE` references are resolved.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails or yields an empty path
    /// - `LIAHONA_YEAR` is set but is not an integer
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use liahona::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Stories live in {:?}", config.stories_path()),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_LIAHONA_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let calendar_year = match env::var(ENV_VAR_LIAHONA_YEAR) {
            Ok(raw) => Some(Self::parse_year(&raw)?),
            Err(_) => None,
        };

        Ok(Config {
            data_dir,
            calendar_year,
        })
    }

    fn parse_year(raw: &str) -> AppResult<i32> {
        raw.trim().parse::<i32>().map_err(|_| {
            AppError::Config(format!(
                "{} must be a calendar year such as 2025, got '{}'",
                ENV_VAR_LIAHONA_YEAR, raw
            ))
        })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Data directory path is empty"
    /// - "Data directory must be an absolute path"
    ///
    /// # Examples
    ///
    /// ```
    /// use liahona::Config;
    /// use std::path::PathBuf;
    ///
    /// let valid = Config { data_dir: PathBuf::from("/absolute/path"), calendar_year: None };
    /// assert!(valid.validate().is_ok());
    ///
    /// let relative = Config { data_dir: PathBuf::from("relative"), calendar_year: None };
    /// assert!(relative.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }

    /// The calendar year in effect: the override, or the current local year.
    pub fn year(&self) -> i32 {
        self.calendar_year.unwrap_or_else(|| Local::now().year())
    }

    /// Location of the persisted story file.
    pub fn stories_path(&self) -> PathBuf {
        self.data_dir.join(STORIES_FILE_NAME)
    }
}
