//! Constants used throughout the application.
//!
//! This module contains all constants used in the Liahona application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "liahona";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A spiritual compass of 365 daily lessons and family stories";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the data directory.
pub const ENV_VAR_LIAHONA_DIR: &str = "LIAHONA_DIR";
/// Environment variable overriding the calendar year.
pub const ENV_VAR_LIAHONA_YEAR: &str = "LIAHONA_YEAR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory for application data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/liahona";

// Calendar
/// Number of lesson records generated per year, regardless of leap years.
pub const DAYS_IN_CALENDAR: u16 = 365;
/// Degrees in a full turn of the compass.
pub const FULL_CIRCLE_DEGREES: f64 = 360.0;
/// Angular width of one of the sixteen compass sectors.
pub const COMPASS_SECTOR_DEGREES: f64 = 22.5;
/// Date format used for `formatted_date` ("January 1").
pub const LESSON_DATE_FORMAT: &str = "%B %-d";

// Date parsing
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";

// Family stories
/// Soft limit on story length, enforced by the command line only.
pub const STORY_CONTENT_SOFT_LIMIT: usize = 500;
/// Name of the file holding persisted stories.
pub const STORIES_FILE_NAME: &str = "stories.json";
/// Extension appended to the stories file name for its advisory lock.
pub const LOCK_FILE_EXTENSION: &str = "lock";
/// Current schema version of the persisted story file.
pub const STORY_SCHEMA_VERSION: u32 = 1;

// File System Parameters
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "liahona";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
