//! Error handling utilities for the liahona application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Lookups never produce errors: a day outside the calendar is an absent value.
//! The errors below cover configuration, the lesson tables, and story storage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents problems with the fixed lesson tables detected while generating a calendar.
///
/// These are programming or configuration errors rather than runtime conditions.
/// There is no sensible fallback, so the binary aborts startup when one occurs.
///
/// # Examples
///
/// ```
/// use liahona::errors::CalendarError;
///
/// let error = CalendarError::MissingMonthTheme { month: 12 };
/// assert!(format!("{}", error).contains("month index 12"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The month table has no entry for a month the calendar needs.
    #[error("No theme configured for month index {month}. The month table must cover all twelve months.")]
    MissingMonthTheme {
        /// Zero-based month index that was looked up
        month: usize,
    },

    /// A category has an empty lesson, scripture or application list.
    #[error("The {kind} list for category '{category}' is empty")]
    EmptyContent {
        /// Category whose list is empty
        category: String,
        /// Which list ("lesson", "scripture" or "application")
        kind: &'static str,
    },

    /// January 1 of the requested year (or a later day) is outside the supported date range.
    #[error("Year {year} is outside the supported calendar range")]
    YearOutOfRange {
        /// The requested year
        year: i32,
    },
}

/// Represents errors that can occur when attempting to lock the story file.
///
/// # Examples
///
/// ```
/// use liahona::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::FileBusy {
///     path: PathBuf::from("/path/to/stories.json.lock"),
/// };
///
/// assert!(format!("{}", error).contains("another process"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// Error when the file is already locked by another process.
    #[error("Story file is currently being written by another process: {path}. Please try again in a moment.")]
    FileBusy {
        /// The path to the lock file
        path: PathBuf,
    },

    /// Error when acquiring the lock fails for a technical reason.
    #[error("Failed to acquire lock {path}: {source}. Please check file permissions and ensure the directory is accessible.")]
    AcquisitionFailed {
        /// The path to the lock file that couldn't be locked
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents failures of the story storage backend.
///
/// Readers of the story store degrade to an empty collection when they see one
/// of these; writers report it so the caller can keep the user's input.
///
/// # Examples
///
/// ```
/// use liahona::errors::StorageError;
///
/// let error = StorageError::UnsupportedVersion { found: 7, supported: 1 };
/// let message = format!("{}", error);
/// assert!(message.contains("7"));
/// assert!(message.contains("1"));
/// ```
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying storage could not be read or written.
    #[error("Story storage at {path} is unavailable: {source}")]
    Unavailable {
        /// Location of the storage
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The stored data could not be parsed or serialized.
    #[error("Story storage at {path} is corrupt: {source}")]
    Corrupt {
        /// Location of the storage
        path: PathBuf,
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// The stored data was written by a newer schema than this build understands.
    #[error("Story storage uses schema version {found}, but only versions up to {supported} are supported")]
    UnsupportedVersion {
        /// Version tag found in storage
        found: u32,
        /// Highest version this build can read
        supported: u32,
    },

    /// Locking the storage for a read-modify-write failed.
    #[error("{0}")]
    Lock(#[from] LockError),

    /// The in-memory backend's mutex was poisoned by a panicking writer.
    #[error("In-memory story storage is poisoned")]
    Poisoned,
}

/// Represents all possible errors that can occur in the liahona application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use liahona::errors::AppError;
///
/// let error = AppError::Config("Data directory path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Data directory path is empty");
/// ```
///
/// Converting from an IO error:
/// ```
/// use liahona::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem or terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors in the fixed lesson tables, fatal at startup.
    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Errors from the story storage backend.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// User input rejected by the command line (empty name, overlong story, bad date).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A requested lesson does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use liahona::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::InvalidInput("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;
    use std::io;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let app_io_error = AppError::Io(io_error);
        assert_eq!(format!("{}", app_io_error), "I/O error: permission denied");

        let input_error = AppError::InvalidInput("Author name is empty".to_string());
        assert_eq!(
            format!("{}", input_error),
            "Invalid input: Author name is empty"
        );

        let calendar_error = AppError::Calendar(CalendarError::EmptyContent {
            category: "faith".to_string(),
            kind: "lesson",
        });
        let message = format!("{}", calendar_error);
        assert!(message.starts_with("Calendar error"));
        assert!(message.contains("lesson list for category 'faith'"));
    }

    #[test]
    fn test_lock_error_conversion_to_storage_error() {
        let lock_error = LockError::FileBusy {
            path: PathBuf::from("/data/stories.json.lock"),
        };
        let storage_error: StorageError = lock_error.into();
        let app_error: AppError = storage_error.into();

        let message = format!("{}", app_error);
        assert!(message.contains("Storage error"));
        assert!(message.contains("/data/stories.json.lock"));
    }

    #[test]
    fn test_storage_error_source_chaining() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "read-only filesystem");
        let error = StorageError::Unavailable {
            path: PathBuf::from("/data/stories.json"),
            source: io_error,
        };

        let source = error.source().expect("Unavailable should carry a source");
        assert_eq!(source.to_string(), "read-only filesystem");

        let app_error = AppError::Storage(error);
        let source = app_error.source().expect("AppError should chain to StorageError");
        assert!(source.to_string().contains("unavailable"));
    }

    #[test]
    fn test_corrupt_error_wraps_serde_error() {
        let parse_error = serde_json::from_str::<Vec<u32>>("{not json").unwrap_err();
        let error = StorageError::Corrupt {
            path: PathBuf::from("/data/stories.json"),
            source: parse_error,
        };
        assert!(format!("{}", error).contains("corrupt"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_result_combinators() {
        let io_result: Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::Other, "test error"));
        let app_result: AppResult<()> = io_result.map_err(AppError::Io);

        match app_result {
            Err(AppError::Io(inner)) => {
                assert_eq!(inner.kind(), io::ErrorKind::Other);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }
}
