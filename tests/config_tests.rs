use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::tempdir;

use liahona::calendar::CalendarGenerator;
use liahona::config::Config;
use liahona::errors::AppError;

fn restore(name: &str, value: Option<String>) {
    match value {
        Some(val) => env::set_var(name, val),
        None => env::remove_var(name),
    }
}

#[test]
#[serial]
fn test_config_load_with_environment_vars() {
    let original_dir = env::var("LIAHONA_DIR").ok();
    let original_year = env::var("LIAHONA_YEAR").ok();

    let temp_dir = tempdir().unwrap();
    env::set_var("LIAHONA_DIR", temp_dir.path());
    env::set_var("LIAHONA_YEAR", "2031");

    let config = Config::load().unwrap();
    assert_eq!(config.data_dir, PathBuf::from(temp_dir.path()));
    assert_eq!(config.year(), 2031);
    assert_eq!(config.stories_path(), temp_dir.path().join("stories.json"));
    assert!(config.validate().is_ok());

    // The configured year drives generation
    let calendar = CalendarGenerator::new(config.year()).generate().unwrap();
    assert_eq!(calendar.get_by_day_index(1).unwrap().date.to_string(), "2031-01-01");

    restore("LIAHONA_DIR", original_dir);
    restore("LIAHONA_YEAR", original_year);
}

#[test]
#[serial]
fn test_config_rejects_bad_year() {
    let original_year = env::var("LIAHONA_YEAR").ok();

    env::set_var("LIAHONA_YEAR", "next year");
    match Config::load() {
        Err(AppError::Config(msg)) => assert!(msg.contains("LIAHONA_YEAR")),
        other => panic!("Expected a configuration error, got {:?}", other),
    }

    restore("LIAHONA_YEAR", original_year);
}

#[test]
#[serial]
fn test_config_validation_rejects_relative_dir() {
    let original_dir = env::var("LIAHONA_DIR").ok();

    env::set_var("LIAHONA_DIR", "stories/here");
    let config = Config::load().unwrap();
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    restore("LIAHONA_DIR", original_dir);
}
