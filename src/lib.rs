/*!
# Liahona

Liahona is a spiritual compass of 365 daily lessons. Each day of the year has a
lesson, a scripture and a suggested application, themed by month and placed on
a compass bearing. Families can attach short stories to any day; stories are
kept locally and never synchronized anywhere.

## Core Features

- Generate the full year of lessons deterministically
- Look up the lesson for today, for any date, or for a day of the year
- Share family stories about a day and list them back, newest first
- Summarize how the year is divided between the ten categories

## Architecture

- `calendar`: Lesson generation and lookup (`CalendarGenerator`, `LessonCalendar`)
- `stories`: The story store and its storage backends
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `cli` / `ops`: The command-line front end

## Usage Example

```rust
use liahona::calendar::CalendarGenerator;
use liahona::stories::{Generation, MemoryStorage, StoryStore};

fn main() -> liahona::AppResult<()> {
    // Build the calendar once and pass it where it is needed
    let calendar = CalendarGenerator::new(2025).generate()?;
    let lesson = calendar.get_by_day_index(1).expect("day 1 exists");
    assert_eq!(lesson.category.as_str(), "faith");

    let store = StoryStore::new(MemoryStorage::new());
    store.submit(lesson.day_index, "Grandma", Generation::Grandparent, "Lovely lesson")?;
    assert_eq!(store.list_for_day(1).len(), 1);
    Ok(())
}
```
*/

/// Lesson generation and lookup
pub mod calendar;
/// Command-line interface handling using clap
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Operations behind the command-line subcommands
pub mod ops;
/// Family story store and storage backends
pub mod stories;

// Re-export important types for convenience
pub use calendar::{CalendarGenerator, Category, CompassDirection, DailyLesson, LessonCalendar};
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use stories::{FamilyStory, Generation, StoryStore};
