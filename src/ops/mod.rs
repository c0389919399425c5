//! User-facing operations behind the command-line subcommands.
//!
//! Each operation takes the calendar and story store it needs by reference
//! and writes its output to any `Write`, so the binary passes stdout and tests
//! pass a buffer.

pub mod lesson;
pub mod stories;

pub use lesson::{
    show_categories, show_date, show_day, show_relative_day, show_today, write_lesson,
};
pub use stories::{list_stories, share_story, time_ago};

use crate::calendar::LessonCalendar;
use crate::cli::Command;
use crate::errors::AppResult;
use crate::stories::{StoryStorage, StoryStore};
use std::io::Write;

/// Runs one parsed subcommand.
pub fn run<S: StoryStorage, W: Write>(
    command: Command,
    calendar: &LessonCalendar,
    store: &StoryStore<S>,
    out: &mut W,
) -> AppResult<()> {
    match command {
        Command::Today { json } => show_today(calendar, store, json, out),
        Command::Day { day_index, json } => show_day(calendar, store, day_index, json, out),
        Command::Date { date, json } => show_date(calendar, store, date, json, out),
        Command::Yesterday { json } => show_relative_day(calendar, store, -1, json, out),
        Command::Tomorrow { json } => show_relative_day(calendar, store, 1, json, out),
        Command::Share {
            day,
            author,
            generation,
            content,
        } => share_story(calendar, store, day, &author, generation, &content, out).map(|_| ()),
        Command::Stories { day } => list_stories(store, day, out),
        Command::Categories => show_categories(calendar, out),
    }
}

/// Upper-cases the first character of a label.
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarGenerator;
    use crate::stories::{Generation, MemoryStorage};

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("grandparent"), "Grandparent");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_run_dispatches_share_then_stories() {
        let calendar = CalendarGenerator::new(2025).generate().unwrap();
        let store = StoryStore::new(MemoryStorage::new());
        let mut out = Vec::new();

        run(
            Command::Share {
                day: 10,
                author: "Ana".to_string(),
                generation: Generation::Child,
                content: "Thankful today".to_string(),
            },
            &calendar,
            &store,
            &mut out,
        )
        .unwrap();
        run(Command::Stories { day: Some(10) }, &calendar, &store, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("for day 10"));
        assert!(output.contains("Ana (Child)"));
    }
}
