//! Showing lessons and the category overview.

use crate::calendar::{DailyLesson, LessonCalendar};
use crate::errors::{AppError, AppResult};
use crate::stories::{recent_first, FamilyStory, StoryStorage, StoryStore};
use chrono::{Duration, Local, NaiveDate};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

use super::stories::write_story_list;
use super::capitalize;

#[derive(Serialize)]
struct LessonView<'a> {
    lesson: &'a DailyLesson,
    stories: &'a [FamilyStory],
}

/// Shows the lesson for the current local date.
pub fn show_today<S: StoryStorage, W: Write>(
    calendar: &LessonCalendar,
    store: &StoryStore<S>,
    json: bool,
    out: &mut W,
) -> AppResult<()> {
    let lesson = calendar
        .get_today()
        .ok_or_else(|| AppError::NotFound("No lesson found for today".to_string()))?;
    show_lesson(lesson, store, json, out)
}

/// Shows the lesson for a 1-based day of the year.
pub fn show_day<S: StoryStorage, W: Write>(
    calendar: &LessonCalendar,
    store: &StoryStore<S>,
    day_index: u16,
    json: bool,
    out: &mut W,
) -> AppResult<()> {
    let lesson = calendar.get_by_day_index(day_index).ok_or_else(|| {
        AppError::NotFound(format!("No lesson found for day {}", day_index))
    })?;
    show_lesson(lesson, store, json, out)
}

/// Shows the lesson for the ordinal day of `date`.
pub fn show_date<S: StoryStorage, W: Write>(
    calendar: &LessonCalendar,
    store: &StoryStore<S>,
    date: NaiveDate,
    json: bool,
    out: &mut W,
) -> AppResult<()> {
    let lesson = calendar
        .get_by_date(date)
        .ok_or_else(|| AppError::NotFound(format!("No lesson found for {}", date)))?;
    show_lesson(lesson, store, json, out)
}

/// Shows the lesson `offset` days away from the current local date.
///
/// Crossing a year boundary lands on the ordinal day of the other year, so
/// tomorrow on December 31 is day 1.
pub fn show_relative_day<S: StoryStorage, W: Write>(
    calendar: &LessonCalendar,
    store: &StoryStore<S>,
    offset: i64,
    json: bool,
    out: &mut W,
) -> AppResult<()> {
    let today = Local::now().date_naive();
    let date = today
        .checked_add_signed(Duration::days(offset))
        .ok_or_else(|| AppError::NotFound(format!("No date {} days from {}", offset, today)))?;
    show_date(calendar, store, date, json, out)
}

fn show_lesson<S: StoryStorage, W: Write>(
    lesson: &DailyLesson,
    store: &StoryStore<S>,
    json: bool,
    out: &mut W,
) -> AppResult<()> {
    debug!(day_index = lesson.day_index, "Showing lesson");
    let stories = recent_first(store.list_for_day(lesson.day_index));

    if json {
        let view = LessonView {
            lesson,
            stories: &stories,
        };
        serde_json::to_writer_pretty(&mut *out, &view)
            .map_err(|e| AppError::Io(e.into()))?;
        writeln!(out)?;
        return Ok(());
    }

    write_lesson(lesson, out)?;
    writeln!(out)?;
    write_story_list(&stories, out)?;
    Ok(())
}

/// Renders one lesson as plain text.
pub fn write_lesson<W: Write>(lesson: &DailyLesson, out: &mut W) -> AppResult<()> {
    writeln!(out, "{}", lesson.title)?;
    writeln!(
        out,
        "{} - Day {} - {}° {} - {}",
        lesson.formatted_date,
        lesson.day_index,
        lesson.angle_degrees,
        lesson.compass_direction,
        capitalize(lesson.category.as_str())
    )?;
    writeln!(out)?;
    match &lesson.scripture_reference {
        Some(reference) => writeln!(out, "Scripture: \"{}\" ({})", lesson.scripture_text, reference)?,
        None => writeln!(out, "Scripture: \"{}\"", lesson.scripture_text)?,
    }
    writeln!(out, "Lesson: {}", lesson.lesson_text)?;
    writeln!(out, "Today: {}", lesson.application_text)?;
    Ok(())
}

/// Lists how many days each category covers.
pub fn show_categories<W: Write>(calendar: &LessonCalendar, out: &mut W) -> AppResult<()> {
    writeln!(out, "Spiritual categories for {}", calendar.year())?;
    for (category, days) in calendar.category_counts() {
        writeln!(out, "  {:<12} {:>3} days", capitalize(category.as_str()), days)?;
    }
    Ok(())
}
