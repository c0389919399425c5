//! Sharing and listing family stories.

use crate::calendar::LessonCalendar;
use crate::constants::STORY_CONTENT_SOFT_LIMIT;
use crate::errors::{AppError, AppResult};
use crate::stories::{
    generation_summary, recent_first, FamilyStory, Generation, StoryStorage, StoryStore,
};
use chrono::{DateTime, Local, Utc};
use std::io::Write;

use super::capitalize;

/// Validates user input and submits a story for a day of the calendar.
///
/// Names and content are trimmed before they are stored.
///
/// # Errors
///
/// Returns `AppError::InvalidInput` if the day is not in the calendar, the
/// trimmed name or content is empty, or the content is longer than the soft
/// limit. Returns `AppError::Storage` if the story could not be saved.
pub fn share_story<S: StoryStorage, W: Write>(
    calendar: &LessonCalendar,
    store: &StoryStore<S>,
    day_index: u16,
    author_name: &str,
    generation: Generation,
    content: &str,
    out: &mut W,
) -> AppResult<FamilyStory> {
    if calendar.get_by_day_index(day_index).is_none() {
        return Err(AppError::InvalidInput(format!(
            "Day {} is not in the calendar (expected 1-{})",
            day_index,
            calendar.len()
        )));
    }

    let author_name = author_name.trim();
    if author_name.is_empty() {
        return Err(AppError::InvalidInput("Author name cannot be empty".to_string()));
    }

    let content = content.trim();
    if content.is_empty() {
        return Err(AppError::InvalidInput("Story cannot be empty".to_string()));
    }

    let length = content.chars().count();
    if length > STORY_CONTENT_SOFT_LIMIT {
        return Err(AppError::InvalidInput(format!(
            "Story is {} characters long; please keep it to {} or fewer",
            length, STORY_CONTENT_SOFT_LIMIT
        )));
    }

    let story = store.submit(day_index, author_name, generation, content)?;
    writeln!(out, "Shared story {} for day {}", story.id, story.day_index)?;
    Ok(story)
}

/// Lists stories newest first, optionally for a single day.
pub fn list_stories<S: StoryStorage, W: Write>(
    store: &StoryStore<S>,
    day_index: Option<u16>,
    out: &mut W,
) -> AppResult<()> {
    let stories = match day_index {
        Some(day_index) => store.list_for_day(day_index),
        None => store.list_all(),
    };
    write_story_list(&recent_first(stories), out)
}

/// Renders stories in the given order followed by a per-generation summary.
pub(crate) fn write_story_list<W: Write>(stories: &[FamilyStory], out: &mut W) -> AppResult<()> {
    if stories.is_empty() {
        writeln!(out, "No family stories yet. Be the first to share one!")?;
        return Ok(());
    }

    let now = Utc::now();
    writeln!(out, "Family stories ({})", stories.len())?;
    for story in stories {
        writeln!(
            out,
            "- [Day {}] {} ({}) on {} ({})",
            story.day_index,
            story.author_name,
            capitalize(story.author_generation.as_str()),
            story
                .submitted_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M"),
            time_ago(story.submitted_at, now)
        )?;
        for line in story.content.lines() {
            writeln!(out, "    {}", line)?;
        }
    }

    let voices: Vec<String> = generation_summary(stories)
        .into_iter()
        .map(|(generation, count)| format!("{}s: {}", capitalize(generation.as_str()), count))
        .collect();
    writeln!(out, "Voices from our family: {}", voices.join(", "))?;
    Ok(())
}

/// Describes how long before `now` a story was shared, e.g. "3 days ago".
///
/// Months count as 30 days and years as 365. Times in the future read as
/// "just now".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    if elapsed.num_minutes() < 1 {
        return "just now".to_string();
    }

    let (count, unit) = if elapsed.num_hours() < 1 {
        (elapsed.num_minutes(), "minute")
    } else if elapsed.num_days() < 1 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_days() < 30 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_days() < 365 {
        (elapsed.num_days() / 30, "month")
    } else {
        (elapsed.num_days() / 365, "year")
    };

    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}
