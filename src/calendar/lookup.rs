//! Read-only queries over a generated calendar.

use super::{Category, DailyLesson};
use chrono::{Datelike, Local, NaiveDate};

/// The immutable set of daily lessons for one year.
///
/// Records are stored in day order, so the record for day `n` lives at
/// position `n - 1` and every lookup by day is a direct index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonCalendar {
    year: i32,
    lessons: Vec<DailyLesson>,
}

impl LessonCalendar {
    pub(crate) fn new(year: i32, lessons: Vec<DailyLesson>) -> Self {
        debug_assert!(lessons
            .iter()
            .enumerate()
            .all(|(i, lesson)| usize::from(lesson.day_index) == i + 1));
        LessonCalendar { year, lessons }
    }

    /// Year the calendar was generated for.
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// All records in ascending day order.
    pub fn iter(&self) -> impl Iterator<Item = &DailyLesson> {
        self.lessons.iter()
    }

    /// Returns the record for a 1-based day index, or `None` outside the calendar.
    ///
    /// # Examples
    ///
    /// ```
    /// use liahona::calendar::CalendarGenerator;
    ///
    /// let calendar = CalendarGenerator::new(2025).generate().unwrap();
    /// assert_eq!(calendar.get_by_day_index(42).unwrap().day_index, 42);
    /// assert!(calendar.get_by_day_index(0).is_none());
    /// assert!(calendar.get_by_day_index(366).is_none());
    /// ```
    pub fn get_by_day_index(&self, day_index: u16) -> Option<&DailyLesson> {
        let position = usize::from(day_index).checked_sub(1)?;
        self.lessons.get(position)
    }

    /// Returns the record for the ordinal day of `date` within its own year.
    ///
    /// The year of `date` does not have to match the calendar's year. Leap
    /// years are not special-cased: from February 29 on, a leap-year date maps
    /// to the lesson one position later, and December 31 of a leap year has
    /// no lesson.
    pub fn get_by_date(&self, date: NaiveDate) -> Option<&DailyLesson> {
        let ordinal = u16::try_from(date.ordinal()).ok()?;
        self.get_by_day_index(ordinal)
    }

    /// Returns the record for the current local date.
    pub fn get_today(&self) -> Option<&DailyLesson> {
        self.get_by_date(Local::now().date_naive())
    }

    /// Records belonging to one category, in day order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &DailyLesson> {
        self.lessons
            .iter()
            .filter(move |lesson| lesson.category == category)
    }

    /// Number of days assigned to each category, in `Category::ALL` order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&category| (category, self.by_category(category).count()))
            .collect()
    }
}
