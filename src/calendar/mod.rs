//! Generation of the 365 daily lesson records.
//!
//! Every record is a pure function of its day index and the calendar year:
//! the month picks a category and focus from a fixed table, the day index
//! picks texts from that category's lists, and the compass bearing is the day's
//! share of a full turn. Nothing is random, so generating twice for the same
//! year yields identical calendars.
//!
//! The generated set is returned as a [`LessonCalendar`] value which callers
//! build once at startup and pass by reference to whatever needs lookups.

mod content;
mod lookup;

pub use lookup::LessonCalendar;

use crate::constants::{
    COMPASS_SECTOR_DEGREES, DAYS_IN_CALENDAR, FULL_CIRCLE_DEGREES, LESSON_DATE_FORMAT,
};
use crate::errors::CalendarError;
use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// The ten thematic categories a lesson can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Faith,
    Hope,
    Love,
    Repentance,
    Service,
    Gratitude,
    Forgiveness,
    Patience,
    Humility,
    Courage,
}

impl Category {
    /// All categories in their canonical order.
    pub const ALL: [Category; 10] = [
        Category::Faith,
        Category::Hope,
        Category::Love,
        Category::Repentance,
        Category::Service,
        Category::Gratitude,
        Category::Forgiveness,
        Category::Patience,
        Category::Humility,
        Category::Courage,
    ];

    /// Lowercase label, as stored and displayed.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Faith => "faith",
            Category::Hope => "hope",
            Category::Love => "love",
            Category::Repentance => "repentance",
            Category::Service => "service",
            Category::Gratitude => "gratitude",
            Category::Forgiveness => "forgiveness",
            Category::Patience => "patience",
            Category::Humility => "humility",
            Category::Courage => "courage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

/// Category and title focus assigned to one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthTheme {
    /// Category of every lesson in the month
    pub category: Category,
    /// Label used as the prefix of each lesson title
    pub focus: &'static str,
}

/// Month themes indexed by zero-based month. Twelve months map onto ten
/// categories, so gratitude and hope appear twice.
pub const MONTH_THEMES: [MonthTheme; 12] = [
    MonthTheme { category: Category::Faith, focus: "New Beginnings and Faith" },
    MonthTheme { category: Category::Love, focus: "Love and Relationships" },
    MonthTheme { category: Category::Hope, focus: "Hope and Renewal" },
    MonthTheme { category: Category::Repentance, focus: "Repentance and Forgiveness" },
    MonthTheme { category: Category::Service, focus: "Service and Giving" },
    MonthTheme { category: Category::Gratitude, focus: "Gratitude and Appreciation" },
    MonthTheme { category: Category::Courage, focus: "Courage and Strength" },
    MonthTheme { category: Category::Patience, focus: "Patience and Endurance" },
    MonthTheme { category: Category::Humility, focus: "Humility and Learning" },
    MonthTheme { category: Category::Forgiveness, focus: "Forgiveness and Healing" },
    MonthTheme { category: Category::Gratitude, focus: "Thanksgiving and Praise" },
    MonthTheme { category: Category::Hope, focus: "Christmas Hope and Joy" },
];

/// Looks up the theme for a zero-based month index.
///
/// # Errors
///
/// Returns `CalendarError::MissingMonthTheme` if the table has no entry for `month0`.
pub fn theme_for_month(month0: usize) -> Result<&'static MonthTheme, CalendarError> {
    MONTH_THEMES
        .get(month0)
        .ok_or(CalendarError::MissingMonthTheme { month: month0 })
}

/// The sixteen points of the compass rose, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "NNE")]
    NorthNorthEast,
    #[serde(rename = "NE")]
    NorthEast,
    #[serde(rename = "ENE")]
    EastNorthEast,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "ESE")]
    EastSouthEast,
    #[serde(rename = "SE")]
    SouthEast,
    #[serde(rename = "SSE")]
    SouthSouthEast,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "SSW")]
    SouthSouthWest,
    #[serde(rename = "SW")]
    SouthWest,
    #[serde(rename = "WSW")]
    WestSouthWest,
    #[serde(rename = "W")]
    West,
    #[serde(rename = "WNW")]
    WestNorthWest,
    #[serde(rename = "NW")]
    NorthWest,
    #[serde(rename = "NNW")]
    NorthNorthWest,
}

impl CompassDirection {
    /// Directions in sector order, starting at north.
    pub const ALL: [CompassDirection; 16] = [
        CompassDirection::North,
        CompassDirection::NorthNorthEast,
        CompassDirection::NorthEast,
        CompassDirection::EastNorthEast,
        CompassDirection::East,
        CompassDirection::EastSouthEast,
        CompassDirection::SouthEast,
        CompassDirection::SouthSouthEast,
        CompassDirection::South,
        CompassDirection::SouthSouthWest,
        CompassDirection::SouthWest,
        CompassDirection::WestSouthWest,
        CompassDirection::West,
        CompassDirection::WestNorthWest,
        CompassDirection::NorthWest,
        CompassDirection::NorthNorthWest,
    ];

    /// Returns the direction whose 22.5° sector is nearest to `degrees`.
    ///
    /// Ties round up to the next sector, and 360° wraps back to north.
    ///
    /// # Examples
    ///
    /// ```
    /// use liahona::calendar::CompassDirection;
    ///
    /// assert_eq!(CompassDirection::from_degrees(0.0).label(), "N");
    /// assert_eq!(CompassDirection::from_degrees(180.0).label(), "S");
    /// assert_eq!(CompassDirection::from_degrees(360.0).label(), "N");
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        let sectors = Self::ALL.len() as i64;
        let index = (degrees / COMPASS_SECTOR_DEGREES).round() as i64;
        Self::ALL[index.rem_euclid(sectors) as usize]
    }

    /// Short label such as "N" or "WSW".
    pub fn label(self) -> &'static str {
        match self {
            CompassDirection::North => "N",
            CompassDirection::NorthNorthEast => "NNE",
            CompassDirection::NorthEast => "NE",
            CompassDirection::EastNorthEast => "ENE",
            CompassDirection::East => "E",
            CompassDirection::EastSouthEast => "ESE",
            CompassDirection::SouthEast => "SE",
            CompassDirection::SouthSouthEast => "SSE",
            CompassDirection::South => "S",
            CompassDirection::SouthSouthWest => "SSW",
            CompassDirection::SouthWest => "SW",
            CompassDirection::WestSouthWest => "WSW",
            CompassDirection::West => "W",
            CompassDirection::WestNorthWest => "WNW",
            CompassDirection::NorthWest => "NW",
            CompassDirection::NorthNorthWest => "NNW",
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compass bearing of a day: `round(day / 365 * 360)`.
///
/// The result never decreases as the day grows. Day 365 lands on 360, the
/// same bearing as north.
pub fn angle_for_day(day_index: u16) -> u16 {
    let share = f64::from(day_index) / f64::from(DAYS_IN_CALENDAR);
    (share * FULL_CIRCLE_DEGREES).round() as u16
}

/// Splits a "quote - Reference" scripture entry at its last separator.
fn split_scripture(entry: &str) -> (String, Option<String>) {
    match entry.rsplit_once(" - ") {
        Some((text, reference)) if !reference.trim().is_empty() => {
            (text.trim().to_string(), Some(reference.trim().to_string()))
        }
        _ => (entry.trim().to_string(), None),
    }
}

/// Picks the entry for a day from a cycling list.
fn pick(list: &'static [&'static str], day_index: u16) -> &'static str {
    list[(usize::from(day_index) - 1) % list.len()]
}

/// One day of the compass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLesson {
    /// 1-based position within the calendar
    pub day_index: u16,
    /// Calendar date within the generation year
    pub date: NaiveDate,
    /// Human-readable date, e.g. "January 1"
    pub formatted_date: String,
    /// Bearing in whole degrees
    pub angle_degrees: u16,
    /// Nearest of the sixteen compass points
    pub compass_direction: CompassDirection,
    /// Month focus followed by the day, e.g. "New Beginnings and Faith - Day 1"
    pub title: String,
    /// Category assigned to the lesson's month
    pub category: Category,
    /// Teaching for the day
    pub lesson_text: String,
    /// Quoted verse without its citation
    pub scripture_text: String,
    /// Citation for the verse, when the table entry carries one
    pub scripture_reference: Option<String>,
    /// Suggested way to live the lesson today
    pub application_text: String,
}

/// Builds the lesson calendar for one year.
///
/// # Examples
///
/// ```
/// use liahona::calendar::{CalendarGenerator, Category};
///
/// let calendar = CalendarGenerator::new(2025).generate().unwrap();
/// assert_eq!(calendar.len(), 365);
///
/// let first = calendar.get_by_day_index(1).unwrap();
/// assert_eq!(first.category, Category::Faith);
/// assert!(first.title.contains("Day 1"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarGenerator {
    year: i32,
}

impl CalendarGenerator {
    /// Creates a generator for the given calendar year.
    pub fn new(year: i32) -> Self {
        CalendarGenerator { year }
    }

    /// Creates a generator for the current local year.
    pub fn for_current_year() -> Self {
        Self::new(Local::now().year())
    }

    /// The year whose dates the generated records carry.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Generates all 365 records in ascending day order.
    ///
    /// # Errors
    ///
    /// Returns a `CalendarError` if a category has an empty text list, the
    /// month table lacks an entry, or the year cannot be represented.
    pub fn generate(&self) -> Result<LessonCalendar, CalendarError> {
        validate_content()?;

        let start = NaiveDate::from_ymd_opt(self.year, 1, 1)
            .ok_or(CalendarError::YearOutOfRange { year: self.year })?;

        let mut lessons = Vec::with_capacity(usize::from(DAYS_IN_CALENDAR));
        for day_index in 1..=DAYS_IN_CALENDAR {
            let date = start
                .checked_add_days(Days::new(u64::from(day_index - 1)))
                .ok_or(CalendarError::YearOutOfRange { year: self.year })?;
            lessons.push(build_lesson(day_index, date)?);
        }

        debug!(year = self.year, records = lessons.len(), "Generated lesson calendar");
        Ok(LessonCalendar::new(self.year, lessons))
    }
}

fn build_lesson(day_index: u16, date: NaiveDate) -> Result<DailyLesson, CalendarError> {
    let theme = theme_for_month(date.month0() as usize)?;
    let content = content::content_for(theme.category);
    let angle_degrees = angle_for_day(day_index);
    let (scripture_text, scripture_reference) =
        split_scripture(pick(content.scriptures, day_index));

    Ok(DailyLesson {
        day_index,
        date,
        formatted_date: date.format(LESSON_DATE_FORMAT).to_string(),
        angle_degrees,
        compass_direction: CompassDirection::from_degrees(f64::from(angle_degrees)),
        title: format!("{} - Day {}", theme.focus, day_index),
        category: theme.category,
        lesson_text: pick(content.lessons, day_index).to_string(),
        scripture_text,
        scripture_reference,
        application_text: pick(content.applications, day_index).to_string(),
    })
}

/// Checks that every category can supply all three kinds of text.
fn validate_content() -> Result<(), CalendarError> {
    for category in Category::ALL {
        let content = content::content_for(category);
        let lists = [
            ("scripture", content.scriptures),
            ("lesson", content.lessons),
            ("application", content.applications),
        ];
        for (kind, list) in lists {
            if list.is_empty() {
                return Err(CalendarError::EmptyContent {
                    category: category.to_string(),
                    kind,
                });
            }
        }
    }
    Ok(())
}
