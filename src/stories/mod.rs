//! Family stories: short reflections shared about a day's lesson.
//!
//! Stories are local to one data directory. They are appended and read back,
//! never edited or deleted by the application. Validation of names and
//! content belongs to the caller; the store keeps whatever it is given.

pub mod storage;

pub use storage::{JsonFileStorage, MemoryStorage, StoryStorage};

use crate::errors::{AppResult, StorageError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Which generation of the family a story's author belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    Grandparent,
    Parent,
    Child,
    Grandchild,
    Other,
}

impl Generation {
    /// All generations, eldest first.
    pub const ALL: [Generation; 5] = [
        Generation::Grandparent,
        Generation::Parent,
        Generation::Child,
        Generation::Grandchild,
        Generation::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Generation::Grandparent => "grandparent",
            Generation::Parent => "parent",
            Generation::Child => "child",
            Generation::Grandchild => "grandchild",
            Generation::Other => "other",
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Generation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Generation::ALL
            .iter()
            .copied()
            .find(|generation| generation.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown generation '{}' (expected one of: grandparent, parent, child, grandchild, other)",
                    s
                )
            })
    }
}

/// One submitted reflection.
///
/// Field names follow the persisted layout. The aliases accept the field
/// names used by the browser edition's unversioned storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyStory {
    pub id: Uuid,
    pub author_name: String,
    pub author_generation: Generation,
    pub content: String,
    #[serde(alias = "timestamp")]
    pub submitted_at: DateTime<Utc>,
    /// Day of the calendar the story belongs to; not range-checked.
    #[serde(alias = "dayOfYear")]
    pub day_index: u16,
}

/// Append-only log of family stories over a pluggable backend.
///
/// # Examples
///
/// ```
/// use liahona::stories::{Generation, MemoryStorage, StoryStore};
///
/// let store = StoryStore::new(MemoryStorage::new());
/// store.submit(5, "Grandma", Generation::Grandparent, "Lovely lesson").unwrap();
///
/// let stories = store.list_for_day(5);
/// assert_eq!(stories.len(), 1);
/// assert_eq!(stories[0].author_name, "Grandma");
/// assert!(store.list_for_day(6).is_empty());
/// ```
#[derive(Debug)]
pub struct StoryStore<S: StoryStorage> {
    storage: S,
}

impl<S: StoryStorage> StoryStore<S> {
    pub fn new(storage: S) -> Self {
        StoryStore { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Records a new story stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the backend cannot persist the story.
    /// Nothing is partially written in that case.
    pub fn submit(
        &self,
        day_index: u16,
        author_name: &str,
        author_generation: Generation,
        content: &str,
    ) -> AppResult<FamilyStory> {
        self.submit_at(day_index, author_name, author_generation, content, Utc::now())
    }

    /// Records a new story with an explicit submission time.
    pub fn submit_at(
        &self,
        day_index: u16,
        author_name: &str,
        author_generation: Generation,
        content: &str,
        submitted_at: DateTime<Utc>,
    ) -> AppResult<FamilyStory> {
        let story = FamilyStory {
            id: Uuid::new_v4(),
            author_name: author_name.to_string(),
            author_generation,
            content: content.to_string(),
            submitted_at,
            day_index,
        };

        self.storage.append(&story)?;
        info!(story_id = %story.id, day_index, generation = %author_generation, "Story submitted");
        Ok(story)
    }

    /// Every stored story in stored order.
    ///
    /// # Errors
    ///
    /// Returns the backend's `StorageError` unchanged.
    pub fn try_list_all(&self) -> Result<Vec<FamilyStory>, StorageError> {
        self.storage.load()
    }

    /// Every stored story in stored order, or nothing if storage is unavailable.
    pub fn list_all(&self) -> Vec<FamilyStory> {
        match self.try_list_all() {
            Ok(stories) => {
                debug!(count = stories.len(), "Loaded stories");
                stories
            }
            Err(e) => {
                warn!("Could not read stories, showing none: {}", e);
                Vec::new()
            }
        }
    }

    /// Stories for one day, in stored order.
    pub fn list_for_day(&self, day_index: u16) -> Vec<FamilyStory> {
        self.list_all()
            .into_iter()
            .filter(|story| story.day_index == day_index)
            .collect()
    }
}

/// Sorts stories newest first. Stories with equal timestamps keep their
/// stored order.
pub fn recent_first(mut stories: Vec<FamilyStory>) -> Vec<FamilyStory> {
    stories.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    stories
}

/// Number of stories per generation, eldest first, omitting generations
/// with no stories.
pub fn generation_summary(stories: &[FamilyStory]) -> Vec<(Generation, usize)> {
    Generation::ALL
        .iter()
        .map(|&generation| {
            let count = stories
                .iter()
                .filter(|story| story.author_generation == generation)
                .count();
            (generation, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    struct UnavailableStorage;

    impl StoryStorage for UnavailableStorage {
        fn load(&self) -> Result<Vec<FamilyStory>, StorageError> {
            Err(StorageError::Unavailable {
                path: "/unavailable".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "disabled"),
            })
        }

        fn save(&self, _stories: &[FamilyStory]) -> Result<(), StorageError> {
            Err(StorageError::Unavailable {
                path: "/unavailable".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "quota exceeded"),
            })
        }
    }

    #[test]
    fn test_submit_then_list_for_day() {
        let store = StoryStore::new(MemoryStorage::new());
        let story = store
            .submit(5, "Grandma", Generation::Grandparent, "Lovely lesson")
            .unwrap();

        let for_day = store.list_for_day(5);
        assert_eq!(for_day, vec![story.clone()]);
        assert_eq!(for_day[0].author_name, "Grandma");
        assert_eq!(for_day[0].day_index, 5);
        assert!(store.list_for_day(6).is_empty());
    }

    #[test]
    fn test_same_day_stories_keep_submission_order() {
        let store = StoryStore::new(MemoryStorage::new());
        let first = store.submit(12, "Ana", Generation::Child, "One").unwrap();
        store.submit(13, "Ben", Generation::Parent, "Other day").unwrap();
        let second = store.submit(12, "Cy", Generation::Other, "Two").unwrap();

        assert_eq!(store.list_for_day(12), vec![first, second]);
        assert_eq!(store.list_all().len(), 3);
    }

    #[test]
    fn test_ids_are_unique() {
        let store = StoryStore::new(MemoryStorage::new());
        let a = store.submit(1, "A", Generation::Parent, "x").unwrap();
        let b = store.submit(1, "A", Generation::Parent, "x").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_empty_strings_are_stored_as_given() {
        let store = StoryStore::new(MemoryStorage::new());
        let story = store.submit(400, "", Generation::Other, "").unwrap();
        assert_eq!(story.author_name, "");
        assert_eq!(store.list_for_day(400), vec![story]);
    }

    #[test]
    fn test_unavailable_storage_degrades_reads_and_fails_writes() {
        let store = StoryStore::new(UnavailableStorage);

        assert!(store.list_all().is_empty());
        assert!(store.list_for_day(5).is_empty());
        assert!(store.try_list_all().is_err());

        let result = store.submit(5, "Grandma", Generation::Grandparent, "Lovely lesson");
        assert!(matches!(result, Err(crate::errors::AppError::Storage(_))));
    }

    #[test]
    fn test_recent_first() {
        let base = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let store = StoryStore::new(MemoryStorage::new());
        let older = store
            .submit_at(60, "A", Generation::Parent, "older", base)
            .unwrap();
        let newer = store
            .submit_at(60, "B", Generation::Child, "newer", base + Duration::hours(2))
            .unwrap();

        let sorted = recent_first(store.list_for_day(60));
        assert_eq!(sorted, vec![newer, older]);
    }

    #[test]
    fn test_generation_summary() {
        let store = StoryStore::new(MemoryStorage::new());
        store.submit(1, "A", Generation::Parent, "x").unwrap();
        store.submit(1, "B", Generation::Grandparent, "y").unwrap();
        store.submit(1, "C", Generation::Parent, "z").unwrap();

        let summary = generation_summary(&store.list_all());
        assert_eq!(
            summary,
            vec![(Generation::Grandparent, 1), (Generation::Parent, 2)]
        );
    }

    #[test]
    fn test_generation_parsing() {
        assert_eq!("Grandchild".parse::<Generation>(), Ok(Generation::Grandchild));
        let err = "cousin".parse::<Generation>().unwrap_err();
        assert!(err.contains("cousin"));
    }
}
