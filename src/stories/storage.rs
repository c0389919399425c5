//! Storage backends for family stories.
//!
//! The store only needs two capabilities from its backend: load the whole
//! collection and save it back. [`JsonFileStorage`] keeps the collection in a
//! single versioned JSON file; [`MemoryStorage`] keeps it in process memory.

use super::FamilyStory;
use crate::constants::{LOCK_FILE_EXTENSION, STORY_SCHEMA_VERSION};
use crate::errors::{LockError, StorageError};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

/// Load/save capability the story store is written against.
pub trait StoryStorage {
    /// Reads every persisted story in stored order.
    fn load(&self) -> Result<Vec<FamilyStory>, StorageError>;

    /// Replaces the persisted collection.
    fn save(&self, stories: &[FamilyStory]) -> Result<(), StorageError>;

    /// Appends one story. Backends that can be shared between processes
    /// override this to hold a lock across the read-modify-write.
    fn append(&self, story: &FamilyStory) -> Result<(), StorageError> {
        let mut stories = self.load()?;
        stories.push(story.clone());
        self.save(&stories)
    }
}

/// On-disk layout of the story file.
#[derive(Debug, Serialize)]
struct StoryFile {
    version: u32,
    stories: Vec<FamilyStory>,
}

/// Version tag read ahead of the records, whose shape depends on it.
#[derive(Debug, Deserialize)]
struct StoryEnvelope {
    version: u32,
    stories: serde_json::Value,
}

/// Stores stories in one JSON file.
///
/// Saves write a sibling temp file and rename it over the target, so readers
/// never see a half-written collection. Appends hold an exclusive advisory
/// lock on `<file>.lock` for the whole read-modify-write.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a backend for the given file. Nothing is touched on disk
    /// until the first load or save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".");
        name.push(LOCK_FILE_EXTENSION);
        PathBuf::from(name)
    }

    fn unavailable(&self, source: io::Error) -> StorageError {
        StorageError::Unavailable {
            path: self.path.clone(),
            source,
        }
    }

    fn corrupt(&self, source: serde_json::Error) -> StorageError {
        StorageError::Corrupt {
            path: self.path.clone(),
            source,
        }
    }

    fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent).map_err(|e| self.unavailable(e))?;
                #[cfg(unix)]
                {
                    use crate::constants::DEFAULT_DIR_PERMISSIONS;
                    use std::os::unix::fs::PermissionsExt;
                    fs::set_permissions(parent, fs::Permissions::from_mode(DEFAULT_DIR_PERMISSIONS))
                        .map_err(|e| self.unavailable(e))?;
                }
                debug!("Created story directory {:?}", parent);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn acquire_lock(&self) -> Result<File, StorageError> {
        self.ensure_parent_dir()?;
        let lock_path = self.lock_path();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|source| LockError::AcquisitionFailed {
                path: lock_path.clone(),
                source,
            })?;

        match FileExt::try_lock_exclusive(&file) {
            Ok(()) => Ok(file),
            Err(e)
                if e.kind() == io::ErrorKind::WouldBlock
                    || e.raw_os_error() == fs2::lock_contended_error().raw_os_error() =>
            {
                Err(LockError::FileBusy { path: lock_path }.into())
            }
            Err(source) => Err(LockError::AcquisitionFailed {
                path: lock_path,
                source,
            }
            .into()),
        }
    }
}

impl StoryStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<FamilyStory>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.unavailable(e)),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|source| self.corrupt(source))?;

        // A bare array predates the version tag
        if value.is_array() {
            let stories: Vec<FamilyStory> =
                serde_json::from_value(value).map_err(|source| self.corrupt(source))?;
            info!(
                count = stories.len(),
                "Read unversioned story file; it will be rewritten on next save"
            );
            return Ok(stories);
        }

        let envelope: StoryEnvelope =
            serde_json::from_value(value).map_err(|source| self.corrupt(source))?;
        if envelope.version > STORY_SCHEMA_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: envelope.version,
                supported: STORY_SCHEMA_VERSION,
            });
        }

        serde_json::from_value(envelope.stories).map_err(|source| self.corrupt(source))
    }

    fn save(&self, stories: &[FamilyStory]) -> Result<(), StorageError> {
        self.ensure_parent_dir()?;

        let file = StoryFile {
            version: STORY_SCHEMA_VERSION,
            stories: stories.to_vec(),
        };
        let json = serde_json::to_string_pretty(&file).map_err(|source| self.corrupt(source))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(|e| self.unavailable(e))?;
        temp.write_all(json.as_bytes())
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| self.unavailable(e))?;

        #[cfg(unix)]
        {
            use crate::constants::DEFAULT_FILE_PERMISSIONS;
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(fs::Permissions::from_mode(DEFAULT_FILE_PERMISSIONS))
                .map_err(|e| self.unavailable(e))?;
        }

        temp.persist(&self.path)
            .map_err(|e| self.unavailable(e.error))?;
        debug!(count = stories.len(), "Saved stories to {:?}", self.path);
        Ok(())
    }

    fn append(&self, story: &FamilyStory) -> Result<(), StorageError> {
        let lock = self.acquire_lock()?;

        let result = self.load().and_then(|mut stories| {
            stories.push(story.clone());
            self.save(&stories)
        });

        if let Err(e) = FileExt::unlock(&lock) {
            debug!("Failed to release story lock explicitly: {}", e);
        }
        result
    }
}

/// Keeps stories in process memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    stories: Mutex<Vec<FamilyStory>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with `stories`.
    pub fn with_stories(stories: Vec<FamilyStory>) -> Self {
        MemoryStorage {
            stories: Mutex::new(stories),
        }
    }
}

impl StoryStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<FamilyStory>, StorageError> {
        let stories = self.stories.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(stories.clone())
    }

    fn save(&self, stories: &[FamilyStory]) -> Result<(), StorageError> {
        let mut stored = self.stories.lock().map_err(|_| StorageError::Poisoned)?;
        *stored = stories.to_vec();
        Ok(())
    }

    fn append(&self, story: &FamilyStory) -> Result<(), StorageError> {
        let mut stored = self.stories.lock().map_err(|_| StorageError::Poisoned)?;
        stored.push(story.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stories::Generation;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;
    use uuid::Uuid;

    fn story(day_index: u16, author: &str) -> FamilyStory {
        FamilyStory {
            id: Uuid::new_v4(),
            author_name: author.to_string(),
            author_generation: Generation::Parent,
            content: "A reflection".to_string(),
            submitted_at: Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).unwrap(),
            day_index,
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("stories.json"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_empty_file_loads_empty() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("stories.json");
        fs::write(&path, "  \n").unwrap();
        assert!(JsonFileStorage::new(path).load().unwrap().is_empty());
    }

    #[test]
    fn test_save_writes_versioned_layout() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("stories.json");
        let storage = JsonFileStorage::new(&path);

        let saved = story(5, "Grandma");
        storage.save(std::slice::from_ref(&saved)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["version"], 1);
        let first = &value["stories"][0];
        assert_eq!(first["authorName"], "Grandma");
        assert_eq!(first["authorGeneration"], "parent");
        assert_eq!(first["dayIndex"], 5);
        assert_eq!(first["submittedAt"], "2025-01-05T12:00:00Z");
        assert_eq!(first["id"], saved.id.to_string());

        assert_eq!(storage.load().unwrap(), vec![saved]);
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("data").join("stories.json");
        let storage = JsonFileStorage::new(&path);

        storage.save(&[story(1, "Ana")]).unwrap();
        assert!(path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("stories.json");
        JsonFileStorage::new(&path).save(&[story(1, "Ana")]).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_legacy_array_is_readable() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("stories.json");
        let legacy = r#"[
            {
                "id": "6f1c2a8e-3b1d-4c55-9d8e-1a2b3c4d5e6f",
                "authorName": "Grandpa Joe",
                "authorGeneration": "grandparent",
                "content": "We read this verse every winter.",
                "timestamp": "2024-12-01T08:30:00.000Z",
                "dayOfYear": 335
            }
        ]"#;
        fs::write(&path, legacy).unwrap();

        let stories = JsonFileStorage::new(&path).load().unwrap();
        assert_eq!(stories.len(), 1);
        assert_eq!(stories[0].author_name, "Grandpa Joe");
        assert_eq!(stories[0].author_generation, Generation::Grandparent);
        assert_eq!(stories[0].day_index, 335);
    }

    #[test]
    fn test_newer_schema_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("stories.json");
        fs::write(&path, r#"{"version": 9, "stories": []}"#).unwrap();

        match JsonFileStorage::new(&path).load() {
            Err(StorageError::UnsupportedVersion { found, supported }) => {
                assert_eq!(found, 9);
                assert_eq!(supported, STORY_SCHEMA_VERSION);
            }
            other => panic!("Expected UnsupportedVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_newer_schema_with_new_record_shape_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("stories.json");
        fs::write(
            &path,
            r#"{"version": 2, "stories": [{"id": "b7e6", "author": {"name": "A"}, "day": 3}]}"#,
        )
        .unwrap();

        match JsonFileStorage::new(&path).load() {
            Err(StorageError::UnsupportedVersion { found, supported }) => {
                assert_eq!(found, 2);
                assert_eq!(supported, STORY_SCHEMA_VERSION);
            }
            other => panic!("Expected UnsupportedVersion, got {:?}", other),
        }
    }

    #[test]
    fn test_current_version_with_bad_records_is_corrupt() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("stories.json");
        fs::write(&path, r#"{"version": 1, "stories": [{"day": 3}]}"#).unwrap();

        assert!(matches!(
            JsonFileStorage::new(&path).load(),
            Err(StorageError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_scalar_top_level_is_corrupt() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("stories.json");
        fs::write(&path, "42").unwrap();

        assert!(matches!(
            JsonFileStorage::new(&path).load(),
            Err(StorageError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_garbage_is_corrupt() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("stories.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            JsonFileStorage::new(&path).load(),
            Err(StorageError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_append_preserves_order() {
        let temp_dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("stories.json"));

        let first = story(5, "First");
        let second = story(5, "Second");
        storage.append(&first).unwrap();
        storage.append(&second).unwrap();

        assert_eq!(storage.load().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_append_fails_while_locked() {
        let temp_dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(temp_dir.path().join("stories.json"));

        let held = storage.acquire_lock().unwrap();
        let result = storage.append(&story(1, "Blocked"));
        match result {
            Err(StorageError::Lock(LockError::FileBusy { path })) => {
                assert!(path.to_string_lossy().ends_with("stories.json.lock"));
            }
            other => panic!("Expected FileBusy, got {:?}", other),
        }

        FileExt::unlock(&held).unwrap();
        storage.append(&story(1, "Unblocked")).unwrap();
        assert_eq!(storage.load().unwrap().len(), 1);
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        let first = story(2, "A");
        storage.append(&first).unwrap();
        assert_eq!(storage.load().unwrap(), vec![first.clone()]);

        storage.save(&[]).unwrap();
        assert!(storage.load().unwrap().is_empty());

        let seeded = MemoryStorage::with_stories(vec![first.clone()]);
        assert_eq!(seeded.load().unwrap(), vec![first]);
    }
}
