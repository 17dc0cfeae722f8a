use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{app_config_dir, ConfigPathError, APP_DIR};
use thiserror::Error;

const SLOT_EXTENSION: &str = "json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage slot is unavailable: {key}")]
    Unavailable { key: String },
    #[error("storage key is empty")]
    MissingKey,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Named key/value slots that outlive the process.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

/// One JSON file per key under a single directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage rooted at the app config dir (`$XDG_CONFIG_HOME/dashshell`).
    pub fn in_config_dir(
        xdg_config_home: Option<&Path>,
        home: Option<&Path>,
    ) -> Result<Self, ConfigPathError> {
        app_config_dir(APP_DIR, xdg_config_home, home).map(Self::new)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() {
            return Err(StorageError::MissingKey);
        }
        let mut path = self.dir.clone();
        path.push(format!("{key}.{SLOT_EXTENSION}"));
        Ok(path)
    }
}

impl PreferenceStorage for FileStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir)?;

        let staging = path.with_extension(format!("{SLOT_EXTENSION}.tmp"));
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;
        Ok(())
    }
}

/// In-process slots, lost on drop.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
    available: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            available: true,
        }
    }

    /// Storage that fails every read and write, like a browser with storage disabled.
    pub fn unavailable() -> Self {
        Self {
            slots: HashMap::new(),
            available: false,
        }
    }

    pub fn with_slot(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(key.into(), value.into());
        self
    }

    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    fn ensure_available(&self, key: &str) -> StorageResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(StorageError::Unavailable {
                key: key.to_string(),
            })
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        self.ensure_available(key)?;
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.ensure_available(key)?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        path.push(format!("dashshell-storage-{}-{nanos}", std::process::id()));
        path
    }

    #[test]
    fn slot_path_uses_key_as_file_stem() {
        let storage = FileStorage::new("/home/test/.config/dashshell");
        let path = storage.slot_path("ui-preferences").unwrap();
        assert_eq!(
            path,
            PathBuf::from("/home/test/.config/dashshell/ui-preferences.json")
        );
    }

    #[test]
    fn in_config_dir_prefers_xdg_and_requires_home_otherwise() {
        let storage =
            FileStorage::in_config_dir(Some(Path::new("/xdg")), Some(Path::new("/home/test")))
                .unwrap();
        assert_eq!(storage.dir(), Path::new("/xdg/dashshell"));

        let error = FileStorage::in_config_dir(None, None).unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn slot_path_rejects_empty_key() {
        let storage = FileStorage::new("/tmp");
        assert!(matches!(
            storage.slot_path(""),
            Err(StorageError::MissingKey)
        ));
    }

    #[test]
    fn file_storage_reads_none_for_missing_slot() {
        let storage = FileStorage::new(fixture_root());
        assert!(storage.read("ui-preferences").unwrap().is_none());
    }

    #[test]
    fn file_storage_write_creates_directory_and_overwrites() {
        let root = fixture_root();
        let mut storage = FileStorage::new(root.join("nested"));

        storage.write("ui-preferences", "{\"a\":1}").unwrap();
        storage.write("ui-preferences", "{\"a\":2}").unwrap();

        assert_eq!(
            storage.read("ui-preferences").unwrap().as_deref(),
            Some("{\"a\":2}")
        );
        assert!(!root.join("nested").join("ui-preferences.json.tmp").exists());

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn memory_storage_round_trips_slots() {
        let mut storage = MemoryStorage::new();
        assert!(storage.read("ui-preferences").unwrap().is_none());
        storage.write("ui-preferences", "payload").unwrap();
        assert_eq!(storage.slot("ui-preferences"), Some("payload"));
    }

    #[test]
    fn unavailable_memory_storage_fails_every_operation() {
        let mut storage = MemoryStorage::unavailable();
        assert!(matches!(
            storage.read("ui-preferences"),
            Err(StorageError::Unavailable { .. })
        ));
        assert!(matches!(
            storage.write("ui-preferences", "{}"),
            Err(StorageError::Unavailable { .. })
        ));
        assert!(storage.slot("ui-preferences").is_none());
    }
}
