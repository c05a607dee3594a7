use crate::{
    error::{Result, TaskboardError},
    storage::Storage,
};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::debug;

/// File-based storage, one JSON document per key
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const TASKBOARD_DIR: &'static str = ".taskboard";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::TASKBOARD_DIR),
        }
    }

    /// Creates the storage directory
    pub fn initialize(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path)?;
            debug!(path = %self.root_path.display(), "created storage directory");
        }
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.root_path.exists()
    }

    fn item_file(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(TaskboardError::StorageError(format!(
                "Invalid storage key: {}",
                key
            )));
        }
        Ok(self.root_path.join(format!("{}.json", key)))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.item_file(key)?) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.initialize()?;
        fs::write(self.item_file(key)?, value)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.item_file(key)?) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_initialization() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert!(!storage.is_initialized());

        storage.initialize().unwrap();

        assert!(storage.is_initialized());
        assert!(temp_dir.path().join(".taskboard").is_dir());
    }

    #[test]
    fn test_item_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path());

        storage.set_item("boards", r#"[{"id":1,"title":"A"}]"#).unwrap();

        let loaded = storage.get_item("boards").unwrap();
        assert_eq!(loaded.as_deref(), Some(r#"[{"id":1,"title":"A"}]"#));
        assert!(temp_dir.path().join(".taskboard/boards.json").exists());
    }

    #[test]
    fn test_missing_item_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert_eq!(storage.get_item("tasks").unwrap(), None);
    }

    #[test]
    fn test_item_removed_behind_our_back_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path());
        storage.set_item("tasks", "[]").unwrap();

        fs::remove_file(temp_dir.path().join(".taskboard/tasks.json")).unwrap();

        assert_eq!(storage.get_item("tasks").unwrap(), None);
        storage.remove_item("tasks").unwrap();
    }

    #[test]
    fn test_unreadable_item_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        fs::create_dir_all(temp_dir.path().join(".taskboard/tasks.json")).unwrap();

        assert!(matches!(
            storage.get_item("tasks"),
            Err(TaskboardError::IoError(_))
        ));
    }

    #[test]
    fn test_remove_item() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path());

        storage.set_item("theme", "light").unwrap();
        storage.remove_item("theme").unwrap();
        storage.remove_item("theme").unwrap();

        assert_eq!(storage.get_item("theme").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path());

        assert!(matches!(
            storage.set_item("../escape", "x"),
            Err(TaskboardError::StorageError(_))
        ));
        assert!(storage.get_item("").is_err());
    }
}
