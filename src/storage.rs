//! Saved-resume persistence
//!
//! Named resumes persist through a generic key-value capability with a
//! file-backed default, so any storage medium can sit behind it.

use crate::error::{Result, ResumeScorerError};
use crate::resume::ResumeRecord;
use log::info;
use std::path::PathBuf;

/// Minimal key-value surface: get/set/remove/list by key
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
    fn list(&self) -> Result<Vec<String>>;
}

/// One JSON file per key under a root directory
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        // Keys become file names, so restrict them to a safe alphabet
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ResumeScorerError::Storage(format!(
                "Invalid key '{}': use letters, digits, '-' or '_'",
                key
            )));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        std::fs::write(&path, value)?;
        info!("Stored '{}' at {}", key, path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Err(ResumeScorerError::Storage(format!(
                "No entry named '{}'",
                key
            )));
        }
        std::fs::remove_file(path)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// Typed wrapper for saving and loading named resumes
pub struct ResumeStore<S: KeyValueStore> {
    store: S,
}

impl ResumeStore<FileStore> {
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        Ok(Self {
            store: FileStore::new(data_dir)?,
        })
    }
}

impl<S: KeyValueStore> ResumeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn save(&mut self, name: &str, resume: &ResumeRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(resume)?;
        self.store.set(name, &json)
    }

    pub fn load(&self, name: &str) -> Result<ResumeRecord> {
        let json = self
            .store
            .get(name)?
            .ok_or_else(|| ResumeScorerError::Storage(format!("No resume named '{}'", name)))?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn delete(&mut self, name: &str) -> Result<()> {
        self.store.remove(name)
    }

    pub fn list(&self) -> Result<Vec<String>> {
        self.store.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, ResumeStore<FileStore>) {
        let dir = TempDir::new().unwrap();
        let store = ResumeStore::open(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_dir, mut store) = store();
        let mut resume = ResumeRecord::default();
        resume.summary = "Engineer".to_string();

        store.save("main", &resume).unwrap();
        let loaded = store.load("main").unwrap();
        assert_eq!(loaded, resume);
    }

    #[test]
    fn test_list_is_sorted() {
        let (_dir, mut store) = store();
        store.save("zeta", &ResumeRecord::default()).unwrap();
        store.save("alpha", &ResumeRecord::default()).unwrap();
        assert_eq!(store.list().unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_delete_and_missing_entry() {
        let (_dir, mut store) = store();
        store.save("tmp", &ResumeRecord::default()).unwrap();
        store.delete("tmp").unwrap();
        assert!(store.load("tmp").is_err());
        assert!(store.delete("tmp").is_err());
    }

    #[test]
    fn test_rejects_unsafe_keys() {
        let (_dir, mut store) = store();
        assert!(store.save("../escape", &ResumeRecord::default()).is_err());
        assert!(store.save("", &ResumeRecord::default()).is_err());
    }
}
