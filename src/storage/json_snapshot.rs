use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::NewsCache;
use crate::errors::NewsResult;
use crate::storage::traits::CacheStore;

/// File-backed snapshot store. A missing file is an empty cache; a corrupt
/// or unreadable file surfaces as an error for the caller to handle.
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CacheStore for JsonSnapshotStore {
    fn load(&self) -> NewsResult<NewsCache> {
        if !self.path.exists() {
            return Ok(NewsCache::default());
        }

        let bytes = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn save(&self, cache: &NewsCache) -> NewsResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_vec(cache)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
