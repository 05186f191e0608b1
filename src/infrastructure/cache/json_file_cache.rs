use std::collections::{BTreeMap, HashMap};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::application::ports::AnswerCache;

pub const DEFAULT_CACHE_FILE: &str = "cache.json";

#[derive(Debug, thiserror::Error)]
pub enum CachePersistenceError {
    #[error("failed to read cache file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cache file {} is not a JSON object of strings: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write cache file {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Answer cache backed by a single JSON object on disk.
///
/// The whole file is read once when the cache is opened and rewritten in full
/// after every `put`, through a temporary file renamed over the target. A
/// missing or unreadable file yields an empty cache and a failed rewrite keeps
/// the in-memory entry; both are reported through logging only.
///
/// Writers in other processes are not coordinated: the last full rewrite wins.
pub struct JsonFileCache {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl JsonFileCache {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        tracing::info!(path = %path.display(), entries = entries.len(), "answer cache opened");

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Reads the mapping stored at `path`. Never fails: a missing file or one
    /// that does not hold a JSON object of strings gives an empty mapping.
    pub fn load(path: &Path) -> HashMap<String, String> {
        match Self::read_entries(path) {
            Ok(Some(entries)) => entries,
            Ok(None) => {
                tracing::info!(path = %path.display(), "cache file not found, starting empty");
                HashMap::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "cache file ignored, starting empty");
                HashMap::new()
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> HashMap<String, String> {
        self.lock().clone()
    }

    fn read_entries(path: &Path) -> Result<Option<HashMap<String, String>>, CachePersistenceError> {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(CachePersistenceError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_slice(&data)
            .map(Some)
            .map_err(|source| CachePersistenceError::Decode {
                path: path.to_path_buf(),
                source,
            })
    }

    fn write_entries(&self, entries: &HashMap<String, String>) -> Result<(), CachePersistenceError> {
        let write_error = |source: io::Error| CachePersistenceError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(write_error)?;

        let ordered: BTreeMap<&String, &String> = entries.iter().collect();
        let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(write_error)?;
        serde_json::to_writer_pretty(&mut staged, &ordered)
            .map_err(|e| write_error(io::Error::other(e)))?;
        staged.write_all(b"\n").map_err(write_error)?;
        staged.as_file().sync_all().map_err(write_error)?;

        staged
            .persist(&self.path)
            .map_err(|e| write_error(e.error))?;

        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl AnswerCache for JsonFileCache {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn put(&self, key: String, value: String) {
        let mut entries = self.lock();
        entries.insert(key, value);

        match self.write_entries(&entries) {
            Ok(()) => tracing::debug!(
                path = %self.path.display(),
                entries = entries.len(),
                "answer cache saved"
            ),
            Err(e) => tracing::error!(error = %e, "answer cache kept in memory only"),
        }
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}
