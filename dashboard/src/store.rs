use crate::errors::Result;
use crate::model::Reading;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Whole-file persistence for the reading history.
///
/// `load` never fails: a missing or unreadable file is an empty history
/// by contract, not an error. `save` rewrites the entire file and
/// surfaces write failures to the caller.
pub trait Store: Send + Sync {
    fn load(&self) -> Vec<Reading>;
    fn save(&self, history: &[Reading]) -> Result<()>;
}

/// History persisted as a pretty-printed JSON array on local disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Store for FileStore {
    fn load(&self) -> Vec<Reading> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("History file {} not found, starting empty", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("Failed to read {}: {}, treating history as empty", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(history) => history,
            Err(e) => {
                warn!("Failed to parse {}: {}, treating history as empty", self.path.display(), e);
                Vec::new()
            }
        }
    }

    fn save(&self, history: &[Reading]) -> Result<()> {
        let json = serde_json::to_string_pretty(history)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store, a test double for [`FileStore`].
#[derive(Default)]
pub struct MemoryStore {
    history: Mutex<Vec<Reading>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: Vec<Reading>) -> Self {
        Self {
            history: Mutex::new(history),
        }
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Vec<Reading> {
        self.history.lock().unwrap().clone()
    }

    fn save(&self, history: &[Reading]) -> Result<()> {
        *self.history.lock().unwrap() = history.to_vec();
        Ok(())
    }
}
