// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Single-slot persisted snapshot of the latest plan.

use crate::models::UserPlan;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Holder of at most one `UserPlan`.
///
/// `save` replaces whatever was there; there is no history.
pub trait SnapshotStore: Send + Sync {
    /// Raw stored value, if any.
    fn read(&self) -> Result<Option<String>, SnapshotError>;
    fn write(&self, value: &str) -> Result<(), SnapshotError>;
    /// Remove the stored value. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), SnapshotError>;

    fn save(&self, plan: &UserPlan) -> Result<(), SnapshotError> {
        let value = serde_json::to_string(plan).map_err(|e| SnapshotError::Encode(e.to_string()))?;
        self.write(&value)
    }
}

/// Load the saved plan, consulted once at startup.
///
/// Unreadable or unparseable snapshots are logged and treated as absent.
pub fn load_persisted_plan(store: &dyn SnapshotStore) -> Option<UserPlan> {
    let raw = match store.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read saved plan");
            return None;
        }
    };

    match serde_json::from_str::<UserPlan>(&raw) {
        Ok(plan) => {
            tracing::debug!(created_at = %plan.created_at, "Loaded saved plan");
            Some(plan)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unparseable saved plan");
            None
        }
    }
}

/// Snapshot kept in one JSON file.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/fitplan/plan.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("fitplan").join("plan.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn read(&self) -> Result<Option<String>, SnapshotError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SnapshotError::Io(e)),
        }
    }

    fn write(&self, value: &str) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        // Atomic replace of the single slot.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), SnapshotError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SnapshotError::Io(e)),
        }
    }
}

/// In-memory snapshot, for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    slot: Mutex<Option<String>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw value.
    pub fn with_raw(value: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(value.into())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slot.lock().map(|s| s.is_none()).unwrap_or(true)
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn read(&self) -> Result<Option<String>, SnapshotError> {
        let slot = self.slot.lock().map_err(|_| SnapshotError::Poisoned)?;
        Ok(slot.clone())
    }

    fn write(&self, value: &str) -> Result<(), SnapshotError> {
        let mut slot = self.slot.lock().map_err(|_| SnapshotError::Poisoned)?;
        *slot = Some(value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SnapshotError> {
        let mut slot = self.slot.lock().map_err(|_| SnapshotError::Poisoned)?;
        *slot = None;
        Ok(())
    }
}

/// Errors from snapshot storage.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode plan: {0}")]
    Encode(String),

    #[error("Snapshot lock poisoned")]
    Poisoned,
}
