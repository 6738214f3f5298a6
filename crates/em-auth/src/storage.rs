//! Durable local key/value storage backing the session.
//!
//! One file per key under a data directory. If the directory cannot be
//! prepared the store degrades to an in-memory map for the life of the
//! process; storage trouble is never fatal to a session.

use crate::{AuthError, Result as AuthResult};

use std::collections::HashMap;
use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use error_location::ErrorLocation;
use log::warn;

enum Backing {
    Disk(PathBuf),
    Memory(Mutex<HashMap<String, String>>),
}

pub struct LocalStore {
    backing: Backing,
}

impl LocalStore {
    /// Open a durable store rooted at `dir`, creating the directory if
    /// needed. Fails with `StorageUnavailable` when the directory cannot be
    /// prepared.
    #[track_caller]
    pub fn open(dir: &Path) -> AuthResult<Self> {
        std::fs::create_dir_all(dir).map_err(|e| AuthError::StorageUnavailable {
            message: format!("cannot prepare {}: {}", dir.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            backing: Backing::Disk(dir.to_path_buf()),
        })
    }

    /// Open a durable store, degrading to in-memory when the directory is
    /// unusable. This is the constructor the application uses.
    pub fn open_or_memory(dir: &Path) -> Self {
        match Self::open(dir) {
            Ok(store) => store,
            Err(e) => {
                warn!("{} - session will not survive this process", e);
                Self::memory()
            }
        }
    }

    /// A purely in-memory store (used for degraded mode and tests).
    pub fn memory() -> Self {
        Self {
            backing: Backing::Memory(Mutex::new(HashMap::new())),
        }
    }

    /// Whether values written here survive the process.
    pub fn is_durable(&self) -> bool {
        matches!(self.backing, Backing::Disk(_))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match &self.backing {
            Backing::Disk(dir) => match std::fs::read_to_string(dir.join(key)) {
                Ok(value) => Some(value),
                Err(e) if e.kind() == ErrorKind::NotFound => None,
                Err(e) => {
                    warn!("Failed to read session key {}: {}", key, e);
                    None
                }
            },
            Backing::Memory(map) => map
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .get(key)
                .cloned(),
        }
    }

    pub fn set(&self, key: &str, value: &str) {
        match &self.backing {
            Backing::Disk(dir) => {
                if let Err(e) = std::fs::write(dir.join(key), value) {
                    warn!("Failed to persist session key {}: {}", key, e);
                }
            }
            Backing::Memory(map) => {
                map.lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .insert(key.to_string(), value.to_string());
            }
        }
    }

    pub fn remove(&self, key: &str) {
        match &self.backing {
            Backing::Disk(dir) => match std::fs::remove_file(dir.join(key)) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => warn!("Failed to remove session key {}: {}", key, e),
            },
            Backing::Memory(map) => {
                map.lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .remove(key);
            }
        }
    }
}
