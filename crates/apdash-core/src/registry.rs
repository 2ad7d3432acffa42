// ── Manual override registry ──
//
// Sole owner of the registry file. Writes are serialized through an
// in-process mutex and land via write-new-then-rename, so a concurrent
// reader sees either the old or the new document, never a partial one.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::CoreError;
use crate::model::{MacAddress, ManualEntry, ManualMap};

/// On-disk value shape: `{ "<mac>": { "ip": "...", "name": "..." } }`.
#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    ip: String,
    #[serde(default)]
    name: String,
}

/// File-backed registry of manual MAC → {ip, name} overrides.
#[derive(Debug)]
pub struct ManualRegistry {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl ManualRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries. A missing file is an empty registry.
    pub fn load(&self) -> Result<ManualMap, CoreError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ManualMap::new()),
            Err(e) => return Err(CoreError::registry_read(&self.path, e)),
        };
        if contents.trim().is_empty() {
            return Ok(ManualMap::new());
        }

        let stored: BTreeMap<String, StoredEntry> =
            serde_json::from_str(&contents).map_err(|source| CoreError::RegistryFormat {
                path: self.path.display().to_string(),
                source,
            })?;

        Ok(stored
            .into_iter()
            .map(|(mac, entry)| {
                let mac = MacAddress::new(mac);
                let entry = ManualEntry {
                    mac: mac.clone(),
                    ip: entry.ip,
                    name: entry.name,
                };
                (mac, entry)
            })
            .collect())
    }

    /// Insert or replace the entry for `mac`.
    pub fn upsert(&self, mac: &MacAddress, ip: &str, name: &str) -> Result<ManualEntry, CoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut entries = self.load()?;
        let entry = ManualEntry {
            mac: mac.clone(),
            ip: ip.to_owned(),
            name: name.to_owned(),
        };
        entries.insert(mac.clone(), entry.clone());
        self.write(&entries)?;

        info!(mac = %mac, ip, "manual entry saved");
        Ok(entry)
    }

    /// Remove the entry for `mac`. Returns whether one existed.
    ///
    /// Removing an absent entry leaves the file untouched.
    pub fn delete(&self, mac: &MacAddress) -> Result<bool, CoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut entries = self.load()?;
        if entries.remove(mac).is_none() {
            debug!(mac = %mac, "no manual entry to delete");
            return Ok(false);
        }
        self.write(&entries)?;

        info!(mac = %mac, "manual entry deleted");
        Ok(true)
    }

    /// Replace the registry file. Caller must hold `write_lock`.
    fn write(&self, entries: &ManualMap) -> Result<(), CoreError> {
        let stored: BTreeMap<&str, StoredEntry> = entries
            .iter()
            .map(|(mac, e)| {
                (
                    mac.as_str(),
                    StoredEntry {
                        ip: e.ip.clone(),
                        name: e.name.clone(),
                    },
                )
            })
            .collect();
        let json = serde_json::to_vec_pretty(&stored).map_err(|source| {
            CoreError::RegistryFormat {
                path: self.path.display().to_string(),
                source,
            }
        })?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| CoreError::registry_write(&self.path, e))?;

        let mut tmp =
            NamedTempFile::new_in(&dir).map_err(|e| CoreError::registry_write(&self.path, e))?;
        tmp.write_all(&json)
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| CoreError::registry_write(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| CoreError::registry_write(&self.path, e.error))?;

        debug!(path = %self.path.display(), count = entries.len(), "registry written");
        Ok(())
    }
}
