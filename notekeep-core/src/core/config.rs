//! Store configuration, loadable from a JSON file.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock behaviour.

use crate::{NotekeepError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How new note, label and folder ids are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum IdStrategy {
    /// `n1`, `n2`, ... from a counter that never rewinds.
    #[default]
    Sequential,
    /// `n-<uuid v4>`.
    Uuid,
}

/// Tunables for a [`NoteStore`](crate::NoteStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    pub id_strategy: IdStrategy,
    /// Also strip a deleted label's id from notes sitting in the trash.
    pub scrub_trash_on_label_delete: bool,
    /// Refresh `updated_at` when a note is edited.
    pub touch_on_edit: bool,
    /// Seed for the default-color picker; `None` seeds from the OS.
    pub color_seed: Option<u64>,
    /// Maximum number of records kept by the change log.
    pub change_log_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::Sequential,
            scrub_trash_on_label_delete: true,
            touch_on_edit: false,
            color_seed: None,
            change_log_capacity: 1000,
        }
    }
}

impl StoreConfig {
    /// Parses a config from a JSON document; absent keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::Json`] for malformed JSON and
    /// [`NotekeepError::InvalidConfig`] if a value fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::Io`] if the file cannot be read, otherwise
    /// anything [`from_json`](Self::from_json) returns.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Loads the config at `path`; returns defaults if the file is missing or corrupt.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(NotekeepError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("ignoring config at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`NotekeepError::InvalidConfig`] if `change_log_capacity` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.change_log_capacity == 0 {
            return Err(NotekeepError::InvalidConfig(
                "changeLogCapacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
