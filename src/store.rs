//! Single-writer JSON document store for profiles and palette history.

use crate::profile::{PaletteRecord, ProfileRecord};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

pub const DEFAULT_DATA_FILE: &str = "beauty_profiles.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize store: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub profiles: IndexMap<String, ProfileRecord>,
    #[serde(default)]
    pub palettes: IndexMap<String, Vec<PaletteRecord>>,
}

#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes an empty document when none exists yet.
    pub fn init(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        tracing::info!(path = %self.path.display(), "initializing data file");
        self.save(&StoreData::default())
    }

    /// A missing file reads as an empty store.
    pub fn load(&self) -> Result<StoreData, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(StoreData::default()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Replaces the whole document: the new contents go to a temp file in
    /// the same directory, which is then persisted over the target. A failed
    /// write leaves the previous document and no temp file behind.
    pub fn save(&self, data: &StoreData) -> Result<(), StoreError> {
        let serialized = serde_json::to_string_pretty(data)?;
        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = NamedTempFile::new_in(self.parent_dir()).map_err(write_err)?;
        file.write_all(serialized.as_bytes()).map_err(write_err)?;
        file.persist(&self.path)
            .map_err(|err| write_err(err.error))?;
        tracing::debug!(
            path = %self.path.display(),
            profiles = data.profiles.len(),
            "saved data file"
        );
        Ok(())
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
