// Fri Oct 16 2026 - Alex

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const NID_DB_ENV: &str = "TRAMPGEN_NID_DB";
pub const NID_DB_FILE: &str = "nid_db.xml";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("module id must not be empty")]
    EmptyModuleId,
    #[error("module id must be a bare token, got {0:?}")]
    InvalidModuleId(String),
    #[error("library index must not be empty")]
    EmptyLibraryIndex,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub prx: PathBuf,
    pub module_id: String,
    pub library_index: String,
    pub nid_db: PathBuf,
}

impl Config {
    pub fn new(prx: PathBuf, module_id: String, library_index: String) -> Self {
        Self {
            prx,
            module_id,
            library_index,
            nid_db: default_nid_db_path(),
        }
    }

    pub fn with_nid_db(mut self, nid_db: PathBuf) -> Self {
        self.nid_db = nid_db;
        self
    }

    /// File stem of the input binary, used to name the generated constructor.
    pub fn stem(&self) -> String {
        self.prx
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.module_id.is_empty() {
            return Err(ConfigError::EmptyModuleId);
        }
        if self
            .module_id
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '\'')
        {
            return Err(ConfigError::InvalidModuleId(self.module_id.clone()));
        }
        if self.library_index.is_empty() {
            return Err(ConfigError::EmptyLibraryIndex);
        }
        Ok(())
    }
}

/// Resolves where the NID database lives: `$TRAMPGEN_NID_DB`, then next to
/// the executable, then the working directory.
pub fn default_nid_db_path() -> PathBuf {
    if let Some(path) = env::var_os(NID_DB_ENV) {
        return PathBuf::from(path);
    }

    let beside_exe = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(NID_DB_FILE)));

    match beside_exe {
        Some(path) if path.is_file() => path,
        _ => Path::new(NID_DB_FILE).to_path_buf(),
    }
}
