//! Path management for GraceHome
//!
//! ## Path Resolution Order
//!
//! 1. `GRACEHOME_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (e.g. `~/.config/gracehome` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::GraceError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "GRACEHOME_DATA_DIR";

/// Manages all paths used by GraceHome
#[derive(Debug, Clone)]
pub struct GracePaths {
    /// Base directory for all GraceHome data
    base_dir: PathBuf,
}

impl GracePaths {
    /// Create a new GracePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, GraceError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create GracePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one JSON document per storage key
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Path of the document backing a storage key
    pub fn collection_file(&self, key: &str) -> PathBuf {
        self.data_dir().join(format!("{}.json", key))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), GraceError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| GraceError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| GraceError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, GraceError> {
    ProjectDirs::from("", "", "gracehome")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| GraceError::Config("Could not determine a home directory".into()))
}
