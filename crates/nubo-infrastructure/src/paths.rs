//! Path management for nubo's local files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/nubo/              # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/nubo/         # Data directory
//! └── storage/                 # Durable storage entries (one file per key)
//!     └── auth_user.json
//! ```

use std::path::PathBuf;

const APP_NAME: &str = "nubo";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for nubo_core::NuboError {
    fn from(e: PathError) -> Self {
        nubo_core::NuboError::config(e.to_string())
    }
}

/// Resolves nubo's directories, optionally under a fixed base directory.
///
/// With a base directory every path is placed under it, which keeps tests
/// and portable installs away from the user's real config.
#[derive(Debug, Clone, Default)]
pub struct NuboPaths {
    base_dir: Option<PathBuf>,
}

impl NuboPaths {
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.join("config")),
            None => dirs::config_dir()
                .map(|d| d.join(APP_NAME))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base_dir {
            Some(base) => Ok(base.join("data")),
            None => dirs::data_dir()
                .map(|d| d.join(APP_NAME))
                .ok_or(PathError::HomeDirNotFound),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Directory holding the durable storage entries.
    pub fn storage_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("storage"))
    }
}
