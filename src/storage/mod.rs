//! Gallery configuration storage
//!
//! Locates and loads the card definitions shown by the demo gallery.

use std::path::PathBuf;
use thiserror::Error;

pub mod gallery;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access data directory: {0}")]
    DataDirError(String),
    #[error("Failed to read file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to serialize/deserialize JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Get the application data directory
///
/// - Windows: `C:\Users\{user}\AppData\Roaming\haxtheweb\DddCard\data`
/// - macOS: `/Users/{user}/Library/Application Support/org.haxtheweb.DddCard`
/// - Linux: `/home/{user}/.local/share/dddcard`
pub fn get_data_dir() -> Result<PathBuf, ConfigError> {
    directories::ProjectDirs::from("org", "haxtheweb", "DddCard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ConfigError::DataDirError("Could not determine data directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_retrieval() {
        let path = get_data_dir().unwrap();
        assert!(path.to_string_lossy().to_lowercase().contains("dddcard"));
    }
}
