mod config;

pub use config::Config;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/dinonest[-dev]/` based on DINONEST_ENV.
///
/// Set DINONEST_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DINONEST_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("dinonest-dev")
    } else {
        base_dir.join("dinonest")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
