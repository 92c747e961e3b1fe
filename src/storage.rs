use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};

use crate::constants::{EXPENSES_FILE_PREFIX, JSON_EXTENSION, USERS_FILE};
use crate::error::Result;

/// Accounts registry (users.json)
pub fn users_path(data_dir: &Path) -> PathBuf {
    data_dir.join(USERS_FILE)
}

/// Per-user expenses file (expenses_{username}.json). The username is
/// percent-encoded so every name stays a single file inside `data_dir`.
pub fn expenses_path(data_dir: &Path, username: &str) -> PathBuf {
    data_dir.join(format!(
        "{}{}.{}",
        EXPENSES_FILE_PREFIX,
        urlencoding::encode(username),
        JSON_EXTENSION
    ))
}

pub async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&data)?)
}

/// Overwrites `path` with the pretty-printed JSON form of `value`.
pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_string_pretty(value)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

/// Creates `path` holding `default` unless it already exists.
/// Returns true when the file was created.
pub async fn ensure_json_file<T: Serialize + ?Sized>(path: &Path, default: &T) -> Result<bool> {
    if tokio::fs::try_exists(path).await? {
        return Ok(false);
    }
    write_json(path, default).await?;
    tracing::debug!(path = %path.display(), "created store file");
    Ok(true)
}
