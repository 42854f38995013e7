use crate::{KeyValueStorage, StorageError, StorageResult};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;

const FILE_EXTENSION: &str = "json";

/// Directory-backed storage: each key lives in `<dir>/<key>.json`.
///
/// Writes go through a temp file, fsync and rename, so a crash mid-write
/// leaves either the old value or the new one.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.{FILE_EXTENSION}")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::file_read(path, e)),
        };

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| StorageError::invalid_encoding(path, e))
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let final_path = self.path_for(key)?;

        fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::dir_creation(self.dir.clone(), e))?;

        let temp_path = self.dir.join(format!(
            "{key}.{FILE_EXTENSION}.tmp.{}",
            std::process::id()
        ));

        let stored = write_synced(&temp_path, value)
            .map_err(|e| StorageError::file_write(temp_path.clone(), e))
            .and_then(|()| {
                fs::rename(&temp_path, &final_path).map_err(|e| {
                    StorageError::atomic_rename(temp_path.clone(), final_path.clone(), e)
                })
            });

        // No temp file survives a failed write or rename
        if let Err(e) = stored {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        debug!("Stored '{key}' at {}", final_path.display());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Removed '{key}' from {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::file_remove(path, e)),
        }
    }
}

fn write_synced(path: &Path, value: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::invalid_key(key, "key cannot be empty"));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(StorageError::invalid_key(
            key,
            "only ASCII letters, digits, '_' and '-' are allowed",
        ));
    }
    Ok(())
}
