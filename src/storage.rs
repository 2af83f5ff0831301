use crate::errors::StorageError;
use crate::models::HabitStore;
use std::{env, fs, path::Path, path::PathBuf};

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("HABITS_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/habits.json")
}

/// Reads the persisted store. A missing file is the first-run case and
/// yields an empty store; any other read failure or malformed content is
/// an error the caller must treat as fatal at startup.
pub fn load_store(path: &Path) -> Result<HabitStore, StorageError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(HabitStore::default());
        }
        Err(err) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source: err,
            });
        }
    };

    serde_json::from_slice(&bytes).map_err(|err| StorageError::Malformed {
        path: path.to_path_buf(),
        source: err,
    })
}

/// Overwrites the whole store. The payload goes to a sibling temp file
/// first and is renamed into place, so a failed write leaves the previous
/// file intact.
pub fn save_store(path: &Path, store: &HabitStore) -> Result<(), StorageError> {
    let payload = serde_json::to_vec_pretty(store).map_err(|err| StorageError::Malformed {
        path: path.to_path_buf(),
        source: err,
    })?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, payload).map_err(|err| StorageError::Write {
        path: tmp.clone(),
        source: err,
    })?;
    fs::rename(&tmp, path).map_err(|err| StorageError::Write {
        path: path.to_path_buf(),
        source: err,
    })?;
    Ok(())
}
