//! Collection file I/O
//!
//! Each collection lives in its own file as `{"<collection>": [records...]}`.
//! Files are replaced atomically: the new contents go to a sibling temp file
//! that is synced and renamed over the old one, so a failed write leaves the
//! previous file intact.

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::error::ExpenseError;

/// Path of the temp file used while replacing `path`
pub fn temp_path(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

/// Read the records stored under `key`
///
/// A missing file or a file without `key` reads as an empty collection.
/// Other top-level keys are ignored.
pub fn read_collection<T, P>(path: P, key: &str) -> Result<Vec<T>, ExpenseError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| ExpenseError::Storage(format!("Cannot open {}: {}", path.display(), e)))?;

    let mut envelope: Map<String, Value> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| ExpenseError::Storage(format!("{} is not a collection file: {}", path.display(), e)))?;

    match envelope.remove(key) {
        Some(records) => serde_json::from_value(records).map_err(|e| {
            ExpenseError::Storage(format!("Bad '{}' records in {}: {}", key, path.display(), e))
        }),
        None => Ok(Vec::new()),
    }
}

/// Replace the collection file with `records` stored under `key`
pub fn write_collection<T, P>(path: P, key: &str, records: &[T], pretty: bool) -> Result<(), ExpenseError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let mut envelope = Map::new();
    envelope.insert(key.to_string(), serde_json::to_value(records)?);
    let envelope = Value::Object(envelope);

    let bytes = if pretty {
        serde_json::to_vec_pretty(&envelope)
    } else {
        serde_json::to_vec(&envelope)
    }
    .map_err(|e| ExpenseError::Storage(format!("Cannot encode '{}': {}", key, e)))?;

    replace_file(path.as_ref(), &bytes)
}

/// Atomically replace `path` with `bytes`
fn replace_file(path: &Path, bytes: &[u8]) -> Result<(), ExpenseError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| ExpenseError::Storage(format!("Cannot create {}: {}", parent.display(), e)))?;
    }

    let temp = temp_path(path);
    let staged = File::create(&temp).and_then(|mut file| {
        file.write_all(bytes)?;
        file.sync_all()
    });

    if let Err(e) = staged.and_then(|()| fs::rename(&temp, path)) {
        if temp.is_file() {
            let _ = fs::remove_file(&temp);
        }
        return Err(ExpenseError::Storage(format!(
            "Cannot write {}: {}",
            path.display(),
            e
        )));
    }

    Ok(())
}
