/// Append a new entry, re-sort the store and write it back in full
use std::path::Path;

use crate::error::LocalizeError;
use crate::natural::sort_naturally;
use crate::persist::{write_atomically, PersistOutcome};
use crate::store::Store;

pub fn entry_line(prefix: &str, key: &str, value: &str) -> String {
    format!("{prefix}{key}={value}")
}

/// Add `prefix + key + "=" + value` and keep the whole store naturally sorted.
pub fn add_entry(store: &mut Store, prefix: &str, key: &str, value: &str) {
    let lines = store.lines_mut();
    lines.push(entry_line(prefix, key, value));
    sort_naturally(lines);
    log::debug!("store now holds {} sorted lines", lines.len());
}

/// [`add_entry`] followed by an atomic overwrite of `target`.
///
/// A value the file's encoding cannot hold is rejected before the store changes.
pub fn add_and_persist(
    store: &mut Store,
    prefix: &str,
    key: &str,
    value: &str,
    target: &Path,
    keep_backup: bool,
) -> Result<PersistOutcome, LocalizeError> {
    let line = entry_line(prefix, key, value);
    if !store.layout().can_encode(&line) {
        return Err(LocalizeError::UnencodableValue {
            value: value.to_string(),
            path: target.to_path_buf(),
        });
    }

    add_entry(store, prefix, key, value);
    let bytes = store.to_bytes().map_err(|e| LocalizeError::io(target, e))?;
    let outcome = write_atomically(target, &bytes, keep_backup)?;
    log::info!("added {}{} to {}", prefix, key, target.display());
    Ok(outcome)
}
