use chrono::Local;
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PersistOutcome {
    pub backup_path: Option<PathBuf>,
    pub final_path: PathBuf,
    pub bytes_written: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("Could not write strings file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not create backup of {}: {reason}", path.display())]
    Backup { path: PathBuf, reason: String },
}

/// Replace `target` with `contents` via a sibling temp file and a rename.
///
/// The original file is left untouched if anything before the rename fails.
pub fn write_atomically(
    target: &Path,
    contents: &[u8],
    keep_backup: bool,
) -> Result<PersistOutcome, PersistError> {
    let write_err = |source: io::Error| PersistError::Write {
        path: target.to_path_buf(),
        source,
    };

    let backup_path = if keep_backup && target.exists() {
        Some(create_backup(target)?)
    } else {
        None
    };

    let temp_path = build_temp_path(target);
    if let Err(err) = write_temp(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(err));
    }

    if let Err(err) = swap_into_place(&temp_path, target) {
        let _ = fs::remove_file(&temp_path);
        return Err(write_err(err));
    }

    log::debug!("wrote {} bytes to {}", contents.len(), target.display());

    Ok(PersistOutcome {
        backup_path,
        final_path: target.to_path_buf(),
        bytes_written: contents.len(),
    })
}

fn write_temp(temp_path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(temp_path)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(target_os = "windows")]
fn swap_into_place(temp_path: &Path, target: &Path) -> io::Result<()> {
    match fs::rename(temp_path, target) {
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            fs::remove_file(target)?;
            fs::rename(temp_path, target)
        }
        other => other,
    }
}

#[cfg(not(target_os = "windows"))]
fn swap_into_place(temp_path: &Path, target: &Path) -> io::Result<()> {
    fs::rename(temp_path, target)
}

fn create_backup(target: &Path) -> Result<PathBuf, PersistError> {
    let timestamp = Local::now().format("%Y%m%d%H%M%S");
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(format!(".bak.{timestamp}"));
    let candidate = target.with_file_name(name);

    fs::copy(target, &candidate).map_err(|err| PersistError::Backup {
        path: target.to_path_buf(),
        reason: err.to_string(),
    })?;
    log::info!("backed up {} to {}", target.display(), candidate.display());
    Ok(candidate)
}

fn build_temp_path(target: &Path) -> PathBuf {
    let mut temp = target.to_path_buf();
    let pid = std::process::id();
    let suffix = format!("__tmp__pid_{}", pid);
    match temp.file_name() {
        Some(name) => {
            let mut os_string = name.to_os_string();
            os_string.push(suffix);
            temp.set_file_name(os_string);
        }
        None => {
            temp.push(format!("temp_{pid}"));
        }
    }
    temp
}
