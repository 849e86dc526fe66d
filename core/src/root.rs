/// Upward search for the project root marker
use std::path::{Component, Path, PathBuf};

use crate::error::LocalizeError;

/// Walk from `start` through its ancestors until one ends with `marker`.
///
/// Relative paths are resolved against the current directory first. The walk is
/// lexical and bounded by `max_depth` steps; reaching the filesystem root, an
/// empty path or the bound all count as not found.
pub fn find_root(start: &Path, marker: &Path, max_depth: usize) -> Result<PathBuf, LocalizeError> {
    let absolute = absolutize(start);
    let mut current: &Path = &absolute;

    for _ in 0..=max_depth {
        if current.as_os_str().is_empty() {
            break;
        }
        if !marker.as_os_str().is_empty() && current.ends_with(marker) {
            log::info!("root folder: {}", dunce::simplified(current).display());
            return Ok(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => {
                return Err(LocalizeError::RootNotFound {
                    start: start.to_path_buf(),
                })
            }
        }
    }

    if current.as_os_str().is_empty() {
        return Err(LocalizeError::RootNotFound {
            start: start.to_path_buf(),
        });
    }

    Err(LocalizeError::WalkTooDeep {
        start: start.to_path_buf(),
        depth: max_depth,
    })
}

/// Join relative paths onto the cwd and fold `.` and `..` away, so the walk
/// only sees directories the path actually passes through.
fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
