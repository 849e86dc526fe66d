/// The localize command: selected literal text becomes a key reference
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::{DuplicatePolicy, LocalizerConfig};
use crate::error::LocalizeError;
use crate::host::EditorHost;
use crate::resolver::find_key;
use crate::root::find_root;
use crate::store::{strip_key_prefix, Store};
use crate::updater::add_and_persist;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Outcome {
    /// The value was already stored; its key was inserted
    Reused { key: String, inserted: String },
    /// A new entry was written to `store_path` and its key inserted
    Added {
        key: String,
        inserted: String,
        #[serde(rename = "storePath")]
        store_path: PathBuf,
    },
    /// The key prompt was dismissed; nothing changed
    Cancelled,
}

/// Clean up raw selection text into the value to look up and store.
pub fn prepare_selection(raw: Option<String>, strip_quotes: bool) -> Result<String, LocalizeError> {
    let mut text = raw.unwrap_or_default();
    if strip_quotes {
        text.retain(|c| c != '\'');
    }

    let text = text.trim();
    if text.is_empty() {
        return Err(LocalizeError::EmptySelection);
    }
    if text.contains(['\n', '\r']) {
        return Err(LocalizeError::MultilineSelection);
    }
    Ok(text.to_string())
}

/// Trim user input and drop a typed prefix so it is never stored twice.
pub fn normalize_user_key(raw: &str, prefix: &str) -> Result<String, LocalizeError> {
    let key = strip_key_prefix(raw.trim(), prefix);
    if key.is_empty() {
        return Err(LocalizeError::EmptyKey);
    }
    if key.contains('=') || key.chars().any(char::is_whitespace) {
        return Err(LocalizeError::InvalidKey {
            key: key.to_string(),
        });
    }
    Ok(key.to_string())
}

/// Strings file belonging to the project that contains `file`.
pub fn resolve_store_path(config: &LocalizerConfig, file: &Path) -> Result<PathBuf, LocalizeError> {
    let root = find_root(file, &config.store.marker_path(), config.walk.max_depth)?;
    let path = config.store.strings_file(&root);
    log::info!("strings file: {}", path.display());
    Ok(path)
}

/// Key (prefix included) already holding `value` in the project of `file`.
pub fn lookup(
    config: &LocalizerConfig,
    file: &Path,
    value: &str,
) -> Result<Option<String>, LocalizeError> {
    let path = resolve_store_path(config, file)?;
    let store = Store::read(&path)?;
    Ok(find_key(store.entries(), value, config.lookup.match_mode).map(str::to_string))
}

/// Run the whole command against `host`.
///
/// Preconditions are checked before any file is touched. On a new value the
/// store is written before the document changes, so a failed write never
/// leaves a dangling key reference behind.
pub fn localize_selection<H>(host: &mut H, config: &LocalizerConfig) -> Result<Outcome, LocalizeError>
where
    H: EditorHost + ?Sized,
{
    let file = host.active_file().ok_or(LocalizeError::NoActiveFile)?;
    let value = prepare_selection(host.selection(), config.lookup.strip_quotes)?;
    let store_path = resolve_store_path(config, &file)?;
    let mut store = Store::read(&store_path)?;
    let prefix = config.store.key_prefix.as_str();

    if let Some(key) = find_key(store.entries(), &value, config.lookup.match_mode) {
        let short = strip_key_prefix(key, prefix).to_string();
        let inserted = config.insert.render(&short);
        host.replace_selection(&inserted);
        return Ok(Outcome::Reused {
            key: short,
            inserted,
        });
    }

    let Some(answer) = host.ask(&config.insert.prompt_label, "") else {
        log::warn!("key prompt cancelled; {} left unchanged", store_path.display());
        return Ok(Outcome::Cancelled);
    };

    let key = normalize_user_key(&answer, prefix)?;
    if config.keys.duplicate_policy == DuplicatePolicy::Reject {
        let full_key = format!("{prefix}{key}");
        if let Some(existing) = store.entry_for_key(&full_key) {
            return Err(LocalizeError::DuplicateKey {
                key,
                existing: existing.value().unwrap_or_default().to_string(),
            });
        }
    }

    add_and_persist(
        &mut store,
        prefix,
        &key,
        &value,
        &store_path,
        config.store.keep_backup,
    )?;

    let inserted = config.insert.render(&key);
    host.replace_selection(&inserted);
    Ok(Outcome::Added {
        key,
        inserted,
        store_path,
    })
}
