/// Configuration for the localize action
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LocalizeError;

/// Where the strings file lives and how it is written back
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreOptions {
    pub key_prefix: String,
    /// Relative path suffix identifying the project root, `/`-separated
    pub root_marker: String,
    /// Strings file location relative to the root, `/`-separated
    pub strings_path: String,
    pub keep_backup: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            key_prefix: "ui.ed.".to_string(),
            root_marker: "duda/DudaRoot".to_string(),
            strings_path: "src/resources/English/strings/CommonStrings.ed.properties".to_string(),
            keep_backup: false,
        }
    }
}

impl StoreOptions {
    pub fn marker_path(&self) -> PathBuf {
        split_relative(&self.root_marker)
    }

    pub fn strings_file(&self, root: &Path) -> PathBuf {
        root.join(split_relative(&self.strings_path))
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Entry text ends with `=` followed by the value
    #[default]
    Suffix,
    /// Value after the first `=` equals the selection
    Exact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LookupOptions {
    pub match_mode: MatchMode,
    pub strip_quotes: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Suffix,
            strip_quotes: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsertOptions {
    /// `{key}` is replaced by the key without its prefix
    pub template: String,
    pub prompt_label: String,
}

impl Default for InsertOptions {
    fn default() -> Self {
        Self {
            template: "str('{key}')".to_string(),
            prompt_label: "Write localization key".to_string(),
        }
    }
}

impl InsertOptions {
    pub fn render(&self, key: &str) -> String {
        self.template.replace("{key}", key)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    #[default]
    Reject,
    Allow,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyOptions {
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalkOptions {
    pub max_depth: usize,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalizerConfig {
    #[serde(default)]
    pub store: StoreOptions,
    #[serde(default)]
    pub lookup: LookupOptions,
    #[serde(default)]
    pub insert: InsertOptions,
    #[serde(default)]
    pub keys: KeyOptions,
    #[serde(default)]
    pub walk: WalkOptions,
}

impl LocalizerConfig {
    /// Load configuration from a JSON file, or YAML when the extension says so
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LocalizeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LocalizeError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        if is_yaml(path) {
            serde_yaml::from_str(&content)
                .map_err(|e| LocalizeError::Config(format!("Failed to parse YAML config: {}", e)))
        } else {
            Self::from_json(&content)
        }
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), LocalizeError> {
        let path = path.as_ref();
        let content = if is_yaml(path) {
            serde_yaml::to_string(self)
                .map_err(|e| LocalizeError::Config(format!("Failed to serialize config: {}", e)))?
        } else {
            self.to_json()?
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| LocalizeError::Config(format!("Failed to create config dir: {}", e)))?;
        }
        fs::write(path, content)
            .map_err(|e| LocalizeError::Config(format!("Failed to write config file: {}", e)))
    }

    pub fn from_json(json: &str) -> Result<Self, LocalizeError> {
        serde_json::from_str(json)
            .map_err(|e| LocalizeError::Config(format!("Failed to parse JSON config: {}", e)))
    }

    pub fn to_json(&self) -> Result<String, LocalizeError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LocalizeError::Config(format!("Failed to serialize to JSON: {}", e)))
    }

    /// `<config dir>/strkey/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("strkey").join("config.json"))
    }

    /// An explicit path must load; the default location is optional.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, LocalizeError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                log::debug!("loading config from {}", path.display());
                Self::from_file(path)
            }
            _ => Ok(Self::default()),
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn split_relative(value: &str) -> PathBuf {
    value
        .split(['/', '\\'])
        .filter(|part| !part.is_empty())
        .collect()
}
