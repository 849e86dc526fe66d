//! End-to-End Tests for the localize command
//!
//! These tests run the public API against a project tree on disk:
//! 1. Root discovery from the active file
//! 2. Strings file reading
//! 3. Value lookup
//! 4. Entry insertion with natural sorting
//! 5. Atomic write-back

use std::fs;
use std::path::{Path, PathBuf};
use strkey_core::{
    find_key, find_root, localize_selection, lookup, natural_cmp, InputPrompt, LocalizeError,
    LocalizerConfig, MatchMode, Outcome, ReplacementSink, SelectionProvider, Store,
};
use tempfile::TempDir;

const FIXTURE_STRINGS: &str = include_str!("fixtures/CommonStrings.ed.properties");

struct ScriptedEditor {
    file: PathBuf,
    selection: String,
    answer: Option<String>,
    inserted: Option<String>,
}

impl SelectionProvider for ScriptedEditor {
    fn active_file(&self) -> Option<PathBuf> {
        Some(self.file.clone())
    }

    fn selection(&self) -> Option<String> {
        Some(self.selection.clone())
    }
}

impl ReplacementSink for ScriptedEditor {
    fn replace_selection(&mut self, text: &str) {
        self.inserted = Some(text.to_string());
    }
}

impl InputPrompt for ScriptedEditor {
    fn ask(&mut self, _label: &str, _default: &str) -> Option<String> {
        self.answer.clone()
    }
}

/// Lay out `duda/DudaRoot` with the fixture strings file and one source file
fn setup_project() -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path().join("duda").join("DudaRoot");
    let strings = root.join("src/resources/English/strings/CommonStrings.ed.properties");
    fs::create_dir_all(strings.parent().unwrap()).expect("Failed to create strings dir");
    fs::write(&strings, FIXTURE_STRINGS).expect("Failed to write fixture");

    let source = root.join("src/editor/panels/settings.js");
    (temp_dir, strings, source)
}

fn run(source: &Path, selection: &str, answer: Option<&str>) -> (Result<Outcome, LocalizeError>, Option<String>) {
    let mut editor = ScriptedEditor {
        file: source.to_path_buf(),
        selection: selection.to_string(),
        answer: answer.map(str::to_string),
        inserted: None,
    };
    let result = localize_selection(&mut editor, &LocalizerConfig::default());
    (result, editor.inserted)
}

/// Fixture is already in natural order
#[test]
fn test_e2e_fixture_is_naturally_sorted() {
    let store = Store::parse(FIXTURE_STRINGS, Default::default());
    let lines = store.lines();
    for pair in lines.windows(2) {
        assert_ne!(
            natural_cmp(&pair[0], &pair[1]),
            std::cmp::Ordering::Greater,
            "{} should not sort after {}",
            pair[0],
            pair[1]
        );
    }
}

/// Known value: key substituted, file untouched
#[test]
fn test_e2e_existing_value() {
    let (_dir, strings, source) = setup_project();

    let (result, inserted) = run(&source, "Hello", None);

    assert!(matches!(result.expect("localize failed"), Outcome::Reused { .. }));
    assert_eq!(inserted.as_deref(), Some("str('greeting')"));
    assert_eq!(fs::read_to_string(&strings).unwrap(), FIXTURE_STRINGS);
}

/// New value: entry written, store re-sorted, key substituted
#[test]
fn test_e2e_new_value() {
    let (_dir, strings, source) = setup_project();

    let (result, inserted) = run(&source, "Goodbye", Some("farewell"));

    assert!(matches!(result.expect("localize failed"), Outcome::Added { .. }));
    assert_eq!(inserted.as_deref(), Some("str('farewell')"));

    let store = Store::read(&strings).expect("Failed to re-read store");
    let original = Store::parse(FIXTURE_STRINGS, Default::default());
    assert_eq!(store.len(), original.len() + 1);
    assert!(original.lines().iter().all(|line| store.lines().contains(line)));
    assert_eq!(store.lines()[1], "ui.ed.farewell=Goodbye");

    let mut expected = store.lines().to_vec();
    strkey_core::sort_naturally(&mut expected);
    assert_eq!(store.lines(), expected.as_slice());
}

/// Numeric key runs sort as integers after insertion
#[test]
fn test_e2e_numeric_keys_sort_naturally() {
    let (_dir, strings, source) = setup_project();

    let (result, _) = run(&source, "Page three", Some("page3"));
    result.expect("localize failed");

    let content = fs::read_to_string(&strings).unwrap();
    let pages: Vec<&str> = content.lines().filter(|l| l.starts_with("ui.ed.page")).collect();
    assert_eq!(
        pages,
        vec![
            "ui.ed.page1=Page one",
            "ui.ed.page2=Page two",
            "ui.ed.page3=Page three",
            "ui.ed.page10=Page ten",
        ]
    );
}

/// No marker directory: error, no prompt, no write
#[test]
fn test_e2e_root_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("scratch/notes.js");

    let (result, inserted) = run(&source, "Hello", Some("greeting"));

    let err = result.expect_err("expected root lookup to fail");
    assert!(err.is_root_not_found());
    assert!(inserted.is_none());
    assert!(fs::read_dir(temp_dir.path()).unwrap().next().is_none());
}

/// Lookup helpers on their own
#[test]
fn test_e2e_lookup_api() {
    let (_dir, strings, source) = setup_project();
    let config = LocalizerConfig::default();

    assert_eq!(
        lookup(&config, &source, "save changes").unwrap().as_deref(),
        Some("ui.ed.save")
    );
    assert_eq!(lookup(&config, &source, "Unknown").unwrap(), None);

    let root = find_root(&source, &config.store.marker_path(), 64).unwrap();
    assert!(strings.starts_with(&root));

    let store = Store::read(&strings).unwrap();
    assert_eq!(find_key(store.entries(), "page TWO", MatchMode::Exact), Some("ui.ed.page2"));
}
