/// The strings file held in memory as an ordered list of `prefix.key=value` lines
use std::fs;
use std::io;
use std::path::Path;

use crate::encoding::TextLayout;
use crate::error::LocalizeError;

/// One `prefix.key=value` line, borrowed from the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    line: &'a str,
}

impl<'a> Entry<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { line }
    }

    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Text before the first `=`, or the whole line when there is none.
    pub fn key(&self) -> &'a str {
        self.line.split_once('=').map_or(self.line, |(key, _)| key)
    }

    pub fn value(&self) -> Option<&'a str> {
        self.line.split_once('=').map(|(_, value)| value)
    }

    pub fn key_without_prefix(&self, prefix: &str) -> &'a str {
        strip_key_prefix(self.key(), prefix)
    }
}

/// Drop `prefix` from the front of `key` once, if present.
pub fn strip_key_prefix<'k>(key: &'k str, prefix: &str) -> &'k str {
    key.strip_prefix(prefix).unwrap_or(key)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    lines: Vec<String>,
    layout: TextLayout,
}

impl Store {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            layout: TextLayout::default(),
        }
    }

    /// Split file text into lines, dropping blank lines at the end.
    pub fn parse(text: &str, layout: TextLayout) -> Self {
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
        Self { lines, layout }
    }

    pub fn read(path: &Path) -> Result<Self, LocalizeError> {
        let bytes = fs::read(path).map_err(|e| LocalizeError::io(path, e))?;
        let layout = TextLayout::detect(&bytes);
        let text = layout.decode(&bytes).map_err(|e| LocalizeError::io(path, e))?;
        let store = Self::parse(&text, layout);
        log::debug!("read {} lines from {}", store.len(), path.display());
        Ok(store)
    }

    /// Every line followed by the file's newline style.
    pub fn render(&self) -> String {
        let newline = self.layout.newline.as_str();
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push_str(newline);
        }
        out
    }

    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        self.layout.encode(&self.render())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<String> {
        &mut self.lines
    }

    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.lines.iter().map(|line| Entry::new(line))
    }

    /// First entry whose key is exactly `key`.
    pub fn entry_for_key(&self, key: &str) -> Option<Entry<'_>> {
        self.entries().find(|entry| entry.key() == key)
    }

    pub fn layout(&self) -> TextLayout {
        self.layout
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
