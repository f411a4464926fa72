//! MIME type detection based on file extensions.
//!
//! The table is read from a flat text file where every record is a content
//! type followed by the extensions it covers:
//!
//! ```text
//! text/html   html htm
//! image/png   png
//! ```
//!
//! The first blank or whitespace-leading line ends the table. Lines starting
//! with `#` are skipped.

use std::path::Path;

use anyhow::Context;

/// Content type served when a path has no extension or no record matches.
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// One line of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeEntry {
    pub content_type: String,
    pub extensions: Vec<String>,
}

/// Ordered extension → content type table. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct MimeTable {
    entries: Vec<MimeEntry>,
}

impl MimeTable {
    /// Reads and parses the table at `path`.
    ///
    /// Failing to open the file is an error; the contents themselves never
    /// fail to parse, a malformed file simply yields fewer records. Bytes that
    /// are not UTF-8 are replaced, so they match no request extension.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read(path)
            .with_context(|| format!("failed to open mime table {}", path.display()))?;

        let table = Self::parse(&String::from_utf8_lossy(&raw));
        tracing::debug!(
            path = %path.display(),
            records = table.len(),
            "Loaded mime table"
        );
        Ok(table)
    }

    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::new();

        for line in text.lines() {
            if line.is_empty() || line.starts_with(char::is_whitespace) {
                break;
            }
            if line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let Some(content_type) = tokens.next() else {
                break;
            };

            entries.push(MimeEntry {
                content_type: content_type.to_string(),
                extensions: tokens.map(str::to_string).collect(),
            });
        }

        Self { entries }
    }

    /// Returns the content type for a request path.
    ///
    /// The extension is whatever follows the last `.` in `path`. Matching is
    /// case-sensitive and the first record listing the extension wins.
    pub fn content_type_for(&self, path: &str) -> &str {
        let Some(extension) = extract_extension(path) else {
            return DEFAULT_CONTENT_TYPE;
        };

        self.entries
            .iter()
            .find(|entry| entry.extensions.iter().any(|e| e == extension))
            .map(|entry| entry.content_type.as_str())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
    }

    pub fn entries(&self) -> &[MimeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Substring after the last `.`, if there is one.
pub fn extract_extension(path: &str) -> Option<&str> {
    path.rsplit_once('.').map(|(_, ext)| ext)
}
