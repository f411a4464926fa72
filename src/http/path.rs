//! Mapping request paths onto the document root.
//!
//! Every check here runs before the filesystem is touched, so a rejected
//! path never causes a file to be opened.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// A segment of the path is `..`
    Traversal,
    /// The path contains a NUL byte
    NulByte,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Traversal => f.write_str("path escapes the document root"),
            PathError::NulByte => f.write_str("path contains a NUL byte"),
        }
    }
}

impl std::error::Error for PathError {}

/// True if any `/` or `\` separated segment of `raw` is exactly `..`.
pub fn contains_traversal(raw: &str) -> bool {
    raw.split(['/', '\\']).any(|segment| segment == "..")
}

/// Joins `raw` onto `root`.
///
/// `root` + `raw` when `raw` starts with `/`, otherwise `root` + `/` + `raw`.
pub fn resolve(root: &Path, raw: &str) -> Result<PathBuf, PathError> {
    if raw.contains('\0') {
        return Err(PathError::NulByte);
    }
    if contains_traversal(raw) {
        return Err(PathError::Traversal);
    }

    let mut full = OsString::from(root.as_os_str());
    if !raw.starts_with('/') {
        full.push("/");
    }
    full.push(raw);

    Ok(PathBuf::from(full))
}
