//! A single project to restore and the path it lands on.

use std::path::{Component, Path, PathBuf};

use crate::error::{Result, RestoreError};

/// File name every project's source text is written to.
pub const PROGRAM_FILE: &str = "Program.cs";

/// Default directory the concept projects live under.
pub const DEFAULT_ROOT: &str = "Concepts";

/// One (project name, source text) pair.
///
/// The source text is opaque: it is written byte-for-byte and never inspected.
/// Entries are only built through [`Entry::new`], so every name is a valid directory name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    source: String,
}

impl Entry {
    /// Build an entry, rejecting names that would escape the root directory.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            name,
            source: source.into(),
        })
    }

    /// Entry from the embedded catalog; names there are checked by tests.
    pub(crate) fn embedded(name: &str, source: &str) -> Self {
        debug_assert!(validate_name(name).is_ok(), "bad embedded name {name:?}");
        Self {
            name: name.to_string(),
            source: source.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// `<root>/<name>/Program.cs`.
    pub fn target_path(&self, root: &Path) -> PathBuf {
        root.join(&self.name).join(PROGRAM_FILE)
    }

    /// Root-relative label used in console output, e.g. `ChatCompletion/Program.cs`.
    pub fn display_path(&self) -> String {
        format!("{}/{}", self.name, PROGRAM_FILE)
    }
}

/// A project name must be exactly one normal path component.
fn validate_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(c)), None) if c == name => Ok(()),
        _ => Err(RestoreError::InvalidProjectName(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_path() {
        let entry = Entry::new("ChatCompletion", "x").unwrap();
        assert_eq!(
            entry.target_path(Path::new("Concepts")),
            Path::new("Concepts").join("ChatCompletion").join("Program.cs")
        );
        assert_eq!(entry.display_path(), "ChatCompletion/Program.cs");
    }

    #[test]
    fn test_rejects_bad_names() {
        for bad in ["", ".", "..", "a/b", "/abs", "a/"] {
            assert!(
                matches!(Entry::new(bad, ""), Err(RestoreError::InvalidProjectName(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_embedded_names_are_valid() {
        for (name, source) in crate::templates::embedded::CONCEPTS {
            let entry = Entry::new(*name, *source).unwrap();
            assert_eq!(entry, Entry::embedded(name, source));
        }
    }

    #[test]
    fn test_traversal_name_cannot_reach_target_path() {
        let err = Entry::new("../outside", "x").unwrap_err();
        assert!(matches!(err, RestoreError::InvalidProjectName(ref n) if n == "../outside"));
    }

    #[test]
    fn test_accepts_unicode_name() {
        assert!(Entry::new("聊天", "").is_ok());
    }
}
