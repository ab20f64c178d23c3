//! The ordered set of projects to restore.
//!
//! A manifest is either the built-in catalog ([`Manifest::builtin`]), a JSON file
//! ([`Manifest::load`]), or assembled by the caller with [`Manifest::push`].
//!
//! ## File format
//!
//! ```json
//! {
//!   "ChatCompletion": "#pragma warning disable SKEXP0001\n...",
//!   "Streaming": "..."
//! }
//! ```
//!
//! Keys are project names and values are the source text. Key order in the file is
//! the order projects are restored in. A key that appears twice is rejected.

use std::fmt;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value;

use crate::entry::Entry;
use crate::error::{Result, RestoreError};
use crate::templates::embedded;

/// Ordered, duplicate-free collection of [`Entry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<Entry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// The samples embedded in the binary.
    pub fn builtin() -> Self {
        Self {
            entries: embedded::CONCEPTS
                .iter()
                .map(|(name, source)| Entry::embedded(name, source))
                .collect(),
        }
    }

    /// Build a manifest from `(name, source)` pairs, keeping their order.
    pub fn from_entries<I, N, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<String>,
    {
        let mut manifest = Self::new();
        for (name, source) in pairs {
            manifest.push(name, source)?;
        }
        Ok(manifest)
    }

    /// Append an entry. Fails if the name is invalid or already present.
    pub fn push(&mut self, name: impl Into<String>, source: impl Into<String>) -> Result<()> {
        let entry = Entry::new(name, source)?;
        if self.get(entry.name()).is_some() {
            return Err(RestoreError::DuplicateProject(entry.name().to_string()));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Load a manifest from a JSON object of `name -> source` strings.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| RestoreError::ManifestNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        let ProjectTable(pairs) =
            serde_json::from_str(&contents).map_err(|e| RestoreError::ManifestParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut manifest = Self::new();
        for (name, value) in pairs {
            let Value::String(source) = value else {
                return Err(RestoreError::InvalidManifest {
                    path: path.to_path_buf(),
                    reason: format!("value for {name:?} is not a string"),
                });
            };
            manifest.push(name, source)?;
        }

        if manifest.is_empty() {
            return Err(RestoreError::EmptyManifest);
        }
        tracing::debug!(path = %path.display(), projects = manifest.len(), "loaded manifest");
        Ok(manifest)
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A JSON object read as ordered `(key, value)` pairs, repeated keys included.
struct ProjectTable(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for ProjectTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = ProjectTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of project name to source text")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    pairs.push((key, value));
                }
                Ok(ProjectTable(pairs))
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
