//! Read-only comparison of restored files against a manifest.
//!
//! Digests are SHA-256 over the exact bytes of the source text, hex-encoded.

use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::manifest::Manifest;

/// State of one target file relative to its manifest entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    UpToDate,
    Modified,
    Missing,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpToDate => "up-to-date",
            Self::Modified => "modified",
            Self::Missing => "missing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub path: PathBuf,
    pub status: Status,
    /// Digest of the manifest's source text.
    pub expected: String,
    /// Digest of the file on disk, if it exists.
    pub actual: Option<String>,
}

/// Hex SHA-256 of `bytes`.
pub fn digest(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(Sha256::digest(bytes.as_ref()))
}

/// Compare every entry of `manifest` against `<root>/<name>/Program.cs`.
///
/// A missing file is reported, not an error. Any other read failure is returned.
pub fn compare(manifest: &Manifest, root: &Path) -> Result<Vec<CheckResult>> {
    let mut results = Vec::with_capacity(manifest.len());

    for entry in manifest {
        let path = entry.target_path(root);
        let expected = digest(entry.source());

        let actual = match std::fs::read(&path) {
            Ok(bytes) => Some(digest(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        let status = match &actual {
            None => Status::Missing,
            Some(d) if *d == expected => Status::UpToDate,
            Some(_) => Status::Modified,
        };
        if status != Status::UpToDate {
            tracing::warn!(project = %entry.name(), status = status.as_str(), "target differs");
        }

        results.push(CheckResult {
            name: entry.name().to_string(),
            path,
            status,
            expected,
            actual,
        });
    }

    Ok(results)
}
