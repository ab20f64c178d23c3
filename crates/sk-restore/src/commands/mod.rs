//! CLI command implementations for sk-restore.
//!
//! Each module corresponds to a subcommand (`sk-restore <command>`).

pub mod check;
pub mod list;
pub mod restore;

use std::path::Path;

use anyhow::Result;
use sk_restore_core::manifest::Manifest;

/// Load the manifest at `path`, or the built-in samples when none is given.
pub fn load_manifest(path: Option<&Path>) -> Result<Manifest> {
    Ok(match path {
        Some(path) => Manifest::load(path)?,
        None => Manifest::builtin(),
    })
}
