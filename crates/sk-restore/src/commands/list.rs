use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use sk_restore_core::check::digest;
use sk_restore_core::manifest::Manifest;

use crate::output;

#[derive(Serialize)]
struct Listing<'a> {
    name: &'a str,
    path: PathBuf,
    bytes: usize,
    sha256: String,
}

/// Print every project with its target path, size and digest.
pub fn run(manifest: &Manifest, root: &Path, json: bool) -> Result<()> {
    let listings: Vec<Listing<'_>> = manifest
        .iter()
        .map(|entry| Listing {
            name: entry.name(),
            path: entry.target_path(root),
            bytes: entry.source().len(),
            sha256: digest(entry.source()),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    output::print_header(&format!("sk-restore list: {} project(s)", listings.len()));
    for item in &listings {
        println!("{}", item.name);
        output::print_key_value("path", &item.path.display().to_string());
        output::print_key_value("bytes", &item.bytes.to_string());
        output::print_key_value("sha256", &item.sha256);
    }
    Ok(())
}
