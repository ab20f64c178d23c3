use std::path::Path;

use anyhow::Result;

use sk_restore_core::check::{self, Status};
use sk_restore_core::manifest::Manifest;

use crate::output;

/// Report which targets under `root` match the manifest.
///
/// Fails when any target is missing or modified, so scripts can gate on the exit code.
pub fn run(manifest: &Manifest, root: &Path, json: bool) -> Result<()> {
    let results = check::compare(manifest, root)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        output::print_header(&format!("sk-restore check: {}", root.display()));
        for result in &results {
            let label = format!("{} ({})", result.name, result.path.display());
            match result.status {
                Status::UpToDate => output::print_success(&label),
                Status::Modified | Status::Missing => {
                    output::print_warning(&format!("{label}: {}", result.status.as_str()))
                }
            }
        }
    }

    let stale = results
        .iter()
        .filter(|r| r.status != Status::UpToDate)
        .count();
    if stale > 0 {
        anyhow::bail!("{stale} of {} project(s) out of date", results.len());
    }
    Ok(())
}
