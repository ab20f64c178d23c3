use std::path::Path;

use anyhow::Result;

use sk_restore_core::manifest::Manifest;
use sk_restore_core::materializer::Materializer;

/// Write every manifest entry under `root`.
///
/// Progress goes to stdout exactly as `Created <name>/Program.cs` lines followed
/// by `Done!`. The first write failure aborts the run with the OS error.
pub fn run(manifest: &Manifest, root: &Path, create_dirs: bool) -> Result<()> {
    tracing::info!(root = %root.display(), projects = manifest.len(), "restoring");

    let stdout = std::io::stdout();
    let report = Materializer::new(root)
        .create_dirs(create_dirs)
        .run(manifest, &mut stdout.lock())?;

    tracing::debug!(written = report.written.len(), "restore finished");
    Ok(())
}
