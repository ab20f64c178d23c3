//! Writes manifest entries to disk.
//!
//! For every entry, in manifest order, the materializer truncates (or creates)
//! `<root>/<name>/Program.cs`, writes the source text verbatim, and prints
//! `Created <name>/Program.cs` to the output sink. A final `Done!` line follows
//! once every entry has been written.
//!
//! The run is fail-fast: the first I/O error is returned immediately. Files written
//! before the failure stay on disk, the failed entry gets no confirmation line, and
//! `Done!` is not printed.
//!
//! Project directories are expected to exist already. [`Materializer::create_dirs`]
//! turns on creating them first.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::entry::Entry;
use crate::error::Result;
use crate::manifest::Manifest;

/// Summary of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Target paths written, in order.
    pub written: Vec<PathBuf>,
}

pub struct Materializer {
    root: PathBuf,
    create_dirs: bool,
}

impl Materializer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            create_dirs: false,
        }
    }

    /// Create each project directory before writing into it.
    pub fn create_dirs(mut self, yes: bool) -> Self {
        self.create_dirs = yes;
        self
    }

    /// Restore every entry of `manifest`, printing progress lines to `out`.
    pub fn run<W: Write>(&self, manifest: &Manifest, out: &mut W) -> Result<Report> {
        let mut report = Report::default();

        for entry in manifest {
            let path = self.write_entry(entry)?;
            writeln!(out, "Created {}", entry.display_path())?;
            report.written.push(path);
        }

        writeln!(out, "Done!")?;
        out.flush()?;
        Ok(report)
    }

    fn write_entry(&self, entry: &Entry) -> Result<PathBuf> {
        let path = entry.target_path(&self.root);

        if self.create_dirs {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        tracing::debug!(path = %path.display(), bytes = entry.source().len(), "writing");
        // The handle is dropped on every exit path, including a failed write.
        let mut file = File::create(&path)?;
        file.write_all(entry.source().as_bytes())?;
        file.flush()?;

        tracing::info!(project = %entry.name(), "restored");
        Ok(path)
    }
}
