//! sk-restore CLI: writes the Semantic Kernel concept samples back onto disk.
//!
//! Running with no subcommand restores the built-in samples into `Concepts/`,
//! printing `Created <name>/Program.cs` per project and `Done!` at the end.
//! `list` and `check` inspect a manifest and the files on disk without writing.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sk_restore_core::entry::DEFAULT_ROOT;

#[derive(Parser)]
#[command(
    name = "sk-restore",
    about = "Restore the Semantic Kernel concept sample programs",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding one subdirectory per project
    #[arg(long, global = true, env = "SK_RESTORE_ROOT", default_value = DEFAULT_ROOT)]
    root: PathBuf,

    /// JSON manifest of project name -> source text (default: built-in samples)
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every project's Program.cs (the default)
    Restore {
        /// Create missing project directories instead of failing
        #[arg(long)]
        create_dirs: bool,
    },

    /// List the projects in the manifest with their target paths
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Compare files on disk with the manifest
    Check {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stderr keeps stdout to the progress lines.
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let manifest = commands::load_manifest(cli.manifest.as_deref())?;

    match cli.command.unwrap_or(Commands::Restore { create_dirs: false }) {
        Commands::Restore { create_dirs } => {
            commands::restore::run(&manifest, &cli.root, create_dirs)?;
        }
        Commands::List { json } => {
            commands::list::run(&manifest, &cli.root, json)?;
        }
        Commands::Check { json } => {
            commands::check::run(&manifest, &cli.root, json)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults() {
        let cli = Cli::try_parse_from(["sk-restore"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.root, PathBuf::from("Concepts"));
        assert!(cli.manifest.is_none());
    }

    #[test]
    fn test_restore_flags() {
        let cli = Cli::try_parse_from([
            "sk-restore",
            "restore",
            "--create-dirs",
            "--root",
            "out",
            "--manifest",
            "m.json",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Restore { create_dirs: true })
        ));
        assert_eq!(cli.root, PathBuf::from("out"));
        assert_eq!(cli.manifest, Some(PathBuf::from("m.json")));
    }
}
