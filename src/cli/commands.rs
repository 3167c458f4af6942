use crate::engine::{Engine, GenerateOptions};
use crate::settings::{MemorySettingsStore, SettingsResolver, SettingsStore, TomlSettingsStore};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

/// Command-line interface for modelgen
///
/// Provides commands for generating the target artifact sets from a model
/// schema and for deleting previously generated output.
#[derive(Parser)]
#[command(name = "modelgen")]
#[command(about = "Model-driven CRUD code generator", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate all target artifacts from a model schema
    Generate {
        /// Path to the exported model schema (YAML or JSON)
        #[arg(short, long)]
        model: PathBuf,

        /// Path to the generation settings file (TOML)
        ///
        /// When absent, every option resolves through its fallback chain.
        #[arg(short, long)]
        settings: Option<PathBuf>,

        /// Destination root for generated output
        #[arg(short, long)]
        output: PathBuf,

        /// Perform a dry run: show what would change without writing files
        #[arg(long, default_value_t = false)]
        dry_run: bool,

        /// Overwrite user-owned files (files missing the generated label)
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Delete all generated files under an output root
    ///
    /// Custom regions are backed up to side-files before deletion. Files
    /// without the generated label are never touched.
    Clean {
        /// Output root previously generated into
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if the settings file cannot be loaded, or if the run
/// completed with per-artifact or per-path failures (the failures are
/// printed before the error is returned).
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            model,
            settings,
            output,
            dry_run,
            force,
        } => {
            let store: Arc<dyn SettingsStore> = match settings {
                Some(path) => Arc::new(TomlSettingsStore::load(path)?),
                None => Arc::new(MemorySettingsStore::new()),
            };
            let resolver = SettingsResolver::new(store);
            let engine = Engine::from_model_path(model, resolver);
            println!(
                "📄 Loaded model {} ({} types)",
                model.display(),
                engine.model().len()
            );

            let options = GenerateOptions {
                dry_run: *dry_run,
                force: *force,
            };
            let report = engine.generate(output, options);
            let verb = if *dry_run { "would write" } else { "wrote" };
            for (unit, unit_report) in &report.units {
                println!(
                    "✅ {unit}: {} artifacts, {verb} {} files, skipped {}",
                    unit_report.generated,
                    unit_report.writes.written.len(),
                    unit_report.writes.skipped.len()
                );
                for failure in &unit_report.failures {
                    println!(
                        "⚠️  {unit}: {} {} failed: {}",
                        failure.kind, failure.item, failure.error
                    );
                }
                for (path, error) in &unit_report.writes.failed {
                    println!("⚠️  {unit}: write {} failed: {error}", path.display());
                }
            }
            println!(
                "✅ Generated {} artifacts → {}",
                report.total_generated(),
                output.display()
            );
            if report.has_failures() {
                anyhow::bail!("generation completed with failures");
            }
            Ok(())
        }
        Commands::Clean { output } => {
            let report = Engine::clean(output);
            for path in &report.backed_up {
                println!("📄 Backed up custom regions of {}", path.display());
            }
            println!(
                "✅ Deleted {} generated files under {}",
                report.deleted.len(),
                output.display()
            );
            for (path, error) in &report.failed {
                println!("⚠️  cleanup of {} failed: {error}", path.display());
            }
            if !report.failed.is_empty() {
                anyhow::bail!("cleanup completed with failures");
            }
            Ok(())
        }
    }
}
