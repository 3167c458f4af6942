//! # CLI Module
//!
//! The CLI module provides the command-line interface for the modelgen
//! code generator.
//!
//! ## Overview
//!
//! The CLI supports:
//! - **Code Generation** - Generate all target artifact sets from a model schema
//! - **Cleanup** - Delete generated output while preserving custom regions
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate all targets from an exported model schema:
//!
//! ```bash
//! modelgen generate --model model.yaml --settings modelgen.toml --output ./out
//! ```
//!
//! Options:
//! - `--model <FILE>` - Path to the model schema, YAML or JSON (required)
//! - `--settings <FILE>` - Generation settings file in TOML format
//! - `--output <DIR>` - Destination root for generated output (required)
//! - `--dry-run` - Report what would change without writing anything
//! - `--force` - Overwrite user-owned files
//!
//! ### `clean`
//!
//! Delete all generated files under an output root, backing up custom
//! regions to side-files first:
//!
//! ```bash
//! modelgen clean --output ./out
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use modelgen::cli::run_cli;
//!
//! run_cli()?;
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};
