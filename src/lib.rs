//! # modelgen
//!
//! **modelgen** is a model-driven code generator for CRUD services: a single
//! exported model schema drives the generation of shared contracts, a data
//! layer, a web API, desktop MVVM views, and an Angular front end.
//!
//! ## Overview
//!
//! modelgen reads a model schema (YAML or JSON), classifies every declared
//! type by role, resolves per-artifact options through a cascading settings
//! store, and emits the five target artifact sets concurrently. Generated
//! files carry paired custom-region markers so hand-written code inside them
//! survives regeneration; files whose generated label has been removed are
//! treated as user-owned and never overwritten.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`schema`]** - Model schema loading and type classification
//! - **[`settings`]** - Cascading, read-only generation settings
//! - **[`artifact`]** - Generated-artifact model and custom-region markers
//! - **[`targets`]** - Per-target artifact generators
//! - **[`writer`]** - Destination write pipeline and cleanup
//! - **[`engine`]** - Concurrent orchestration of a full generation run
//! - **[`cli`]** - Command-line interface
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(modelgen)
//!     participant Load as schema::load_model
//!     participant Classify as schema::classify
//!     participant Settings as settings::SettingsResolver
//!     participant Targets as targets::*
//!     participant Writer as writer::Writer
//!     participant FS as File System
//!
//!     User->>CLI: modelgen generate<br/>--model model.yaml --output ./out
//!     CLI->>Load: load_model("model.yaml")
//!     Load->>Load: Parse YAML/JSON
//!     Load-->>CLI: Vec<TypeDescriptor>
//!     CLI->>Classify: classify(types)
//!     Classify->>Classify: Assign roles<br/>(entity, view, model, enum)
//!     Classify-->>CLI: ClassifiedSet
//!
//!     CLI->>Targets: generate_all(model, settings)
//!     Targets->>Settings: query(unit, kind, item, option)
//!     Settings-->>Targets: resolved option value
//!     Targets-->>CLI: Vec<GeneratedItem>
//!
//!     CLI->>Writer: write_items(items)
//!     Writer->>FS: Read existing destination
//!     Writer->>Writer: Extract custom regions
//!     Writer->>Writer: Merge into fresh skeleton
//!     Writer->>FS: Write destination file
//!     Writer-->>CLI: WriteReport
//!
//!     CLI-->>User: ✅ Generated N artifacts
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use modelgen::engine::{Engine, GenerateOptions};
//! use modelgen::settings::{SettingsResolver, TomlSettingsStore};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let store = Arc::new(TomlSettingsStore::load(Path::new("modelgen.toml"))?);
//! let engine = Engine::from_model_path(Path::new("model.yaml"), SettingsResolver::new(store));
//! let report = engine.generate(Path::new("./out"), GenerateOptions::default());
//! println!("generated {} artifacts", report.total_generated());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod artifact;
pub mod cli;
pub mod engine;
pub mod schema;
pub mod settings;
pub mod targets;
pub mod writer;

pub use artifact::{ArtifactKind, FileExtension, GeneratedItem, TargetUnit};
pub use engine::{Engine, GenerateOptions, GenerationReport};
pub use schema::{classify, load_model, ClassifiedSet, TypeDescriptor};
pub use settings::{SettingsResolver, SettingsStore};
