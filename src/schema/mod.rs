//! # Schema Module
//!
//! Model-schema ingestion and type classification.
//!
//! The engine does not reflect over a compiled module at runtime; a build
//! step exports the domain model as a language-neutral schema document
//! (YAML or JSON) which this module parses into immutable
//! [`TypeDescriptor`]s and partitions into the five role groups:
//!
//! ```text
//! model.yaml → load_model → classify → ClassifiedSet
//!                                       ├── entities (Account/Access/Logging/Revision/Custom)
//!                                       ├── views    (same categories)
//!                                       ├── models
//!                                       ├── enums
//!                                       └── interfaces
//! ```
//!
//! Classification uses only string comparisons on name, namespace, and base
//! chain, so it is deterministic. This matters because settings defaults
//! key off the resulting categories.

mod classify;
mod load;
mod types;

pub use classify::*;
pub use load::*;
pub use types::*;
