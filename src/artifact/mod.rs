//! # Artifact Module
//!
//! The generated-artifact abstraction shared by every per-target generator
//! and the writer: [`GeneratedItem`] identity and destination, the
//! generated-code header label, the import/body custom-region marker pairs,
//! and the closed extension → comment-style dispatch table.

mod item;
pub mod markers;
#[cfg(test)]
mod tests;

pub use item::*;
pub use markers::{RegionFamily, GENERATED_LABEL};
