//! # Settings Module
//!
//! Cascading generation settings.
//!
//! The backing store is a flat string key-value lookup (a TOML file beside
//! the model schema, or an in-memory map); the cascade lives here, not in
//! the store:
//!
//! 1. exact key `(unit, kind, item, option)`
//! 2. per-kind defaults under the `AllItems` item name
//! 3. the global `All` tier
//! 4. the caller's default
//!
//! Resolution never raises: a value that fails type conversion logs a
//! misconfiguration warning and falls back. The store is read-only during a
//! generation run and shared across generator threads by `Arc`.

mod resolver;
mod store;

pub use resolver::*;
pub use store::*;
