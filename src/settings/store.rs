use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;

/// Flat key-value lookup behind the settings resolver.
///
/// The backing store only answers exact keys; the cascade lives in the
/// resolver. Implementations must tolerate concurrent reads: all generator
/// threads query during a run, and nothing writes.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory store, used programmatically and across the test suite.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: HashMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Settings store loaded from a TOML file that sits alongside the model
/// schema.
///
/// Nested tables flatten into dotted keys, so
///
/// ```toml
/// [WebApi.ApiController.Order]
/// Generate = false
/// ```
///
/// is the key `WebApi.ApiController.Order.Generate` with value `"false"`.
/// Values are stored as strings; the resolver converts on read.
#[derive(Debug, Default)]
pub struct TomlSettingsStore {
    values: HashMap<String, String>,
}

impl TomlSettingsStore {
    /// Load and flatten a settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {path:?}"))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("invalid TOML in settings file {path:?}"))?;
        let mut values = HashMap::new();
        flatten("", &value, &mut values);
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for TomlSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

fn flatten(prefix: &str, value: &toml::Value, out: &mut HashMap<String, String>) {
    match value {
        toml::Value::Table(table) => {
            for (name, child) in table {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                flatten(&key, child, out);
            }
        }
        toml::Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}
