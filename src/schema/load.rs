use super::types::{ModelSchema, TypeDescriptor};
use anyhow::Context;
use std::path::Path;

/// Load the exported model schema from a YAML or JSON document.
///
/// The format is chosen by file extension: `.yaml`/`.yml` is parsed with
/// `serde_yaml`, everything else with `serde_json`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_model(path: &Path) -> anyhow::Result<Vec<TypeDescriptor>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read model schema {path:?}"))?;
    let is_yaml = path
        .extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false);
    let schema: ModelSchema = if is_yaml {
        serde_yaml::from_str(&raw).with_context(|| format!("invalid YAML model schema {path:?}"))?
    } else {
        serde_json::from_str(&raw).with_context(|| format!("invalid JSON model schema {path:?}"))?
    };
    Ok(schema.types)
}

/// Load the model schema, treating failure as an empty descriptor set.
///
/// A missing or malformed schema is not fatal: the error is logged and the
/// pipeline proceeds, producing zero items for every generator.
pub fn load_model_or_empty(path: &Path) -> Vec<TypeDescriptor> {
    match load_model(path) {
        Ok(types) => types,
        Err(err) => {
            tracing::error!(path = ?path, error = %err, "model schema load failed; continuing with empty type set");
            Vec::new()
        }
    }
}
