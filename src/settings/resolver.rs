use super::store::SettingsStore;
use crate::artifact::{ArtifactKind, TargetUnit};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Distinguished item name holding per-artifact-kind defaults.
pub const ALL_ITEMS: &str = "AllItems";
/// Distinguished item name holding the global tier of the cascade.
pub const ALL: &str = "All";

/// Fully qualified settings key `(unit, kind, item, option)`.
///
/// Serializes as `Unit.Kind.Item.Option` against the flat store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SettingKey<'a> {
    pub unit: TargetUnit,
    pub kind: ArtifactKind,
    pub item: &'a str,
    pub option: &'a str,
}

impl fmt::Display for SettingKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.unit, self.kind, self.item, self.option)
    }
}

/// Cascading settings lookup shared by every generator thread.
///
/// The resolver holds an `Arc` to the read-only backing store; queries are
/// pure and never raise. Generators build the broader fallback chain
/// (per-property → per-type → per-kind `AllItems` → global `All`) by
/// threading earlier query results in as the fallback of narrower ones.
#[derive(Clone)]
pub struct SettingsResolver {
    store: Arc<dyn SettingsStore>,
}

impl SettingsResolver {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Raw string lookup of the exact key, no fallback.
    pub fn query_raw(&self, unit: TargetUnit, kind: ArtifactKind, item: &str, option: &str) -> Option<String> {
        let key = SettingKey { unit, kind, item, option };
        self.store.get(&key.to_string())
    }

    /// Resolve `(unit, kind, item, option)` to a typed value.
    ///
    /// Exact key first; if absent, the caller-supplied fallback. A stored
    /// value that fails conversion is logged as a misconfiguration warning
    /// and the fallback is substituted; resolution never raises.
    pub fn query<T>(&self, unit: TargetUnit, kind: ArtifactKind, item: &str, option: &str, fallback: T) -> T
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let key = SettingKey { unit, kind, item, option };
        match self.store.get(&key.to_string()) {
            None => fallback,
            Some(raw) => match raw.parse::<T>() {
                Ok(value) => value,
                Err(err) => {
                    tracing::warn!(
                        key = %key,
                        value = %raw,
                        error = %err,
                        "setting conversion failed; using fallback"
                    );
                    fallback
                }
            },
        }
    }

    /// Per-item lookup with the standard two broader tiers applied:
    /// item → `AllItems` → `All` → `default`.
    pub fn query_item<T>(&self, unit: TargetUnit, kind: ArtifactKind, item: &str, option: &str, default: T) -> T
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let global = self.query(unit, kind, ALL, option, default);
        let per_kind = self.query(unit, kind, ALL_ITEMS, option, global);
        self.query(unit, kind, item, option, per_kind)
    }

    /// Whether generation is enabled for an item (the `Generate` option,
    /// default `true` through the full cascade).
    pub fn generate_enabled(&self, unit: TargetUnit, kind: ArtifactKind, item: &str) -> bool {
        self.query_item(unit, kind, item, "Generate", true)
    }

    /// Whether `(unit, kind)` writes all items into one group file.
    pub fn group_files(&self, unit: TargetUnit, kind: ArtifactKind) -> bool {
        self.query(unit, kind, ALL_ITEMS, "GroupFiles", false)
    }

    /// Root namespace all generated namespaces hang off. Stored under the
    /// bare `RootNamespace` key, outside the four-part cascade.
    pub fn root_namespace(&self) -> String {
        self.store
            .get("RootNamespace")
            .unwrap_or_else(|| "Support".to_string())
    }
}

impl fmt::Debug for SettingsResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsResolver").finish_non_exhaustive()
    }
}
