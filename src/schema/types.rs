use serde::Deserialize;

/// A reflected class, enum, or interface from the exported model schema.
///
/// Descriptors are loaded once per run and never mutated by the engine; every
/// downstream component borrows them read-only.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Simple type name (e.g. `Order`)
    pub name: String,
    /// Dot-separated namespace path (e.g. `Support.Domain.Orders`)
    pub namespace: String,
    /// Whether this is a class, enum, or interface
    pub kind: TypeKind,
    /// Base-type chain, most-derived first
    #[serde(default)]
    pub base: Vec<String>,
    /// Declared properties (classes and interfaces)
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
    /// Variant names (enums only)
    #[serde(default)]
    pub variants: Vec<String>,
}

impl TypeDescriptor {
    /// Namespace-qualified name, e.g. `Support.Domain.Orders.Order`.
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Last segment of the namespace path, empty for a bare namespace.
    pub fn namespace_tail(&self) -> &str {
        self.namespace.rsplit('.').next().unwrap_or("")
    }
}

/// Declared shape of a type in the model schema.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Enum,
    Interface,
}

/// A property on a class or interface descriptor.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Property name as declared in the model
    pub name: String,
    /// Declared type name (primitive or a model type name)
    #[serde(rename = "type")]
    pub ty: String,
    /// Whether the property exposes a getter
    #[serde(default = "default_true")]
    pub read: bool,
    /// Whether the property exposes a setter
    #[serde(default = "default_true")]
    pub write: bool,
}

fn default_true() -> bool {
    true
}

/// Top-level shape of the exported model-schema document.
#[derive(Debug, Deserialize)]
pub struct ModelSchema {
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}
