use super::types::{TypeDescriptor, TypeKind};

/// Base-type names that mark a class as persistent.
const ENTITY_BASE: &str = "EntityObject";
const VIEW_BASE: &str = "ViewObject";

/// System categories, checked in declaration order; `Custom` is the
/// complement of the first four.
const SYSTEM_SEGMENTS: [(&str, SystemCategory); 4] = [
    ("Account", SystemCategory::Account),
    ("Access", SystemCategory::Access),
    ("Logging", SystemCategory::Logging),
    ("Revision", SystemCategory::Revision),
];

/// Leaf category of an entity or view descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemCategory {
    Account,
    Access,
    Logging,
    Revision,
    Custom,
}

impl SystemCategory {
    pub fn is_system(self) -> bool {
        !matches!(self, SystemCategory::Custom)
    }
}

/// An entity or view descriptor together with its system/custom category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedType {
    pub descriptor: TypeDescriptor,
    pub category: SystemCategory,
}

/// Output of classification: every input descriptor lands in exactly one
/// group, each group sorted by simple name so downstream emission order is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedSet {
    pub entities: Vec<ClassifiedType>,
    pub views: Vec<ClassifiedType>,
    pub models: Vec<TypeDescriptor>,
    pub enums: Vec<TypeDescriptor>,
    pub interfaces: Vec<TypeDescriptor>,
}

impl ClassifiedSet {
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
            && self.views.is_empty()
            && self.models.is_empty()
            && self.enums.is_empty()
            && self.interfaces.is_empty()
    }

    /// Total descriptor count across all groups.
    pub fn len(&self) -> usize {
        self.entities.len()
            + self.views.len()
            + self.models.len()
            + self.enums.len()
            + self.interfaces.len()
    }

    /// Look up an enum descriptor by simple name.
    pub fn find_enum(&self, name: &str) -> Option<&TypeDescriptor> {
        self.enums.iter().find(|t| t.name == name)
    }

    /// Whether `name` is declared anywhere in the model (used by generators
    /// to resolve property types that reference other model types).
    pub fn is_declared(&self, name: &str) -> bool {
        self.entities.iter().any(|t| t.descriptor.name == name)
            || self.views.iter().any(|t| t.descriptor.name == name)
            || self.models.iter().any(|t| t.name == name)
            || self.enums.iter().any(|t| t.name == name)
            || self.interfaces.iter().any(|t| t.name == name)
    }
}

/// Partition descriptors into the five role groups and tag entities/views
/// with their system category.
///
/// Classification is a pure function of name, namespace, and base chain:
/// the same input always yields the same output. An empty input yields an
/// empty set.
pub fn classify(types: &[TypeDescriptor]) -> ClassifiedSet {
    let mut set = ClassifiedSet::default();
    for ty in types {
        match ty.kind {
            TypeKind::Interface => set.interfaces.push(ty.clone()),
            TypeKind::Enum => set.enums.push(ty.clone()),
            TypeKind::Class => {
                if ty.base.iter().any(|b| b == ENTITY_BASE) {
                    set.entities.push(ClassifiedType {
                        category: system_category(ty),
                        descriptor: ty.clone(),
                    });
                } else if ty.base.iter().any(|b| b == VIEW_BASE) {
                    set.views.push(ClassifiedType {
                        category: system_category(ty),
                        descriptor: ty.clone(),
                    });
                } else {
                    set.models.push(ty.clone());
                }
            }
        }
    }
    set.entities.sort_by(|a, b| a.descriptor.name.cmp(&b.descriptor.name));
    set.views.sort_by(|a, b| a.descriptor.name.cmp(&b.descriptor.name));
    set.models.sort_by(|a, b| a.name.cmp(&b.name));
    set.enums.sort_by(|a, b| a.name.cmp(&b.name));
    set.interfaces.sort_by(|a, b| a.name.cmp(&b.name));
    set
}

/// System category of an entity/view descriptor.
///
/// A descriptor is a system type when its namespace ends with one of the
/// four system segments or a base-chain entry names one; first match wins,
/// everything else is `Custom`.
fn system_category(ty: &TypeDescriptor) -> SystemCategory {
    for (segment, category) in SYSTEM_SEGMENTS {
        let in_namespace = ty.namespace_tail() == segment;
        let in_base = ty.base.iter().any(|b| b == segment);
        if in_namespace || in_base {
            return category;
        }
    }
    SystemCategory::Custom
}
