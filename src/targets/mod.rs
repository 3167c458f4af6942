//! # Targets Module
//!
//! One generator per downstream target, all behind the [`TargetGenerator`]
//! trait:
//!
//! - [`ContractsGenerator`] - shared contract interfaces and enums
//! - [`DataLayerGenerator`] - entity sets, view sets, data context
//! - [`WebApiGenerator`] - API controllers and service registration
//! - [`DesktopViewsGenerator`] - MVVM view models and XAML views
//! - [`WebFrontendGenerator`] - Angular models, service clients, components
//!
//! Each generator is a pure mapping from classified descriptors plus
//! resolved settings to [`GeneratedItem`]s: one method per artifact kind,
//! deterministic line emission, preservation markers around user-editable
//! regions, and a skip when the `Generate` option resolves false. Generators
//! never mutate descriptors or read each other's output objects; references
//! across targets are string formatting through [`naming`], which is what
//! lets the orchestrator run all five concurrently.

mod contracts;
mod data_layer;
mod desktop;
pub mod naming;
#[cfg(test)]
mod tests;
mod web_api;
mod web_front;

pub use contracts::ContractsGenerator;
pub use data_layer::DataLayerGenerator;
pub use desktop::DesktopViewsGenerator;
pub use web_api::WebApiGenerator;
pub use web_front::WebFrontendGenerator;

use crate::artifact::{ArtifactKind, GeneratedItem, TargetUnit};
use crate::schema::ClassifiedSet;
use crate::settings::SettingsResolver;

/// A single artifact that could not be produced.
///
/// Artifact failures are generator-local: the failing item is dropped, the
/// error recorded, and every sibling artifact still generates.
#[derive(Debug, Clone)]
pub struct ArtifactFailure {
    pub unit: TargetUnit,
    pub kind: ArtifactKind,
    pub item: String,
    pub error: String,
}

/// Everything one target produced in a run.
#[derive(Debug, Default)]
pub struct TargetOutput {
    pub items: Vec<GeneratedItem>,
    pub failures: Vec<ArtifactFailure>,
}

impl TargetOutput {
    /// Record the outcome of a single artifact method.
    pub(crate) fn push(
        &mut self,
        unit: TargetUnit,
        kind: ArtifactKind,
        item_name: &str,
        outcome: anyhow::Result<Option<GeneratedItem>>,
    ) {
        match outcome {
            Ok(Some(item)) => self.items.push(item),
            Ok(None) => {}
            Err(err) => {
                tracing::error!(%unit, %kind, item = item_name, error = %err, "artifact generation failed");
                self.failures.push(ArtifactFailure {
                    unit,
                    kind,
                    item: item_name.to_string(),
                    error: err.to_string(),
                });
            }
        }
    }
}

/// Uniform contract of the five per-target generators.
pub trait TargetGenerator: Send + Sync {
    fn unit(&self) -> TargetUnit;

    /// Produce every artifact of this target for the classified model.
    ///
    /// Deterministic: identical descriptors and settings yield
    /// byte-identical sources (no timestamps or other run-specific data in
    /// emitted content).
    fn generate_all(&self) -> TargetOutput;
}

/// Construct the full generator fan-out for one run.
pub fn all_generators<'a>(
    model: &'a ClassifiedSet,
    settings: &'a SettingsResolver,
) -> Vec<Box<dyn TargetGenerator + 'a>> {
    vec![
        Box::new(ContractsGenerator::new(model, settings)),
        Box::new(DataLayerGenerator::new(model, settings)),
        Box::new(WebApiGenerator::new(model, settings)),
        Box::new(DesktopViewsGenerator::new(model, settings)),
        Box::new(WebFrontendGenerator::new(model, settings)),
    ]
}
