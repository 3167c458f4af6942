//! # Engine Module
//!
//! The orchestrator: fans the five per-target generators out on worker
//! threads, collects their items, and hands the groups to the writer.
//!
//! ```text
//! model.yaml ─→ classify ─┬→ ContractsGenerator ──┐
//!                         ├→ DataLayerGenerator ──┤
//!                         ├→ WebApiGenerator ─────┼→ (unit, kind) groups ─→ Writer fan-out
//!                         ├→ DesktopViewsGenerator┤        │
//!                         └→ WebFrontendGenerator ┘        └→ GenerationReport
//! ```
//!
//! Generator tasks share only the immutable classified model and the
//! read-only settings store, so they run without ordering constraints; a
//! scope join is the barrier before the writer phase. Writer tasks own
//! disjoint destination paths per `(unit, kind)` group and are joined the
//! same way before the run reports completion.

use crate::artifact::{ArtifactKind, GeneratedItem, TargetUnit};
use crate::schema::{classify, load_model_or_empty, ClassifiedSet};
use crate::settings::SettingsResolver;
use crate::targets::{all_generators, ArtifactFailure, TargetOutput};
use crate::writer::{delete_generated, CleanupReport, WriteReport, Writer};
use dashmap::DashMap;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Callback invoked before a generator runs.
pub type PreHook = Box<dyn Fn(TargetUnit) + Send + Sync>;
/// Callback invoked after a generator finishes, with its full output.
pub type PostHook = Box<dyn Fn(TargetUnit, &TargetOutput) + Send + Sync>;

/// Per-run options for [`Engine::generate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Plan only; nothing on disk changes
    pub dry_run: bool,
    /// Reclaim user-owned files for this run
    pub force: bool,
}

/// Outcome of a full generation run. The run always completes; per-artifact
/// and per-path failures are reported here, never raised.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub units: BTreeMap<TargetUnit, UnitReport>,
}

#[derive(Debug, Default)]
pub struct UnitReport {
    /// Items the generators produced (after duplicate-identity filtering)
    pub generated: usize,
    /// Artifacts dropped by generator-local failures
    pub failures: Vec<ArtifactFailure>,
    /// Writer results for this unit's groups
    pub writes: WriteReport,
}

impl GenerationReport {
    pub fn total_generated(&self) -> usize {
        self.units.values().map(|u| u.generated).sum()
    }

    pub fn has_failures(&self) -> bool {
        self.units
            .values()
            .any(|u| !u.failures.is_empty() || !u.writes.failed.is_empty())
    }
}

/// Drives one generation run over a classified model.
pub struct Engine {
    model: ClassifiedSet,
    settings: SettingsResolver,
    pre_hooks: Vec<PreHook>,
    post_hooks: Vec<PostHook>,
}

impl Engine {
    pub fn new(model: ClassifiedSet, settings: SettingsResolver) -> Self {
        Self {
            model,
            settings,
            pre_hooks: Vec::new(),
            post_hooks: Vec::new(),
        }
    }

    /// Classify a model-schema file and build an engine for it. A schema
    /// that fails to load is logged and treated as empty; the run then
    /// produces zero items.
    pub fn from_model_path(path: &Path, settings: SettingsResolver) -> Self {
        let types = load_model_or_empty(path);
        Self::new(classify(&types), settings)
    }

    pub fn model(&self) -> &ClassifiedSet {
        &self.model
    }

    /// Register a callback to run before each generator.
    pub fn add_pre_hook(&mut self, hook: PreHook) {
        self.pre_hooks.push(hook);
    }

    /// Register a callback to run after each generator.
    pub fn add_post_hook(&mut self, hook: PostHook) {
        self.post_hooks.push(hook);
    }

    /// Run the full pipeline: generator fan-out, collection, writer fan-out.
    pub fn generate(&self, out_root: &Path, options: GenerateOptions) -> GenerationReport {
        let collected: DashMap<(TargetUnit, ArtifactKind), Vec<GeneratedItem>> = DashMap::new();
        let failures: DashMap<TargetUnit, Vec<ArtifactFailure>> = DashMap::new();

        std::thread::scope(|scope| {
            for generator in all_generators(&self.model, &self.settings) {
                let collected = &collected;
                let failures = &failures;
                scope.spawn(move || {
                    let unit = generator.unit();
                    for hook in &self.pre_hooks {
                        hook(unit);
                    }
                    let output = generator.generate_all();
                    for hook in &self.post_hooks {
                        hook(unit, &output);
                    }
                    for item in output.items {
                        collected
                            .entry((item.unit, item.kind))
                            .or_default()
                            .push(item);
                    }
                    if !output.failures.is_empty() {
                        failures.entry(unit).or_default().extend(output.failures);
                    }
                });
            }
        });

        let mut report = GenerationReport::default();
        for unit in TargetUnit::ALL {
            report.units.insert(unit, UnitReport::default());
        }
        for (unit, unit_failures) in failures.into_iter() {
            if let Some(unit_report) = report.units.get_mut(&unit) {
                unit_report.failures = unit_failures;
            }
        }

        // Deterministic write order per group; groups own disjoint paths.
        let mut groups: BTreeMap<(TargetUnit, ArtifactKind), Vec<GeneratedItem>> = BTreeMap::new();
        for (key, items) in collected.into_iter() {
            groups.insert(key, dedup_items(items));
        }
        for ((unit, _), items) in &groups {
            if let Some(unit_report) = report.units.get_mut(unit) {
                unit_report.generated += items.len();
            }
        }

        let writer = Writer::new(out_root)
            .dry_run(options.dry_run)
            .force(options.force);
        let write_reports: DashMap<TargetUnit, WriteReport> = DashMap::new();
        std::thread::scope(|scope| {
            for ((unit, kind), items) in &groups {
                let writer = &writer;
                let write_reports = &write_reports;
                let grouped = self.settings.group_files(*unit, *kind);
                scope.spawn(move || {
                    let group_report = writer.write_items(*unit, *kind, items, grouped);
                    write_reports.entry(*unit).or_default().merge(group_report);
                });
            }
        });
        for (unit, writes) in write_reports.into_iter() {
            if let Some(unit_report) = report.units.get_mut(&unit) {
                unit_report.writes = writes;
            }
        }
        report
    }

    /// The delete-all-generated cleanup pass.
    pub fn clean(out_root: &Path) -> CleanupReport {
        delete_generated(out_root)
    }
}

/// Enforce the `(unit, kind, full_name)` uniqueness invariant within a
/// group: later duplicates are logged and dropped.
fn dedup_items(items: Vec<GeneratedItem>) -> Vec<GeneratedItem> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item.full_name.clone()) {
            unique.push(item);
        } else {
            tracing::warn!(
                unit = %item.unit,
                kind = %item.kind,
                full_name = %item.full_name,
                "duplicate artifact identity dropped"
            );
        }
    }
    unique
}
