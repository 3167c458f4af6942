use super::naming;
use super::{TargetGenerator, TargetOutput};
use crate::artifact::markers::{self, RegionFamily};
use crate::artifact::{ArtifactKind, FileExtension, GeneratedItem, ItemLabel, TargetUnit};
use crate::schema::{ClassifiedSet, ClassifiedType};
use crate::settings::SettingsResolver;
use std::path::PathBuf;

const UNIT: TargetUnit = TargetUnit::DataLayer;
const EXT: FileExtension = FileExtension::CSharp;

/// Data-access target: one set class per entity and view, plus the
/// aggregate data context.
pub struct DataLayerGenerator<'a> {
    model: &'a ClassifiedSet,
    settings: &'a SettingsResolver,
    root: String,
}

impl<'a> DataLayerGenerator<'a> {
    pub fn new(model: &'a ClassifiedSet, settings: &'a SettingsResolver) -> Self {
        let root = settings.root_namespace();
        Self { model, settings, root }
    }

    fn namespace(&self) -> String {
        format!("{}.Data", self.root)
    }

    fn set_class(
        &self,
        kind: ArtifactKind,
        t: &ClassifiedType,
        base: &str,
    ) -> anyhow::Result<Option<GeneratedItem>> {
        let name = &t.descriptor.name;
        if !self.settings.generate_enabled(UNIT, kind, name) {
            return Ok(None);
        }
        let set = if kind == ArtifactKind::EntitySet {
            naming::entity_set_name(name)
        } else {
            naming::view_set_name(name)
        };
        let contract = naming::contract_name(name);
        let visibility =
            self.settings
                .query_item(UNIT, kind, name, "Visibility", "public".to_string());
        let ns = self.namespace();

        let mut lines = vec![
            "using System;".to_string(),
            "using System.Linq;".to_string(),
            format!("using {}.Contracts;", self.root),
        ];
        markers::push_empty_region(&mut lines, EXT, RegionFamily::Imports, "");
        lines.push(String::new());
        lines.push(format!("namespace {ns}"));
        lines.push("{".to_string());
        lines.push(format!("    {visibility} partial class {set} : {base}<{name}>"));
        lines.push("    {".to_string());
        lines.push(format!("        public IQueryable<{name}> Query()"));
        lines.push("        {".to_string());
        lines.push("            return Source();".to_string());
        lines.push("        }".to_string());
        if kind == ArtifactKind::EntitySet {
            lines.push(String::new());
            lines.push(format!("        public {name} Create({contract} values)"));
            lines.push("        {".to_string());
            lines.push("            return Insert(values);".to_string());
            lines.push("        }".to_string());
            lines.push(String::new());
            lines.push(format!("        public void Remove({name} item)"));
            lines.push("        {".to_string());
            lines.push("            Delete(item);".to_string());
            lines.push("        }".to_string());
        }
        markers::push_empty_region(&mut lines, EXT, RegionFamily::Body, "        ");
        lines.push("    }".to_string());
        lines.push("}".to_string());

        Ok(Some(GeneratedItem {
            unit: UNIT,
            kind,
            full_name: format!("{ns}.{set}"),
            extension: EXT,
            sub_path: PathBuf::from(format!("DataContext/{set}.cs")),
            source: lines,
            label: ItemLabel::Default,
        }))
    }

    fn entity_set(&self, t: &ClassifiedType) -> anyhow::Result<Option<GeneratedItem>> {
        self.set_class(ArtifactKind::EntitySet, t, "EntitySet")
    }

    fn view_set(&self, t: &ClassifiedType) -> anyhow::Result<Option<GeneratedItem>> {
        self.set_class(ArtifactKind::ViewSet, t, "ViewSet")
    }

    /// Aggregate context exposing one set property per generated entity and
    /// view. Carries a special label so the context file is distinguishable
    /// from plain set files.
    fn data_context(&self) -> anyhow::Result<Option<GeneratedItem>> {
        let kind = ArtifactKind::DataContext;
        if !self.settings.generate_enabled(UNIT, kind, "DataContext") {
            return Ok(None);
        }
        let context = naming::data_context_name(&self.root);
        let visibility =
            self.settings
                .query_item(UNIT, kind, "DataContext", "Visibility", "public".to_string());
        let ns = self.namespace();

        let mut lines = vec!["using System;".to_string()];
        markers::push_empty_region(&mut lines, EXT, RegionFamily::Imports, "");
        lines.push(String::new());
        lines.push(format!("namespace {ns}"));
        lines.push("{".to_string());
        lines.push(format!("    {visibility} partial class {context}"));
        lines.push("    {".to_string());
        let sets = self
            .model
            .entities
            .iter()
            .map(|t| (t, ArtifactKind::EntitySet))
            .chain(self.model.views.iter().map(|t| (t, ArtifactKind::ViewSet)));
        for (t, set_kind) in sets {
            let name = &t.descriptor.name;
            // Skipped sets stay out of the context too.
            if !self.settings.generate_enabled(UNIT, set_kind, name) {
                continue;
            }
            let set = if set_kind == ArtifactKind::EntitySet {
                naming::entity_set_name(name)
            } else {
                naming::view_set_name(name)
            };
            lines.push(format!("        public {set} {set} {{ get; }} = new {set}();"));
        }
        markers::push_empty_region(&mut lines, EXT, RegionFamily::Body, "        ");
        lines.push("    }".to_string());
        lines.push("}".to_string());

        Ok(Some(GeneratedItem {
            unit: UNIT,
            kind,
            full_name: format!("{ns}.{context}"),
            extension: EXT,
            sub_path: PathBuf::from(format!("DataContext/{context}.cs")),
            source: lines,
            label: ItemLabel::Special("data-context".to_string()),
        }))
    }
}

impl TargetGenerator for DataLayerGenerator<'_> {
    fn unit(&self) -> TargetUnit {
        UNIT
    }

    fn generate_all(&self) -> TargetOutput {
        let mut out = TargetOutput::default();
        for t in &self.model.entities {
            out.push(UNIT, ArtifactKind::EntitySet, &t.descriptor.name, self.entity_set(t));
        }
        for t in &self.model.views {
            out.push(UNIT, ArtifactKind::ViewSet, &t.descriptor.name, self.view_set(t));
        }
        out.push(UNIT, ArtifactKind::DataContext, "DataContext", self.data_context());
        out
    }
}
