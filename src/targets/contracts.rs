use super::naming;
use super::{TargetGenerator, TargetOutput};
use crate::artifact::markers::{self, RegionFamily};
use crate::artifact::{ArtifactKind, FileExtension, GeneratedItem, ItemLabel, TargetUnit};
use crate::schema::{ClassifiedSet, ClassifiedType, TypeDescriptor};
use crate::settings::SettingsResolver;
use std::path::PathBuf;

const UNIT: TargetUnit = TargetUnit::Contracts;
const EXT: FileExtension = FileExtension::CSharp;

/// Shared-contracts target: one interface per entity and view, one class per
/// model type, one enum per model enum.
pub struct ContractsGenerator<'a> {
    model: &'a ClassifiedSet,
    settings: &'a SettingsResolver,
    root: String,
}

impl<'a> ContractsGenerator<'a> {
    pub fn new(model: &'a ClassifiedSet, settings: &'a SettingsResolver) -> Self {
        let root = settings.root_namespace();
        Self { model, settings, root }
    }

    fn namespace(&self) -> String {
        format!("{}.Contracts", self.root)
    }

    fn entity_contract(&self, t: &ClassifiedType) -> anyhow::Result<Option<GeneratedItem>> {
        self.contract(ArtifactKind::EntityContract, "Entities", &t.descriptor, true)
    }

    fn view_contract(&self, t: &ClassifiedType) -> anyhow::Result<Option<GeneratedItem>> {
        // View data is read-only at the contract level.
        self.contract(ArtifactKind::ViewContract, "Views", &t.descriptor, false)
    }

    fn contract(
        &self,
        kind: ArtifactKind,
        dir: &str,
        ty: &TypeDescriptor,
        writable: bool,
    ) -> anyhow::Result<Option<GeneratedItem>> {
        let name = &ty.name;
        if !self.settings.generate_enabled(UNIT, kind, name) {
            return Ok(None);
        }
        let contract = naming::contract_name(name);
        let visibility =
            self.settings
                .query_item(UNIT, kind, name, "Visibility", "public".to_string());
        let ns = self.namespace();

        let mut lines = vec!["using System;".to_string()];
        markers::push_empty_region(&mut lines, EXT, RegionFamily::Imports, "");
        lines.push(String::new());
        lines.push(format!("namespace {ns}"));
        lines.push("{".to_string());
        lines.push(format!("    {visibility} partial interface {contract}"));
        lines.push("    {".to_string());
        for p in &ty.properties {
            let cs = naming::csharp_type(self.model, &p.ty)?;
            let accessors = match (p.read, p.write && writable) {
                (true, true) => "{ get; set; }",
                (true, false) => "{ get; }",
                (false, true) => "{ set; }",
                (false, false) => continue,
            };
            lines.push(format!("        {cs} {} {accessors}", p.name));
        }
        markers::push_empty_region(&mut lines, EXT, RegionFamily::Body, "        ");
        lines.push("    }".to_string());
        lines.push("}".to_string());

        Ok(Some(GeneratedItem {
            unit: UNIT,
            kind,
            full_name: format!("{ns}.{contract}"),
            extension: EXT,
            sub_path: PathBuf::from(format!("{dir}/{contract}.cs")),
            source: lines,
            label: ItemLabel::Default,
        }))
    }

    fn model_contract(&self, ty: &TypeDescriptor) -> anyhow::Result<Option<GeneratedItem>> {
        let kind = ArtifactKind::ModelContract;
        let name = &ty.name;
        if !self.settings.generate_enabled(UNIT, kind, name) {
            return Ok(None);
        }
        let visibility =
            self.settings
                .query_item(UNIT, kind, name, "Visibility", "public".to_string());
        let ns = self.namespace();

        let mut lines = vec!["using System;".to_string()];
        markers::push_empty_region(&mut lines, EXT, RegionFamily::Imports, "");
        lines.push(String::new());
        lines.push(format!("namespace {ns}"));
        lines.push("{".to_string());
        lines.push(format!("    {visibility} partial class {name}"));
        lines.push("    {".to_string());
        for p in &ty.properties {
            let cs = naming::csharp_type(self.model, &p.ty)?;
            lines.push(format!("        public {cs} {} {{ get; set; }}", p.name));
        }
        markers::push_empty_region(&mut lines, EXT, RegionFamily::Body, "        ");
        lines.push("    }".to_string());
        lines.push("}".to_string());

        Ok(Some(GeneratedItem {
            unit: UNIT,
            kind,
            full_name: format!("{ns}.{name}"),
            extension: EXT,
            sub_path: PathBuf::from(format!("Models/{name}.cs")),
            source: lines,
            label: ItemLabel::Default,
        }))
    }

    fn enum_definition(&self, ty: &TypeDescriptor) -> anyhow::Result<Option<GeneratedItem>> {
        let kind = ArtifactKind::EnumDefinition;
        let name = &ty.name;
        if !self.settings.generate_enabled(UNIT, kind, name) {
            return Ok(None);
        }
        let visibility =
            self.settings
                .query_item(UNIT, kind, name, "Visibility", "public".to_string());
        let ns = self.namespace();

        let mut lines = Vec::new();
        lines.push(format!("namespace {ns}"));
        lines.push("{".to_string());
        lines.push(format!("    {visibility} enum {name}"));
        lines.push("    {".to_string());
        for v in &ty.variants {
            lines.push(format!("        {v},"));
        }
        markers::push_empty_region(&mut lines, EXT, RegionFamily::Body, "        ");
        lines.push("    }".to_string());
        lines.push("}".to_string());

        Ok(Some(GeneratedItem {
            unit: UNIT,
            kind,
            full_name: format!("{ns}.{name}"),
            extension: EXT,
            sub_path: PathBuf::from(format!("Enums/{name}.cs")),
            source: lines,
            label: ItemLabel::Default,
        }))
    }
}

impl TargetGenerator for ContractsGenerator<'_> {
    fn unit(&self) -> TargetUnit {
        UNIT
    }

    fn generate_all(&self) -> TargetOutput {
        let mut out = TargetOutput::default();
        for t in &self.model.entities {
            out.push(UNIT, ArtifactKind::EntityContract, &t.descriptor.name, self.entity_contract(t));
        }
        for t in &self.model.views {
            out.push(UNIT, ArtifactKind::ViewContract, &t.descriptor.name, self.view_contract(t));
        }
        for t in &self.model.models {
            out.push(UNIT, ArtifactKind::ModelContract, &t.name, self.model_contract(t));
        }
        for t in &self.model.enums {
            out.push(UNIT, ArtifactKind::EnumDefinition, &t.name, self.enum_definition(t));
        }
        out
    }
}
