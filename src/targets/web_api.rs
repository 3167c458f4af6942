use super::naming;
use super::{TargetGenerator, TargetOutput};
use crate::artifact::markers::{self, RegionFamily};
use crate::artifact::{ArtifactKind, FileExtension, GeneratedItem, ItemLabel, TargetUnit};
use crate::schema::{ClassifiedSet, ClassifiedType};
use crate::settings::SettingsResolver;
use std::path::PathBuf;

const UNIT: TargetUnit = TargetUnit::WebApi;
const EXT: FileExtension = FileExtension::CSharp;

/// Web-API target: one controller per entity plus the service-registration
/// module.
///
/// Controllers name the data layer's set classes, but only as formatted
/// strings via [`naming`]; there is no runtime dependency on the data-layer
/// generator's output.
pub struct WebApiGenerator<'a> {
    model: &'a ClassifiedSet,
    settings: &'a SettingsResolver,
    root: String,
}

impl<'a> WebApiGenerator<'a> {
    pub fn new(model: &'a ClassifiedSet, settings: &'a SettingsResolver) -> Self {
        let root = settings.root_namespace();
        Self { model, settings, root }
    }

    fn namespace(&self) -> String {
        format!("{}.Api", self.root)
    }

    fn api_controller(&self, t: &ClassifiedType) -> anyhow::Result<Option<GeneratedItem>> {
        let kind = ArtifactKind::ApiController;
        let name = &t.descriptor.name;
        if !self.settings.generate_enabled(UNIT, kind, name) {
            return Ok(None);
        }
        let controller = naming::controller_name(name);
        let set = naming::entity_set_name(name);
        let contract = naming::contract_name(name);
        let route = naming::api_route(name);
        let visibility =
            self.settings
                .query_item(UNIT, kind, name, "Visibility", "public".to_string());
        let ns = self.namespace();

        // Key properties drive the single-item route; a missing type mapping
        // fails only this controller.
        let key_ty = t
            .descriptor
            .properties
            .iter()
            .find(|p| p.name == "Id")
            .map(|p| naming::csharp_type(self.model, &p.ty))
            .transpose()?
            .unwrap_or_else(|| "int".to_string());

        let mut lines = vec![
            "using System;".to_string(),
            format!("using {}.Contracts;", self.root),
            format!("using {}.Data;", self.root),
        ];
        markers::push_empty_region(&mut lines, EXT, RegionFamily::Imports, "");
        lines.push(String::new());
        lines.push(format!("namespace {ns}"));
        lines.push("{".to_string());
        lines.push(format!("    [Route(\"{route}\")]"));
        lines.push(format!("    {visibility} partial class {controller} : ApiController"));
        lines.push("    {".to_string());
        lines.push(format!("        private readonly {set} _set = new {set}();"));
        lines.push(String::new());
        lines.push("        [HttpGet]".to_string());
        lines.push(format!("        public IQueryable<{name}> List()"));
        lines.push("        {".to_string());
        lines.push("            return _set.Query();".to_string());
        lines.push("        }".to_string());
        lines.push(String::new());
        lines.push("        [HttpGet(\"{id}\")]".to_string());
        lines.push(format!("        public {name} Get({key_ty} id)"));
        lines.push("        {".to_string());
        lines.push("            return _set.Find(id);".to_string());
        lines.push("        }".to_string());
        lines.push(String::new());
        lines.push("        [HttpPost]".to_string());
        lines.push(format!("        public {name} Create({contract} values)"));
        lines.push("        {".to_string());
        lines.push("            return _set.Create(values);".to_string());
        lines.push("        }".to_string());
        markers::push_empty_region(&mut lines, EXT, RegionFamily::Body, "        ");
        lines.push("    }".to_string());
        lines.push("}".to_string());

        Ok(Some(GeneratedItem {
            unit: UNIT,
            kind,
            full_name: format!("{ns}.{controller}"),
            extension: EXT,
            sub_path: PathBuf::from(format!("Controllers/{controller}.cs")),
            source: lines,
            label: ItemLabel::Default,
        }))
    }

    fn service_registration(&self) -> anyhow::Result<Option<GeneratedItem>> {
        let kind = ArtifactKind::ServiceRegistration;
        if !self.settings.generate_enabled(UNIT, kind, "ServiceRegistration") {
            return Ok(None);
        }
        let ns = self.namespace();

        let mut lines = vec![
            "using System;".to_string(),
            format!("using {}.Data;", self.root),
        ];
        markers::push_empty_region(&mut lines, EXT, RegionFamily::Imports, "");
        lines.push(String::new());
        lines.push(format!("namespace {ns}"));
        lines.push("{".to_string());
        lines.push("    public static partial class ServiceRegistration".to_string());
        lines.push("    {".to_string());
        lines.push("        public static void Register(IServiceCollection services)".to_string());
        lines.push("        {".to_string());
        for t in &self.model.entities {
            let name = &t.descriptor.name;
            if !self.settings.generate_enabled(UNIT, ArtifactKind::ApiController, name) {
                continue;
            }
            let set = naming::entity_set_name(name);
            lines.push(format!("            services.AddScoped<{set}>();"));
        }
        markers::push_empty_region(&mut lines, EXT, RegionFamily::Body, "            ");
        lines.push("        }".to_string());
        lines.push("    }".to_string());
        lines.push("}".to_string());

        Ok(Some(GeneratedItem {
            unit: UNIT,
            kind,
            full_name: format!("{ns}.ServiceRegistration"),
            extension: EXT,
            sub_path: PathBuf::from("ServiceRegistration.cs"),
            source: lines,
            label: ItemLabel::Default,
        }))
    }
}

impl TargetGenerator for WebApiGenerator<'_> {
    fn unit(&self) -> TargetUnit {
        UNIT
    }

    fn generate_all(&self) -> TargetOutput {
        let mut out = TargetOutput::default();
        for t in &self.model.entities {
            out.push(UNIT, ArtifactKind::ApiController, &t.descriptor.name, self.api_controller(t));
        }
        out.push(UNIT, ArtifactKind::ServiceRegistration, "ServiceRegistration", self.service_registration());
        out
    }
}
