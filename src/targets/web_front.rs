use super::naming;
use super::{TargetGenerator, TargetOutput};
use crate::artifact::markers::{self, RegionFamily};
use crate::artifact::{ArtifactKind, FileExtension, GeneratedItem, ItemLabel, TargetUnit};
use crate::schema::{ClassifiedSet, ClassifiedType, TypeDescriptor};
use crate::settings::SettingsResolver;
use std::path::PathBuf;

const UNIT: TargetUnit = TargetUnit::WebFrontend;

/// Angular front-end target: TypeScript models, HTTP service clients, and
/// list components (component class plus HTML template).
///
/// Service clients address the web API only through [`naming::api_route`];
/// the generators stay independent at runtime.
pub struct WebFrontendGenerator<'a> {
    model: &'a ClassifiedSet,
    settings: &'a SettingsResolver,
    root: String,
}

impl<'a> WebFrontendGenerator<'a> {
    pub fn new(model: &'a ClassifiedSet, settings: &'a SettingsResolver) -> Self {
        let root = settings.root_namespace();
        Self { model, settings, root }
    }

    fn ts_model(&self, ty: &TypeDescriptor) -> anyhow::Result<Option<GeneratedItem>> {
        let kind = ArtifactKind::TsModel;
        let ext = FileExtension::TypeScript;
        let name = &ty.name;
        if !self.settings.generate_enabled(UNIT, kind, name) {
            return Ok(None);
        }
        let file = naming::to_kebab_case(name);

        let mut lines = Vec::new();
        markers::push_empty_region(&mut lines, ext, RegionFamily::Imports, "");
        lines.push(String::new());
        lines.push(format!("export interface {name} {{"));
        for p in &ty.properties {
            let ts = naming::ts_type(self.model, &p.ty)?;
            lines.push(format!("    {}: {ts};", naming::to_lower_camel(&p.name)));
        }
        markers::push_empty_region(&mut lines, ext, RegionFamily::Body, "    ");
        lines.push("}".to_string());

        Ok(Some(GeneratedItem {
            unit: UNIT,
            kind,
            full_name: format!("{}.Web.{name}", self.root),
            extension: ext,
            sub_path: PathBuf::from(format!("app/models/{file}.model.ts")),
            source: lines,
            label: ItemLabel::Default,
        }))
    }

    fn service_client(&self, t: &ClassifiedType) -> anyhow::Result<Option<GeneratedItem>> {
        let kind = ArtifactKind::ServiceClient;
        let ext = FileExtension::TypeScript;
        let name = &t.descriptor.name;
        if !self.settings.generate_enabled(UNIT, kind, name) {
            return Ok(None);
        }
        let service = naming::service_client_name(name);
        let route = naming::api_route(name);
        let file = naming::to_kebab_case(name);

        let mut lines = vec![
            "import { Injectable } from '@angular/core';".to_string(),
            "import { HttpClient } from '@angular/common/http';".to_string(),
            "import { Observable } from 'rxjs';".to_string(),
            format!("import {{ {name} }} from '../models/{file}.model';"),
        ];
        markers::push_empty_region(&mut lines, ext, RegionFamily::Imports, "");
        lines.push(String::new());
        lines.push("@Injectable({ providedIn: 'root' })".to_string());
        lines.push(format!("export class {service} {{"));
        lines.push(format!("    private readonly baseUrl = '{route}';"));
        lines.push(String::new());
        lines.push("    constructor(private http: HttpClient) {}".to_string());
        lines.push(String::new());
        lines.push(format!("    list(): Observable<{name}[]> {{"));
        lines.push(format!("        return this.http.get<{name}[]>(this.baseUrl);"));
        lines.push("    }".to_string());
        lines.push(String::new());
        lines.push(format!("    get(id: number): Observable<{name}> {{"));
        lines.push(format!("        return this.http.get<{name}>(`${{this.baseUrl}}/${{id}}`);"));
        lines.push("    }".to_string());
        lines.push(String::new());
        lines.push(format!("    create(values: {name}): Observable<{name}> {{"));
        lines.push(format!("        return this.http.post<{name}>(this.baseUrl, values);"));
        lines.push("    }".to_string());
        markers::push_empty_region(&mut lines, ext, RegionFamily::Body, "    ");
        lines.push("}".to_string());

        Ok(Some(GeneratedItem {
            unit: UNIT,
            kind,
            full_name: format!("{}.Web.{service}", self.root),
            extension: ext,
            sub_path: PathBuf::from(format!("app/services/{file}.service.ts")),
            source: lines,
            label: ItemLabel::Default,
        }))
    }

    /// The list component is two artifacts under one kind: the component
    /// class and its HTML template, side by side in the component directory.
    fn list_component(&self, t: &ClassifiedType) -> Vec<anyhow::Result<Option<GeneratedItem>>> {
        let kind = ArtifactKind::ListComponent;
        let name = &t.descriptor.name;
        if !self.settings.generate_enabled(UNIT, kind, name) {
            return vec![Ok(None)];
        }
        let component = naming::component_name(name);
        let selector = naming::component_selector(name);
        let service = naming::service_client_name(name);
        let file = naming::to_kebab_case(name);
        let dir = format!("app/components/{file}-list");

        let ext = FileExtension::TypeScript;
        let mut lines = vec![
            "import { Component, OnInit } from '@angular/core';".to_string(),
            format!("import {{ {name} }} from '../../models/{file}.model';"),
            format!("import {{ {service} }} from '../../services/{file}.service';"),
        ];
        markers::push_empty_region(&mut lines, ext, RegionFamily::Imports, "");
        lines.push(String::new());
        lines.push("@Component({".to_string());
        lines.push(format!("    selector: '{selector}',"));
        lines.push(format!("    templateUrl: './{file}-list.component.html',"));
        lines.push("})".to_string());
        lines.push(format!("export class {component} implements OnInit {{"));
        lines.push(format!("    items: {name}[] = [];"));
        lines.push(String::new());
        lines.push(format!("    constructor(private service: {service}) {{}}"));
        lines.push(String::new());
        lines.push("    ngOnInit(): void {".to_string());
        lines.push("        this.service.list().subscribe(items => (this.items = items));".to_string());
        lines.push("    }".to_string());
        markers::push_empty_region(&mut lines, ext, RegionFamily::Body, "    ");
        lines.push("}".to_string());
        let class_item = GeneratedItem {
            unit: UNIT,
            kind,
            full_name: format!("{}.Web.{component}", self.root),
            extension: ext,
            sub_path: PathBuf::from(format!("{dir}/{file}-list.component.ts")),
            source: lines,
            label: ItemLabel::Default,
        };

        let ext = FileExtension::Html;
        let mut template = vec!["<table>".to_string(), "    <tr>".to_string()];
        for p in &t.descriptor.properties {
            if !p.read {
                continue;
            }
            template.push(format!("        <th>{}</th>", p.name));
        }
        template.push("    </tr>".to_string());
        template.push("    <tr *ngFor=\"let item of items\">".to_string());
        for p in &t.descriptor.properties {
            if !p.read {
                continue;
            }
            template.push(format!(
                "        <td>{{{{ item.{} }}}}</td>",
                naming::to_lower_camel(&p.name)
            ));
        }
        template.push("    </tr>".to_string());
        markers::push_empty_region(&mut template, ext, RegionFamily::Body, "    ");
        template.push("</table>".to_string());
        let template_item = GeneratedItem {
            unit: UNIT,
            kind,
            full_name: format!("{}.Web.{component}Template", self.root),
            extension: ext,
            sub_path: PathBuf::from(format!("{dir}/{file}-list.component.html")),
            source: template,
            label: ItemLabel::Default,
        };

        vec![Ok(Some(class_item)), Ok(Some(template_item))]
    }
}

impl TargetGenerator for WebFrontendGenerator<'_> {
    fn unit(&self) -> TargetUnit {
        UNIT
    }

    fn generate_all(&self) -> TargetOutput {
        let mut out = TargetOutput::default();
        for t in &self.model.entities {
            out.push(UNIT, ArtifactKind::TsModel, &t.descriptor.name, self.ts_model(&t.descriptor));
        }
        for t in &self.model.views {
            out.push(UNIT, ArtifactKind::TsModel, &t.descriptor.name, self.ts_model(&t.descriptor));
        }
        for t in &self.model.entities {
            out.push(UNIT, ArtifactKind::ServiceClient, &t.descriptor.name, self.service_client(t));
        }
        for t in &self.model.entities {
            for outcome in self.list_component(t) {
                out.push(UNIT, ArtifactKind::ListComponent, &t.descriptor.name, outcome);
            }
        }
        out
    }
}
