use super::naming;
use super::{TargetGenerator, TargetOutput};
use crate::artifact::markers::{self, RegionFamily};
use crate::artifact::{ArtifactKind, FileExtension, GeneratedItem, ItemLabel, TargetUnit};
use crate::schema::{ClassifiedSet, ClassifiedType};
use crate::settings::SettingsResolver;
use std::path::PathBuf;

const UNIT: TargetUnit = TargetUnit::DesktopViews;

/// Desktop MVVM target: a view model (C#) plus list and detail views (XAML)
/// per entity. XAML items go through the block-comment marker syntax.
pub struct DesktopViewsGenerator<'a> {
    model: &'a ClassifiedSet,
    settings: &'a SettingsResolver,
    root: String,
}

impl<'a> DesktopViewsGenerator<'a> {
    pub fn new(model: &'a ClassifiedSet, settings: &'a SettingsResolver) -> Self {
        let root = settings.root_namespace();
        Self { model, settings, root }
    }

    fn namespace(&self) -> String {
        format!("{}.Views", self.root)
    }

    fn view_model(&self, t: &ClassifiedType) -> anyhow::Result<Option<GeneratedItem>> {
        let kind = ArtifactKind::ViewModel;
        let ext = FileExtension::CSharp;
        let name = &t.descriptor.name;
        if !self.settings.generate_enabled(UNIT, kind, name) {
            return Ok(None);
        }
        let vm = naming::view_model_name(name);
        let visibility =
            self.settings
                .query_item(UNIT, kind, name, "Visibility", "public".to_string());
        let ns = self.namespace();

        let mut lines = vec![
            "using System;".to_string(),
            "using System.ComponentModel;".to_string(),
            format!("using {}.Contracts;", self.root),
        ];
        markers::push_empty_region(&mut lines, ext, RegionFamily::Imports, "");
        lines.push(String::new());
        lines.push(format!("namespace {ns}"));
        lines.push("{".to_string());
        lines.push(format!("    {visibility} partial class {vm} : INotifyPropertyChanged"));
        lines.push("    {".to_string());
        lines.push("        public event PropertyChangedEventHandler PropertyChanged;".to_string());
        for p in &t.descriptor.properties {
            if !(p.read && p.write) {
                continue;
            }
            let cs = naming::csharp_type(self.model, &p.ty)?;
            let field = naming::to_lower_camel(&p.name);
            lines.push(String::new());
            lines.push(format!("        private {cs} _{field};"));
            lines.push(format!("        public {cs} {}", p.name));
            lines.push("        {".to_string());
            lines.push(format!("            get {{ return _{field}; }}"));
            lines.push(format!(
                "            set {{ _{field} = value; Raise(\"{}\"); }}",
                p.name
            ));
            lines.push("        }".to_string());
        }
        lines.push(String::new());
        lines.push("        private void Raise(string name)".to_string());
        lines.push("        {".to_string());
        lines.push("            PropertyChanged?.Invoke(this, new PropertyChangedEventArgs(name));".to_string());
        lines.push("        }".to_string());
        markers::push_empty_region(&mut lines, ext, RegionFamily::Body, "        ");
        lines.push("    }".to_string());
        lines.push("}".to_string());

        Ok(Some(GeneratedItem {
            unit: UNIT,
            kind,
            full_name: format!("{ns}.{vm}"),
            extension: ext,
            sub_path: PathBuf::from(format!("ViewModels/{vm}.cs")),
            source: lines,
            label: ItemLabel::Default,
        }))
    }

    fn list_view(&self, t: &ClassifiedType) -> anyhow::Result<Option<GeneratedItem>> {
        let kind = ArtifactKind::ListView;
        let name = &t.descriptor.name;
        if !self.settings.generate_enabled(UNIT, kind, name) {
            return Ok(None);
        }
        let view = format!("{name}ListView");
        Ok(Some(self.xaml_view(kind, &view, t, true)))
    }

    fn detail_view(&self, t: &ClassifiedType) -> anyhow::Result<Option<GeneratedItem>> {
        let kind = ArtifactKind::DetailView;
        let name = &t.descriptor.name;
        if !self.settings.generate_enabled(UNIT, kind, name) {
            return Ok(None);
        }
        let view = format!("{name}DetailView");
        Ok(Some(self.xaml_view(kind, &view, t, false)))
    }

    fn xaml_view(
        &self,
        kind: ArtifactKind,
        view: &str,
        t: &ClassifiedType,
        as_grid: bool,
    ) -> GeneratedItem {
        let ext = FileExtension::Xaml;
        let ns = self.namespace();
        let vm = naming::view_model_name(&t.descriptor.name);

        let mut lines = vec![
            format!("<UserControl x:Class=\"{ns}.{view}\""),
            "             xmlns=\"http://schemas.microsoft.com/winfx/2006/xaml/presentation\"".to_string(),
            format!("             DataContext=\"{{Binding {vm}}}\">"),
        ];
        markers::push_empty_region(&mut lines, ext, RegionFamily::Imports, "    ");
        if as_grid {
            lines.push("    <DataGrid ItemsSource=\"{Binding Items}\" AutoGenerateColumns=\"False\">".to_string());
            lines.push("        <DataGrid.Columns>".to_string());
            for p in &t.descriptor.properties {
                if !p.read {
                    continue;
                }
                lines.push(format!(
                    "            <DataGridTextColumn Header=\"{0}\" Binding=\"{{Binding {0}}}\" />",
                    p.name
                ));
            }
            lines.push("        </DataGrid.Columns>".to_string());
            lines.push("    </DataGrid>".to_string());
        } else {
            lines.push("    <StackPanel>".to_string());
            for p in &t.descriptor.properties {
                if !p.read {
                    continue;
                }
                lines.push(format!("        <Label Content=\"{}\" />", p.name));
                lines.push(format!("        <TextBox Text=\"{{Binding {}}}\" />", p.name));
            }
            lines.push("    </StackPanel>".to_string());
        }
        markers::push_empty_region(&mut lines, ext, RegionFamily::Body, "    ");
        lines.push("</UserControl>".to_string());

        GeneratedItem {
            unit: UNIT,
            kind,
            full_name: format!("{ns}.{view}"),
            extension: ext,
            sub_path: PathBuf::from(format!("Views/{view}.xaml")),
            source: lines,
            label: ItemLabel::Default,
        }
    }
}

impl TargetGenerator for DesktopViewsGenerator<'_> {
    fn unit(&self) -> TargetUnit {
        UNIT
    }

    fn generate_all(&self) -> TargetOutput {
        let mut out = TargetOutput::default();
        for t in &self.model.entities {
            let name = t.descriptor.name.clone();
            out.push(UNIT, ArtifactKind::ViewModel, &name, self.view_model(t));
            out.push(UNIT, ArtifactKind::ListView, &name, self.list_view(t));
            out.push(UNIT, ArtifactKind::DetailView, &name, self.detail_view(t));
        }
        out
    }
}
