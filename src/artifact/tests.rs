#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::markers::{self, MarkerEdge};
use super::*;

#[test]
fn test_header_line_per_extension() {
    assert_eq!(
        markers::header_line(FileExtension::CSharp, &ItemLabel::Default),
        "// <auto-generated>"
    );
    assert_eq!(
        markers::header_line(FileExtension::Xaml, &ItemLabel::Default),
        "<!-- <auto-generated> -->"
    );
    assert_eq!(
        markers::header_line(FileExtension::TypeScript, &ItemLabel::Special("data-context".into())),
        "// <auto-generated: data-context>"
    );
}

#[test]
fn test_generated_header_detection() {
    assert!(markers::is_generated_header("// <auto-generated>"));
    assert!(markers::is_generated_header("<!-- <auto-generated> -->"));
    assert!(markers::is_generated_header("// <auto-generated: special>"));
    assert!(!markers::is_generated_header("// hand-written file"));
    assert!(!markers::is_generated_header("using System;"));
}

#[test]
fn test_marker_on_line_distinguishes_edges_and_families() {
    let begin = markers::begin_marker(FileExtension::CSharp, RegionFamily::Imports);
    let end = markers::end_marker(FileExtension::CSharp, RegionFamily::Imports);
    assert_eq!(
        markers::marker_on_line(&begin),
        Some((RegionFamily::Imports, MarkerEdge::Begin))
    );
    assert_eq!(
        markers::marker_on_line(&end),
        Some((RegionFamily::Imports, MarkerEdge::End))
    );
    let body_begin = markers::begin_marker(FileExtension::Html, RegionFamily::Body);
    assert_eq!(
        markers::marker_on_line(&format!("    {body_begin}")),
        Some((RegionFamily::Body, MarkerEdge::Begin))
    );
    assert_eq!(markers::marker_on_line("let x = 1;"), None);
}

#[test]
fn test_extension_round_trip() {
    for ext in [
        FileExtension::CSharp,
        FileExtension::TypeScript,
        FileExtension::Html,
        FileExtension::Xaml,
    ] {
        let path = std::path::PathBuf::from(format!("a/b/file.{}", ext.as_str()));
        assert_eq!(FileExtension::from_path(&path), Some(ext));
    }
    assert_eq!(FileExtension::from_path(std::path::Path::new("a.rs")), None);
}

#[test]
fn test_item_header_uses_own_extension() {
    let item = GeneratedItem {
        unit: TargetUnit::DataLayer,
        kind: ArtifactKind::EntitySet,
        full_name: "Support.Data.OrderSet".to_string(),
        extension: FileExtension::CSharp,
        sub_path: "DataContext/OrderSet.cs".into(),
        source: vec![],
        label: ItemLabel::Default,
    };
    assert_eq!(item.header_line(), "// <auto-generated>");
}
