use modelgen::artifact::markers::{begin_marker, end_marker};
use modelgen::artifact::{
    ArtifactKind, FileExtension, GeneratedItem, ItemLabel, RegionFamily, TargetUnit,
};
use modelgen::writer::{delete_generated, side_file_path, Writer};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn contract_item(name: &str) -> GeneratedItem {
    let ext = FileExtension::CSharp;
    GeneratedItem {
        unit: TargetUnit::Contracts,
        kind: ArtifactKind::EntityContract,
        full_name: format!("Support.Contracts.I{name}"),
        extension: ext,
        sub_path: PathBuf::from("Entities").join(format!("I{name}.cs")),
        source: vec![
            begin_marker(ext, RegionFamily::Imports),
            end_marker(ext, RegionFamily::Imports),
            format!("public interface I{name}"),
            "{".to_string(),
            begin_marker(ext, RegionFamily::Body),
            end_marker(ext, RegionFamily::Body),
            "}".to_string(),
        ],
        label: ItemLabel::Default,
    }
}

#[test]
fn test_fresh_write_carries_header_and_markers() {
    let dir = TempDir::new().expect("temp dir");
    let writer = Writer::new(dir.path());
    let item = contract_item("Order");

    let report = writer.write_items(
        TargetUnit::Contracts,
        ArtifactKind::EntityContract,
        &[item.clone()],
        false,
    );
    assert_eq!(report.written.len(), 1);
    assert!(report.failed.is_empty());

    let dest = writer.destination(&item);
    let content = fs::read_to_string(&dest).expect("read generated file");
    let first_line = content.lines().next().expect("non-empty");
    assert!(first_line.contains("<auto-generated>"));
    assert!(content.contains("<custom-imports>"));
    assert!(content.contains("</custom-body>"));
}

#[test]
fn test_custom_region_content_survives_regeneration() {
    let dir = TempDir::new().expect("temp dir");
    let writer = Writer::new(dir.path());
    let item = contract_item("Order");

    writer.write_items(
        TargetUnit::Contracts,
        ArtifactKind::EntityContract,
        &[item.clone()],
        false,
    );

    // Hand-edit inside the body region and outside any region.
    let dest = writer.destination(&item);
    let content = fs::read_to_string(&dest).expect("read");
    let edited = content
        .replace(
            "// <custom-body>",
            "// <custom-body>\n    int Priority { get; set; }",
        )
        .replace("public interface IOrder", "public interface IOrder // stray edit");
    fs::write(&dest, edited).expect("write edits");

    writer.write_items(
        TargetUnit::Contracts,
        ArtifactKind::EntityContract,
        &[item.clone()],
        false,
    );

    let regenerated = fs::read_to_string(&dest).expect("read regenerated");
    assert!(regenerated.contains("int Priority { get; set; }"));
    // Edits outside the marker pairs are discarded.
    assert!(!regenerated.contains("stray edit"));
}

#[test]
fn test_user_owned_file_is_never_overwritten() {
    let dir = TempDir::new().expect("temp dir");
    let writer = Writer::new(dir.path());
    let item = contract_item("Order");

    writer.write_items(
        TargetUnit::Contracts,
        ArtifactKind::EntityContract,
        &[item.clone()],
        false,
    );

    // Remove the generated label; the file is now user-owned.
    let dest = writer.destination(&item);
    let content = fs::read_to_string(&dest).expect("read");
    let body: String = content.lines().skip(1).collect::<Vec<_>>().join("\n");
    fs::write(&dest, &body).expect("strip label");

    let report = writer.write_items(
        TargetUnit::Contracts,
        ArtifactKind::EntityContract,
        &[item.clone()],
        false,
    );
    assert_eq!(report.skipped.len(), 1);
    assert!(report.written.is_empty());
    assert_eq!(fs::read_to_string(&dest).expect("read again"), body);
}

#[test]
fn test_force_reclaims_user_owned_file() {
    let dir = TempDir::new().expect("temp dir");
    let item = contract_item("Order");

    let writer = Writer::new(dir.path());
    writer.write_items(
        TargetUnit::Contracts,
        ArtifactKind::EntityContract,
        &[item.clone()],
        false,
    );
    let dest = writer.destination(&item);
    fs::write(&dest, "// mine now\n").expect("take ownership");

    let forced = Writer::new(dir.path()).force(true);
    let report = forced.write_items(
        TargetUnit::Contracts,
        ArtifactKind::EntityContract,
        &[item.clone()],
        false,
    );
    assert_eq!(report.written, vec![dest.clone()]);
    let content = fs::read_to_string(&dest).expect("read");
    assert!(content.contains("<auto-generated>"));
    assert!(!content.contains("mine now"));
}

#[test]
fn test_dry_run_reports_without_writing() {
    let dir = TempDir::new().expect("temp dir");
    let writer = Writer::new(dir.path()).dry_run(true);
    let item = contract_item("Order");

    let report = writer.write_items(
        TargetUnit::Contracts,
        ArtifactKind::EntityContract,
        &[item.clone()],
        false,
    );
    assert_eq!(report.written.len(), 1);
    assert!(!writer.destination(&item).exists());
}

#[test]
fn test_cleanup_backs_up_custom_regions_and_next_run_restores() {
    let dir = TempDir::new().expect("temp dir");
    let writer = Writer::new(dir.path());
    let item = contract_item("Order");

    writer.write_items(
        TargetUnit::Contracts,
        ArtifactKind::EntityContract,
        &[item.clone()],
        false,
    );
    let dest = writer.destination(&item);
    let content = fs::read_to_string(&dest).expect("read");
    let edited = content.replace(
        "// <custom-body>",
        "// <custom-body>\n    int Priority { get; set; }",
    );
    fs::write(&dest, edited).expect("write edit");

    let report = delete_generated(dir.path());
    assert_eq!(report.deleted.len(), 1);
    assert_eq!(report.backed_up.len(), 1);
    assert!(!dest.exists());
    let side = side_file_path(&dest);
    assert!(side.exists());

    // Regeneration restores from the side-file and consumes it.
    writer.write_items(
        TargetUnit::Contracts,
        ArtifactKind::EntityContract,
        &[item.clone()],
        false,
    );
    let restored = fs::read_to_string(&dest).expect("read restored");
    assert!(restored.contains("int Priority { get; set; }"));
    assert!(!side.exists());
}

#[test]
fn test_cleanup_leaves_user_owned_files_alone() {
    let dir = TempDir::new().expect("temp dir");
    let owned = dir.path().join("Contracts").join("Mine.cs");
    fs::create_dir_all(owned.parent().expect("parent")).expect("mkdir");
    fs::write(&owned, "public class Mine {}\n").expect("write");

    let report = delete_generated(dir.path());
    assert!(report.deleted.is_empty());
    assert!(owned.exists());
}

#[test]
fn test_group_file_mode_writes_single_header() {
    let dir = TempDir::new().expect("temp dir");
    let writer = Writer::new(dir.path());
    let mut order = contract_item("Order");
    let mut ticket = contract_item("Ticket");
    order.kind = ArtifactKind::EnumDefinition;
    ticket.kind = ArtifactKind::EnumDefinition;
    order.sub_path = PathBuf::from("Enums").join("IOrder.cs");
    ticket.sub_path = PathBuf::from("Enums").join("ITicket.cs");

    let report = writer.write_items(
        TargetUnit::Contracts,
        ArtifactKind::EnumDefinition,
        &[order, ticket],
        true,
    );
    assert_eq!(report.written.len(), 1);

    let path = &report.written[0];
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("EnumDefinition.cs"));
    let content = fs::read_to_string(path).expect("read group file");
    let headers = content.matches("<auto-generated>").count();
    assert_eq!(headers, 1);
    assert!(content.contains("public interface IOrder"));
    assert!(content.contains("public interface ITicket"));
}
