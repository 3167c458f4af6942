#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::artifact::markers;
use crate::schema::{classify, PropertyDescriptor, TypeDescriptor, TypeKind};
use crate::settings::{MemorySettingsStore, SettingsResolver};
use std::sync::Arc;

fn prop(name: &str, ty: &str) -> PropertyDescriptor {
    PropertyDescriptor {
        name: name.to_string(),
        ty: ty.to_string(),
        read: true,
        write: true,
    }
}

fn fixture_model() -> ClassifiedSet {
    classify(&[
        TypeDescriptor {
            name: "Order".to_string(),
            namespace: "Support.Domain".to_string(),
            kind: TypeKind::Class,
            base: vec!["EntityObject".to_string()],
            properties: vec![prop("Id", "int"), prop("Subject", "string")],
            variants: vec![],
        },
        TypeDescriptor {
            name: "OrderSummary".to_string(),
            namespace: "Support.Domain".to_string(),
            kind: TypeKind::Class,
            base: vec!["ViewObject".to_string()],
            properties: vec![prop("Subject", "string")],
            variants: vec![],
        },
        TypeDescriptor {
            name: "Severity".to_string(),
            namespace: "Support.Domain".to_string(),
            kind: TypeKind::Enum,
            base: vec![],
            properties: vec![],
            variants: vec!["Low".to_string(), "High".to_string()],
        },
    ])
}

fn default_resolver() -> SettingsResolver {
    SettingsResolver::new(Arc::new(MemorySettingsStore::new()))
}

#[test]
fn test_data_layer_emits_order_set() {
    let model = fixture_model();
    let settings = default_resolver();
    let out = DataLayerGenerator::new(&model, &settings).generate_all();
    assert!(out.failures.is_empty());
    let item = out
        .items
        .iter()
        .find(|i| i.kind == ArtifactKind::EntitySet)
        .unwrap();
    assert!(item.full_name.ends_with(".OrderSet"));
    assert_eq!(item.sub_path, std::path::PathBuf::from("DataContext/OrderSet.cs"));
    assert!(item.source.iter().any(|l| l.contains("class OrderSet : EntitySet<Order>")));
}

#[test]
fn test_same_named_entity_and_view_get_distinct_sets() {
    let model = classify(&[
        TypeDescriptor {
            name: "Order".to_string(),
            namespace: "Support.Domain".to_string(),
            kind: TypeKind::Class,
            base: vec!["EntityObject".to_string()],
            properties: vec![prop("Id", "int")],
            variants: vec![],
        },
        TypeDescriptor {
            name: "Order".to_string(),
            namespace: "Support.Reporting".to_string(),
            kind: TypeKind::Class,
            base: vec!["ViewObject".to_string()],
            properties: vec![prop("Subject", "string")],
            variants: vec![],
        },
    ]);
    let settings = default_resolver();
    let out = DataLayerGenerator::new(&model, &settings).generate_all();
    assert!(out.failures.is_empty());

    let entity_set = out
        .items
        .iter()
        .find(|i| i.kind == ArtifactKind::EntitySet)
        .unwrap();
    let view_set = out
        .items
        .iter()
        .find(|i| i.kind == ArtifactKind::ViewSet)
        .unwrap();
    // Same simple name must not collapse onto one class or one file.
    assert_ne!(entity_set.full_name, view_set.full_name);
    assert_ne!(entity_set.sub_path, view_set.sub_path);
    assert!(entity_set.full_name.ends_with(".OrderSet"));
    assert!(view_set.full_name.ends_with(".OrderViewSet"));
    assert!(view_set
        .source
        .iter()
        .any(|l| l.contains("class OrderViewSet : ViewSet<Order>")));
}

#[test]
fn test_generate_false_skips_item() {
    let model = fixture_model();
    let mut store = MemorySettingsStore::new();
    store.set("Contracts.EntityContract.Order.Generate", "false");
    let settings = SettingsResolver::new(Arc::new(store));
    let out = ContractsGenerator::new(&model, &settings).generate_all();
    assert!(out.failures.is_empty());
    assert!(!out
        .items
        .iter()
        .any(|i| i.kind == ArtifactKind::EntityContract && i.full_name.ends_with(".IOrder")));
    // Siblings still generate.
    assert!(out.items.iter().any(|i| i.kind == ArtifactKind::ViewContract));
    assert!(out.items.iter().any(|i| i.kind == ArtifactKind::EnumDefinition));
}

#[test]
fn test_generators_are_deterministic() {
    let model = fixture_model();
    let settings = default_resolver();
    for gen in all_generators(&model, &settings) {
        let a = gen.generate_all();
        let b = gen.generate_all();
        assert_eq!(a.items.len(), b.items.len(), "{}", gen.unit());
        for (x, y) in a.items.iter().zip(b.items.iter()) {
            assert_eq!(x, y);
        }
    }
}

#[test]
fn test_unknown_property_type_fails_only_that_artifact() {
    let model = classify(&[
        TypeDescriptor {
            name: "Order".to_string(),
            namespace: "Support.Domain".to_string(),
            kind: TypeKind::Class,
            base: vec!["EntityObject".to_string()],
            properties: vec![prop("Payload", "Mystery")],
            variants: vec![],
        },
        TypeDescriptor {
            name: "Ticket".to_string(),
            namespace: "Support.Domain".to_string(),
            kind: TypeKind::Class,
            base: vec!["EntityObject".to_string()],
            properties: vec![prop("Id", "int")],
            variants: vec![],
        },
    ]);
    let settings = default_resolver();
    let out = ContractsGenerator::new(&model, &settings).generate_all();
    assert_eq!(out.failures.len(), 1);
    assert_eq!(out.failures[0].item, "Order");
    assert!(out.failures[0].error.contains("Mystery"));
    assert!(out
        .items
        .iter()
        .any(|i| i.kind == ArtifactKind::EntityContract && i.full_name.ends_with(".ITicket")));
}

#[test]
fn test_items_carry_marker_pairs_not_headers() {
    let model = fixture_model();
    let settings = default_resolver();
    for gen in all_generators(&model, &settings) {
        for item in gen.generate_all().items {
            let begin = markers::begin_marker(item.extension, crate::artifact::RegionFamily::Body);
            let end = markers::end_marker(item.extension, crate::artifact::RegionFamily::Body);
            assert!(item.source.iter().any(|l| l.contains(&begin)), "{}", item.full_name);
            assert!(item.source.iter().any(|l| l.contains(&end)), "{}", item.full_name);
            // The writer owns the header label.
            assert!(!markers::is_generated_header(&item.source[0]), "{}", item.full_name);
        }
    }
}

#[test]
fn test_cross_target_references_are_string_formatting() {
    let model = fixture_model();
    let settings = default_resolver();
    let api = WebApiGenerator::new(&model, &settings).generate_all();
    let controller = api
        .items
        .iter()
        .find(|i| i.kind == ArtifactKind::ApiController)
        .unwrap();
    // The controller names the data layer's set class by convention.
    assert!(controller.source.iter().any(|l| l.contains("OrderSet")));

    let web = WebFrontendGenerator::new(&model, &settings).generate_all();
    let service = web
        .items
        .iter()
        .find(|i| i.kind == ArtifactKind::ServiceClient)
        .unwrap();
    assert!(service.source.iter().any(|l| l.contains("'api/order'")));
}

#[test]
fn test_visibility_setting_applies() {
    let model = fixture_model();
    let mut store = MemorySettingsStore::new();
    store.set("Contracts.EntityContract.AllItems.Visibility", "internal");
    let settings = SettingsResolver::new(Arc::new(store));
    let out = ContractsGenerator::new(&model, &settings).generate_all();
    let contract = out
        .items
        .iter()
        .find(|i| i.kind == ArtifactKind::EntityContract)
        .unwrap();
    assert!(contract
        .source
        .iter()
        .any(|l| l.contains("internal partial interface IOrder")));
}

#[test]
fn test_unit_identity() {
    let model = fixture_model();
    let settings = default_resolver();
    let units: Vec<_> = all_generators(&model, &settings)
        .iter()
        .map(|g| g.unit())
        .collect();
    assert_eq!(units, TargetUnit::ALL.to_vec());
}
