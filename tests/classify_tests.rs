use modelgen::schema::{classify, load_model, SystemCategory, TypeKind};
use std::io::Write;
use tempfile::NamedTempFile;

const MODEL_YAML: &str = r#"
types:
  - name: Order
    namespace: Support.Domain
    kind: class
    base: [EntityObject]
    properties:
      - name: Id
        type: int
      - name: Subject
        type: string
  - name: OrderSummary
    namespace: Support.Domain
    kind: class
    base: [ViewObject]
    properties:
      - name: Subject
        type: string
        write: false
  - name: Severity
    namespace: Support.Domain
    kind: enum
    variants: [Low, Medium, High]
  - name: Attachment
    namespace: Support.Domain
    kind: class
    properties:
      - name: FileName
        type: string
  - name: User
    namespace: Support.Account
    kind: class
    base: [EntityObject]
    properties:
      - name: Id
        type: int
"#;

fn write_model(content: &str, suffix: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::with_suffix(suffix).expect("create temp file");
    temp.write_all(content.as_bytes()).expect("write model");
    temp.flush().expect("flush");
    temp
}

#[test]
fn test_load_and_classify_yaml_model() {
    let temp = write_model(MODEL_YAML, ".yaml");
    let types = load_model(temp.path()).expect("load model");
    assert_eq!(types.len(), 5);

    let set = classify(&types);
    assert_eq!(set.entities.len(), 2);
    assert_eq!(set.views.len(), 1);
    assert_eq!(set.models.len(), 1);
    assert_eq!(set.enums.len(), 1);
    assert!(set.interfaces.is_empty());
}

#[test]
fn test_system_category_from_namespace() {
    let temp = write_model(MODEL_YAML, ".yaml");
    let types = load_model(temp.path()).expect("load model");
    let set = classify(&types);

    let user = set
        .entities
        .iter()
        .find(|t| t.descriptor.name == "User")
        .expect("User entity");
    assert_eq!(user.category, SystemCategory::Account);
    assert!(user.category.is_system());

    let order = set
        .entities
        .iter()
        .find(|t| t.descriptor.name == "Order")
        .expect("Order entity");
    assert_eq!(order.category, SystemCategory::Custom);
    assert!(!order.category.is_system());
}

#[test]
fn test_classification_is_sorted_by_name() {
    let temp = write_model(MODEL_YAML, ".yaml");
    let types = load_model(temp.path()).expect("load model");
    let set = classify(&types);

    let names: Vec<&str> = set
        .entities
        .iter()
        .map(|t| t.descriptor.name.as_str())
        .collect();
    assert_eq!(names, vec!["Order", "User"]);
}

#[test]
fn test_json_model_round_trips_through_loader() {
    let json = r#"{
        "types": [
            {
                "name": "Ticket",
                "namespace": "Support.Domain",
                "kind": "class",
                "base": ["EntityObject"],
                "properties": [{"name": "Id", "type": "int"}]
            }
        ]
    }"#;
    let temp = write_model(json, ".json");
    let types = load_model(temp.path()).expect("load model");
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].name, "Ticket");
    assert_eq!(types[0].kind, TypeKind::Class);
    assert!(types[0].properties[0].read);
    assert!(types[0].properties[0].write);
}

#[test]
fn test_declared_name_lookup() {
    let temp = write_model(MODEL_YAML, ".yaml");
    let types = load_model(temp.path()).expect("load model");
    let set = classify(&types);

    assert!(set.is_declared("Severity"));
    assert!(set.is_declared("Attachment"));
    assert!(!set.is_declared("Mystery"));
    assert!(set.find_enum("Severity").is_some());
    assert!(set.find_enum("Order").is_none());
}

#[test]
fn test_missing_model_file_is_an_error() {
    let result = load_model(std::path::Path::new("/nonexistent/model.yaml"));
    assert!(result.is_err());
}
