use crate::schema::ClassifiedSet;
use anyhow::anyhow;

/// Convert a snake_case or space-separated name to CamelCase.
pub fn to_camel_case(s: &str) -> String {
    s.split(['_', ' ', '-'])
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Convert a CamelCase name to kebab-case, e.g. `OrderLine` → `order-line`.
pub fn to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a CamelCase name to lowerCamelCase, e.g. `OrderLine` → `orderLine`.
pub fn to_lower_camel(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// Cross-target naming conventions. Generators reference each other's output
// only through these string forms, never through a runtime dependency, which
// is what allows them to run concurrently.

pub fn contract_name(type_name: &str) -> String {
    format!("I{type_name}")
}

pub fn entity_set_name(type_name: &str) -> String {
    format!("{type_name}Set")
}

/// View sets carry the `ViewSet` suffix so a view sharing an entity's simple
/// name still gets its own class and destination file.
pub fn view_set_name(type_name: &str) -> String {
    format!("{type_name}ViewSet")
}

pub fn data_context_name(root: &str) -> String {
    format!("{}DataContext", to_camel_case(root))
}

pub fn controller_name(type_name: &str) -> String {
    format!("{type_name}Controller")
}

pub fn api_route(type_name: &str) -> String {
    format!("api/{}", to_kebab_case(type_name))
}

pub fn view_model_name(type_name: &str) -> String {
    format!("{type_name}ViewModel")
}

pub fn service_client_name(type_name: &str) -> String {
    format!("{type_name}Service")
}

pub fn component_name(type_name: &str) -> String {
    format!("{type_name}ListComponent")
}

pub fn component_selector(type_name: &str) -> String {
    format!("app-{}-list", to_kebab_case(type_name))
}

/// Map a model-schema type name to its C# spelling.
///
/// Unknown names must be declared in the model; a dangling reference is a
/// hard failure for the artifact using it, not for the run.
pub fn csharp_type(model: &ClassifiedSet, ty: &str) -> anyhow::Result<String> {
    let mapped = match ty {
        "int" => "int",
        "long" => "long",
        "string" => "string",
        "bool" => "bool",
        "decimal" => "decimal",
        "double" => "double",
        "datetime" => "DateTime",
        "guid" => "Guid",
        other => {
            if model.is_declared(other) {
                return Ok(other.to_string());
            }
            return Err(anyhow!("unknown type `{other}` referenced by the model"));
        }
    };
    Ok(mapped.to_string())
}

/// Map a model-schema type name to its TypeScript spelling.
pub fn ts_type(model: &ClassifiedSet, ty: &str) -> anyhow::Result<String> {
    let mapped = match ty {
        "int" | "long" | "decimal" | "double" => "number",
        "string" | "guid" => "string",
        "bool" => "boolean",
        "datetime" => "Date",
        other => {
            if model.is_declared(other) {
                return Ok(other.to_string());
            }
            return Err(anyhow!("unknown type `{other}` referenced by the model"));
        }
    };
    Ok(mapped.to_string())
}
