use super::builder::ClassBuilder;
use super::definition::{ClassDefinition, PropertyDefinition};
use super::naming::sanitize_namespace;
use crate::schema::{SchemaNode, SchemaType, TypeMap};
use itertools::Itertools;

/// Segment appended to the logic app namespace for generated mocks.
pub const MOCKS_NAMESPACE_SUFFIX: &str = ".Tests.Mocks";

pub const STATUS_CODE_PROPERTY: &str = "StatusCode";
pub const STATUS_CODE_TYPE: &str = "HttpStatusCode";
const STATUS_CODE_DESCRIPTION: &str =
    "The HTTP status code returned by the action. Example: HttpStatusCode.OK for success.";

const USINGS: [&str; 3] = [
    "using Newtonsoft.Json.Linq;",
    "using System.Collections.Generic;",
    "using System.Net;",
];

/// Renders a class and, after it, every descendant class as C# source.
///
/// The class body lists one auto-property per property, followed by a
/// parameterless constructor that gives reference-typed properties a
/// non-null default.
pub fn generate_class_code(class_def: &ClassDefinition) -> String {
    let mut lines: Vec<String> = Vec::new();

    push_summary(&mut lines, "", class_def.description.as_deref());
    lines.push(format!("public class {}", class_def.class_name));
    lines.push("{".to_string());

    for prop in &class_def.properties {
        push_summary(&mut lines, "    ", prop.description.as_deref());
        lines.push(format!(
            "    public {} {} {{ get; set; }}",
            prop.property_type, prop.property_name
        ));
        lines.push(String::new());
    }

    lines.push("    /// <summary>".to_string());
    lines.push(format!(
        "    /// Initializes a new instance of the <see cref=\"{}\"/> class.",
        class_def.class_name
    ));
    lines.push("    /// </summary>".to_string());
    lines.push(format!("    public {}()", class_def.class_name));
    lines.push("    {".to_string());
    lines.extend(class_def.properties.iter().filter_map(default_initializer));
    lines.push("    }".to_string());
    lines.push(String::new());
    lines.push("}".to_string());
    lines.push(String::new());

    lines.extend(class_def.children.iter().map(generate_class_code));
    lines.iter().join("\n")
}

fn push_summary(lines: &mut Vec<String>, indent: &str, description: Option<&str>) {
    if let Some(description) = description {
        lines.push(format!("{indent}/// <summary>"));
        lines.push(format!("{indent}/// {description}"));
        lines.push(format!("{indent}/// </summary>"));
    }
}

/// The constructor statement for a property, if its type has a useful default.
fn default_initializer(prop: &PropertyDefinition) -> Option<String> {
    let name = &prop.property_name;
    let ty = prop.property_type.as_str();
    let value = if ty == "string" {
        "string.Empty".to_string()
    } else if prop.is_object || ty == "JObject" || ty.starts_with("List<") {
        format!("new {}()", ty)
    } else if ty == "int" {
        "0".to_string()
    } else if ty == STATUS_CODE_TYPE {
        format!("{}.OK", STATUS_CODE_TYPE)
    } else {
        return None;
    };
    Some(format!("        {} = {};", name, value))
}

/// Builds the root class definition for one mockable operation.
///
/// The root is always decomposed as an object, and a `StatusCode` property is
/// appended so tests can set the HTTP outcome of the mocked operation.
pub fn build_root_definition(
    root_class_name: &str,
    outputs: &SchemaNode,
    type_map: &TypeMap,
) -> ClassDefinition {
    build_root_with(&mut ClassBuilder::new(type_map), root_class_name, outputs)
}

/// [`build_root_definition`] on a shared builder, so class names stay unique
/// across every root built in the same pass.
pub fn build_root_with(
    builder: &mut ClassBuilder<'_>,
    root_class_name: &str,
    outputs: &SchemaNode,
) -> ClassDefinition {
    let mut root = outputs.clone();
    root.schema_type = Some(SchemaType::Object);

    let mut root_def = builder.build(root_class_name, &root);
    root_def.properties.push(PropertyDefinition {
        property_name: STATUS_CODE_PROPERTY.to_string(),
        property_type: STATUS_CODE_TYPE.to_string(),
        description: Some(STATUS_CODE_DESCRIPTION.to_string()),
        is_object: false,
    });
    root_def
}

/// The namespace generated mocks live in for a given logic app.
pub fn mocks_namespace(logic_app_name: &str) -> String {
    format!("{}{}", sanitize_namespace(logic_app_name), MOCKS_NAMESPACE_SUFFIX)
}

/// Renders a complete C# compilation unit for a class tree.
pub fn emit_compilation_unit(root_def: &ClassDefinition, logic_app_name: &str) -> String {
    USINGS
        .iter()
        .map(|u| u.to_string())
        .chain([
            String::new(),
            format!("namespace {}", mocks_namespace(logic_app_name)),
            "{".to_string(),
            generate_class_code(root_def),
            "}".to_string(),
        ])
        .join("\n")
}

/// Generates the C# source for one operation's mock output classes.
pub fn generate_csharp_classes(
    logic_app_name: &str,
    root_class_name: &str,
    outputs: &SchemaNode,
    type_map: &TypeMap,
) -> String {
    let root_def = build_root_definition(root_class_name, outputs, type_map);
    emit_compilation_unit(&root_def, logic_app_name)
}
