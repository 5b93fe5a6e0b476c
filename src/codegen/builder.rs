use super::definition::{ClassDefinition, PropertyDefinition};
use super::naming::to_pascal_case;
use crate::schema::{SchemaNode, TypeMap};
use ahash::AHashSet;
use tracing::debug;

/// Child keys that never become properties.
///
/// `type`, `title`, `description` and `format` are descriptive; `headers`,
/// `queries`, `tags` and `relativePathParameters` are request plumbing that
/// mocks do not need to model.
pub const SKIPPED_KEYS: [&str; 8] = [
    "type",
    "title",
    "description",
    "format",
    "headers",
    "queries",
    "tags",
    "relativePathParameters",
];

/// Turns a schema tree into a tree of class definitions.
///
/// One builder covers one generation pass: every class it names is unique
/// among all the classes it has built so far.
pub struct ClassBuilder<'a> {
    type_map: &'a TypeMap,
    class_names: AHashSet<String>,
}

impl<'a> ClassBuilder<'a> {
    pub fn new(type_map: &'a TypeMap) -> Self {
        Self {
            type_map,
            class_names: AHashSet::new(),
        }
    }

    /// Reserves `name`, appending the smallest numeric suffix from 2 upwards
    /// when it is already taken.
    pub fn claim_class_name(&mut self, name: &str) -> String {
        if self.class_names.insert(name.to_string()) {
            return name.to_string();
        }
        let unique = (2..)
            .map(|n| format!("{}{}", name, n))
            .find(|candidate| !self.class_names.contains(candidate))
            .unwrap_or_else(|| name.to_string());
        debug!(class = %name, renamed = %unique, "class name already taken");
        self.class_names.insert(unique.clone());
        unique
    }

    /// Recursively builds the class definition for `node`.
    ///
    /// Only object-typed nodes are decomposed. Each object-typed child becomes
    /// a nested class named `class_name + PascalCase(key)`; every other child
    /// becomes a property typed through the [`TypeMap`]. Source key order is
    /// preserved for both properties and children.
    pub fn build(&mut self, class_name: &str, node: &SchemaNode) -> ClassDefinition {
        let class_name = self.claim_class_name(class_name);
        self.build_claimed(class_name, node)
    }

    fn build_claimed(&mut self, class_name: String, node: &SchemaNode) -> ClassDefinition {
        let mut class_def = ClassDefinition::empty(class_name, node.description.clone());
        if !node.is_object() {
            return class_def;
        }

        for (key, child) in &node.fields {
            if SKIPPED_KEYS.contains(&key.as_str()) {
                continue;
            }

            let property_name = to_pascal_case(key);
            let (property_type, is_object) = if child.is_object() {
                let nested_name =
                    self.claim_class_name(&format!("{}{}", class_def.class_name, property_name));
                let nested = self.build_claimed(nested_name, child);
                let nested_name = nested.class_name.clone();
                class_def.children.push(nested);
                (nested_name, true)
            } else {
                (
                    self.type_map.resolve(child.schema_type.as_ref()).to_string(),
                    false,
                )
            };

            class_def.properties.push(PropertyDefinition {
                property_name,
                property_type,
                description: child.description.clone(),
                is_object,
            });
        }

        class_def
    }
}

/// Builds a class definition with the default type mapping.
pub fn build_class_definition(class_name: &str, node: &SchemaNode) -> ClassDefinition {
    ClassBuilder::new(&TypeMap::default()).build(class_name, node)
}
