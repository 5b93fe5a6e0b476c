use serde::Serialize;

/// Metadata for one generated C# class: its name, doc comment, properties and
/// the nested classes its object-typed properties refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDefinition {
    pub class_name: String,
    pub description: Option<String>,
    pub properties: Vec<PropertyDefinition>,
    pub children: Vec<ClassDefinition>,
}

/// A single property of a generated class.
///
/// When `is_object` is set, `property_type` names one of the enclosing
/// class's `children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    pub property_name: String,
    pub property_type: String,
    pub description: Option<String>,
    pub is_object: bool,
}

impl ClassDefinition {
    /// A class with no properties and no children.
    pub fn empty(class_name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            class_name: class_name.into(),
            description,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Looks up a direct child class by name.
    pub fn find_child(&self, class_name: &str) -> Option<&ClassDefinition> {
        self.children.iter().find(|c| c.class_name == class_name)
    }

    pub fn find_property(&self, property_name: &str) -> Option<&PropertyDefinition> {
        self.properties
            .iter()
            .find(|p| p.property_name == property_name)
    }

    /// Counts this class and all of its descendants.
    pub fn class_count(&self) -> usize {
        1 + self.children.iter().map(Self::class_count).sum::<usize>()
    }
}
