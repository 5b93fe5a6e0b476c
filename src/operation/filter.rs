use super::info::{OperationInfo, OutputParameter};
use crate::codegen::{remove_invalid_characters, to_pascal_case};
use crate::schema::SchemaNode;
use ahash::AHashSet;
use indexmap::IndexMap;
use tracing::{debug, warn};

/// Operation types that run as workflow triggers.
pub const TRIGGER_TYPES: [&str; 4] = ["HttpWebhook", "Request", "Manual", "ApiConnectionWebhook"];

/// Trigger types whose outputs can be mocked.
pub const MOCKABLE_TRIGGER_TYPES: [&str; 5] = [
    "HttpWebhook",
    "Request",
    "Manual",
    "ApiConnectionWebhook",
    "ServiceProvider",
];

/// Action types whose outputs can be mocked.
pub const MOCKABLE_ACTION_TYPES: [&str; 6] = [
    "Http",
    "InvokeFunction",
    "Function",
    "ServiceProvider",
    "ApiManagement",
    "ApiConnection",
];

pub const TRIGGER_SUFFIX: &str = "TriggerOutput";
pub const ACTION_SUFFIX: &str = "ActionOutput";

/// An operation selected for mock generation, with its outputs already folded
/// into a schema tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MockableOperation {
    pub operation_name: String,
    pub class_name: String,
    pub is_trigger: bool,
    pub outputs: SchemaNode,
}

pub fn is_trigger(operation_type: &str) -> bool {
    TRIGGER_TYPES.contains(&operation_type)
}

/// Whether an operation of this type can be mocked. Case-insensitive.
pub fn is_mockable(operation_type: &str, is_trigger: bool) -> bool {
    let candidates: &[&str] = if is_trigger {
        &MOCKABLE_TRIGGER_TYPES
    } else {
        &MOCKABLE_ACTION_TYPES
    };
    candidates
        .iter()
        .any(|t| t.eq_ignore_ascii_case(operation_type))
}

/// `PascalCase(sanitized name)` plus the trigger or action suffix.
pub fn mock_class_name(operation_name: &str, is_trigger: bool) -> String {
    let suffix = if is_trigger {
        TRIGGER_SUFFIX
    } else {
        ACTION_SUFFIX
    };
    format!(
        "{}{}",
        to_pascal_case(&remove_invalid_characters(operation_name)),
        suffix
    )
}

/// Selects the mockable operations of a workflow.
///
/// Operations are visited in their given order. An operation whose identity
/// (its `operationId`, or its name when that is absent) was already seen is
/// skipped, whether or not the first one was mockable.
pub fn filter_mockable(
    operation_info: &IndexMap<String, OperationInfo>,
    output_parameters: &IndexMap<String, OutputParameter>,
) -> Vec<MockableOperation> {
    let mut seen = AHashSet::new();
    filter_mockable_with(operation_info, output_parameters, &mut seen)
}

/// [`filter_mockable`] with a caller-owned set of seen identities.
pub fn filter_mockable_with(
    operation_info: &IndexMap<String, OperationInfo>,
    output_parameters: &IndexMap<String, OutputParameter>,
    seen: &mut AHashSet<String>,
) -> Vec<MockableOperation> {
    for name in output_parameters.keys() {
        if !operation_info.contains_key(name) {
            warn!(operation = %name, "output parameters reference an unknown operation");
        }
    }

    let mut selected = Vec::new();
    for (name, info) in operation_info {
        let identity = info.identity(name);
        if !seen.insert(identity.to_string()) {
            debug!(operation = %name, identity, "skipping duplicate operation");
            continue;
        }

        let trigger = info.is_trigger();
        if !is_mockable(&info.operation_type, trigger) {
            debug!(operation = %name, operation_type = %info.operation_type, "operation is not mockable");
            continue;
        }

        let outputs = output_parameters
            .get(name)
            .map(OutputParameter::schema)
            .unwrap_or_default();

        selected.push(MockableOperation {
            operation_name: name.clone(),
            class_name: mock_class_name(name, trigger),
            is_trigger: trigger,
            outputs,
        });
    }
    selected
}
