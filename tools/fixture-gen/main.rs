use clap::Parser;
use mockgen::operation::{OperationInfo, OutputParameter, UnitTestDefinition};
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use serde_json::{Map, Value, json};
use std::fs;

/// A CLI tool to generate synthetic unit test definitions for mockgen
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated.unit-test.json")]
    output: String,

    /// The number of actions to generate (a trigger is always added)
    #[arg(long, default_value_t = 20)]
    actions: usize,

    /// The maximum nesting depth of generated output schemas
    #[arg(long, default_value_t = 3)]
    depth: usize,

    /// Probability that an action reuses the identity of an earlier operation
    #[arg(long, default_value_t = 0.1)]
    duplicate_rate: f64,
}

const TRIGGER_TYPES: [&str; 4] = ["Request", "Manual", "HttpWebhook", "Recurrence"];
const ACTION_TYPES: [&str; 9] = [
    "Http",
    "ApiConnection",
    "ServiceProvider",
    "InvokeFunction",
    "Compose",
    "Scope",
    "If",
    "ParseJson",
    "Response",
];
const LEAF_TYPES: [&str; 7] = [
    "string", "integer", "number", "boolean", "array", "any", "date-time",
];
const FIELD_NAMES: [&str; 12] = [
    "id", "name", "status", "createdAt", "items", "customer", "address", "total", "currency",
    "tags", "metadata", "etag",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if !(0.0..=1.0).contains(&cli.duplicate_rate) {
        eprintln!(
            "Error: --duplicate-rate ({}) must be between 0 and 1",
            cli.duplicate_rate
        );
        std::process::exit(1);
    }

    println!(
        "Generating unit test definition ({} actions, depth {})...",
        cli.actions, cli.depth
    );

    let mut definition = UnitTestDefinition::default();

    let trigger_type = TRIGGER_TYPES.choose(&mut rng).copied().unwrap_or("Request");
    add_operation(
        &mut definition,
        &mut rng,
        "When_a_HTTP_request_is_received",
        trigger_type,
        None,
        cli.depth,
    );

    for index in 0..cli.actions {
        let action_type = ACTION_TYPES.choose(&mut rng).copied().unwrap_or("Http");
        let name = format!("{}_{}", action_type, index + 1);
        let operation_id = if rng.random_bool(cli.duplicate_rate) {
            existing_identity(&definition, &mut rng)
        } else {
            None
        };
        add_operation(
            &mut definition,
            &mut rng,
            &name,
            action_type,
            operation_id,
            cli.depth,
        );
    }

    let json_output = serde_json::to_string_pretty(&definition)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated {} operations and saved them to '{}'",
        definition.operation_info.len(),
        cli.output
    );

    Ok(())
}

/// The identity of a random operation already in the definition.
fn existing_identity<R: Rng + ?Sized>(
    definition: &UnitTestDefinition,
    rng: &mut R,
) -> Option<String> {
    if definition.operation_info.is_empty() {
        return None;
    }
    let earlier = rng.random_range(0..definition.operation_info.len());
    definition
        .operation_info
        .get_index(earlier)
        .map(|(name, info)| info.identity(name).to_string())
}

fn add_operation(
    definition: &mut UnitTestDefinition,
    rng: &mut ThreadRng,
    name: &str,
    operation_type: &str,
    operation_id: Option<String>,
    depth: usize,
) {
    let mut info = OperationInfo::new(operation_type);
    info.operation_id = operation_id;
    definition.operation_info.insert(name.to_string(), info);

    let mut outputs = Map::new();
    outputs.insert(
        "outputs.$.statusCode".to_string(),
        json!({ "type": "integer", "title": "Status Code" }),
    );
    outputs.insert(
        "outputs.$.headers".to_string(),
        json!({ "type": "object", "title": "Headers" }),
    );
    outputs.insert(
        "outputs.$.body".to_string(),
        json!({ "type": "object", "title": "Body", "description": format!("Body of {}", name) }),
    );
    generate_fields(rng, &mut outputs, "body.$", depth);

    definition
        .output_parameters
        .insert(name.to_string(), OutputParameter::new(Value::Object(outputs)));
}

/// Adds flat `outputs.$.<prefix>.<field>` keys, recursing into object fields.
fn generate_fields(
    rng: &mut ThreadRng,
    outputs: &mut Map<String, Value>,
    prefix: &str,
    depth: usize,
) {
    let count = rng.random_range(1..=4);
    for _ in 0..count {
        let field = FIELD_NAMES.choose(rng).copied().unwrap_or("id");
        let key = format!("outputs.$.{}.{}", prefix, field);
        if depth > 1 && rng.random_bool(0.3) {
            outputs.insert(
                key,
                json!({ "type": "object", "description": format!("The {}", field) }),
            );
            generate_fields(rng, outputs, &format!("{}.{}", prefix, field), depth - 1);
        } else {
            let leaf_type = LEAF_TYPES.choose(rng).copied().unwrap_or("string");
            outputs.insert(key, json!({ "type": leaf_type, "x-ms-summary": field }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockgen::operation::filter_mockable;

    #[test]
    fn duplicates_always_hit_an_existing_identity() {
        let mut rng = rand::rng();
        let mut definition = UnitTestDefinition::default();
        definition
            .operation_info
            .insert("Trigger".to_string(), OperationInfo::new("Request"));
        definition.operation_info.insert(
            "Call".to_string(),
            OperationInfo::new("Http").with_operation_id("callApi"),
        );

        for _ in 0..50 {
            let identity = existing_identity(&definition, &mut rng).unwrap();
            assert!(identity == "Trigger" || identity == "callApi");
        }
        assert_eq!(existing_identity(&UnitTestDefinition::default(), &mut rng), None);
    }

    #[test]
    fn generated_duplicates_are_filtered() {
        let mut rng = rand::rng();
        let mut definition = UnitTestDefinition::default();
        add_operation(&mut definition, &mut rng, "Trigger", "Request", None, 2);
        add_operation(&mut definition, &mut rng, "Http_1", "Http", None, 2);
        let duplicate = Some("Http_1".to_string());
        add_operation(&mut definition, &mut rng, "Http_2", "Http", duplicate, 2);

        let selected = filter_mockable(&definition.operation_info, &definition.output_parameters);
        let names: Vec<_> = selected.iter().map(|op| op.operation_name.as_str()).collect();
        assert_eq!(names, vec!["Trigger", "Http_1"]);
    }
}
