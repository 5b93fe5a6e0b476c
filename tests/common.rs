//! Common fixtures for building unit test definitions and schemas.
use mockgen::prelude::*;
use serde_json::{Value, json};

/// A definition with a request trigger, two mockable actions, a non-mockable
/// `Compose` and an action that shares its `operationId` with `Get_Order`.
#[allow(dead_code)]
pub const ORDERS_DEFINITION_JSON: &str = r#"{
    "operationInfo": {
        "When_a_HTTP_request_is_received": { "type": "Request", "kind": "Http" },
        "Get_Order": { "type": "Http", "operationId": "getOrder" },
        "Compose_Summary": { "type": "Compose" },
        "Get_Order_Retry": { "type": "Http", "operationId": "getOrder" },
        "Send-Email_(V2)": { "type": "ApiConnection" }
    },
    "outputParameters": {
        "When_a_HTTP_request_is_received": {
            "outputs": {
                "outputs.$.body": { "type": "object", "title": "Body" },
                "outputs.$.body.$.orderId": { "type": "string", "description": "Order identifier" },
                "outputs.$.headers": { "type": "object", "title": "Headers" }
            }
        },
        "Get_Order": {
            "outputs": {
                "outputs.$.body": { "type": "object", "description": "The order" },
                "outputs.$.body.$.quantity": { "type": "integer", "x-ms-visibility": "important" },
                "outputs.$.body.$.customer": { "type": "object" },
                "outputs.$.body.$.customer.name": { "type": "string" },
                "outputs.$.body.$.lines": { "type": "array" }
            }
        },
        "Send-Email_(V2)": {
            "outputs": {
                "outputs.$.body": { "type": "any" }
            }
        }
    },
    "assertions": [ { "name": "Succeeded", "expression": {} } ]
}"#;

#[allow(dead_code)]
pub fn orders_definition() -> UnitTestDefinition {
    UnitTestDefinition::from_json(ORDERS_DEFINITION_JSON).expect("fixture should parse")
}

/// A nested object schema:
/// `{ id: integer, profile: { email: string, address: { city: string } }, labels: array }`
#[allow(dead_code)]
pub fn user_schema() -> Value {
    json!({
        "type": "object",
        "description": "A user",
        "id": { "type": "integer", "description": "User id" },
        "profile": {
            "type": "object",
            "email": { "type": "string" },
            "address": {
                "type": "object",
                "city": { "type": "string" }
            }
        },
        "labels": { "type": "array" }
    })
}

/// Builds a definition from `(name, type, operationId)` triples with empty outputs.
#[allow(dead_code)]
pub fn definition_of(operations: &[(&str, &str, Option<&str>)]) -> UnitTestDefinition {
    let mut definition = UnitTestDefinition::default();
    for (name, operation_type, operation_id) in operations {
        let mut info = OperationInfo::new(operation_type);
        info.operation_id = operation_id.map(str::to_string);
        definition.operation_info.insert(name.to_string(), info);
    }
    definition
}
