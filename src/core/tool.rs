use std::{future::Future, pin::Pin};

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::core::error::ToolError;
use crate::domain::QuranService;

pub type JsonObject = serde_json::Map<String, JsonValue>;

pub type ToolFuture<'a> = Pin<Box<dyn Future<Output = Result<JsonValue, ToolError>> + Send + 'a>>;

/// Uniform handler signature shared by every catalog entry.
pub type ToolHandler = for<'a> fn(&'a dyn QuranService, JsonObject) -> ToolFuture<'a>;

/// One declarative catalog record.
#[derive(Clone, Copy)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: fn() -> JsonObject,
    pub handler: ToolHandler,
}

impl std::fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// JSON Schema object for a tool's argument type.
pub fn schema_for<T: JsonSchema>() -> JsonObject {
    let schema = schemars::schema_for!(T);
    let mut object = match serde_json::to_value(&schema) {
        Ok(JsonValue::Object(map)) => map,
        _ => JsonObject::new(),
    };
    object.remove("$schema");
    // MCP requires an object schema even for argument-less tools.
    object
        .entry("type")
        .or_insert_with(|| JsonValue::String("object".into()));
    object
}

/// Validate raw arguments against the handler's argument type.
///
/// Unknown fields are ignored; missing or mistyped fields fail with serde's
/// message, which names the offending field.
pub fn parse_args<T: DeserializeOwned>(args: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(JsonValue::Object(args))
        .map_err(|e| ToolError::InvalidArguments(e.to_string()))
}
