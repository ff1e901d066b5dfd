//! Render a JSON document as a Cypher expression

use tracing::debug;

use super::CliError;
use crate::cast::coerce;
use crate::types::Capability;
use crate::value::Value;

/// Options for the render command
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// JSON input string
    pub input: Option<String>,
    /// Capability the input is coerced to before rendering
    pub capability: Capability,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            input: None,
            capability: Capability::Any,
        }
    }
}

/// Parses the input, coerces it and returns the rendered expression.
pub fn execute_render(options: &RenderOptions) -> Result<String, CliError> {
    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let json_value: serde_json::Value = serde_json::from_str(json_str)?;

    let value = Value::from(json_value);
    debug!(
        capability = %options.capability,
        input_type = value.type_name(),
        "coercing input"
    );

    let node = coerce(value, options.capability)?;
    Ok(node.to_query())
}
