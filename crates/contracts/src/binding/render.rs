use serde_json::Value;

use crate::error::ActionError;

/// Prefix that marks rendered failures so they never look like a response
pub const ERROR_PREFIX: &str = "Error: ";

/// Pretty JSON with 2-space indentation, as shown in result elements
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

pub fn render_error(error: &ActionError) -> String {
    format!("{}{}", ERROR_PREFIX, error)
}
