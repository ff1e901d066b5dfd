//! Listing of the capability names accepted by `render --as`

use crate::types::Capability;

/// One line per capability: its name, its trait, and the JSON inputs it
/// accepts.
pub fn capability_listing() -> String {
    let mut output = String::new();
    for capability in Capability::ALL {
        output.push_str(&format!(
            "{:<14} {:<18} {}\n",
            capability.name(),
            capability.trait_name(),
            accepted_json(capability)
        ));
    }
    output
}

fn accepted_json(capability: Capability) -> &'static str {
    match capability {
        Capability::Any => "anything",
        Capability::Property => "boolean, number, string",
        Capability::Comparable => "number, string",
        Capability::Boolean => "boolean",
        Capability::Numeral => "number",
        Capability::Integer => "integer",
        Capability::Float => "fractional number",
        Capability::String => "string",
        Capability::Composite => "array, object",
        Capability::List | Capability::Map => "array, object",
        _ => "typed expressions only",
    }
}
