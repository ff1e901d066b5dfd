use thiserror::Error;

/// A value handed to the builder does not satisfy the type a parameter
/// requires.
///
/// Raised while coercing or constructing nodes, never while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("${} should be a {}, {} given", .parameter, .expected.join(" or "), .actual)]
pub struct TypeMismatch {
    /// Name of the offending parameter
    pub parameter: String,
    /// Types or capabilities the parameter accepts
    pub expected: Vec<String>,
    /// Type that was actually received
    pub actual: String,
}

impl TypeMismatch {
    pub fn new(parameter: impl Into<String>, expected: &[&str], actual: impl Into<String>) -> Self {
        TypeMismatch {
            parameter: parameter.into(),
            expected: expected.iter().map(|name| name.to_string()).collect(),
            actual: actual.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TypeMismatch>;
