use std::fmt;
use std::sync::Arc;

use crate::cast::to_any_type;
use crate::expressions::Variable;
use crate::types::{AnyType, QueryConvertible};
use crate::value::Value;

/// `original AS variable`
///
/// Only valid in projection position, so it carries no capabilities and can
/// not be nested inside other expressions.
#[derive(Debug, Clone)]
pub struct Alias {
    original: Arc<dyn AnyType>,
    variable: Variable,
}

impl Alias {
    pub fn new(original: impl Into<Value>, variable: impl Into<Variable>) -> Self {
        Alias {
            original: to_any_type(original),
            variable: variable.into(),
        }
    }

    pub fn original(&self) -> &Arc<dyn AnyType> {
        &self.original
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }
}

impl QueryConvertible for Alias {
    fn to_query(&self) -> String {
        format!("{} AS {}", self.original.to_query(), self.variable.to_query())
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias() {
        let alias = Alias::new(Variable::new("a"), "b");
        assert_eq!(alias.to_query(), "a AS b");
    }

    #[test]
    fn test_alias_of_literal() {
        assert_eq!(Alias::new(1, "one").to_query(), "1 AS one");
    }
}
