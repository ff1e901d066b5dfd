use crate::escape::escape_identifier;
use crate::expressions::{Property, PropertyOwner};
use crate::types::QueryConvertible;

/// A named reference such as `n`.
///
/// A variable's runtime type is only known once the query runs, so it
/// carries every capability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `self.name`, with `self` treated as a node.
    pub fn property(&self, name: impl Into<Variable>) -> Property {
        Property::new(PropertyOwner::from(self.clone()), name)
    }
}

impl QueryConvertible for Variable {
    fn to_query(&self) -> String {
        escape_identifier(&self.name).into_owned()
    }
}

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        Variable::new(name)
    }
}

impl From<String> for Variable {
    fn from(name: String) -> Self {
        Variable::new(name)
    }
}

capabilities!(Variable => [
    property, comparable, boolean, numeral, integer, float, string,
    date, datetime, localdatetime, localtime, time, point,
    composite, list, map,
    structural, node, relationship, path,
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name() {
        assert_eq!(Variable::new("n").to_query(), "n");
    }

    #[test]
    fn test_escaped_name() {
        assert_eq!(Variable::new("first name").to_query(), "`first name`");
    }

    #[test]
    fn test_property_on_variable() {
        assert_eq!(Variable::new("n").property("age").to_query(), "n.age");
    }
}
