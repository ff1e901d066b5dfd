use std::fmt;
use std::sync::Arc;

use crate::cast::PropertyArg;
use crate::error::{Result, TypeMismatch};
use crate::expressions::{PropertyMap, Variable};
use crate::types::{MapType, NodeType, QueryConvertible, RelationshipType};
use crate::value::Value;

/// Expression a property is read from.
#[derive(Debug, Clone)]
pub enum PropertyOwner {
    Map(Arc<dyn MapType>),
    Node(Arc<dyn NodeType>),
    Relationship(Arc<dyn RelationshipType>),
}

impl PropertyOwner {
    fn to_query(&self) -> String {
        match self {
            PropertyOwner::Map(owner) => owner.to_query(),
            PropertyOwner::Node(owner) => owner.to_query(),
            PropertyOwner::Relationship(owner) => owner.to_query(),
        }
    }
}

/// A bare variable is read as a node.
impl From<Variable> for PropertyOwner {
    fn from(variable: Variable) -> Self {
        PropertyOwner::Node(Arc::new(variable))
    }
}

impl From<PropertyMap> for PropertyOwner {
    fn from(map: PropertyMap) -> Self {
        PropertyOwner::Map(Arc::new(map))
    }
}

impl From<Property> for PropertyOwner {
    fn from(property: Property) -> Self {
        PropertyOwner::Map(Arc::new(property))
    }
}

impl From<Arc<dyn MapType>> for PropertyOwner {
    fn from(owner: Arc<dyn MapType>) -> Self {
        PropertyOwner::Map(owner)
    }
}

impl From<Arc<dyn NodeType>> for PropertyOwner {
    fn from(owner: Arc<dyn NodeType>) -> Self {
        PropertyOwner::Node(owner)
    }
}

impl From<Arc<dyn RelationshipType>> for PropertyOwner {
    fn from(owner: Arc<dyn RelationshipType>) -> Self {
        PropertyOwner::Relationship(owner)
    }
}

/// Accepts map, node and relationship expressions, checked in that order.
impl TryFrom<Value> for PropertyOwner {
    type Error = TypeMismatch;

    fn try_from(value: Value) -> Result<Self> {
        let expected = ["MapType", "NodeType", "RelationshipType"];
        let actual = value.type_name();
        let Value::Expression(expression) = value else {
            return Err(TypeMismatch::new("expression", &expected, actual));
        };

        if let Some(map) = expression.clone().into_map_type() {
            return Ok(PropertyOwner::Map(map));
        }
        if let Some(node) = expression.clone().into_node_type() {
            return Ok(PropertyOwner::Node(node));
        }
        expression
            .into_relationship_type()
            .map(PropertyOwner::Relationship)
            .ok_or_else(|| TypeMismatch::new("expression", &expected, actual))
    }
}

/// `owner.name`
///
/// The value behind a property is unknown until the query runs, so a
/// property carries every property capability as well as the list and map
/// ones.
#[derive(Debug, Clone)]
pub struct Property {
    owner: PropertyOwner,
    property: Variable,
}

impl Property {
    pub fn new(owner: impl Into<PropertyOwner>, property: impl Into<Variable>) -> Self {
        Property {
            owner: owner.into(),
            property: property.into(),
        }
    }

    pub fn owner(&self) -> &PropertyOwner {
        &self.owner
    }

    /// Name of the property being read.
    pub fn key(&self) -> &Variable {
        &self.property
    }

    /// `self = value`, for use in `SET` clauses.
    pub fn assign(&self, value: impl Into<PropertyArg>) -> PropertyReplacement {
        PropertyReplacement {
            property: self.clone(),
            value: Into::<PropertyArg>::into(value).into_property(),
        }
    }
}

impl QueryConvertible for Property {
    fn to_query(&self) -> String {
        format!("{}.{}", self.owner.to_query(), self.property.to_query())
    }
}

capabilities!(Property => [
    property, comparable, boolean, numeral, integer, float, string,
    date, datetime, localdatetime, localtime, time, point,
    composite, list, map,
]);

/// `property = value`
#[derive(Debug, Clone)]
pub struct PropertyReplacement {
    property: Property,
    value: Arc<dyn crate::types::PropertyType>,
}

impl PropertyReplacement {
    pub fn property(&self) -> &Property {
        &self.property
    }

    pub fn value(&self) -> &Arc<dyn crate::types::PropertyType> {
        &self.value
    }
}

impl QueryConvertible for PropertyReplacement {
    fn to_query(&self) -> String {
        format!("{} = {}", self.property.to_query(), self.value.to_query())
    }
}

impl fmt::Display for PropertyReplacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_property() {
        let n = Variable::new("n");
        let nested = n.property("address").property("city");
        assert_eq!(nested.to_query(), "n.address.city");
    }

    #[test]
    fn test_escaped_key() {
        let n = Variable::new("n");
        assert_eq!(n.property("first name").to_query(), "n.`first name`");
    }

    #[test]
    fn test_assign() {
        let n = Variable::new("n");
        assert_eq!(n.property("age").assign(30).to_query(), "n.age = 30");
        assert_eq!(n.property("name").assign("Bob").to_query(), "n.name = 'Bob'");
    }

    #[test]
    fn test_owner_from_value_rejects_literal() {
        let err = PropertyOwner::try_from(Value::from(3)).err().unwrap();
        assert_eq!(err.parameter, "expression");
        assert_eq!(err.actual, "int");
    }
}
