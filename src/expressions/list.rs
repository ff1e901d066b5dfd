use std::sync::Arc;

use crate::cast::to_any_type;
use crate::error::{Result, TypeMismatch};
use crate::types::{AnyType, QueryConvertible};
use crate::value::Value;

/// `[a, b, c]`
#[derive(Debug, Clone, Default)]
pub struct ExpressionList {
    expressions: Vec<Arc<dyn AnyType>>,
}

impl ExpressionList {
    /// Builds a list, coercing every element with
    /// [`to_any_type`](crate::cast::to_any_type).
    pub fn new<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Self {
        ExpressionList {
            expressions: values.into_iter().map(to_any_type).collect(),
        }
    }

    /// Builds a list from a collection that must be list-shaped.
    pub fn try_from_values(values: impl Into<Value>) -> Result<Self> {
        match values.into() {
            Value::Collection(collection) if collection.is_list() => {
                Ok(ExpressionList::new(collection.into_values()))
            }
            other => Err(TypeMismatch::new("expressions", &["array"], other.type_name())),
        }
    }

    pub fn expressions(&self) -> &[Arc<dyn AnyType>] {
        &self.expressions
    }
}

impl QueryConvertible for ExpressionList {
    fn to_query(&self) -> String {
        let rendered: Vec<String> = self.expressions.iter().map(|e| e.to_query()).collect();
        format!("[{}]", rendered.join(", "))
    }
}

capabilities!(ExpressionList => [composite, list]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expressions::Variable;

    #[test]
    fn test_empty_list() {
        let empty: Vec<Value> = Vec::new();
        assert_eq!(ExpressionList::new(empty).to_query(), "[]");
    }

    #[test]
    fn test_mixed_list() {
        let list = ExpressionList::new([Value::from(1), Value::from("a"), Value::from(Variable::new("x"))]);
        assert_eq!(list.to_query(), "[1, 'a', x]");
    }

    #[test]
    fn test_nested_list() {
        let list = ExpressionList::new([vec![1, 2], vec![3]]);
        assert_eq!(list.to_query(), "[[1, 2], [3]]");
    }

    #[test]
    fn test_try_from_values_rejects_string() {
        let err = ExpressionList::try_from_values("abc").err().unwrap();
        assert_eq!(err.actual, "string");
    }
}
