use std::sync::Arc;

use indexmap::IndexMap;

use crate::cast::to_any_type;
use crate::escape::escape_identifier;
use crate::types::{AnyType, QueryConvertible};
use crate::value::{Collection, Value};

/// `{key: value, ...}`
///
/// Keys keep their insertion order; setting an existing key replaces the
/// value without moving it.
#[derive(Debug, Clone, Default)]
pub struct PropertyMap {
    properties: IndexMap<String, Arc<dyn AnyType>>,
}

impl PropertyMap {
    pub fn new<K, V>(properties: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let mut map = PropertyMap::default();
        for (key, value) in properties {
            map.properties.insert(key.into(), to_any_type(value));
        }
        map
    }

    /// Keys of the collection become map keys; index keys use their number.
    pub fn from_collection(collection: Collection) -> Self {
        PropertyMap::new(
            collection
                .into_entries()
                .map(|(key, value)| (key.as_name(), value)),
        )
    }

    /// Returns a copy with `key` set to `value`.
    pub fn with_property(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut map = self.clone();
        map.properties.insert(key.into(), to_any_type(value));
        map
    }

    pub fn properties(&self) -> &IndexMap<String, Arc<dyn AnyType>> {
        &self.properties
    }
}

impl QueryConvertible for PropertyMap {
    fn to_query(&self) -> String {
        let pairs: Vec<String> = self
            .properties
            .iter()
            .map(|(key, value)| format!("{}: {}", escape_identifier(key), value.to_query()))
            .collect();
        format!("{{{}}}", pairs.join(", "))
    }
}

capabilities!(PropertyMap => [composite, map]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expressions::Variable;
    use crate::types::MapType;

    #[test]
    fn test_empty_map() {
        let empty: [(&str, i64); 0] = [];
        assert_eq!(PropertyMap::new(empty).to_query(), "{}");
    }

    #[test]
    fn test_insertion_order_kept() {
        let map = PropertyMap::new([("name", Value::from("Alice")), ("age", Value::from(30))]);
        assert_eq!(map.to_query(), "{name: 'Alice', age: 30}");
    }

    #[test]
    fn test_with_property_replaces_in_place() {
        let map = PropertyMap::new([("a", 1), ("b", 2)]).with_property("a", 3);
        assert_eq!(map.to_query(), "{a: 3, b: 2}");
    }

    #[test]
    fn test_keys_escaped() {
        let map = PropertyMap::new([("first name", Variable::new("x"))]);
        assert_eq!(map.to_query(), "{`first name`: x}");
    }

    #[test]
    fn test_property_of_map() {
        let map = PropertyMap::new([("a", 1)]);
        assert_eq!(map.property("a").to_query(), "{a: 1}.a");
    }
}
