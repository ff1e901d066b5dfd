use std::sync::Arc;

use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::types::AnyType;

/// A native value handed to the builder before it has been coerced into a
/// typed node.
///
/// This is the untyped half of every tagged argument union: scalars, an
/// untyped keyed collection, or an expression node that is already typed.
///
/// # Collections
///
/// [`Collection`] mirrors an ordered, keyed array whose keys are either
/// integer indices or names. Whether it renders as a Cypher list or a map
/// is decided by [`Collection::is_list`]:
///
/// - keys `0, 1, …, n-1` in iteration order → list
/// - anything else (gaps, reordering, names) → map
/// - empty → list
///
/// # Examples
///
/// ```
/// use cypher_dsl::{Collection, Value};
///
/// let scalar = Value::from(42);
/// let list = Value::from(vec![1, 2, 3]);
///
/// let mut map = Collection::new();
/// map.insert("name", "Alice");
/// map.insert("age", 30);
/// let map = Value::Collection(map);
/// # let _ = (scalar, list, map);
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// Cypher `NULL`
    Null,

    Boolean(bool),

    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// Exact decimal, rendered with its scale preserved
    Decimal(Decimal),

    /// UTF-8 string
    String(String),

    /// Untyped keyed collection (list or map, decided on coercion)
    Collection(Collection),

    /// An already typed expression node
    Expression(Arc<dyn AnyType>),
}

impl Value {
    /// Human-readable type name, used in type mismatch diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "bool",
            Value::Integer(_) => "int",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Collection(_) => "array",
            Value::Expression(expression) => expression.type_name(),
        }
    }

    /// Returns the wrapped node if this value is already typed.
    pub fn as_expression(&self) -> Option<&Arc<dyn AnyType>> {
        match self {
            Value::Expression(expression) => Some(expression),
            _ => None,
        }
    }
}

/// Key of a [`Collection`] entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl Key {
    /// Folds names that spell a canonical integer into index keys.
    fn canonical(self) -> Key {
        match self {
            Key::Name(name) => Key::from(name),
            index => index,
        }
    }

    /// The key as it appears in a rendered map.
    pub fn as_name(&self) -> String {
        match self {
            Key::Index(index) => index.to_string(),
            Key::Name(name) => name.clone(),
        }
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Key::Index(index as i64)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index as i64)
    }
}

/// Names that spell a canonical integer (`"0"`, `"17"`, `"-3"`, but not
/// `"01"` or `"-0"`) become index keys, so a keyed collection built from
/// text keys classifies the same way as one built from integers.
impl From<String> for Key {
    fn from(name: String) -> Self {
        match canonical_index(&name) {
            Some(index) => Key::Index(index),
            None => Key::Name(name),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::from(name.to_string())
    }
}

fn canonical_index(name: &str) -> Option<i64> {
    let digits = name.strip_prefix('-').unwrap_or(name);
    let canonical = match digits.as_bytes() {
        [] => false,
        [b'0'] => digits.len() == name.len(),
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        }
    };
    if canonical { name.parse().ok() } else { None }
}

/// Ordered keyed collection with unique keys.
///
/// Inserting an existing key replaces its value in place; the key keeps its
/// original position. Keys are canonicalized on the way in, so
/// `Key::Name("1")` and `Key::Index(1)` address the same entry.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    entries: IndexMap<Key, Value>,
    max_index: Option<i64>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection keyed `0..n`.
    pub fn list<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Self {
        let mut collection = Self::new();
        for value in values {
            collection.push(value);
        }
        collection
    }

    /// Builds a collection from key/value pairs, in order.
    pub fn from_pairs<K: Into<Key>, V: Into<Value>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut collection = Self::new();
        for (key, value) in pairs {
            collection.insert(key, value);
        }
        collection
    }

    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        let key = key.into().canonical();
        if let Key::Index(index) = key {
            self.max_index = Some(self.max_index.map_or(index, |max| max.max(index)));
        }
        self.entries.insert(key, value.into());
    }

    /// Appends under the next free index: one past the largest index key,
    /// or `0` when there is none.
    pub fn push(&mut self, value: impl Into<Value>) {
        let next = self.max_index.map_or(0, |max| max.saturating_add(1));
        self.insert(Key::Index(next), value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the keys are exactly `0, 1, …, len-1` in iteration order.
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(position, key)| *key == Key::Index(position as i64))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    pub fn into_values(self) -> impl Iterator<Item = Value> {
        self.entries.into_values()
    }

    pub fn into_entries(self) -> impl Iterator<Item = (Key, Value)> {
        self.entries.into_iter()
    }
}

// ============================================================================
// Conversions from native values
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Collection> for Value {
    fn from(collection: Collection) -> Self {
        Value::Collection(collection)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Collection(Collection::list(values))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Arc<dyn AnyType>> for Value {
    fn from(expression: Arc<dyn AnyType>) -> Self {
        Value::Expression(expression)
    }
}

/// JSON arrays become index-keyed collections; objects keep their key order
/// and go through [`Key::from`], so `{"0": …, "1": …}` is list-shaped.
/// Unsigned integers past `i64::MAX` are kept exact as decimals.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Value::Integer(i),
                (None, Some(u)) => Value::Decimal(Decimal::from(u)),
                _ => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Collection(Collection::list(arr.into_iter().map(Value::from)))
            }
            serde_json::Value::Object(obj) => Value::Collection(Collection::from_pairs(
                obj.into_iter().map(|(k, v)| (k, Value::from(v))),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_is_list() {
        assert!(Collection::new().is_list());
    }

    #[test]
    fn test_contiguous_indices_are_list() {
        let collection = Collection::from_pairs([(0, "a"), (1, "b"), (2, "c")]);
        assert!(collection.is_list());
    }

    #[test]
    fn test_reordered_indices_are_map() {
        let collection = Collection::from_pairs([(1, "b"), (0, "a")]);
        assert!(!collection.is_list());
    }

    #[test]
    fn test_gap_is_map() {
        let collection = Collection::from_pairs([(0, "a"), (2, "c")]);
        assert!(!collection.is_list());
    }

    #[test]
    fn test_named_key_is_map() {
        let collection = Collection::from_pairs([("name", "Alice")]);
        assert!(!collection.is_list());
    }

    #[test]
    fn test_canonical_integer_names_become_indices() {
        assert_eq!(Key::from("0"), Key::Index(0));
        assert_eq!(Key::from("42"), Key::Index(42));
        assert_eq!(Key::from("-3"), Key::Index(-3));
        assert_eq!(Key::from("01"), Key::Name("01".into()));
        assert_eq!(Key::from("-0"), Key::Name("-0".into()));
        assert_eq!(Key::from("1.5"), Key::Name("1.5".into()));
        assert_eq!(Key::from(""), Key::Name("".into()));
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut collection = Collection::new();
        collection.insert("a", 1);
        collection.insert("b", 2);
        collection.insert("a", 3);

        let keys: Vec<String> = collection.iter().map(|(k, _)| k.as_name()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert!(matches!(collection.iter().next(), Some((_, Value::Integer(3)))));
    }

    #[test]
    fn test_push_continues_after_largest_index() {
        let mut collection = Collection::from_pairs([(5, "x")]);
        collection.push("y");

        let keys: Vec<Key> = collection.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec![Key::Index(5), Key::Index(6)]);
    }

    #[test]
    fn test_json_object_with_index_keys_is_list() {
        let json: serde_json::Value = serde_json::from_str(r#"{"0": "a", "1": "b"}"#).unwrap();
        match Value::from(json) {
            Value::Collection(collection) => assert!(collection.is_list()),
            other => panic!("expected collection, got {:?}", other),
        }
    }

    #[test]
    fn test_json_numbers() {
        assert!(matches!(Value::from(serde_json::json!(7)), Value::Integer(7)));
        assert!(matches!(Value::from(serde_json::json!(1.5)), Value::Float(f) if f == 1.5));
    }

    #[test]
    fn test_json_integer_past_i64_stays_exact() {
        let json: serde_json::Value = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(Value::from(json), Value::Decimal(d) if d == Decimal::from(u64::MAX)));
    }

    #[test]
    fn test_name_spelling_an_index_shares_its_entry() {
        let collection = Collection::from_pairs([
            (Key::Name("1".into()), "a"),
            (Key::Index(1), "b"),
        ]);
        assert_eq!(collection.len(), 1);
        assert!(matches!(
            collection.iter().next(),
            Some((Key::Index(1), Value::String(s))) if s == "b"
        ));
    }

    #[test]
    fn test_raw_name_keys_classify_as_list() {
        let collection = Collection::from_pairs([
            (Key::Name("0".into()), "a"),
            (Key::Name("1".into()), "b"),
        ]);
        assert!(collection.is_list());
    }

    #[test]
    fn test_push_after_raw_name_index() {
        let mut collection = Collection::from_pairs([(Key::Name("3".into()), "x")]);
        collection.push("y");
        let keys: Vec<Key> = collection.iter().map(|(k, _)| k.clone()).collect();
        assert_eq!(keys, vec![Key::Index(3), Key::Index(4)]);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::from(true).type_name(), "bool");
        assert_eq!(Value::from(vec![1]).type_name(), "array");
    }
}
