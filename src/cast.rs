//! # Coercion engine
//!
//! Turns typed-or-native input into the best-fitting typed node.
//!
//! Two entry styles share the same wrapping rules:
//!
//! - **Argument unions** ([`NumeralArg`], [`StringArg`], …) are what the
//!   capability methods accept. They are closed sum types, so a builder call
//!   with the wrong kind of operand does not compile, and coercing them can
//!   not fail.
//! - **Dynamic coercion** (`to_*_type`, [`coerce`]) accepts any [`Value`]
//!   and validates it at runtime, returning a [`TypeMismatch`] that names the
//!   parameter, the accepted types and the type actually received.
//!
//! In both styles input that already carries the requested capability is
//! handed back as the very same `Arc`; only native values are wrapped.
//!
//! ## Collections
//!
//! [`to_any_type`] classifies an untyped [`Collection`]: keys `0..n` in order
//! (or no keys at all) produce an [`ExpressionList`], anything else a
//! [`PropertyMap`] that keeps insertion order.
//!
//! ```
//! use cypher_dsl::cast::to_any_type;
//! use cypher_dsl::{Collection, QueryConvertible};
//!
//! assert_eq!(to_any_type(vec![1, 2]).to_query(), "[1, 2]");
//!
//! let sparse = Collection::from_pairs([(0, "a"), (2, "c")]);
//! assert_eq!(to_any_type(sparse).to_query(), "{`0`: 'a', `2`: 'c'}");
//! ```

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::error::{Result, TypeMismatch};
use crate::expressions::literals::{
    BooleanLiteral, DecimalLiteral, FloatLiteral, IntegerLiteral, NullLiteral, StringLiteral,
};
use crate::expressions::{ExpressionList, PropertyMap, Variable};
use crate::patterns::{Pattern, PatternKind};
use crate::types::{
    AnyType, BooleanType, Capability, ComparableType, ListType, MapType, NodeType, NumeralType,
    PathType, PropertyType, RelationshipType, StringType, StructuralType,
};
use crate::value::{Collection, Value};

fn mismatch(parameter: &str, expected: &[&str], actual: &str) -> TypeMismatch {
    debug!(parameter, actual, "value does not satisfy the requested type");
    TypeMismatch::new(parameter, expected, actual)
}

fn wrapped<T>(capability: &'static str, node: T) -> Arc<T> {
    trace!(capability, "wrapping native value in a literal");
    Arc::new(node)
}

/// Narrows a typed value through `cast`; natives are rejected.
fn narrow<T: ?Sized>(
    value: Value,
    parameter: &str,
    expected: &[&str],
    cast: impl FnOnce(Arc<dyn AnyType>) -> Option<Arc<T>>,
) -> Result<Arc<T>> {
    let actual = value.type_name();
    match value {
        Value::Expression(expression) => {
            cast(expression).ok_or_else(|| mismatch(parameter, expected, actual))
        }
        _ => Err(mismatch(parameter, expected, actual)),
    }
}

/// Conversion of an argument union into an untyped node.
pub trait IntoExpression {
    fn into_expression(self) -> Arc<dyn AnyType>;
}

impl IntoExpression for Value {
    fn into_expression(self) -> Arc<dyn AnyType> {
        to_any_type(self)
    }
}

// ============================================================================
// Numeral
// ============================================================================

const NUMERAL: &[&str] = &["NumeralType", "int", "float", "decimal"];

#[derive(Debug, Clone)]
pub enum NumeralArg {
    Expression(Arc<dyn NumeralType>),
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
}

impl NumeralArg {
    pub fn into_numeral(self) -> Arc<dyn NumeralType> {
        match self {
            NumeralArg::Expression(expression) => expression,
            NumeralArg::Integer(value) => wrapped("numeral", IntegerLiteral::new(value)),
            NumeralArg::Float(value) => wrapped("numeral", FloatLiteral::new(value)),
            NumeralArg::Decimal(value) => wrapped("numeral", DecimalLiteral::new(value)),
        }
    }
}

impl IntoExpression for NumeralArg {
    fn into_expression(self) -> Arc<dyn AnyType> {
        self.into_numeral()
    }
}

impl TryFrom<Value> for NumeralArg {
    type Error = TypeMismatch;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Integer(value) => Ok(NumeralArg::Integer(value)),
            Value::Float(value) => Ok(NumeralArg::Float(value)),
            Value::Decimal(value) => Ok(NumeralArg::Decimal(value)),
            other => narrow(other, "numeral", NUMERAL, |e| e.into_numeral_type())
                .map(NumeralArg::Expression),
        }
    }
}

impl From<Arc<dyn NumeralType>> for NumeralArg {
    fn from(expression: Arc<dyn NumeralType>) -> Self {
        NumeralArg::Expression(expression)
    }
}

impl From<i64> for NumeralArg {
    fn from(value: i64) -> Self {
        NumeralArg::Integer(value)
    }
}

impl From<i32> for NumeralArg {
    fn from(value: i32) -> Self {
        NumeralArg::Integer(value as i64)
    }
}

impl From<f64> for NumeralArg {
    fn from(value: f64) -> Self {
        NumeralArg::Float(value)
    }
}

impl From<Decimal> for NumeralArg {
    fn from(value: Decimal) -> Self {
        NumeralArg::Decimal(value)
    }
}

/// Coerces `value` to a numeral: numeral nodes pass through, integers,
/// floats and decimals become literals.
pub fn to_numeral_type(value: impl Into<Value>) -> Result<Arc<dyn NumeralType>> {
    NumeralArg::try_from(value.into()).map(NumeralArg::into_numeral)
}

// ============================================================================
// String
// ============================================================================

const STRING: &[&str] = &["StringType", "string"];

#[derive(Debug, Clone)]
pub enum StringArg {
    Expression(Arc<dyn StringType>),
    String(String),
}

impl StringArg {
    pub fn into_string(self) -> Arc<dyn StringType> {
        match self {
            StringArg::Expression(expression) => expression,
            StringArg::String(value) => wrapped("string", StringLiteral::new(value)),
        }
    }
}

impl IntoExpression for StringArg {
    fn into_expression(self) -> Arc<dyn AnyType> {
        self.into_string()
    }
}

impl TryFrom<Value> for StringArg {
    type Error = TypeMismatch;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(value) => Ok(StringArg::String(value)),
            other => narrow(other, "string", STRING, |e| e.into_string_type())
                .map(StringArg::Expression),
        }
    }
}

impl From<Arc<dyn StringType>> for StringArg {
    fn from(expression: Arc<dyn StringType>) -> Self {
        StringArg::Expression(expression)
    }
}

impl From<&str> for StringArg {
    fn from(value: &str) -> Self {
        StringArg::String(value.to_string())
    }
}

impl From<String> for StringArg {
    fn from(value: String) -> Self {
        StringArg::String(value)
    }
}

pub fn to_string_type(value: impl Into<Value>) -> Result<Arc<dyn StringType>> {
    StringArg::try_from(value.into()).map(StringArg::into_string)
}

// ============================================================================
// Boolean
// ============================================================================

const BOOLEAN: &[&str] = &["BooleanType", "bool"];

#[derive(Debug, Clone)]
pub enum BooleanArg {
    Expression(Arc<dyn BooleanType>),
    Boolean(bool),
}

impl BooleanArg {
    pub fn into_boolean(self) -> Arc<dyn BooleanType> {
        match self {
            BooleanArg::Expression(expression) => expression,
            BooleanArg::Boolean(value) => wrapped("boolean", BooleanLiteral::new(value)),
        }
    }
}

impl IntoExpression for BooleanArg {
    fn into_expression(self) -> Arc<dyn AnyType> {
        self.into_boolean()
    }
}

impl TryFrom<Value> for BooleanArg {
    type Error = TypeMismatch;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(value) => Ok(BooleanArg::Boolean(value)),
            other => narrow(other, "boolean", BOOLEAN, |e| e.into_boolean_type())
                .map(BooleanArg::Expression),
        }
    }
}

impl From<Arc<dyn BooleanType>> for BooleanArg {
    fn from(expression: Arc<dyn BooleanType>) -> Self {
        BooleanArg::Expression(expression)
    }
}

impl From<bool> for BooleanArg {
    fn from(value: bool) -> Self {
        BooleanArg::Boolean(value)
    }
}

pub fn to_boolean_type(value: impl Into<Value>) -> Result<Arc<dyn BooleanType>> {
    BooleanArg::try_from(value.into()).map(BooleanArg::into_boolean)
}

// ============================================================================
// Comparable
// ============================================================================

const COMPARABLE: &[&str] = &["ComparableType", "int", "float", "decimal", "string"];

#[derive(Debug, Clone)]
pub enum ComparableArg {
    Expression(Arc<dyn ComparableType>),
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
    String(String),
}

impl ComparableArg {
    pub fn into_comparable(self) -> Arc<dyn ComparableType> {
        match self {
            ComparableArg::Expression(expression) => expression,
            ComparableArg::Integer(value) => wrapped("comparable", IntegerLiteral::new(value)),
            ComparableArg::Float(value) => wrapped("comparable", FloatLiteral::new(value)),
            ComparableArg::Decimal(value) => wrapped("comparable", DecimalLiteral::new(value)),
            ComparableArg::String(value) => wrapped("comparable", StringLiteral::new(value)),
        }
    }
}

impl IntoExpression for ComparableArg {
    fn into_expression(self) -> Arc<dyn AnyType> {
        self.into_comparable()
    }
}

impl TryFrom<Value> for ComparableArg {
    type Error = TypeMismatch;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Integer(value) => Ok(ComparableArg::Integer(value)),
            Value::Float(value) => Ok(ComparableArg::Float(value)),
            Value::Decimal(value) => Ok(ComparableArg::Decimal(value)),
            Value::String(value) => Ok(ComparableArg::String(value)),
            other => narrow(other, "comparable", COMPARABLE, |e| e.into_comparable_type())
                .map(ComparableArg::Expression),
        }
    }
}

impl From<Arc<dyn ComparableType>> for ComparableArg {
    fn from(expression: Arc<dyn ComparableType>) -> Self {
        ComparableArg::Expression(expression)
    }
}

impl From<i64> for ComparableArg {
    fn from(value: i64) -> Self {
        ComparableArg::Integer(value)
    }
}

impl From<i32> for ComparableArg {
    fn from(value: i32) -> Self {
        ComparableArg::Integer(value as i64)
    }
}

impl From<f64> for ComparableArg {
    fn from(value: f64) -> Self {
        ComparableArg::Float(value)
    }
}

impl From<Decimal> for ComparableArg {
    fn from(value: Decimal) -> Self {
        ComparableArg::Decimal(value)
    }
}

impl From<&str> for ComparableArg {
    fn from(value: &str) -> Self {
        ComparableArg::String(value.to_string())
    }
}

impl From<String> for ComparableArg {
    fn from(value: String) -> Self {
        ComparableArg::String(value)
    }
}

pub fn to_comparable_type(value: impl Into<Value>) -> Result<Arc<dyn ComparableType>> {
    ComparableArg::try_from(value.into()).map(ComparableArg::into_comparable)
}

// ============================================================================
// Property
// ============================================================================

const PROPERTY: &[&str] = &["PropertyType", "bool", "int", "float", "decimal", "string"];

#[derive(Debug, Clone)]
pub enum PropertyArg {
    Expression(Arc<dyn PropertyType>),
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
    String(String),
}

impl PropertyArg {
    pub fn into_property(self) -> Arc<dyn PropertyType> {
        match self {
            PropertyArg::Expression(expression) => expression,
            PropertyArg::Boolean(value) => wrapped("property", BooleanLiteral::new(value)),
            PropertyArg::Integer(value) => wrapped("property", IntegerLiteral::new(value)),
            PropertyArg::Float(value) => wrapped("property", FloatLiteral::new(value)),
            PropertyArg::Decimal(value) => wrapped("property", DecimalLiteral::new(value)),
            PropertyArg::String(value) => wrapped("property", StringLiteral::new(value)),
        }
    }
}

impl IntoExpression for PropertyArg {
    fn into_expression(self) -> Arc<dyn AnyType> {
        self.into_property()
    }
}

impl TryFrom<Value> for PropertyArg {
    type Error = TypeMismatch;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Boolean(value) => Ok(PropertyArg::Boolean(value)),
            Value::Integer(value) => Ok(PropertyArg::Integer(value)),
            Value::Float(value) => Ok(PropertyArg::Float(value)),
            Value::Decimal(value) => Ok(PropertyArg::Decimal(value)),
            Value::String(value) => Ok(PropertyArg::String(value)),
            other => narrow(other, "property", PROPERTY, |e| e.into_property_type())
                .map(PropertyArg::Expression),
        }
    }
}

impl From<Arc<dyn PropertyType>> for PropertyArg {
    fn from(expression: Arc<dyn PropertyType>) -> Self {
        PropertyArg::Expression(expression)
    }
}

impl From<bool> for PropertyArg {
    fn from(value: bool) -> Self {
        PropertyArg::Boolean(value)
    }
}

impl From<i64> for PropertyArg {
    fn from(value: i64) -> Self {
        PropertyArg::Integer(value)
    }
}

impl From<i32> for PropertyArg {
    fn from(value: i32) -> Self {
        PropertyArg::Integer(value as i64)
    }
}

impl From<f64> for PropertyArg {
    fn from(value: f64) -> Self {
        PropertyArg::Float(value)
    }
}

impl From<Decimal> for PropertyArg {
    fn from(value: Decimal) -> Self {
        PropertyArg::Decimal(value)
    }
}

impl From<&str> for PropertyArg {
    fn from(value: &str) -> Self {
        PropertyArg::String(value.to_string())
    }
}

impl From<String> for PropertyArg {
    fn from(value: String) -> Self {
        PropertyArg::String(value)
    }
}

pub fn to_property_type(value: impl Into<Value>) -> Result<Arc<dyn PropertyType>> {
    PropertyArg::try_from(value.into()).map(PropertyArg::into_property)
}

// ============================================================================
// List
// ============================================================================

const LIST: &[&str] = &["ListType", "array"];

#[derive(Debug, Clone)]
pub enum ListArg {
    Expression(Arc<dyn ListType>),
    /// Every value of the collection becomes an element; keys are dropped.
    Collection(Collection),
}

impl ListArg {
    pub fn into_list(self) -> Arc<dyn ListType> {
        match self {
            ListArg::Expression(expression) => expression,
            ListArg::Collection(collection) => {
                wrapped("list", ExpressionList::new(collection.into_values()))
            }
        }
    }
}

impl IntoExpression for ListArg {
    fn into_expression(self) -> Arc<dyn AnyType> {
        self.into_list()
    }
}

impl TryFrom<Value> for ListArg {
    type Error = TypeMismatch;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Collection(collection) => Ok(ListArg::Collection(collection)),
            other => narrow(other, "list", LIST, |e| e.into_list_type()).map(ListArg::Expression),
        }
    }
}

impl From<Arc<dyn ListType>> for ListArg {
    fn from(expression: Arc<dyn ListType>) -> Self {
        ListArg::Expression(expression)
    }
}

impl From<Collection> for ListArg {
    fn from(collection: Collection) -> Self {
        ListArg::Collection(collection)
    }
}

impl<T: Into<Value>> From<Vec<T>> for ListArg {
    fn from(values: Vec<T>) -> Self {
        ListArg::Collection(Collection::list(values))
    }
}

pub fn to_list_type(value: impl Into<Value>) -> Result<Arc<dyn ListType>> {
    ListArg::try_from(value.into()).map(ListArg::into_list)
}

// ============================================================================
// Map
// ============================================================================

const MAP: &[&str] = &["MapType", "array"];

#[derive(Debug, Clone)]
pub enum MapArg {
    Expression(Arc<dyn MapType>),
    /// Keys become map keys; index keys are rendered as their number.
    Collection(Collection),
}

impl MapArg {
    pub fn into_map(self) -> Arc<dyn MapType> {
        match self {
            MapArg::Expression(expression) => expression,
            MapArg::Collection(collection) => {
                wrapped("map", PropertyMap::from_collection(collection))
            }
        }
    }
}

impl IntoExpression for MapArg {
    fn into_expression(self) -> Arc<dyn AnyType> {
        self.into_map()
    }
}

impl TryFrom<Value> for MapArg {
    type Error = TypeMismatch;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Collection(collection) => Ok(MapArg::Collection(collection)),
            other => narrow(other, "map", MAP, |e| e.into_map_type()).map(MapArg::Expression),
        }
    }
}

impl From<Arc<dyn MapType>> for MapArg {
    fn from(expression: Arc<dyn MapType>) -> Self {
        MapArg::Expression(expression)
    }
}

impl From<Collection> for MapArg {
    fn from(collection: Collection) -> Self {
        MapArg::Collection(collection)
    }
}

pub fn to_map_type(value: impl Into<Value>) -> Result<Arc<dyn MapType>> {
    MapArg::try_from(value.into()).map(MapArg::into_map)
}

// ============================================================================
// Variable and AnyType
// ============================================================================

/// Coerces `value` to a variable: variables pass through, strings name a
/// new one.
pub fn to_variable(value: impl Into<Value>) -> Result<Variable> {
    let value = value.into();
    let actual = value.type_name();
    match value {
        Value::String(name) => Ok(Variable::new(name)),
        Value::Expression(expression) => expression
            .as_any()
            .downcast_ref::<Variable>()
            .cloned()
            .ok_or_else(|| mismatch("variable", &["Variable", "string"], actual)),
        _ => Err(mismatch("variable", &["Variable", "string"], actual)),
    }
}

/// General entry point. Total over [`Value`]: typed nodes pass through,
/// scalars become literals and collections are classified as list or map.
pub fn to_any_type(value: impl Into<Value>) -> Arc<dyn AnyType> {
    match value.into() {
        Value::Expression(expression) => expression,
        Value::Null => wrapped("any", NullLiteral),
        Value::Boolean(value) => wrapped("any", BooleanLiteral::new(value)),
        Value::Integer(value) => wrapped("any", IntegerLiteral::new(value)),
        Value::Float(value) => wrapped("any", FloatLiteral::new(value)),
        Value::Decimal(value) => wrapped("any", DecimalLiteral::new(value)),
        Value::String(value) => wrapped("any", StringLiteral::new(value)),
        Value::Collection(collection) if collection.is_list() => {
            wrapped("any", ExpressionList::new(collection.into_values()))
        }
        Value::Collection(collection) => wrapped("any", PropertyMap::from_collection(collection)),
    }
}

// ============================================================================
// Structural
// ============================================================================

/// Input of the structural coercions: a typed node or a pattern object
/// whose variable stands in for it.
#[derive(Debug, Clone)]
pub enum StructuralArg {
    Expression(Arc<dyn AnyType>),
    Pattern(Arc<dyn Pattern>),
}

impl From<Arc<dyn AnyType>> for StructuralArg {
    fn from(expression: Arc<dyn AnyType>) -> Self {
        StructuralArg::Expression(expression)
    }
}

impl From<Arc<dyn Pattern>> for StructuralArg {
    fn from(pattern: Arc<dyn Pattern>) -> Self {
        StructuralArg::Pattern(pattern)
    }
}

impl StructuralArg {
    pub fn pattern(pattern: impl Pattern + 'static) -> Self {
        StructuralArg::Pattern(Arc::new(pattern))
    }
}

fn unwrap_structural<T: ?Sized>(
    value: StructuralArg,
    kind: Option<PatternKind>,
    parameter: &str,
    expected: &[&str],
    cast: impl FnOnce(Arc<dyn AnyType>) -> Option<Arc<T>>,
    from_variable: impl FnOnce(Variable) -> Arc<T>,
) -> Result<Arc<T>> {
    match value {
        StructuralArg::Expression(expression) => {
            let actual = expression.type_name();
            cast(expression).ok_or_else(|| mismatch(parameter, expected, actual))
        }
        StructuralArg::Pattern(pattern) => match kind {
            Some(kind) if pattern.kind() != kind => {
                Err(mismatch(parameter, expected, pattern.kind().name()))
            }
            _ => Ok(from_variable(pattern.variable())),
        },
    }
}

pub fn to_node_type(value: impl Into<StructuralArg>) -> Result<Arc<dyn NodeType>> {
    unwrap_structural(
        value.into(),
        Some(PatternKind::Node),
        "node",
        &["NodeType", "Node"],
        |e| e.into_node_type(),
        |variable| Arc::new(variable) as Arc<dyn NodeType>,
    )
}

pub fn to_relationship_type(value: impl Into<StructuralArg>) -> Result<Arc<dyn RelationshipType>> {
    unwrap_structural(
        value.into(),
        Some(PatternKind::Relationship),
        "relationship",
        &["RelationshipType", "Relationship"],
        |e| e.into_relationship_type(),
        |variable| Arc::new(variable) as Arc<dyn RelationshipType>,
    )
}

pub fn to_path_type(value: impl Into<StructuralArg>) -> Result<Arc<dyn PathType>> {
    unwrap_structural(
        value.into(),
        Some(PatternKind::Path),
        "path",
        &["PathType", "Path"],
        |e| e.into_path_type(),
        |variable| Arc::new(variable) as Arc<dyn PathType>,
    )
}

pub fn to_structural_type(value: impl Into<StructuralArg>) -> Result<Arc<dyn StructuralType>> {
    unwrap_structural(
        value.into(),
        None,
        "pattern",
        &["StructuralType", "Pattern"],
        |e| e.into_structural_type(),
        |variable| Arc::new(variable) as Arc<dyn StructuralType>,
    )
}

// ============================================================================
// Capability dispatch
// ============================================================================

/// Coerces `value` to the named capability.
///
/// Capabilities without a native counterpart (dates, points, structural
/// types) only accept nodes that already carry them.
pub fn coerce(value: impl Into<Value>, capability: Capability) -> Result<Arc<dyn AnyType>> {
    let value = value.into();
    let parameter = capability.name();
    let actual = value.type_name();

    let node: Arc<dyn AnyType> = match (capability, value) {
        (Capability::Any, value) => to_any_type(value),
        (Capability::Property, value) => to_property_type(value)?,
        (Capability::Comparable, value) => to_comparable_type(value)?,
        (Capability::Boolean, value) => to_boolean_type(value)?,
        (Capability::Numeral, value) => to_numeral_type(value)?,
        (Capability::String, value) => to_string_type(value)?,
        (Capability::List, value) => to_list_type(value)?,
        (Capability::Map, value) => to_map_type(value)?,
        (Capability::Integer, Value::Integer(value)) => wrapped("integer", IntegerLiteral::new(value)),
        (Capability::Float, Value::Float(value)) => wrapped("float", FloatLiteral::new(value)),
        (Capability::Float, Value::Decimal(value)) => wrapped("float", DecimalLiteral::new(value)),
        (Capability::Composite, Value::Collection(collection)) => {
            to_any_type(Value::Collection(collection))
        }
        (Capability::Node, Value::Expression(expression)) => to_node_type(expression)?,
        (Capability::Relationship, Value::Expression(expression)) => {
            to_relationship_type(expression)?
        }
        (Capability::Path, Value::Expression(expression)) => to_path_type(expression)?,
        (Capability::Structural, Value::Expression(expression)) => {
            to_structural_type(expression)?
        }
        (capability, Value::Expression(expression)) if expression.has_capability(capability) => {
            expression
        }
        (capability, _) => {
            let expected = match capability {
                Capability::Integer => vec![capability.trait_name(), "int"],
                Capability::Float => vec![capability.trait_name(), "float", "decimal"],
                Capability::Composite => vec![capability.trait_name(), "array"],
                _ => vec![capability.trait_name()],
            };
            return Err(mismatch(parameter, &expected, actual));
        }
    };

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::QueryConvertible;

    #[test]
    fn test_native_numerals_wrap() {
        assert_eq!(to_numeral_type(5).unwrap().to_query(), "5");
        assert_eq!(to_numeral_type(2.5).unwrap().to_query(), "2.5");
    }

    #[test]
    fn test_typed_numeral_is_identity() {
        let node: Arc<dyn AnyType> = Arc::new(IntegerLiteral::new(3));
        let numeral = to_numeral_type(Value::Expression(node.clone())).unwrap();
        let back: Arc<dyn AnyType> = numeral;
        assert!(Arc::ptr_eq(&node, &back));
    }

    #[test]
    fn test_string_rejected_as_numeral() {
        let err = to_numeral_type("five").err().unwrap();
        assert_eq!(err.parameter, "numeral");
        assert_eq!(err.actual, "string");
        assert_eq!(err.to_string(), "$numeral should be a NumeralType or int or float or decimal, string given");
    }

    #[test]
    fn test_coerce_integer_rejects_float() {
        let err = coerce(1.5, Capability::Integer).err().unwrap();
        assert_eq!(err.parameter, "integer");
        assert_eq!(err.expected, vec!["IntegerType", "int"]);
        assert_eq!(err.actual, "float");
    }

    #[test]
    fn test_coerce_date_requires_node() {
        let err = coerce("2024-01-01", Capability::Date).err().unwrap();
        assert_eq!(err.expected, vec!["DateType"]);
    }

    #[test]
    fn test_coerce_composite_collection() {
        let node = coerce(vec![1, 2], Capability::Composite).unwrap();
        assert_eq!(node.to_query(), "[1, 2]");
    }
}
