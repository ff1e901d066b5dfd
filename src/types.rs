//! # Capability lattice
//!
//! Every expression node implements [`AnyType`]. On top of that a node opts
//! into any number of capability traits, and the operators a capability
//! exposes are available as default methods on that trait:
//!
//! ```text
//! AnyType
//! ├── PropertyType
//! │   ├── BooleanType
//! │   ├── PointType
//! │   └── ComparableType
//! │       ├── NumeralType ── IntegerType, FloatType
//! │       ├── StringType
//! │       └── DateType, DateTimeType, LocalDateTimeType, LocalTimeType, TimeType
//! ├── CompositeType ── ListType, MapType
//! └── StructuralType ── NodeType, RelationshipType, PathType
//! ```
//!
//! A node can sit in several branches at once. `n.age` is a boolean, a
//! string and a list simultaneously because its runtime type is unknown until
//! the query executes, so the capability is a syntactic permission rather
//! than a type guarantee.
//!
//! ## Example
//!
//! ```
//! use cypher_dsl::prelude::*;
//!
//! let n = Variable::new("n");
//! let older = n.property("age").gt(18);
//! let named = n.property("name").starts_with("A");
//!
//! assert_eq!(older.and(named).to_query(), "((n.age > 18) AND (n.name STARTS WITH 'A'))");
//! ```

use std::any::Any;
use std::fmt::{self, Debug};
use std::str::FromStr;
use std::sync::Arc;

use crate::cast::{BooleanArg, ComparableArg, ListArg, NumeralArg, StringArg};
use crate::expressions::operators::{
    Addition, Conjunction, Contains, Disjunction, Division, EndsWith, Equality, ExclusiveDisjunction,
    Exponentiation, GreaterThan, GreaterThanOrEqual, In, Inequality, IsNotNull, IsNull, LessThan,
    LessThanOrEqual, ModuloDivision, Multiplication, Negation, Regex, StartsWith, Subtraction,
    UnaryMinus,
};
use crate::expressions::{Alias, Property, PropertyOwner, Variable};
use crate::value::Value;

/// Anything that can be rendered as Cypher text.
pub trait QueryConvertible {
    /// Renders this object. Rendering is pure and deterministic.
    fn to_query(&self) -> String;
}

/// Names of the capabilities, used for runtime queries and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Any,
    Property,
    Comparable,
    Boolean,
    Numeral,
    Integer,
    Float,
    String,
    Date,
    DateTime,
    LocalDateTime,
    LocalTime,
    Time,
    Point,
    Composite,
    List,
    Map,
    Structural,
    Node,
    Relationship,
    Path,
}

impl Capability {
    /// All capabilities, root first.
    pub const ALL: [Capability; 21] = [
        Capability::Any,
        Capability::Property,
        Capability::Comparable,
        Capability::Boolean,
        Capability::Numeral,
        Capability::Integer,
        Capability::Float,
        Capability::String,
        Capability::Date,
        Capability::DateTime,
        Capability::LocalDateTime,
        Capability::LocalTime,
        Capability::Time,
        Capability::Point,
        Capability::Composite,
        Capability::List,
        Capability::Map,
        Capability::Structural,
        Capability::Node,
        Capability::Relationship,
        Capability::Path,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Capability::Any => "any",
            Capability::Property => "property",
            Capability::Comparable => "comparable",
            Capability::Boolean => "boolean",
            Capability::Numeral => "numeral",
            Capability::Integer => "integer",
            Capability::Float => "float",
            Capability::String => "string",
            Capability::Date => "date",
            Capability::DateTime => "datetime",
            Capability::LocalDateTime => "localdatetime",
            Capability::LocalTime => "localtime",
            Capability::Time => "time",
            Capability::Point => "point",
            Capability::Composite => "composite",
            Capability::List => "list",
            Capability::Map => "map",
            Capability::Structural => "structural",
            Capability::Node => "node",
            Capability::Relationship => "relationship",
            Capability::Path => "path",
        }
    }

    /// Name of the trait that carries this capability.
    pub fn trait_name(self) -> &'static str {
        match self {
            Capability::Any => "AnyType",
            Capability::Property => "PropertyType",
            Capability::Comparable => "ComparableType",
            Capability::Boolean => "BooleanType",
            Capability::Numeral => "NumeralType",
            Capability::Integer => "IntegerType",
            Capability::Float => "FloatType",
            Capability::String => "StringType",
            Capability::Date => "DateType",
            Capability::DateTime => "DateTimeType",
            Capability::LocalDateTime => "LocalDateTimeType",
            Capability::LocalTime => "LocalTimeType",
            Capability::Time => "TimeType",
            Capability::Point => "PointType",
            Capability::Composite => "CompositeType",
            Capability::List => "ListType",
            Capability::Map => "MapType",
            Capability::Structural => "StructuralType",
            Capability::Node => "NodeType",
            Capability::Relationship => "RelationshipType",
            Capability::Path => "PathType",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Capability::ALL
            .into_iter()
            .find(|capability| capability.name() == wanted)
            .ok_or_else(|| format!("unknown capability '{}'", s))
    }
}

/// Root capability shared by every expression node.
///
/// The `into_*_type` methods are the runtime half of the lattice: they hand
/// back the same allocation viewed through a narrower trait, or `None` when
/// the node does not carry that capability. Node types never implement them
/// by hand; `capabilities!` generates the overrides.
pub trait AnyType: QueryConvertible + Debug + Send + Sync + 'static {
    /// Short type name used in diagnostics.
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn has_capability(&self, capability: Capability) -> bool;

    fn into_property_type(self: Arc<Self>) -> Option<Arc<dyn PropertyType>> {
        None
    }

    fn into_comparable_type(self: Arc<Self>) -> Option<Arc<dyn ComparableType>> {
        None
    }

    fn into_boolean_type(self: Arc<Self>) -> Option<Arc<dyn BooleanType>> {
        None
    }

    fn into_numeral_type(self: Arc<Self>) -> Option<Arc<dyn NumeralType>> {
        None
    }

    fn into_integer_type(self: Arc<Self>) -> Option<Arc<dyn IntegerType>> {
        None
    }

    fn into_float_type(self: Arc<Self>) -> Option<Arc<dyn FloatType>> {
        None
    }

    fn into_string_type(self: Arc<Self>) -> Option<Arc<dyn StringType>> {
        None
    }

    fn into_date_type(self: Arc<Self>) -> Option<Arc<dyn DateType>> {
        None
    }

    fn into_date_time_type(self: Arc<Self>) -> Option<Arc<dyn DateTimeType>> {
        None
    }

    fn into_local_date_time_type(self: Arc<Self>) -> Option<Arc<dyn LocalDateTimeType>> {
        None
    }

    fn into_local_time_type(self: Arc<Self>) -> Option<Arc<dyn LocalTimeType>> {
        None
    }

    fn into_time_type(self: Arc<Self>) -> Option<Arc<dyn TimeType>> {
        None
    }

    fn into_point_type(self: Arc<Self>) -> Option<Arc<dyn PointType>> {
        None
    }

    fn into_composite_type(self: Arc<Self>) -> Option<Arc<dyn CompositeType>> {
        None
    }

    fn into_list_type(self: Arc<Self>) -> Option<Arc<dyn ListType>> {
        None
    }

    fn into_map_type(self: Arc<Self>) -> Option<Arc<dyn MapType>> {
        None
    }

    fn into_structural_type(self: Arc<Self>) -> Option<Arc<dyn StructuralType>> {
        None
    }

    fn into_node_type(self: Arc<Self>) -> Option<Arc<dyn NodeType>> {
        None
    }

    fn into_relationship_type(self: Arc<Self>) -> Option<Arc<dyn RelationshipType>> {
        None
    }

    fn into_path_type(self: Arc<Self>) -> Option<Arc<dyn PathType>> {
        None
    }

    /// `self = right`
    fn equals(&self, right: impl Into<Value>) -> Equality
    where
        Self: Sized + Clone,
    {
        Equality::new(Value::Expression(Arc::new(self.clone())), right, true)
    }

    /// `self <> right`
    fn not_equals(&self, right: impl Into<Value>) -> Inequality
    where
        Self: Sized + Clone,
    {
        Inequality::new(Value::Expression(Arc::new(self.clone())), right, true)
    }

    /// `(self IS NULL)`
    fn is_null(&self) -> IsNull
    where
        Self: Sized + Clone,
    {
        IsNull::new(Value::Expression(Arc::new(self.clone())))
    }

    /// `(self IS NOT NULL)`
    fn is_not_null(&self) -> IsNotNull
    where
        Self: Sized + Clone,
    {
        IsNotNull::new(Value::Expression(Arc::new(self.clone())))
    }

    /// `self IN list`
    fn in_list(&self, list: impl Into<ListArg>) -> In
    where
        Self: Sized + Clone,
    {
        In::new(Value::Expression(Arc::new(self.clone())), list, true)
    }

    /// `self AS variable`
    fn alias(&self, variable: impl Into<Variable>) -> Alias
    where
        Self: Sized + Clone,
    {
        Alias::new(Value::Expression(Arc::new(self.clone())), variable)
    }
}

// ============================================================================
// Property types
// ============================================================================

/// Values that can be stored as a property.
pub trait PropertyType: AnyType {}

/// Property values with an ordering.
pub trait ComparableType: PropertyType {
    /// `self > right`
    fn gt(&self, right: impl Into<ComparableArg>) -> GreaterThan
    where
        Self: Sized + Clone,
    {
        GreaterThan::new(ComparableArg::Expression(Arc::new(self.clone())), right, true)
    }

    /// `self >= right`
    fn gte(&self, right: impl Into<ComparableArg>) -> GreaterThanOrEqual
    where
        Self: Sized + Clone,
    {
        GreaterThanOrEqual::new(ComparableArg::Expression(Arc::new(self.clone())), right, true)
    }

    /// `self < right`
    fn lt(&self, right: impl Into<ComparableArg>) -> LessThan
    where
        Self: Sized + Clone,
    {
        LessThan::new(ComparableArg::Expression(Arc::new(self.clone())), right, true)
    }

    /// `self <= right`
    fn lte(&self, right: impl Into<ComparableArg>) -> LessThanOrEqual
    where
        Self: Sized + Clone,
    {
        LessThanOrEqual::new(ComparableArg::Expression(Arc::new(self.clone())), right, true)
    }
}

pub trait BooleanType: PropertyType {
    /// `self AND right`
    fn and(&self, right: impl Into<BooleanArg>) -> Conjunction
    where
        Self: Sized + Clone,
    {
        Conjunction::new(BooleanArg::Expression(Arc::new(self.clone())), right, true)
    }

    /// `self OR right`
    fn or(&self, right: impl Into<BooleanArg>) -> Disjunction
    where
        Self: Sized + Clone,
    {
        Disjunction::new(BooleanArg::Expression(Arc::new(self.clone())), right, true)
    }

    /// `self XOR right`
    fn xor(&self, right: impl Into<BooleanArg>) -> ExclusiveDisjunction
    where
        Self: Sized + Clone,
    {
        ExclusiveDisjunction::new(BooleanArg::Expression(Arc::new(self.clone())), right, true)
    }

    /// `NOT self`
    fn not(&self) -> Negation
    where
        Self: Sized + Clone,
    {
        Negation::new(BooleanArg::Expression(Arc::new(self.clone())), true)
    }
}

/// Integers and floats.
pub trait NumeralType: ComparableType {
    fn plus(&self, right: impl Into<NumeralArg>) -> Addition
    where
        Self: Sized + Clone,
    {
        Addition::new(NumeralArg::Expression(Arc::new(self.clone())), right, true)
    }

    fn minus(&self, right: impl Into<NumeralArg>) -> Subtraction
    where
        Self: Sized + Clone,
    {
        Subtraction::new(NumeralArg::Expression(Arc::new(self.clone())), right, true)
    }

    fn times(&self, right: impl Into<NumeralArg>) -> Multiplication
    where
        Self: Sized + Clone,
    {
        Multiplication::new(NumeralArg::Expression(Arc::new(self.clone())), right, true)
    }

    fn divide(&self, right: impl Into<NumeralArg>) -> Division
    where
        Self: Sized + Clone,
    {
        Division::new(NumeralArg::Expression(Arc::new(self.clone())), right, true)
    }

    fn modulo(&self, right: impl Into<NumeralArg>) -> ModuloDivision
    where
        Self: Sized + Clone,
    {
        ModuloDivision::new(NumeralArg::Expression(Arc::new(self.clone())), right, true)
    }

    fn exponentiate(&self, right: impl Into<NumeralArg>) -> Exponentiation
    where
        Self: Sized + Clone,
    {
        Exponentiation::new(NumeralArg::Expression(Arc::new(self.clone())), right, true)
    }

    /// `- self`
    fn negate(&self) -> UnaryMinus
    where
        Self: Sized + Clone,
    {
        UnaryMinus::new(NumeralArg::Expression(Arc::new(self.clone())), true)
    }
}

pub trait IntegerType: NumeralType {}

pub trait FloatType: NumeralType {}

pub trait StringType: ComparableType {
    /// `self CONTAINS right`
    fn contains(&self, right: impl Into<StringArg>) -> Contains
    where
        Self: Sized + Clone,
    {
        Contains::new(StringArg::Expression(Arc::new(self.clone())), right, true)
    }

    /// `self STARTS WITH right`
    fn starts_with(&self, right: impl Into<StringArg>) -> StartsWith
    where
        Self: Sized + Clone,
    {
        StartsWith::new(StringArg::Expression(Arc::new(self.clone())), right, true)
    }

    /// `self ENDS WITH right`
    fn ends_with(&self, right: impl Into<StringArg>) -> EndsWith
    where
        Self: Sized + Clone,
    {
        EndsWith::new(StringArg::Expression(Arc::new(self.clone())), right, true)
    }

    /// `self =~ right`
    fn regex(&self, right: impl Into<StringArg>) -> Regex
    where
        Self: Sized + Clone,
    {
        Regex::new(StringArg::Expression(Arc::new(self.clone())), right, true)
    }
}

pub trait DateType: ComparableType {}

pub trait DateTimeType: ComparableType {}

pub trait LocalDateTimeType: ComparableType {}

pub trait LocalTimeType: ComparableType {}

pub trait TimeType: ComparableType {}

pub trait PointType: PropertyType {}

// ============================================================================
// Composite types
// ============================================================================

pub trait CompositeType: AnyType {}

pub trait ListType: CompositeType {
    /// `element IN self`
    fn has(&self, element: impl Into<Value>) -> In
    where
        Self: Sized + Clone,
    {
        In::new(element, ListArg::Expression(Arc::new(self.clone())), true)
    }
}

pub trait MapType: CompositeType {
    /// `self.name`
    fn property(&self, name: impl Into<Variable>) -> Property
    where
        Self: Sized + Clone,
    {
        Property::new(PropertyOwner::Map(Arc::new(self.clone())), name)
    }
}

// ============================================================================
// Structural types
// ============================================================================

/// Graph participants. Their expression form is always a variable.
pub trait StructuralType: AnyType {}

pub trait NodeType: StructuralType {}

pub trait RelationshipType: StructuralType {}

pub trait PathType: StructuralType {}

// ============================================================================
// Shared handles
// ============================================================================

// The coercion engine hands back `Arc<dyn …Type>`. Implementing the lattice
// for `Arc<T>` lets those handles take part in further operators, e.g.
// `to_numeral_type(x)?.plus(1)`. The casts forward to the inner node so the
// returned allocation is the node itself, not the handle.

impl<T: ?Sized + QueryConvertible> QueryConvertible for Arc<T> {
    fn to_query(&self) -> String {
        (**self).to_query()
    }
}

macro_rules! forward_casts {
    ($($method:ident => $trait:ident),* $(,)?) => {
        $(
            fn $method(self: Arc<Self>) -> Option<Arc<dyn $trait>> {
                T::$method(Arc::clone(&*self))
            }
        )*
    };
}

impl<T: ?Sized + AnyType> AnyType for Arc<T> {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn has_capability(&self, capability: Capability) -> bool {
        (**self).has_capability(capability)
    }

    forward_casts!(
        into_property_type => PropertyType,
        into_comparable_type => ComparableType,
        into_boolean_type => BooleanType,
        into_numeral_type => NumeralType,
        into_integer_type => IntegerType,
        into_float_type => FloatType,
        into_string_type => StringType,
        into_date_type => DateType,
        into_date_time_type => DateTimeType,
        into_local_date_time_type => LocalDateTimeType,
        into_local_time_type => LocalTimeType,
        into_time_type => TimeType,
        into_point_type => PointType,
        into_composite_type => CompositeType,
        into_list_type => ListType,
        into_map_type => MapType,
        into_structural_type => StructuralType,
        into_node_type => NodeType,
        into_relationship_type => RelationshipType,
        into_path_type => PathType,
    );
}

macro_rules! forward_capability {
    ($($trait:ident),* $(,)?) => {
        $(impl<T: ?Sized + $trait> $trait for Arc<T> {})*
    };
}

forward_capability!(
    PropertyType, ComparableType, BooleanType, NumeralType, IntegerType, FloatType, StringType,
    DateType, DateTimeType, LocalDateTimeType, LocalTimeType, TimeType, PointType,
    CompositeType, ListType, MapType, StructuralType, NodeType, RelationshipType, PathType,
);
