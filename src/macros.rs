//! Declarative wiring between node types and the capability lattice.
//!
//! Every expression node calls [`capabilities!`] exactly once. The macro
//! implements [`AnyType`](crate::types::AnyType) (type name, capability
//! queries and the `into_*_type` casts used by the coercion engine), the
//! listed capability traits, `Display`, and the conversions from the node
//! into [`Value`](crate::value::Value) and into each argument union that
//! accepts one of its capabilities.

macro_rules! capabilities {
    // ------------------------------------------------------------------
    // capability ident -> Capability variant
    // ------------------------------------------------------------------
    (@variant property) => { $crate::types::Capability::Property };
    (@variant comparable) => { $crate::types::Capability::Comparable };
    (@variant boolean) => { $crate::types::Capability::Boolean };
    (@variant numeral) => { $crate::types::Capability::Numeral };
    (@variant integer) => { $crate::types::Capability::Integer };
    (@variant float) => { $crate::types::Capability::Float };
    (@variant string) => { $crate::types::Capability::String };
    (@variant date) => { $crate::types::Capability::Date };
    (@variant datetime) => { $crate::types::Capability::DateTime };
    (@variant localdatetime) => { $crate::types::Capability::LocalDateTime };
    (@variant localtime) => { $crate::types::Capability::LocalTime };
    (@variant time) => { $crate::types::Capability::Time };
    (@variant point) => { $crate::types::Capability::Point };
    (@variant composite) => { $crate::types::Capability::Composite };
    (@variant list) => { $crate::types::Capability::List };
    (@variant map) => { $crate::types::Capability::Map };
    (@variant structural) => { $crate::types::Capability::Structural };
    (@variant node) => { $crate::types::Capability::Node };
    (@variant relationship) => { $crate::types::Capability::Relationship };
    (@variant path) => { $crate::types::Capability::Path };

    // ------------------------------------------------------------------
    // capability ident -> AnyType cast override
    // ------------------------------------------------------------------
    (@cast property) => {
        capabilities!(@cast_fn into_property_type, PropertyType);
    };
    (@cast comparable) => {
        capabilities!(@cast_fn into_comparable_type, ComparableType);
    };
    (@cast boolean) => {
        capabilities!(@cast_fn into_boolean_type, BooleanType);
    };
    (@cast numeral) => {
        capabilities!(@cast_fn into_numeral_type, NumeralType);
    };
    (@cast integer) => {
        capabilities!(@cast_fn into_integer_type, IntegerType);
    };
    (@cast float) => {
        capabilities!(@cast_fn into_float_type, FloatType);
    };
    (@cast string) => {
        capabilities!(@cast_fn into_string_type, StringType);
    };
    (@cast date) => {
        capabilities!(@cast_fn into_date_type, DateType);
    };
    (@cast datetime) => {
        capabilities!(@cast_fn into_date_time_type, DateTimeType);
    };
    (@cast localdatetime) => {
        capabilities!(@cast_fn into_local_date_time_type, LocalDateTimeType);
    };
    (@cast localtime) => {
        capabilities!(@cast_fn into_local_time_type, LocalTimeType);
    };
    (@cast time) => {
        capabilities!(@cast_fn into_time_type, TimeType);
    };
    (@cast point) => {
        capabilities!(@cast_fn into_point_type, PointType);
    };
    (@cast composite) => {
        capabilities!(@cast_fn into_composite_type, CompositeType);
    };
    (@cast list) => {
        capabilities!(@cast_fn into_list_type, ListType);
    };
    (@cast map) => {
        capabilities!(@cast_fn into_map_type, MapType);
    };
    (@cast structural) => {
        capabilities!(@cast_fn into_structural_type, StructuralType);
    };
    (@cast node) => {
        capabilities!(@cast_fn into_node_type, NodeType);
    };
    (@cast relationship) => {
        capabilities!(@cast_fn into_relationship_type, RelationshipType);
    };
    (@cast path) => {
        capabilities!(@cast_fn into_path_type, PathType);
    };
    (@cast_fn $method:ident, $trait:ident) => {
        fn $method(
            self: ::std::sync::Arc<Self>,
        ) -> Option<::std::sync::Arc<dyn $crate::types::$trait>> {
            Some(self)
        }
    };

    // ------------------------------------------------------------------
    // capability ident -> trait impl (+ argument conversion)
    // ------------------------------------------------------------------
    (@impl $ty:ident, property) => {
        impl $crate::types::PropertyType for $ty {}
        capabilities!(@arg $ty, PropertyArg);
    };
    (@impl $ty:ident, comparable) => {
        impl $crate::types::ComparableType for $ty {}
        capabilities!(@arg $ty, ComparableArg);
    };
    (@impl $ty:ident, boolean) => {
        impl $crate::types::BooleanType for $ty {}
        capabilities!(@arg $ty, BooleanArg);
    };
    (@impl $ty:ident, numeral) => {
        impl $crate::types::NumeralType for $ty {}
        capabilities!(@arg $ty, NumeralArg);
    };
    (@impl $ty:ident, integer) => {
        impl $crate::types::IntegerType for $ty {}
    };
    (@impl $ty:ident, float) => {
        impl $crate::types::FloatType for $ty {}
    };
    (@impl $ty:ident, string) => {
        impl $crate::types::StringType for $ty {}
        capabilities!(@arg $ty, StringArg);
    };
    (@impl $ty:ident, date) => {
        impl $crate::types::DateType for $ty {}
    };
    (@impl $ty:ident, datetime) => {
        impl $crate::types::DateTimeType for $ty {}
    };
    (@impl $ty:ident, localdatetime) => {
        impl $crate::types::LocalDateTimeType for $ty {}
    };
    (@impl $ty:ident, localtime) => {
        impl $crate::types::LocalTimeType for $ty {}
    };
    (@impl $ty:ident, time) => {
        impl $crate::types::TimeType for $ty {}
    };
    (@impl $ty:ident, point) => {
        impl $crate::types::PointType for $ty {}
    };
    (@impl $ty:ident, composite) => {
        impl $crate::types::CompositeType for $ty {}
    };
    (@impl $ty:ident, list) => {
        impl $crate::types::ListType for $ty {}
        capabilities!(@arg $ty, ListArg);
    };
    (@impl $ty:ident, map) => {
        impl $crate::types::MapType for $ty {}
        capabilities!(@arg $ty, MapArg);
    };
    (@impl $ty:ident, structural) => {
        impl $crate::types::StructuralType for $ty {}
    };
    (@impl $ty:ident, node) => {
        impl $crate::types::NodeType for $ty {}
    };
    (@impl $ty:ident, relationship) => {
        impl $crate::types::RelationshipType for $ty {}
    };
    (@impl $ty:ident, path) => {
        impl $crate::types::PathType for $ty {}
    };
    (@arg $ty:ident, $arg:ident) => {
        impl From<$ty> for $crate::cast::$arg {
            fn from(node: $ty) -> Self {
                $crate::cast::$arg::Expression(::std::sync::Arc::new(node))
            }
        }
    };

    // ------------------------------------------------------------------
    // entry point
    // ------------------------------------------------------------------
    ($ty:ident => [$($cap:ident),* $(,)?]) => {
        impl $crate::types::AnyType for $ty {
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn has_capability(&self, capability: $crate::types::Capability) -> bool {
                capability == $crate::types::Capability::Any
                    $(|| capability == capabilities!(@variant $cap))*
            }

            $(capabilities!(@cast $cap);)*
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::types::QueryConvertible::to_query(self))
            }
        }

        impl From<$ty> for $crate::value::Value {
            fn from(node: $ty) -> Self {
                $crate::value::Value::Expression(::std::sync::Arc::new(node))
            }
        }

        impl From<$ty> for $crate::cast::StructuralArg {
            fn from(node: $ty) -> Self {
                $crate::cast::StructuralArg::Expression(::std::sync::Arc::new(node))
            }
        }

        $(capabilities!(@impl $ty, $cap);)*
    };
}
