//! # cypher-dsl
//!
//! A typed builder for Cypher expressions. Small immutable nodes are composed
//! into a tree, and the tree renders itself to query text.
//!
//! ```
//! use cypher_dsl::prelude::*;
//!
//! let n = Variable::new("n");
//! let adult = n.property("age").gte(18);
//! let tagged = n.property("tags").has("admin");
//!
//! assert_eq!(
//!     adult.or(tagged).to_query(),
//!     "((n.age >= 18) OR ('admin' IN n.tags))"
//! );
//! ```
//!
//! - **[types]** - the capability traits and the operator methods they expose
//! - **[cast]** - coercion of native values into typed nodes
//! - **[expressions]** - the node types
//! - **[value]** - the untyped input union
//! - **[patterns]** - the contract pattern objects implement

#[macro_use]
mod macros;

pub mod cast;
pub mod error;
pub mod escape;
pub mod expressions;
pub mod patterns;
pub mod types;
pub mod value;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::TypeMismatch;
pub use expressions::{
    Alias, ExpressionList, FunctionCall, Literal, Procedure, Property, PropertyMap, Variable,
};
pub use patterns::{Pattern, PatternKind};
pub use types::{AnyType, Capability, QueryConvertible};
pub use value::{Collection, Key, Value};

/// Everything needed to build and render expressions.
pub mod prelude {
    pub use crate::cast::{
        BooleanArg, ComparableArg, ListArg, MapArg, NumeralArg, PropertyArg, StringArg,
        StructuralArg,
    };
    pub use crate::error::TypeMismatch;
    pub use crate::expressions::{
        Alias, ExpressionList, FunctionCall, Literal, Procedure, Property, PropertyMap,
        PropertyOwner, Variable,
    };
    pub use crate::patterns::{Pattern, PatternKind};
    pub use crate::types::{
        AnyType, BooleanType, Capability, ComparableType, CompositeType, DateTimeType, DateType,
        FloatType, IntegerType, ListType, LocalDateTimeType, LocalTimeType, MapType, NodeType,
        NumeralType, PathType, PointType, PropertyType, QueryConvertible, RelationshipType,
        StringType, StructuralType, TimeType,
    };
    pub use crate::value::{Collection, Value};
}
