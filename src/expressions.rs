//! # Expression nodes
//!
//! Every node renders itself through
//! [`QueryConvertible`](crate::types::QueryConvertible) and is immutable once
//! built. Children are shared through `Arc`, so the same subexpression can
//! appear in several trees at once and always renders the same way.
//!
//! The submodules:
//!
//! - **[variable]** - named references (`n`, `` `first name` ``)
//! - **[property]** - property access (`n.age`) and assignment (`n.age = 3`)
//! - **[literals]** - booleans, numbers, strings, `NULL`, and the [`Literal`] factory
//! - **[list]** / **[map]** - `[a, b]` and `{k: v}`
//! - **[alias]** - `expr AS name`
//! - **[operators]** - binary and unary operators
//! - **[functions]** - function calls and the [`Procedure`] factory
//!
//! ## Parentheses
//!
//! Operators wrap themselves in parentheses unless built with
//! `insert_parentheses = false`. This keeps precedence explicit without a
//! precedence table:
//!
//! ```
//! use cypher_dsl::prelude::*;
//!
//! let a = Variable::new("a");
//! let sum = a.plus(1).times(2);
//! assert_eq!(sum.to_query(), "((a + 1) * 2)");
//!
//! let bare = a.plus(1).with_parentheses(false);
//! assert_eq!(bare.to_query(), "a + 1");
//! ```

pub mod alias;
pub mod functions;
pub mod list;
pub mod literals;
pub mod map;
pub mod operators;
pub mod property;
pub mod variable;

pub use alias::Alias;
pub use functions::{FunctionCall, Procedure};
pub use list::ExpressionList;
pub use literals::Literal;
pub use map::PropertyMap;
pub use property::{Property, PropertyOwner, PropertyReplacement};
pub use variable::Variable;
