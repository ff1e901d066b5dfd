//! Binary and unary operators.
//!
//! Each operator is its own type so it can carry the capabilities of its
//! result: `a + b` is a numeral, `a > b` a boolean. The operand unions of
//! the constructor decide what may appear on either side; natives are
//! wrapped in literals on the way in.
//!
//! | Family      | Operators                                   | Operands    | Result   |
//! |-------------|---------------------------------------------|-------------|----------|
//! | arithmetic  | `+ - * / % ^`                               | numeral     | numeral  |
//! | boolean     | `AND OR XOR`                                | boolean     | boolean  |
//! | equality    | `= <>`                                      | any         | boolean  |
//! | ordering    | `> >= < <=`                                 | comparable  | boolean  |
//! | string      | `CONTAINS`, `STARTS WITH`, `ENDS WITH`, `=~` | string      | boolean  |
//! | membership  | `IN`                                        | any, list   | boolean  |
//! | unary       | `NOT`, `-`                                  | boolean, numeral | same |
//! | null tests  | `IS NULL`, `IS NOT NULL`                    | any         | boolean  |

use std::sync::Arc;

use crate::cast::{BooleanArg, ComparableArg, IntoExpression, ListArg, NumeralArg, StringArg};
use crate::types::{AnyType, QueryConvertible};
use crate::value::Value;

/// Shared shape of every binary operator.
#[derive(Debug, Clone)]
pub struct BinaryOperator {
    operator: &'static str,
    left: Arc<dyn AnyType>,
    right: Arc<dyn AnyType>,
    insert_parentheses: bool,
}

impl BinaryOperator {
    fn new(
        operator: &'static str,
        left: Arc<dyn AnyType>,
        right: Arc<dyn AnyType>,
        insert_parentheses: bool,
    ) -> Self {
        BinaryOperator {
            operator,
            left,
            right,
            insert_parentheses,
        }
    }

    pub fn operator(&self) -> &'static str {
        self.operator
    }

    pub fn left(&self) -> &Arc<dyn AnyType> {
        &self.left
    }

    pub fn right(&self) -> &Arc<dyn AnyType> {
        &self.right
    }

    pub fn insert_parentheses(&self) -> bool {
        self.insert_parentheses
    }
}

impl QueryConvertible for BinaryOperator {
    fn to_query(&self) -> String {
        let inner = format!(
            "{} {} {}",
            self.left.to_query(),
            self.operator,
            self.right.to_query()
        );
        if self.insert_parentheses {
            format!("({})", inner)
        } else {
            inner
        }
    }
}

macro_rules! binary_operator {
    ($(#[$meta:meta])* $name:ident, $symbol:literal, $left:ty, $right:ty => [$($cap:ident),*]) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            inner: BinaryOperator,
        }

        impl $name {
            pub fn new(left: impl Into<$left>, right: impl Into<$right>, insert_parentheses: bool) -> Self {
                $name {
                    inner: BinaryOperator::new(
                        $symbol,
                        Into::<$left>::into(left).into_expression(),
                        Into::<$right>::into(right).into_expression(),
                        insert_parentheses,
                    ),
                }
            }

            /// Returns a copy rendered with or without surrounding parentheses.
            pub fn with_parentheses(self, insert_parentheses: bool) -> Self {
                $name {
                    inner: BinaryOperator {
                        insert_parentheses,
                        ..self.inner
                    },
                }
            }

            pub fn operator(&self) -> &BinaryOperator {
                &self.inner
            }

            pub fn left(&self) -> &Arc<dyn AnyType> {
                self.inner.left()
            }

            pub fn right(&self) -> &Arc<dyn AnyType> {
                self.inner.right()
            }
        }

        impl QueryConvertible for $name {
            fn to_query(&self) -> String {
                self.inner.to_query()
            }
        }

        capabilities!($name => [$($cap),*]);
    };
}

// Arithmetic

binary_operator!(Addition, "+", NumeralArg, NumeralArg => [property, comparable, numeral]);
binary_operator!(Subtraction, "-", NumeralArg, NumeralArg => [property, comparable, numeral]);
binary_operator!(Multiplication, "*", NumeralArg, NumeralArg => [property, comparable, numeral]);
binary_operator!(Division, "/", NumeralArg, NumeralArg => [property, comparable, numeral]);
binary_operator!(ModuloDivision, "%", NumeralArg, NumeralArg => [property, comparable, numeral]);
binary_operator!(Exponentiation, "^", NumeralArg, NumeralArg => [property, comparable, numeral]);

// Boolean

binary_operator!(Conjunction, "AND", BooleanArg, BooleanArg => [property, boolean]);
binary_operator!(Disjunction, "OR", BooleanArg, BooleanArg => [property, boolean]);
binary_operator!(ExclusiveDisjunction, "XOR", BooleanArg, BooleanArg => [property, boolean]);

// Comparison

binary_operator!(Equality, "=", Value, Value => [property, boolean]);
binary_operator!(Inequality, "<>", Value, Value => [property, boolean]);
binary_operator!(GreaterThan, ">", ComparableArg, ComparableArg => [property, boolean]);
binary_operator!(GreaterThanOrEqual, ">=", ComparableArg, ComparableArg => [property, boolean]);
binary_operator!(LessThan, "<", ComparableArg, ComparableArg => [property, boolean]);
binary_operator!(LessThanOrEqual, "<=", ComparableArg, ComparableArg => [property, boolean]);

// String matching

binary_operator!(Contains, "CONTAINS", StringArg, StringArg => [property, boolean]);
binary_operator!(StartsWith, "STARTS WITH", StringArg, StringArg => [property, boolean]);
binary_operator!(EndsWith, "ENDS WITH", StringArg, StringArg => [property, boolean]);
binary_operator!(
    /// Regular expression match, `left =~ right`.
    Regex, "=~", StringArg, StringArg => [property, boolean]
);

// Membership

binary_operator!(
    /// `element IN list`
    In, "IN", Value, ListArg => [property, boolean]
);

// ============================================================================
// Unary operators
// ============================================================================

/// Shared shape of every unary operator.
#[derive(Debug, Clone)]
pub struct UnaryOperator {
    operator: &'static str,
    expression: Arc<dyn AnyType>,
    insert_parentheses: bool,
    postfix: bool,
}

impl UnaryOperator {
    pub fn operator(&self) -> &'static str {
        self.operator
    }

    pub fn expression(&self) -> &Arc<dyn AnyType> {
        &self.expression
    }

    pub fn insert_parentheses(&self) -> bool {
        self.insert_parentheses
    }

    pub fn is_postfix(&self) -> bool {
        self.postfix
    }
}

impl QueryConvertible for UnaryOperator {
    fn to_query(&self) -> String {
        let inner = if self.postfix {
            format!("{} {}", self.expression.to_query(), self.operator)
        } else {
            format!("{} {}", self.operator, self.expression.to_query())
        };
        if self.insert_parentheses {
            format!("({})", inner)
        } else {
            inner
        }
    }
}

macro_rules! prefix_operator {
    ($(#[$meta:meta])* $name:ident, $symbol:literal, $arg:ty => [$($cap:ident),*]) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            inner: UnaryOperator,
        }

        impl $name {
            pub fn new(expression: impl Into<$arg>, insert_parentheses: bool) -> Self {
                $name {
                    inner: UnaryOperator {
                        operator: $symbol,
                        expression: Into::<$arg>::into(expression).into_expression(),
                        insert_parentheses,
                        postfix: false,
                    },
                }
            }

            /// Returns a copy rendered with or without surrounding parentheses.
            pub fn with_parentheses(self, insert_parentheses: bool) -> Self {
                $name {
                    inner: UnaryOperator {
                        insert_parentheses,
                        ..self.inner
                    },
                }
            }

            pub fn operator(&self) -> &UnaryOperator {
                &self.inner
            }

            pub fn expression(&self) -> &Arc<dyn AnyType> {
                self.inner.expression()
            }
        }

        impl QueryConvertible for $name {
            fn to_query(&self) -> String {
                self.inner.to_query()
            }
        }

        capabilities!($name => [$($cap),*]);
    };
}

/// Null tests are always parenthesized.
macro_rules! null_test {
    ($(#[$meta:meta])* $name:ident, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            inner: UnaryOperator,
        }

        impl $name {
            pub fn new(expression: impl Into<Value>) -> Self {
                $name {
                    inner: UnaryOperator {
                        operator: $symbol,
                        expression: Into::<Value>::into(expression).into_expression(),
                        insert_parentheses: true,
                        postfix: true,
                    },
                }
            }

            pub fn operator(&self) -> &UnaryOperator {
                &self.inner
            }

            pub fn expression(&self) -> &Arc<dyn AnyType> {
                self.inner.expression()
            }
        }

        impl QueryConvertible for $name {
            fn to_query(&self) -> String {
                self.inner.to_query()
            }
        }

        capabilities!($name => [property, boolean]);
    };
}

prefix_operator!(
    /// `NOT expression`
    Negation, "NOT", BooleanArg => [property, boolean]
);
prefix_operator!(
    /// `- expression`
    UnaryMinus, "-", NumeralArg => [property, comparable, numeral]
);

null_test!(
    /// `(expression IS NULL)`
    IsNull, "IS NULL"
);
null_test!(
    /// `(expression IS NOT NULL)`
    IsNotNull, "IS NOT NULL"
);
