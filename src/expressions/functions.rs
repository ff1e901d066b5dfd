//! Function calls.
//!
//! A call is a signature template with one `%s` slot per parameter. The
//! rendered parameters are substituted in order, so the template alone
//! decides the surrounding syntax:
//!
//! ```text
//! exists(%s)                      ->  exists(n.name)
//! none(%s IN %s WHERE %s)         ->  none(x IN list WHERE (x > 1))
//! collect(DISTINCT %s)            ->  collect(DISTINCT n)
//! ```
//!
//! `%%` in a template renders a literal `%`.
//!
//! [`Procedure`] holds the constructors; each returns a node typed with the
//! capabilities of the function's result.

use std::sync::Arc;

use tracing::debug;

use crate::cast::{to_any_type, BooleanArg, IntoExpression, ListArg, MapArg};
use crate::error::{Result, TypeMismatch};
use crate::escape::is_valid_function_name;
use crate::expressions::Variable;
use crate::types::{AnyType, Capability, QueryConvertible};
use crate::value::Value;

/// A call rendered from a signature template.
///
/// Functions this crate has no dedicated type for are built through
/// [`Procedure::raw`]. Their result type is unknown, so they carry every
/// property and composite capability.
#[derive(Debug, Clone)]
pub struct FunctionCall {
    signature: String,
    parameters: Vec<Arc<dyn AnyType>>,
}

impl FunctionCall {
    /// Builds a call, checking that the template has one slot per parameter.
    pub fn new<T: Into<Value>>(
        signature: impl Into<String>,
        parameters: impl IntoIterator<Item = T>,
    ) -> Result<Self> {
        let signature = signature.into();
        let parameters: Vec<Arc<dyn AnyType>> = parameters.into_iter().map(to_any_type).collect();
        let slots = count_slots(&signature);
        if slots != parameters.len() {
            let expected = format!("{} parameters", slots);
            return Err(TypeMismatch::new(
                "parameters",
                &[expected.as_str()],
                format!("{} parameters", parameters.len()),
            ));
        }
        Ok(Self::unchecked(signature, parameters))
    }

    pub(crate) fn unchecked(signature: impl Into<String>, parameters: Vec<Arc<dyn AnyType>>) -> Self {
        FunctionCall {
            signature: signature.into(),
            parameters,
        }
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn parameters(&self) -> &[Arc<dyn AnyType>] {
        &self.parameters
    }
}

fn count_slots(signature: &str) -> usize {
    let mut slots = 0;
    let mut chars = signature.chars();
    while let Some(c) = chars.next() {
        if c == '%' && chars.next() == Some('s') {
            slots += 1;
        }
    }
    slots
}

impl QueryConvertible for FunctionCall {
    fn to_query(&self) -> String {
        let mut rendered = String::with_capacity(self.signature.len());
        let mut parameters = self.parameters.iter();
        let mut chars = self.signature.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                rendered.push(c);
                continue;
            }
            match chars.next() {
                Some('s') => {
                    if let Some(parameter) = parameters.next() {
                        rendered.push_str(&parameter.to_query());
                    }
                }
                Some('%') => rendered.push('%'),
                Some(other) => {
                    rendered.push('%');
                    rendered.push(other);
                }
                None => rendered.push('%'),
            }
        }
        rendered
    }
}

capabilities!(FunctionCall => [
    property, comparable, boolean, numeral, integer, float, string,
    date, datetime, localdatetime, localtime, time, point,
    composite, list, map,
]);

/// Defines a typed wrapper around a [`FunctionCall`].
macro_rules! procedure {
    ($(#[$meta:meta])* $name:ident => [$($cap:ident),*]) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            call: FunctionCall,
        }

        impl $name {
            pub fn call(&self) -> &FunctionCall {
                &self.call
            }
        }

        impl QueryConvertible for $name {
            fn to_query(&self) -> String {
                self.call.to_query()
            }
        }

        capabilities!($name => [$($cap),*]);
    };
}

/// Temporal and spatial constructors take an optional string or map.
macro_rules! temporal {
    ($(#[$meta:meta])* $name:ident, $function:literal => [$($cap:ident),*]) => {
        procedure!($(#[$meta])* $name => [$($cap),*]);

        impl $name {
            pub(crate) fn of(argument: Option<Arc<dyn AnyType>>) -> Self {
                let call = match argument {
                    Some(argument) => FunctionCall::unchecked(concat!($function, "(%s)"), vec![argument]),
                    None => FunctionCall::unchecked(concat!($function, "()"), Vec::new()),
                };
                $name { call }
            }
        }
    };
}

procedure!(
    /// `exists(expression)`
    Exists => [property, boolean]
);
procedure!(
    /// `isEmpty(expression)` over a list, map or string.
    IsEmpty => [property, boolean]
);

temporal!(
    /// `date(...)`
    Date, "date" => [property, comparable, date]
);
temporal!(
    /// `datetime(...)`
    DateTime, "datetime" => [property, comparable, datetime]
);
temporal!(
    /// `localdatetime(...)`
    LocalDateTime, "localdatetime" => [property, comparable, localdatetime]
);
temporal!(
    /// `localtime(...)`
    LocalTime, "localtime" => [property, comparable, localtime]
);
temporal!(
    /// `time(...)`
    Time, "time" => [property, comparable, time]
);
temporal!(
    /// `point(...)`
    Point, "point" => [property, point]
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    All,
    Any,
    None,
    Single,
}

impl Quantifier {
    pub fn name(self) -> &'static str {
        match self {
            Quantifier::All => "all",
            Quantifier::Any => "any",
            Quantifier::None => "none",
            Quantifier::Single => "single",
        }
    }
}

/// `all|any|none|single(variable IN list WHERE predicate)`
#[derive(Debug, Clone)]
pub struct ListPredicate {
    quantifier: Quantifier,
    call: FunctionCall,
}

impl ListPredicate {
    pub fn new(
        quantifier: Quantifier,
        variable: impl Into<Variable>,
        list: impl Into<ListArg>,
        predicate: impl Into<BooleanArg>,
    ) -> Self {
        let variable: Arc<dyn AnyType> = Arc::new(Into::<Variable>::into(variable));
        let parameters = vec![
            variable,
            Into::<ListArg>::into(list).into_expression(),
            Into::<BooleanArg>::into(predicate).into_expression(),
        ];
        ListPredicate {
            quantifier,
            call: FunctionCall::unchecked(format!("{}(%s IN %s WHERE %s)", quantifier.name()), parameters),
        }
    }

    pub fn quantifier(&self) -> Quantifier {
        self.quantifier
    }

    pub fn call(&self) -> &FunctionCall {
        &self.call
    }
}

impl QueryConvertible for ListPredicate {
    fn to_query(&self) -> String {
        self.call.to_query()
    }
}

capabilities!(ListPredicate => [property, boolean]);

/// `collect(expression)` or `collect(DISTINCT expression)`
#[derive(Debug, Clone)]
pub struct Collect {
    distinct: bool,
    call: FunctionCall,
}

impl Collect {
    pub fn new(expression: impl Into<Value>, distinct: bool) -> Self {
        let signature = if distinct { "collect(DISTINCT %s)" } else { "collect(%s)" };
        Collect {
            distinct,
            call: FunctionCall::unchecked(signature, vec![to_any_type(expression)]),
        }
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    pub fn call(&self) -> &FunctionCall {
        &self.call
    }
}

impl QueryConvertible for Collect {
    fn to_query(&self) -> String {
        self.call.to_query()
    }
}

capabilities!(Collect => [composite, list]);

// ============================================================================
// Procedure
// ============================================================================

/// Constructors for the built-in functions.
///
/// ```
/// use cypher_dsl::prelude::*;
///
/// let x = Variable::new("x");
/// let none = Procedure::none("x", vec![1, 2], x.gt(1));
/// assert_eq!(none.to_query(), "none(x IN [1, 2] WHERE (x > 1))");
///
/// let count = Procedure::raw("count", [Variable::new("n")]).unwrap();
/// assert_eq!(count.to_query(), "count(n)");
/// ```
pub struct Procedure;

impl Procedure {
    pub fn all(
        variable: impl Into<Variable>,
        list: impl Into<ListArg>,
        predicate: impl Into<BooleanArg>,
    ) -> ListPredicate {
        ListPredicate::new(Quantifier::All, variable, list, predicate)
    }

    pub fn any(
        variable: impl Into<Variable>,
        list: impl Into<ListArg>,
        predicate: impl Into<BooleanArg>,
    ) -> ListPredicate {
        ListPredicate::new(Quantifier::Any, variable, list, predicate)
    }

    pub fn none(
        variable: impl Into<Variable>,
        list: impl Into<ListArg>,
        predicate: impl Into<BooleanArg>,
    ) -> ListPredicate {
        ListPredicate::new(Quantifier::None, variable, list, predicate)
    }

    pub fn single(
        variable: impl Into<Variable>,
        list: impl Into<ListArg>,
        predicate: impl Into<BooleanArg>,
    ) -> ListPredicate {
        ListPredicate::new(Quantifier::Single, variable, list, predicate)
    }

    pub fn exists(expression: impl Into<Value>) -> Exists {
        Exists {
            call: FunctionCall::unchecked("exists(%s)", vec![to_any_type(expression)]),
        }
    }

    /// Accepts a list, map or string; native strings and collections are
    /// wrapped first.
    pub fn is_empty(expression: impl Into<Value>) -> Result<IsEmpty> {
        let expression = expression.into();
        let actual = expression.type_name();
        let accepted = match &expression {
            Value::String(_) | Value::Collection(_) => true,
            Value::Expression(node) => [Capability::List, Capability::Map, Capability::String]
                .into_iter()
                .any(|capability| node.has_capability(capability)),
            _ => false,
        };
        if !accepted {
            return Err(TypeMismatch::new(
                "list",
                &["ListType", "MapType", "StringType", "array", "string"],
                actual,
            ));
        }
        Ok(IsEmpty {
            call: FunctionCall::unchecked("isEmpty(%s)", vec![to_any_type(expression)]),
        })
    }

    pub fn collect(expression: impl Into<Value>) -> Collect {
        Collect::new(expression, false)
    }

    pub fn collect_distinct(expression: impl Into<Value>) -> Collect {
        Collect::new(expression, true)
    }

    /// `date()`, the current date.
    pub fn date() -> Date {
        Date::of(None)
    }

    /// `date(value)` where `value` is a string or map.
    pub fn date_from(value: impl Into<Value>) -> Result<Date> {
        temporal_argument(value).map(|argument| Date::of(Some(argument)))
    }

    pub fn datetime() -> DateTime {
        DateTime::of(None)
    }

    pub fn datetime_from(value: impl Into<Value>) -> Result<DateTime> {
        temporal_argument(value).map(|argument| DateTime::of(Some(argument)))
    }

    pub fn localdatetime() -> LocalDateTime {
        LocalDateTime::of(None)
    }

    pub fn localdatetime_from(value: impl Into<Value>) -> Result<LocalDateTime> {
        temporal_argument(value).map(|argument| LocalDateTime::of(Some(argument)))
    }

    pub fn localtime() -> LocalTime {
        LocalTime::of(None)
    }

    pub fn localtime_from(value: impl Into<Value>) -> Result<LocalTime> {
        temporal_argument(value).map(|argument| LocalTime::of(Some(argument)))
    }

    pub fn time() -> Time {
        Time::of(None)
    }

    pub fn time_from(value: impl Into<Value>) -> Result<Time> {
        temporal_argument(value).map(|argument| Time::of(Some(argument)))
    }

    /// `point(map)`
    pub fn point(map: impl Into<MapArg>) -> Point {
        Point::of(Some(Into::<MapArg>::into(map).into_expression()))
    }

    /// Calls an arbitrary function: `name(p1, p2, …)`.
    pub fn raw<T: Into<Value>>(
        name: &str,
        parameters: impl IntoIterator<Item = T>,
    ) -> Result<FunctionCall> {
        if !is_valid_function_name(name) {
            debug!(name, "rejecting function name");
            return Err(TypeMismatch::new("functionName", &["function name"], "string"));
        }
        let parameters: Vec<Arc<dyn AnyType>> = parameters.into_iter().map(to_any_type).collect();
        let slots = vec!["%s"; parameters.len()].join(", ");
        Ok(FunctionCall::unchecked(format!("{}({})", name, slots), parameters))
    }
}

/// Strings and maps, native or typed.
fn temporal_argument(value: impl Into<Value>) -> Result<Arc<dyn AnyType>> {
    let value = value.into();
    let actual = value.type_name();
    match value {
        Value::String(_) => Ok(to_any_type(value)),
        Value::Collection(collection) => Ok(MapArg::Collection(collection).into_expression()),
        Value::Expression(node)
            if node.has_capability(Capability::String) || node.has_capability(Capability::Map) =>
        {
            Ok(node)
        }
        _ => Err(TypeMismatch::new(
            "value",
            &["StringType", "MapType", "string", "array"],
            actual,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_substitution() {
        let call = FunctionCall::new("none(%s IN %s WHERE %s)", [
            Value::from(Variable::new("x")),
            Value::from(Variable::new("list")),
            Value::from(true),
        ])
        .unwrap();
        assert_eq!(call.to_query(), "none(x IN list WHERE true)");
    }

    #[test]
    fn test_percent_escape() {
        let call = FunctionCall::new("format('%%', %s)", [1]).unwrap();
        assert_eq!(call.to_query(), "format('%', 1)");
    }

    #[test]
    fn test_slot_count_mismatch() {
        let err = FunctionCall::new("f(%s, %s)", [1]).err().unwrap();
        assert_eq!(err.parameter, "parameters");
    }

    #[test]
    fn test_collect_distinct_flag() {
        let n = Variable::new("n");
        assert_eq!(Procedure::collect(n.clone()).to_query(), "collect(n)");
        assert_eq!(Procedure::collect_distinct(n).to_query(), "collect(DISTINCT n)");
    }

    #[test]
    fn test_raw_rejects_bad_name() {
        let err = Procedure::raw("drop(x)", Vec::<Value>::new()).err().unwrap();
        assert_eq!(err.parameter, "functionName");
    }

    #[test]
    fn test_raw_no_parameters() {
        assert_eq!(Procedure::raw("rand", Vec::<Value>::new()).unwrap().to_query(), "rand()");
    }

    #[test]
    fn test_temporal_without_argument() {
        assert_eq!(Procedure::date().to_query(), "date()");
        assert_eq!(Procedure::localtime().to_query(), "localtime()");
    }

    #[test]
    fn test_temporal_from_string() {
        assert_eq!(Procedure::date_from("2024-01-01").unwrap().to_query(), "date('2024-01-01')");
    }

    #[test]
    fn test_temporal_rejects_integer() {
        let err = Procedure::time_from(12).err().unwrap();
        assert_eq!(err.parameter, "value");
        assert_eq!(err.actual, "int");
    }

    #[test]
    fn test_is_empty_rejects_integer() {
        assert!(Procedure::is_empty(3).is_err());
        assert_eq!(Procedure::is_empty(vec![1]).unwrap().to_query(), "isEmpty([1])");
    }
}
