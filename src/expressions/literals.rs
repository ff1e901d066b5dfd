//! Leaf nodes wrapping a native scalar, and the [`Literal`] factory.

use std::sync::Arc;

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::error::{Result, TypeMismatch};
use crate::escape::escape_string;
use crate::expressions::functions::{Date, DateTime, LocalDateTime, LocalTime, Point, Time};
use crate::expressions::{ExpressionList, PropertyMap};
use crate::types::{PropertyType, QueryConvertible};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanLiteral {
    value: bool,
}

impl BooleanLiteral {
    pub fn new(value: bool) -> Self {
        BooleanLiteral { value }
    }

    pub fn value(&self) -> bool {
        self.value
    }
}

impl QueryConvertible for BooleanLiteral {
    fn to_query(&self) -> String {
        self.value.to_string()
    }
}

capabilities!(BooleanLiteral => [property, boolean]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerLiteral {
    value: i64,
}

impl IntegerLiteral {
    pub fn new(value: i64) -> Self {
        IntegerLiteral { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl QueryConvertible for IntegerLiteral {
    fn to_query(&self) -> String {
        self.value.to_string()
    }
}

capabilities!(IntegerLiteral => [property, comparable, numeral, integer]);

/// Floating-point literal.
///
/// Finite values render in their shortest round-trip form and always carry
/// a fraction or an exponent, so `2.0` never reads back as an integer.
/// Non-finite values have no literal syntax and render as a `toFloat` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatLiteral {
    value: f64,
}

impl FloatLiteral {
    pub fn new(value: f64) -> Self {
        FloatLiteral { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl QueryConvertible for FloatLiteral {
    fn to_query(&self) -> String {
        if self.value.is_nan() {
            "toFloat('NaN')".to_string()
        } else if self.value.is_infinite() {
            let sign = if self.value > 0.0 { "" } else { "-" };
            format!("toFloat('{}Infinity')", sign)
        } else {
            // Debug keeps a trailing `.0` on integral values
            format!("{:?}", self.value)
        }
    }
}

capabilities!(FloatLiteral => [property, comparable, numeral, float]);

/// Exact decimal literal. The scale is kept: `0.10` renders as `0.10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalLiteral {
    value: Decimal,
}

impl DecimalLiteral {
    pub fn new(value: Decimal) -> Self {
        DecimalLiteral { value }
    }

    pub fn value(&self) -> Decimal {
        self.value
    }
}

impl QueryConvertible for DecimalLiteral {
    fn to_query(&self) -> String {
        if self.value.scale() == 0 {
            format!("{}.0", self.value)
        } else {
            self.value.to_string()
        }
    }
}

capabilities!(DecimalLiteral => [property, comparable, numeral, float]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    value: String,
    double_quotes: bool,
}

impl StringLiteral {
    /// Single-quoted string.
    pub fn new(value: impl Into<String>) -> Self {
        StringLiteral {
            value: value.into(),
            double_quotes: false,
        }
    }

    pub fn double_quoted(value: impl Into<String>) -> Self {
        StringLiteral {
            value: value.into(),
            double_quotes: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_double_quoted(&self) -> bool {
        self.double_quotes
    }
}

impl QueryConvertible for StringLiteral {
    fn to_query(&self) -> String {
        escape_string(&self.value, if self.double_quotes { '"' } else { '\'' })
    }
}

capabilities!(StringLiteral => [property, comparable, string]);

/// `NULL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullLiteral;

impl QueryConvertible for NullLiteral {
    fn to_query(&self) -> String {
        "NULL".to_string()
    }
}

capabilities!(NullLiteral => []);

// ============================================================================
// Factory
// ============================================================================

/// Shorthand constructors for literal nodes.
///
/// ```
/// use cypher_dsl::prelude::*;
/// use chrono::NaiveDate;
///
/// assert_eq!(Literal::string("it's").to_query(), r"'it\'s'");
/// assert_eq!(Literal::float(2.0).to_query(), "2.0");
///
/// let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(Literal::date_ymd(day).to_query(), "date({year: 2024, month: 2, day: 29})");
/// ```
pub struct Literal;

impl Literal {
    pub fn string(value: impl Into<String>) -> StringLiteral {
        StringLiteral::new(value)
    }

    pub fn string_double_quoted(value: impl Into<String>) -> StringLiteral {
        StringLiteral::double_quoted(value)
    }

    pub fn integer(value: i64) -> IntegerLiteral {
        IntegerLiteral::new(value)
    }

    pub fn float(value: f64) -> FloatLiteral {
        FloatLiteral::new(value)
    }

    pub fn decimal(value: Decimal) -> DecimalLiteral {
        DecimalLiteral::new(value)
    }

    pub fn boolean(value: bool) -> BooleanLiteral {
        BooleanLiteral::new(value)
    }

    pub fn null() -> NullLiteral {
        NullLiteral
    }

    /// Picks the literal type matching a native scalar.
    pub fn literal(value: impl Into<Value>) -> Result<Arc<dyn PropertyType>> {
        match value.into() {
            Value::Boolean(value) => Ok(Arc::new(BooleanLiteral::new(value))),
            Value::Integer(value) => Ok(Arc::new(IntegerLiteral::new(value))),
            Value::Float(value) => Ok(Arc::new(FloatLiteral::new(value))),
            Value::Decimal(value) => Ok(Arc::new(DecimalLiteral::new(value))),
            Value::String(value) => Ok(Arc::new(StringLiteral::new(value))),
            other => Err(TypeMismatch::new(
                "literal",
                &["bool", "int", "float", "decimal", "string"],
                other.type_name(),
            )),
        }
    }

    pub fn list<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> ExpressionList {
        ExpressionList::new(values)
    }

    pub fn map<K: Into<String>, V: Into<Value>>(
        properties: impl IntoIterator<Item = (K, V)>,
    ) -> PropertyMap {
        PropertyMap::new(properties)
    }

    /// `date({year: .., month: .., day: ..})`
    pub fn date_ymd(date: NaiveDate) -> Date {
        Date::of(Some(Arc::new(PropertyMap::new(date_components(&date)))))
    }

    /// `datetime({year: .., …, timezone: '+01:00'})`
    pub fn date_time(value: chrono::DateTime<FixedOffset>) -> DateTime {
        let mut components = date_components(&value);
        components.extend(time_components(&value));
        components.push(("timezone", value.offset().to_string().into()));
        DateTime::of(Some(Arc::new(PropertyMap::new(components))))
    }

    /// `localdatetime({year: .., …, second: ..})`
    pub fn local_date_time(value: NaiveDateTime) -> LocalDateTime {
        let mut components = date_components(&value);
        components.extend(time_components(&value));
        LocalDateTime::of(Some(Arc::new(PropertyMap::new(components))))
    }

    /// `localtime({hour: .., minute: .., second: ..})`
    pub fn local_time(value: NaiveTime) -> LocalTime {
        LocalTime::of(Some(Arc::new(PropertyMap::new(time_components(&value)))))
    }

    /// `time({hour: .., minute: .., second: .., timezone: '+01:00'})`
    pub fn time(value: NaiveTime, offset: FixedOffset) -> Time {
        let mut components = time_components(&value);
        components.push(("timezone", offset.to_string().into()));
        Time::of(Some(Arc::new(PropertyMap::new(components))))
    }

    /// Cartesian `point({x: .., y: ..})`
    pub fn point_2d(x: f64, y: f64) -> Point {
        Point::of(Some(Arc::new(PropertyMap::new([("x", x), ("y", y)]))))
    }

    /// Cartesian `point({x: .., y: .., z: ..})`
    pub fn point_3d(x: f64, y: f64, z: f64) -> Point {
        Point::of(Some(Arc::new(PropertyMap::new([("x", x), ("y", y), ("z", z)]))))
    }

    /// Geographic `point({longitude: .., latitude: ..})`
    pub fn point_wgs84(longitude: f64, latitude: f64) -> Point {
        Point::of(Some(Arc::new(PropertyMap::new([
            ("longitude", longitude),
            ("latitude", latitude),
        ]))))
    }
}

fn date_components(date: &impl Datelike) -> Vec<(&'static str, Value)> {
    vec![
        ("year", date.year().into()),
        ("month", i64::from(date.month()).into()),
        ("day", i64::from(date.day()).into()),
    ]
}

fn time_components(time: &impl Timelike) -> Vec<(&'static str, Value)> {
    let mut components = vec![
        ("hour", i64::from(time.hour()).into()),
        ("minute", i64::from(time.minute()).into()),
        ("second", i64::from(time.second()).into()),
    ];
    if time.nanosecond() != 0 {
        components.push(("nanosecond", i64::from(time.nanosecond()).into()));
    }
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_boolean() {
        assert_eq!(Literal::boolean(true).to_query(), "true");
        assert_eq!(Literal::boolean(false).to_query(), "false");
    }

    #[test]
    fn test_integer() {
        assert_eq!(Literal::integer(-7).to_query(), "-7");
    }

    #[test]
    fn test_float_keeps_fraction() {
        assert_eq!(Literal::float(2.0).to_query(), "2.0");
        assert_eq!(Literal::float(1.5).to_query(), "1.5");
        assert_eq!(Literal::float(-0.25).to_query(), "-0.25");
    }

    #[test]
    fn test_float_non_finite() {
        assert_eq!(Literal::float(f64::NAN).to_query(), "toFloat('NaN')");
        assert_eq!(Literal::float(f64::INFINITY).to_query(), "toFloat('Infinity')");
        assert_eq!(Literal::float(f64::NEG_INFINITY).to_query(), "toFloat('-Infinity')");
    }

    #[test]
    fn test_decimal_scale() {
        assert_eq!(Literal::decimal(Decimal::from_str("0.10").unwrap()).to_query(), "0.10");
        assert_eq!(Literal::decimal(Decimal::from(3)).to_query(), "3.0");
    }

    #[test]
    fn test_strings() {
        assert_eq!(Literal::string("a'b").to_query(), r"'a\'b'");
        assert_eq!(Literal::string_double_quoted("a'b").to_query(), "\"a'b\"");
    }

    #[test]
    fn test_null() {
        assert_eq!(Literal::null().to_query(), "NULL");
    }

    #[test]
    fn test_literal_auto_detect() {
        assert_eq!(Literal::literal(3).unwrap().to_query(), "3");
        assert_eq!(Literal::literal("x").unwrap().to_query(), "'x'");
        let err = Literal::literal(vec![1]).err().unwrap();
        assert_eq!(err.parameter, "literal");
        assert_eq!(err.actual, "array");
    }

    #[test]
    fn test_local_time_with_nanoseconds() {
        let time = NaiveTime::from_hms_nano_opt(12, 30, 5, 500).unwrap();
        assert_eq!(
            Literal::local_time(time).to_query(),
            "localtime({hour: 12, minute: 30, second: 5, nanosecond: 500})"
        );
    }

    #[test]
    fn test_date_time_with_offset() {
        let value = chrono::DateTime::parse_from_rfc3339("2021-03-04T05:06:07+01:00").unwrap();
        assert_eq!(
            Literal::date_time(value).to_query(),
            "datetime({year: 2021, month: 3, day: 4, hour: 5, minute: 6, second: 7, timezone: '+01:00'})"
        );
    }

    #[test]
    fn test_points() {
        assert_eq!(Literal::point_2d(1.0, 2.5).to_query(), "point({x: 1.0, y: 2.5})");
        assert_eq!(
            Literal::point_wgs84(4.9, 52.4).to_query(),
            "point({longitude: 4.9, latitude: 52.4})"
        );
    }
}
