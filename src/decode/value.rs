//! Loosely-typed cell values and their coercions
//!
//! The stats API ships every table cell as an untyped JSON scalar, and the
//! same logical column may arrive as a float, an integer, a string or null
//! depending on the endpoint and season. The coercions here are total: they
//! never fail and never panic.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A single cell of a result-set row
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LooseValue {
    /// Non-integral number, or an integer too large for `i64`
    Number(f64),
    /// Integral number
    Integer(i64),
    /// String cell
    Text(String),
    /// `null`, and any non-scalar JSON (booleans, arrays, objects)
    #[default]
    Null,
}

/// How numeric-looking text is treated by the integer and float coercions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericStrings {
    /// Text always coerces to zero
    #[default]
    Ignore,
    /// Trimmed text is parsed; unparsable text coerces to zero
    Parse,
}

/// Coerce to an integer, truncating floats toward zero
pub fn coerce_int(value: &LooseValue) -> i64 {
    coerce_int_with(value, NumericStrings::Ignore)
}

/// Coerce to an integer with explicit handling of numeric text
pub fn coerce_int_with(value: &LooseValue, strings: NumericStrings) -> i64 {
    match value {
        LooseValue::Number(f) => *f as i64,
        LooseValue::Integer(i) => *i,
        LooseValue::Text(s) => match strings {
            NumericStrings::Ignore => 0,
            NumericStrings::Parse => parse_int(s),
        },
        LooseValue::Null => 0,
    }
}

/// Coerce to a float, widening integers
pub fn coerce_float(value: &LooseValue) -> f64 {
    coerce_float_with(value, NumericStrings::Ignore)
}

/// Coerce to a float with explicit handling of numeric text
pub fn coerce_float_with(value: &LooseValue, strings: NumericStrings) -> f64 {
    match value {
        LooseValue::Number(f) => *f,
        LooseValue::Integer(i) => *i as f64,
        LooseValue::Text(s) => match strings {
            NumericStrings::Ignore => 0.0,
            NumericStrings::Parse => s.trim().parse().unwrap_or(0.0),
        },
        LooseValue::Null => 0.0,
    }
}

/// Coerce to a string
///
/// Floats are rendered with zero decimal places, so `42.7` becomes `"43"`.
/// Count-like columns shipped as floats rely on this whole-number rendering.
pub fn coerce_string(value: &LooseValue) -> String {
    match value {
        LooseValue::Text(s) => s.clone(),
        LooseValue::Number(f) => format!("{f:.0}"),
        LooseValue::Integer(i) => i.to_string(),
        LooseValue::Null => String::new(),
    }
}

fn parse_int(text: &str) -> i64 {
    let text = text.trim();
    text.parse::<i64>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().map(|f| f as i64))
        .unwrap_or(0)
}

impl LooseValue {
    /// Whether the cell is null (or was a non-scalar JSON value)
    pub fn is_null(&self) -> bool {
        matches!(self, LooseValue::Null)
    }
}

impl From<f64> for LooseValue {
    fn from(value: f64) -> Self {
        LooseValue::Number(value)
    }
}

impl From<i64> for LooseValue {
    fn from(value: i64) -> Self {
        LooseValue::Integer(value)
    }
}

impl From<&str> for LooseValue {
    fn from(value: &str) -> Self {
        LooseValue::Text(value.to_string())
    }
}

impl From<String> for LooseValue {
    fn from(value: String) -> Self {
        LooseValue::Text(value)
    }
}

impl<T: Into<LooseValue>> From<Option<T>> for LooseValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(LooseValue::Null, Into::into)
    }
}

impl Serialize for LooseValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LooseValue::Number(f) => serializer.serialize_f64(*f),
            LooseValue::Integer(i) => serializer.serialize_i64(*i),
            LooseValue::Text(s) => serializer.serialize_str(s),
            LooseValue::Null => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for LooseValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LooseValueVisitor)
    }
}

struct LooseValueVisitor;

impl<'de> Visitor<'de> for LooseValueVisitor {
    type Value = LooseValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(LooseValue::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(v).map_or(LooseValue::Number(v as f64), LooseValue::Integer))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(LooseValue::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(LooseValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(LooseValue::Text(v))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(LooseValue::Null)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(LooseValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(LooseValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        Ok(LooseValue::Null)
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
        Ok(LooseValue::Null)
    }
}
