//! Decoder types and traits
//!
//! Defines the tabular envelope returned by the stats API and the
//! abstractions used to project its rows onto typed records.

use super::value::{coerce_float_with, coerce_int_with, coerce_string, LooseValue, NumericStrings};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

// ============================================================================
// Envelope
// ============================================================================

/// One named table of a stats response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Result set name, e.g. `PlayerStats`
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Column headers in row order
    #[serde(default, deserialize_with = "nullable_items")]
    pub headers: Vec<String>,
    /// Rows; nothing guarantees a row is as long as `headers`. A `null` row
    /// reads as an empty one.
    #[serde(default, rename = "rowSet", deserialize_with = "nullable_items")]
    pub row_set: Vec<Vec<LooseValue>>,
}

/// The generic response envelope shared by every stats endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsEnvelope {
    /// Resource name echoed by the API
    #[serde(default)]
    pub resource: Option<String>,
    /// Request parameters echoed by the API
    #[serde(default)]
    pub parameters: Option<Value>,
    /// All result sets, in API order
    #[serde(default, rename = "resultSets", deserialize_with = "nullable_items")]
    pub result_sets: Vec<ResultSet>,
}

/// Read an explicit `null` the same way as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A list that may be `null` and whose items may each be `null`
fn nullable_items<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let items: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// How an endpoint locates a result set inside the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// By name; when several sets share the name the last one wins
    Name(&'a str),
    /// By 0-based position
    Index(usize),
    /// By name, falling back to the position when no set carries the name
    NameOrIndex(&'a str, usize),
}

// ============================================================================
// Column maps
// ============================================================================

/// Target type of a positional field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coercion {
    Int,
    Float,
    Text,
}

/// One entry of a declarative column map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// API column name
    pub name: &'static str,
    /// Position of the column within a row
    pub index: usize,
    /// How the cell is coerced
    pub kind: Coercion,
}

impl Field {
    pub const fn new(name: &'static str, index: usize, kind: Coercion) -> Self {
        Self { name, index, kind }
    }
}

/// Number of leading columns a row needs to populate every field
pub const fn min_columns(fields: &[Field]) -> usize {
    let mut min = 0;
    let mut i = 0;
    while i < fields.len() {
        if fields[i].index + 1 > min {
            min = fields[i].index + 1;
        }
        i += 1;
    }
    min
}

/// Rust types a cell can be coerced into
pub trait FromLoose: Sized {
    /// Coercion kind recorded in column maps
    const KIND: Coercion;

    /// Coerce a cell; never fails
    fn from_loose(value: &LooseValue, strings: NumericStrings) -> Self;
}

impl FromLoose for i64 {
    const KIND: Coercion = Coercion::Int;

    fn from_loose(value: &LooseValue, strings: NumericStrings) -> Self {
        coerce_int_with(value, strings)
    }
}

impl FromLoose for f64 {
    const KIND: Coercion = Coercion::Float;

    fn from_loose(value: &LooseValue, strings: NumericStrings) -> Self {
        coerce_float_with(value, strings)
    }
}

impl FromLoose for String {
    const KIND: Coercion = Coercion::Text;

    fn from_loose(value: &LooseValue, _strings: NumericStrings) -> Self {
        coerce_string(value)
    }
}

/// A typed projection of one result-set row
///
/// Usually implemented through [`stats_record!`](crate::stats_record).
pub trait Record: Sized {
    /// Documented name of the result set holding these rows
    const NAME: &'static str;

    /// Column map, in declaration order
    const FIELDS: &'static [Field];

    /// Rows shorter than this are dropped
    fn min_columns() -> usize {
        min_columns(Self::FIELDS)
    }

    /// Build a record from a row; cells past the end of the row read as null
    fn from_row(row: &[LooseValue], strings: NumericStrings) -> Self;
}

/// Read a cell, treating out-of-range positions as null
pub fn cell(row: &[LooseValue], index: usize) -> &LooseValue {
    static NULL: LooseValue = LooseValue::Null;
    row.get(index).unwrap_or(&NULL)
}

// ============================================================================
// Untyped records
// ============================================================================

/// A coerced cell of an untyped record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Coerce a cell according to `kind`
    pub fn coerce(value: &LooseValue, kind: Coercion, strings: NumericStrings) -> Self {
        match kind {
            Coercion::Int => Scalar::Int(coerce_int_with(value, strings)),
            Coercion::Float => Scalar::Float(coerce_float_with(value, strings)),
            Coercion::Text => Scalar::Text(coerce_string(value)),
        }
    }
}

/// A record built from a runtime column map, keyed by column name
pub type DynRecord = BTreeMap<&'static str, Scalar>;

// ============================================================================
// Accessors
// ============================================================================

impl ResultSet {
    /// Position of a header, if present
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Fields whose declared position disagrees with the advertised headers
    ///
    /// Returned as `(index, declared, advertised)`; an index past the end of
    /// `headers` reports an empty advertised name. Diagnostic only.
    pub fn header_mismatches<'a>(&'a self, fields: &[Field]) -> Vec<(usize, &'static str, &'a str)> {
        fields
            .iter()
            .filter_map(|field| {
                let advertised = self.headers.get(field.index).map_or("", String::as_str);
                (advertised != field.name).then_some((field.index, field.name, advertised))
            })
            .collect()
    }

    /// Rows as header-keyed JSON objects
    ///
    /// Cells without a header are dropped, headers without a cell are
    /// omitted from that row's object.
    pub fn to_objects(&self) -> Vec<Map<String, Value>> {
        self.row_set
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .zip(row)
                    .map(|(header, value)| {
                        let json = serde_json::to_value(value).unwrap_or(Value::Null);
                        (header.clone(), json)
                    })
                    .collect()
            })
            .collect()
    }
}

impl StatsEnvelope {
    /// Locate a result set
    pub fn result_set(&self, lookup: Lookup<'_>) -> Option<&ResultSet> {
        match lookup {
            Lookup::Name(name) => self.result_sets.iter().rev().find(|set| set.name == name),
            Lookup::Index(index) => self.result_sets.get(index),
            Lookup::NameOrIndex(name, index) => {
                self.result_set(Lookup::Name(name)).or_else(|| {
                    let set = self.result_sets.get(index);
                    if let Some(set) = set {
                        debug!(
                            expected = name,
                            found = %set.name,
                            index,
                            "Result set name not present, using position"
                        );
                    }
                    set
                })
            }
        }
    }

    /// Names of all result sets, in API order
    pub fn result_set_names(&self) -> Vec<&str> {
        self.result_sets.iter().map(|set| set.name.as_str()).collect()
    }
}
