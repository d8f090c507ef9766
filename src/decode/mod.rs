//! Tabular response decoder
//!
//! Converts the API's positional result sets into typed records.
//!
//! # Overview
//!
//! - [`LooseValue`] models one untyped cell; [`coerce_int`],
//!   [`coerce_float`] and [`coerce_string`] turn it into a primitive.
//! - [`StatsEnvelope`] holds the named [`ResultSet`]s of a response and
//!   resolves them by name, by position, or by name with positional fallback.
//! - [`Record`] types describe a result set as a column map; they are
//!   normally declared with [`stats_record!`](crate::stats_record) and
//!   decoded with [`decode_records`].

mod mapper;
mod types;
mod value;

pub use mapper::{decode_records, decode_rows, map_rows};
pub use types::{
    cell, min_columns, Coercion, DynRecord, Field, FromLoose, Lookup, Record, ResultSet, Scalar,
    StatsEnvelope,
};
pub use value::{
    coerce_float, coerce_float_with, coerce_int, coerce_int_with, coerce_string, LooseValue,
    NumericStrings,
};
