//! Row-to-record mapping
//!
//! Rows are mapped positionally: field N of a record reads cell N of the
//! row. Rows too short for the record are dropped silently, and a missing
//! result set yields an empty list. Neither case is an error.

use super::types::{cell, DynRecord, Field, Lookup, Record, ResultSet, Scalar, StatsEnvelope};
use super::value::NumericStrings;
use tracing::debug;

/// Map every sufficiently long row of a result set to `T`, preserving order
pub fn decode_rows<T: Record>(set: &ResultSet, strings: NumericStrings) -> Vec<T> {
    let min = T::min_columns();
    let records: Vec<T> = set
        .row_set
        .iter()
        .filter(|row| row.len() >= min)
        .map(|row| T::from_row(row, strings))
        .collect();

    let dropped = set.row_set.len() - records.len();
    if dropped > 0 {
        debug!(
            result_set = %set.name,
            dropped,
            min_columns = min,
            "Skipped short rows"
        );
    }

    records
}

/// Locate a result set and decode it with the default coercions
///
/// An absent result set produces an empty list.
pub fn decode_records<T: Record>(envelope: &StatsEnvelope, lookup: Lookup<'_>) -> Vec<T> {
    let Some(set) = envelope.result_set(lookup) else {
        debug!(?lookup, record = T::NAME, "Result set not present");
        return Vec::new();
    };

    if !set.headers.is_empty() {
        let mismatches = set.header_mismatches(T::FIELDS);
        if !mismatches.is_empty() {
            debug!(
                result_set = %set.name,
                record = T::NAME,
                ?mismatches,
                "Headers differ from column map"
            );
        }
    }

    decode_rows(set, NumericStrings::default())
}

/// Map rows using a column map known only at runtime
pub fn map_rows(set: &ResultSet, fields: &'static [Field], strings: NumericStrings) -> Vec<DynRecord> {
    let min = super::types::min_columns(fields);
    set.row_set
        .iter()
        .filter(|row| row.len() >= min)
        .map(|row| {
            fields
                .iter()
                .map(|field| {
                    (
                        field.name,
                        Scalar::coerce(cell(row, field.index), field.kind, strings),
                    )
                })
                .collect()
        })
        .collect()
}

/// Declare a record type together with its column map
///
/// Each line reads `[index] "COLUMN" => field: Type`, where `Type` is one of
/// `i64`, `f64` or `String`. The struct serializes with the API column names.
///
/// ```rust
/// nba_stats::stats_record! {
///     /// One row of the `AvailableSeasons` table
///     pub struct AvailableSeason in "AvailableSeasons" {
///         [0] "SEASON_ID" => season_id: String,
///     }
/// }
/// ```
#[macro_export]
macro_rules! stats_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident in $set:literal {
            $( [$idx:literal] $column:literal => $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
        $vis struct $name {
            $(
                #[serde(rename = $column)]
                pub $field: $ty,
            )*
        }

        impl $crate::decode::Record for $name {
            const NAME: &'static str = $set;

            const FIELDS: &'static [$crate::decode::Field] = &[
                $(
                    $crate::decode::Field::new(
                        $column,
                        $idx,
                        <$ty as $crate::decode::FromLoose>::KIND,
                    ),
                )*
            ];

            fn from_row(
                row: &[$crate::decode::LooseValue],
                strings: $crate::decode::NumericStrings,
            ) -> Self {
                Self {
                    $(
                        $field: <$ty as $crate::decode::FromLoose>::from_loose(
                            $crate::decode::cell(row, $idx),
                            strings,
                        ),
                    )*
                }
            }
        }
    };
}
