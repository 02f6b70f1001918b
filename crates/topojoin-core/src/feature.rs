// crates/topojoin-core/src/feature.rs

//! # Feature Sets
//!
//! Attribute rows read from a shapefile's dBASE table, plus the transient
//! `GEOID`-keyed index the joiner looks names up in. The shapes themselves
//! are never kept; the topology already carries the geometry.

use std::collections::HashMap;

use serde_json::{Map, Number, Value};
use shapefile::dbase::{FieldValue, Record};
use tracing::warn;

/// One attribute row. All columns are carried; the joiner only ever reads
/// `GEOID` and `NAME`.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub properties: Map<String, Value>,
}

impl Feature {
    pub fn new(properties: Map<String, Value>) -> Self {
        Self { properties }
    }

    /// Converts a raw dBASE record into JSON-valued properties.
    pub fn from_record(record: Record) -> Self {
        let properties = record
            .into_iter()
            .map(|(name, value)| (name, field_to_json(value)))
            .collect();
        Self { properties }
    }

    /// The feature's identifier, when present as a string column.
    pub fn geoid(&self) -> Option<&str> {
        self.properties.get("GEOID").and_then(Value::as_str)
    }
}

/// The rows of one shapefile, in file order.
#[derive(Debug, Clone, Default)]
pub struct FeatureSet {
    pub features: Vec<Feature>,
}

impl FeatureSet {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Builds the `GEOID → properties` index, consuming the set.
    ///
    /// Later rows sharing a `GEOID` silently overwrite earlier ones. Rows
    /// with no string `GEOID` could never be matched by any geometry and are
    /// dropped with a warning.
    pub fn into_index(self) -> FeatureIndex {
        let mut by_geoid = HashMap::with_capacity(self.features.len());
        for feature in self.features {
            match feature.geoid() {
                Some(geoid) => {
                    by_geoid.insert(geoid.to_string(), feature.properties);
                }
                None => warn!("feature without a GEOID attribute, skipping"),
            }
        }
        FeatureIndex { by_geoid }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Transient lookup from `GEOID` to a feature's properties.
///
/// Built once per run and discarded afterwards; iteration order of the
/// source rows is irrelevant here.
#[derive(Debug, Clone, Default)]
pub struct FeatureIndex {
    by_geoid: HashMap<String, Map<String, Value>>,
}

impl FeatureIndex {
    pub fn get(&self, geoid: &str) -> Option<&Map<String, Value>> {
        self.by_geoid.get(geoid)
    }

    pub fn len(&self) -> usize {
        self.by_geoid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_geoid.is_empty()
    }
}

/// Maps a dBASE field value onto its JSON form.
///
/// Empty dBASE cells decode as `None` and map to JSON null.
fn field_to_json(value: FieldValue) -> Value {
    match value {
        FieldValue::Character(text) => text.map(Value::String).unwrap_or(Value::Null),
        FieldValue::Memo(text) => Value::String(text),
        FieldValue::Numeric(number) => number.map(json_number).unwrap_or(Value::Null),
        FieldValue::Float(number) => number.map(|n| json_number(f64::from(n))).unwrap_or(Value::Null),
        FieldValue::Integer(number) => Value::from(number),
        FieldValue::Double(number) => json_number(number),
        FieldValue::Currency(number) => json_number(number),
        FieldValue::Logical(flag) => flag.map(Value::Bool).unwrap_or(Value::Null),
        FieldValue::Date(date) => date
            .map(|d| Value::String(format!("{:04}-{:02}-{:02}", d.year(), d.month(), d.day())))
            .unwrap_or(Value::Null),
        // DateTime and any future variants have no counterpart in the
        // attribute tables this tool consumes.
        other => Value::String(format!("{other:?}")),
    }
}

fn json_number(number: f64) -> Value {
    Number::from_f64(number).map(Value::Number).unwrap_or(Value::Null)
}
