// crates/topojoin-core/src/topology.rs

//! # Topology Document
//!
//! A pre-built topology is held as raw JSON so that everything the joiner
//! does not touch (`type`, `arcs`, `transform`, `bbox`, sibling object
//! collections, ...) rides through to the output exactly as it arrived.
//! Only the collection being joined is lifted into typed structs, mutated,
//! and written back into the document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{JoinError, Result};

/// A topology document, fully materialized in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology(Value);

impl Topology {
    /// Decodes a fully buffered JSON document.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(Self(serde_json::from_str(text)?))
    }

    /// Detaches the named geometry collection from `objects`.
    ///
    /// The caller is expected to hand the collection back via
    /// [`Topology::put_collection`]; a document observed between the two
    /// calls has a hole where the collection was.
    pub fn take_collection(&mut self, name: &str) -> Result<GeometryCollection> {
        let slot = self
            .0
            .get_mut("objects")
            .and_then(Value::as_object_mut)
            .and_then(|objects| objects.get_mut(name))
            .ok_or_else(|| JoinError::MissingCollection(name.to_string()))?;
        Ok(serde_json::from_value(slot.take())?)
    }

    /// Reattaches a collection detached with [`Topology::take_collection`].
    pub fn put_collection(&mut self, name: &str, collection: GeometryCollection) -> Result<()> {
        let objects = self
            .0
            .get_mut("objects")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| JoinError::MissingCollection(name.to_string()))?;
        objects.insert(name.to_string(), serde_json::to_value(collection)?);
        Ok(())
    }

    /// Serializes the whole document as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Borrows the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Topology {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// An ordered sequence of geometries inside `objects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryCollection {
    pub geometries: Vec<Geometry>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A single geometry record.
///
/// `id` and `properties` are the only members the joiner reads or writes;
/// the shape data itself stays in `rest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl Geometry {
    /// The identifier as a string, if the geometry carries one.
    ///
    /// Feature indexes are keyed by the string `GEOID` column, so a numeric
    /// or absent id can never match and is reported as unmatched by the
    /// joiner.
    pub fn id_str(&self) -> Option<&str> {
        self.id.as_ref().and_then(Value::as_str)
    }
}
