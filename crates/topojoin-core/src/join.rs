// crates/topojoin-core/src/join.rs

//! # Attribute Joiner
//!
//! Attaches a display name to every geometry of a named topology collection,
//! given one feature index per collection. This is the whole reason the
//! crate exists; everything around it is input and output plumbing.
//!
//! The contract is all-or-nothing: a geometry whose id has no matching
//! feature aborts the join with [`JoinError::UnmatchedGeometryIdentifier`],
//! and no partially enriched document is ever emitted.

use serde_json::{Map, Value};
use tracing::debug;

use crate::common::JoinSummary;
use crate::error::{JoinError, Result};
use crate::feature::FeatureIndex;
use crate::topology::Topology;

/// Replaces each geometry's `properties` in the named collection with a
/// one-member object `{ <output_field>: <NAME> }` looked up by geometry id.
///
/// Whatever properties a geometry carried before, and whatever other
/// attributes the matching feature carries, are discarded. Geometries are
/// visited in collection order, though the result does not depend on it:
/// each replacement is a pure function of the geometry's id.
pub fn join_collection(
    topology: &mut Topology,
    collection: &str,
    index: &FeatureIndex,
    output_field: &str,
) -> Result<JoinSummary> {
    let mut detached = topology.take_collection(collection)?;

    for geometry in &mut detached.geometries {
        let id = geometry.id_str().ok_or_else(|| unmatched(collection, &geometry.id))?;
        let feature = index
            .get(id)
            .ok_or_else(|| JoinError::UnmatchedGeometryIdentifier {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        let name = feature
            .get("NAME")
            .filter(|value| !value.is_null())
            .cloned()
            .ok_or_else(|| JoinError::MissingDisplayName {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        let mut properties = Map::with_capacity(1);
        properties.insert(output_field.to_string(), name);
        geometry.properties = Some(Value::Object(properties));
    }

    let summary = JoinSummary {
        geometries: detached.geometries.len(),
        features: index.len(),
    };
    topology.put_collection(collection, detached)?;

    debug!(
        collection,
        geometries = summary.geometries,
        features = summary.features,
        "joined display names"
    );
    Ok(summary)
}

fn unmatched(collection: &str, id: &Option<Value>) -> JoinError {
    JoinError::UnmatchedGeometryIdentifier {
        collection: collection.to_string(),
        id: id.clone().unwrap_or(Value::Null).to_string(),
    }
}
