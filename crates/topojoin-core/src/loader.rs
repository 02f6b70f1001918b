// crates/topojoin-core/src/loader.rs

//! # Feature Set Loader
//!
//! Handles the physical layer: opening a shapefile on disk and decoding its
//! attribute table into a [`FeatureSet`].

use std::path::Path;

use tracing::debug;

use crate::error::{JoinError, Result};
use crate::feature::{Feature, FeatureSet};

/// Reads the shapefile at `path` and keeps its attribute table.
///
/// The reader decodes shapes and records together (the sibling `.dbf` is
/// located next to the `.shp` automatically); the shapes are dropped on the
/// spot, since the topology being enriched already carries the geometry.
pub fn read_feature_set(path: impl AsRef<Path>) -> Result<FeatureSet> {
    let path = path.as_ref();
    let pairs = shapefile::read(path).map_err(|source| JoinError::Shapefile {
        path: path.to_path_buf(),
        source,
    })?;

    let features = pairs
        .into_iter()
        .map(|(_shape, record)| Feature::from_record(record))
        .collect::<Vec<_>>();
    debug!(path = %path.display(), features = features.len(), "read feature set");

    Ok(FeatureSet::new(features))
}
