// crates/topojoin-core/src/lib.rs

pub mod common;
pub mod error;
pub mod feature;
pub mod join;
pub mod loader;
pub mod topology;

// Re-exports
pub use crate::common::JoinSummary;
pub use crate::error::{JoinError, Result};
pub use crate::feature::{Feature, FeatureIndex, FeatureSet};
pub use crate::join::join_collection;
pub use crate::loader::read_feature_set;
pub use crate::topology::{Geometry, GeometryCollection, Topology};
