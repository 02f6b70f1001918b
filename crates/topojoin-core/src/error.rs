// crates/topojoin-core/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading inputs or joining attributes.
///
/// Nothing here is recoverable: any variant aborts the run before a single
/// output byte is written, so downstream consumers never see a half-enriched
/// document.
#[derive(Debug, Error)]
pub enum JoinError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("topology is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read feature set at {}: {source}", path.display())]
    Shapefile {
        path: PathBuf,
        source: shapefile::Error,
    },

    #[error("topology has no object collection named `{0}`")]
    MissingCollection(String),

    #[error("no feature matches geometry id {id} in collection `{collection}`")]
    UnmatchedGeometryIdentifier { collection: String, id: String },

    #[error("feature {id} joined into `{collection}` carries no NAME attribute")]
    MissingDisplayName { collection: String, id: String },
}

pub type Result<T> = std::result::Result<T, JoinError>;
