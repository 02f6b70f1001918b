use serde::{Deserialize, Serialize};

/// Counts reported after joining one collection.
///
/// Every geometry in the collection matched (a miss aborts the run), so
/// `geometries` is both the number processed and the number enriched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct JoinSummary {
    pub geometries: usize,
    pub features: usize,
}
