//! topojoin-cli
//! ============
//!
//! Command-line pipelines over the `topojoin-core` joiner. This crate ships
//! two thin binaries sharing one driver:
//!
//! - `state-props <state-shapefile>` enriches `objects.states`
//! - `county-props <county-shapefile> <state-shapefile>` enriches
//!   `objects.counties` and `objects.states`
//!
//! Both read a topology document on stdin and write the enriched document to
//! stdout, followed by a newline. Logs go to stderr only, so stdout stays
//! safe to pipe into the next tool:
//!
//! ```text
//! state-props tl_2023_us_state.shp < states-topo.json > states-named.json
//! ```

pub mod args;
pub mod logging;
pub mod pipeline;
