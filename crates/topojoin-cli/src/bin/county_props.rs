//! county-props — attach county and state names to a topology.
//!
//! Reads a topology document on stdin and the two shapefiles named on the
//! command line, joins `objects.counties` against the county attributes and
//! `objects.states` against the state attributes, and writes the enriched
//! topology to stdout:
//!
//! ```text
//! county-props tl_2023_us_county.shp tl_2023_us_state.shp \
//!     < counties-topo.json > counties-named.json
//! ```
//!
//! Any failure (unreadable shapefile, malformed topology, a geometry with no
//! matching feature) exits non-zero with nothing on stdout.

use clap::Parser;
use topojoin_cli::args::CountyArgs;
use topojoin_cli::{logging, pipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = CountyArgs::parse();
    logging::init();

    pipeline::run_county_pipeline(
        tokio::io::stdin(),
        tokio::io::stdout(),
        &args.county_shapefile,
        &args.state_shapefile,
    )
    .await
}
