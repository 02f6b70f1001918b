//! state-props — attach state names to a topology's `states` collection.
//!
//! Reads a topology document on stdin and the state shapefile named on the
//! command line, then writes the enriched topology to stdout:
//!
//! ```text
//! state-props tl_2023_us_state.shp < states-topo.json > states-named.json
//! ```
//!
//! Any failure (unreadable shapefile, malformed topology, a geometry with no
//! matching feature) exits non-zero with nothing on stdout.

use clap::Parser;
use topojoin_cli::args::StateArgs;
use topojoin_cli::{logging, pipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = StateArgs::parse();
    logging::init();

    pipeline::run_state_pipeline(tokio::io::stdin(), tokio::io::stdout(), &args.state_shapefile)
        .await
}
