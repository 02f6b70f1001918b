//! # Pipeline Drivers
//!
//! One driver serves both granularities: acquire the topology and every
//! feature set concurrently, run the joiner per collection once everything
//! is in memory, then emit the enriched document in a single write.
//!
//! Acquisition is fan-out/fan-in with first-error-wins: the topology read
//! and each shapefile load run as independent asynchronous operations, and
//! the join is not attempted until all of them have resolved. A failure in
//! any input aborts the run before anything reaches the output.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use futures::future::try_join_all;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use topojoin_core::{join_collection, read_feature_set, FeatureIndex, Topology};

/// Field attached to every joined geometry's properties.
const OUTPUT_FIELD: &str = "name";

/// One joiner invocation: which collection to enrich from which shapefile.
#[derive(Debug, Clone)]
pub struct JoinSpec {
    pub collection: &'static str,
    pub shapefile: PathBuf,
}

impl JoinSpec {
    pub fn new(collection: &'static str, shapefile: &Path) -> Self {
        Self {
            collection,
            shapefile: shapefile.to_path_buf(),
        }
    }
}

/// State pipeline: join `objects.states` against one state shapefile.
pub async fn run_state_pipeline<R, W>(
    input: R,
    output: W,
    state_shapefile: &Path,
) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    run(input, output, vec![JoinSpec::new("states", state_shapefile)]).await
}

/// County pipeline: join `objects.counties` and `objects.states`, each
/// against its own shapefile. The two joins never interact; they are run
/// back to back over the same document.
pub async fn run_county_pipeline<R, W>(
    input: R,
    output: W,
    county_shapefile: &Path,
    state_shapefile: &Path,
) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    run(
        input,
        output,
        vec![
            JoinSpec::new("counties", county_shapefile),
            JoinSpec::new("states", state_shapefile),
        ],
    )
    .await
}

/// Shared driver behind both pipelines.
pub async fn run<R, W>(input: R, mut output: W, joins: Vec<JoinSpec>) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let started = Instant::now();

    let (mut topology, indexes) = tokio::try_join!(read_topology(input), load_indexes(&joins))?;

    for (spec, index) in joins.iter().zip(indexes.iter()) {
        let summary = join_collection(&mut topology, spec.collection, index, OUTPUT_FIELD)?;
        info!(
            collection = spec.collection,
            geometries = summary.geometries,
            features = summary.features,
            "attached display names"
        );
    }

    // Serialize fully before the first write so a failure cannot leave a
    // truncated document on the output.
    let mut text = topology.to_json()?;
    text.push('\n');
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;

    info!(elapsed_ms = started.elapsed().as_millis() as u64, "topology enriched");
    Ok(())
}

/// Buffers the input stream to EOF, then decodes it.
async fn read_topology<R>(mut input: R) -> anyhow::Result<Topology>
where
    R: AsyncRead + Unpin,
{
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .await
        .context("reading topology document")?;
    debug!(bytes = text.len(), "buffered topology document");
    Ok(Topology::parse(&text)?)
}

async fn load_indexes(joins: &[JoinSpec]) -> anyhow::Result<Vec<FeatureIndex>> {
    try_join_all(joins.iter().map(|spec| load_index(spec.shapefile.clone()))).await
}

async fn load_index(path: PathBuf) -> anyhow::Result<FeatureIndex> {
    // Shapefile decoding is blocking work; keep it off the I/O thread.
    let set = tokio::task::spawn_blocking(move || read_feature_set(&path))
        .await
        .context("feature-set loader task failed")??;
    Ok(set.into_index())
}
