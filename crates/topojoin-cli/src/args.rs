use clap::Parser;
use std::path::PathBuf;

/// Arguments for the state pipeline.
#[derive(Debug, Parser)]
#[command(
    name = "state-props",
    version,
    about = "Attach state names from a shapefile to the `states` collection of a topology read on stdin"
)]
pub struct StateArgs {
    /// Path to the state shapefile (.shp; the sibling .dbf supplies the attributes)
    pub state_shapefile: PathBuf,
}

/// Arguments for the county pipeline.
#[derive(Debug, Parser)]
#[command(
    name = "county-props",
    version,
    about = "Attach county and state names from shapefiles to the `counties` and `states` collections of a topology read on stdin"
)]
pub struct CountyArgs {
    /// Path to the county shapefile
    pub county_shapefile: PathBuf,

    /// Path to the state shapefile
    pub state_shapefile: PathBuf,
}
