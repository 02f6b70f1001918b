//! End-to-end pipeline tests.
//!
//! Each test writes a real shapefile into a scratch directory, feeds a
//! topology document through the shared driver, and inspects the emitted
//! JSON (or the absence of it).

use std::io::Cursor;
use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use shapefile::dbase;
use topojoin_cli::pipeline;

/// Writes a shapefile whose attribute table holds one (GEOID, NAME) row per
/// entry. The shapes are placeholder points; the pipeline never reads them.
fn write_shapefile(dir: &Path, stem: &str, rows: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(format!("{stem}.shp"));
    let table = dbase::TableWriterBuilder::new()
        .add_character_field("GEOID".try_into().unwrap(), 16)
        .add_character_field("NAME".try_into().unwrap(), 64);
    let mut writer = shapefile::Writer::from_path(&path, table).unwrap();
    for (geoid, name) in rows {
        let mut record = dbase::Record::default();
        record.insert(
            "GEOID".to_string(),
            dbase::FieldValue::Character(Some((*geoid).to_string())),
        );
        record.insert(
            "NAME".to_string(),
            dbase::FieldValue::Character(Some((*name).to_string())),
        );
        writer
            .write_shape_and_record(&shapefile::Point::new(0.0, 0.0), &record)
            .unwrap();
    }
    path
}

fn states_topology() -> String {
    json!({
        "type": "Topology",
        "objects": {
            "states": {
                "type": "GeometryCollection",
                "geometries": [
                    {"type": "Polygon", "arcs": [[0]], "id": "01"},
                    {"type": "Polygon", "arcs": [[1]], "id": "02"}
                ]
            }
        },
        "arcs": [[[0, 0], [1, 1]], [[1, 1], [2, 2]]]
    })
    .to_string()
}

#[tokio::test]
async fn state_pipeline_attaches_names() {
    let dir = tempfile::tempdir().unwrap();
    let shp = write_shapefile(dir.path(), "states", &[("01", "Alabama"), ("02", "Alaska")]);

    let mut out = Vec::new();
    pipeline::run_state_pipeline(Cursor::new(states_topology()), &mut out, &shp)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with('\n'), "output must end with a single newline");

    let doc: Value = serde_json::from_str(&text).unwrap();
    let geometries = &doc["objects"]["states"]["geometries"];
    assert_eq!(geometries[0]["id"], json!("01"));
    assert_eq!(geometries[0]["properties"], json!({"name": "Alabama"}));
    assert_eq!(geometries[1]["properties"], json!({"name": "Alaska"}));
}

#[tokio::test]
async fn county_pipeline_joins_both_collections() {
    let dir = tempfile::tempdir().unwrap();
    let county_shp = write_shapefile(dir.path(), "counties", &[("01001", "Autauga")]);
    let state_shp = write_shapefile(dir.path(), "states", &[("01", "Alabama")]);

    let topo = json!({
        "type": "Topology",
        "objects": {
            "counties": {"geometries": [{"id": "01001"}]},
            "states": {"geometries": [{"id": "01"}]}
        },
        "arcs": []
    })
    .to_string();

    let mut out = Vec::new();
    pipeline::run_county_pipeline(Cursor::new(topo), &mut out, &county_shp, &state_shp)
        .await
        .unwrap();

    let doc: Value = serde_json::from_slice(&out).unwrap();
    // The county name comes from the county features, untouched by the
    // state join running over the same document.
    assert_eq!(
        doc["objects"]["counties"]["geometries"][0]["properties"],
        json!({"name": "Autauga"})
    );
    assert_eq!(
        doc["objects"]["states"]["geometries"][0]["properties"],
        json!({"name": "Alabama"})
    );
}

#[tokio::test]
async fn malformed_topology_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let shp = write_shapefile(dir.path(), "states", &[("01", "Alabama")]);

    let mut out = Vec::new();
    let result = pipeline::run_state_pipeline(Cursor::new("{not json".to_string()), &mut out, &shp).await;

    assert!(result.is_err());
    assert!(out.is_empty(), "a failed run must not emit anything");
}

#[tokio::test]
async fn unmatched_geometry_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    // "02" is missing, so the matched "01" must not be emitted either.
    let shp = write_shapefile(dir.path(), "states", &[("01", "Alabama")]);

    let mut out = Vec::new();
    let result =
        pipeline::run_state_pipeline(Cursor::new(states_topology()), &mut out, &shp).await;

    assert!(result.is_err());
    assert!(out.is_empty());
}

#[tokio::test]
async fn missing_shapefile_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let shp = dir.path().join("missing.shp");

    let mut out = Vec::new();
    let result =
        pipeline::run_state_pipeline(Cursor::new(states_topology()), &mut out, &shp).await;

    assert!(result.is_err());
    assert!(out.is_empty());
}

#[tokio::test]
async fn untouched_document_members_pass_through() {
    let dir = tempfile::tempdir().unwrap();
    let shp = write_shapefile(dir.path(), "states", &[("01", "Alabama")]);

    let topo = json!({
        "type": "Topology",
        "bbox": [0.0, 0.0, 10.0, 10.0],
        "transform": {"scale": [0.01, 0.01], "translate": [-180.0, -90.0]},
        "objects": {
            "states": {"geometries": [{"id": "01"}]},
            "nation": {"type": "GeometryCollection", "geometries": [{"type": "MultiPolygon", "arcs": []}]}
        },
        "arcs": [[[0, 0], [9999, 9999]]]
    });

    let mut out = Vec::new();
    pipeline::run_state_pipeline(Cursor::new(topo.to_string()), &mut out, &shp)
        .await
        .unwrap();

    let doc: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(doc["type"], topo["type"]);
    assert_eq!(doc["bbox"], topo["bbox"]);
    assert_eq!(doc["transform"], topo["transform"]);
    assert_eq!(doc["arcs"], topo["arcs"]);
    assert_eq!(doc["objects"]["nation"], topo["objects"]["nation"]);
}
