//! Reads the debug edge-table CSV format: one row per edge, with a small
//! hand-rolled parser for the bracketed `geometry` column (no `serde_json`
//! dependency for one column shape).

use serde::Deserialize;
use std::path::Path;

#[derive(Debug)]
pub enum CsvIngestError {
    Csv(csv::Error),
    Geometry(String),
}

impl From<csv::Error> for CsvIngestError {
    fn from(value: csv::Error) -> Self {
        CsvIngestError::Csv(value)
    }
}

#[derive(Debug, Deserialize)]
struct Row {
    id: i64,
    source: i64,
    target: i64,
    cost: f64,
    reverse_cost: f64,
    length: f64,
    geometry: String,
}

/// Parallel edge-attribute columns read from a debug CSV file, ready to be
/// passed straight to [`crate::compute_isochrone`].
#[derive(Debug, Default)]
pub struct EdgeColumns {
    pub edge_id: Vec<i64>,
    pub source: Vec<i64>,
    pub target: Vec<i64>,
    pub cost: Vec<f64>,
    pub reverse_cost: Vec<f64>,
    pub length: Vec<f64>,
    pub geometry: Vec<Vec<(f64, f64)>>,
}

/// Reads `id,source,target,cost,reverse_cost,length,geometry` rows, where
/// `geometry` is a bracketed `[[x,y],[x,y],...]` literal.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<EdgeColumns, CsvIngestError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut columns = EdgeColumns::default();

    for record in reader.deserialize() {
        let row: Row = record?;
        let geometry = parse_geometry(&row.geometry)
            .ok_or_else(|| CsvIngestError::Geometry(row.geometry.clone()))?;

        columns.edge_id.push(row.id);
        columns.source.push(row.source);
        columns.target.push(row.target);
        columns.cost.push(row.cost);
        columns.reverse_cost.push(row.reverse_cost);
        columns.length.push(row.length);
        columns.geometry.push(geometry);
    }

    Ok(columns)
}

fn parse_geometry(raw: &str) -> Option<Vec<(f64, f64)>> {
    let trimmed = raw.trim().trim_start_matches('[').trim_end_matches(']');
    if trimmed.trim().is_empty() {
        return Some(Vec::new());
    }

    trimmed
        .split("],")
        .map(|pair| {
            let cleaned = pair.trim().trim_start_matches('[').trim_end_matches(']');
            let mut parts = cleaned.split(',');
            let x: f64 = parts.next()?.trim().parse().ok()?;
            let y: f64 = parts.next()?.trim().parse().ok()?;
            Some((x, y))
        })
        .collect()
}
