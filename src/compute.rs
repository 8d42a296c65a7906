//! Top-level orchestration entry point.

use crate::graph::build_graph;
use crate::model::{Coord, EdgeId, VertexId};
use crate::shape::IsochroneOptions;
use crate::Error;
use log::debug;
use rayon::prelude::*;

/// One reached (possibly partial) edge, annotated with the fraction and
/// cumulative cost at which traversal enters and exits it from `start_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkEdgeRecord {
    pub start_id: VertexId,
    pub edge_id: EdgeId,
    pub start_perc: f64,
    pub end_perc: f64,
    pub start_cost: f64,
    pub end_cost: f64,
    /// The portion of the edge's shape actually covered, oriented in the
    /// direction of traversal.
    pub geometry: Vec<Coord>,
}

/// The isochrone polygon for one start vertex at one cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct IsochronePolygonRecord {
    pub start_id: VertexId,
    pub cutoff: f64,
    /// Counter-clockwise ring, no repeated endpoint. Empty when the start
    /// vertex reached nothing within the cutoff.
    pub shape: Vec<Coord>,
}

/// The full result bundle of [`compute_isochrone`].
#[derive(Debug, Clone, Default)]
pub struct IsochroneResult {
    pub network: Vec<NetworkEdgeRecord>,
    pub isochrone: Vec<IsochronePolygonRecord>,
}

/// Computes reachable-network and isochrone-polygon records for every
/// `(start, cutoff)` pair, using the default [`IsochroneOptions`]
/// (`concavity = 2.0`, `length_threshold = 0.0`).
///
/// `edge_id`, `source`, `target`, `cost`, `reverse_cost`, `length`, and
/// `geometry` are parallel arrays, one entry per input edge; `geometry[i]`
/// is the ordered `source -> target` shape of edge `i` as `(x, y)` pairs.
/// Returns `Err` only when the caller's own arrays disagree in length —
/// never for malformed edges or unknown start vertices, which degrade
/// silently instead.
#[allow(clippy::too_many_arguments)]
pub fn compute_isochrone(
    edge_id: &[i64],
    source: &[i64],
    target: &[i64],
    cost: &[f64],
    reverse_cost: &[f64],
    length: &[f64],
    geometry: &[Vec<(f64, f64)>],
    start_vertices: &[i64],
    cutoffs: &[f64],
    only_minimum_cover: bool,
) -> Result<IsochroneResult, Error> {
    compute_isochrone_with_options(
        edge_id,
        source,
        target,
        cost,
        reverse_cost,
        length,
        geometry,
        start_vertices,
        cutoffs,
        only_minimum_cover,
        &IsochroneOptions::default(),
    )
}

/// As [`compute_isochrone`], with explicit concave-refinement `options`.
#[allow(clippy::too_many_arguments)]
pub fn compute_isochrone_with_options(
    edge_id: &[i64],
    source: &[i64],
    target: &[i64],
    cost: &[f64],
    reverse_cost: &[f64],
    length: &[f64],
    geometry: &[Vec<(f64, f64)>],
    start_vertices: &[i64],
    cutoffs: &[f64],
    only_minimum_cover: bool,
    options: &IsochroneOptions,
) -> Result<IsochroneResult, Error> {
    let graph = build_graph(edge_id, source, target, cost, reverse_cost, length, geometry)?;
    debug!(
        "graph built: {} vertices, {} edges",
        graph.n_vertices(),
        graph.n_edges()
    );

    let mut result = IsochroneResult::default();
    if start_vertices.is_empty() || cutoffs.is_empty() {
        return Ok(result);
    }

    // Each start is expanded independently against the shared, read-only
    // graph; results are collected in `start_vertices` order so that output
    // order never depends on thread-scheduling order.
    let per_start: Vec<_> = start_vertices
        .par_iter()
        .map(|&raw_id| {
            crate::isochrone::expand_start(
                &graph,
                VertexId(raw_id),
                cutoffs,
                only_minimum_cover,
                options,
            )
        })
        .collect();

    for (network, isochrone) in per_start {
        result.network.extend(network);
        result.isochrone.extend(isochrone);
    }

    Ok(result)
}
