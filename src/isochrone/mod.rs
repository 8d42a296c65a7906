//! Component B: multi-source, multi-cutoff isochrone expansion.

pub mod dijkstra;
pub mod record;

use crate::compute::{IsochronePolygonRecord, NetworkEdgeRecord};
use crate::graph::Graph;
use crate::model::VertexId;
use crate::shape::{build_polygon, dominated_by_polygon, IsochroneOptions};
use dijkstra::bounded_dijkstra;
use log::debug;
use record::{build_base_records, clip_to_cutoff};
use std::time::Instant;

/// Expands a single start vertex across every requested cutoff, returning
/// its contribution to the final `network` and `isochrone` result lists.
///
/// An absent start vertex (not present in the graph) yields empty results
/// for both — never an error.
pub(crate) fn expand_start(
    graph: &Graph,
    start_id: VertexId,
    cutoffs: &[f64],
    only_minimum_cover: bool,
    options: &IsochroneOptions,
) -> (Vec<NetworkEdgeRecord>, Vec<IsochronePolygonRecord>) {
    let Some(start_index) = graph.vertex_index(start_id) else {
        debug!("start vertex {start_id:?} absent from graph; returning empty result");
        return (Vec::new(), Vec::new());
    };

    let max_cutoff = cutoffs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let began = Instant::now();
    let dist = bounded_dijkstra(graph, start_index, max_cutoff);
    debug!(
        "start {start_id:?}: dijkstra to max cutoff {max_cutoff} settled in {:?}",
        began.elapsed()
    );

    let base = build_base_records(graph, &dist, max_cutoff);

    let mut network = Vec::new();
    let mut isochrone = Vec::new();

    for &cutoff in cutoffs {
        let mut clipped = clip_to_cutoff(&base, cutoff);

        let points: Vec<_> = clipped
            .iter()
            .flat_map(|r| r.geometry.iter().copied())
            .collect();
        let polygon = build_polygon(&points, options);

        if only_minimum_cover && polygon.len() >= 3 {
            clipped.retain(|r| !dominated_by_polygon(&r.geometry, &polygon));
        }

        debug!(
            "start {start_id:?}, cutoff {cutoff}: {} reached edges, {} polygon vertices",
            clipped.len(),
            polygon.len()
        );

        network.extend(clipped.into_iter().map(|r| NetworkEdgeRecord {
            start_id,
            edge_id: r.edge_id,
            start_perc: r.start_perc,
            end_perc: r.end_perc,
            start_cost: r.start_cost,
            end_cost: r.end_cost,
            geometry: r.geometry,
        }));

        isochrone.push(IsochronePolygonRecord {
            start_id,
            cutoff,
            shape: polygon,
        });
    }

    (network, isochrone)
}
