//! Reached-edge record construction and the multi-cutoff clipping policy.

use crate::geomutil::{clip_by_fraction, oriented_geometry};
use crate::graph::{EdgeMeta, Graph};
use crate::model::{Coord, EdgeId};

/// Float tolerance for the "is this arc tight" check in
/// [`build_base_records`]. Relative to the arc's own cost so it scales
/// sensibly across very small and very large edge costs.
const TIGHT_EPS: f64 = 1e-9;

/// A reached edge at the maximum requested cutoff, retaining enough of the
/// arc's own cost to be re-clipped to any smaller cutoff without
/// re-running Dijkstra.
pub struct BaseRecord {
    pub edge_id: EdgeId,
    /// Cost of traversing the full arc in the direction recorded here.
    arc_cost: f64,
    pub start_cost: f64,
    /// The cost at which traversal stops at the maximum cutoff: either the
    /// arc's own end cost (full record) or the maximum cutoff itself
    /// (boundary record).
    pub end_cost: f64,
    /// Fraction of the arc covered at `end_cost`, at the maximum cutoff.
    end_perc: f64,
    /// Full arc geometry, oriented tail -> head.
    geometry: Vec<Coord>,
}

/// A reached edge clipped to one specific cutoff.
pub struct ClippedRecord {
    pub edge_id: EdgeId,
    pub start_perc: f64,
    pub end_perc: f64,
    pub start_cost: f64,
    pub end_cost: f64,
    pub geometry: Vec<Coord>,
}

/// Builds the reached-edge set at `max_cutoff` from a finalized distance
/// array, disambiguating forward vs. reverse traversal per edge.
///
/// For each input edge:
/// - if both endpoints are reached, the edge is recorded in whichever
///   direction is *tight* (`dist[head] == dist[tail] + cost`), preferring
///   forward on a tie; if neither direction is tight the edge simply was
///   not the means by which either endpoint was reached, and is dropped;
/// - if exactly one endpoint is reached, the edge is recorded as a
///   cutoff-boundary (partial) arc outward from that endpoint;
/// - if neither endpoint is reached, the edge is dropped.
pub fn build_base_records(graph: &Graph, dist: &[f64], max_cutoff: f64) -> Vec<BaseRecord> {
    let mut out = Vec::new();

    for edge in graph.edges() {
        let d_src = dist[edge.source.0 as usize];
        let d_tgt = dist[edge.target.0 as usize];
        let src_reached = d_src.is_finite();
        let tgt_reached = d_tgt.is_finite();

        match (src_reached, tgt_reached) {
            (true, true) => {
                if let Some(record) = tight_record(edge, d_src, d_tgt) {
                    out.push(record);
                }
            }
            (true, false) => {
                if let Some(w) = edge.forward_cost {
                    out.push(boundary_record(edge, w, d_src, max_cutoff, true));
                }
            }
            (false, true) => {
                if let Some(w) = edge.reverse_cost {
                    out.push(boundary_record(edge, w, d_tgt, max_cutoff, false));
                }
            }
            (false, false) => {}
        }
    }

    out
}

fn tight_record(edge: &EdgeMeta, d_src: f64, d_tgt: f64) -> Option<BaseRecord> {
    if let Some(w) = edge.forward_cost {
        if (d_tgt - (d_src + w)).abs() <= TIGHT_EPS * w.max(1.0) {
            return Some(full_record(edge, w, d_src, d_tgt, true));
        }
    }
    if let Some(w) = edge.reverse_cost {
        if (d_src - (d_tgt + w)).abs() <= TIGHT_EPS * w.max(1.0) {
            return Some(full_record(edge, w, d_tgt, d_src, false));
        }
    }
    None
}

fn full_record(edge: &EdgeMeta, w: f64, start_cost: f64, end_cost: f64, forward: bool) -> BaseRecord {
    BaseRecord {
        edge_id: edge.edge_id,
        arc_cost: w,
        start_cost,
        end_cost,
        end_perc: 1.0,
        geometry: oriented_geometry(&edge.geometry, forward),
    }
}

fn boundary_record(
    edge: &EdgeMeta,
    w: f64,
    start_cost: f64,
    max_cutoff: f64,
    forward: bool,
) -> BaseRecord {
    let end_perc = ((max_cutoff - start_cost) / w).clamp(0.0, 1.0);
    BaseRecord {
        edge_id: edge.edge_id,
        arc_cost: w,
        start_cost,
        end_cost: max_cutoff,
        end_perc,
        geometry: oriented_geometry(&edge.geometry, forward),
    }
}

/// Clips the base (maximum-cutoff) records down to `cutoff`, per the
/// multi-cutoff policy: records whose start-cost is at or beyond `cutoff`
/// are discarded entirely; records that already end at or before `cutoff`
/// are kept unchanged; everything else is re-clipped to end exactly at
/// `cutoff`.
pub fn clip_to_cutoff(base: &[BaseRecord], cutoff: f64) -> Vec<ClippedRecord> {
    base.iter()
        .filter(|r| r.start_cost < cutoff)
        .map(|r| {
            let (end_perc, end_cost) = if r.end_cost <= cutoff {
                (r.end_perc, r.end_cost)
            } else {
                (
                    ((cutoff - r.start_cost) / r.arc_cost).clamp(0.0, 1.0),
                    cutoff,
                )
            };

            ClippedRecord {
                edge_id: r.edge_id,
                start_perc: 0.0,
                end_perc,
                start_cost: r.start_cost,
                end_cost,
                geometry: clip_by_fraction(&r.geometry, end_perc),
            }
        })
        .collect()
}
