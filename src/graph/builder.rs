use super::{Arc, EdgeMeta, Graph};
use crate::model::{Coord, EdgeId, Index, VertexId};
use rustc_hash::FxHashMap;

/// Raised when the caller's parallel edge-attribute arrays disagree in
/// length. This is a programmer error, not a data-quality problem, so it is
/// the one place this crate returns an `Err` instead of degrading silently.
#[derive(Debug)]
pub enum GraphError {
    ColumnLengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}

fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<(), GraphError> {
    if expected != actual {
        return Err(GraphError::ColumnLengthMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Builds a [`Graph`] from parallel edge-attribute arrays (one entry per
/// input edge, all arrays the same length as `edge_id`).
///
/// Vertex ids are collected from `source`/`target`, sorted ascending, and
/// assigned dense indices in that order. Each edge yields up to two arcs: a
/// forward arc (`source -> target`, using `cost`) and a reverse arc
/// (`target -> source`, using `reverse_cost`); a direction is omitted
/// entirely when its cost is negative, non-finite, or the edge's geometry
/// has fewer than two points (a malformed edge is simply impassable in both
/// directions, never a construction error).
#[allow(clippy::too_many_arguments)]
pub fn build_graph(
    edge_id: &[i64],
    source: &[i64],
    target: &[i64],
    cost: &[f64],
    reverse_cost: &[f64],
    length: &[f64],
    geometry: &[Vec<(f64, f64)>],
) -> Result<Graph, GraphError> {
    let n = edge_id.len();
    check_len("source", n, source.len())?;
    check_len("target", n, target.len())?;
    check_len("cost", n, cost.len())?;
    check_len("reverse_cost", n, reverse_cost.len())?;
    check_len("length", n, length.len())?;
    check_len("geometry", n, geometry.len())?;

    let mut distinct: Vec<i64> = Vec::with_capacity(n * 2);
    distinct.extend_from_slice(source);
    distinct.extend_from_slice(target);
    distinct.sort_unstable();
    distinct.dedup();

    let id_of: Box<[VertexId]> = distinct.into_iter().map(VertexId).collect();
    let mut index_of: FxHashMap<VertexId, Index> = FxHashMap::default();
    index_of.reserve(id_of.len());
    for (i, &id) in id_of.iter().enumerate() {
        index_of.insert(id, Index(i as u32));
    }

    let mut edges: Vec<EdgeMeta> = Vec::with_capacity(n);
    // (source bucket, arc) pairs in row order, used to build the CSR arrays.
    let mut raw: Vec<(Index, Arc)> = Vec::with_capacity(n * 2);

    for i in 0..n {
        let src = index_of[&VertexId(source[i])];
        let tgt = index_of[&VertexId(target[i])];

        let well_formed_geometry = geometry[i].len() >= 2;
        let forward_valid = well_formed_geometry && cost[i].is_finite() && cost[i] >= 0.0;
        let reverse_valid =
            well_formed_geometry && reverse_cost[i].is_finite() && reverse_cost[i] >= 0.0;

        let shape: Box<[Coord]> = geometry[i]
            .iter()
            .map(|&(x, y)| Coord { x, y })
            .collect::<Vec<_>>()
            .into_boxed_slice();

        edges.push(EdgeMeta {
            edge_id: EdgeId(edge_id[i]),
            source: src,
            target: tgt,
            forward_cost: forward_valid.then_some(cost[i]),
            reverse_cost: reverse_valid.then_some(reverse_cost[i]),
            length: length[i],
            geometry: shape,
        });

        if forward_valid {
            raw.push((
                src,
                Arc {
                    target: tgt,
                    cost: cost[i],
                    row: i as u32,
                    forward: true,
                },
            ));
        }
        if reverse_valid {
            raw.push((
                tgt,
                Arc {
                    target: src,
                    cost: reverse_cost[i],
                    row: i as u32,
                    forward: false,
                },
            ));
        }
    }

    let v = id_of.len();
    let mut counts = vec![0u64; v + 1];
    for (s, _) in &raw {
        counts[s.0 as usize + 1] += 1;
    }
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }
    let head: Box<[u64]> = counts.clone().into_boxed_slice();

    let mut cursor = counts;
    let mut arcs_slots: Vec<Option<Arc>> = vec![None; raw.len()];
    let mut by_edge: FxHashMap<EdgeId, [Option<u32>; 2]> = FxHashMap::default();

    for (s, arc) in raw {
        let slot = cursor[s.0 as usize] as usize;
        cursor[s.0 as usize] += 1;

        let direction_slot = if arc.forward { 0 } else { 1 };
        let edge_id = edges[arc.row as usize].edge_id;
        by_edge.entry(edge_id).or_insert([None, None])[direction_slot] = Some(slot as u32);

        arcs_slots[slot] = Some(arc);
    }

    let arcs: Box<[Arc]> = arcs_slots
        .into_iter()
        .map(|a| a.expect("every slot was assigned exactly once during the counting sort"))
        .collect();

    Ok(Graph {
        head,
        arcs,
        edges: edges.into_boxed_slice(),
        index_of,
        id_of,
        by_edge,
    })
}
