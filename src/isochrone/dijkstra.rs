//! Bounded single-source Dijkstra used once per start vertex, at the
//! maximum requested cutoff. Smaller cutoffs are derived by clipping the
//! resulting reached-edge set rather than re-running the search (see
//! [`super::record`]).

use crate::graph::Graph;
use crate::model::Index;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Priority-queue entry. `Ord` is reversed on both fields so that
/// `BinaryHeap` (a max-heap) pops the smallest cost first, with ties broken
/// by ascending vertex index, so expansion order is deterministic.
struct HeapItem {
    cost: OrderedFloat<f64>,
    index: Index,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.index == other.index
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.index.0.cmp(&self.index.0))
    }
}

/// Runs a cutoff-bounded Dijkstra from `start`. Distances that would exceed
/// `max_cutoff` are never finalized; their entry in the returned vector
/// stays `f64::INFINITY`. Vertices unreachable from `start` at all are
/// likewise `f64::INFINITY`.
pub fn bounded_dijkstra(graph: &Graph, start: Index, max_cutoff: f64) -> Vec<f64> {
    let mut dist = vec![f64::INFINITY; graph.n_vertices()];
    let mut heap = BinaryHeap::with_capacity(64);

    dist[start.0 as usize] = 0.0;
    heap.push(HeapItem {
        cost: OrderedFloat(0.0),
        index: start,
    });

    while let Some(HeapItem { cost, index: u }) = heap.pop() {
        let cu = cost.into_inner();
        if cu > dist[u.0 as usize] {
            continue; // stale entry from an earlier, costlier push
        }

        for arc in graph.out_arcs(u) {
            if !arc.cost.is_finite() || arc.cost < 0.0 {
                continue; // builder already excludes these; defensive only
            }

            let nd = cu + arc.cost;
            if nd > max_cutoff {
                continue; // cutoff-boundary arc, handled in post-processing
            }

            let v = arc.target.0 as usize;
            if nd < dist[v] {
                dist[v] = nd;
                heap.push(HeapItem {
                    cost: OrderedFloat(nd),
                    index: arc.target,
                });
            }
        }
    }

    dist
}
