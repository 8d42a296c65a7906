//! Component A: a read-only, CSR-adjacency directed graph over densified
//! vertex indices, built once per [`crate::compute_isochrone`] call.

pub mod builder;
mod test;

pub use builder::{build_graph, GraphError};

use crate::model::{Coord, EdgeId, Index, VertexId};
use rustc_hash::FxHashMap;

/// A directed traversal of an input edge in one of its two directions.
#[derive(Debug, Clone, Copy)]
pub struct Arc {
    pub target: Index,
    pub cost: f64,
    /// Index into [`Graph::edges`] of the edge this arc belongs to.
    pub row: u32,
    pub forward: bool,
}

/// The caller-supplied attributes of a single input edge, indexed by input
/// row position.
#[derive(Debug)]
pub struct EdgeMeta {
    pub edge_id: EdgeId,
    pub source: Index,
    pub target: Index,
    /// `None` when the forward direction is impassable (non-finite or
    /// negative cost).
    pub forward_cost: Option<f64>,
    /// `None` when the reverse direction is impassable.
    pub reverse_cost: Option<f64>,
    pub length: f64,
    /// Shape points ordered `source -> target`.
    pub geometry: Box<[Coord]>,
}

/// CSR-adjacency directed graph built from parallel edge-attribute arrays.
#[derive(Debug)]
pub struct Graph {
    head: Box<[u64]>,
    arcs: Box<[Arc]>,
    edges: Box<[EdgeMeta]>,
    index_of: FxHashMap<VertexId, Index>,
    id_of: Box<[VertexId]>,
    by_edge: FxHashMap<EdgeId, [Option<u32>; 2]>,
}

impl Graph {
    pub fn n_vertices(&self) -> usize {
        self.id_of.len()
    }

    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex_index(&self, id: VertexId) -> Option<Index> {
        self.index_of.get(&id).copied()
    }

    pub fn vertex_id(&self, index: Index) -> VertexId {
        self.id_of[index.0 as usize]
    }

    /// Arcs leaving `index`, in the order the builder emitted them.
    pub fn out_arcs(&self, index: Index) -> &[Arc] {
        let lo = self.head[index.0 as usize] as usize;
        let hi = self.head[index.0 as usize + 1] as usize;
        &self.arcs[lo..hi]
    }

    pub fn edge(&self, row: u32) -> &EdgeMeta {
        &self.edges[row as usize]
    }

    pub fn edges(&self) -> &[EdgeMeta] {
        &self.edges
    }

    /// The (forward, reverse) arc slot indices emitted for `edge_id`, if any
    /// edge carried that id.
    pub fn arc_slots(&self, edge_id: EdgeId) -> Option<[Option<u32>; 2]> {
        self.by_edge.get(&edge_id).copied()
    }

    pub fn arc(&self, slot: u32) -> &Arc {
        &self.arcs[slot as usize]
    }
}
