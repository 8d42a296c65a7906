//! Core identifiers and geometric aliases shared by every component.

/// Caller-supplied vertex identifier, passed through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub i64);

/// Caller-supplied edge identifier, passed through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub i64);

/// Densified, 0-based internal vertex index assigned by the graph builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Index(pub u32);

/// Planar coordinate used throughout the crate (`geo`'s coordinate type).
pub type Coord = geo::Coord<f64>;
