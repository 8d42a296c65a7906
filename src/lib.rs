#![allow(dead_code)]

//! `isograph` computes, for a directed weighted road graph, the reachable
//! network and isochrone polygon around one or more start vertices within
//! one or more cost cutoffs.
//!
//! The three components are:
//!
//! - [`graph`] — builds a CSR-adjacency graph from parallel edge-attribute
//!   arrays (component A).
//! - [`isochrone`] — bounded multi-source Dijkstra expansion and
//!   multi-cutoff clipping of the reached edges (component B).
//! - [`shape`] — turns a reached-edge point cloud into a concave isochrone
//!   polygon (component C).
//!
//! [`compute_isochrone`] ties the three together behind a single entry
//! point.

mod geomutil;
mod util;

pub mod compute;
pub mod graph;
pub mod isochrone;
pub mod model;
pub mod shape;

#[cfg(feature = "csv-ingest")]
pub mod ingest;

pub use compute::{
    compute_isochrone, compute_isochrone_with_options, IsochronePolygonRecord, IsochroneResult,
    NetworkEdgeRecord,
};
pub use graph::GraphError;
pub use shape::IsochroneOptions;

/// Crate-wide error type. Everything that can fail does so at
/// construction time only: malformed edges and unknown start vertices
/// degrade silently rather than erroring.
#[derive(Debug)]
pub enum Error {
    Graph(GraphError),
}

impl_err!(GraphError, Graph);

pub type Result<T> = std::result::Result<T, Error>;
