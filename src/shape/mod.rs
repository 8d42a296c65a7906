//! Component C: reached-edge point clouds turned into isochrone polygons.

pub mod concave;
pub mod hull;
mod test;

pub use concave::build_polygon;

use crate::model::Coord;
use geo::{Contains, Coord as GeoCoord, LineString, Point, Polygon};

/// Tunable parameters of the concave refinement stage.
#[derive(Debug, Clone, Copy)]
pub struct IsochroneOptions {
    /// Maximum allowed ratio of candidate-point distance to edge length
    /// before a candidate is rejected as too far from the hull edge.
    pub concavity: f64,
    /// Hull edges shorter than this are never subdivided further.
    pub length_threshold: f64,
}

impl Default for IsochroneOptions {
    fn default() -> Self {
        Self {
            concavity: 2.0,
            length_threshold: 0.0,
        }
    }
}

/// Conservative "dominance by polygon interior" predicate used by
/// `only_minimum_cover`: a reached-edge's clipped geometry is dropped
/// only when every one of its points lies strictly inside `ring` and none
/// of them coincide with a ring vertex (a ring vertex is definitionally on
/// the boundary, never interior).
pub fn dominated_by_polygon(points: &[Coord], ring: &[Coord]) -> bool {
    if ring.len() < 3 || points.is_empty() {
        return false;
    }

    let mut closed: Vec<GeoCoord<f64>> = ring.to_vec();
    if closed.first() != closed.last() {
        closed.push(closed[0]);
    }
    let polygon = Polygon::new(LineString::from(closed), vec![]);

    points.iter().all(|p| {
        if ring.iter().any(|v| v == p) {
            return false;
        }
        polygon.contains(&Point::from(*p))
    })
}
