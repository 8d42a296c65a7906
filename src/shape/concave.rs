//! Stage 2 of the shape builder: concaveman-style concave refinement of the
//! stage-1 convex hull, biased by an `rstar` point index the way the
//! graph's own proximity queries are built.

use std::collections::VecDeque;

use rstar::primitives::GeomWithData;
use rstar::{RTree, AABB};

use super::hull::convex_hull;
use super::IsochroneOptions;
use crate::model::Coord;

type IndexedPoint = GeomWithData<[f64; 2], ()>;

fn to_point(c: Coord) -> [f64; 2] {
    [c.x, c.y]
}

fn from_point(p: &[f64; 2]) -> Coord {
    Coord { x: p[0], y: p[1] }
}

fn dist(a: Coord, b: Coord) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

fn key(p: Coord) -> (u64, u64) {
    (p.x.to_bits(), p.y.to_bits())
}

fn point_segment_distance(p: Coord, a: Coord, b: Coord) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len2 = abx * abx + aby * aby;
    if len2 == 0.0 {
        return dist(p, a);
    }
    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len2).clamp(0.0, 1.0);
    let proj = Coord {
        x: a.x + t * abx,
        y: a.y + t * aby,
    };
    dist(p, proj)
}

fn orientation(a: Coord, b: Coord, c: Coord) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Proper segment intersection (shared endpoints do not count as a cross).
fn segments_intersect(a: Coord, b: Coord, c: Coord, d: Coord) -> bool {
    let d1 = orientation(c, d, a);
    let d2 = orientation(c, d, b);
    let d3 = orientation(a, b, c);
    let d4 = orientation(a, b, d);

    (d1 > 0.0) != (d2 > 0.0) && (d3 > 0.0) != (d4 > 0.0) && d1 != 0.0 && d2 != 0.0 && d3 != 0.0 && d4 != 0.0
}

/// Whether splicing `p` between `a` and `b` would make either new segment
/// cross an existing, unrelated hull edge.
fn splice_would_cross(ring: &[Coord], a: Coord, b: Coord, p: Coord) -> bool {
    let n = ring.len();
    for i in 0..n {
        let j = (i + 1) % n;
        let (s, e) = (ring[i], ring[j]);
        if (s == a && e == b) || (s == b && e == a) {
            continue; // the segment being replaced
        }
        if segments_intersect(a, p, s, e) || segments_intersect(p, b, s, e) {
            return true;
        }
    }
    false
}

/// Builds the isochrone shape for one reached point cloud: a convex hull
/// (stage 1), then iteratively spliced inward toward nearby points that
/// satisfy the concavity and length-threshold predicates (stage 2).
///
/// Degenerate hulls (fewer than 3 vertices) are returned unrefined; the
/// concave stage only makes sense once a polygon actually exists.
pub fn build_polygon(points: &[Coord], options: &IsochroneOptions) -> Vec<Coord> {
    let hull = convex_hull(points);
    if hull.len() < 3 {
        return hull;
    }

    let tree: RTree<IndexedPoint> = RTree::bulk_load(
        points
            .iter()
            .map(|&p| IndexedPoint::new(to_point(p), ()))
            .collect(),
    );

    let mut ring = hull;
    let mut on_hull: std::collections::HashSet<(u64, u64)> =
        ring.iter().map(|&p| key(p)).collect();

    let mut queue: VecDeque<(Coord, Coord)> = VecDeque::new();
    let n0 = ring.len();
    for i in 0..n0 {
        queue.push_back((ring[i], ring[(i + 1) % n0]));
    }

    while let Some((a, b)) = queue.pop_front() {
        let Some(ia) = ring.iter().position(|&p| p == a) else {
            continue;
        };
        let ib = (ia + 1) % ring.len();
        if ring[ib] != b {
            continue; // stale: the ring's topology moved on since enqueueing
        }

        let edge_len = dist(a, b);
        if edge_len < options.length_threshold || edge_len == 0.0 {
            continue;
        }

        let mid = [(a.x + b.x) / 2.0, (a.y + b.y) / 2.0];
        let radius = edge_len * options.concavity + edge_len;
        let envelope = AABB::from_corners(
            [mid[0] - radius, mid[1] - radius],
            [mid[0] + radius, mid[1] + radius],
        );

        let mut best: Option<(Coord, f64)> = None;
        for candidate in tree.locate_in_envelope(&envelope) {
            let p = from_point(candidate.geom());
            if on_hull.contains(&key(p)) {
                continue;
            }

            let ratio = dist(p, a).max(dist(p, b)) / edge_len;
            if ratio >= options.concavity {
                continue;
            }

            if splice_would_cross(&ring, a, b, p) {
                continue;
            }

            let d = point_segment_distance(p, a, b);
            if best.map(|(_, bd)| d < bd).unwrap_or(true) {
                best = Some((p, d));
            }
        }

        if let Some((p, _)) = best {
            ring.insert(ib, p);
            on_hull.insert(key(p));
            queue.push_back((a, p));
            queue.push_back((p, b));
        }
    }

    ring
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn degenerate_point_cloud_skips_refinement() {
        let points = vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }];
        let opts = IsochroneOptions::default();
        let polygon = build_polygon(&points, &opts);
        assert_eq!(polygon.len(), 2);
    }

    #[test]
    fn convex_cloud_is_left_unrefined() {
        let points = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 4.0, y: 0.0 },
            Coord { x: 4.0, y: 4.0 },
            Coord { x: 0.0, y: 4.0 },
        ];
        let opts = IsochroneOptions::default();
        let polygon = build_polygon(&points, &opts);
        assert_eq!(polygon.len(), 4);
    }

    #[test]
    fn a_notch_point_pulls_the_hull_inward() {
        // A square with a point pulled deep into one edge's midpoint,
        // close enough to qualify under the default concavity ratio.
        let points = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 10.0, y: 0.0 },
            Coord { x: 10.0, y: 10.0 },
            Coord { x: 0.0, y: 10.0 },
            Coord { x: 5.0, y: 1.0 },
        ];
        let opts = IsochroneOptions {
            concavity: 2.0,
            length_threshold: 0.0,
        };
        let polygon = build_polygon(&points, &opts);
        assert!(polygon.len() >= 4);
    }

    #[test]
    fn length_threshold_suppresses_refinement_on_short_edges() {
        let points = vec![
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 0.0, y: 1.0 },
            Coord { x: 0.5, y: 0.1 },
        ];
        let opts = IsochroneOptions {
            concavity: 2.0,
            length_threshold: 100.0,
        };
        let polygon = build_polygon(&points, &opts);
        assert_eq!(polygon.len(), 4);
    }
}
