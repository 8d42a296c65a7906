#![cfg(test)]

use super::dominated_by_polygon;
use crate::model::Coord;

fn square() -> Vec<Coord> {
    vec![
        Coord { x: 0.0, y: 0.0 },
        Coord { x: 10.0, y: 0.0 },
        Coord { x: 10.0, y: 10.0 },
        Coord { x: 0.0, y: 10.0 },
    ]
}

#[test]
fn interior_edge_is_dominated() {
    let ring = square();
    let edge = vec![Coord { x: 4.0, y: 4.0 }, Coord { x: 6.0, y: 6.0 }];
    assert!(dominated_by_polygon(&edge, &ring));
}

#[test]
fn edge_touching_a_hull_vertex_is_not_dominated() {
    let ring = square();
    let edge = vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 5.0, y: 5.0 }];
    assert!(!dominated_by_polygon(&edge, &ring));
}

#[test]
fn edge_reaching_outside_the_polygon_is_not_dominated() {
    let ring = square();
    let edge = vec![Coord { x: 4.0, y: 4.0 }, Coord { x: 20.0, y: 20.0 }];
    assert!(!dominated_by_polygon(&edge, &ring));
}

#[test]
fn degenerate_ring_never_dominates() {
    let ring = vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }];
    let edge = vec![Coord { x: 0.4, y: 0.4 }];
    assert!(!dominated_by_polygon(&edge, &ring));
}
