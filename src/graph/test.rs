#![cfg(test)]

use super::builder::{build_graph, GraphError};
use crate::model::{EdgeId, VertexId};

fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<(f64, f64)> {
    vec![(x0, y0), (x1, y1)]
}

#[test]
fn densifies_vertex_ids_in_ascending_order() {
    let graph = build_graph(
        &[1, 2],
        &[100, 50],
        &[50, 10],
        &[1.0, 1.0],
        &[1.0, 1.0],
        &[1.0, 1.0],
        &[line(0.0, 0.0, 1.0, 0.0), line(1.0, 0.0, 2.0, 0.0)],
    )
    .unwrap();

    assert_eq!(graph.n_vertices(), 3);
    assert_eq!(graph.vertex_id(graph.vertex_index(VertexId(10)).unwrap()), VertexId(10));
    assert!(graph.vertex_index(VertexId(10)).unwrap().0 < graph.vertex_index(VertexId(50)).unwrap().0);
    assert!(graph.vertex_index(VertexId(50)).unwrap().0 < graph.vertex_index(VertexId(100)).unwrap().0);
}

#[test]
fn emits_forward_and_reverse_arcs() {
    let graph = build_graph(
        &[1],
        &[1],
        &[2],
        &[4.0],
        &[7.0],
        &[10.0],
        &[line(0.0, 0.0, 10.0, 0.0)],
    )
    .unwrap();

    let a = graph.vertex_index(VertexId(1)).unwrap();
    let b = graph.vertex_index(VertexId(2)).unwrap();

    let out_a = graph.out_arcs(a);
    assert_eq!(out_a.len(), 1);
    assert_eq!(out_a[0].target, b);
    assert_eq!(out_a[0].cost, 4.0);
    assert!(out_a[0].forward);

    let out_b = graph.out_arcs(b);
    assert_eq!(out_b.len(), 1);
    assert_eq!(out_b[0].target, a);
    assert_eq!(out_b[0].cost, 7.0);
    assert!(!out_b[0].forward);
}

#[test]
fn impassable_direction_is_omitted() {
    let graph = build_graph(
        &[1],
        &[1],
        &[2],
        &[4.0],
        &[f64::INFINITY],
        &[10.0],
        &[line(0.0, 0.0, 10.0, 0.0)],
    )
    .unwrap();

    let b = graph.vertex_index(VertexId(2)).unwrap();
    assert!(graph.out_arcs(b).is_empty());
}

#[test]
fn negative_cost_is_impassable() {
    let graph = build_graph(
        &[1],
        &[1],
        &[2],
        &[-1.0],
        &[2.0],
        &[10.0],
        &[line(0.0, 0.0, 10.0, 0.0)],
    )
    .unwrap();

    let a = graph.vertex_index(VertexId(1)).unwrap();
    assert!(graph.out_arcs(a).is_empty());
}

#[test]
fn by_edge_lookup_resolves_both_slots() {
    let graph = build_graph(
        &[42],
        &[1],
        &[2],
        &[4.0],
        &[7.0],
        &[10.0],
        &[line(0.0, 0.0, 10.0, 0.0)],
    )
    .unwrap();

    let slots = graph.arc_slots(EdgeId(42)).unwrap();
    assert!(slots[0].is_some());
    assert!(slots[1].is_some());
    assert!(graph.arc(slots[0].unwrap()).forward);
    assert!(!graph.arc(slots[1].unwrap()).forward);
}

#[test]
fn duplicate_parallel_edges_are_independent() {
    let graph = build_graph(
        &[1, 2],
        &[1, 1],
        &[2, 2],
        &[4.0, 9.0],
        &[4.0, 9.0],
        &[10.0, 10.0],
        &[line(0.0, 0.0, 10.0, 0.0), line(0.0, 0.0, 10.0, 0.0)],
    )
    .unwrap();

    let a = graph.vertex_index(VertexId(1)).unwrap();
    assert_eq!(graph.out_arcs(a).len(), 2);
}

#[test]
fn rejects_mismatched_column_lengths() {
    let err = build_graph(
        &[1, 2],
        &[1],
        &[2, 3],
        &[1.0, 1.0],
        &[1.0, 1.0],
        &[1.0, 1.0],
        &[line(0.0, 0.0, 1.0, 0.0), line(1.0, 0.0, 2.0, 0.0)],
    )
    .unwrap_err();

    match err {
        GraphError::ColumnLengthMismatch { field, .. } => assert_eq!(field, "source"),
    }
}
