use super::*;
use crate::node::Node;

fn chain(points: &[(f64, f64)]) -> Vec<Node> {
    points.iter().map(|&(x, y)| Node::new(x, y, 5.0)).collect()
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// fabrik
// =============================================================

#[test]
fn fabrik_two_node_chain_converges() {
    let handler = InverseKinematicsHandler::new(1.0, 10.0);
    let mut nodes = chain(&[(0.0, 0.0), (15.0, 0.0)]);
    let outcome = handler.fabrik(&mut nodes, pt(10.0, 0.0));
    assert!(outcome.converged);
    assert!(nodes[1].distance_to_point(pt(10.0, 0.0)) <= 1.0);
    assert!((nodes[1].pos.x - 10.0).abs() < 1e-9);
}

#[test]
fn fabrik_keeps_root_pinned() {
    let handler = InverseKinematicsHandler::new(0.5, 10.0);
    let mut nodes = chain(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0)]);
    let outcome = handler.fabrik(&mut nodes, pt(10.0, 20.0));
    assert!(outcome.converged, "{outcome:?}");
    assert_eq!(nodes[0].pos, pt(0.0, 0.0));
    assert!(nodes[3].distance_to_point(pt(10.0, 20.0)) <= 0.5);
}

#[test]
fn fabrik_preserves_link_lengths() {
    let handler = InverseKinematicsHandler::new(0.1, 10.0);
    let mut nodes = chain(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0), (40.0, 0.0)]);
    handler.fabrik(&mut nodes, pt(-5.0, 25.0));
    for w in nodes.windows(2) {
        assert!((w[0].distance_to(&w[1]) - 10.0).abs() < 1e-6);
    }
}

#[test]
fn fabrik_already_on_target_does_no_work() {
    let handler = InverseKinematicsHandler::new(1.0, 10.0);
    let mut nodes = chain(&[(0.0, 0.0), (10.0, 0.0)]);
    let outcome = handler.fabrik(&mut nodes, pt(10.5, 0.0));
    assert_eq!(outcome.iterations, 0);
    assert!(outcome.converged);
    assert_eq!(nodes[1].pos, pt(10.0, 0.0));
}

#[test]
fn fabrik_unreachable_target_stops_at_cap() {
    let handler = InverseKinematicsHandler::new(0.01, 10.0).with_max_iterations(8);
    let mut nodes = chain(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
    let outcome = handler.fabrik(&mut nodes, pt(100.0, 0.0));
    assert!(!outcome.converged);
    assert_eq!(outcome.iterations, 8);
    // Best effort: stretched straight at the target.
    assert!((nodes[2].pos.x - 20.0).abs() < 1e-9);
    assert!((outcome.error - 80.0).abs() < 1e-9);
    assert!(nodes.iter().all(|n| n.pos.is_finite()));
}

#[test]
fn fabrik_on_empty_chain_is_trivially_converged() {
    let handler = InverseKinematicsHandler::new(1.0, 10.0);
    let mut nodes: Vec<Node> = Vec::new();
    let outcome = handler.fabrik(&mut nodes, pt(3.0, 3.0));
    assert!(outcome.converged);
    assert_eq!(outcome.iterations, 0);
}

// =============================================================
// Reach phases
// =============================================================

#[test]
fn forward_reach_pins_tip() {
    let handler = InverseKinematicsHandler::new(1.0, 10.0);
    let mut nodes = chain(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
    handler.forward_reach(&mut nodes, pt(20.0, 10.0));
    assert_eq!(nodes[2].pos, pt(20.0, 10.0));
    assert!((nodes[1].distance_to(&nodes[2]) - 10.0).abs() < 1e-9);
}

#[test]
fn backward_reach_pins_root() {
    let handler = InverseKinematicsHandler::new(1.0, 10.0);
    let mut nodes = chain(&[(5.0, 5.0), (10.0, 0.0), (20.0, 0.0)]);
    handler.backward_reach(&mut nodes, pt(0.0, 0.0));
    assert_eq!(nodes[0].pos, pt(0.0, 0.0));
    assert!((nodes[0].distance_to(&nodes[1]) - 10.0).abs() < 1e-9);
    assert!((nodes[1].distance_to(&nodes[2]) - 10.0).abs() < 1e-9);
}

// =============================================================
// too_far / calculate_error
// =============================================================

#[test]
fn too_far_compares_against_total_reach() {
    let handler = InverseKinematicsHandler::new(1.0, 10.0);
    let nodes = chain(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
    assert!(handler.too_far(&nodes, pt(25.0, 0.0)));
    assert!(!handler.too_far(&nodes, pt(15.0, 0.0)));
    assert!(!handler.too_far(&nodes, pt(0.0, 20.0)));
}

#[test]
fn too_far_on_empty_chain_is_false() {
    let handler = InverseKinematicsHandler::new(1.0, 10.0);
    let nodes: Vec<Node> = Vec::new();
    assert!(!handler.too_far(&nodes, pt(1000.0, 0.0)));
}

#[test]
fn calculate_error_is_tip_distance() {
    let handler = InverseKinematicsHandler::new(1.0, 10.0);
    let nodes = chain(&[(0.0, 0.0), (3.0, 4.0)]);
    assert!((handler.calculate_error(&nodes, pt(0.0, 0.0)) - 5.0).abs() < 1e-12);
}

#[test]
fn node_spacing_reads_base() {
    let handler = InverseKinematicsHandler::new(1.0, 12.5);
    assert!((handler.node_spacing() - 12.5).abs() < f64::EPSILON);
}
