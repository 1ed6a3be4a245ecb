#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// Distances
// =============================================================

#[test]
fn node_distance() {
    let a = Node::new(0.0, 0.0, 5.0);
    let b = Node::new(3.0, 4.0, 5.0);
    assert!(approx_eq(a.distance_to(&b), 5.0));
}

#[test]
fn node_distance_is_symmetric() {
    let a = Node::new(-12.5, 3.0, 1.0);
    let b = Node::new(40.0, -9.25, 8.0);
    assert_eq!(a.distance_to(&b), b.distance_to(&a));
}

#[test]
fn coordinate_distance() {
    let node = Node::new(0.0, 0.0, 5.0);
    assert!(approx_eq(node.distance_to_point(pt(3.0, 4.0)), 5.0));
}

// =============================================================
// step_toward
// =============================================================

#[test]
fn step_toward_partial_move() {
    let mut node = Node::new(0.0, 0.0, 5.0);
    node.step_toward(pt(6.0, 8.0), 5.0);
    assert!(point_approx_eq(node.pos, pt(3.0, 4.0)));
}

#[test]
fn step_toward_snaps_when_travel_covers_gap() {
    let mut node = Node::new(1.0, 1.0, 5.0);
    node.step_toward(pt(4.0, 5.0), 5.0);
    assert_eq!(node.pos, pt(4.0, 5.0));

    let mut node = Node::new(1.0, 1.0, 5.0);
    node.step_toward(pt(4.0, 5.0), 100.0);
    assert_eq!(node.pos, pt(4.0, 5.0));
}

#[test]
fn step_toward_reduces_distance_by_travel_in_every_direction() {
    let targets = [
        pt(10.0, 0.0),
        pt(-10.0, 0.0),
        pt(0.0, 10.0),
        pt(0.0, -10.0),
        pt(7.0, -7.0),
        pt(-3.0, 9.0),
        pt(-8.0, -2.0),
    ];
    for target in targets {
        let mut node = Node::new(0.0, 0.0, 1.0);
        let before = node.distance_to_point(target);
        node.step_toward(target, 2.5);
        let after = node.distance_to_point(target);
        assert!(approx_eq(after, before - 2.5), "target {target:?}: {before} -> {after}");
    }
}

#[test]
fn step_toward_vertical_target_has_no_horizontal_drift() {
    let mut node = Node::new(5.0, 5.0, 1.0);
    node.step_toward(pt(5.0, -20.0), 10.0);
    assert!(point_approx_eq(node.pos, pt(5.0, -5.0)));
}

#[test]
fn step_toward_negative_travel_moves_away() {
    let mut node = Node::new(2.0, 0.0, 1.0);
    node.step_toward(pt(0.0, 0.0), -3.0);
    assert!(point_approx_eq(node.pos, pt(5.0, 0.0)));
}

#[test]
fn step_toward_coincident_negative_travel_stays_put() {
    let mut node = Node::new(2.0, 2.0, 1.0);
    node.step_toward(pt(2.0, 2.0), -3.0);
    assert_eq!(node.pos, pt(2.0, 2.0));
    assert!(node.pos.is_finite());
}

// =============================================================
// relative_point
// =============================================================

#[test]
fn relative_point_straight_ahead() {
    let node = Node::new(0.0, 0.0, 1.0);
    let p = node.relative_point(pt(10.0, 0.0), 4.0, 0.0);
    assert!(point_approx_eq(p, pt(4.0, 0.0)));
}

#[test]
fn relative_point_with_delta_angle() {
    let node = Node::new(0.0, 0.0, 1.0);
    let p = node.relative_point(pt(10.0, 0.0), 4.0, FRAC_PI_2);
    assert!(point_approx_eq(p, pt(0.0, 4.0)));
}

#[test]
fn relative_point_degenerate_returns_position() {
    let node = Node::new(3.0, -1.0, 1.0);
    let p = node.relative_point(pt(3.0, -1.0), 4.0, 1.0);
    assert_eq!(p, pt(3.0, -1.0));
}

// =============================================================
// Lateral points
// =============================================================

#[test]
fn lateral_points_facing_positive_x() {
    let node = Node::new(0.0, 0.0, 10.0);
    let lp = node.lateral_points(pt(50.0, 0.0));
    assert!(point_approx_eq(lp.front, pt(10.0, 0.0)));
    assert!(point_approx_eq(lp.back, pt(-10.0, 0.0)));
    assert!(point_approx_eq(lp.right, pt(0.0, 10.0)));
    assert!(point_approx_eq(lp.left, pt(0.0, -10.0)));
    let d = 10.0 * FRAC_PI_4.cos();
    assert!(point_approx_eq(lp.lean_right, pt(d, d)));
    assert!(point_approx_eq(lp.lean_left, pt(d, -d)));
    assert!(point_approx_eq(lp.rear_right, pt(-d, d)));
    assert!(point_approx_eq(lp.rear_left, pt(-d, -d)));
    let e = 5.0 * FRAC_PI_4.cos();
    assert!(point_approx_eq(lp.eye_right, pt(e, e)));
    assert!(point_approx_eq(lp.eye_left, pt(e, -e)));
}

#[test]
fn lateral_points_all_at_node_size() {
    let node = Node::new(4.0, -2.0, 7.0);
    let lp = node.lateral_points(pt(-30.0, 11.0));
    for p in [lp.right, lp.left, lp.front, lp.back, lp.lean_right, lp.lean_left, lp.rear_right, lp.rear_left] {
        assert!(approx_eq(node.distance_to_point(p), 7.0));
    }
    assert!(approx_eq(node.distance_to_point(lp.eye_left), 3.5));
}

#[test]
fn lateral_points_degenerate_collapse_to_position() {
    let node = Node::new(1.0, 1.0, 7.0);
    let lp = node.lateral_points(pt(1.0, 1.0));
    assert_eq!(lp.right, pt(1.0, 1.0));
    assert_eq!(lp.front, pt(1.0, 1.0));
}

#[test]
fn mirrored_swaps_sides_and_ends() {
    let lp = Node::new(0.0, 0.0, 10.0).lateral_points(pt(50.0, 0.0));
    let m = lp.mirrored();
    assert_eq!(m.right, lp.left);
    assert_eq!(m.left, lp.right);
    assert_eq!(m.front, lp.back);
    assert_eq!(m.back, lp.front);
    assert_eq!(m.lean_right, lp.rear_left);
    assert_eq!(m.lean_left, lp.rear_right);
    assert_eq!(m.rear_right, lp.lean_left);
    assert_eq!(m.rear_left, lp.lean_right);
}

#[test]
fn anchor_lateral_points_face_away_from_successor() {
    // Successor trails behind on -x, so the anchor faces +x.
    let anchor = Node::new(0.0, 0.0, 10.0);
    let successor = pt(-25.0, 0.0);
    let lp = anchor.anchor_lateral_points(successor);
    let facing = anchor.lateral_points(pt(25.0, 0.0));
    for (a, b) in [
        (lp.right, facing.right),
        (lp.left, facing.left),
        (lp.front, facing.front),
        (lp.back, facing.back),
        (lp.lean_right, facing.lean_right),
        (lp.lean_left, facing.lean_left),
        (lp.rear_right, facing.rear_right),
        (lp.rear_left, facing.rear_left),
        (lp.eye_right, facing.eye_right),
        (lp.eye_left, facing.eye_left),
    ] {
        assert!(point_approx_eq(a, b), "{a:?} != {b:?}");
    }
    assert!(point_approx_eq(lp.front, pt(10.0, 0.0)));
}

#[test]
fn anchor_eyes_are_ahead_of_anchor() {
    let anchor = Node::new(0.0, 0.0, 10.0);
    let lp = anchor.anchor_lateral_points(pt(0.0, 25.0));
    // Facing is -y.
    assert!(lp.eye_right.y < 0.0);
    assert!(lp.eye_left.y < 0.0);
}

// =============================================================
// Joint
// =============================================================

#[test]
fn joint_for_node_reads_and_writes_position() {
    let mut node = Node::new(0.0, 0.0, 2.0);
    node.set_pos(pt(3.0, 4.0));
    assert_eq!(Joint::pos(&node), pt(3.0, 4.0));
    assert_eq!(node.node().size, 2.0);
}
