//! Distance-constraint propagation over an ordered chain.
//!
//! Index 0 is the anchor. The forward passes walk root→tip and correct each
//! node against its already-corrected predecessor; the backward passes walk
//! tip→root and never move the anchor.

#[cfg(test)]
#[path = "handler_test.rs"]
mod handler_test;

use crate::node::Joint;
use crate::point::Point;

/// Enforces link lengths on a chain of [`Joint`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicsHandler {
    pub node_spacing: f64,
}

impl KinematicsHandler {
    #[must_use]
    pub fn new(node_spacing: f64) -> Self {
        Self { node_spacing }
    }

    /// Pull every node that is farther than `node_spacing` from its
    /// predecessor back to exactly `node_spacing`, root to tip.
    pub fn apply_forwards_distance_constraint<J: Joint>(&self, nodes: &mut [J]) {
        for i in 1..nodes.len() {
            let anchor = nodes[i - 1].pos();
            self.pull_within(&mut nodes[i], anchor);
        }
    }

    /// Same as [`Self::apply_forwards_distance_constraint`] but tip to root,
    /// correcting each node against its successor. The anchor is not moved.
    pub fn apply_backwards_distance_constraint<J: Joint>(&self, nodes: &mut [J]) {
        for i in (1..nodes.len().saturating_sub(1)).rev() {
            let anchor = nodes[i + 1].pos();
            self.pull_within(&mut nodes[i], anchor);
        }
    }

    /// Re-snap every node to exactly `node_spacing` from its predecessor,
    /// root to tip, whether it was too far or too close.
    pub fn apply_forwards_node_spacing<J: Joint>(&self, nodes: &mut [J]) {
        for i in 1..nodes.len() {
            let anchor = nodes[i - 1].pos();
            self.snap_to_spacing(&mut nodes[i], anchor);
        }
    }

    /// Re-snap every node except the anchor to exactly `node_spacing` from
    /// its successor, tip to root.
    pub fn apply_backwards_node_spacing<J: Joint>(&self, nodes: &mut [J]) {
        for i in (1..nodes.len().saturating_sub(1)).rev() {
            let anchor = nodes[i + 1].pos();
            self.snap_to_spacing(&mut nodes[i], anchor);
        }
    }

    /// Limit the turn between consecutive segments to `angle_margin` radians.
    ///
    /// When a triplet turns too sharply the next node is moved onto the
    /// bisector of the two segment directions, keeping its link length.
    /// Triplets with a zero-length segment are skipped.
    pub fn apply_angle_constraint<J: Joint>(&self, nodes: &mut [J], angle_margin: f64) {
        if nodes.len() < 3 {
            return;
        }
        for i in 1..nodes.len() - 1 {
            let prev = nodes[i - 1].pos();
            let curr = nodes[i].pos();
            let next = nodes[i + 1].pos();

            let (v1x, v1y) = (curr.x - prev.x, curr.y - prev.y);
            let (v2x, v2y) = (next.x - curr.x, next.y - curr.y);
            let n1 = v1x.hypot(v1y);
            let n2 = v2x.hypot(v2y);
            if n1 == 0.0 || n2 == 0.0 {
                continue;
            }
            let (u1x, u1y) = (v1x / n1, v1y / n1);
            let (u2x, u2y) = (v2x / n2, v2y / n2);

            let angle = (u1x * u2x + u1y * u2y).clamp(-1.0, 1.0).acos();
            if angle <= angle_margin {
                continue;
            }

            let (bx, by) = (u1x + u2x, u1y + u2y);
            let bn = bx.hypot(by);
            // A full reversal has no bisector.
            if bn == 0.0 {
                continue;
            }
            nodes[i + 1].set_pos(Point::new(curr.x + n2 * bx / bn, curr.y + n2 * by / bn));
        }
    }

    /// Length of a fully stretched chain of `node_count` nodes.
    #[must_use]
    pub fn total_length(&self, node_count: usize) -> f64 {
        self.node_spacing * node_count.saturating_sub(1) as f64
    }

    fn pull_within<J: Joint>(&self, joint: &mut J, anchor: Point) {
        let distance = joint.pos().distance(anchor);
        if distance > self.node_spacing {
            joint.node_mut().step_toward(anchor, distance - self.node_spacing);
        }
    }

    fn snap_to_spacing<J: Joint>(&self, joint: &mut J, anchor: Point) {
        let distance = joint.pos().distance(anchor);
        joint.node_mut().step_toward(anchor, distance - self.node_spacing);
    }
}
