//! Node geometry: a sized point in a chain and the offset points derived from it.
//!
//! A [`Node`] has no explicit link to its predecessor. Chains are plain slices
//! where the predecessor of index `i` is `i - 1` and index 0 is the anchor, so
//! every geometry call here takes its reference point as an argument.
//!
//! [`Joint`] is the seam that lets the chain handlers operate on any element
//! that wraps a node (plain spine nodes, leg-bearing spine nodes, leg nodes).

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use serde::{Deserialize, Serialize};

use crate::consts::EYE_RADIUS_RATIO;
use crate::point::Point;

/// A positioned, sized chain element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub pos: Point,
    /// Render radius; also the offset distance for lateral points.
    pub size: f64,
}

impl Node {
    #[must_use]
    pub fn new(x: f64, y: f64, size: f64) -> Self {
        Self { pos: Point::new(x, y), size }
    }

    #[must_use]
    pub fn distance_to(&self, other: &Node) -> f64 {
        self.pos.distance(other.pos)
    }

    #[must_use]
    pub fn distance_to_point(&self, target: Point) -> f64 {
        self.pos.distance(target)
    }

    /// Move `travel` toward `target`, snapping onto it when it is closer than that.
    ///
    /// A negative `travel` moves away from the target. When the node sits exactly
    /// on the target there is no direction to move away along, so it stays put.
    pub fn step_toward(&mut self, target: Point, travel: f64) {
        if self.pos.distance(target) <= travel {
            self.pos = target;
            return;
        }
        let Some(heading) = self.pos.heading_to(target) else {
            tracing::trace!(?target, travel, "step_toward: coincident target, node left in place");
            return;
        };
        self.pos = self.pos.offset_polar(travel, heading);
    }

    /// Point `distance` away from this node, rotated `delta_angle` from the
    /// direction toward `target`.
    ///
    /// Returns the node's own position when `target` coincides with it.
    #[must_use]
    pub fn relative_point(&self, target: Point, distance: f64, delta_angle: f64) -> Point {
        match self.pos.heading_to(target) {
            Some(heading) => self.pos.offset_polar(distance, heading + delta_angle),
            None => {
                tracing::trace!(?target, "relative_point: no facing, using node position");
                self.pos
            }
        }
    }

    /// Offset points around this node assuming it faces `target`.
    #[must_use]
    pub fn lateral_points(&self, target: Point) -> LateralPoints {
        let at = |angle: f64| self.relative_point(target, self.size, angle);
        let eye = |angle: f64| self.relative_point(target, self.size * EYE_RADIUS_RATIO, angle);
        LateralPoints {
            right: at(FRAC_PI_2),
            left: at(-FRAC_PI_2),
            front: at(0.0),
            back: at(PI),
            lean_right: at(FRAC_PI_4),
            lean_left: at(-FRAC_PI_4),
            rear_right: at(3.0 * FRAC_PI_4),
            rear_left: at(-3.0 * FRAC_PI_4),
            eye_right: eye(FRAC_PI_4),
            eye_left: eye(-FRAC_PI_4),
        }
    }

    /// Lateral points for a chain anchor, whose reference is its successor.
    ///
    /// The anchor faces away from `successor`, so relative to
    /// [`Node::lateral_points`] toward the successor right/left and front/back are
    /// swapped, as are each lean point with the opposite rear point. The eyes are
    /// placed in the facing frame so they stay at the front of the head.
    #[must_use]
    pub fn anchor_lateral_points(&self, successor: Point) -> LateralPoints {
        let facing = self.pos.reflect(successor);
        let eye_radius = self.size * EYE_RADIUS_RATIO;
        LateralPoints {
            eye_right: self.relative_point(facing, eye_radius, FRAC_PI_4),
            eye_left: self.relative_point(facing, eye_radius, -FRAC_PI_4),
            ..self.lateral_points(successor).mirrored()
        }
    }
}

/// Named offset points around a node, relative to its facing.
///
/// Angles are measured from the facing direction: right is +90°, left is -90°.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LateralPoints {
    pub right: Point,
    pub left: Point,
    pub front: Point,
    pub back: Point,
    /// +45°.
    pub lean_right: Point,
    /// -45°.
    pub lean_left: Point,
    /// +135°.
    pub rear_right: Point,
    /// -135°.
    pub rear_left: Point,
    /// +45° at half radius.
    pub eye_right: Point,
    /// -45° at half radius.
    pub eye_left: Point,
}

impl LateralPoints {
    /// Swap the sides and ends of the body-frame points: right/left, front/back,
    /// lean right/rear left, lean left/rear right. Eyes are left alone.
    #[must_use]
    pub fn mirrored(self) -> Self {
        Self {
            right: self.left,
            left: self.right,
            front: self.back,
            back: self.front,
            lean_right: self.rear_left,
            lean_left: self.rear_right,
            rear_right: self.lean_left,
            rear_left: self.lean_right,
            eye_right: self.eye_right,
            eye_left: self.eye_left,
        }
    }
}

/// Anything in a chain that wraps a [`Node`].
pub trait Joint {
    fn node(&self) -> &Node;
    fn node_mut(&mut self) -> &mut Node;

    fn pos(&self) -> Point {
        self.node().pos
    }

    fn set_pos(&mut self, pos: Point) {
        self.node_mut().pos = pos;
    }
}

impl Joint for Node {
    fn node(&self) -> &Node {
        self
    }

    fn node_mut(&mut self) -> &mut Node {
        self
    }
}
