//! Spine nodes that carry legs, and the step decision for each foot.
//!
//! Every attached leg has a desired foot position stored in polar form
//! relative to the node's facing. Each tick the desired position is projected
//! into world space; the foot only gets a new committed target when that
//! projection has drifted more than `update_distance` from the last one. The
//! leg then eases toward its committed target. The hysteresis is what makes
//! the feet step instead of sliding along with the body.

#[cfg(test)]
#[path = "leg_node_test.rs"]
mod leg_node_test;

use serde::{Deserialize, Serialize};

use crate::config::CreatureConfig;
use crate::consts::EXAMPLE_LEG_TARGETS;
use crate::leg::Leg;
use crate::node::{Joint, Node};
use crate::point::{Point, normalize_angle};

/// A foot position relative to a node's facing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarTarget {
    pub radius: f64,
    /// Radians from the facing direction, positive toward the right side.
    pub angle: f64,
}

impl PolarTarget {
    #[must_use]
    pub fn new(radius: f64, angle: f64) -> Self {
        Self { radius, angle }
    }
}

/// One leg hanging off a [`LegNode`] together with its target bookkeeping.
#[derive(Debug, Clone)]
pub struct LegAttachment {
    leg: Leg,
    target: PolarTarget,
    /// Where the foot is currently heading. Unset until the first update.
    committed: Option<Point>,
    /// The projection of `target` from the last update.
    desired: Option<Point>,
}

impl LegAttachment {
    #[must_use]
    pub fn leg(&self) -> &Leg {
        &self.leg
    }

    #[must_use]
    pub fn target(&self) -> PolarTarget {
        self.target
    }

    #[must_use]
    pub fn committed(&self) -> Option<Point> {
        self.committed
    }

    #[must_use]
    pub fn desired(&self) -> Option<Point> {
        self.desired
    }
}

#[derive(Debug, Clone)]
pub struct LegNode {
    node: Node,
    update_distance: f64,
    leg_easing: f64,
    attachments: Vec<LegAttachment>,
}

impl LegNode {
    #[must_use]
    pub fn new(node: Node, update_distance: f64, leg_easing: f64) -> Self {
        Self { node, update_distance, leg_easing, attachments: Vec::new() }
    }

    /// A node with the two example legs splayed forward at ±30°.
    #[must_use]
    pub fn example(node: Node, config: &CreatureConfig) -> Self {
        EXAMPLE_LEG_TARGETS.iter().fold(
            Self::new(node, config.update_distance, config.leg_easing),
            |leg_node, &(radius, angle)| leg_node.with_leg(Leg::example(config), PolarTarget::new(radius, angle)),
        )
    }

    #[must_use]
    pub fn with_leg(mut self, leg: Leg, target: PolarTarget) -> Self {
        self.attach(leg, target);
        self
    }

    pub fn attach(&mut self, leg: Leg, target: PolarTarget) {
        self.attachments.push(LegAttachment { leg, target, committed: None, desired: None });
    }

    // --- Accessors ---

    #[must_use]
    pub fn attachments(&self) -> &[LegAttachment] {
        &self.attachments
    }

    pub fn legs(&self) -> impl Iterator<Item = &Leg> {
        self.attachments.iter().map(LegAttachment::leg)
    }

    #[must_use]
    pub fn update_distance(&self) -> f64 {
        self.update_distance
    }

    #[must_use]
    pub fn committed_target(&self, index: usize) -> Option<Point> {
        self.attachments.get(index).and_then(LegAttachment::committed)
    }

    #[must_use]
    pub fn desired_target(&self, index: usize) -> Option<Point> {
        self.attachments.get(index).and_then(LegAttachment::desired)
    }

    // --- Frames ---

    /// World position of `target` when this node faces `facing`.
    ///
    /// Falls back to the node position when `facing` coincides with it.
    #[must_use]
    pub fn polar_to_cartesian(&self, facing: Point, target: PolarTarget) -> Point {
        self.node.relative_point(facing, target.radius, target.angle)
    }

    /// Inverse of [`LegNode::polar_to_cartesian`], with the angle in (-π, π].
    ///
    /// Returns `None` when `facing` coincides with the node. A `point` on the
    /// node itself has radius 0 and angle 0.
    #[must_use]
    pub fn cartesian_to_polar(&self, facing: Point, point: Point) -> Option<PolarTarget> {
        let reference = self.node.pos.heading_to(facing)?;
        let radius = self.node.pos.distance(point);
        let angle = self.node.pos.heading_to(point).map_or(0.0, |heading| normalize_angle(heading - reference));
        Some(PolarTarget { radius, angle })
    }

    // --- Tick ---

    /// Re-anchor every leg, decide which feet step, then ease the legs.
    ///
    /// `facing` is the point this node looks toward this tick.
    pub fn update(&mut self, facing: Point) {
        let node = self.node;
        for (index, attachment) in self.attachments.iter_mut().enumerate() {
            attachment.leg.update(node.pos);

            let desired = node.relative_point(facing, attachment.target.radius, attachment.target.angle);
            attachment.desired = Some(desired);
            let drifted = attachment.committed.is_none_or(|committed| committed.distance(desired) > self.update_distance);
            if drifted {
                tracing::trace!(leg = index, ?desired, "leg stepped");
                attachment.committed = Some(desired);
            }
        }
        self.move_legs_towards_target(self.leg_easing);
    }

    /// Ease every leg `percentage` of the way toward its committed target.
    pub fn move_legs_towards_target(&mut self, percentage: f64) {
        for attachment in &mut self.attachments {
            if let Some(target) = attachment.committed {
                attachment.leg.move_towards(target, percentage);
            }
        }
    }

    pub fn refresh_legs(&mut self) {
        for attachment in &mut self.attachments {
            attachment.leg.refresh();
        }
    }
}

impl Joint for LegNode {
    fn node(&self) -> &Node {
        &self.node
    }

    fn node_mut(&mut self) -> &mut Node {
        &mut self.node
    }
}
