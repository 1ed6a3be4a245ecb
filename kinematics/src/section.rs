//! An ordered chain plus the geometry derived from it for rendering.
//!
//! A [`Section`] owns its nodes exclusively. The lateral point sets and the
//! outline are caches: they are rebuilt by [`Section::refresh`] once per tick,
//! after every position change for that tick has been applied.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use crate::consts::OUTLINE_SAMPLES;
use crate::ik::InverseKinematicsHandler;
use crate::node::{Joint, LateralPoints};
use crate::outline;
use crate::point::Point;

#[derive(Debug, Clone)]
pub struct Section<J> {
    nodes: Vec<J>,
    handler: InverseKinematicsHandler,
    lateral: Vec<LateralPoints>,
    outline: Vec<Point>,
}

impl<J: Joint> Section<J> {
    #[must_use]
    pub fn new(nodes: Vec<J>, handler: InverseKinematicsHandler) -> Self {
        let mut section = Self { nodes, handler, lateral: Vec::new(), outline: Vec::new() };
        section.refresh();
        section
    }

    // --- Accessors ---

    #[must_use]
    pub fn nodes(&self) -> &[J] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [J] {
        &mut self.nodes
    }

    #[must_use]
    pub fn handler(&self) -> &InverseKinematicsHandler {
        &self.handler
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Lateral point sets as of the last [`Section::refresh`], anchor first.
    #[must_use]
    pub fn lateral(&self) -> &[LateralPoints] {
        &self.lateral
    }

    /// Closed outline as of the last [`Section::refresh`].
    #[must_use]
    pub fn outline(&self) -> &[Point] {
        &self.outline
    }

    /// Length of the chain when fully stretched.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.handler.base.total_length(self.nodes.len())
    }

    // --- Mutation ---

    pub fn apply_distance_constraint(&mut self) {
        self.handler.base.apply_forwards_distance_constraint(&mut self.nodes);
    }

    pub fn apply_angle_constraint(&mut self, angle_margin: f64) {
        self.handler.base.apply_angle_constraint(&mut self.nodes, angle_margin);
    }

    pub fn set_anchor_position(&mut self, pos: Point) {
        if let Some(anchor) = self.nodes.first_mut() {
            anchor.set_pos(pos);
        }
    }

    /// Stretch the chain toward `target` without solving.
    ///
    /// Each node after the anchor moves `easing` of the way to the point one
    /// link length from its (already moved) predecessor in the direction of
    /// `target`.
    pub fn extend_towards(&mut self, target: Point, easing: f64) {
        let spacing = self.handler.node_spacing();
        for i in 1..self.nodes.len() {
            let stretched = self.nodes[i - 1].node().relative_point(target, spacing, 0.0);
            let current = self.nodes[i].pos();
            self.nodes[i].set_pos(current.lerp(stretched, easing));
        }
    }

    /// Rebuild the lateral point sets and the outline from current positions.
    pub fn refresh(&mut self) {
        self.lateral = self.lateral_point_sets();
        self.outline = outline::outline(&self.lateral, OUTLINE_SAMPLES);
    }

    /// One [`LateralPoints`] per node: the anchor faces away from its
    /// successor, every other node faces its predecessor.
    ///
    /// A chain with fewer than two nodes has no facing and yields no sets.
    #[must_use]
    pub fn lateral_point_sets(&self) -> Vec<LateralPoints> {
        if self.nodes.len() < 2 {
            return Vec::new();
        }
        let mut sets = Vec::with_capacity(self.nodes.len());
        sets.push(self.nodes[0].node().anchor_lateral_points(self.nodes[1].pos()));
        sets.extend(self.nodes.windows(2).map(|w| w[1].node().lateral_points(w[0].pos())));
        sets
    }
}
