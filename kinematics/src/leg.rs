//! A leg: a short chain hanging off a spine node, solved with FABRIK.

#[cfg(test)]
#[path = "leg_test.rs"]
mod leg_test;

use crate::config::CreatureConfig;
use crate::consts::{EXAMPLE_LEG_SHAPE, EXAMPLE_START};
use crate::ik::{FabrikOutcome, InverseKinematicsHandler};
use crate::node::{Joint, Node};
use crate::point::Point;
use crate::section::Section;

#[derive(Debug, Clone)]
pub struct Leg {
    section: Section<Node>,
    stretch_easing: f64,
}

impl Leg {
    #[must_use]
    pub fn new(nodes: Vec<Node>, handler: InverseKinematicsHandler, stretch_easing: f64) -> Self {
        Self { section: Section::new(nodes, handler), stretch_easing }
    }

    /// Five equally sized nodes stacked at the example start point.
    #[must_use]
    pub fn example(config: &CreatureConfig) -> Self {
        let (x, y) = EXAMPLE_START;
        let nodes = EXAMPLE_LEG_SHAPE.iter().map(|&size| Node::new(x, y, size)).collect();
        let handler = InverseKinematicsHandler::new(config.error_margin, config.leg_spacing)
            .with_max_iterations(config.max_iterations);
        Self::new(nodes, handler, config.stretch_easing)
    }

    #[must_use]
    pub fn section(&self) -> &Section<Node> {
        &self.section
    }

    /// The foot, i.e. the last node; `None` for an empty leg.
    #[must_use]
    pub fn tip(&self) -> Option<Point> {
        self.section.nodes().last().map(Joint::pos)
    }

    /// Re-attach the leg to `anchor` after the body moved.
    ///
    /// The distance constraint runs before the anchor is placed, so this only
    /// tidies links stretched by the previous solve; the next solve brings the
    /// rest of the chain along.
    pub fn update(&mut self, anchor: Point) {
        self.section.apply_distance_constraint();
        self.section.set_anchor_position(anchor);
    }

    /// Reach for `target` with the foot.
    ///
    /// Out-of-reach targets stretch the leg toward them and return `None`;
    /// reachable ones are solved and return the solve outcome.
    pub fn move_leg_end_to(&mut self, target: Point) -> Option<FabrikOutcome> {
        let handler = *self.section.handler();
        if handler.too_far(self.section.nodes(), target) {
            self.section.extend_towards(target, self.stretch_easing);
            return None;
        }
        Some(handler.fabrik(self.section.nodes_mut(), target))
    }

    /// Move the foot `percentage` of the way from where it is to `target`.
    pub fn move_towards(&mut self, target: Point, percentage: f64) -> Option<FabrikOutcome> {
        let tip = self.tip()?;
        self.move_leg_end_to(tip.lerp(target, percentage))
    }

    pub fn refresh(&mut self) {
        self.section.refresh();
    }
}
