//! The creature's spine and the per-tick update that drives it.
//!
//! A tick runs in a fixed order:
//!
//! | Step | What moves |
//! |------|------------|
//! | follow | head eases toward the pointer |
//! | distance constraint | spine links pulled back to `spine_spacing`, head to tail |
//! | angle constraint | optional curvature clamp |
//! | leg nodes | feet step and legs re-solve, head to tail |
//! | refresh | lateral points and outlines for spine and legs |
//!
//! Leg nodes read their facing from their predecessor, so the spine must be
//! fully constrained before any of them runs.

#[cfg(test)]
#[path = "body_test.rs"]
mod body_test;

use crate::config::CreatureConfig;
use crate::consts::{EXAMPLE_BODY_SHAPE, EXAMPLE_LEG_INDICES, EXAMPLE_START};
use crate::ik::InverseKinematicsHandler;
use crate::leg::Leg;
use crate::leg_node::LegNode;
use crate::node::{Joint, Node};
use crate::point::Point;
use crate::section::Section;

/// A spine element: either a plain node or one carrying legs.
#[derive(Debug, Clone)]
pub enum Segment {
    Plain(Node),
    LegBearing(LegNode),
}

impl Segment {
    #[must_use]
    pub fn as_leg_node(&self) -> Option<&LegNode> {
        match self {
            Segment::Plain(_) => None,
            Segment::LegBearing(leg_node) => Some(leg_node),
        }
    }
}

impl Joint for Segment {
    fn node(&self) -> &Node {
        match self {
            Segment::Plain(node) => node,
            Segment::LegBearing(leg_node) => leg_node.node(),
        }
    }

    fn node_mut(&mut self) -> &mut Node {
        match self {
            Segment::Plain(node) => node,
            Segment::LegBearing(leg_node) => leg_node.node_mut(),
        }
    }
}

impl From<Node> for Segment {
    fn from(node: Node) -> Self {
        Segment::Plain(node)
    }
}

impl From<LegNode> for Segment {
    fn from(leg_node: LegNode) -> Self {
        Segment::LegBearing(leg_node)
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    section: Section<Segment>,
    follow_divisor: f64,
    angle_margin: Option<f64>,
}

impl Body {
    #[must_use]
    pub fn new(segments: Vec<Segment>, handler: InverseKinematicsHandler, follow_divisor: f64) -> Self {
        Self { section: Section::new(segments, handler), follow_divisor, angle_margin: None }
    }

    #[must_use]
    pub fn with_angle_margin(mut self, angle_margin: Option<f64>) -> Self {
        self.angle_margin = angle_margin;
        self
    }

    /// The twelve-node example creature with two pairs of legs.
    #[must_use]
    pub fn example(config: &CreatureConfig) -> Self {
        let (x, y) = EXAMPLE_START;
        let segments = EXAMPLE_BODY_SHAPE
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let node = Node::new(x, y, size);
                if EXAMPLE_LEG_INDICES.contains(&i) {
                    Segment::LegBearing(LegNode::example(node, config))
                } else {
                    Segment::Plain(node)
                }
            })
            .collect();
        let handler = InverseKinematicsHandler::new(config.error_margin, config.spine_spacing)
            .with_max_iterations(config.max_iterations);

        Self::new(segments, handler, config.follow_divisor).with_angle_margin(config.angle_margin)
    }

    // --- Accessors ---

    #[must_use]
    pub fn section(&self) -> &Section<Segment> {
        &self.section
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        self.section.nodes()
    }

    #[must_use]
    pub fn head(&self) -> Option<Point> {
        self.segments().first().map(Joint::pos)
    }

    /// Leg-bearing segments with their spine index, head to tail.
    pub fn leg_nodes(&self) -> impl Iterator<Item = (usize, &LegNode)> {
        self.segments()
            .iter()
            .enumerate()
            .filter_map(|(i, segment)| segment.as_leg_node().map(|leg_node| (i, leg_node)))
    }

    pub fn legs(&self) -> impl Iterator<Item = &Leg> {
        self.leg_nodes().flat_map(|(_, leg_node)| leg_node.legs())
    }

    // --- Tick ---

    /// Move the head `distance / follow_divisor` toward `target`.
    pub fn follow(&mut self, target: Point) {
        let Some(head) = self.section.nodes_mut().first_mut() else {
            return;
        };
        let travel = head.node().distance_to_point(target) / self.follow_divisor;
        head.node_mut().step_toward(target, travel);
    }

    /// Advance one tick toward `target`; the head only moves when `follow` is set.
    pub fn update(&mut self, target: Point, follow: bool) {
        if follow {
            self.follow(target);
        }
        self.section.apply_distance_constraint();
        if let Some(margin) = self.angle_margin {
            self.section.apply_angle_constraint(margin);
        }
        self.update_leg_nodes();
        self.refresh();
    }

    /// Run every leg node's step logic, head first.
    ///
    /// Interior nodes face their predecessor. The head has none, so it faces
    /// away from the second node.
    pub fn update_leg_nodes(&mut self) {
        let segments = self.section.nodes_mut();
        let Some(head) = segments.first().map(Joint::pos) else {
            return;
        };
        let head_facing = segments.get(1).map_or(head, |next| head.reflect(next.pos()));
        if let Some(Segment::LegBearing(leg_node)) = segments.first_mut() {
            leg_node.update(head_facing);
        }

        for i in 1..segments.len() {
            let facing = segments[i - 1].pos();
            if let Segment::LegBearing(leg_node) = &mut segments[i] {
                leg_node.update(facing);
            }
        }
    }

    /// Rebuild derived geometry for the spine and every leg.
    pub fn refresh(&mut self) {
        self.section.refresh();
        for segment in self.section.nodes_mut() {
            if let Segment::LegBearing(leg_node) = segment {
                leg_node.refresh_legs();
            }
        }
    }
}
