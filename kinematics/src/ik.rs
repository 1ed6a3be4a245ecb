//! FABRIK (forward-and-backward-reaching inverse kinematics).
//!
//! Each iteration pins the tip to the target and re-spaces the chain back
//! toward the root, then pins the root to where it started and re-spaces
//! forward. Iteration stops once the tip is within `error_margin` of the
//! target or after `max_iterations`; in the latter case the chain is left in
//! its best approximation.

#[cfg(test)]
#[path = "ik_test.rs"]
mod ik_test;

use crate::consts::MAX_FABRIK_ITERATIONS;
use crate::handler::KinematicsHandler;
use crate::node::Joint;
use crate::point::Point;

/// Result of a single [`InverseKinematicsHandler::fabrik`] solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FabrikOutcome {
    pub converged: bool,
    /// Forward/backward iterations performed (0 when the tip already sat on target).
    pub iterations: u32,
    /// Final tip-to-target distance.
    pub error: f64,
}

/// A [`KinematicsHandler`] that can also solve for a tip target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseKinematicsHandler {
    pub base: KinematicsHandler,
    pub error_margin: f64,
    pub max_iterations: u32,
}

impl InverseKinematicsHandler {
    #[must_use]
    pub fn new(error_margin: f64, node_spacing: f64) -> Self {
        Self {
            base: KinematicsHandler::new(node_spacing),
            error_margin,
            max_iterations: MAX_FABRIK_ITERATIONS,
        }
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn node_spacing(&self) -> f64 {
        self.base.node_spacing
    }

    /// Pin the tip to `target` and re-space every other node back toward it.
    pub fn forward_reach<J: Joint>(&self, nodes: &mut [J], target: Point) {
        let Some(tip) = nodes.last_mut() else {
            return;
        };
        tip.set_pos(target);
        self.base.apply_backwards_node_spacing(nodes);
    }

    /// Pin the root to `start` and re-space every node forward from it.
    pub fn backward_reach<J: Joint>(&self, nodes: &mut [J], start: Point) {
        let Some(root) = nodes.first_mut() else {
            return;
        };
        root.set_pos(start);
        self.base.apply_forwards_node_spacing(nodes);
    }

    /// Drive the tip of `nodes` onto `target`, keeping the root where it is.
    pub fn fabrik<J: Joint>(&self, nodes: &mut [J], target: Point) -> FabrikOutcome {
        let Some(start) = nodes.first().map(Joint::pos) else {
            return FabrikOutcome { converged: true, iterations: 0, error: 0.0 };
        };

        let mut error = self.calculate_error(nodes, target);
        let mut iterations = 0;
        while error > self.error_margin {
            if iterations >= self.max_iterations {
                tracing::debug!(iterations, error, margin = self.error_margin, "fabrik: gave up before converging");
                return FabrikOutcome { converged: false, iterations, error };
            }
            self.forward_reach(nodes, target);
            self.backward_reach(nodes, start);
            error = self.calculate_error(nodes, target);
            iterations += 1;
        }

        FabrikOutcome { converged: true, iterations, error }
    }

    /// Distance from the chain tip to `target`; zero for an empty chain.
    #[must_use]
    pub fn calculate_error<J: Joint>(&self, nodes: &[J], target: Point) -> f64 {
        nodes.last().map_or(0.0, |tip| tip.pos().distance(target))
    }

    /// Whether `target` lies beyond the reach of a fully stretched chain.
    #[must_use]
    pub fn too_far<J: Joint>(&self, nodes: &[J], target: Point) -> bool {
        nodes
            .first()
            .is_some_and(|root| self.base.total_length(nodes.len()) < root.pos().distance(target))
    }
}
