//! Plain-coordinate view of a [`Body`] for whoever draws it.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use serde::Serialize;

use crate::body::Body;
use crate::node::{Joint, LateralPoints, Node};
use crate::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeSnapshot {
    pub pos: Point,
    pub size: f64,
}

impl From<&Node> for NodeSnapshot {
    fn from(node: &Node) -> Self {
        Self { pos: node.pos, size: node.size }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegSnapshot {
    /// Spine index of the node the leg hangs from.
    pub attached_to: usize,
    pub nodes: Vec<NodeSnapshot>,
    /// Committed foot target.
    pub target: Option<Point>,
    /// Where the foot would go if it stepped now.
    pub desired: Option<Point>,
    pub outline: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatureSnapshot {
    pub tick: u64,
    pub spine: Vec<NodeSnapshot>,
    pub legs: Vec<LegSnapshot>,
    pub lateral: Vec<LateralPoints>,
    pub outline: Vec<Point>,
}

impl CreatureSnapshot {
    #[must_use]
    pub fn capture(body: &Body, tick: u64) -> Self {
        let spine = body.segments().iter().map(|segment| NodeSnapshot::from(segment.node())).collect();
        let legs = body
            .leg_nodes()
            .flat_map(|(attached_to, leg_node)| {
                leg_node.attachments().iter().map(move |attachment| LegSnapshot {
                    attached_to,
                    nodes: attachment.leg().section().nodes().iter().map(NodeSnapshot::from).collect(),
                    target: attachment.committed(),
                    desired: attachment.desired(),
                    outline: attachment.leg().section().outline().to_vec(),
                })
            })
            .collect();

        Self {
            tick,
            spine,
            legs,
            lateral: body.section().lateral().to_vec(),
            outline: body.section().outline().to_vec(),
        }
    }
}
