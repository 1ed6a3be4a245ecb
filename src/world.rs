//! The tick loop: feed pointer samples to a body and write snapshots out.

#[cfg(test)]
#[path = "world_test.rs"]
mod world_test;

use std::io::Write;

use kinematics::body::Body;
use kinematics::node::Joint;
use kinematics::snapshot::CreatureSnapshot;
use serde::Serialize;

use crate::CliError;
use crate::pointer::PointerSample;

#[derive(Debug, Clone)]
pub struct World {
    body: Body,
    tick: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub emitted: u64,
}

impl World {
    #[must_use]
    pub fn new(body: Body) -> Self {
        Self { body, tick: 0 }
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advance one tick with `sample` as the pointer.
    pub fn step(&mut self, sample: PointerSample) {
        self.body.update(sample.position(), sample.follow);
        self.tick += 1;
    }

    #[must_use]
    pub fn snapshot(&self) -> CreatureSnapshot {
        CreatureSnapshot::capture(&self.body, self.tick)
    }

    /// Step through `samples`, writing a JSON snapshot line every `every` ticks
    /// and after the final tick.
    ///
    /// # Errors
    ///
    /// Stops at the first sample error, serialization failure, or write failure.
    pub fn run<I, W>(&mut self, samples: I, every: u64, out: &mut W) -> Result<RunSummary, CliError>
    where
        I: IntoIterator<Item = Result<PointerSample, CliError>>,
        W: Write,
    {
        let every = every.max(1);
        let mut summary = RunSummary { ticks: 0, emitted: 0 };
        let mut pending = false;
        for sample in samples {
            self.step(sample?);
            summary.ticks += 1;
            pending = true;
            if self.tick.is_multiple_of(every) {
                self.emit(out)?;
                summary.emitted += 1;
                pending = false;
            }
        }
        if pending {
            self.emit(out)?;
            summary.emitted += 1;
        }
        out.flush()?;
        Ok(summary)
    }

    fn emit<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        serde_json::to_writer(&mut *out, &self.snapshot())?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

/// Static description of a creature's shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topology {
    pub spine_spacing: f64,
    pub spine: Vec<f64>,
    pub legs: Vec<LegTopology>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegTopology {
    pub attached_to: usize,
    pub spacing: f64,
    pub sizes: Vec<f64>,
    pub radius: f64,
    pub angle: f64,
}

impl Topology {
    #[must_use]
    pub fn of(body: &Body) -> Self {
        let spine = body.segments().iter().map(|segment| segment.node().size).collect();
        let legs = body
            .leg_nodes()
            .flat_map(|(attached_to, leg_node)| {
                leg_node.attachments().iter().map(move |attachment| LegTopology {
                    attached_to,
                    spacing: attachment.leg().section().handler().node_spacing(),
                    sizes: attachment.leg().section().nodes().iter().map(|node| node.size).collect(),
                    radius: attachment.target().radius,
                    angle: attachment.target().angle,
                })
            })
            .collect();
        Self { spine_spacing: body.section().handler().node_spacing(), spine, legs }
    }
}
