//! Procedural kinematics for a legged creature that chases a pointer.
//!
//! A creature is a spine of sized nodes. The head eases toward a target each
//! tick, every other node is dragged along by distance constraints, and
//! selected spine nodes carry legs whose feet are placed with FABRIK and step
//! only when the body has moved far enough. The crate has no notion of
//! pixels or drawing: each tick produces plain coordinates (node positions,
//! lateral offset points and a closed outline) through [`snapshot`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`point`] | 2D point and angle helpers |
//! | [`node`] | Sized chain nodes, lateral points, and the [`node::Joint`] seam |
//! | [`handler`] | Distance and angle constraint sweeps over a chain |
//! | [`ik`] | FABRIK solver with an iteration cap |
//! | [`section`] | A chain plus its cached lateral points and outline |
//! | [`outline`] | Natural cubic spline outline through lateral points |
//! | [`leg`] | A leg chain anchored to a spine node |
//! | [`leg_node`] | Leg-bearing spine nodes and the step decision |
//! | [`body`] | The spine and the per-tick update order |
//! | [`snapshot`] | Serializable per-tick output |
//! | [`config`] | Tunables with environment overrides |
//! | [`consts`] | Defaults and the example creature's shape |

pub mod body;
pub mod config;
pub mod consts;
pub mod handler;
pub mod ik;
pub mod leg;
pub mod leg_node;
pub mod node;
pub mod outline;
pub mod point;
pub mod section;
pub mod snapshot;
