//! Shared numeric constants for the kinematics crate.
//!
//! These are the defaults the example creature was tuned with. Anything a
//! caller may want to tweak at runtime is also exposed on
//! [`crate::config::CreatureConfig`].

use std::f64::consts::PI;

// ── Chains ──────────────────────────────────────────────────────

/// Link length between adjacent spine nodes.
pub const SPINE_SPACING: f64 = 25.0;

/// Link length between adjacent leg nodes.
pub const LEG_SPACING: f64 = 20.0;

/// FABRIK convergence tolerance: tip-to-target distance considered "reached".
pub const ERROR_MARGIN: f64 = 3.0;

/// Upper bound on FABRIK forward/backward iterations per solve.
pub const MAX_FABRIK_ITERATIONS: u32 = 64;

// ── Motion ──────────────────────────────────────────────────────

/// The head covers `remaining / FOLLOW_DIVISOR` of the gap to the target per tick.
pub const FOLLOW_DIVISOR: f64 = 30.0;

/// Fraction of the gap a foot covers toward its committed target per tick.
pub const LEG_EASING: f64 = 0.3;

/// Fraction each leg node moves toward its straight stretch position when the
/// target is out of reach.
pub const STRETCH_EASING: f64 = 0.7;

/// Distance the desired foot position may drift before the leg steps.
pub const STEP_DISTANCE: f64 = 150.0;

// ── Outline ─────────────────────────────────────────────────────

/// Number of uniform spline samples taken across the outline parameter range.
pub const OUTLINE_SAMPLES: usize = 500;

/// Eye offset as a fraction of the node size.
pub const EYE_RADIUS_RATIO: f64 = 0.5;

// ── Example creature ────────────────────────────────────────────

/// Node sizes of the example spine, head first.
pub const EXAMPLE_BODY_SHAPE: [f64; 12] = [23.0, 25.0, 16.0, 23.0, 35.0, 35.0, 25.0, 10.0, 6.0, 4.0, 4.0, 4.0];

/// Spine indices of the example body that carry a pair of legs.
pub const EXAMPLE_LEG_INDICES: [usize; 2] = [1, 5];

/// Node sizes of the example leg, hip first.
pub const EXAMPLE_LEG_SHAPE: [f64; 5] = [6.0; 5];

/// Polar foot target `(radius, angle)` of the example legs, relative to facing.
pub const EXAMPLE_LEG_TARGETS: [(f64, f64); 2] = [(100.0, PI / 6.0), (100.0, -PI / 6.0)];

/// Where every example node starts before the first tick.
pub const EXAMPLE_START: (f64, f64) = (10.0, 10.0);
