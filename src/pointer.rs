//! Pointer input: built-in paths for unattended runs, or recorded samples.
//!
//! Recorded samples are JSON lines of the form
//! `{"x": 120.0, "y": 80.0, "follow": true}`; `follow` defaults to true.
//! Blank lines are skipped.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use std::f64::consts::TAU;
use std::io::BufRead;

use kinematics::point::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::CliError;

/// Radians per tick along the circle and figure-eight paths.
const ANGULAR_SPEED: f64 = 0.02;

/// Distance the wandering pointer covers per tick.
const WANDER_STEP: f64 = 6.0;

/// Largest heading change per tick while wandering.
const WANDER_TURN: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    #[serde(default = "follow_by_default")]
    pub follow: bool,
}

fn follow_by_default() -> bool {
    true
}

impl PointerSample {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone)]
enum Path {
    Circle,
    FigureEight,
    Wander { rng: StdRng, pos: Point, heading: f64 },
}

/// An endless generated pointer path around `center`.
#[derive(Debug, Clone)]
pub struct Pointer {
    path: Path,
    center: Point,
    radius: f64,
    follow: bool,
    tick: u64,
}

impl Pointer {
    #[must_use]
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::with_path(Path::Circle, center, radius)
    }

    #[must_use]
    pub fn figure_eight(center: Point, radius: f64) -> Self {
        Self::with_path(Path::FigureEight, center, radius)
    }

    /// A seeded random walk that turns back once it leaves `radius` of `center`.
    #[must_use]
    pub fn wander(center: Point, radius: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let heading = rng.random_range(0.0..TAU);
        Self::with_path(Path::Wander { rng, pos: center, heading }, center, radius)
    }

    fn with_path(path: Path, center: Point, radius: f64) -> Self {
        Self { path, center, radius, follow: true, tick: 0 }
    }

    /// Emit every sample with `follow` set to this value.
    #[must_use]
    pub fn following(mut self, follow: bool) -> Self {
        self.follow = follow;
        self
    }

    fn next_position(&mut self) -> Point {
        let theta = self.tick as f64 * ANGULAR_SPEED;
        match &mut self.path {
            Path::Circle => self.center.offset_polar(self.radius, theta),
            Path::FigureEight => Point::new(
                self.center.x + self.radius * theta.sin(),
                self.center.y + self.radius * theta.sin() * theta.cos(),
            ),
            Path::Wander { rng, pos, heading } => {
                *heading += rng.random_range(-WANDER_TURN..=WANDER_TURN);
                if pos.distance(self.center) > self.radius {
                    if let Some(home) = pos.heading_to(self.center) {
                        *heading = home;
                    }
                }
                *pos = pos.offset_polar(WANDER_STEP, *heading);
                *pos
            }
        }
    }
}

impl Iterator for Pointer {
    type Item = PointerSample;

    fn next(&mut self) -> Option<PointerSample> {
        let pos = self.next_position();
        self.tick += 1;
        Some(PointerSample { x: pos.x, y: pos.y, follow: self.follow })
    }
}

/// Parse one JSON line; `Ok(None)` for blank lines.
///
/// # Errors
///
/// Returns [`CliError::Json`] when the line is not a pointer sample.
pub fn parse_line(line: &str) -> Result<Option<PointerSample>, CliError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(trimmed)?))
}

/// Samples from a JSON-lines reader, in order, skipping blank lines.
pub fn read_samples<R: BufRead>(reader: R) -> impl Iterator<Item = Result<PointerSample, CliError>> {
    reader
        .lines()
        .filter_map(|line| match line {
            Ok(line) => parse_line(&line).transpose(),
            Err(error) => Some(Err(CliError::Io(error))),
        })
}
