//! Creature tuning parameters, with defaults and environment overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use crate::consts::{
    ERROR_MARGIN, FOLLOW_DIVISOR, LEG_EASING, LEG_SPACING, MAX_FABRIK_ITERATIONS, SPINE_SPACING, STEP_DISTANCE,
    STRETCH_EASING,
};

/// Error returned by [`CreatureConfig::from_env`] and [`CreatureConfig::validate`].
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid number: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} out of range: {reason}")]
    OutOfRange { var: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreatureConfig {
    pub spine_spacing: f64,
    pub leg_spacing: f64,
    pub error_margin: f64,
    pub max_iterations: u32,
    /// Drift before a leg recommits its foot target.
    pub update_distance: f64,
    pub follow_divisor: f64,
    pub leg_easing: f64,
    pub stretch_easing: f64,
    /// Curvature limit for the spine in radians; `None` leaves it unconstrained.
    pub angle_margin: Option<f64>,
}

impl Default for CreatureConfig {
    fn default() -> Self {
        Self {
            spine_spacing: SPINE_SPACING,
            leg_spacing: LEG_SPACING,
            error_margin: ERROR_MARGIN,
            max_iterations: MAX_FABRIK_ITERATIONS,
            update_distance: STEP_DISTANCE,
            follow_divisor: FOLLOW_DIVISOR,
            leg_easing: LEG_EASING,
            stretch_easing: STRETCH_EASING,
            angle_margin: None,
        }
    }
}

impl CreatureConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `CREATURE_SPINE_SPACING`: default 25
    /// - `CREATURE_LEG_SPACING`: default 20
    /// - `CREATURE_ERROR_MARGIN`: default 3
    /// - `CREATURE_MAX_ITERATIONS`: default 64
    /// - `CREATURE_UPDATE_DISTANCE`: default 150
    /// - `CREATURE_FOLLOW_DIVISOR`: default 30
    /// - `CREATURE_LEG_EASING`: default 0.3
    /// - `CREATURE_STRETCH_EASING`: default 0.7
    /// - `CREATURE_ANGLE_MARGIN`: radians, unset by default
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but does not parse, or
    /// when the resulting config fails [`CreatureConfig::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var_os(key).map(|value| value.to_string_lossy().into_owned()))
    }

    /// Like [`CreatureConfig::from_env`] but reading from an arbitrary lookup.
    ///
    /// # Errors
    ///
    /// See [`CreatureConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            spine_spacing: parse_or(&lookup, "CREATURE_SPINE_SPACING", defaults.spine_spacing)?,
            leg_spacing: parse_or(&lookup, "CREATURE_LEG_SPACING", defaults.leg_spacing)?,
            error_margin: parse_or(&lookup, "CREATURE_ERROR_MARGIN", defaults.error_margin)?,
            max_iterations: parse_or(&lookup, "CREATURE_MAX_ITERATIONS", defaults.max_iterations)?,
            update_distance: parse_or(&lookup, "CREATURE_UPDATE_DISTANCE", defaults.update_distance)?,
            follow_divisor: parse_or(&lookup, "CREATURE_FOLLOW_DIVISOR", defaults.follow_divisor)?,
            leg_easing: parse_or(&lookup, "CREATURE_LEG_EASING", defaults.leg_easing)?,
            stretch_easing: parse_or(&lookup, "CREATURE_STRETCH_EASING", defaults.stretch_easing)?,
            angle_margin: match lookup("CREATURE_ANGLE_MARGIN") {
                Some(raw) => Some(parse_value("CREATURE_ANGLE_MARGIN", &raw)?),
                None => None,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or invert the simulation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("CREATURE_SPINE_SPACING", self.spine_spacing),
            ("CREATURE_LEG_SPACING", self.leg_spacing),
            ("CREATURE_ERROR_MARGIN", self.error_margin),
            ("CREATURE_FOLLOW_DIVISOR", self.follow_divisor),
        ];
        for (var, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::OutOfRange { var, reason: "must be finite and > 0" });
            }
        }
        if !(self.update_distance.is_finite() && self.update_distance >= 0.0) {
            return Err(ConfigError::OutOfRange { var: "CREATURE_UPDATE_DISTANCE", reason: "must be finite and >= 0" });
        }
        let fractions = [
            ("CREATURE_LEG_EASING", self.leg_easing),
            ("CREATURE_STRETCH_EASING", self.stretch_easing),
        ];
        for (var, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange { var, reason: "must be within [0, 1]" });
            }
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::OutOfRange { var: "CREATURE_MAX_ITERATIONS", reason: "must be at least 1" });
        }
        if let Some(margin) = self.angle_margin {
            if !(margin.is_finite() && margin >= 0.0) {
                return Err(ConfigError::OutOfRange { var: "CREATURE_ANGLE_MARGIN", reason: "must be finite and >= 0" });
            }
        }
        Ok(())
    }
}

fn parse_or<T, F>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(raw) => parse_value(var, &raw),
        None => Ok(default),
    }
}

fn parse_value<T: FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidNumber { var, value: raw.to_owned() })
}
