//! Simulation parameters and the constants derived from them.
//!
//! `SimulationParameters` carries the three user-facing inputs (length,
//! initial angle, playback speed). `DerivedConstants` holds the quantities
//! the closed-form model computes from them once per run.

use serde::{Deserialize, Serialize};

use crate::constants::Constants;
use crate::error::PendulumError;

/// User-supplied inputs for one simulation run.
///
/// Immutable once constructed. The documented ranges mirror the input
/// controls of the interactive front end; `new` only rejects degenerate
/// values, while [`SimulationParameters::clamped`] reproduces the front
/// end's range clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Pendulum length (m), documented range 0.1 ..= 10.0
    pub length_m: f64,

    /// Initial angular displacement (degrees), documented range 1 ..= 90
    pub initial_angle_deg: f64,

    /// Playback speed multiplier, documented range 0.1 ..= 10.0.
    /// Affects only replay timing, never the trajectory data.
    pub speed_factor: f64,
}

impl SimulationParameters {
    /// Documented range for `length_m` (m).
    pub const LENGTH_RANGE: (f64, f64) = (0.1, 10.0);
    /// Documented range for `initial_angle_deg` (degrees).
    pub const ANGLE_RANGE: (f64, f64) = (1.0, 90.0);
    /// Documented range for `speed_factor`.
    pub const SPEED_RANGE: (f64, f64) = (0.1, 10.0);

    /// Create parameters, rejecting degenerate values.
    pub fn new(
        length_m: f64,
        initial_angle_deg: f64,
        speed_factor: f64,
    ) -> Result<Self, PendulumError> {
        let params = Self {
            length_m,
            initial_angle_deg,
            speed_factor,
        };
        params.validate()?;
        Ok(params)
    }

    /// Create parameters with each field clamped into its documented range.
    ///
    /// Infinities clamp to the range bounds; a `NaN` field (which would pass
    /// through `f64::clamp` unchanged) falls back to its default, so the
    /// result always validates.
    pub fn clamped(length_m: f64, initial_angle_deg: f64, speed_factor: f64) -> Self {
        let defaults = Self::default();
        Self {
            length_m: clamp_or(length_m, Self::LENGTH_RANGE, defaults.length_m),
            initial_angle_deg: clamp_or(
                initial_angle_deg,
                Self::ANGLE_RANGE,
                defaults.initial_angle_deg,
            ),
            speed_factor: clamp_or(speed_factor, Self::SPEED_RANGE, defaults.speed_factor),
        }
    }

    /// Check for degenerate values.
    ///
    /// Only `length_m <= 0` and `speed_factor <= 0` are rejected; they would
    /// produce a division by zero or a non-positive period. Values outside
    /// the documented ranges but above zero are accepted, since the ranges
    /// are a front-end concern.
    pub fn validate(&self) -> Result<(), PendulumError> {
        if !(self.length_m > 0.0) {
            return Err(PendulumError::invalid("length_m", self.length_m));
        }
        if !(self.speed_factor > 0.0) {
            return Err(PendulumError::invalid("speed_factor", self.speed_factor));
        }
        Ok(())
    }
}

/// Clamp `value` into `range`, substituting `fallback` for `NaN`.
fn clamp_or(value: f64, range: (f64, f64), fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(range.0, range.1)
    }
}

impl Default for SimulationParameters {
    /// The interactive front end's slider defaults: 1 m, 30°, 1× speed.
    fn default() -> Self {
        Self {
            length_m: 1.0,
            initial_angle_deg: 30.0,
            speed_factor: 1.0,
        }
    }
}

/// Quantities computed once from the parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedConstants {
    /// Initial angular displacement (rad)
    pub initial_angle_rad: f64,

    /// Angular frequency ω = sqrt(g/L) (rad/s)
    pub angular_frequency: f64,

    /// Oscillation period T = 2π·sqrt(L/g) (s)
    pub period: f64,
}

impl DerivedConstants {
    /// Compute the derived constants for the given parameters.
    pub fn from_parameters(params: &SimulationParameters, constants: &Constants) -> Self {
        Self {
            initial_angle_rad: params.initial_angle_deg.to_radians(),
            angular_frequency: constants.angular_frequency(params.length_m),
            period: constants.period(params.length_m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_parameters() {
        let p = SimulationParameters::default();
        assert_eq!(p.length_m, 1.0);
        assert_eq!(p.initial_angle_deg, 30.0);
        assert_eq!(p.speed_factor, 1.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_degenerate_length_rejected() {
        let err = SimulationParameters::new(0.0, 30.0, 1.0).unwrap_err();
        assert_eq!(
            err,
            PendulumError::InvalidParameter {
                name: "length_m",
                value: 0.0
            }
        );
        assert!(SimulationParameters::new(-1.0, 30.0, 1.0).is_err());
        assert!(SimulationParameters::new(f64::NAN, 30.0, 1.0).is_err());
    }

    #[test]
    fn test_degenerate_speed_rejected() {
        let err = SimulationParameters::new(1.0, 30.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            PendulumError::InvalidParameter {
                name: "speed_factor",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_range_endpoints_are_valid() {
        assert!(SimulationParameters::new(0.1, 1.0, 0.1).is_ok());
        assert!(SimulationParameters::new(10.0, 90.0, 10.0).is_ok());
    }

    #[test]
    fn test_clamped_matches_slider_ranges() {
        let p = SimulationParameters::clamped(50.0, 120.0, 0.01);
        assert_eq!(p.length_m, 10.0);
        assert_eq!(p.initial_angle_deg, 90.0);
        assert_eq!(p.speed_factor, 0.1);

        let q = SimulationParameters::clamped(1.0, 30.0, 1.0);
        assert_eq!(q, SimulationParameters::default());
    }

    #[test]
    fn test_clamped_handles_non_finite() {
        // NaN cannot be clamped into a range; fall back to the defaults so
        // the clamping path never produces parameters that fail validation.
        let p = SimulationParameters::clamped(f64::NAN, f64::NAN, f64::NAN);
        assert_eq!(p, SimulationParameters::default());
        assert!(p.validate().is_ok());

        let q = SimulationParameters::clamped(f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY);
        assert_eq!(q.length_m, 10.0);
        assert_eq!(q.initial_angle_deg, 1.0);
        assert_eq!(q.speed_factor, 10.0);
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_derived_constants_one_meter() {
        let params = SimulationParameters::default();
        let derived = DerivedConstants::from_parameters(&params, &Constants::new());

        assert_relative_eq!(
            derived.initial_angle_rad,
            std::f64::consts::PI / 6.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(derived.angular_frequency, 3.132, epsilon = 1e-3);
        assert_relative_eq!(derived.period, 2.006, epsilon = 1e-3);
    }

    #[test]
    fn test_derived_constants_ten_meters() {
        let params = SimulationParameters::new(10.0, 1.0, 1.0).unwrap();
        let derived = DerivedConstants::from_parameters(&params, &Constants::new());
        assert_relative_eq!(derived.period, 6.345, epsilon = 1e-3);
    }
}
