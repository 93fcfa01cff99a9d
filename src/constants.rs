//! Physical constants and sampling defaults for the pendulum simulation.
//!
//! Everything the closed-form model needs besides the user-supplied
//! parameters lives here: gravity, the number of trajectory samples, and how
//! many oscillation periods a trajectory spans.

use serde::{Deserialize, Serialize};

/// Number of samples in a generated trajectory.
pub const FRAME_COUNT: usize = 500;

/// Number of full oscillation periods a trajectory spans.
pub const PERIODS_SIMULATED: f64 = 4.0;

/// Global physical constants for the pendulum system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constants {
    /// Gravitational acceleration (m/s²)
    /// Standard value: 9.81 m/s²
    pub g: f64,

    /// Number of time points per generated trajectory
    pub frame_count: usize,

    /// Time span of a trajectory, in oscillation periods
    pub periods_simulated: f64,
}

impl Constants {
    /// Create a new `Constants` instance with default values.
    pub const fn new() -> Self {
        Self {
            g: 9.81,
            frame_count: FRAME_COUNT,
            periods_simulated: PERIODS_SIMULATED,
        }
    }

    /// Angular frequency ω = sqrt(g/L) (rad/s) for a pendulum of the given
    /// length.
    #[inline]
    pub fn angular_frequency(&self, length_m: f64) -> f64 {
        (self.g / length_m).sqrt()
    }

    /// Oscillation period T = 2π·sqrt(L/g) (s) for a pendulum of the given
    /// length.
    #[inline]
    pub fn period(&self, length_m: f64) -> f64 {
        2.0 * std::f64::consts::PI * (length_m / self.g).sqrt()
    }
}

impl Default for Constants {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_constants() {
        let c = Constants::new();
        assert_eq!(c.g, 9.81);
        assert_eq!(c.frame_count, 500);
        assert_eq!(c.periods_simulated, 4.0);
    }

    #[test]
    fn test_period_one_meter() {
        let c = Constants::new();
        // T = 2π·sqrt(1/9.81) ≈ 2.006 s
        assert_relative_eq!(c.period(1.0), 2.006, epsilon = 1e-3);
        assert_relative_eq!(c.angular_frequency(1.0), 9.81_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_period_scales_with_sqrt_length() {
        let c = Constants::new();
        assert_relative_eq!(
            c.period(2.0) / c.period(1.0),
            2.0_f64.sqrt(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            c.angular_frequency(2.0) / c.angular_frequency(1.0),
            1.0 / 2.0_f64.sqrt(),
            epsilon = 1e-12
        );
    }
}
