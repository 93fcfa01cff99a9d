//! Trajectory generation under the small-angle approximation.
//!
//! The core of the crate: a stateless, single-pass mapping from
//! `SimulationParameters` to a time-sampled trajectory plus its kinematic
//! extrema. Identical inputs always yield identical outputs.

use ndarray::Array1;

use crate::constants::Constants;
use crate::error::PendulumError;
use crate::params::{DerivedConstants, SimulationParameters};
use crate::summary::SummaryStatistics;

/// A time-sampled pendulum trajectory.
///
/// All series have exactly [`Trajectory::sample_count`] elements and are
/// index-aligned with `time`. The pivot is fixed at the origin; the bob at
/// sample `k` is at `(position_x[k], position_y[k])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    /// Sample times (s), evenly spaced over `[0, 4T]` inclusive
    pub time: Array1<f64>,
    /// Angular displacement θ(t) (rad)
    pub angle: Array1<f64>,
    /// Angular velocity θ'(t) (rad/s)
    pub angular_velocity: Array1<f64>,
    /// Angular acceleration θ''(t) (rad/s²)
    pub angular_acceleration: Array1<f64>,
    /// Bob x coordinate, `L·sin(θ)` (m)
    pub position_x: Array1<f64>,
    /// Bob y coordinate, `-L·cos(θ)` (m)
    pub position_y: Array1<f64>,
}

impl Trajectory {
    /// Number of samples in each series.
    pub fn sample_count(&self) -> usize {
        self.time.len()
    }

    /// Bob position `(x, y)` at sample `k`.
    ///
    /// # Panics
    /// Panics if `k >= sample_count()`.
    pub fn bob_position(&self, k: usize) -> (f64, f64) {
        (self.position_x[k], self.position_y[k])
    }

    /// Time of the last sample (s), equal to four periods.
    pub fn duration(&self) -> f64 {
        self.time[self.time.len() - 1]
    }
}

/// Generate a trajectory and its summary statistics with the standard
/// physical constants.
///
/// The model is the undamped small-angle (simple-harmonic) approximation,
/// `θ(t) = θ₀·cos(ωt)`; it is exact only in the limit of small `θ₀`, and
/// large initial angles are accepted without warning.
pub fn generate(
    params: &SimulationParameters,
) -> Result<(Trajectory, SummaryStatistics), PendulumError> {
    generate_with(params, &Constants::new())
}

/// Generate a trajectory and its summary statistics with explicit constants.
pub fn generate_with(
    params: &SimulationParameters,
    constants: &Constants,
) -> Result<(Trajectory, SummaryStatistics), PendulumError> {
    params.validate()?;

    let derived = DerivedConstants::from_parameters(params, constants);
    let theta0 = derived.initial_angle_rad;
    let omega = derived.angular_frequency;

    let time = Array1::linspace(
        0.0,
        constants.periods_simulated * derived.period,
        constants.frame_count,
    );

    let angle = time.mapv(|t| theta0 * (omega * t).cos());
    let angular_velocity = time.mapv(|t| -theta0 * omega * (omega * t).sin());
    let angular_acceleration = time.mapv(|t| -theta0 * omega.powi(2) * (omega * t).cos());
    let position_x = angle.mapv(|th| params.length_m * th.sin());
    let position_y = angle.mapv(|th| -params.length_m * th.cos());

    let trajectory = Trajectory {
        time,
        angle,
        angular_velocity,
        angular_acceleration,
        position_x,
        position_y,
    };
    let summary = SummaryStatistics::from_trajectory(&trajectory, params.length_m);

    Ok((trajectory, summary))
}
