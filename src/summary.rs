//! Kinematic extrema derived from a full trajectory.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::trajectory::Trajectory;

/// Peak angular and linear kinematic quantities of a trajectory.
///
/// Computed once from the full sampled trajectory; the sampled maxima
/// approach the closed-form bounds `θ₀ω` and `θ₀ω²` from below and never
/// exceed them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Peak |angular velocity| (rad/s)
    pub max_angular_velocity: f64,
    /// Peak linear bob speed (m/s), `max_angular_velocity · L`
    pub max_linear_velocity: f64,
    /// Peak |angular acceleration| (rad/s²)
    pub max_angular_acceleration: f64,
    /// Peak linear bob acceleration (m/s²), `max_angular_acceleration · L`
    pub max_linear_acceleration: f64,
}

/// Maximum absolute value over a series.
fn max_abs(series: &Array1<f64>) -> f64 {
    series.iter().fold(0.0_f64, |m, v| m.max(v.abs()))
}

impl SummaryStatistics {
    /// Compute the extrema from a trajectory and the pendulum length.
    pub fn from_trajectory(trajectory: &Trajectory, length_m: f64) -> Self {
        let max_angular_velocity = max_abs(&trajectory.angular_velocity);
        let max_angular_acceleration = max_abs(&trajectory.angular_acceleration);

        Self {
            max_angular_velocity,
            max_linear_velocity: max_angular_velocity * length_m,
            max_angular_acceleration,
            max_linear_acceleration: max_angular_acceleration * length_m,
        }
    }
}
