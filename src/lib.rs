//! Closed-form simple pendulum trajectory simulation.
//!
//! This library provides the computational core of an animated pendulum
//! visualization:
//! - Parameter handling with range validation and clamping
//! - Trajectory generation under the undamped small-angle approximation
//! - Derived kinematic extrema (peak angular/linear velocity and acceleration)
//! - Rendering helpers (animated GIF, kinematics chart) and CSV export
//!
//! # Model
//!
//! The pendulum is modelled as a simple harmonic oscillator,
//! `θ(t) = θ₀·cos(ωt)` with `ω = sqrt(g/L)`. The approximation is exact only
//! in the limit of small `θ₀`; large initial angles are accepted without
//! warning, as a deliberate simplification.

#![warn(missing_docs)]
#![warn(clippy::doc_markdown)]

pub mod constants;
pub mod error;
pub mod export;
pub mod params;
pub mod render;
pub mod summary;
pub mod trajectory;

// Re-export key types and functions for easy use
pub use constants::Constants;
pub use error::PendulumError;
pub use params::{DerivedConstants, SimulationParameters};
pub use summary::SummaryStatistics;
pub use trajectory::{Trajectory, generate, generate_with};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
