//! CLI driver: generate a pendulum trajectory, render it, and print the
//! analysis summary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use pendulum_sim::constants::Constants;
use pendulum_sim::params::{DerivedConstants, SimulationParameters};
use pendulum_sim::render::{self, RenderOptions};
use pendulum_sim::{export, generate};

/// Simulate and animate an idealized simple pendulum (small-angle model).
#[derive(Parser, Debug)]
#[command(name = "pendulum-sim", version, about)]
struct Cli {
    /// Pendulum length in meters (0.1 to 10.0)
    #[arg(long, default_value_t = 1.0)]
    length: f64,

    /// Initial angular displacement in degrees (1 to 90)
    #[arg(long, default_value_t = 30.0)]
    angle: f64,

    /// Playback speed multiplier (0.1 to 10.0)
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Clamp out-of-range values into the documented ranges instead of
    /// rejecting them
    #[arg(long)]
    clamp: bool,

    /// Output path for the animated GIF
    #[arg(long, default_value = "pendulum.gif")]
    gif: PathBuf,

    /// Optional output path for a static kinematics chart (PNG)
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Optional output path for the sampled trajectory (CSV)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Render every n-th trajectory sample
    #[arg(long, default_value_t = 2)]
    stride: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let params = if cli.clamp {
        SimulationParameters::clamped(cli.length, cli.angle, cli.speed)
    } else {
        SimulationParameters::new(cli.length, cli.angle, cli.speed)?
    };

    let constants = Constants::new();
    let derived = DerivedConstants::from_parameters(&params, &constants);
    let (trajectory, summary) = generate(&params)?;
    info!(
        samples = trajectory.sample_count(),
        duration_s = trajectory.duration(),
        "trajectory generated"
    );

    let options = RenderOptions::for_speed(params.speed_factor).with_stride(cli.stride);
    render::animate_gif(&trajectory, params.length_m, &options, &cli.gif)
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("rendering animation to {}", cli.gif.display()))?;
    info!(path = %cli.gif.display(), "animation written");

    if let Some(chart) = &cli.chart {
        render::kinematics_chart(&trajectory, chart)
            .map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("rendering chart to {}", chart.display()))?;
        info!(path = %chart.display(), "kinematics chart written");
    }

    if let Some(csv) = &cli.csv {
        export::write_csv(&trajectory, csv)
            .map_err(|e| anyhow::anyhow!(e))
            .with_context(|| format!("writing trajectory to {}", csv.display()))?;
        info!(path = %csv.display(), "trajectory CSV written");
    }

    println!("Pendulum motion analysis");
    println!("- length: {:.2} m", params.length_m);
    println!(
        "- initial angle: {:.0}° ({:.2} rad)",
        params.initial_angle_deg, derived.initial_angle_rad
    );
    println!("- period (T): {:.3} s", derived.period);
    println!("- angular frequency (ω): {:.3} rad/s", derived.angular_frequency);
    println!(
        "- max angular velocity: {:.3} rad/s",
        summary.max_angular_velocity
    );
    println!(
        "- max linear velocity: {:.3} m/s",
        summary.max_linear_velocity
    );
    println!(
        "- max angular acceleration: {:.3} rad/s²",
        summary.max_angular_acceleration
    );
    println!(
        "- max linear acceleration: {:.3} m/s²",
        summary.max_linear_acceleration
    );

    Ok(())
}
