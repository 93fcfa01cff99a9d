//! Display layer: animated GIF of the swinging bob and a static chart of the
//! angular kinematics.
//!
//! This is thin glue over plotters; all numbers come from a precomputed
//! [`Trajectory`], replayed frame by frame. Nothing here feeds back into the
//! computation.

use plotters::prelude::*;
use std::path::Path;

use crate::trajectory::Trajectory;

/// Boxed error from the plotting backend.
pub type RenderError = Box<dyn std::error::Error + Send + Sync>;

/// Margin around the animation plot area (px).
const GIF_MARGIN: u32 = 20;

/// Options for the animated rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Output width in pixels. The GIF height is derived from the data
    /// ranges so both axes share one pixel-per-meter scale.
    pub width: u32,
    /// Render every `stride`-th sample. The frame delay is scaled by the
    /// stride so playback duration is preserved; larger strides trade
    /// smoothness for file size.
    pub stride: usize,
    /// Delay per trajectory sample (ms)
    pub frame_delay_ms: u32,
}

impl RenderOptions {
    /// Options for a given playback speed multiplier.
    ///
    /// The per-sample delay is `max(1, 20 / speed_factor)` ms, so 1× speed
    /// replays 500 samples in ten seconds.
    pub fn for_speed(speed_factor: f64) -> Self {
        Self {
            frame_delay_ms: ((20.0 / speed_factor) as u32).max(1),
            ..Self::default()
        }
    }

    /// Set the frame stride.
    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride.max(1);
        self
    }

    /// Bitmap dimensions for the animation of a pendulum of the given
    /// length.
    ///
    /// The axis ranges are `[-L-0.5, L+0.5] × [-L-0.5, 0.5]`; the height is
    /// chosen so the plot area maps both ranges at the same pixels per
    /// meter, keeping the rod length constant on screen.
    pub fn gif_dimensions(&self, length_m: f64) -> (u32, u32) {
        let x_span = 2.0 * (length_m + 0.5);
        let y_span = length_m + 1.0;
        let margins = 2 * GIF_MARGIN;
        let plot_width = self.width.saturating_sub(margins).max(1);
        let plot_height = (f64::from(plot_width) * y_span / x_span).round() as u32;
        (self.width, plot_height + margins)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 600,
            stride: 2,
            frame_delay_ms: 20,
        }
    }
}

/// Render the trajectory as an animated GIF.
///
/// Each frame draws the rod as a line from the fixed pivot at the origin to
/// the bob, with a marker at the bob. Axis ranges are
/// `[-L-0.5, L+0.5] × [-L-0.5, 0.5]` so the pivot sits near the top of the
/// frame, with equal pixel scale on both axes
/// (see [`RenderOptions::gif_dimensions`]).
pub fn animate_gif<P: AsRef<Path>>(
    trajectory: &Trajectory,
    length_m: f64,
    options: &RenderOptions,
    path: P,
) -> Result<(), RenderError> {
    let stride = options.stride.max(1);
    let delay = options.frame_delay_ms.saturating_mul(stride as u32);

    let root = BitMapBackend::gif(path, options.gif_dimensions(length_m), delay)?
        .into_drawing_area();

    let half = length_m + 0.5;
    for k in (0..trajectory.sample_count()).step_by(stride) {
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(GIF_MARGIN)
            .build_cartesian_2d(-half..half, -half..0.5)?;

        let (x, y) = trajectory.bob_position(k);
        chart.draw_series(LineSeries::new(
            [(0.0, 0.0), (x, y)],
            BLUE.stroke_width(3),
        ))?;
        chart.draw_series(std::iter::once(Circle::new((x, y), 8, BLUE.filled())))?;

        root.present()?;
    }

    Ok(())
}

/// Render a static chart of angle, angular velocity and angular acceleration
/// versus time.
pub fn kinematics_chart<P: AsRef<Path>>(
    trajectory: &Trajectory,
    path: P,
) -> Result<(), RenderError> {
    let root = BitMapBackend::new(path.as_ref(), (800, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let t_end = trajectory.duration();
    let mut y_max = f64::NEG_INFINITY;
    for series in [
        &trajectory.angle,
        &trajectory.angular_velocity,
        &trajectory.angular_acceleration,
    ] {
        y_max = series.iter().fold(y_max, |m, v| m.max(v.abs()));
    }
    let y_max = y_max * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Angular Kinematics", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..t_end, -y_max..y_max)?;

    chart
        .configure_mesh()
        .x_desc("t (s)")
        .draw()?;

    let samples = |series: &ndarray::Array1<f64>| -> Vec<(f64, f64)> {
        trajectory
            .time
            .iter()
            .zip(series.iter())
            .map(|(&t, &v)| (t, v))
            .collect()
    };

    chart
        .draw_series(LineSeries::new(samples(&trajectory.angle), &BLUE))?
        .label("θ (rad)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart
        .draw_series(LineSeries::new(samples(&trajectory.angular_velocity), &RED))?
        .label("θ' (rad/s)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));
    chart
        .draw_series(LineSeries::new(
            samples(&trajectory.angular_acceleration),
            &GREEN,
        ))?
        .label("θ'' (rad/s²)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}
