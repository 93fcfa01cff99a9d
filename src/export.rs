//! CSV export of a sampled trajectory.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::trajectory::Trajectory;

/// Build a `DataFrame` with one row per trajectory sample.
///
/// Columns: `t, theta, omega, alpha, x, y`.
pub fn trajectory_dataframe(trajectory: &Trajectory) -> Result<DataFrame, PolarsError> {
    df!(
        "t" => trajectory.time.to_vec(),
        "theta" => trajectory.angle.to_vec(),
        "omega" => trajectory.angular_velocity.to_vec(),
        "alpha" => trajectory.angular_acceleration.to_vec(),
        "x" => trajectory.position_x.to_vec(),
        "y" => trajectory.position_y.to_vec(),
    )
}

/// Write the trajectory to a CSV file with a header row.
pub fn write_csv<P: AsRef<Path>>(
    trajectory: &Trajectory,
    path: P,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut df = trajectory_dataframe(trajectory)?;
    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).has_header(true).finish(&mut df)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimulationParameters;
    use crate::trajectory::generate;

    #[test]
    fn test_dataframe_shape() {
        let (traj, _) = generate(&SimulationParameters::default()).unwrap();
        let df = trajectory_dataframe(&traj).unwrap();

        assert_eq!(df.height(), 500);
        assert_eq!(
            df.get_column_names(),
            vec!["t", "theta", "omega", "alpha", "x", "y"]
        );
    }
}
