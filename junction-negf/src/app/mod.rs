//! Configuration loading, logging and the top level evaluation of a configured junction
mod configuration;
mod telemetry;

pub use configuration::{Configuration, JunctionConfig, LatticeConfiguration};
pub use telemetry::{get_subscriber, init_subscriber, LogLevel, TelemetryError};

use crate::{error::JunctionError, sweep::BiasSweep, sweep::IVCurve};
use std::path::Path;

/// Loads the configuration layered in `directory`, validates it and sweeps the configured biases
///
/// Numerical failures at individual biases are recorded in the returned curve. Only problems with the
/// configuration itself are returned as errors.
#[tracing::instrument(name = "Run", level = "info")]
pub fn run(directory: &Path) -> Result<IVCurve, JunctionError> {
    let config = Configuration::build(directory)?.validate()?;
    let junction = config.junction()?;
    let curve = BiasSweep::new(&junction, &config.integration).run(&config.biases());
    tracing::info!(
        "Sweep complete: {} points, {} failed",
        curve.len(),
        curve.failures().count()
    );
    Ok(curve)
}
