use crate::{
    device::{LatticeDimensions, PhysicsConfig},
    error::{ConfigurationError, JunctionError},
    greens_functions::SurfaceConvergence,
    junction::{Junction, JunctionBuilder},
    spectral::IntegrationSettings,
    sweep::SweepSettings,
};
use config::{Config, File};
use serde::Deserialize;
use std::{env, path::Path};

/// The raw contents of a configuration file, before validation
#[derive(Debug, Deserialize)]
pub struct Configuration {
    pub lattice: LatticeConfiguration,
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub surface: SurfaceConvergence,
    #[serde(default)]
    pub integration: IntegrationSettings,
    pub sweep: Option<SweepSettings>,
}

/// Lattice dimensions as written by the user. Signed, so a negative entry is reported rather than failing to parse
#[derive(Debug, Deserialize)]
pub struct LatticeConfiguration {
    pub lateral: i64,
    pub longitudinal: i64,
    pub internal: usize,
}

/// A checked configuration, ready to build a `Junction`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct JunctionConfig {
    pub dimensions: LatticeDimensions,
    pub physics: PhysicsConfig,
    pub surface: SurfaceConvergence,
    pub integration: IntegrationSettings,
    pub sweep: Option<SweepSettings>,
}

impl Configuration {
    /// Layers `default.toml` in `directory` with an optional `${RUN_MODE}.toml` override from the same directory
    pub fn build(directory: &Path) -> Result<Self, JunctionError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // The default settings for the junction which we use in the general case
            .add_source(File::from(directory.join("default.toml")))
            // The override settings which may be set by the user, optional
            .add_source(File::from(directory.join(format!("{run_mode}.toml"))).required(false))
            .build()?;

        Ok(s.try_deserialize()?)
    }

    /// Loads a single configuration file
    pub fn from_file(path: &Path) -> Result<Self, JunctionError> {
        let s = Config::builder().add_source(File::from(path)).build()?;
        Ok(s.try_deserialize()?)
    }

    /// Checks every section, so that no matrix is assembled from an invalid description
    pub fn validate(&self) -> Result<JunctionConfig, ConfigurationError> {
        let dimensions = LatticeDimensions::new(
            self.lattice.lateral,
            self.lattice.longitudinal,
            self.lattice.internal,
        )?;
        dimensions.check_transport()?;
        self.physics.validate()?;
        self.surface.validate()?;
        self.integration.validate()?;
        if let Some(sweep) = &self.sweep {
            sweep.validate()?;
        }
        Ok(JunctionConfig {
            dimensions,
            physics: self.physics,
            surface: self.surface,
            integration: self.integration,
            sweep: self.sweep,
        })
    }
}

impl JunctionConfig {
    pub fn junction(&self) -> Result<Junction, ConfigurationError> {
        JunctionBuilder::default()
            .with_dimensions(&self.dimensions)
            .with_physics(&self.physics)
            .with_surface_convergence(&self.surface)
            .build()
    }

    /// The biases of the configured sweep, empty when no sweep was given
    pub fn biases(&self) -> Vec<f64> {
        self.sweep.map(|sweep| sweep.biases()).unwrap_or_default()
    }
}
