use super::InternalSpace;
use crate::error::ConfigurationError;
use junction_lattice::{create_cubic_lattice, Lattice};

/// The extent of the junction lattice and the internal space carried on each site
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LatticeDimensions {
    /// Sites along each lateral axis, `N_lat`
    pub lateral: usize,
    /// Layers along the transport axis, `N_z`
    pub longitudinal: usize,
    /// Internal degrees of freedom per site
    pub internal: InternalSpace,
}

impl LatticeDimensions {
    /// Checked construction from raw counts, as they arrive from a configuration file
    pub fn new(lateral: i64, longitudinal: i64, internal: usize) -> Result<Self, ConfigurationError> {
        let lateral = usize::try_from(lateral).map_err(|_| ConfigurationError::NegativeDimension {
            name: "lateral",
            value: lateral,
        })?;
        let longitudinal =
            usize::try_from(longitudinal).map_err(|_| ConfigurationError::NegativeDimension {
                name: "longitudinal",
                value: longitudinal,
            })?;
        Ok(Self {
            lateral,
            longitudinal,
            internal: InternalSpace::try_from(internal)?,
        })
    }

    /// A one-dimensional chain of `longitudinal` Nambu sites
    pub fn nambu_chain(longitudinal: usize) -> Self {
        Self {
            lateral: 1,
            longitudinal,
            internal: InternalSpace::NambuSpinor,
        }
    }

    pub fn number_of_sites(&self) -> usize {
        self.sites_per_layer() * self.longitudinal
    }

    pub fn sites_per_layer(&self) -> usize {
        self.lateral * self.lateral
    }

    /// Size of the block describing a single layer, `N_lat² · N_int`
    pub fn layer_dimension(&self) -> usize {
        self.sites_per_layer() * self.internal.dimension()
    }

    /// Size of the full device matrix, `N_lat² · N_z · N_int`
    pub fn matrix_dimension(&self) -> usize {
        self.number_of_sites() * self.internal.dimension()
    }

    /// The dimensions of a single layer of this lattice, used to describe a lead
    pub fn single_layer(&self) -> Self {
        Self {
            longitudinal: 1,
            ..*self
        }
    }

    pub fn lattice(&self) -> Lattice {
        create_cubic_lattice(self.lateral, self.longitudinal)
    }

    /// Confirms the lattice can carry a current between two leads
    pub fn check_transport(&self) -> Result<(), ConfigurationError> {
        if self.lateral == 0 || self.longitudinal < 2 {
            return Err(ConfigurationError::LatticeTooSmall {
                lateral: self.lateral,
                longitudinal: self.longitudinal,
            });
        }
        Ok(())
    }
}
