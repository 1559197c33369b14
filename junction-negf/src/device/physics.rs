use crate::error::ConfigurationError;
use num_complex::Complex;
use serde::Deserialize;

/// One of the two semi-infinite superconducting leads
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Lead {
    /// Lead 1, attached to the first layer of the channel
    Source,
    /// Lead 2, attached to the last layer of the channel
    Drain,
}

impl Lead {
    pub const BOTH: [Lead; 2] = [Lead::Source, Lead::Drain];

    pub fn index(&self) -> usize {
        match self {
            Lead::Source => 0,
            Lead::Drain => 1,
        }
    }

    /// The layer of the channel which couples to this lead
    pub fn adjacent_layer(&self, longitudinal: usize) -> usize {
        match self {
            Lead::Source => 0,
            Lead::Drain => longitudinal.saturating_sub(1),
        }
    }
}

/// The parameters which define the tight-binding blocks of a single region
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicalParameters {
    /// Nearest-neighbour hopping energy
    pub t: f64,
    /// Superconducting pairing amplitude
    pub delta: Complex<f64>,
    /// Band chemical potential
    pub mu: f64,
}

impl PhysicalParameters {
    /// The diagonal on-site energy of a particle, `2t - mu`
    pub fn onsite_energy(&self) -> f64 {
        2. * self.t - self.mu
    }
}

/// The physical description of a biased junction
///
/// `mu` enters the on-site energy of every region. The lead electrochemical potentials `mu_1` and `mu_2`
/// only enter the occupations, through their offset from the mean.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct PhysicsConfig {
    /// Positive infinitesimal added to the energy
    pub eta: f64,
    pub t: f64,
    #[serde(default)]
    pub mu: f64,
    pub mu_1: f64,
    pub mu_2: f64,
    pub delta_1: Complex<f64>,
    pub delta_2: Complex<f64>,
    /// Thermal energy
    pub kt: f64,
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (name, value) in [("eta", self.eta), ("kt", self.kt)] {
            if !(value > 0.) || !value.is_finite() {
                return Err(ConfigurationError::NonPositive { name, value });
            }
        }
        Ok(())
    }

    /// The parameters of the layer Hamiltonian describing `lead`
    pub fn lead_parameters(&self, lead: Lead) -> PhysicalParameters {
        PhysicalParameters {
            t: self.t,
            delta: self.pairing(lead),
            mu: self.mu,
        }
    }

    /// The parameters of the normal channel
    pub fn channel_parameters(&self) -> PhysicalParameters {
        PhysicalParameters {
            t: self.t,
            delta: Complex::new(0., 0.),
            mu: self.mu,
        }
    }

    pub fn pairing(&self, lead: Lead) -> Complex<f64> {
        match lead {
            Lead::Source => self.delta_1,
            Lead::Drain => self.delta_2,
        }
    }

    pub fn chemical_potential(&self, lead: Lead) -> f64 {
        match lead {
            Lead::Source => self.mu_1,
            Lead::Drain => self.mu_2,
        }
    }

    /// The electrochemical potential of `lead` measured from the mean of the two leads
    pub fn chemical_potential_offset(&self, lead: Lead) -> f64 {
        self.chemical_potential(lead) - (self.mu_1 + self.mu_2) / 2.
    }

    /// A copy of the junction held at a symmetric bias `mu_1 = V / 2`, `mu_2 = -V / 2`
    pub fn with_bias(&self, bias: f64) -> Self {
        Self {
            mu_1: bias / 2.,
            mu_2: -bias / 2.,
            ..*self
        }
    }

    /// A copy of the junction with the two leads exchanged
    pub fn swapped(&self) -> Self {
        Self {
            mu_1: self.mu_2,
            mu_2: self.mu_1,
            delta_1: self.delta_2,
            delta_2: self.delta_1,
            ..*self
        }
    }
}
