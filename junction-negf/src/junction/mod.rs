// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Junction
//!
//! A normal channel between two superconducting leads, evaluated one energy at a time.
//!
//! At each energy the surface Green's functions of both leads are converged, dressed into self energies on the
//! end layers of the channel, and combined with the lead occupations into the correlation function
//!
//! `G_n = G (Γ_1 F_1 + Γ_2 F_2) G†`
//!
//! from which the energy resolved current is read off. Nothing is cached between energies: every matrix is
//! rebuilt from the immutable description held by the `Junction`.
//!
//! ```ignore
//! let junction = JunctionBuilder::default()
//!     .with_dimensions(&dimensions)
//!     .with_physics(&physics)
//!     .with_surface_convergence(&surface)
//!     .build()?;
//! let current = junction.with_bias(0.01).current_at(0.002, CurrentChannel::Representative)?;
//! ```

use crate::{
    device::{LatticeDimensions, Lead, PhysicsConfig},
    error::{ConfigurationError, NumericalError},
    fermi::occupation_matrix,
    greens_functions::{GreensFunctionMethods, SurfaceConvergence, SurfaceGreensFunction},
    hamiltonian::{Hamiltonian, HamiltonianBuilder, LeadHamiltonian},
    postprocessor::{inter_layer_current, CurrentChannel, EnergyResolvedCurrent},
    self_energy::{SelfEnergy, SelfEnergyBuilder},
};
use nalgebra::DMatrix;
use num_complex::Complex;

/// The correlation function at a single energy, with the self energies it was built from
#[derive(Clone, Debug)]
pub struct Correlation {
    pub energy: f64,
    pub matrix: DMatrix<Complex<f64>>,
    pub self_energy: SelfEnergy,
}

#[derive(Clone, Debug)]
pub struct Junction {
    physics: PhysicsConfig,
    surface: SurfaceConvergence,
    hamiltonian: Hamiltonian,
    leads: [LeadHamiltonian; 2],
}

pub struct JunctionBuilder<RefDimensions, RefPhysics, RefSurface> {
    dimensions: RefDimensions,
    physics: RefPhysics,
    surface: RefSurface,
}

impl Default for JunctionBuilder<(), (), ()> {
    fn default() -> Self {
        Self {
            dimensions: (),
            physics: (),
            surface: (),
        }
    }
}

impl<RefDimensions, RefPhysics, RefSurface> JunctionBuilder<RefDimensions, RefPhysics, RefSurface> {
    pub fn with_dimensions(
        self,
        dimensions: &LatticeDimensions,
    ) -> JunctionBuilder<&LatticeDimensions, RefPhysics, RefSurface> {
        JunctionBuilder {
            dimensions,
            physics: self.physics,
            surface: self.surface,
        }
    }

    pub fn with_physics(
        self,
        physics: &PhysicsConfig,
    ) -> JunctionBuilder<RefDimensions, &PhysicsConfig, RefSurface> {
        JunctionBuilder {
            dimensions: self.dimensions,
            physics,
            surface: self.surface,
        }
    }

    pub fn with_surface_convergence(
        self,
        surface: &SurfaceConvergence,
    ) -> JunctionBuilder<RefDimensions, RefPhysics, &SurfaceConvergence> {
        JunctionBuilder {
            dimensions: self.dimensions,
            physics: self.physics,
            surface,
        }
    }
}

impl JunctionBuilder<&LatticeDimensions, &PhysicsConfig, &SurfaceConvergence> {
    /// Validate the description and assemble the channel and lead Hamiltonians
    #[tracing::instrument(name = "Junction Builder", level = "info", skip(self))]
    pub fn build(self) -> Result<Junction, ConfigurationError> {
        self.dimensions.check_transport()?;
        self.physics.validate()?;
        self.surface.validate()?;

        let hamiltonian = HamiltonianBuilder::default()
            .with_dimensions(self.dimensions)
            .with_parameters(&self.physics.channel_parameters())
            .build();
        if !hamiltonian.is_hermitian_hopping() {
            tracing::warn!("the inter-layer hopping is not hermitian");
        }
        let leads = Lead::BOTH
            .map(|lead| Hamiltonian::lead(self.dimensions, &self.physics.lead_parameters(lead)));
        tracing::info!(
            "Junction of {} sites with a {} x {} device matrix",
            self.dimensions.number_of_sites(),
            hamiltonian.num_rows(),
            hamiltonian.num_rows()
        );

        Ok(Junction {
            physics: *self.physics,
            surface: *self.surface,
            hamiltonian,
            leads,
        })
    }
}

impl Junction {
    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }

    pub fn hamiltonian(&self) -> &Hamiltonian {
        &self.hamiltonian
    }

    pub fn lead(&self, lead: Lead) -> &LeadHamiltonian {
        &self.leads[lead.index()]
    }

    /// The same junction held at bias `bias`, which only changes the lead occupations
    pub fn with_bias(&self, bias: f64) -> Self {
        Self {
            physics: self.physics.with_bias(bias),
            ..self.clone()
        }
    }

    /// The converged surface Green's functions of the source and drain leads at `energy`
    pub fn surface_greens_functions(
        &self,
        energy: f64,
    ) -> Result<[SurfaceGreensFunction; 2], NumericalError> {
        let [source, drain] = &self.leads;
        Ok([
            SurfaceGreensFunction::converge(
                energy,
                self.physics.eta,
                &source.onsite,
                &source.hopping,
                &self.surface,
            )?,
            SurfaceGreensFunction::converge(
                energy,
                self.physics.eta,
                &drain.onsite,
                &drain.hopping,
                &self.surface,
            )?,
        ])
    }

    pub fn self_energy(&self, energy: f64) -> Result<SelfEnergy, NumericalError> {
        let surfaces = self.surface_greens_functions(energy)?;
        Ok(SelfEnergyBuilder::default()
            .with_hamiltonian(&self.hamiltonian)
            .with_surface_greens_functions(&surfaces)
            .build())
    }

    /// The retarded Green's function of the channel, `[(E + iη) I - H - Σ_1 - Σ_2]⁻¹`
    pub fn retarded_greens_function(
        &self,
        energy: f64,
        self_energy: &SelfEnergy,
    ) -> Result<DMatrix<Complex<f64>>, NumericalError> {
        DMatrix::<Complex<f64>>::generate_retarded(
            energy,
            self.physics.eta,
            &self.hamiltonian,
            self_energy.retarded_self_energies(),
        )
    }

    /// The in-scattering function `Γ_1 F_1 + Γ_2 F_2`
    pub fn in_scattering(&self, energy: f64, self_energy: &SelfEnergy) -> DMatrix<Complex<f64>> {
        let dimensions = self.hamiltonian.dimensions();
        Lead::BOTH.iter().fold(
            DMatrix::zeros(self.hamiltonian.num_rows(), self.hamiltonian.num_rows()),
            |sum, &lead| {
                sum + self_energy.broadening(lead)
                    * occupation_matrix(dimensions, &self.physics, lead, energy)
            },
        )
    }

    pub fn correlation_at(&self, energy: f64) -> Result<Correlation, NumericalError> {
        let self_energy = self.self_energy(energy)?;
        let retarded = self.retarded_greens_function(energy, &self_energy)?;
        let matrix = retarded.generate_correlation(&self.in_scattering(energy, &self_energy));
        Ok(Correlation {
            energy,
            matrix,
            self_energy,
        })
    }

    /// The current between the first two layers of the channel at `energy`
    pub fn current_at(
        &self,
        energy: f64,
        channel: CurrentChannel,
    ) -> Result<EnergyResolvedCurrent, NumericalError> {
        let correlation = self.correlation_at(energy)?;
        let value = inter_layer_current(&correlation.matrix, &self.hamiltonian, channel);
        tracing::trace!("I({energy}) = {value}");
        Ok(EnergyResolvedCurrent {
            energy,
            value,
            records: correlation.self_energy.records(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::JunctionBuilder;
    use crate::{
        device::{LatticeDimensions, PhysicsConfig},
        error::ConfigurationError,
        greens_functions::SurfaceConvergence,
        postprocessor::CurrentChannel,
    };
    use num_complex::Complex;

    fn physics() -> PhysicsConfig {
        PhysicsConfig {
            eta: 1e-6,
            t: 1.,
            mu: 2.,
            mu_1: 0.01,
            mu_2: -0.01,
            delta_1: Complex::new(0., 0.),
            delta_2: Complex::new(0.05, 0.),
            kt: 1e-3,
        }
    }

    #[test]
    fn short_lattices_are_rejected() {
        let result = JunctionBuilder::default()
            .with_dimensions(&LatticeDimensions::nambu_chain(1))
            .with_physics(&physics())
            .with_surface_convergence(&SurfaceConvergence::default())
            .build();
        assert!(matches!(
            result,
            Err(ConfigurationError::LatticeTooSmall {
                lateral: 1,
                longitudinal: 1
            })
        ));
    }

    #[test]
    fn unbiased_correlation_function_is_hermitian() {
        // With equal lead potentials both occupations are scalar and commute with the broadening
        let unbiased = PhysicsConfig {
            mu_1: 0.,
            mu_2: 0.,
            ..physics()
        };
        let junction = JunctionBuilder::default()
            .with_dimensions(&LatticeDimensions::nambu_chain(4))
            .with_physics(&unbiased)
            .with_surface_convergence(&SurfaceConvergence::default())
            .build()
            .unwrap();
        let correlation = junction.correlation_at(0.004).unwrap();
        let asymmetry = (&correlation.matrix - correlation.matrix.adjoint()).norm();
        assert!(asymmetry < 1e-10 * correlation.matrix.norm());
        let current = junction
            .current_at(0.004, CurrentChannel::Representative)
            .unwrap();
        assert!(current.is_converged());
        assert!(current.residual().abs() < 1e-10 * current.physical().abs().max(1.));
    }

    #[test]
    fn bias_only_changes_the_occupations() {
        let junction = JunctionBuilder::default()
            .with_dimensions(&LatticeDimensions::nambu_chain(3))
            .with_physics(&physics())
            .with_surface_convergence(&SurfaceConvergence::default())
            .build()
            .unwrap();
        let biased = junction.with_bias(0.04);
        assert_eq!(biased.hamiltonian().matrix(), junction.hamiltonian().matrix());
        assert_eq!(biased.physics().mu_1, 0.02);
        assert_eq!(biased.physics().mu_2, -0.02);
    }
}
