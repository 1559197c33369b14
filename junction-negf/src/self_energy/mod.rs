// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Self Energy
//!
//! Retarded self energies and broadening matrices of the two leads at a single energy.
//!
//! The self energy of the source lead sits on the first layer of the device and that of the drain lead on the
//! last layer. Both are assembled from the converged surface Green's functions of the leads:
//!
//! ```ignore
//! SelfEnergyBuilder::default()
//!     .with_hamiltonian(&hamiltonian)
//!     .with_surface_greens_functions(&surfaces)
//!     .build();
//! ```

mod contact;

use crate::{
    device::Lead,
    greens_functions::{SurfaceConvergenceRecord, SurfaceGreensFunction},
    hamiltonian::Hamiltonian,
};
use contact::{broadening, contact_self_energy};
use nalgebra::DMatrix;
use num_complex::Complex;

#[derive(Clone, Debug)]
pub struct SelfEnergy {
    retarded: [DMatrix<Complex<f64>>; 2],
    broadening: [DMatrix<Complex<f64>>; 2],
    records: [SurfaceConvergenceRecord; 2],
}

impl SelfEnergy {
    /// The retarded self energy `Σ` of `lead`, of the size of the device Hamiltonian
    pub fn retarded(&self, lead: Lead) -> &DMatrix<Complex<f64>> {
        &self.retarded[lead.index()]
    }

    /// Both retarded self energies, ordered source then drain
    pub fn retarded_self_energies(&self) -> &[DMatrix<Complex<f64>>] {
        &self.retarded
    }

    /// The broadening `Γ = i (Σ - Σ†)` of `lead`
    pub fn broadening(&self, lead: Lead) -> &DMatrix<Complex<f64>> {
        &self.broadening[lead.index()]
    }

    /// How the surface solve of `lead` terminated
    pub fn record(&self, lead: Lead) -> &SurfaceConvergenceRecord {
        &self.records[lead.index()]
    }

    pub fn records(&self) -> [SurfaceConvergenceRecord; 2] {
        self.records
    }
}

pub struct SelfEnergyBuilder<RefHamiltonian, RefSurfaces> {
    hamiltonian: RefHamiltonian,
    surfaces: RefSurfaces,
}

impl Default for SelfEnergyBuilder<(), ()> {
    fn default() -> Self {
        Self {
            hamiltonian: (),
            surfaces: (),
        }
    }
}

impl<RefHamiltonian, RefSurfaces> SelfEnergyBuilder<RefHamiltonian, RefSurfaces> {
    /// Attach the device Hamiltonian, which fixes the contact layers and the coupling into them
    pub fn with_hamiltonian(
        self,
        hamiltonian: &Hamiltonian,
    ) -> SelfEnergyBuilder<&Hamiltonian, RefSurfaces> {
        SelfEnergyBuilder {
            hamiltonian,
            surfaces: self.surfaces,
        }
    }

    /// Attach the surface Green's functions of the source and drain leads, in that order
    pub fn with_surface_greens_functions(
        self,
        surfaces: &[SurfaceGreensFunction; 2],
    ) -> SelfEnergyBuilder<RefHamiltonian, &[SurfaceGreensFunction; 2]> {
        SelfEnergyBuilder {
            hamiltonian: self.hamiltonian,
            surfaces,
        }
    }
}

impl SelfEnergyBuilder<&Hamiltonian, &[SurfaceGreensFunction; 2]> {
    /// Dress the surface Green's functions onto the end layers of the device. A device with no layers has
    /// nothing to couple to and gets empty self energies.
    pub fn build(self) -> SelfEnergy {
        let hamiltonian = self.hamiltonian;
        let records = [*self.surfaces[0].record(), *self.surfaces[1].record()];
        let longitudinal = hamiltonian.dimensions().longitudinal;
        if longitudinal == 0 {
            let empty = DMatrix::zeros(0, 0);
            return SelfEnergy {
                retarded: [empty.clone(), empty.clone()],
                broadening: [empty.clone(), empty],
                records,
            };
        }
        let layer_hopping = hamiltonian.layer_hopping();
        let retarded = Lead::BOTH.map(|lead| {
            contact_self_energy(
                self.surfaces[lead.index()].matrix(),
                &layer_hopping,
                &hamiltonian.layer_indices(lead.adjacent_layer(longitudinal)),
                hamiltonian.num_rows(),
            )
        });
        let broadening = [broadening(&retarded[0]), broadening(&retarded[1])];
        SelfEnergy {
            retarded,
            broadening,
            records,
        }
    }
}
