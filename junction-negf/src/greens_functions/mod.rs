// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Greens Functions
//!
//! Green's functions of the device and of the semi-infinite leads.
//!
//! The device functions are dense. For a device Hamiltonian `H` and lead self energies `Σ_1`, `Σ_2` the retarded
//! Green's function is
//!
//! `G = [(E + iη) I - H - Σ_1 - Σ_2]⁻¹`
//!
//! and the correlation function, which carries the non-equilibrium occupation of the device, is
//!
//! `G_n = G (Γ_1 F_1 + Γ_2 F_2) G†`
//!
//! where `Γ_i` are the broadening matrices of the leads and `F_i` their occupation matrices. The surface
//! Green's functions of the leads, which enter through the self energies, live in `surface`.

mod dense;
mod surface;

pub use surface::{
    SurfaceConvergence, SurfaceConvergenceRecord, SurfaceGreensFunction, SurfaceMethod,
};

use crate::{error::NumericalError, hamiltonian::Hamiltonian};

/// Methods to generate the device Green's functions in a given matrix representation
pub trait GreensFunctionMethods: Sized {
    /// The representation of the lead self energies
    type SelfEnergy;

    /// The retarded Green's function at `energy`, given the retarded self energies of both leads
    fn generate_retarded(
        energy: f64,
        eta: f64,
        hamiltonian: &Hamiltonian,
        self_energies: &[Self::SelfEnergy],
    ) -> Result<Self, NumericalError>;

    /// The advanced Green's function, the adjoint of the retarded
    fn generate_advanced(&self) -> Self;

    /// The correlation function `G Σ_in G†` given the in-scattering function `Σ_in = Σ_i Γ_i F_i`
    fn generate_correlation(&self, in_scattering: &Self::SelfEnergy) -> Self;
}
