// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Fermi
//!
//! Lead occupations in particle-hole space.
//!
//! A lead held at electrochemical potential offset `μ` fills a channel of charge sign `q` according to
//! `fermi(E - q μ, kT)`: particles see the potential shifted up and holes see it shifted down. The offset is
//! measured from the mean of the two leads, so an unbiased junction has identical occupations in both leads.

use crate::{
    device::{InternalSpace, LatticeDimensions, Lead, PhysicsConfig},
    utilities::matrices::block_diagonal,
};
use nalgebra::{DMatrix, DVector};
use num_complex::Complex;

/// An InfoDesk trait providing the information needed to occupy the leads
pub trait OccupationInfoDesk {
    /// The thermal energy `kT`
    fn thermal_energy(&self) -> f64;
    /// The electrochemical potential of `lead` relative to the mean of both leads
    fn chemical_potential_offset(&self, lead: Lead) -> f64;
}

impl OccupationInfoDesk for PhysicsConfig {
    fn thermal_energy(&self) -> f64 {
        self.kt
    }
    fn chemical_potential_offset(&self, lead: Lead) -> f64 {
        PhysicsConfig::chemical_potential_offset(self, lead)
    }
}

/// The logistic Fermi-Dirac distribution `1 / (1 + exp(x / kT))`
pub fn fermi_function(x: f64, kt: f64) -> f64 {
    1. / (1. + (x / kt).exp())
}

/// The diagonal occupation of a single site's internal channels
pub fn occupation_block(
    internal: InternalSpace,
    energy: f64,
    offset: f64,
    kt: f64,
) -> DMatrix<Complex<f64>> {
    let charges = internal.charges();
    DMatrix::from_diagonal(&DVector::from_iterator(
        charges.len(),
        charges
            .iter()
            .map(|charge| Complex::from(fermi_function(energy - charge * offset, kt))),
    ))
}

/// The occupation matrix `F` of `lead` over the whole device, one site block repeated along the diagonal
pub fn occupation_matrix<InfoDesk: OccupationInfoDesk>(
    dimensions: &LatticeDimensions,
    info_desk: &InfoDesk,
    lead: Lead,
    energy: f64,
) -> DMatrix<Complex<f64>> {
    let block = occupation_block(
        dimensions.internal,
        energy,
        info_desk.chemical_potential_offset(lead),
        info_desk.thermal_energy(),
    );
    block_diagonal(&block, dimensions.number_of_sites())
}
