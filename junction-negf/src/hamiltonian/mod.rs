// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Hamiltonian module
//!
//! Creates the tight-binding Hamiltonian of a junction segment in particle-hole space.
//!
//! A Hamiltonian is constructed through the `HamiltonianBuilder` from the `LatticeDimensions` of the segment
//! and an implementation of `HamiltonianInfoDesk`, which supplies the hopping energy, band chemical potential
//! and pairing amplitude:
//!
//! ```ignore
//! HamiltonianBuilder::default()
//!     .with_dimensions(&dimensions)
//!     .with_parameters(&parameters)
//!     .build();
//! ```
//!
//! The Hamiltonian matrix is dense, of dimension `N_lat² · N_z · N_int`. Rows are ordered by lattice site in the
//! enumeration order of the lattice, with `z` varying fastest, and each site's internal channels are contiguous.
//! The block at site pair `(i, j)` is the on-site block when `i == j`, the hopping block when the two sites are
//! nearest neighbours, and zero otherwise.
//!
//! Because `z` varies fastest a single layer is not contiguous in the matrix when the lateral size exceeds one,
//! so layer-resolved quantities are always addressed through `Hamiltonian::layer_indices`.

mod local;

use crate::{
    device::{LatticeDimensions, PhysicalParameters},
    utilities::matrices::{block_diagonal, extract, is_hermitian},
};
use junction_lattice::{Connectivity, Lattice};
use local::AssembleSiteBlocks;
use nalgebra::DMatrix;
use num_complex::Complex;

/// An InfoDesk trait providing the external information required to construct the Hamiltonian
pub trait HamiltonianInfoDesk {
    /// The nearest-neighbour hopping energy `t`
    fn hopping(&self) -> f64;
    /// The band chemical potential `mu`, entering the on-site energy
    fn band_chemical_potential(&self) -> f64;
    /// The superconducting pairing amplitude
    fn pairing(&self) -> Complex<f64>;
}

impl HamiltonianInfoDesk for PhysicalParameters {
    fn hopping(&self) -> f64 {
        self.t
    }
    fn band_chemical_potential(&self) -> f64 {
        self.mu
    }
    fn pairing(&self) -> Complex<f64> {
        self.delta
    }
}

#[derive(Clone, Debug)]
/// The Hamiltonian of a junction segment, with the blocks it was assembled from
pub struct Hamiltonian {
    dimensions: LatticeDimensions,
    lattice: Lattice,
    matrix: DMatrix<Complex<f64>>,
    onsite: DMatrix<Complex<f64>>,
    hopping: DMatrix<Complex<f64>>,
}

/// The on-site and inter-layer hopping matrices of a single layer of a semi-infinite lead
#[derive(Clone, Debug, PartialEq)]
pub struct LeadHamiltonian {
    /// The Hamiltonian of one layer of the lead, `α`
    pub onsite: DMatrix<Complex<f64>>,
    /// The hopping between successive layers of the lead, `β`
    pub hopping: DMatrix<Complex<f64>>,
}

/// Builder for a Hamiltonian from the reference to a `LatticeDimensions` and an object implementing HamiltonianInfoDesk
pub struct HamiltonianBuilder<RefDimensions, RefInfoDesk> {
    dimensions: RefDimensions,
    info_desk: RefInfoDesk,
}

impl Default for HamiltonianBuilder<(), ()> {
    /// Initialize an empty instance of HamiltonianBuilder
    fn default() -> Self {
        Self {
            dimensions: (),
            info_desk: (),
        }
    }
}

impl<RefDimensions, RefInfoDesk> HamiltonianBuilder<RefDimensions, RefInfoDesk> {
    /// Attach the lattice dimensions
    pub fn with_dimensions(
        self,
        dimensions: &LatticeDimensions,
    ) -> HamiltonianBuilder<&LatticeDimensions, RefInfoDesk> {
        HamiltonianBuilder {
            dimensions,
            info_desk: self.info_desk,
        }
    }

    /// Attach an implementation of `HamiltonianInfoDesk`
    pub fn with_parameters<InfoDesk>(
        self,
        info_desk: &InfoDesk,
    ) -> HamiltonianBuilder<RefDimensions, &InfoDesk> {
        HamiltonianBuilder {
            dimensions: self.dimensions,
            info_desk,
        }
    }
}

impl<InfoDesk: HamiltonianInfoDesk> HamiltonianBuilder<&LatticeDimensions, &InfoDesk> {
    /// Builds an instance of `Hamiltonian` from a `HamiltonianBuilder`
    #[tracing::instrument(name = "Hamiltonian Builder", level = "debug", skip(self))]
    pub fn build(self) -> Hamiltonian {
        Hamiltonian::build_operator(self.dimensions, self.info_desk)
    }
}

impl Hamiltonian {
    /// Assemble the dense matrix by walking the site enumeration and each site's nearest neighbours
    fn build_operator<InfoDesk: HamiltonianInfoDesk>(
        dimensions: &LatticeDimensions,
        info_desk: &InfoDesk,
    ) -> Self {
        let lattice = dimensions.lattice();
        let onsite = dimensions.internal.onsite_block(info_desk);
        let hopping = dimensions.internal.hopping_block(info_desk);
        let block_size = dimensions.internal.dimension();

        let num_rows = lattice.num_sites() * block_size;
        tracing::trace!("Assembling a {num_rows} x {num_rows} Hamiltonian");
        let mut matrix = DMatrix::zeros(num_rows, num_rows);
        for (site, connectivity) in lattice.connectivity().into_iter().enumerate() {
            let row = site * block_size;
            matrix
                .slice_mut((row, row), (block_size, block_size))
                .copy_from(&onsite);
            for neighbour in connectivity.neighbour_indices() {
                let column = neighbour * block_size;
                matrix
                    .slice_mut((row, column), (block_size, block_size))
                    .copy_from(&hopping);
            }
        }

        Self {
            dimensions: *dimensions,
            lattice,
            matrix,
            onsite,
            hopping,
        }
    }

    /// The layer Hamiltonian and inter-layer hopping of a semi-infinite lead with the cross-section of `dimensions`
    pub fn lead<InfoDesk: HamiltonianInfoDesk>(
        dimensions: &LatticeDimensions,
        info_desk: &InfoDesk,
    ) -> LeadHamiltonian {
        let layer = HamiltonianBuilder::default()
            .with_dimensions(&dimensions.single_layer())
            .with_parameters(info_desk)
            .build();
        let hopping = layer.layer_hopping();
        LeadHamiltonian {
            onsite: layer.matrix,
            hopping,
        }
    }

    pub fn matrix(&self) -> &DMatrix<Complex<f64>> {
        &self.matrix
    }

    /// Return the number of rows in the full `Hamiltonian` matrix
    pub fn num_rows(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn dimensions(&self) -> &LatticeDimensions {
        &self.dimensions
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// The on-site block `α` of a single site
    pub fn onsite_block(&self) -> &DMatrix<Complex<f64>> {
        &self.onsite
    }

    /// The hopping block `β` between two nearest-neighbour sites
    pub fn hopping_block(&self) -> &DMatrix<Complex<f64>> {
        &self.hopping
    }

    /// The matrix indices of every degree of freedom in layer `z`, ordered by lateral site then internal channel
    pub fn layer_indices(&self, z: usize) -> Vec<usize> {
        let block_size = self.dimensions.internal.dimension();
        self.lattice
            .sites_in_layer(z)
            .into_iter()
            .flat_map(|site| (0..block_size).map(move |channel| site * block_size + channel))
            .collect()
    }

    /// The hopping between two adjacent layers, `I_{N_lat²} ⊗ β`
    pub fn layer_hopping(&self) -> DMatrix<Complex<f64>> {
        block_diagonal(&self.hopping, self.dimensions.sites_per_layer())
    }

    /// The Hamiltonian of a single layer, including the lateral hopping within it
    pub fn layer_onsite(&self) -> DMatrix<Complex<f64>> {
        if self.dimensions.longitudinal == 0 {
            return DMatrix::zeros(0, 0);
        }
        let indices = self.layer_indices(0);
        extract(&self.matrix, &indices, &indices)
    }

    pub fn is_hermitian(&self) -> bool {
        is_hermitian(&self.matrix)
    }

    /// Whether the inter-site hopping block is hermitian, as the surface recursion `β g β` assumes
    pub fn is_hermitian_hopping(&self) -> bool {
        is_hermitian(&self.hopping)
    }
}
