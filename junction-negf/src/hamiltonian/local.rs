//! Site level constructors for the Hamiltonian matrix
//!
//! This submodule constructs the on-site and nearest-neighbour hopping blocks for a single lattice site,
//! over the internal channels of the site. Every channel contributes `q · (2t - mu)` on the diagonal of the
//! on-site block and `-q · t` on the diagonal of the hopping block, where `q` is the charge sign of the
//! channel. The pairing amplitude couples the particle and hole channels where the internal space has both.

use super::HamiltonianInfoDesk;
use crate::device::InternalSpace;
use nalgebra::DMatrix;
use num_complex::Complex;

/// Helper trait to construct the blocks of the Hamiltonian for a single site
pub(crate) trait AssembleSiteBlocks {
    /// The block on the diagonal of the Hamiltonian at each site
    fn onsite_block<InfoDesk: HamiltonianInfoDesk>(
        &self,
        info_desk: &InfoDesk,
    ) -> DMatrix<Complex<f64>>;

    /// The block coupling two nearest-neighbour sites
    fn hopping_block<InfoDesk: HamiltonianInfoDesk>(
        &self,
        info_desk: &InfoDesk,
    ) -> DMatrix<Complex<f64>>;
}

impl AssembleSiteBlocks for InternalSpace {
    fn onsite_block<InfoDesk: HamiltonianInfoDesk>(
        &self,
        info_desk: &InfoDesk,
    ) -> DMatrix<Complex<f64>> {
        let level = 2. * info_desk.hopping() - info_desk.band_chemical_potential();
        let charges = self.charges();
        let mut block = DMatrix::from_diagonal(&nalgebra::DVector::from_iterator(
            charges.len(),
            charges.iter().map(|charge| Complex::from(charge * level)),
        ));
        if let Some((particle, hole)) = self.pairing_channels() {
            let pairing = info_desk.pairing();
            // The conjugate sits in the hole-particle slot so the block is hermitian for complex pairing
            block[(particle, hole)] = pairing;
            block[(hole, particle)] = pairing.conj();
        }
        block
    }

    fn hopping_block<InfoDesk: HamiltonianInfoDesk>(
        &self,
        info_desk: &InfoDesk,
    ) -> DMatrix<Complex<f64>> {
        let hopping = info_desk.hopping();
        let charges = self.charges();
        DMatrix::from_diagonal(&nalgebra::DVector::from_iterator(
            charges.len(),
            charges.iter().map(|charge| Complex::from(-charge * hopping)),
        ))
    }
}

#[cfg(test)]
mod test {
    use super::AssembleSiteBlocks;
    use crate::device::{InternalSpace, PhysicalParameters};
    use nalgebra::DMatrix;
    use num_complex::Complex;

    #[test]
    fn nambu_blocks_carry_opposite_signs_in_the_hole_channel() {
        let parameters = PhysicalParameters {
            t: 1.,
            delta: Complex::new(0.01, 0.),
            mu: 0.5,
        };
        let onsite = InternalSpace::NambuSpinor.onsite_block(&parameters);
        let expected = DMatrix::from_row_slice(2, 2, &[1.5, 0.01, 0.01, -1.5]).map(Complex::from);
        assert_eq!(onsite, expected);

        let hopping = InternalSpace::NambuSpinor.hopping_block(&parameters);
        let expected = DMatrix::from_row_slice(2, 2, &[-1., 0., 0., 1.]).map(Complex::from);
        assert_eq!(hopping, expected);
    }

    #[test]
    fn scalar_blocks_ignore_the_pairing() {
        let parameters = PhysicalParameters {
            t: 2.,
            delta: Complex::new(0.3, 0.1),
            mu: 1.,
        };
        assert_eq!(
            InternalSpace::Scalar.onsite_block(&parameters),
            DMatrix::from_element(1, 1, Complex::from(3.))
        );
        assert_eq!(
            InternalSpace::Scalar.hopping_block(&parameters),
            DMatrix::from_element(1, 1, Complex::from(-2.))
        );
    }

    #[test]
    fn complex_pairing_is_conjugated_below_the_diagonal() {
        let parameters = PhysicalParameters {
            t: 1.,
            delta: Complex::new(0.02, 0.03),
            mu: 0.,
        };
        let onsite = InternalSpace::NambuSpinor.onsite_block(&parameters);
        assert_eq!(onsite[(0, 1)], Complex::new(0.02, 0.03));
        assert_eq!(onsite[(1, 0)], Complex::new(0.02, -0.03));
    }
}
