//! Self energies of the semi-infinite leads
//!
//! The lead couples to the device through the inter-layer hopping `β_layer`. Its self energy is the surface
//! Green's function dressed by that coupling, `β_layer g β_layer`, placed on the degrees of freedom of the device
//! layer which touches the lead and zero everywhere else.

use crate::utilities::matrices::embed;
use nalgebra::DMatrix;
use num_complex::Complex;

/// `β g β`, scattered into a zeroed `dimension × dimension` matrix at `layer_indices`
pub(crate) fn contact_self_energy(
    surface_greens_function: &DMatrix<Complex<f64>>,
    layer_hopping: &DMatrix<Complex<f64>>,
    layer_indices: &[usize],
    dimension: usize,
) -> DMatrix<Complex<f64>> {
    let dressed = layer_hopping * surface_greens_function * layer_hopping;
    embed(&dressed, layer_indices, dimension)
}

/// `Γ = i (Σ - Σ†)`
pub(crate) fn broadening(self_energy: &DMatrix<Complex<f64>>) -> DMatrix<Complex<f64>> {
    (self_energy - self_energy.adjoint()) * Complex::new(0., 1.)
}

#[cfg(test)]
mod test {
    use super::{broadening, contact_self_energy};
    use crate::utilities::matrices::{is_anti_hermitian, is_hermitian};
    use nalgebra::DMatrix;
    use num_complex::Complex;

    fn surface() -> DMatrix<Complex<f64>> {
        DMatrix::from_row_slice(
            2,
            2,
            &[
                Complex::new(-0.3, -0.8),
                Complex::new(0.02, -0.01),
                Complex::new(0.02, -0.01),
                Complex::new(0.3, -0.8),
            ],
        )
    }

    #[test]
    fn self_energy_is_confined_to_the_contact_layer() {
        let hopping = DMatrix::from_row_slice(2, 2, &[-1., 0., 0., 1.]).map(Complex::from);
        let self_energy = contact_self_energy(&surface(), &hopping, &[4, 5], 6);
        for row in 0..6 {
            for column in 0..6 {
                if row < 4 || column < 4 {
                    assert_eq!(self_energy[(row, column)], Complex::new(0., 0.));
                }
            }
        }
        // β g β with β = diag(-1, 1) flips the sign of the particle-hole coupling only
        assert_eq!(self_energy[(4, 4)], surface()[(0, 0)]);
        assert_eq!(self_energy[(4, 5)], -surface()[(0, 1)]);
        assert_eq!(self_energy[(5, 5)], surface()[(1, 1)]);
    }

    #[test]
    fn broadening_is_hermitian_and_positive_on_the_diagonal() {
        let hopping = DMatrix::from_row_slice(2, 2, &[-1., 0., 0., 1.]).map(Complex::from);
        let self_energy = contact_self_energy(&surface(), &hopping, &[0, 1], 4);
        assert!(is_anti_hermitian(&(&self_energy - self_energy.adjoint())));
        let gamma = broadening(&self_energy);
        assert!(is_hermitian(&gamma));
        assert!(gamma[(0, 0)].re > 0.);
        assert!(gamma[(1, 1)].re > 0.);
        assert_eq!(gamma[(3, 3)], Complex::new(0., 0.));
    }
}
