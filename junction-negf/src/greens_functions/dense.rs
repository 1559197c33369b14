//! Dense implementations of the device Green's functions
use super::GreensFunctionMethods;
use crate::{
    error::NumericalError,
    hamiltonian::Hamiltonian,
    utilities::matrices::{shifted_resolvent_argument, try_invert},
};
use nalgebra::DMatrix;
use num_complex::Complex;

impl GreensFunctionMethods for DMatrix<Complex<f64>> {
    type SelfEnergy = DMatrix<Complex<f64>>;

    fn generate_retarded(
        energy: f64,
        eta: f64,
        hamiltonian: &Hamiltonian,
        self_energies: &[Self::SelfEnergy],
    ) -> Result<Self, NumericalError> {
        // do a slow matrix inversion
        let matrix = self_energies.iter().fold(
            shifted_resolvent_argument(hamiltonian.matrix(), energy, eta),
            |matrix, self_energy| matrix - self_energy,
        );
        try_invert(matrix, "retarded Green's function", energy)
    }

    fn generate_advanced(&self) -> Self {
        self.adjoint()
    }

    fn generate_correlation(&self, in_scattering: &Self::SelfEnergy) -> Self {
        self * in_scattering * self.adjoint()
    }
}

#[cfg(test)]
mod test {
    use crate::{
        device::{LatticeDimensions, PhysicalParameters},
        greens_functions::GreensFunctionMethods,
        hamiltonian::HamiltonianBuilder,
        utilities::matrices::is_hermitian,
    };
    use approx::assert_relative_eq;
    use nalgebra::DMatrix;
    use num_complex::Complex;

    #[test]
    fn retarded_function_inverts_the_resolvent() {
        let dimensions = LatticeDimensions::nambu_chain(4);
        let parameters = PhysicalParameters {
            t: 1.,
            delta: Complex::new(0., 0.),
            mu: 2.,
        };
        let hamiltonian = HamiltonianBuilder::default()
            .with_dimensions(&dimensions)
            .with_parameters(&parameters)
            .build();
        let (energy, eta) = (0.25, 1e-3);
        let retarded =
            DMatrix::<Complex<f64>>::generate_retarded(energy, eta, &hamiltonian, &[]).unwrap();
        let product = (DMatrix::from_diagonal_element(8, 8, Complex::new(energy, eta))
            - hamiltonian.matrix())
            * &retarded;
        assert_relative_eq!(
            (product - DMatrix::<Complex<f64>>::identity(8, 8)).norm(),
            0.,
            epsilon = 1e-10
        );
    }

    #[test]
    fn correlation_of_a_hermitian_input_is_hermitian() {
        let retarded = DMatrix::from_row_slice(
            2,
            2,
            &[
                Complex::new(0.3, -0.2),
                Complex::new(0.1, 0.05),
                Complex::new(-0.4, 0.1),
                Complex::new(0.2, -0.6),
            ],
        );
        let in_scattering = DMatrix::from_row_slice(
            2,
            2,
            &[
                Complex::new(1., 0.),
                Complex::new(0.2, 0.3),
                Complex::new(0.2, -0.3),
                Complex::new(0.5, 0.),
            ],
        );
        let correlation = retarded.generate_correlation(&in_scattering);
        assert!(is_hermitian(&correlation));
        assert_eq!(retarded.generate_advanced(), retarded.adjoint());
    }
}
