use crate::error::NumericalError;
use nalgebra::DMatrix;
use num_complex::Complex;

/// Inverts `matrix`, reporting a singular matrix as a `NumericalError` tagged with the quantity being computed
pub(crate) fn try_invert(
    mut matrix: DMatrix<Complex<f64>>,
    quantity: &'static str,
    energy: f64,
) -> Result<DMatrix<Complex<f64>>, NumericalError> {
    if matrix.try_inverse_mut() {
        Ok(matrix)
    } else {
        Err(NumericalError::SingularMatrix { quantity, energy })
    }
}

/// `(E + iη) I - matrix`
pub(crate) fn shifted_resolvent_argument(
    matrix: &DMatrix<Complex<f64>>,
    energy: f64,
    eta: f64,
) -> DMatrix<Complex<f64>> {
    let dimension = matrix.nrows();
    DMatrix::from_diagonal_element(dimension, dimension, Complex::new(energy, eta)) - matrix
}

/// Repeats `block` along the diagonal `repetitions` times, `I_n ⊗ block`
pub fn block_diagonal(block: &DMatrix<Complex<f64>>, repetitions: usize) -> DMatrix<Complex<f64>> {
    DMatrix::<Complex<f64>>::identity(repetitions, repetitions).kronecker(block)
}

/// Scatters the square `block` into a zeroed `dimension × dimension` matrix at the rows and columns `indices`
pub(crate) fn embed(
    block: &DMatrix<Complex<f64>>,
    indices: &[usize],
    dimension: usize,
) -> DMatrix<Complex<f64>> {
    debug_assert_eq!(block.nrows(), indices.len());
    let mut output = DMatrix::zeros(dimension, dimension);
    for (block_row, &row) in indices.iter().enumerate() {
        for (block_column, &column) in indices.iter().enumerate() {
            output[(row, column)] = block[(block_row, block_column)];
        }
    }
    output
}

/// Gathers the sub-matrix of `matrix` on `rows` and `columns`
pub(crate) fn extract(
    matrix: &DMatrix<Complex<f64>>,
    rows: &[usize],
    columns: &[usize],
) -> DMatrix<Complex<f64>> {
    matrix.select_rows(rows).select_columns(columns)
}

/// Tests for hermiticity of a matrix
pub fn is_hermitian(matrix: &DMatrix<Complex<f64>>) -> bool {
    if !matrix.is_square() {
        return false;
    }
    let scale = matrix.iter().map(|element| element.norm()).fold(1_f64, f64::max);
    let adjoint = matrix.adjoint();
    matrix
        .iter()
        .zip(adjoint.iter())
        .all(|(element, adjoint_element)| {
            (element - adjoint_element).norm() / scale < std::f64::EPSILON * 100_f64
        })
}

/// Tests for anti-hermiticity of a matrix
pub(crate) fn is_anti_hermitian(matrix: &DMatrix<Complex<f64>>) -> bool {
    if !matrix.is_square() {
        return false;
    }
    let scale = matrix.iter().map(|element| element.norm()).fold(1_f64, f64::max);
    let adjoint = matrix.adjoint();
    matrix
        .iter()
        .zip(adjoint.iter())
        .all(|(element, adjoint_element)| {
            (element + adjoint_element).norm() / scale < std::f64::EPSILON * 10000_f64
        })
}
