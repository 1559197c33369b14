//! Surface Green's functions of semi-infinite leads
//!
//! A lead is an infinite repetition of a layer with Hamiltonian `α`, each layer coupled to the next by `β`.
//! The Green's function of the terminating layer solves the fixed point
//!
//! `g = [(E + iη) I - α - β g β]⁻¹`
//!
//! The recursion uses `β g β` rather than `β g β†`, which is only correct for a hermitian `β`. This holds for the
//! real diagonal hopping of the tight-binding leads built here, and a non-hermitian `β` is reported with a warning.
//!
//! Two solvers are available. `SurfaceMethod::Damped` iterates the fixed point directly, mixing each update with
//! the previous iterate to suppress oscillation near the gap edges. `SurfaceMethod::Decimation` uses the
//! renormalisation-decimation scheme, which doubles the effective length of the lead each step and reaches the
//! same fixed point in far fewer iterations.

use crate::{
    error::{ConfigurationError, NumericalError},
    utilities::matrices::{is_hermitian, shifted_resolvent_argument, try_invert},
};
use nalgebra::DMatrix;
use num_complex::Complex;
use serde::Deserialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceMethod {
    Damped,
    Decimation,
}

impl Default for SurfaceMethod {
    fn default() -> Self {
        SurfaceMethod::Damped
    }
}

/// The stopping policy of the surface Green's function solver
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SurfaceConvergence {
    pub method: SurfaceMethod,
    /// The iteration cap. Reaching it is reported in the record, never as an error
    pub maximum_iterations: usize,
    /// The relative change between successive iterates below which the solution is accepted
    pub tolerance: f64,
    /// The weight of the previous iterate in each damped update
    pub damping: f64,
}

impl Default for SurfaceConvergence {
    fn default() -> Self {
        Self {
            method: SurfaceMethod::Damped,
            maximum_iterations: 100_000,
            tolerance: 1e-3,
            damping: 0.5,
        }
    }
}

impl SurfaceConvergence {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.maximum_iterations == 0 {
            return Err(ConfigurationError::NonPositive {
                name: "maximum_iterations",
                value: 0.,
            });
        }
        if !(self.tolerance > 0.) {
            return Err(ConfigurationError::NonPositive {
                name: "tolerance",
                value: self.tolerance,
            });
        }
        if !(0. ..1.).contains(&self.damping) {
            return Err(ConfigurationError::DampingOutOfRange {
                name: "damping",
                value: self.damping,
            });
        }
        Ok(())
    }
}

/// How the surface solve terminated
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceConvergenceRecord {
    pub converged: bool,
    pub iterations: usize,
    /// The last measured relative change, or the residual inter-layer coupling for decimation
    pub relative_change: f64,
}

#[derive(Clone, Debug)]
pub struct SurfaceGreensFunction {
    matrix: DMatrix<Complex<f64>>,
    record: SurfaceConvergenceRecord,
}

impl SurfaceGreensFunction {
    /// Solve for the surface Green's function of the lead with layer Hamiltonian `onsite` and inter-layer hopping
    /// `hopping` at `energy`
    ///
    /// Only a failed matrix inversion is an error. A solve which reaches the iteration cap returns its last iterate,
    /// flagged as unconverged in the record.
    pub fn converge(
        energy: f64,
        eta: f64,
        onsite: &DMatrix<Complex<f64>>,
        hopping: &DMatrix<Complex<f64>>,
        convergence: &SurfaceConvergence,
    ) -> Result<Self, NumericalError> {
        if !is_hermitian(hopping) {
            tracing::warn!(
                "non-hermitian inter-layer hopping: the surface recursion assumes β† = β and will be inaccurate"
            );
        }
        let surface = match convergence.method {
            SurfaceMethod::Damped => Self::damped(energy, eta, onsite, hopping, convergence),
            SurfaceMethod::Decimation => {
                Self::decimation(energy, eta, onsite, hopping, convergence)
            }
        }?;
        if !surface.record.converged {
            tracing::warn!(
                "surface Green's function at energy {energy} unconverged after {} iterations, relative change {}",
                surface.record.iterations,
                surface.record.relative_change
            );
        }
        Ok(surface)
    }

    fn damped(
        energy: f64,
        eta: f64,
        onsite: &DMatrix<Complex<f64>>,
        hopping: &DMatrix<Complex<f64>>,
        convergence: &SurfaceConvergence,
    ) -> Result<Self, NumericalError> {
        let resolvent_argument = shifted_resolvent_argument(onsite, energy, eta);
        let mut previous = try_invert(resolvent_argument.clone(), QUANTITY, energy)?;

        let mixing = Complex::from(1. - convergence.damping);
        let damping = Complex::from(convergence.damping);
        let mut relative_change = f64::INFINITY;

        for iteration in 1..=convergence.maximum_iterations {
            let update = try_invert(
                &resolvent_argument - hopping * &previous * hopping,
                QUANTITY,
                energy,
            )?;
            let next = update * mixing + &previous * damping;
            relative_change = relative_norm(&(&next - &previous), &next, &previous);
            previous = next;
            if relative_change < convergence.tolerance {
                tracing::trace!("damped surface solve converged after {iteration} iterations");
                return Ok(Self {
                    matrix: previous,
                    record: SurfaceConvergenceRecord {
                        converged: true,
                        iterations: iteration,
                        relative_change,
                    },
                });
            }
        }

        Ok(Self {
            matrix: previous,
            record: SurfaceConvergenceRecord {
                converged: false,
                iterations: convergence.maximum_iterations,
                relative_change,
            },
        })
    }

    fn decimation(
        energy: f64,
        eta: f64,
        onsite: &DMatrix<Complex<f64>>,
        hopping: &DMatrix<Complex<f64>>,
        convergence: &SurfaceConvergence,
    ) -> Result<Self, NumericalError> {
        let resolvent_argument = shifted_resolvent_argument(onsite, energy, eta);
        let reference = hopping.norm();
        if reference == 0. {
            return Ok(Self {
                matrix: try_invert(resolvent_argument, QUANTITY, energy)?,
                record: SurfaceConvergenceRecord {
                    converged: true,
                    iterations: 0,
                    relative_change: 0.,
                },
            });
        }

        // Renormalised surface and bulk layer energies, and the couplings towards and back from the bulk
        let mut surface = onsite.clone();
        let mut bulk = onsite.clone();
        let mut forward = hopping.clone();
        let mut backward = hopping.clone();
        let mut relative_change = f64::INFINITY;
        let mut converged = false;
        let mut iterations = convergence.maximum_iterations;

        for iteration in 1..=convergence.maximum_iterations {
            let bulk_greens_function = try_invert(
                &resolvent_argument + onsite - &bulk,
                "decimated bulk Green's function",
                energy,
            )?;
            let forward_dressed = &forward * &bulk_greens_function;
            let backward_dressed = &backward * &bulk_greens_function;
            let forward_loop = &forward_dressed * &backward;
            surface += &forward_loop;
            bulk += forward_loop + &backward_dressed * &forward;
            forward = forward_dressed * &forward;
            backward = backward_dressed * &backward;

            relative_change = (forward.norm() + backward.norm()) / (2. * reference);
            if relative_change < convergence.tolerance {
                converged = true;
                iterations = iteration;
                break;
            }
        }

        if converged {
            tracing::trace!("decimation converged after {iterations} iterations");
        }
        Ok(Self {
            matrix: try_invert(&resolvent_argument + onsite - surface, QUANTITY, energy)?,
            record: SurfaceConvergenceRecord {
                converged,
                iterations,
                relative_change,
            },
        })
    }

    pub fn matrix(&self) -> &DMatrix<Complex<f64>> {
        &self.matrix
    }

    pub fn record(&self) -> &SurfaceConvergenceRecord {
        &self.record
    }

    /// The norm of `g - [(E + iη) I - α - β g β]⁻¹`, which vanishes at the fixed point
    pub fn residual(
        &self,
        energy: f64,
        eta: f64,
        onsite: &DMatrix<Complex<f64>>,
        hopping: &DMatrix<Complex<f64>>,
    ) -> Result<f64, NumericalError> {
        let update = try_invert(
            shifted_resolvent_argument(onsite, energy, eta) - hopping * &self.matrix * hopping,
            QUANTITY,
            energy,
        )?;
        Ok((&self.matrix - update).norm())
    }
}

const QUANTITY: &str = "surface Green's function";

/// `‖difference‖ / sqrt(‖a‖ ‖b‖)`, zero when all three vanish
fn relative_norm(
    difference: &DMatrix<Complex<f64>>,
    a: &DMatrix<Complex<f64>>,
    b: &DMatrix<Complex<f64>>,
) -> f64 {
    let numerator = difference.norm();
    if numerator == 0. {
        return 0.;
    }
    numerator / (a.norm() * b.norm()).sqrt()
}
