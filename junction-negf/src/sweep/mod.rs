// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Sweep
//!
//! Current-voltage characteristics.
//!
//! At each bias `V` the junction is held at `mu_1 = V / 2`, `mu_2 = -V / 2` and the real part of the energy
//! resolved current is integrated over the energy window of the bias. Bias points are independent and are
//! evaluated in parallel. A numerical failure at one bias point is recorded against that point and does not
//! disturb the others, and the curve is always returned in the order the biases were given.

mod conductance;

pub use conductance::gradient;

use crate::{
    error::{ConfigurationError, NumericalError},
    junction::Junction,
    spectral::IntegrationSettings,
};
use ndarray::Array1;
use rayon::prelude::*;
use serde::Deserialize;

/// The energy integral of the current at a single bias
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegratedCurrent {
    pub current: f64,
    pub error_estimate: f64,
    /// False when the quadrature stopped at its subdivision limit
    pub accurate: bool,
    pub evaluations: usize,
    /// The number of energies at which either surface solve hit its iteration cap
    pub unconverged_surface_solves: usize,
    /// The largest imaginary part of the energy resolved current met in the integral
    pub maximum_residual: f64,
}

impl IntegratedCurrent {
    fn zero() -> Self {
        Self {
            current: 0.,
            error_estimate: 0.,
            accurate: true,
            evaluations: 0,
            unconverged_surface_solves: 0,
            maximum_residual: 0.,
        }
    }
}

/// A single point of an I-V curve
#[derive(Clone, Debug, PartialEq)]
pub struct IVPoint {
    pub bias: f64,
    pub outcome: Result<IntegratedCurrent, NumericalError>,
}

impl IVPoint {
    /// The integrated current, or `NaN` for a failed point
    pub fn current(&self) -> f64 {
        self.outcome
            .as_ref()
            .map(|integrated| integrated.current)
            .unwrap_or(f64::NAN)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IVCurve {
    points: Vec<IVPoint>,
}

impl IVCurve {
    pub fn points(&self) -> &[IVPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn biases(&self) -> Array1<f64> {
        self.points.iter().map(|point| point.bias).collect()
    }

    /// The integrated currents, `NaN` where a point failed
    pub fn currents(&self) -> Array1<f64> {
        self.points.iter().map(IVPoint::current).collect()
    }

    /// `dI / dV` at each point of the curve, in the order the points are stored
    ///
    /// The derivative is taken on the biases in ascending order, so a sweep run over an unordered grid gives the
    /// same conductance as the sorted one. Repeated biases have no defined derivative and give `NaN`.
    pub fn differential_conductance(&self) -> Array1<f64> {
        let mut order = (0..self.points.len()).collect::<Vec<_>>();
        order.sort_by(|&a, &b| self.points[a].bias.total_cmp(&self.points[b].bias));
        let grid = order
            .iter()
            .map(|&index| self.points[index].bias)
            .collect::<Vec<_>>();
        let values = order
            .iter()
            .map(|&index| self.points[index].current())
            .collect::<Vec<_>>();

        let mut conductance = Array1::from_elem(self.points.len(), f64::NAN);
        for (slope, &index) in gradient(&grid, &values).into_iter().zip(order.iter()) {
            conductance[index] = slope;
        }
        conductance
    }

    pub fn failures(&self) -> impl Iterator<Item = &IVPoint> {
        self.points.iter().filter(|point| point.outcome.is_err())
    }
}

/// A uniform grid of biases
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub struct SweepSettings {
    pub minimum: f64,
    pub maximum: f64,
    pub number_of_points: usize,
}

impl SweepSettings {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.number_of_points == 0 {
            return Err(ConfigurationError::Sweep(
                "a sweep needs at least one bias point".into(),
            ));
        }
        if !(self.minimum <= self.maximum) {
            return Err(ConfigurationError::Sweep(format!(
                "the sweep minimum {} exceeds the maximum {}",
                self.minimum, self.maximum
            )));
        }
        Ok(())
    }

    /// The biases of the sweep, including both end points
    pub fn biases(&self) -> Vec<f64> {
        match self.number_of_points {
            0 => Vec::new(),
            1 => vec![self.minimum],
            n => Array1::linspace(self.minimum, self.maximum, n).to_vec(),
        }
    }
}

/// Evaluates the integrated current of a junction over a set of biases
pub struct BiasSweep<'a> {
    junction: &'a Junction,
    integration: &'a IntegrationSettings,
}

impl<'a> BiasSweep<'a> {
    pub fn new(junction: &'a Junction, integration: &'a IntegrationSettings) -> Self {
        Self {
            junction,
            integration,
        }
    }

    /// The energy integral of the current at a single bias
    #[tracing::instrument(name = "Bias point", level = "debug", skip(self))]
    pub fn current_at_bias(&self, bias: f64) -> Result<IntegratedCurrent, NumericalError> {
        let window = self.integration.window(bias);
        if window.is_empty() {
            return Ok(IntegratedCurrent::zero());
        }

        let junction = self.junction.with_bias(bias);
        let channel = self.integration.channel;
        let mut unconverged_surface_solves = 0;
        let mut maximum_residual = 0_f64;

        let output = self.integration.quadrature().integrate(
            |energy| {
                let current = junction.current_at(energy, channel)?;
                if !current.is_converged() {
                    unconverged_surface_solves += 1;
                }
                maximum_residual = maximum_residual.max(current.residual().abs());
                let value = current.physical();
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(NumericalError::NonFinite { energy, value })
                }
            },
            window.lower,
            window.upper,
        )?;

        if !output.accurate {
            tracing::warn!(
                "current at bias {bias} did not reach the requested accuracy, error estimate {}",
                output.error_estimate
            );
        }
        if unconverged_surface_solves > 0 {
            tracing::warn!(
                "{unconverged_surface_solves} energies at bias {bias} used an unconverged surface Green's function"
            );
        }
        tracing::debug!(
            "I({bias}) = {} from {} evaluations, largest residual {maximum_residual}",
            output.value,
            output.evaluations
        );

        Ok(IntegratedCurrent {
            current: output.value,
            error_estimate: output.error_estimate,
            accurate: output.accurate,
            evaluations: output.evaluations,
            unconverged_surface_solves,
            maximum_residual,
        })
    }

    /// Evaluate every bias in parallel, returning the curve in the order of `biases`
    #[tracing::instrument(name = "Bias sweep", level = "info", skip_all, fields(points = biases.len()))]
    pub fn run(&self, biases: &[f64]) -> IVCurve {
        let points: Vec<IVPoint> = biases
            .par_iter()
            .map(|&bias| IVPoint {
                bias,
                outcome: self.current_at_bias(bias),
            })
            .collect();
        for point in points.iter() {
            if let Err(error) = &point.outcome {
                tracing::error!("bias point {} failed: {error}", point.bias);
            }
        }
        IVCurve { points }
    }
}

#[cfg(test)]
mod test {
    use super::{BiasSweep, IVCurve, IVPoint, IntegratedCurrent, SweepSettings};
    use crate::{
        device::{LatticeDimensions, PhysicsConfig},
        error::NumericalError,
        greens_functions::SurfaceConvergence,
        junction::JunctionBuilder,
        spectral::IntegrationSettings,
    };
    use approx::assert_relative_eq;
    use num_complex::Complex;

    fn integrated(current: f64) -> IntegratedCurrent {
        IntegratedCurrent {
            current,
            error_estimate: 0.,
            accurate: true,
            evaluations: 15,
            unconverged_surface_solves: 0,
            maximum_residual: 0.,
        }
    }

    #[test]
    fn failed_points_appear_as_nan() {
        let curve = IVCurve {
            points: vec![
                IVPoint {
                    bias: 0.,
                    outcome: Ok(integrated(0.)),
                },
                IVPoint {
                    bias: 0.1,
                    outcome: Err(NumericalError::SingularMatrix {
                        quantity: "retarded Green's function",
                        energy: 0.,
                    }),
                },
                IVPoint {
                    bias: 0.2,
                    outcome: Ok(integrated(0.4)),
                },
            ],
        };
        let currents = curve.currents();
        assert!(currents[1].is_nan());
        assert_eq!(curve.failures().count(), 1);
        let conductance = curve.differential_conductance();
        assert_eq!(conductance.len(), 3);
        assert!(conductance.iter().all(|value| value.is_nan()));
    }

    #[test]
    fn conductance_of_an_unordered_curve_follows_the_sorted_biases() {
        let curve = IVCurve {
            points: [0.2, 0., -0.1, 0.1]
                .into_iter()
                .map(|bias| IVPoint {
                    bias,
                    outcome: Ok(integrated(3. * bias * bias)),
                })
                .collect(),
        };
        let conductance = curve.differential_conductance();
        // Interior points of the sorted grid [-0.1, 0, 0.1, 0.2] are exact for a quadratic
        assert_relative_eq!(conductance[1], 0., epsilon = 1e-12);
        assert_relative_eq!(conductance[3], 0.6, epsilon = 1e-12);
        // One sided differences at the ends of the sorted grid
        assert_relative_eq!(conductance[2], -0.3, epsilon = 1e-12);
        assert_relative_eq!(conductance[0], 0.9, epsilon = 1e-12);

        let repeated = IVCurve {
            points: [0., 0.1, 0.1]
                .into_iter()
                .map(|bias| IVPoint {
                    bias,
                    outcome: Ok(integrated(bias)),
                })
                .collect(),
        };
        assert!(repeated
            .differential_conductance()
            .iter()
            .all(|value| !value.is_infinite()));
    }

    #[test]
    fn sweep_grid_includes_both_ends() {
        let settings = SweepSettings {
            minimum: 0.,
            maximum: 0.03,
            number_of_points: 4,
        };
        let biases = settings.biases();
        assert_eq!(biases.len(), 4);
        assert_relative_eq!(biases[1], 0.01);
        assert_relative_eq!(biases[3], 0.03);
        assert!(SweepSettings {
            number_of_points: 0,
            ..settings
        }
        .validate()
        .is_err());
        assert!(SweepSettings {
            minimum: 1.,
            ..settings
        }
        .validate()
        .is_err());
    }

    #[test]
    fn zero_bias_carries_no_current_and_makes_no_evaluations() {
        let physics = PhysicsConfig {
            eta: 1e-6,
            t: 1.,
            mu: 2.,
            mu_1: 0.,
            mu_2: 0.,
            delta_1: Complex::new(0., 0.),
            delta_2: Complex::new(0.05, 0.),
            kt: 1e-3,
        };
        let junction = JunctionBuilder::default()
            .with_dimensions(&LatticeDimensions::nambu_chain(3))
            .with_physics(&physics)
            .with_surface_convergence(&SurfaceConvergence::default())
            .build()
            .unwrap();
        let integration = IntegrationSettings::default();
        let sweep = BiasSweep::new(&junction, &integration);
        let integrated = sweep.current_at_bias(0.).unwrap();
        assert_eq!(integrated.current, 0.);
        assert_eq!(integrated.evaluations, 0);
    }

    #[test]
    fn sweep_preserves_the_order_of_the_biases() {
        let physics = PhysicsConfig {
            eta: 1e-6,
            t: 1.,
            mu: 2.,
            mu_1: 0.,
            mu_2: 0.,
            delta_1: Complex::new(0., 0.),
            delta_2: Complex::new(0.05, 0.),
            kt: 1e-3,
        };
        let junction = JunctionBuilder::default()
            .with_dimensions(&LatticeDimensions::nambu_chain(3))
            .with_physics(&physics)
            .with_surface_convergence(&SurfaceConvergence::default())
            .build()
            .unwrap();
        let integration = IntegrationSettings {
            maximum_subdivisions: 8,
            ..IntegrationSettings::default()
        };
        let biases = [0.02, -0.01, 0., 0.005];
        let curve = BiasSweep::new(&junction, &integration).run(&biases);
        assert_eq!(curve.biases().to_vec(), biases.to_vec());
        assert!(curve.failures().next().is_none());
        assert_eq!(curve.currents()[2], 0.);
    }
}
