//! Adaptive Gauss-Kronrod quadrature
//!
//! Each panel is integrated with the 15 point Kronrod rule and the 7 point Gauss rule nested inside it. Their
//! difference estimates the error on the panel. The panel with the largest error estimate is bisected until the
//! summed error estimate meets the tolerance or the number of panels reaches its limit. Reaching the limit is not an
//! error: the best estimate is returned, flagged as inaccurate.
//!
//! The integrand is allowed to fail, in which case the failure aborts the integral and is returned unchanged. Within
//! a panel the integrand is always evaluated in ascending order of its argument.

/// Abscissae of the 15 point Kronrod rule on `[0, 1]`, outermost first. Odd indices are the Gauss nodes
const KRONROD_NODES: [f64; 8] = [
    0.991_455_371_120_812_639_206_854_697_526_329,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.586_087_235_467_691_130_294_144_845_693_013,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.,
];

const KRONROD_WEIGHTS: [f64; 8] = [
    0.022_935_322_010_529_224_963_732_008_058_970,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.209_482_141_084_727_828_012_999_174_891_714,
];

/// Weights of the 7 point Gauss rule at `KRONROD_NODES[1]`, `[3]`, `[5]` and the centre
const GAUSS_WEIGHTS: [f64; 4] = [
    0.129_484_966_168_869_693_270_611_432_679_082,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.417_959_183_673_469_387_755_102_040_816_327,
];

/// The number of integrand evaluations made on each panel
pub const EVALUATIONS_PER_PANEL: usize = 15;

/// The stopping policy of the adaptive integrator
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AdaptiveQuadrature {
    pub absolute_tolerance: f64,
    pub relative_tolerance: f64,
    /// The largest number of panels the interval may be divided into
    pub maximum_subdivisions: usize,
}

/// The result of an adaptive integral
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegrationOutput {
    pub value: f64,
    pub error_estimate: f64,
    /// False when the integrator stopped before meeting its tolerance
    pub accurate: bool,
    pub evaluations: usize,
    pub subdivisions: usize,
}

#[derive(Copy, Clone, Debug)]
struct Panel {
    lower: f64,
    upper: f64,
    estimate: f64,
    error: f64,
}

impl Panel {
    fn integrate<F, E>(lower: f64, upper: f64, integrand: &mut F) -> Result<Self, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        let centre = (lower + upper) / 2.;
        let half_width = (upper - lower) / 2.;

        let mut below = [0_f64; 7];
        for (value, node) in below.iter_mut().zip(KRONROD_NODES.iter()) {
            *value = integrand(centre - half_width * node)?;
        }
        let at_centre = integrand(centre)?;
        let mut above = [0_f64; 7];
        for (index, node) in KRONROD_NODES.iter().enumerate().take(7).rev() {
            above[index] = integrand(centre + half_width * node)?;
        }

        let mut kronrod = KRONROD_WEIGHTS[7] * at_centre;
        let mut gauss = GAUSS_WEIGHTS[3] * at_centre;
        for index in 0..7 {
            let pair = below[index] + above[index];
            kronrod += KRONROD_WEIGHTS[index] * pair;
            if index % 2 == 1 {
                gauss += GAUSS_WEIGHTS[index / 2] * pair;
            }
        }

        Ok(Self {
            lower,
            upper,
            estimate: kronrod * half_width,
            error: ((kronrod - gauss) * half_width).abs(),
        })
    }
}

impl AdaptiveQuadrature {
    /// Integrate `integrand` over `[lower, upper]`
    pub fn integrate<F, E>(
        &self,
        mut integrand: F,
        lower: f64,
        upper: f64,
    ) -> Result<IntegrationOutput, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        if lower == upper {
            return Ok(IntegrationOutput {
                value: 0.,
                error_estimate: 0.,
                accurate: true,
                evaluations: 0,
                subdivisions: 0,
            });
        }

        let mut panels = vec![Panel::integrate(lower, upper, &mut integrand)?];
        let mut evaluations = EVALUATIONS_PER_PANEL;

        let accurate = loop {
            let (value, error) = totals(&panels);
            if error <= self.absolute_tolerance.max(self.relative_tolerance * value.abs()) {
                break true;
            }
            if panels.len() >= self.maximum_subdivisions {
                tracing::warn!(
                    "quadrature reached {} subdivisions with error estimate {error}",
                    panels.len()
                );
                break false;
            }

            let worst = panels
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.error.total_cmp(&b.error))
                .map(|(index, _)| index)
                .unwrap_or_default();
            let Panel { lower, upper, .. } = panels[worst];
            let midpoint = (lower + upper) / 2.;
            if !(lower < midpoint && midpoint < upper) {
                tracing::warn!("quadrature panel [{lower}, {upper}] is too narrow to bisect");
                break false;
            }

            let left = Panel::integrate(lower, midpoint, &mut integrand)?;
            let right = Panel::integrate(midpoint, upper, &mut integrand)?;
            evaluations += 2 * EVALUATIONS_PER_PANEL;
            panels[worst] = left;
            panels.insert(worst + 1, right);
        };

        let (value, error_estimate) = totals(&panels);
        Ok(IntegrationOutput {
            value,
            error_estimate,
            accurate,
            evaluations,
            subdivisions: panels.len(),
        })
    }
}

/// The summed estimate and error over every panel
fn totals(panels: &[Panel]) -> (f64, f64) {
    panels.iter().fold((0., 0.), |(value, error), panel| {
        (value + panel.estimate, error + panel.error)
    })
}

#[cfg(test)]
mod test {
    use super::{AdaptiveQuadrature, EVALUATIONS_PER_PANEL};
    use crate::fermi::fermi_function;
    use approx::assert_relative_eq;
    use std::convert::Infallible;

    fn quadrature(tolerance: f64, maximum_subdivisions: usize) -> AdaptiveQuadrature {
        AdaptiveQuadrature {
            absolute_tolerance: tolerance,
            relative_tolerance: tolerance,
            maximum_subdivisions,
        }
    }

    #[test]
    fn polynomials_are_integrated_on_a_single_panel() {
        let output = quadrature(1e-12, 50)
            .integrate(|x| Ok::<_, Infallible>(x.powi(5) - 2. * x.powi(3)), 0., 2.)
            .unwrap();
        assert_relative_eq!(output.value, 64. / 6. - 8., epsilon = 1e-13);
        assert!(output.accurate);
        assert_eq!(output.evaluations, EVALUATIONS_PER_PANEL);
        assert_eq!(output.subdivisions, 1);
    }

    #[test]
    fn smooth_integrands_converge() {
        let output = quadrature(1e-12, 50)
            .integrate(|x| Ok::<_, Infallible>(x.sin()), 0., std::f64::consts::PI)
            .unwrap();
        assert_relative_eq!(output.value, 2., epsilon = 1e-12);
        assert!(output.accurate);
    }

    #[test]
    fn sharp_steps_are_resolved_by_bisection() {
        let output = quadrature(1e-10, 200)
            .integrate(|x| Ok::<_, Infallible>(fermi_function(x - 0.013, 1e-3)), -1., 1.)
            .unwrap();
        assert!(output.accurate);
        assert!(output.subdivisions > 1);
        assert_relative_eq!(output.value, 1.013, epsilon = 1e-8);
    }

    #[test]
    fn subdivision_limit_is_flagged() {
        let output = quadrature(1e-14, 3)
            .integrate(|x| Ok::<_, Infallible>(fermi_function(x - 0.1, 1e-6)), -1., 1.)
            .unwrap();
        assert!(!output.accurate);
        assert_eq!(output.subdivisions, 3);
        assert!(output.error_estimate > 1e-14);
        assert_relative_eq!(output.value, 1.1, epsilon = 5e-2);
    }

    #[test]
    fn empty_interval_is_exactly_zero() {
        let mut calls = 0;
        let output = quadrature(1e-8, 50)
            .integrate(
                |_| {
                    calls += 1;
                    Ok::<_, Infallible>(1.)
                },
                0.,
                0.,
            )
            .unwrap();
        assert_eq!(output.value, 0.);
        assert_eq!(calls, 0);
    }

    #[test]
    fn panel_nodes_are_visited_in_ascending_order() {
        let mut visited = Vec::new();
        quadrature(1e-8, 1)
            .integrate(
                |x| {
                    visited.push(x);
                    Ok::<_, Infallible>(x.exp())
                },
                -0.5,
                0.5,
            )
            .unwrap();
        assert_eq!(visited.len(), EVALUATIONS_PER_PANEL);
        assert!(visited.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn integrand_failures_abort_the_integral() {
        let result = quadrature(1e-12, 50).integrate(
            |x| if x > 0.5 { Err("failed") } else { Ok(x) },
            0.,
            1.,
        );
        assert_eq!(result, Err("failed"));
    }
}
