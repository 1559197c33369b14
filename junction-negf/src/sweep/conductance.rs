//! Discrete derivatives on non-uniform grids

/// The gradient of `values` sampled at the strictly increasing points `grid`
///
/// Interior points use the second order central difference for unequal spacings, the end points use one sided
/// first order differences. A non-finite value poisons the derivative at every point whose stencil touches it,
/// as does a spacing which is not positive. A single point has no defined derivative and gives `NaN`.
pub fn gradient(grid: &[f64], values: &[f64]) -> Vec<f64> {
    debug_assert_eq!(grid.len(), values.len());
    let n = values.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![f64::NAN],
        _ => {}
    }

    let one_sided = |lower: usize| {
        let spacing = grid[lower + 1] - grid[lower];
        if spacing > 0. {
            (values[lower + 1] - values[lower]) / spacing
        } else {
            f64::NAN
        }
    };

    let mut derivative = Vec::with_capacity(n);
    derivative.push(one_sided(0));
    for i in 1..n - 1 {
        let behind = grid[i] - grid[i - 1];
        let ahead = grid[i + 1] - grid[i];
        if !(behind > 0. && ahead > 0.) {
            derivative.push(f64::NAN);
            continue;
        }
        derivative.push(
            (behind.powi(2) * values[i + 1] + (ahead.powi(2) - behind.powi(2)) * values[i]
                - ahead.powi(2) * values[i - 1])
                / (behind * ahead * (behind + ahead)),
        );
    }
    derivative.push(one_sided(n - 2));
    derivative
}

#[cfg(test)]
mod test {
    use super::gradient;
    use approx::assert_relative_eq;

    #[test]
    fn gradient_of_a_quadratic_is_exact_in_the_interior_of_a_uniform_grid() {
        let grid = (0..6).map(|i| i as f64 * 0.5).collect::<Vec<_>>();
        let values = grid.iter().map(|x| x * x).collect::<Vec<_>>();
        let derivative = gradient(&grid, &values);
        for (x, slope) in grid.iter().zip(derivative.iter()).skip(1).take(4) {
            assert_relative_eq!(*slope, 2. * x, epsilon = 1e-12);
        }
        // One sided differences at the ends
        assert_relative_eq!(derivative[0], 0.5);
        assert_relative_eq!(derivative[5], 4.5);
    }

    #[test]
    fn gradient_of_a_quadratic_is_exact_in_the_interior_of_a_non_uniform_grid() {
        let grid = [0., 0.1, 0.4, 0.5, 1.2];
        let values = grid.iter().map(|x| 3. * x * x - x).collect::<Vec<_>>();
        let derivative = gradient(&grid, &values);
        for i in 1..4 {
            assert_relative_eq!(derivative[i], 6. * grid[i] - 1., epsilon = 1e-12);
        }
    }

    #[test]
    fn non_finite_values_only_poison_the_stencils_which_touch_them() {
        let grid = [0., 1., 2., 3., 4., 5.];
        let values = [0., 1., 2., f64::NAN, 4., 5.];
        let derivative = gradient(&grid, &values);
        assert_relative_eq!(derivative[0], 1.);
        assert_relative_eq!(derivative[1], 1.);
        assert!(derivative[2].is_nan());
        assert!(derivative[3].is_nan());
        assert!(derivative[4].is_nan());
        assert_relative_eq!(derivative[5], 1.);
    }

    #[test]
    fn repeated_grid_points_give_nan_instead_of_infinities() {
        let grid = [0., 1., 1., 2., 3.];
        let values = [0., 1., 1., 2., 3.];
        let derivative = gradient(&grid, &values);
        assert_relative_eq!(derivative[0], 1.);
        assert!(derivative[1].is_nan());
        assert!(derivative[2].is_nan());
        assert_relative_eq!(derivative[3], 1.);
        assert_relative_eq!(derivative[4], 1.);
    }

    #[test]
    fn degenerate_inputs() {
        assert!(gradient(&[], &[]).is_empty());
        let single = gradient(&[0.3], &[1.]);
        assert_eq!(single.len(), 1);
        assert!(single[0].is_nan());
    }
}
