//! Shared fixtures for the tests and benchmarks of `junction-negf`

use junction_negf::{
    device::{LatticeDimensions, PhysicalParameters, PhysicsConfig},
    greens_functions::SurfaceConvergence,
    junction::{Junction, JunctionBuilder},
};
use num_complex::Complex;
use rand::{thread_rng, Rng};

/// The pairing amplitude of the superconducting leads in the fixtures
pub const GAP: f64 = 0.05;

/// An unbiased normal-superconductor junction at half filling, with the superconductor on the drain side
pub fn ns_junction_physics() -> PhysicsConfig {
    PhysicsConfig {
        eta: 1e-6,
        t: 1.,
        mu: 2.,
        mu_1: 0.,
        mu_2: 0.,
        delta_1: Complex::new(0., 0.),
        delta_2: Complex::new(GAP, 0.),
        kt: 1e-3,
    }
}

/// An unbiased superconductor-normal-superconductor junction with equal gaps in both leads
pub fn sns_junction_physics() -> PhysicsConfig {
    PhysicsConfig {
        delta_1: Complex::new(GAP, 0.),
        ..ns_junction_physics()
    }
}

pub fn build_junction(dimensions: &LatticeDimensions, physics: &PhysicsConfig) -> Junction {
    JunctionBuilder::default()
        .with_dimensions(dimensions)
        .with_physics(physics)
        .with_surface_convergence(&SurfaceConvergence::default())
        .build()
        .expect("fixture junctions are valid")
}

/// A one-dimensional NS junction of `longitudinal` Nambu sites
pub fn ns_chain(longitudinal: usize) -> Junction {
    build_junction(
        &LatticeDimensions::nambu_chain(longitudinal),
        &ns_junction_physics(),
    )
}

/// Tight-binding parameters drawn uniformly, with a complex pairing amplitude
pub fn random_physical_parameters() -> PhysicalParameters {
    let mut rng = thread_rng();
    PhysicalParameters {
        t: rng.gen_range(0.1..2.),
        delta: Complex::new(rng.gen_range(-0.2..0.2), rng.gen_range(-0.2..0.2)),
        mu: rng.gen_range(-1.0..4.),
    }
}

/// An energy drawn uniformly from `[-half_width, half_width]`
pub fn random_energy(half_width: f64) -> f64 {
    thread_rng().gen_range(-half_width..=half_width)
}
