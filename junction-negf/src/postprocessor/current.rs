use crate::{
    greens_functions::SurfaceConvergenceRecord, hamiltonian::Hamiltonian,
    utilities::matrices::extract,
};
use nalgebra::DMatrix;
use num_complex::Complex;
use serde::Deserialize;

/// Which component of the inter-layer current is reported
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrentChannel {
    /// The particle channel of the first lateral site
    Representative,
    /// The particle channels of every lateral site, summed
    Summed,
}

impl Default for CurrentChannel {
    fn default() -> Self {
        CurrentChannel::Representative
    }
}

/// The current carried between the first two layers of the device at a single energy
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnergyResolvedCurrent {
    pub energy: f64,
    /// The real part is the physical current, the imaginary part is a residual which vanishes for a hermitian
    /// correlation function
    pub value: Complex<f64>,
    /// How the surface solves of the source and drain leads terminated
    pub records: [SurfaceConvergenceRecord; 2],
}

impl EnergyResolvedCurrent {
    pub fn physical(&self) -> f64 {
        self.value.re
    }

    pub fn residual(&self) -> f64 {
        self.value.im
    }

    /// Whether both surface solves reached their tolerance
    pub fn is_converged(&self) -> bool {
        self.records.iter().all(|record| record.converged)
    }
}

/// `-2i ([G_n]_{b,n} β - [G_n]_{n,b} β)` at the requested channel, for boundary layer `b = 0` and its neighbour `n = 1`
///
/// A device with fewer than two layers has no inter-layer bond and carries no current.
pub(crate) fn inter_layer_current(
    correlation: &DMatrix<Complex<f64>>,
    hamiltonian: &Hamiltonian,
    channel: CurrentChannel,
) -> Complex<f64> {
    if hamiltonian.dimensions().longitudinal < 2 {
        return Complex::new(0., 0.);
    }
    let boundary = hamiltonian.layer_indices(0);
    let next = hamiltonian.layer_indices(1);
    let hopping = hamiltonian.layer_hopping();

    let outgoing = extract(correlation, &boundary, &next) * &hopping;
    let incoming = extract(correlation, &next, &boundary) * &hopping;

    let internal = hamiltonian.dimensions().internal;
    let flow = match channel {
        CurrentChannel::Representative => {
            let index = internal.particle_channel();
            outgoing[(index, index)] - incoming[(index, index)]
        }
        CurrentChannel::Summed => (0..hamiltonian.dimensions().sites_per_layer())
            .map(|site| site * internal.dimension() + internal.particle_channel())
            .map(|index| outgoing[(index, index)] - incoming[(index, index)])
            .sum::<Complex<f64>>(),
    };
    Complex::new(0., -2.) * flow
}
