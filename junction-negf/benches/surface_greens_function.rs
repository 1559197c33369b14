use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use junction_negf::{
    device::LatticeDimensions,
    greens_functions::{SurfaceConvergence, SurfaceGreensFunction, SurfaceMethod},
    hamiltonian::Hamiltonian,
};
use utilities::{random_energy, random_physical_parameters, GAP};

pub fn bench_surface_greens_function(c: &mut Criterion) {
    let energy = random_energy(GAP);
    let parameters = random_physical_parameters();

    let mut group = c.benchmark_group("surface_greens_function");

    for lateral in [1, 2, 3, 4].into_iter() {
        let dimensions = LatticeDimensions::nambu_chain(1);
        let dimensions = LatticeDimensions {
            lateral,
            ..dimensions
        };
        let lead = Hamiltonian::lead(&dimensions, &parameters);
        for method in [SurfaceMethod::Damped, SurfaceMethod::Decimation] {
            let convergence = SurfaceConvergence {
                method,
                ..SurfaceConvergence::default()
            };
            group.bench_with_input(
                BenchmarkId::new(format!("{method:?}"), lateral),
                &lateral,
                |b, _| {
                    b.iter(|| {
                        SurfaceGreensFunction::converge(
                            black_box(energy),
                            black_box(1e-6),
                            black_box(&lead.onsite),
                            black_box(&lead.hopping),
                            black_box(&convergence),
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

pub fn bench_current_at(c: &mut Criterion) {
    let junction = utilities::ns_chain(8).with_bias(0.02);
    let energy = random_energy(0.03);
    c.bench_function("current_at", |b| {
        b.iter(|| {
            junction.current_at(
                black_box(energy),
                junction_negf::postprocessor::CurrentChannel::Representative,
            )
        })
    });
}

criterion_group!(benches, bench_surface_greens_function, bench_current_at);
criterion_main!(benches);
