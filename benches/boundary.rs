use simplicial_chains::{ComplexLike, SimplexChain};
use test_utilities::{full_simplex, seven_vertex_torus};

fn main() {
    divan::main();
}

#[divan::bench(args = [6, 8, 10, 12], sample_count = 10)]
fn boundary_of_all_simplices(bencher: divan::Bencher, vertex_count: u32) {
    bencher
        .with_inputs(|| full_simplex(vertex_count, 3))
        .bench_local_refs(|complex| {
            for index in 0..complex.len() as u32 {
                let boundary = complex.cell_boundary(index).unwrap();

                // Don't optimize away..
                assert!(complex.boundary(&boundary).unwrap().is_empty());
            }
        });
}

#[divan::bench(args = [2, 3, 65521], sample_count = 10)]
fn torus_fundamental_class(bencher: divan::Bencher, modulus: u64) {
    bencher
        .with_inputs(|| {
            let complex = seven_vertex_torus(modulus);
            let triangles = complex.simplices_of_dimension(2);
            let chain = SimplexChain::new(triangles.into_iter().map(|t| (t, 1)), &complex).unwrap();
            (complex, chain)
        })
        .bench_local_refs(|(complex, chain)| complex.boundary(chain).unwrap());
}
