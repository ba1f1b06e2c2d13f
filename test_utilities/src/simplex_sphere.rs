use simplicial_chains::{Simplex, SimplicialComplex};

/// The closure of a single simplex on the vertices `0..vertex_count`.
pub fn full_simplex(vertex_count: u32, modulus: u64) -> SimplicialComplex<u32> {
    let top = Simplex::new(0..vertex_count).unwrap();
    SimplicialComplex::from_simplices(modulus, [top]).unwrap()
}

/// The `n`-sphere as the boundary of the `(n + 1)`-simplex: every proper face
/// of the simplex on `n + 2` vertices.
pub fn simplex_sphere(n: u32, modulus: u64) -> SimplicialComplex<u32> {
    let top = Simplex::new(0..n + 2).unwrap();
    SimplicialComplex::from_simplices(modulus, top.faces()).unwrap()
}
