use simplicial_chains::{Simplex, SimplicialComplex};

/// The minimal triangulation of the torus: 7 vertices, 21 edges and the 14
/// triangles `{i, i+1, i+3}` and `{i, i+2, i+3}` modulo 7.
pub fn seven_vertex_torus(modulus: u64) -> SimplicialComplex<u32> {
    let triangles = (0..7).flat_map(|i| {
        [
            Simplex::new([i, (i + 1) % 7, (i + 3) % 7]).unwrap(),
            Simplex::new([i, (i + 2) % 7, (i + 3) % 7]).unwrap(),
        ]
    });
    SimplicialComplex::from_simplices(modulus, triangles).unwrap()
}
