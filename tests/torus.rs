use simplicial_chains::{ComplexLike, Simplex, SimplexChain};
use test_utilities::seven_vertex_torus;

fn triangle(vertices: [u32; 3]) -> Simplex<u32> {
    Simplex::new(vertices).unwrap()
}

/// `+{i, i+1, i+3} - {i, i+2, i+3}` summed over `i`, an orientation of the
/// torus with respect to sorted vertex order.
fn fundamental_class(
    complex: &simplicial_chains::SimplicialComplex<u32>,
    positive: i64,
    negative: i64,
) -> SimplexChain {
    let entries = (0..7).flat_map(|i| {
        [
            (triangle([i, (i + 1) % 7, (i + 3) % 7]), positive),
            (triangle([i, (i + 2) % 7, (i + 3) % 7]), negative),
        ]
    });
    SimplexChain::from_simplices(entries, complex).unwrap()
}

#[test]
fn torus_structure() {
    let complex = seven_vertex_torus(2);
    let counts: Vec<_> = (0..=2)
        .map(|d| complex.simplices_of_dimension(d).len())
        .collect();
    assert_eq!(counts, vec![7, 21, 14]);
    assert_eq!(complex.dimension(), Some(2));
}

#[test]
fn oriented_fundamental_class_is_cycle() {
    for modulus in [2, 3, 5, 11] {
        let complex = seven_vertex_torus(modulus);
        let class = fundamental_class(&complex, 1, -1);
        assert_eq!(class.iter().count(), 14);
        assert!(complex.boundary(&class).unwrap().is_empty());
    }
}

#[test]
fn unoriented_sum_is_cycle_only_mod_2() {
    let complex = seven_vertex_torus(2);
    assert!(complex.boundary(&fundamental_class(&complex, 1, 1)).unwrap().is_empty());

    for modulus in [3, 5] {
        let complex = seven_vertex_torus(modulus);
        let boundary = complex.boundary(&fundamental_class(&complex, 1, 1)).unwrap();
        assert!(!boundary.is_empty());
        assert!(complex.boundary(&boundary).unwrap().is_empty());
    }
}

#[test]
fn every_edge_bounds_two_triangles() {
    let complex = seven_vertex_torus(5);
    for edge in complex.simplices_of_dimension(1) {
        let edge_simplex = complex.simplex_at(edge).unwrap();
        let cofaces = complex
            .iter()
            .filter(|simplex| edge_simplex.is_face_of(simplex))
            .count();
        assert_eq!(cofaces, 2);
    }
}
