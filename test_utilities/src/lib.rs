pub use simplex_sphere::{full_simplex, simplex_sphere};
pub use torus::seven_vertex_torus;

mod simplex_sphere;
mod torus;
