// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `simplicial_chains` crate provides the algebraic core of simplicial
//! homology: simplices, chains of simplices with coefficients in `Z/pZ`, and
//! the simplicial boundary operator.
//!
//! Chains refer to simplices by their index in a complex implementing
//! [`ComplexLike`]; [`SimplicialComplex`] is the provided implementation.
//!
//! ```rust
//! use simplicial_chains::{ComplexLike, Simplex, SimplexChain, SimplicialComplex};
//!
//! let tetrahedron = Simplex::new([0, 1, 2, 3]).unwrap();
//! let complex = SimplicialComplex::from_simplices(5, [tetrahedron.clone()]).unwrap();
//!
//! let chain = SimplexChain::from_simplices([(tetrahedron, 1)], &complex).unwrap();
//! let boundary = complex.boundary(&chain).unwrap();
//! assert_eq!(boundary.iter().count(), 4);
//! assert!(complex.boundary(&boundary).unwrap().is_empty());
//! ```

#![warn(missing_docs)]

pub use crate::algebra::{ChainDisplay, Cyclic, SimplexChain};
pub use crate::complexes::{ComplexContext, ComplexLike, Simplex, SimplicialComplex};
pub use crate::error::ChainError;

mod algebra;
mod complexes;
mod error;
