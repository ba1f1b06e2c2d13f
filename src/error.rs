// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::ComplexContext;

/// Error type for simplex construction, chain arithmetic, and lookups against
/// the owning complex.
///
/// Every variant is a precondition violation reported at the offending call;
/// none of them are transient.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChainError {
    /// Malformed construction arguments, such as duplicate vertex labels or a
    /// field modulus below 2.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Arithmetic between chains (or a chain and a complex) that do not share
    /// the same complex and field modulus.
    #[error("chain over {left} is incompatible with {right}")]
    IncompatibleComplex {
        /// Context of the receiving chain.
        left: ComplexContext,
        /// Context of the other operand.
        right: ComplexContext,
    },

    /// A simplex was looked up in a complex that never registered it.
    #[error("simplex {0} is not registered in the complex")]
    UnknownSimplex(String),

    /// A simplex index lies outside the complex's simplex table.
    #[error("simplex index {index} is out of range for a complex of {len} simplices")]
    InvalidIndex {
        /// The offending index.
        index: u32,
        /// Number of simplices in the complex.
        len: usize,
    },

    /// The dominance order was requested between simplices with different
    /// vertex counts.
    #[error("dominance order requires equal vertex counts, got {left} and {right}")]
    DimensionMismatch {
        /// Vertex count of the left simplex.
        left: usize,
        /// Vertex count of the right simplex.
        right: usize,
    },
}
