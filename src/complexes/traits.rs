// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{trace, warn};

use crate::{ChainError, Simplex, SimplexChain};

static NEXT_COMPLEX_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies the complex a chain was built against: a process-unique id
/// together with the field modulus of that complex.
///
/// Chains carry this instead of a reference to their complex. Two chains may
/// be combined only if their contexts are equal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ComplexContext {
    id: u64,
    modulus: u64,
}

impl ComplexContext {
    /// Mint a fresh context for a new complex over `Z/modulus`. Returns
    /// [`ChainError::InvalidInput`] if `modulus` is less than 2.
    pub fn new(modulus: u64) -> Result<Self, ChainError> {
        if modulus < 2 {
            return Err(ChainError::InvalidInput(format!(
                "field modulus must be at least 2, got {modulus}"
            )));
        }
        Ok(Self {
            id: NEXT_COMPLEX_ID.fetch_add(1, Ordering::Relaxed),
            modulus,
        })
    }

    /// The field modulus `p`.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// A context with the same modulus and a fresh id, for a complex whose
    /// index space may diverge from the one holding `self`.
    pub(crate) fn renew(&self) -> Self {
        Self {
            id: NEXT_COMPLEX_ID.fetch_add(1, Ordering::Relaxed),
            modulus: self.modulus,
        }
    }
}

impl Display for ComplexContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "complex #{} (mod {})", self.id, self.modulus)
    }
}

/// The capabilities chains and the boundary operator need from a simplicial
/// complex: the field modulus and lookups between simplices and their indices.
///
/// Implementors only provide the lookups; the boundary operator comes with
/// the trait. The complex is treated as read-only throughout.
pub trait ComplexLike {
    /// Vertex label type of the simplices in the complex.
    type Vertex: Clone + Ord + Hash + Debug;

    /// The identity and field modulus of the complex.
    fn context(&self) -> ComplexContext;

    /// Return the canonical index of `simplex`, or
    /// [`ChainError::UnknownSimplex`] if it was never registered.
    fn resolve_index(&self, simplex: &Simplex<Self::Vertex>) -> Result<u32, ChainError>;

    /// Return the simplex stored at `index`, or [`ChainError::InvalidIndex`]
    /// if the index is out of range.
    fn simplex_at(&self, index: u32) -> Result<&Simplex<Self::Vertex>, ChainError>;

    /// The modulus `p` of the coefficient field `Z/pZ`.
    fn field_modulus(&self) -> u64 {
        self.context().modulus()
    }

    /// Return the boundary of a single simplex: the alternating sum of its
    /// faces, where face `i` (omitting the vertex at sorted position `i`)
    /// carries the sign `(-1)^i`. A single vertex has empty boundary.
    ///
    /// Every face must already be registered in the complex; a missing face
    /// is reported as [`ChainError::UnknownSimplex`].
    fn simplex_boundary(
        &self,
        simplex: &Simplex<Self::Vertex>,
    ) -> Result<SimplexChain, ChainError> {
        if simplex.vertex_count() <= 1 {
            return Ok(SimplexChain::empty(self));
        }

        let mut entries = Vec::with_capacity(simplex.vertex_count());
        for (position, face) in simplex.faces().into_iter().enumerate() {
            let index = self.resolve_index(&face).inspect_err(|_| {
                warn!(
                    "Face {:?} of simplex {:?} is missing from the complex",
                    face, simplex
                );
            })?;
            let sign = if position % 2 == 0 { 1 } else { -1 };
            entries.push((index, sign));
        }
        SimplexChain::new(entries, self)
    }

    /// Return the boundary of the simplex at `index`.
    fn cell_boundary(&self, index: u32) -> Result<SimplexChain, ChainError> {
        self.simplex_boundary(self.simplex_at(index)?)
    }

    /// Return the boundary of `chain`, the linear extension of
    /// [`ComplexLike::cell_boundary`]: each simplex boundary is scaled by that
    /// simplex's own coefficient in `chain` and summed.
    ///
    /// Returns [`ChainError::IncompatibleComplex`] if `chain` was built
    /// against another complex.
    fn boundary(&self, chain: &SimplexChain) -> Result<SimplexChain, ChainError> {
        if chain.context() != self.context() {
            return Err(ChainError::IncompatibleComplex {
                left: chain.context(),
                right: self.context(),
            });
        }

        trace!("Computing boundary of a chain with {} stored terms", chain.stored_len());
        let mut result = SimplexChain::empty(self);
        for (index, coefficient) in chain.iter() {
            result.add_scaled_assign(&self.cell_boundary(index)?, coefficient);
        }
        Ok(result)
    }
}
