// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::slice::Iter;

use tracing::trace;

use crate::{ChainError, ComplexContext, ComplexLike, Simplex};

/// A finite simplicial complex with vector-based storage of its simplices.
///
/// Each simplex is identified by a `u32` index, assigned in insertion order
/// and never changed. The complex is closed under taking faces: inserting a
/// simplex also inserts every one of its faces that is not yet present, and
/// faces always receive smaller indices than the simplices they bound.
///
/// The complex also fixes the coefficient field `Z/pZ` used by every chain
/// built against it.
///
/// # Examples
///
/// ```rust
/// use simplicial_chains::{ComplexLike, Simplex, SimplicialComplex};
///
/// let mut complex = SimplicialComplex::new(2).unwrap();
/// let triangle = complex.insert(Simplex::new([0, 1, 2]).unwrap()).unwrap();
///
/// // 3 vertices, 3 edges and the triangle itself.
/// assert_eq!(complex.len(), 7);
/// assert_eq!(complex.dimension(), Some(2));
/// assert_eq!(complex.simplex_at(triangle).unwrap().vertices(), &[0, 1, 2]);
/// ```
///
/// A clone is a new complex: it starts with the same simplices but gets its
/// own [`ComplexContext`], so chains built against the original are rejected
/// by the clone and vice versa.
#[derive(Debug)]
pub struct SimplicialComplex<V> {
    context: ComplexContext,
    simplices: Vec<Simplex<V>>,
    indices: HashMap<Simplex<V>, u32>,
}

impl<V: Clone> Clone for SimplicialComplex<V> {
    fn clone(&self) -> Self {
        Self {
            context: self.context.renew(),
            simplices: self.simplices.clone(),
            indices: self.indices.clone(),
        }
    }
}

impl<V> SimplicialComplex<V>
where
    V: Clone + Ord + Hash + Debug,
{
    /// Creates an empty complex over `Z/modulus`. Returns
    /// [`ChainError::InvalidInput`] if `modulus` is less than 2.
    pub fn new(modulus: u64) -> Result<Self, ChainError> {
        Ok(Self {
            context: ComplexContext::new(modulus)?,
            simplices: Vec::new(),
            indices: HashMap::new(),
        })
    }

    /// Creates a complex over `Z/modulus` containing every simplex of
    /// `simplices` together with all of their faces.
    pub fn from_simplices<I>(modulus: u64, simplices: I) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = Simplex<V>>,
    {
        let mut complex = Self::new(modulus)?;
        for simplex in simplices {
            complex.insert(simplex)?;
        }
        Ok(complex)
    }

    /// Register `simplex` and any of its faces not yet present, returning the
    /// index of `simplex`. Inserting a simplex that is already present returns
    /// its existing index.
    ///
    /// Returns [`ChainError::InvalidInput`] for the empty simplex.
    pub fn insert(&mut self, simplex: Simplex<V>) -> Result<u32, ChainError> {
        if simplex.vertex_count() == 0 {
            return Err(ChainError::InvalidInput(
                "the empty simplex cannot be added to a complex".into(),
            ));
        }
        if let Some(&index) = self.indices.get(&simplex) {
            return Ok(index);
        }

        if simplex.vertex_count() > 1 {
            for face in simplex.faces() {
                self.insert(face)?;
            }
        }

        let index = u32::try_from(self.simplices.len()).map_err(|_| {
            ChainError::InvalidInput("complex cannot hold more than u32::MAX simplices".into())
        })?;
        trace!("Registered simplex {:?} at index {}", simplex, index);
        self.indices.insert(simplex.clone(), index);
        self.simplices.push(simplex);
        Ok(index)
    }

    /// Return the index of `simplex`, if it is in the complex.
    pub fn index_of(&self, simplex: &Simplex<V>) -> Option<u32> {
        self.indices.get(simplex).copied()
    }
}

impl<V> SimplicialComplex<V> {
    /// The number of simplices in the complex.
    pub fn len(&self) -> usize {
        self.simplices.len()
    }

    /// Whether the complex has no simplices.
    pub fn is_empty(&self) -> bool {
        self.simplices.is_empty()
    }

    /// All simplices, ordered by index.
    pub fn simplices(&self) -> &[Simplex<V>] {
        &self.simplices
    }

    /// Iterate over all simplices, ordered by index.
    pub fn iter(&self) -> Iter<'_, Simplex<V>> {
        self.simplices.iter()
    }

    /// The maximum topological dimension of the simplices, or `None` for an
    /// empty complex.
    ///
    /// A simplex with `n` vertices brings `2^n - 1` simplices into the
    /// complex, and indices are `u32`, so the result is at most 31.
    pub fn dimension(&self) -> Option<u32> {
        self.simplices
            .iter()
            .map(Simplex::dimension)
            .max()
            .and_then(|dimension| u32::try_from(dimension).ok())
    }

    /// Indices of all simplices of topological dimension `dimension`, in
    /// increasing order.
    pub fn simplices_of_dimension(&self, dimension: u32) -> Vec<u32> {
        self.simplices
            .iter()
            .zip(0u32..)
            .filter(|(simplex, _)| i64::from(simplex.dimension()) == i64::from(dimension))
            .map(|(_, index)| index)
            .collect()
    }
}

impl<V> ComplexLike for SimplicialComplex<V>
where
    V: Clone + Ord + Hash + Debug,
{
    type Vertex = V;

    fn context(&self) -> ComplexContext {
        self.context
    }

    fn resolve_index(&self, simplex: &Simplex<V>) -> Result<u32, ChainError> {
        self.index_of(simplex)
            .ok_or_else(|| ChainError::UnknownSimplex(format!("{:?}", simplex.vertices())))
    }

    fn simplex_at(&self, index: u32) -> Result<&Simplex<V>, ChainError> {
        self.simplices
            .get(index as usize)
            .ok_or(ChainError::InvalidIndex {
                index,
                len: self.simplices.len(),
            })
    }
}
