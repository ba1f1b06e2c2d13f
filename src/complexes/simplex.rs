// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `Simplex` value type: an immutable set of vertex labels kept in
//! ascending order.
//!
//! Two counts describe the size of a simplex and are kept apart on purpose:
//! - [`Simplex::vertex_count`]: the number of vertices.
//! - [`Simplex::dimension`]: the topological dimension, `vertex_count - 1`.
//!
//! An edge has two vertices and dimension 1; a triangle has three vertices
//! and dimension 2.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter::zip;

use serde::{Deserialize, Serialize};

use crate::ChainError;

/// An unordered set of distinct vertex labels, stored sorted.
///
/// Equality and hashing are structural on the sorted vertices, so simplices
/// built from any permutation of the same labels are interchangeable as map
/// keys. The vertices are only ever exposed as a shared slice.
///
/// `PartialOrd` implements the componentwise dominance order, which only
/// relates simplices with the same vertex count; see
/// [`Simplex::dominated_by`].
///
/// # Examples
///
/// ```rust
/// use simplicial_chains::Simplex;
///
/// let triangle = Simplex::new([2, 0, 1]).unwrap();
/// assert_eq!(triangle.vertices(), &[0, 1, 2]);
/// assert_eq!(triangle.vertex_count(), 3);
/// assert_eq!(triangle.dimension(), 2);
///
/// let faces = triangle.faces();
/// assert_eq!(faces[0].vertices(), &[1, 2]);
/// assert_eq!(faces[1].vertices(), &[0, 2]);
/// assert_eq!(faces[2].vertices(), &[0, 1]);
/// assert!(faces.iter().all(|face| face.is_face_of(&triangle)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<V>",
    into = "Vec<V>",
    bound(
        serialize = "V: Clone + Serialize",
        deserialize = "V: Ord + Debug + Deserialize<'de>"
    )
)]
pub struct Simplex<V> {
    vertices: Vec<V>,
}

impl<V: Ord + Debug> Simplex<V> {
    /// Create a simplex from vertex labels given in any order.
    ///
    /// Returns [`ChainError::InvalidInput`] if a label appears more than
    /// once. An empty list yields the empty simplex, of dimension -1, which
    /// only arises as the face of a single vertex.
    pub fn new<I>(vertices: I) -> Result<Self, ChainError>
    where
        I: IntoIterator<Item = V>,
    {
        let mut vertices: Vec<V> = vertices.into_iter().collect();
        vertices.sort();
        if let Some(pair) = vertices.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(ChainError::InvalidInput(format!(
                "duplicate vertex label {:?}",
                pair[0]
            )));
        }
        Ok(Self { vertices })
    }
}

impl<V> Simplex<V> {
    /// The vertices in ascending order.
    #[must_use]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Topological dimension, one less than the vertex count. The empty
    /// simplex has dimension -1.
    ///
    /// Saturates at `i32::MAX` for simplices with more than `i32::MAX`
    /// vertices.
    #[must_use]
    pub fn dimension(&self) -> i32 {
        i32::try_from(self.vertices.len()).map_or(i32::MAX, |count| count - 1)
    }

    /// Whether `vertex` is one of the vertices of this simplex.
    pub fn contains(&self, vertex: &V) -> bool
    where
        V: Ord,
    {
        self.vertices.binary_search(vertex).is_ok()
    }

    /// The faces of the simplex, one per vertex. Face `i` omits the vertex at
    /// sorted position `i`; the boundary sign convention depends on this
    /// order.
    #[must_use]
    pub fn faces(&self) -> Vec<Simplex<V>>
    where
        V: Clone,
    {
        (0..self.vertices.len())
            .map(|omitted| Simplex {
                vertices: self
                    .vertices
                    .iter()
                    .enumerate()
                    .filter(|&(position, _)| position != omitted)
                    .map(|(_, vertex)| vertex.clone())
                    .collect(),
            })
            .collect()
    }

    /// True iff `other` has exactly one more vertex than `self` and contains
    /// every vertex of `self`. Never fails.
    pub fn is_face_of(&self, other: &Simplex<V>) -> bool
    where
        V: Ord,
    {
        self.vertices.len() + 1 == other.vertices.len()
            && self.vertices.iter().all(|vertex| other.contains(vertex))
    }

    /// Componentwise dominance: true iff every vertex of `self` is less than
    /// or equal to the vertex of `other` at the same sorted position.
    ///
    /// Only defined for simplices with equal vertex counts; returns
    /// [`ChainError::DimensionMismatch`] otherwise.
    pub fn dominated_by(&self, other: &Simplex<V>) -> Result<bool, ChainError>
    where
        V: Ord,
    {
        if self.vertices.len() != other.vertices.len() {
            return Err(ChainError::DimensionMismatch {
                left: self.vertices.len(),
                right: other.vertices.len(),
            });
        }
        Ok(zip(&self.vertices, &other.vertices).all(|(a, b)| a <= b))
    }
}

impl<V: Ord> PartialOrd for Simplex<V> {
    /// `None` when the vertex counts differ or neither simplex dominates the
    /// other.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.vertices.len() != other.vertices.len() {
            return None;
        }

        let mut ordering = Ordering::Equal;
        for (a, b) in zip(&self.vertices, &other.vertices) {
            match (ordering, a.cmp(b)) {
                (_, Ordering::Equal) => {}
                (Ordering::Equal, next) => ordering = next,
                (current, next) if current != next => return None,
                _ => {}
            }
        }
        Some(ordering)
    }
}

impl<V: Display> Display for Simplex<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (position, vertex) in self.vertices.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{vertex}")?;
        }
        write!(f, "]")
    }
}

impl<V: Ord + Debug> TryFrom<Vec<V>> for Simplex<V> {
    type Error = ChainError;

    fn try_from(vertices: Vec<V>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

impl<V> From<Simplex<V>> for Vec<V> {
    fn from(simplex: Simplex<V>) -> Self {
        simplex.vertices
    }
}
