// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Neg;

use crate::{ChainError, ComplexContext, ComplexLike, Cyclic, Simplex};

/// A formal linear combination of simplices with coefficients in `Z/pZ`.
///
/// Simplices are referenced by their index in the owning complex, and the
/// chain remembers that complex only through its [`ComplexContext`]. Anything
/// that needs to turn indices back into simplices (display, boundaries) takes
/// the complex as an explicit argument.
///
/// Storage is a sparse `HashMap`. Construction may store zero coefficients
/// (for instance a raw coefficient equal to `p`); every arithmetic operation
/// drops them from its result, and [`SimplexChain::purge`] removes them in
/// place. Queries never depend on the map being purged.
///
/// Arithmetic never modifies its operands and always returns a new chain.
///
/// # Examples
///
/// ```rust
/// use simplicial_chains::{ComplexLike, Simplex, SimplexChain, SimplicialComplex};
///
/// let mut complex = SimplicialComplex::new(3).unwrap();
/// let edge = complex.insert(Simplex::new([0, 1]).unwrap()).unwrap();
///
/// let chain = SimplexChain::new([(edge, 2)], &complex).unwrap();
/// let boundary = complex.boundary(&chain).unwrap();
///
/// let v0 = complex.index_of(&Simplex::new([0]).unwrap()).unwrap();
/// let v1 = complex.index_of(&Simplex::new([1]).unwrap()).unwrap();
/// assert_eq!(boundary.coef(v1).value(), 2);
/// assert_eq!(boundary.coef(v0).value(), 1); // -2 = 1 (mod 3)
/// ```
#[derive(Clone, Debug)]
pub struct SimplexChain {
    context: ComplexContext,
    map: HashMap<u32, Cyclic>,
}

impl SimplexChain {
    /// Create a chain from `(index, coefficient)` pairs over `complex`.
    ///
    /// Each coefficient is reduced into `[0, p)`. If an index appears more
    /// than once the later pair overwrites the earlier one; coefficients are
    /// not accumulated. Returns [`ChainError::InvalidIndex`] if an index is
    /// not in the complex.
    pub fn new<C, I>(entries: I, complex: &C) -> Result<Self, ChainError>
    where
        C: ComplexLike + ?Sized,
        I: IntoIterator<Item = (u32, i64)>,
    {
        let mut chain = Self::empty(complex);
        let modulus = chain.modulus();
        for (index, coefficient) in entries {
            complex.simplex_at(index)?;
            chain.map.insert(index, Cyclic::new(coefficient, modulus));
        }
        Ok(chain)
    }

    /// Create a chain from `(simplex, coefficient)` pairs, resolving each
    /// simplex through `complex`. Same overwrite semantics as
    /// [`SimplexChain::new`]; unregistered simplices give
    /// [`ChainError::UnknownSimplex`].
    pub fn from_simplices<C, I>(entries: I, complex: &C) -> Result<Self, ChainError>
    where
        C: ComplexLike + ?Sized,
        I: IntoIterator<Item = (Simplex<C::Vertex>, i64)>,
    {
        let indexed = entries
            .into_iter()
            .map(|(simplex, coefficient)| Ok((complex.resolve_index(&simplex)?, coefficient)))
            .collect::<Result<Vec<_>, ChainError>>()?;
        Self::new(indexed, complex)
    }

    /// The zero chain over `complex`.
    pub fn empty<C: ComplexLike + ?Sized>(complex: &C) -> Self {
        Self {
            context: complex.context(),
            map: HashMap::new(),
        }
    }

    /// The context of the complex this chain was built against.
    pub fn context(&self) -> ComplexContext {
        self.context
    }

    /// The field modulus `p`.
    pub fn modulus(&self) -> u64 {
        self.context.modulus()
    }

    /// Return the coefficient of the simplex at `index`, zero if absent.
    pub fn coef(&self, index: u32) -> Cyclic {
        self.map
            .get(&index)
            .copied()
            .unwrap_or_else(|| Cyclic::zero(self.modulus()))
    }

    /// Remove every entry whose coefficient is zero.
    pub fn purge(&mut self) {
        self.map.retain(|_, coefficient| !coefficient.is_zero());
    }

    /// True iff every stored coefficient is zero. Does not require a prior
    /// [`SimplexChain::purge`].
    pub fn is_empty(&self) -> bool {
        self.map.values().all(Cyclic::is_zero)
    }

    /// Number of stored entries, counting zero coefficients that have not
    /// been purged yet.
    pub fn stored_len(&self) -> usize {
        self.map.len()
    }

    /// Iterate over the `(index, coefficient)` pairs with nonzero
    /// coefficient, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Cyclic)> + '_ {
        self.map
            .iter()
            .filter(|(_, coefficient)| !coefficient.is_zero())
            .map(|(index, coefficient)| (*index, *coefficient))
    }

    /// Return `self + other`, omitting indices whose sum is zero. Returns
    /// [`ChainError::IncompatibleComplex`] unless both chains belong to the
    /// same complex.
    pub fn try_add(&self, other: &Self) -> Result<Self, ChainError> {
        self.check_context(other)?;
        let mut result = self.purged();
        result.add_scaled_assign(other, Cyclic::one(self.modulus()));
        Ok(result)
    }

    /// Return `self - other`, that is `self + (-other)`.
    pub fn try_sub(&self, other: &Self) -> Result<Self, ChainError> {
        self.try_add(&-other)
    }

    /// Return the chain with every coefficient multiplied by `scalar`
    /// (reduced modulo `p`). Multiplying by zero yields the empty chain.
    pub fn scalar_mul(&self, scalar: i64) -> Self {
        let scalar = Cyclic::new(scalar, self.modulus());
        self.map_coefficients(|coefficient| coefficient * scalar)
    }

    /// Render the chain as a sum of `coefficient * simplex` terms, looking
    /// simplices up in `complex`.
    pub fn display<'a, C>(&'a self, complex: &'a C) -> ChainDisplay<'a, C>
    where
        C: ComplexLike + ?Sized,
    {
        ChainDisplay {
            chain: self,
            complex,
        }
    }

    /// Add `scalar * other` to `self` in place, dropping entries that become
    /// zero. Both chains must share a context.
    pub(crate) fn add_scaled_assign(&mut self, other: &Self, scalar: Cyclic) {
        debug_assert_eq!(self.context, other.context);
        for (index, coefficient) in other.iter() {
            let new_coef = self.coef(index) + coefficient * scalar;
            if new_coef.is_zero() {
                self.map.remove(&index);
            } else {
                self.map.insert(index, new_coef);
            }
        }
    }

    fn check_context(&self, other: &Self) -> Result<(), ChainError> {
        if self.context != other.context {
            return Err(ChainError::IncompatibleComplex {
                left: self.context,
                right: other.context,
            });
        }
        Ok(())
    }

    fn purged(&self) -> Self {
        self.map_coefficients(|coefficient| coefficient)
    }

    fn map_coefficients(&self, f: impl Fn(Cyclic) -> Cyclic) -> Self {
        Self {
            context: self.context,
            map: self
                .iter()
                .map(|(index, coefficient)| (index, f(coefficient)))
                .filter(|(_, coefficient)| !coefficient.is_zero())
                .collect(),
        }
    }
}

impl Neg for &SimplexChain {
    type Output = SimplexChain;

    fn neg(self) -> Self::Output {
        self.map_coefficients(|coefficient| -coefficient)
    }
}

impl Neg for SimplexChain {
    type Output = SimplexChain;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl PartialEq for SimplexChain {
    /// Chains are equal when they belong to the same complex and agree on
    /// every nonzero coefficient; unpurged zeros are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.context == other.context
            && self.iter().count() == other.iter().count()
            && self
                .iter()
                .all(|(index, coefficient)| other.coef(index) == coefficient)
    }
}

impl Eq for SimplexChain {}

/// Helper returned by [`SimplexChain::display`].
///
/// An index the complex cannot resolve is rendered as `#index` rather than
/// failing the whole `Display` call.
pub struct ChainDisplay<'a, C: ComplexLike + ?Sized> {
    chain: &'a SimplexChain,
    complex: &'a C,
}

impl<C> Display for ChainDisplay<'_, C>
where
    C: ComplexLike + ?Sized,
    C::Vertex: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;
        for (index, coefficient) in self.chain.iter() {
            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match self.complex.simplex_at(index) {
                Ok(simplex) => write!(f, "{} * {}", coefficient.value(), simplex)?,
                Err(_) => write!(f, "{} * #{}", coefficient.value(), index)?,
            }
        }

        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}
