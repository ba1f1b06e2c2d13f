// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `Cyclic` type implementing the ring of integers modulo a modulus
//! chosen at runtime.

use std::fmt::{Display, Error, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use flint_sys::nmod_vec::{nmod_add, nmod_init, nmod_inv, nmod_mul, nmod_neg, nmod_sub, nmod_t};
use flint_sys::ulong_extras::n_gcd;

/// An element of the integers modulo `modulus`, stored as its canonical
/// representative in `[0, modulus)`.
///
/// The modulus is carried by each value because it is a property of the
/// owning complex rather than of the type. Combining two values with
/// different moduli is a programming error and panics.
///
/// # Important Note
/// The modulus should be prime for the coefficients to form a field. Prime
/// powers are accepted, but then [`Cyclic::invert`] returns `None` for every
/// element sharing a factor with the modulus.
///
/// Overflow and underflow are handled by the implementation.
///
/// # Examples
/// ## Equality Modulo `p`
/// ```rust
/// use simplicial_chains::Cyclic;
/// assert_eq!(Cyclic::new(8, 5), Cyclic::new(3, 5));
/// assert_eq!(Cyclic::new(-1, 5), Cyclic::new(4, 5));
/// assert_ne!(Cyclic::new(8, 7), Cyclic::new(3, 7));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Cyclic {
    remainder: u64,
    modulus: nmod_t,
}

impl Cyclic {
    /// Create a new `Cyclic` instance holding `value` reduced modulo
    /// `modulus`. Negative values are mapped to their canonical
    /// representative. Panics if `modulus` is less than 2.
    pub fn new(value: i64, modulus: u64) -> Self {
        assert!(modulus > 1, "modulus values must be greater than or equal to 2");

        let mut context = nmod_t {
            n: 0,
            ninv: 0,
            norm: 0,
        };
        unsafe {
            nmod_init(&mut context, modulus);
        }

        Self {
            remainder: i128::from(value).rem_euclid(i128::from(modulus)) as u64,
            modulus: context,
        }
    }

    /// The additive identity modulo `modulus`.
    pub fn zero(modulus: u64) -> Self {
        Self::new(0, modulus)
    }

    /// The multiplicative identity modulo `modulus`.
    pub fn one(modulus: u64) -> Self {
        Self::new(1, modulus)
    }

    /// The canonical representative, always in `[0, modulus)`.
    pub fn value(&self) -> u64 {
        self.remainder
    }

    /// The modulus of the ring this element belongs to.
    pub fn modulus(&self) -> u64 {
        self.modulus.n
    }

    /// Whether this is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.remainder == 0
    }

    /// Check if the element has a multiplicative inverse, i.e. it is coprime
    /// to the modulus.
    pub fn is_invertible(&self) -> bool {
        unsafe { n_gcd(self.remainder, self.modulus.n) == 1 }
    }

    /// Return the multiplicative inverse of `self`, or `None` if it does not
    /// exist (always the case at zero).
    pub fn invert(&self) -> Option<Self> {
        // FLINT aborts the process on a non-unit, so check coprimality first.
        if !self.is_invertible() {
            return None;
        }

        Some(Self {
            remainder: unsafe { nmod_inv(self.remainder, self.modulus) },
            modulus: self.modulus,
        })
    }

    fn check_modulus(&self, other: &Self) {
        assert_eq!(
            self.modulus.n, other.modulus.n,
            "cannot combine coefficients with mismatched moduli"
        );
    }
}

impl PartialEq for Cyclic {
    fn eq(&self, other: &Self) -> bool {
        self.remainder == other.remainder && self.modulus.n == other.modulus.n
    }
}

impl Eq for Cyclic {}

impl Hash for Cyclic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.remainder.hash(state);
        self.modulus.n.hash(state);
    }
}

impl Display for Cyclic {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{} (mod {})", self.remainder, self.modulus.n)
    }
}

impl Neg for Cyclic {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            remainder: unsafe { nmod_neg(self.remainder, self.modulus) },
            modulus: self.modulus,
        }
    }
}

impl AddAssign for Cyclic {
    fn add_assign(&mut self, rhs: Self) {
        self.check_modulus(&rhs);
        self.remainder = unsafe { nmod_add(self.remainder, rhs.remainder, self.modulus) };
    }
}

impl Add for Cyclic {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl SubAssign for Cyclic {
    fn sub_assign(&mut self, rhs: Self) {
        self.check_modulus(&rhs);
        self.remainder = unsafe { nmod_sub(self.remainder, rhs.remainder, self.modulus) };
    }
}

impl Sub for Cyclic {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl MulAssign for Cyclic {
    fn mul_assign(&mut self, rhs: Self) {
        self.check_modulus(&rhs);
        self.remainder = unsafe { nmod_mul(self.remainder, rhs.remainder, self.modulus) };
    }
}

impl Mul for Cyclic {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction() {
        assert_eq!(Cyclic::new(0, 2).value(), 0);
        assert_eq!(Cyclic::new(1, 65521).value(), 1);
        assert_eq!(Cyclic::new(-1, 3).value(), 2);
        assert_eq!(Cyclic::new(-7, 5).value(), 3);
        assert_eq!(Cyclic::new(10, 5), Cyclic::zero(5));
    }

    #[test]
    #[should_panic(expected = "modulus values must be greater than or equal to 2")]
    fn modulus_too_low() {
        let _a = Cyclic::new(0, 1);
    }

    #[test]
    fn negation() {
        assert_eq!(-Cyclic::new(0, 7), Cyclic::new(0, 7));
        assert_eq!(-Cyclic::new(3, 5), Cyclic::new(2, 5));
        assert_eq!(-Cyclic::new(3, 2), Cyclic::new(1, 2));
    }

    #[test]
    fn addition() {
        assert_eq!(Cyclic::new(1, 5) + Cyclic::new(2, 5), Cyclic::new(3, 5));
        assert_eq!(Cyclic::new(4, 3) + Cyclic::new(2, 3), Cyclic::zero(3));

        let mut a = Cyclic::new(15, 11);
        a += Cyclic::new(2, 11);
        assert_eq!(a, Cyclic::new(6, 11));
    }

    #[test]
    fn subtraction() {
        assert_eq!(Cyclic::new(11, 13) - Cyclic::new(10, 13), Cyclic::one(13));
        assert_eq!(Cyclic::new(0, 3) - Cyclic::new(7, 3), Cyclic::new(2, 3));

        let mut a = Cyclic::new(11, 23);
        a -= Cyclic::new(38, 23);
        assert_eq!(a, Cyclic::new(19, 23));
    }

    #[test]
    fn multiplication() {
        assert_eq!(Cyclic::new(4, 17) * Cyclic::new(20, 17), Cyclic::new(12, 17));
        assert_eq!(Cyclic::new(61, 31) * Cyclic::new(29, 31), Cyclic::new(2, 31));

        let mut a = Cyclic::new(21, 11);
        a *= Cyclic::new(2, 11);
        assert_eq!(a, Cyclic::new(9, 11));
        a *= Cyclic::new(11, 11);
        assert!(a.is_zero());
    }

    #[test]
    #[should_panic(expected = "cannot combine coefficients with mismatched moduli")]
    fn mismatched_moduli() {
        let _ = Cyclic::new(1, 5) + Cyclic::new(1, 7);
    }

    #[test]
    fn inversion() {
        assert_eq!(Cyclic::one(2).invert(), Some(Cyclic::one(2)));
        assert_eq!(Cyclic::new(3, 5).invert(), Some(Cyclic::new(2, 5)));
        assert_eq!(Cyclic::new(327, 541).invert(), Some(Cyclic::new(316, 541)));

        for value in 1..13 {
            let a = Cyclic::new(value, 13);
            let inverse = a.invert().unwrap();
            assert_eq!(a * inverse, Cyclic::one(13));
        }
    }

    #[test]
    fn non_invertible_elements() {
        assert!(!Cyclic::zero(17).is_invertible());
        assert_eq!(Cyclic::zero(17).invert(), None);

        // Prime power modulus: multiples of 3 have no inverse modulo 9.
        assert!(!Cyclic::new(6, 9).is_invertible());
        assert_eq!(Cyclic::new(6, 9).invert(), None);
        assert!(Cyclic::new(4, 9).is_invertible());
        assert_eq!(Cyclic::new(4, 9).invert(), Some(Cyclic::new(7, 9)));

        let units = (0..9).filter(|&v| Cyclic::new(v, 9).invert().is_some());
        assert_eq!(units.collect::<Vec<_>>(), vec![1, 2, 4, 5, 7, 8]);
    }

    #[test]
    fn equality_and_hash_follow_value_and_modulus() {
        use std::collections::HashSet;

        let set: HashSet<_> = [
            Cyclic::new(3, 5),
            Cyclic::new(8, 5),
            Cyclic::new(3, 7),
            Cyclic::new(-4, 7),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
        assert_ne!(Cyclic::new(3, 5), Cyclic::new(3, 7));
    }

    #[test]
    fn handle_overflow_and_underflow() {
        let large = u64::MAX - 4;
        let a = Cyclic::new(-1, large);
        assert_eq!(a.value(), large - 1);
        assert_eq!((a + a).value(), large - 2);
        assert_eq!((-a).value(), 1);
        assert_eq!((a * a).value(), 1);
        assert_eq!(Cyclic::new(i64::MIN, 7), Cyclic::new(i64::MIN % 7, 7));
        assert_eq!(Cyclic::new(1, 3) - Cyclic::new(18, 3), Cyclic::new(1, 3));
    }

    #[test]
    fn display() {
        assert_eq!(Cyclic::new(16, 7).to_string(), "2 (mod 7)");
    }
}
