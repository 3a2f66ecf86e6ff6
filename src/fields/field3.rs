// Cubic extension field F_{p^3} = F_p[x] / (x^3 - x + 1)
//
// Elements are triples (c0, c1, c2) representing c0 + c1*x + c2*x^2.
// The cubic x^3 - x + 1 is irreducible over the Goldilocks field, and
// products are reduced with x^3 = x - 1 (hence x^4 = x^2 - x).

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::field::FieldElement;
use crate::error::FieldError;

/// An element of the degree-3 extension of the Goldilocks field.
///
/// Coefficients are canonical base-field elements; the order is fixed and
/// significant (`c0` is the constant term). Immutable value type.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Field3 {
    pub c0: FieldElement,
    pub c1: FieldElement,
    pub c2: FieldElement,
}

impl Field3 {
    /// Build an element from its coefficient triple `[c0, c1, c2]`.
    #[inline]
    pub const fn new(coefficients: [FieldElement; 3]) -> Self {
        Self {
            c0: coefficients[0],
            c1: coefficients[1],
            c2: coefficients[2],
        }
    }

    /// Additive identity (0, 0, 0).
    #[inline]
    pub const fn zero() -> Self {
        Self {
            c0: FieldElement::ZERO,
            c1: FieldElement::ZERO,
            c2: FieldElement::ZERO,
        }
    }

    /// Multiplicative identity (1, 0, 0).
    #[inline]
    pub const fn one() -> Self {
        Self {
            c0: FieldElement::ONE,
            c1: FieldElement::ZERO,
            c2: FieldElement::ZERO,
        }
    }

    #[inline]
    pub const fn coefficients(self) -> [FieldElement; 3] {
        [self.c0, self.c1, self.c2]
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    /// Embed a base-field element as the constant polynomial (a, 0, 0).
    /// This is the true field homomorphism; [`unlift`](Self::unlift) is its
    /// one-sided inverse.
    #[inline]
    pub const fn lift(a: FieldElement) -> Self {
        Self {
            c0: a,
            c1: FieldElement::ZERO,
            c2: FieldElement::ZERO,
        }
    }

    /// Alias of [`lift`](Self::lift) under the conversion-style name.
    #[inline]
    pub const fn from_base_field(a: FieldElement) -> Self {
        Self::lift(a)
    }

    /// Extract the constant term, discarding `c1` and `c2`. Total but
    /// lossy: only inverts [`lift`](Self::lift) when the element is known
    /// to be a lift.
    #[inline]
    pub const fn unlift(self) -> FieldElement {
        self.c0
    }

    /// Evaluate the coefficient polynomial at x = 1, i.e. c0 + c1 + c2.
    ///
    /// A fixed, well-defined projection, but NOT a field homomorphism: it
    /// does not commute with multiplication and is not the inverse of
    /// [`lift`](Self::lift) except on constant polynomials.
    #[inline]
    pub fn to_base_field(self) -> FieldElement {
        self.c0 + self.c1 + self.c2
    }

    /// Multiply each coefficient by a base-field element.
    #[inline]
    pub fn scale(self, a: FieldElement) -> Self {
        Self {
            c0: a * self.c0,
            c1: a * self.c1,
            c2: a * self.c2,
        }
    }

    /// Squaring specialization: 6 base multiplications instead of the 9 a
    /// general product takes.
    pub fn square(self) -> Self {
        let a0_sq = self.c0.square();
        let a1_sq = self.c1.square();
        let a2_sq = self.c2.square();
        let a0a1 = self.c0 * self.c1;
        let a0a2 = self.c0 * self.c2;
        let a1a2 = self.c1 * self.c2;

        // (a0 + a1 x + a2 x^2)^2 reduced by x^3 = x - 1:
        Self {
            c0: a0_sq - a1a2.double(),
            c1: (a0a1 + a1a2).double() - a2_sq,
            c2: a0a2.double() + a1_sq + a2_sq,
        }
    }

    /// Exponentiation by squaring over the extension.
    pub fn pow(self, mut exponent: u64) -> Self {
        let mut base = self;
        let mut accumulator = Self::one();
        while exponent > 0 {
            if exponent & 1 == 1 {
                accumulator *= base;
            }
            base = base.square();
            exponent >>= 1;
        }
        accumulator
    }

    /// Frobenius endomorphism z -> z^p. Fixes exactly the base field, so
    /// applying it twice yields the remaining Galois conjugate.
    fn frobenius(self) -> Self {
        self.pow(FieldElement::MODULUS)
    }

    /// Multiplicative inverse via the field norm.
    ///
    /// With b = z^p * z^(p^2) (the product of the nontrivial conjugates),
    /// the norm N(z) = z * b lies in the base field; the inverse is b
    /// scaled by N(z)^-1. Fails with [`FieldError::Domain`] on zero, whose
    /// norm is zero.
    pub fn inverse(self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::Domain("zero has no multiplicative inverse"));
        }
        let conjugate = self.frobenius();
        let conjugate_product = conjugate * conjugate.frobenius();
        // The norm is invariant under Frobenius, hence a constant polynomial.
        let norm = (self * conjugate_product).c0;
        Ok(conjugate_product.scale(norm.inverse()?))
    }

    /// Division as multiplication by the divisor's inverse. Fails with
    /// [`FieldError::Domain`] when the divisor is zero.
    pub fn div(self, divisor: Self) -> Result<Self, FieldError> {
        Ok(self * divisor.inverse()?)
    }

    /// Uniformly random element: three independent random coefficients.
    pub fn random_element() -> Self {
        Self {
            c0: FieldElement::random_element(),
            c1: FieldElement::random_element(),
            c2: FieldElement::random_element(),
        }
    }
}

// ---------------------------------------------------------------------------
// Operator impls
// ---------------------------------------------------------------------------

impl Add for Field3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
            c2: self.c2 + rhs.c2,
        }
    }
}

impl AddAssign for Field3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Field3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
            c2: self.c2 - rhs.c2,
        }
    }
}

impl SubAssign for Field3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Field3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        // Schoolbook product p0 + p1 x + p2 x^2 + p3 x^3 + p4 x^4, then
        // fold down with x^3 = x - 1 and x^4 = x^2 - x.
        let p0 = self.c0 * rhs.c0;
        let p1 = self.c0 * rhs.c1 + self.c1 * rhs.c0;
        let p2 = self.c0 * rhs.c2 + self.c1 * rhs.c1 + self.c2 * rhs.c0;
        let p3 = self.c1 * rhs.c2 + self.c2 * rhs.c1;
        let p4 = self.c2 * rhs.c2;

        Self {
            c0: p0 - p3,
            c1: p1 + p3 - p4,
            c2: p2 + p4,
        }
    }
}

impl MulAssign for Field3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Neg for Field3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            c0: -self.c0,
            c1: -self.c1,
            c2: -self.c2,
        }
    }
}

impl From<FieldElement> for Field3 {
    #[inline]
    fn from(a: FieldElement) -> Self {
        Self::lift(a)
    }
}

impl fmt::Display for Field3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} + {}·x + {}·x²)", self.c0, self.c1, self.c2)
    }
}

impl fmt::Debug for Field3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Field3({}, {}, {})", self.c0, self.c1, self.c2)
    }
}
