use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::FieldError;

/// 2^64 mod p = 2^32 - 1. Also p = 2^64 - EPSILON.
const EPSILON: u64 = 0xFFFF_FFFF;

/// Reduce a full 128-bit product to the canonical range [0, p).
///
/// Splits x = lo + 2^64 * (hi_lo + 2^32 * hi_hi) and uses the identities
/// 2^64 ≡ 2^32 - 1 and 2^96 ≡ -1 (mod p), giving
/// x ≡ lo + (2^32 - 1) * hi_lo - hi_hi (mod p).
#[inline(always)]
const fn reduce128(x: u128) -> u64 {
    let lo = x as u64;
    let hi = (x >> 64) as u64;
    let hi_lo = hi & EPSILON;
    let hi_hi = hi >> 32;

    let (mut t, borrow) = lo.overflowing_sub(hi_hi);
    if borrow {
        // Underflow by less than 2^32: adding p back equals subtracting
        // EPSILON in wrapping u64 arithmetic.
        t = t.wrapping_sub(EPSILON);
    }

    let (mut result, carry) = t.overflowing_add(hi_lo * EPSILON);
    if carry {
        // The dropped 2^64 is congruent to EPSILON; cannot overflow again
        // because hi_lo * EPSILON <= (2^32 - 1)^2.
        result = result.wrapping_add(EPSILON);
    }

    // result < 2^64 < 2p, so a single conditional subtraction canonicalizes.
    if result >= FieldElement::MODULUS {
        result -= FieldElement::MODULUS;
    }
    result
}

/// An element of the prime field of order p = 2^64 - 2^32 + 1.
///
/// The stored value is always the canonical representative in [0, p);
/// every operation re-establishes that invariant before returning, so no
/// unreduced intermediate can escape the type. Immutable value semantics:
/// arithmetic returns new elements.
///
/// Multiplication reduces the exact 128-bit product against the
/// mathematical modulus; no data-dependent branching beyond the reduction
/// carries (exponentiation's per-bit branch is the documented exception).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FieldElement(u64);

impl FieldElement {
    /// The field modulus p = 2^64 - 2^32 + 1.
    pub const MODULUS: u64 = 0xFFFF_FFFF_0000_0001;

    /// Additive identity.
    pub const ZERO: Self = Self(0);

    /// Multiplicative identity.
    pub const ONE: Self = Self(1);

    /// Construct from a raw integer, reduced modulo p. Total: any u64 maps
    /// to its residue class.
    #[inline]
    pub const fn new(value: u64) -> Self {
        // Any u64 is below 2p, so one conditional subtraction fully reduces.
        if value >= Self::MODULUS {
            Self(value - Self::MODULUS)
        } else {
            Self(value)
        }
    }

    /// The canonical representative in [0, p) as an integer. This is the
    /// value the external serialization codec consumes.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Canonical little-endian encoding (8 bytes), the codec hook.
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    /// Decode from 8 little-endian bytes, reducing modulo p.
    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 8]) -> Self {
        Self::new(u64::from_le_bytes(bytes))
    }

    #[inline]
    pub fn square(self) -> Self {
        self * self
    }

    #[inline]
    pub fn double(self) -> Self {
        self + self
    }

    /// Exponentiation by squaring. `self.pow(0)` is one, including for the
    /// zero element. The u64 exponent range covers p - 2, the largest
    /// exponent inversion needs.
    pub fn pow(self, mut exponent: u64) -> Self {
        let mut base = self;
        let mut accumulator = Self::ONE;
        while exponent > 0 {
            if exponent & 1 == 1 {
                accumulator *= base;
            }
            base = base.square();
            exponent >>= 1;
        }
        accumulator
    }

    /// Alias of [`pow`](Self::pow) under the name the root-of-unity
    /// validation uses.
    #[inline]
    pub fn mod_pow(self, exponent: u64) -> Self {
        self.pow(exponent)
    }

    /// Multiplicative inverse via Fermat's little theorem: self^(p-2).
    ///
    /// Fails with [`FieldError::Domain`] on the zero element, the single
    /// undefined input.
    pub fn inverse(self) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::Domain("zero has no multiplicative inverse"));
        }
        Ok(self.pow(Self::MODULUS - 2))
    }

    /// Division as multiplication by the divisor's inverse. Fails with
    /// [`FieldError::Domain`] when the divisor is zero.
    pub fn div(self, divisor: Self) -> Result<Self, FieldError> {
        Ok(self * divisor.inverse()?)
    }

    /// Invert a slice of elements with Montgomery's trick: one field
    /// inversion plus 3(n-1) multiplications. Fails with
    /// [`FieldError::Domain`] if any input is zero.
    pub fn batch_inverse(values: &[Self]) -> Result<Vec<Self>, FieldError> {
        let mut prefix_products = Vec::with_capacity(values.len());
        let mut accumulator = Self::ONE;
        for &value in values {
            if value.is_zero() {
                return Err(FieldError::Domain("zero has no multiplicative inverse"));
            }
            prefix_products.push(accumulator);
            accumulator *= value;
        }

        let mut running_inverse = accumulator.inverse()?;
        let mut inverses = vec![Self::ZERO; values.len()];
        for i in (0..values.len()).rev() {
            inverses[i] = prefix_products[i] * running_inverse;
            running_inverse *= values[i];
        }
        Ok(inverses)
    }

    /// Uniformly random element. Reduces 128 random bits modulo p, leaving
    /// bias below 2^-64.
    pub fn random_element() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let wide = ((rng.random::<u64>() as u128) << 64) | rng.random::<u64>() as u128;
        Self(reduce128(wide))
    }
}

// ---------------------------------------------------------------------------
// Operator impls
// ---------------------------------------------------------------------------

impl Add for FieldElement {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let (sum, carry) = self.0.overflowing_add(rhs.0);
        if carry {
            // Both inputs are below p, so the true sum is below 2p; the
            // wrapped value plus EPSILON is the canonical result.
            Self(sum + EPSILON)
        } else if sum >= Self::MODULUS {
            Self(sum - Self::MODULUS)
        } else {
            Self(sum)
        }
    }
}

impl AddAssign for FieldElement {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for FieldElement {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let (diff, borrow) = self.0.overflowing_sub(rhs.0);
        if borrow {
            // Adding p back equals subtracting EPSILON after the wrap.
            Self(diff.wrapping_sub(EPSILON))
        } else {
            Self(diff)
        }
    }
}

impl SubAssign for FieldElement {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for FieldElement {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(reduce128(self.0 as u128 * rhs.0 as u128))
    }
}

impl MulAssign for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Neg for FieldElement {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        if self.0 == 0 {
            self
        } else {
            Self(Self::MODULUS - self.0)
        }
    }
}

impl From<u64> for FieldElement {
    #[inline]
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<FieldElement> for u64 {
    #[inline]
    fn from(element: FieldElement) -> u64 {
        element.0
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({})", self.0)
    }
}
