//! Primitive roots of unity for the Goldilocks field.
//!
//! p - 1 = 2^32 * 3 * 5 * 17 * 257 * 65537, so the multiplicative group
//! contains a cyclic subgroup of every power-of-two order up to 2^32. The
//! generators are fixed literal constants, indexed by log2 of the order:
//! process-wide, immutable, and safe for unsynchronized concurrent reads.

use super::field::FieldElement;
use crate::error::FieldError;

/// Largest subgroup order with a precomputed generator: 2^32, the field's
/// full two-adicity.
pub const MAX_ORDER: u64 = 1 << 32;

/// Generator of the order-2^i subgroup at index i.
const PRIMITIVE_ROOTS: [u64; 33] = [
    1,
    18446744069414584320,
    281474976710656,
    18446744069397807105,
    17293822564807737345,
    70368744161280,
    549755813888,
    17870292113338400769,
    13797081185216407910,
    1803076106186727246,
    11353340290879379826,
    455906449640507599,
    17492915097719143606,
    1532612707718625687,
    16207902636198568418,
    17776499369601055404,
    6115771955107415310,
    12380578893860276750,
    9306717745644682924,
    18146160046829613826,
    3511170319078647661,
    17654865857378133588,
    5416168637041100469,
    16905767614792059275,
    9713644485405565297,
    5456943929260765144,
    17096174751763063430,
    1213594585890690845,
    6414415596519834757,
    16116352524544190054,
    9123114210336311365,
    4614640910117430873,
    1753635133440165772,
];

/// Reject orders that are zero or not a power of two.
fn check_order(order: u64) -> Result<(), FieldError> {
    if order == 0 {
        return Err(FieldError::Domain("order cannot be zero"));
    }
    if !order.is_power_of_two() {
        return Err(FieldError::Domain("order must be a power of two"));
    }
    Ok(())
}

/// Look up the primitive root of unity of exactly the given order.
///
/// Fails with [`FieldError::Domain`] if the order is zero or not a power
/// of two, and with [`FieldError::NotFound`] if it exceeds [`MAX_ORDER`].
pub fn primitive_root(order: u64) -> Result<FieldElement, FieldError> {
    check_order(order)?;
    if order > MAX_ORDER {
        return Err(FieldError::NotFound { order });
    }
    Ok(FieldElement::new(
        PRIMITIVE_ROOTS[order.trailing_zeros() as usize],
    ))
}

/// Whether `element` is a primitive root of unity of exactly `order`.
///
/// Total boolean predicate: returns false for order zero or a non-power-
/// of-two order instead of failing. For order n > 1 it checks
/// element^n = 1 and element^(n/2) != 1; the largest proper divisor
/// suffices because n is a power of two.
pub fn is_primitive_root(element: FieldElement, order: u64) -> bool {
    if order == 0 || !order.is_power_of_two() {
        return false;
    }
    if element.mod_pow(order) != FieldElement::ONE {
        return false;
    }
    if order > 1 && element.mod_pow(order / 2) == FieldElement::ONE {
        return false;
    }
    true
}

/// The n-th power of the primitive root of the given order, i.e. the n-th
/// member of the order-`order` subgroup in generator order.
///
/// Fails with [`FieldError::Range`] unless n < order, then propagates
/// [`primitive_root`]'s errors.
pub fn nth_root(order: u64, n: u64) -> Result<FieldElement, FieldError> {
    if n >= order {
        return Err(FieldError::Range {
            what: "root index",
            max: order.saturating_sub(1),
            got: n,
        });
    }
    Ok(primitive_root(order)?.mod_pow(n))
}

/// Inverse of the primitive root of the given order. Fails under the same
/// conditions as [`primitive_root`].
pub fn inverse_primitive_root(order: u64) -> Result<FieldElement, FieldError> {
    primitive_root(order)?.inverse()
}

/// Inverse of the n-th root of unity. Fails under the same conditions as
/// [`nth_root`].
pub fn inverse_nth_root(order: u64, n: u64) -> Result<FieldElement, FieldError> {
    nth_root(order, n)?.inverse()
}

/// Best-effort derivation of a primitive root for orders beyond the table.
///
/// Serves precomputed orders directly; for any other order this returns
/// [`FieldError::NotFound`] rather than attempting general subgroup
/// generation. Callers must not assume this path is complete.
pub fn generate_primitive_root(order: u64) -> Result<FieldElement, FieldError> {
    check_order(order)?;
    if order <= MAX_ORDER {
        return primitive_root(order);
    }
    // No subgroup of order > 2^32 exists with power-of-two order; general
    // derivation is deliberately not implemented.
    Err(FieldError::NotFound { order })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_is_a_primitive_root() {
        for log2_order in 0..=32u32 {
            let order = 1u64 << log2_order;
            let root = primitive_root(order).unwrap();
            assert!(
                is_primitive_root(root, order),
                "table entry for order 2^{log2_order} is not primitive"
            );
        }
    }

    #[test]
    fn order_two_root_squares_to_one_but_is_not_one() {
        let root = primitive_root(2).unwrap();
        assert_eq!(root.mod_pow(2), FieldElement::ONE);
        assert_ne!(root, FieldElement::ONE);
        // The only element of exact order 2 is -1.
        assert_eq!(root, -FieldElement::ONE);
    }

    #[test]
    fn order_one_root_is_one() {
        assert_eq!(primitive_root(1).unwrap(), FieldElement::ONE);
    }

    #[test]
    fn invalid_orders_are_domain_errors() {
        assert!(matches!(primitive_root(0), Err(FieldError::Domain(_))));
        assert!(matches!(primitive_root(3), Err(FieldError::Domain(_))));
        assert!(matches!(primitive_root(48), Err(FieldError::Domain(_))));
    }

    #[test]
    fn oversized_orders_are_not_found() {
        assert!(matches!(
            primitive_root(1 << 33),
            Err(FieldError::NotFound { order }) if order == 1 << 33
        ));
    }

    #[test]
    fn validation_predicate_is_total() {
        assert!(!is_primitive_root(FieldElement::ONE, 0));
        assert!(!is_primitive_root(FieldElement::ONE, 3));
        assert!(is_primitive_root(FieldElement::ONE, 1));
        // One has order 1, not 2.
        assert!(!is_primitive_root(FieldElement::ONE, 2));
        // A root of order 16 is not primitive at order 32.
        let root16 = primitive_root(16).unwrap();
        assert!(!is_primitive_root(root16, 32));
        assert!(!is_primitive_root(root16, 8));
    }

    #[test]
    fn nth_root_walks_the_subgroup() {
        let order = 8u64;
        let root = primitive_root(order).unwrap();
        let mut expected = FieldElement::ONE;
        for n in 0..order {
            assert_eq!(nth_root(order, n).unwrap(), expected);
            expected *= root;
        }
    }

    #[test]
    fn nth_root_index_out_of_range() {
        assert!(matches!(
            nth_root(8, 8),
            Err(FieldError::Range { got: 8, .. })
        ));
        assert!(matches!(nth_root(0, 0), Err(FieldError::Range { .. })));
    }

    #[test]
    fn inverse_roots_multiply_to_one() {
        for log2_order in 1..=12u32 {
            let order = 1u64 << log2_order;
            let root = primitive_root(order).unwrap();
            let inverse = inverse_primitive_root(order).unwrap();
            assert_eq!(root * inverse, FieldElement::ONE);
        }
        let r = nth_root(16, 5).unwrap();
        assert_eq!(r * inverse_nth_root(16, 5).unwrap(), FieldElement::ONE);
    }

    #[test]
    fn generate_serves_table_orders_only() {
        assert_eq!(
            generate_primitive_root(1024).unwrap(),
            primitive_root(1024).unwrap()
        );
        assert!(matches!(
            generate_primitive_root(1 << 33),
            Err(FieldError::NotFound { .. })
        ));
        assert!(matches!(
            generate_primitive_root(0),
            Err(FieldError::Domain(_))
        ));
    }

    #[test]
    fn successive_table_roots_are_square_related() {
        // The order-2^(i+1) root squares to an order-2^i primitive root.
        for log2_order in 1..=32u32 {
            let big = primitive_root(1 << log2_order).unwrap();
            assert!(is_primitive_root(big.square(), 1 << (log2_order - 1)));
        }
    }
}
