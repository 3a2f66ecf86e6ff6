//! Number-theoretic transform over the Goldilocks field.
//!
//! Radix-2 Cooley-Tukey, decimation in time: a bit-reversal permutation
//! followed by log2(n) butterfly stages. The forward transform evaluates a
//! coefficient array at all n-th roots of unity; the inverse runs the same
//! network on the inverse root and scales by n^-1, so the pair composes to
//! the exact identity (all arithmetic is exact modular arithmetic).
//!
//! Butterflies within a stage touch disjoint index pairs; everything here
//! is a pure function of its input slice.

use crate::error::FieldError;
use crate::fields::field::FieldElement;
use crate::fields::roots::{self, MAX_ORDER};

/// Validate a transform length and fetch the matching primitive root order.
///
/// A length must be a nonzero power of two (domain error otherwise, which
/// also covers the empty inverse transform) and at most [`MAX_ORDER`]
/// (range error beyond it).
fn transform_order(len: usize) -> Result<u64, FieldError> {
    if len == 0 || !len.is_power_of_two() {
        return Err(FieldError::Domain(
            "transform length must be a nonzero power of two",
        ));
    }
    let order = len as u64;
    if order > MAX_ORDER {
        return Err(FieldError::Range {
            what: "transform length",
            max: MAX_ORDER,
            got: order,
        });
    }
    Ok(order)
}

/// In-place butterfly network shared by both transform directions.
///
/// `root` must be a primitive root of unity of order `values.len()`. The
/// bit-reversal pre-permutation matches the in-order output of the
/// decimation-in-time stages, keeping forward and inverse mutually
/// consistent.
fn transform_in_place(values: &mut [FieldElement], root: FieldElement) {
    let n = values.len();
    debug_assert!(n.is_power_of_two());
    if n == 1 {
        return;
    }
    let log2_n = n.trailing_zeros();

    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - log2_n);
        if i < j {
            values.swap(i, j);
        }
    }

    let mut m = 2;
    while m <= n {
        let half_m = m / 2;
        // Stage twiddle: the order-m root derived from the domain root.
        let stage_root = root.pow((n / m) as u64);
        for group in values.chunks_exact_mut(m) {
            let mut twiddle = FieldElement::ONE;
            for j in 0..half_m {
                let t = twiddle * group[half_m + j];
                let u = group[j];
                group[j] = u + t;
                group[half_m + j] = u - t;
                twiddle *= stage_root;
            }
        }
        m *= 2;
    }
}

/// Forward transform: evaluate the input, read as polynomial coefficients,
/// at all n-th roots of unity (n = input length).
///
/// Fails with [`FieldError::Domain`] for a length that is zero or not a
/// power of two, [`FieldError::Range`] for a length above [`MAX_ORDER`],
/// and propagates the registry's errors for the root lookup.
pub fn forward_transform(input: &[FieldElement]) -> Result<Vec<FieldElement>, FieldError> {
    let order = transform_order(input.len())?;
    let root = roots::primitive_root(order)?;
    let mut values = input.to_vec();
    transform_in_place(&mut values, root);
    Ok(values)
}

/// Inverse transform: the same butterfly network on the inverse root,
/// scaled by n^-1. Composing with [`forward_transform`] reproduces the
/// input exactly. Rejects the same lengths the forward transform rejects,
/// including the empty array.
pub fn inverse_transform(input: &[FieldElement]) -> Result<Vec<FieldElement>, FieldError> {
    let order = transform_order(input.len())?;
    let inverse_root = roots::inverse_primitive_root(order)?;
    let mut values = input.to_vec();
    transform_in_place(&mut values, inverse_root);

    // order <= 2^32 < p, so the length is a nonzero field element.
    let length_inverse = FieldElement::new(order).inverse()?;
    for value in &mut values {
        *value *= length_inverse;
    }
    Ok(values)
}

/// Multiply two coefficient arrays via the convolution theorem: zero-pad
/// to the next power of two at least deg(a) + deg(b) + 1, transform both,
/// multiply point-wise, inverse-transform, and truncate to the product's
/// true length. Empty operands yield the empty (zero) polynomial.
pub fn multiply_polynomials(
    a: &[FieldElement],
    b: &[FieldElement],
) -> Result<Vec<FieldElement>, FieldError> {
    if a.is_empty() || b.is_empty() {
        return Ok(Vec::new());
    }
    let product_len = a.len() + b.len() - 1;
    let padded_len = product_len.next_power_of_two();
    let order = transform_order(padded_len)?;
    let root = roots::primitive_root(order)?;

    let mut lhs = a.to_vec();
    lhs.resize(padded_len, FieldElement::ZERO);
    let mut rhs = b.to_vec();
    rhs.resize(padded_len, FieldElement::ZERO);

    transform_in_place(&mut lhs, root);
    transform_in_place(&mut rhs, root);
    for (l, r) in lhs.iter_mut().zip(&rhs) {
        *l *= *r;
    }

    let inverse_root = roots::inverse_primitive_root(order)?;
    transform_in_place(&mut lhs, inverse_root);
    let length_inverse = FieldElement::new(order).inverse()?;
    for value in &mut lhs {
        *value *= length_inverse;
    }

    lhs.truncate(product_len);
    Ok(lhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn felts(values: &[u64]) -> Vec<FieldElement> {
        values.iter().map(|&v| FieldElement::new(v)).collect()
    }

    /// O(n^2) reference transform straight from the definition.
    fn naive_transform(input: &[FieldElement]) -> Vec<FieldElement> {
        let n = input.len() as u64;
        let root = roots::primitive_root(n).unwrap();
        (0..n)
            .map(|k| {
                let mut acc = FieldElement::ZERO;
                for (j, &coeff) in input.iter().enumerate() {
                    acc += coeff * root.pow(k * j as u64);
                }
                acc
            })
            .collect()
    }

    fn schoolbook_multiply(a: &[FieldElement], b: &[FieldElement]) -> Vec<FieldElement> {
        if a.is_empty() || b.is_empty() {
            return Vec::new();
        }
        let mut product = vec![FieldElement::ZERO; a.len() + b.len() - 1];
        for (i, &x) in a.iter().enumerate() {
            for (j, &y) in b.iter().enumerate() {
                product[i + j] += x * y;
            }
        }
        product
    }

    #[test]
    fn length_one_transform_is_identity() {
        let input = felts(&[42]);
        assert_eq!(forward_transform(&input).unwrap(), input);
        assert_eq!(inverse_transform(&input).unwrap(), input);
    }

    #[test]
    fn length_two_transform_by_hand() {
        // The order-2 root is -1, so the transform is [a + b, a - b].
        let a = FieldElement::new(100);
        let b = FieldElement::new(3);
        let transformed = forward_transform(&[a, b]).unwrap();
        assert_eq!(transformed, vec![a + b, a - b]);
    }

    #[test]
    fn forward_matches_the_naive_definition() {
        for log2_n in 0..=6u32 {
            let n = 1usize << log2_n;
            let input: Vec<FieldElement> =
                (0..n).map(|_| FieldElement::random_element()).collect();
            assert_eq!(
                forward_transform(&input).unwrap(),
                naive_transform(&input),
                "mismatch at n = {n}"
            );
        }
    }

    #[test]
    fn inverse_undoes_forward_exactly() {
        for log2_n in 0..=10u32 {
            let n = 1usize << log2_n;
            let input: Vec<FieldElement> =
                (0..n).map(|_| FieldElement::random_element()).collect();
            let round_trip = inverse_transform(&forward_transform(&input).unwrap()).unwrap();
            assert_eq!(round_trip, input, "round trip failed at n = {n}");
        }
    }

    #[test]
    fn forward_undoes_inverse_exactly() {
        let input: Vec<FieldElement> =
            (0..16).map(|_| FieldElement::random_element()).collect();
        let round_trip = forward_transform(&inverse_transform(&input).unwrap()).unwrap();
        assert_eq!(round_trip, input);
    }

    #[test]
    fn invalid_lengths_are_rejected() {
        let three = felts(&[1, 2, 3]);
        assert!(matches!(
            forward_transform(&three),
            Err(FieldError::Domain(_))
        ));
        assert!(matches!(
            inverse_transform(&three),
            Err(FieldError::Domain(_))
        ));
        assert!(matches!(forward_transform(&[]), Err(FieldError::Domain(_))));
        assert!(matches!(inverse_transform(&[]), Err(FieldError::Domain(_))));
    }

    #[test]
    fn multiplication_matches_schoolbook() {
        // (1 + x)(1 - x) = 1 - x^2
        let sum = felts(&[1, 1]);
        let difference = vec![FieldElement::ONE, -FieldElement::ONE];
        let product = multiply_polynomials(&sum, &difference).unwrap();
        assert_eq!(
            product,
            vec![FieldElement::ONE, FieldElement::ZERO, -FieldElement::ONE]
        );

        for (len_a, len_b) in [(1, 1), (2, 3), (4, 4), (7, 9), (16, 5)] {
            let a: Vec<FieldElement> =
                (0..len_a).map(|_| FieldElement::random_element()).collect();
            let b: Vec<FieldElement> =
                (0..len_b).map(|_| FieldElement::random_element()).collect();
            assert_eq!(
                multiply_polynomials(&a, &b).unwrap(),
                schoolbook_multiply(&a, &b),
                "mismatch for degrees {} x {}",
                len_a - 1,
                len_b - 1
            );
        }
    }

    #[test]
    fn multiplication_by_empty_is_empty() {
        let a = felts(&[1, 2, 3]);
        assert!(multiply_polynomials(&a, &[]).unwrap().is_empty());
        assert!(multiply_polynomials(&[], &a).unwrap().is_empty());
    }

    #[test]
    fn pointwise_form_diagonalizes_convolution() {
        // Transform of a product equals the point-wise product of transforms
        // when no truncation is involved.
        let n = 8usize;
        let a: Vec<FieldElement> = (0..n / 2).map(|_| FieldElement::random_element()).collect();
        let b: Vec<FieldElement> = (0..n / 2).map(|_| FieldElement::random_element()).collect();
        let mut a_padded = a.clone();
        a_padded.resize(n, FieldElement::ZERO);
        let mut b_padded = b.clone();
        b_padded.resize(n, FieldElement::ZERO);
        let mut product = schoolbook_multiply(&a, &b);
        product.resize(n, FieldElement::ZERO);

        let lhs = forward_transform(&product).unwrap();
        let rhs: Vec<FieldElement> = forward_transform(&a_padded)
            .unwrap()
            .iter()
            .zip(forward_transform(&b_padded).unwrap())
            .map(|(&x, y)| x * y)
            .collect();
        assert_eq!(lhs, rhs);
    }
}
