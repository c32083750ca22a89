// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! Byte encodings and evaluation-domain helpers shared across the crate.

use crate::error::Error;
use ark_ec::AffineRepr;
use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;

/// Generator of the multiplicative group of every supported scalar field.
/// Order-`n` subgroups are derived as powers of `5^((q - 1) / n)`.
pub const PRIMITIVE_ROOT: u64 = 5;

/// Encodes a field element as canonical big-endian bytes of minimal length.
///
/// Leading zero bytes are stripped, so zero encodes as the empty string.
pub fn field_to_bytes<F: PrimeField>(element: &F) -> Vec<u8> {
    let bytes = element.into_bigint().to_bytes_be();
    match bytes.iter().position(|byte| *byte != 0) {
        Some(first_non_zero) => bytes[first_non_zero..].to_vec(),
        None => Vec::new(),
    }
}

/// Encodes an affine point as the concatenation of the minimal big-endian
/// encodings of its coordinates, x first. The identity point encodes as the
/// empty string.
pub fn point_to_bytes<A>(point: &A) -> Vec<u8>
where
    A: AffineRepr,
    A::BaseField: PrimeField,
{
    match point.xy() {
        Some((x, y)) => {
            let mut bytes = field_to_bytes(x);
            bytes.extend(field_to_bytes(y));
            bytes
        }
        None => Vec::new(),
    }
}

/// Returns the multiplicative subgroup `[1, g, g^2, ..., g^(order - 1)]` of
/// `F*` generated by `g = 5^((q - 1) / order)`.
///
/// Fails with [`Error::InvalidSubgroupOrder`] unless `order` divides `q - 1`.
pub fn roots_of_unity<F: PrimeField>(order: u64) -> Result<Vec<F>, Error> {
    let group_order: BigUint = F::MODULUS.into();
    let group_order = group_order - 1u64;
    if order == 0 || &group_order % order != BigUint::from(0u64) {
        return Err(Error::InvalidSubgroupOrder { order });
    }

    let exponent = group_order / order;
    let root = F::from(PRIMITIVE_ROOT).pow(exponent.to_u64_digits());

    let mut roots = Vec::with_capacity(order as usize);
    let mut accumulator = F::one();
    for _ in 0..order {
        roots.push(accumulator);
        accumulator *= root;
    }

    // The cycle must close after `order` steps.
    if accumulator != F::one() {
        return Err(Error::InvalidSubgroupOrder { order });
    }

    Ok(roots)
}

/// Dot product of two equal-length scalar vectors.
pub fn inner_product<F: PrimeField>(a: &[F], b: &[F]) -> Result<F, Error> {
    if a.len() != b.len() {
        return Err(Error::MismatchedBatchSize {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| *x * y).sum())
}

/// Returns `[1, z, z^2, ..., z^(count - 1)]`.
pub fn powers_of<F: PrimeField>(z: &F, count: usize) -> Vec<F> {
    let mut powers = Vec::with_capacity(count);
    let mut current = F::one();
    for _ in 0..count {
        powers.push(current);
        current *= z;
    }
    powers
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::batch_field_test;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_field_bytes_are_minimal<F: PrimeField>() {
        assert_eq!(field_to_bytes(&F::zero()), Vec::<u8>::new());
        assert_eq!(field_to_bytes(&F::one()), vec![1]);
        assert_eq!(field_to_bytes(&F::from(256u64)), vec![1, 0]);
        assert_eq!(field_to_bytes(&F::from(0xabcdefu64)), vec![0xab, 0xcd, 0xef]);
    }

    fn test_roots_of_unity_form_a_subgroup<F: PrimeField>() {
        for order in [1u64, 2, 4, 8, 16] {
            let roots = roots_of_unity::<F>(order).unwrap();
            assert_eq!(roots.len(), order as usize);
            assert_eq!(roots[0], F::one());

            // Closure: the generator cycles back to one after `order` steps.
            if order > 1 {
                let generator = roots[1];
                assert_eq!(generator.pow([order]), F::one());
                assert_ne!(generator.pow([order / 2]), F::one());
            }

            // All returned elements are distinct.
            for i in 0..roots.len() {
                for j in (i + 1)..roots.len() {
                    assert_ne!(roots[i], roots[j]);
                }
            }
        }
    }

    fn test_roots_of_unity_rejects_bad_orders<F: PrimeField>() {
        // 5 divides neither supported group order, and 0 is never valid.
        assert!(roots_of_unity::<F>(5).is_err());
        assert!(roots_of_unity::<F>(0).is_err());
    }

    fn test_field_inverse<F: PrimeField>() {
        let mut rng = StdRng::seed_from_u64(0xf00d);
        for _ in 0..16 {
            let element = F::rand(&mut rng);
            if element.is_zero() {
                continue;
            }
            assert_eq!(element * element.inverse().unwrap(), F::one());
        }
    }

    fn test_inner_product<F: PrimeField>() {
        let a = vec![F::from(1u64), F::from(2u64), F::from(3u64)];
        let b = vec![F::from(4u64), F::from(5u64), F::from(6u64)];
        assert_eq!(inner_product(&a, &b).unwrap(), F::from(32u64));
        assert!(inner_product(&a, &b[..2]).is_err());
    }

    fn test_powers_of<F: PrimeField>() {
        let z = F::from(3u64);
        assert_eq!(
            powers_of(&z, 4),
            vec![F::one(), z, F::from(9u64), F::from(27u64)]
        );
    }

    batch_field_test!(
        [
            test_field_bytes_are_minimal,
            test_roots_of_unity_form_a_subgroup,
            test_roots_of_unity_rejects_bad_orders,
            test_field_inverse,
            test_inner_product,
            test_powers_of
        ] => (bn254, ark_bn254::Fr)
    );

    batch_field_test!(
        [
            test_field_bytes_are_minimal,
            test_roots_of_unity_form_a_subgroup,
            test_roots_of_unity_rejects_bad_orders,
            test_field_inverse,
            test_inner_product,
            test_powers_of
        ] => (bls12_381, ark_bls12_381::Fr)
    );
}
