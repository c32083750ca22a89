// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! Methods to preprocess the constraint system for use in a proof.
//!
//! Preprocessing turns a constraint set into eleven polynomials of degree
//! below `n`, interpolated over a size-`n` multiplicative subgroup `H`:
//! the five selector polynomials, three identity polynomials whose values
//! on `H` enumerate the wire positions `1..=3n`, and three permutation
//! polynomials whose values enumerate the positions' images under the
//! wire permutation. Both prover and verifier hold this object; it is
//! deterministic in the constraints and the subgroup.

use crate::constraint_system::PlonkConstraints;
use crate::error::Error;
use crate::permutation::Permutation;
use crate::polynomial::Polynomial;
use ark_ff::PrimeField;
use tracing::debug;

/// The eleven preprocessed polynomials of a circuit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreprocessedCircuit<F>
where
    F: PrimeField,
{
    /// Left selector polynomial.
    pub q_l: Polynomial<F>,

    /// Right selector polynomial.
    pub q_r: Polynomial<F>,

    /// Output selector polynomial.
    pub q_o: Polynomial<F>,

    /// Multiplication selector polynomial.
    pub q_m: Polynomial<F>,

    /// Constant selector polynomial.
    pub q_c: Polynomial<F>,

    /// Identity polynomial of the left wire positions `1..=n`.
    pub s_id1: Polynomial<F>,

    /// Identity polynomial of the right wire positions `n+1..=2n`.
    pub s_id2: Polynomial<F>,

    /// Identity polynomial of the output wire positions `2n+1..=3n`.
    pub s_id3: Polynomial<F>,

    /// Permutation polynomial of the left wire positions.
    pub s_sigma1: Polynomial<F>,

    /// Permutation polynomial of the right wire positions.
    pub s_sigma2: Polynomial<F>,

    /// Permutation polynomial of the output wire positions.
    pub s_sigma3: Polynomial<F>,
}

impl<F> PreprocessedCircuit<F>
where
    F: PrimeField,
{
    /// Preprocesses `constraints` over the evaluation domain `subgroup`.
    ///
    /// The subgroup must contain one point per gate, ordered as
    /// `g^0, g^1, ..., g^(n-1)`. Position values are shifted by one so the
    /// identity polynomials enumerate `1..=3n`, keeping them away from
    /// zero.
    pub fn preprocess(
        constraints: &PlonkConstraints<F>,
        subgroup: &[F],
    ) -> Result<Self, Error> {
        if !constraints.is_valid() {
            return Err(Error::InvalidConstraints);
        }
        if subgroup.len() != constraints.n {
            return Err(Error::MismatchedSubgroupSize {
                expected: constraints.n,
                actual: subgroup.len(),
            });
        }

        let n = constraints.n;
        let permutation = Permutation::from_constraints(constraints);

        // Position values are shifted by one so the identity polynomials
        // enumerate 1..=3n.
        let identity_poly = |role: usize| -> Result<Polynomial<F>, Error> {
            let values: Vec<F> = (0..n)
                .map(|gate| F::from((role * n + gate + 1) as u64))
                .collect();
            Polynomial::interpolate(subgroup, &values)
        };
        let sigma_poly = |role: usize| -> Result<Polynomial<F>, Error> {
            let values: Vec<F> = (0..n)
                .map(|gate| F::from((permutation[role * n + gate] + 1) as u64))
                .collect();
            Polynomial::interpolate(subgroup, &values)
        };

        debug!(gates = n, "preprocessing constraint system");

        Ok(Self {
            q_l: Polynomial::interpolate(subgroup, &constraints.q_l)?,
            q_r: Polynomial::interpolate(subgroup, &constraints.q_r)?,
            q_o: Polynomial::interpolate(subgroup, &constraints.q_o)?,
            q_m: Polynomial::interpolate(subgroup, &constraints.q_m)?,
            q_c: Polynomial::interpolate(subgroup, &constraints.q_c)?,
            s_id1: identity_poly(0)?,
            s_id2: identity_poly(1)?,
            s_id3: identity_poly(2)?,
            s_sigma1: sigma_poly(0)?,
            s_sigma2: sigma_poly(1)?,
            s_sigma3: sigma_poly(2)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::batch_field_test;
    use crate::constraint_system::test::addition_gates;
    use crate::util::roots_of_unity;

    fn test_identity_polynomials_enumerate_positions<F: PrimeField>() {
        let constraints = addition_gates::<F>();
        // The test constraints have n = 3, which has no subgroup of
        // matching size in either field; interpolate over 1, 2, 3 instead.
        let domain: Vec<F> = (1..=3u64).map(F::from).collect();
        let preprocessed =
            PreprocessedCircuit::preprocess(&constraints, &domain).unwrap();

        for (role, identity) in [
            &preprocessed.s_id1,
            &preprocessed.s_id2,
            &preprocessed.s_id3,
        ]
        .iter()
        .enumerate()
        {
            for (gate, point) in domain.iter().enumerate() {
                let expected = F::from((role * 3 + gate + 1) as u64);
                assert_eq!(identity.evaluate(point), expected);
            }
        }
    }

    fn test_permutation_polynomials_follow_cycles<F: PrimeField>() {
        let constraints = addition_gates::<F>();
        let domain: Vec<F> = (1..=3u64).map(F::from).collect();
        let preprocessed =
            PreprocessedCircuit::preprocess(&constraints, &domain).unwrap();

        // sigma = [0, 1, 6, 3, 4, 7, 2, 5, 8], shifted by one on H.
        let expected = [1u64, 2, 7, 4, 5, 8, 3, 6, 9];
        for (role, sigma) in [
            &preprocessed.s_sigma1,
            &preprocessed.s_sigma2,
            &preprocessed.s_sigma3,
        ]
        .iter()
        .enumerate()
        {
            for (gate, point) in domain.iter().enumerate() {
                let value = F::from(expected[role * 3 + gate]);
                assert_eq!(sigma.evaluate(point), value);
            }
        }
    }

    fn test_selector_polynomials_match_constraints<F: PrimeField>() {
        let constraints = addition_gates::<F>();
        let domain: Vec<F> = (1..=3u64).map(F::from).collect();
        let preprocessed =
            PreprocessedCircuit::preprocess(&constraints, &domain).unwrap();

        for (gate, point) in domain.iter().enumerate() {
            assert_eq!(
                preprocessed.q_l.evaluate(point),
                constraints.q_l[gate]
            );
            assert_eq!(
                preprocessed.q_o.evaluate(point),
                constraints.q_o[gate]
            );
            assert_eq!(
                preprocessed.q_m.evaluate(point),
                constraints.q_m[gate]
            );
        }
    }

    fn test_preprocess_over_roots_of_unity<F: PrimeField>() {
        let one = F::one();
        let zero = F::zero();
        let constraints = crate::constraint_system::PlonkConstraints {
            l: 0,
            m: 4,
            n: 4,
            a: vec![1, 2, 3, 4],
            b: vec![2, 3, 4, 1],
            c: vec![3, 4, 1, 2],
            q_l: vec![one; 4],
            q_r: vec![one; 4],
            q_o: vec![-one; 4],
            q_m: vec![zero; 4],
            q_c: vec![zero; 4],
        };
        let subgroup = roots_of_unity::<F>(4).unwrap();
        let preprocessed =
            PreprocessedCircuit::preprocess(&constraints, &subgroup).unwrap();

        assert!(preprocessed.s_id1.degree() < 4);
        assert!(preprocessed.s_sigma3.degree() < 4);
        for (gate, point) in subgroup.iter().enumerate() {
            assert_eq!(
                preprocessed.s_id2.evaluate(point),
                F::from((4 + gate + 1) as u64)
            );
        }
    }

    fn test_preprocess_rejects_bad_inputs<F: PrimeField>() {
        let mut constraints = addition_gates::<F>();
        let domain: Vec<F> = (1..=3u64).map(F::from).collect();

        let wrong_domain: Vec<F> = (1..=4u64).map(F::from).collect();
        assert!(matches!(
            PreprocessedCircuit::preprocess(&constraints, &wrong_domain),
            Err(Error::MismatchedSubgroupSize { .. })
        ));

        constraints.a[0] = 0;
        assert!(matches!(
            PreprocessedCircuit::preprocess(&constraints, &domain),
            Err(Error::InvalidConstraints)
        ));
    }

    batch_field_test!(
        [
            test_identity_polynomials_enumerate_positions,
            test_permutation_polynomials_follow_cycles,
            test_selector_polynomials_match_constraints,
            test_preprocess_over_roots_of_unity,
            test_preprocess_rejects_bad_inputs
        ] => (bn254, ark_bn254::Fr)
    );

    batch_field_test!(
        [
            test_permutation_polynomials_follow_cycles,
            test_preprocess_over_roots_of_unity
        ] => (bls12_381, ark_bls12_381::Fr)
    );
}
