// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! The PLONK constraint system: per-gate selector coefficients together
//! with the wiring of gate inputs and outputs to shared wire variables.
//!
//! Gate `i` enforces
//! `q_l[i]*a + q_r[i]*b + q_o[i]*c + q_m[i]*a*b + q_c[i] + pi_i = 0`
//! where `a`, `b`, `c` are the witness values carried by the gate's left,
//! right and output wires and `pi_i` is the public input assigned to the
//! gate, if any.

use ark_ff::PrimeField;

/// A fixed-arity PLONK constraint set over three wires per gate.
///
/// Wire labels in `a`, `b` and `c` are 1-based indices into the witness
/// vector; two gate positions carrying the same label are forced to equal
/// values by the permutation argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlonkConstraints<F>
where
    F: PrimeField,
{
    /// Number of public inputs; the first `l` witness entries are public.
    pub l: usize,

    /// Number of distinct wire variables.
    pub m: usize,

    /// Number of gates.
    pub n: usize,

    /// Left wire label of each gate, in `[1, m]`.
    pub a: Vec<usize>,

    /// Right wire label of each gate, in `[1, m]`.
    pub b: Vec<usize>,

    /// Output wire label of each gate, in `[1, m]`.
    pub c: Vec<usize>,

    /// Left selector coefficients.
    pub q_l: Vec<F>,

    /// Right selector coefficients.
    pub q_r: Vec<F>,

    /// Output selector coefficients.
    pub q_o: Vec<F>,

    /// Multiplication selector coefficients.
    pub q_m: Vec<F>,

    /// Constant selector coefficients.
    pub q_c: Vec<F>,
}

impl<F> PlonkConstraints<F>
where
    F: PrimeField,
{
    /// Checks the constraint-set invariants: every wire and selector vector
    /// has length `n`, every wire label lies in `[1, m]`, and the public
    /// input count does not exceed the number of wire variables.
    ///
    /// A violation yields `false`, never an error.
    pub fn is_valid(&self) -> bool {
        let wires = [&self.a, &self.b, &self.c];
        let selectors = [&self.q_l, &self.q_r, &self.q_o, &self.q_m, &self.q_c];

        wires.iter().all(|wire| wire.len() == self.n)
            && selectors.iter().all(|selector| selector.len() == self.n)
            && wires
                .iter()
                .all(|wire| wire.iter().all(|label| (1..=self.m).contains(label)))
            && self.l <= self.m
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::batch_field_test;

    /// The constraint set used across the permutation and preprocessing
    /// tests: three addition gates over seven wire variables.
    pub(crate) fn addition_gates<F: PrimeField>() -> PlonkConstraints<F> {
        let one = F::one();
        let zero = F::zero();
        PlonkConstraints {
            l: 3,
            m: 7,
            n: 3,
            a: vec![1, 3, 5],
            b: vec![2, 4, 6],
            c: vec![5, 6, 7],
            q_l: vec![one, one, one],
            q_r: vec![one, one, one],
            q_o: vec![-one, -one, -one],
            q_m: vec![zero, zero, zero],
            q_c: vec![zero, zero, zero],
        }
    }

    fn test_valid_constraints<F: PrimeField>() {
        assert!(addition_gates::<F>().is_valid());
    }

    fn test_invalid_wire_vector_length<F: PrimeField>() {
        let mut constraints = addition_gates::<F>();
        constraints.a.pop();
        assert!(!constraints.is_valid());
    }

    fn test_invalid_selector_length<F: PrimeField>() {
        let mut constraints = addition_gates::<F>();
        constraints.q_m.push(F::zero());
        assert!(!constraints.is_valid());
    }

    fn test_out_of_range_wire_label<F: PrimeField>() {
        let mut constraints = addition_gates::<F>();
        constraints.a[2] = 8;
        assert!(!constraints.is_valid());

        constraints.a[2] = 0;
        assert!(!constraints.is_valid());
    }

    fn test_too_many_public_inputs<F: PrimeField>() {
        let mut constraints = addition_gates::<F>();
        constraints.l = constraints.m + 1;
        assert!(!constraints.is_valid());
    }

    batch_field_test!(
        [
            test_valid_constraints,
            test_invalid_wire_vector_length,
            test_invalid_selector_length,
            test_out_of_range_wire_label,
            test_too_many_public_inputs
        ] => (bn254, ark_bn254::Fr)
    );

    batch_field_test!(
        [
            test_valid_constraints,
            test_out_of_range_wire_label
        ] => (bls12_381, ark_bls12_381::Fr)
    );
}
