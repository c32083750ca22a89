// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! Permutations
//!
//! The copy-satisfiability of a circuit is encoded as a permutation over
//! wire positions. For a circuit with `n` gates the positions are
//! `{0, ..., 3n - 1}`: position `j * n + i` is wire role `j` (left, right,
//! output) of gate `i`. Positions carrying the same wire variable form a
//! cycle, and the permutation maps each position to the next one in its
//! cycle, so enforcing `w[pos] = w[sigma(pos)]` everywhere forces all
//! positions of a cycle to carry equal values.

use crate::constraint_system::PlonkConstraints;
use ark_ff::PrimeField;
use core::ops::Index;

/// A permutation over the `3n` wire positions of a circuit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation {
    map: Vec<usize>,
}

impl Permutation {
    /// Derives the wire permutation of a constraint set.
    ///
    /// Walks the gates in order and appends each position to the class of
    /// its wire variable; every class then becomes a cycle by mapping each
    /// position to its successor, wrapping around at the end. Positions of
    /// a variable used exactly once map to themselves.
    pub fn from_constraints<F>(constraints: &PlonkConstraints<F>) -> Self
    where
        F: PrimeField,
    {
        let n = constraints.n;

        // Positions of each wire variable, in gate order with the left,
        // right and output roles of a gate visited in that order.
        let mut classes: Vec<Vec<usize>> = vec![Vec::new(); constraints.m];
        for gate in 0..n {
            classes[constraints.a[gate] - 1].push(gate);
            classes[constraints.b[gate] - 1].push(n + gate);
            classes[constraints.c[gate] - 1].push(2 * n + gate);
        }

        let mut map: Vec<usize> = (0..3 * n).collect();
        for class in classes.iter().filter(|class| !class.is_empty()) {
            for (index, position) in class.iter().enumerate() {
                map[*position] = class[(index + 1) % class.len()];
            }
        }

        Self { map }
    }

    /// The number of wire positions covered by the permutation.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true iff the permutation covers no positions.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The permutation as a slice mapping position to successor position.
    pub fn as_slice(&self) -> &[usize] {
        &self.map
    }
}

impl Index<usize> for Permutation {
    type Output = usize;

    fn index(&self, position: usize) -> &usize {
        &self.map[position]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::batch_field_test;
    use crate::constraint_system::test::addition_gates;

    fn test_permutation_of_addition_gates<F: PrimeField>() {
        let constraints = addition_gates::<F>();
        let permutation = Permutation::from_constraints(&constraints);

        // Wire 5 links a[2] (position 2) with c[0] (position 6), and wire 6
        // links b[2] (position 5) with c[1] (position 7); all other
        // positions are fixed.
        assert_eq!(permutation.as_slice(), &[0, 1, 6, 3, 4, 7, 2, 5, 8]);
    }

    fn test_permutation_is_a_bijection<F: PrimeField>() {
        let one = F::one();
        let zero = F::zero();
        let constraints = PlonkConstraints {
            l: 2,
            m: 4,
            n: 4,
            a: vec![1, 2, 3, 1],
            b: vec![2, 2, 4, 4],
            c: vec![3, 4, 1, 2],
            q_l: vec![one; 4],
            q_r: vec![one; 4],
            q_o: vec![-one; 4],
            q_m: vec![zero; 4],
            q_c: vec![zero; 4],
        };
        assert!(constraints.is_valid());

        let permutation = Permutation::from_constraints(&constraints);
        assert_eq!(permutation.len(), 12);

        let mut seen = vec![false; permutation.len()];
        for position in 0..permutation.len() {
            let image = permutation[position];
            assert!(!seen[image]);
            seen[image] = true;
        }
        assert!(seen.iter().all(|covered| *covered));
    }

    fn test_cycles_return_to_start<F: PrimeField>() {
        let constraints = addition_gates::<F>();
        let permutation = Permutation::from_constraints(&constraints);

        // Following a cycle for its full length lands back on the starting
        // position, and never earlier than the cycle length.
        for start in 0..permutation.len() {
            let mut current = permutation[start];
            let mut steps = 1;
            while current != start {
                current = permutation[current];
                steps += 1;
                assert!(steps <= permutation.len());
            }
        }
    }

    fn test_single_use_wires_are_fixed_points<F: PrimeField>() {
        let one = F::one();
        let zero = F::zero();
        let constraints = PlonkConstraints {
            l: 0,
            m: 3,
            n: 1,
            a: vec![1],
            b: vec![2],
            c: vec![3],
            q_l: vec![one],
            q_r: vec![one],
            q_o: vec![-one],
            q_m: vec![zero],
            q_c: vec![zero],
        };

        let permutation = Permutation::from_constraints(&constraints);
        assert_eq!(permutation.as_slice(), &[0, 1, 2]);
    }

    batch_field_test!(
        [
            test_permutation_of_addition_gates,
            test_permutation_is_a_bijection,
            test_cycles_return_to_start,
            test_single_use_wires_are_fixed_points
        ] => (bn254, ark_bn254::Fr)
    );

    batch_field_test!(
        [
            test_permutation_of_addition_gates,
            test_permutation_is_a_bijection
        ] => (bls12_381, ark_bls12_381::Fr)
    );
}
