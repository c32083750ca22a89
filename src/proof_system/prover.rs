// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! The PLONK prover.
//!
//! Proving runs the multi-round protocol non-interactively: each round
//! commits to polynomials, appends the commitments to the transcript and
//! derives the next round's challenges from it, so the verifier can replay
//! the same schedule from the proof alone.
//!
//! 1. Commit to the three wire polynomials.
//! 2. Derive the permutation challenges and commit to the grand product
//!    polynomial and its cyclic shift.
//! 3. Derive the combination challenges, combine the gate, permutation and
//!    start constraints, divide by the vanishing polynomial of the domain
//!    and commit to the quotient.
//! 4. Derive the evaluation challenge, evaluate all six polynomials there
//!    and open every commitment at that point.
//!
//! For a satisfying witness every constraint polynomial vanishes on the
//! domain, so the vanishing polynomial divides the combination cleanly;
//! anything else aborts with [`Error::NonDivisibleQuotient`].

use crate::commitment_scheme::CommitmentScheme;
use crate::constraint_system::PlonkConstraints;
use crate::error::Error;
use crate::polynomial::Polynomial;
use crate::proof_system::{PreprocessedCircuit, Proof, ProofEvaluations};
use crate::transcript::Transcript;
use ark_ff::PrimeField;
#[cfg(test)]
use ark_ff::One;
use num_bigint::BigUint;
use tracing::debug;

/// Proves satisfiability of a preprocessed constraint system.
#[derive(derivative::Derivative)]
#[derivative(Debug(bound = "PC: core::fmt::Debug"))]
pub struct Prover<F, PC>
where
    F: PrimeField,
    PC: CommitmentScheme<F>,
{
    scheme: PC,
    constraints: PlonkConstraints<F>,
    preprocessed: PreprocessedCircuit<F>,
    subgroup: Vec<F>,
}

impl<F, PC> Prover<F, PC>
where
    F: PrimeField,
    PC: CommitmentScheme<F>,
{
    /// Builds a prover over `constraints` preprocessed as `preprocessed`,
    /// committing with `scheme` and evaluating over `subgroup`.
    ///
    /// The constraints must satisfy their invariants, the subgroup must
    /// have one point per gate, and the field must have more elements
    /// than there are wire positions.
    pub fn new(
        scheme: PC,
        constraints: PlonkConstraints<F>,
        preprocessed: PreprocessedCircuit<F>,
        subgroup: Vec<F>,
    ) -> Result<Self, Error> {
        if constraints.n == 0 || !constraints.is_valid() {
            return Err(Error::InvalidConstraints);
        }
        if subgroup.len() != constraints.n {
            return Err(Error::MismatchedSubgroupSize {
                expected: constraints.n,
                actual: subgroup.len(),
            });
        }

        let modulus: BigUint = F::MODULUS.into();
        if modulus <= BigUint::from(3 * constraints.n as u64) {
            return Err(Error::FieldTooSmall);
        }

        Ok(Self {
            scheme,
            constraints,
            preprocessed,
            subgroup,
        })
    }

    /// Interpolates the wire polynomial selecting, for each gate, the
    /// witness value carried by the wire with the given label.
    fn wire_polynomial(
        &self,
        labels: &[usize],
        witness: &[F],
    ) -> Result<Polynomial<F>, Error> {
        let values: Vec<F> =
            labels.iter().map(|label| witness[label - 1]).collect();
        Polynomial::interpolate(&self.subgroup, &values)
    }

    /// The public input polynomial `sum_i -public_inputs[i] * L_i`.
    fn public_input_polynomial(
        &self,
        public_inputs: &[F],
    ) -> Result<Polynomial<F>, Error> {
        let mut result = Polynomial::zero();
        for (index, public) in public_inputs.iter().enumerate() {
            let basis = Polynomial::lagrange_basis(&self.subgroup, index)?;
            result = &result + &basis.mul_scalar(&-*public);
        }
        Ok(result)
    }

    /// Produces a proof that `witness` satisfies the constraint system
    /// under the given public inputs.
    pub fn prove(
        &self,
        witness: &[F],
        public_inputs: &[F],
    ) -> Result<Proof<F, PC>, Error> {
        if witness.len() != self.constraints.m {
            return Err(Error::WitnessLenMismatch {
                expected: self.constraints.m,
                actual: witness.len(),
            });
        }
        if public_inputs.len() != self.constraints.l {
            return Err(Error::PublicInputsLenMismatch {
                expected: self.constraints.l,
                actual: public_inputs.len(),
            });
        }

        let n = self.constraints.n;
        let mut transcript = Transcript::<F>::new();

        // Round 1: wire polynomials.
        debug!("committing wire polynomials");
        let f_l = self.wire_polynomial(&self.constraints.a, witness)?;
        let f_r = self.wire_polynomial(&self.constraints.b, witness)?;
        let f_o = self.wire_polynomial(&self.constraints.c, witness)?;

        let f_l_comm = self.scheme.commit(&f_l)?;
        let f_r_comm = self.scheme.commit(&f_r)?;
        let f_o_comm = self.scheme.commit(&f_o)?;
        transcript.append(&f_l_comm);
        transcript.append(&f_r_comm);
        transcript.append(&f_o_comm);

        // Round 2: grand product.
        let beta = transcript.challenge_scalar(Some(&[0x00]));
        let gamma = transcript.challenge_scalar(Some(&[0x01]));

        debug!("committing grand product polynomial");
        let blend = |wire: &Polynomial<F>, positions: &Polynomial<F>| {
            (wire + &positions.mul_scalar(&beta)).add_scalar(&gamma)
        };
        let f_prime_l = blend(&f_l, &self.preprocessed.s_id1);
        let f_prime_r = blend(&f_r, &self.preprocessed.s_id2);
        let f_prime_o = blend(&f_o, &self.preprocessed.s_id3);
        let g_prime_l = blend(&f_l, &self.preprocessed.s_sigma1);
        let g_prime_r = blend(&f_r, &self.preprocessed.s_sigma2);
        let g_prime_o = blend(&f_o, &self.preprocessed.s_sigma3);
        let f_prime = &(&f_prime_l * &f_prime_r) * &f_prime_o;
        let g_prime = &(&g_prime_l * &g_prime_r) * &g_prime_o;

        // Prefix products of f'(g^i) / g'(g^i), anchored at one.
        let mut z_values = Vec::with_capacity(n);
        z_values.push(F::one());
        let mut accumulator = F::one();
        for point in &self.subgroup[..n - 1] {
            let numerator = f_prime.evaluate(point);
            let denominator = g_prime.evaluate(point);
            accumulator *= numerator
                * denominator.inverse().ok_or(Error::DivisionByZero)?;
            z_values.push(accumulator);
        }
        let z_poly = Polynomial::interpolate(&self.subgroup, &z_values)?;

        let mut z_shift_values = z_values;
        z_shift_values.rotate_left(1);
        let z_shift_poly =
            Polynomial::interpolate(&self.subgroup, &z_shift_values)?;

        let z_comm = self.scheme.commit(&z_poly)?;
        let z_shift_comm = self.scheme.commit(&z_shift_poly)?;
        transcript.append(&z_comm);
        transcript.append(&z_shift_comm);

        // Round 3: quotient.
        let alpha_1 = transcript.challenge_scalar(Some(&[0x00]));
        let alpha_2 = transcript.challenge_scalar(Some(&[0x01]));
        let alpha_3 = transcript.challenge_scalar(Some(&[0x02]));

        debug!("committing quotient polynomial");
        // F_1: the grand product starts at one.
        let l_1 = Polynomial::lagrange_basis(&self.subgroup, 0)?;
        let f_1 = &l_1 * &z_poly.sub_scalar(&F::one());

        // F_2: the grand product accumulates f' / g'.
        let z_f_prime = &z_poly * &f_prime;
        let g_prime_z_shift = &g_prime * &z_shift_poly;
        let f_2 = &z_f_prime - &g_prime_z_shift;

        // F_3: every gate equation holds.
        let public_input_poly = self.public_input_polynomial(public_inputs)?;
        let q_l_f_l = &self.preprocessed.q_l * &f_l;
        let q_r_f_r = &self.preprocessed.q_r * &f_r;
        let q_o_f_o = &self.preprocessed.q_o * &f_o;
        let q_m_f_l_f_r = &(&self.preprocessed.q_m * &f_l) * &f_r;
        let mut f_3 = &q_l_f_l + &q_r_f_r;
        f_3 = &f_3 + &q_o_f_o;
        f_3 = &f_3 + &q_m_f_l_f_r;
        f_3 = &f_3 + &self.preprocessed.q_c;
        f_3 = &f_3 + &public_input_poly;

        let mut combination = f_1.mul_scalar(&alpha_1);
        combination = &combination + &f_2.mul_scalar(&alpha_2);
        combination = &combination + &f_3.mul_scalar(&alpha_3);

        let vanishing = Polynomial::vanishing(&self.subgroup);
        let (t_poly, remainder) = combination.divide(&vanishing)?;
        if !remainder.is_zero() {
            return Err(Error::NonDivisibleQuotient);
        }
        let t_comm = self.scheme.commit(&t_poly)?;
        transcript.append(&t_comm);

        // Round 4: evaluations.
        let zeta = transcript.challenge_scalar(None);
        let evaluations = ProofEvaluations {
            f_l: f_l.evaluate(&zeta),
            f_r: f_r.evaluate(&zeta),
            f_o: f_o.evaluate(&zeta),
            z: z_poly.evaluate(&zeta),
            z_shift: z_shift_poly.evaluate(&zeta),
            t: t_poly.evaluate(&zeta),
        };
        transcript.append_scalar(&evaluations.f_l);
        transcript.append_scalar(&evaluations.f_r);
        transcript.append_scalar(&evaluations.f_o);
        transcript.append_scalar(&evaluations.z);
        transcript.append_scalar(&evaluations.z_shift);
        transcript.append_scalar(&evaluations.t);

        // Round 5: openings.
        let eta = transcript.challenge_scalar(None);
        debug!("opening commitments at the evaluation challenge");
        let f_l_opening =
            self.scheme
                .open(&f_l, &f_l_comm, &zeta, &evaluations.f_l, &eta)?;
        let f_r_opening =
            self.scheme
                .open(&f_r, &f_r_comm, &zeta, &evaluations.f_r, &eta)?;
        let f_o_opening =
            self.scheme
                .open(&f_o, &f_o_comm, &zeta, &evaluations.f_o, &eta)?;
        let z_opening =
            self.scheme
                .open(&z_poly, &z_comm, &zeta, &evaluations.z, &eta)?;
        let z_shift_opening = self.scheme.open(
            &z_shift_poly,
            &z_shift_comm,
            &zeta,
            &evaluations.z_shift,
            &eta,
        )?;
        let t_opening =
            self.scheme
                .open(&t_poly, &t_comm, &zeta, &evaluations.t, &eta)?;

        Ok(Proof {
            f_l_comm,
            f_r_comm,
            f_o_comm,
            z_comm,
            z_shift_comm,
            t_comm,
            evaluations,
            f_l_opening,
            f_r_opening,
            f_o_opening,
            z_opening,
            z_shift_opening,
            t_opening,
        })
    }
}
