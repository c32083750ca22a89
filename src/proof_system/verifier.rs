// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! The PLONK verifier.
//!
//! In order for the verifier and prover to have the same view in the
//! non-interactive setting, the verifier replays the prover's transcript
//! schedule from the commitments and evaluations carried by the proof,
//! re-deriving every challenge. It then checks the six commitment
//! openings at the evaluation challenge and, from the claimed
//! evaluations alone, recomputes the three constraint polynomials there
//! and checks the quotient identity. Soundness rests on Schwartz-Zippel
//! at the verifier-chosen evaluation point.

use crate::commitment_scheme::CommitmentScheme;
use crate::error::Error;
use crate::polynomial::Polynomial;
use crate::proof_system::{PreprocessedCircuit, Proof};
use crate::transcript::Transcript;
use ark_ff::PrimeField;
use itertools::izip;
use tracing::debug;

/// Verifies PLONK proofs against a preprocessed constraint system.
#[derive(derivative::Derivative)]
#[derivative(Debug(bound = "PC: core::fmt::Debug"))]
pub struct Verifier<F, PC>
where
    F: PrimeField,
    PC: CommitmentScheme<F>,
{
    scheme: PC,
    preprocessed: PreprocessedCircuit<F>,
    subgroup: Vec<F>,
}

impl<F, PC> Verifier<F, PC>
where
    F: PrimeField,
    PC: CommitmentScheme<F>,
{
    /// Builds a verifier holding the preprocessed circuit and the
    /// evaluation domain the proof was produced over.
    pub fn new(
        scheme: PC,
        preprocessed: PreprocessedCircuit<F>,
        subgroup: Vec<F>,
    ) -> Self {
        Self {
            scheme,
            preprocessed,
            subgroup,
        }
    }

    /// Checks `proof` against `public_inputs`.
    ///
    /// Rejection returns `Ok(false)`; errors are reserved for inputs of
    /// the wrong shape.
    pub fn verify(
        &self,
        proof: &Proof<F, PC>,
        public_inputs: &[F],
    ) -> Result<bool, Error> {
        // Replay the prover's transcript to derive the same challenges.
        let mut transcript = Transcript::<F>::new();
        transcript.append(&proof.f_l_comm);
        transcript.append(&proof.f_r_comm);
        transcript.append(&proof.f_o_comm);
        let beta = transcript.challenge_scalar(Some(&[0x00]));
        let gamma = transcript.challenge_scalar(Some(&[0x01]));

        transcript.append(&proof.z_comm);
        transcript.append(&proof.z_shift_comm);
        let alpha_1 = transcript.challenge_scalar(Some(&[0x00]));
        let alpha_2 = transcript.challenge_scalar(Some(&[0x01]));
        let alpha_3 = transcript.challenge_scalar(Some(&[0x02]));

        transcript.append(&proof.t_comm);
        let zeta = transcript.challenge_scalar(None);

        let evaluations = &proof.evaluations;
        transcript.append_scalar(&evaluations.f_l);
        transcript.append_scalar(&evaluations.f_r);
        transcript.append_scalar(&evaluations.f_o);
        transcript.append_scalar(&evaluations.z);
        transcript.append_scalar(&evaluations.z_shift);
        transcript.append_scalar(&evaluations.t);
        let eta = transcript.challenge_scalar(None);

        // Every claimed evaluation must be backed by a valid opening.
        let openings_valid = self.scheme.verify_opening(
            &proof.f_l_opening,
            &proof.f_l_comm,
            &zeta,
            &evaluations.f_l,
            &eta,
        ) && self.scheme.verify_opening(
            &proof.f_r_opening,
            &proof.f_r_comm,
            &zeta,
            &evaluations.f_r,
            &eta,
        ) && self.scheme.verify_opening(
            &proof.f_o_opening,
            &proof.f_o_comm,
            &zeta,
            &evaluations.f_o,
            &eta,
        ) && self.scheme.verify_opening(
            &proof.z_opening,
            &proof.z_comm,
            &zeta,
            &evaluations.z,
            &eta,
        ) && self.scheme.verify_opening(
            &proof.z_shift_opening,
            &proof.z_shift_comm,
            &zeta,
            &evaluations.z_shift,
            &eta,
        ) && self.scheme.verify_opening(
            &proof.t_opening,
            &proof.t_comm,
            &zeta,
            &evaluations.t,
            &eta,
        );
        if !openings_valid {
            debug!("proof rejected: opening verification failed");
            return Ok(false);
        }

        // F_1(zeta): the grand product starts at one.
        let l_1_eval =
            Polynomial::lagrange_basis(&self.subgroup, 0)?.evaluate(&zeta);
        let f_1_eval = l_1_eval * (evaluations.z - F::one());

        // F_2(zeta): the grand product accumulates f' / g'.
        let wire_evals =
            [evaluations.f_l, evaluations.f_r, evaluations.f_o];
        let identity_polys = [
            &self.preprocessed.s_id1,
            &self.preprocessed.s_id2,
            &self.preprocessed.s_id3,
        ];
        let sigma_polys = [
            &self.preprocessed.s_sigma1,
            &self.preprocessed.s_sigma2,
            &self.preprocessed.s_sigma3,
        ];
        let mut f_prime_eval = F::one();
        let mut g_prime_eval = F::one();
        for (wire_eval, identity, sigma) in
            izip!(wire_evals, identity_polys, sigma_polys)
        {
            f_prime_eval *=
                wire_eval + beta * identity.evaluate(&zeta) + gamma;
            g_prime_eval *= wire_eval + beta * sigma.evaluate(&zeta) + gamma;
        }
        let f_2_eval = evaluations.z * f_prime_eval
            - g_prime_eval * evaluations.z_shift;

        // F_3(zeta): every gate equation holds.
        let mut public_input_eval = F::zero();
        for (index, public) in public_inputs.iter().enumerate() {
            let basis = Polynomial::lagrange_basis(&self.subgroup, index)?;
            public_input_eval += basis.evaluate(&zeta) * -*public;
        }
        let f_3_eval = self.preprocessed.q_l.evaluate(&zeta) * evaluations.f_l
            + self.preprocessed.q_r.evaluate(&zeta) * evaluations.f_r
            + self.preprocessed.q_o.evaluate(&zeta) * evaluations.f_o
            + self.preprocessed.q_m.evaluate(&zeta)
                * evaluations.f_l
                * evaluations.f_r
            + self.preprocessed.q_c.evaluate(&zeta)
            + public_input_eval;

        // The quotient identity at zeta.
        let vanishing_eval: F =
            self.subgroup.iter().map(|point| zeta - point).product();
        let identity = alpha_1 * f_1_eval + alpha_2 * f_2_eval
            + alpha_3 * f_3_eval
            - evaluations.t * vanishing_eval;

        let accepted = identity.is_zero();
        debug!(accepted, "checked quotient identity");
        Ok(accepted)
    }
}
