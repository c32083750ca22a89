// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! A Proof stores the commitments, evaluations and opening proofs that
//! are needed to univocally identify a prove of some statement.

use crate::commitment_scheme::CommitmentScheme;
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// The evaluations of the six proof polynomials at the evaluation
/// challenge.
#[derive(CanonicalDeserialize, CanonicalSerialize, derivative::Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    Eq(bound = ""),
    PartialEq(bound = "")
)]
pub struct ProofEvaluations<F>
where
    F: PrimeField,
{
    /// Evaluation of the left wire polynomial.
    pub f_l: F,

    /// Evaluation of the right wire polynomial.
    pub f_r: F,

    /// Evaluation of the output wire polynomial.
    pub f_o: F,

    /// Evaluation of the grand product polynomial.
    pub z: F,

    /// Evaluation of the shifted grand product polynomial.
    pub z_shift: F,

    /// Evaluation of the quotient polynomial.
    pub t: F,
}

/// A PLONK proof under the commitment scheme `PC`.
///
/// Verifying consists of replaying the Fiat-Shamir schedule over the
/// commitments and evaluations, checking the six openings and checking the
/// quotient identity at the evaluation challenge; nothing about the
/// witness is needed.
#[derive(CanonicalDeserialize, CanonicalSerialize, derivative::Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    Eq(bound = ""),
    PartialEq(bound = "")
)]
pub struct Proof<F, PC>
where
    F: PrimeField,
    PC: CommitmentScheme<F>,
{
    /// Commitment to the left wire polynomial.
    pub(crate) f_l_comm: PC::Commitment,

    /// Commitment to the right wire polynomial.
    pub(crate) f_r_comm: PC::Commitment,

    /// Commitment to the output wire polynomial.
    pub(crate) f_o_comm: PC::Commitment,

    /// Commitment to the grand product polynomial.
    pub(crate) z_comm: PC::Commitment,

    /// Commitment to the shifted grand product polynomial.
    pub(crate) z_shift_comm: PC::Commitment,

    /// Commitment to the quotient polynomial.
    pub(crate) t_comm: PC::Commitment,

    /// Evaluations of the six polynomials at the evaluation challenge.
    pub(crate) evaluations: ProofEvaluations<F>,

    /// Opening proof for the left wire polynomial.
    pub(crate) f_l_opening: PC::Opening,

    /// Opening proof for the right wire polynomial.
    pub(crate) f_r_opening: PC::Opening,

    /// Opening proof for the output wire polynomial.
    pub(crate) f_o_opening: PC::Opening,

    /// Opening proof for the grand product polynomial.
    pub(crate) z_opening: PC::Opening,

    /// Opening proof for the shifted grand product polynomial.
    pub(crate) z_shift_opening: PC::Opening,

    /// Opening proof for the quotient polynomial.
    pub(crate) t_opening: PC::Opening,
}

impl<F, PC> Proof<F, PC>
where
    F: PrimeField,
    PC: CommitmentScheme<F>,
{
    /// The evaluations carried by the proof.
    pub fn evaluations(&self) -> &ProofEvaluations<F> {
        &self.evaluations
    }
}
