// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! The send-all-coefficients reference scheme.
//!
//! The "commitment" is the coefficient vector itself, so nothing is hidden
//! and nothing is succinct; the verifier simply re-evaluates. The scheme
//! exists as the reference point the real schemes are checked against.

use crate::commitment_scheme::CommitmentScheme;
use crate::error::Error;
use crate::polynomial::Polynomial;
use crate::transcript::ToBytes;
use crate::util;
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use core::marker::PhantomData;

/// The trivial scheme; carries no parameters.
#[derive(derivative::Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), Default(bound = ""))]
pub struct TrivialScheme<F>
where
    F: PrimeField,
{
    __: PhantomData<F>,
}

impl<F> TrivialScheme<F>
where
    F: PrimeField,
{
    /// Builds the trivial scheme.
    pub fn new() -> Self {
        Self { __: PhantomData }
    }
}

/// A trivial commitment: the committed polynomial's coefficients.
#[derive(CanonicalDeserialize, CanonicalSerialize, derivative::Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    Eq(bound = ""),
    PartialEq(bound = "")
)]
pub struct TrivialCommitment<F>
where
    F: PrimeField,
{
    coeffs: Vec<F>,
}

impl<F> TrivialCommitment<F>
where
    F: PrimeField,
{
    /// The committed coefficients.
    pub fn coefficients(&self) -> &[F] {
        &self.coeffs
    }
}

impl<F> ToBytes for TrivialCommitment<F>
where
    F: PrimeField,
{
    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        for coeff in &self.coeffs {
            bytes.extend(util::field_to_bytes(coeff));
        }
        bytes
    }
}

/// A trivial opening proof; carries no information.
#[derive(CanonicalDeserialize, CanonicalSerialize, derivative::Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    Eq(bound = ""),
    PartialEq(bound = "")
)]
pub struct TrivialOpening<F>
where
    F: PrimeField,
{
    __: PhantomData<F>,
}

impl<F> TrivialOpening<F>
where
    F: PrimeField,
{
    fn new() -> Self {
        Self { __: PhantomData }
    }
}

impl<F> CommitmentScheme<F> for TrivialScheme<F>
where
    F: PrimeField,
{
    type Commitment = TrivialCommitment<F>;
    type Opening = TrivialOpening<F>;
    type BatchOpening = TrivialOpening<F>;

    fn commit(
        &self,
        polynomial: &Polynomial<F>,
    ) -> Result<Self::Commitment, Error> {
        Ok(TrivialCommitment {
            coeffs: polynomial.coeffs().to_vec(),
        })
    }

    fn open(
        &self,
        _polynomial: &Polynomial<F>,
        _commitment: &Self::Commitment,
        _point: &F,
        _value: &F,
        _opening_challenge: &F,
    ) -> Result<Self::Opening, Error> {
        Ok(TrivialOpening::new())
    }

    fn verify_opening(
        &self,
        _opening: &Self::Opening,
        commitment: &Self::Commitment,
        point: &F,
        value: &F,
        _opening_challenge: &F,
    ) -> bool {
        let polynomial =
            Polynomial::from_coefficients_vec(commitment.coeffs.clone());
        polynomial.evaluate(point) == *value
    }

    fn batch_open_at_point(
        &self,
        polynomials: &[Polynomial<F>],
        commitments: &[Self::Commitment],
        _point: &F,
        values: &[F],
        _opening_challenge: &F,
    ) -> Result<Self::BatchOpening, Error> {
        if commitments.len() != polynomials.len() {
            return Err(Error::MismatchedBatchSize {
                expected: polynomials.len(),
                actual: commitments.len(),
            });
        }
        if values.len() != polynomials.len() {
            return Err(Error::MismatchedBatchSize {
                expected: polynomials.len(),
                actual: values.len(),
            });
        }
        Ok(TrivialOpening::new())
    }

    fn verify_batch_at_point(
        &self,
        opening: &Self::BatchOpening,
        commitments: &[Self::Commitment],
        point: &F,
        values: &[F],
        opening_challenge: &F,
    ) -> Result<bool, Error> {
        if values.len() != commitments.len() {
            return Err(Error::MismatchedBatchSize {
                expected: commitments.len(),
                actual: values.len(),
            });
        }

        Ok(commitments.iter().zip(values.iter()).all(
            |(commitment, value)| {
                self.verify_opening(
                    opening,
                    commitment,
                    point,
                    value,
                    opening_challenge,
                )
            },
        ))
    }
}
