// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! The KZG polynomial commitment scheme over a pairing-friendly curve.
//!
//! A structured reference string holds G1 powers of a secret scalar `s`
//! together with `[1]` and `[s]` in G2. A commitment is the committed
//! polynomial evaluated at `s` in the exponent, an opening at `z` is the
//! quotient `(f - f(z)) / (X - z)` evaluated the same way, and the
//! verifier relates the two with a single pairing equation.

use crate::commitment_scheme::CommitmentScheme;
use crate::error::Error;
use crate::polynomial::Polynomial;
use crate::transcript::ToBytes;
use crate::util;
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup, Group, VariableBaseMSM};
use ark_ff::{One, UniformRand, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand_core::RngCore;
use tracing::debug;

/// A KZG structured reference string.
///
/// Produced by [`KzgSrs::setup`] from a secret scalar that must be
/// discarded afterwards. The reference setup draws it from a
/// caller-supplied rng, which the tests seed deterministically; that is
/// not a trusted setup and must be replaced for any real deployment.
#[derive(CanonicalDeserialize, CanonicalSerialize, derivative::Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct KzgSrs<E>
where
    E: Pairing,
{
    /// `[s^0], [s^1], ..., [s^(d-1)]` in G1.
    pub powers_of_g: Vec<E::G1Affine>,

    /// `[1]` in G2.
    pub h: E::G2Affine,

    /// `[s]` in G2.
    pub beta_h: E::G2Affine,
}

impl<E> KzgSrs<E>
where
    E: Pairing,
{
    /// Runs the (insecure) trusted setup for polynomials of up to `size`
    /// coefficients.
    pub fn setup<R>(size: usize, rng: &mut R) -> Result<Self, Error>
    where
        R: RngCore,
    {
        if size == 0 {
            return Err(Error::DegreeIsZero);
        }

        let mut secret = E::ScalarField::rand(rng);
        while secret.is_zero() {
            secret = E::ScalarField::rand(rng);
        }

        let mut powers = Vec::with_capacity(size);
        let mut current = E::G1::generator();
        for _ in 0..size {
            powers.push(current);
            current *= secret;
        }

        let h = E::G2::generator();
        let beta_h = (h * secret).into_affine();

        debug!(size, "generated KZG reference string");
        Ok(Self {
            powers_of_g: E::G1::normalize_batch(&powers),
            h: h.into_affine(),
            beta_h,
        })
    }

    /// The number of coefficients the reference string supports.
    pub fn max_coefficients(&self) -> usize {
        self.powers_of_g.len()
    }
}

/// A KZG commitment: a single G1 point.
#[derive(CanonicalDeserialize, CanonicalSerialize, derivative::Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    Eq(bound = ""),
    PartialEq(bound = "")
)]
pub struct KzgCommitment<E>(
    /// The commitment point.
    pub E::G1Affine,
)
where
    E: Pairing;

impl<E> ToBytes for KzgCommitment<E>
where
    E: Pairing,
    <E::G1Affine as AffineRepr>::BaseField: ark_ff::PrimeField,
{
    fn to_bytes(&self) -> Vec<u8> {
        util::point_to_bytes(&self.0)
    }
}

/// A KZG opening proof: the committed quotient, a single G1 point.
#[derive(CanonicalDeserialize, CanonicalSerialize, derivative::Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    Eq(bound = ""),
    PartialEq(bound = "")
)]
pub struct KzgOpening<E>(
    /// The committed witness quotient.
    pub E::G1Affine,
)
where
    E: Pairing;

/// The KZG commitment scheme instantiated with a reference string.
#[derive(derivative::Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct Kzg<E>
where
    E: Pairing,
{
    srs: KzgSrs<E>,
}

impl<E> Kzg<E>
where
    E: Pairing,
{
    /// Builds the scheme from an existing reference string.
    pub fn new(srs: KzgSrs<E>) -> Self {
        Self { srs }
    }

    /// Runs [`KzgSrs::setup`] and builds the scheme from the result.
    pub fn setup<R>(size: usize, rng: &mut R) -> Result<Self, Error>
    where
        R: RngCore,
    {
        Ok(Self::new(KzgSrs::setup(size, rng)?))
    }

    /// The underlying reference string.
    pub fn srs(&self) -> &KzgSrs<E> {
        &self.srs
    }

    /// Evaluates `coeffs` at the secret scalar in the exponent.
    fn commit_coefficients(
        &self,
        coeffs: &[E::ScalarField],
    ) -> Result<E::G1, Error> {
        if coeffs.len() > self.srs.powers_of_g.len() {
            return Err(Error::PolynomialDegreeTooLarge);
        }
        E::G1::msm(&self.srs.powers_of_g[..coeffs.len()], coeffs).map_err(
            |bases| Error::MismatchedBatchSize {
                expected: coeffs.len(),
                actual: bases,
            },
        )
    }

    /// The witness quotient `(f - value) / (X - point)`; fails when `value`
    /// is not `f(point)`.
    fn witness_quotient(
        &self,
        polynomial: &Polynomial<E::ScalarField>,
        point: &E::ScalarField,
        value: &E::ScalarField,
    ) -> Result<Polynomial<E::ScalarField>, Error> {
        let divisor = Polynomial::from_coefficients_vec(vec![
            -*point,
            E::ScalarField::one(),
        ]);
        let (quotient, remainder) =
            polynomial.sub_scalar(value).divide(&divisor)?;
        if !remainder.is_zero() {
            return Err(Error::InvalidOpeningValue);
        }
        Ok(quotient)
    }

    /// Checks `e(opening, [s] - z*[1]) == e(commitment - value*[1], [1])`.
    fn pairing_check(
        &self,
        opening: &E::G1Affine,
        commitment: E::G1,
        point: &E::ScalarField,
        value: &E::ScalarField,
    ) -> bool {
        let shifted_h =
            self.srs.beta_h.into_group() - self.srs.h.into_group() * *point;
        let shifted_commitment =
            commitment - self.srs.powers_of_g[0].into_group() * *value;

        E::pairing(*opening, shifted_h)
            == E::pairing(shifted_commitment, self.srs.h)
    }
}

impl<E> CommitmentScheme<E::ScalarField> for Kzg<E>
where
    E: Pairing,
    <E::G1Affine as AffineRepr>::BaseField: ark_ff::PrimeField,
{
    type Commitment = KzgCommitment<E>;
    type Opening = KzgOpening<E>;
    type BatchOpening = KzgOpening<E>;

    fn commit(
        &self,
        polynomial: &Polynomial<E::ScalarField>,
    ) -> Result<Self::Commitment, Error> {
        let commitment = self.commit_coefficients(polynomial.coeffs())?;
        Ok(KzgCommitment(commitment.into_affine()))
    }

    fn open(
        &self,
        polynomial: &Polynomial<E::ScalarField>,
        _commitment: &Self::Commitment,
        point: &E::ScalarField,
        value: &E::ScalarField,
        _opening_challenge: &E::ScalarField,
    ) -> Result<Self::Opening, Error> {
        let quotient = self.witness_quotient(polynomial, point, value)?;
        let opening = self.commit_coefficients(quotient.coeffs())?;
        Ok(KzgOpening(opening.into_affine()))
    }

    fn verify_opening(
        &self,
        opening: &Self::Opening,
        commitment: &Self::Commitment,
        point: &E::ScalarField,
        value: &E::ScalarField,
        _opening_challenge: &E::ScalarField,
    ) -> bool {
        self.pairing_check(&opening.0, commitment.0.into_group(), point, value)
    }

    fn batch_open_at_point(
        &self,
        polynomials: &[Polynomial<E::ScalarField>],
        commitments: &[Self::Commitment],
        point: &E::ScalarField,
        values: &[E::ScalarField],
        opening_challenge: &E::ScalarField,
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

        // Fold the witness quotients with powers of the challenge; a single
        // pairing check then covers the whole batch.
        let mut aggregate = Polynomial::zero();
        let mut scalar = E::ScalarField::one();
        for (polynomial, value) in polynomials.iter().zip(values.iter()) {
            let quotient = self.witness_quotient(polynomial, point, value)?;
            aggregate = &aggregate + &quotient.mul_scalar(&scalar);
            scalar *= opening_challenge;
        }

        let opening = self.commit_coefficients(aggregate.coeffs())?;
        Ok(KzgOpening(opening.into_affine()))
    }

    fn verify_batch_at_point(
        &self,
        opening: &Self::BatchOpening,
        commitments: &[Self::Commitment],
        point: &E::ScalarField,
        values: &[E::ScalarField],
        opening_challenge: &E::ScalarField,
    ) -> Result<bool, Error> {
        if values.len() != commitments.len() {
            return Err(Error::MismatchedBatchSize {
                expected: commitments.len(),
                actual: values.len(),
            });
        }

        let mut commitment_sum = E::G1::zero();
        let mut value_sum = E::ScalarField::zero();
        let mut scalar = E::ScalarField::one();
        for (commitment, value) in commitments.iter().zip(values.iter()) {
            commitment_sum += commitment.0.into_group() * scalar;
            value_sum += *value * scalar;
            scalar *= opening_challenge;
        }

        Ok(self.pairing_check(&opening.0, commitment_sum, point, &value_sum))
    }
}
