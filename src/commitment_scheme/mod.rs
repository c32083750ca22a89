// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! Polynomial commitment schemes.
//!
//! A scheme produces a short commitment to a polynomial and later proves
//! the polynomial's value at verifier-chosen points. Three schemes share
//! the interface: a send-all-coefficients reference scheme, a pairing-based
//! KZG scheme and an inner-product-argument (Bulletproofs) scheme. The
//! commitment, opening and batched-opening types are associated types of
//! the scheme, so a proof produced under one scheme cannot be handed to the
//! verifier of another.

pub mod ipa;
pub mod kzg;
pub mod trivial;

pub use ipa::{Ipa, IpaCommitment, IpaCrs, IpaOpening};
pub use kzg::{Kzg, KzgCommitment, KzgOpening, KzgSrs};
pub use trivial::{TrivialCommitment, TrivialOpening, TrivialScheme};

use crate::error::Error;
use crate::polynomial::Polynomial;
use crate::transcript::ToBytes;
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use core::fmt::Debug;

/// A polynomial commitment scheme over the scalar field `F`.
///
/// `open` and `verify_opening` take the claimed evaluation explicitly; a
/// scheme is sound when no opening for a value other than the true
/// evaluation passes verification. The `opening_challenge` parameter
/// carries the batching challenge where several polynomials are opened at
/// a shared point; single openings are free to ignore it.
pub trait CommitmentScheme<F>
where
    F: PrimeField,
{
    /// Commitment to a polynomial.
    type Commitment: Clone
        + Debug
        + PartialEq
        + Eq
        + ToBytes
        + CanonicalSerialize
        + CanonicalDeserialize;

    /// Proof that a committed polynomial takes a claimed value at a point.
    type Opening: Clone
        + Debug
        + PartialEq
        + Eq
        + CanonicalSerialize
        + CanonicalDeserialize;

    /// Proof for a batch of polynomials opened at a shared point.
    type BatchOpening: Clone
        + Debug
        + PartialEq
        + Eq
        + CanonicalSerialize
        + CanonicalDeserialize;

    /// Commits to `polynomial`.
    fn commit(
        &self,
        polynomial: &Polynomial<F>,
    ) -> Result<Self::Commitment, Error>;

    /// Produces an opening proof that `polynomial`, committed to as
    /// `commitment`, evaluates to `value` at `point`.
    fn open(
        &self,
        polynomial: &Polynomial<F>,
        commitment: &Self::Commitment,
        point: &F,
        value: &F,
        opening_challenge: &F,
    ) -> Result<Self::Opening, Error>;

    /// Verifies an opening proof. Rejection is `false`, not an error.
    fn verify_opening(
        &self,
        opening: &Self::Opening,
        commitment: &Self::Commitment,
        point: &F,
        value: &F,
        opening_challenge: &F,
    ) -> bool;

    /// Opens every polynomial in `polynomials` at the shared `point`,
    /// folding the openings with powers of `opening_challenge`.
    fn batch_open_at_point(
        &self,
        polynomials: &[Polynomial<F>],
        commitments: &[Self::Commitment],
        point: &F,
        values: &[F],
        opening_challenge: &F,
    ) -> Result<Self::BatchOpening, Error>;

    /// Verifies a batched opening at a shared point. Mismatched batch
    /// shapes are an error; rejection is `Ok(false)`.
    fn verify_batch_at_point(
        &self,
        opening: &Self::BatchOpening,
        commitments: &[Self::Commitment],
        point: &F,
        values: &[F],
        opening_challenge: &F,
    ) -> Result<bool, Error>;
}
