// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! Fiat-Shamir transcript over a raw keccak-256 byte log.
//!
//! Both prover and verifier append the same elements in the same order and
//! therefore derive the same challenges. Unlike a STROBE-style transcript,
//! challenge extraction is a pure function of the byte log: deriving a
//! challenge never mutates the buffer, and salt bytes are mixed into the
//! hash input only, never into the buffer itself. Several independent
//! challenges can thus be drawn from a single transcript state by varying
//! the salt.

use crate::util;
use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ff::PrimeField;
use core::marker::PhantomData;
use sha3::{Digest, Keccak256};
use tracing::trace;

/// Byte encoding used when absorbing a value into a [`Transcript`].
///
/// Field elements and curve-point coordinates encode as minimal big-endian
/// byte strings; composite values concatenate the encodings of their parts.
pub trait ToBytes {
    /// Returns the transcript encoding of `self`.
    fn to_bytes(&self) -> Vec<u8>;
}

impl<P> ToBytes for Affine<P>
where
    P: SWCurveConfig,
    P::BaseField: PrimeField,
{
    fn to_bytes(&self) -> Vec<u8> {
        util::point_to_bytes(self)
    }
}

/// An append-only byte log with keccak-256 challenge extraction.
#[derive(derivative::Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), Default(bound = ""))]
pub struct Transcript<F>
where
    F: PrimeField,
{
    /// The raw byte log absorbed so far.
    buffer: Vec<u8>,

    /// Type Parameter Marker
    __: PhantomData<F>,
}

impl<F> Transcript<F>
where
    F: PrimeField,
{
    /// Builds a new empty [`Transcript`].
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            __: PhantomData,
        }
    }

    /// Appends the encoding of `entry` to the byte log.
    pub fn append<B>(&mut self, entry: &B)
    where
        B: ToBytes + ?Sized,
    {
        let bytes = entry.to_bytes();
        trace!(len = bytes.len(), "appending entry to transcript");
        self.buffer.extend_from_slice(&bytes);
    }

    /// Appends a scalar to the byte log.
    pub fn append_scalar(&mut self, scalar: &F) {
        let bytes = util::field_to_bytes(scalar);
        trace!(len = bytes.len(), "appending scalar to transcript");
        self.buffer.extend_from_slice(&bytes);
    }

    /// Derives a field challenge as keccak-256 over the byte log, optionally
    /// suffixed with `salt`, reduced modulo the field order.
    ///
    /// The buffer is left untouched: requesting the same challenge twice
    /// yields the same element, and the salt never enters the log.
    pub fn challenge_scalar(&self, salt: Option<&[u8]>) -> F {
        let mut hasher = Keccak256::new();
        hasher.update(&self.buffer);
        if let Some(salt) = salt {
            hasher.update(salt);
        }
        let digest = hasher.finalize();
        trace!(buffer_len = self.buffer.len(), "derived transcript challenge");
        F::from_be_bytes_mod_order(&digest)
    }
}
