// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! A collection of all possible errors encountered in PLONK.

/// Defines all possible errors that can be encountered in PLONK.
#[derive(Debug)]
pub enum Error {
    // Subgroup errors
    /// This error occurs when a multiplicative subgroup of a given order is
    /// requested but the order does not divide the order of the
    /// multiplicative group of the field.
    InvalidSubgroupOrder {
        /// The requested subgroup order
        order: u64,
    },

    // Polynomial errors
    /// This error occurs when an interpolation is requested over a domain and
    /// a value vector of different lengths.
    MismatchedPolyLen,
    /// This error occurs when a Lagrange basis polynomial is requested at an
    /// index outside of the interpolation domain.
    LagrangeIndexOutOfBounds {
        /// The requested basis index
        index: usize,
        /// The size of the interpolation domain
        domain_size: usize,
    },
    /// This error occurs when an interpolation domain contains the same point
    /// twice.
    DuplicatedDomainPoint,
    /// This error occurs when dividing by the zero polynomial or by a zero
    /// scalar.
    DivisionByZero,

    // Commitment scheme errors
    /// This error occurs when the user tries to create a structured reference
    /// string of size zero.
    DegreeIsZero,
    /// This error occurs when the user tries to commit to a polynomial whose
    /// degree is larger than the supported degree for that commitment key.
    PolynomialDegreeTooLarge,
    /// This error occurs when the user tries to create an inner-product
    /// commitment key whose size is not a power of two.
    CrsSizeNotPowerOfTwo {
        /// The requested key size
        size: usize,
    },
    /// This error occurs when an opening is requested for a claimed value
    /// that is not the evaluation of the polynomial at the opening point.
    InvalidOpeningValue,
    /// This error occurs when the batched parameters passed to a commitment
    /// scheme do not all have the same length.
    MismatchedBatchSize {
        /// The expected batch size
        expected: usize,
        /// The actual length of the offending vector
        actual: usize,
    },
    /// This error occurs when a vector of odd length is split into halves
    /// during an inner-product argument round.
    OddVectorSplit,

    // Prover/Verifier errors
    /// This error occurs when a prover is built over a constraint system that
    /// violates the constraint invariants.
    InvalidConstraints,
    /// This error occurs when the field is too small to assign a distinct
    /// element to every wire position of the circuit.
    FieldTooSmall,
    /// This error occurs when the evaluation domain does not have exactly one
    /// point per gate.
    MismatchedSubgroupSize {
        /// The number of gates
        expected: usize,
        /// The size of the provided subgroup
        actual: usize,
    },
    /// This error occurs when the witness does not assign a value to every
    /// wire variable.
    WitnessLenMismatch {
        /// The number of wire variables
        expected: usize,
        /// The length of the provided witness
        actual: usize,
    },
    /// This error occurs when the public input vector does not match the
    /// number of public inputs declared by the constraints.
    PublicInputsLenMismatch {
        /// The declared number of public inputs
        expected: usize,
        /// The length of the provided vector
        actual: usize,
    },
    /// This error occurs when the vanishing polynomial of the evaluation
    /// domain does not divide the combined constraint polynomial. An honest
    /// prover only hits this with a non-satisfying witness.
    NonDivisibleQuotient,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSubgroupOrder { order } => write!(
                f,
                "subgroup order {} does not divide the multiplicative group \
                order",
                order
            ),
            Self::MismatchedPolyLen => {
                write!(f, "domain and value vectors have different lengths")
            }
            Self::LagrangeIndexOutOfBounds { index, domain_size } => write!(
                f,
                "lagrange index {} is out of bounds for a domain of size {}",
                index, domain_size
            ),
            Self::DuplicatedDomainPoint => {
                write!(f, "interpolation domain contains a duplicated point")
            }
            Self::DivisionByZero => {
                write!(f, "division by zero")
            }
            Self::DegreeIsZero => {
                write!(f, "cannot create a reference string of size zero")
            }
            Self::PolynomialDegreeTooLarge => write!(
                f,
                "commitment key is not large enough to commit to said \
                polynomial"
            ),
            Self::CrsSizeNotPowerOfTwo { size } => write!(
                f,
                "inner-product commitment key size {} is not a power of two",
                size
            ),
            Self::InvalidOpeningValue => {
                write!(f, "claimed value is not the evaluation at the point")
            }
            Self::MismatchedBatchSize { expected, actual } => write!(
                f,
                "all batched parameters must have length {}, got {}",
                expected, actual
            ),
            Self::OddVectorSplit => {
                write!(f, "cannot split a vector of odd length")
            }
            Self::InvalidConstraints => {
                write!(f, "constraint system violates its invariants")
            }
            Self::FieldTooSmall => {
                write!(f, "field has fewer elements than wire positions")
            }
            Self::MismatchedSubgroupSize { expected, actual } => write!(
                f,
                "evaluation domain must have {} points, got {}",
                expected, actual
            ),
            Self::WitnessLenMismatch { expected, actual } => write!(
                f,
                "witness must assign {} wire variables, got {}",
                expected, actual
            ),
            Self::PublicInputsLenMismatch { expected, actual } => write!(
                f,
                "expected {} public inputs, got {}",
                expected, actual
            ),
            Self::NonDivisibleQuotient => write!(
                f,
                "vanishing polynomial does not divide the constraint \
                combination"
            ),
        }
    }
}

impl std::error::Error for Error {}
