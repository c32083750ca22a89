// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! Permutations over Lagrange-bases for Oecumenical Noninteractive
//! arguments of Knowledge (PLONK) over pluggable polynomial commitment
//! schemes.
//!
//! A prover, holding a witness for an arithmetic circuit, produces a
//! succinct non-interactive proof that the witness satisfies the circuit;
//! a verifier checks the proof against the circuit's preprocessed form and
//! the public inputs alone. The commitment layer is a trait with three
//! implementations sharing one protocol: a send-all-coefficients
//! reference scheme, pairing-based KZG and an inner-product argument
//! (Bulletproofs). All code is generic over the scalar field of a
//! pairing-friendly curve; BN254 and BLS12-381 are the supported
//! parameterizations.
//!
//! This is a reference implementation. Setup randomness is deterministic
//! on purpose, the prover's polynomials are not blinded, and all
//! polynomial arithmetic is schoolbook; none of it is fit for production
//! use.
//!
//! ```
//! use plonk_pcs::prelude::*;
//! use ark_bn254::Fr;
//!
//! # fn main() -> Result<(), Error> {
//! // x + y + x * y = out, with x and y public.
//! let one = Fr::from(1u64);
//! let zero = Fr::from(0u64);
//! let constraints = PlonkConstraints {
//!     l: 2,
//!     m: 9,
//!     n: 4,
//!     a: vec![1, 3, 5, 8],
//!     b: vec![2, 4, 6, 7],
//!     c: vec![5, 7, 8, 9],
//!     q_l: vec![one, one, one, zero],
//!     q_r: vec![zero, zero, one, zero],
//!     q_o: vec![zero, zero, -one, -one],
//!     q_m: vec![zero, zero, zero, one],
//!     q_c: vec![zero, zero, zero, zero],
//! };
//! let subgroup = roots_of_unity::<Fr>(4)?;
//! let preprocessed =
//!     PreprocessedCircuit::preprocess(&constraints, &subgroup)?;
//!
//! let witness: Vec<Fr> = [10u64, 0, 20, 0, 10, 5, 20, 15, 300]
//!     .iter()
//!     .map(|v| Fr::from(*v))
//!     .collect();
//! let public_inputs = vec![Fr::from(10u64), Fr::from(20u64)];
//!
//! let prover = Prover::new(
//!     TrivialScheme::new(),
//!     constraints,
//!     preprocessed.clone(),
//!     subgroup.clone(),
//! )?;
//! let verifier =
//!     Verifier::new(TrivialScheme::new(), preprocessed, subgroup);
//!
//! let proof = prover.prove(&witness, &public_inputs)?;
//! assert!(verifier.verify(&proof, &public_inputs)?);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod commitment_scheme;
pub mod constraint_system;
pub mod error;
pub mod permutation;
pub mod polynomial;
pub mod proof_system;
pub mod transcript;
pub mod util;

/// Instantiates a list of field-generic test functions for a concrete
/// scalar field, suffixing each test name with the suite name.
#[doc(hidden)]
#[macro_export]
macro_rules! batch_field_test {
    ( [ $( $test:ident ),* $(,)? ] => ( $suite:ident, $field:ty ) ) => {
        paste::paste! {
            $(
                #[test]
                fn [< $test _ $suite >]() {
                    $test::<$field>()
                }
            )*
        }
    };
}

/// Re-export of the types needed to build and verify proofs.
pub mod prelude {
    pub use crate::commitment_scheme::{
        CommitmentScheme, Ipa, IpaCommitment, IpaCrs, IpaOpening, Kzg,
        KzgCommitment, KzgOpening, KzgSrs, TrivialCommitment, TrivialOpening,
        TrivialScheme,
    };
    pub use crate::constraint_system::PlonkConstraints;
    pub use crate::error::Error;
    pub use crate::permutation::Permutation;
    pub use crate::polynomial::Polynomial;
    pub use crate::proof_system::{
        PreprocessedCircuit, Proof, ProofEvaluations, Prover, Verifier,
    };
    pub use crate::transcript::{ToBytes, Transcript};
    pub use crate::util::roots_of_unity;
}
