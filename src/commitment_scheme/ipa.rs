// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! An inner-product-argument (Bulletproofs) polynomial commitment scheme.
//!
//! A polynomial is committed to as a Pedersen vector commitment of its
//! coefficients. Opening at `z` proves `<a, b> = f(z)` for the coefficient
//! vector `a` and the power vector `b = (1, z, z^2, ...)`: each round
//! splits the vectors into contiguous low and high halves, commits to the
//! two cross terms and folds the halves with a transcript challenge,
//! halving the claim size, until a single scalar remains. A Schnorr-style
//! finalization then proves knowledge of that scalar and of the
//! accumulated blinding.
//!
//! The verifier replays the transcript, folds the commitment with the
//! squared challenges and recomputes the collapsed generator from the
//! `s`-vector. With contiguous halves the round-`j` challenge of `k`
//! rounds is keyed by bit `k - 1 - j` of the generator index: the earliest
//! round corresponds to the most significant bit. The round-trip tests
//! below pin this convention for every vector length up to sixteen.

use crate::commitment_scheme::CommitmentScheme;
use crate::error::Error;
use crate::polynomial::Polynomial;
use crate::transcript::{ToBytes, Transcript};
use crate::util;
use ark_ec::short_weierstrass::{Affine, Projective, SWCurveConfig};
use ark_ec::{AffineRepr, CurveGroup, Group, VariableBaseMSM};
use ark_ff::{Field, One, PrimeField, UniformRand, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use rand_core::RngCore;
use tracing::debug;

/// The fixed blinding scalar reused across commitments and openings.
///
/// Reproducibility is the point here; hiding is an explicit non-goal of
/// this reference scheme and a deployment must blind with fresh
/// randomness.
const BLINDING_SCALAR: u64 = 1234;

/// A Bulletproofs commitment key: a vector of generators for the
/// coefficients and one blinding generator.
#[derive(CanonicalDeserialize, CanonicalSerialize, derivative::Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct IpaCrs<P>
where
    P: SWCurveConfig,
{
    /// Coefficient generators; the length is a power of two.
    pub g_vec: Vec<Affine<P>>,

    /// The blinding generator.
    pub h: Affine<P>,
}

impl<P> IpaCrs<P>
where
    P: SWCurveConfig,
{
    /// Samples a commitment key of `size` generators from `rng`.
    ///
    /// `size` bounds the number of polynomial coefficients and must be a
    /// power of two. The reference setup seeds the rng deterministically,
    /// so the generators have known discrete logarithms; that is fine for
    /// a reproducible reference and unusable for anything else.
    pub fn setup<R>(size: usize, rng: &mut R) -> Result<Self, Error>
    where
        R: RngCore,
    {
        if size == 0 || !size.is_power_of_two() {
            return Err(Error::CrsSizeNotPowerOfTwo { size });
        }

        let generator = Projective::<P>::generator();
        let mut points = Vec::with_capacity(size + 1);
        for _ in 0..=size {
            let mut scalar = P::ScalarField::rand(rng);
            while scalar.is_zero() {
                scalar = P::ScalarField::rand(rng);
            }
            points.push(generator * scalar);
        }

        let affine = Projective::<P>::normalize_batch(&points);
        debug!(size, "generated inner-product commitment key");
        Ok(Self {
            h: affine[size],
            g_vec: affine[..size].to_vec(),
        })
    }

    /// The number of coefficient generators.
    pub fn size(&self) -> usize {
        self.g_vec.len()
    }
}

/// A Bulletproofs commitment: a single group point.
#[derive(CanonicalDeserialize, CanonicalSerialize, derivative::Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    Eq(bound = ""),
    PartialEq(bound = "")
)]
pub struct IpaCommitment<P>(
    /// The commitment point.
    pub Affine<P>,
)
where
    P: SWCurveConfig;

impl<P> ToBytes for IpaCommitment<P>
where
    P: SWCurveConfig,
    P::BaseField: PrimeField,
{
    fn to_bytes(&self) -> Vec<u8> {
        util::point_to_bytes(&self.0)
    }
}

/// A Bulletproofs opening proof: the per-round cross terms plus the
/// Schnorr finalization.
#[derive(CanonicalDeserialize, CanonicalSerialize, derivative::Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    Eq(bound = ""),
    PartialEq(bound = "")
)]
pub struct IpaOpening<P>
where
    P: SWCurveConfig,
{
    /// Low-half cross terms, one per folding round.
    pub(crate) l_terms: Vec<Affine<P>>,

    /// High-half cross terms, one per folding round.
    pub(crate) r_terms: Vec<Affine<P>>,

    /// The Schnorr nonce commitment.
    pub(crate) schnorr_r: Affine<P>,

    /// Schnorr response for the collapsed coefficient.
    pub(crate) z_1: P::ScalarField,

    /// Schnorr response for the accumulated blinding.
    pub(crate) z_2: P::ScalarField,
}

/// The Bulletproofs commitment scheme instantiated with a commitment key.
#[derive(derivative::Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct Ipa<P>
where
    P: SWCurveConfig,
{
    crs: IpaCrs<P>,
    blinding: P::ScalarField,
}

impl<P> Ipa<P>
where
    P: SWCurveConfig,
{
    /// Builds the scheme from an existing commitment key.
    pub fn new(crs: IpaCrs<P>) -> Self {
        Self {
            crs,
            blinding: P::ScalarField::from(BLINDING_SCALAR),
        }
    }

    /// Runs [`IpaCrs::setup`] and builds the scheme from the result.
    pub fn setup<R>(size: usize, rng: &mut R) -> Result<Self, Error>
    where
        R: RngCore,
    {
        Ok(Self::new(IpaCrs::setup(size, rng)?))
    }

    /// The underlying commitment key.
    pub fn crs(&self) -> &IpaCrs<P> {
        &self.crs
    }

    /// The coefficients zero-padded to the next power of two, which is the
    /// vector length the argument recurses over.
    fn padded_coefficients(
        &self,
        polynomial: &Polynomial<P::ScalarField>,
    ) -> Result<Vec<P::ScalarField>, Error> {
        let mut coeffs = polynomial.coeffs().to_vec();
        let padded_len = coeffs.len().next_power_of_two();
        if padded_len > self.crs.g_vec.len() {
            return Err(Error::PolynomialDegreeTooLarge);
        }
        coeffs.resize(padded_len, P::ScalarField::zero());
        Ok(coeffs)
    }
}

/// Splits a vector into contiguous low and high halves.
fn split_in_half<T>(vector: &[T]) -> Result<(&[T], &[T]), Error> {
    if vector.len() % 2 != 0 {
        return Err(Error::OddVectorSplit);
    }
    Ok(vector.split_at(vector.len() / 2))
}

/// Returns `first_factor * first + second_factor * second`, element-wise.
fn fold_scalars<F: PrimeField>(
    first: &[F],
    first_factor: &F,
    second: &[F],
    second_factor: &F,
) -> Vec<F> {
    first
        .iter()
        .zip(second.iter())
        .map(|(a, b)| *a * first_factor + *b * second_factor)
        .collect()
}

/// Returns `first_factor * first + second_factor * second`, element-wise.
fn fold_points<P: SWCurveConfig>(
    first: &[Projective<P>],
    first_factor: &P::ScalarField,
    second: &[Projective<P>],
    second_factor: &P::ScalarField,
) -> Vec<Projective<P>> {
    first
        .iter()
        .zip(second.iter())
        .map(|(a, b)| *a * *first_factor + *b * *second_factor)
        .collect()
}

/// Naive multi-scalar multiplication over projective bases.
fn msm_projective<P: SWCurveConfig>(
    scalars: &[P::ScalarField],
    bases: &[Projective<P>],
) -> Result<Projective<P>, Error> {
    if scalars.len() != bases.len() {
        return Err(Error::MismatchedBatchSize {
            expected: scalars.len(),
            actual: bases.len(),
        });
    }
    Ok(scalars
        .iter()
        .zip(bases.iter())
        .fold(Projective::<P>::zero(), |acc, (scalar, base)| {
            acc + *base * *scalar
        }))
}

impl<P> CommitmentScheme<P::ScalarField> for Ipa<P>
where
    P: SWCurveConfig,
    P::BaseField: PrimeField,
{
    type Commitment = IpaCommitment<P>;
    type Opening = IpaOpening<P>;
    type BatchOpening = Vec<IpaOpening<P>>;

    fn commit(
        &self,
        polynomial: &Polynomial<P::ScalarField>,
    ) -> Result<Self::Commitment, Error> {
        let coeffs = self.padded_coefficients(polynomial)?;
        let commitment =
            Projective::<P>::msm(&self.crs.g_vec[..coeffs.len()], &coeffs)
                .map_err(|bases| Error::MismatchedBatchSize {
                    expected: coeffs.len(),
                    actual: bases,
                })?
                + self.crs.h * self.blinding;
        Ok(IpaCommitment(commitment.into_affine()))
    }

    fn open(
        &self,
        polynomial: &Polynomial<P::ScalarField>,
        commitment: &Self::Commitment,
        point: &P::ScalarField,
        value: &P::ScalarField,
        _opening_challenge: &P::ScalarField,
    ) -> Result<Self::Opening, Error> {
        let mut a_vec = self.padded_coefficients(polynomial)?;
        let rounds = a_vec.len().trailing_zeros() as usize;

        // The argument runs over its own transcript, seeded with the
        // claim: commitment, point and claimed value.
        let mut transcript = Transcript::<P::ScalarField>::new();
        transcript.append(commitment);
        transcript.append_scalar(point);
        transcript.append_scalar(value);

        let u_seed = transcript.challenge_scalar(None);
        let u_point = Projective::<P>::generator() * u_seed;
        let h = self.crs.h.into_group();

        let mut g_vec: Vec<Projective<P>> = self.crs.g_vec[..a_vec.len()]
            .iter()
            .map(|point| point.into_group())
            .collect();
        let mut b_vec = util::powers_of(point, a_vec.len());
        let mut blinding_acc = self.blinding;

        let mut l_terms = Vec::with_capacity(rounds);
        let mut r_terms = Vec::with_capacity(rounds);

        for _ in 0..rounds {
            let (a_lo, a_hi) = split_in_half(&a_vec)?;
            let (b_lo, b_hi) = split_in_half(&b_vec)?;
            let (g_lo, g_hi) = split_in_half(&g_vec)?;

            // Blinding for the two cross terms; salted extraction leaves
            // the byte log untouched, so the verifier never needs them.
            let l_blind = transcript.challenge_scalar(Some(&[0x00]));
            let r_blind = transcript.challenge_scalar(Some(&[0x01]));

            let l_term = msm_projective(a_lo, g_hi)?
                + h * l_blind
                + u_point * util::inner_product(a_lo, b_hi)?;
            let r_term = msm_projective(a_hi, g_lo)?
                + h * r_blind
                + u_point * util::inner_product(a_hi, b_lo)?;

            let l_affine = l_term.into_affine();
            let r_affine = r_term.into_affine();
            transcript.append(&l_affine);
            transcript.append(&r_affine);

            let u = transcript.challenge_scalar(None);
            let u_inv = u.inverse().ok_or(Error::DivisionByZero)?;

            let folded_a = fold_scalars(a_hi, &u_inv, a_lo, &u);
            let folded_b = fold_scalars(b_lo, &u_inv, b_hi, &u);
            let folded_g = fold_points(g_lo, &u_inv, g_hi, &u);
            blinding_acc += l_blind * u.square() + r_blind * u_inv.square();

            a_vec = folded_a;
            b_vec = folded_b;
            g_vec = folded_g;
            l_terms.push(l_affine);
            r_terms.push(r_affine);
        }

        // One coefficient, one power and one generator remain; a Schnorr
        // proof ties them to the folded commitment.
        let a = a_vec[0];
        let b = b_vec[0];
        let g = g_vec[0];

        let r_1 = transcript.challenge_scalar(Some(&[0x00]));
        let r_2 = transcript.challenge_scalar(Some(&[0x01]));
        let schnorr_r = ((g + u_point * b) * r_1 + h * r_2).into_affine();
        transcript.append(&schnorr_r);

        let c = transcript.challenge_scalar(None);
        debug!(rounds, "produced inner-product opening");

        Ok(IpaOpening {
            l_terms,
            r_terms,
            schnorr_r,
            z_1: a * c + r_1,
            z_2: blinding_acc * c + r_2,
        })
    }

    fn verify_opening(
        &self,
        opening: &Self::Opening,
        commitment: &Self::Commitment,
        point: &P::ScalarField,
        value: &P::ScalarField,
        _opening_challenge: &P::ScalarField,
    ) -> bool {
        let rounds = opening.l_terms.len();
        if opening.r_terms.len() != rounds {
            return false;
        }
        let vector_len = match 1usize.checked_shl(rounds as u32) {
            Some(len) if len <= self.crs.g_vec.len() => len,
            _ => return false,
        };

        // Replay the prover's transcript.
        let mut transcript = Transcript::<P::ScalarField>::new();
        transcript.append(commitment);
        transcript.append_scalar(point);
        transcript.append_scalar(value);

        let u_seed = transcript.challenge_scalar(None);
        let u_point = Projective::<P>::generator() * u_seed;

        // Fold the cross terms into the claimed commitment as each round
        // challenge becomes available.
        let mut q = commitment.0.into_group() + u_point * *value;
        let mut challenges = Vec::with_capacity(rounds);
        let mut inverses = Vec::with_capacity(rounds);
        for (l_term, r_term) in
            opening.l_terms.iter().zip(opening.r_terms.iter())
        {
            transcript.append(l_term);
            transcript.append(r_term);

            let u = transcript.challenge_scalar(None);
            let u_inv = match u.inverse() {
                Some(inverse) => inverse,
                None => return false,
            };
            q += l_term.into_group() * u.square()
                + r_term.into_group() * u_inv.square();
            challenges.push(u);
            inverses.push(u_inv);
        }

        transcript.append(&opening.schnorr_r);
        let c = transcript.challenge_scalar(None);

        // s_vec[i] folds generator i the way the prover's contiguous
        // splits did: round j is keyed by bit (rounds - 1 - j) of i.
        let mut s_vec = Vec::with_capacity(vector_len);
        for i in 0..vector_len {
            let mut product = P::ScalarField::one();
            for (j, (u, u_inv)) in
                challenges.iter().zip(inverses.iter()).enumerate()
            {
                if (i >> (rounds - 1 - j)) & 1 == 1 {
                    product *= u;
                } else {
                    product *= u_inv;
                }
            }
            s_vec.push(product);
        }

        let g = match Projective::<P>::msm(
            &self.crs.g_vec[..vector_len],
            &s_vec,
        ) {
            Ok(g) => g,
            Err(_) => return false,
        };
        let b = match util::inner_product(
            &s_vec,
            &util::powers_of(point, vector_len),
        ) {
            Ok(b) => b,
            Err(_) => return false,
        };

        let lhs = q * c + opening.schnorr_r.into_group();
        let rhs = (g + u_point * b) * opening.z_1
            + self.crs.h.into_group() * opening.z_2;
        lhs == rhs
    }

    fn batch_open_at_point(
        &self,
        polynomials: &[Polynomial<P::ScalarField>],
        commitments: &[Self::Commitment],
        point: &P::ScalarField,
        values: &[P::ScalarField],
        opening_challenge: &P::ScalarField,
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

        // One argument per polynomial; the openings stand alone, so the
        // batch is their concatenation.
        polynomials
            .iter()
            .zip(commitments.iter())
            .zip(values.iter())
            .map(|((polynomial, commitment), value)| {
                self.open(
                    polynomial,
                    commitment,
                    point,
                    value,
                    opening_challenge,
                )
            })
            .collect()
    }

    fn verify_batch_at_point(
        &self,
        opening: &Self::BatchOpening,
        commitments: &[Self::Commitment],
        point: &P::ScalarField,
        values: &[P::ScalarField],
        opening_challenge: &P::ScalarField,
    ) -> Result<bool, Error> {
        if values.len() != commitments.len() {
            return Err(Error::MismatchedBatchSize {
                expected: commitments.len(),
                actual: values.len(),
            });
        }
        if opening.len() != commitments.len() {
            return Ok(false);
        }

        Ok(opening
            .iter()
            .zip(commitments.iter())
            .zip(values.iter())
            .all(|((single, commitment), value)| {
                self.verify_opening(
                    single,
                    commitment,
                    point,
                    value,
                    opening_challenge,
                )
            }))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    type BnConfig = ark_bn254::g1::Config;
    type BlsConfig = ark_bls12_381::g1::Config;

    fn test_poly<F: PrimeField>() -> Polynomial<F> {
        Polynomial::from_coefficients_vec(vec![
            F::from(1u64),
            F::from(2u64),
            F::from(3u64),
        ])
    }

    fn test_round_trip<P>()
    where
        P: SWCurveConfig,
        P::BaseField: PrimeField,
    {
        let mut rng = StdRng::seed_from_u64(0);
        let scheme = Ipa::<P>::setup(16, &mut rng).unwrap();
        let polynomial = test_poly::<P::ScalarField>();
        let commitment = scheme.commit(&polynomial).unwrap();

        let point = P::ScalarField::from(4u64);
        let value = P::ScalarField::from(57u64);
        let challenge = P::ScalarField::from(5u64);

        let opening = scheme
            .open(&polynomial, &commitment, &point, &value, &challenge)
            .unwrap();
        assert!(scheme.verify_opening(
            &opening,
            &commitment,
            &point,
            &value,
            &challenge
        ));
    }

    fn test_wrong_value_rejected<P>()
    where
        P: SWCurveConfig,
        P::BaseField: PrimeField,
    {
        let mut rng = StdRng::seed_from_u64(1);
        let scheme = Ipa::<P>::setup(16, &mut rng).unwrap();
        let polynomial = test_poly::<P::ScalarField>();
        let commitment = scheme.commit(&polynomial).unwrap();

        let point = P::ScalarField::from(4u64);
        let challenge = P::ScalarField::from(5u64);

        // The argument happily "opens" to a wrong value; verification is
        // what rejects it.
        let opening = scheme
            .open(
                &polynomial,
                &commitment,
                &point,
                &P::ScalarField::from(59u64),
                &challenge,
            )
            .unwrap();
        assert!(!scheme.verify_opening(
            &opening,
            &commitment,
            &point,
            &P::ScalarField::from(59u64),
            &challenge
        ));
    }

    fn test_wrong_point_rejected<P>()
    where
        P: SWCurveConfig,
        P::BaseField: PrimeField,
    {
        let mut rng = StdRng::seed_from_u64(2);
        let scheme = Ipa::<P>::setup(16, &mut rng).unwrap();
        let polynomial = test_poly::<P::ScalarField>();
        let commitment = scheme.commit(&polynomial).unwrap();

        let point = P::ScalarField::from(4u64);
        let value = P::ScalarField::from(57u64);
        let challenge = P::ScalarField::from(5u64);
        let opening = scheme
            .open(&polynomial, &commitment, &point, &value, &challenge)
            .unwrap();

        assert!(!scheme.verify_opening(
            &opening,
            &commitment,
            &P::ScalarField::from(3u64),
            &value,
            &challenge
        ));
    }

    /// Prover folding and verifier s-vector derivation must agree for
    /// every recursion depth; this pins the contiguous-halves bit order.
    fn test_fold_agreement_for_all_depths<P>()
    where
        P: SWCurveConfig,
        P::BaseField: PrimeField,
    {
        let mut rng = StdRng::seed_from_u64(3);
        let scheme = Ipa::<P>::setup(16, &mut rng).unwrap();

        for len in [2usize, 4, 8, 16] {
            let polynomial = Polynomial::from_coefficients_vec(
                (0..len as u64)
                    .map(|i| P::ScalarField::from(3 * i + 1))
                    .collect(),
            );
            let commitment = scheme.commit(&polynomial).unwrap();

            let point = P::ScalarField::from(7u64);
            let value = polynomial.evaluate(&point);
            let challenge = P::ScalarField::from(5u64);

            let opening = scheme
                .open(&polynomial, &commitment, &point, &value, &challenge)
                .unwrap();
            assert_eq!(opening.l_terms.len(), len.trailing_zeros() as usize);
            assert!(
                scheme.verify_opening(
                    &opening,
                    &commitment,
                    &point,
                    &value,
                    &challenge
                ),
                "prover and verifier disagree at vector length {}",
                len
            );
        }
    }

    fn test_constant_polynomial_round_trip<P>()
    where
        P: SWCurveConfig,
        P::BaseField: PrimeField,
    {
        let mut rng = StdRng::seed_from_u64(4);
        let scheme = Ipa::<P>::setup(8, &mut rng).unwrap();
        let polynomial = Polynomial::from_coefficients_vec(vec![
            P::ScalarField::from(42u64),
        ]);
        let commitment = scheme.commit(&polynomial).unwrap();

        let point = P::ScalarField::from(9u64);
        let value = P::ScalarField::from(42u64);
        let challenge = P::ScalarField::one();

        let opening = scheme
            .open(&polynomial, &commitment, &point, &value, &challenge)
            .unwrap();
        assert!(opening.l_terms.is_empty());
        assert!(scheme.verify_opening(
            &opening,
            &commitment,
            &point,
            &value,
            &challenge
        ));
    }

    fn test_batch_round_trip<P>()
    where
        P: SWCurveConfig,
        P::BaseField: PrimeField,
    {
        let mut rng = StdRng::seed_from_u64(5);
        let scheme = Ipa::<P>::setup(8, &mut rng).unwrap();

        let polynomials = vec![
            test_poly::<P::ScalarField>(),
            Polynomial::from_coefficients_vec(
                (1..=6u64).map(P::ScalarField::from).collect(),
            ),
        ];
        let commitments: Vec<_> = polynomials
            .iter()
            .map(|polynomial| scheme.commit(polynomial).unwrap())
            .collect();

        let point = P::ScalarField::from(11u64);
        let values: Vec<_> = polynomials
            .iter()
            .map(|polynomial| polynomial.evaluate(&point))
            .collect();
        let challenge = P::ScalarField::from(13u64);

        let opening = scheme
            .batch_open_at_point(
                &polynomials,
                &commitments,
                &point,
                &values,
                &challenge,
            )
            .unwrap();
        assert!(scheme
            .verify_batch_at_point(
                &opening,
                &commitments,
                &point,
                &values,
                &challenge
            )
            .unwrap());

        let mut wrong_values = values;
        wrong_values[0] += P::ScalarField::one();
        assert!(!scheme
            .verify_batch_at_point(
                &opening,
                &commitments,
                &point,
                &wrong_values,
                &challenge
            )
            .unwrap());
    }

    fn test_setup_rejects_bad_sizes<P>()
    where
        P: SWCurveConfig,
        P::BaseField: PrimeField,
    {
        let mut rng = StdRng::seed_from_u64(6);
        assert!(matches!(
            Ipa::<P>::setup(0, &mut rng),
            Err(Error::CrsSizeNotPowerOfTwo { .. })
        ));
        assert!(matches!(
            Ipa::<P>::setup(12, &mut rng),
            Err(Error::CrsSizeNotPowerOfTwo { .. })
        ));
    }

    fn test_commit_rejects_oversized_polynomial<P>()
    where
        P: SWCurveConfig,
        P::BaseField: PrimeField,
    {
        let mut rng = StdRng::seed_from_u64(7);
        let scheme = Ipa::<P>::setup(4, &mut rng).unwrap();
        let oversized = Polynomial::from_coefficients_vec(
            (1..=5u64).map(P::ScalarField::from).collect(),
        );
        assert!(matches!(
            scheme.commit(&oversized),
            Err(Error::PolynomialDegreeTooLarge)
        ));
    }

    macro_rules! ipa_tests {
        ( $( $test:ident ),* => ($suite:ident, $config:ty) ) => {
            paste::paste! {
                $(
                    #[test]
                    fn [< $test _ $suite >]() {
                        $test::<$config>()
                    }
                )*
            }
        };
    }

    ipa_tests!(
        test_round_trip,
        test_wrong_value_rejected,
        test_wrong_point_rejected,
        test_fold_agreement_for_all_depths,
        test_constant_polynomial_round_trip,
        test_batch_round_trip,
        test_setup_rejects_bad_sizes,
        test_commit_rejects_oversized_polynomial
        => (bn254, BnConfig)
    );

    ipa_tests!(
        test_round_trip,
        test_wrong_value_rejected,
        test_fold_agreement_for_all_depths,
        test_batch_round_trip
        => (bls12_381, BlsConfig)
    );
}
