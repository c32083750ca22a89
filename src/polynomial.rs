// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! Dense univariate polynomials over a prime field.
//!
//! Coefficients are stored in ascending degree order and kept in canonical
//! form: the leading coefficient of any polynomial of length greater than
//! one is non-zero, and the zero polynomial is the single coefficient `[0]`.
//! The truncation invariant is what makes Euclidean division terminate and
//! degree-based preconditions meaningful, so every constructor and every
//! arithmetic operation restores it.
//!
//! All arithmetic is schoolbook; interpolation is the O(n^2) Lagrange
//! construction. No FFTs are used anywhere in this crate.

use crate::error::Error;
use ark_ff::PrimeField;
use core::ops::{Add, Mul, Neg, Sub};
use itertools::{EitherOrBoth, Itertools};

/// A dense univariate polynomial; index `i` holds the coefficient of `X^i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<F>
where
    F: PrimeField,
{
    coeffs: Vec<F>,
}

impl<F> Polynomial<F>
where
    F: PrimeField,
{
    /// Builds a polynomial from a coefficient vector, truncating leading
    /// zeros. The empty vector becomes the zero polynomial.
    pub fn from_coefficients_vec(mut coeffs: Vec<F>) -> Self {
        while coeffs.len() > 1 && coeffs.last() == Some(&F::zero()) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(F::zero());
        }
        Self { coeffs }
    }

    /// The zero polynomial `[0]`.
    pub fn zero() -> Self {
        Self {
            coeffs: vec![F::zero()],
        }
    }

    /// Returns true iff this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// The degree of the polynomial; the zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// The coefficients in ascending degree order.
    pub fn coeffs(&self) -> &[F] {
        &self.coeffs
    }

    /// Evaluates the polynomial at `point` with Horner's method.
    pub fn evaluate(&self, point: &F) -> F {
        let mut result = F::zero();
        for coeff in self.coeffs.iter().rev() {
            result = result * point + coeff;
        }
        result
    }

    /// Adds `scalar` to the constant coefficient.
    pub fn add_scalar(&self, scalar: &F) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs[0] += scalar;
        Self::from_coefficients_vec(coeffs)
    }

    /// Subtracts `scalar` from the constant coefficient.
    pub fn sub_scalar(&self, scalar: &F) -> Self {
        let mut coeffs = self.coeffs.clone();
        coeffs[0] -= scalar;
        Self::from_coefficients_vec(coeffs)
    }

    /// Multiplies every coefficient by `scalar`.
    pub fn mul_scalar(&self, scalar: &F) -> Self {
        Self::from_coefficients_vec(
            self.coeffs.iter().map(|coeff| *coeff * scalar).collect(),
        )
    }

    /// Euclidean division, returning `(quotient, remainder)` with
    /// `deg(remainder) < deg(divisor)`.
    ///
    /// Division by a constant polynomial divides every coefficient and
    /// leaves remainder zero. Division by the zero polynomial fails with
    /// [`Error::DivisionByZero`]. The canonical-form invariant guarantees
    /// the divisor's leading coefficient is non-zero.
    pub fn divide(&self, divisor: &Self) -> Result<(Self, Self), Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if divisor.degree() == 0 {
            let inverse =
                divisor.coeffs[0].inverse().ok_or(Error::DivisionByZero)?;
            return Ok((self.mul_scalar(&inverse), Self::zero()));
        }

        if self.coeffs.len() < divisor.coeffs.len() {
            return Ok((Self::zero(), self.clone()));
        }

        let divisor_degree = divisor.degree();
        let leading_inverse = divisor.coeffs[divisor_degree]
            .inverse()
            .ok_or(Error::DivisionByZero)?;

        let mut remainder = self.coeffs.clone();
        let mut quotient =
            vec![F::zero(); self.coeffs.len() - divisor.coeffs.len() + 1];

        for i in (0..quotient.len()).rev() {
            let factor = remainder[i + divisor_degree] * leading_inverse;
            if factor.is_zero() {
                continue;
            }
            quotient[i] = factor;
            for (j, divisor_coeff) in divisor.coeffs.iter().enumerate() {
                remainder[i + j] -= factor * divisor_coeff;
            }
        }

        remainder.truncate(divisor_degree);
        Ok((
            Self::from_coefficients_vec(quotient),
            Self::from_coefficients_vec(remainder),
        ))
    }

    /// The `index`-th Lagrange basis polynomial over `domain`: one at
    /// `domain[index]`, zero at every other domain point.
    pub fn lagrange_basis(domain: &[F], index: usize) -> Result<Self, Error> {
        if index >= domain.len() {
            return Err(Error::LagrangeIndexOutOfBounds {
                index,
                domain_size: domain.len(),
            });
        }

        let mut numerator = Self::from_coefficients_vec(vec![F::one()]);
        let mut denominator = F::one();
        for (i, point) in domain.iter().enumerate() {
            if i == index {
                continue;
            }
            numerator = &numerator
                * &Self::from_coefficients_vec(vec![-*point, F::one()]);
            denominator *= domain[index] - point;
        }

        // A zero denominator means two domain points coincide.
        if denominator.is_zero() {
            return Err(Error::DuplicatedDomainPoint);
        }

        let (quotient, remainder) =
            numerator.divide(&Self::from_coefficients_vec(vec![denominator]))?;
        if !remainder.is_zero() {
            return Err(Error::DuplicatedDomainPoint);
        }

        Ok(quotient)
    }

    /// Interpolates the unique polynomial of degree below `domain.len()`
    /// taking `values[i]` at `domain[i]`.
    pub fn interpolate(domain: &[F], values: &[F]) -> Result<Self, Error> {
        if domain.len() != values.len() {
            return Err(Error::MismatchedPolyLen);
        }

        let mut result = Self::zero();
        for (index, value) in values.iter().enumerate() {
            let basis = Self::lagrange_basis(domain, index)?;
            result = &result + &basis.mul_scalar(value);
        }
        Ok(result)
    }

    /// The vanishing polynomial of `domain`: the product of `(X - point)`
    /// over every domain point.
    pub fn vanishing(domain: &[F]) -> Self {
        let mut result = Self::from_coefficients_vec(vec![F::one()]);
        for point in domain {
            result =
                &result * &Self::from_coefficients_vec(vec![-*point, F::one()]);
        }
        result
    }
}

impl<'a, 'b, F> Add<&'b Polynomial<F>> for &'a Polynomial<F>
where
    F: PrimeField,
{
    type Output = Polynomial<F>;

    fn add(self, other: &'b Polynomial<F>) -> Polynomial<F> {
        let coeffs = self
            .coeffs
            .iter()
            .zip_longest(other.coeffs.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => *a + b,
                EitherOrBoth::Left(a) => *a,
                EitherOrBoth::Right(b) => *b,
            })
            .collect();
        Polynomial::from_coefficients_vec(coeffs)
    }
}

impl<'a, 'b, F> Sub<&'b Polynomial<F>> for &'a Polynomial<F>
where
    F: PrimeField,
{
    type Output = Polynomial<F>;

    fn sub(self, other: &'b Polynomial<F>) -> Polynomial<F> {
        let coeffs = self
            .coeffs
            .iter()
            .zip_longest(other.coeffs.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => *a - b,
                EitherOrBoth::Left(a) => *a,
                EitherOrBoth::Right(b) => -*b,
            })
            .collect();
        Polynomial::from_coefficients_vec(coeffs)
    }
}

impl<'a, 'b, F> Mul<&'b Polynomial<F>> for &'a Polynomial<F>
where
    F: PrimeField,
{
    type Output = Polynomial<F>;

    fn mul(self, other: &'b Polynomial<F>) -> Polynomial<F> {
        let mut coeffs =
            vec![F::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += *a * b;
            }
        }
        Polynomial::from_coefficients_vec(coeffs)
    }
}

impl<'a, F> Neg for &'a Polynomial<F>
where
    F: PrimeField,
{
    type Output = Polynomial<F>;

    fn neg(self) -> Polynomial<F> {
        Polynomial::from_coefficients_vec(
            self.coeffs.iter().map(|coeff| -*coeff).collect(),
        )
    }
}
