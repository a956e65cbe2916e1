use ark_ff::PrimeField;
use displaydoc::Display;

/// Errors raised by the coefficient-vector polynomial routines
#[derive(Display, Debug)]
pub enum PolyError {
    /// divisor polynomial is empty, identically zero, or has a zero low-order coefficient
    InvalidDivisor,
}

impl std::error::Error for PolyError {}

/// function to multiply two polynomials given as coefficient
/// vectors, index i holding the coefficient of X^i
///
/// Attributes:
/// a - coefficients of the first polynomial
/// b - coefficients of the second polynomial
///
/// Returns
/// coefficients of a(X) * b(X), of length a.len() + b.len() - 1,
/// or the empty (zero) polynomial if either input is empty
pub fn multiply<F: PrimeField>(a: &[F], b: &[F]) -> Vec<F> {
    if a.is_empty() || b.is_empty() {
        return vec![];
    }

    let mut product = vec![F::zero(); a.len() + b.len() - 1];

    for i in 0..a.len() {
        for j in 0..b.len() {
            product[i + j] += a[i] * b[j];
        }
    }

    product
}

/// function to divide the polynomial p(X) by the target polynomial
/// t(X), working from the low-order end: at step i the running
/// remainder's X^i coefficient is cleared by subtracting
/// (rem[i] / t[0]) * t(X) shifted by i
///
/// Attributes:
/// p - coefficients of the dividend polynomial
/// t - coefficients of the divisor polynomial
///
/// Returns
/// (quotient, remainder) with quotient of length
/// p.len() - t.len() + 1 (empty when p is shorter than t) and the
/// remainder trimmed of trailing zero coefficients, S.T.
/// multiply(quotient, t) + remainder == p coefficient-wise
pub fn divide<F: PrimeField>(p: &[F], t: &[F]) -> Result<(Vec<F>, Vec<F>), PolyError> {
    if t.is_empty() || t.iter().all(|coeff| coeff.is_zero()) {
        return Err(PolyError::InvalidDivisor);
    }

    // each division step divides by t[0]
    let t0_inv = t[0].inverse().ok_or(PolyError::InvalidDivisor)?;

    let mut remainder = p.to_vec();
    let steps = (p.len() + 1).saturating_sub(t.len());
    let mut quotient = vec![F::zero(); steps];

    for i in 0..steps {
        if remainder[i].is_zero() {
            continue;
        }

        let coeff = remainder[i] * t0_inv;
        quotient[i] = coeff;

        for j in 0..t.len() {
            let sub = coeff * t[j];
            remainder[i + j] -= sub;
        }
    }

    // trim trailing zeros so an exact division yields an empty remainder
    while remainder.last().is_some_and(|coeff| coeff.is_zero()) {
        remainder.pop();
    }

    Ok((quotient, remainder))
}
