use std::marker::PhantomData;

use anyhow::Error;
use ark_ec::pairing::Pairing;
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{One, UniformRand, Zero};
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, Polynomial};
use ark_std::rand::thread_rng;
use ark_std::{end_timer, start_timer};
use displaydoc::Display;

use crate::poly::{self, PolyError};
use crate::TargetCheck;

pub mod data_structures;
pub use data_structures::*;

/// Divisibility-check protocol for a committed univariate polynomial
///
/// The prover commits to the value polynomial p(X) in the exponent
/// using powers-of-s commitments, divides p by the fixed target
/// polynomial t, commits to the quotient q, and blinds everything
/// with a fresh per-proof scalar delta. The verifier accepts iff
/// both pairing equations hold:
///
///   e(alpha_comm, h) == e(p_comm, h^alpha)      (restriction)
///   e(p_comm, h)     == e(q_comm, h^t(s))       (cofactor)
///
/// which together certify p(s) = q(s).t(s) in the exponent without
/// revealing p, q, or s.
pub struct UnivariateTargetCheck<E: Pairing> {
    _pairing_data: PhantomData<E>,
}

/// Errors raised while producing or checking divisibility proofs
#[derive(Display, Debug)]
pub enum TargetCheckError {
    /// polynomial has {got} coefficients but the reference string supports at most {max}
    DegreeExceeded { got: usize, max: usize },
    /// proof shape does not match the remainder mode committed in the keys
    MalformedProof,
    /// mismatched base/scalar lengths in multi-scalar multiplication
    MsmLengthMismatch,
}

impl std::error::Error for TargetCheckError {}

/// commits to a coefficient vector against a prefix of the
/// powers-of-s table, i.e. computes prod_i bases[i]^coeffs[i]
fn commit<E: Pairing>(bases: &[E::G1Affine], coeffs: &[E::ScalarField]) -> Result<E::G1, Error> {
    if coeffs.len() > bases.len() {
        return Err(TargetCheckError::DegreeExceeded {
            got: coeffs.len(),
            max: bases.len(),
        }
        .into());
    }

    let comm = E::G1::msm(&bases[..coeffs.len()], coeffs)
        .map_err(|_| TargetCheckError::MsmLengthMismatch)?;

    Ok(comm)
}

impl<E: Pairing> TargetCheck<E> for UnivariateTargetCheck<E> {
    type InputParams = InputParams<E>;
    type ProvingKey = ProvingKey<E>;
    type VerificationKey = VerificationKey<E>;
    type Proof = Proof<E>;

    /// function called once by the setup owner to sample the trapdoor
    /// scalars s and alpha, derive the powers-of-s commitments, and
    /// commit the target polynomial into the verification key
    ///
    /// Attributes:
    /// pp - degree bound, target coefficients, and remainder mode
    ///
    /// Returns
    /// (ProvingKey, VerificationKey) - public key material; the
    /// trapdoor scalars are locals that drop when this returns
    fn setup(pp: &Self::InputParams) -> Result<(ProvingKey<E>, VerificationKey<E>), Error> {
        // the committed target must be a usable divisor
        if pp.t_coeffs.is_empty() || pp.t_coeffs.iter().all(|coeff| coeff.is_zero()) {
            return Err(PolyError::InvalidDivisor.into());
        }
        if pp.t_coeffs.len() > pp.max_degree + 1 {
            return Err(TargetCheckError::DegreeExceeded {
                got: pp.t_coeffs.len(),
                max: pp.max_degree + 1,
            }
            .into());
        }

        let setup_time = start_timer!(|| format!(
            "UnivariateTargetCheck::setup, with degree bound {}",
            pp.max_degree
        ));

        let rng = &mut thread_rng();

        let s = E::ScalarField::rand(rng);
        let alpha = E::ScalarField::rand(rng);
        let g = E::G1::rand(rng);

        let powers_time = start_timer!(|| "Computing powers-of-s commitments");

        let mut powers_of_s = Vec::with_capacity(pp.max_degree + 1);
        let mut current_power = E::ScalarField::one();
        for _ in 0..=pp.max_degree {
            powers_of_s.push(current_power);
            current_power *= s;
        }

        let powers_of_g: Vec<E::G1> = powers_of_s.iter().map(|power| g * *power).collect();
        let powers_of_alpha_g: Vec<E::G1> = powers_of_s
            .iter()
            .map(|power| g * (alpha * *power))
            .collect();

        let pk = ProvingKey {
            powers_of_g: E::G1::normalize_batch(&powers_of_g),
            powers_of_alpha_g: E::G1::normalize_batch(&powers_of_alpha_g),
            remainder_mode: pp.remainder_mode,
        };

        end_timer!(powers_time);

        // evaluate t at the secret point; the verifier only ever
        // sees the commitment h^t(s)
        let t_s = DensePolynomial::from_coefficients_slice(&pp.t_coeffs).evaluate(&s);

        let h = E::G2Affine::generator();
        let vk = VerificationKey {
            h,
            h_alpha: (h * alpha).into_affine(),
            h_t_s: (h * t_s).into_affine(),
            remainder_mode: pp.remainder_mode,
        };

        end_timer!(setup_time);

        Ok((pk, vk))
    }

    /// function called by the prover to generate a blinded proof
    /// that t(X) divides p(X) exactly
    ///
    /// Attributes:
    /// pk - powers-of-s commitments from setup
    /// p_coeffs - coefficients of the value polynomial, at most
    ///            max_degree + 1 of them
    /// t_coeffs - coefficients of the target polynomial; must be the
    ///            same ones committed into the verification key
    ///            (a mismatch is a caller error, not detected here)
    ///
    /// Returns
    /// Proof - blinded commitments to p(s), q(s), and alpha.p(s)
    fn prove(
        pk: &Self::ProvingKey,
        p_coeffs: &[E::ScalarField],
        t_coeffs: &[E::ScalarField],
    ) -> Result<Proof<E>, Error> {
        let prove_time = start_timer!(|| "UnivariateTargetCheck::prove");

        let commit_time = start_timer!(|| "Committing to value polynomial");

        // evaluate p at s in the exponent; s itself is never reconstructed
        let p_comm = commit::<E>(&pk.powers_of_g, p_coeffs)?;
        let alpha_comm = commit::<E>(&pk.powers_of_alpha_g, p_coeffs)?;

        end_timer!(commit_time);

        let div_time = start_timer!(|| "Dividing by the target polynomial");

        let (q_coeffs, r_coeffs) = poly::divide(p_coeffs, t_coeffs)?;

        end_timer!(div_time);

        let q_comm = commit::<E>(&pk.powers_of_g, &q_coeffs)?;

        let r_comm = match pk.remainder_mode {
            RemainderMode::Bind => Some(commit::<E>(&pk.powers_of_g, &r_coeffs)?),
            RemainderMode::Discard => None,
        };

        // fresh blinding exponent, never reused across proofs
        let delta = E::ScalarField::rand(&mut thread_rng());

        let proof = Proof {
            p_comm: (p_comm * delta).into_affine(),
            q_comm: (q_comm * delta).into_affine(),
            alpha_comm: (alpha_comm * delta).into_affine(),
            r_comm: r_comm.map(|comm| (comm * delta).into_affine()),
        };

        end_timer!(prove_time);

        Ok(proof)
    }

    /// function called by the verifier to check the proof against
    /// the verification key
    ///
    /// Attributes:
    /// vk - verification key from setup
    /// proof - proof sent by the prover for the claim
    ///
    /// Returns
    /// 'true' if both pairing checks hold, 'false' otherwise;
    /// a proof whose shape disagrees with the key's remainder mode
    /// is an error, never a silent 'false'
    fn verify(vk: &Self::VerificationKey, proof: &Self::Proof) -> Result<bool, Error> {
        Ok(Self::check_proof(vk, proof)?.accepted())
    }
}

impl<E: Pairing> UnivariateTargetCheck<E> {
    /// runs both pairing sub-checks and reports their individual
    /// outcomes alongside the final verdict
    pub fn check_proof(
        vk: &VerificationKey<E>,
        proof: &Proof<E>,
    ) -> Result<VerificationOutcome, Error> {
        let verify_time = start_timer!(|| "UnivariateTargetCheck::check_proof");

        // binds the alpha-shifted commitment to the plain one:
        // e(g^(delta.alpha.p(s)), h) == e(g^(delta.p(s)), h^alpha)
        let restriction =
            E::pairing(proof.alpha_comm, vk.h) == E::pairing(proof.p_comm, vk.h_alpha);

        // the divisibility claim itself:
        // e(g^(delta.p(s)), h) == e(g^(delta.q(s)), h^t(s))
        let p_side = E::pairing(proof.p_comm, vk.h);
        let cofactor = match (vk.remainder_mode, proof.r_comm) {
            (RemainderMode::Discard, None) => p_side == E::pairing(proof.q_comm, vk.h_t_s),
            (RemainderMode::Bind, Some(r_comm)) => {
                p_side == E::pairing(proof.q_comm, vk.h_t_s) + E::pairing(r_comm, vk.h)
            }
            _ => {
                end_timer!(verify_time);
                return Err(TargetCheckError::MalformedProof.into());
            }
        };

        end_timer!(verify_time);

        Ok(VerificationOutcome {
            restriction,
            cofactor,
        })
    }
}
