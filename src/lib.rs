use anyhow::Error;
use ark_ec::pairing::Pairing;

/// Coefficient-vector polynomial arithmetic over a prime-order
/// scalar field (convolution multiply and long division)
pub mod poly;

/// Divisibility-check protocol for univariate polynomials,
/// verified with two bilinear-pairing equations
pub mod univariate_tc;

/// Interface of a pairing-based target-check authorization scheme:
/// a prover convinces a verifier that a committed polynomial p(X)
/// is an exact multiple of a fixed target polynomial t(X), where
/// t(X) encodes the authorization set as its roots, without
/// revealing p(X) itself.
///
/// The protocol is stateless per call; the only sequencing is
/// setup -> prove -> verify. Keys are read-only and safe to share
/// across concurrent provers and verifiers.
pub trait TargetCheck<E: Pairing>: Sized {
    type InputParams: Clone;
    type ProvingKey: Clone;
    type VerificationKey: Clone;
    type Proof: Clone;

    /// function called once by the setup owner to sample the trapdoor
    /// and derive the public key material
    ///
    /// Attributes:
    /// pp - degree bound and target polynomial fixed for the scheme
    ///
    /// Returns
    /// (ProvingKey, VerificationKey) - shared by all provers/verifiers
    fn setup(pp: &Self::InputParams) -> Result<(Self::ProvingKey, Self::VerificationKey), Error>;

    /// function called by the prover to generate a blinded proof
    /// that t(X) divides p(X) exactly
    ///
    /// Attributes:
    /// pk - powers-of-s commitments from setup
    /// p_coeffs - coefficients of the value polynomial p(X)
    /// t_coeffs - coefficients of the target polynomial t(X),
    ///            the same ones committed into the verification key
    ///
    /// Returns
    /// Proof - valid proof for the divisibility claim
    fn prove(
        pk: &Self::ProvingKey,
        p_coeffs: &[E::ScalarField],
        t_coeffs: &[E::ScalarField],
    ) -> Result<Self::Proof, Error>;

    /// function called by the verifier to check the proof against
    /// the verification key
    ///
    /// Attributes:
    /// vk - verification key from setup
    /// proof - proof sent by the prover for the claim
    ///
    /// Returns
    /// 'true' if the proof is valid, 'false' otherwise
    fn verify(vk: &Self::VerificationKey, proof: &Self::Proof) -> Result<bool, Error>;
}
