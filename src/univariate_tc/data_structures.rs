use ark_ec::pairing::Pairing;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// What the prover does with the commitment to the division
/// remainder. `Discard` computes and drops it, emitting the
/// three-element proof; `Bind` blinds it into the proof as a fourth
/// element and the verifier's cofactor check gains a matching
/// pairing term. The mode is fixed at setup and carried in both
/// keys so prover and verifier cannot silently disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemainderMode {
    Discard,
    Bind,
}

/// Parameters fixed once at setup time.
///
/// max_degree - largest polynomial degree the reference string supports
/// t_coeffs - coefficients of the target polynomial committed into
///            the verification key (at most max_degree + 1 of them)
/// remainder_mode - remainder-commitment handling for this deployment
#[derive(Clone, Debug)]
pub struct InputParams<E: Pairing> {
    pub max_degree: usize,
    pub t_coeffs: Vec<E::ScalarField>,
    pub remainder_mode: RemainderMode,
}

/// Powers-of-s commitments handed to every prover:
/// powers_of_g[i] = g^(s^i) and powers_of_alpha_g[i] = g^(alpha * s^i)
/// for i in 0..=max_degree. The trapdoor scalars s and alpha are
/// dropped by setup; only these group elements survive.
#[derive(Clone, Debug)]
pub struct ProvingKey<E: Pairing> {
    pub powers_of_g: Vec<E::G1Affine>,
    pub powers_of_alpha_g: Vec<E::G1Affine>,
    pub remainder_mode: RemainderMode,
}

impl<E: Pairing> ProvingKey<E> {
    pub fn max_degree(&self) -> usize {
        self.powers_of_g.len() - 1
    }
}

/// Verifier-side key material. The scheme is written for a symmetric
/// pairing; over an asymmetric curve the verifier-side elements live
/// in G2: h is the fixed public generator paired against every proof
/// element, h_alpha = h^alpha and h_t_s = h^t(s) commit the trapdoor
/// shift and the target polynomial evaluated at the secret point.
#[derive(Clone, Debug)]
pub struct VerificationKey<E: Pairing> {
    pub h: E::G2Affine,
    pub h_alpha: E::G2Affine,
    pub h_t_s: E::G2Affine,
    pub remainder_mode: RemainderMode,
}

/// This is the data structure of the proof sent to the verifier, to
/// prove that the target polynomial t(X) exactly divides the value
/// polynomial p(X), i.e. that a quotient q(X) exists with
/// p(X) = q(X).t(X).
///
/// p_comm - blinded commitment g^(delta * p(s))
/// q_comm - blinded commitment g^(delta * q(s)) to the quotient
/// alpha_comm - blinded commitment g^(delta * alpha * p(s))
/// r_comm - blinded commitment g^(delta * r(s)) to the division
///          remainder, present only under RemainderMode::Bind
#[derive(Clone, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof<E: Pairing> {
    pub p_comm: E::G1Affine,
    pub q_comm: E::G1Affine,
    pub alpha_comm: E::G1Affine,
    pub r_comm: Option<E::G1Affine>,
}

/// Outcome of the two pairing sub-checks, exposed so callers can see
/// which equation failed instead of a bare boolean.
///
/// restriction - e(alpha_comm, h) == e(p_comm, h_alpha), binding the
///               alpha-shifted commitment to the plain one
/// cofactor - e(p_comm, h) == e(q_comm, h_t_s) (plus e(r_comm, h)
///            under RemainderMode::Bind), the divisibility claim
#[derive(Clone, Copy, Debug)]
pub struct VerificationOutcome {
    pub restriction: bool,
    pub cofactor: bool,
}

impl VerificationOutcome {
    /// 'true' iff both sub-checks hold; no partial credit
    pub fn accepted(&self) -> bool {
        self.restriction && self.cofactor
    }
}
