//! VSS error types.

use thiserror::Error;

/// An error related to the VSS protocol or the polynomial layer.
///
/// Unlike participant identifiers, which are plain `u32` indices into the
/// verifier set, errors carry no per-suite data, so this type is not generic
/// over the suite.
#[non_exhaustive]
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Error {
    /// The threshold is out of range for the verifier set.
    #[error("threshold must be at least 2 and not larger than the number of verifiers")]
    InvalidThreshold,
    /// A participant index does not fit the verifier set.
    #[error("index out of bounds")]
    IndexOutOfBounds,
    /// A deal was delivered to a verifier with a different index.
    #[error("deal addressed to a different verifier index")]
    WrongIndex,
    /// The secret and random shares of a deal carry different indices.
    #[error("mismatched share indices in deal")]
    MismatchedShareIndices,
    /// Two polynomials with different thresholds cannot be added.
    #[error("mismatched polynomial thresholds")]
    MismatchedThresholds,
    /// Two commitment polynomials over different bases cannot be added.
    #[error("mismatched commitment base points")]
    MismatchedBases,
    /// The same share index was provided more than once to reconstruction.
    #[error("duplicated share indices")]
    DuplicatedShareIndices,
    /// The verifier's public key does not appear in the published set.
    #[error("public key not found in the list of verifiers")]
    NotInVerifierSet,
    /// Fewer than threshold-many shares were provided to reconstruction.
    #[error("not enough shares to reconstruct the secret")]
    InsufficientShares,
    /// A message carries a session identifier from a different protocol run.
    #[error("inconsistent session identifier")]
    SessionMismatch,
    /// The verifier has already received a deal for this run.
    #[error("deal already processed")]
    DealAlreadyProcessed,
    /// A response from the same verifier index was already recorded.
    #[error("already existing response from the same origin")]
    DuplicateResponse,
    /// A justification arrived without a matching complaint on record.
    #[error("no complaint received for this justification")]
    MissingComplaint,
    /// A justification arrived for a response that was an approval.
    #[error("justification received for an approval")]
    JustificationForApproval,
    /// A response or justification arrived before any deal was processed.
    #[error("no deal has been processed yet")]
    MissingDeal,
    /// A share does not verify against the published commitments.
    #[error("share does not verify against commitments")]
    InvalidShareCommitment,
    /// Schnorr signature verification failed.
    #[error("invalid signature")]
    InvalidSignature,
    /// The encoding of a signature was malformed.
    #[error("malformed signature encoding")]
    MalformedSignature,
    /// The AEAD failed to open an encrypted deal.
    #[error("unable to decrypt deal")]
    DecryptionFailure,
    /// The AEAD failed to seal a deal.
    #[error("unable to encrypt deal")]
    EncryptionFailure,
    /// The encoding of a deal was malformed.
    #[error("malformed deal encoding")]
    MalformedDeal,
    /// Error in the scalar field.
    #[error("error in scalar field")]
    FieldError(#[from] FieldError),
    /// Error in the group.
    #[error("error in group")]
    GroupError(#[from] GroupError),
}

/// An error related to a scalar field.
#[non_exhaustive]
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum FieldError {
    /// The encoding of a group scalar was malformed.
    #[error("malformed scalar encoding")]
    MalformedScalar,
    /// This scalar MUST NOT be zero.
    #[error("invalid for this scalar to be zero")]
    InvalidZeroScalar,
}

/// An error related to a group (usually an elliptic curve or constructed from
/// one) or one of its elements.
#[non_exhaustive]
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum GroupError {
    /// The encoding of a group element was malformed.
    #[error("malformed group element encoding")]
    MalformedElement,
    /// This element MUST NOT be the identity.
    #[error("invalid for this element to be the identity")]
    InvalidIdentityElement,
    /// This element MUST have (large) prime order.
    #[error("invalid for this element to not have large prime order")]
    InvalidNonPrimeOrderElement,
}
