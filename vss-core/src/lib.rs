#![allow(non_snake_case)]
#![deny(missing_docs)]
//! An implementation of verifiable secret sharing (VSS) over prime-order
//! groups, following the scheme from the paper "Provably Secure Distributed
//! Schnorr Signatures and a (t, n) Threshold Scheme for Implicit
//! Certificates".
//!
//! VSS enables a dealer to share a secret securely and verifiably among n
//! verifiers, out of which at least t are required for its reconstruction.
//! The verifiability of the process prevents a malicious dealer from
//! influencing the outcome to their advantage, as each verifier can check the
//! validity of the received share. The protocol has the following steps:
//!
//! 1. The dealer sends a [`vss::Deal`] to every verifier using
//!    [`vss::Dealer::encrypted_deals`]. Each deal is encrypted for the one
//!    verifier whose public key sits at the same index as the deal.
//! 2. Each verifier processes its deal with
//!    [`vss::Verifier::process_encrypted_deal`]. This produces a
//!    [`vss::Response`], either an approval confirming a correct deal or a
//!    complaint notifying the others that the dealer might be malicious. All
//!    responses must be broadcast to every verifier and to the dealer.
//! 3. The dealer answers each complaint with a [`vss::Justification`]
//!    revealing the share it originally sent to the accusing verifier, by
//!    calling [`vss::Dealer::process_response`].
//! 4. The verifiers refuse the shared secret and abort the protocol if there
//!    are at least t complaints or if a justification is wrong. They accept it
//!    once there are at least t approvals, at which point any t out of n
//!    verifiers can reveal their shares to reconstruct the secret with
//!    [`vss::recover_secret`].
//!
//! This crate is generic over a [`Suite`]: the concrete group, hash family
//! and key derivation are provided by suite crates such as
//! `vss-ristretto255`.

use rand_core::{CryptoRng, RngCore};

mod channel;
pub(crate) mod codec;
mod error;
pub mod poly;
mod signature;
mod signing_key;
mod traits;
mod verifying_key;
pub mod vss;

pub use error::{Error, FieldError, GroupError};
pub use signature::Signature;
pub use signing_key::SigningKey;
pub use traits::{Element, Field, Group, Scalar, Suite};
pub use verifying_key::VerifyingKey;

#[cfg(any(test, feature = "test-impl"))]
pub mod tests;

/// A Schnorr signature challenge, prehashed from the nonce commitment, the
/// verifying key and the message.
#[derive(Copy, Clone)]
pub(crate) struct Challenge<C: Suite>(pub(crate) Scalar<C>);

/// Generates the challenge as is required for Schnorr signatures.
///
/// The preimage binds the nonce commitment `R`, the signer's verifying key
/// and the message, in that order.
pub(crate) fn challenge<C>(
    R: &Element<C>,
    verifying_key: &VerifyingKey<C>,
    msg: &[u8],
) -> Result<Challenge<C>, Error>
where
    C: Suite,
{
    let mut preimage = Vec::new();

    preimage.extend_from_slice(<C::Group>::serialize(R)?.as_ref());
    preimage.extend_from_slice(<C::Group>::serialize(&verifying_key.to_element())?.as_ref());
    preimage.extend_from_slice(msg);

    Ok(Challenge(C::hash_to_scalar(&preimage)))
}

/// Generates a random nonzero scalar.
///
/// It assumes that the Scalar Eq/PartialEq implementation is constant-time.
pub(crate) fn random_nonzero<C: Suite, R: RngCore + CryptoRng>(rng: &mut R) -> Scalar<C> {
    loop {
        let scalar = <<C::Group as Group>::Field>::random(rng);

        if scalar != <<C::Group as Group>::Field>::zero() {
            return scalar;
        }
    }
}
