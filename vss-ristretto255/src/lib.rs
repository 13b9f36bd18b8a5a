#![allow(non_snake_case)]
#![deny(missing_docs)]
//! A concrete verifiable secret sharing suite over the ristretto255 group
//! with SHA-512, instantiating the generic protocol from [`vss_core`].
//!
//! The ristretto255 group is a prime-order group built on top of
//! curve25519; it supports a clean uniform hash-to-group map, which the
//! protocol uses to derive the second commitment base from the verifier set.

use curve25519_dalek::{
    constants::RISTRETTO_BASEPOINT_POINT,
    ristretto::{CompressedRistretto, RistrettoPoint},
    scalar::Scalar,
    traits::Identity,
};
use hkdf::Hkdf;
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};

// Re-exports in our public API
pub use rand_core;
pub use vss_core::{Error, Field, FieldError, Group, GroupError, Suite};

/// An implementation of the VSS(ristretto255, SHA-512) suite scalar field.
#[derive(Clone, Copy)]
pub struct RistrettoScalarField;

impl Field for RistrettoScalarField {
    type Scalar = Scalar;

    type Serialization = [u8; 32];

    fn zero() -> Self::Scalar {
        Scalar::ZERO
    }

    fn one() -> Self::Scalar {
        Scalar::ONE
    }

    fn invert(scalar: &Self::Scalar) -> Result<Self::Scalar, FieldError> {
        // [`curve25519_dalek::scalar::Scalar`]'s Eq/PartialEq does a constant-time comparison using
        // `ConstantTimeEq`
        if *scalar == <Self as Field>::zero() {
            Err(FieldError::InvalidZeroScalar)
        } else {
            Ok(scalar.invert())
        }
    }

    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Scalar {
        Scalar::random(rng)
    }

    fn serialize(scalar: &Self::Scalar) -> Self::Serialization {
        scalar.to_bytes()
    }

    fn deserialize(buf: &Self::Serialization) -> Result<Self::Scalar, FieldError> {
        match Scalar::from_canonical_bytes(*buf).into() {
            Some(s) => Ok(s),
            None => Err(FieldError::MalformedScalar),
        }
    }
}

/// An implementation of the VSS(ristretto255, SHA-512) suite group.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RistrettoGroup;

impl Group for RistrettoGroup {
    type Field = RistrettoScalarField;

    type Element = RistrettoPoint;

    type Serialization = [u8; 32];

    fn cofactor() -> <Self::Field as Field>::Scalar {
        Scalar::ONE
    }

    fn identity() -> Self::Element {
        RistrettoPoint::identity()
    }

    fn generator() -> Self::Element {
        RISTRETTO_BASEPOINT_POINT
    }

    fn serialize(element: &Self::Element) -> Result<Self::Serialization, GroupError> {
        if *element == Self::identity() {
            return Err(GroupError::InvalidIdentityElement);
        }
        Ok(element.compress().to_bytes())
    }

    fn deserialize(buf: &Self::Serialization) -> Result<Self::Element, GroupError> {
        match CompressedRistretto::from_slice(buf.as_ref())
            .map_err(|_| GroupError::MalformedElement)?
            .decompress()
        {
            Some(point) => {
                if point == Self::identity() {
                    Err(GroupError::InvalidIdentityElement)
                } else {
                    Ok(point)
                }
            }
            None => Err(GroupError::MalformedElement),
        }
    }
}

fn hash_to_array(inputs: &[&[u8]]) -> [u8; 64] {
    let mut h = Sha512::new();
    for i in inputs {
        h.update(i);
    }
    let mut output = [0u8; 64];
    output.copy_from_slice(h.finalize().as_slice());
    output
}

/// Context string for domain separation of the suite hash functions.
const CONTEXT_STRING: &str = "VSS-RISTRETTO255-SHA512-v1";

/// An implementation of the VSS(ristretto255, SHA-512) suite.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Ristretto255Sha512;

impl Suite for Ristretto255Sha512 {
    const ID: &'static str = CONTEXT_STRING;

    type Group = RistrettoGroup;

    type HashOutput = [u8; 64];

    fn hash(m: &[u8]) -> Self::HashOutput {
        hash_to_array(&[CONTEXT_STRING.as_bytes(), b"digest", m])
    }

    fn hash_to_scalar(m: &[u8]) -> Scalar {
        Scalar::from_bytes_mod_order_wide(&hash_to_array(&[
            CONTEXT_STRING.as_bytes(),
            b"challenge",
            m,
        ]))
    }

    fn hash_to_element(m: &[u8]) -> RistrettoPoint {
        RistrettoPoint::from_uniform_bytes(&hash_to_array(&[
            CONTEXT_STRING.as_bytes(),
            b"base",
            m,
        ]))
    }

    fn kdf(ikm: &[u8], info: &[u8]) -> [u8; 32] {
        let hkdf = Hkdf::<Sha512>::new(None, ikm);
        let mut okm = [0u8; 32];
        hkdf.expand(info, &mut okm)
            .expect("32 bytes is a valid HKDF-SHA-512 output length");
        okm
    }
}

type S = Ristretto255Sha512;

/// A VSS(ristretto255, SHA-512) dealer.
pub type Dealer = vss_core::vss::Dealer<S>;

/// A VSS(ristretto255, SHA-512) verifier.
pub type Verifier = vss_core::vss::Verifier<S>;

/// A deal from a VSS(ristretto255, SHA-512) dealer to one verifier.
pub type Deal = vss_core::vss::Deal<S>;

/// An encrypted deal, only decipherable by its recipient.
pub type EncryptedDeal = vss_core::vss::EncryptedDeal<S>;

/// A verifier's approval or complaint about its deal.
pub type Response = vss_core::vss::Response;

/// A dealer's rebuttal to a complaint.
pub type Justification = vss_core::vss::Justification<S>;

/// A secret sharing polynomial over the ristretto255 scalar field.
pub type PriPoly = vss_core::poly::PriPoly<S>;

/// A private share of a sharing polynomial.
pub type PriShare = vss_core::poly::PriShare<S>;

/// A public commitment polynomial over the ristretto255 group.
pub type PubPoly = vss_core::poly::PubPoly<S>;

/// A public share of a commitment polynomial.
pub type PubShare = vss_core::poly::PubShare<S>;

/// A signing key for Schnorr signatures on VSS(ristretto255, SHA-512).
pub type SigningKey = vss_core::SigningKey<S>;

/// A valid verifying key for Schnorr signatures on VSS(ristretto255, SHA-512).
pub type VerifyingKey = vss_core::VerifyingKey<S>;

/// A Schnorr signature on VSS(ristretto255, SHA-512).
pub type Signature = vss_core::Signature<S>;

pub use vss_core::vss::minimum_t;

/// Recovers the secret shared by a dealer by gathering at least t deals from
/// certified verifiers.
pub fn recover_secret(deals: &[Deal], n: u32, t: u32) -> Result<Scalar, Error> {
    vss_core::vss::recover_secret(deals, n, t)
}
