//! Traits used to abstract the prime-order group a suite operates over.

use core::{
    fmt::Debug,
    ops::{Add, Mul, Sub},
};

use rand_core::{CryptoRng, RngCore};

use crate::{FieldError, GroupError};

/// A prime order finite field GF(q) over which all scalar values for our
/// prime order group are defined.
///
/// This trait does not have to be implemented for a finite field scalar
/// itself, it can be a pass-through, implemented for a type just for the
/// suite, and calls through to another implementation underneath, so that
/// this trait does not have to be implemented for types you don't own.
pub trait Field: Copy + Clone {
    /// An element of the scalar field GF(q).
    /// The Eq/PartialEq implementation MUST be constant-time.
    type Scalar: Add<Output = Self::Scalar>
        + Copy
        + Clone
        + Eq
        + Mul<Output = Self::Scalar>
        + PartialEq
        + Sub<Output = Self::Scalar>;

    /// A unique byte array buf of fixed length N.
    type Serialization: AsRef<[u8]> + Debug + TryFrom<Vec<u8>>;

    /// Returns the zero element of the field, the additive identity.
    fn zero() -> Self::Scalar;

    /// Returns the one element of the field, the multiplicative identity.
    fn one() -> Self::Scalar;

    /// Computes the multiplicative inverse of an element of the scalar field,
    /// failing if the element is zero.
    fn invert(scalar: &Self::Scalar) -> Result<Self::Scalar, FieldError>;

    /// Generate a random scalar from the entire space [0, q-1].
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Scalar;

    /// Maps a scalar to a unique byte array buf of fixed length N.
    fn serialize(scalar: &Self::Scalar) -> Self::Serialization;

    /// Attempts to map a byte array `buf` to a scalar.
    ///
    /// Fails if the input is not a canonical byte representation of a scalar
    /// of the field.
    fn deserialize(buf: &Self::Serialization) -> Result<Self::Scalar, FieldError>;
}

/// An element of the [`Suite`] `C`'s [`Group`]'s scalar [`Field`].
pub type Scalar<C> = <<<C as Suite>::Group as Group>::Field as Field>::Scalar;

/// A prime-order group (or subgroup) that provides everything we need to
/// share secrets, commit to sharing polynomials and create and verify Schnorr
/// signatures.
///
/// This trait does not have to be implemented for the curve/element/point
/// itself, it can be a pass-through, implemented for a type just for the
/// suite, and calls through to another implementation underneath, so that
/// this trait does not have to be implemented for types you don't own.
pub trait Group: Copy + Clone + PartialEq {
    /// A prime order finite field GF(q) over which all scalar values for our
    /// prime order group are defined.
    type Field: Field;

    /// An element of our group that we will be computing over.
    type Element: Add<Output = Self::Element>
        + Copy
        + Clone
        + Eq
        + Mul<<Self::Field as Field>::Scalar, Output = Self::Element>
        + PartialEq
        + Sub<Output = Self::Element>;

    /// A unique byte array buf of fixed length N.
    type Serialization: AsRef<[u8]> + Debug + TryFrom<Vec<u8>>;

    /// The order of the the quotient group when the prime order subgroup
    /// divides the order of the full curve group.
    ///
    /// If using a prime order elliptic curve, the cofactor should be 1 in the
    /// scalar field.
    fn cofactor() -> <Self::Field as Field>::Scalar;

    /// Additive identity of the prime order group.
    fn identity() -> Self::Element;

    /// The fixed generator element of the prime order group, used as the
    /// standard base for secret commitments and public keys.
    fn generator() -> Self::Element;

    /// Maps an element to a unique byte array buf of fixed length N. This
    /// function raises an error if the element is the identity element of the
    /// group.
    fn serialize(element: &Self::Element) -> Result<Self::Serialization, GroupError>;

    /// Attempts to map a byte array `buf` to an element.
    ///
    /// Fails if the input is not a valid byte representation of an element of
    /// the group, or if the resulting element is the identity element of the
    /// group.
    fn deserialize(buf: &Self::Serialization) -> Result<Self::Element, GroupError>;
}

/// An element of the [`Suite`] `C`'s [`Group`].
pub type Element<C> = <<C as Suite>::Group as Group>::Element;

/// A VSS suite specifies the underlying prime-order group details, the
/// cryptographic hash family and the key derivation used to seal deals.
pub trait Suite: Copy + Clone + PartialEq + Debug + 'static {
    /// The suite ID string, bound into every encoded deal. It's recommended
    /// to use a format similar to "VSS-RISTRETTO255-SHA512-v1".
    const ID: &'static str;

    /// The prime order group (or subgroup) that this suite operates over.
    type Group: Group;

    /// A unique byte array of fixed length, at least 256 bits.
    type HashOutput: AsRef<[u8]>;

    /// The domain-neutral hash of the suite.
    ///
    /// Session identifiers and the response/justification transcripts are
    /// hashed with this function, on top of their own domain tags.
    fn hash(m: &[u8]) -> Self::HashOutput;

    /// Maps arbitrary inputs to scalar elements of the prime-order group
    /// scalar field. Used for Schnorr signature challenges.
    fn hash_to_scalar(m: &[u8]) -> Scalar<Self>;

    /// Maps arbitrary inputs to elements of the prime-order group with
    /// unknown discrete logarithm. Used to derive the second commitment base
    /// from the verifier set.
    fn hash_to_element(m: &[u8]) -> Element<Self>;

    /// Derives a symmetric key for the deal channel from input key material
    /// `ikm` and the context `info`, via HKDF keyed by the suite hash.
    ///
    /// The output length is fixed by the channel's AEAD (AES-256-GCM).
    fn kdf(ikm: &[u8], info: &[u8]) -> [u8; 32];
}
