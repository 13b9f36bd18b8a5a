//! Schnorr signature signing keys.

use rand_core::{CryptoRng, RngCore};

use crate::{random_nonzero, Error, Field, Group, Scalar, Signature, Suite, VerifyingKey};

/// A signing key for a Schnorr signature on a [`Suite::Group`].
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct SigningKey<C>
where
    C: Suite,
{
    pub(crate) scalar: Scalar<C>,
}

impl<C> SigningKey<C>
where
    C: Suite,
{
    /// Generate a new signing key.
    pub fn new<R: RngCore + CryptoRng>(rng: &mut R) -> SigningKey<C> {
        let scalar = random_nonzero::<C, R>(rng);

        SigningKey { scalar }
    }

    /// Creates a SigningKey from a scalar.
    pub fn from_scalar(scalar: Scalar<C>) -> Self {
        Self { scalar }
    }

    /// Return the underlying scalar.
    pub fn to_scalar(self) -> Scalar<C> {
        self.scalar
    }

    /// Create a signature over `msg` using this `SigningKey`.
    pub fn sign<R: RngCore + CryptoRng>(&self, rng: &mut R, msg: &[u8]) -> Result<Signature<C>, Error> {
        let k = random_nonzero::<C, R>(rng);

        let R = <C::Group>::generator() * k;

        let c = crate::challenge::<C>(&R, &VerifyingKey::<C>::from(*self), msg)?;

        let z = k + (c.0 * self.scalar);

        Ok(Signature { R, z })
    }
}

impl<C> core::fmt::Debug for SigningKey<C>
where
    C: Suite,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("SigningKey").field(&"<redacted>").finish()
    }
}

impl<C> zeroize::Zeroize for SigningKey<C>
where
    C: Suite,
{
    fn zeroize(&mut self) {
        self.scalar = <<C::Group as Group>::Field>::zero();
    }
}

impl<C> From<&SigningKey<C>> for VerifyingKey<C>
where
    C: Suite,
{
    fn from(signing_key: &SigningKey<C>) -> Self {
        VerifyingKey::new(<C::Group>::generator() * signing_key.scalar)
    }
}

impl<C> From<SigningKey<C>> for VerifyingKey<C>
where
    C: Suite,
{
    fn from(signing_key: SigningKey<C>) -> Self {
        VerifyingKey::<C>::from(&signing_key)
    }
}
