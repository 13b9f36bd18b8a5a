//! Schnorr signature verification keys.

use core::fmt::{self, Debug};

use crate::{codec, Challenge, Element, Error, Group, Signature, Suite};

/// A valid verifying key for Schnorr signatures over a [`Suite::Group`].
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct VerifyingKey<C>
where
    C: Suite,
{
    pub(crate) element: Element<C>,
}

impl<C> VerifyingKey<C>
where
    C: Suite,
{
    /// Create a new VerifyingKey from the given element.
    pub fn new(element: Element<C>) -> Self {
        Self { element }
    }

    /// Return the underlying element.
    pub fn to_element(self) -> Element<C> {
        self.element
    }

    /// Verify a purported `signature` with a pre-hashed [`Challenge`] made by
    /// this verification key.
    pub(crate) fn verify_prehashed(
        &self,
        challenge: Challenge<C>,
        signature: &Signature<C>,
    ) -> Result<(), Error> {
        // Verify check is h * ( - z * B + R  + c * A) == 0
        //                 h * ( z * B - c * A - R) == 0
        //
        // where h is the cofactor
        let zB = <C::Group>::generator() * signature.z;
        let cA = self.element * challenge.0;
        let check = (zB - cA - signature.R) * <C::Group>::cofactor();

        if check == <C::Group>::identity() {
            Ok(())
        } else {
            Err(Error::InvalidSignature)
        }
    }

    /// Verify a purported `signature` over `msg` made by this verification
    /// key.
    pub fn verify(&self, msg: &[u8], signature: &Signature<C>) -> Result<(), Error> {
        let c = crate::challenge::<C>(&signature.R, self, msg)?;

        self.verify_prehashed(c, signature)
    }
}

impl<C> Debug for VerifyingKey<C>
where
    C: Suite,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("VerifyingKey")
            .field(
                &codec::serialize_element::<C>(&self.element)
                    .map(hex::encode)
                    .unwrap_or_else(|_| "<invalid>".to_string()),
            )
            .finish()
    }
}
