//! Schnorr signatures over prime order groups (or subgroups).

use core::fmt::{self, Debug};

use crate::{codec, Element, Error, Scalar, Suite};

/// A Schnorr signature over some prime order group (or subgroup).
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct Signature<C: Suite> {
    /// The commitment `R` to the signature nonce.
    pub(crate) R: Element<C>,
    /// The response `z` to the challenge computed from the commitment `R`,
    /// the verifying key, and the message.
    pub(crate) z: Scalar<C>,
}

impl<C> Signature<C>
where
    C: Suite,
{
    /// Converts serialized bytes into a `Signature<C>`.
    ///
    /// The encoding is the serialized `R` element immediately followed by the
    /// serialized `z` scalar; nothing else is accepted.
    pub fn deserialize(bytes: &[u8]) -> Result<Self, Error> {
        let element_len = codec::element_len::<C>();
        let scalar_len = codec::scalar_len::<C>();
        if bytes.len() != element_len + scalar_len {
            return Err(Error::MalformedSignature);
        }

        let R = codec::deserialize_element::<C>(&bytes[..element_len])
            .map_err(|_| Error::MalformedSignature)?;
        let z = codec::deserialize_scalar::<C>(&bytes[element_len..])
            .map_err(|_| Error::MalformedSignature)?;

        Ok(Self { R, z })
    }

    /// Converts this signature to its byte serialization.
    pub fn serialize(&self) -> Result<Vec<u8>, Error> {
        let mut bytes = codec::serialize_element::<C>(&self.R)?;
        bytes.extend_from_slice(&codec::serialize_scalar::<C>(&self.z));
        Ok(bytes)
    }
}

impl<C: Suite> Debug for Signature<C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Signature")
            .field(
                "R",
                &codec::serialize_element::<C>(&self.R)
                    .map(hex::encode)
                    .unwrap_or_else(|_| "<invalid>".to_string()),
            )
            .field("z", &hex::encode(codec::serialize_scalar::<C>(&self.z)))
            .finish()
    }
}
