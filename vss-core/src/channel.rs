//! The pairwise confidential channel used to transport deals.
//!
//! The encryption is performed in a similar manner as what is done in TLS:
//! the dealer generates an ephemeral Diffie-Hellman key pair, signs the
//! ephemeral public key with its long-term secret key, and derives the AEAD
//! key from the shared point via the suite's HKDF. The context binding the
//! dealer and the full verifier set is both the HKDF info and the AEAD
//! associated data, preventing cross-instance replay.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Nonce};
use rand_core::{CryptoRng, RngCore};

use crate::vss::{Deal, EncryptedDeal};
use crate::{random_nonzero, Element, Error, Group, Scalar, Signature, SigningKey, Suite, VerifyingKey};

/// AES-GCM nonce length in bytes.
const NONCE_LEN: usize = 12;

/// Encrypts `deal` for `recipient` under a fresh ephemeral key signed by the
/// dealer's long-term key.
///
/// The nonce is constant: every ephemeral key seals exactly one deal.
pub(crate) fn encrypt_deal<C, R>(
    long: &Scalar<C>,
    recipient: &Element<C>,
    deal: &Deal<C>,
    context: &[u8],
    rng: &mut R,
) -> Result<EncryptedDeal<C>, Error>
where
    C: Suite,
    R: RngCore + CryptoRng,
{
    let ephemeral = random_nonzero::<C, R>(rng);
    let dh_key = <C::Group>::generator() * ephemeral;
    let dh_bytes = <C::Group>::serialize(&dh_key)?;

    let signature = SigningKey::<C>::from_scalar(*long)
        .sign(rng, dh_bytes.as_ref())?
        .serialize()?;

    let pre_shared = *recipient * ephemeral;
    let key = C::kdf(<C::Group>::serialize(&pre_shared)?.as_ref(), context);
    let aead = Aes256Gcm::new_from_slice(&key).map_err(|_| Error::EncryptionFailure)?;

    let nonce = [0u8; NONCE_LEN];
    let cipher = aead
        .encrypt(
            Nonce::from_slice(&nonce),
            Payload {
                msg: &deal.encode()?,
                aad: context,
            },
        )
        .map_err(|_| Error::EncryptionFailure)?;

    Ok(EncryptedDeal {
        dh_key,
        signature,
        nonce: nonce.to_vec(),
        cipher,
    })
}

/// Decrypts an [`EncryptedDeal`] addressed to the holder of `long`.
///
/// Verifies the dealer's signature over the ephemeral key, re-derives the
/// shared point from the receiving side, and opens the AEAD with the same
/// context that was used for sealing.
pub(crate) fn decrypt_deal<C>(
    long: &Scalar<C>,
    dealer: &Element<C>,
    encrypted: &EncryptedDeal<C>,
    context: &[u8],
) -> Result<Deal<C>, Error>
where
    C: Suite,
{
    let dh_bytes = <C::Group>::serialize(&encrypted.dh_key)?;
    let signature: Signature<C> = Signature::deserialize(&encrypted.signature)?;
    VerifyingKey::new(*dealer).verify(dh_bytes.as_ref(), &signature)?;

    if encrypted.nonce.len() != NONCE_LEN {
        return Err(Error::DecryptionFailure);
    }

    let pre_shared = encrypted.dh_key * *long;
    let key = C::kdf(<C::Group>::serialize(&pre_shared)?.as_ref(), context);
    let aead = Aes256Gcm::new_from_slice(&key).map_err(|_| Error::DecryptionFailure)?;

    let plaintext = aead
        .decrypt(
            Nonce::from_slice(&encrypted.nonce),
            Payload {
                msg: &encrypted.cipher,
                aad: context,
            },
        )
        .map_err(|_| Error::DecryptionFailure)?;

    Deal::decode(&plaintext)
}
