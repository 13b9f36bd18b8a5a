//! The verifiable secret sharing protocol: deals, responses, justifications,
//! and the [`Dealer`] and [`Verifier`] roles built around a shared response
//! aggregator.

use core::fmt::{self, Debug};
use std::collections::BTreeMap;

use derive_getters::Getters;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::codec::{self, Reader};
use crate::poly::{self, CommitmentBase, PriPoly, PriShare, PubPoly};
use crate::{channel, Element, Error, Field, Group, Scalar, SigningKey, Signature, Suite, VerifyingKey};

/// Version tag of the deal encoding.
const ENCODING_VERSION: u8 = 0;

/// Domain tag of the response transcript hash.
const RESPONSE_DOMAIN: &[u8] = b"response";

/// Domain tag of the justification transcript hash.
const JUSTIFICATION_DOMAIN: &[u8] = b"justification";

/// A deal encapsulates the verifiable secret share and is sent by the dealer
/// to a verifier.
#[derive(Clone, PartialEq, Getters)]
pub struct Deal<C: Suite> {
    /// Unique session identifier for this protocol run.
    pub(crate) session_id: Vec<u8>,
    /// Private share of the secret polynomial generated by the dealer.
    pub(crate) sec_share: PriShare<C>,
    /// Private share of the blinding polynomial generated by the dealer.
    pub(crate) rnd_share: PriShare<C>,
    /// Threshold used for this secret sharing run.
    pub(crate) t: u32,
    /// Coefficient commitments the shares are verified against.
    pub(crate) commitments: Vec<Element<C>>,
}

impl<C> Deal<C>
where
    C: Suite,
{
    /// Returns the deterministic byte encoding of this deal.
    ///
    /// The encryption of a deal operates on this encoding. Fields are laid
    /// out in declaration order behind a version byte and the suite ID; all
    /// lengths and the threshold are 32-bit little-endian.
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        let mut buf = Vec::new();
        buf.push(ENCODING_VERSION);
        codec::write_bytes(&mut buf, C::ID.as_bytes());
        codec::write_bytes(&mut buf, &self.session_id);
        buf.extend_from_slice(&self.sec_share.index().to_le_bytes());
        buf.extend_from_slice(&codec::serialize_scalar::<C>(&self.sec_share.value()));
        buf.extend_from_slice(&self.rnd_share.index().to_le_bytes());
        buf.extend_from_slice(&codec::serialize_scalar::<C>(&self.rnd_share.value()));
        buf.extend_from_slice(&self.t.to_le_bytes());
        buf.extend_from_slice(&(self.commitments.len() as u32).to_le_bytes());
        for commit in &self.commitments {
            buf.extend_from_slice(&codec::serialize_element::<C>(commit)?);
        }
        Ok(buf)
    }

    /// Reads a deal back from its byte encoding.
    ///
    /// Arbitrary input is rejected with a typed error; decoding never
    /// panics. Trailing bytes are an error.
    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        let mut reader = Reader::new(bytes);

        if reader.read_u8()? != ENCODING_VERSION {
            return Err(Error::MalformedDeal);
        }
        if reader.read_bytes()? != C::ID.as_bytes() {
            return Err(Error::MalformedDeal);
        }

        let session_id = reader.read_bytes()?.to_vec();

        let scalar_len = codec::scalar_len::<C>();
        let sec_i = reader.read_u32()?;
        let sec_v = codec::deserialize_scalar::<C>(reader.take(scalar_len)?)?;
        let rnd_i = reader.read_u32()?;
        let rnd_v = codec::deserialize_scalar::<C>(reader.take(scalar_len)?)?;

        let t = reader.read_u32()?;

        let count = reader.read_u32()? as usize;
        let element_len = codec::element_len::<C>();
        if reader.remaining() != count.checked_mul(element_len).ok_or(Error::MalformedDeal)? {
            return Err(Error::MalformedDeal);
        }
        let mut commitments = Vec::with_capacity(count);
        for _ in 0..count {
            commitments.push(codec::deserialize_element::<C>(reader.take(element_len)?)?);
        }

        reader.finish()?;

        Ok(Self {
            session_id,
            sec_share: PriShare::new(sec_i, sec_v),
            rnd_share: PriShare::new(rnd_i, rnd_v),
            t,
            commitments,
        })
    }
}

impl<C> Debug for Deal<C>
where
    C: Suite,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deal")
            .field("session_id", &hex::encode(&self.session_id))
            .field("sec_share", &self.sec_share)
            .field("rnd_share", &self.rnd_share)
            .field("t", &self.t)
            .field("commitments", &self.commitments.len())
            .finish()
    }
}

/// An encrypted deal, only decipherable by the correct recipient.
#[derive(Clone, Getters)]
pub struct EncryptedDeal<C: Suite> {
    /// Ephemeral Diffie-Hellman key.
    pub(crate) dh_key: Element<C>,
    /// Signature of the DH key by the long-term key of the dealer.
    pub(crate) signature: Vec<u8>,
    /// Nonce used for the encryption.
    pub(crate) nonce: Vec<u8>,
    /// AEAD encryption of the encoded deal.
    pub(crate) cipher: Vec<u8>,
}

impl<C> Debug for EncryptedDeal<C>
where
    C: Suite,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptedDeal")
            .field(
                "dh_key",
                &codec::serialize_element::<C>(&self.dh_key)
                    .map(hex::encode)
                    .unwrap_or_else(|_| "<identity>".to_string()),
            )
            .field("signature", &hex::encode(&self.signature))
            .field("nonce", &hex::encode(&self.nonce))
            .field("cipher", &hex::encode(&self.cipher))
            .finish()
    }
}

/// A response is sent by a verifier to all participants and holds its
/// individual validation or refusal of a deal.
#[derive(Clone, Debug, PartialEq, Getters)]
pub struct Response {
    /// Session identifier of the protocol run this response belongs to.
    pub(crate) session_id: Vec<u8>,
    /// Index of the verifier issuing this response.
    pub(crate) index: u32,
    /// True if the deal was valid.
    pub(crate) approved: bool,
    /// Signature over the response transcript by the verifier.
    pub(crate) signature: Vec<u8>,
}

/// A justification is broadcast by the dealer in response to a complaint. It
/// republishes the deal the complaining verifier originally received so that
/// honest parties can verify the complaint was unjustified.
#[derive(Clone, Debug, PartialEq, Getters)]
pub struct Justification<C: Suite> {
    /// Session identifier of the protocol run this justification belongs to.
    pub(crate) session_id: Vec<u8>,
    /// Index of the verifier who issued the complaint, i.e. the index of the
    /// republished deal.
    pub(crate) index: u32,
    /// Deal in cleartext.
    pub(crate) deal: Deal<C>,
    /// Signature over the justification transcript by the dealer.
    pub(crate) signature: Vec<u8>,
}

/// Returns the minimum threshold that is proven to be secure with this
/// protocol for n participants.
///
/// Setting a lower threshold makes the whole protocol insecure; setting a
/// higher one only makes it harder to reconstruct the secret.
pub fn minimum_t(n: u32) -> u32 {
    (n + 1) / 2
}

fn valid_threshold<C: Suite>(t: u32, verifiers: &[Element<C>]) -> bool {
    t >= 2 && t as usize <= verifiers.len()
}

/// Computes the session identifier binding the dealer, the verifier set, the
/// commitments and the threshold of one protocol run.
///
/// It is a pure function of its inputs, so every participant derives the
/// same identifier.
pub(crate) fn session_id<C: Suite>(
    dealer: &Element<C>,
    verifiers: &[Element<C>],
    commitments: &[Element<C>],
    t: u32,
) -> Result<Vec<u8>, Error> {
    let mut buf = codec::serialize_element::<C>(dealer)?;
    for v in verifiers {
        buf.extend_from_slice(&codec::serialize_element::<C>(v)?);
    }
    for c in commitments {
        buf.extend_from_slice(&codec::serialize_element::<C>(c)?);
    }
    buf.extend_from_slice(&t.to_le_bytes());
    Ok(C::hash(&buf).as_ref().to_vec())
}

/// Derives the second commitment base from the verifier set.
///
/// The point is reproducible from the suite and the verifier set alone and
/// has unknown discrete logarithm with respect to the standard base.
pub(crate) fn derive_commitment_base<C: Suite>(
    verifiers: &[Element<C>],
) -> Result<Element<C>, Error> {
    let mut buf = Vec::new();
    for v in verifiers {
        buf.extend_from_slice(&codec::serialize_element::<C>(v)?);
    }
    let digest = C::hash(&buf);
    Ok(C::hash_to_element(digest.as_ref()))
}

/// Returns the context bytes used as HKDF info and AEAD associated data when
/// encrypting a deal: the marshalled dealer public key followed by the
/// marshalled verifier public keys in order.
pub(crate) fn hkdf_context<C: Suite>(
    dealer: &Element<C>,
    verifiers: &[Element<C>],
) -> Result<Vec<u8>, Error> {
    let mut buf = codec::serialize_element::<C>(dealer)?;
    for v in verifiers {
        buf.extend_from_slice(&codec::serialize_element::<C>(v)?);
    }
    Ok(buf)
}

/// The transcript hash a response signature covers.
fn response_hash<C: Suite>(session_id: &[u8], index: u32, approved: bool) -> C::HashOutput {
    let mut buf = Vec::new();
    buf.extend_from_slice(RESPONSE_DOMAIN);
    buf.extend_from_slice(session_id);
    buf.extend_from_slice(&index.to_le_bytes());
    buf.push(approved as u8);
    C::hash(&buf)
}

/// The transcript hash a justification signature covers.
fn justification_hash<C: Suite>(
    session_id: &[u8],
    index: u32,
    deal: &Deal<C>,
) -> Result<C::HashOutput, Error> {
    let mut buf = Vec::new();
    buf.extend_from_slice(JUSTIFICATION_DOMAIN);
    buf.extend_from_slice(session_id);
    buf.extend_from_slice(&index.to_le_bytes());
    buf.extend_from_slice(&deal.encode()?);
    Ok(C::hash(&buf))
}

/// Collects the deal, commitments and responses of one protocol run and
/// evaluates the certification predicates. It brings common functionality to
/// both the [`Dealer`] and [`Verifier`] roles; each role owns its aggregator
/// exclusively.
#[derive(Clone)]
pub(crate) struct Aggregator<C: Suite> {
    verifiers: Vec<Element<C>>,
    commitments: Vec<Element<C>>,
    responses: BTreeMap<u32, Response>,
    sid: Vec<u8>,
    deal: Option<Deal<C>>,
    t: u32,
    bad_dealer: bool,
}

impl<C> Aggregator<C>
where
    C: Suite,
{
    fn new(
        verifiers: Vec<Element<C>>,
        commitments: Vec<Element<C>>,
        t: u32,
        sid: Vec<u8>,
    ) -> Self {
        Self {
            verifiers,
            commitments,
            responses: BTreeMap::new(),
            sid,
            deal: None,
            t,
            bad_dealer: false,
        }
    }

    /// Analyzes the deal and returns an error if it's incorrect. If
    /// `inclusion` is true, it also returns an error if this is the second
    /// time a deal is analyzed, without touching any state.
    fn verify_deal(&mut self, d: &Deal<C>, inclusion: bool) -> Result<(), Error> {
        if self.deal.is_some() && inclusion {
            return Err(Error::DealAlreadyProcessed);
        }
        if self.deal.is_none() {
            self.commitments = d.commitments.clone();
            self.sid = d.session_id.clone();
            self.deal = Some(d.clone());
        }

        if !valid_threshold::<C>(d.t, &self.verifiers) || d.t != self.t {
            return Err(Error::InvalidThreshold);
        }
        if d.session_id != self.sid {
            return Err(Error::SessionMismatch);
        }

        let fi = &d.sec_share;
        let gi = &d.rnd_share;
        if fi.index() != gi.index() {
            return Err(Error::MismatchedShareIndices);
        }
        if fi.index() as usize >= self.verifiers.len() {
            return Err(Error::IndexOutOfBounds);
        }

        // fi*B + gi*H must match the recorded joint commitment polynomial at i
        let h = derive_commitment_base::<C>(&self.verifiers)?;
        let lhs = <C::Group>::generator() * fi.value() + h * gi.value();
        let commit_poly = PubPoly::new(CommitmentBase::<C>::Standard, self.commitments.clone());
        let rhs = commit_poly.eval(fi.index());
        if lhs != rhs.value() {
            return Err(Error::InvalidShareCommitment);
        }
        Ok(())
    }

    fn verify_response(&mut self, r: &Response) -> Result<(), Error> {
        if r.session_id != self.sid {
            return Err(Error::SessionMismatch);
        }

        let public = self
            .verifiers
            .get(r.index as usize)
            .ok_or(Error::IndexOutOfBounds)?;

        let msg = response_hash::<C>(&r.session_id, r.index, r.approved);
        let signature: Signature<C> = Signature::deserialize(&r.signature)?;
        VerifyingKey::new(*public).verify(msg.as_ref(), &signature)?;

        self.add_response(r.clone())
    }

    fn verify_justification(&mut self, j: &Justification<C>) -> Result<(), Error> {
        if j.index as usize >= self.verifiers.len() {
            return Err(Error::IndexOutOfBounds);
        }
        match self.responses.get(&j.index) {
            None => return Err(Error::MissingComplaint),
            Some(r) if r.approved => return Err(Error::JustificationForApproval),
            Some(_) => {}
        }

        if let Err(e) = self.verify_deal(&j.deal, false) {
            // one bad justification flags the dealer as malicious for good
            self.bad_dealer = true;
            return Err(e);
        }

        if let Some(r) = self.responses.get_mut(&j.index) {
            r.approved = true;
        }
        Ok(())
    }

    fn add_response(&mut self, r: Response) -> Result<(), Error> {
        if r.index as usize >= self.verifiers.len() {
            return Err(Error::IndexOutOfBounds);
        }
        if self.responses.contains_key(&r.index) {
            return Err(Error::DuplicateResponse);
        }
        self.responses.insert(r.index, r);
        Ok(())
    }

    fn enough_approvals(&self) -> bool {
        let approvals = self.responses.values().filter(|r| r.approved).count();
        approvals >= self.t as usize
    }

    fn deal_certified(&self) -> bool {
        let complaints = self.responses.values().filter(|r| !r.approved).count();
        let too_many_complaints = complaints >= self.t as usize || self.bad_dealer;
        self.enough_approvals() && !too_many_complaints
    }
}

/// The dealer creates and distributes the shares of a secret and replies to
/// complaints with justifications.
///
/// It does not have to be trusted by the verifiers. The threshold `t` is the
/// number of shares required to reconstruct the secret; it is HIGHLY
/// RECOMMENDED to use a threshold of at least [`minimum_t`], otherwise the
/// security assumptions of the whole scheme break down.
pub struct Dealer<C: Suite> {
    /// Long-term key of the dealer.
    long: Scalar<C>,
    public: Element<C>,
    /// The secret to be shared.
    secret: Scalar<C>,
    /// Commitments of the secret polynomial over the standard base.
    secret_commitments: Vec<Element<C>>,
    verifiers: Vec<Element<C>>,
    hkdf_context: Vec<u8>,
    t: u32,
    session_id: Vec<u8>,
    /// Deals this dealer has generated, one per verifier.
    pub(crate) deals: Vec<Deal<C>>,
    aggregator: Aggregator<C>,
}

impl<C> Dealer<C>
where
    C: Suite,
{
    /// Returns a dealer able to lead the secret sharing scheme, sharing
    /// `secret` among the owners of the ordered `verifiers` public keys with
    /// reconstruction threshold `t`.
    pub fn new<R: RngCore + CryptoRng>(
        long: Scalar<C>,
        secret: Scalar<C>,
        verifiers: Vec<Element<C>>,
        t: u32,
        rng: &mut R,
    ) -> Result<Self, Error> {
        if !valid_threshold::<C>(t, &verifiers) {
            return Err(Error::InvalidThreshold);
        }

        let h = derive_commitment_base::<C>(&verifiers)?;
        let f = PriPoly::<C>::new(t, Some(secret), rng)?;
        let g = PriPoly::<C>::new(t, None, rng)?;
        let public = <C::Group>::generator() * long;

        let f_commit = f.commit(CommitmentBase::Standard);
        let secret_commitments = f_commit.commitments().to_vec();
        let g_commit = g.commit(CommitmentBase::Point(h));

        // C = F + G: the joint commitments mix the two bases by construction,
        // so they are summed coefficient-wise rather than via PubPoly::add.
        let commitments: Vec<Element<C>> = f_commit
            .commitments()
            .iter()
            .zip(g_commit.commitments())
            .map(|(a, b)| *a + *b)
            .collect();

        let session_id = session_id::<C>(&public, &verifiers, &commitments, t)?;

        let deals = (0..verifiers.len() as u32)
            .map(|i| Deal {
                session_id: session_id.clone(),
                sec_share: f.eval(i),
                rnd_share: g.eval(i),
                t,
                commitments: commitments.clone(),
            })
            .collect();

        let hkdf_context = hkdf_context::<C>(&public, &verifiers)?;
        let aggregator =
            Aggregator::new(verifiers.clone(), commitments, t, session_id.clone());

        Ok(Self {
            long,
            public,
            secret,
            secret_commitments,
            verifiers,
            hkdf_context,
            t,
            session_id,
            deals,
            aggregator,
        })
    }

    /// Returns the deal in cleartext for the verifier at `i`, for tests or
    /// transports that are already trusted.
    pub fn plaintext_deal(&self, i: u32) -> Result<&Deal<C>, Error> {
        self.deals.get(i as usize).ok_or(Error::IndexOutOfBounds)
    }

    /// Returns the encryption of the deal that must be given to the verifier
    /// at index `i`.
    ///
    /// The dealer generates an ephemeral Diffie-Hellman key, signs it with
    /// its long-term key, and derives the sealing key from the shared point
    /// with the verifier. See the channel description in the crate docs.
    pub fn encrypted_deal<R: RngCore + CryptoRng>(
        &self,
        i: u32,
        rng: &mut R,
    ) -> Result<EncryptedDeal<C>, Error> {
        let recipient = self
            .verifiers
            .get(i as usize)
            .ok_or(Error::IndexOutOfBounds)?;
        channel::encrypt_deal(
            &self.long,
            recipient,
            &self.deals[i as usize],
            &self.hkdf_context,
            rng,
        )
    }

    /// Calls [`Dealer::encrypted_deal`] for each index of the verifier set.
    /// Each index in the returned list corresponds to the index in the list
    /// of verifiers.
    pub fn encrypted_deals<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<EncryptedDeal<C>>, Error> {
        (0..self.verifiers.len() as u32)
            .map(|i| self.encrypted_deal(i, rng))
            .collect()
    }

    /// Analyzes the given response. A valid complaint yields a
    /// [`Justification`] that must be broadcast to every participant; a valid
    /// approval yields `None`. An invalid response is returned as an error
    /// and will equally be ignored by the verifiers.
    pub fn process_response<R: RngCore + CryptoRng>(
        &mut self,
        r: &Response,
        rng: &mut R,
    ) -> Result<Option<Justification<C>>, Error> {
        self.aggregator.verify_response(r)?;

        if r.approved {
            return Ok(None);
        }

        // the index was bounds-checked while verifying the response
        let deal = self.deals[r.index as usize].clone();
        let msg = justification_hash::<C>(&self.session_id, r.index, &deal)?;
        let signature = SigningKey::<C>::from_scalar(self.long)
            .sign(rng, msg.as_ref())?
            .serialize()?;

        Ok(Some(Justification {
            session_id: self.session_id.clone(),
            index: r.index,
            deal,
            signature,
        }))
    }

    /// Returns the commitment of the secret being shared by this dealer, or
    /// `None` as long as the deal is short of approvals or uncertified.
    pub fn secret_commit(&self) -> Option<Element<C>> {
        if !self.enough_approvals() || !self.deal_certified() {
            return None;
        }
        Some(<C::Group>::generator() * self.secret)
    }

    /// Returns the commitments of the coefficients of the secret polynomial,
    /// or `None` as long as the deal is short of approvals or uncertified.
    pub fn commits(&self) -> Option<&[Element<C>]> {
        if !self.enough_approvals() || !self.deal_certified() {
            return None;
        }
        Some(&self.secret_commitments)
    }

    /// Returns true once at least t verifiers have approved their deal.
    pub fn enough_approvals(&self) -> bool {
        self.aggregator.enough_approvals()
    }

    /// Returns true if there have been fewer than t complaints, all
    /// justifications were correct and [`Dealer::enough_approvals`] holds.
    pub fn deal_certified(&self) -> bool {
        self.aggregator.deal_certified()
    }

    /// Returns the session identifier generated by this dealer for this
    /// protocol run.
    pub fn session_id(&self) -> &[u8] {
        &self.session_id
    }

    /// Returns the reconstruction threshold of this protocol run.
    pub fn threshold(&self) -> u32 {
        self.t
    }

    /// Returns the long-term key pair used by this dealer.
    pub fn key(&self) -> (Scalar<C>, Element<C>) {
        (self.long, self.public)
    }
}

impl<C> Zeroize for Dealer<C>
where
    C: Suite,
{
    fn zeroize(&mut self) {
        let zero = <<C::Group as Group>::Field>::zero();
        self.long = zero;
        self.secret = zero;
        for deal in self.deals.iter_mut() {
            deal.sec_share.zeroize();
            deal.rnd_share.zeroize();
        }
    }
}

impl<C> Drop for Dealer<C>
where
    C: Suite,
{
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// A verifier receives a deal from a dealer, can reply with a complaint, and
/// can collaborate with other verifiers to reconstruct a secret.
pub struct Verifier<C: Suite> {
    /// Long-term key of the verifier.
    long: Scalar<C>,
    public: Element<C>,
    dealer: Element<C>,
    index: u32,
    verifiers: Vec<Element<C>>,
    hkdf_context: Vec<u8>,
    aggregator: Option<Aggregator<C>>,
}

impl<C> Verifier<C>
where
    C: Suite,
{
    /// Returns a verifier from its long-term secret key, the long-term
    /// dealer public key and the ordered list of verifier public keys, which
    /// MUST include the public key of this verifier. Fails with
    /// [`Error::NotInVerifierSet`] otherwise.
    pub fn new(
        long: Scalar<C>,
        dealer: Element<C>,
        verifiers: Vec<Element<C>>,
    ) -> Result<Self, Error> {
        let public = <C::Group>::generator() * long;
        let index = verifiers
            .iter()
            .position(|v| *v == public)
            .ok_or(Error::NotInVerifierSet)? as u32;
        let hkdf_context = hkdf_context::<C>(&dealer, &verifiers)?;

        Ok(Self {
            long,
            public,
            dealer,
            index,
            verifiers,
            hkdf_context,
            aggregator: None,
        })
    }

    /// Decrypts the deal received from the dealer and checks it.
    ///
    /// If the deal is valid, i.e. the verifier can verify its shares against
    /// the public commitments and the dealer's signature is valid, an
    /// approval response is returned. If the deal itself is invalid, a
    /// complaint response is returned instead. Either way the response must
    /// be broadcast to every participant including the dealer.
    ///
    /// If the deal cannot be decrypted, has already been received, or the
    /// signing of the response fails, an error is returned without any
    /// response.
    pub fn process_encrypted_deal<R: RngCore + CryptoRng>(
        &mut self,
        encrypted: &EncryptedDeal<C>,
        rng: &mut R,
    ) -> Result<Response, Error> {
        let d = channel::decrypt_deal(&self.long, &self.dealer, encrypted, &self.hkdf_context)?;
        if d.sec_share.index() != self.index {
            return Err(Error::WrongIndex);
        }

        let sid = session_id::<C>(&self.dealer, &self.verifiers, &d.commitments, d.t)?;
        if sid != d.session_id {
            return Err(Error::SessionMismatch);
        }

        if self.aggregator.is_none() {
            self.aggregator = Some(Aggregator::new(
                self.verifiers.clone(),
                d.commitments.clone(),
                d.t,
                d.session_id.clone(),
            ));
        }
        let aggregator = self.aggregator.as_mut().expect("just initialized");

        let approved = match aggregator.verify_deal(&d, true) {
            Ok(()) => true,
            // a duplicate delivery is not a complaint: no response at all
            Err(Error::DealAlreadyProcessed) => return Err(Error::DealAlreadyProcessed),
            Err(_) => false,
        };

        let msg = response_hash::<C>(&sid, self.index, approved);
        let signature = SigningKey::<C>::from_scalar(self.long)
            .sign(rng, msg.as_ref())?
            .serialize()?;
        let response = Response {
            session_id: sid,
            index: self.index,
            approved,
            signature,
        };

        aggregator.add_response(response.clone())?;
        Ok(response)
    }

    /// Analyzes a response from another verifier. If it's a valid complaint,
    /// this verifier should expect to see a [`Justification`] from the
    /// dealer. Call [`Verifier::deal_certified`] to check whether the whole
    /// protocol is finished.
    pub fn process_response(&mut self, r: &Response) -> Result<(), Error> {
        self.aggregator
            .as_mut()
            .ok_or(Error::MissingDeal)?
            .verify_response(r)
    }

    /// Analyzes a justification from the dealer. An error means the
    /// justification itself did not hold, which flags the dealer as
    /// malicious; a success flips the matching complaint into an approval.
    pub fn process_justification(&mut self, j: &Justification<C>) -> Result<(), Error> {
        self.aggregator
            .as_mut()
            .ok_or(Error::MissingDeal)?
            .verify_justification(j)
    }

    /// Returns the deal this verifier has received, or `None` as long as the
    /// deal is short of approvals or uncertified.
    pub fn deal(&self) -> Option<&Deal<C>> {
        if !self.enough_approvals() || !self.deal_certified() {
            return None;
        }
        self.aggregator.as_ref().and_then(|a| a.deal.as_ref())
    }

    /// Returns true once at least t verifiers have approved their deal.
    pub fn enough_approvals(&self) -> bool {
        self.aggregator
            .as_ref()
            .map_or(false, |a| a.enough_approvals())
    }

    /// Returns true if there have been fewer than t complaints, all
    /// justifications were correct and [`Verifier::enough_approvals`] holds.
    pub fn deal_certified(&self) -> bool {
        self.aggregator
            .as_ref()
            .map_or(false, |a| a.deal_certified())
    }

    /// Returns the session identifier of this protocol run, or `None` if no
    /// deal has been received yet.
    pub fn session_id(&self) -> Option<&[u8]> {
        self.aggregator.as_ref().map(|a| a.sid.as_slice())
    }

    /// Returns the index of this verifier in the list of participants used
    /// during this run of the protocol.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the long-term key pair this verifier is using during this
    /// protocol run.
    pub fn key(&self) -> (Scalar<C>, Element<C>) {
        (self.long, self.public)
    }
}

impl<C> Zeroize for Verifier<C>
where
    C: Suite,
{
    fn zeroize(&mut self) {
        self.long = <<C::Group as Group>::Field>::zero();
        if let Some(aggregator) = self.aggregator.as_mut() {
            if let Some(deal) = aggregator.deal.as_mut() {
                deal.sec_share.zeroize();
                deal.rnd_share.zeroize();
            }
        }
    }
}

impl<C> Drop for Verifier<C>
where
    C: Suite,
{
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Recovers the secret shared by a dealer by gathering at least t deals from
/// certified verifiers.
///
/// Returns an error if fewer than t deals are supplied or if the deals do
/// not all carry the same session identifier.
pub fn recover_secret<C: Suite>(deals: &[Deal<C>], n: u32, t: u32) -> Result<Scalar<C>, Error> {
    let first = deals.first().ok_or(Error::InsufficientShares)?;

    let mut shares: Vec<Option<PriShare<C>>> = vec![None; n as usize];
    for deal in deals {
        if deal.session_id != first.session_id {
            return Err(Error::SessionMismatch);
        }
        let slot = shares
            .get_mut(deal.sec_share.index() as usize)
            .ok_or(Error::IndexOutOfBounds)?;
        *slot = Some(deal.sec_share);
    }

    poly::recover_secret(&shares, t)
}
