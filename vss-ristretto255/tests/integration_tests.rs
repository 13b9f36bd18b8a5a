use rand::thread_rng;
use vss_ristretto255::Ristretto255Sha512;

#[test]
fn check_x_coordinate() {
    vss_core::tests::poly::check_x_coordinate::<Ristretto255Sha512>();
}

#[test]
fn check_secret_recovery() {
    vss_core::tests::poly::check_secret_recovery::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_secret_recovery_with_gaps() {
    vss_core::tests::poly::check_secret_recovery_with_gaps::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_insufficient_shares() {
    vss_core::tests::poly::check_insufficient_shares::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_duplicated_share_indices() {
    vss_core::tests::poly::check_duplicated_share_indices::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_extra_invalid_share_ignored() {
    vss_core::tests::poly::check_extra_invalid_share_ignored::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_share_verification() {
    vss_core::tests::poly::check_share_verification::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_poly_addition() {
    vss_core::tests::poly::check_poly_addition::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_pub_poly_addition() {
    vss_core::tests::poly::check_pub_poly_addition::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_commit_recovery() {
    vss_core::tests::poly::check_commit_recovery::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_zero_threshold() {
    vss_core::tests::poly::check_zero_threshold::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_full_protocol() {
    vss_core::tests::vss::check_full_protocol::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_dealer_threshold_validation() {
    vss_core::tests::vss::check_dealer_threshold_validation::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_verifier_membership() {
    vss_core::tests::vss::check_verifier_membership::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_session_id_properties() {
    vss_core::tests::vss::check_session_id_properties::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_deal_roundtrip() {
    vss_core::tests::vss::check_deal_roundtrip::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_tampered_encrypted_deal() {
    vss_core::tests::vss::check_tampered_encrypted_deal::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_minority_unresponsive() {
    vss_core::tests::vss::check_minority_unresponsive::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_deal_already_processed() {
    vss_core::tests::vss::check_deal_already_processed::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_wrong_index_deal() {
    vss_core::tests::vss::check_wrong_index_deal::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_approval_quorum() {
    vss_core::tests::vss::check_approval_quorum::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_duplicate_response() {
    vss_core::tests::vss::check_duplicate_response::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_wrong_session_response() {
    vss_core::tests::vss::check_wrong_session_response::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_response_signature_tamper() {
    vss_core::tests::vss::check_response_signature_tamper::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_response_before_deal() {
    vss_core::tests::vss::check_response_before_deal::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_complaint_then_justification() {
    vss_core::tests::vss::check_complaint_then_justification::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_bad_dealer_latch() {
    vss_core::tests::vss::check_bad_dealer_latch::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_justification_guards() {
    vss_core::tests::vss::check_justification_guards::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_recover_insufficient() {
    vss_core::tests::vss::check_recover_insufficient::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_recover_session_mismatch() {
    vss_core::tests::vss::check_recover_session_mismatch::<Ristretto255Sha512, _>(thread_rng());
}

#[test]
fn check_schnorr_signatures() {
    let mut rng = thread_rng();
    let signing_key = vss_ristretto255::SigningKey::new(&mut rng);
    let verifying_key = vss_ristretto255::VerifyingKey::from(signing_key);

    let msg = b"deal transcript";
    let signature = signing_key.sign(&mut rng, msg).unwrap();
    assert!(verifying_key.verify(msg, &signature).is_ok());

    // a different message does not verify
    assert!(verifying_key.verify(b"other transcript", &signature).is_err());

    // neither does a different key
    let other_key = vss_ristretto255::SigningKey::new(&mut rng);
    let other_verifying = vss_ristretto255::VerifyingKey::from(other_key);
    assert!(other_verifying.verify(msg, &signature).is_err());

    // signatures round-trip through their encoding
    let bytes = signature.serialize().unwrap();
    let decoded = vss_ristretto255::Signature::deserialize(&bytes).unwrap();
    assert!(verifying_key.verify(msg, &decoded).is_ok());

    // and a corrupted encoding is rejected one way or another
    let mut bad = bytes.clone();
    bad[0] ^= 1;
    match vss_ristretto255::Signature::deserialize(&bad) {
        Err(_) => {}
        Ok(sig) => assert!(verifying_key.verify(msg, &sig).is_err()),
    }
}
