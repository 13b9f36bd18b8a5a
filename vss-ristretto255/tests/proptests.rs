use proptest::prelude::*;
use rand::thread_rng;
use vss_ristretto255::{Deal, Dealer, Verifier};

fn sample_deal() -> Deal {
    let mut rng = thread_rng();
    let dealer_sec = curve25519_dalek::scalar::Scalar::random(&mut rng);
    let secret = curve25519_dalek::scalar::Scalar::random(&mut rng);

    let mut verifier_pubs = Vec::new();
    for _ in 0..5 {
        let sec = curve25519_dalek::scalar::Scalar::random(&mut rng);
        verifier_pubs.push(curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT * sec);
    }

    let dealer = Dealer::new(dealer_sec, secret, verifier_pubs, 3, &mut rng).unwrap();
    dealer.plaintext_deal(0).unwrap().clone()
}

proptest! {
    /// Decoding arbitrary bytes as a deal must fail cleanly, never panic.
    #[test]
    fn deal_decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let _ = Deal::decode(&bytes);
    }

    /// Single-byte corruption of a valid encoding must not round-trip into
    /// the original deal.
    #[test]
    fn deal_decode_corrupted(index in 0usize..200, mask in 1u8..=255) {
        let deal = sample_deal();
        let mut encoded = deal.encode().unwrap();
        let index = index % encoded.len();
        encoded[index] ^= mask;
        if let Ok(decoded) = Deal::decode(&encoded) {
            prop_assert!(decoded != deal);
        }
    }
}

#[test]
fn deal_roundtrip() {
    let deal = sample_deal();
    let encoded = deal.encode().unwrap();
    let decoded = Deal::decode(&encoded).unwrap();
    assert_eq!(decoded, deal);
}

#[test]
fn verifier_wrong_key_rejected() {
    let mut rng = thread_rng();
    let dealer_sec = curve25519_dalek::scalar::Scalar::random(&mut rng);
    let dealer_pub = curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT * dealer_sec;

    let mut verifier_pubs = Vec::new();
    for _ in 0..5 {
        let sec = curve25519_dalek::scalar::Scalar::random(&mut rng);
        verifier_pubs.push(curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT * sec);
    }

    let stranger = curve25519_dalek::scalar::Scalar::random(&mut rng);
    assert!(Verifier::new(stranger, dealer_pub, verifier_pubs).is_err());
}
