//! Generic test functions, usable by any concrete [`Suite`] instantiation.
//!
//! Suite crates call these from their own integration tests, passing their
//! suite as the type parameter.

use rand_core::{CryptoRng, RngCore};

use crate::{random_nonzero, Element, Group, Scalar, Suite};


/// Generates a random long-term key pair.
pub fn generate_keypair<C: Suite, R: RngCore + CryptoRng>(
    rng: &mut R,
) -> (Scalar<C>, Element<C>) {
    let secret = random_nonzero::<C, R>(rng);
    let public = <C::Group>::generator() * secret;
    (secret, public)
}
