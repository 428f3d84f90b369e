//! Identifier generation
//!
//! Ids are 16 characters drawn from the URL-safe alphabet `A-Za-z0-9_-`.
//! The generator never checks for collisions; uniqueness is the primary
//! key's job and a clash is reported by the repository as an invariant
//! violation.

use rand::Rng;

/// Length of every generated identifier
pub const ID_LENGTH: usize = 16;

/// URL-safe alphabet (64 symbols)
pub const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generate a new random identifier
pub fn generate() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect()
}
