//! Random shortcode generation.
//!
//! Generated codes are sampled uniformly with replacement from the same
//! alphabet [`is_valid_shortcode`](super::validation::is_valid_shortcode)
//! accepts, so every generated code is valid by construction.

use rand::Rng;

use super::validation::SHORTCODE_LENGTH;

/// Letters, digits and underscore.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_";

/// Generates a random six-character shortcode.
///
/// Collisions are not retried here; the caller reports them like any other
/// conflicting shortcode.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..SHORTCODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
