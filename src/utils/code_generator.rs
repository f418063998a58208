//! Short code generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Number of characters in a generated short code.
pub const CODE_LENGTH: usize = 6;

/// Generates a random short code.
///
/// Draws `CODE_LENGTH` characters independently and uniformly from
/// `[A-Za-z0-9]`, giving a space of 62^6 (~56.8 billion) codes. Uniqueness
/// is not guaranteed here; callers rely on the store's atomic
/// check-and-insert and redraw on collision.
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}
