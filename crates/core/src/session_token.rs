//! Session token generation.

use rand::Rng;

/// Length of a generated session token.
pub const TOKEN_LENGTH: usize = 32;

/// Generate a new random session token.
///
/// Characters are drawn from `[A-Za-z0-9]` using the thread-local CSPRNG.
pub fn generate() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}
