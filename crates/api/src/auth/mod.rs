//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`cookies`] -- the `session_id` cookie issued at login and cleared at logout.

pub mod cookies;
pub mod password;
