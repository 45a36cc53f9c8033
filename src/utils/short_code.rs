//! Short code generation for bookmark aliases.
//!
//! Codes are random, URL-safe, and checked for uniqueness by the caller
//! (with the database unique constraint as the last line of defense).

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
///
/// 6 bytes encode to an 8-character URL-safe code, compact enough for short
/// links while keeping the collision probability negligible.
const CODE_LENGTH_BYTES: usize = 6;

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing an 8-character code.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
