//! One-time code generation for password resets.

use rand::Rng;

/// Number of digits in a reset code.
pub const OTP_LENGTH: usize = 6;

/// Generates a random 6-digit numeric one-time code.
///
/// Leading zeros are allowed, so the code is always exactly six characters.
pub fn generate_otp() -> String {
    let mut rng = rand::rng();

    (0..OTP_LENGTH)
        .map(|_| char::from(b'0' + rng.random_range(0..10) as u8))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_is_six_digits() {
        for _ in 0..100 {
            let otp = generate_otp();
            assert_eq!(otp.len(), OTP_LENGTH);
            assert!(otp.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_otp_varies() {
        let first = generate_otp();
        let distinct = (0..50).map(|_| generate_otp()).any(|o| o != first);
        assert!(distinct);
    }
}
