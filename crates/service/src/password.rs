//! Reversible password encoding (standard Base64 over UTF-8 bytes).
//!
//! This is obfuscation only. It offers no confidentiality and stands in for
//! a one-way credential hash.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::errors::ServiceError;

pub fn encode_password(password: &str) -> String {
    STANDARD.encode(password.as_bytes())
}

pub fn decode_password(encoded: &str) -> Result<String, ServiceError> {
    let bytes = STANDARD
        .decode(encoded.as_bytes())
        .map_err(|e| ServiceError::Validation(format!("malformed encoded password: {e}")))?;
    String::from_utf8(bytes).map_err(|e| ServiceError::Validation(format!("encoded password is not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_inverts_encode() {
        for p in ["", "a", "secret123", "pässwörd ✓", "with spaces and = signs=="] {
            assert_eq!(decode_password(&encode_password(p)).unwrap(), p);
        }
    }

    #[test]
    fn encodes_to_standard_base64() {
        assert_eq!(encode_password("password"), "cGFzc3dvcmQ=");
        assert_eq!(encode_password(""), "");
    }

    #[test]
    fn malformed_input_is_a_validation_error() {
        assert!(matches!(decode_password("***"), Err(ServiceError::Validation(_))));
    }
}
