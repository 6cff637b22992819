//! This module contains the pure, stateless kernel for the binary/text
//! boundary of the codec.
//!
//! It renders a packed byte buffer as a printable, ASCII-safe token and back,
//! using standard base64 with padding. It has no knowledge of bit-field
//! semantics; everything above it sees only bytes in, text out. This module is
//! a safe, panic-free wrapper around the `base64` crate.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::SeqTokenError;

//==================================================================================
// 1. Public API
//==================================================================================

/// Renders a packed payload as a base64 token (standard alphabet, padded).
pub fn to_token(payload: &[u8]) -> String {
    STANDARD.encode(payload)
}

/// Decodes a base64 token back into the packed payload.
/// Fails with `Format` when the token is not valid standard base64.
pub fn from_token(token: &str) -> Result<Vec<u8>, SeqTokenError> {
    Ok(STANDARD.decode(token)?)
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        let payload = vec![0x80, 0x40, 0x40];
        let token = to_token(&payload);
        assert_eq!(token, "gEBA");
        assert_eq!(from_token(&token).unwrap(), payload);
    }

    #[test]
    fn test_invalid_token_is_rejected() {
        let result = from_token("not base64!!");
        assert!(matches!(result, Err(SeqTokenError::Format(_))));
    }

    #[test]
    fn test_empty_payload_yields_empty_token() {
        assert_eq!(to_token(&[]), "");
        assert_eq!(from_token("").unwrap(), Vec::<u8>::new());
    }
}
