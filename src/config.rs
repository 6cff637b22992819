// In: src/config.rs

//! The single source of truth for all seqtoken codec configuration.
//!
//! This module defines the unified `SeqTokenConfig` struct, created once at the
//! application boundary and passed by reference into the `*_with_config` entry
//! points. The plain `encode`/`decode` functions use `SeqTokenConfig::default()`.
//!
//! The two policies below are the codec's only tunables; both exist because the
//! reference behavior they replace was silent (a wrapping count field and a
//! zero-filling decoder) and callers migrating off it may still depend on the
//! tolerant reading.

use serde::{Deserialize, Serialize};

//==================================================================================
// I. Core Configuration Enums & Structs
//==================================================================================

/// Defines how encode reacts to a grouped-mode repetition count that does not
/// fit the 10-bit count field.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CountOverflowPolicy {
    /// **Default:** fail the whole encode with `CountOverflow`. The wire format
    /// is unchanged; counts of 1024 or more are simply not representable.
    #[default]
    Reject,
}

/// Defines how decode treats a bit stream whose tail cannot form a complete
/// field group.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DecodeStrictness {
    /// **Default:** trailing bits beyond the last complete field group must all
    /// be zero (byte padding). Any set bit there fails with `TruncatedStream`.
    #[default]
    Strict,

    /// Missing bits are read as zero and a partial trailing group still yields
    /// an element, exactly as the reference decoder behaved. The trailing-zero
    /// trim then removes the all-zero artifacts. Intended only for tokens from
    /// legacy producers; silently tolerates corruption.
    Lenient,
}

/// The unified configuration object for the seqtoken codec.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SeqTokenConfig {
    /// Policy for grouped-mode counts that exceed the count field.
    #[serde(default)]
    pub count_overflow: CountOverflowPolicy,

    /// Policy for incomplete trailing field groups during decode.
    #[serde(default)]
    pub decode: DecodeStrictness,
}

//==================================================================================
// II. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_strict_and_rejecting() {
        let config = SeqTokenConfig::default();
        assert_eq!(config.count_overflow, CountOverflowPolicy::Reject);
        assert_eq!(config.decode, DecodeStrictness::Strict);
    }

    #[test]
    fn test_config_deserializes_from_snake_case_json() {
        let config: SeqTokenConfig =
            serde_json::from_str(r#"{"decode": "lenient"}"#).unwrap();
        assert_eq!(config.decode, DecodeStrictness::Lenient);
        assert_eq!(config.count_overflow, CountOverflowPolicy::Reject);
    }
}
