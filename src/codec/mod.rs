// In: src/codec/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Codec Layer
// ====================================================================================
//
// The `codec` is the sole public-facing API of the seqtoken library. It composes
// the pure kernels into the two external operations.
//
// Data Flow (Encode):
//
//   [encode] -> frequency::FrequencyTable (tally + domain validation)
//       |
//       `-> planner::select_mode (grouped vs raw, pure cost heuristic)
//       |
//       `-> encoder::encode_fields (mode flag + fixed-width fields -> BitWriter)
//       |
//       `-> kernels::bitpack (pad to byte boundary, pack MSB-first)
//       |
//       `-> kernels::transcode (bytes -> base64 token)
//
// Data Flow (Decode):
//
//   [decode] -> kernels::transcode (base64 token -> bytes)
//       |
//       `-> decoder::decode_fields (mode flag, field groups, trailing-zero trim)
//
// ====================================================================================

pub(crate) mod decoder;
pub(crate) mod encoder;
pub(crate) mod frequency;
pub mod planner;

use crate::config::SeqTokenConfig;
use crate::error::SeqTokenError;
use crate::kernels::transcode;

//==================================================================================
// 1. Wire-Format Constants
//==================================================================================

/// Smallest encodable value.
pub const VALUE_MIN: u16 = 1;
/// Largest encodable value. The 9-bit value field could carry up to 511, but
/// the domain stops here; the headroom is what makes the trailing-zero trim
/// safe.
pub const VALUE_MAX: u16 = 300;
/// Width of every value field.
pub const VALUE_BITS: u8 = 9;
/// Width of every grouped-mode count field.
pub const COUNT_BITS: u8 = 10;
/// Largest representable repetition count.
pub const COUNT_MAX: u64 = (1u64 << COUNT_BITS) - 1;
/// Bits per grouped-mode (value, count) pair.
pub const GROUPED_PAIR_BITS: usize = VALUE_BITS as usize + COUNT_BITS as usize;

//==================================================================================
// 2. Public Operations
//==================================================================================

/// Encodes a sequence of values in [1, 300] into a base64 token, using the
/// default configuration.
pub fn encode(values: &[u16]) -> Result<String, SeqTokenError> {
    encode_with_config(values, &SeqTokenConfig::default())
}

/// Encodes a sequence of values in [1, 300] into a base64 token.
pub fn encode_with_config(
    values: &[u16],
    config: &SeqTokenConfig,
) -> Result<String, SeqTokenError> {
    // 1. Tally occurrences and validate the domain (fail-fast).
    let table = frequency::FrequencyTable::build(values)?;

    // 2. Commit the payload to the cheaper field layout.
    let mode = planner::select_mode(table.distinct_count(), values.len());

    // 3. Lay the fields onto the bit stream.
    let writer = encoder::encode_fields(values, &table, mode, config)?;

    // 4. Pack to bytes and render the text envelope.
    let payload = writer.into_bytes();
    Ok(transcode::to_token(&payload))
}

/// Decodes a base64 token back into a value sequence, using the default
/// (strict) configuration.
///
/// The result's multiset of values equals the encoded multiset; element order
/// is preserved only when the token was encoded in raw mode.
pub fn decode(token: &str) -> Result<Vec<u16>, SeqTokenError> {
    decode_with_config(token, &SeqTokenConfig::default())
}

/// Decodes a base64 token back into a value sequence.
pub fn decode_with_config(
    token: &str,
    config: &SeqTokenConfig,
) -> Result<Vec<u16>, SeqTokenError> {
    let payload = transcode::from_token(token)?;
    decoder::decode_fields(&payload, config)
}
