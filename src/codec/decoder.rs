//! The field decoder: reads fixed-width integer fields back off the bit
//! stream and rebuilds the sequence.
//!
//! The first bit is the mode flag. Grouped mode reads `(value:9, count:10)`
//! pairs and expands each into `count` copies of `value`, preserving pair
//! order; raw mode reads 9-bit values in order. Strict decode stops at the
//! last complete field group and requires the tail to be pure zero padding;
//! lenient decode reproduces the reference zero-fill tolerance. Either way,
//! trailing zero elements are trimmed, which is valid only because
//! legitimate values are never 0.

use crate::codec::planner::Mode;
use crate::codec::{COUNT_BITS, GROUPED_PAIR_BITS, VALUE_BITS};
use crate::config::{DecodeStrictness, SeqTokenConfig};
use crate::error::SeqTokenError;
use crate::kernels::bitpack::BitReader;

//==================================================================================
// 1. Public API
//==================================================================================

/// Rebuilds the value sequence from a packed payload.
pub fn decode_fields(
    payload: &[u8],
    config: &SeqTokenConfig,
) -> Result<Vec<u16>, SeqTokenError> {
    let mut reader = BitReader::new(payload);

    // An empty payload carries no mode flag. The reference decoder treated it
    // as an empty raw stream; strict mode calls it what it is.
    if reader.remaining() == 0 {
        return match config.decode {
            DecodeStrictness::Strict => Err(SeqTokenError::TruncatedStream {
                needed: 1,
                available: 0,
            }),
            DecodeStrictness::Lenient => Ok(Vec::new()),
        };
    }

    let mode = Mode::from_flag_bit(reader.read_bit()?);

    let mut output = Vec::new();
    match config.decode {
        DecodeStrictness::Strict => decode_strict(&mut reader, mode, &mut output)?,
        DecodeStrictness::Lenient => decode_lenient(&mut reader, mode, &mut output)?,
    }

    // Trailing-zero trim: residual padding artifacts decode to 0, which no
    // legitimate element can be.
    while output.last() == Some(&0) {
        output.pop();
    }

    Ok(output)
}

//==================================================================================
// 2. Strict Path
//==================================================================================

fn decode_strict(
    reader: &mut BitReader,
    mode: Mode,
    output: &mut Vec<u16>,
) -> Result<(), SeqTokenError> {
    let group_bits = match mode {
        Mode::Grouped => GROUPED_PAIR_BITS,
        Mode::Raw => VALUE_BITS as usize,
    };

    while reader.remaining() >= group_bits {
        let value = reader.read_field::<u16>(VALUE_BITS)?;
        match mode {
            Mode::Grouped => {
                let count = reader.read_field::<u16>(COUNT_BITS)?;
                for _ in 0..count {
                    output.push(value);
                }
            }
            Mode::Raw => output.push(value),
        }
    }

    // Whatever is left must be byte-boundary padding. A set bit here means
    // the stream lost the tail of a field group.
    if !reader.remainder_is_zero() {
        return Err(SeqTokenError::TruncatedStream {
            needed: group_bits,
            available: reader.remaining(),
        });
    }
    Ok(())
}

//==================================================================================
// 3. Lenient Path (reference zero-fill tolerance)
//==================================================================================

fn decode_lenient(
    reader: &mut BitReader,
    mode: Mode,
    output: &mut Vec<u16>,
) -> Result<(), SeqTokenError> {
    while reader.remaining() > 0 {
        let value = reader.read_field_zero_filled::<u16>(VALUE_BITS)?;
        match mode {
            Mode::Grouped => {
                let count = reader.read_field_zero_filled::<u16>(COUNT_BITS)?;
                for _ in 0..count {
                    output.push(value);
                }
            }
            Mode::Raw => output.push(value),
        }
    }
    Ok(())
}

//==================================================================================
// 4. Unit Tests
//==================================================================================
