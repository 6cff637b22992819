//! This module contains the pure, stateless kernels for converting between a
//! logical bit stream and a packed byte buffer.
//!
//! Bits are laid out most-significant-bit-first: the first bit written lands in
//! the high bit of byte zero, and the final byte is zero-padded. `BitWriter` is
//! the append-only encode side; `BitReader` is the position-indexed decode side
//! with both strict and zero-filling field reads. This module is PURE RUST and
//! knows nothing about field semantics.

use bitvec::prelude::*;
use num_traits::{PrimInt, ToPrimitive, Unsigned};
use std::convert::TryFrom;

use crate::error::SeqTokenError;

//==================================================================================
// 1. BitWriter (Encode Side)
//==================================================================================

/// An append-only, MSB-first bit stream.
#[derive(Debug, Default)]
pub struct BitWriter {
    bits: BitVec<u8, Msb0>,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(bits),
        }
    }

    /// Appends a single bit to the stream.
    pub fn write_bit(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    /// Appends the low `width` bits of `value`, most significant first.
    /// Fails if the value does not fit the field.
    pub fn write_field<T>(&mut self, value: T, width: u8) -> Result<(), SeqTokenError>
    where
        T: PrimInt + Unsigned + ToPrimitive,
    {
        if width == 0 || width > 64 {
            return Err(SeqTokenError::FieldOverflow(0, width));
        }

        let val_u64 = value.to_u64().ok_or_else(|| {
            SeqTokenError::InternalError("failed to widen field value to u64".to_string())
        })?;
        let max_val = if width >= 64 {
            u64::MAX
        } else {
            (1u64 << width) - 1
        };
        if val_u64 > max_val {
            return Err(SeqTokenError::FieldOverflow(val_u64, width));
        }

        self.bits
            .extend_from_bitslice(&val_u64.view_bits::<Msb0>()[64 - width as usize..]);
        Ok(())
    }

    /// Number of bits written so far.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Pads the stream with zero bits to the next byte boundary and returns the
    /// packed bytes. Padding bits are never meaningful data.
    pub fn into_bytes(mut self) -> Vec<u8> {
        while self.bits.len() % 8 != 0 {
            self.bits.push(false);
        }
        self.bits.into_vec()
    }
}

//==================================================================================
// 2. BitReader (Decode Side)
//==================================================================================

/// A position-indexed reader over a packed, MSB-first byte buffer.
pub struct BitReader<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    pos: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bits: BitSlice::from_slice(bytes),
            pos: 0,
        }
    }

    /// Number of unread bits.
    pub fn remaining(&self) -> usize {
        self.bits.len() - self.pos
    }

    /// Consumes a single bit.
    pub fn read_bit(&mut self) -> Result<bool, SeqTokenError> {
        if self.remaining() < 1 {
            return Err(SeqTokenError::TruncatedStream {
                needed: 1,
                available: 0,
            });
        }
        let bit = self.bits[self.pos];
        self.pos += 1;
        Ok(bit)
    }

    /// Consumes exactly `width` bits and reassembles them MSB-first.
    /// Fails if fewer than `width` bits remain.
    pub fn read_field<T>(&mut self, width: u8) -> Result<T, SeqTokenError>
    where
        T: PrimInt + Unsigned + TryFrom<u64>,
    {
        let width = width as usize;
        if self.remaining() < width {
            return Err(SeqTokenError::TruncatedStream {
                needed: width,
                available: self.remaining(),
            });
        }

        let mut container = 0u64;
        for bit in self.bits[self.pos..self.pos + width].iter().by_vals() {
            container = (container << 1) | (bit as u64);
        }
        self.pos += width;

        T::try_from(container).map_err(|_| {
            SeqTokenError::InternalError("field value does not fit target type".to_string())
        })
    }

    /// Consumes up to `width` bits, treating missing bits as zero. Bits are
    /// placed at fixed positions from the top of the field, so a truncated read
    /// leaves the low positions zero, matching the tolerant reference decoder.
    pub fn read_field_zero_filled<T>(&mut self, width: u8) -> Result<T, SeqTokenError>
    where
        T: PrimInt + Unsigned + TryFrom<u64>,
    {
        let width = width as usize;
        let take = self.remaining().min(width);

        let mut container = 0u64;
        for (i, bit) in self.bits[self.pos..self.pos + take]
            .iter()
            .by_vals()
            .enumerate()
        {
            if bit {
                container |= 1 << (width - 1 - i);
            }
        }
        self.pos += take;

        T::try_from(container).map_err(|_| {
            SeqTokenError::InternalError("field value does not fit target type".to_string())
        })
    }

    /// Returns `true` if every unread bit is zero, i.e. the tail is pure
    /// byte-boundary padding.
    pub fn remainder_is_zero(&self) -> bool {
        !self.bits[self.pos..].any()
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_packs_msb_first_with_zero_padding() {
        let mut writer = BitWriter::new();
        writer.write_bit(true);
        writer.write_field(1u16, 9).unwrap();
        writer.write_field(4u16, 10).unwrap();
        assert_eq!(writer.len(), 20);

        // 1 000000001 0000000100 + 4 pad bits
        assert_eq!(writer.into_bytes(), vec![0x80, 0x40, 0x40]);
    }

    #[test]
    fn test_writer_rejects_value_exceeding_width() {
        let mut writer = BitWriter::new();
        let result = writer.write_field(512u16, 9);
        assert!(matches!(
            result,
            Err(SeqTokenError::FieldOverflow(512, 9))
        ));
    }

    #[test]
    fn test_reader_roundtrips_fields() {
        let mut writer = BitWriter::new();
        writer.write_bit(true);
        writer.write_field(300u16, 9).unwrap();
        writer.write_field(1023u16, 10).unwrap();
        let bytes = writer.into_bytes();

        let mut reader = BitReader::new(&bytes);
        assert!(reader.read_bit().unwrap());
        assert_eq!(reader.read_field::<u16>(9).unwrap(), 300);
        assert_eq!(reader.read_field::<u16>(10).unwrap(), 1023);
        assert!(reader.remainder_is_zero());
    }

    #[test]
    fn test_strict_read_fails_on_short_tail() {
        let bytes = vec![0xFF];
        let mut reader = BitReader::new(&bytes);
        let result = reader.read_field::<u16>(9);
        assert!(matches!(
            result,
            Err(SeqTokenError::TruncatedStream {
                needed: 9,
                available: 8
            })
        ));
    }

    #[test]
    fn test_zero_filled_read_leaves_low_bits_zero() {
        // After consuming one bit, only 7 bits remain: 0110110. Read as a
        // 9-bit field they occupy the top positions, so the value is
        // 011011000 with the two missing low bits zero.
        let bytes = vec![0b1011_0110];
        let mut reader = BitReader::new(&bytes);
        reader.read_bit().unwrap();
        assert_eq!(
            reader.read_field_zero_filled::<u16>(9).unwrap(),
            0b0110_1100_0
        );
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_zero_filled_read_matches_strict_when_complete() {
        let mut writer = BitWriter::new();
        writer.write_field(217u16, 9).unwrap();
        let bytes = writer.into_bytes();

        let mut strict = BitReader::new(&bytes);
        let mut lenient = BitReader::new(&bytes);
        assert_eq!(
            strict.read_field::<u16>(9).unwrap(),
            lenient.read_field_zero_filled::<u16>(9).unwrap()
        );
    }

    #[test]
    fn test_remainder_detects_set_padding() {
        let bytes = vec![0b1000_0001];
        let mut reader = BitReader::new(&bytes);
        reader.read_bit().unwrap();
        assert!(!reader.remainder_is_zero());
    }
}
