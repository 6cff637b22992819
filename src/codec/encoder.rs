//! The field encoder: lays fixed-width integer fields onto the bit stream.
//!
//! The layout is mode flag first, then either `(value:9, count:10)` pairs in
//! first-occurrence order (grouped) or a 9-bit value per element in input
//! order (raw). Raw mode never emits count fields. All width and overflow
//! checking lives in the bitpack kernel; this module only decides what goes
//! on the wire and in which order.

use crate::codec::frequency::FrequencyTable;
use crate::codec::planner::Mode;
use crate::codec::{COUNT_BITS, COUNT_MAX, VALUE_BITS};
use crate::config::{CountOverflowPolicy, SeqTokenConfig};
use crate::error::SeqTokenError;
use crate::kernels::bitpack::BitWriter;

//==================================================================================
// 1. Public API
//==================================================================================

/// Emits the complete bit stream for the chosen mode.
///
/// Inputs have already been validated by `FrequencyTable::build`; the only
/// failure left at this layer is a grouped-mode repetition count that does
/// not fit the count field.
pub fn encode_fields(
    values: &[u16],
    table: &FrequencyTable,
    mode: Mode,
    config: &SeqTokenConfig,
) -> Result<BitWriter, SeqTokenError> {
    let capacity = 1 + match mode {
        Mode::Grouped => table.distinct_count() * (VALUE_BITS + COUNT_BITS) as usize,
        Mode::Raw => values.len() * VALUE_BITS as usize,
    };
    let mut writer = BitWriter::with_capacity(capacity);
    writer.write_bit(mode.flag_bit());

    match mode {
        Mode::Grouped => {
            for &(value, count) in table.iter() {
                if count > COUNT_MAX {
                    match config.count_overflow {
                        CountOverflowPolicy::Reject => {
                            return Err(SeqTokenError::CountOverflow { value, count });
                        }
                    }
                }
                writer.write_field(value, VALUE_BITS)?;
                writer.write_field(count as u16, COUNT_BITS)?;
            }
        }
        Mode::Raw => {
            for &value in values {
                writer.write_field(value, VALUE_BITS)?;
            }
        }
    }

    Ok(writer)
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(values: &[u16], mode: Mode) -> Result<BitWriter, SeqTokenError> {
        let table = FrequencyTable::build(values).unwrap();
        encode_fields(values, &table, mode, &SeqTokenConfig::default())
    }

    #[test]
    fn test_grouped_layout_matches_worked_example() {
        // [1, 1, 1, 1]: flag(1) + value 1 (9 bits) + count 4 (10 bits) = 20
        // bits, padded to three bytes.
        let writer = emit(&[1, 1, 1, 1], Mode::Grouped).unwrap();
        assert_eq!(writer.len(), 20);
        assert_eq!(writer.into_bytes(), vec![0x80, 0x40, 0x40]);
    }

    #[test]
    fn test_raw_layout_has_no_count_fields() {
        let writer = emit(&[3, 1, 4], Mode::Raw).unwrap();
        assert_eq!(writer.len(), 1 + 3 * 9);
    }

    #[test]
    fn test_empty_input_emits_only_the_flag() {
        let writer = emit(&[], Mode::Raw).unwrap();
        assert_eq!(writer.len(), 1);
        assert_eq!(writer.into_bytes(), vec![0x00]);
    }

    #[test]
    fn test_grouped_count_overflow_is_rejected() {
        let values = vec![42u16; 1024];
        let result = emit(&values, Mode::Grouped);
        assert!(matches!(
            result,
            Err(SeqTokenError::CountOverflow { value: 42, count: 1024 })
        ));
    }

    #[test]
    fn test_grouped_count_boundary_fits() {
        let values = vec![42u16; 1023];
        let writer = emit(&values, Mode::Grouped).unwrap();
        assert_eq!(writer.len(), 20);
    }
}
