//! This module contains the frequency counter that feeds mode selection and
//! grouped-mode field emission.
//!
//! The tally is insertion-ordered: iterating the table yields `(value, count)`
//! pairs in order of each value's first occurrence in the input, which is the
//! order grouped mode lays pairs onto the wire. A `HashMap` index keeps the
//! tally O(1) per element while a plain vec carries the deterministic order.

use std::collections::HashMap;

use crate::codec::{VALUE_MAX, VALUE_MIN};
use crate::error::SeqTokenError;

//==================================================================================
// 1. FrequencyTable
//==================================================================================

/// An insertion-ordered mapping from value to occurrence count.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    entries: Vec<(u16, u64)>,
    index: HashMap<u16, usize>,
}

impl FrequencyTable {
    /// Builds the table from an input sequence, validating every element
    /// against the encodable domain. The first out-of-range value fails the
    /// whole operation; no partial table escapes.
    pub fn build(values: &[u16]) -> Result<Self, SeqTokenError> {
        let mut table = Self::default();
        for &value in values {
            if !(VALUE_MIN..=VALUE_MAX).contains(&value) {
                return Err(SeqTokenError::ValueOutOfRange(value));
            }
            let entries = &mut table.entries;
            let slot = *table.index.entry(value).or_insert_with(|| {
                entries.push((value, 0));
                entries.len() - 1
            });
            table.entries[slot].1 += 1;
        }
        Ok(table)
    }

    /// Number of distinct values seen.
    pub fn distinct_count(&self) -> usize {
        self.entries.len()
    }

    /// Iterates `(value, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &(u16, u64)> {
        self.entries.iter()
    }
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
