//! The mode planner for seqtoken.
//!
//! This module is the "smart" half of the encoder: a pure heuristic that
//! predicts, from the frequency profile alone, which of the two field layouts
//! will pack into fewer bits and commits the whole payload to it. The shared
//! 1-bit mode flag is a constant on both sides of the comparison and is
//! deliberately ignored.

use serde::{Deserialize, Serialize};

use crate::codec::{COUNT_BITS, VALUE_BITS};

/// Per-distinct-value field cost of grouped mode: a 9-bit value plus a
/// 10-bit count.
const GROUPED_PAIR_COST: usize = VALUE_BITS as usize + COUNT_BITS as usize;

/// Per-element field cost of raw mode.
const RAW_ELEMENT_COST: usize = VALUE_BITS as usize;

//==================================================================================
// 1. Mode
//==================================================================================

/// The two field layouts a payload can commit to. The leading bit of every
/// bit stream records the choice.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Each distinct value once, tagged with an explicit repetition count.
    Grouped,
    /// Every element sequentially in original order.
    Raw,
}

impl Mode {
    /// The wire representation: 1 = grouped, 0 = raw.
    pub fn flag_bit(self) -> bool {
        matches!(self, Mode::Grouped)
    }

    pub fn from_flag_bit(bit: bool) -> Self {
        if bit {
            Mode::Grouped
        } else {
            Mode::Raw
        }
    }
}

//==================================================================================
// 2. Selection Heuristic
//==================================================================================

/// Chooses the layout with the smaller predicted field cost.
///
/// Grouped wins strictly: on a tie (including the empty input, where both
/// costs are zero) raw mode is selected, and an empty raw stream decodes back
/// to an empty sequence.
pub fn select_mode(distinct_count: usize, len: usize) -> Mode {
    let grouped_cost = distinct_count * GROUPED_PAIR_COST;
    let raw_cost = len * RAW_ELEMENT_COST;

    let mode = if grouped_cost < raw_cost {
        Mode::Grouped
    } else {
        Mode::Raw
    };
    log::debug!(
        "mode selection: grouped {} bits vs raw {} bits ({} distinct / {} elements) -> {:?}",
        grouped_cost,
        raw_cost,
        distinct_count,
        len,
        mode
    );
    mode
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
