// In: src/error.rs

//! This module defines the single, unified error type for the entire seqtoken library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeqTokenError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// An input element fell outside the encodable domain. Encode aborts on
    /// the first offender with no partial output.
    #[error("value {0} is outside the encodable domain [1, 300]")]
    ValueOutOfRange(u16),

    /// A grouped-mode repetition count does not fit the 10-bit count field.
    #[error("repetition count {count} for value {value} exceeds the 10-bit count field (max 1023)")]
    CountOverflow { value: u16, count: u64 },

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// The token is not valid standard base64.
    #[error("token is not valid base64: {0}")]
    Format(#[from] base64::DecodeError),

    // =========================================================================
    // === Low-Level Bit-Stream Errors
    // =========================================================================
    /// Strict decode found set bits past the last complete field group.
    #[error("bit stream truncated: {available} bits remain but {needed} are needed to complete a field group")]
    TruncatedStream { needed: usize, available: usize },

    #[error("bit-field encoding error: value {0} exceeds bit width {1}")]
    FieldOverflow(u64, u8),
}
