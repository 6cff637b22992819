//! This module serves as the public API for the collection of pure, stateless
//! kernels underlying the codec.
//!
//! Each sub-module is a distinct transform with no knowledge of the others; the
//! `codec` layer composes them into the full encode/decode paths. This is the
//! "toolbox" of the seqtoken system.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Bit-level layer: logical bit stream <-> packed bytes (MSB-first).
pub mod bitpack;

/// Envelope layer: packed bytes <-> printable base64 token.
pub mod transcode;
