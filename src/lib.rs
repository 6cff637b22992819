//! This file is the root of the `seqtoken` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring the top-level modules of the library (`codec`, `kernels`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the two public operations and the types a caller needs to
//!     drive them.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod codec;
pub mod config;
pub mod kernels;

mod error;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use codec::{decode, decode_with_config, encode, encode_with_config};
pub use codec::{COUNT_BITS, COUNT_MAX, VALUE_BITS, VALUE_MAX, VALUE_MIN};
pub use config::{CountOverflowPolicy, DecodeStrictness, SeqTokenConfig};
pub use error::SeqTokenError;
