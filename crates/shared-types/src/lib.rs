//! # Shared Types Crate
//!
//! Wire types for the rollup HTTP server and the hex helpers used to move
//! payloads across it.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: The JSON shapes exchanged with the rollup
//!   server (`/finish`, `/notice`) are defined here and nowhere else.
//! - **Opaque Payloads**: Payloads travel as `0x`-prefixed hex strings; the
//!   codec module is the only place that converts them.

pub mod codec;
pub mod errors;
pub mod rollup;

pub use codec::{hex_to_bytes, hex_to_string, string_to_hex, u256_to_word};
pub use errors::*;
pub use primitive_types::U256;
pub use rollup::*;
