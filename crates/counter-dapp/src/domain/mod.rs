//! # Domain Layer
//!
//! Pure logic of the dapp: payload decoding, the increment rule, the
//! dispatch policy and loop bookkeeping. No I/O happens here.

pub mod counter;
pub mod payload;
pub mod policy;
pub mod stats;

pub use counter::next_counter;
pub use payload::{decode_payload, CounterCommand, Payload};
pub use policy::UnknownRequestPolicy;
pub use stats::LoopStats;
