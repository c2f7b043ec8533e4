//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implementations of the `RollupServer` port.

mod http_rollup;
mod mock_rollup;

pub use http_rollup::HttpRollupServer;
pub use mock_rollup::MockRollupServer;
