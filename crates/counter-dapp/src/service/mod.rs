//! Counter dapp services
//!
//! - [`AdvanceHandler`]: decode → increment → notice for one advance request
//! - [`ProtocolLoop`]: the finish → fetch → dispatch cycle

mod advance;
mod protocol_loop;

pub use advance::AdvanceHandler;
pub use protocol_loop::ProtocolLoop;
