mod consensus;
mod network;

pub use consensus::{ConsensusParams, LOCKTIME_THRESHOLD};
pub use network::Network;
