use crate::Network;

/// Locktime values below this are block heights, values at or above are unix timestamps.
pub const LOCKTIME_THRESHOLD: u32 = 500_000_000;

#[derive(Debug, Clone)]
/// Parameters that bound the contents of a single block.
pub struct ConsensusParams {
	/// Network.
	pub network: Network,
	/// Witness scale factor
	pub witness_scale_factor: usize,
	/// Maximum block weight (BIP141).
	pub max_block_weight: usize,
	/// Maximum sigop cost of all transactions in a block (BIP141).
	pub max_block_sigops_cost: usize,
	/// Locktime threshold separating heights from timestamps.
	pub locktime_threshold: u32,
	/// Whether time-based locktimes are compared against median time past (BIP113).
	pub locktime_median_time_past: bool,
}

impl ConsensusParams {
	pub fn new(network: Network) -> Self {
		// block limits are shared by every network since segwit activation
		ConsensusParams {
			network,
			witness_scale_factor: 4,
			max_block_weight: 4_000_000,
			max_block_sigops_cost: 80_000,
			locktime_threshold: LOCKTIME_THRESHOLD,
			locktime_median_time_past: true,
		}
	}

	/// Witness scale factor (equal among all networks)
	pub fn witness_scale_factor() -> usize {
		4
	}

	/// Maximum block size in virtual bytes.
	pub fn max_block_vsize(&self) -> usize {
		self.max_block_weight / self.witness_scale_factor
	}
}

impl Default for ConsensusParams {
	fn default() -> Self {
		ConsensusParams::new(Network::default())
	}
}
