use network::ConsensusParams;
use pool::{AncestorLimits, FeeRate};

/// Weight kept free for the coinbase transaction and header.
pub const COINBASE_RESERVED_WEIGHT: u64 = 4_000;
/// Sigop cost kept free for the coinbase transaction.
pub const COINBASE_RESERVED_SIGOPS_COST: u64 = 400;
/// Default minimal package fee rate, in satoshis per 1000 vbytes.
pub const DEFAULT_BLOCK_MIN_TX_FEE: u64 = 1_000;
/// Consecutive failed packages tolerated before giving up on a nearly full block.
pub const MAX_CONSECUTIVE_FAILURES: u32 = 1_000;
/// Block counts as nearly full once less than this much weight is left.
pub const NEAR_FULL_MARGIN: u64 = 4_000;

/// Policy parameters of block assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblerOptions {
	/// Maximal block weight, coinbase reservation included.
	pub max_block_weight: u64,
	/// Maximal block sigop cost, coinbase reservation included.
	pub max_block_sigops_cost: u64,
	pub witness_scale_factor: u64,
	/// Packages paying less than this are never included.
	pub block_min_fee_rate: FeeRate,
	pub max_consecutive_failures: u32,
	pub near_full_margin: u64,
	/// Allow transactions carrying witness data.
	pub witness_enabled: bool,
	pub coinbase_reserved_weight: u64,
	pub coinbase_reserved_sigops_cost: u64,
	/// Limits passed along with ancestor queries.
	pub ancestor_limits: AncestorLimits,
	/// Compare time-based lock times against median time past (BIP113).
	pub locktime_median_time_past: bool,
}

impl AssemblerOptions {
	pub fn from_consensus(consensus: &ConsensusParams) -> Self {
		let consensus_max_weight = consensus.max_block_weight as u64;
		AssemblerOptions {
			max_block_weight: consensus_max_weight.saturating_sub(COINBASE_RESERVED_WEIGHT),
			max_block_sigops_cost: consensus.max_block_sigops_cost as u64,
			witness_scale_factor: consensus.witness_scale_factor as u64,
			block_min_fee_rate: FeeRate::from_satoshis_per_kvb(DEFAULT_BLOCK_MIN_TX_FEE),
			max_consecutive_failures: MAX_CONSECUTIVE_FAILURES,
			near_full_margin: NEAR_FULL_MARGIN,
			witness_enabled: true,
			coinbase_reserved_weight: COINBASE_RESERVED_WEIGHT,
			coinbase_reserved_sigops_cost: COINBASE_RESERVED_SIGOPS_COST,
			ancestor_limits: AncestorLimits::unlimited(),
			locktime_median_time_past: consensus.locktime_median_time_past,
		}
	}

	/// Sets block weight limit, clamped to what consensus can accommodate.
	pub fn with_max_block_weight(mut self, consensus: &ConsensusParams, weight: u64) -> Self {
		let upper = (consensus.max_block_weight as u64).saturating_sub(COINBASE_RESERVED_WEIGHT);
		self.max_block_weight = weight.min(upper).max(COINBASE_RESERVED_WEIGHT);
		self
	}

	pub fn with_min_fee_rate(mut self, rate: FeeRate) -> Self {
		self.block_min_fee_rate = rate;
		self
	}
}

impl Default for AssemblerOptions {
	fn default() -> Self {
		AssemblerOptions::from_consensus(&ConsensusParams::default())
	}
}

/// Chain tip the block is assembled on top of.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockTarget {
	/// Height of the block being assembled.
	pub height: u32,
	/// Block time.
	pub time: u32,
	/// Median time past of the previous block.
	pub median_time_past: u32,
}

impl BlockTarget {
	pub fn new(height: u32, time: u32, median_time_past: u32) -> Self {
		BlockTarget {
			height,
			time,
			median_time_past,
		}
	}

	/// Time that time-based lock times must be below.
	pub fn lock_time_cutoff(&self, median_time_past: bool) -> u32 {
		if median_time_past {
			self.median_time_past
		} else {
			self.time
		}
	}
}
