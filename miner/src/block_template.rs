use crate::Rejection;
use pool::{CandidateId, PackageStats};
use time::Duration;

/// Transaction placed in the block template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
	pub id: CandidateId,
	/// Fee paid by this transaction alone (in Satoshis)
	pub fee: u64,
	pub weight: u64,
	pub sigop_cost: u64,
}

/// Package admitted to the block, in admission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
	/// Candidate whose ancestor package was admitted.
	pub id: CandidateId,
	/// Package stats at admission, ancestors already in the block excluded.
	pub package: PackageStats,
	/// Number of transactions in the package.
	pub count: usize,
}

/// Block totals. Weight and sigop cost include the coinbase reservation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlockTotals {
	/// Total fees of selected transactions (in Satoshis)
	pub fee: u64,
	pub weight: u64,
	pub sigop_cost: u64,
	/// Number of selected transactions
	pub count: usize,
}

/// Why the assembly pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassEnd {
	/// Every candidate was considered.
	Exhausted,
	/// Best remaining package pays less than the minimal fee rate.
	BelowFeeFloor,
	/// Too many consecutive failures while the block was nearly full.
	NearFull,
	/// Abort flag was raised.
	Aborted,
}

/// Statistics of a single assembly pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyStats {
	pub packages: Vec<PackageSummary>,
	pub descendants_updated: usize,
	pub rejections: Vec<Rejection>,
	pub end: PassEnd,
	pub elapsed: Duration,
}

/// Block template: transactions selected for the next block, without coinbase.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockTemplate {
	/// Block height
	pub height: u32,
	/// Block time
	pub time: u32,
	/// Block transactions (excluding coinbase), ancestors first
	pub entries: Vec<TemplateEntry>,
	pub totals: BlockTotals,
	/// Number of weight units allowed in the block
	pub weight_limit: u64,
	/// Sigop cost allowed in the block
	pub sigop_limit: u64,
	pub stats: AssemblyStats,
}

impl BlockTemplate {
	pub fn transaction_ids(&self) -> Vec<CandidateId> {
		self.entries.iter().map(|entry| entry.id).collect()
	}
}
