use crate::{AncestorScore, CandidateId, PackageStats};

/// Weight units per virtual byte (BIP141).
pub const WITNESS_SCALE_FACTOR: u64 = 4;

/// Unconfirmed transaction as seen by block assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
	pub id: CandidateId,
	/// Virtual size in bytes.
	pub size: u64,
	/// BIP141 weight.
	pub weight: u64,
	pub sigop_cost: u64,
	/// Fee paid by this transaction alone.
	pub fee: u64,
	/// Cached stats of this transaction and all of its in-pool ancestors.
	pub ancestors: PackageStats,
	/// Number of in-pool ancestors, this transaction included.
	pub ancestor_count: u32,
	pub lock_time: u32,
	/// Every input has a final sequence number, which disables the lock time.
	pub has_final_sequences: bool,
	pub has_witness: bool,
}

impl Candidate {
	/// Creates a candidate without in-pool ancestors.
	pub fn new(id: CandidateId, size: u64, weight: u64, sigop_cost: u64, fee: u64) -> Self {
		Candidate {
			id,
			size,
			weight,
			sigop_cost,
			fee,
			ancestors: PackageStats::new(size, fee, sigop_cost),
			ancestor_count: 1,
			lock_time: 0,
			has_final_sequences: true,
			has_witness: false,
		}
	}

	/// Contribution of this transaction alone to any package containing it.
	pub fn own_stats(&self) -> PackageStats {
		PackageStats::new(self.size, self.fee, self.sigop_cost)
	}

	/// Virtual size is the weight divided by the witness scale factor, rounded up,
	/// so weight may never exceed `size * WITNESS_SCALE_FACTOR`.
	pub fn has_consistent_weight(&self) -> bool {
		self.weight <= self.size.saturating_mul(WITNESS_SCALE_FACTOR)
	}

	pub fn ancestor_score(&self) -> AncestorScore {
		AncestorScore::new(self.id, self.ancestors.fee, self.ancestors.size)
	}
}
