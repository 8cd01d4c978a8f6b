use crate::{Candidate, CandidateId, IndexError, PackageStats};

/// Caps on the ancestor package returned by `CandidateIndex::ancestors_of`.
///
/// All caps include the candidate itself.
#[derive(Debug, Clone, PartialEq)]
pub struct AncestorLimits {
	pub max_count: u32,
	pub max_size: u64,
	pub max_fee: u64,
	pub max_sigop_cost: u64,
}

impl AncestorLimits {
	pub fn unlimited() -> Self {
		AncestorLimits {
			max_count: u32::max_value(),
			max_size: u64::max_value(),
			max_fee: u64::max_value(),
			max_sigop_cost: u64::max_value(),
		}
	}

	pub fn allows(&self, count: u32, package: &PackageStats) -> bool {
		count <= self.max_count
			&& package.size <= self.max_size
			&& package.fee <= self.max_fee
			&& package.sigop_cost <= self.max_sigop_cost
	}
}

impl Default for AncestorLimits {
	fn default() -> Self {
		AncestorLimits::unlimited()
	}
}

/// Snapshot of the transaction pool, ordered by ancestor fee rate.
///
/// Implementors must not change while a block is being assembled, and no
/// entry may weigh more than `size * WITNESS_SCALE_FACTOR`: block assembly
/// budgets packages by virtual size.
pub trait CandidateIndex {
	/// Returns pool entry by id.
	fn entry(&self, id: &CandidateId) -> Option<&Candidate>;

	/// Iterates ids by descending ancestor fee rate, equal rates by ascending id.
	fn by_ancestor_score<'a>(&'a self) -> Box<dyn Iterator<Item = CandidateId> + 'a>;

	/// In-pool ancestors of `id`, excluding `id` itself.
	fn ancestors_of(&self, id: &CandidateId, limits: &AncestorLimits) -> Result<Vec<CandidateId>, IndexError>;

	/// In-pool descendants of `id`, excluding `id` itself.
	fn descendants_of(&self, id: &CandidateId) -> Result<Vec<CandidateId>, IndexError>;
}
