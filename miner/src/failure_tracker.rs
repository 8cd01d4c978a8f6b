use crate::{BlockBudget, RejectReason};
use pool::CandidateId;
use std::collections::HashSet;

/// Package left out of the block, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
	pub id: CandidateId,
	pub reason: RejectReason,
}

/// Remembers rejected packages for the rest of the pass.
#[derive(Debug, Clone)]
pub struct FailureTracker {
	failed: HashSet<CandidateId>,
	rejections: Vec<Rejection>,
	consecutive: u32,
	max_consecutive: u32,
	near_full_margin: u64,
}

impl FailureTracker {
	pub fn new(max_consecutive: u32, near_full_margin: u64) -> Self {
		FailureTracker {
			failed: HashSet::new(),
			rejections: Vec::new(),
			consecutive: 0,
			max_consecutive,
			near_full_margin,
		}
	}

	/// Records a rejected package. Only candidates taken from the modified
	/// set are barred from reconsideration; pool cursor entries are never
	/// revisited anyway.
	pub fn reject(&mut self, id: CandidateId, reason: RejectReason, bar: bool) {
		debug!(target: "miner", "Package of {} rejected: {}", id, reason);
		if bar {
			self.failed.insert(id);
		}
		self.rejections.push(Rejection { id, reason });
		self.consecutive += 1;
	}

	/// Records why the pass stopped at `id`, without counting a failure.
	pub fn note(&mut self, id: CandidateId, reason: RejectReason) {
		debug!(target: "miner", "Stopped at {}: {}", id, reason);
		self.rejections.push(Rejection { id, reason });
	}

	pub fn contains(&self, id: &CandidateId) -> bool {
		self.failed.contains(id)
	}

	pub fn reset_consecutive(&mut self) {
		self.consecutive = 0;
	}

	pub fn consecutive(&self) -> u32 {
		self.consecutive
	}

	/// Too many failures in a row while the block is nearly full.
	pub fn should_stop(&self, budget: &BlockBudget) -> bool {
		self.consecutive > self.max_consecutive && budget.is_near_full(self.near_full_margin)
	}

	pub fn failed_len(&self) -> usize {
		self.failed.len()
	}

	pub fn rejections(&self) -> &[Rejection] {
		&self.rejections
	}

	pub fn into_rejections(self) -> Vec<Rejection> {
		self.rejections
	}
}

#[cfg(test)]
mod tests {
	use super::{FailureTracker, Rejection};
	use crate::{AssemblerOptions, BlockBudget, RejectReason};
	use pool::CandidateId;
	use test_data::CandidateBuilder;

	#[test]
	fn only_barred_candidates_are_failed() {
		let mut failures = FailureTracker::new(10, 4_000);
		failures.reject(CandidateId::from(1), RejectReason::OverWeight, true);
		failures.reject(CandidateId::from(2), RejectReason::NonFinal, false);
		failures.note(CandidateId::from(3), RejectReason::BelowFeeFloor);

		assert!(failures.contains(&CandidateId::from(1)));
		assert!(!failures.contains(&CandidateId::from(2)));
		assert_eq!(failures.failed_len(), 1);
		assert_eq!(failures.consecutive(), 2);
		assert_eq!(
			failures.rejections()[1],
			Rejection {
				id: CandidateId::from(2),
				reason: RejectReason::NonFinal,
			}
		);
		assert_eq!(failures.rejections().len(), 3);
	}

	#[test]
	fn stops_only_when_near_full() {
		let options = AssemblerOptions {
			max_block_weight: 10_000,
			coinbase_reserved_weight: 0,
			..AssemblerOptions::default()
		};
		let mut budget = BlockBudget::new(&options);
		let mut failures = FailureTracker::new(2, 4_000);
		for n in 0..3 {
			failures.reject(CandidateId::from(n), RejectReason::OverWeight, false);
		}
		assert!(!failures.should_stop(&budget));

		let (filler, _) = CandidateBuilder::with_id(9).weight(7_000).build();
		budget.commit(&[&filler]);
		assert!(failures.should_stop(&budget));

		failures.reset_consecutive();
		assert!(!failures.should_stop(&budget));
	}
}
