use pool::{Candidate, CandidateId, MemoryCandidateIndex};

pub const DEFAULT_SIZE: u64 = 250;

/// Fluent description of a single pool candidate.
#[derive(Debug, Clone)]
pub struct CandidateBuilder {
	candidate: Candidate,
	parents: Vec<CandidateId>,
}

impl CandidateBuilder {
	/// Non-witness candidate of `DEFAULT_SIZE` vbytes paying nothing.
	pub fn with_id(id: u64) -> Self {
		CandidateBuilder {
			candidate: Candidate::new(CandidateId::from(id), DEFAULT_SIZE, DEFAULT_SIZE * 4, 0, 0),
			parents: Vec::new(),
		}
	}

	/// Sets virtual size, keeping weight at four units per vbyte.
	pub fn size(mut self, size: u64) -> Self {
		self.candidate.size = size;
		self.candidate.weight = size * 4;
		self
	}

	pub fn weight(mut self, weight: u64) -> Self {
		self.candidate.weight = weight;
		self
	}

	pub fn fee(mut self, fee: u64) -> Self {
		self.candidate.fee = fee;
		self
	}

	pub fn sigop_cost(mut self, sigop_cost: u64) -> Self {
		self.candidate.sigop_cost = sigop_cost;
		self
	}

	/// Sets lock time with non-final input sequences, so the lock time applies.
	pub fn lock_time(mut self, lock_time: u32) -> Self {
		self.candidate.lock_time = lock_time;
		self.candidate.has_final_sequences = false;
		self
	}

	pub fn witness(mut self) -> Self {
		self.candidate.has_witness = true;
		self
	}

	pub fn child_of(mut self, parent: u64) -> Self {
		self.parents.push(CandidateId::from(parent));
		self
	}

	pub fn id(&self) -> CandidateId {
		self.candidate.id
	}

	pub fn build(self) -> (Candidate, Vec<CandidateId>) {
		(self.candidate, self.parents)
	}
}

/// Builds a `MemoryCandidateIndex` from candidates added parents first.
#[derive(Debug, Default)]
pub struct PoolBuilder {
	pool: MemoryCandidateIndex,
}

impl PoolBuilder {
	pub fn new() -> Self {
		PoolBuilder::default()
	}

	pub fn with(mut self, candidate: CandidateBuilder) -> Self {
		let id = candidate.id();
		let (candidate, parents) = candidate.build();
		if let Err(err) = self.pool.insert(candidate, &parents) {
			panic!("invalid test pool entry {}: {}", id, err);
		}
		self
	}

	pub fn build(self) -> MemoryCandidateIndex {
		self.pool
	}
}

#[cfg(test)]
mod tests {
	use super::{CandidateBuilder, PoolBuilder};
	use pool::{CandidateId, CandidateIndex, PackageStats};

	#[test]
	fn builder_links_parents() {
		let pool = PoolBuilder::new()
			.with(CandidateBuilder::with_id(1).size(200).fee(1000))
			.with(CandidateBuilder::with_id(2).size(200).fee(3000).child_of(1))
			.build();

		let child = pool.entry(&CandidateId::from(2)).unwrap();
		assert_eq!(child.ancestors, PackageStats::new(400, 4000, 0));
		assert_eq!(child.weight, 800);
	}

	#[test]
	#[should_panic]
	fn builder_panics_on_missing_parent() {
		PoolBuilder::new().with(CandidateBuilder::with_id(2).child_of(1));
	}
}
