use crate::{CandidateBuilder, PoolBuilder};
use pool::MemoryCandidateIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape of a randomly generated ancestor DAG.
#[derive(Debug, Clone)]
pub struct RandomPoolParams {
	pub count: u64,
	/// Upper bound on direct parents per candidate.
	pub max_parents: usize,
	pub min_size: u64,
	pub max_size: u64,
	pub max_fee: u64,
	pub max_sigop_cost: u64,
	/// Probability of a candidate carrying witness data.
	pub witness_ratio: f64,
}

impl Default for RandomPoolParams {
	fn default() -> Self {
		RandomPoolParams {
			count: 200,
			max_parents: 3,
			min_size: 100,
			max_size: 2_000,
			max_fee: 50_000,
			max_sigop_cost: 80,
			witness_ratio: 0.0,
		}
	}
}

/// Pool whose candidate `n` spends up to `max_parents` of candidates `1..n`.
///
/// The same seed always yields the same pool.
pub fn random_pool(seed: u64, params: &RandomPoolParams) -> MemoryCandidateIndex {
	let mut rng = StdRng::seed_from_u64(seed);
	let mut builder = PoolBuilder::new();
	for n in 1..=params.count {
		let mut candidate = CandidateBuilder::with_id(n)
			.size(rng.gen_range(params.min_size..=params.max_size))
			.fee(rng.gen_range(0..=params.max_fee))
			.sigop_cost(rng.gen_range(0..=params.max_sigop_cost));
		if rng.gen_bool(params.witness_ratio) {
			candidate = candidate.witness();
		}
		if n > 1 {
			let parents = rng.gen_range(0..=params.max_parents);
			for _ in 0..parents {
				candidate = candidate.child_of(rng.gen_range(1..n));
			}
		}
		builder = builder.with(candidate);
	}
	builder.build()
}

#[cfg(test)]
mod tests {
	use super::{random_pool, RandomPoolParams};
	use pool::CandidateIndex;

	#[test]
	fn same_seed_same_pool() {
		let params = RandomPoolParams::default();
		let a: Vec<_> = random_pool(7, &params).by_ancestor_score().collect();
		let b: Vec<_> = random_pool(7, &params).by_ancestor_score().collect();
		assert_eq!(a, b);
		assert_eq!(a.len(), 200);
	}
}
