//! Candidate pool builders for tests and benchmarks.

extern crate pool;
extern crate rand;

mod pool_builder;
mod random;

pub use pool_builder::{CandidateBuilder, PoolBuilder};
pub use random::{random_pool, RandomPoolParams};

use pool::MemoryCandidateIndex;

/// `count` unrelated candidates of 250 vbytes, candidate `n` paying `n * 250` satoshis.
pub fn independent_pool(count: u64) -> MemoryCandidateIndex {
	(1..=count)
		.fold(PoolBuilder::new(), |builder, n| builder.with(CandidateBuilder::with_id(n).fee(n * 250)))
		.build()
}

/// Chain of `len` candidates, each spending the previous one.
pub fn chain_pool(len: u64, fee: u64) -> MemoryCandidateIndex {
	(1..=len)
		.fold(PoolBuilder::new(), |builder, n| {
			let candidate = CandidateBuilder::with_id(n).fee(fee);
			if n == 1 {
				builder.with(candidate)
			} else {
				builder.with(candidate.child_of(n - 1))
			}
		})
		.build()
}
