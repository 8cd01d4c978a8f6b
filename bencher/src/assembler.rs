use super::Benchmark;
use miner::{AssemblerOptions, BlockAssembler, BlockTarget, LockTimeOracle};
use network::{ConsensusParams, Network};
use pool::{FeeRate, MemoryCandidateIndex};
use std::sync::atomic::AtomicBool;
use test_data::{independent_pool, random_pool, CandidateBuilder, PoolBuilder, RandomPoolParams};

const BLOCKS: usize = 10;

fn assemble_blocks(benchmark: &mut Benchmark, options: AssemblerOptions, pool: &MemoryCandidateIndex) {
	let assembler = BlockAssembler::new(options);
	let oracle = LockTimeOracle::default();
	let target = BlockTarget::new(700_000, 1_600_000_000, 1_599_999_000);
	let abort = AtomicBool::new(false);

	benchmark.samples(BLOCKS);
	benchmark.start();
	for _ in 0..BLOCKS {
		match assembler.create_new_block(pool, &oracle, &target, &abort) {
			Ok(template) => trace!(target: "bencher", "{} transactions selected", template.entries.len()),
			Err(err) => error!(target: "bencher", "Assembly failed: {}", err),
		}
	}
	benchmark.stop();
}

fn mainnet_options() -> AssemblerOptions {
	AssemblerOptions::from_consensus(&ConsensusParams::new(Network::Mainnet))
}

// 10_000 unrelated transactions
pub fn independent(benchmark: &mut Benchmark) {
	let pool = independent_pool(10_000);
	assemble_blocks(benchmark, mainnet_options(), &pool);
}

// 400 chains of 25, each chain paying more towards its tip
pub fn long_chains(benchmark: &mut Benchmark) {
	let mut builder = PoolBuilder::new();
	for chain in 0..400u64 {
		let first = chain * 25 + 1;
		for depth in 0..25u64 {
			let candidate = CandidateBuilder::with_id(first + depth).fee(250 + depth * (chain % 7) * 100);
			builder = builder.with(if depth == 0 { candidate } else { candidate.child_of(first + depth - 1) });
		}
	}
	assemble_blocks(benchmark, mainnet_options(), &builder.build());
}

// 5_000 transactions with up to 4 parents each, block holding a fraction of them
pub fn random_dag(benchmark: &mut Benchmark) {
	let params = RandomPoolParams {
		count: 5_000,
		max_parents: 4,
		witness_ratio: 0.3,
		..RandomPoolParams::default()
	};
	let pool = random_pool(1, &params);
	let consensus = ConsensusParams::new(Network::Mainnet);
	let options = mainnet_options().with_max_block_weight(&consensus, 1_000_000);
	assemble_blocks(benchmark, options, &pool);
}

// pool far larger than a block, so most packages fail near the end
pub fn full_block(benchmark: &mut Benchmark) {
	let mut pool = independent_pool(20_000);
	for n in 1..=200u64 {
		let (candidate, parents) = CandidateBuilder::with_id(100_000 + n).size(90_000).fee(n * 1_000_000).build();
		if let Err(err) = pool.insert(candidate, &parents) {
			error!(target: "bencher", "Cannot prepare pool: {}", err);
		}
	}
	let options = mainnet_options().with_min_fee_rate(FeeRate::from_satoshis_per_kvb(0));
	assemble_blocks(benchmark, options, &pool);
}
