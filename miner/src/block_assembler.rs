use crate::{
	AdmissibilityOracle, AssemblerOptions, AssemblyStats, BlockTarget, BlockTemplate, BlockTotals, Error, PackageSelector,
};
use pool::CandidateIndex;
use std::sync::atomic::AtomicBool;
use time::Instant;

/// Block assembler
pub struct BlockAssembler {
	pub options: AssemblerOptions,
}

impl BlockAssembler {
	pub fn new(options: AssemblerOptions) -> Self {
		BlockAssembler { options }
	}

	/// Selects transactions for a block on top of `target` from a stable pool snapshot.
	///
	/// Raising `abort` makes the pass return what it selected so far.
	pub fn create_new_block(
		&self,
		index: &dyn CandidateIndex,
		oracle: &dyn AdmissibilityOracle,
		target: &BlockTarget,
		abort: &AtomicBool,
	) -> Result<BlockTemplate, Error> {
		let start = Instant::now();
		let selection = match PackageSelector::new(index, oracle, &self.options, target, abort).select() {
			Ok(selection) => selection,
			Err(err) => {
				error!(target: "miner", "Block assembly at height {} failed: {}", target.height, err);
				return Err(err);
			}
		};
		let elapsed = start.elapsed();

		let totals = BlockTotals {
			fee: selection.budget.fee_accrued(),
			weight: selection.budget.weight_used(),
			sigop_cost: selection.budget.sigop_cost_used(),
			count: selection.entries.len(),
		};

		info!(
			target: "miner",
			"Assembled block {}: {} txs, fees {}, weight {}, sigop cost {}, {} packages, {} descendants updated, ended {:?} in {} ms",
			target.height,
			totals.count,
			totals.fee,
			totals.weight,
			totals.sigop_cost,
			selection.packages.len(),
			selection.descendants_updated,
			selection.end,
			elapsed.whole_milliseconds()
		);

		Ok(BlockTemplate {
			height: target.height,
			time: target.time,
			entries: selection.entries,
			totals,
			weight_limit: selection.budget.max_weight(),
			sigop_limit: selection.budget.max_sigop_cost(),
			stats: AssemblyStats {
				packages: selection.packages,
				descendants_updated: selection.descendants_updated,
				rejections: selection.failures.into_rejections(),
				end: selection.end,
				elapsed,
			},
		})
	}
}

#[cfg(test)]
mod tests {
	use super::BlockAssembler;
	use crate::{AssemblerOptions, BlockTarget, LockTimeOracle, PassEnd, RejectReason, Rejection};
	use pool::{CandidateId, FeeRate};
	use std::sync::atomic::AtomicBool;
	use test_data::{CandidateBuilder, PoolBuilder};

	fn ids(values: &[u64]) -> Vec<CandidateId> {
		values.iter().map(|v| CandidateId::from(*v)).collect()
	}

	fn unbounded() -> AssemblerOptions {
		AssemblerOptions {
			max_block_weight: u64::max_value() / 8,
			max_block_sigops_cost: u64::max_value() / 8,
			coinbase_reserved_weight: 0,
			coinbase_reserved_sigops_cost: 0,
			..AssemblerOptions::default()
		}
		.with_min_fee_rate(FeeRate::default())
	}

	fn assemble(options: AssemblerOptions, pool: &pool::MemoryCandidateIndex) -> crate::BlockTemplate {
		BlockAssembler::new(options)
			.create_new_block(pool, &LockTimeOracle::default(), &BlockTarget::new(100, 0, 0), &AtomicBool::new(false))
			.unwrap()
	}

	#[test]
	fn child_pays_for_parent() {
		let pool = PoolBuilder::new()
			.with(CandidateBuilder::with_id(1).size(200).fee(1000))
			.with(CandidateBuilder::with_id(2).size(200).fee(3000).child_of(1))
			.build();

		let template = assemble(unbounded(), &pool);
		assert_eq!(template.transaction_ids(), ids(&[1, 2]));
		assert_eq!(template.totals.fee, 4000);
		assert_eq!(template.totals.weight, 1600);
		assert_eq!(template.totals.count, 2);
		assert_eq!(template.stats.packages.len(), 1);
		assert_eq!(template.stats.packages[0].id, CandidateId::from(2));
		assert_eq!(template.stats.packages[0].count, 2);
		assert_eq!(template.stats.end, PassEnd::Exhausted);
		assert_eq!(template.height, 100);
	}

	#[test]
	fn empty_pool_gives_empty_template() {
		let template = assemble(AssemblerOptions::default(), &pool::MemoryCandidateIndex::new());
		assert!(template.entries.is_empty());
		assert_eq!(template.totals.weight, 4_000);
		assert_eq!(template.totals.sigop_cost, 400);
		assert_eq!(template.weight_limit, 3_996_000);
		assert_eq!(template.stats.end, PassEnd::Exhausted);
	}

	#[test]
	fn raised_abort_flag_selects_nothing() {
		let pool = test_data::independent_pool(10);
		let template = BlockAssembler::new(unbounded())
			.create_new_block(&pool, &LockTimeOracle::default(), &BlockTarget::new(1, 0, 0), &AtomicBool::new(true))
			.unwrap();
		assert!(template.entries.is_empty());
		assert_eq!(template.stats.end, PassEnd::Aborted);
	}

	#[test]
	fn non_final_and_witness_candidates_are_skipped() {
		let pool = PoolBuilder::new()
			.with(CandidateBuilder::with_id(1).fee(1000).lock_time(500))
			.with(CandidateBuilder::with_id(2).fee(900).witness())
			.with(CandidateBuilder::with_id(3).fee(800))
			.build();
		let options = AssemblerOptions {
			witness_enabled: false,
			..unbounded()
		};

		let template = assemble(options, &pool);
		assert_eq!(template.transaction_ids(), ids(&[3]));
		assert_eq!(
			template.stats.rejections,
			vec![
				Rejection {
					id: CandidateId::from(1),
					reason: RejectReason::NonFinal,
				},
				Rejection {
					id: CandidateId::from(2),
					reason: RejectReason::HasWitness,
				},
			]
		);
	}
}
