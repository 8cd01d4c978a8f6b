use crate::{AssemblerOptions, RejectReason};
use pool::{Candidate, FeeRate, PackageStats};

/// Resources consumed by the block under construction.
///
/// Counters start at the coinbase reservation and only ever grow.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockBudget {
	weight_used: u64,
	sigop_cost_used: u64,
	fee_accrued: u64,
	transactions: usize,
	max_weight: u64,
	max_sigop_cost: u64,
	min_fee_rate: FeeRate,
	witness_scale_factor: u64,
}

impl BlockBudget {
	pub fn new(options: &AssemblerOptions) -> Self {
		BlockBudget {
			weight_used: options.coinbase_reserved_weight,
			sigop_cost_used: options.coinbase_reserved_sigops_cost,
			fee_accrued: 0,
			transactions: 0,
			max_weight: options.max_block_weight,
			max_sigop_cost: options.max_block_sigops_cost,
			min_fee_rate: options.block_min_fee_rate,
			witness_scale_factor: options.witness_scale_factor,
		}
	}

	/// Whether a package of `package_size` vbytes and `package_sigop_cost`
	/// still fits. Both limits are strict: a package filling the block up to
	/// the exact limit does not fit.
	pub fn would_accept(&self, package_size: u64, package_sigop_cost: u64) -> bool {
		self.test(package_size, package_sigop_cost).is_ok()
	}

	/// Same as `would_accept`, naming the exhausted resource.
	pub fn test(&self, package_size: u64, package_sigop_cost: u64) -> Result<(), RejectReason> {
		let package_weight = package_size.saturating_mul(self.witness_scale_factor);
		if self.weight_used.saturating_add(package_weight) >= self.max_weight {
			return Err(RejectReason::OverWeight);
		}
		if self.sigop_cost_used.saturating_add(package_sigop_cost) >= self.max_sigop_cost {
			return Err(RejectReason::OverSigops);
		}
		Ok(())
	}

	/// Whether `package` pays at least the minimal block fee rate.
	pub fn pays_fee_floor(&self, package: &PackageStats) -> bool {
		!package.is_below(&self.min_fee_rate)
	}

	/// Accounts for `members`, which must have passed `would_accept` as a package.
	pub fn commit(&mut self, members: &[&Candidate]) {
		for member in members {
			self.weight_used = self.weight_used.saturating_add(member.weight);
			self.sigop_cost_used = self.sigop_cost_used.saturating_add(member.sigop_cost);
			self.fee_accrued = self.fee_accrued.saturating_add(member.fee);
			self.transactions += 1;
		}
	}

	/// Less than `margin` weight is left.
	pub fn is_near_full(&self, margin: u64) -> bool {
		self.weight_used > self.max_weight.saturating_sub(margin)
	}

	pub fn weight_used(&self) -> u64 {
		self.weight_used
	}

	pub fn sigop_cost_used(&self) -> u64 {
		self.sigop_cost_used
	}

	pub fn fee_accrued(&self) -> u64 {
		self.fee_accrued
	}

	pub fn transactions(&self) -> usize {
		self.transactions
	}

	pub fn max_weight(&self) -> u64 {
		self.max_weight
	}

	pub fn max_sigop_cost(&self) -> u64 {
		self.max_sigop_cost
	}
}

#[cfg(test)]
mod tests {
	use super::BlockBudget;
	use crate::{AssemblerOptions, RejectReason};
	use pool::{FeeRate, PackageStats};
	use test_data::CandidateBuilder;

	fn options(max_weight: u64, max_sigop_cost: u64) -> AssemblerOptions {
		AssemblerOptions {
			max_block_weight: max_weight,
			max_block_sigops_cost: max_sigop_cost,
			coinbase_reserved_weight: 0,
			coinbase_reserved_sigops_cost: 0,
			..AssemblerOptions::default()
		}
	}

	#[test]
	fn limits_are_strict() {
		let budget = BlockBudget::new(&options(1000, 100));
		assert!(budget.would_accept(249, 99));
		assert_eq!(budget.test(250, 0), Err(RejectReason::OverWeight));
		assert_eq!(budget.test(0, 100), Err(RejectReason::OverSigops));
		assert_eq!(budget.test(250, 100), Err(RejectReason::OverWeight));
	}

	#[test]
	fn starts_with_coinbase_reservation() {
		let budget = BlockBudget::new(&AssemblerOptions::default());
		assert_eq!(budget.weight_used(), 4_000);
		assert_eq!(budget.sigop_cost_used(), 400);
		assert_eq!(budget.fee_accrued(), 0);
		assert_eq!(budget.max_weight(), 3_996_000);
	}

	#[test]
	fn commit_accumulates_member_totals() {
		let mut budget = BlockBudget::new(&options(10_000, 100));
		let (a, _) = CandidateBuilder::with_id(1).size(200).fee(1000).sigop_cost(4).build();
		let (b, _) = CandidateBuilder::with_id(2).size(300).weight(900).fee(500).sigop_cost(8).build();
		budget.commit(&[&a, &b]);

		assert_eq!(budget.weight_used(), 1700);
		assert_eq!(budget.sigop_cost_used(), 12);
		assert_eq!(budget.fee_accrued(), 1500);
		assert_eq!(budget.transactions(), 2);
		assert!(!budget.would_accept(2075, 0));
		assert!(budget.would_accept(2074, 0));
	}

	#[test]
	fn commit_saturates_instead_of_overflowing() {
		let mut budget = BlockBudget::new(&options(10_000, 100));
		let (a, _) = CandidateBuilder::with_id(1).fee(u64::max_value()).build();
		let (b, _) = CandidateBuilder::with_id(2).fee(1).weight(u64::max_value()).build();
		budget.commit(&[&a, &b]);

		assert_eq!(budget.fee_accrued(), u64::max_value());
		assert_eq!(budget.weight_used(), u64::max_value());
		assert!(!budget.would_accept(0, 0));
	}

	#[test]
	fn near_full_margin() {
		let mut budget = BlockBudget::new(&options(10_000, 100));
		let (a, _) = CandidateBuilder::with_id(1).weight(6_000).build();
		budget.commit(&[&a]);
		assert!(!budget.is_near_full(4_000));
		let (b, _) = CandidateBuilder::with_id(2).weight(1).build();
		budget.commit(&[&b]);
		assert!(budget.is_near_full(4_000));
	}

	#[test]
	fn fee_floor() {
		let budget = BlockBudget::new(&options(10_000, 100).with_min_fee_rate(FeeRate::from_satoshis_per_kvb(1000)));
		assert!(budget.pays_fee_floor(&PackageStats::new(250, 250, 0)));
		assert!(!budget.pays_fee_floor(&PackageStats::new(250, 249, 0)));
	}
}
