use crate::fee_rate::compare_fee_rates;
use crate::FeeRate;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

/// Aggregate size, fee and sigop cost of an ancestor package.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PackageStats {
	/// Virtual size in bytes.
	pub size: u64,
	/// Fee in satoshis.
	pub fee: u64,
	pub sigop_cost: u64,
}

/// Field of `PackageStats` that would go negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsField {
	Size,
	Fee,
	SigopCost,
}

impl fmt::Display for StatsField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			StatsField::Size => f.write_str("size"),
			StatsField::Fee => f.write_str("fee"),
			StatsField::SigopCost => f.write_str("sigop cost"),
		}
	}
}

impl PackageStats {
	pub fn new(size: u64, fee: u64, sigop_cost: u64) -> Self {
		PackageStats { size, fee, sigop_cost }
	}

	/// Adds `other` to the aggregate, saturating at `u64::MAX`.
	pub fn add(&mut self, other: &PackageStats) {
		self.size = self.size.saturating_add(other.size);
		self.fee = self.fee.saturating_add(other.fee);
		self.sigop_cost = self.sigop_cost.saturating_add(other.sigop_cost);
	}

	/// Removes `other` from the aggregate. Never clamps at zero.
	pub fn checked_sub(&self, other: &PackageStats) -> Result<PackageStats, StatsField> {
		Ok(PackageStats {
			size: self.size.checked_sub(other.size).ok_or(StatsField::Size)?,
			fee: self.fee.checked_sub(other.fee).ok_or(StatsField::Fee)?,
			sigop_cost: self.sigop_cost.checked_sub(other.sigop_cost).ok_or(StatsField::SigopCost)?,
		})
	}

	/// Package fee rate, rounded down to whole satoshis per kvB.
	pub fn fee_rate(&self) -> FeeRate {
		if self.size == 0 {
			return FeeRate::default();
		}
		let rate = u128::from(self.fee) * 1000 / u128::from(self.size);
		FeeRate::from_satoshis_per_kvb(u64::try_from(rate).unwrap_or(u64::max_value()))
	}

	/// Compares package fee rates of `self` and `other`.
	pub fn cmp_fee_rate(&self, other: &PackageStats) -> Ordering {
		compare_fee_rates(self.fee, self.size, other.fee, other.size)
	}

	/// True if the package pays less than `rate` requires for its size.
	pub fn is_below(&self, rate: &FeeRate) -> bool {
		self.fee < rate.fee_for(self.size)
	}
}
