use crate::CandidateId;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

/// Fee rate in satoshis per 1000 virtual bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FeeRate {
	satoshis_per_kvb: u64,
}

impl FeeRate {
	pub fn from_satoshis_per_kvb(satoshis_per_kvb: u64) -> Self {
		FeeRate { satoshis_per_kvb }
	}

	pub fn from_satoshis_per_byte(satoshis_per_byte: u64) -> Self {
		FeeRate {
			satoshis_per_kvb: satoshis_per_byte.saturating_mul(1000),
		}
	}

	pub fn satoshis_per_kvb(&self) -> u64 {
		self.satoshis_per_kvb
	}

	/// Minimal fee for `size` virtual bytes at this rate.
	///
	/// A non-zero rate never charges nothing for a non-empty package.
	pub fn fee_for(&self, size: u64) -> u64 {
		let fee = u128::from(self.satoshis_per_kvb) * u128::from(size) / 1000;
		let fee = u64::try_from(fee).unwrap_or(u64::max_value());
		if fee == 0 && size != 0 && self.satoshis_per_kvb != 0 {
			1
		} else {
			fee
		}
	}
}

impl fmt::Display for FeeRate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{:03} sat/vB", self.satoshis_per_kvb / 1000, self.satoshis_per_kvb % 1000)
	}
}

/// Compares `fee_a / size_a` with `fee_b / size_b` without division.
pub fn compare_fee_rates(fee_a: u64, size_a: u64, fee_b: u64, size_b: u64) -> Ordering {
	(u128::from(fee_a) * u128::from(size_b)).cmp(&(u128::from(fee_b) * u128::from(size_a)))
}

/// Ordering key of a candidate by (adjusted) ancestor fee rate.
///
/// Sorts best first: higher rate, then lower id.
#[derive(Debug, Clone, Copy)]
pub struct AncestorScore {
	pub fee: u64,
	pub size: u64,
	pub id: CandidateId,
}

impl AncestorScore {
	pub fn new(id: CandidateId, fee: u64, size: u64) -> Self {
		AncestorScore { fee, size, id }
	}
}

impl Ord for AncestorScore {
	fn cmp(&self, other: &Self) -> Ordering {
		compare_fee_rates(other.fee, other.size, self.fee, self.size).then_with(|| self.id.cmp(&other.id))
	}
}

impl PartialOrd for AncestorScore {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl PartialEq for AncestorScore {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for AncestorScore {}

#[cfg(test)]
mod tests {
	use super::{compare_fee_rates, AncestorScore, FeeRate};
	use crate::CandidateId;
	use std::cmp::Ordering;
	use std::collections::BTreeSet;

	#[test]
	fn fee_for_rounds_down_but_never_to_zero() {
		let rate = FeeRate::from_satoshis_per_kvb(1000);
		assert_eq!(rate.fee_for(250), 250);
		assert_eq!(FeeRate::from_satoshis_per_kvb(1500).fee_for(3), 4);
		assert_eq!(FeeRate::from_satoshis_per_kvb(1).fee_for(10), 1);
		assert_eq!(FeeRate::from_satoshis_per_kvb(1).fee_for(0), 0);
		assert_eq!(FeeRate::default().fee_for(1_000_000), 0);
	}

	#[test]
	fn fee_rates_compare_as_rationals() {
		assert_eq!(compare_fee_rates(4000, 400, 1000, 100), Ordering::Equal);
		assert_eq!(compare_fee_rates(4001, 400, 1000, 100), Ordering::Greater);
		assert_eq!(compare_fee_rates(1, 3, 1, 2), Ordering::Less);
		assert_eq!(compare_fee_rates(u64::max_value(), 1, u64::max_value(), 2), Ordering::Greater);
	}

	#[test]
	fn scores_sort_best_first_with_id_tie_break() {
		let mut set = BTreeSet::new();
		set.insert(AncestorScore::new(CandidateId::from(3), 1000, 200));
		set.insert(AncestorScore::new(CandidateId::from(2), 500, 100));
		set.insert(AncestorScore::new(CandidateId::from(1), 4000, 400));
		set.insert(AncestorScore::new(CandidateId::from(4), 100, 1000));

		let order: Vec<_> = set.iter().map(|score| score.id).collect();
		assert_eq!(
			order,
			vec![CandidateId::from(1), CandidateId::from(2), CandidateId::from(3), CandidateId::from(4)]
		);
	}

	#[test]
	fn fee_rate_display() {
		assert_eq!(FeeRate::from_satoshis_per_kvb(1500).to_string(), "1.500 sat/vB");
		assert_eq!(FeeRate::from_satoshis_per_byte(2).to_string(), "2.000 sat/vB");
	}
}
