use network::ConsensusParams;
use pool::Candidate;
use std::{error, fmt};

/// Admissibility oracle could not answer.
#[derive(Debug, Clone, PartialEq)]
pub enum OracleError {
	Unavailable(String),
}

impl fmt::Display for OracleError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OracleError::Unavailable(s) => write!(f, "Oracle unavailable: {}", s),
		}
	}
}

impl error::Error for OracleError {}

/// Transaction-level checks applied to every member of a package before it
/// is admitted.
pub trait AdmissibilityOracle {
	/// Whether `candidate` may be included in a block at `height`, with
	/// time-based lock times compared against `lock_time_cutoff`.
	fn is_final(&self, candidate: &Candidate, height: u32, lock_time_cutoff: u32) -> Result<bool, OracleError>;

	/// Whether `candidate` is safe to include, e.g. not at risk of being
	/// reorganised out.
	fn is_safe(&self, candidate: &Candidate) -> Result<bool, OracleError>;
}

/// Lock time finality check. Treats every candidate as safe.
#[derive(Debug, Clone)]
pub struct LockTimeOracle {
	locktime_threshold: u32,
}

impl LockTimeOracle {
	pub fn new(locktime_threshold: u32) -> Self {
		LockTimeOracle { locktime_threshold }
	}

	pub fn from_consensus(consensus: &ConsensusParams) -> Self {
		LockTimeOracle::new(consensus.locktime_threshold)
	}
}

impl Default for LockTimeOracle {
	fn default() -> Self {
		LockTimeOracle::from_consensus(&ConsensusParams::default())
	}
}

impl AdmissibilityOracle for LockTimeOracle {
	fn is_final(&self, candidate: &Candidate, height: u32, lock_time_cutoff: u32) -> Result<bool, OracleError> {
		if candidate.lock_time == 0 {
			return Ok(true);
		}

		let max_lock_time = if candidate.lock_time < self.locktime_threshold {
			height
		} else {
			lock_time_cutoff
		};

		Ok(candidate.lock_time < max_lock_time || candidate.has_final_sequences)
	}

	fn is_safe(&self, _candidate: &Candidate) -> Result<bool, OracleError> {
		Ok(true)
	}
}

#[cfg(test)]
mod tests {
	use super::{AdmissibilityOracle, LockTimeOracle};
	use network::{ConsensusParams, Network};
	use test_data::CandidateBuilder;

	#[test]
	fn zero_lock_time_is_final() {
		let (candidate, _) = CandidateBuilder::with_id(1).lock_time(0).build();
		assert_eq!(LockTimeOracle::default().is_final(&candidate, 0, 0), Ok(true));
	}

	#[test]
	fn height_lock_time_must_be_below_block_height() {
		let oracle = LockTimeOracle::default();
		let (candidate, _) = CandidateBuilder::with_id(1).lock_time(100).build();
		assert_eq!(oracle.is_final(&candidate, 100, u32::max_value()), Ok(false));
		assert_eq!(oracle.is_final(&candidate, 101, 0), Ok(true));
	}

	#[test]
	fn time_lock_time_is_compared_with_cutoff() {
		let oracle = LockTimeOracle::default();
		let (candidate, _) = CandidateBuilder::with_id(1).lock_time(1_600_000_000).build();
		assert_eq!(oracle.is_final(&candidate, u32::max_value(), 1_600_000_000), Ok(false));
		assert_eq!(oracle.is_final(&candidate, 0, 1_600_000_001), Ok(true));
	}

	#[test]
	fn threshold_comes_from_consensus() {
		let consensus = ConsensusParams {
			locktime_threshold: 1_000,
			..ConsensusParams::new(Network::Regtest)
		};
		let oracle = LockTimeOracle::from_consensus(&consensus);
		let (candidate, _) = CandidateBuilder::with_id(1).lock_time(1_500).build();
		// read as a time, so the height no longer matters
		assert_eq!(oracle.is_final(&candidate, 2_000, 1_400), Ok(false));
		assert_eq!(oracle.is_final(&candidate, 0, 1_501), Ok(true));
		assert_eq!(LockTimeOracle::default().is_final(&candidate, 1_501, 0), Ok(true));
	}

	#[test]
	fn final_sequences_disable_lock_time() {
		let (mut candidate, _) = CandidateBuilder::with_id(1).lock_time(1000).build();
		candidate.has_final_sequences = true;
		assert_eq!(LockTimeOracle::default().is_final(&candidate, 1, 0), Ok(true));
	}
}
