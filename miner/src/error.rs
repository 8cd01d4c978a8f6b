use crate::admissibility::OracleError;
use pool::{CandidateId, IndexError, StatsField};
use std::{error, fmt};

/// Fatal assembly error. The pass is abandoned and no template is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
	/// Removing an admitted ancestor drove adjusted package stats negative.
	NegativePackageStats {
		candidate: CandidateId,
		ancestor: CandidateId,
		field: StatsField,
	},
	/// Sorted package places a descendant before one of its ancestors.
	TopologyViolation {
		ancestor: CandidateId,
		descendant: CandidateId,
	},
	/// Candidate is already part of the block.
	AlreadySelected(CandidateId),
	/// Pool query failed.
	Index(IndexError),
	/// Admissibility oracle failed.
	Oracle(OracleError),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::NegativePackageStats {
				candidate,
				ancestor,
				field,
			} => write!(f, "Package {} of candidate {} is negative after removing ancestor {}", field, candidate, ancestor),
			Error::TopologyViolation { ancestor, descendant } => {
				write!(f, "Candidate {} is ordered before its ancestor {}", descendant, ancestor)
			}
			Error::AlreadySelected(id) => write!(f, "Candidate {} is already in the block", id),
			Error::Index(err) => write!(f, "Pool error: {}", err),
			Error::Oracle(err) => write!(f, "Admissibility oracle error: {}", err),
		}
	}
}

impl error::Error for Error {}

impl From<IndexError> for Error {
	fn from(err: IndexError) -> Self {
		Error::Index(err)
	}
}

impl From<OracleError> for Error {
	fn from(err: OracleError) -> Self {
		Error::Oracle(err)
	}
}

/// Policy reason for leaving a package out of the block. Never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
	/// Package pays less than the minimal block fee rate. Ends the pass.
	BelowFeeFloor,
	OverWeight,
	OverSigops,
	/// Member is not final at the target height and time.
	NonFinal,
	/// Member flagged unsafe by the admissibility oracle.
	Unsafe,
	/// Member carries witness data while witness is not allowed.
	HasWitness,
	/// Ancestor package is over the configured limits.
	AncestorLimit,
}

impl RejectReason {
	pub fn as_str(&self) -> &'static str {
		match self {
			RejectReason::BelowFeeFloor => "below-fee-floor",
			RejectReason::OverWeight => "over-weight",
			RejectReason::OverSigops => "over-sigops",
			RejectReason::NonFinal => "non-final",
			RejectReason::Unsafe => "unsafe",
			RejectReason::HasWitness => "has-witness",
			RejectReason::AncestorLimit => "ancestor-limit",
		}
	}
}

impl fmt::Display for RejectReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
