use crate::CandidateId;
use std::{error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum IndexError {
	/// Candidate is not in the pool.
	UnknownCandidate(CandidateId),
	/// Candidate is already in the pool.
	DuplicateCandidate(CandidateId),
	/// Weight of the candidate is above its virtual size times the witness scale factor.
	InconsistentWeight(CandidateId),
	/// Ancestor package of the candidate is over the requested limits.
	LimitsExceeded(CandidateId),
	/// The pool could not be queried.
	Unavailable(String),
}

impl fmt::Display for IndexError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			IndexError::UnknownCandidate(id) => write!(f, "Unknown candidate {}", id),
			IndexError::DuplicateCandidate(id) => write!(f, "Candidate {} is already in the pool", id),
			IndexError::InconsistentWeight(id) => write!(f, "Weight of {} does not fit its virtual size", id),
			IndexError::LimitsExceeded(id) => write!(f, "Ancestor limits exceeded for {}", id),
			IndexError::Unavailable(s) => write!(f, "Pool unavailable: {}", s),
		}
	}
}

impl error::Error for IndexError {}
