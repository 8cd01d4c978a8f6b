use crate::Error;
use pool::{AncestorScore, Candidate, CandidateId, CandidateIndex, IndexError, PackageStats};
use std::collections::{BTreeSet, HashMap};

/// Candidate whose package stats no longer count ancestors already in the block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifiedCandidate {
	pub id: CandidateId,
	pub package: PackageStats,
}

/// Candidates with some, but not all, in-pool ancestors in the block,
/// ordered by their adjusted ancestor score.
///
/// Entries only hold ids and adjusted stats; the candidates themselves stay
/// in the `CandidateIndex`.
#[derive(Debug, Default)]
pub struct ModifiedCandidateSet {
	by_id: HashMap<CandidateId, PackageStats>,
	by_ancestor_score: BTreeSet<AncestorScore>,
}

impl ModifiedCandidateSet {
	pub fn new() -> Self {
		ModifiedCandidateSet::default()
	}

	/// Removes `admitted`'s own contribution from the package of `id`,
	/// starting from the pool's cached stats on first touch.
	pub fn upsert(&mut self, index: &dyn CandidateIndex, id: &CandidateId, admitted: &Candidate) -> Result<(), Error> {
		let current = match self.by_id.get(id) {
			Some(package) => *package,
			None => {
				index
					.entry(id)
					.ok_or_else(|| Error::Index(IndexError::UnknownCandidate(*id)))?
					.ancestors
			}
		};

		let adjusted = current
			.checked_sub(&admitted.own_stats())
			.map_err(|field| Error::NegativePackageStats {
				candidate: *id,
				ancestor: admitted.id,
				field,
			})?;

		self.remove(id);
		trace!(target: "miner", "Candidate {} package adjusted to {:?} after {} was added", id, adjusted, admitted.id);
		self.by_ancestor_score.insert(score(id, &adjusted));
		self.by_id.insert(*id, adjusted);
		Ok(())
	}

	/// Entry with the highest adjusted ancestor fee rate, lowest id on ties.
	pub fn best(&self) -> Option<ModifiedCandidate> {
		self.by_ancestor_score.iter().next().and_then(|score| self.get(&score.id))
	}

	pub fn get(&self, id: &CandidateId) -> Option<ModifiedCandidate> {
		self.by_id.get(id).map(|package| ModifiedCandidate {
			id: *id,
			package: *package,
		})
	}

	pub fn remove(&mut self, id: &CandidateId) -> Option<ModifiedCandidate> {
		let package = self.by_id.remove(id)?;
		self.by_ancestor_score.remove(&score(id, &package));
		Some(ModifiedCandidate { id: *id, package })
	}

	pub fn contains(&self, id: &CandidateId) -> bool {
		self.by_id.contains_key(id)
	}

	pub fn len(&self) -> usize {
		self.by_id.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_id.is_empty()
	}
}

fn score(id: &CandidateId, package: &PackageStats) -> AncestorScore {
	AncestorScore::new(*id, package.fee, package.size)
}
