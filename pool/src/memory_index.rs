use crate::{AncestorLimits, AncestorScore, Candidate, CandidateId, CandidateIndex, IndexError};
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// Information on current `MemoryCandidateIndex` state
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PoolInformation {
	/// Number of transactions currently in the pool
	pub transactions_count: usize,
	/// Total virtual size of transactions in the pool
	pub transactions_size_in_bytes: u64,
}

#[derive(Debug, Clone, Copy)]
enum Direction {
	Ancestors,
	Descendants,
}

#[derive(Debug)]
struct Entry {
	candidate: Candidate,
	parents: Vec<usize>,
	children: Vec<usize>,
}

/// In-memory pool snapshot: an arena of entries addressed by slot, indexed by
/// id and by ancestor score.
#[derive(Debug, Default)]
pub struct MemoryCandidateIndex {
	/// Parents always occupy lower slots than their children.
	entries: Vec<Entry>,
	by_id: HashMap<CandidateId, usize>,
	by_ancestor_score: BTreeSet<AncestorScore>,
}

impl MemoryCandidateIndex {
	pub fn new() -> Self {
		MemoryCandidateIndex::default()
	}

	/// Inserts `candidate` spending outputs of `parents`, which must already
	/// be in the pool. Cached ancestor stats of `candidate` are recomputed.
	pub fn insert(&mut self, mut candidate: Candidate, parents: &[CandidateId]) -> Result<(), IndexError> {
		if self.by_id.contains_key(&candidate.id) {
			return Err(IndexError::DuplicateCandidate(candidate.id));
		}
		if !candidate.has_consistent_weight() {
			return Err(IndexError::InconsistentWeight(candidate.id));
		}

		let mut parent_slots = Vec::with_capacity(parents.len());
		for parent in parents {
			let slot = self.slot(parent)?;
			if !parent_slots.contains(&slot) {
				parent_slots.push(slot);
			}
		}

		let ancestors = self.walk(&parent_slots, Direction::Ancestors);
		let mut package = candidate.own_stats();
		for slot in &ancestors {
			package.add(&self.entries[*slot].candidate.own_stats());
		}
		candidate.ancestors = package;
		candidate.ancestor_count = ancestors.len() as u32 + 1;

		let slot = self.entries.len();
		for parent in &parent_slots {
			self.entries[*parent].children.push(slot);
		}

		trace!(target: "pool", "Inserted candidate {} with {} in-pool ancestors", candidate.id, ancestors.len());
		self.by_id.insert(candidate.id, slot);
		self.by_ancestor_score.insert(candidate.ancestor_score());
		self.entries.push(Entry {
			candidate,
			parents: parent_slots,
			children: Vec::new(),
		});
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn information(&self) -> PoolInformation {
		PoolInformation {
			transactions_count: self.entries.len(),
			transactions_size_in_bytes: self.entries.iter().map(|entry| entry.candidate.size).sum(),
		}
	}

	fn slot(&self, id: &CandidateId) -> Result<usize, IndexError> {
		self.by_id.get(id).cloned().ok_or(IndexError::UnknownCandidate(*id))
	}

	/// Transitive closure over parent or child links, in slot order.
	fn walk(&self, start: &[usize], direction: Direction) -> Vec<usize> {
		let mut seen = HashSet::new();
		let mut queue: VecDeque<usize> = start.iter().cloned().collect();
		while let Some(slot) = queue.pop_front() {
			if !seen.insert(slot) {
				continue;
			}
			let entry = &self.entries[slot];
			match direction {
				Direction::Ancestors => queue.extend(entry.parents.iter().cloned()),
				Direction::Descendants => queue.extend(entry.children.iter().cloned()),
			}
		}
		let mut slots: Vec<usize> = seen.into_iter().collect();
		slots.sort();
		slots
	}

	fn ids(&self, slots: Vec<usize>) -> Vec<CandidateId> {
		slots.into_iter().map(|slot| self.entries[slot].candidate.id).collect()
	}
}

impl CandidateIndex for MemoryCandidateIndex {
	fn entry(&self, id: &CandidateId) -> Option<&Candidate> {
		self.by_id.get(id).map(|slot| &self.entries[*slot].candidate)
	}

	fn by_ancestor_score<'a>(&'a self) -> Box<dyn Iterator<Item = CandidateId> + 'a> {
		Box::new(self.by_ancestor_score.iter().map(|score| score.id))
	}

	fn ancestors_of(&self, id: &CandidateId, limits: &AncestorLimits) -> Result<Vec<CandidateId>, IndexError> {
		let slot = self.slot(id)?;
		let entry = &self.entries[slot];
		if !limits.allows(entry.candidate.ancestor_count, &entry.candidate.ancestors) {
			return Err(IndexError::LimitsExceeded(*id));
		}
		Ok(self.ids(self.walk(&entry.parents, Direction::Ancestors)))
	}

	fn descendants_of(&self, id: &CandidateId) -> Result<Vec<CandidateId>, IndexError> {
		let slot = self.slot(id)?;
		Ok(self.ids(self.walk(&self.entries[slot].children, Direction::Descendants)))
	}
}
