use crate::topological_sort::sort_package;
use crate::{
	AdmissibilityOracle, AssemblerOptions, BlockBudget, BlockTarget, Error, FailureTracker, ModifiedCandidate, ModifiedCandidateSet,
	PackageSummary, PassEnd, RejectReason, SelectedSet, TemplateEntry,
};
use pool::{AncestorLimits, Candidate, CandidateId, CandidateIndex, IndexError, PackageStats};
use std::cmp::Ordering as CmpOrdering;
use std::iter::{once, Peekable};
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Source {
	/// Untouched pool entry under the index cursor.
	Index,
	/// Head of the modified set.
	Modified,
}

/// Package chosen for evaluation, with stats adjusted for ancestors already in the block.
#[derive(Debug, Clone, Copy)]
struct Winner {
	id: CandidateId,
	package: PackageStats,
	source: Source,
}

impl Winner {
	fn indexed(candidate: &Candidate) -> Self {
		Winner {
			id: candidate.id,
			package: candidate.ancestors,
			source: Source::Index,
		}
	}

	fn modified(modified: ModifiedCandidate) -> Self {
		Winner {
			id: modified.id,
			package: modified.package,
			source: Source::Modified,
		}
	}
}

enum PackageOutcome {
	Added,
	Rejected(RejectReason),
}

/// Result of a selection pass.
#[derive(Debug)]
pub struct Selection {
	/// Selected transactions, ancestors first.
	pub entries: Vec<TemplateEntry>,
	pub budget: BlockBudget,
	pub packages: Vec<PackageSummary>,
	pub descendants_updated: usize,
	pub failures: FailureTracker,
	pub end: PassEnd,
}

/// Greedy ancestor-package selection over a pool snapshot.
///
/// Merges two orderings: untouched pool entries by cached ancestor score, and
/// the modified set by adjusted score. The better head wins; on equal fee
/// rates the modified head wins.
pub struct PackageSelector<'a> {
	index: &'a dyn CandidateIndex,
	oracle: &'a dyn AdmissibilityOracle,
	options: &'a AssemblerOptions,
	height: u32,
	lock_time_cutoff: u32,
	abort: &'a AtomicBool,
	budget: BlockBudget,
	modified: ModifiedCandidateSet,
	failures: FailureTracker,
	selected: SelectedSet,
	entries: Vec<TemplateEntry>,
	packages: Vec<PackageSummary>,
	descendants_updated: usize,
}

impl<'a> PackageSelector<'a> {
	pub fn new(
		index: &'a dyn CandidateIndex,
		oracle: &'a dyn AdmissibilityOracle,
		options: &'a AssemblerOptions,
		target: &BlockTarget,
		abort: &'a AtomicBool,
	) -> Self {
		PackageSelector {
			index,
			oracle,
			options,
			height: target.height,
			lock_time_cutoff: target.lock_time_cutoff(options.locktime_median_time_past),
			abort,
			budget: BlockBudget::new(options),
			modified: ModifiedCandidateSet::new(),
			failures: FailureTracker::new(options.max_consecutive_failures, options.near_full_margin),
			selected: SelectedSet::new(),
			entries: Vec::new(),
			packages: Vec::new(),
			descendants_updated: 0,
		}
	}

	/// Runs the pass to completion. Whatever was selected when the pass
	/// stops early is still a valid, budget-respecting, ordered selection.
	pub fn select(mut self) -> Result<Selection, Error> {
		let index = self.index;
		let mut cursor = index.by_ancestor_score().peekable();

		let end = loop {
			if self.abort.load(Ordering::SeqCst) {
				break PassEnd::Aborted;
			}

			let winner = match self.next_winner(&mut cursor)? {
				Some(winner) => winner,
				None => break PassEnd::Exhausted,
			};

			// nothing after the best remaining package can pay more
			if !self.budget.pays_fee_floor(&winner.package) {
				self.failures.note(winner.id, RejectReason::BelowFeeFloor);
				break PassEnd::BelowFeeFloor;
			}

			if let PackageOutcome::Rejected(reason) = self.try_add_package(&winner)? {
				self.reject(&winner, reason);
				if self.failures.should_stop(&self.budget) {
					break PassEnd::NearFull;
				}
			}
		};

		Ok(Selection {
			entries: self.entries,
			budget: self.budget,
			packages: self.packages,
			descendants_updated: self.descendants_updated,
			failures: self.failures,
			end,
		})
	}

	/// Picks the better of the index cursor head and the modified set head.
	/// The index cursor only advances when its head wins or is already resolved.
	fn next_winner<I>(&self, cursor: &mut Peekable<I>) -> Result<Option<Winner>, Error>
	where
		I: Iterator<Item = CandidateId>,
	{
		loop {
			let head = cursor.peek().cloned();
			if let Some(ref id) = head {
				if self.is_resolved(id) {
					cursor.next();
					continue;
				}
			}

			let best_modified = self.modified.best();
			let head = match head {
				Some(id) => self.entry(&id)?,
				None => return Ok(best_modified.map(Winner::modified)),
			};

			return match best_modified {
				Some(modified) if modified.package.cmp_fee_rate(&head.ancestors) != CmpOrdering::Less => {
					Ok(Some(Winner::modified(modified)))
				}
				_ => {
					cursor.next();
					Ok(Some(Winner::indexed(head)))
				}
			};
		}
	}

	fn is_resolved(&self, id: &CandidateId) -> bool {
		self.selected.contains(id) || self.modified.contains(id) || self.failures.contains(id)
	}

	fn entry(&self, id: &CandidateId) -> Result<&'a Candidate, Error> {
		self.index
			.entry(id)
			.ok_or_else(|| Error::Index(IndexError::UnknownCandidate(*id)))
	}

	fn try_add_package(&mut self, winner: &Winner) -> Result<PackageOutcome, Error> {
		let index = self.index;
		if self.selected.contains(&winner.id) {
			return Err(Error::AlreadySelected(winner.id));
		}

		if let Err(reason) = self.budget.test(winner.package.size, winner.package.sigop_cost) {
			return Ok(PackageOutcome::Rejected(reason));
		}

		let ancestors = match index.ancestors_of(&winner.id, &self.options.ancestor_limits) {
			Ok(ancestors) => ancestors,
			Err(IndexError::LimitsExceeded(_)) => return Ok(PackageOutcome::Rejected(RejectReason::AncestorLimit)),
			Err(err) => return Err(err.into()),
		};

		let mut package = Vec::with_capacity(ancestors.len() + 1);
		for id in ancestors.iter().chain(once(&winner.id)) {
			if !self.selected.contains(id) {
				package.push(self.entry(id)?);
			}
		}

		for member in &package {
			if let Some(reason) = self.test_transaction(member)? {
				return Ok(PackageOutcome::Rejected(reason));
			}
		}

		let sorted = sort_package(package, |id| {
			index.ancestors_of(id, &AncestorLimits::unlimited()).map_err(Error::from)
		})?;
		self.add_package(winner, sorted)?;
		Ok(PackageOutcome::Added)
	}

	fn test_transaction(&self, member: &Candidate) -> Result<Option<RejectReason>, Error> {
		if !self.oracle.is_final(member, self.height, self.lock_time_cutoff)? {
			return Ok(Some(RejectReason::NonFinal));
		}
		if !self.oracle.is_safe(member)? {
			return Ok(Some(RejectReason::Unsafe));
		}
		if member.has_witness && !self.options.witness_enabled {
			return Ok(Some(RejectReason::HasWitness));
		}
		Ok(None)
	}

	fn add_package(&mut self, winner: &Winner, members: Vec<&'a Candidate>) -> Result<(), Error> {
		debug_assert_eq!(
			members.iter().fold(PackageStats::default(), |mut package, member| {
				package.add(&member.own_stats());
				package
			}),
			winner.package
		);

		for member in &members {
			self.selected.push(member.id)?;
			self.modified.remove(&member.id);
			self.entries.push(TemplateEntry {
				id: member.id,
				fee: member.fee,
				weight: member.weight,
				sigop_cost: member.sigop_cost,
			});
		}
		self.budget.commit(&members);
		self.failures.reset_consecutive();
		self.packages.push(PackageSummary {
			id: winner.id,
			package: winner.package,
			count: members.len(),
		});
		trace!(
			target: "miner",
			"Added package of {} ({} txs, fee {}, size {}, {}), block weight {}",
			winner.id,
			members.len(),
			winner.package.fee,
			winner.package.size,
			winner.package.fee_rate(),
			self.budget.weight_used()
		);

		self.update_descendants(&members)
	}

	/// Takes the newly added members out of the packages of their descendants.
	fn update_descendants(&mut self, added: &[&'a Candidate]) -> Result<(), Error> {
		let index = self.index;
		for member in added {
			for descendant in index.descendants_of(&member.id)? {
				if self.selected.contains(&descendant) || self.failures.contains(&descendant) {
					continue;
				}
				self.modified.upsert(index, &descendant, member)?;
				self.descendants_updated += 1;
			}
		}
		Ok(())
	}

	fn reject(&mut self, winner: &Winner, reason: RejectReason) {
		let from_modified = winner.source == Source::Modified;
		if from_modified {
			self.modified.remove(&winner.id);
		}
		self.failures.reject(winner.id, reason, from_modified);
	}
}
