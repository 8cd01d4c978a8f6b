use crate::Error;
use pool::{Candidate, CandidateId};
use std::collections::HashMap;

/// Orders package members so that ancestors come first.
///
/// Members are sorted by in-pool ancestor count, then by id. An ancestor
/// always has fewer ancestors than its descendant, so the result is
/// topological as long as the counts are right; `ancestors_of` is used to
/// check that it is.
pub fn sort_package<'a, F>(mut package: Vec<&'a Candidate>, mut ancestors_of: F) -> Result<Vec<&'a Candidate>, Error>
where
	F: FnMut(&CandidateId) -> Result<Vec<CandidateId>, Error>,
{
	package.sort_by(|a, b| a.ancestor_count.cmp(&b.ancestor_count).then_with(|| a.id.cmp(&b.id)));

	let positions: HashMap<CandidateId, usize> = package
		.iter()
		.enumerate()
		.map(|(position, member)| (member.id, position))
		.collect();

	for (position, member) in package.iter().enumerate() {
		for ancestor in ancestors_of(&member.id)? {
			match positions.get(&ancestor) {
				Some(ancestor_position) if *ancestor_position > position => {
					return Err(Error::TopologyViolation {
						ancestor,
						descendant: member.id,
					});
				}
				_ => (),
			}
		}
	}

	Ok(package)
}

#[cfg(test)]
mod tests {
	use super::sort_package;
	use crate::Error;
	use pool::{AncestorLimits, Candidate, CandidateId, CandidateIndex};
	use test_data::{CandidateBuilder, PoolBuilder};

	fn id(value: u64) -> CandidateId {
		CandidateId::from(value)
	}

	#[test]
	fn ancestors_precede_descendants() {
		// 9 -> 5 -> 1, 9 -> 7
		let pool = PoolBuilder::new()
			.with(CandidateBuilder::with_id(9))
			.with(CandidateBuilder::with_id(5).child_of(9))
			.with(CandidateBuilder::with_id(7).child_of(9))
			.with(CandidateBuilder::with_id(1).child_of(5))
			.build();
		let package: Vec<&Candidate> = [1, 7, 5, 9].iter().map(|v| pool.entry(&id(*v)).unwrap()).collect();

		let sorted = sort_package(package, |member| {
			pool.ancestors_of(member, &AncestorLimits::unlimited()).map_err(Error::from)
		})
		.unwrap();

		let order: Vec<_> = sorted.iter().map(|member| member.id).collect();
		assert_eq!(order, vec![id(9), id(5), id(7), id(1)]);
	}

	#[test]
	fn wrong_ancestor_counts_are_fatal() {
		let (mut parent, _) = CandidateBuilder::with_id(1).build();
		let (mut child, _) = CandidateBuilder::with_id(2).build();
		parent.ancestor_count = 2;
		child.ancestor_count = 1;

		let result = sort_package(vec![&parent, &child], |member| {
			if *member == id(2) {
				Ok(vec![id(1)])
			} else {
				Ok(vec![])
			}
		});

		assert_eq!(
			result.map(|_| ()),
			Err(Error::TopologyViolation {
				ancestor: id(1),
				descendant: id(2),
			})
		);
	}

	#[test]
	fn ancestors_outside_the_package_are_ignored() {
		let (mut child, _) = CandidateBuilder::with_id(2).build();
		child.ancestor_count = 2;
		let sorted = sort_package(vec![&child], |_| Ok(vec![id(1)])).unwrap();
		assert_eq!(sorted.len(), 1);
	}
}
