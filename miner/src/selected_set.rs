use crate::Error;
use pool::CandidateId;
use std::collections::HashSet;

/// Candidates already committed to the block, in block order.
#[derive(Debug, Default, Clone)]
pub struct SelectedSet {
	order: Vec<CandidateId>,
	members: HashSet<CandidateId>,
}

impl SelectedSet {
	pub fn new() -> Self {
		SelectedSet::default()
	}

	/// Appends `id`. Selecting a candidate twice is an internal error.
	pub fn push(&mut self, id: CandidateId) -> Result<(), Error> {
		if !self.members.insert(id) {
			return Err(Error::AlreadySelected(id));
		}
		self.order.push(id);
		Ok(())
	}

	pub fn contains(&self, id: &CandidateId) -> bool {
		self.members.contains(id)
	}

	pub fn into_vec(self) -> Vec<CandidateId> {
		self.order
	}
}

#[cfg(test)]
mod tests {
	use super::SelectedSet;
	use crate::Error;
	use pool::CandidateId;

	#[test]
	fn keeps_order_and_rejects_duplicates() {
		let mut selected = SelectedSet::new();
		selected.push(CandidateId::from(2)).unwrap();
		selected.push(CandidateId::from(1)).unwrap();
		assert_eq!(selected.push(CandidateId::from(2)), Err(Error::AlreadySelected(CandidateId::from(2))));
		assert_eq!(selected.into_vec(), vec![CandidateId::from(2), CandidateId::from(1)]);
	}
}
