use byteorder::{BigEndian, ByteOrder};
use hex::{FromHex, ToHex};
use std::{fmt, str};

/// Transaction id of a pool candidate.
///
/// Ordering is plain byte order and doubles as the tie-break between
/// candidates with equal fee rates.
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CandidateId([u8; 32]);

impl CandidateId {
	pub fn new(bytes: [u8; 32]) -> Self {
		CandidateId(bytes)
	}
}

impl From<[u8; 32]> for CandidateId {
	fn from(bytes: [u8; 32]) -> Self {
		CandidateId(bytes)
	}
}

/// Numeric ids are stored big-endian in the trailing bytes, so numeric order
/// and byte order agree.
impl From<u64> for CandidateId {
	fn from(value: u64) -> Self {
		let mut bytes = [0u8; 32];
		BigEndian::write_u64(&mut bytes[24..], value);
		CandidateId(bytes)
	}
}

impl str::FromStr for CandidateId {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let bytes: Vec<u8> = s.from_hex().map_err(|e| format!("invalid candidate id {}: {}", s, e))?;
		if bytes.len() != 32 {
			return Err(format!("invalid candidate id length: {}", bytes.len()));
		}
		let mut id = [0u8; 32];
		id.copy_from_slice(&bytes);
		Ok(CandidateId(id))
	}
}

impl fmt::Display for CandidateId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.to_hex::<String>())
	}
}

impl fmt::Debug for CandidateId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

#[cfg(test)]
mod tests {
	use super::CandidateId;

	#[test]
	fn numeric_ids_keep_numeric_order() {
		assert!(CandidateId::from(1) < CandidateId::from(2));
		assert!(CandidateId::from(255) < CandidateId::from(256));
		assert!(CandidateId::from(0x0100_0000_0000) > CandidateId::from(0xff));
	}

	#[test]
	fn id_parses_its_own_display() {
		let id = CandidateId::from(0xdead_beef);
		let shown = id.to_string();
		assert_eq!(shown, "00000000000000000000000000000000000000000000000000000000deadbeef");
		assert_eq!(shown.parse::<CandidateId>().unwrap(), id);
		assert!("deadbeef".parse::<CandidateId>().is_err());
		assert!("zz".parse::<CandidateId>().is_err());
	}
}
