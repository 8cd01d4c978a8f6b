//! Read-only view of the unconfirmed transaction pool, as consumed by block assembly.

extern crate byteorder;
#[macro_use]
extern crate log;
extern crate rustc_hex as hex;

mod candidate;
mod candidate_id;
mod candidate_index;
mod error;
mod fee_rate;
mod memory_index;
mod package_stats;

pub use candidate::{Candidate, WITNESS_SCALE_FACTOR};
pub use candidate_id::CandidateId;
pub use candidate_index::{AncestorLimits, CandidateIndex};
pub use error::IndexError;
pub use fee_rate::{compare_fee_rates, AncestorScore, FeeRate};
pub use memory_index::{MemoryCandidateIndex, PoolInformation};
pub use package_stats::{PackageStats, StatsField};
