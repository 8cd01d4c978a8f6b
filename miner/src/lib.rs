//! Block template assembly: selects pool candidates for the next block by
//! ancestor package fee rate.

#[macro_use]
extern crate log;
extern crate network;
extern crate pool;
extern crate time;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[cfg(test)]
extern crate test_data;

mod admissibility;
mod block_assembler;
mod block_budget;
mod block_template;
mod error;
mod failure_tracker;
mod modified_set;
mod options;
mod package_selector;
mod selected_set;
mod topological_sort;

pub use admissibility::{AdmissibilityOracle, LockTimeOracle, OracleError};
pub use block_assembler::BlockAssembler;
pub use block_budget::BlockBudget;
pub use block_template::{AssemblyStats, BlockTemplate, BlockTotals, PackageSummary, PassEnd, TemplateEntry};
pub use error::{Error, RejectReason};
pub use failure_tracker::{FailureTracker, Rejection};
pub use modified_set::{ModifiedCandidate, ModifiedCandidateSet};
pub use options::{AssemblerOptions, BlockTarget};
pub use package_selector::{PackageSelector, Selection};
pub use selected_set::SelectedSet;
pub use topological_sort::sort_package;
