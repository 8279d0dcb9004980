/// Matrix generator orchestrating bounded retries
pub mod executor;
/// Supply and variety pre-checks
pub mod feasibility;
/// Per-attempt multiset of drawable panel units
pub mod pool;
/// Random cell colour selection
pub mod selection;
/// Consumed-unit projection over a finished matrix
pub mod usage;
