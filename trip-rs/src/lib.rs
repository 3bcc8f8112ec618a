//! `trip-rs`: allocating weighted items to capacity-limited trips.
//!
//! Two packers share one data contract: a first-fit-decreasing heuristic and an
//! exhaustive search over every set partition of the items. The latter is the
//! optimal baseline the heuristic is measured against.

/// Entities to model the trip allocation problem
pub mod entities;

/// Lazy enumeration of all set partitions of a sequence
pub mod partition;

/// Greedy and brute-force packers
pub mod pack;

/// Importing item sets into and exporting transport plans out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use pack::{PackError, brute_force_pack, greedy_pack};
