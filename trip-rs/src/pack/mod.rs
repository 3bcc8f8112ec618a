mod brute_force;
mod error;
mod greedy;

#[doc(inline)]
pub use brute_force::BruteForcePacker;

#[doc(inline)]
pub use error::PackError;

#[doc(inline)]
pub use greedy::GreedyPacker;

use crate::entities::{ItemSet, TransportPlan, Weight};

/// Allocates every item of an [`ItemSet`] to trips whose total weight stays within a limit.
pub trait Packer {
    fn name(&self) -> &str;

    /// Packs `items` into trips of at most `limit` weight each.
    ///
    /// An empty item set or a limit of zero yields an empty [`TransportPlan`].
    /// A negative limit, or an item heavier than the limit, is reported as a [`PackError`].
    fn pack(&self, items: &ItemSet, limit: i64) -> Result<TransportPlan, PackError>;
}

/// First-fit-decreasing allocation, see [`GreedyPacker`].
pub fn greedy_pack(items: &ItemSet, limit: i64) -> Result<TransportPlan, PackError> {
    GreedyPacker.pack(items, limit)
}

/// Allocation with the fewest possible trips, see [`BruteForcePacker`].
pub fn brute_force_pack(items: &ItemSet, limit: i64) -> Result<TransportPlan, PackError> {
    BruteForcePacker.pack(items, limit)
}

/// Checks the inputs shared by all packers.
/// Returns the capacity of a single trip, or `None` if no trips can (or need to) be made.
pub(crate) fn validate(items: &ItemSet, limit: i64) -> Result<Option<Weight>, PackError> {
    let capacity = Weight::try_from(limit).map_err(|_| PackError::InvalidLimit { limit })?;
    if items.is_empty() || capacity == 0 {
        return Ok(None);
    }
    match items.iter().find(|item| item.weight > capacity) {
        Some(item) => Err(PackError::ItemExceedsLimit {
            name: item.name.clone(),
            weight: item.weight,
            limit: capacity,
        }),
        None => Ok(Some(capacity)),
    }
}
