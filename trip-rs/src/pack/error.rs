use crate::entities::Weight;

/// Errors that can occur while packing items into trips.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PackError {
    /// The weight limit is negative.
    #[error("invalid weight limit {limit}: must not be negative")]
    InvalidLimit { limit: i64 },

    /// A single item is heavier than a trip can carry, so no allocation exists.
    #[error("item '{name}' weighs {weight}, which exceeds the weight limit of {limit}")]
    ItemExceedsLimit {
        name: String,
        weight: Weight,
        limit: Weight,
    },

    /// None of the enumerated allocations keeps every trip within the limit.
    #[error("no allocation of the items stays within the weight limit of {limit}")]
    NoFeasiblePlan { limit: Weight },
}
