use std::collections::HashSet;
use std::hash::Hash;

use log::error;

use crate::entities::{ItemSet, TransportPlan, Weight};
use crate::partition::Partition;

//Various checks to verify correctness of the produced plans and partitions
//Used in debug_assert!() blocks and tests

/// Groups are non-empty, pairwise disjoint and together hold exactly the given elements.
pub fn partition_is_valid<T: Eq + Hash>(elements: &[T], partition: &Partition<T>) -> bool {
    if partition.iter().any(|group| group.is_empty()) {
        return false;
    }
    let mut seen = HashSet::new();
    for element in partition.iter().flatten() {
        if !seen.insert(element) {
            return false;
        }
    }
    seen.len() == elements.len() && elements.iter().all(|e| seen.contains(e))
}

/// Every item of `items` is carried on exactly one trip and no trip carries an unknown item.
pub fn plan_covers_items(items: &ItemSet, plan: &TransportPlan) -> bool {
    let mut carried = HashSet::new();
    for name in plan.trips().iter().flatten() {
        if !carried.insert(name.as_str()) {
            error!("item {name} is carried on more than one trip");
            return false;
        }
        if !items.contains(name) {
            error!("item {name} is not part of the item set");
            return false;
        }
    }
    if let Some(name) = items.names().find(|name| !carried.contains(name)) {
        error!("item {name} is not carried on any trip");
        return false;
    }
    true
}

/// No trip carries more than `limit`.
pub fn plan_respects_limit(items: &ItemSet, plan: &TransportPlan, limit: Weight) -> bool {
    plan.trip_weights(items)
        .iter()
        .enumerate()
        .all(|(i, &weight)| match weight <= limit {
            true => true,
            false => {
                error!("trip {i} carries {weight}, exceeding the limit of {limit}");
                false
            }
        })
}
