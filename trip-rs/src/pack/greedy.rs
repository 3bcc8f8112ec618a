use itertools::Itertools;
use log::{debug, info};

use crate::entities::{Item, ItemSet, TransportPlan, Trip};
use crate::pack::{PackError, Packer, validate};
use crate::util::assertions;

/// First-fit-decreasing packer.
///
/// Items are sorted by descending weight (equal weights by descending name).
/// Each trip is filled by scanning the remaining items in that order and taking every item that still fits.
/// A new trip is opened as soon as nothing else fits, until all items are allocated.
///
/// The result always respects the limit, but may use more trips than [`BruteForcePacker`](crate::pack::BruteForcePacker).
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPacker;

impl Packer for GreedyPacker {
    fn name(&self) -> &str {
        "greedy"
    }

    fn pack(&self, items: &ItemSet, limit: i64) -> Result<TransportPlan, PackError> {
        let Some(capacity) = validate(items, limit)? else {
            return Ok(TransportPlan::default());
        };

        let mut pool: Vec<&Item> = items
            .iter()
            .sorted_by(|a, b| b.weight.cmp(&a.weight).then_with(|| b.name.cmp(&a.name)))
            .collect_vec();

        let mut trips: Vec<Trip> = vec![];
        //every item fits an empty trip, so each pass allocates at least one item
        while !pool.is_empty() {
            let mut trip = Trip::new();
            let mut remaining = capacity;
            pool.retain(|item| match item.weight <= remaining {
                true => {
                    remaining -= item.weight;
                    trip.push(item.name.clone());
                    false
                }
                false => true,
            });
            debug!(
                "[GREEDY] trip {} carries {:?} ({}/{})",
                trips.len(),
                trip,
                capacity - remaining,
                capacity
            );
            trips.push(trip);
        }

        let plan = TransportPlan::new(trips);
        debug_assert!(assertions::plan_covers_items(items, &plan));
        debug_assert!(assertions::plan_respects_limit(items, &plan, capacity));

        info!(
            "[GREEDY] packed {} items into {} trips",
            items.len(),
            plan.n_trips()
        );
        Ok(plan)
    }
}
