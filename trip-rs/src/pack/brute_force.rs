use itertools::Itertools;
use log::{debug, info};
use thousands::Separable;

use crate::entities::{ItemSet, TransportPlan, Weight};
use crate::pack::{PackError, Packer, validate};
use crate::partition::{Partition, bell_number, partitions};
use crate::util::assertions;

/// Exhaustive packer: enumerates every set partition of the items and keeps the feasible one with the fewest trips.
///
/// Partitions are streamed from [`partitions`], so only the current partition and the incumbent are held in memory.
/// The incumbent is only replaced on a strict improvement: among all optimal allocations,
/// the first one in enumeration order is returned.
///
/// Runtime grows with the Bell number of the item count.
/// This packer exists as an optimal baseline, not for large instances.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForcePacker;

impl Packer for BruteForcePacker {
    fn name(&self) -> &str {
        "brute-force"
    }

    fn pack(&self, items: &ItemSet, limit: i64) -> Result<TransportPlan, PackError> {
        let Some(capacity) = validate(items, limit)? else {
            return Ok(TransportPlan::default());
        };

        let weights = items.iter().map(|item| item.weight).collect_vec();
        let indices = (0..items.len()).collect_vec();

        info!(
            "[BRUTE] enumerating {} partitions of {} items",
            bell_number(items.len())
                .map_or_else(|| "too many".to_string(), |b| b.separate_with_commas()),
            items.len()
        );

        let mut best: Option<Partition<usize>> = None;
        let mut n_examined: usize = 0;

        for partition in partitions(&indices) {
            n_examined += 1;
            //only strictly fewer trips can replace the incumbent
            if best.as_ref().is_some_and(|b| partition.len() >= b.len()) {
                continue;
            }
            if partition_fits(&partition, &weights, capacity) {
                debug!(
                    "[BRUTE] better: {} trips (partition #{})",
                    partition.len(),
                    n_examined.separate_with_commas()
                );
                best = Some(partition);
            }
        }

        debug!(
            "[BRUTE] examined {} partitions",
            n_examined.separate_with_commas()
        );

        let best = best.ok_or(PackError::NoFeasiblePlan { limit: capacity })?;
        let plan = TransportPlan::new(
            best.into_iter()
                .map(|group| {
                    group
                        .into_iter()
                        .map(|i| items.items()[i].name.clone())
                        .collect_vec()
                })
                .collect_vec(),
        );
        debug_assert!(assertions::plan_covers_items(items, &plan));
        debug_assert!(assertions::plan_respects_limit(items, &plan, capacity));

        info!(
            "[BRUTE] packed {} items into {} trips",
            items.len(),
            plan.n_trips()
        );
        Ok(plan)
    }
}

fn partition_fits(partition: &Partition<usize>, weights: &[Weight], capacity: Weight) -> bool {
    partition.iter().all(|group| {
        group
            .iter()
            .try_fold(0 as Weight, |total, &i| total.checked_add(weights[i]))
            .is_some_and(|total| total <= capacity)
    })
}
