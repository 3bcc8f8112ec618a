use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{info, warn};
use thousands::Separable;
use trip_rs::entities::{ItemSet, TransportPlan};
use trip_rs::pack::{BruteForcePacker, GreedyPacker, Packer};

use crate::config::CompareConfig;

/// Plan produced by a single packer, and how long it took
#[derive(Debug, Clone)]
pub struct PackRun {
    pub algorithm: String,
    pub plan: TransportPlan,
    pub run_time: Duration,
}

/// Runs and times a single packer.
pub fn run_packer(packer: &dyn Packer, items: &ItemSet, limit: i64) -> Result<PackRun> {
    let start = Instant::now();
    let plan = packer
        .pack(items, limit)
        .with_context(|| format!("{} packer failed", packer.name()))?;
    let run_time = start.elapsed();

    info!(
        "[CMP] {} finished in {}µs: {} trips {:?}",
        packer.name(),
        run_time.as_micros().separate_with_commas(),
        plan.n_trips(),
        plan.trips()
    );

    Ok(PackRun {
        algorithm: packer.name().to_string(),
        plan,
        run_time,
    })
}

/// Packs `items` with the greedy packer and, if the item set is small enough, with the brute-force packer.
pub fn compare(items: &ItemSet, config: &CompareConfig) -> Result<Vec<PackRun>> {
    let mut runs = vec![run_packer(&GreedyPacker, items, config.limit)?];

    if items.len() <= config.max_brute_force_items {
        let brute = run_packer(&BruteForcePacker, items, config.limit)?;
        let surplus = runs[0].plan.n_trips().saturating_sub(brute.plan.n_trips());
        if surplus > 0 {
            info!("[CMP] greedy needs {surplus} more trip(s) than the optimum");
        }
        runs.push(brute);
    } else {
        warn!(
            "[CMP] skipping brute force: {} items exceed the maximum of {}",
            items.len(),
            config.max_brute_force_items
        );
    }

    Ok(runs)
}

/// Human-readable summary: the number of trips and the run time (in seconds) of each packer.
pub fn report(runs: &[PackRun]) -> String {
    runs.iter()
        .map(|run| {
            format!(
                "{}:\nNumber of trips: {}\nTime: {:.6}\n",
                run.algorithm,
                run.plan.n_trips(),
                run.run_time.as_secs_f64()
            )
        })
        .join("\n")
}
