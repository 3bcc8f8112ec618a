use serde::{Deserialize, Serialize};
use trip_rs::entities::ItemSet;
use trip_rs::io::ext_repr::{ExtItem, ExtTransportPlan};

use crate::compare::PackRun;
use crate::config::CompareConfig;

/// Result of a single packer, as written to the solution file
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PackResult {
    pub algorithm: String,
    pub run_time_ms: f64,
    pub plan: ExtTransportPlan,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CompareOutput {
    pub items: Vec<ExtItem>,
    pub results: Vec<PackResult>,
    pub config: CompareConfig,
}

impl CompareOutput {
    pub fn new(items: &ItemSet, runs: &[PackRun], config: CompareConfig) -> Self {
        let results = runs
            .iter()
            .map(|run| PackResult {
                algorithm: run.algorithm.clone(),
                run_time_ms: run.run_time.as_secs_f64() * 1000.0,
                plan: trip_rs::io::export(items, &run.plan),
            })
            .collect();

        Self {
            items: trip_rs::io::export_items(items),
            results,
            config,
        }
    }
}
