use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info, warn};
use serde::Serialize;
use trip_rs::entities::{ItemSet, Weight};

use crate::EPOCH;

pub mod cli;
pub mod output;

pub fn read_items(path: &Path) -> Result<ItemSet> {
    let file = File::open(path)
        .with_context(|| format!("could not open item file: {}", path.display()))?;
    let items = trip_rs::io::parse_items(BufReader::new(file))
        .with_context(|| format!("could not parse item file: {}", path.display()))?;

    match items.total_weight() {
        Some(total) => info!(
            "[IO] read {} items (total weight {total}) from {}",
            items.len(),
            path.display()
        ),
        None => warn!(
            "[IO] read {} items from {}, their total weight exceeds {}",
            items.len(),
            path.display(),
            Weight::MAX
        ),
    }
    Ok(items)
}

pub fn write_json(output: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, output)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "[IO] solution written to {:?}",
        fs::canonicalize(path).context("could not canonicalize path")?
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}]",
                record.level(),
                hours,
                min,
                sec,
            );

            out.finish(format_args!("{prefix:<20}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()
        .context("could not initialize logger")?;
    info!("[IO] time: {}", jiff::Timestamp::now());
    Ok(())
}
