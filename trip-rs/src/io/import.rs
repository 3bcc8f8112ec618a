use std::io::BufRead;

use anyhow::{Context, Result, ensure};
use log::{debug, warn};

use crate::entities::{ItemSet, Weight};

/// Parses an item set from comma-separated `name,weight` records, one per line.
///
/// Blank lines are skipped and fields beyond the second are ignored.
/// When a name occurs more than once, the last weight wins.
pub fn parse_items(reader: impl BufRead) -> Result<ItemSet> {
    let mut items = ItemSet::new();

    for (i, line) in reader.lines().enumerate() {
        let line_nr = i + 1;
        let line = line.with_context(|| format!("could not read line {line_nr}"))?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }

        let mut fields = record.split(',');
        let name = fields.next().unwrap_or_default().trim();
        let weight = fields
            .next()
            .with_context(|| format!("line {line_nr}: expected `name,weight`, found {record:?}"))?
            .trim();
        ensure!(!name.is_empty(), "line {line_nr}: missing item name");

        let weight: Weight = weight
            .parse()
            .with_context(|| format!("line {line_nr}: invalid weight {weight:?} for item {name}"))?;

        if fields.next().is_some() {
            debug!("[IMPORT] line {line_nr}: ignoring fields after the weight of {name}");
        }
        if let Some(previous) = items.insert(name, weight) {
            warn!("[IMPORT] item {name} listed more than once, weight {previous} replaced by {weight}");
        }
    }

    Ok(items)
}
