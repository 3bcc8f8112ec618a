use serde::{Deserialize, Serialize};

/// Configuration of the comparison between the packers
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct CompareConfig {
    /// Maximum total weight carried on a single trip
    pub limit: i64,
    /// Brute force is skipped for item sets larger than this.
    /// The number of partitions it has to examine grows with the Bell number of the item count (B(12) = 4,213,597).
    pub max_brute_force_items: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            max_brute_force_items: 12,
        }
    }
}
