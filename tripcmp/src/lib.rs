use std::sync::LazyLock;
use std::time::Instant;

pub mod compare;
pub mod config;
pub mod io;

/// Start of the process, all log timestamps are relative to it
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
