use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Compares the greedy and brute-force trip allocations of the items in a `name,weight` file
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder in which to write the JSON results, nothing is written if absent
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the weight limit of the config
    #[arg(short = 'w', long, value_name = "WEIGHT", allow_negative_numbers = true)]
    pub limit: Option<i64>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
