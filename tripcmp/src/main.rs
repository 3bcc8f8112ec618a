use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use tripcmp::config::CompareConfig;
use tripcmp::io::cli::Cli;
use tripcmp::io::output::CompareOutput;
use tripcmp::{compare, io};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CompareConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file).with_context(|| {
                format!("could not open config file: {}", config_file.display())
            })?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    if let Some(limit) = args.limit {
        config.limit = limit;
    }

    info!("[MAIN] Successfully parsed CompareConfig: {config:?}");

    let items = io::read_items(&args.input_file)?;
    let runs = compare::compare(&items, &config)?;

    print!("{}", compare::report(&runs));

    if let Some(solution_folder) = args.solution_folder {
        let input_stem = args
            .input_file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .context("input file name is not valid UTF-8")?;

        fs::create_dir_all(&solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                solution_folder.display()
            )
        })?;

        let output = CompareOutput::new(&items, &runs, config);
        let solution_path = solution_folder.join(format!("sol_{input_stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    Ok(())
}
