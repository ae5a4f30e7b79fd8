use std::path::Path;

use anyhow::Context;
use log::{error, info, warn};
use structopt::StructOpt;

use checkpoints::file::HashFile;
use checkpoints::{CheckpointStatus, Checkpoints, TxtResolver};

mod config;
mod doh;

use config::{Command, Config};
use doh::DohResolver;

fn main() {
    // Command Line Arguments
    let config = Config::from_args();

    let network = config.network_config.network_type().unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(2);
    });
    let data_directory = config.bin_common_config.data_directory(network).unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(2);
    });

    // Logging
    bin_common::logger::init(config.bin_common_config.log_level, &data_directory, "unprll-checkpoints")
        .unwrap_or_else(|err| {
            eprintln!("Failed to initialise logger: {}", err);
            std::process::exit(2);
        });

    // Main
    match run(&config, network, &data_directory) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(1);
        }
    }
}

/// Builds the checkpoint table and runs the requested command
///
/// # Returns
/// Whether the command's check succeeded
fn run(config: &Config, network: common::NetworkType, data_directory: &Path) -> anyhow::Result<bool> {
    let mut checkpoints = Checkpoints::for_network(network).context("Invalid built-in checkpoints")?;

    let checkpoints_file = config.checkpoints_config.checkpoints_file(data_directory);
    let resolver = if config.checkpoints_config.dns_checkpoints {
        Some(DohResolver::new(&config.doh_endpoint).context("Unable to set up DNS-over-HTTPS client")?)
    } else {
        None
    };
    // Extra checkpoints are optional, carry on with what we have
    if let Err(err) = checkpoints.load_new_checkpoints(
        &checkpoints_file,
        network,
        resolver.as_ref().map(|resolver| resolver as &dyn TxtResolver),
    ) {
        warn!("Failed to load new checkpoints: {}", err);
    }
    info!("{} {} checkpoints up to height {}", checkpoints.len(), network, checkpoints.get_max_height());

    match &config.command {
        Command::Show => {
            let difficulties = checkpoints.get_difficulty_points();
            for (height, hash) in checkpoints.get_points() {
                match difficulties.get(height) {
                    Some(difficulty) => println!("{}\t{}\t{}", height, hash, difficulty),
                    None => println!("{}\t{}", height, hash),
                }
            }
            println!("Max height: {}", checkpoints.get_max_height());
            Ok(true)
        }
        Command::CheckBlock { height, hash } => {
            let status = checkpoints.check_block(*height, hash);
            match status {
                CheckpointStatus::NotCheckpoint => println!("Height {} is not a checkpoint", height),
                CheckpointStatus::Passed => println!("Block {} matches the checkpoint at height {}", hash, height),
                CheckpointStatus::Failed => println!(
                    "Block {} does NOT match the checkpoint at height {} ({})",
                    hash,
                    height,
                    checkpoints.get_points()[height]
                ),
            }
            if checkpoints.is_in_checkpoint_zone(*height) {
                println!("Height {} is in the checkpoint zone", height);
            }
            Ok(status.accepted())
        }
        Command::CheckAlt { chain_height, block_height } => {
            let allowed = checkpoints.is_alternative_block_allowed(*chain_height, *block_height);
            println!(
                "Alternative block at height {} is {} on a chain of height {}",
                block_height,
                if allowed { "allowed" } else { "not allowed" },
                chain_height
            );
            Ok(allowed)
        }
        Command::Export { output } => {
            checkpoints
                .save_checkpoints_to_json(output)
                .with_context(|| format!("Unable to write {}", output.display()))?;
            Ok(true)
        }
        Command::Compare { other } => {
            let hashes = HashFile::read(other).with_context(|| format!("Unable to read {}", other.display()))?;
            let mut theirs = Checkpoints::new();
            for line in &hashes.hashlines {
                if let Err(err) = theirs.add_checkpoint(line.height, &line.hash, "") {
                    warn!("Skipping checkpoint at height {} in {}: {}", line.height, other.display(), err);
                }
            }
            match checkpoints.check_for_conflicts(&theirs) {
                Ok(()) => {
                    println!("No conflicts with {} ({} checkpoints)", other.display(), theirs.len());
                    Ok(true)
                }
                Err(err) => {
                    println!("Conflict with {}: {}", other.display(), err);
                    Ok(false)
                }
            }
        }
    }
}
