use std::path::PathBuf;

use structopt::StructOpt;

use bin_common::Config as BinCommonConfig;
use checkpoints::Config as CheckpointsConfig;
use common::NetworkConfig;
use crypto::Hash256;

#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
pub struct Config {
    #[structopt(flatten)]
    pub bin_common_config: BinCommonConfig,

    #[structopt(flatten)]
    pub network_config: NetworkConfig,

    #[structopt(flatten)]
    pub checkpoints_config: CheckpointsConfig,

    /// DNS-over-HTTPS endpoint used for DNS checkpoints
    #[structopt(long, default_value = "https://cloudflare-dns.com/dns-query")]
    pub doh_endpoint: String,

    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
pub enum Command {
    /// Lists every checkpoint
    Show,

    /// Checks a block hash against the checkpoints
    CheckBlock {
        #[structopt(long)]
        height: u64,

        #[structopt(long)]
        hash: Hash256,
    },

    /// Checks whether an alternative block may replace part of the chain
    CheckAlt {
        /// Height of the current chain
        #[structopt(long)]
        chain_height: u64,

        /// Height of the alternative block
        #[structopt(long)]
        block_height: u64,
    },

    /// Writes the checkpoints to a hashfile
    Export {
        #[structopt(long, parse(from_os_str))]
        output: PathBuf,
    },

    /// Checks a hashfile for checkpoints conflicting with ours
    Compare {
        #[structopt(long, parse(from_os_str))]
        other: PathBuf,
    },
}
