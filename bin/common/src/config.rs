use std::path::PathBuf;

use structopt::StructOpt;

use common::{data_dir, NetworkType};

/// Configuration for common systems
#[derive(StructOpt, Debug)]
#[structopt(rename_all = "kebab-case")]
pub struct Config {
    /// Sets the log level for the logger
    /// The levels correspond to the following:
    ///
    ///   0 - Warn
    ///   1 - Info
    ///   2 - Debug
    ///   3 - Trace
    #[structopt(long, default_value = "1")]
    pub log_level: u8,

    /// Sets the data directory to be used
    /// If unset, the default data directory is used
    #[structopt(long, parse(from_os_str))]
    pub data_directory: Option<PathBuf>,
}

impl Config {
    /// The data directory for the given network, created if it doesn't exist
    ///
    /// A custom data directory gets the same per-network layout as the default one
    pub fn data_directory(&self, network: NetworkType) -> common::Result<PathBuf> {
        match &self.data_directory {
            Some(custom_data_directory) => data_dir::get_data_dir(custom_data_directory, network),
            None => data_dir::get_default_data_dir(network),
        }
    }
}
