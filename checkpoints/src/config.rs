use std::path::{Path, PathBuf};

use structopt::StructOpt;

use crate::file::CHECKPOINTS_FILE_NAME;

/// Checkpoint sources configuration
#[derive(StructOpt, Debug, Default)]
#[structopt(rename_all = "kebab-case")]
pub struct Config {
    /// JSON hashfile with additional checkpoints
    /// If unset, checkpoints.json in the data directory is used
    #[structopt(long, parse(from_os_str))]
    pub checkpoints_file: Option<PathBuf>,

    /// Also add checkpoints published over DNS
    #[structopt(long)]
    pub dns_checkpoints: bool,
}

impl Config {
    /// The hashfile to load, given the data directory in use
    pub fn checkpoints_file(&self, data_directory: &Path) -> PathBuf {
        self.checkpoints_file
            .clone()
            .unwrap_or_else(|| data_directory.join(CHECKPOINTS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_data_directory() {
        let config = Config::from_iter_safe(&["unprll"]).unwrap();
        assert!(!config.dns_checkpoints);
        assert_eq!(config.checkpoints_file(Path::new("/data")), Path::new("/data").join("checkpoints.json"));

        let config = Config::from_iter_safe(&["unprll", "--checkpoints-file", "/tmp/cp.json", "--dns-checkpoints"]).unwrap();
        assert!(config.dns_checkpoints);
        assert_eq!(config.checkpoints_file(Path::new("/data")), PathBuf::from("/tmp/cp.json"));
    }
}
