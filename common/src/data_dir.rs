//! Data directory resolution

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::{Error, NetworkType, Result};

/// Gets the default directory for storing the blockchain db, log files, checkpoints, etc.
///
/// Networks other than mainnet get their own subdirectory so their files never mix
pub fn get_default_data_dir(network: NetworkType) -> Result<PathBuf> {
    let base = ProjectDirs::from("cash", "Unprll Project", "Unprll")
        .ok_or(Error::NoProjectDirectory)?
        .data_dir()
        .to_path_buf();
    get_data_dir(&base, network)
}

/// Gets the data directory for a network under a given root, creating it if needed
pub fn get_data_dir(root: &Path, network: NetworkType) -> Result<PathBuf> {
    let mut path = root.to_path_buf();
    if let Some(subdirectory) = network.subdirectory() {
        path.push(subdirectory);
    }

    std::fs::create_dir_all(&path).or_else(|err| {
        if err.kind() == std::io::ErrorKind::AlreadyExists {
            Ok(())
        } else {
            Err(err)
        }
    })?;

    Ok(path)
}
