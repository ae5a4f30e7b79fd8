//! JSON hashfile of checkpoints
//!
//! ```json
//! { "hashlines": [ { "height": 1600000, "hash": "<64 hex characters>" } ] }
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::Checkpoints;

/// Default name of the hashfile inside the data directory
pub const CHECKPOINTS_FILE_NAME: &str = "checkpoints.json";

/// A single checkpoint in a hashfile
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashLine {
    /// Height of the checkpoint
    pub height: u64,
    /// Hex encoded block hash at that height
    pub hash: String,
}

/// The hashfile document
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashFile {
    /// Checkpoints in file order
    pub hashlines: Vec<HashLine>,
}

impl HashFile {
    /// Builds a hashfile holding every hash pinned in `checkpoints`, lowest height first
    pub fn from_checkpoints(checkpoints: &Checkpoints) -> Self {
        HashFile {
            hashlines: checkpoints
                .get_points()
                .iter()
                .map(|(height, hash)| HashLine { height: *height, hash: hash.to_string() })
                .collect(),
        }
    }

    /// Reads a hashfile
    ///
    /// # Errors
    /// If the file can't be read or isn't a hashfile document
    pub fn read(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Writes the hashfile, replacing whatever is at `path`
    pub fn write(&self, path: &Path) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

impl Checkpoints {
    /// Adds checkpoints from the hashfile at `path`
    ///
    /// A missing file isn't an error. Only checkpoints above the highest height pinned before the
    /// call are considered, so the file can extend the table but never reach into it. Malformed
    /// lines are skipped; conflicting lines are skipped too but fail the load once the rest of the
    /// file has been added
    ///
    /// # Errors
    /// If the file exists but can't be read or parsed, or a line conflicts with another
    pub fn load_checkpoints_from_json(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            info!("Blockchain checkpoints file not found");
            return Ok(());
        }

        info!("Adding checkpoints from blockchain hashfile {}", path.display());

        let prev_max_height = self.get_max_height();
        info!("Hard-coded max checkpoint height is {}", prev_max_height);

        let hashes = HashFile::read(path).map_err(|err| {
            error!("Error loading checkpoints from {}: {}", path.display(), err);
            err
        })?;

        let mut first_conflict = None;
        for line in hashes.hashlines {
            if line.height <= prev_max_height {
                debug!("Ignoring checkpoint height {}", line.height);
                continue;
            }
            debug!("Adding checkpoint height {}, hash={}", line.height, line.hash);
            match self.add_checkpoint(line.height, &line.hash, "") {
                Ok(()) => {}
                Err(err) if err.is_conflict() => {
                    first_conflict.get_or_insert(err);
                }
                Err(_) => warn!("Skipping malformed checkpoint at height {} in {}", line.height, path.display()),
            }
        }

        first_conflict.map_or(Ok(()), Err)
    }

    /// Writes every pinned hash to a hashfile at `path`
    pub fn save_checkpoints_to_json(&self, path: &Path) -> Result<()> {
        HashFile::from_checkpoints(self).write(path)?;
        info!("Wrote {} checkpoints to {}", self.len(), path.display());
        Ok(())
    }
}
