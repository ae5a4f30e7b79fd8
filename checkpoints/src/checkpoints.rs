use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::path::Path;

use log::{debug, info, warn};

use common::{parse_difficulty, Difficulty, NetworkType};
use crypto::Hash256;
use ensure_macro::ensure;

use crate::defaults::default_checkpoints;
use crate::dns::TxtResolver;
use crate::error::{Error, Result};

/// Outcome of checking a block against the checkpoint table
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CheckpointStatus {
    /// The height isn't pinned, so checkpoints have no say in the block
    NotCheckpoint,
    /// The height is pinned and the block's hash matches
    Passed,
    /// The height is pinned and the block's hash is different. The block must be rejected
    Failed,
}

impl CheckpointStatus {
    /// Whether the block may be accepted
    pub fn accepted(self) -> bool {
        self != CheckpointStatus::Failed
    }
    /// Whether the block's height is pinned
    pub fn is_checkpoint(self) -> bool {
        self != CheckpointStatus::NotCheckpoint
    }
}

/// # Checkpoints
///
/// A table of trusted block hashes (and optionally cumulative difficulties) by height
///
/// Pins are never overwritten. Re-adding an existing pin with the same value is a no-op, adding
/// one with a different value is refused. The table is filled at startup and read afterwards;
/// callers sharing it between threads should wrap it in an `RwLock`
#[derive(Clone, Debug, Default)]
pub struct Checkpoints {
    points: BTreeMap<u64, Hash256>,
    difficulty_points: BTreeMap<u64, Difficulty>,
}

impl Checkpoints {
    /// Creates an empty checkpoint table
    pub fn new() -> Checkpoints {
        Checkpoints::default()
    }

    /// Creates a checkpoint table holding the built-in checkpoints of the given network
    pub fn for_network(network: NetworkType) -> Result<Checkpoints> {
        let mut checkpoints = Checkpoints::new();
        checkpoints.init_default_checkpoints(network)?;
        Ok(checkpoints)
    }

    /// Adds the built-in checkpoints of the given network
    pub fn init_default_checkpoints(&mut self, network: NetworkType) -> Result<()> {
        for (height, hash, difficulty) in default_checkpoints(network) {
            self.add_checkpoint(*height, hash, difficulty)?;
        }
        debug!("Loaded {} built-in {} checkpoints", self.points.len(), network);
        Ok(())
    }

    /// Pins `height` to `hash_str`, and to `difficulty_str` if it isn't empty
    ///
    /// The hash and the difficulty are checked independently. A difficulty that fails to parse or
    /// conflicts doesn't undo the hash pin made in the same call
    ///
    /// # Errors
    /// If the hash isn't 64 hex characters, the difficulty isn't an unsigned integer, or either
    /// conflicts with an existing pin at the same height
    pub fn add_checkpoint(&mut self, height: u64, hash_str: &str, difficulty_str: &str) -> Result<()> {
        let hash = Hash256::try_from(hash_str).map_err(|source| {
            let err = Error::InvalidHash { text: hash_str.to_string(), source };
            warn!("{}", err);
            err
        })?;

        if let Some(existing) = self.points.get(&height) {
            if *existing != hash {
                let err = Error::ConflictingHash { height, existing: existing.clone(), new: hash };
                warn!("{}", err);
                return Err(err);
            }
        }
        self.points.insert(height, hash);

        if !difficulty_str.is_empty() {
            let difficulty = parse_difficulty(difficulty_str).map_err(|source| {
                let err = Error::InvalidDifficulty { text: difficulty_str.to_string(), source };
                warn!("{}", err);
                err
            })?;
            if let Some(existing) = self.difficulty_points.get(&height) {
                if *existing != difficulty {
                    let err = Error::ConflictingDifficulty { height, existing: *existing, new: difficulty };
                    warn!("{}", err);
                    return Err(err);
                }
            }
            self.difficulty_points.insert(height, difficulty);
        }
        Ok(())
    }

    /// Pinned hashes by height
    pub fn get_points(&self) -> &BTreeMap<u64, Hash256> {
        &self.points
    }

    /// Pinned cumulative difficulties by height
    pub fn get_difficulty_points(&self) -> &BTreeMap<u64, Difficulty> {
        &self.difficulty_points
    }

    /// The highest pinned height, 0 if nothing is pinned
    pub fn get_max_height(&self) -> u64 {
        self.points.keys().next_back().copied().unwrap_or(0)
    }

    /// Number of pinned heights
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no height is pinned
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether `height` is at or below the highest checkpoint
    pub fn is_in_checkpoint_zone(&self, height: u64) -> bool {
        !self.points.is_empty() && height <= self.get_max_height()
    }

    /// Checks a block's hash against the checkpoint at its height
    pub fn check_block(&self, height: u64, hash: &Hash256) -> CheckpointStatus {
        match self.points.get(&height) {
            None => CheckpointStatus::NotCheckpoint,
            Some(expected) if expected == hash => {
                info!("CHECKPOINT PASSED FOR HEIGHT {} {}", height, hash);
                CheckpointStatus::Passed
            }
            Some(expected) => {
                warn!("CHECKPOINT FAILED FOR HEIGHT {}. EXPECTED HASH: {}, FETCHED HASH: {}", height, expected, hash);
                CheckpointStatus::Failed
            }
        }
    }

    /// Shorthand for `check_block(..).accepted()`
    pub fn is_block_valid(&self, height: u64, hash: &Hash256) -> bool {
        self.check_block(height, hash).accepted()
    }

    /// Whether an alternative block at `block_height` may replace part of a chain whose current
    /// height is `blockchain_height`
    ///
    /// Blocks at or below the nearest checkpoint at or below `blockchain_height` can't be
    /// replaced. The genesis block can never be replaced
    pub fn is_alternative_block_allowed(&self, blockchain_height: u64, block_height: u64) -> bool {
        if block_height == 0 {
            return false;
        }

        match self.points.range(..=blockchain_height).next_back() {
            // The chain hasn't reached the first checkpoint yet
            None => true,
            Some((checkpoint_height, _)) => *checkpoint_height < block_height,
        }
    }

    /// Checks that every height pinned by both tables has the same hash in both
    ///
    /// Nothing is copied from `other`
    ///
    /// # Errors
    /// On the first height where the two tables disagree
    pub fn check_for_conflicts(&self, other: &Checkpoints) -> Result<()> {
        for (height, hash) in other.get_points() {
            if let Some(existing) = self.points.get(height) {
                ensure!(
                    existing == hash,
                    Error::ConflictingHash { height: *height, existing: existing.clone(), new: hash.clone() }
                );
            }
        }
        Ok(())
    }

    /// Adds checkpoints from the optional sources: the JSON hashfile at `path`, then DNS if a
    /// resolver is given
    ///
    /// Both loaders always run
    ///
    /// # Errors
    /// The first error returned by either loader
    pub fn load_new_checkpoints(&mut self, path: &Path, network: NetworkType, dns: Option<&dyn TxtResolver>) -> Result<()> {
        let file_result = self.load_checkpoints_from_json(path);
        let dns_result = match dns {
            Some(resolver) => self.load_checkpoints_from_dns(network, resolver),
            None => Ok(()),
        };
        file_result.and(dns_result)
    }
}
