#![deny(missing_docs)]

//! Types shared between the node's crates: network selection, cumulative difficulty and
//! data directory handling

mod config;
pub mod data_dir;
pub mod difficulty;
mod error;
mod network;

pub use config::NetworkConfig;
pub use difficulty::{parse_difficulty, Difficulty};
pub use error::{Error, Result};
pub use network::NetworkType;
