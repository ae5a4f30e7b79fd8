#![deny(missing_docs)]

//! # Checkpoints
//! Trusted block hashes by height, used to pin the accepted history of the chain
//!
//! A table starts out with the network's built-in checkpoints and can be extended from a JSON
//! hashfile and from DNS. Later sources only ever add heights; a pinned height never changes

mod checkpoints;
mod config;
mod defaults;
pub mod dns;
mod error;
pub mod file;

pub use crate::checkpoints::{CheckpointStatus, Checkpoints};
pub use config::Config;
pub use defaults::default_checkpoints;
pub use dns::{TxtResolver, TxtResponse};
pub use error::{Error, Result};
