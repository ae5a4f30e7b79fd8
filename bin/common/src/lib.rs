#![deny(missing_docs)]

//! Offers common functionality to binary crates (logging and data directory configuration)

mod config;
/// Functions for setting up the logging system
pub mod logger;

pub use config::Config;
