/// Type alias for the Result returned from functions in this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for common operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when more than one network flag is set
    #[error("Only one of --testnet and --stagenet may be given")]
    ConflictingNetworks,

    /// Returned when the platform has no usable home directory
    #[error("Failed to get project user directory")]
    NoProjectDirectory,

    /// Returned when the data directory cannot be created
    #[error("Unable to create data directory: {0}")]
    DataDirectory(#[from] std::io::Error),
}
