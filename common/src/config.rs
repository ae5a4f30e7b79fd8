use structopt::StructOpt;

use crate::{Error, NetworkType, Result};

/// Network selection flags
#[derive(StructOpt, Debug, Default)]
#[structopt(rename_all = "kebab-case")]
pub struct NetworkConfig {
    /// Run against the test network
    #[structopt(long)]
    pub testnet: bool,

    /// Run against the staging network
    #[structopt(long)]
    pub stagenet: bool,
}

impl NetworkConfig {
    /// Resolves the flags into a network
    ///
    /// # Errors
    /// If both `--testnet` and `--stagenet` are set
    pub fn network_type(&self) -> Result<NetworkType> {
        match (self.testnet, self.stagenet) {
            (true, true) => Err(Error::ConflictingNetworks),
            (true, false) => Ok(NetworkType::Testnet),
            (false, true) => Ok(NetworkType::Stagenet),
            (false, false) => Ok(NetworkType::Mainnet),
        }
    }
}
