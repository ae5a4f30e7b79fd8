use std::fmt::{
    Display,
    Formatter
};

/// The deployment a node runs against
///
/// Each network has its own genesis, its own built-in checkpoints and its own set of remote
/// checkpoint domains
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NetworkType {
    /// The primary network
    Mainnet,
    /// The public test network
    Testnet,
    /// The staging network, mirroring mainnet rules ahead of releases
    Stagenet,
}

impl NetworkType {
    /// Name of the network's data subdirectory, `None` for mainnet which uses the data
    /// directory's root
    pub fn subdirectory(self) -> Option<&'static str> {
        match self {
            NetworkType::Mainnet => None,
            NetworkType::Testnet => Some("testnet"),
            NetworkType::Stagenet => Some("stagenet"),
        }
    }
}

impl Default for NetworkType {
    fn default() -> Self {
        NetworkType::Mainnet
    }
}

impl Display for NetworkType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NetworkType::Mainnet => "mainnet",
            NetworkType::Testnet => "testnet",
            NetworkType::Stagenet => "stagenet",
        };
        write!(f, "{}", name)
    }
}
