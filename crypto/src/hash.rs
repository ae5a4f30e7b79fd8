use std::convert::{
    From,
    TryFrom
};
use std::fmt::{
    Display,
    Formatter
};
use std::str::FromStr;

pub type Hash256Data = generic_array::GenericArray<u8, generic_array::typenum::U32>;

/// Length of a `Hash256` in hex characters
pub const HASH256_HEX_LENGTH: usize = 64;

#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Hash256(Hash256Data);

impl Hash256 {
    pub fn null_hash() -> Self {
        Hash256::from(Hash256Data::from([0; 32]))
    }
    pub fn data(&self) -> &Hash256Data {
        &self.0
    }
}

impl Display for Hash256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl From<Hash256Data> for Hash256 {
    fn from(data: Hash256Data) -> Self {
        Hash256(data)
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(data: [u8; 32]) -> Self {
        Hash256(Hash256Data::from(data))
    }
}

impl TryFrom<&str> for Hash256 {
    type Error = hex::FromHexError;
    fn try_from(data: &str) -> Result<Self, Self::Error> {
        if data.len() != HASH256_HEX_LENGTH {
            return Err(hex::FromHexError::InvalidStringLength)
        }
        Ok(Hash256(Hash256Data::clone_from_slice(&hex::decode(data)?)))
    }
}

impl FromStr for Hash256 {
    type Err = hex::FromHexError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash256::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_hash() {
        assert_eq!(Hash256::null_hash().to_string(), "0000000000000000000000000000000000000000000000000000000000000000");
    }

    #[test]
    fn decodes_correctly() {
        let data: [u8; 32] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32];
        let hash = Hash256::try_from("0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20").unwrap();
        assert_eq!(hash.data().as_slice(), data);
        assert_eq!(hash, Hash256::from(data));
    }

    #[test]
    fn accepts_uppercase_and_prints_lowercase() {
        let hash: Hash256 = "D0AE70AE5F35B27B3A4B68AE4F78EECA9989174EEBE8A1E55CD139FE9B797223".parse().unwrap();
        assert_eq!(hash.to_string(), "d0ae70ae5f35b27b3a4b68ae4f78eeca9989174eebe8a1e55cd139fe9b797223");
    }

    #[test]
    fn errors_on_invalid_input() {
        assert!(Hash256::try_from("01").is_err());
        // Right length, bad character
        assert!(Hash256::try_from("zz02030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20").is_err());
        // One character too many
        assert!(Hash256::try_from("0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f200").is_err());
    }
}
