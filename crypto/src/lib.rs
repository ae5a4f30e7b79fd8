//! Cryptographic value types shared across the node

pub mod hash;

pub use hash::{Hash256, Hash256Data};
