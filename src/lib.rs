pub mod base122;
pub mod base32;
pub mod base58;
pub mod base58_check;
pub mod base64;
pub mod base85;
pub mod base_common;
pub mod configuration;
pub mod error;
pub mod hex;
pub mod logger;

pub use base_common::{bit_group, Alphabet};
