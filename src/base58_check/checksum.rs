use super::CHECKSUM_LENGTH;
use sha2::{Digest, Sha256};

/// First four bytes of SHA-256(SHA-256(payload)).
pub fn compute_checksum(buffer: impl AsRef<[u8]>) -> [u8; CHECKSUM_LENGTH] {
    let digest = Sha256::digest(&Sha256::digest(buffer.as_ref()));
    digest[..CHECKSUM_LENGTH].try_into().unwrap()
}
