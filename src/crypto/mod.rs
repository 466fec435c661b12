// Crypto - Header and transaction hashing
// Transactions and merkle nodes use double SHA-256; legacy headers use Quark.

pub mod bmw512;
pub mod quark;

use crate::types::Hash256;
use sha2::{Digest, Sha256};

/// Double SHA-256, returned in internal (little-endian) byte order
pub fn sha256d(data: &[u8]) -> Hash256 {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    Hash256::from_bytes(out)
}

pub use quark::hash_quark;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256d_empty() {
        // sha256(sha256("")) in display order
        assert_eq!(
            sha256d(b"").to_hex(),
            "56944c5d3f98413ef45cf54545538103cc9f298e0575820ad3591376e2e0f65d"
        );
    }
}
