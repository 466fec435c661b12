// Quark - Chained 512-bit hash used for legacy (version < 4) block headers
//
// Nine rounds over BLAKE, BMW, Groestl, JH, Keccak and Skein. Three of them
// pick their function from bit 3 of the previous digest's first byte.

use super::bmw512::bmw512;
use crate::types::Hash256;
use blake_hash::{Blake512, Digest as _};
use groestl::Groestl512;
use jh::Jh512;
use sha3::{Digest, Keccak512};
use skein::{digest::consts::U64, Skein512};

const BRANCH_MASK: u8 = 8;

type Digest512 = [u8; 64];

fn blake512(data: &[u8]) -> Digest512 {
    finish(Blake512::digest(data).as_slice())
}

fn groestl512(data: &[u8]) -> Digest512 {
    finish(Groestl512::digest(data).as_slice())
}

fn jh512(data: &[u8]) -> Digest512 {
    finish(Jh512::digest(data).as_slice())
}

fn keccak512(data: &[u8]) -> Digest512 {
    finish(Keccak512::digest(data).as_slice())
}

fn skein512(data: &[u8]) -> Digest512 {
    finish(Skein512::<U64>::digest(data).as_slice())
}

fn finish(bytes: &[u8]) -> Digest512 {
    let mut out = [0u8; 64];
    out.copy_from_slice(bytes);
    out
}

fn branch(hash: &Digest512) -> bool {
    hash[0] & BRANCH_MASK != 0
}

/// Quark hash of `data`, truncated to the low 256 bits
pub fn hash_quark(data: &[u8]) -> Hash256 {
    let h0 = blake512(data);
    let h1 = bmw512(&h0);
    let h2 = if branch(&h1) { groestl512(&h1) } else { skein512(&h1) };
    let h3 = groestl512(&h2);
    let h4 = jh512(&h3);
    let h5 = if branch(&h4) { blake512(&h4) } else { bmw512(&h4) };
    let h6 = keccak512(&h5);
    let h7 = skein512(&h6);
    let h8 = if branch(&h7) { keccak512(&h7) } else { jh512(&h7) };

    let mut out = [0u8; 32];
    out.copy_from_slice(&h8[..32]);
    Hash256::from_bytes(out)
}
