// Hash functions exposed by the native backend
use crate::error::{Error, Result};
use ring::digest;
use std::fmt;
use std::hash::Hasher as _;
use tiny_keccak::{Hasher, Keccak};
use twox_hash::XxHash64;

pub const BLAKE2B_MAX_OUTPUT: usize = 64;
pub const BLAKE2B_MAX_KEY: usize = 64;

// Fixed-size digests selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
    Blake2b512,
    Keccak256,
    Keccak512,
}

impl HashAlgorithm {
    // Get output size in bytes
    pub fn output_size(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 | HashAlgorithm::Keccak256 => 32,
            HashAlgorithm::Sha512 | HashAlgorithm::Blake2b512 | HashAlgorithm::Keccak512 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Sha256 => write!(f, "SHA-256"),
            HashAlgorithm::Sha512 => write!(f, "SHA-512"),
            HashAlgorithm::Blake2b512 => write!(f, "BLAKE2b-512"),
            HashAlgorithm::Keccak256 => write!(f, "Keccak-256"),
            HashAlgorithm::Keccak512 => write!(f, "Keccak-512"),
        }
    }
}

pub fn sha256(data: &[u8]) -> Vec<u8> {
    digest::digest(&digest::SHA256, data).as_ref().to_vec()
}

pub fn sha512(data: &[u8]) -> Vec<u8> {
    digest::digest(&digest::SHA512, data).as_ref().to_vec()
}

// An empty key gives plain unkeyed BLAKE2b
pub fn blake2b(data: &[u8], key: &[u8], size: usize) -> Result<Vec<u8>> {
    if size == 0 || size > BLAKE2B_MAX_OUTPUT {
        return Err(Error::InvalidInput(format!(
            "BLAKE2b output size must be between 1 and {}, got {}",
            BLAKE2B_MAX_OUTPUT, size
        )));
    }
    if key.len() > BLAKE2B_MAX_KEY {
        return Err(Error::InvalidInput(format!(
            "BLAKE2b key must be at most {} bytes, got {}",
            BLAKE2B_MAX_KEY,
            key.len()
        )));
    }

    let hash = blake2b_simd::Params::new()
        .hash_length(size)
        .key(key)
        .hash(data);
    Ok(hash.as_bytes().to_vec())
}

pub fn keccak256(data: &[u8]) -> Vec<u8> {
    let mut output = [0u8; 32];
    let mut keccak = Keccak::v256();
    keccak.update(data);
    keccak.finalize(&mut output);
    output.to_vec()
}

pub fn keccak512(data: &[u8]) -> Vec<u8> {
    let mut output = [0u8; 64];
    let mut keccak = Keccak::v512();
    keccak.update(data);
    keccak.finalize(&mut output);
    output.to_vec()
}

// xxHash64 seeded 0..rounds, each result little-endian, concatenated
pub fn twox(data: &[u8], rounds: u32) -> Result<Vec<u8>> {
    if rounds == 0 {
        return Err(Error::InvalidInput("twox rounds must be greater than zero".to_string()));
    }

    let mut output = Vec::with_capacity(rounds as usize * 8);
    for seed in 0..u64::from(rounds) {
        let mut hasher = XxHash64::with_seed(seed);
        hasher.write(data);
        output.extend_from_slice(&hasher.finish().to_le_bytes());
    }
    Ok(output)
}
