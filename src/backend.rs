// Interface to the cryptographic backend wrapped by the bridge
use crate::crypto::{Ed25519Keypair, HashAlgorithm};
use crate::error::Result;

/// Primitives a backend has to provide once it is loaded.
///
/// Implementations are handed to [`CryptoBridge`](crate::CryptoBridge) by a
/// loader and are only reachable through it after readiness is published.
pub trait CryptoBackend: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    fn sha256(&self, data: &[u8]) -> Result<Vec<u8>>;
    fn sha512(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// BLAKE2b with an output size of 1 to 64 bytes. An empty key means unkeyed.
    fn blake2b(&self, data: &[u8], key: &[u8], size: usize) -> Result<Vec<u8>>;

    fn keccak256(&self, data: &[u8]) -> Result<Vec<u8>>;
    fn keccak512(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// xxHash64 run once per round with the round index as seed, 8 bytes per round.
    fn twox(&self, data: &[u8], rounds: u32) -> Result<Vec<u8>>;

    fn hmac_sha256(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>>;
    fn hmac_sha512(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>>;

    /// PBKDF2-HMAC-SHA512 producing 64 bytes.
    fn pbkdf2(&self, password: &[u8], salt: &[u8], rounds: u32) -> Result<Vec<u8>>;

    /// scrypt with N = 2^log2n, producing 64 bytes.
    fn scrypt(&self, password: &[u8], salt: &[u8], log2n: u8, r: u32, p: u32) -> Result<Vec<u8>>;

    fn ed25519_keypair_from_seed(&self, seed: &[u8]) -> Result<Ed25519Keypair>;
    fn ed25519_sign(&self, keypair: &Ed25519Keypair, message: &[u8]) -> Result<Vec<u8>>;
    fn ed25519_verify(&self, signature: &[u8], message: &[u8], public_key: &[u8]) -> Result<bool>;

    fn digest(&self, algorithm: HashAlgorithm, data: &[u8]) -> Result<Vec<u8>> {
        match algorithm {
            HashAlgorithm::Sha256 => self.sha256(data),
            HashAlgorithm::Sha512 => self.sha512(data),
            HashAlgorithm::Blake2b512 => self.blake2b(data, &[], algorithm.output_size()),
            HashAlgorithm::Keccak256 => self.keccak256(data),
            HashAlgorithm::Keccak512 => self.keccak512(data),
        }
    }
}
