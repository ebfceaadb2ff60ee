// Native cryptographic backend
use crate::backend::CryptoBackend;
use crate::error::{Error, Result};
use crate::BridgeParams;

pub mod hash;
pub mod mac;
pub mod signature;

pub use hash::HashAlgorithm;
pub use signature::Ed25519Keypair;

/// Backend built from `ring`, `blake2b_simd`, `tiny-keccak`, `twox-hash` and `scrypt`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeBackend {
    _private: (),
}

impl NativeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asynchronous initialization sequence for the native backend.
    ///
    /// Resolves to `Ok(None)` when the self-test fails: the backend loaded
    /// but must not be used.
    pub async fn load(params: BridgeParams) -> Result<Option<Self>> {
        let backend = Self::new();
        if !params.run_self_test {
            log::debug!("Skipping self-test for native backend");
            return Ok(Some(backend));
        }

        run_checked(backend, self_test::run).await
    }
}

/// Run `check` against `backend` on the blocking pool.
///
/// A failed check yields `Ok(None)`. A panicking check is an
/// initialization failure.
pub async fn run_checked<B: CryptoBackend>(
    backend: B,
    check: fn(&dyn CryptoBackend) -> Result<()>,
) -> Result<Option<B>> {
    let (backend, checked) = tokio::task::spawn_blocking(move || {
        let checked = check(&backend);
        (backend, checked)
    })
    .await
    .map_err(|e| Error::BackendInit(format!("Self-test task failed: {}", e)))?;

    match checked {
        Ok(()) => Ok(Some(backend)),
        Err(e) => {
            log::warn!("Backend {} failed its self-test: {}", backend.name(), e);
            Ok(None)
        }
    }
}

impl CryptoBackend for NativeBackend {
    fn name(&self) -> &'static str {
        "native"
    }

    fn sha256(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(hash::sha256(data))
    }

    fn sha512(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(hash::sha512(data))
    }

    fn blake2b(&self, data: &[u8], key: &[u8], size: usize) -> Result<Vec<u8>> {
        hash::blake2b(data, key, size)
    }

    fn keccak256(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(hash::keccak256(data))
    }

    fn keccak512(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(hash::keccak512(data))
    }

    fn twox(&self, data: &[u8], rounds: u32) -> Result<Vec<u8>> {
        hash::twox(data, rounds)
    }

    fn hmac_sha256(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        Ok(mac::hmac_sha256(key, data))
    }

    fn hmac_sha512(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        Ok(mac::hmac_sha512(key, data))
    }

    fn pbkdf2(&self, password: &[u8], salt: &[u8], rounds: u32) -> Result<Vec<u8>> {
        mac::pbkdf2_sha512(password, salt, rounds)
    }

    fn scrypt(&self, password: &[u8], salt: &[u8], log2n: u8, r: u32, p: u32) -> Result<Vec<u8>> {
        mac::scrypt(password, salt, log2n, r, p)
    }

    fn ed25519_keypair_from_seed(&self, seed: &[u8]) -> Result<Ed25519Keypair> {
        Ed25519Keypair::from_seed(seed)
    }

    fn ed25519_sign(&self, keypair: &Ed25519Keypair, message: &[u8]) -> Result<Vec<u8>> {
        keypair.sign(message)
    }

    fn ed25519_verify(&self, signature: &[u8], message: &[u8], public_key: &[u8]) -> Result<bool> {
        signature::verify(signature, message, public_key)
    }
}
