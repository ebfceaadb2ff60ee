// Guarded access to a backend that becomes available asynchronously
use crate::backend::CryptoBackend;
use crate::crypto::{Ed25519Keypair, HashAlgorithm, NativeBackend};
use crate::error::{Error, Result};
use crate::readiness::{self, ReadinessGate, ReadinessSignal, ReadyOutcome};
use crate::BridgeParams;
use std::future::Future;
use std::sync::{Mutex, OnceLock};
use tokio::sync::OnceCell;

/// Owns the backend slot and the write side of its readiness state.
///
/// The backend is installed by a single call to [`initialize`](Self::initialize).
/// Until then every primitive fails with [`Error::NotInitialized`].
pub struct CryptoBridge<B> {
    backend: OnceLock<B>,
    init: OnceCell<ReadyOutcome>,
    signal: Mutex<Option<ReadinessSignal>>,
    gate: ReadinessGate,
    params: BridgeParams,
}

impl<B: CryptoBackend> CryptoBridge<B> {
    pub fn new(params: BridgeParams) -> Self {
        let (signal, gate) = readiness::channel();
        Self {
            backend: OnceLock::new(),
            init: OnceCell::new(),
            signal: Mutex::new(Some(signal)),
            gate,
            params,
        }
    }

    pub fn params(&self) -> &BridgeParams {
        &self.params
    }

    /// Read handle on this bridge's readiness, for consumers that never touch the backend.
    pub fn gate(&self) -> ReadinessGate {
        self.gate.clone()
    }

    /// Run `loader` and publish how it ended.
    ///
    /// The loader runs at most once per bridge; later and concurrent callers
    /// get the outcome of that run. `Ok(Some(_))` installs the backend,
    /// `Ok(None)` means it loaded but reported itself unusable.
    pub async fn initialize<F, Fut>(&self, loader: F) -> ReadyOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<B>>>,
    {
        self.init
            .get_or_init(|| self.run_loader(loader))
            .await
            .clone()
    }

    async fn run_loader<F, Fut>(&self, loader: F) -> ReadyOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<B>>>,
    {
        log::info!("Initializing crypto backend");

        let loaded = match self.params.init_timeout {
            Some(limit) => match tokio::time::timeout(limit, loader()).await {
                Ok(loaded) => loaded,
                Err(_) => {
                    log::warn!("Crypto backend did not initialize within {:?}", limit);
                    Err(Error::BackendInit(format!("timed out after {:?}", limit)))
                }
            },
            None => loader().await,
        };

        let outcome = match loaded {
            Ok(Some(backend)) => self.install(backend),
            Ok(None) => ReadyOutcome::Unready,
            Err(Error::BackendInit(reason)) => ReadyOutcome::InitFailed(reason),
            Err(e) => ReadyOutcome::InitFailed(e.to_string()),
        };

        self.publish(outcome.clone());
        outcome
    }

    fn install(&self, backend: B) -> ReadyOutcome {
        let name = backend.name();
        match self.backend.set(backend) {
            Ok(()) => {
                log::info!("Crypto backend {} is ready", name);
                ReadyOutcome::Ready
            }
            Err(_) => ReadyOutcome::InitFailed("backend was already installed".to_string()),
        }
    }

    fn publish(&self, outcome: ReadyOutcome) {
        let signal = self
            .signal
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();

        match signal {
            Some(signal) => {
                log::debug!("Publishing backend readiness: {}", outcome);
                signal.publish(outcome);
            }
            None => log::warn!("Backend readiness was already published"),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.gate.is_ready()
    }

    pub async fn wait_ready(&self) -> bool {
        self.gate.wait_ready().await
    }

    pub async fn wait_outcome(&self) -> ReadyOutcome {
        self.gate.wait_outcome().await
    }

    pub fn backend(&self) -> Result<&B> {
        self.backend.get().ok_or(Error::NotInitialized)
    }

    /// Call `f` with the loaded backend, or fail with [`Error::NotInitialized`].
    pub fn with_backend<T>(&self, f: impl FnOnce(&B) -> Result<T>) -> Result<T> {
        f(self.backend()?)
    }

    pub fn sha256(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.with_backend(|b| b.sha256(data))
    }

    pub fn sha512(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.with_backend(|b| b.sha512(data))
    }

    pub fn digest(&self, algorithm: HashAlgorithm, data: &[u8]) -> Result<Vec<u8>> {
        self.with_backend(|b| b.digest(algorithm, data))
    }

    pub fn blake2b(&self, data: &[u8], key: &[u8], size: usize) -> Result<Vec<u8>> {
        self.with_backend(|b| b.blake2b(data, key, size))
    }

    pub fn keccak256(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.with_backend(|b| b.keccak256(data))
    }

    pub fn keccak512(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.with_backend(|b| b.keccak512(data))
    }

    pub fn twox(&self, data: &[u8], rounds: u32) -> Result<Vec<u8>> {
        self.with_backend(|b| b.twox(data, rounds))
    }

    pub fn hmac_sha256(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        self.with_backend(|b| b.hmac_sha256(key, data))
    }

    pub fn hmac_sha512(&self, key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        self.with_backend(|b| b.hmac_sha512(key, data))
    }

    pub fn pbkdf2(&self, password: &[u8], salt: &[u8], rounds: u32) -> Result<Vec<u8>> {
        self.with_backend(|b| b.pbkdf2(password, salt, rounds))
    }

    pub fn scrypt(&self, password: &[u8], salt: &[u8], log2n: u8, r: u32, p: u32) -> Result<Vec<u8>> {
        self.with_backend(|b| b.scrypt(password, salt, log2n, r, p))
    }

    pub fn ed25519_keypair_from_seed(&self, seed: &[u8]) -> Result<Ed25519Keypair> {
        self.with_backend(|b| b.ed25519_keypair_from_seed(seed))
    }

    pub fn ed25519_sign(&self, keypair: &Ed25519Keypair, message: &[u8]) -> Result<Vec<u8>> {
        self.with_backend(|b| b.ed25519_sign(keypair, message))
    }

    pub fn ed25519_verify(&self, signature: &[u8], message: &[u8], public_key: &[u8]) -> Result<bool> {
        self.with_backend(|b| b.ed25519_verify(signature, message, public_key))
    }
}

impl CryptoBridge<NativeBackend> {
    /// Initialize with the native backend using this bridge's parameters.
    pub async fn initialize_native(&self) -> ReadyOutcome {
        let params = self.params.clone();
        self.initialize(move || NativeBackend::load(params)).await
    }
}

impl Default for CryptoBridge<NativeBackend> {
    fn default() -> Self {
        Self::new(BridgeParams::default())
    }
}
