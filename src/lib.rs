pub mod backend;
pub mod bridge;
pub mod crypto;
pub mod error;
pub mod readiness;
pub mod utils;

use std::time::Duration;

pub use backend::CryptoBackend;
pub use bridge::CryptoBridge;
pub use crypto::{Ed25519Keypair, HashAlgorithm, NativeBackend};
pub use error::{Error, Result};
pub use readiness::{ReadinessGate, ReadinessSignal, ReadyOutcome};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn init_logging() {
    let _ = env_logger::builder().try_init();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeParams {
    // None waits for the loader indefinitely
    pub init_timeout: Option<Duration>,
    pub run_self_test: bool,
}

impl Default for BridgeParams {
    fn default() -> Self {
        Self {
            init_timeout: Some(Duration::from_secs(10)),
            run_self_test: true,
        }
    }
}
