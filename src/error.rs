use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Backend initialization failed: {0}")]
    BackendInit(String),

    #[error("Backend resolved but reported not ready")]
    BackendUnready,

    #[error("The crypto backend has not been initialized. Wait for readiness with wait_ready() before calling backend primitives")]
    NotInitialized,

    #[error("Crypto error: {0}")]
    CryptoError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Self-test failed: {0}")]
    SelfTest(String),
}

pub type Result<T> = std::result::Result<T, Error>;
