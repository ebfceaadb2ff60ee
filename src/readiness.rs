// Readiness gate over an asynchronously initialized backend
use crate::error::{Error, Result};
use std::fmt;
use tokio::sync::watch;

const DROPPED_REASON: &str = "initializer dropped before signalling readiness";

// Published state of the backend. Moves out of Pending at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Readiness {
    Pending,
    Ready,
    Unready,
    Failed(String),
}

/// Final result of backend initialization as seen by a waiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadyOutcome {
    /// The backend initialized and can be used.
    Ready,
    /// Initialization completed but the backend reported itself not ready.
    Unready,
    /// The initialization signal itself failed.
    InitFailed(String),
}

impl ReadyOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, ReadyOutcome::Ready)
    }

    /// Convert into the crate error type so callers can propagate with `?`.
    pub fn into_result(self) -> Result<()> {
        match self {
            ReadyOutcome::Ready => Ok(()),
            ReadyOutcome::Unready => Err(Error::BackendUnready),
            ReadyOutcome::InitFailed(reason) => Err(Error::BackendInit(reason)),
        }
    }
}

impl fmt::Display for ReadyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadyOutcome::Ready => write!(f, "ready"),
            ReadyOutcome::Unready => write!(f, "unready"),
            ReadyOutcome::InitFailed(reason) => write!(f, "initialization failed: {}", reason),
        }
    }
}

impl Readiness {
    fn outcome(&self) -> Option<ReadyOutcome> {
        match self {
            Readiness::Pending => None,
            Readiness::Ready => Some(ReadyOutcome::Ready),
            Readiness::Unready => Some(ReadyOutcome::Unready),
            Readiness::Failed(reason) => Some(ReadyOutcome::InitFailed(reason.clone())),
        }
    }
}

/// Create a linked signal/gate pair.
///
/// The component that performs initialization keeps the signal; every
/// consumer gets a clone of the gate.
pub fn channel() -> (ReadinessSignal, ReadinessGate) {
    let (tx, rx) = watch::channel(Readiness::Pending);
    (ReadinessSignal { tx }, ReadinessGate { rx })
}

/// Write side of the readiness state, owned by the initializer.
///
/// Publishing consumes the signal, so readiness is set exactly once.
/// Dropping it without publishing is observed by waiters as a failed
/// initialization.
#[derive(Debug)]
pub struct ReadinessSignal {
    tx: watch::Sender<Readiness>,
}

impl ReadinessSignal {
    pub fn ready(self) {
        self.publish(ReadyOutcome::Ready);
    }

    pub fn unready(self) {
        self.publish(ReadyOutcome::Unready);
    }

    pub fn fail(self, reason: impl Into<String>) {
        self.publish(ReadyOutcome::InitFailed(reason.into()));
    }

    pub fn publish(self, outcome: ReadyOutcome) {
        let state = match outcome {
            ReadyOutcome::Ready => Readiness::Ready,
            ReadyOutcome::Unready => Readiness::Unready,
            ReadyOutcome::InitFailed(reason) => Readiness::Failed(reason),
        };
        // send_replace stores the value even when no gate is listening
        self.tx.send_replace(state);
    }
}

/// Read side of the readiness state. Cheap to clone and hand out.
#[derive(Debug, Clone)]
pub struct ReadinessGate {
    rx: watch::Receiver<Readiness>,
}

impl ReadinessGate {
    /// Current readiness. Never blocks.
    pub fn is_ready(&self) -> bool {
        matches!(*self.rx.borrow(), Readiness::Ready)
    }

    /// Outcome if initialization has already finished, without waiting.
    pub fn try_outcome(&self) -> Option<ReadyOutcome> {
        let outcome = self.rx.borrow().outcome();
        match outcome {
            Some(outcome) => Some(outcome),
            // A closed channel still in Pending means the initializer is gone
            None if self.rx.has_changed().is_err() => {
                Some(ReadyOutcome::InitFailed(DROPPED_REASON.to_string()))
            }
            None => None,
        }
    }

    /// Wait for initialization to finish and report how it ended.
    pub async fn wait_outcome(&self) -> ReadyOutcome {
        let mut rx = self.rx.clone();
        let waited = rx
            .wait_for(|state| *state != Readiness::Pending)
            .await
            .map(|state| state.outcome());

        match waited {
            Ok(Some(outcome)) => outcome,
            Ok(None) | Err(_) => ReadyOutcome::InitFailed(DROPPED_REASON.to_string()),
        }
    }

    /// Wait for initialization and return whether the backend is ready.
    ///
    /// Failures are folded into `false`; use [`wait_outcome`](Self::wait_outcome)
    /// to tell an unready backend apart from a failed initialization.
    pub async fn wait_ready(&self) -> bool {
        let outcome = self.wait_outcome().await;
        if let ReadyOutcome::InitFailed(reason) = &outcome {
            log::debug!("Backend initialization failed: {}", reason);
        }
        outcome.is_ready() && self.is_ready()
    }
}
