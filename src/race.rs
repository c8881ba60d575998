//! Click-versus-timeout race. Whoever claims the race first delivers the
//! single outcome; every later attempt is dropped.

use crate::notification::CorrelationData;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Clicked(CorrelationData),
    TimedOut,
}

#[derive(Debug, Clone)]
struct Resolver {
    claimed: Arc<AtomicBool>,
    tx: Sender<Outcome>,
}

impl Resolver {
    fn resolve(&self, outcome: Outcome) -> bool {
        if self
            .claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!(?outcome, "race already resolved, dropping");
            return false;
        }
        // Receiver may already be gone if the process is shutting down.
        let _ = self.tx.send(outcome);
        true
    }
}

/// Handed to the notification service so it can report user activation.
#[derive(Debug, Clone)]
pub struct InteractionSink {
    resolver: Resolver,
}

impl InteractionSink {
    /// Reports a click. Returns false when the race was already decided.
    pub fn clicked(&self, correlation: CorrelationData) -> bool {
        self.resolver.resolve(Outcome::Clicked(correlation))
    }
}

#[derive(Debug)]
pub struct Race {
    resolver: Resolver,
    rx: Receiver<Outcome>,
}

impl Race {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            resolver: Resolver {
                claimed: Arc::new(AtomicBool::new(false)),
                tx,
            },
            rx,
        }
    }

    pub fn sink(&self) -> InteractionSink {
        InteractionSink {
            resolver: self.resolver.clone(),
        }
    }

    /// Blocks until a click arrives or `timeout` elapses, whichever is first.
    pub fn await_outcome(self, timeout: Duration) -> Outcome {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => outcome,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                if self.resolver.resolve(Outcome::TimedOut) {
                    Outcome::TimedOut
                } else {
                    // A click claimed the race between the deadline and our claim.
                    self.rx.recv().unwrap_or(Outcome::TimedOut)
                }
            }
        }
    }
}

impl Default for Race {
    fn default() -> Self {
        Self::new()
    }
}
