//! # Latency Module
//!
//! Bounded waits that can be interrupted. Operations that simulate a slow
//! external call take a [`Sleeper`] instead of calling `thread::sleep`
//! directly, so tests can substitute a fake clock.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;

/// The wait ended early because an interrupt was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("wait interrupted")]
pub struct Interrupted;

/// Blocks the calling thread for a bounded duration.
pub trait Sleeper {
    /// Wait for `duration`, or fail with [`Interrupted`] if woken early.
    fn sleep(&self, duration: Duration) -> Result<(), Interrupted>;
}

#[derive(Debug, Default)]
struct Signal {
    interrupted: Mutex<bool>,
    wake: Condvar,
}

/// Real-time sleeper backed by a condition variable.
///
/// An interrupt raised through an [`InterruptHandle`] wakes a pending wait,
/// which then fails. If nobody is waiting, the interrupt stays pending and
/// the next wait fails immediately. Either way it is consumed once observed.
#[derive(Debug, Clone, Default)]
pub struct InterruptibleSleeper {
    signal: Arc<Signal>,
}

impl InterruptibleSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle that can interrupt this sleeper from another thread
    pub fn handle(&self) -> InterruptHandle {
        InterruptHandle {
            signal: Arc::clone(&self.signal),
        }
    }
}

impl Sleeper for InterruptibleSleeper {
    fn sleep(&self, duration: Duration) -> Result<(), Interrupted> {
        let guard = self
            .signal
            .interrupted
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let (mut interrupted, _) = self
            .signal
            .wake
            .wait_timeout_while(guard, duration, |interrupted| !*interrupted)
            .unwrap_or_else(PoisonError::into_inner);

        if *interrupted {
            *interrupted = false;
            return Err(Interrupted);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct InterruptHandle {
    signal: Arc<Signal>,
}

impl InterruptHandle {
    pub fn interrupt(&self) {
        let mut interrupted = self
            .signal
            .interrupted
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *interrupted = true;
        self.signal.wake.notify_all();
    }

    /// True while an interrupt has been raised but not yet observed
    pub fn is_pending(&self) -> bool {
        *self
            .signal
            .interrupted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
