//! Per-entry visibility signals
//!
//! A [`VisibilitySignal`] holds a single boolean. While it is `true` the
//! successor of the entry owning it is requested to be visible. Observers get
//! the current value replayed on subscription and are woken on every set.
//! When the owning entry leaves the stack the signal is dropped and its
//! observers see the channel close.

use tokio::sync::watch;

/// Replayable boolean signal owned by one stack entry
#[derive(Debug)]
pub struct VisibilitySignal {
    tx: watch::Sender<bool>,
}

impl VisibilitySignal {
    /// Create a new signal, initially `false`
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Current value
    pub fn get(&self) -> bool {
        *self.tx.borrow()
    }

    /// Set the value and wake observers, even if the value is unchanged
    pub(crate) fn set(&self, value: bool) {
        self.tx.send_replace(value);
    }

    /// Observe this signal
    pub fn subscribe(&self) -> SignalReceiver {
        SignalReceiver {
            rx: self.tx.subscribe(),
        }
    }

    /// Number of live observers
    pub fn observer_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for VisibilitySignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Read handle on a [`VisibilitySignal`]
///
/// Values set in quick succession may be coalesced; the receiver always sees
/// the latest one.
#[derive(Debug)]
pub struct SignalReceiver {
    rx: watch::Receiver<bool>,
}

impl SignalReceiver {
    /// Current value, marking it as seen
    pub fn current(&mut self) -> bool {
        *self.rx.borrow_and_update()
    }

    /// Wait for the next set
    ///
    /// Returns `None` once the signal has been released.
    pub async fn changed(&mut self) -> Option<bool> {
        match self.rx.changed().await {
            Ok(()) => Some(*self.rx.borrow_and_update()),
            Err(_) => None,
        }
    }

    /// Take a pending value without waiting
    pub fn try_changed(&mut self) -> Option<bool> {
        match self.rx.has_changed() {
            Ok(true) => Some(*self.rx.borrow_and_update()),
            _ => None,
        }
    }

    /// Whether the signal has been released
    pub fn is_released(&self) -> bool {
        self.rx.has_changed().is_err()
    }
}
