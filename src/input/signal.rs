//! Single-slot wake-up from interrupt context to one waiting task.
//!
//! `give()` may be called from an interrupt handler; it never blocks and
//! never fails.  While a notification is pending, further `give()` calls
//! are absorbed: a burst of presses before the task drains the first is
//! delivered as one wake-up.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

pub struct EventSignal {
    inner: Signal<CriticalSectionRawMutex, ()>,
}

impl EventSignal {
    pub const fn new() -> Self {
        Self {
            inner: Signal::new(),
        }
    }

    /// Mark the signal pending and wake its waiter, if any.
    pub fn give(&self) {
        self.inner.signal(());
    }

    /// Wait (without timeout) until the signal is pending, then clear it.
    pub async fn take(&self) {
        self.inner.wait().await
    }

    /// Whether a notification is waiting to be taken.
    pub fn is_pending(&self) -> bool {
        self.inner.signaled()
    }
}

impl Default for EventSignal {
    fn default() -> Self {
        Self::new()
    }
}
