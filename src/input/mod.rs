//! Button input - interrupt-side debouncing and the hand-off to tasks.
//!
//! ## Components
//!
//! - **EdgeDebouncer**: accepts at most one falling edge per button per
//!   debounce window
//! - **EventSignal**: one single-slot, coalescing wake-up per button

pub mod debounce;
pub mod signal;

use enum_ordinalize::Ordinalize;

pub use debounce::{DebounceScope, EdgeDebouncer};
pub use signal::EventSignal;

/// Physical button that produced an edge.
///
///   - ENTRY (A): a car arrives
///   - EXIT  (B): a car leaves
///   - RESET (SW): empty the lot
#[derive(Ordinalize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(usize)]
pub enum ButtonSource {
    Entry,
    Exit,
    Reset,
}

/// The three per-button signals, indexed by source.
pub struct EventSignals {
    signals: [EventSignal; ButtonSource::VARIANT_COUNT],
}

impl EventSignals {
    pub const fn new() -> Self {
        Self {
            signals: [EventSignal::new(), EventSignal::new(), EventSignal::new()],
        }
    }

    /// The signal belonging to `source`.
    pub fn get(&self, source: ButtonSource) -> &EventSignal {
        &self.signals[source.ordinal()]
    }
}

impl Default for EventSignals {
    fn default() -> Self {
        Self::new()
    }
}
