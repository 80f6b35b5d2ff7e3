//! Time-window debouncer for button edges.
//!
//! Runs in interrupt context: no blocking, no allocation, no I/O.  The
//! timestamps sit behind a critical-section mutex so the edge watchers
//! of all three buttons can share one debouncer.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use enum_ordinalize::Ordinalize;

use super::ButtonSource;

/// Which presses share a debounce clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceScope {
    /// Every button has its own clock.
    PerSource,
    /// One clock for all buttons: a press on B right after a press on A
    /// is dropped even though B was never pressed before.
    Shared,
}

const CLOCKS: usize = ButtonSource::VARIANT_COUNT;

pub struct EdgeDebouncer {
    window_ms: u64,
    scope: DebounceScope,
    /// Last accepted edge per clock (ms since boot); `None` until the
    /// first accepted press.
    last_accepted: Mutex<CriticalSectionRawMutex, Cell<[Option<u64>; CLOCKS]>>,
}

impl EdgeDebouncer {
    pub const fn new(window_ms: u64, scope: DebounceScope) -> Self {
        Self {
            window_ms,
            scope,
            last_accepted: Mutex::new(Cell::new([None; CLOCKS])),
        }
    }

    pub fn scope(&self) -> DebounceScope {
        self.scope
    }

    /// Decide whether a falling edge from `source` at `now_ms` is a real
    /// press.  An accepted edge restarts the window for its clock.
    pub fn accept(&self, source: ButtonSource, now_ms: u64) -> bool {
        let clock = match self.scope {
            DebounceScope::PerSource => source.ordinal(),
            DebounceScope::Shared => 0,
        };

        self.last_accepted.lock(|cell| {
            let mut stamps = cell.get();
            let accepted = match stamps[clock] {
                None => true,
                Some(last) => now_ms.saturating_sub(last) > self.window_ms,
            };
            if accepted {
                stamps[clock] = Some(now_ms);
                cell.set(stamps);
            }
            accepted
        })
    }
}
