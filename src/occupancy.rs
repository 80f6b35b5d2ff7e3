//! Shared, bounded occupancy counter and the indicator mapping.
//!
//! The count lives in a single atomic.  Increment and decrement are
//! compare-and-swap loops, so the bounds hold no matter how the three
//! reactive tasks are scheduled or how many cores run them.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::config::CAPACITY;

/// Colour shown on the RGB indicator, derived from the count alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorState {
    /// No cars (blue).
    Empty,
    /// Room for two or more cars (green).
    Available,
    /// Exactly one slot left (yellow = red + green).
    NearFull,
    /// No slot left (red).
    Full,
}

/// Pin levels for the three discrete indicator outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedLevels {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

impl IndicatorState {
    /// Map an occupancy count onto the indicator.
    ///
    /// Total over `u8`; counts above `CAPACITY` cannot be produced by
    /// the store but still map to `Full`.
    pub const fn from_count(count: u8) -> Self {
        match count {
            0 => IndicatorState::Empty,
            c if c >= CAPACITY => IndicatorState::Full,
            c if c == CAPACITY - 1 => IndicatorState::NearFull,
            _ => IndicatorState::Available,
        }
    }

    /// Truth table for the RGB outputs.
    pub const fn leds(self) -> LedLevels {
        match self {
            IndicatorState::Empty => LedLevels { red: false, green: false, blue: true },
            IndicatorState::Available => LedLevels { red: false, green: true, blue: false },
            IndicatorState::NearFull => LedLevels { red: true, green: true, blue: false },
            IndicatorState::Full => LedLevels { red: true, green: false, blue: false },
        }
    }
}

/// A consistent view of the store taken from a single load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Occupancy {
    pub count: u8,
    pub indicator: IndicatorState,
}

impl Occupancy {
    /// Free slots left.
    pub const fn remaining(&self) -> u8 {
        CAPACITY - self.count
    }
}

/// The one process-wide occupancy counter (`0..=CAPACITY`).
pub struct OccupancyStore {
    count: AtomicU8,
}

impl OccupancyStore {
    /// Create an empty lot.
    pub const fn new() -> Self {
        Self {
            count: AtomicU8::new(0),
        }
    }

    /// Add one car if there is room. Returns `false` (and leaves the
    /// count alone) when the lot is full.
    pub fn try_increment(&self) -> bool {
        self.count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |c| {
                (c < CAPACITY).then_some(c + 1)
            })
            .is_ok()
    }

    /// Remove one car if there is any. Returns `false` (and leaves the
    /// count alone) when the lot is empty.
    pub fn try_decrement(&self) -> bool {
        self.count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |c| {
                (c > 0).then(|| c - 1)
            })
            .is_ok()
    }

    /// Empty the lot unconditionally.
    pub fn reset(&self) {
        self.count.store(0, Ordering::Release);
    }

    /// Current indicator colour.
    pub fn indicator(&self) -> IndicatorState {
        IndicatorState::from_count(self.count())
    }

    /// Current number of cars.
    pub fn count(&self) -> u8 {
        self.count.load(Ordering::Acquire)
    }

    /// Count and indicator from the same load.
    pub fn snapshot(&self) -> Occupancy {
        let count = self.count();
        Occupancy {
            count,
            indicator: IndicatorState::from_count(count),
        }
    }
}

impl Default for OccupancyStore {
    fn default() -> Self {
        Self::new()
    }
}
