//! Unified error type for carpark.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! Saturation (entry while full) and floor (exit while empty) are
//! normal outcomes and never show up here.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Display
    /// The SSD1306 did not accept its initialisation sequence.
    DisplayInit,

    /// A frame transfer over I²C failed.
    DisplayBus,

    // Indicator
    /// Driving one of the RGB indicator pins failed.
    Indicator,

    // Startup
    /// The executor had no room left for a task.
    Spawn,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let text = match self {
            Error::DisplayInit => "display initialisation failed",
            Error::DisplayBus => "display bus transfer failed",
            Error::Indicator => "indicator pin write failed",
            Error::Spawn => "task spawn failed",
        };
        f.write_str(text)
    }
}
