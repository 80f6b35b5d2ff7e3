//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and display
//! constants live here so they can be tuned in one place.

use crate::input::debounce::DebounceScope;

// Occupancy

/// Maximum number of cars the lot holds.
pub const CAPACITY: u8 = 8;

// Buttons

/// Minimum time between two accepted presses (ms).
///
/// An edge is accepted only when strictly more than this has elapsed
/// since the last accepted edge of the same clock.
pub const DEBOUNCE_WINDOW_MS: u64 = 260;

/// Per-button debounce clocks. `DebounceScope::Shared` reproduces the
/// single clock shared by all three buttons.
pub const DEBOUNCE_SCOPE: DebounceScope = DebounceScope::PerSource;

// Buzzer

/// Tone frequency of every beep (Hz).
pub const BEEP_FREQUENCY_HZ: u32 = 60;

/// Length of one tone pulse (ms).
pub const BEEP_PULSE_MS: u32 = 100;

/// Silent gap between the two pulses of a double beep (ms).
pub const BEEP_GAP_MS: u32 = 100;

// Display

/// How long a transient message stays on screen (ms).
pub const MESSAGE_DURATION_MS: u32 = 1_000;

/// The reset confirmation stays up longer (ms).
pub const RESET_MESSAGE_DURATION_MS: u32 = 2_000;

/// SSD1306 7-bit I²C address.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// Display resolution in pixels.
pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

/// Display bus speed (kHz).
pub const I2C_FREQUENCY_KHZ: u32 = 400;

// GPIO pin assignments (nRF52840-DK + external parts)
//
// These are logical names; the actual `embassy_nrf::peripherals::*`
// are bound in `board::init`.  Adjust for your custom wiring.
//
//   Button ENTRY (A)   → P0.11   active-low, internal pull-up
//   Button EXIT (B)    → P0.12   active-low, internal pull-up
//   Button RESET (SW)  → P0.24   active-low, internal pull-up
//   LED red            → P0.03
//   LED green          → P0.04
//   LED blue           → P0.28
//   Buzzer             → P0.29   (PWM0 channel 0)
//   I²C SDA            → P0.26
//   I²C SCL            → P0.27
