//! User feedback - status display, RGB indicator and buzzer.
//!
//! Every write to those three outputs goes through one
//! [`FeedbackCoordinator`], which owns them behind a single async mutex
//! (the exclusion domain).  Tasks only ever talk to the [`Feedback`]
//! trait.
//!
//! ## Components
//!
//! - **Display**: 128×64 panel; static chrome plus one mutable band
//! - **Indicator**: three discrete LED pins (red, green, blue)
//! - **Buzzer**: tone output for the single and double beep

pub mod buzzer;
pub mod feedback;
pub mod indicator;
pub mod layout;


use embedded_graphics::prelude::Point;

use crate::config::{MESSAGE_DURATION_MS, RESET_MESSAGE_DURATION_MS};
use crate::occupancy::OccupancyStore;

pub use buzzer::{BeepPattern, BeepStep, ToneOutput};
pub use feedback::FeedbackCoordinator;
pub use indicator::{Indicator, IndicatorLeds};
pub use layout::{DisplayFrame, OverlayToken, Panel, RectStyle};

/// A short text shown over the live counter, then erased.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransientMessage {
    pub text: &'static str,
    /// Top-left corner of the text.
    pub position: Point,
    pub duration_ms: u32,
}

impl TransientMessage {
    pub const fn new(text: &'static str, duration_ms: u32) -> Self {
        Self {
            text,
            position: layout::MESSAGE_ORIGIN,
            duration_ms,
        }
    }
}

/// Shown after a car was let in.
pub const MSG_CAR_ENTERED: TransientMessage =
    TransientMessage::new("Carro entrou", MESSAGE_DURATION_MS);

/// Shown after a car left.
pub const MSG_CAR_LEFT: TransientMessage = TransientMessage::new("Carro saiu", MESSAGE_DURATION_MS);

/// Shown when a car arrives at a full lot.
pub const MSG_NO_VACANCY: TransientMessage =
    TransientMessage::new("Vaga indisp.", MESSAGE_DURATION_MS);

/// Shown after the reset button.
pub const MSG_RESET: TransientMessage =
    TransientMessage::new("Reiniciado sis", RESET_MESSAGE_DURATION_MS);

/// What a reactive task may ask of the outputs.
///
/// Each call is atomic with respect to every other call on the same
/// implementation; `show_message` and `beep` suspend the caller
/// cooperatively for their duration.
#[allow(async_fn_in_trait)]
pub trait Feedback {
    /// Redraw the live counter and drive the indicator from the current
    /// count.
    async fn render(&self, store: &OccupancyStore);

    /// Draw `message`, keep it up for its duration, then restore the
    /// live counter.
    async fn show_message(&self, message: &TransientMessage);

    /// Play one beep pattern to completion.
    async fn beep(&self, pattern: BeepPattern);
}
