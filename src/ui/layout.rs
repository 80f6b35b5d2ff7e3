//! Status screen layout.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Vagas livres                 │  title row
//! ├──────────────────────────────┤ y = 16
//! │        5 of 8                │  mutable band: live field or message
//! ├──────────────┬───────────────┤ y = 44
//! │ A:+ B:-      │ SW:Reset      │
//! └──────────────┴───────────────┘
//! ```
//!
//! The chrome is drawn once at boot.  Afterwards only the mutable band
//! is rewritten, either with the live counter or with a transient
//! overlay message.

use core::fmt::Write;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use heapless::String;

use crate::config::{CAPACITY, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::error::Error;

/// Drawing primitives the layout needs from a display driver.
///
/// Drawing goes to an off-screen buffer; nothing is visible until
/// [`Panel::send_frame`].
pub trait Panel {
    /// Draw `text` with its top-left corner at `origin`.
    fn draw_string(&mut self, text: &str, origin: Point);

    fn draw_rect(&mut self, area: Rectangle, style: RectStyle);

    fn draw_line(&mut self, start: Point, end: Point);

    /// Push the buffer to the controller.
    fn send_frame(&mut self) -> Result<(), Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RectStyle {
    /// 1 px border, interior untouched.
    Outline,
    /// Fill with background (erase).
    Clear,
}

const WIDTH: i32 = DISPLAY_WIDTH as i32;
const HEIGHT: i32 = DISPLAY_HEIGHT as i32;

const TOP_DIVIDER_Y: i32 = 16;
const BOTTOM_DIVIDER_Y: i32 = 44;
const COLUMN_DIVIDER_X: i32 = 64;

/// Where the chrome labels go.
pub const LABELS: [(&str, Point); 3] = [
    ("Vagas livres", Point::new(6, 4)),
    ("A:+ B:-", Point::new(6, 50)),
    ("SW:Reset", Point::new(COLUMN_DIVIDER_X + 6, 50)),
];

/// The band between the two horizontal dividers.
pub const MUTABLE_REGION: Rectangle = Rectangle::new(
    Point::new(1, TOP_DIVIDER_Y + 1),
    Size::new(DISPLAY_WIDTH - 2, (BOTTOM_DIVIDER_Y - TOP_DIVIDER_Y - 1) as u32),
);

/// Origin of the live counter text.
pub const LIVE_ORIGIN: Point = Point::new(46, 25);

/// Default origin of transient messages.
pub const MESSAGE_ORIGIN: Point = Point::new(8, 25);

/// Identifies one overlay so only its owner can erase it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OverlayToken(u32);

/// Live field text: remaining free slots out of capacity.
pub fn live_text(count: u8) -> String<16> {
    let mut text = String::new();
    let remaining = CAPACITY.saturating_sub(count);
    // 16 bytes always hold "255 of 255".
    let _ = write!(text, "{} of {}", remaining, CAPACITY);
    text
}

/// What is on the screen, and what goes back once an overlay ends.
pub struct DisplayFrame {
    live_count: u8,
    overlay: Option<OverlayToken>,
    next_token: u32,
}

impl DisplayFrame {
    pub const fn new() -> Self {
        Self {
            live_count: 0,
            overlay: None,
            next_token: 0,
        }
    }

    /// Draw the static chrome and the live field.
    pub fn draw_chrome<P: Panel>(&self, panel: &mut P) {
        panel.draw_rect(
            Rectangle::new(Point::zero(), Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)),
            RectStyle::Outline,
        );
        panel.draw_line(Point::new(0, TOP_DIVIDER_Y), Point::new(WIDTH - 1, TOP_DIVIDER_Y));
        panel.draw_line(
            Point::new(0, BOTTOM_DIVIDER_Y),
            Point::new(WIDTH - 1, BOTTOM_DIVIDER_Y),
        );
        panel.draw_line(
            Point::new(COLUMN_DIVIDER_X, BOTTOM_DIVIDER_Y),
            Point::new(COLUMN_DIVIDER_X, HEIGHT - 1),
        );
        for (label, origin) in LABELS {
            panel.draw_string(label, origin);
        }
        self.draw_live(panel);
    }

    /// Record the new count and redraw the live field, unless an overlay
    /// currently covers it.  Returns whether anything was drawn.
    pub fn update_live<P: Panel>(&mut self, panel: &mut P, count: u8) -> bool {
        self.live_count = count;
        if self.overlay.is_some() {
            return false;
        }
        self.draw_live(panel);
        true
    }

    /// Replace the mutable band with `text`.
    pub fn show_overlay<P: Panel>(
        &mut self,
        panel: &mut P,
        text: &str,
        origin: Point,
    ) -> OverlayToken {
        let token = OverlayToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.overlay = Some(token);

        panel.draw_rect(MUTABLE_REGION, RectStyle::Clear);
        panel.draw_string(text, origin);
        token
    }

    /// Erase the overlay identified by `token` and bring back the live
    /// field.  A stale token (a newer overlay replaced it) does nothing.
    pub fn clear_overlay<P: Panel>(&mut self, panel: &mut P, token: OverlayToken) -> bool {
        if self.overlay != Some(token) {
            return false;
        }
        self.overlay = None;
        self.draw_live(panel);
        true
    }

    pub fn overlay_active(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn live_count(&self) -> u8 {
        self.live_count
    }

    fn draw_live<P: Panel>(&self, panel: &mut P) {
        panel.draw_rect(MUTABLE_REGION, RectStyle::Clear);
        panel.draw_string(live_text(self.live_count).as_str(), LIVE_ORIGIN);
    }
}

impl Default for DisplayFrame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Journal, Op, RecordingPanel};
    use embedded_graphics::primitives::ContainsPoint;

    #[test]
    fn live_text_counts_remaining_slots() {
        assert_eq!(live_text(0).as_str(), "8 of 8");
        assert_eq!(live_text(3).as_str(), "5 of 8");
        assert_eq!(live_text(8).as_str(), "0 of 8");
    }

    #[test]
    fn chrome_has_border_dividers_and_labels() {
        let journal = Journal::new();
        let mut panel = RecordingPanel::new(&journal);
        DisplayFrame::new().draw_chrome(&mut panel);

        let ops = journal.ops();
        let outlines = ops
            .iter()
            .filter(|op| matches!(op, Op::Rect(_, RectStyle::Outline)))
            .count();
        let lines = ops.iter().filter(|op| matches!(op, Op::Line(..))).count();
        assert_eq!(outlines, 1);
        assert_eq!(lines, 3);
        for (label, _) in LABELS {
            assert!(journal.texts().iter().any(|t| t == label));
        }
        assert_eq!(journal.last_text().as_deref(), Some("8 of 8"));
    }

    #[test]
    fn regions_fit_on_screen() {
        let screen = Rectangle::new(Point::zero(), Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT));
        assert!(screen.contains(MUTABLE_REGION.top_left));
        let bottom_right = MUTABLE_REGION.bottom_right().unwrap();
        assert!(screen.contains(bottom_right));
        assert!(bottom_right.y < BOTTOM_DIVIDER_Y);
        assert!(MUTABLE_REGION.top_left.y > TOP_DIVIDER_Y);
    }

    #[test]
    fn overlay_hides_live_updates_until_cleared() {
        let journal = Journal::new();
        let mut panel = RecordingPanel::new(&journal);
        let mut frame = DisplayFrame::new();

        let token = frame.show_overlay(&mut panel, "Carro entrou", MESSAGE_ORIGIN);
        assert!(frame.overlay_active());
        assert!(!frame.update_live(&mut panel, 2));
        assert_eq!(journal.last_text().as_deref(), Some("Carro entrou"));

        assert!(frame.clear_overlay(&mut panel, token));
        assert!(!frame.overlay_active());
        assert_eq!(journal.last_text().as_deref(), Some("6 of 8"));
    }

    #[test]
    fn stale_token_does_not_erase_newer_overlay() {
        let journal = Journal::new();
        let mut panel = RecordingPanel::new(&journal);
        let mut frame = DisplayFrame::new();

        let first = frame.show_overlay(&mut panel, "Carro entrou", MESSAGE_ORIGIN);
        let second = frame.show_overlay(&mut panel, "Carro saiu", MESSAGE_ORIGIN);
        assert_ne!(first, second);

        assert!(!frame.clear_overlay(&mut panel, first));
        assert!(frame.overlay_active());
        assert_eq!(journal.last_text().as_deref(), Some("Carro saiu"));

        assert!(frame.clear_overlay(&mut panel, second));
        assert_eq!(journal.last_text().as_deref(), Some("8 of 8"));
    }
}
