//! Host-side fakes for the output peripherals.
//!
//! Every fake writes into one shared [`Journal`], so a test can check
//! the exact order in which the display, indicator, buzzer and delays
//! were driven.

use std::cell::RefCell;
use std::rc::Rc;
use std::string::{String, ToString};
use std::vec::Vec;

use embassy_futures::yield_now;
use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;
use embedded_hal_async::delay::DelayNs;

use crate::error::Error;
use crate::occupancy::{IndicatorState, OccupancyStore};
use crate::ui::{BeepPattern, Feedback, Indicator, Panel, RectStyle, ToneOutput, TransientMessage};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Text(String, Point),
    Rect(Rectangle, RectStyle),
    Line(Point, Point),
    Frame,
    Leds(IndicatorState),
    ToneOn(u32),
    ToneOff,
    Delay(u32),
}

#[derive(Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<Op>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, op: Op) {
        self.0.borrow_mut().push(op);
    }

    pub fn ops(&self) -> Vec<Op> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn texts(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|op| match op {
                Op::Text(t, _) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_text(&self) -> Option<String> {
        self.texts().pop()
    }

    pub fn delays(&self) -> Vec<u32> {
        self.0
            .borrow()
            .iter()
            .filter_map(|op| match op {
                Op::Delay(ms) => Some(*ms),
                _ => None,
            })
            .collect()
    }

    pub fn last_leds(&self) -> Option<IndicatorState> {
        self.0.borrow().iter().rev().find_map(|op| match op {
            Op::Leds(state) => Some(*state),
            _ => None,
        })
    }

    pub fn count(&self, wanted: &Op) -> usize {
        self.0.borrow().iter().filter(|op| *op == wanted).count()
    }
}

pub struct RecordingPanel {
    journal: Journal,
    pub fail_frames: bool,
}

impl RecordingPanel {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            fail_frames: false,
        }
    }
}

impl Panel for RecordingPanel {
    fn draw_string(&mut self, text: &str, origin: Point) {
        self.journal.push(Op::Text(text.to_string(), origin));
    }

    fn draw_rect(&mut self, area: Rectangle, style: RectStyle) {
        self.journal.push(Op::Rect(area, style));
    }

    fn draw_line(&mut self, start: Point, end: Point) {
        self.journal.push(Op::Line(start, end));
    }

    fn send_frame(&mut self) -> Result<(), Error> {
        if self.fail_frames {
            return Err(Error::DisplayBus);
        }
        self.journal.push(Op::Frame);
        Ok(())
    }
}

pub struct RecordingLeds(pub Journal);

impl Indicator for RecordingLeds {
    fn show(&mut self, state: IndicatorState) -> Result<(), Error> {
        self.0.push(Op::Leds(state));
        Ok(())
    }
}

pub struct RecordingTone(pub Journal);

impl ToneOutput for RecordingTone {
    fn start(&mut self, frequency_hz: u32) {
        self.0.push(Op::ToneOn(frequency_hz));
    }

    fn stop(&mut self) {
        self.0.push(Op::ToneOff);
    }
}

/// Records the requested time and yields once, so other futures joined
/// with the caller get a chance to run.
#[derive(Clone)]
pub struct FakeDelay(pub Journal);

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.0.push(Op::Delay(ns / 1_000_000));
        yield_now().await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.0.push(Op::Delay(ms));
        yield_now().await;
    }
}

/// What a reactive task asked of its feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Render { count: u8 },
    Message(&'static str),
    Beep(BeepPattern),
}

/// `Feedback` that only records calls; lets task logic be tested
/// without any drawing.
#[derive(Default)]
pub struct RecordingFeedback {
    calls: RefCell<Vec<Call>>,
}

impl RecordingFeedback {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn take_calls(&self) -> Vec<Call> {
        core::mem::take(&mut *self.calls.borrow_mut())
    }
}

impl Feedback for RecordingFeedback {
    async fn render(&self, store: &OccupancyStore) {
        self.calls.borrow_mut().push(Call::Render {
            count: store.count(),
        });
    }

    async fn show_message(&self, message: &TransientMessage) {
        self.calls.borrow_mut().push(Call::Message(message.text));
        yield_now().await;
    }

    async fn beep(&self, pattern: BeepPattern) {
        self.calls.borrow_mut().push(Call::Beep(pattern));
        yield_now().await;
    }
}
