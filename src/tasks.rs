//! Application context and the three reactive tasks.
//!
//! ```text
//! GPIO edge ──► EdgeDebouncer ──► EventSignal.give()        (interrupt side)
//!                                      │
//!                                      ▼
//!               EventSignal.take() ──► OccupancyStore ──► Feedback   (task side)
//! ```
//!
//! Each task blocks on exactly one signal, performs exactly one store
//! operation per wake-up and then asks for feedback.  The tasks share
//! nothing but the store and the feedback coordinator.

use crate::input::{ButtonSource, EdgeDebouncer, EventSignal, EventSignals};
use crate::occupancy::OccupancyStore;
use crate::ui::{
    BeepPattern, Feedback, MSG_CAR_ENTERED, MSG_CAR_LEFT, MSG_NO_VACANCY, MSG_RESET,
};

/// Result of one task iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// A car came in; `count` is the new occupancy.
    Entered { count: u8 },
    /// Entry while full - nothing changed.
    EntryRejected,
    /// A car left; `count` is the new occupancy.
    Exited { count: u8 },
    /// Exit while empty - nothing changed.
    ExitIgnored,
    /// The lot was emptied.
    Reset,
}

/// Everything the interrupt side and the tasks share.
///
/// Built once at boot and handed out as `&'static` to the edge watchers
/// and the three tasks.
pub struct AppContext<F> {
    pub signals: EventSignals,
    pub store: OccupancyStore,
    pub debouncer: EdgeDebouncer,
    pub feedback: F,
}

impl<F: Feedback> AppContext<F> {
    pub fn new(feedback: F, debouncer: EdgeDebouncer) -> Self {
        Self {
            signals: EventSignals::new(),
            store: OccupancyStore::new(),
            debouncer,
            feedback,
        }
    }

    pub fn signal(&self, source: ButtonSource) -> &EventSignal {
        self.signals.get(source)
    }

    /// Interrupt-side entry point for a falling edge on `source`.
    ///
    /// Never blocks.  Returns whether the edge got through the
    /// debouncer (and so woke the task).
    pub fn on_edge(&self, source: ButtonSource, now_ms: u64) -> bool {
        if !self.debouncer.accept(source, now_ms) {
            debug!("Button {}: bounce dropped at {} ms", source, now_ms);
            return false;
        }
        info!("Button {} pressed", source);
        self.signal(source).give();
        true
    }

    /// One ENTRY iteration: let a car in, or refuse it when full.
    pub async fn handle_entry(&self) -> Transition {
        if self.store.try_increment() {
            let count = self.store.count();
            info!("Entry: car in, {} parked", count);
            self.feedback.render(&self.store).await;
            self.feedback.show_message(&MSG_CAR_ENTERED).await;
            Transition::Entered { count }
        } else {
            info!("Entry: lot full, car refused");
            self.feedback.beep(BeepPattern::Single).await;
            self.feedback.show_message(&MSG_NO_VACANCY).await;
            Transition::EntryRejected
        }
    }

    /// One EXIT iteration: let a car out; an empty lot is a silent no-op.
    pub async fn handle_exit(&self) -> Transition {
        if self.store.try_decrement() {
            let count = self.store.count();
            info!("Exit: car out, {} parked", count);
            self.feedback.render(&self.store).await;
            self.feedback.show_message(&MSG_CAR_LEFT).await;
            Transition::Exited { count }
        } else {
            info!("Exit: lot already empty");
            Transition::ExitIgnored
        }
    }

    /// One RESET iteration: empty the lot and confirm.
    pub async fn handle_reset(&self) -> Transition {
        self.store.reset();
        info!("Reset: lot emptied");
        self.feedback.show_message(&MSG_RESET).await;
        self.feedback.beep(BeepPattern::Double).await;
        self.feedback.render(&self.store).await;
        Transition::Reset
    }

    /// Wait for one press of `source` and handle it.
    pub async fn step(&self, source: ButtonSource) -> Transition {
        self.signal(source).take().await;
        match source {
            ButtonSource::Entry => self.handle_entry().await,
            ButtonSource::Exit => self.handle_exit().await,
            ButtonSource::Reset => self.handle_reset().await,
        }
    }

    /// Body of the reactive task bound to `source`.
    pub async fn run(&self, source: ButtonSource) -> ! {
        info!("Task {} started", source);
        loop {
            let transition = self.step(source).await;
            debug!("Task {}: {}", source, transition);
        }
    }
}
