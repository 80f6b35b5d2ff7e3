//! The exclusion domain around display, indicator and buzzer.
//!
//! All three outputs live in one [`Devices`] value behind one async
//! mutex.  A render, a message draw/erase and a whole beep pattern each
//! run under that lock, so frames, LED changes and tones from different
//! tasks never interleave.  Waiting (message time, beep pulses) is done
//! with an async delay, so other tasks keep running meanwhile.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::delay::DelayNs;

use super::buzzer::{BeepPattern, BeepStep, ToneOutput};
use super::indicator::Indicator;
use super::layout::{DisplayFrame, Panel};
use super::{Feedback, TransientMessage};
use crate::occupancy::OccupancyStore;

/// Everything guarded by the exclusion domain.
struct Devices<P, L, T> {
    panel: P,
    frame: DisplayFrame,
    leds: L,
    buzzer: T,
}

impl<P: Panel, L, T> Devices<P, L, T> {
    fn send_frame(&mut self) {
        if let Err(e) = self.panel.send_frame() {
            warn!("Display: frame transfer failed: {}", e);
        }
    }
}

pub struct FeedbackCoordinator<P, L, T, D> {
    devices: Mutex<CriticalSectionRawMutex, Devices<P, L, T>>,
    delay: D,
}

impl<P, L, T, D> FeedbackCoordinator<P, L, T, D>
where
    P: Panel,
    L: Indicator,
    T: ToneOutput,
    D: DelayNs + Clone,
{
    /// Take ownership of the outputs.  Nothing is drawn until
    /// [`Self::boot`].
    pub fn new(panel: P, leds: L, buzzer: T, delay: D) -> Self {
        Self {
            devices: Mutex::new(Devices {
                panel,
                frame: DisplayFrame::new(),
                leds,
                buzzer,
            }),
            delay,
        }
    }

    /// Draw the static chrome once, silence the buzzer and show the
    /// current state.
    pub async fn boot(&self, store: &OccupancyStore) {
        {
            let mut guard = self.devices.lock().await;
            let devices = &mut *guard;
            devices.buzzer.stop();
            devices.frame.draw_chrome(&mut devices.panel);
        }
        self.render(store).await;
        info!("Display: chrome drawn");
    }
}

impl<P, L, T, D> Feedback for FeedbackCoordinator<P, L, T, D>
where
    P: Panel,
    L: Indicator,
    T: ToneOutput,
    D: DelayNs + Clone,
{
    async fn render(&self, store: &OccupancyStore) {
        let mut guard = self.devices.lock().await;
        let devices = &mut *guard;

        // Read inside the lock so the newest count wins.
        let snapshot = store.snapshot();
        devices.frame.update_live(&mut devices.panel, snapshot.count);
        if let Err(e) = devices.leds.show(snapshot.indicator) {
            warn!("Indicator: {}", e);
        }
        devices.send_frame();

        debug!(
            "Render: {} of {} free, {}",
            snapshot.remaining(),
            crate::config::CAPACITY,
            snapshot.indicator
        );
    }

    async fn show_message(&self, message: &TransientMessage) {
        let token = {
            let mut guard = self.devices.lock().await;
            let devices = &mut *guard;
            let token = devices
                .frame
                .show_overlay(&mut devices.panel, message.text, message.position);
            devices.send_frame();
            token
        };

        // Lock released: other tasks may render or beep meanwhile.
        let mut delay = self.delay.clone();
        delay.delay_ms(message.duration_ms).await;

        let mut guard = self.devices.lock().await;
        let devices = &mut *guard;
        if devices.frame.clear_overlay(&mut devices.panel, token) {
            devices.send_frame();
        }
    }

    async fn beep(&self, pattern: BeepPattern) {
        let mut guard = self.devices.lock().await;
        let mut delay = self.delay.clone();

        for step in pattern.steps() {
            match *step {
                BeepStep::Tone { frequency_hz, ms } => {
                    guard.buzzer.start(frequency_hz);
                    delay.delay_ms(ms).await;
                    guard.buzzer.stop();
                }
                BeepStep::Silence { ms } => delay.delay_ms(ms).await,
            }
        }
    }
}
