//! GPIO button edge watchers.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - ENTRY (A)  - a car arrives
//!   - EXIT  (B)  - a car leaves
//!   - RESET (SW) - empty the lot
//!
//! Each watcher runs on the high-priority interrupt executor, so it
//! preempts the reactive tasks the moment GPIOTE reports an edge.  It
//! only timestamps the edge and hands it to [`AppContext::on_edge`];
//! debouncing and the task wake-up happen there, without blocking.

use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::Instant;

use crate::input::ButtonSource;
use crate::tasks::AppContext;
use crate::ui::Feedback;

/// Watch one button forever.
pub async fn edge_watcher<F: Feedback>(
    pin: AnyPin,
    source: ButtonSource,
    app: &'static AppContext<F>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);
    info!("Button {}: watching falling edges", source);

    loop {
        // Falling edge = press (active-low).
        btn.wait_for_falling_edge().await;
        app.on_edge(source, Instant::now().as_millis());
    }
}
