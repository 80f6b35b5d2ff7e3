//! Parking lot occupancy tracker - nRF52840 firmware entry point.
//!
//! Two executors:
//!   - a high-priority `InterruptExecutor` on SWI0 running the three
//!     button edge watchers (they only debounce and signal)
//!   - the thread executor running the ENTRY, EXIT and RESET tasks
//!
//! Build: `cargo build --release --features embedded --target thumbv7em-none-eabihf`

#![no_std]
#![no_main]

use defmt::{info, unwrap};
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_nrf::gpio::AnyPin;
use embassy_nrf::interrupt;
use embassy_nrf::interrupt::{InterruptExt, Priority};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use carpark::board::{self, App};
use carpark::config::{DEBOUNCE_SCOPE, DEBOUNCE_WINDOW_MS};
use carpark::{AppContext, ButtonSource, EdgeDebouncer, Error};

static EDGE_EXECUTOR: InterruptExecutor = InterruptExecutor::new();
static APP: StaticCell<App> = StaticCell::new();

#[interrupt]
unsafe fn EGU0_SWI0() {
    EDGE_EXECUTOR.on_interrupt()
}

#[embassy_executor::task]
async fn entry_task(app: &'static App) -> ! {
    app.run(ButtonSource::Entry).await
}

#[embassy_executor::task]
async fn exit_task(app: &'static App) -> ! {
    app.run(ButtonSource::Exit).await
}

#[embassy_executor::task]
async fn reset_task(app: &'static App) -> ! {
    app.run(ButtonSource::Reset).await
}

#[embassy_executor::task(pool_size = 3)]
async fn edge_task(pin: AnyPin, source: ButtonSource, app: &'static App) -> ! {
    board::buttons::edge_watcher(pin, source, app).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Carpark v{} starting", env!("CARGO_PKG_VERSION"));

    let p = embassy_nrf::init(Default::default());

    let (feedback, buttons) = match board::init(p) {
        Ok(parts) => parts,
        Err(e) => defmt::panic!("Board init failed: {}", e),
    };

    let app: &'static App = APP.init(AppContext::new(
        feedback,
        EdgeDebouncer::new(DEBOUNCE_WINDOW_MS, DEBOUNCE_SCOPE),
    ));

    app.feedback.boot(&app.store).await;

    // Reactive tasks first, so no accepted edge is left without a taker.
    unwrap!(spawner.spawn(entry_task(app)).map_err(|_| Error::Spawn));
    unwrap!(spawner.spawn(exit_task(app)).map_err(|_| Error::Spawn));
    unwrap!(spawner.spawn(reset_task(app)).map_err(|_| Error::Spawn));

    interrupt::EGU0_SWI0.set_priority(Priority::P6);
    let edge_spawner = EDGE_EXECUTOR.start(interrupt::EGU0_SWI0);
    for (pin, source) in [
        (buttons.entry, ButtonSource::Entry),
        (buttons.exit, ButtonSource::Exit),
        (buttons.reset, ButtonSource::Reset),
    ] {
        unwrap!(edge_spawner
            .spawn(edge_task(pin, source, app))
            .map_err(|_| Error::Spawn));
    }

    info!("Carpark ready: {} spaces", carpark::config::CAPACITY);
}
