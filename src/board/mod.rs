//! nRF52840 wiring: builds the concrete outputs and hands back the
//! button pins for the edge watchers.
//!
//! Only compiled with `--features embedded`.

pub mod buttons;
pub mod buzzer;
pub mod display;

use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive, Pin};
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::Timer;
use embedded_hal_async::delay::DelayNs;

use crate::config::I2C_FREQUENCY_KHZ;
use crate::error::Error;
use crate::tasks::AppContext;
use crate::ui::{FeedbackCoordinator, IndicatorLeds};

pub use buzzer::PwmBuzzer;

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Cooperative delay on the embassy time driver.
#[derive(Clone, Copy, Default)]
pub struct AsyncDelay;

impl DelayNs for AsyncDelay {
    async fn delay_ns(&mut self, ns: u32) {
        Timer::after_nanos(u64::from(ns)).await;
    }

    async fn delay_ms(&mut self, ms: u32) {
        Timer::after_millis(u64::from(ms)).await;
    }
}

pub type Leds = IndicatorLeds<Output<'static>, Output<'static>, Output<'static>>;
pub type Oled = display::Display<Twim<'static, peripherals::TWISPI0>>;
pub type Coordinator = FeedbackCoordinator<Oled, Leds, PwmBuzzer, AsyncDelay>;
pub type App = AppContext<Coordinator>;

/// Button pins, handed to the edge watchers.
pub struct Buttons {
    pub entry: AnyPin,
    pub exit: AnyPin,
    pub reset: AnyPin,
}

/// Bring up the display, LEDs and buzzer.
///
/// Fails only when the display does not come up; nothing has been
/// spawned at that point.
pub fn init(p: embassy_nrf::Peripherals) -> Result<(Coordinator, Buttons), Error> {
    let led = |pin: AnyPin| Output::new(pin, Level::Low, OutputDrive::Standard);
    let leds = IndicatorLeds::new(
        led(p.P0_03.degrade()),
        led(p.P0_04.degrade()),
        led(p.P0_28.degrade()),
    );

    let buzzer = PwmBuzzer::new(SimplePwm::new_1ch(p.PWM0, p.P0_29));

    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = match I2C_FREQUENCY_KHZ {
        100 => twim::Frequency::K100,
        250 => twim::Frequency::K250,
        _ => twim::Frequency::K400,
    };
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config);
    let oled = display::init(i2c)?;
    info!("Display: SSD1306 ready");

    let buttons = Buttons {
        entry: p.P0_11.degrade(),
        exit: p.P0_12.degrade(),
        reset: p.P0_24.degrade(),
    };

    Ok((FeedbackCoordinator::new(oled, leds, buzzer, AsyncDelay), buttons))
}
