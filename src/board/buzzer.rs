//! Passive buzzer on one PWM channel.

use embassy_nrf::pwm::{Prescaler, SimplePwm};

use crate::ui::ToneOutput;

/// PWM0 clock after the /128 prescaler.
const PWM_CLOCK_HZ: u32 = 16_000_000 / 128;

/// Square wave at 50 % duty; the top value sets the pitch.
pub struct PwmBuzzer {
    pwm: SimplePwm<'static, embassy_nrf::peripherals::PWM0>,
}

impl PwmBuzzer {
    pub fn new(mut pwm: SimplePwm<'static, embassy_nrf::peripherals::PWM0>) -> Self {
        pwm.set_prescaler(Prescaler::Div128);
        pwm.disable();
        Self { pwm }
    }
}

impl ToneOutput for PwmBuzzer {
    fn start(&mut self, frequency_hz: u32) {
        // COUNTERTOP is 15 bits wide.
        let top = (PWM_CLOCK_HZ / frequency_hz.max(1)).clamp(1, 0x7FFF) as u16;
        self.pwm.set_max_duty(top);
        self.pwm.set_duty(0, top / 2);
        self.pwm.enable();
    }

    fn stop(&mut self) {
        self.pwm.disable();
    }
}
