//! RGB indicator on three independent output pins.

use embedded_hal::digital::OutputPin;

use crate::error::Error;
use crate::occupancy::IndicatorState;

/// Anything that can show an [`IndicatorState`].
pub trait Indicator {
    fn show(&mut self, state: IndicatorState) -> Result<(), Error>;
}

/// Discrete red/green/blue pins, active-high.
pub struct IndicatorLeds<R, G, B> {
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B> IndicatorLeds<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }
}

impl<R, G, B> Indicator for IndicatorLeds<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    fn show(&mut self, state: IndicatorState) -> Result<(), Error> {
        let levels = state.leds();
        self.red
            .set_state(levels.red.into())
            .map_err(|_| Error::Indicator)?;
        self.green
            .set_state(levels.green.into())
            .map_err(|_| Error::Indicator)?;
        self.blue
            .set_state(levels.blue.into())
            .map_err(|_| Error::Indicator)?;
        Ok(())
    }
}
