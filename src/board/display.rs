//! SSD1306 status display: the concrete [`Panel`] behind the
//! feedback coordinator.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::config::DISPLAY_I2C_ADDRESS;
use crate::error::Error;
use crate::ui::{Panel, RectStyle};

/// Buffered 128×64 driver over any blocking I²C bus.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Bring the controller up with a blank screen.
///
/// Fails if nothing answers at `DISPLAY_I2C_ADDRESS`.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::DisplayInit)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::DisplayInit)?;
    Ok(display)
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .background_color(BinaryColor::Off)
        .build()
}

// Drawing into the frame buffer cannot fail; only `flush` touches the bus.
impl<I2C> Panel for Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn draw_string(&mut self, text: &str, origin: Point) {
        let _ = Text::with_baseline(text, origin, text_style(), Baseline::Top).draw(self);
    }

    fn draw_rect(&mut self, area: Rectangle, style: RectStyle) {
        let style = match style {
            RectStyle::Outline => PrimitiveStyle::with_stroke(BinaryColor::On, 1),
            RectStyle::Clear => PrimitiveStyle::with_fill(BinaryColor::Off),
        };
        let _ = area.into_styled(style).draw(self);
    }

    fn draw_line(&mut self, start: Point, end: Point) {
        let _ = Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(self);
    }

    fn send_frame(&mut self) -> Result<(), Error> {
        self.flush().map_err(|_| Error::DisplayBus)
    }
}
