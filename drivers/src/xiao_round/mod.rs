//! Seeed Studio XIAO round display
//!
//! 1.28" GC9A01 round panel (240x240, SPI), CHSC6X capacitive touch on I2C
//! and a PWM driven backlight. [`XiaoRoundDisplay`] owns the three parts and
//! forwards draw, touch and backlight calls to them.

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::Dimensions;
use embedded_graphics_core::primitives::Rectangle;
use embedded_graphics_core::Pixel;

use crate::backlight::{Backlight, BacklightConfig};
use crate::chsc6x::blocking::DEFAULT_DEBOUNCE_MS;
use crate::chsc6x::CHSC6X_ADDRESS;
use crate::touch::{Touch, TouchConfig, TouchPoints, TouchState};

mod touch;

pub use touch::XiaoRoundTouch;

/// Display dimensions
pub const DISPLAY_WIDTH: u16 = 240;
pub const DISPLAY_HEIGHT: u16 = 240;

/// Backlight level after power up
pub const DEFAULT_BRIGHTNESS: u8 = 128;

/// The touch layer is aligned with the panel, one report per sample.
pub const TOUCH_CONFIG: TouchConfig = TouchConfig {
    x_min: 0,
    x_max: DISPLAY_WIDTH - 1,
    y_min: 0,
    y_max: DISPLAY_HEIGHT - 1,
    offset_rotation: 0,
    i2c_address: CHSC6X_ADDRESS,
    debounce_ms: DEFAULT_DEBOUNCE_MS,
};

pub const BACKLIGHT_CONFIG: BacklightConfig = BacklightConfig {
    invert: false,
    brightness: DEFAULT_BRIGHTNESS,
};

/// Failure of one of the parts, passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<LE, TE> {
    Backlight(LE),
    Touch(TE),
}

/// Display device of the board: panel, backlight and touch owned together.
#[derive(Debug)]
pub struct XiaoRoundDisplay<PANEL, LIGHT, TOUCH> {
    panel: PANEL,
    light: LIGHT,
    touch: TOUCH,
    /// Brightness to restore on wake up, set while sleeping.
    sleep_brightness: Option<u8>,
}

impl<PANEL, LIGHT, TOUCH> XiaoRoundDisplay<PANEL, LIGHT, TOUCH>
where
    PANEL: DrawTarget,
    LIGHT: Backlight,
    TOUCH: Touch,
{
    /// Takes ownership of configured parts; the panel must already be
    /// initialized and the backlight set to its start level.
    pub fn new(panel: PANEL, light: LIGHT, touch: TOUCH) -> Self {
        Self {
            panel,
            light,
            touch,
            sleep_brightness: None,
        }
    }

    pub fn init_touch(&mut self) -> Result<(), TOUCH::Error> {
        self.touch.init()
    }

    pub fn touch_state(&self) -> TouchState {
        self.touch.state()
    }

    /// Samples up to `max_points` touched points.
    pub fn touch(&mut self, max_points: usize) -> Result<TouchPoints, TOUCH::Error> {
        self.touch.touch_raw(max_points)
    }

    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), LIGHT::Error> {
        self.light.set_brightness(brightness)?;
        self.sleep_brightness = None;
        Ok(())
    }

    pub fn brightness(&self) -> u8 {
        self.light.brightness()
    }

    pub fn is_sleeping(&self) -> bool {
        self.sleep_brightness.is_some()
    }

    /// Stops touch sampling and switches the backlight off.
    ///
    /// A touch that never initialized is left alone. When the backlight
    /// refuses the change the touch is woken again.
    pub fn sleep(&mut self) -> Result<(), Error<LIGHT::Error, TOUCH::Error>> {
        if self.is_sleeping() {
            return Ok(());
        }
        let touch_was_awake = self.touch.state() == TouchState::Awake;
        if touch_was_awake {
            self.touch.sleep().map_err(Error::Touch)?;
        }
        let brightness = self.light.brightness();
        if let Err(e) = self.light.set_brightness(0) {
            if touch_was_awake {
                self.touch.wakeup().map_err(Error::Touch)?;
            }
            return Err(Error::Backlight(e));
        }
        self.sleep_brightness = Some(brightness);
        Ok(())
    }

    /// Reverses [`XiaoRoundDisplay::sleep`], restoring the previous brightness.
    ///
    /// A sleeping touch is woken even when the brightness was already set
    /// again while asleep.
    pub fn wakeup(&mut self) -> Result<(), Error<LIGHT::Error, TOUCH::Error>> {
        if self.touch.state() == TouchState::Asleep {
            self.touch.wakeup().map_err(Error::Touch)?;
        }
        if let Some(brightness) = self.sleep_brightness {
            self.light
                .set_brightness(brightness)
                .map_err(Error::Backlight)?;
            self.sleep_brightness = None;
        }
        Ok(())
    }

    /// Tear the device down into its parts
    pub fn release(self) -> (PANEL, LIGHT, TOUCH) {
        (self.panel, self.light, self.touch)
    }
}

impl<PANEL, LIGHT, TOUCH> Dimensions for XiaoRoundDisplay<PANEL, LIGHT, TOUCH>
where
    PANEL: Dimensions,
{
    fn bounding_box(&self) -> Rectangle {
        self.panel.bounding_box()
    }
}

impl<PANEL, LIGHT, TOUCH> DrawTarget for XiaoRoundDisplay<PANEL, LIGHT, TOUCH>
where
    PANEL: DrawTarget,
{
    type Color = PANEL::Color;
    type Error = PANEL::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.panel.draw_iter(pixels)
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        self.panel.fill_contiguous(area, colors)
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.panel.fill_solid(area, color)
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.panel.clear(color)
    }
}
