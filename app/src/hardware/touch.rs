//! Touchpad hardware initialization module
//!
//! This module sets up the CHSC6X touch controller of the XIAO round display
//! on the I2C0 bus together with its interrupt line.

use drivers::xiao_round::XiaoRoundTouch;
use esp_hal::delay::Delay;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::peripherals::{GPIO44, GPIO5, GPIO6, I2C0};
use esp_hal::time::Rate;
use esp_hal::Blocking;

/// I2C clock for the touch controller
const TOUCH_I2C_FREQUENCY_KHZ: u32 = 400;

/// Type alias for the touch shim of the board
pub type Touchpad = XiaoRoundTouch<I2c<'static, Blocking>, Input<'static>, Delay>;

/// Pins of the touch controller on the XIAO ESP32-S3 headers
pub struct TouchPeripherals {
    /// D4
    pub sda: GPIO5<'static>,
    /// D5
    pub scl: GPIO6<'static>,
    /// D7, active low
    pub int: GPIO44<'static>,
    pub i2c: I2C0<'static>,
}

/// Creates the touch shim. The controller itself is probed later, by
/// [`drivers::touch::Touch::init`].
///
/// # Panics
///
/// Panics if the I2C bus cannot be configured.
pub fn initialize_touchpad(p: TouchPeripherals) -> Touchpad {
    let i2c = I2c::new(
        p.i2c,
        I2cConfig::default().with_frequency(Rate::from_khz(TOUCH_I2C_FREQUENCY_KHZ)),
    )
    .expect("Failed to configure I2C0")
    .with_sda(p.sda)
    .with_scl(p.scl);

    // The interrupt line is open drain on the module
    let touch_int = Input::new(p.int, InputConfig::default().with_pull(Pull::Up));

    XiaoRoundTouch::new(i2c, touch_int, Delay::new())
}
