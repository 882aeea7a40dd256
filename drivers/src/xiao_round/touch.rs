//! Touch shim between the CHSC6X on the XIAO round display and the generic
//! [`Touch`] capability.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use embedded_hal::i2c::I2c;

use crate::chsc6x::blocking::Chsc6x;
use crate::chsc6x::TouchSensorError;
use crate::touch::{Touch, TouchConfig, TouchPoint, TouchPoints, TouchState};

use super::TOUCH_CONFIG;

#[derive(Debug)]
pub struct XiaoRoundTouch<I2C, PIN, DELAY> {
    sensor: Chsc6x<I2C, PIN, DELAY>,
    config: TouchConfig,
    state: TouchState,
}

impl<I2C, PIN, DELAY> XiaoRoundTouch<I2C, PIN, DELAY>
where
    I2C: I2c,
    PIN: InputPin,
    DELAY: DelayNs,
{
    /// Touch shim wired the way the XIAO round display is.
    pub fn new(i2c: I2C, touch_int: PIN, delay: DELAY) -> Self {
        Self::with_config(i2c, touch_int, delay, TOUCH_CONFIG)
    }

    pub fn with_config(i2c: I2C, touch_int: PIN, delay: DELAY, config: TouchConfig) -> Self {
        let mut sensor = Chsc6x::with_address(i2c, config.i2c_address, touch_int, delay);
        sensor.set_debounce_ms(config.debounce_ms);
        Self {
            sensor,
            config,
            state: TouchState::Uninitialized,
        }
    }

    pub fn config(&self) -> &TouchConfig {
        &self.config
    }

    pub fn release(self) -> (I2C, PIN, DELAY) {
        self.sensor.release()
    }

    fn ensure_initialized(&self) -> Result<(), TouchSensorError> {
        if self.state.is_initialized() {
            Ok(())
        } else {
            Err(TouchSensorError::NotInitialized)
        }
    }
}

impl<I2C, PIN, DELAY> Touch for XiaoRoundTouch<I2C, PIN, DELAY>
where
    I2C: I2c,
    PIN: InputPin,
    DELAY: DelayNs,
{
    type Error = TouchSensorError;

    fn init(&mut self) -> Result<(), Self::Error> {
        match self.state {
            TouchState::Awake | TouchState::Asleep => return Ok(()),
            TouchState::Failed => return Err(TouchSensorError::NotInitialized),
            TouchState::Uninitialized => {}
        }

        match self.sensor.probe() {
            Ok(()) => {
                self.state = TouchState::Awake;
                Ok(())
            }
            Err(e) => {
                self.state = TouchState::Failed;
                Err(e)
            }
        }
    }

    // The CHSC6X has no documented low power command; sleeping only gates
    // sampling in the shim.
    fn wakeup(&mut self) -> Result<(), Self::Error> {
        self.ensure_initialized()?;
        self.state = TouchState::Awake;
        Ok(())
    }

    fn sleep(&mut self) -> Result<(), Self::Error> {
        self.ensure_initialized()?;
        self.state = TouchState::Asleep;
        Ok(())
    }

    fn touch_raw(&mut self, max_points: usize) -> Result<TouchPoints, Self::Error> {
        self.ensure_initialized()?;

        let mut points = TouchPoints::new();
        if self.state == TouchState::Asleep || max_points == 0 {
            return Ok(points);
        }

        // Single point controller, one report is the whole sample.
        if let Some(report) = self.sensor.read_touch()? {
            let (x, y) = self.config.transform(report.x, report.y);
            // Capacity is never smaller than one point.
            let _ = points.push(TouchPoint { x, y, size: 1, id: 0 });
        }
        Ok(points)
    }

    fn state(&self) -> TouchState {
        self.state
    }
}
