#![no_std]
//! Board support for the Seeed Studio XIAO round display
//!
//! This library provides the touch capability used by the display stack,
//! a driver for the CHSC6X capacitive touch controller, a PWM backlight and
//! the board adapter that ties a panel, the backlight and the touch shim
//! into one device handle.

use embedded_hal::i2c::I2c;

/// PWM driven backlight.
pub mod backlight;

/// CHSC6X capacitive touch controller driver.
pub mod chsc6x;

/// Generic touch capability consumed by the display stack.
pub mod touch;

/// XIAO round display board adapter and touch shim.
pub mod xiao_round;

/// Access to a device on a blocking I2C bus.
#[derive(Debug)]
pub(crate) struct BlockingRegisterDevice<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> BlockingRegisterDevice<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Zero length write, only checks that the device acknowledges its address.
    pub fn probe(&mut self) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[])
    }

    /// Plain read without a register pointer, for devices that stream a report.
    pub fn read(&mut self, buffer: &mut [u8]) -> Result<(), I2C::Error> {
        self.i2c.read(self.address, buffer)
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}


#[cfg(test)]
mod tests {
    use crate::mock::{Bus, MockI2c};
    use crate::BlockingRegisterDevice;

    #[test]
    fn test_probe_hits_device_address() {
        let bus = Bus::default();
        let mut dev = BlockingRegisterDevice::new(MockI2c::new(&bus), 0x2E);
        assert!(dev.probe().is_ok());
        assert_eq!(bus.last_address.get(), Some(0x2E));
        assert_eq!(bus.writes.get(), 1);
        assert_eq!(bus.reads.get(), 0);
    }

    #[test]
    fn test_probe_reports_missing_device() {
        let bus = Bus::absent();
        let mut dev = BlockingRegisterDevice::new(MockI2c::new(&bus), 0x2E);
        assert!(dev.probe().is_err());
    }

    #[test]
    fn test_read_fills_buffer() {
        let bus = Bus::with_report([1, 0, 42, 0, 7]);
        let mut dev = BlockingRegisterDevice::new(MockI2c::new(&bus), 0x2E);
        let mut buffer = [0u8; 5];
        dev.read(&mut buffer).unwrap();
        assert_eq!(buffer, [1, 0, 42, 0, 7]);
        assert_eq!(bus.reads.get(), 1);
    }
}
