use super::{TouchReport, TouchSensorError, CHSC6X_ADDRESS, RAW_TOUCH_REPORT_LEN};
use crate::BlockingRegisterDevice;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use embedded_hal::i2c::I2c;

/// Debounce applied to the interrupt line when none is configured
pub const DEFAULT_DEBOUNCE_MS: u32 = 1;

#[derive(Debug)]
pub struct Chsc6x<I2C, PIN, DELAY> {
    dev: BlockingRegisterDevice<I2C>,
    touch_int: PIN,
    delay: DELAY,
    debounce_ms: u32,
}

impl<I2C, PIN, DELAY> Chsc6x<I2C, PIN, DELAY>
where
    I2C: I2c,
    PIN: InputPin,
    DELAY: DelayNs,
{
    /// Create a new CHSC6X instance on the default address
    pub fn new(i2c: I2C, touch_int: PIN, delay: DELAY) -> Self {
        Self::with_address(i2c, CHSC6X_ADDRESS, touch_int, delay)
    }

    pub fn with_address(i2c: I2C, address: u8, touch_int: PIN, delay: DELAY) -> Self {
        Self {
            dev: BlockingRegisterDevice::new(i2c, address),
            touch_int,
            delay,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    pub fn set_debounce_ms(&mut self, debounce_ms: u32) {
        self.debounce_ms = debounce_ms;
    }

    /// Check that the controller answers on the bus
    pub fn probe(&mut self) -> Result<(), TouchSensorError> {
        self.dev.probe()?;
        Ok(())
    }

    /// The interrupt line is held low while a finger rests on the panel.
    ///
    /// A high line is sampled a second time after the debounce delay so a
    /// touch that is just starting is not missed.
    pub fn is_touch_available(&mut self) -> Result<bool, TouchSensorError> {
        if self.int_is_low()? {
            return Ok(true);
        }
        self.delay.delay_ms(self.debounce_ms);
        self.int_is_low()
    }

    /// Reads one report, `None` when the controller reports no contact
    pub fn read_report(&mut self) -> Result<Option<TouchReport>, TouchSensorError> {
        let mut buffer = [0u8; RAW_TOUCH_REPORT_LEN];
        self.dev.read(&mut buffer)?;
        Ok(TouchReport::from_bytes(&buffer))
    }

    /// Reads a report only when the interrupt line signals a touch
    pub fn read_touch(&mut self) -> Result<Option<TouchReport>, TouchSensorError> {
        if !self.is_touch_available()? {
            return Ok(None);
        }
        self.read_report()
    }

    /// Give back the bus, the interrupt pin and the delay
    pub fn release(self) -> (I2C, PIN, DELAY) {
        (self.dev.release(), self.touch_int, self.delay)
    }

    fn int_is_low(&mut self) -> Result<bool, TouchSensorError> {
        self.touch_int
            .is_low()
            .map_err(|_| TouchSensorError::PinError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Bus, MockDelay, MockI2c, MockPin};
    use core::cell::Cell;

    type TestChsc6x<'a> = Chsc6x<MockI2c<'a>, MockPin<'a>, MockDelay>;

    fn sensor<'a>(bus: &'a Bus, touching: &'a Cell<bool>) -> TestChsc6x<'a> {
        Chsc6x::new(MockI2c::new(bus), MockPin::new(touching), MockDelay::default())
    }

    #[test]
    fn test_probe_present() {
        let bus = Bus::default();
        let touching = Cell::new(false);
        let mut touch = sensor(&bus, &touching);
        assert_eq!(touch.probe(), Ok(()));
        assert_eq!(bus.last_address.get(), Some(0x2E));
    }

    #[test]
    fn test_probe_absent() {
        let bus = Bus::absent();
        let touching = Cell::new(false);
        let mut touch = sensor(&bus, &touching);
        assert_eq!(touch.probe(), Err(TouchSensorError::NotFound));
    }

    #[test]
    fn test_no_read_without_interrupt() {
        let bus = Bus::with_report([0x01, 0, 50, 0, 60]);
        let touching = Cell::new(false);
        let mut touch = sensor(&bus, &touching);
        assert_eq!(touch.read_touch(), Ok(None));
        assert_eq!(bus.reads.get(), 0);

        let (_, _, delay) = touch.release();
        assert_eq!(delay.total_ns, 1_000_000);
    }

    #[test]
    fn test_read_touch_with_interrupt() {
        let bus = Bus::with_report([0x01, 0, 50, 0, 60]);
        let touching = Cell::new(true);
        let mut touch = sensor(&bus, &touching);
        assert_eq!(touch.read_touch(), Ok(Some(TouchReport { x: 50, y: 60 })));
        assert_eq!(bus.reads.get(), 1);
    }

    #[test]
    fn test_read_touch_released_report() {
        let bus = Bus::with_report([0x00, 0, 50, 0, 60]);
        let touching = Cell::new(true);
        let mut touch = sensor(&bus, &touching);
        assert_eq!(touch.read_touch(), Ok(None));
    }

    #[test]
    fn test_bus_error_is_reported() {
        let bus = Bus::with_report([0x01, 0, 50, 0, 60]);
        bus.bus_error.set(true);
        let touching = Cell::new(true);
        let mut touch = sensor(&bus, &touching);
        assert_eq!(touch.read_touch(), Err(TouchSensorError::I2CError));
    }

    #[test]
    fn test_custom_debounce() {
        let bus = Bus::default();
        let touching = Cell::new(false);
        let mut touch = sensor(&bus, &touching);
        touch.set_debounce_ms(10);
        assert_eq!(touch.is_touch_available(), Ok(false));
        let (_, _, delay) = touch.release();
        assert_eq!(delay.total_ns, 10_000_000);
    }
}
