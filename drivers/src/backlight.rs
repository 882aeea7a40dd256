use embedded_hal::pwm::SetDutyCycle;

/// Brightness control of a panel backlight.
pub trait Backlight {
    type Error;

    /// `0` is off, `255` is full brightness.
    fn set_brightness(&mut self, brightness: u8) -> Result<(), Self::Error>;

    /// Last brightness applied.
    fn brightness(&self) -> u8;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BacklightConfig {
    /// Drive the channel active low.
    pub invert: bool,
    /// Brightness applied when the backlight is created.
    pub brightness: u8,
}

/// Backlight driven by one PWM channel.
#[derive(Debug)]
pub struct PwmBacklight<P> {
    channel: P,
    invert: bool,
    brightness: u8,
}

impl<P> PwmBacklight<P>
where
    P: SetDutyCycle,
{
    /// Takes the channel and applies the configured brightness.
    pub fn new(channel: P, config: BacklightConfig) -> Result<Self, P::Error> {
        let mut backlight = Self {
            channel,
            invert: config.invert,
            brightness: 0,
        };
        backlight.set_brightness(config.brightness)?;
        Ok(backlight)
    }

    pub fn release(self) -> P {
        self.channel
    }
}

impl<P> Backlight for PwmBacklight<P>
where
    P: SetDutyCycle,
{
    type Error = P::Error;

    fn set_brightness(&mut self, brightness: u8) -> Result<(), Self::Error> {
        let level = if self.invert {
            u8::MAX - brightness
        } else {
            brightness
        };
        self.channel
            .set_duty_cycle_fraction(u16::from(level), u16::from(u8::MAX))?;
        self.brightness = brightness;
        Ok(())
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }
}
