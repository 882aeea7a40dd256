// Hynitron CHSC6X self-capacitance touch controller, as fitted to the
// Seeed Studio XIAO round display.
// https://github.com/Seeed-Studio/Seeed_Arduino_RoundDisplay
use embedded_hal::i2c::Error;
use num_enum::{IntoPrimitive, TryFromPrimitive};

pub(crate) const CHSC6X_ADDRESS: u8 = 0x2E;

/// Number of bytes in one touch report
pub const RAW_TOUCH_REPORT_LEN: usize = 5;

/// First byte of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportStatus {
    Released = 0x00,
    Pressed = 0x01,
}

/// A single decoded report, in raw sensor coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchReport {
    pub x: u16,
    pub y: u16,
}

impl TouchReport {
    /// Decodes a raw report; anything but a pressed status carries no point.
    pub fn from_bytes(buffer: &[u8; RAW_TOUCH_REPORT_LEN]) -> Option<Self> {
        match ReportStatus::try_from(buffer[0]) {
            Ok(ReportStatus::Pressed) => Some(Self {
                x: u16::from(buffer[2]),
                y: u16::from(buffer[4]),
            }),
            _ => None,
        }
    }
}

/// Errors that can occur when interacting with the CHSC6X
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchSensorError {
    I2CError,
    PinError,
    /// The controller did not acknowledge its address.
    NotFound,
    /// The touch peripheral was never brought up, or its bring up failed.
    NotInitialized,
}

impl<E> From<E> for TouchSensorError
where
    E: Error,
{
    fn from(error: E) -> Self {
        match error.kind() {
            embedded_hal::i2c::ErrorKind::NoAcknowledge(_) => TouchSensorError::NotFound,
            _ => TouchSensorError::I2CError,
        }
    }
}

pub mod blocking;
