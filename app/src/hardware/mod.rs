//! Hardware initialization modules
//!
//! This module provides organized initialization functions for the parts of
//! the XIAO round display attached to a XIAO ESP32-S3:
//!
//! - **Display**: GC9A01 round panel via SPI
//! - **Backlight**: LEDC PWM channel
//! - **Touchpad**: CHSC6X capacitive touch controller via I2C
//! - **Board**: all of the above assembled into one device

pub mod backlight;
pub mod board;
pub mod display;
pub mod touch;

// Re-export commonly used types and functions for convenience
pub use board::{initialize_board, Board, BoardPeripherals};
pub use display::PanelPeripherals;
pub use touch::TouchPeripherals;
