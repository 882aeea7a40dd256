//! Board assembly
//!
//! Wires the panel, the backlight and the touch shim of the XIAO round
//! display into one [`XiaoRoundDisplay`].

use drivers::xiao_round::XiaoRoundDisplay;
use esp_hal::peripherals::{GPIO43, LEDC};
use log::info;

use super::backlight::{initialize_backlight, Light};
use super::display::{initialize_panel, PanelPeripherals, RoundPanel};
use super::touch::{initialize_touchpad, TouchPeripherals, Touchpad};

/// Type alias for the display device of the board
pub type Board = XiaoRoundDisplay<RoundPanel, Light, Touchpad>;

/// Every peripheral the round display is wired to
pub struct BoardPeripherals {
    pub panel: PanelPeripherals,
    pub touch: TouchPeripherals,
    /// D6
    pub backlight: GPIO43<'static>,
    pub ledc: LEDC<'static>,
}

/// Builds the display device with the fixed configuration of this board.
///
/// The returned device is ready to draw; touch still has to be brought up
/// with [`XiaoRoundDisplay::init_touch`] so the caller can decide what a
/// missing touch controller means.
///
/// # Panics
///
/// Panics if a bus or the panel fails to initialize.
pub fn initialize_board(p: BoardPeripherals) -> Board {
    let panel = initialize_panel(p.panel);
    info!("GC9A01 panel initialized");

    let light = initialize_backlight(p.ledc, p.backlight);
    let touch = initialize_touchpad(p.touch);

    XiaoRoundDisplay::new(panel, light, touch)
}
