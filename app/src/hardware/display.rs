//! Display hardware initialization module
//!
//! This module handles the initialization of the GC9A01 round panel of the
//! XIAO round display over the SPI2 bus.

use drivers::xiao_round::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use esp_hal::delay::Delay;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::peripherals::{GPIO2, GPIO4, GPIO7, GPIO9, SPI2};
use esp_hal::spi::master::{Config as SpiConfig, Spi};
use esp_hal::spi::Mode;
use esp_hal::time::Rate;
use esp_hal::Blocking;
use mipidsi::interface::SpiInterface;
use mipidsi::models::GC9A01;
use mipidsi::options::{ColorInversion, ColorOrder};
use mipidsi::{Builder, Display, NoResetPin};
use static_cell::StaticCell;

/// SPI clock for panel writes
const PANEL_SPI_FREQUENCY_MHZ: u32 = 40;

/// Type alias for the GC9A01 panel driven over SPI, reset line not wired
pub type RoundPanel = Display<
    SpiInterface<
        'static,
        ExclusiveDevice<Spi<'static, Blocking>, Output<'static>, NoDelay>,
        Output<'static>,
    >,
    GC9A01,
    NoResetPin,
>;

/// Pins of the panel on the XIAO ESP32-S3 headers
pub struct PanelPeripherals {
    /// D8
    pub sck: GPIO7<'static>,
    /// D10
    pub mosi: GPIO9<'static>,
    /// D1
    pub cs: GPIO2<'static>,
    /// D3
    pub dc: GPIO4<'static>,
    pub spi: SPI2<'static>,
}

/// Initializes the GC9A01 panel.
///
/// This function configures:
/// - SPI2 in mode 0 at 40MHz, write only (MISO is shared with the SD slot)
/// - chip select and data/command lines
/// - the panel with colour inversion and BGR order, as the module expects
///
/// # Panics
///
/// Panics if the SPI bus or the panel cannot be initialized.
pub fn initialize_panel(p: PanelPeripherals) -> RoundPanel {
    let dc = Output::new(p.dc, Level::Low, OutputConfig::default());
    let cs = Output::new(p.cs, Level::High, OutputConfig::default());

    let spi = Spi::new(
        p.spi,
        SpiConfig::default()
            .with_frequency(Rate::from_mhz(PANEL_SPI_FREQUENCY_MHZ))
            .with_mode(Mode::_0),
    )
    .expect("Failed to configure SPI2")
    .with_sck(p.sck)
    .with_mosi(p.mosi);

    // Chip select is the only device on this bus that we drive
    let spi_device =
        ExclusiveDevice::new_no_delay(spi, cs).expect("Failed to claim chip select");

    static DISPLAY_BUFFER: StaticCell<[u8; 512]> = StaticCell::new();
    let buffer = DISPLAY_BUFFER.init([0_u8; 512]);

    let di = SpiInterface::new(spi_device, dc, buffer);

    Builder::new(GC9A01, di)
        .display_size(DISPLAY_WIDTH, DISPLAY_HEIGHT)
        .invert_colors(ColorInversion::Inverted)
        .color_order(ColorOrder::Bgr)
        .init(&mut Delay::new())
        .expect("Failed to initialize display")
}
