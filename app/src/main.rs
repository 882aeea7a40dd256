#![no_std]
#![no_main]

use embassy_executor::Spawner;
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use esp_hal_embassy::main;
use hardware::{initialize_board, BoardPeripherals, PanelPeripherals, TouchPeripherals};
use log::{info, warn};
use render_task::render_task;

mod hardware;
mod render_task;

esp_bootloader_esp_idf::esp_app_desc!();

#[main]
async fn main(spawner: Spawner) {
    esp_println::logger::init_logger_from_env();

    // Initialize peripherals
    let peripherals = esp_hal::init(esp_hal::Config::default().with_cpu_clock(CpuClock::_240MHz));

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timg0.timer0);
    info!("Embassy initialized!");

    // XIAO ESP32-S3 pins of the round display, see hardware::* for the header names
    let p = BoardPeripherals {
        panel: PanelPeripherals {
            sck: peripherals.GPIO7,
            mosi: peripherals.GPIO9,
            cs: peripherals.GPIO2,
            dc: peripherals.GPIO4,
            spi: peripherals.SPI2,
        },
        touch: TouchPeripherals {
            sda: peripherals.GPIO5,
            scl: peripherals.GPIO6,
            int: peripherals.GPIO44,
            i2c: peripherals.I2C0,
        },
        backlight: peripherals.GPIO43,
        ledc: peripherals.LEDC,
    };

    let mut board = initialize_board(p);

    // A board without a working touch controller still draws
    match board.init_touch() {
        Ok(()) => info!("Touch controller found"),
        Err(e) => warn!("Touch controller unavailable: {:?}", e),
    }

    // TASK: the render loop owns the board from here on
    spawner.spawn(render_task(board)).ok();
}
