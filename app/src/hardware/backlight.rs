//! Backlight hardware initialization module
//!
//! The backlight enable of the XIAO round display sits on D6 and is driven by
//! a low speed LEDC channel.

use drivers::backlight::PwmBacklight;
use drivers::xiao_round::BACKLIGHT_CONFIG;
use esp_hal::gpio::DriveMode;
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::peripherals::{GPIO43, LEDC};
use esp_hal::time::Rate;
use static_cell::StaticCell;

/// PWM frequency, above the audible range
const BACKLIGHT_PWM_FREQUENCY_KHZ: u32 = 24;

/// Type alias for the PWM backlight on LEDC channel 0
pub type Light = PwmBacklight<channel::Channel<'static, LowSpeed>>;

/// Initializes the LEDC timer and channel driving the backlight and applies
/// the default brightness.
///
/// # Panics
///
/// Panics if the LEDC timer or channel rejects its configuration.
pub fn initialize_backlight(ledc: LEDC<'static>, pin: GPIO43<'static>) -> Light {
    static LEDC: StaticCell<Ledc<'static>> = StaticCell::new();
    static TIMER: StaticCell<timer::Timer<'static, LowSpeed>> = StaticCell::new();

    let ledc = LEDC.init(Ledc::new(ledc));
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    let timer = TIMER.init(ledc.timer::<LowSpeed>(timer::Number::Timer0));
    timer
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty8Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_khz(BACKLIGHT_PWM_FREQUENCY_KHZ),
        })
        .expect("Failed to configure backlight timer");
    let timer: &'static timer::Timer<'static, LowSpeed> = timer;

    let mut channel = ledc.channel(channel::Number::Channel0, pin);
    channel
        .configure(channel::config::Config {
            timer,
            duty_pct: 0,
            drive_mode: DriveMode::PushPull,
        })
        .expect("Failed to configure backlight channel");

    PwmBacklight::new(channel, BACKLIGHT_CONFIG).expect("Failed to set backlight brightness")
}
