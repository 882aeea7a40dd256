use drivers::touch::{TouchPoint, TouchState};
use drivers::xiao_round::{DEFAULT_BRIGHTNESS, DISPLAY_HEIGHT, DISPLAY_WIDTH};
use embassy_time::{Duration, Instant, Timer};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use log::{error, info};

use crate::hardware::Board;

/// Touch polling period
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Dim the backlight after this long without a touch
const DIM_TIMEOUT: Duration = Duration::from_secs(30);

const DIM_BRIGHTNESS: u8 = 16;

const BRUSH_DIAMETER: u32 = 9;

/// Touch paint: every sensed point leaves a dot, a touch at the centre
/// clears the canvas.
#[embassy_executor::task]
pub async fn render_task(mut board: Board) {
    if let Err(e) = draw_canvas(&mut board) {
        error!("Draw error: {:?}", e);
    }

    let mut last_touch = Instant::now();
    let mut dimmed = false;

    loop {
        if board.touch_state() == TouchState::Awake {
            match board.touch(1) {
                Ok(points) => {
                    for point in points {
                        last_touch = Instant::now();
                        if dimmed {
                            dimmed = false;
                            if let Err(e) = board.set_brightness(DEFAULT_BRIGHTNESS) {
                                error!("Backlight error: {:?}", e);
                            }
                        }
                        paint(&mut board, point);
                    }
                }
                Err(e) => error!("Touch read error: {:?}", e),
            }
        }

        if !dimmed && last_touch.elapsed() > DIM_TIMEOUT {
            info!("Idle, dimming backlight");
            dimmed = true;
            if let Err(e) = board.set_brightness(DIM_BRIGHTNESS) {
                error!("Backlight error: {:?}", e);
            }
        }

        Timer::after(POLL_INTERVAL).await;
    }
}

fn center() -> Point {
    Point::new(i32::from(DISPLAY_WIDTH) / 2, i32::from(DISPLAY_HEIGHT) / 2)
}

fn draw_canvas(board: &mut Board) -> Result<(), <Board as DrawTarget>::Error> {
    let rim = Circle::with_center(center(), u32::from(DISPLAY_WIDTH) - 2)
        .into_styled(PrimitiveStyle::with_stroke(Rgb565::CSS_DARK_SLATE_GRAY, 2));
    let target = Circle::with_center(center(), 24)
        .into_styled(PrimitiveStyle::with_stroke(Rgb565::CSS_DIM_GRAY, 1));

    board.clear(Rgb565::BLACK)?;
    rim.draw(board)?;
    target.draw(board)
}

fn paint(board: &mut Board, point: TouchPoint) {
    let position = Point::new(i32::from(point.x), i32::from(point.y));
    let offset = position - center();

    let result = if offset.x * offset.x + offset.y * offset.y < 12 * 12 {
        info!("Clearing canvas");
        draw_canvas(board)
    } else {
        Circle::with_center(position, BRUSH_DIAMETER)
            .into_styled(PrimitiveStyle::with_fill(Rgb565::CSS_ORANGE))
            .draw(board)
    };
    if let Err(e) = result {
        error!("Draw error: {:?}", e);
    }
}
