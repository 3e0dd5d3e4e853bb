mod button;

pub use button::Button;

use crate::application::{Board, Settings};

pub const MARGIN: f32 = 20.0;
pub const HEADER_HEIGHT: f32 = 60.0;
pub const PANEL_WIDTH: f32 = 140.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Milliseconds added or removed by the interval buttons and arrow keys
pub const INTERVAL_STEP_MS: i64 = 10;

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    RunStop,
    Step,
    Random,
    Clear,
    Slower,
    Faster,
}

/// Board placement below the header, left-aligned
pub fn board(settings: &Settings) -> Board {
    Board::new(MARGIN, HEADER_HEIGHT, settings.cell_size)
}

/// X position where the control panel starts (right of the board)
pub fn panel_x(settings: &Settings) -> f32 {
    MARGIN + settings.board_width + MARGIN
}

/// Window size that fits header, board and panel
pub fn window_size(settings: &Settings) -> (i32, i32) {
    let width = panel_x(settings) + PANEL_WIDTH + MARGIN;
    let height = HEADER_HEIGHT + settings.board_height + MARGIN;
    (width.ceil() as i32, height.ceil() as i32)
}

/// Panel buttons; the first label follows the running state
pub fn create_buttons(settings: &Settings, is_running: bool) -> Vec<(Control, Button)> {
    let px = panel_x(settings);
    let half = (PANEL_WIDTH - 10.0) / 2.0;
    let row = |i: f32| HEADER_HEIGHT + 140.0 + i * (BUTTON_HEIGHT + 10.0);

    vec![
        (Control::Slower, Button::new(px, HEADER_HEIGHT + 80.0, half, 30.0, "-")),
        (Control::Faster, Button::new(px + half + 10.0, HEADER_HEIGHT + 80.0, half, 30.0, "+")),
        (
            Control::RunStop,
            Button::new(px, row(0.0), PANEL_WIDTH, BUTTON_HEIGHT, if is_running { "Stop" } else { "Run" }),
        ),
        (Control::Step, Button::new(px, row(1.0), PANEL_WIDTH, BUTTON_HEIGHT, "Step")),
        (Control::Random, Button::new(px, row(2.0), PANEL_WIDTH, BUTTON_HEIGHT, "Random")),
        (Control::Clear, Button::new(px, row(3.0), PANEL_WIDTH, BUTTON_HEIGHT, "Clear")),
    ]
}
