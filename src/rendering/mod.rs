use macroquad::prelude::*;

use crate::application::{Board, Settings, Simulation};
use crate::domain::LifeEngine;
use crate::ui::{Button, Control, HEADER_HEIGHT, MARGIN, PANEL_WIDTH, panel_x};

const BOARD_BACKGROUND: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE: Color = Color::new(0.16, 0.16, 0.16, 1.0);
const ALIVE: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const PANEL_BACKGROUND: Color = Color::new(0.12, 0.12, 0.12, 1.0);

/// One-line summary of B3/S23 shown under the title
pub const RULES: &str =
    "A live cell with 2 or 3 live neighbors survives; a dead cell with exactly 3 is born.";

pub fn draw_header() {
    draw_text("Conway's Game of Life", MARGIN, 34.0, 32.0, WHITE);
    draw_text(RULES, MARGIN, 52.0, 16.0, GRAY);
}

/// Draw the board background, grid lines and every live cell
pub fn draw_board(engine: &LifeEngine, board: &Board) {
    let size = board.cell_size;
    let width = engine.cols() as f32 * size;
    let height = engine.rows() as f32 * size;

    draw_rectangle(board.origin_x, board.origin_y, width, height, BOARD_BACKGROUND);

    if size >= 4.0 {
        for col in 0..=engine.cols() {
            let x = board.origin_x + col as f32 * size;
            draw_line(x, board.origin_y, x, board.origin_y + height, 1.0, GRID_LINE);
        }
        for row in 0..=engine.rows() {
            let y = board.origin_y + row as f32 * size;
            draw_line(board.origin_x, y, board.origin_x + width, y, 1.0, GRID_LINE);
        }
    }

    for (x, y) in engine.live_cells() {
        let (sx, sy) = board.cell_to_screen(x, y);
        draw_rectangle(sx + 1.0, sy + 1.0, size - 2.0, size - 2.0, ALIVE);
    }
}

/// Draw the control panel: interval, buttons and status
pub fn draw_controls(
    simulation: &Simulation,
    settings: &Settings,
    buttons: &[(Control, Button)],
    mouse_pos: (f32, f32),
) {
    let px = panel_x(settings);
    draw_rectangle(px - 10.0, 0.0, PANEL_WIDTH + 20.0, screen_height(), PANEL_BACKGROUND);

    let top = HEADER_HEIGHT;
    draw_text("Controls", px, top + 20.0, 24.0, WHITE);
    draw_text("Update every", px, top + 45.0, 16.0, GRAY);
    draw_text(&format!("{} msec", simulation.interval_ms()), px, top + 68.0, 20.0, WHITE);

    buttons.iter().for_each(|(_, button)| button.draw(mouse_pos));

    let engine = simulation.engine();
    let (status, status_color) = if simulation.is_running {
        ("Running", GREEN)
    } else {
        ("Stopped", ORANGE)
    };
    let base = top + 360.0;
    let labels = [
        (String::from("Generation:"), base, 16.0, WHITE),
        (simulation.generation.to_string(), base + 22.0, 20.0, ALIVE),
        (String::from("Population:"), base + 50.0, 16.0, WHITE),
        (engine.population().to_string(), base + 72.0, 20.0, ALIVE),
        (String::from("Status:"), base + 100.0, 16.0, WHITE),
        (String::from(status), base + 122.0, 18.0, status_color),
        (format!("Grid: {}x{}", engine.cols(), engine.rows()), base + 150.0, 14.0, GRAY),
    ];
    labels
        .iter()
        .for_each(|(text, y, size, color)| {
            draw_text(text, px, *y, *size, *color);
        });
}
