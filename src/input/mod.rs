use macroquad::prelude::*;
use tracing::{debug, warn};

use crate::application::{Board, Simulation};
use crate::domain::LifeError;
use crate::ui::{Button, Control, INTERVAL_STEP_MS};

/// Toggle the cell under a left click
pub fn handle_board_click(simulation: &mut Simulation, board: &Board, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    if let Some((x, y)) = clicked_cell(simulation, board, mouse_pos) {
        toggle_at(simulation, x, y);
    }
}

/// Cell under the pointer, or None when the pointer is off the board
pub fn clicked_cell(
    simulation: &Simulation,
    board: &Board,
    mouse_pos: (f32, f32),
) -> Option<(usize, usize)> {
    let engine = simulation.engine();
    if !board.contains(mouse_pos.0, mouse_pos.1, engine.cols(), engine.rows()) {
        return None;
    }
    board.screen_to_cell(mouse_pos.0, mouse_pos.1)
}

/// Toggle a cell picked by the pointer; clicks that miss the grid are dropped.
pub fn toggle_at(simulation: &mut Simulation, x: usize, y: usize) {
    match simulation.toggle_cell(x, y) {
        Ok(()) => debug!(x, y, "toggled cell"),
        Err(err @ LifeError::OutOfBounds { .. }) => debug!(%err, "click outside board ignored"),
        Err(err) => warn!(%err, "toggle failed"),
    }
}

/// Apply one panel action
pub fn apply_control(simulation: &mut Simulation, control: Control) {
    match control {
        Control::RunStop => simulation.toggle_running(),
        Control::Step => simulation.step(),
        Control::Random => {
            if let Err(err) = simulation.randomize() {
                warn!(%err, "randomize failed");
            }
        }
        Control::Clear => simulation.clear(),
        Control::Slower => simulation.adjust_interval(INTERVAL_STEP_MS),
        Control::Faster => simulation.adjust_interval(-INTERVAL_STEP_MS),
    }
}

/// Keyboard shortcuts mirroring the panel buttons
pub fn process_keyboard_input(simulation: &mut Simulation) {
    let bindings: [(KeyCode, Control); 6] = [
        (KeyCode::Space, Control::RunStop),
        (KeyCode::N, Control::Step),
        (KeyCode::R, Control::Random),
        (KeyCode::C, Control::Clear),
        (KeyCode::Up, Control::Faster),
        (KeyCode::Down, Control::Slower),
    ];

    bindings
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, control)| apply_control(simulation, *control));
}

/// Process button clicks
pub fn process_button_clicks(
    simulation: &mut Simulation,
    buttons: &[(Control, Button)],
    mouse_pos: (f32, f32),
) {
    buttons
        .iter()
        .filter(|(_, button)| button.is_clicked(mouse_pos))
        .for_each(|(control, _)| apply_control(simulation, *control));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Settings;

    fn simulation() -> Simulation {
        Simulation::new(&Settings::default()).unwrap()
    }

    #[test]
    fn test_toggle_at_ignores_misses() {
        let mut sim = simulation();
        toggle_at(&mut sim, 40, 30);
        assert_eq!(sim.engine().population(), 0);

        toggle_at(&mut sim, 39, 29);
        assert_eq!(sim.engine().live_cells().collect::<Vec<_>>(), vec![(39, 29)]);
    }

    #[test]
    fn test_clicks_off_board_pick_no_cell() {
        let sim = simulation();
        let board = Board::new(20.0, 60.0, 20.0);
        assert_eq!(clicked_cell(&sim, &board, (25.0, 65.0)), Some((0, 0)));
        assert_eq!(clicked_cell(&sim, &board, (819.0, 659.0)), Some((39, 29)));
        // right edge of the board, the panel, and the header
        assert_eq!(clicked_cell(&sim, &board, (820.0, 100.0)), None);
        assert_eq!(clicked_cell(&sim, &board, (900.0, 300.0)), None);
        assert_eq!(clicked_cell(&sim, &board, (100.0, 30.0)), None);
    }

    #[test]
    fn test_controls() {
        let mut sim = simulation();
        apply_control(&mut sim, Control::Faster);
        assert_eq!(sim.interval_ms(), 90);
        apply_control(&mut sim, Control::Slower);
        apply_control(&mut sim, Control::Slower);
        assert_eq!(sim.interval_ms(), 110);

        apply_control(&mut sim, Control::Step);
        assert_eq!(sim.generation, 1);

        apply_control(&mut sim, Control::RunStop);
        assert!(sim.is_running);
        apply_control(&mut sim, Control::RunStop);
        assert!(!sim.is_running);

        apply_control(&mut sim, Control::Random);
        apply_control(&mut sim, Control::Clear);
        assert_eq!(sim.engine().population(), 0);
        assert_eq!(sim.generation, 0);
    }
}
