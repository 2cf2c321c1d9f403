use macroquad::prelude::*;

use crate::application::GameState;
use crate::ui::pointer_to_cell;

/// Handle mouse painting on the grid.
/// Holding the left button activates the cell under the pointer;
/// painting over a live cell changes nothing. Accepted in both the
/// editing and running modes.
pub fn handle_mouse_paint(state: &mut GameState, mouse_pos: (f32, f32)) {
    if !is_mouse_button_down(MouseButton::Left) {
        return;
    }

    if let Some((x, y)) = pointer_to_cell(mouse_pos) {
        state.activate(x, y);
    }
}

/// Process keyboard input functionally.
/// All bindings are edge-triggered: a press fires once, holding the key
/// does not repeat the action on later polls.
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 6] = [
        (KeyCode::Enter, GameState::toggle_running),
        (KeyCode::Backspace, GameState::undo),
        (KeyCode::Up, GameState::speed_up),
        (KeyCode::Down, GameState::slow_down),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}
