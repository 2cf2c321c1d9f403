use std::time::Instant;

use macroquad::prelude::*;

use life_sandbox::{GameState, input, rendering, ui};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: ui::SCREEN_WIDTH,
        window_height: ui::SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut state = GameState::new(ui::grid_cols(), ui::grid_rows());

    loop {
        let mouse_pos = mouse_position();

        // Poll input and apply intents, then the clock-gated advance
        input::handle_mouse_paint(&mut state, mouse_pos);
        state = input::process_keyboard_input(state);
        state = state.tick(Instant::now());

        // Render from the settled state for this pass
        clear_background(BLACK);
        rendering::draw_grid(&state.grid, ui::pointer_to_cell(mouse_pos));
        rendering::draw_overlay(&state);

        next_frame().await;
    }
}
