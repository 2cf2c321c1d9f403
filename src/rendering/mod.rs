use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Grid;
use crate::ui::CELL_SIZE;

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the cellular automaton grid, with the cell under the pointer
/// outlined for editing feedback
pub fn draw_grid(grid: &Grid, hovered: Option<(usize, usize)>) {
    let cell_size = CELL_SIZE as f32;

    // Colors
    let alive_color = Color::from_rgba(0, 255, 150, 255); // Bright green
    let dead_cell_color = Color::from_rgba(15, 15, 15, 255); // Very dark gray
    let grid_line_color = Color::from_rgba(40, 40, 40, 255); // Dark gray

    for (x, y, cell) in grid.iter_cells() {
        let screen_x = x as f32 * cell_size;
        let screen_y = y as f32 * cell_size;

        let fill = if cell.is_alive() { alive_color } else { dead_cell_color };
        draw_rectangle(screen_x, screen_y, cell_size, cell_size, fill);
        draw_rectangle_lines(screen_x, screen_y, cell_size, cell_size, 1.0, grid_line_color);
    }

    // Pointer highlight on top of the cell fills
    if let Some((hx, hy)) = hovered {
        draw_rectangle_lines(
            hx as f32 * cell_size,
            hy as f32 * cell_size,
            cell_size,
            cell_size,
            2.0,
            WHITE,
        );
    }
}

/// Draw the textual status overlay: run state, generation count,
/// current speed, and the key bindings
pub fn draw_overlay(state: &GameState) {
    let px = 10.0;

    let status = if state.is_running { "Running" } else { "Paused" };
    let status_color = if state.is_running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };

    let generation_text = format!("Generation: {}", state.generation);
    let speed_text = format!("Speed: {} gen/s", state.ticks_per_second);

    let labels: [(&str, f32, f32, f32, Color); 3] = [
        (status, px, 24.0, 20.0, status_color),
        (&generation_text, px, 44.0, 16.0, WHITE),
        (&speed_text, px, 62.0, 16.0, WHITE),
    ];

    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });

    let controls = [
        ("LMB: Paint", px, 88.0, 12.0, GRAY),
        ("Enter: Play/Pause", px, 101.0, 12.0, GRAY),
        ("Backspace: Undo", px, 114.0, 12.0, GRAY),
        ("Up/Down: Speed", px, 127.0, 12.0, GRAY),
        ("C: Clear", px, 140.0, 12.0, GRAY),
        ("R: Random", px, 153.0, 12.0, GRAY),
    ];

    controls.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });
}
