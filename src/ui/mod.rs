// Presentation constants - fixed at build time, no runtime configuration

/// Viewport width in pixels
pub const SCREEN_WIDTH: i32 = 1440;
/// Viewport height in pixels
pub const SCREEN_HEIGHT: i32 = 720;
/// Edge length of one grid cell in pixels
pub const CELL_SIZE: usize = 15;

/// Number of grid columns filling the viewport
pub const fn grid_cols() -> usize {
    SCREEN_WIDTH as usize / CELL_SIZE
}

/// Number of grid rows filling the viewport
pub const fn grid_rows() -> usize {
    SCREEN_HEIGHT as usize / CELL_SIZE
}

/// Map a pointer pixel position to the grid cell under it.
/// Integer division by the cell size; positions outside the grid
/// (including negative coordinates) map to None.
pub fn pointer_to_cell(mouse_pos: (f32, f32)) -> Option<(usize, usize)> {
    let (mx, my) = mouse_pos;
    if mx < 0.0 || my < 0.0 {
        return None;
    }

    let x = mx as usize / CELL_SIZE;
    let y = my as usize / CELL_SIZE;
    (x < grid_cols() && y < grid_rows()).then_some((x, y))
}
