use super::Cell;

/// Grid manages the finite 2D cellular automaton state.
/// Dimensions are fixed at construction. Edges are hard boundaries:
/// neighbor lookups past an edge contribute nothing (no toroidal wrap).
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::Dead; cols * rows],
        }
    }

    /// Get grid dimensions as (cols, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Convert 2D coordinates to the flat row-major index
    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.cols && y < self.rows).then(|| self.cells[self.index(x, y)])
    }

    /// Set cell at position; out-of-bounds coordinates are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.cols && y < self.rows {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live cells among the 8 neighbors of (x, y).
    /// Offsets that fall outside the grid contribute 0.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        (-1i32..=1)
            .flat_map(|dy| (-1i32..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0 || ny < 0 {
                    return None;
                }
                self.get(nx as usize, ny as usize)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Compute the next generation into a fresh grid.
    /// Every cell is evaluated against the unmodified current generation,
    /// so the result buffer is separate from `self`.
    pub fn advance(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|y| (0..self.cols).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.index(x, y)];
                current.next_state(self.live_neighbors(x, y))
            })
            .collect();

        Self {
            cols: self.cols,
            rows: self.rows,
            cells,
        }
    }

    /// Reset all cells to dead
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Randomize grid contents (~30% chance of alive)
    pub fn randomize(&mut self) {
        use rand::Rng;
        let mut rng = rand::rng();

        for cell in &mut self.cells {
            *cell = if rng.random::<f32>() < 0.3 {
                Cell::Alive
            } else {
                Cell::Dead
            };
        }
    }

    /// Total number of live cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |y| (0..self.cols).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.index(x, y)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    #[test]
    fn test_new_grid_is_all_dead() {
        let grid = Grid::new(96, 48);
        assert_eq!(grid.dimensions(), (96, 48));
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::new(10, 10);

        grid.set(0, 0, Cell::Alive);
        grid.set(9, 9, Cell::Alive);
        assert_eq!(grid.get(0, 0), Some(Cell::Alive));
        assert_eq!(grid.get(9, 9), Some(Cell::Alive));
        assert_eq!(grid.get(1, 1), Some(Cell::Dead));

        // Out of bounds: get is None, set is a no-op
        assert_eq!(grid.get(10, 0), None);
        assert_eq!(grid.get(0, 10), None);
        grid.set(10, 10, Cell::Alive);
        assert_eq!(grid.count_alive(), 2);
    }

    #[test]
    fn test_neighbor_ring_around_single_cell() {
        let mut grid = Grid::new(10, 10);
        grid.set(5, 5, Cell::Alive);

        for y in 0usize..10 {
            for x in 0usize..10 {
                let expected = if (x, y) == (5, 5) {
                    0 // a cell is not its own neighbor
                } else if x.abs_diff(5) <= 1 && y.abs_diff(5) <= 1 {
                    1
                } else {
                    0
                };
                assert_eq!(
                    grid.live_neighbors(x, y),
                    expected,
                    "wrong count at ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_corner_cell_clips_at_edges() {
        let mut grid = Grid::new(10, 10);
        grid.set(0, 0, Cell::Alive);

        // Only the 3 in-bounds neighbors see it
        assert_eq!(grid.live_neighbors(1, 0), 1);
        assert_eq!(grid.live_neighbors(0, 1), 1);
        assert_eq!(grid.live_neighbors(1, 1), 1);

        // No wraparound to the opposite edges
        assert_eq!(grid.live_neighbors(9, 9), 0);
        assert_eq!(grid.live_neighbors(9, 0), 0);
        assert_eq!(grid.live_neighbors(0, 9), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = Grid::new(10, 10);
        presets::block().place_on(&mut grid, 4, 4);

        let next = grid.advance();

        assert_eq!(next.dimensions(), grid.dimensions());
        for (x, y, cell) in grid.iter_cells() {
            assert_eq!(next.get(x, y), Some(cell), "changed at ({}, {})", x, y);
        }
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let mut grid = Grid::new(10, 10);
        // Horizontal blinker centered on (5, 5)
        presets::blinker().place_on(&mut grid, 4, 5);
        assert_eq!(grid.count_alive(), 3);

        // After one generation it stands vertical
        let next = grid.advance();
        assert!(!next.get(4, 5).unwrap().is_alive());
        assert!(next.get(5, 4).unwrap().is_alive());
        assert!(next.get(5, 5).unwrap().is_alive());
        assert!(next.get(5, 6).unwrap().is_alive());
        assert!(!next.get(6, 5).unwrap().is_alive());
        assert_eq!(next.count_alive(), 3);

        // After two it is back to horizontal
        let next2 = next.advance();
        assert!(next2.get(4, 5).unwrap().is_alive());
        assert!(next2.get(5, 5).unwrap().is_alive());
        assert!(next2.get(6, 5).unwrap().is_alive());
        assert_eq!(next2.count_alive(), 3);
    }

    #[test]
    fn test_birth_requires_exactly_three_neighbors() {
        // Three neighbors: born
        let mut grid = Grid::new(10, 10);
        grid.set(4, 4, Cell::Alive);
        grid.set(6, 4, Cell::Alive);
        grid.set(5, 6, Cell::Alive);
        assert_eq!(grid.live_neighbors(5, 5), 3);
        assert!(grid.advance().get(5, 5).unwrap().is_alive());

        // Two neighbors: stays dead
        let mut grid = Grid::new(10, 10);
        grid.set(4, 4, Cell::Alive);
        grid.set(6, 4, Cell::Alive);
        assert!(!grid.advance().get(5, 5).unwrap().is_alive());

        // Four neighbors: stays dead
        let mut grid = Grid::new(10, 10);
        grid.set(4, 4, Cell::Alive);
        grid.set(6, 4, Cell::Alive);
        grid.set(4, 6, Cell::Alive);
        grid.set(6, 6, Cell::Alive);
        assert!(!grid.advance().get(5, 5).unwrap().is_alive());
    }

    #[test]
    fn test_advance_near_edges_does_not_wrap() {
        let mut grid = Grid::new(10, 10);
        // Block tucked into the corner survives with clipped neighborhoods
        presets::block().place_on(&mut grid, 0, 0);

        let next = grid.advance();
        assert!(next.get(0, 0).unwrap().is_alive());
        assert!(next.get(1, 0).unwrap().is_alive());
        assert!(next.get(0, 1).unwrap().is_alive());
        assert!(next.get(1, 1).unwrap().is_alive());
        assert_eq!(next.count_alive(), 4);
    }

    #[test]
    fn test_clear_resets_all_cells() {
        let mut grid = Grid::new(10, 10);
        grid.set(3, 3, Cell::Alive);
        grid.set(7, 2, Cell::Alive);
        assert_eq!(grid.count_alive(), 2);

        grid.clear();
        assert_eq!(grid.count_alive(), 0);
    }
}
