use std::time::{Duration, Instant};

use crate::domain::{Cell, Grid};

/// Ticks per second a fresh state starts with
const DEFAULT_TICKS_PER_SECOND: u32 = 10;

/// GameState orchestrates the simulation.
/// One owned aggregate of grid, edit history, clock, and run flag;
/// the application layer that coordinates domain logic.
pub struct GameState {
    pub grid: Grid,
    /// Manual activations in order, newest last; consulted only from the end
    pub edit_history: Vec<(usize, usize)>,
    pub is_running: bool,
    pub generation: u64,
    /// Generations advanced per second while running, never below 1
    pub ticks_per_second: u32,
    /// When the last automatic advance ran; None before the first one
    pub last_tick: Option<Instant>,
}

impl GameState {
    /// Create new game state with given grid dimensions, paused and empty
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            grid: Grid::new(cols, rows),
            edit_history: Vec::new(),
            is_running: false,
            generation: 0,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            last_tick: None,
        }
    }

    /// Activate the cell at (x, y) and remember the edit for undo.
    /// Activating an already-live cell changes nothing, including the
    /// history. Out-of-bounds coordinates are ignored.
    pub fn activate(&mut self, x: usize, y: usize) {
        if self.grid.get(x, y) == Some(Cell::Dead) {
            self.grid.set(x, y, Cell::Alive);
            self.edit_history.push((x, y));
        }
    }

    /// Undo the most recent manual activation: the recorded cell goes
    /// dead regardless of what the simulation did to it since.
    /// No-op when there is nothing to undo.
    pub fn undo(mut self) -> Self {
        if let Some((x, y)) = self.edit_history.pop() {
            self.grid.set(x, y, Cell::Dead);
        }
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Raise the simulation speed by one generation per second
    pub fn speed_up(mut self) -> Self {
        self.ticks_per_second = self.ticks_per_second.saturating_add(1);
        self
    }

    /// Lower the simulation speed, clamped at 1 generation per second
    pub fn slow_down(mut self) -> Self {
        self.ticks_per_second = self.ticks_per_second.saturating_sub(1).max(1);
        self
    }

    /// Clear grid, history, and generation counter, and pause
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.edit_history.clear();
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Randomize grid contents; history and generation counter reset
    /// as for clear
    pub fn randomize(mut self) -> Self {
        self.grid.randomize();
        self.edit_history.clear();
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Advance the simulation if it is running and the tick interval has
    /// elapsed since the last advance. Called once per polling pass with
    /// the monotonic time sampled for that pass, however often that is.
    pub fn tick(mut self, now: Instant) -> Self {
        if !self.is_running {
            return self;
        }

        let interval = Duration::from_secs(1) / self.ticks_per_second;
        let due = self
            .last_tick
            .is_none_or(|last| now.duration_since(last) >= interval);

        if due {
            self.grid = self.grid.advance();
            self.generation += 1;
            self.last_tick = Some(now);
        }

        self
    }
}
