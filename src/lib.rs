// Domain layer - Core automaton logic
pub mod domain;

// Application layer - Simulation state and control
pub mod application;

// Infrastructure layer - UI constants, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, presets};
pub use application::GameState;
