//! Advance-throughput benchmark for the automaton engine

use std::time::Instant;

use life_sandbox::domain::Grid;

fn benchmark_advance(size: usize, iterations: u32) -> f64 {
    let mut grid = Grid::new(size, size);
    grid.randomize();

    let start = Instant::now();
    for _ in 0..iterations {
        grid = grid.advance();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Advance Benchmark ===\n");

    let sizes = [50, 100, 200, 500, 1000];
    let iterations = 20;

    println!("{:>12} {:>12} {:>14}", "Size", "ms/gen", "cells/sec");
    println!("{:-<40}", "");

    for size in sizes {
        let ms = benchmark_advance(size, iterations);
        let cells = (size * size) as f64;
        let throughput = cells / (ms / 1000.0);

        println!(
            "{:>12} {:>12.2} {:>13.1}M",
            format!("{}x{}", size, size),
            ms,
            throughput / 1_000_000.0
        );
    }
}
