// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Integration tests driving whole simulations from built-in and file patterns.

use life_data::{rasterize, EdgeMode, Grid, Palette, Pattern, Rule, Simulation};
use std::io::Write;

fn live_cells(sim: &Simulation) -> Vec<(usize, usize)> {
    sim.grid().live_cells().collect()
}

fn seeded(width: usize, height: usize, name: &str, origin: (usize, usize), edges: EdgeMode) -> Simulation {
    let mut grid = Grid::new(width, height).unwrap();
    grid.stamp(&Pattern::builtin(name).unwrap(), origin);
    Simulation::new(grid, Rule::CONWAY, edges)
}

#[test]
fn test_default_glider_seed_positions() {
    let sim = seeded(80, 40, "glider", (1, 1), EdgeMode::Bounded);
    assert_eq!(
        live_cells(&sim),
        vec![(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]
    );
}

#[test]
fn test_glider_moves_one_cell_diagonally_every_four_generations() {
    let mut sim = seeded(80, 40, "glider", (1, 1), EdgeMode::Bounded);
    let start = live_cells(&sim);

    for lap in 1..=5 {
        let report = sim.run(4).unwrap();
        assert_eq!(report.population, 5);
        let shifted: Vec<_> = start.iter().map(|&(x, y)| (x + lap, y + lap)).collect();
        assert_eq!(live_cells(&sim), shifted, "after {} generations", lap * 4);
    }
}

#[test]
fn test_glider_wraps_around_a_torus() {
    let mut sim = seeded(10, 10, "glider", (0, 0), EdgeMode::Wrapping);
    let start = live_cells(&sim);

    sim.run(40);

    assert_eq!(sim.generation(), 40);
    assert_eq!(live_cells(&sim), start);
}

#[test]
fn test_bounded_glider_never_escapes() {
    let mut sim = seeded(12, 12, "glider", (1, 1), EdgeMode::Bounded);
    for _ in 0..100 {
        sim.step();
        assert!(sim.grid().live_cells().all(|(x, y)| x < 12 && y < 12));
    }
}

#[test]
fn test_gosper_gun_grows() {
    let mut sim = seeded(100, 60, "gosper-glider-gun", (1, 1), EdgeMode::Bounded);
    assert_eq!(sim.population(), 36);
    let report = sim.run(120).unwrap();
    assert!(report.population > 36, "population {}", report.population);
}

#[test]
fn test_pattern_file_round_trip_through_plaintext() {
    let mut file = tempfile::Builder::new()
        .suffix(".cells")
        .tempfile()
        .unwrap();
    writeln!(file, "!Name: toad").unwrap();
    writeln!(file, ".OOO").unwrap();
    writeln!(file, "OOO.").unwrap();

    let pattern = Pattern::load(file.path()).unwrap();
    assert_eq!(pattern.cells().len(), 6);

    let mut grid = Grid::new(6, 6).unwrap();
    grid.stamp(&pattern, (1, 2));
    let text = grid.to_plaintext();
    let reparsed = Pattern::from_plaintext("again", &text).unwrap();
    let mut again = Grid::new(6, 6).unwrap();
    again.stamp(&reparsed, (0, 0));
    assert_eq!(grid, again);
}

#[test]
fn test_missing_pattern_file() {
    let err = Pattern::load("/definitely/not/here.cells").unwrap_err();
    assert!(err.to_string().contains("here.cells"));
}

#[test]
fn test_rasterized_frame_tracks_simulation() {
    let mut sim = seeded(5, 5, "blinker", (1, 2), EdgeMode::Bounded);
    let palette = Palette::default();

    let before = rasterize(sim.grid(), &palette);
    sim.step();
    let after = rasterize(sim.grid(), &palette);

    assert_eq!(before.get(1, 2), Some(palette.alive));
    assert_eq!(after.get(1, 2), Some(palette.dead_odd));
    assert_eq!(after.get(2, 1), Some(palette.alive));
}
