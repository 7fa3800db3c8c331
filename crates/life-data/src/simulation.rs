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

//! The generation stepper.

use crate::grid::{EdgeMode, Grid, GridError};
use crate::rule::Rule;
use std::mem;

/// What changed during one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// The generation number reached by this step.
    pub generation: u64,
    /// Dead cells that came alive.
    pub births: usize,
    /// Live cells that died.
    pub deaths: usize,
    /// Live cells after the step.
    pub population: usize,
}

impl StepReport {
    /// A step without births or deaths leaves the grid unchanged.
    pub fn is_stable(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}

/// A running Game of Life.
///
/// Owns two grids of identical size: the current generation and a scratch
/// buffer the next generation is written into before the two are swapped.
/// The grid the simulation was created with is kept as the seed for
/// [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    scratch: Grid,
    seed: Grid,
    rule: Rule,
    edges: EdgeMode,
    generation: u64,
}

impl Simulation {
    /// Creates a simulation at generation 0 seeded with `grid`.
    pub fn new(grid: Grid, rule: Rule, edges: EdgeMode) -> Self {
        log::info!(
            "Simulation created: {}x{} grid, rule {}, {:?} edges, {} live cells.",
            grid.width(),
            grid.height(),
            rule,
            edges,
            grid.population()
        );
        Self {
            scratch: grid.clone(),
            seed: grid.clone(),
            grid,
            rule,
            edges,
            generation: 0,
        }
    }

    /// Advances one generation.
    pub fn step(&mut self) -> StepReport {
        let (births, deaths) = self
            .grid
            .step_into(&mut self.scratch, &self.rule, self.edges);
        mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;

        let report = StepReport {
            generation: self.generation,
            births,
            deaths,
            population: self.grid.population(),
        };
        log::trace!("{report:?}");
        report
    }

    /// Advances `generations` generations and returns the report of the last one.
    pub fn run(&mut self, generations: u64) -> Option<StepReport> {
        (0..generations).fold(None, |_, _| Some(self.step()))
    }

    /// Restores the seed and rewinds to generation 0.
    pub fn reset(&mut self) {
        self.grid.clone_from(&self.seed);
        self.generation = 0;
        log::info!("Simulation reset to its seed.");
    }

    /// Kills every cell and rewinds to generation 0. The seed is kept.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
        log::info!("Simulation cleared.");
    }

    /// Flips one cell of the current generation and returns its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool, GridError> {
        self.grid.toggle(x, y)
    }

    /// Returns the current generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the grid the simulation was seeded with.
    pub fn seed(&self) -> &Grid {
        &self.seed
    }

    /// Returns the rule in use.
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Returns the edge handling in use.
    pub fn edges(&self) -> EdgeMode {
        self.edges
    }

    /// Returns how many generations have elapsed since the seed (or the last reset/clear).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.grid.population()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;

    fn blinker_sim() -> Simulation {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.stamp(&Pattern::builtin("blinker").unwrap(), (1, 2));
        Simulation::new(grid, Rule::CONWAY, EdgeMode::Bounded)
    }

    #[test]
    fn test_step_reports_changes() {
        let mut sim = blinker_sim();
        let report = sim.step();
        assert_eq!(
            report,
            StepReport {
                generation: 1,
                births: 2,
                deaths: 2,
                population: 3
            }
        );
        assert!(!report.is_stable());
        assert!(sim.grid().get(2, 1));
        assert!(!sim.grid().get(1, 2));
    }

    #[test]
    fn test_period_two_returns_to_seed() {
        let mut sim = blinker_sim();
        sim.run(2);
        assert_eq!(sim.grid(), sim.seed());
        assert_eq!(sim.generation(), 2);
    }

    #[test]
    fn test_run_zero_generations() {
        let mut sim = blinker_sim();
        assert_eq!(sim.run(0), None);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_reset_restores_seed() {
        let mut sim = blinker_sim();
        sim.run(3);
        sim.toggle(0, 0).unwrap();
        sim.reset();
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid(), sim.seed());
    }

    #[test]
    fn test_clear_keeps_seed() {
        let mut sim = blinker_sim();
        sim.step();
        sim.clear();
        assert_eq!(sim.population(), 0);
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.seed().population(), 3);
    }

    #[test]
    fn test_empty_grid_is_stable() {
        let mut sim = Simulation::new(Grid::new(4, 4).unwrap(), Rule::CONWAY, EdgeMode::Wrapping);
        assert!(sim.step().is_stable());
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let mut sim = blinker_sim();
        assert!(sim.toggle(5, 0).is_err());
    }
}
