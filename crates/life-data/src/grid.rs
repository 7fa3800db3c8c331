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

//! The fixed-size cell grid.

use crate::pattern::Pattern;
use crate::rule::Rule;
use serde::{Deserialize, Serialize};

/// How neighbours beyond the grid border are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    /// Cells outside the grid are permanently dead.
    #[default]
    Bounded,
    /// Opposite edges are joined, making the grid a torus.
    Wrapping,
}

/// An error produced by grid construction or cell access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// One of the requested dimensions is zero.
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The coordinates lie outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        /// Column of the rejected cell.
        x: usize,
        /// Row of the rejected cell.
        y: usize,
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },
}

/// A rectangular grid of cells that are either alive or dead.
///
/// Cells are stored row-major; `(x, y)` addresses column `x` of row `y`,
/// with `(0, 0)` in the top-left corner. The dimensions never change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

/// Relative positions of the 8 Moore neighbours.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

impl Grid {
    /// Creates an all-dead grid of `width` columns and `height` rows.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns whether the cell at `(x, y)` is alive. Cells outside the grid are dead.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    /// Sets the state of the cell at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        let i = self.checked_index(x, y)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Flips the cell at `(x, y)` and returns its new state.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool, GridError> {
        let i = self.checked_index(x, y)?;
        self.cells[i] = !self.cells[i];
        Ok(self.cells[i])
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Returns the number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterates over the coordinates of live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| (i % self.width, i / self.width))
    }

    /// Counts the live cells among the 8 neighbours of `(x, y)`.
    pub fn live_neighbors(&self, x: usize, y: usize, edges: EdgeMode) -> u8 {
        let (w, h) = (self.width as isize, self.height as isize);
        let (x, y) = (x as isize, y as isize);

        NEIGHBOR_OFFSETS
            .iter()
            .filter(|(dx, dy)| {
                let (nx, ny) = (x + dx, y + dy);
                match edges {
                    EdgeMode::Bounded => {
                        nx >= 0 && nx < w && ny >= 0 && ny < h && self.get(nx as usize, ny as usize)
                    }
                    EdgeMode::Wrapping => {
                        self.get(nx.rem_euclid(w) as usize, ny.rem_euclid(h) as usize)
                    }
                }
            })
            .count() as u8
    }

    /// Computes the next generation of `self` into `next`.
    ///
    /// Every cell of `next` is derived from `self` only, so the update is
    /// synchronous. Returns `(births, deaths)`.
    ///
    /// # Panics
    /// Panics if `next` does not have the same dimensions as `self`.
    pub fn step_into(&self, next: &mut Grid, rule: &Rule, edges: EdgeMode) -> (usize, usize) {
        assert_eq!(
            (self.width, self.height),
            (next.width, next.height),
            "step_into requires buffers of identical dimensions"
        );

        let mut births = 0;
        let mut deaths = 0;

        for y in 0..self.height {
            for x in 0..self.width {
                let i = y * self.width + x;
                let alive = self.cells[i];
                let neighbors = self.live_neighbors(x, y, edges);
                let next_alive = rule.next_state(alive, neighbors);

                match (alive, next_alive) {
                    (false, true) => births += 1,
                    (true, false) => deaths += 1,
                    _ => {}
                }
                next.cells[i] = next_alive;
            }
        }

        (births, deaths)
    }

    /// Sets the live cells of `pattern` with its top-left corner at `origin`.
    ///
    /// Cells that would land outside the grid are clipped. Returns how many
    /// cells were placed.
    pub fn stamp(&mut self, pattern: &Pattern, origin: (usize, usize)) -> usize {
        let mut placed = 0;
        for &(px, py) in pattern.cells() {
            let (Some(x), Some(y)) = (origin.0.checked_add(px), origin.1.checked_add(py)) else {
                continue;
            };
            if let Some(i) = self.index(x, y) {
                self.cells[i] = true;
                placed += 1;
            }
        }

        let clipped = pattern.cells().len() - placed;
        if clipped > 0 {
            log::warn!(
                "Pattern '{}' at ({}, {}) was clipped: {} of {} cells fall outside the {}x{} grid.",
                pattern.name(),
                origin.0,
                origin.1,
                clipped,
                pattern.cells().len(),
                self.width,
                self.height
            );
        }
        placed
    }

    /// Renders the grid as plaintext: one line per row, `O` for live and `.` for dead cells.
    pub fn to_plaintext(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width) {
            out.extend(row.iter().map(|&alive| if alive { 'O' } else { '.' }));
            out.push('\n');
        }
        out
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        self.index(x, y).ok_or(GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }
}
