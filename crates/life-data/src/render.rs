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

//! Turns a [`Grid`] into a [`CellFrame`].

use crate::grid::Grid;
use life_core::math::Srgba8;
use life_core::renderer::CellFrame;
use serde::{Deserialize, Serialize};

/// Colors used to draw the grid.
///
/// Dead cells form a checkerboard: `dead_odd` where `x + y` is odd,
/// `dead_even` elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Color of live cells.
    pub alive: Srgba8,
    /// Color of dead cells where `x + y` is even.
    pub dead_even: Srgba8,
    /// Color of dead cells where `x + y` is odd.
    pub dead_odd: Srgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Srgba8::rgb(0, 150, 0),
            dead_even: Srgba8::rgb(0, 0, 0),
            dead_odd: Srgba8::rgb(20, 20, 20),
        }
    }
}

impl Palette {
    /// Returns the color of the cell at `(x, y)`.
    #[inline]
    pub fn cell_color(&self, x: usize, y: usize, alive: bool) -> Srgba8 {
        if alive {
            self.alive
        } else if (x + y) % 2 == 1 {
            self.dead_odd
        } else {
            self.dead_even
        }
    }
}

/// Draws `grid` into a new frame of the same dimensions.
pub fn rasterize(grid: &Grid, palette: &Palette) -> CellFrame {
    let mut frame = CellFrame::new(grid.width() as u32, grid.height() as u32, palette.dead_even);
    rasterize_into(grid, palette, &mut frame);
    frame
}

/// Draws `grid` into `frame`, reallocating it if the dimensions differ.
pub fn rasterize_into(grid: &Grid, palette: &Palette, frame: &mut CellFrame) {
    let (width, height) = (grid.width() as u32, grid.height() as u32);
    if frame.dimensions() != (width, height) {
        *frame = CellFrame::new(width, height, palette.dead_even);
    }

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            frame.set(x as u32, y as u32, palette.cell_color(x, y, grid.get(x, y)));
        }
    }
}
