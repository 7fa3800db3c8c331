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

//! The CPU-side image handed to a [`RenderSystem`](super::RenderSystem).

use crate::math::Srgba8;

/// A row-major image holding exactly one color per grid cell.
///
/// The render system is responsible for scaling it to the window; the frame
/// itself knows nothing about pixels on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellFrame {
    width: u32,
    height: u32,
    pixels: Vec<Srgba8>,
}

impl CellFrame {
    /// Creates a `width` x `height` frame filled with `fill`.
    pub fn new(width: u32, height: u32, fill: Srgba8) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    /// Returns `(width, height)` in cells.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the color at `(x, y)`, or `None` outside the frame.
    pub fn get(&self, x: u32, y: u32) -> Option<Srgba8> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Writes the color at `(x, y)`. Writes outside the frame are ignored
    /// and reported through the return value.
    pub fn set(&mut self, x: u32, y: u32, color: Srgba8) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Returns all colors in row-major order.
    pub fn pixels(&self) -> &[Srgba8] {
        &self.pixels
    }

    /// Returns the frame as tightly packed RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}
