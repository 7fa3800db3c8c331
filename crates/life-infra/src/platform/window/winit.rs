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

//! The simulation window, backed by `winit`.

use life_core::platform::window::{LifeWindow, LifeWindowHandle};
use raw_window_handle::{
    DisplayHandle, HandleError, HasDisplayHandle, HasWindowHandle, WindowHandle,
};
use std::sync::Arc;
use winit::dpi::LogicalSize;
use winit::error::OsError;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

/// A `winit` window that implements [`LifeWindow`].
///
/// The native window sits behind an `Arc` so the render surface can keep it
/// alive independently of this value.
#[derive(Debug, Clone)]
pub struct WinitWindow {
    inner: Arc<Window>,
}

/// Describes the window that will host a grid of square cells.
#[derive(Debug, Clone)]
pub struct WinitWindowBuilder {
    title: String,
    grid: (u32, u32),
    cell_size: u32,
}

impl WinitWindowBuilder {
    /// A window titled "Game of Life" for an 80x40 grid of 20 px cells.
    pub fn new() -> Self {
        Self {
            title: "Game of Life".to_string(),
            grid: (80, 40),
            cell_size: 20,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the grid dimensions, in cells, the window is sized for.
    pub fn with_grid(mut self, width: u32, height: u32) -> Self {
        self.grid = (width, height);
        self
    }

    /// Sets the side of one cell, in logical pixels.
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Initial inner size: one `cell_size` square per cell.
    pub fn logical_size(&self) -> (u32, u32) {
        (
            self.grid.0.saturating_mul(self.cell_size),
            self.grid.1.saturating_mul(self.cell_size),
        )
    }

    /// Opens the window on `event_loop`.
    ///
    /// The user may resize it freely, but never below one pixel per cell.
    pub fn build(self, event_loop: &ActiveEventLoop) -> Result<WinitWindow, OsError> {
        let (width, height) = self.logical_size();
        log::info!(
            "Opening '{}' at {width}x{height} for a {}x{} grid ({} px cells).",
            self.title,
            self.grid.0,
            self.grid.1,
            self.cell_size
        );

        let attributes = Window::default_attributes()
            .with_title(self.title)
            .with_inner_size(LogicalSize::new(width, height))
            .with_min_inner_size(LogicalSize::new(self.grid.0.max(1), self.grid.1.max(1)));
        let window = event_loop.create_window(attributes)?;

        Ok(WinitWindow {
            inner: Arc::new(window),
        })
    }
}

impl Default for WinitWindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WinitWindow {
    /// Returns whether `id` names this window.
    pub fn is(&self, id: WindowId) -> bool {
        self.inner.id() == id
    }
}

impl HasWindowHandle for WinitWindow {
    fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
        self.inner.window_handle()
    }
}

impl HasDisplayHandle for WinitWindow {
    fn display_handle(&self) -> Result<DisplayHandle<'_>, HandleError> {
        self.inner.display_handle()
    }
}

impl LifeWindow for WinitWindow {
    fn inner_size(&self) -> (u32, u32) {
        let size = self.inner.inner_size();
        (size.width, size.height)
    }

    fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    fn clone_handle_arc(&self) -> LifeWindowHandle {
        self.inner.clone()
    }

    fn set_title(&self, title: &str) {
        self.inner.set_title(title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builder_fits_classic_board() {
        assert_eq!(WinitWindowBuilder::new().logical_size(), (1600, 800));
    }

    #[test]
    fn logical_size_follows_grid_and_cell_size() {
        let builder = WinitWindowBuilder::new().with_grid(30, 10).with_cell_size(8);
        assert_eq!(builder.logical_size(), (240, 80));
    }

    #[test]
    fn logical_size_saturates() {
        let builder = WinitWindowBuilder::new()
            .with_grid(u32::MAX, 2)
            .with_cell_size(4);
        assert_eq!(builder.logical_size(), (u32::MAX, 8));
    }
}
