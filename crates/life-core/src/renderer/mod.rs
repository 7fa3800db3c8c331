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

//! Backend-agnostic rendering contracts.
//!
//! The simulation produces a [`CellFrame`] each redraw; a [`RenderSystem`]
//! implementation turns it into pixels on a window surface.

pub mod error;
pub mod frame;

pub use self::error::RenderError;
pub use self::frame::CellFrame;

use crate::platform::LifeWindow;

/// Statistics describing one presented frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderStats {
    /// Number of frames presented so far, including this one.
    pub frame_number: u64,
    /// CPU time spent uploading and recording the frame, in milliseconds.
    pub cpu_time_ms: f32,
}

/// A high-level trait representing the entire rendering backend.
///
/// Implementations own every GPU resource they create; `shutdown` releases
/// them and must be safe to call more than once.
pub trait RenderSystem {
    /// Creates the surface and device for `window`.
    fn init(&mut self, window: &dyn LifeWindow) -> Result<(), RenderError>;

    /// Reconfigures the surface after the window changed size.
    fn resize(&mut self, width: u32, height: u32);

    /// Uploads `frame` and presents it, stretched over the whole surface.
    fn render(&mut self, frame: &CellFrame) -> Result<RenderStats, RenderError>;

    /// Returns the name of the graphics adapter in use, if initialized.
    fn adapter_name(&self) -> Option<String>;

    /// Releases all backend resources.
    fn shutdown(&mut self);
}
