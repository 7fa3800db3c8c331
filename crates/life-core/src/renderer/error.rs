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

//! Defines the error type of the rendering subsystem.

use std::fmt;

/// An error raised by a [`RenderSystem`](super::RenderSystem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The backend could not be brought up (no adapter, no device, bad surface).
    InitializationFailed(String),
    /// The next swapchain image could not be acquired.
    SurfaceAcquisitionFailed(String),
    /// `render` or `resize` was called before `init`.
    NotInitialized,
    /// The frame does not match the size the render system was prepared for
    /// and the backing texture could not be recreated.
    FrameSizeMismatch {
        /// Dimensions the render system expected.
        expected: (u32, u32),
        /// Dimensions of the submitted frame.
        actual: (u32, u32),
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InitializationFailed(msg) => {
                write!(f, "Renderer initialization failed: {msg}")
            }
            RenderError::SurfaceAcquisitionFailed(msg) => {
                write!(f, "Failed to acquire surface texture: {msg}")
            }
            RenderError::NotInitialized => write!(f, "Render system is not initialized"),
            RenderError::FrameSizeMismatch { expected, actual } => write!(
                f,
                "Frame size mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
        }
    }
}

impl std::error::Error for RenderError {}
