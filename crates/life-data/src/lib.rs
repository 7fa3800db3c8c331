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

//! # Life Data
//!
//! The simulation itself: a fixed-size [`Grid`] of cells, the birth/survival
//! [`Rule`] applied to it, seed [`Pattern`]s, the double-buffered
//! [`Simulation`] stepper, and the rasterisation of a grid into a
//! [`CellFrame`](life_core::renderer::CellFrame).

#![warn(missing_docs)]

pub mod grid;
pub mod pattern;
pub mod render;
pub mod rule;
pub mod simulation;

pub use grid::{EdgeMode, Grid, GridError};
pub use pattern::{Pattern, PatternError};
pub use render::{rasterize, rasterize_into, Palette};
pub use rule::{Rule, RuleParseError};
pub use simulation::{Simulation, StepReport};
