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

//! # Life SDK
//!
//! Ties the workspace together: a JSON [`LifeConfig`], the keyboard and
//! mouse [`controls`], and the [`LifeApp`] runner that owns the event loop.
//!
//! ```no_run
//! use life_sdk::{LifeApp, LifeConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     LifeApp::run(LifeConfig::default())
//! }
//! ```

pub mod config;
pub mod controls;
pub mod runner;

pub use config::LifeConfig;
pub use controls::{ControlMapper, SimCommand};
pub use runner::{run_headless, LifeApp};
