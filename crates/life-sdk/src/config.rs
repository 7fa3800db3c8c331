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

//! JSON configuration of a Game of Life session.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. `{}` is a valid configuration that reproduces the classic
//! 80x40 board with one glider.

use anyhow::{bail, Context, Result};
use life_data::{EdgeMode, Grid, Palette, Pattern, Rule, Simulation};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Largest window side, in logical pixels, a configuration may request.
pub const MAX_WINDOW_SIDE: u32 = 16_384;

/// Window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title shown in the window decoration.
    pub title: String,
    /// Side of one cell, in logical pixels.
    pub cell_size: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Game of Life".to_string(),
            cell_size: 20,
        }
    }
}

/// Board settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Whether opposite borders are joined.
    pub edges: EdgeMode,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 40,
            edges: EdgeMode::Bounded,
        }
    }
}

/// Evolution settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Time between generations, in milliseconds.
    pub interval_ms: u64,
    /// Birth/survival rule in B/S notation.
    pub rule: Rule,
    /// Name of a built-in seed pattern. Ignored when `pattern_file` is set.
    pub pattern: String,
    /// Plaintext pattern file to seed from.
    pub pattern_file: Option<PathBuf>,
    /// Grid cell that receives the pattern's top-left corner.
    pub origin: (usize, usize),
    /// Open the window with the simulation paused.
    pub start_paused: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            interval_ms: 200,
            rule: Rule::CONWAY,
            pattern: "glider".to_string(),
            pattern_file: None,
            origin: (1, 1),
            start_paused: false,
        }
    }
}

/// Complete session configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Window settings.
    pub window: WindowConfig,
    /// Board settings.
    pub grid: GridConfig,
    /// Evolution settings.
    pub simulation: SimulationConfig,
    /// Cell colours.
    pub palette: Palette,
}

impl LifeConfig {
    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load configuration from JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("invalid config file '{}'", path.display()))
    }

    /// Save configuration to JSON file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write config file '{}'", path.display()))?;
        Ok(())
    }

    /// Checks the values serde cannot: sizes and interval.
    ///
    /// The seed origin is not checked. Cells stamped outside the grid are clipped.
    pub fn validate(&self) -> Result<()> {
        let GridConfig { width, height, .. } = self.grid;
        if width == 0 || height == 0 {
            bail!("grid dimensions must be non-zero, got {width}x{height}");
        }
        if self.window.cell_size == 0 {
            bail!("cell_size must be at least 1 pixel");
        }
        let (window_width, window_height) = self.window_size();
        if window_width > MAX_WINDOW_SIDE || window_height > MAX_WINDOW_SIDE {
            bail!(
                "window of {window_width}x{window_height} exceeds {MAX_WINDOW_SIDE} pixels per side; \
                 lower cell_size or the grid dimensions"
            );
        }
        if self.simulation.interval_ms == 0 {
            bail!("interval_ms must be at least 1");
        }
        Ok(())
    }

    /// Window inner size in logical pixels: one `cell_size` square per cell.
    pub fn window_size(&self) -> (u32, u32) {
        let side = |cells: usize| {
            u32::try_from(cells)
                .unwrap_or(u32::MAX)
                .saturating_mul(self.window.cell_size)
        };
        (side(self.grid.width), side(self.grid.height))
    }

    /// Time between generations.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.simulation.interval_ms)
    }

    /// Resolves the seed pattern: the pattern file when set, the built-in otherwise.
    pub fn load_pattern(&self) -> Result<Pattern> {
        let pattern = match &self.simulation.pattern_file {
            Some(path) => Pattern::load(path)?,
            None => Pattern::builtin(&self.simulation.pattern)?,
        };
        Ok(pattern)
    }

    /// Validates the configuration and builds a seeded simulation at generation 0.
    pub fn build_simulation(&self) -> Result<Simulation> {
        self.validate()?;
        let pattern = self.load_pattern()?;

        let mut grid = Grid::new(self.grid.width, self.grid.height)?;
        let placed = grid.stamp(&pattern, self.simulation.origin);
        log::info!(
            "Seeded '{}' at {:?}: {} live cells.",
            pattern.name(),
            self.simulation.origin,
            placed
        );

        Ok(Simulation::new(
            grid,
            self.simulation.rule,
            self.grid.edges,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_board() {
        let config = LifeConfig::default();
        assert_eq!(config.window.title, "Game of Life");
        assert_eq!((config.grid.width, config.grid.height), (80, 40));
        assert_eq!(config.window_size(), (1600, 800));
        assert_eq!(config.interval(), Duration::from_millis(200));
        assert_eq!(config.simulation.rule, Rule::CONWAY);
        assert_eq!(config.grid.edges, EdgeMode::Bounded);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(LifeConfig::from_json("{}").unwrap(), LifeConfig::default());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = LifeConfig::from_json(
            r##"{
                "grid": { "width": 20, "edges": "wrapping" },
                "simulation": { "rule": "B36/S23", "pattern": "blinker" },
                "palette": { "alive": "#ff0000" }
            }"##,
        )
        .unwrap();

        assert_eq!(config.grid.width, 20);
        assert_eq!(config.grid.height, 40);
        assert_eq!(config.grid.edges, EdgeMode::Wrapping);
        assert_eq!(config.simulation.rule.to_string(), "B36/S23");
        assert_eq!(config.simulation.interval_ms, 200);
        assert_eq!(config.palette.alive.to_hex(), "#ff0000ff");
        assert_eq!(config.palette.dead_odd, Palette::default().dead_odd);
    }

    #[test]
    fn test_bad_rule_is_a_parse_error() {
        assert!(LifeConfig::from_json(r#"{ "simulation": { "rule": "B9/S2" } }"#).is_err());
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let mut config = LifeConfig::default();
        config.grid.height = 0;
        assert!(config.validate().is_err());

        let mut config = LifeConfig::default();
        config.window.cell_size = 0;
        assert!(config.validate().is_err());

        let mut config = LifeConfig::default();
        config.simulation.interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = LifeConfig::default();
        config.window.cell_size = 1000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_build_simulation_seeds_glider() {
        let simulation = LifeConfig::default().build_simulation().unwrap();
        let mut cells: Vec<_> = simulation.grid().live_cells().collect();
        cells.sort_by_key(|&(x, y)| (y, x));
        assert_eq!(cells, vec![(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);
        assert_eq!(simulation.generation(), 0);
    }

    #[test]
    fn test_one_cell_grid_builds_with_clipped_seed() {
        let mut config = LifeConfig::default();
        config.grid.width = 1;
        config.grid.height = 1;
        assert!(config.validate().is_ok());
        let simulation = config.build_simulation().unwrap();
        assert_eq!(simulation.population(), 0);

        config.simulation.origin = (usize::MAX, usize::MAX);
        assert_eq!(config.build_simulation().unwrap().population(), 0);
    }

    #[test]
    fn test_unknown_builtin_fails_to_build() {
        let mut config = LifeConfig::default();
        config.simulation.pattern = "spaceship-of-theseus".to_string();
        let err = config.build_simulation().unwrap_err();
        assert!(err.to_string().contains("spaceship-of-theseus"));
    }
}
