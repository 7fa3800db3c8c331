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

//! Command-line interface of the `life` binary.

use clap::Parser;
use life_data::{EdgeMode, Rule};
use life_sdk::LifeConfig;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "life",
    version,
    about = "Conway's Game of Life in a window",
    after_help = "Controls: Space pause, N step, R reset, C clear, +/- or wheel speed, \
                  left click toggles a cell, Escape quits."
)]
pub struct Cli {
    /// JSON configuration file. Flags below override its values.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Built-in seed pattern (see --list-patterns).
    #[arg(long, value_name = "NAME")]
    pub pattern: Option<String>,
    /// Plaintext (.cells) file to seed from. Takes precedence over --pattern.
    #[arg(long, value_name = "PATH")]
    pub pattern_file: Option<PathBuf>,
    /// Grid width in cells.
    #[arg(long)]
    pub width: Option<usize>,
    /// Grid height in cells.
    #[arg(long)]
    pub height: Option<usize>,
    /// Side of one cell in logical pixels.
    #[arg(long)]
    pub cell_size: Option<u32>,
    /// Milliseconds between generations.
    #[arg(long)]
    pub interval_ms: Option<u64>,
    /// Birth/survival rule, e.g. B3/S23 or B36/S23.
    #[arg(long)]
    pub rule: Option<Rule>,
    /// Join opposite edges so the grid becomes a torus.
    #[arg(long)]
    pub wrap: bool,
    /// Start with the simulation paused.
    #[arg(long)]
    pub paused: bool,
    /// Run this many generations without a window, then print the grid.
    #[arg(long, value_name = "GENERATIONS")]
    pub headless: Option<u64>,
    /// Print the built-in pattern names and exit.
    #[arg(long)]
    pub list_patterns: bool,
    /// Write the effective configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    pub write_config: Option<PathBuf>,
}

impl Cli {
    /// Layers the flags over `config`. Flags that were not given leave it untouched.
    pub fn apply_to(&self, config: &mut LifeConfig) {
        if let Some(pattern) = &self.pattern {
            config.simulation.pattern = pattern.clone();
            // A named pattern on the command line beats a file from the config.
            config.simulation.pattern_file = None;
        }
        if let Some(path) = &self.pattern_file {
            config.simulation.pattern_file = Some(path.clone());
        }
        if let Some(width) = self.width {
            config.grid.width = width;
        }
        if let Some(height) = self.height {
            config.grid.height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.window.cell_size = cell_size;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.simulation.interval_ms = interval_ms;
        }
        if let Some(rule) = self.rule {
            config.simulation.rule = rule;
        }
        if self.wrap {
            config.grid.edges = EdgeMode::Wrapping;
        }
        if self.paused {
            config.simulation.start_paused = true;
        }
    }

    /// Loads the config file if one was given, then applies the flags.
    pub fn effective_config(&self) -> anyhow::Result<LifeConfig> {
        let mut config = match &self.config {
            Some(path) => LifeConfig::from_file(path)?,
            None => LifeConfig::default(),
        };
        self.apply_to(&mut config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("life").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_flags_keep_defaults() {
        let config = parse(&[]).effective_config().unwrap();
        assert_eq!(config, LifeConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = parse(&[
            "--width", "20", "--height", "10", "--cell-size", "8", "--interval-ms", "50",
            "--rule", "B36/S23", "--wrap", "--paused", "--pattern", "lwss",
        ]);
        let mut config = LifeConfig::default();
        config.simulation.pattern_file = Some(PathBuf::from("from-config.cells"));
        cli.apply_to(&mut config);

        assert_eq!((config.grid.width, config.grid.height), (20, 10));
        assert_eq!(config.window.cell_size, 8);
        assert_eq!(config.simulation.interval_ms, 50);
        assert_eq!(config.simulation.rule.to_string(), "B36/S23");
        assert_eq!(config.grid.edges, EdgeMode::Wrapping);
        assert!(config.simulation.start_paused);
        assert_eq!(config.simulation.pattern, "lwss");
        assert_eq!(config.simulation.pattern_file, None);
    }

    #[test]
    fn test_invalid_rule_is_rejected_by_parser() {
        let args = ["life", "--rule", "B3S23"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_headless_takes_generation_count() {
        assert_eq!(parse(&["--headless", "30"]).headless, Some(30));
    }

    #[test]
    fn test_one_column_board_runs_headless() {
        let cli = parse(&["--width", "1", "--headless", "1"]);
        let config = cli.effective_config().unwrap();
        let simulation = life_sdk::run_headless(&config, 1).unwrap();
        assert_eq!(simulation.generation(), 1);
        assert_eq!(simulation.population(), 0);
    }
}
