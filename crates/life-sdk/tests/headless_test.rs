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

//! Integration tests for configuration files and headless runs.

use life_data::EdgeMode;
use life_sdk::{run_headless, LifeConfig};
use std::io::Write;

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("life.json");

    let mut config = LifeConfig::default();
    config.grid.width = 32;
    config.grid.edges = EdgeMode::Wrapping;
    config.simulation.rule = "B36/S23".parse().unwrap();
    config.simulation.start_paused = true;
    config.to_file(&path).unwrap();

    let loaded = LifeConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_malformed_config_file_names_the_path() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "{{ \"grid\": ").unwrap();

    let err = LifeConfig::from_file(file.path()).unwrap_err();
    let file_name = file.path().file_name().unwrap().to_string_lossy().into_owned();
    assert!(format!("{err:#}").contains(&file_name));
}

#[test]
fn test_headless_blinker_oscillates() {
    let mut config = LifeConfig::default();
    config.simulation.pattern = "blinker".to_string();
    config.simulation.origin = (5, 5);

    let odd = run_headless(&config, 1).unwrap();
    let mut cells: Vec<_> = odd.grid().live_cells().collect();
    cells.sort();
    assert_eq!(cells, vec![(6, 4), (6, 5), (6, 6)]);

    let even = run_headless(&config, 2).unwrap();
    assert_eq!(even.grid(), even.seed());
    assert_eq!(even.generation(), 2);
}

#[test]
fn test_headless_uses_pattern_file_over_builtin() {
    let mut file = tempfile::Builder::new().suffix(".cells").tempfile().unwrap();
    writeln!(file, "!Name: block\nOO\nOO").unwrap();

    let mut config = LifeConfig::default();
    config.simulation.pattern = "glider".to_string();
    config.simulation.pattern_file = Some(file.path().to_path_buf());

    let simulation = run_headless(&config, 50).unwrap();
    assert_eq!(simulation.population(), 4);
    assert_eq!(simulation.grid(), simulation.seed());
}

#[test]
fn test_wrapping_glider_survives_where_bounded_one_settles() {
    let mut config = LifeConfig::default();
    config.grid.width = 12;
    config.grid.height = 12;

    config.grid.edges = EdgeMode::Wrapping;
    let wrapped = run_headless(&config, 100).unwrap();
    assert_eq!(wrapped.population(), 5);

    config.grid.edges = EdgeMode::Bounded;
    let bounded = run_headless(&config, 100).unwrap();
    // Against the corner the glider collapses into a block.
    assert_eq!(bounded.population(), 4);
}
