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

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use life_sdk::{run_headless, LifeApp};

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("naga", log::LevelFilter::Warn)
        .init();

    let cli = Cli::parse();

    if cli.list_patterns {
        for name in life_data::pattern::builtin_names() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = cli.effective_config()?;

    if let Some(path) = &cli.write_config {
        config.validate()?;
        config.to_file(path)?;
        log::info!("Configuration written to '{}'.", path.display());
        return Ok(());
    }

    match cli.headless {
        Some(generations) => {
            let simulation = run_headless(&config, generations)?;
            print!("{}", simulation.grid().to_plaintext());
            println!(
                "generation {}: {} live cells on a {}x{} {:?} grid, rule {}",
                simulation.generation(),
                simulation.population(),
                simulation.grid().width(),
                simulation.grid().height(),
                simulation.edges(),
                simulation.rule()
            );
            Ok(())
        }
        None => LifeApp::run(config),
    }
}
