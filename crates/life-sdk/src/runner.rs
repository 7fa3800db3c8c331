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

//! The windowed event loop and its headless counterpart.
//!
//! Input reaches the simulation as [`SimCommand`]s published on an
//! [`EventBus`]. Window input is one producer; any other source (a script,
//! a network peer, a test) can feed the same loop through a cloned
//! `commands.sender()`; its commands are applied the next time the loop
//! wakes.

use crate::config::LifeConfig;
use crate::controls::{self, ControlMapper, SimCommand};
use anyhow::{anyhow, Result};
use life_core::event::EventBus;
use life_core::platform::window::LifeWindow;
use life_core::renderer::{CellFrame, RenderSystem};
use life_core::TickClock;
use life_data::{rasterize, rasterize_into, Palette, Simulation};
use life_infra::platform::input::translate_winit_input;
use life_infra::platform::window::{WinitWindow, WinitWindowBuilder};
use life_infra::WgpuRenderSystem;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

/// Everything the event loop owns while the window is open.
struct LifeState {
    config: LifeConfig,
    simulation: Simulation,
    palette: Palette,
    frame: CellFrame,
    clock: TickClock,
    paused: bool,
    controls: ControlMapper,
    commands: EventBus<SimCommand>,
    window: Option<WinitWindow>,
    renderer: Option<Box<dyn RenderSystem>>,
    startup_error: Option<anyhow::Error>,
}

impl LifeState {
    fn new(config: LifeConfig, simulation: Simulation) -> Self {
        let palette = config.palette;
        let frame = rasterize(simulation.grid(), &palette);
        Self {
            clock: TickClock::new(config.interval(), Instant::now()),
            paused: config.simulation.start_paused,
            config,
            simulation,
            palette,
            frame,
            controls: ControlMapper::new(),
            commands: EventBus::new(),
            window: None,
            renderer: None,
            startup_error: None,
        }
    }

    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (width, height) = (
            u32::try_from(self.config.grid.width)?,
            u32::try_from(self.config.grid.height)?,
        );
        let window = WinitWindowBuilder::new()
            .with_title(self.config.window.title.clone())
            .with_grid(width, height)
            .with_cell_size(self.config.window.cell_size)
            .build(event_loop)?;

        let mut renderer: Box<dyn RenderSystem> = Box::new(WgpuRenderSystem::new());
        renderer
            .init(&window)
            .map_err(|e| anyhow!("failed to start the renderer: {e}"))?;
        if let Some(adapter) = renderer.adapter_name() {
            log::info!("Rendering on '{adapter}'.");
        }

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.refresh_title();
        Ok(())
    }

    fn refresh_title(&self) {
        if let Some(window) = &self.window {
            let title = if self.paused {
                format!("{} (paused)", self.config.window.title)
            } else {
                self.config.window.title.clone()
            };
            window.set_title(&title);
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn redraw(&mut self) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        rasterize_into(self.simulation.grid(), &self.palette, &mut self.frame);
        match renderer.render(&self.frame) {
            Ok(stats) => log::trace!(
                "Frame {} (generation {}) rendered in {:.3} ms.",
                stats.frame_number,
                self.simulation.generation(),
                stats.cpu_time_ms
            ),
            Err(e) => log::error!("Rendering error: {e}"),
        }
    }

    fn advance(&mut self, generations: u32) {
        let mut last = None;
        for _ in 0..generations {
            last = Some(self.simulation.step());
        }
        if let Some(report) = last {
            log::debug!(
                "Generation {}: {} alive (+{} -{}).",
                report.generation,
                report.population,
                report.births,
                report.deaths
            );
            self.request_redraw();
        }
    }

    /// Advances the generations the clock says are due at `now`, unless paused.
    fn tick(&mut self, now: Instant) {
        let due = self.clock.poll(now);
        if due > 0 && !self.paused {
            self.advance(due);
        }
    }

    /// How the event loop should wait after this iteration. A paused
    /// simulation has nothing scheduled, so it sleeps until the next event.
    fn control_flow(&self) -> ControlFlow {
        if self.paused {
            ControlFlow::Wait
        } else {
            ControlFlow::WaitUntil(self.clock.deadline())
        }
    }

    fn drain_commands(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        for command in self.commands.drain() {
            if self.apply(command, now) {
                event_loop.exit();
            }
        }
    }

    /// Applies one command. Returns `true` when the command asks to quit.
    fn apply(&mut self, command: SimCommand, now: Instant) -> bool {
        log::debug!("Command: {command:?}");
        match command {
            SimCommand::TogglePause => {
                self.paused = !self.paused;
                self.clock.reset(now);
                log::info!("Simulation {}.", if self.paused { "paused" } else { "resumed" });
                self.refresh_title();
            }
            SimCommand::Step => self.advance(1),
            SimCommand::Reset => {
                self.simulation.reset();
                self.clock.reset(now);
                self.request_redraw();
            }
            SimCommand::Clear => {
                self.simulation.clear();
                self.request_redraw();
            }
            SimCommand::SpeedUp | SimCommand::SlowDown => {
                let interval = if command == SimCommand::SpeedUp {
                    controls::faster(self.clock.interval())
                } else {
                    controls::slower(self.clock.interval())
                };
                self.clock.set_interval(interval, now);
                log::info!("Tick interval set to {} ms.", interval.as_millis());
            }
            SimCommand::ToggleCell { x, y } => match self.simulation.toggle(x, y) {
                Ok(alive) => {
                    log::debug!("Cell ({x}, {y}) is now {}.", if alive { "alive" } else { "dead" });
                    self.request_redraw();
                }
                Err(e) => log::warn!("Ignoring click: {e}"),
            },
            SimCommand::Quit => {
                log::info!("Quit requested, exiting event loop...");
                return true;
            }
        }
        false
    }
}

impl Drop for LifeState {
    fn drop(&mut self) {
        log::info!(
            "Stopping at generation {} with {} live cells.",
            self.simulation.generation(),
            self.simulation.population()
        );
        // The surface borrows the native window, so the renderer goes first.
        if let Some(mut renderer) = self.renderer.take() {
            renderer.shutdown();
        }
        self.window = None;
    }
}

impl ApplicationHandler for LifeState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        log::info!("Application resumed. Opening window...");
        if let Err(e) = self.open_window(event_loop) {
            log::error!("Startup failed: {e:#}");
            self.startup_error = Some(e);
            event_loop.exit();
            return;
        }
        // The seed stays on screen for one full interval.
        self.clock.reset(Instant::now());
        self.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.as_ref() else {
            return;
        };
        if !window.is(id) {
            return;
        }
        let surface = window.inner_size();

        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed, exiting event loop...");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    log::debug!("Window resized to: {}x{}", size.width, size.height);
                    renderer.resize(size.width, size.height);
                }
                self.request_redraw();
            }
            WindowEvent::RedrawRequested => self.redraw(),
            other => {
                if let Some(input) = translate_winit_input(&other) {
                    let grid = (
                        self.simulation.grid().width(),
                        self.simulation.grid().height(),
                    );
                    if let Some(command) = self.controls.map(&input, surface, grid) {
                        self.commands.publish(command);
                    }
                }
            }
        }

        self.drain_commands(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            return;
        }
        self.drain_commands(event_loop);
        self.tick(Instant::now());
        event_loop.set_control_flow(self.control_flow());
    }
}

/// The public entry point for the windowed viewer.
pub struct LifeApp;

impl LifeApp {
    /// Opens the window and runs the simulation until the window is closed.
    ///
    /// Blocks the calling thread, which must be the main thread on most platforms.
    pub fn run(config: LifeConfig) -> Result<()> {
        log::info!("Game of Life: Starting...");
        let simulation = config.build_simulation()?;
        let event_loop = EventLoop::new()?;

        let mut state = LifeState::new(config, simulation);
        event_loop.run_app(&mut state)?;

        match state.startup_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Runs `generations` generations without opening a window and returns the
/// resulting simulation.
pub fn run_headless(config: &LifeConfig, generations: u64) -> Result<Simulation> {
    let mut simulation = config.build_simulation()?;
    log::info!("Running {generations} generations headless...");
    if let Some(report) = simulation.run(generations) {
        log::info!(
            "Generation {}: {} alive, {} born and {} died in the last step.",
            report.generation,
            report.population,
            report.births,
            report.deaths
        );
    }
    Ok(simulation)
}
