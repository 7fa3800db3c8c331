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

//! Maps user input to simulation commands.

use life_infra::platform::input::{InputEvent, MouseButton};
use std::time::Duration;

/// Shortest tick interval reachable with the speed controls.
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);
/// Longest tick interval reachable with the speed controls.
pub const MAX_INTERVAL: Duration = Duration::from_millis(5_000);

/// Something the user asked the running simulation to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimCommand {
    /// Pause a running simulation or resume a paused one.
    TogglePause,
    /// Advance exactly one generation.
    Step,
    /// Restore the seed and go back to generation 0.
    Reset,
    /// Kill every cell.
    Clear,
    /// Halve the tick interval.
    SpeedUp,
    /// Double the tick interval.
    SlowDown,
    /// Flip the cell at the given grid coordinates.
    ToggleCell {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },
    /// Close the window and stop.
    Quit,
}

/// Scroll totals this close to a whole notch count as one.
const NOTCH_EPSILON: f32 = 1e-3;

/// Returns the interval one `SpeedUp` step below `interval`.
///
/// Never longer than `interval`, even when it is already below [`MIN_INTERVAL`].
pub fn faster(interval: Duration) -> Duration {
    (interval / 2).max(MIN_INTERVAL).min(interval)
}

/// Returns the interval one `SlowDown` step above `interval`.
///
/// Never shorter than `interval`, even when it is already above [`MAX_INTERVAL`].
pub fn slower(interval: Duration) -> Duration {
    interval.saturating_mul(2).min(MAX_INTERVAL).max(interval)
}

/// Converts a pointer position on the surface into the grid cell drawn there.
///
/// The grid is stretched over the whole surface, so the mapping is a plain
/// proportional scale. Returns `None` outside the surface or when either
/// size is zero.
pub fn surface_to_cell(
    position: (f64, f64),
    surface: (u32, u32),
    grid: (usize, usize),
) -> Option<(usize, usize)> {
    let (px, py) = position;
    let (sw, sh) = (f64::from(surface.0), f64::from(surface.1));
    if sw <= 0.0 || sh <= 0.0 || grid.0 == 0 || grid.1 == 0 {
        return None;
    }
    if !(0.0..sw).contains(&px) || !(0.0..sh).contains(&py) {
        return None;
    }
    let x = ((px / sw) * grid.0 as f64) as usize;
    let y = ((py / sh) * grid.1 as f64) as usize;
    Some((x.min(grid.0 - 1), y.min(grid.1 - 1)))
}

/// Stateful translation of [`InputEvent`]s into [`SimCommand`]s.
///
/// Keeps the last pointer position so clicks, which carry none, can be
/// resolved to a cell, and the fractional scroll not yet turned into a
/// speed change.
#[derive(Debug, Default)]
pub struct ControlMapper {
    cursor: Option<(f64, f64)>,
    scroll: f32,
}

impl ControlMapper {
    /// Creates a mapper with no known cursor position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer position in physical pixels.
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    /// Maps one input event. `surface` is the window's physical inner size and
    /// `grid` the board's dimensions in cells.
    pub fn map(
        &mut self,
        event: &InputEvent,
        surface: (u32, u32),
        grid: (usize, usize),
    ) -> Option<SimCommand> {
        match event {
            InputEvent::Key {
                code,
                pressed: true,
            } => map_key(code),
            InputEvent::Key { pressed: false, .. } => None,
            InputEvent::Pointer { x, y } => {
                self.cursor = Some((*x, *y));
                None
            }
            InputEvent::Button {
                button: MouseButton::Primary,
                pressed: true,
            } => {
                let (x, y) = surface_to_cell(self.cursor?, surface, grid)?;
                Some(SimCommand::ToggleCell { x, y })
            }
            InputEvent::Button { .. } => None,
            InputEvent::Scroll { notches } => self.accumulate_scroll(*notches),
        }
    }

    /// Adds `notches` to the pending scroll and emits a speed change once a
    /// whole notch has built up. The fractional rest is carried over; whole
    /// notches beyond the first in a single event are dropped.
    fn accumulate_scroll(&mut self, notches: f32) -> Option<SimCommand> {
        if self.scroll * notches < 0.0 {
            self.scroll = 0.0;
        }
        self.scroll += notches;
        if self.scroll.abs() < 1.0 - NOTCH_EPSILON {
            return None;
        }

        let command = if self.scroll > 0.0 {
            SimCommand::SpeedUp
        } else {
            SimCommand::SlowDown
        };
        let rest = (self.scroll - self.scroll.signum()).fract();
        self.scroll = if rest.abs() < NOTCH_EPSILON { 0.0 } else { rest };
        Some(command)
    }
}

fn map_key(code: &str) -> Option<SimCommand> {
    let command = match code {
        "Space" | "KeyP" => SimCommand::TogglePause,
        "KeyN" | "Period" => SimCommand::Step,
        "KeyR" => SimCommand::Reset,
        "KeyC" => SimCommand::Clear,
        "Equal" | "NumpadAdd" => SimCommand::SpeedUp,
        "Minus" | "NumpadSubtract" => SimCommand::SlowDown,
        "Escape" | "KeyQ" => SimCommand::Quit,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: &str) -> InputEvent {
        InputEvent::Key {
            code: code.to_string(),
            pressed: true,
        }
    }

    const SURFACE: (u32, u32) = (1600, 800);
    const GRID: (usize, usize) = (80, 40);

    #[test]
    fn test_keys_map_to_commands() {
        let mut mapper = ControlMapper::new();
        let cases = [
            ("Space", SimCommand::TogglePause),
            ("KeyN", SimCommand::Step),
            ("KeyR", SimCommand::Reset),
            ("KeyC", SimCommand::Clear),
            ("Equal", SimCommand::SpeedUp),
            ("NumpadAdd", SimCommand::SpeedUp),
            ("Minus", SimCommand::SlowDown),
            ("NumpadSubtract", SimCommand::SlowDown),
            ("Escape", SimCommand::Quit),
        ];
        for (code, expected) in cases {
            assert_eq!(mapper.map(&key(code), SURFACE, GRID), Some(expected), "{code}");
        }
        assert_eq!(mapper.map(&key("KeyZ"), SURFACE, GRID), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut mapper = ControlMapper::new();
        let release = InputEvent::Key {
            code: "Space".to_string(),
            pressed: false,
        };
        assert_eq!(mapper.map(&release, SURFACE, GRID), None);
    }

    #[test]
    fn test_click_toggles_cell_under_cursor() {
        let mut mapper = ControlMapper::new();
        let click = InputEvent::Button {
            button: MouseButton::Primary,
            pressed: true,
        };
        // No pointer position yet.
        assert_eq!(mapper.map(&click, SURFACE, GRID), None);

        mapper.map(&InputEvent::Pointer { x: 45.0, y: 799.0 }, SURFACE, GRID);
        assert_eq!(mapper.cursor(), Some((45.0, 799.0)));
        assert_eq!(
            mapper.map(&click, SURFACE, GRID),
            Some(SimCommand::ToggleCell { x: 2, y: 39 })
        );

        let right = InputEvent::Button {
            button: MouseButton::Secondary,
            pressed: true,
        };
        assert_eq!(mapper.map(&right, SURFACE, GRID), None);
    }

    fn scroll(mapper: &mut ControlMapper, notches: f32) -> Option<SimCommand> {
        mapper.map(&InputEvent::Scroll { notches }, SURFACE, GRID)
    }

    #[test]
    fn test_scroll_changes_speed() {
        let mut mapper = ControlMapper::new();
        assert_eq!(scroll(&mut mapper, 1.0), Some(SimCommand::SpeedUp));
        assert_eq!(scroll(&mut mapper, -1.0), Some(SimCommand::SlowDown));
        assert_eq!(scroll(&mut mapper, -3.0), Some(SimCommand::SlowDown));
        assert_eq!(scroll(&mut mapper, -0.5), None);
    }

    #[test]
    fn test_touchpad_scroll_needs_a_whole_notch() {
        // A 2 px touchpad delta is 0.05 of a notch.
        let mut mapper = ControlMapper::new();
        let commands: Vec<_> = (0..20).filter_map(|_| scroll(&mut mapper, 0.05)).collect();
        assert_eq!(commands, vec![SimCommand::SpeedUp]);

        let commands: Vec<_> = (0..10).filter_map(|_| scroll(&mut mapper, 0.15)).collect();
        assert_eq!(commands, vec![SimCommand::SpeedUp]);
    }

    #[test]
    fn test_scroll_reversal_drops_pending_notches() {
        let mut mapper = ControlMapper::new();
        assert_eq!(scroll(&mut mapper, 0.6), None);
        assert_eq!(scroll(&mut mapper, -0.6), None);
        assert_eq!(scroll(&mut mapper, -0.5), Some(SimCommand::SlowDown));
    }

    #[test]
    fn test_surface_to_cell_scales_with_window() {
        // A window resized to twice the size maps to the same cells.
        assert_eq!(surface_to_cell((39.9, 0.0), (1600, 800), GRID), Some((1, 0)));
        assert_eq!(surface_to_cell((79.8, 0.0), (3200, 1600), GRID), Some((1, 0)));
        assert_eq!(surface_to_cell((1599.9, 799.9), (1600, 800), GRID), Some((79, 39)));
        assert_eq!(surface_to_cell((1600.0, 10.0), (1600, 800), GRID), None);
        assert_eq!(surface_to_cell((-1.0, 10.0), (1600, 800), GRID), None);
        assert_eq!(surface_to_cell((1.0, 1.0), (0, 0), GRID), None);
    }

    #[test]
    fn test_interval_scaling_is_clamped() {
        assert_eq!(faster(Duration::from_millis(200)), Duration::from_millis(100));
        assert_eq!(slower(Duration::from_millis(200)), Duration::from_millis(400));
        assert_eq!(faster(Duration::from_millis(15)), MIN_INTERVAL);
        assert_eq!(slower(Duration::from_millis(4_000)), MAX_INTERVAL);
    }

    #[test]
    fn test_interval_scaling_never_reverses() {
        let short = Duration::from_millis(1);
        let long = Duration::from_secs(10);

        assert_eq!(faster(short), short);
        assert_eq!(slower(short), Duration::from_millis(2));
        assert_eq!(slower(long), long);
        assert_eq!(faster(long), MAX_INTERVAL);
        assert!(faster(long) < long);
    }
}
