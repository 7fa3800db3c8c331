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

//! Translation of `winit` window events into backend-agnostic input events.
//!
//! Only the handful of inputs the viewer reacts to survive the translation:
//! keys, the pointer position, mouse buttons and the scroll wheel.

use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

/// Pixels of a precise (touchpad) scroll that count as one wheel notch.
const PIXELS_PER_NOTCH: f64 = 40.0;

/// A user input event, independent of the windowing backend.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A physical key changed state. Auto-repeat presses are dropped.
    Key {
        /// The `winit` key code name, e.g. `"Space"` or `"KeyN"`.
        code: String,
        /// `true` on press, `false` on release.
        pressed: bool,
    },
    /// A mouse button changed state.
    Button {
        /// The button involved.
        button: MouseButton,
        /// `true` on press, `false` on release.
        pressed: bool,
    },
    /// The pointer moved, in physical pixels relative to the window's top-left corner.
    Pointer {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// The vertical wheel moved, in notches. Positive means away from the user.
    Scroll {
        /// Signed number of notches.
        notches: f32,
    },
}

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button.
    Secondary,
    /// The wheel button.
    Middle,
    /// Any other button, by backend code.
    Other(u16),
}

/// Converts a `winit` window event into an [`InputEvent`].
///
/// Returns `None` for everything that is not user input (resizes, focus changes,
/// redraw requests) and for inputs that carry no information, such as a key
/// without a known physical code or a zero scroll.
pub fn translate_winit_input(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            let PhysicalKey::Code(code) = event.physical_key else {
                return None;
            };
            let pressed = event.state == ElementState::Pressed;
            if pressed && event.repeat {
                return None;
            }
            Some(InputEvent::Key {
                code: format!("{code:?}"),
                pressed,
            })
        }
        WindowEvent::MouseInput { state, button, .. } => Some(InputEvent::Button {
            button: map_mouse_button(*button),
            pressed: *state == ElementState::Pressed,
        }),
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::Pointer {
            x: position.x,
            y: position.y,
        }),
        WindowEvent::MouseWheel { delta, .. } => {
            let notches = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y,
                MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_NOTCH) as f32,
            };
            (notches != 0.0).then_some(InputEvent::Scroll { notches })
        }
        _ => None,
    }
}

fn map_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Primary,
        WinitMouseButton::Right => MouseButton::Secondary,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(id) => MouseButton::Other(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::{PhysicalPosition, PhysicalSize};
    use winit::event::{DeviceId, TouchPhase};

    #[test]
    fn left_click_is_primary_press() {
        let event = WindowEvent::MouseInput {
            device_id: DeviceId::dummy(),
            state: ElementState::Pressed,
            button: WinitMouseButton::Left,
        };
        assert_eq!(
            translate_winit_input(&event),
            Some(InputEvent::Button {
                button: MouseButton::Primary,
                pressed: true
            })
        );
    }

    #[test]
    fn right_release_is_secondary() {
        let event = WindowEvent::MouseInput {
            device_id: DeviceId::dummy(),
            state: ElementState::Released,
            button: WinitMouseButton::Right,
        };
        assert_eq!(
            translate_winit_input(&event),
            Some(InputEvent::Button {
                button: MouseButton::Secondary,
                pressed: false
            })
        );
    }

    #[test]
    fn side_buttons_fold_into_other() {
        assert_eq!(map_mouse_button(WinitMouseButton::Back), MouseButton::Other(3));
        assert_eq!(map_mouse_button(WinitMouseButton::Forward), MouseButton::Other(4));
        assert_eq!(map_mouse_button(WinitMouseButton::Other(9)), MouseButton::Other(9));
    }

    #[test]
    fn cursor_position_is_kept_in_physical_pixels() {
        let event = WindowEvent::CursorMoved {
            device_id: DeviceId::dummy(),
            position: PhysicalPosition::new(42.5, 17.25),
        };
        assert_eq!(
            translate_winit_input(&event),
            Some(InputEvent::Pointer { x: 42.5, y: 17.25 })
        );
    }

    #[test]
    fn wheel_lines_and_pixels_become_notches() {
        let lines = WindowEvent::MouseWheel {
            device_id: DeviceId::dummy(),
            delta: MouseScrollDelta::LineDelta(0.0, -2.0),
            phase: TouchPhase::Moved,
        };
        assert_eq!(
            translate_winit_input(&lines),
            Some(InputEvent::Scroll { notches: -2.0 })
        );

        let pixels = WindowEvent::MouseWheel {
            device_id: DeviceId::dummy(),
            delta: MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 80.0)),
            phase: TouchPhase::Moved,
        };
        assert_eq!(
            translate_winit_input(&pixels),
            Some(InputEvent::Scroll { notches: 2.0 })
        );
    }

    #[test]
    fn horizontal_only_scroll_is_ignored() {
        let event = WindowEvent::MouseWheel {
            device_id: DeviceId::dummy(),
            delta: MouseScrollDelta::LineDelta(3.0, 0.0),
            phase: TouchPhase::Moved,
        };
        assert_eq!(translate_winit_input(&event), None);
    }

    #[test]
    fn window_management_events_are_not_input() {
        assert_eq!(
            translate_winit_input(&WindowEvent::Resized(PhysicalSize::new(64, 64))),
            None
        );
        assert_eq!(translate_winit_input(&WindowEvent::Focused(false)), None);
        assert_eq!(translate_winit_input(&WindowEvent::CloseRequested), None);
        assert_eq!(translate_winit_input(&WindowEvent::RedrawRequested), None);
    }
}
