//! winit adapter layer (feature `viewer`).
//!
//! Translates `winit` window events into the platform-agnostic
//! [`InputEvent`](crate::InputEvent) values the
//! [`ViewportController`](crate::ViewportController) consumes, and wraps
//! a winit window in the [`WindowControl`](crate::backend::WindowControl)
//! seam. A render backend drives the event loop itself; this module only
//! covers the conversions every backend needs.
//!
//! ```ignore
//! if let Some(input) = viewer::translate_event(&event) {
//!     controller.handle_event(input);
//! }
//! ```

use std::sync::Arc;

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::Window;

use crate::backend::WindowControl;
use crate::input::{InputEvent, Key};

impl TryFrom<KeyCode> for Key {
    type Error = ();

    /// Map a winit key code onto the viewport key set. Keys outside it
    /// are rejected so callers can drop them without a lookup table.
    fn try_from(code: KeyCode) -> Result<Self, Self::Error> {
        Ok(match code {
            KeyCode::KeyW => Self::KeyW,
            KeyCode::KeyA => Self::KeyA,
            KeyCode::KeyS => Self::KeyS,
            KeyCode::KeyD => Self::KeyD,
            KeyCode::KeyQ => Self::KeyQ,
            KeyCode::KeyE => Self::KeyE,
            KeyCode::KeyP => Self::KeyP,
            KeyCode::KeyZ => Self::KeyZ,
            KeyCode::KeyX => Self::KeyX,
            KeyCode::KeyL => Self::KeyL,
            KeyCode::KeyF => Self::KeyF,
            KeyCode::KeyT => Self::KeyT,
            KeyCode::Digit1 => Self::Digit1,
            KeyCode::Digit2 => Self::Digit2,
            KeyCode::Digit3 => Self::Digit3,
            KeyCode::Digit4 => Self::Digit4,
            KeyCode::ArrowLeft => Self::ArrowLeft,
            KeyCode::ArrowRight => Self::ArrowRight,
            KeyCode::ArrowUp => Self::ArrowUp,
            KeyCode::ArrowDown => Self::ArrowDown,
            KeyCode::PageUp => Self::PageUp,
            KeyCode::PageDown => Self::PageDown,
            KeyCode::Equal => Self::Equal,
            KeyCode::Minus => Self::Minus,
            KeyCode::Semicolon => Self::Semicolon,
            KeyCode::Quote => Self::Quote,
            KeyCode::ShiftLeft => Self::ShiftLeft,
            KeyCode::Escape => Self::Escape,
            _ => return Err(()),
        })
    }
}

/// Translate a winit window event into a viewport input event.
///
/// Returns `None` for events the controller has no use for (redraws,
/// focus changes, keys outside the viewport key set). Scroll deltas are
/// negated: winit reports wheel-up as positive, while the camera treats
/// positive deltas as zoom-widening.
#[must_use]
pub fn translate_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            Some(InputEvent::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            })
        }
        WindowEvent::MouseWheel { delta, .. } => {
            let scroll = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y,
                MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
            };
            Some(InputEvent::Scroll { delta: -scroll })
        }
        WindowEvent::ModifiersChanged(modifiers) => {
            Some(InputEvent::ModifiersChanged {
                shift: modifiers.state().shift_key(),
            })
        }
        WindowEvent::KeyboardInput { event, .. } => {
            let PhysicalKey::Code(code) = event.physical_key else {
                return None;
            };
            let key = Key::try_from(code).ok()?;
            Some(InputEvent::Key {
                key,
                pressed: event.state == ElementState::Pressed,
            })
        }
        _ => None,
    }
}

/// A winit window behind the [`WindowControl`] seam.
///
/// Winit has no direct "close" call on the window, so close requests are
/// latched here and the event loop polls
/// [`close_requested`](Self::close_requested) each frame.
pub struct ViewerWindow {
    window: Arc<Window>,
    close_requested: bool,
}

impl ViewerWindow {
    /// Wrap a winit window.
    #[must_use]
    pub fn new(window: Arc<Window>) -> Self {
        Self {
            window,
            close_requested: false,
        }
    }

    /// Whether a close was requested since construction.
    #[must_use]
    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// The wrapped window.
    #[must_use]
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }
}

impl WindowControl for ViewerWindow {
    fn request_close(&mut self) {
        self.close_requested = true;
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }
}
