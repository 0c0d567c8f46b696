/// PointerInput - turns winit pointer events into scene-transform drags.
///
/// winit 0.30 carries no modifier or cursor state on button events, so the
/// adapter tracks both itself.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::ModifiersState;

/// A pointer gesture the renderer understands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A button went down at (x, y): new drag reference
    Down { x: f32, y: f32 },
    /// Pointer moved to (x, y) with a button held
    Drag { x: f32, y: f32, zoom: bool },
}

/// Tracks buttons, modifiers and cursor position across window events
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    position: Option<PhysicalPosition<f64>>,
    modifiers: ModifiersState,
    left: bool,
    right: bool,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one window event.
    ///
    /// Returns `None` for events that are not part of a drag gesture.
    pub fn window_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers_changed(modifiers.state());
                None
            }
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),
            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*state, *button),
            WindowEvent::CursorLeft { .. } | WindowEvent::Focused(false) => {
                self.left = false;
                self.right = false;
                None
            }
            _ => None,
        }
    }

    pub fn modifiers_changed(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Option<PointerEvent> {
        self.position = Some(position);
        if !self.is_dragging() {
            return None;
        }
        Some(PointerEvent::Drag {
            x: position.x as f32,
            y: position.y as f32,
            zoom: self.is_zoom(),
        })
    }

    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) -> Option<PointerEvent> {
        let pressed = state == ElementState::Pressed;
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Right => self.right = pressed,
            _ => return None,
        }

        if !pressed {
            return None;
        }
        // No cursor position yet means nothing to anchor the drag to
        let position = self.position?;
        Some(PointerEvent::Down {
            x: position.x as f32,
            y: position.y as f32,
        })
    }

    /// True while a drag button is held
    pub fn is_dragging(&self) -> bool {
        self.left || self.right
    }

    /// Zoom: right button, or left button with shift held
    pub fn is_zoom(&self) -> bool {
        self.right || (self.left && self.modifiers.shift_key())
    }
}

#[cfg(test)]
#[path = "pointer_tests.rs"]
mod tests;
