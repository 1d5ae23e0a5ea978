//! Pointer input delivered to an interactive overlay.
//!
//! Coordinates are relative to the scrolling area's top-left corner, the same
//! space the overlay lays its tracks out in.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Mouse/pointer moved
    MouseMove { x: f32, y: f32 },
    /// Mouse button pressed
    MouseDown { x: f32, y: f32, button: MouseButton },
    /// Mouse button released, wherever the pointer is
    MouseUp { x: f32, y: f32, button: MouseButton },
    /// Wheel or touchpad scroll over the surface
    Wheel {
        x: f32,
        y: f32,
        delta_x: f32,
        delta_y: f32,
    },
    /// Mouse/pointer entered the surface
    MouseEnter,
    /// Mouse/pointer left the surface
    MouseLeave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

impl Event {
    /// Get the coordinates from this event, if any
    pub fn coords(&self) -> Option<(f32, f32)> {
        match self {
            Event::MouseMove { x, y } => Some((*x, *y)),
            Event::MouseDown { x, y, .. } => Some((*x, *y)),
            Event::MouseUp { x, y, .. } => Some((*x, *y)),
            Event::Wheel { x, y, .. } => Some((*x, *y)),
            Event::MouseEnter | Event::MouseLeave => None,
        }
    }
}
