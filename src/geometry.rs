//! Geometry primitives shared by the overlay and its hosts.

use std::fmt;

/// Axis along which an overlay bar travels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Horizontal scrolling (bar moves left/right)
    X,
    /// Vertical scrolling (bar moves up/down)
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Pick the component of a pair that belongs to this axis
    pub fn pick(self, x: f32, y: f32) -> f32 {
        match self {
            Axis::X => x,
            Axis::Y => y,
        }
    }

    /// Inline style property holding the bar offset
    pub fn position_property(self) -> &'static str {
        match self {
            Axis::X => "left",
            Axis::Y => "top",
        }
    }

    /// Inline style property holding the bar length
    pub fn size_property(self) -> &'static str {
        match self {
            Axis::X => "width",
            Axis::Y => "height",
        }
    }

    /// Suffix used for axis specific classes
    pub fn suffix(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn along(&self, axis: Axis) -> f32 {
        axis.pick(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Start coordinate along the given axis
    pub fn start(&self, axis: Axis) -> f32 {
        axis.pick(self.x, self.y)
    }

    /// Extent along the given axis
    pub fn length(&self, axis: Axis) -> f32 {
        axis.pick(self.width, self.height)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// A value stored once per axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PerAxis<T> {
    pub x: T,
    pub y: T,
}

impl<T> PerAxis<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    pub fn get_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}
