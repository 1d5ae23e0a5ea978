//! Interface to the native scrolling element an overlay is attached to.

use std::collections::HashMap;

use crate::geometry::{Axis, Size};

/// Computed overflow behaviour of the native element on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Scrolls only when content overflows (default)
    #[default]
    Auto,
    /// Always scrollable
    Scroll,
    /// Never scrollable
    Hidden,
}

impl Overflow {
    /// Parse a CSS overflow keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim() {
            "auto" => Some(Overflow::Auto),
            "scroll" => Some(Overflow::Scroll),
            "hidden" => Some(Overflow::Hidden),
            _ => None,
        }
    }
}

/// The native element whose content scrolls.
///
/// Implemented by a backend (browser binding, GPU toolkit, test mock). The
/// overlay only reads geometry from it and writes scroll offsets back; it never
/// changes the element's size or content.
pub trait ScrollHost {
    /// Outer size, including space reserved for native scrollbars
    fn offset_size(&self) -> Size;

    /// Visible size, excluding native scrollbars
    fn client_size(&self) -> Size;

    /// Total size of the scrollable content
    fn scroll_size(&self) -> Size;

    /// Current scroll offset along an axis
    fn scroll_offset(&self, axis: Axis) -> f32;

    /// Scroll to the given offset along an axis
    fn set_scroll_offset(&mut self, axis: Axis, offset: f32);

    /// Computed overflow style along an axis
    fn overflow(&self, _axis: Axis) -> Overflow {
        Overflow::Auto
    }
}

/// An element prepared for an overlay: its data attributes and the
/// designated scrollable child.
#[derive(Debug, Clone, Default)]
pub struct Container<H> {
    /// Data attributes, keyed without the `data-` prefix (`scrolling`,
    /// `scrolling-interactive`, `scrolling-hide-delay`)
    pub dataset: HashMap<String, String>,
    /// The scrolling area, if the markup has one
    pub area: Option<H>,
}

impl<H> Container<H> {
    pub fn new(area: H) -> Self {
        Self {
            dataset: HashMap::new(),
            area: Some(area),
        }
    }

    /// A container without a scrolling area
    pub fn empty() -> Self {
        Self {
            dataset: HashMap::new(),
            area: None,
        }
    }

    /// Set a data attribute
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.dataset.insert(key.into(), value.into());
        self
    }
}
