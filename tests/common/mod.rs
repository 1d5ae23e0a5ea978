#![allow(dead_code)]

use scrolling::prelude::*;

/// Width of the native scrollbars the mock pretends to reserve
pub const NATIVE_BAR: f32 = 15.0;

/// A scrolling area with fixed native scrollbars, like a browser element
/// with `overflow: auto`.
#[derive(Debug, Clone)]
pub struct MockArea {
    pub client: Size,
    pub scroll: Size,
    pub offset: PerAxis<f32>,
    pub overflow: PerAxis<Overflow>,
    pub writes: Vec<(Axis, f32)>,
}

impl MockArea {
    pub fn new(client: Size, scroll: Size) -> Self {
        Self {
            client,
            scroll,
            offset: PerAxis::default(),
            overflow: PerAxis::new(Overflow::Auto, Overflow::Auto),
            writes: Vec::new(),
        }
    }

    pub fn max_scroll(&self, axis: Axis) -> f32 {
        (self.scroll.along(axis) - self.client.along(axis)).max(0.0)
    }

    /// Scroll natively, as the user's wheel would
    pub fn scroll_natively(&mut self, axis: Axis, offset: f32) {
        *self.offset.get_mut(axis) = offset.clamp(0.0, self.max_scroll(axis));
    }
}

impl ScrollHost for MockArea {
    fn offset_size(&self) -> Size {
        let vertical_bar = if self.scroll.height > self.client.height {
            NATIVE_BAR
        } else {
            0.0
        };
        let horizontal_bar = if self.scroll.width > self.client.width {
            NATIVE_BAR
        } else {
            0.0
        };
        Size::new(
            self.client.width + vertical_bar,
            self.client.height + horizontal_bar,
        )
    }

    fn client_size(&self) -> Size {
        self.client
    }

    fn scroll_size(&self) -> Size {
        self.scroll
    }

    fn scroll_offset(&self, axis: Axis) -> f32 {
        *self.offset.get(axis)
    }

    fn set_scroll_offset(&mut self, axis: Axis, offset: f32) {
        self.writes.push((axis, offset));
        self.scroll_natively(axis, offset);
    }

    fn overflow(&self, axis: Axis) -> Overflow {
        *self.overflow.get(axis)
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn overlay(client: Size, scroll: Size, builder: OverlayBuilder) -> ScrollOverlay<MockArea> {
    init_logger();
    ScrollOverlay::new(Container::new(MockArea::new(client, scroll)), builder)
        .expect("container has an area")
}
