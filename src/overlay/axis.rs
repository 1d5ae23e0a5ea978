//! Per-axis overlay elements and the ratio arithmetic behind them.

use crate::class_list::ClassList;
use crate::config::{ClassNames, TrackLayout};
use crate::geometry::{Axis, Rect, Size};

/// Length of the bar for a viewport of `client` over content of `scroll`,
/// clamped to `[min, track]`.
pub fn bar_size(client: f32, scroll: f32, track: f32, min: f32) -> f32 {
    let track = track.max(0.0);
    if scroll <= 0.0 || client <= 0.0 {
        return 0.0;
    }
    let size = (client * (client / scroll)).round();
    size.max(min).min(track)
}

/// Bar offset matching a scroll offset. Zero scroll range yields 0.
pub fn bar_offset(scroll: f32, max_scroll: f32, max_bar: f32) -> f32 {
    if max_scroll <= 0.0 || max_bar <= 0.0 {
        return 0.0;
    }
    let progress = (scroll / max_scroll).clamp(0.0, 1.0);
    (max_bar * progress).round()
}

/// Scroll offset matching a bar offset, the inverse of [`bar_offset`].
/// Zero bar travel yields 0.
pub fn scroll_offset(bar: f32, max_bar: f32, max_scroll: f32) -> f32 {
    if max_bar <= 0.0 || max_scroll <= 0.0 {
        return 0.0;
    }
    let bar = bar.clamp(0.0, max_bar);
    bar / max_bar * max_scroll
}

/// Track rectangle inside an area of `bounds` size.
///
/// Tracks hug the far edges: the y track runs down the right side, the x
/// track along the bottom. When both axes scroll the x track stops short of
/// the y track.
pub fn track_rect(axis: Axis, bounds: Size, layout: &TrackLayout, both: bool) -> Rect {
    let margin = layout.margin;
    let thickness = layout.thickness;

    match axis {
        Axis::Y => Rect::new(
            bounds.width - thickness - margin,
            margin,
            thickness,
            (bounds.height - margin * 2.0).max(0.0),
        ),
        Axis::X => {
            let right_padding = if both { thickness + margin } else { margin };
            Rect::new(
                margin,
                bounds.height - thickness - margin,
                (bounds.width - margin - right_padding).max(0.0),
                thickness,
            )
        }
    }
}

/// The channel a bar travels along
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub classes: ClassList,
    pub rect: Rect,
}

/// The indicator for the visible part of the content
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    axis: Axis,
    pub classes: ClassList,
    /// Length along the axis in px
    pub size: f32,
    /// Offset from the track start in px
    pub offset: f32,
    /// Rendered page label, if labels are enabled
    pub label: Option<String>,
}

impl Bar {
    /// Inline style for the bar, e.g. `width: 67px; left: 0px`
    pub fn style(&self) -> String {
        format!(
            "{}: {}px; {}: {}px",
            self.axis.size_property(),
            self.size,
            self.axis.position_property(),
            self.offset
        )
    }
}

/// Overlay state of one scrollable axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisState {
    axis: Axis,
    pub track: Track,
    pub bar: Bar,
    /// Distance the bar can travel inside the track
    pub max_bar_offset: f32,
    /// Distance the host can scroll
    pub max_scroll_offset: f32,
}

impl AxisState {
    pub(crate) fn new(axis: Axis, classes: &ClassNames) -> Self {
        let track_classes: ClassList = [classes.track(), classes.track_axis(axis)]
            .iter()
            .map(String::as_str)
            .collect();
        let bar_classes: ClassList = [classes.bar()].iter().map(String::as_str).collect();

        Self {
            axis,
            track: Track {
                classes: track_classes,
                rect: Rect::default(),
            },
            bar: Bar {
                axis,
                classes: bar_classes,
                size: 0.0,
                offset: 0.0,
                label: None,
            },
            max_bar_offset: 0.0,
            max_scroll_offset: 0.0,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Track length along the axis
    pub fn track_size(&self) -> f32 {
        self.track.rect.length(self.axis)
    }

    /// Bar rectangle in area coordinates
    pub fn bar_rect(&self) -> Rect {
        let track = self.track.rect;
        match self.axis {
            Axis::X => Rect::new(
                track.x + self.bar.offset,
                track.y,
                self.bar.size,
                track.height,
            ),
            Axis::Y => Rect::new(
                track.x,
                track.y + self.bar.offset,
                track.width,
                self.bar.size,
            ),
        }
    }

    /// Recompute bar length and travel bounds. Returns true if anything
    /// visible changed.
    pub(crate) fn measure(
        &mut self,
        client: Size,
        scroll: Size,
        layout: &TrackLayout,
        both: bool,
        min_bar_size: f32,
    ) -> bool {
        let axis = self.axis;
        let rect = track_rect(axis, client, layout, both);
        let client_len = client.along(axis);
        let scroll_len = scroll.along(axis);
        let size = bar_size(client_len, scroll_len, rect.length(axis), min_bar_size);
        let max_bar = (rect.length(axis) - size).max(0.0);
        let max_scroll = (scroll_len - client_len).max(0.0);

        let changed = self.track.rect != rect || self.bar.size != size;
        self.track.rect = rect;
        self.bar.size = size;
        self.max_bar_offset = max_bar;
        self.max_scroll_offset = max_scroll;
        changed
    }

    /// Move the bar to match a scroll offset. Returns true if it moved.
    pub(crate) fn position(&mut self, scroll: f32) -> bool {
        let offset = bar_offset(scroll, self.max_scroll_offset, self.max_bar_offset);
        if self.bar.offset == offset {
            return false;
        }
        self.bar.offset = offset;
        true
    }
}
