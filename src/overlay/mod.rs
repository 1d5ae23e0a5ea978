//! The scrollbar overlay.
//!
//! A [`ScrollOverlay`] owns a [`ScrollHost`] and keeps an element model of
//! one track and bar per scrollable axis in sync with the host's geometry and
//! scroll offset. It never draws; a backend renders the model after each
//! callback, guided by [`ScrollOverlay::take_changes`].
//!
//! The overlay is driven from a single event loop:
//!
//! - [`update`](ScrollOverlay::update) after the host's content or size changes
//! - [`on_scroll`](ScrollOverlay::on_scroll) for each native scroll notification
//! - [`event`](ScrollOverlay::event) for pointer input in interactive mode
//! - [`frame`](ScrollOverlay::frame) once per animation frame while
//!   [`needs_frame`](ScrollOverlay::needs_frame) is true
//! - [`poll`](ScrollOverlay::poll) when [`next_deadline`](ScrollOverlay::next_deadline)
//!   has passed

mod axis;
mod interaction;

pub use axis::{bar_offset, bar_size, scroll_offset, track_rect, AxisState, Bar, Track};

use std::fmt;
use std::time::Instant;

use bitflags::bitflags;

use crate::animation::ScrollAnimation;
use crate::class_list::ClassList;
use crate::config::{AxisDetection, Indicator, OverlayBuilder, OverlayConfig};
use crate::error::{Error, Result};
use crate::geometry::{Axis, PerAxis};
use crate::host::{Container, Overflow, ScrollHost};
use crate::label::PageLabel;

use interaction::DragSession;

bitflags! {
    /// Parts of the element model that changed since the last
    /// [`ScrollOverlay::take_changes`]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Changes: u8 {
        /// A track (with its bar) was created or removed
        const TRACKS     = 0b000001;
        /// A bar was resized or moved, or a track was re-laid out
        const BARS       = 0b000010;
        /// Container, track or bar classes changed
        const CLASSES    = 0b000100;
        /// The gutter compensation of the area changed
        const AREA_STYLE = 0b001000;
        /// A page label changed
        const LABELS     = 0b010000;
        /// The tracks were shown or hidden
        const VISIBILITY = 0b100000;
    }
}

/// Inline style that pushes the native scrollbars out of sight
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AreaStyle {
    /// Measured native scrollbar sizes. `x` is the height of the horizontal
    /// scrollbar, `y` the width of the vertical one.
    pub gutter: PerAxis<f32>,
}

impl fmt::Display for AreaStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = (self.gutter.x, self.gutter.y);
        write!(
            f,
            "margin: 0 -{}px -{}px 0; padding: 0 {}px {}px 0",
            y, x, y, x
        )
    }
}

/// Synthetic scrollbars over a native scrolling element
pub struct ScrollOverlay<H: ScrollHost> {
    host: H,
    config: OverlayConfig,
    container_classes: ClassList,
    area_classes: ClassList,
    area_style: AreaStyle,
    axes: PerAxis<Option<AxisState>>,
    /// Offsets sampled by the last scroll notification
    scroll_position: PerAxis<f32>,
    /// A scroll frame is scheduled
    scroll_pending: bool,
    /// The hide timer should be armed on the next frame
    rearm_hide: bool,
    hide_deadline: Option<Instant>,
    drag: Option<DragSession>,
    /// Track under the pointer
    hovered: Option<Axis>,
    /// Pointer is inside the area
    area_hovered: bool,
    /// The hover indicator timer should be armed on the next frame
    rearm_indicator: bool,
    indicator_deadline: Option<Instant>,
    /// Visibility last reported through [`Changes::VISIBILITY`]
    visible: bool,
    animations: PerAxis<Option<ScrollAnimation>>,
    changes: Changes,
}

impl<H: ScrollHost> ScrollOverlay<H> {
    /// Attach an overlay to a container.
    ///
    /// Fails if the container has no scrolling area or a data attribute holds
    /// an unusable value.
    pub fn new(container: Container<H>, builder: OverlayBuilder) -> Result<Self> {
        let Container { dataset, area } = container;
        let host = area.ok_or(Error::MissingScrollArea)?;
        let config = builder.resolve(&dataset)?;
        Ok(Self::with_config(host, config))
    }

    /// Attach an overlay to a scrolling area with an already resolved
    /// configuration
    pub fn with_config(host: H, config: OverlayConfig) -> Self {
        let mut container_classes = ClassList::new();
        container_classes.add(config.classes.base());
        if config.interactive {
            container_classes.add(&config.classes.interactive());
        }
        let mut area_classes = ClassList::new();
        area_classes.add(&config.classes.area());

        log::debug!(
            "Attaching overlay (base class `{}`, interactive: {})",
            config.classes.base(),
            config.interactive
        );

        let mut overlay = Self {
            host,
            config,
            container_classes,
            area_classes,
            area_style: AreaStyle::default(),
            axes: PerAxis::default(),
            scroll_position: PerAxis::default(),
            scroll_pending: false,
            rearm_hide: false,
            hide_deadline: None,
            drag: None,
            hovered: None,
            area_hovered: false,
            rearm_indicator: false,
            indicator_deadline: None,
            visible: false,
            animations: PerAxis::default(),
            changes: Changes::CLASSES,
        };
        overlay.visible = overlay.bars_visible();
        overlay.update();
        overlay
    }

    /// Re-measure the host and bring the overlay in line with it.
    ///
    /// Creates or removes axes as scrollability changes, recomputes bar sizes
    /// and travel bounds and repositions the bars. Calling it again with
    /// unchanged geometry records no changes.
    pub fn update(&mut self) {
        self.hide_native_scrollbars();
        self.set_custom_scrollbars();
        self.move_scrollbars();
        self.update_labels();
    }

    /// Native scroll notification: sample the offsets and schedule one frame.
    ///
    /// Returns true if this call scheduled the frame, false if one was already
    /// pending.
    pub fn on_scroll(&mut self) -> bool {
        for axis in Axis::ALL {
            *self.scroll_position.get_mut(axis) = self.host.scroll_offset(axis);
        }
        if self.scroll_pending {
            return false;
        }
        self.scroll_pending = true;
        true
    }

    /// Animation frame callback
    pub fn frame(&mut self, now: Instant) {
        self.advance_animations(now);
        self.apply_drag();

        if self.scroll_pending {
            self.scroll_pending = false;
            let active = self.config.classes.active();
            if self.container_classes.add(&active) {
                self.changes |= Changes::CLASSES;
            }
            self.move_scrollbars();
            self.update_labels();
            // Hovering or dragging holds the timer; leaving or releasing re-arms it
            let idle = self.hovered.is_none() && self.drag.is_none();
            self.rearm_hide = idle;
            if !idle {
                self.hide_deadline = None;
            }
        }

        if self.rearm_hide {
            self.rearm_hide = false;
            self.hide_deadline = Some(now + self.config.hide_delay);
        }
        if self.rearm_indicator {
            self.rearm_indicator = false;
            self.indicator_deadline = Some(now + self.config.hide_delay);
        }
        self.sync_visibility();
    }

    /// Timer callback: removes the active class once the hide delay elapsed
    /// and hides hover indicators whose delay ran out
    pub fn poll(&mut self, now: Instant) {
        if self.hide_deadline.is_some_and(|deadline| now >= deadline) {
            self.hide_deadline = None;
            let active = self.config.classes.active();
            if self.container_classes.remove(&active) {
                log::trace!("Scrolling idle, hiding bars");
                self.changes |= Changes::CLASSES;
            }
        }
        if self.indicator_deadline.is_some_and(|deadline| now >= deadline) {
            self.indicator_deadline = None;
        }
        self.sync_visibility();
    }

    /// Whether [`frame`](Self::frame) has work to do
    pub fn needs_frame(&self) -> bool {
        self.scroll_pending
            || self.rearm_hide
            || self.rearm_indicator
            || self.drag.as_ref().is_some_and(DragSession::is_pending)
            || self.animations.x.is_some()
            || self.animations.y.is_some()
    }

    /// Earliest instant [`poll`](Self::poll) has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.hide_deadline, self.indicator_deadline) {
            (Some(hide), Some(indicator)) => Some(hide.min(indicator)),
            (hide, indicator) => hide.or(indicator),
        }
    }

    /// Drain the change flags accumulated since the last call
    pub fn take_changes(&mut self) -> Changes {
        std::mem::replace(&mut self.changes, Changes::empty())
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host. Call [`update`](Self::update) or
    /// [`on_scroll`](Self::on_scroll) after changing it.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Detach the overlay and hand the host back
    pub fn into_host(self) -> H {
        self.host
    }

    /// Overlay state of an axis, if it scrolls
    pub fn axis(&self, axis: Axis) -> Option<&AxisState> {
        self.axes.get(axis).as_ref()
    }

    /// Axes that currently have a bar
    pub fn axes(&self) -> impl Iterator<Item = &AxisState> {
        Axis::ALL.into_iter().filter_map(|axis| self.axis(axis))
    }

    pub fn container_classes(&self) -> &ClassList {
        &self.container_classes
    }

    pub fn area_classes(&self) -> &ClassList {
        &self.area_classes
    }

    pub fn area_style(&self) -> &AreaStyle {
        &self.area_style
    }

    /// Measured native scrollbar sizes
    pub fn gutter(&self) -> PerAxis<f32> {
        self.area_style.gutter
    }

    /// Offsets sampled by the last scroll notification
    pub fn scroll_position(&self) -> PerAxis<f32> {
        self.scroll_position
    }

    /// Rendered page label of an axis
    pub fn label(&self, axis: Axis) -> Option<&str> {
        self.axis(axis).and_then(|state| state.bar.label.as_deref())
    }

    /// Whether the active class is currently set
    pub fn is_active(&self) -> bool {
        self.container_classes.contains(&self.config.classes.active())
    }

    /// Whether a renderer should draw the tracks at all
    pub fn bars_visible(&self) -> bool {
        match self.config.indicator {
            Indicator::Always => true,
            Indicator::Scroll => self.is_active(),
            Indicator::Hover => {
                self.area_hovered
                    || self.drag.is_some()
                    || self.rearm_indicator
                    || self.indicator_deadline.is_some()
            }
        }
    }

    fn sync_visibility(&mut self) {
        let visible = self.bars_visible();
        if visible != self.visible {
            log::trace!("{} tracks", if visible { "Showing" } else { "Hiding" });
            self.visible = visible;
            self.changes |= Changes::VISIBILITY;
        }
    }

    fn hide_native_scrollbars(&mut self) {
        let offset = self.host.offset_size();
        let client = self.host.client_size();
        let gutter = PerAxis::new(
            (offset.height - client.height).max(0.0),
            (offset.width - client.width).max(0.0),
        );
        if self.area_style.gutter != gutter {
            log::debug!("Native gutter is {}x{}", gutter.y, gutter.x);
            self.area_style.gutter = gutter;
            self.changes |= Changes::AREA_STYLE;
        }
    }

    fn scrolls(&self, axis: Axis) -> bool {
        let client = self.host.client_size().along(axis);
        let scroll = self.host.scroll_size().along(axis);
        match self.config.detection {
            AxisDetection::Gutter => *self.area_style.gutter.get(axis) > 0.0 && scroll > client,
            AxisDetection::Overflow => {
                let overflow = self
                    .config
                    .overflow_override(axis)
                    .unwrap_or_else(|| self.host.overflow(axis));
                match overflow {
                    Overflow::Scroll => true,
                    Overflow::Auto => scroll > client,
                    Overflow::Hidden => false,
                }
            }
        }
    }

    fn set_custom_scrollbars(&mut self) {
        for axis in Axis::ALL {
            let scrolls = self.scrolls(axis);
            let slot = self.axes.get_mut(axis);
            match (slot.is_some(), scrolls) {
                (false, true) => {
                    log::debug!("Creating {} scrollbar", axis);
                    *slot = Some(AxisState::new(axis, &self.config.classes));
                    self.changes |= Changes::TRACKS;
                }
                (true, false) => {
                    log::debug!("Removing {} scrollbar", axis);
                    *slot = None;
                    *self.animations.get_mut(axis) = None;
                    if self.hovered == Some(axis) {
                        self.hovered = None;
                    }
                    if self.drag.as_ref().is_some_and(|drag| drag.axis() == axis) {
                        self.end_drag();
                    }
                    self.changes |= Changes::TRACKS;
                }
                _ => {}
            }
        }

        let both = self.axes.x.is_some() && self.axes.y.is_some();
        let both_class = self.config.classes.track_both();
        let client = self.host.client_size();
        let scroll = self.host.scroll_size();
        let layout = self.config.track;
        let min_bar_size = self.config.min_bar_size;

        for axis in Axis::ALL {
            if let Some(state) = self.axes.get_mut(axis) {
                if state.track.classes.set(&both_class, both) {
                    self.changes |= Changes::CLASSES;
                }
                if state.measure(client, scroll, &layout, both, min_bar_size) {
                    self.changes |= Changes::BARS;
                }
            }
        }
    }

    fn move_scrollbars(&mut self) {
        for axis in Axis::ALL {
            let scroll = self.host.scroll_offset(axis);
            if let Some(state) = self.axes.get_mut(axis) {
                if state.position(scroll) {
                    log::trace!("Moved {} bar to {}px", axis, state.bar.offset);
                    self.changes |= Changes::BARS;
                }
            }
        }
    }

    fn update_labels(&mut self) {
        let Some(template) = self.config.label.as_deref() else {
            return;
        };
        let client = self.host.client_size();
        for axis in Axis::ALL {
            let scroll = self.host.scroll_offset(axis);
            if let Some(state) = self.axes.get_mut(axis) {
                let label = PageLabel::compute(
                    scroll,
                    state.max_scroll_offset,
                    client.along(axis),
                    self.config.bigger_pages,
                )
                .render(template);
                if state.bar.label.as_deref() != Some(label.as_str()) {
                    state.bar.label = Some(label);
                    self.changes |= Changes::LABELS;
                }
            }
        }
    }

    fn advance_animations(&mut self, now: Instant) {
        for axis in Axis::ALL {
            let Some(animation) = self.animations.get_mut(axis) else {
                continue;
            };
            let (offset, finished) = animation.sample(now);
            if finished {
                *self.animations.get_mut(axis) = None;
            }
            self.write_scroll(axis, offset);
        }
    }

    /// Write a scroll offset to the host and treat it like a native scroll
    fn write_scroll(&mut self, axis: Axis, offset: f32) {
        self.host.set_scroll_offset(axis, offset);
        self.on_scroll();
    }
}

impl<H: ScrollHost + fmt::Debug> fmt::Debug for ScrollOverlay<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollOverlay")
            .field("host", &self.host)
            .field("config", &self.config)
            .field("axes", &self.axes)
            .field("active", &self.is_active())
            .finish()
    }
}
