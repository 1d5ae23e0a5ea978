//! Pointer interaction: dragging bars, clicking tracks and keeping the bars
//! visible while hovered. Area enter/leave drives the hover indicator even
//! on passive overlays.

use crate::animation::ScrollAnimation;
use crate::config::{Indicator, TrackClick};
use crate::event::{Event, EventResponse, MouseButton};
use crate::geometry::Axis;
use crate::host::ScrollHost;

use super::axis::scroll_offset;
use super::ScrollOverlay;

/// An active bar drag. Owned by the overlay from pointer-down until
/// pointer-up, so nothing from one drag survives into the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DragSession {
    axis: Axis,
    /// Pointer position minus bar offset at pointer-down
    start_offset: f32,
    /// Latest pointer position not yet written to the host
    pending: Option<f32>,
}

impl DragSession {
    pub(crate) fn axis(&self) -> Axis {
        self.axis
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H: ScrollHost> ScrollOverlay<H> {
    /// Whether a bar is being dragged
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Axis whose track is under the pointer
    pub fn hovered(&self) -> Option<Axis> {
        self.hovered
    }

    /// Start dragging the bar of `axis` from pointer position `pointer`
    /// (area coordinates along the axis). Returns false if the overlay is not
    /// interactive or the axis has no bar.
    pub fn begin_drag(&mut self, axis: Axis, pointer: f32) -> bool {
        if !self.config.interactive {
            return false;
        }
        let Some(state) = self.axis(axis) else {
            return false;
        };
        let start_offset = pointer - state.bar.offset;

        log::debug!("Dragging {} bar", axis);
        *self.animations.get_mut(axis) = None;
        self.hide_deadline = None;
        self.rearm_hide = false;
        self.drag = Some(DragSession {
            axis,
            start_offset,
            pending: None,
        });
        true
    }

    /// Record a pointer move during a drag. The scroll offset is written on
    /// the next frame; later moves before that frame replace earlier ones.
    pub fn drag_to(&mut self, pointer: f32) -> bool {
        match self.drag.as_mut() {
            Some(drag) => {
                drag.pending = Some(pointer);
                true
            }
            None => false,
        }
    }

    /// End the drag, if any. The hide timer restarts on the next frame
    /// unless the pointer rests on a track.
    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            log::debug!("Stopped dragging {} bar", drag.axis);
            if self.hovered.is_none() {
                self.rearm_hide = true;
            }
            if self.config.indicator == Indicator::Hover && !self.area_hovered {
                self.rearm_indicator = true;
            }
        }
    }

    /// Handle a click at `pointer` (area coordinates along the axis) on the
    /// track of `axis`. Clicks on the bar itself are ignored. Returns true if
    /// the click scrolled the host.
    pub fn track_click(&mut self, axis: Axis, pointer: f32) -> bool {
        if !self.config.interactive {
            return false;
        }
        let Some(state) = self.axis(axis) else {
            return false;
        };

        let along = pointer - state.track.rect.start(axis);
        let bar_start = state.bar.offset;
        let bar_size = state.bar.size;
        if along >= bar_start && along < bar_start + bar_size {
            return false;
        }

        let max_scroll = state.max_scroll_offset;
        let target = match self.config.track_click {
            TrackClick::Center => {
                scroll_offset(along - bar_size / 2.0, state.max_bar_offset, max_scroll)
            }
            TrackClick::Page => {
                let current = self
                    .animations
                    .get(axis)
                    .as_ref()
                    .map(ScrollAnimation::target)
                    .unwrap_or_else(|| self.host.scroll_offset(axis));
                let page = self.host.client_size().along(axis);
                if along <= bar_start {
                    (current - page).max(0.0)
                } else {
                    (current + page).min(max_scroll)
                }
            }
        };

        log::debug!("Track click on {} at {}px, scrolling to {}", axis, along, target);
        self.scroll_to(axis, target);
        true
    }

    /// Scroll the host to `target`, animated if configured
    fn scroll_to(&mut self, axis: Axis, target: f32) {
        match self.config.animation.clone() {
            Some(transition) => {
                let from = self.host.scroll_offset(axis);
                *self.animations.get_mut(axis) =
                    Some(ScrollAnimation::new(from, target, transition));
            }
            None => self.write_scroll(axis, target),
        }
    }

    /// Write the latest drag position to the host
    pub(super) fn apply_drag(&mut self) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let Some(pointer) = drag.pending.take() else {
            return;
        };
        let axis = drag.axis;
        let bar = pointer - drag.start_offset;
        let Some(state) = self.axes.get(axis).as_ref() else {
            return;
        };
        let target = scroll_offset(bar, state.max_bar_offset, state.max_scroll_offset);
        self.write_scroll(axis, target);
    }

    /// Dispatch a pointer event. Coordinates are relative to the area.
    pub fn event(&mut self, event: &Event) -> EventResponse {
        let response = self.dispatch(event);
        self.sync_visibility();
        response
    }

    fn dispatch(&mut self, event: &Event) -> EventResponse {
        match *event {
            Event::MouseEnter => {
                self.set_area_hovered(true);
                return EventResponse::Ignored;
            }
            // A drag keeps going outside the surface until the button is
            // released; only the hover ends here.
            Event::MouseLeave => {
                self.set_area_hovered(false);
                self.set_hovered(None);
                return EventResponse::Ignored;
            }
            _ => {}
        }

        if !self.config.interactive {
            return EventResponse::Ignored;
        }

        match *event {
            Event::MouseDown {
                x,
                y,
                button: MouseButton::Left,
            } => {
                for axis in Axis::ALL {
                    let Some(state) = self.axis(axis) else {
                        continue;
                    };
                    let pointer = axis.pick(x, y);
                    if state.bar_rect().contains(x, y) {
                        self.begin_drag(axis, pointer);
                        return EventResponse::Handled;
                    }
                    if state.track.rect.contains(x, y) {
                        self.track_click(axis, pointer);
                        return EventResponse::Handled;
                    }
                }
                EventResponse::Ignored
            }

            Event::MouseMove { x, y } => {
                self.set_hovered(self.track_at(x, y));
                match self.drag.as_ref().map(DragSession::axis) {
                    Some(axis) => {
                        self.drag_to(axis.pick(x, y));
                        EventResponse::Handled
                    }
                    None => EventResponse::Ignored,
                }
            }

            Event::MouseUp {
                x,
                y,
                button: MouseButton::Left,
            } => {
                if self.drag.is_none() {
                    return EventResponse::Ignored;
                }
                self.set_hovered(self.track_at(x, y));
                self.end_drag();
                EventResponse::Handled
            }

            // Tracks sit outside the area's scroll surface, so the wheel must
            // not reach whatever scrolls behind them.
            Event::Wheel { x, y, .. } => match self.track_at(x, y) {
                Some(_) => EventResponse::Handled,
                None => EventResponse::Ignored,
            },

            _ => EventResponse::Ignored,
        }
    }

    /// Axis whose track contains the point
    fn track_at(&self, x: f32, y: f32) -> Option<Axis> {
        Axis::ALL.into_iter().find(|axis| {
            self.axis(*axis)
                .is_some_and(|state| state.track.rect.contains(x, y))
        })
    }

    fn set_hovered(&mut self, hovered: Option<Axis>) {
        if self.hovered == hovered {
            return;
        }
        match (self.hovered, hovered) {
            (None, Some(_)) => {
                self.hide_deadline = None;
                self.rearm_hide = false;
            }
            (Some(_), None) if self.drag.is_none() => self.rearm_hide = true,
            _ => {}
        }
        self.hovered = hovered;
    }

    fn set_area_hovered(&mut self, hovered: bool) {
        if self.area_hovered == hovered {
            return;
        }
        self.area_hovered = hovered;
        if self.config.indicator != Indicator::Hover {
            return;
        }
        if hovered {
            self.indicator_deadline = None;
            self.rearm_indicator = false;
        } else if self.drag.is_none() {
            self.rearm_indicator = true;
        }
    }
}
