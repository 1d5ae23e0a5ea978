//! Synthetic scrollbar overlays for native scrolling elements.
//!
//! The native scrollbars of an element are pushed out of sight and replaced
//! by themeable track/bar elements that follow the native scroll position.
//! In interactive mode the bars can be dragged and the tracks clicked.
//!
//! The crate is headless: a backend implements [`host::ScrollHost`] for its
//! native element, forwards scroll notifications, pointer events, animation
//! frames and timer wakeups to a [`ScrollOverlay`], and renders the overlay's
//! element model (class lists and inline geometry).
//!
//! ```ignore
//! let container = Container::new(area).data("scrolling", "list");
//! let mut overlay = ScrollOverlay::new(container, OverlayBuilder::new().interactive(true))?;
//!
//! // in the event loop
//! overlay.on_scroll();
//! if overlay.needs_frame() {
//!     overlay.frame(Instant::now());
//! }
//! overlay.poll(Instant::now());
//! if !overlay.take_changes().is_empty() {
//!     render(&overlay);
//! }
//! ```

pub mod animation;
pub mod class_list;
pub mod config;
pub mod error;
pub mod event;
pub mod geometry;
pub mod host;
pub mod label;
pub mod overlay;

pub use error::{Error, Result};
pub use overlay::ScrollOverlay;

pub mod prelude {
    pub use crate::animation::{TimingFunction, Transition};
    pub use crate::class_list::ClassList;
    pub use crate::config::{
        AxisDetection, ClassNames, Indicator, OverlayBuilder, OverlayConfig, TrackClick,
        TrackLayout,
    };
    pub use crate::event::{Event, EventResponse, MouseButton};
    pub use crate::geometry::{Axis, PerAxis, Rect, Size};
    pub use crate::host::{Container, Overflow, ScrollHost};
    pub use crate::overlay::{AreaStyle, AxisState, Changes, ScrollOverlay};
    pub use crate::{Error, Result};
}
